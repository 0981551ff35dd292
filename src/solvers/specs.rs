use crate::aa::{Argument, LabelType};
use anyhow::Result;

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// In case an extension is found, it is returned as a vector of arguments.
    ///
    /// An error is returned when a computation budget is exhausted.
    fn compute_one_extension(&mut self) -> Result<Option<Vec<&Argument<T>>>>;
}

/// A trait for solvers able to compute the whole set of extensions.
pub trait ExtensionSetComputer<T>
where
    T: LabelType,
{
    /// Computes the set of extensions.
    ///
    /// The extensions are returned in no meaningful order.
    ///
    /// An error is returned when a computation budget is exhausted.
    fn compute_extensions(&mut self) -> Result<Vec<Vec<&Argument<T>>>>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool>;

    /// Checks the credulous acceptance of an argument, and provides a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool>;

    /// Checks the skeptical acceptance of an argument, and provides a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)>;
}
