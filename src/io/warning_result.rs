/// An enum acting like a `Result`, but producing warnings instead of errors.
///
/// There is no error case; a value is always present, possibly along with
/// warnings raised while it was computed.
pub enum WarningResult<T, W> {
    Ok(T),
    Warned(T, Vec<W>),
}

impl<T, W> WarningResult<T, W> {
    /// Returns the underlying value, handing the warnings (if any) to the
    /// provided callback.
    pub fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        match self {
            WarningResult::Ok(value) => value,
            WarningResult::Warned(value, warnings) => {
                f(warnings);
                value
            }
        }
    }

    /// Zips two `WarningResult`, pairing the values and concatenating the
    /// warning lists.
    ///
    /// The result is `Ok` iff both operands were.
    pub fn zip<U>(self, other: WarningResult<U, W>) -> WarningResult<(T, U), W> {
        let (t, mut warnings) = self.into_parts();
        let (u, other_warnings) = other.into_parts();
        warnings.extend(other_warnings);
        if warnings.is_empty() {
            WarningResult::Ok((t, u))
        } else {
            WarningResult::Warned((t, u), warnings)
        }
    }

    fn into_parts(self) -> (T, Vec<W>) {
        match self {
            WarningResult::Ok(value) => (value, vec![]),
            WarningResult::Warned(value, warnings) => (value, warnings),
        }
    }
}
