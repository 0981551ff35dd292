use super::ResponseWriter;
use crate::aa::{Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for responses to argumentation problems, following the Aspartix style.
///
/// Extensions are written as the comma-separated list of their argument
/// labels, enclosed in square brackets.
/// Acceptance statuses are written as `YES` and `NO`, and the absence of an
/// extension as `NO`.
///
/// # Example
///
/// ```
/// # use rhetor::aa::{Argument, LabelType};
/// # use rhetor::io::{AspartixWriter, ResponseWriter};
/// # use anyhow::Result;
/// fn write_extension_to_stdout<T: LabelType>(extension: &[&Argument<T>]) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_single_extension(&mut std::io::stdout(), extension)
/// }
/// # write_extension_to_stdout(&[] as &[&Argument<String>]);
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        let labels = extension
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>()
            .join(",");
        writeln!(writer, "[{}]", labels).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&AspartixWriter, &mut dyn std::io::Write),
    {
        let mut buffer = Vec::new();
        f(&AspartixWriter::default(), &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_single_extension() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let out = written(|w, buf| {
            w.write_single_extension(buf, &args.iter().collect::<Vec<&Argument<&str>>>())
                .unwrap()
        });
        assert_eq!("[a,b,c]\n", out);
    }

    #[test]
    fn test_write_extension_with_numeric_labels() {
        let args = ArgumentSet::new_with_labels(&[1_usize, 2, 3]);
        let out = written(|w, buf| {
            w.write_single_extension(buf, &args.iter().collect::<Vec<&Argument<usize>>>())
                .unwrap()
        });
        assert_eq!("[1,2,3]\n", out);
    }

    #[test]
    fn test_write_empty_extension() {
        let out = written(|w, buf| {
            w.write_single_extension(buf, &[] as &[&Argument<String>])
                .unwrap()
        });
        assert_eq!("[]\n", out);
    }

    #[test]
    fn test_write_no_extension() {
        let out = written(|w, buf| {
            ResponseWriter::<String>::write_no_extension(w, buf).unwrap()
        });
        assert_eq!("NO\n", out);
    }

    #[test]
    fn test_write_acceptance_status() {
        let yes = written(|w, buf| {
            ResponseWriter::<String>::write_acceptance_status(w, buf, true).unwrap()
        });
        assert_eq!("YES\n", yes);
        let no = written(|w, buf| {
            ResponseWriter::<String>::write_acceptance_status(w, buf, false).unwrap()
        });
        assert_eq!("NO\n", no);
    }
}
