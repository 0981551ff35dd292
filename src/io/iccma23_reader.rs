use super::{InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// A reader for the ICCMA 2023 format.
///
/// This object is used to read an [`AAFramework`] encoded using the ICCMA 2023 input format, as defined on [the competition website](https://iccma2023.github.io/rules.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [usize].
///
/// # ICCMA 2023 format
///
/// The following content defines an Argumentation Framework with three arguments (given by the indexes `1`, `2` and `3`) and three attacks (`1` and `2` attack each other and `3` attacks `2`).
///
/// ```text
/// p af 3
/// 1 2
/// 2 1
/// 3 2
/// ```
#[derive(Default)]
pub struct Iccma23Reader {
    warning_handlers: Vec<WarningHandler>,
}

fn parse_preamble(line: &str) -> Result<usize> {
    let mut words = line.split_whitespace();
    let mut expect = |expected: &str, position: &str| match words.next() {
        Some(w) if w == expected => Ok(()),
        Some(w) => Err(anyhow!(
            r#"error in {} word of preamble; expected "{}", got "{}""#,
            position,
            expected,
            w
        )),
        None => Err(anyhow!("error in preamble; not enough words")),
    };
    expect("p", "first")?;
    expect("af", "second")?;
    let n_args = match words.next().map(str::parse::<isize>) {
        Some(Ok(n)) if n >= 0 => n as usize,
        _ => return Err(anyhow!("error in preamble: invalid number of arguments")),
    };
    if words.next().is_some() {
        return Err(anyhow!("error in preamble; unexpected trailing words"));
    }
    Ok(n_args)
}

fn parse_attack(line: &str, n_args: usize) -> Result<(usize, usize)> {
    let parse_index = |word: Option<&str>, role: &str| match word.map(str::parse::<isize>) {
        Some(Ok(n)) if n >= 1 && (n as usize) <= n_args => Ok(n as usize - 1),
        _ => Err(anyhow!("error in attack: invalid argument index for {}", role)),
    };
    let mut words = line.split_whitespace();
    let attacker = parse_index(words.next(), "attacker")?;
    let attacked = parse_index(words.next(), "attacked")?;
    if words.next().is_some() {
        return Err(anyhow!("error in attack; unexpected trailing words"));
    }
    Ok((attacker, attacked))
}

impl InstanceReader<usize> for Iccma23Reader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<usize>> {
        let mut af: Option<AAFramework<usize>> = None;
        let mut after_trailing_blank = false;
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let context = || format!("while reading line with index {}", index);
            let line = line.with_context(context)?;
            if line.starts_with('#') {
                continue;
            }
            if line.is_empty() {
                after_trailing_blank = true;
                continue;
            }
            if after_trailing_blank {
                return Err(anyhow!("got content after an empty line")).with_context(context);
            }
            match &mut af {
                None => {
                    let n_args = parse_preamble(&line).with_context(context)?;
                    let labels = (1..=n_args).collect::<Vec<usize>>();
                    af = Some(AAFramework::new_with_argument_set(
                        ArgumentSet::new_with_labels(&labels),
                    ));
                }
                Some(af) => {
                    let (attacker, attacked) =
                        parse_attack(&line, af.n_arguments()).with_context(context)?;
                    af.new_attack_by_ids(attacker, attacked).unwrap();
                }
            }
        }
        af.ok_or_else(|| anyhow!("missing preamble"))
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<usize>,
        arg: &str,
    ) -> Result<&'a Argument<usize>> {
        match arg.parse::<usize>() {
            Ok(n) if n > 0 && n <= af.n_arguments() => {
                Ok(af.argument_set().get_argument_by_id(n - 1))
            }
            _ => Err(anyhow!("unknown arg: {}", arg)),
        }
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_toy_af(af: &AAFramework<usize>) {
        assert_eq!(3, af.n_arguments());
        assert_eq!(2, af.n_attacks());
        assert!(af
            .iter_attacks()
            .any(|att| att.attacker().id() == 0 && att.attacked().id() == 1));
        assert!(af
            .iter_attacks()
            .any(|att| att.attacker().id() == 2 && att.attacked().id() == 2));
    }

    #[test]
    fn test_read_ok() {
        let af = Iccma23Reader::default()
            .read(&mut "p af 3\n1 2\n3 3\n".as_bytes())
            .unwrap();
        assert_toy_af(&af);
    }

    #[test]
    fn test_read_ok_missing_last_lf() {
        let af = Iccma23Reader::default()
            .read(&mut "p af 3\n1 2\n3 3".as_bytes())
            .unwrap();
        assert_toy_af(&af);
    }

    #[test]
    fn test_read_ok_empty_lines_at_the_end() {
        let af = Iccma23Reader::default()
            .read(&mut "p af 3\n1 2\n3 3\n\n".as_bytes())
            .unwrap();
        assert_toy_af(&af);
    }

    #[test]
    fn test_read_ok_comment() {
        let af = Iccma23Reader::default()
            .read(&mut "#foo\np af 3\n1 2\n3 3\n".as_bytes())
            .unwrap();
        assert_toy_af(&af);
    }

    #[test]
    fn test_read_misplaced_empty_lines() {
        for instance in ["\np af 3\n1 2\n3 3\n", "p af 3\n\n1 2\n3 3\n"] {
            assert!(Iccma23Reader::default()
                .read(&mut instance.as_bytes())
                .is_err());
        }
    }

    #[test]
    fn test_read_preamble_errors() {
        for instance in [
            "foo af 3\n1 2\n3 3\n",
            "p foo 3\n1 2\n3 3\n",
            "p af foo\n1 2\n3 3\n",
            "p af -1\n",
            "p af 3 foo\n1 2\n3 3\n",
            "p af\n",
        ] {
            assert!(Iccma23Reader::default()
                .read(&mut instance.as_bytes())
                .is_err());
        }
    }

    #[test]
    fn test_read_attack_errors() {
        for instance in [
            "p af 3\n4 2\n3 3\n",
            "p af 3\n1 4\n3 3\n",
            "p af 3\n0 1\n",
            "p af 3\n1\n",
            "p af 3\n1 2 4\n3 3\n",
        ] {
            assert!(Iccma23Reader::default()
                .read(&mut instance.as_bytes())
                .is_err());
        }
    }

    #[test]
    fn test_read_empty_instance() {
        assert!(Iccma23Reader::default().read(&mut "".as_bytes()).is_err());
    }

    #[test]
    fn test_read_arg_from_str() {
        let reader = Iccma23Reader::default();
        let af = reader.read(&mut "p af 1\n".as_bytes()).unwrap();
        assert!(reader.read_arg_from_str(&af, "1").is_ok());
        assert!(reader.read_arg_from_str(&af, "2").is_err());
        assert!(reader.read_arg_from_str(&af, "0").is_err());
        assert!(reader.read_arg_from_str(&af, "foo").is_err());
    }

    #[test]
    fn test_arg_in_no_attack() {
        let af = Iccma23Reader::default()
            .read(&mut "p af 1\n".as_bytes())
            .unwrap();
        assert_eq!(1, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }
}
