use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref ARG_CLAUSE: Regex = Regex::new(r"^\s*arg\(([^)]+)\)\.\s*$").unwrap();
    static ref ATT_CLAUSE: Regex = Regex::new(r"^\s*att\(([^,)]+),([^)]+)\)\.\s*$").unwrap();
    static ref VALID_ARG_NAME: Regex = Regex::new(r"^[_[:alpha:]][_[:alpha:]\d]*$").unwrap();
}

enum AspartixClause {
    Argument(WarningResult<String, String>),
    Attack(WarningResult<(String, String), String>),
}

fn parse_arg_name(raw: &str) -> Result<WarningResult<String, String>> {
    let name = raw.trim();
    if !VALID_ARG_NAME.is_match(name) {
        return Err(anyhow!("invalid argument name in {}", raw.trim()));
    }
    if name.len() == raw.len() {
        Ok(WarningResult::Ok(name.to_string()))
    } else {
        Ok(WarningResult::Warned(
            name.to_string(),
            vec!["argument names beginning or ending by spaces may be ambiguous".to_string()],
        ))
    }
}

fn parse_clause(line: &str) -> Result<AspartixClause> {
    if let Some(c) = ARG_CLAUSE.captures(line) {
        let raw = c.get(1).unwrap().as_str();
        return parse_arg_name(raw)
            .map(AspartixClause::Argument)
            .with_context(|| format!("while parsing the clause {}", line.trim()));
    }
    if let Some(c) = ATT_CLAUSE.captures(line) {
        let attacker = parse_arg_name(c.get(1).unwrap().as_str());
        let attacked = parse_arg_name(c.get(2).unwrap().as_str());
        return match (attacker, attacked) {
            (Ok(a), Ok(b)) => Ok(AspartixClause::Attack(a.zip(b))),
            (Err(e), _) | (_, Err(e)) => {
                Err(e).with_context(|| format!("while parsing the clause {}", line.trim()))
            }
        };
    }
    Err(anyhow!("syntax error in line \"{}\"", line))
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// # Example
///
/// ```
/// # use rhetor::aa::AAFramework;
/// # use rhetor::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn raise_warnings(&self, line_number: usize, warnings: Vec<String>) {
        for w in warnings {
            for h in &self.warning_handlers {
                (h)(line_number, w.clone());
            }
        }
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut labels = Vec::new();
        let mut af: Option<AAFramework<String>> = None;
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let context = || format!("while reading line with index {}", index);
            let line = line.with_context(context)?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_clause(&line).with_context(context)? {
                AspartixClause::Argument(label) => {
                    if af.is_some() {
                        return Err(anyhow!("found an argument declaration after an attack"))
                            .with_context(context);
                    }
                    labels.push(label.consume_warnings(|w| self.raise_warnings(1 + index, w)));
                }
                AspartixClause::Attack(endpoints) => {
                    let (attacker, attacked) =
                        endpoints.consume_warnings(|w| self.raise_warnings(1 + index, w));
                    let af = af.get_or_insert_with(|| {
                        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels))
                    });
                    af.new_attack(&attacker, &attacked).with_context(context)?;
                }
            }
        }
        Ok(af.unwrap_or_else(|| {
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels))
        }))
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn parse_arg_clause(line: &str) -> Result<String> {
        match parse_clause(line)? {
            AspartixClause::Argument(label) => Ok(label.consume_warnings(|_| {})),
            _ => panic!("not an argument clause"),
        }
    }

    fn parse_att_clause(line: &str) -> Result<(String, String)> {
        match parse_clause(line)? {
            AspartixClause::Attack(endpoints) => Ok(endpoints.consume_warnings(|_| {})),
            _ => panic!("not an attack clause"),
        }
    }

    #[test]
    fn test_parse_arg_clause() {
        for line in [
            "arg(a).",
            "arg( a).",
            "arg(a ).",
            "arg( a ).",
            "    arg(a).   ",
        ] {
            assert_eq!("a", parse_arg_clause(line).unwrap());
        }
        assert_eq!("_a", parse_arg_clause("arg(_a).").unwrap());
        assert_eq!("a1_", parse_arg_clause("arg(a1_).").unwrap());
    }

    #[test]
    fn test_parse_arg_clause_invalid_name() {
        for line in ["arg(a.).", "arg(1a).", "arg(a b)."] {
            assert!(parse_clause(line).is_err());
        }
    }

    #[test]
    fn test_parse_arg_clause_syntax_error() {
        for line in [
            "rg(a).",
            "arg(a)",
            "arg().",
            "arga).",
            "arg(a.",
            "arg(a).arg(b).",
        ] {
            assert!(parse_clause(line).is_err());
        }
    }

    #[test]
    fn test_parse_att_clause() {
        for line in [
            "att(a,b).",
            "att( a,b).",
            "att(a ,b).",
            "att( a ,b).",
            "att(a, b).",
            "att(a,b ).",
            "att(a, b ).",
            "    att(a,b).   ",
        ] {
            assert_eq!(
                ("a".to_string(), "b".to_string()),
                parse_att_clause(line).unwrap()
            );
        }
        assert_eq!(
            ("_a".to_string(), "b".to_string()),
            parse_att_clause("att(_a,b).").unwrap()
        );
    }

    #[test]
    fn test_parse_att_clause_invalid_name() {
        for line in ["att(a.,b).", "att(a,b.).", "att(1a,b).", "att(a,1b)."] {
            assert!(parse_clause(line).is_err());
        }
    }

    #[test]
    fn test_parse_att_clause_syntax_error() {
        for line in [
            "tt(a,b).",
            "att(a,b)",
            "att().",
            "att(a,).",
            "att(,b).",
            "atta,b).",
            "att(a,b.",
            "att(a,b).att(c,d).",
        ] {
            assert!(parse_clause(line).is_err());
        }
    }

    fn str_args(af: &AAFramework<String>) -> Vec<String> {
        af.argument_set().iter().map(|s| format!("{}", s)).collect()
    }

    fn str_attacks(af: &AAFramework<String>) -> Vec<String> {
        af.iter_attacks()
            .map(|a| format!("({},{})", a.attacker(), a.attacked()))
            .collect()
    }

    #[test]
    fn test_read_ok() {
        let af = AspartixReader::default()
            .read(&mut "arg(a).\narg(b).\natt(a,b).\n".as_bytes())
            .unwrap();
        assert_eq!(vec!["a".to_string(), "b".to_string()], str_args(&af));
        assert_eq!(vec!["(a,b)".to_string()], str_attacks(&af));
    }

    #[test]
    fn test_read_empty() {
        let af = AspartixReader::default().read(&mut "\n".as_bytes()).unwrap();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_read_arg_after_att() {
        assert!(AspartixReader::default()
            .read(&mut "arg(a).\narg(b).\natt(a,b).\narg(c).\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_syntax_error() {
        assert!(AspartixReader::default()
            .read(&mut "argument(a).\narg(b).\natt(a,b).\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_unknown_arg_in_att() {
        assert!(AspartixReader::default()
            .read(&mut "arg(a).\narg(b).\natt(a,c).\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_warn_arg_left_space() {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = AspartixReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        reader
            .read(&mut "arg( a).\narg(b).\natt(a,b).\n".as_bytes())
            .unwrap();
        assert_eq!(
            vec![(
                1,
                "argument names beginning or ending by spaces may be ambiguous".to_string()
            )],
            warnings.borrow().clone()
        );
    }

    #[test]
    fn test_read_arg_from_str() {
        let reader = AspartixReader::default();
        let af = reader.read(&mut "arg(a).\natt(a,a).\n".as_bytes()).unwrap();
        assert_eq!(1, af.n_arguments());
        assert!(reader.read_arg_from_str(&af, "a").is_ok());
        assert!(reader.read_arg_from_str(&af, "b").is_err());
    }

    #[test]
    fn test_arg_in_no_attack() {
        let af = AspartixReader::default()
            .read(&mut "arg(a).\n".as_bytes())
            .unwrap();
        assert_eq!(1, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }
}
