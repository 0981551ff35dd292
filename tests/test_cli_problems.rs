use assert_cmd::Command;
use predicates::{
    reflection::{Case, PredicateReflection},
    Predicate,
};
use rhetor::aa::iter_problem_strings;
use std::fmt::Display;

struct CheckProblemsPredicate;

impl Display for CheckProblemsPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "check_problems")
    }
}

impl PredicateReflection for CheckProblemsPredicate {}

impl Predicate<[u8]> for CheckProblemsPredicate {
    fn eval(&self, variable: &[u8]) -> bool {
        let content = String::from_utf8_lossy(variable);
        let content = content.trim();
        if !content.starts_with('[') || !content.ends_with(']') {
            return false;
        }
        let mut listed: Vec<&str> = content[1..content.len() - 1].split(',').collect();
        listed.sort_unstable();
        let mut expected: Vec<String> = iter_problem_strings().collect();
        expected.sort_unstable();
        listed == expected.iter().map(String::as_str).collect::<Vec<&str>>()
    }

    fn find_case<'a>(&'a self, _expected: bool, _variable: &[u8]) -> Option<Case<'a>> {
        None
    }
}

#[test]
fn test_problems() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rhetor")?;
    cmd.arg("problems").arg("--logging-level").arg("off");
    cmd.assert().success().stdout(CheckProblemsPredicate);
    Ok(())
}
