use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Semantics {
    /// The conflict-freeness semantics
    CF,
    /// The admissibility semantics
    AD,
    /// The complete semantics
    CO,
    /// The grounded semantics
    GR,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The semi-stable semantics
    SST,
    /// The ideal semantics
    ID,
    /// The naive semantics
    NA,
    /// The CF2 semantics
    CF2,
}

impl Semantics {
    /// Returns a short string representing the semantics.
    ///
    /// The string corresponds to the uppercase acronym used in problem strings.
    pub fn to_short_str(&self) -> &'static str {
        self.into()
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns a short string representing the query.
    ///
    /// The string corresponds to the two letters query as defined in ICCMA competitions.
    pub fn to_short_str(&self) -> &'static str {
        self.into()
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// This functions reads a problem string following the format in ICCMA competitions.
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
/// In case there is more then one, then all the hyphens except the first are considered as part of the semantics.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    let (query_str, semantics_str) = problem
        .split_once('-')
        .ok_or_else(|| anyhow!("no hyphen in problem string"))
        .with_context(context)?;
    let query = Query::from_str(query_str)
        .map_err(|_| anyhow!(r#"undefined query "{}""#, query_str))
        .with_context(context)?;
    let semantics = Semantics::from_str(semantics_str)
        .map_err(|_| anyhow!(r#"undefined semantics "{}""#, semantics_str))
        .with_context(context)?;
    Ok((query, semantics))
}

/// Iterates over the supported problem strings.
///
/// Each yielded string follows the XX-YY pattern read by [`read_problem_string`].
///
/// # Example
///
/// ```
/// # use rhetor::aa::iter_problem_strings;
/// assert!(iter_problem_strings().any(|p| p == "SE-GR"));
/// ```
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| {
        Semantics::iter().map(move |s| format!("{}-{}", q.to_short_str(), s.to_short_str()))
    })
}
