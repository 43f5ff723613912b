//! Minimum-should-match expressions.
//!
//! A minimum-should-match value relaxes an OR-combined query by stating how
//! many of its optional clauses have to match. Three textual forms are
//! understood:
//!
//! ```text
//! 3        at least three clauses
//! 60%      at least 60% of the clauses
//! 2<60%    all clauses while there are at most two, 60% once there are more
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynopticError};

/// A minimum-should-match expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MinimumShouldMatch {
    /// An absolute number of clauses.
    Count(u32),
    /// A percentage of the clauses.
    Percentage(u8),
    /// `threshold<percent%`: every clause is required up to `threshold`
    /// clauses, `percent` of them above it.
    Conditional { threshold: u32, percent: u8 },
}

impl MinimumShouldMatch {
    /// Create a conditional expression (`threshold<percent%`).
    pub fn conditional(threshold: u32, percent: u8) -> Self {
        MinimumShouldMatch::Conditional { threshold, percent }
    }
}

impl fmt::Display for MinimumShouldMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimumShouldMatch::Count(count) => write!(f, "{count}"),
            MinimumShouldMatch::Percentage(percent) => write!(f, "{percent}%"),
            MinimumShouldMatch::Conditional { threshold, percent } => {
                write!(f, "{threshold}<{percent}%")
            }
        }
    }
}

fn parse_percent(s: &str, original: &str) -> Result<u8> {
    let digits = s.strip_suffix('%').ok_or_else(|| {
        SynopticError::parse(format!("Expected a percentage in '{original}'"))
    })?;
    let percent: u8 = digits
        .trim()
        .parse()
        .map_err(|e| SynopticError::parse(format!("Invalid percentage in '{original}': {e}")))?;
    if percent > 100 {
        return Err(SynopticError::parse(format!(
            "Percentage out of range in '{original}'"
        )));
    }
    Ok(percent)
}

impl FromStr for MinimumShouldMatch {
    type Err = SynopticError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some((threshold, percent)) = trimmed.split_once('<') {
            let threshold = threshold.trim().parse().map_err(|e| {
                SynopticError::parse(format!("Invalid threshold in '{trimmed}': {e}"))
            })?;
            let percent = parse_percent(percent.trim(), trimmed)?;
            return Ok(MinimumShouldMatch::Conditional { threshold, percent });
        }

        if trimmed.ends_with('%') {
            return Ok(MinimumShouldMatch::Percentage(parse_percent(
                trimmed, trimmed,
            )?));
        }

        trimmed.parse().map(MinimumShouldMatch::Count).map_err(|e| {
            SynopticError::parse(format!(
                "Invalid minimum_should_match '{trimmed}': {e}"
            ))
        })
    }
}

impl TryFrom<String> for MinimumShouldMatch {
    type Error = SynopticError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MinimumShouldMatch> for String {
    fn from(value: MinimumShouldMatch) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(MinimumShouldMatch::conditional(1, 40).to_string(), "1<40%");
        assert_eq!(MinimumShouldMatch::conditional(2, 60).to_string(), "2<60%");
        assert_eq!(MinimumShouldMatch::Percentage(75).to_string(), "75%");
        assert_eq!(MinimumShouldMatch::Count(3).to_string(), "3");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "2<60%".parse::<MinimumShouldMatch>().unwrap(),
            MinimumShouldMatch::conditional(2, 60)
        );
        assert_eq!(
            " 75% ".parse::<MinimumShouldMatch>().unwrap(),
            MinimumShouldMatch::Percentage(75)
        );
        assert_eq!(
            "3".parse::<MinimumShouldMatch>().unwrap(),
            MinimumShouldMatch::Count(3)
        );
        assert!("2<160%".parse::<MinimumShouldMatch>().is_err());
        assert!("2<60".parse::<MinimumShouldMatch>().is_err());
        assert!("most".parse::<MinimumShouldMatch>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&MinimumShouldMatch::conditional(1, 40)).unwrap();
        assert_eq!(json, "\"1<40%\"");
        let parsed: MinimumShouldMatch = serde_json::from_str("\"2<60%\"").unwrap();
        assert_eq!(parsed, MinimumShouldMatch::conditional(2, 60));
    }
}
