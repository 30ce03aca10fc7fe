//! Date range selector
//!
//! The dashboard expresses time windows as short strings: `"all"`, `"today"`
//! or a number of days such as `"7"`.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic date-range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateRange {
    /// No lower bound
    #[default]
    All,
    /// Since local midnight today
    Today,
    /// Since local midnight N days ago
    LastDays(u32),
}

impl FromStr for DateRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if s.eq_ignore_ascii_case("today") {
            return Ok(Self::Today);
        }

        s.parse::<u32>()
            .map(Self::LastDays)
            .map_err(|_| AppError::InvalidRange(s.to_string()))
    }
}

impl TryFrom<String> for DateRange {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Today => f.write_str("today"),
            Self::LastDays(days) => write!(f, "{}", days),
        }
    }
}
