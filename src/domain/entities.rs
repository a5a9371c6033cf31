//! Domain entities. Pure data structures for the core business.
//!
//! All of these live for a single run; nothing is persisted except the run log.

use std::fmt;
use std::str::FromStr;

/// Full text of the first data cell (A1) of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent(pub String);

impl CellContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Field order used to turn an extracted `NN/NN/NN` token into a calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateOrder {
    /// `DD/MM/YY`, the shape the sheet writes.
    #[default]
    DayMonthYear,
    /// `MM/DD/YY`.
    MonthDayYear,
}

impl DateOrder {
    /// chrono format string for this order.
    pub fn format(self) -> &'static str {
        match self {
            DateOrder::DayMonthYear => "%d/%m/%y",
            DateOrder::MonthDayYear => "%m/%d/%y",
        }
    }
}

impl FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dmy" => Ok(DateOrder::DayMonthYear),
            "mdy" => Ok(DateOrder::MonthDayYear),
            other => Err(format!("unknown date order '{}' (expected dmy or mdy)", other)),
        }
    }
}

/// Outcome of comparing the maintenance date with today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationDecision {
    Notify,
    NoMatch,
}

/// A single plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_order_parses_case_insensitively() {
        assert_eq!("DMY".parse::<DateOrder>(), Ok(DateOrder::DayMonthYear));
        assert_eq!(" mdy ".parse::<DateOrder>(), Ok(DateOrder::MonthDayYear));
        assert!("ymd".parse::<DateOrder>().is_err());
    }
}
