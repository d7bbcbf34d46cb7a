use crate::{LeagueError, LeagueResult};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Goals scored by one side in a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goals(u16);

impl Goals {
    pub const fn new(value: u16) -> Self {
        Goals(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Validates a submitted score, naming `field` in the error.
    pub fn from_input(field: &str, input: GoalsInput) -> LeagueResult<Self> {
        let invalid = || {
            LeagueError::validation(format!("{} must be a non-negative whole number", field))
        };

        match input {
            GoalsInput::Integer(value) => u16::try_from(value).map(Goals).map_err(|_| invalid()),
            GoalsInput::Decimal(_) => Err(invalid()),
            GoalsInput::Text(text) => text.parse::<Goals>().map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Goals {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LeagueError::validation(format!("'{}' is not a valid goal count", s)));
        }

        trimmed
            .parse::<u16>()
            .map(Goals)
            .map_err(|_| LeagueError::validation(format!("'{}' is not a valid goal count", s)))
    }
}

/// Raw goal value as it arrives from a client: form inputs send strings,
/// API clients send numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GoalsInput {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_match_date(value: &str) -> LeagueResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| LeagueError::validation(format!("matchDate '{}' is not an ISO date", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_from_integer() {
        assert_eq!(Goals::from_input("homeGoals", GoalsInput::Integer(3)), Ok(Goals::new(3)));
    }

    #[test]
    fn test_goals_from_text() {
        assert_eq!(
            Goals::from_input("homeGoals", GoalsInput::Text(" 2 ".to_string())),
            Ok(Goals::new(2))
        );
    }

    #[test]
    fn test_goals_rejects_negative() {
        let result = Goals::from_input("awayGoals", GoalsInput::Integer(-1));

        assert_eq!(
            result,
            Err(LeagueError::Validation(
                "awayGoals must be a non-negative whole number".to_string()
            ))
        );
    }

    #[test]
    fn test_goals_rejects_garbage_text() {
        for raw in ["", "abc", "-2", "1.5", "2a", "+1"] {
            assert!(
                Goals::from_input("homeGoals", GoalsInput::Text(raw.to_string())).is_err(),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_goals_rejects_fraction_and_overflow() {
        assert!(Goals::from_input("homeGoals", GoalsInput::Decimal(1.5)).is_err());
        assert!(Goals::from_input("homeGoals", GoalsInput::Integer(70_000)).is_err());
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_match_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_date() {
        assert_eq!(
            parse_match_date("2024-03-09T18:30:00.000Z").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_parse_bad_date() {
        assert!(matches!(parse_match_date("09/03/2024"), Err(LeagueError::Validation(_))));
        assert!(parse_match_date("").is_err());
    }
}
