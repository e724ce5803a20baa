/// ID types for Roster entities
use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User identifier, assigned by the store from a monotonic counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = RosterError;

    /// Parse a path segment as a signed integer
    ///
    /// Non-integers are malformed. Negative integers parse but can never
    /// match a stored user, so they are reported as not found.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| RosterError::malformed("Invalid user ID"))?;
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| RosterError::not_found(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unsigned_integers() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::new(42));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["abc", "", "1.5", " 3", "18446744073709551615"] {
            let err = raw.parse::<UserId>().unwrap_err();
            assert_eq!(err, RosterError::malformed("Invalid user ID"), "input {raw:?}");
        }
    }

    #[test]
    fn negative_ids_are_not_found() {
        let err = "-1".parse::<UserId>().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&UserId::new(3)).unwrap(), "3");
    }
}
