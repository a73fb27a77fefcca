//! Academic term model

use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An academic term such as FALL 2025
///
/// Two semesters are the same term only when both name and year match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Semester {
    /// Term name (e.g., "FALL", "SPRING")
    pub name: String,

    /// Calendar year
    pub year: i32,
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }

    /// Compact form accepted by [`FromStr`] (e.g., "FALL2025")
    #[must_use]
    pub fn compact(&self) -> String {
        format!("{}{}", self.name, self.year)
    }
}

impl FromStr for Semester {
    type Err = RecordsError;

    /// Parse `<LETTERS><YYYY>`, e.g. "fall2025" or "SPRING2026"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_uppercase();
        let invalid = || RecordsError::InvalidSemester(input.clone());

        if input.len() < 5 || !input.is_ascii() {
            return Err(invalid());
        }
        let (name, year) = input.split_at(input.len() - 4);
        if !name.chars().all(|c| c.is_ascii_uppercase()) || !year.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        Ok(Self::new(name, year))
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_form() {
        let sem: Semester = "fall2025".parse().unwrap();
        assert_eq!(sem, Semester::new("FALL", 2025));
        assert_eq!(sem.to_string(), "FALL 2025");
        assert_eq!(sem.compact(), "FALL2025");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["2025", "FALL", "FALL25", "FALL 2025", "F4LL2025", "FALL20255X", ""] {
            assert!(bad.parse::<Semester>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Semester::new("SPRING", 2026), "SPRING2026".parse().unwrap());
        assert_ne!(Semester::new("SPRING", 2026), Semester::new("SPRING", 2025));
    }
}
