//! Letter grades and their point values

use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade awarded for an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10 points)
    S,
    /// Excellent (9 points)
    A,
    /// Very good (8 points)
    B,
    /// Good (7 points)
    C,
    /// Average (6 points)
    D,
    /// Pass (5 points)
    E,
    /// Fail (0 points)
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 7] = [Self::S, Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Grade points used in the GPA computation
    #[must_use]
    pub const fn points(&self) -> u8 {
        match self {
            Self::S => 10,
            Self::A => 9,
            Self::B => 8,
            Self::C => 7,
            Self::D => 6,
            Self::E => 5,
            Self::F => 0,
        }
    }

    /// Single-letter symbol
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|g| g.letter() == wanted)
            .ok_or_else(|| RecordsError::UnknownGrade(s.trim().to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_descend() {
        let points: Vec<u8> = Grade::ALL.iter().map(Grade::points).collect();
        assert_eq!(points, vec![10, 9, 8, 7, 6, 5, 0]);
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!("s".parse::<Grade>(), Ok(Grade::S));
        assert_eq!(" B ".parse::<Grade>(), Ok(Grade::B));
        assert!("Z".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }
}
