//! Department model

use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic departments a student or course can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Computer Science
    ComputerScience,
    /// Electrical Engineering
    ElectricalEngineering,
    /// Mechanical Engineering
    MechanicalEngineering,
    /// Chemical Engineering
    ChemicalEngineering,
    /// Biotechnology
    BioTechnology,
}

impl Department {
    /// Every department, in declaration order
    pub const ALL: [Self; 5] = [
        Self::ComputerScience,
        Self::ElectricalEngineering,
        Self::MechanicalEngineering,
        Self::ChemicalEngineering,
        Self::BioTechnology,
    ];

    /// Constant-style identifier used in CSV files (e.g. `COMPUTER_SCIENCE`)
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ComputerScience => "COMPUTER_SCIENCE",
            Self::ElectricalEngineering => "ELECTRICAL_ENGINEERING",
            Self::MechanicalEngineering => "MECHANICAL_ENGINEERING",
            Self::ChemicalEngineering => "CHEMICAL_ENGINEERING",
            Self::BioTechnology => "BIO_TECHNOLOGY",
        }
    }

    /// Human-readable name (e.g. "Computer Science")
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::ElectricalEngineering => "Electrical Engineering",
            Self::MechanicalEngineering => "Mechanical Engineering",
            Self::ChemicalEngineering => "Chemical Engineering",
            Self::BioTechnology => "Biotechnology",
        }
    }
}

impl FromStr for Department {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.code() == wanted)
            .ok_or_else(|| RecordsError::UnknownDepartment(s.trim().to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_department_case_insensitive() {
        assert_eq!(
            "computer_science".parse::<Department>(),
            Ok(Department::ComputerScience)
        );
        assert_eq!(
            " BIO_TECHNOLOGY ".parse::<Department>(),
            Ok(Department::BioTechnology)
        );
    }

    #[test]
    fn test_parse_unknown_department() {
        assert_eq!(
            "PHYSICS".parse::<Department>(),
            Err(RecordsError::UnknownDepartment("PHYSICS".to_string()))
        );
    }

    #[test]
    fn test_display_matches_code() {
        for dept in Department::ALL {
            assert_eq!(dept.to_string().parse::<Department>(), Ok(dept));
        }
        assert_eq!(Department::ChemicalEngineering.name(), "Chemical Engineering");
    }
}
