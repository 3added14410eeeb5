use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

/// The degree programs a student can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Major {
    ComputerEngineering,
    MechanicalEngineering,
}

impl Major {
    /// Course code prefix shared by every major
    pub const SHARED_PREFIX: &'static str = "MTH";

    /// The subject prefix of courses reserved for this major
    pub fn course_prefix(self) -> &'static str {
        match self {
            Self::ComputerEngineering => "ECE",
            Self::MechanicalEngineering => "MNG",
        }
    }

    /// Returns the major a course is restricted to, or `None` when any major may take it
    pub fn required_for(course_code: &str) -> Option<Self> {
        if course_code.starts_with(Self::SHARED_PREFIX) {
            return None;
        }

        [Self::ComputerEngineering, Self::MechanicalEngineering]
            .into_iter()
            .find(|major| course_code.starts_with(major.course_prefix()))
    }

    /// Whether a student in this major may register for the given course code
    pub fn may_take(self, course_code: &str) -> bool {
        Self::required_for(course_code).is_none_or(|required| required == self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ComputerEngineering => "COMPUTER_ENGINEERING",
            Self::MechanicalEngineering => "MECHANICAL_ENGINEERING",
        }
    }

    /// Human readable program name
    pub fn title(self) -> &'static str {
        match self {
            Self::ComputerEngineering => "Computer Engineering",
            Self::MechanicalEngineering => "Mechanical Engineering",
        }
    }
}

impl FromStr for Major {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPUTER_ENGINEERING" => Ok(Self::ComputerEngineering),
            "MECHANICAL_ENGINEERING" => Ok(Self::MechanicalEngineering),
            _ => Err(format!("Unknown major: {s}")),
        }
    }
}

impl Display for Major {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
