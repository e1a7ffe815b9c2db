use std::{fmt::{self, Formatter, Display}, str::FromStr};

use thiserror::Error;

use crate::Relation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SexError {
    #[error("Invalid sex '{0}'. Expected one of 'M', 'F', 'male', 'female', '1' or '2'")]
    Invalid(String),
}

/// Biological sex of a pedigree member. Binary by construction: an individual
/// cannot be created without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Name of the shape used to draw this sex on a pedigree chart.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Male   => "circle",
            Self::Female => "square",
        }
    }

    /// Parent slot filled on a child by a parent of this sex.
    #[must_use]
    pub fn parent_relation(&self) -> Relation {
        match self {
            Self::Male   => Relation::Father,
            Self::Female => Relation::Mother,
        }
    }
}

impl FromStr for Sex {
    type Err = SexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male"   | "1" => Ok(Self::Male),
            "f" | "female" | "2" => Ok(Self::Female),
            _                    => Err(SexError::Invalid(s.to_string())),
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Female => "female",
            Self::Male   => "male",
        })
    }
}
