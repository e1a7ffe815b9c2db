use std::fmt::{self, Display, Formatter};

/// Role an individual plays relative to another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Mother,
    Father,
    Child,
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Child  => "child",
        })
    }
}

/// Identifiers of an individual's known parents. Either slot may stay empty
/// in a partial pedigree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parents {
    mother: Option<String>,
    father: Option<String>,
}

impl Parents {
    pub fn new(mother: Option<String>, father: Option<String>) -> Parents {
        Parents { mother, father }
    }

    pub fn mother(&self) -> Option<&str> {
        self.mother.as_deref()
    }

    pub fn father(&self) -> Option<&str> {
        self.father.as_deref()
    }

    /// Identifier held by a parent slot. Always `None` for `Relation::Child`.
    pub fn get(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::Mother => self.mother(),
            Relation::Father => self.father(),
            Relation::Child  => None,
        }
    }

    /// Fill a parent slot, returning the identifier it previously held.
    /// `Relation::Child` is not a parent slot and leaves `self` untouched.
    pub(crate) fn set(&mut self, relation: Relation, id: &str) -> Option<String> {
        let slot = match relation {
            Relation::Mother => &mut self.mother,
            Relation::Father => &mut self.father,
            Relation::Child  => return None,
        };
        slot.replace(id.to_string())
    }

    /// Known parents as `(relation, identifier)` pairs, mother first.
    pub fn iter(&self) -> impl Iterator<Item = (Relation, &str)> {
        [(Relation::Mother, self.mother()), (Relation::Father, self.father())]
            .into_iter()
            .filter_map(|(relation, id)| id.map(|id| (relation, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.mother.is_some() && self.father.is_some()
    }
}

impl Display for Parents {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let repr = format!("{} <-> {}", self.mother().unwrap_or("?"), self.father().unwrap_or("?"));
        f.pad(&repr)
    }
}
