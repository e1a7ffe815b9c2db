use std::fmt::{self, Display, Formatter};

use crate::{Individual, Pedigree};

/// An individual with at least one known parent, along with its resolved parents.
/// Trios are the unit of evidence screened against each mode of inheritance.
#[derive(Debug, Clone, Copy)]
pub struct Trio<'a> {
    pedigree: &'a Pedigree,
    child   : &'a Individual,
    mother  : Option<&'a Individual>,
    father  : Option<&'a Individual>,
}

impl<'a> Trio<'a> {
    pub(crate) fn new(pedigree: &'a Pedigree, child: &'a Individual) -> Trio<'a> {
        Trio { pedigree, child, mother: pedigree.mother_of(child), father: pedigree.father_of(child) }
    }

    pub fn child(&self) -> &'a Individual {
        self.child
    }

    pub fn mother(&self) -> Option<&'a Individual> {
        self.mother
    }

    pub fn father(&self) -> Option<&'a Individual> {
        self.father
    }

    /// Carrier evidence of one of the trio's parents, as computed by `Pedigree::carrier_status`.
    pub fn carrier_status(&self, parent: &Individual) -> Option<bool> {
        self.pedigree.carrier_evidence(parent)
    }
}

impl Display for Trio<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let describe = |ind: Option<&Individual>| match ind {
            Some(ind) => format!("{} ({})", ind.id(), if ind.is_affected() { "affected" } else { "unaffected" }),
            None      => "?".to_string(),
        };
        write!(f, "{} <- mother: {}, father: {}", describe(Some(self.child)), describe(self.mother), describe(self.father))
    }
}
