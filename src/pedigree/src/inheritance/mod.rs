use located_error::prelude::*;
use log::{debug, trace};

use crate::{Pedigree, PedigreeError};

mod mode;
pub use mode::InheritanceMode;

mod rules;

mod trio;
pub use trio::Trio;

mod candidates;
pub use candidates::ModeCandidates;

impl Pedigree {
    /// Every member with at least one known parent, in insertion order, paired with its resolved parents.
    /// Links pointing outside of the pedigree resolve to `None`: call [`Pedigree::validate`] first to rule
    /// them out.
    pub fn trios(&self) -> impl Iterator<Item = Trio<'_>> {
        self.individuals()
            .filter(|ind| ind.has_known_parent())
            .map(move |child| Trio::new(self, child))
    }

    /// Screen this pedigree against the four classical modes of inheritance, and return the modes that no
    /// trio contradicts. An empty pedigree rules nothing out.
    ///
    /// This is a consistency filter built on necessary, non-exhaustive conditions: a surviving mode is
    /// merely compatible with the observed pedigree.
    ///
    /// # Errors
    /// - if the pedigree fails structural validation (e.g. a parent or child identifier pointing outside
    ///   of the pedigree). See [`Pedigree::validate`]
    pub fn find_mode_of_inheritance(&self) -> Result<ModeCandidates> {
        self.validate().with_loc(|| PedigreeError::FailedInference)?;

        let mut candidates = ModeCandidates::all();
        for trio in self.trios() {
            trace!("Screening trio {trio}");
            for mode in InheritanceMode::ALL {
                if candidates.contains(mode) && mode.is_violated_by(&trio) {
                    debug!("{mode} ruled out by {trio}");
                    candidates.remove(mode);
                }
            }
        }
        Ok(candidates)
    }
}
