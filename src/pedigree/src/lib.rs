//! Family pedigrees and qualitative mode of inheritance screening.
//!
//! Individuals are created with a fixed identifier and sex, linked to their
//! parents, then handed over to a [`Pedigree`] which owns them. Relationships
//! are stored as identifiers, so a pedigree is a plain indexed store, and every
//! analysis method borrows it immutably. Mutating a pedigree while an analysis
//! borrows it is impossible through this API; callers sharing one across
//! threads must not mutate it concurrently behind their own synchronisation.
//!
//! ```
//! use pedigree::{Individual, InheritanceMode, Pedigree, Sex};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut father = Individual::new("father", Sex::Male)?;
//! let mut mother = Individual::new("mother", Sex::Female)?;
//! let mut child  = Individual::new("child", Sex::Female)?.with_status(true);
//! child.add_parent(&mut father)?;
//! child.add_parent(&mut mother)?;
//!
//! let pedigree = Pedigree::from_individuals([father, mother, child])?;
//! let modes    = pedigree.find_mode_of_inheritance()?;
//! assert!(!modes.contains(InheritanceMode::AutosomalDominant));
//! assert!(modes.contains(InheritanceMode::AutosomalRecessive));
//! # Ok(())
//! # }
//! ```

mod sex;
pub use sex::{Sex, SexError};

mod individual;
pub use individual::{Individual, IndividualError, Parents, Relation};

mod pedigree;
pub use pedigree::{Pedigree, PedigreeError};

mod inheritance;
pub use inheritance::{InheritanceMode, ModeCandidates, Trio};

#[cfg(test)]
mod tests;
