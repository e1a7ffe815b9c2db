use std::{collections::BTreeSet, fmt::{self, Display, Formatter}};

use super::InheritanceMode;

/// Modes of inheritance a pedigree has not ruled out.
///
/// Membership is a necessary-condition pass, not a proof: a small pedigree is often compatible with several
/// modes, and a surviving mode may still be wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeCandidates(BTreeSet<InheritanceMode>);

impl ModeCandidates {
    /// Every mode of inheritance. This is the answer for a pedigree carrying no evidence.
    pub fn all() -> ModeCandidates {
        ModeCandidates(InheritanceMode::ALL.into_iter().collect())
    }

    pub fn contains(&self, mode: InheritanceMode) -> bool {
        self.0.contains(&mode)
    }

    /// Rule out `mode`. Returns `true` if it was still a candidate.
    pub fn remove(&mut self, mode: InheritanceMode) -> bool {
        self.0.remove(&mode)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = InheritanceMode> + '_ {
        self.0.iter().copied()
    }

    /// The only remaining mode, if a single one survived.
    pub fn conclusive(&self) -> Option<InheritanceMode> {
        match self.len() {
            1 => self.iter().next(),
            _ => None,
        }
    }
}

impl Default for ModeCandidates {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<InheritanceMode> for ModeCandidates {
    fn from_iter<I: IntoIterator<Item = InheritanceMode>>(iter: I) -> Self {
        ModeCandidates(iter.into_iter().collect())
    }
}

impl Display for ModeCandidates {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let modes = self.iter().map(|mode| mode.to_string()).collect::<Vec<_>>();
        write!(f, "{{{}}}", modes.join(", "))
    }
}
