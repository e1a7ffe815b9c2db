use std::fmt::{self, Display, Formatter};

use super::{rules, Trio};

/// The four classical Mendelian modes of inheritance of a binary trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InheritanceMode {
    AutosomalDominant,
    AutosomalRecessive,
    XLinkedDominant,
    XLinkedRecessive,
}

impl InheritanceMode {
    pub const ALL: [InheritanceMode; 4] = [
        Self::AutosomalDominant,
        Self::AutosomalRecessive,
        Self::XLinkedDominant,
        Self::XLinkedRecessive,
    ];

    pub fn is_x_linked(&self) -> bool {
        matches!(self, Self::XLinkedDominant | Self::XLinkedRecessive)
    }

    pub fn is_dominant(&self) -> bool {
        matches!(self, Self::AutosomalDominant | Self::XLinkedDominant)
    }

    /// Whether `trio` contradicts this mode. A `false` answer only means no contradiction was found.
    pub fn is_violated_by(&self, trio: &Trio) -> bool {
        match self {
            Self::AutosomalDominant  => rules::dominant_violated(trio),
            Self::AutosomalRecessive => rules::autosomal_recessive_violated(trio),
            Self::XLinkedDominant    => rules::x_linked_dominant_violated(trio),
            Self::XLinkedRecessive   => rules::x_linked_recessive_violated(trio),
        }
    }
}

impl Display for InheritanceMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::AutosomalDominant  => "Autosomal Dominant",
            Self::AutosomalRecessive => "Autosomal Recessive",
            Self::XLinkedDominant    => "X-Linked Dominant",
            Self::XLinkedRecessive   => "X-Linked Recessive",
        })
    }
}
