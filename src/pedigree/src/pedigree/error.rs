use thiserror::Error;

use crate::Relation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Individual {0} is already a member of this pedigree")]
    DuplicateIndividual(String),

    #[error("Individual {0} is not a member of this pedigree")]
    MissingIndividual(String),

    #[error("{individual} lists {target} as its {relation}, but {target} is not a member of this pedigree")]
    DanglingReference { individual: String, relation: Relation, target: String },

    #[error("{parent} fills the {relation} slot of {individual}, but does not have the matching sex")]
    ParentSexMismatch { individual: String, parent: String, relation: Relation },

    #[error("Inconsistent link between parent {parent} and child {child}: only one side records the relationship")]
    InconsistentLink { parent: String, child: String },

    #[error("Individual {0} is its own ancestor")]
    CyclicLineage(String),

    #[error("Failed to link child {child} to parent {parent}")]
    FailedRelationship { child: String, parent: String },

    #[error("Pedigree failed structural validation")]
    InvalidStructure,

    #[error("Failed to infer the mode of inheritance")]
    FailedInference,
}

impl PedigreeError {
    /// Whether this error reports a broken relationship graph, as opposed to a failed lookup or
    /// an error context.
    pub fn is_structural(&self) -> bool {
        matches!(self,
            Self::DuplicateIndividual(_)
            | Self::DanglingReference { .. }
            | Self::ParentSexMismatch { .. }
            | Self::InconsistentLink { .. }
            | Self::CyclicLineage(_)
        )
    }
}
