use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndividualError {
    #[error("An individual requires a non-empty identifier.")]
    MissingIdentifier,

    #[error("Individual {0} cannot be its own parent.")]
    SelfParentage(String),

    #[error("Failed to link individual {child} to parent {parent}")]
    InvalidRelationship { child: String, parent: String },
}
