use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Asset '{0}' appears more than once in the universe")]
    DuplicateAsset(String),

    #[error("Asset identifiers must not be empty")]
    EmptyIdentifier,
}
