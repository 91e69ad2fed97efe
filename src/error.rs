//! Error types for girder diagram extraction

use thiserror::Error;

/// Main error type for girder diagram operations
#[derive(Error, Debug)]
pub enum GirderError {
    #[error("Node {0} not found in coordinate table")]
    NodeNotFound(u32),

    #[error("Element {0} not found in connectivity table")]
    ElementNotFound(u32),

    #[error("Element {0} not found in results dataset")]
    ResultsElementNotFound(u32),

    #[error("Component '{component}' not found in results dataset (element {element})")]
    ComponentNotFound { element: u32, component: String },

    #[error("Girder {0} not found in layout")]
    GirderNotFound(u32),

    #[error("Girder path is empty")]
    EmptyPath,

    #[error("Girder path is not contiguous at element {element}: expected start node {expected}, found {found}")]
    NonContiguous { element: u32, expected: u32, found: u32 },

    #[error("Node sequence disagrees with element chain at position {index}: expected node {expected}, found {found}")]
    NodeSequenceMismatch { index: usize, expected: u32, found: u32 },

    #[error("Duplicate identifier '{0}'")]
    DuplicateId(String),

    #[error("Dataset shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for girder diagram operations
pub type GirderResult<T> = Result<T, GirderError>;

impl GirderError {
    /// True for the lookup failures raised while walking a girder path
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            GirderError::NodeNotFound(_)
                | GirderError::ElementNotFound(_)
                | GirderError::ResultsElementNotFound(_)
                | GirderError::ComponentNotFound { .. }
        )
    }
}
