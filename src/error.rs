//!
//! Error type shared by the graph models and the solver
//!
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AsmError {
    /// malformed DNA, wrong k-mer length, empty k-mer list, bad parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// mutation of a derived read-only property such as `k`
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// query of a node, edge or weight that does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, AsmError>;
