//! Error types for vector operations

/// Errors raised when an operation's mathematical preconditions are violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The operation needs a non-zero magnitude but got exactly zero
    ZeroVector {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::ZeroVector { operation } => {
                write!(f, "zero vector: cannot {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
