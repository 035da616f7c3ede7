//! Error types for MeowSSG kernel operations.

/// Errors arising from document inspection or repair.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// A route path is not a usable URL path.
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// The serializer failed while re-emitting a DOM subtree.
    #[error("serialize error: {0}")]
    Serialize(String),
}
