use thiserror::Error;

use crate::program::NodeId;

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Internal-consistency failures raised by the serializers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("symbol `{symbol}` has no value declaration")]
    MissingValueDeclaration { symbol: String },
    #[error("resolved symbol has an empty name")]
    EmptyName,
}

/// Failures that abort a whole surface run. Each names the module and node that triggered it.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("module `{module}` rejected by the checker at {label}: {reason}")]
    RejectedModule {
        module: String,
        node: NodeId,
        label: String,
        reason: String,
    },
    #[error("module `{module}`: {label} was reached twice during traversal")]
    RevisitedNode {
        module: String,
        node: NodeId,
        label: String,
    },
    #[error("module `{module}`: failed to serialize {label}: {source}")]
    Serialize {
        module: String,
        node: NodeId,
        label: String,
        #[source]
        source: SerializeError,
    },
}

impl SurfaceError {
    pub fn module(&self) -> &str {
        match self {
            SurfaceError::RejectedModule { module, .. }
            | SurfaceError::RevisitedNode { module, .. }
            | SurfaceError::Serialize { module, .. } => module,
        }
    }

    pub fn node(&self) -> NodeId {
        match self {
            SurfaceError::RejectedModule { node, .. }
            | SurfaceError::RevisitedNode { node, .. }
            | SurfaceError::Serialize { node, .. } => *node,
        }
    }
}
