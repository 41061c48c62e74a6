//! Error types for diagram rendering

use thiserror::Error;

use super::model::NodeId;

/// Errors surfaced by the renderers.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An edge referenced a node id that was never emitted. This is an
    /// ordering-contract violation by the caller, not a recoverable state.
    #[error("edge references unregistered node id {id}")]
    UnknownNode { id: NodeId },

    /// No diagrams were supplied at all.
    #[error("no diagrams to render")]
    EmptyProject,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
