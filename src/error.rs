//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::NodeId;

/// Rejected tree mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0:?} is not live in this tree")]
    StaleNode(NodeId),

    #[error("text node {0:?} cannot have children")]
    TextParent(NodeId),

    #[error("the root node cannot be re-parented or removed")]
    RootChild,

    #[error("appending {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
