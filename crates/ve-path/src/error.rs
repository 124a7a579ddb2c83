use thiserror::Error;

use ve_core::ZoneId;
use ve_venue::{GraphError, Role};

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: ZoneId, to: ZoneId },

    #[error("venue has no {0} zones to choose from")]
    EmptyRole(Role),

    #[error("recorded path {index} is invalid: {reason}")]
    InvalidPath { index: usize, reason: String },

    #[error("no recorded paths supplied")]
    NoPaths,

    #[error("basket-size distribution error: {0}")]
    Basket(String),

    #[error("path parse error: {0}")]
    Parse(String),

    #[error("venue error: {0}")]
    Graph(GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<GraphError> for PathError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::NoRoute { from, to } => PathError::NoRoute { from, to },
            other => PathError::Graph(other),
        }
    }
}

pub type PathResult<T> = Result<T, PathError>;
