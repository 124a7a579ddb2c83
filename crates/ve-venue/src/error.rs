//! Venue-graph error type.

use thiserror::Error;

use ve_core::ZoneId;

use crate::Role;

/// Errors produced by `ve-venue`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("venue has no {0} zones")]
    InvalidRole(Role),

    #[error("{from} cannot reach any {role} zone")]
    Unreachable { from: ZoneId, role: Role },

    #[error("zone {0} not found in venue")]
    UnknownZone(ZoneId),

    #[error("no route from {from} to {to}")]
    NoRoute { from: ZoneId, to: ZoneId },
}

pub type GraphResult<T> = Result<T, GraphError>;
