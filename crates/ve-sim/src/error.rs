use thiserror::Error;

use ve_core::{ConfigError, CustomerId};
use ve_path::PathError;

use crate::CustomerState;

/// Failure of a single day run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("path generation failed for {customer}: {source}")]
    Path {
        customer: CustomerId,
        #[source]
        source:   PathError,
    },

    #[error("generated path for {customer} is invalid: {reason}")]
    InvalidPath { customer: CustomerId, reason: String },

    #[error("dwell-time distribution error: {0}")]
    Dwell(String),

    #[error("event for unknown {0}")]
    UnknownCustomer(CustomerId),

    #[error("unexpected event for {customer} in state {state:?}")]
    UnexpectedEvent { customer: CustomerId, state: CustomerState },
}

pub type SimResult<T> = Result<T, SimError>;

/// Failure of a whole multi-day batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("num_days must be at least 1")]
    NoDays,

    #[error("all {days} days failed; first error: {first}")]
    AllDaysFailed { days: u32, first: String },

    #[error("could not build worker pool: {0}")]
    ThreadPool(String),
}

pub type BatchResult<T> = Result<T, BatchError>;
