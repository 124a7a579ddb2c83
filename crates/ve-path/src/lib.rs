//! `ve-path` — customer path generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`generator`] | `PathGenerator` trait, `expand_waypoints`                      |
//! | [`synthetic`] | `BasketParams`, `SyntheticPathGenerator` (log-normal basket)   |
//! | [`empirical`] | `EmpiricalPathSampler` (replay of recorded paths)              |
//! | [`loader`]    | `load_paths_csv`, `load_paths_reader`                          |
//! | [`error`]     | `PathError`, `PathResult<T>`                                   |
//!
//! # Path shape
//!
//! Every generated path starts at an entrance, ends at an exit, and visits a
//! till before the exit.  Consecutive zones are always joined by an allowed
//! edge: waypoints are expanded through the venue's shortest-path table, so
//! the returned sequence includes every transit zone walked through.

pub mod empirical;
pub mod error;
pub mod generator;
pub mod loader;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use empirical::EmpiricalPathSampler;
pub use error::{PathError, PathResult};
pub use generator::{PathGenerator, expand_waypoints};
pub use loader::{load_paths_csv, load_paths_reader};
pub use synthetic::{BasketParams, SyntheticPathGenerator};
