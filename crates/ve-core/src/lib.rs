//! `ve-core` — foundational types for the venue exposure simulator.
//!
//! This crate is a dependency of every other `ve-*` crate.  It has no `ve-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ZoneId`, `CustomerId`                                |
//! | [`time`]        | `SimTime` (minutes since opening)                     |
//! | [`rng`]         | `CustomerRng` (per-customer), `DayRng` (per-day)      |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{ConfigError, ConfigResult};
pub use ids::{CustomerId, ZoneId};
pub use rng::{CustomerRng, DayRng};
pub use time::SimTime;
