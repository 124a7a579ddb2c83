//! `ve-venue` — venue zone graph, roles, and shortest-path index.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`zone`]     | `Zone`, `Position`, `Edge`, `Role`, `Roles`                  |
//! | [`topology`] | `Topology`, CSR adjacency over directed edges               |
//! | [`router`]   | `Router` trait, `SearchTree`, `DijkstraRouter`               |
//! | [`table`]    | `PathTable`, search trees rooted at every role zone         |
//! | [`venue`]    | `VenueGraph`, `VenueGraphBuilder`                            |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on zone and edge types.    |

pub mod error;
pub mod router;
pub mod table;
pub mod topology;
pub mod venue;
pub mod zone;


pub use error::{GraphError, GraphResult};
pub use router::{DijkstraRouter, Router, SearchTree};
pub use table::PathTable;
pub use topology::Topology;
pub use venue::{VenueGraph, VenueGraphBuilder};
pub use zone::{Edge, Position, Role, Roles, Zone};
