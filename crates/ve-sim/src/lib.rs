//! `ve-sim` — day runner and multi-day aggregation.
//!
//! # One day
//!
//! ```text
//! DayRng(seed, day) ─► arrivals ─► event queue
//!                                     │ Arrive    → PathGenerator → entrance line
//!                                     │ DwellEnd  → next zone / depart
//!                                     ▼
//!                         ExposureAccumulator ─► DayResult
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`arrival`]     | `Arrival`, `generate_arrivals`                        |
//! | [`admission`]   | `admit`, `AdmissionController`                        |
//! | [`event_queue`] | `EventQueue`, `Event`, `EventKind`                    |
//! | [`customer`]    | `CustomerState`, `CustomerRecord`, `Visit`            |
//! | [`exposure`]    | `ExposureAccumulator`, `ExposureLedger`               |
//! | [`day`]         | `DayRunner`, `DayResult`, `run_day`                   |
//! | [`batch`]       | `run`, `AggregateResult`, `DayFailure`                |
//! | [`observer`]    | `DayObserver`, `NoopObserver`                         |
//! | [`error`]       | `SimError`, `BatchError`                              |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the days of a batch on Rayon (default).           |
//! | `serde`    | Derives `Serialize` on result records.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let venue = builder.build()?;
//! let generator = SyntheticPathGenerator::from_config(&config)?;
//! let result = ve_sim::run(&config, &venue, &generator, 1_000)?;
//! println!("mean exposure {:.2}", result.mean_total_exposure);
//! ```

pub mod admission;
pub mod arrival;
pub mod batch;
pub mod customer;
pub mod day;
pub mod error;
pub mod event_queue;
pub mod exposure;
pub mod observer;


pub use admission::{AdmissionController, admit};
pub use arrival::{Arrival, generate_arrivals};
pub use batch::{AggregateResult, DayFailure, run};
pub use customer::{CustomerRecord, CustomerState, Visit};
pub use day::{DayResult, DayRunner, run_day};
pub use error::{BatchError, BatchResult, SimError, SimResult};
pub use event_queue::{Event, EventKind, EventQueue};
pub use exposure::{ExposureAccumulator, ExposureLedger};
pub use observer::{DayObserver, NoopObserver};
