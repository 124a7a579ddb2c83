//! Day observer trait for instrumentation and tracing.

use ve_core::{CustomerId, SimTime, ZoneId};

use crate::DayResult;

/// Callbacks invoked by the day runner as customers move through the venue.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: occupancy trace
///
/// ```rust,ignore
/// struct Trace(Vec<(SimTime, ZoneId)>);
///
/// impl DayObserver for Trace {
///     fn on_zone_entered(&mut self, _c: CustomerId, zone: ZoneId, at: SimTime) {
///         self.0.push((at, zone));
///     }
/// }
/// ```
pub trait DayObserver {
    /// The customer reached the entrance line.
    fn on_arrival(&mut self, _customer: CustomerId, _at: SimTime) {}

    /// The customer was let in.
    fn on_admitted(&mut self, _customer: CustomerId, _at: SimTime) {}

    /// The customer stepped into `zone`.
    fn on_zone_entered(&mut self, _customer: CustomerId, _zone: ZoneId, _at: SimTime) {}

    /// The customer left the venue.
    fn on_departed(&mut self, _customer: CustomerId, _at: SimTime) {}

    /// Called once, after the event queue has drained.
    fn on_day_end(&mut self, _result: &DayResult) {}
}

/// A [`DayObserver`] that does nothing.
pub struct NoopObserver;

impl DayObserver for NoopObserver {}
