//! Per-customer lifecycle state and the record kept after departure.

use ve_core::{CustomerId, CustomerRng, SimTime, ZoneId};

/// Where a customer is in its visit.
///
/// ```text
/// PendingArrival → QueuedAtEntrance → InZone(z₀) → … → InZone(zₙ) → Departed
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerState {
    PendingArrival,
    QueuedAtEntrance,
    InZone(ZoneId),
    Departed,
}

/// One zone visit: where, and for how many minutes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Visit {
    pub zone:  ZoneId,
    pub dwell: f64,
}

/// Everything recorded about one customer over a day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustomerRecord {
    pub id:         CustomerId,
    pub arrival:    SimTime,
    pub infectious: bool,
    /// `None` if the customer never got past the entrance.
    pub entry:      Option<SimTime>,
    pub departure:  Option<SimTime>,
    pub visits:     Vec<Visit>,
    /// Minutes co-present with infectious customers, weighted by how many
    /// were present.  Always 0 for infectious customers.
    pub exposure:   f64,
    /// Path generation failed; the customer never queued.
    pub dropped:    bool,
}

impl CustomerRecord {
    fn new(id: CustomerId, arrival: SimTime, infectious: bool) -> Self {
        Self {
            id,
            arrival,
            infectious,
            entry: None,
            departure: None,
            visits: Vec::new(),
            exposure: 0.0,
            dropped: false,
        }
    }

    /// Minutes between entry and departure.
    pub fn time_in_venue(&self) -> Option<f64> {
        Some(self.departure?.since(self.entry?))
    }

    /// Minutes spent waiting at the entrance.
    pub fn entrance_wait(&self) -> Option<f64> {
        Some(self.entry?.since(self.arrival))
    }

    pub fn served(&self) -> bool {
        self.departure.is_some()
    }
}

/// Live state of one customer during a day.
pub(crate) struct Customer {
    pub state:  CustomerState,
    pub record: CustomerRecord,
    pub rng:    CustomerRng,
    pub path:   Vec<ZoneId>,
    /// Index into `path` of the current zone.
    pub step:   usize,
    /// Zone's infectious-time integral when this customer entered it.
    pub mark:   f64,
}

impl Customer {
    pub fn new(id: CustomerId, arrival: SimTime, infectious: bool, rng: CustomerRng) -> Self {
        Self {
            state: CustomerState::PendingArrival,
            record: CustomerRecord::new(id, arrival, infectious),
            rng,
            path: Vec::new(),
            step: 0,
            mark: 0.0,
        }
    }

    #[inline]
    pub fn infectious(&self) -> bool {
        self.record.infectious
    }
}
