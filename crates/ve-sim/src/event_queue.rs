//! `EventQueue` — time-ordered queue of pending customer events.
//!
//! # Ordering
//!
//! Events pop in timestamp order.  Events with the same timestamp pop in
//! arrival order of their customers (`CustomerId` order), and events of the
//! same customer in the order they were pushed.  A dwell end and a new
//! arrival landing on the same instant are therefore resolved by who arrived
//! first, not by which event was scheduled first.
//!
//! `BTreeMap` gives O(log N) push and pop.  The push sequence number makes
//! every key unique.

use std::collections::BTreeMap;

use ve_core::{CustomerId, SimTime};

/// What happens to a customer at an event's timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// The customer reaches the entrance line.
    Arrive,
    /// The customer's dwell in its current zone ends.
    DwellEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub customer: CustomerId,
    pub kind:     EventKind,
}

#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<(SimTime, CustomerId, u64), EventKind>,
    /// Next push sequence number.
    seq:   u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at: SimTime, event: Event) {
        self.inner.insert((at, event.customer, self.seq), event.kind);
        self.seq += 1;
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<(SimTime, Event)> {
        let ((at, customer, _), kind) = self.inner.pop_first()?;
        Some((at, Event { customer, kind }))
    }

    /// Timestamp of the earliest pending event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.first_key_value().map(|(&(at, _, _), _)| at)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
