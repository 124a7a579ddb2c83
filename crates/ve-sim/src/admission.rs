//! Capacity-limited entrance with a FIFO waiting line.

use std::collections::VecDeque;

use ve_core::CustomerId;

/// `true` if a customer may enter while `current` customers are inside.
///
/// `None` means no cap.  A cap of 0 admits nobody.
#[inline]
pub fn admit(current: usize, capacity: Option<usize>) -> bool {
    match capacity {
        None => true,
        Some(cap) => current < cap,
    }
}

/// Entrance queue for one day.
///
/// Customers are admitted strictly in the order they joined; nobody leaves
/// the line without entering.
#[derive(Debug, Default)]
pub struct AdmissionController {
    capacity: Option<usize>,
    waiting:  VecDeque<CustomerId>,
}

impl AdmissionController {
    pub fn new(capacity: Option<usize>) -> Self {
        Self { capacity, waiting: VecDeque::new() }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn join(&mut self, customer: CustomerId) {
        self.waiting.push_back(customer);
    }

    /// Pop the head of the line if it may enter at occupancy `current`.
    pub fn next_admitted(&mut self, current: usize) -> Option<CustomerId> {
        if self.waiting.is_empty() || !admit(current, self.capacity) {
            return None;
        }
        self.waiting.pop_front()
    }

    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Everyone still in line, in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = CustomerId> + '_ {
        self.waiting.drain(..)
    }
}
