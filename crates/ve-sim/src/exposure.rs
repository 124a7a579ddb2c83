//! Exposure accounting.
//!
//! For each zone the accumulator keeps the number of infectious (I) and
//! susceptible (S) customers currently inside.  Before any change to a
//! zone's occupants, the time since that zone last changed is folded into
//! three integrals:
//!
//! | Integral            | Increment   | Meaning                                  |
//! |---------------------|-------------|------------------------------------------|
//! | `exposure`          | `I · S · Δt`| pairwise co-presence, the headline metric|
//! | `infectious_time`   | `I · Δt`    | infectious person-minutes in the zone    |
//!
//! `infectious_time` doubles as the per-customer meter: a susceptible
//! customer's exposure in a zone is the growth of that zone's
//! `infectious_time` between its entry and exit.  Summed over susceptible
//! customers this equals the zone's `exposure`.
//!
//! No transmission probability is applied here.

use ve_core::{SimTime, ZoneId};

#[derive(Clone, Copy, Debug, Default)]
struct ZoneTally {
    infectious:  u32,
    susceptible: u32,
    last:        SimTime,
}

/// Running per-zone counts and integrals for one day.
pub struct ExposureAccumulator {
    tallies:         Vec<ZoneTally>,
    exposure:        Vec<f64>,
    infectious_time: Vec<f64>,
    encounters:      Vec<u64>,
}

impl ExposureAccumulator {
    pub fn new(zone_count: usize) -> Self {
        Self {
            tallies:         vec![ZoneTally::default(); zone_count],
            exposure:        vec![0.0; zone_count],
            infectious_time: vec![0.0; zone_count],
            encounters:      vec![0; zone_count],
        }
    }

    fn advance(&mut self, zone: ZoneId, now: SimTime) {
        let i = zone.index();
        let tally = &mut self.tallies[i];
        let dt = now.since(tally.last);
        if dt > 0.0 && tally.infectious > 0 {
            let inf = tally.infectious as f64;
            self.exposure[i] += inf * tally.susceptible as f64 * dt;
            self.infectious_time[i] += inf * dt;
        }
        tally.last = now;
    }

    /// Record a customer entering `zone` at `now`.
    ///
    /// Returns the zone's infectious-time meter reading, to be passed back
    /// to [`leave`](Self::leave).
    pub fn enter(&mut self, zone: ZoneId, infectious: bool, now: SimTime) -> f64 {
        self.advance(zone, now);
        let i = zone.index();
        let tally = &mut self.tallies[i];
        if infectious {
            self.encounters[i] += tally.susceptible as u64;
            tally.infectious += 1;
        } else {
            self.encounters[i] += tally.infectious as u64;
            tally.susceptible += 1;
        }
        self.infectious_time[i]
    }

    /// Record a customer leaving `zone` at `now`.
    ///
    /// Returns the customer's exposure in this visit: the meter's growth
    /// since `mark` for a susceptible customer, 0 for an infectious one.
    pub fn leave(&mut self, zone: ZoneId, infectious: bool, now: SimTime, mark: f64) -> f64 {
        self.advance(zone, now);
        let i = zone.index();
        let tally = &mut self.tallies[i];
        if infectious {
            tally.infectious = tally.infectious.saturating_sub(1);
            0.0
        } else {
            tally.susceptible = tally.susceptible.saturating_sub(1);
            self.infectious_time[i] - mark
        }
    }

    /// `(infectious, susceptible)` currently in `zone`.
    pub fn counts(&self, zone: ZoneId) -> (u32, u32) {
        let t = &self.tallies[zone.index()];
        (t.infectious, t.susceptible)
    }

    pub fn finish(self) -> ExposureLedger {
        ExposureLedger {
            per_zone:        self.exposure,
            infectious_time: self.infectious_time,
            encounters:      self.encounters,
        }
    }
}

/// Final per-zone integrals for one day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExposureLedger {
    /// `∑ I·S·Δt` per zone, indexed by `ZoneId`.
    pub per_zone:        Vec<f64>,
    /// `∑ I·Δt` per zone.
    pub infectious_time: Vec<f64>,
    /// Susceptible–infectious pairings that began in each zone.
    pub encounters:      Vec<u64>,
}

impl ExposureLedger {
    pub fn total(&self) -> f64 {
        self.per_zone.iter().sum()
    }

    /// Infectious person-minutes summed over `zones` (e.g. the tills, for
    /// cashier exposure).
    pub fn infectious_time_in(&self, zones: &[ZoneId]) -> f64 {
        zones
            .iter()
            .filter_map(|z| self.infectious_time.get(z.index()))
            .sum()
    }

    pub fn total_encounters(&self) -> u64 {
        self.encounters.iter().sum()
    }
}
