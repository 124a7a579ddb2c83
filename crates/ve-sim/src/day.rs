//! One simulated day: the discrete-event loop.
//!
//! # Event loop
//!
//! ```text
//! arrivals = Poisson process over the opening window (day stream)
//! push Arrive(c) for every arrival, in arrival order
//!
//! while an event is pending, pop the earliest:
//!   Arrive(c)   → generate c's path (c's own stream)
//!                   NoRoute → drop c, keep going
//!                 join the entrance line; admit from the line head
//!   DwellEnd(c) → leave current zone
//!                 next zone on the path → enter it, push DwellEnd
//!                 end of path           → depart; admit from the line head
//! ```
//!
//! Entering a zone draws that visit's dwell time `Exp(mean = traversal_time)`
//! from the customer's stream.  Customers inside or queued at closing finish
//! their visit; the day ends when the queue drains.

use rand_distr::Exp;
use tracing::{debug, warn};

use ve_core::{CustomerId, DayRng, SimConfig, SimTime, ZoneId};
use ve_path::{PathError, PathGenerator};
use ve_venue::VenueGraph;

use crate::admission::AdmissionController;
use crate::arrival::generate_arrivals;
use crate::customer::{Customer, CustomerRecord, CustomerState, Visit};
use crate::event_queue::{Event, EventKind, EventQueue};
use crate::exposure::{ExposureAccumulator, ExposureLedger};
use crate::{DayObserver, SimError, SimResult};

// ── DayResult ─────────────────────────────────────────────────────────────────

/// Outcome of one simulated day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayResult {
    pub day:  u32,
    pub seed: u64,

    /// `∑ I·S·Δt` over all zones, in customer-minutes².
    pub total_exposure: f64,
    /// Infectious person-minutes spent at tills (cashier exposure).
    pub till_exposure:  f64,
    pub ledger:         ExposureLedger,

    pub customers_arrived:     usize,
    pub customers_infectious:  usize,
    pub customers_susceptible: usize,
    pub customers_served:      usize,
    /// Had to wait in the entrance line before getting in.
    pub customers_blocked:     usize,
    /// Still in the entrance line when the day ended.
    pub customers_turned_away: usize,
    /// No route for the generated path.
    pub customers_dropped:     usize,

    pub max_occupancy:      usize,
    pub closing_time:       SimTime,
    pub mean_time_in_venue: f64,
    pub mean_entrance_wait: f64,

    pub customers: Vec<CustomerRecord>,
}

impl DayResult {
    /// Exposure per zone, indexed by `ZoneId`.
    pub fn zone_exposure(&self) -> &[f64] {
        &self.ledger.per_zone
    }

    pub fn exposure_encounters(&self) -> u64 {
        self.ledger.total_encounters()
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

struct Occupancy {
    per_zone: Vec<u32>,
    inside:   usize,
    peak:     usize,
}

impl Occupancy {
    fn new(zone_count: usize) -> Self {
        Self { per_zone: vec![0; zone_count], inside: 0, peak: 0 }
    }

    fn admit(&mut self) {
        self.inside += 1;
        self.peak = self.peak.max(self.inside);
    }
}

// ── DayRunner ─────────────────────────────────────────────────────────────────

/// All mutable state of one day.
///
/// Created by [`run_day`]; everything here is discarded when the day ends
/// except the returned [`DayResult`].
pub struct DayRunner<'a, P: PathGenerator + ?Sized> {
    config:    &'a SimConfig,
    venue:     &'a VenueGraph,
    generator: &'a P,
    day:       u32,
    seed:      u64,
    dwell:     Exp<f64>,

    customers: Vec<Customer>,
    events:    EventQueue,
    admission: AdmissionController,
    exposure:  ExposureAccumulator,
    occupancy: Occupancy,

    blocked:        usize,
    dropped:        usize,
    last_departure: SimTime,
}

impl<'a, P: PathGenerator + ?Sized> DayRunner<'a, P> {
    /// Draw the day's arrivals and seed the event queue.
    pub fn new(
        config:    &'a SimConfig,
        venue:     &'a VenueGraph,
        generator: &'a P,
        day:       u32,
    ) -> SimResult<Self> {
        config.validate()?;

        let seed = DayRng::day_seed(config.seed, day);
        let mut day_rng = DayRng::new(seed);
        let arrivals = generate_arrivals(
            config.arrival_rate,
            config.opening_minutes(),
            config.infection_proportion,
            &mut day_rng,
        )?;
        let dwell = Exp::new(1.0 / config.traversal_time)
            .map_err(|e| SimError::Dwell(e.to_string()))?;

        let mut customers = Vec::with_capacity(arrivals.len());
        let mut events = EventQueue::new();
        for (i, arrival) in arrivals.iter().enumerate() {
            let id = CustomerId(i as u32);
            customers.push(Customer::new(
                id,
                arrival.time,
                arrival.infectious,
                day_rng.customer_rng(id),
            ));
            events.push(arrival.time, Event { customer: id, kind: EventKind::Arrive });
        }

        let zone_count = venue.zone_count();
        Ok(Self {
            config,
            venue,
            generator,
            day,
            seed,
            dwell,
            customers,
            events,
            admission: AdmissionController::new(config.capacity(venue.floor_area())),
            exposure: ExposureAccumulator::new(zone_count),
            occupancy: Occupancy::new(zone_count),
            blocked: 0,
            dropped: 0,
            last_departure: SimTime::ZERO,
        })
    }

    /// Process events until the queue drains.
    pub fn run<O: DayObserver + ?Sized>(mut self, observer: &mut O) -> SimResult<DayResult> {
        while let Some((now, event)) = self.events.pop() {
            match event.kind {
                EventKind::Arrive => self.on_arrive(event.customer, now, observer)?,
                EventKind::DwellEnd => self.on_dwell_end(event.customer, now, observer)?,
            }
        }
        Ok(self.finish(observer))
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn on_arrive<O: DayObserver + ?Sized>(
        &mut self,
        id:       CustomerId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        observer.on_arrival(id, now);
        let customer = customer_mut(&mut self.customers, id)?;

        let path = match self.generator.generate_path(self.venue, &mut customer.rng) {
            Ok(path) => path,
            Err(PathError::NoRoute { from, to }) => {
                warn!(day = self.day, customer = %id, %from, %to, "no route; customer dropped");
                customer.record.dropped = true;
                customer.state = CustomerState::Departed;
                self.dropped += 1;
                return Ok(());
            }
            Err(source) => return Err(SimError::Path { customer: id, source }),
        };
        check_path(self.venue, id, &path)?;

        customer.path = path;
        customer.state = CustomerState::QueuedAtEntrance;
        self.admission.join(id);
        self.admit_waiting(now, observer)?;

        if customer_mut(&mut self.customers, id)?.state == CustomerState::QueuedAtEntrance {
            self.blocked += 1;
        }
        Ok(())
    }

    fn on_dwell_end<O: DayObserver + ?Sized>(
        &mut self,
        id:       CustomerId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        let customer = customer_mut(&mut self.customers, id)?;
        let CustomerState::InZone(zone) = customer.state else {
            return Err(SimError::UnexpectedEvent { customer: id, state: customer.state });
        };

        let infectious = customer.infectious();
        customer.record.exposure += self.exposure.leave(zone, infectious, now, customer.mark);
        let count = &mut self.occupancy.per_zone[zone.index()];
        *count = count.saturating_sub(1);

        customer.step += 1;
        if customer.step < customer.path.len() {
            return self.enter_zone(id, now, observer);
        }

        customer.state = CustomerState::Departed;
        customer.record.departure = Some(now);
        self.occupancy.inside = self.occupancy.inside.saturating_sub(1);
        self.last_departure = self.last_departure.max(now);
        observer.on_departed(id, now);
        self.admit_waiting(now, observer)
    }

    /// Let customers in from the head of the line while capacity allows.
    fn admit_waiting<O: DayObserver + ?Sized>(
        &mut self,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        while let Some(id) = self.admission.next_admitted(self.occupancy.inside) {
            self.occupancy.admit();
            customer_mut(&mut self.customers, id)?.record.entry = Some(now);
            observer.on_admitted(id, now);
            self.enter_zone(id, now, observer)?;
        }
        Ok(())
    }

    /// Put `id` into `path[step]` and schedule the end of its dwell.
    fn enter_zone<O: DayObserver + ?Sized>(
        &mut self,
        id:       CustomerId,
        now:      SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        let customer = customer_mut(&mut self.customers, id)?;
        let zone = customer.path[customer.step];

        customer.state = CustomerState::InZone(zone);
        customer.mark = self.exposure.enter(zone, customer.infectious(), now);
        self.occupancy.per_zone[zone.index()] += 1;

        let dwell: f64 = customer.rng.sample(&self.dwell);
        customer.record.visits.push(Visit { zone, dwell });
        self.events.push(now + dwell, Event { customer: id, kind: EventKind::DwellEnd });
        observer.on_zone_entered(id, zone, now);
        Ok(())
    }

    // ── Day end ───────────────────────────────────────────────────────────

    fn finish<O: DayObserver + ?Sized>(mut self, observer: &mut O) -> DayResult {
        let turned_away = self.admission.drain().count();
        let ledger = self.exposure.finish();

        let records: Vec<CustomerRecord> =
            self.customers.into_iter().map(|c| c.record).collect();
        let infectious = records.iter().filter(|r| r.infectious).count();
        let served = records.iter().filter(|r| r.served()).count();
        let mean_time_in_venue = mean(records.iter().filter_map(|r| r.time_in_venue()));
        let mean_entrance_wait = mean(
            records.iter().filter(|r| r.served()).filter_map(|r| r.entrance_wait()),
        );

        let result = DayResult {
            day:                   self.day,
            seed:                  self.seed,
            total_exposure:        ledger.total(),
            till_exposure:         ledger.infectious_time_in(self.venue.tills()),
            customers_arrived:     records.len(),
            customers_infectious:  infectious,
            customers_susceptible: records.len() - infectious,
            customers_served:      served,
            customers_blocked:     self.blocked,
            customers_turned_away: turned_away,
            customers_dropped:     self.dropped,
            max_occupancy:         self.occupancy.peak,
            closing_time:          self.last_departure.max(self.config.closing_time()),
            mean_time_in_venue,
            mean_entrance_wait,
            ledger,
            customers:             records,
        };

        debug!(
            day = result.day,
            arrived = result.customers_arrived,
            served = result.customers_served,
            total_exposure = result.total_exposure,
            "day complete"
        );
        observer.on_day_end(&result);
        result
    }
}

/// Run day `day` of a batch rooted at `config.seed`.
///
/// Identical inputs always give an identical [`DayResult`].
pub fn run_day<P, O>(
    config:    &SimConfig,
    venue:     &VenueGraph,
    generator: &P,
    day:       u32,
    observer:  &mut O,
) -> SimResult<DayResult>
where
    P: PathGenerator + ?Sized,
    O: DayObserver + ?Sized,
{
    DayRunner::new(config, venue, generator, day)?.run(observer)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn customer_mut(customers: &mut [Customer], id: CustomerId) -> SimResult<&mut Customer> {
    customers.get_mut(id.index()).ok_or(SimError::UnknownCustomer(id))
}

fn check_path(venue: &VenueGraph, customer: CustomerId, path: &[ZoneId]) -> SimResult<()> {
    if path.is_empty() {
        return Err(SimError::InvalidPath { customer, reason: "empty path".into() });
    }
    if let Some(z) = path.iter().find(|z| venue.zone(**z).is_none()) {
        return Err(SimError::InvalidPath { customer, reason: format!("unknown zone {z}") });
    }
    Ok(())
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
