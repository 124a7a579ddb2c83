//! Deterministic per-day and per-customer RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every simulated day owns a `DayRng` seeded by:
//!
//!   day_seed = mix(master_seed + (day + 1) * GOLDEN)
//!
//! and every customer of that day gets its own `CustomerRng` seeded by:
//!
//!   seed = mix(mix(day_seed ^ CUSTOMER_DOMAIN) + (customer_id + 1) * GOLDEN)
//!
//! `mix` is the splitmix64 finalizer and `GOLDEN` the 64-bit fractional part
//! of the golden ratio.  Each level goes through the finalizer, so a day seed
//! and a customer index never cancel out: customer `c` of day `d` and
//! customer `d` of day `c` get unrelated streams, and no customer stream
//! reproduces another day's arrival stream.
//!
//! - Days never share RNG state, so they can run on any thread in any order.
//! - A customer's path and dwell times depend only on its own stream, not on
//!   how many events other customers consumed before it.
//! - There is no process-wide generator anywhere in the workspace.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CustomerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

/// Separates customer seeds from day seeds derived from the same value.
const CUSTOMER_DOMAIN: u64 = 0xc2b2_ae3d_27d4_eb4f;

/// splitmix64 output function.
#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

// ── CustomerRng ───────────────────────────────────────────────────────────────

/// Per-customer deterministic RNG.
///
/// Drives path generation and per-zone dwell sampling for a single customer.
pub struct CustomerRng(SmallRng);

impl CustomerRng {
    /// Seed deterministically from the day's seed and a customer ID.
    pub fn new(day_seed: u64, customer: CustomerId) -> Self {
        let base = mix(day_seed ^ CUSTOMER_DOMAIN);
        let seed = mix(base.wrapping_add((customer.0 as u64 + 1).wrapping_mul(GOLDEN)));
        CustomerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` helpers that need a
    /// concrete `Rng` (`rand::seq::index::sample`, …).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── DayRng ────────────────────────────────────────────────────────────────────

/// Day-level RNG for the arrival process.
///
/// Holds the day seed so per-customer streams can be derived from it.
pub struct DayRng {
    seed: u64,
    rng:  SmallRng,
}

impl DayRng {
    pub fn new(seed: u64) -> Self {
        DayRng { seed, rng: SmallRng::seed_from_u64(seed) }
    }

    /// Seed for day `day` of a batch rooted at `master_seed`.
    #[inline]
    pub fn day_seed(master_seed: u64, day: u32) -> u64 {
        mix(master_seed.wrapping_add((day as u64 + 1).wrapping_mul(GOLDEN)))
    }

    /// The stream for day `day` of a batch rooted at `master_seed`.
    pub fn for_day(master_seed: u64, day: u32) -> Self {
        Self::new(Self::day_seed(master_seed, day))
    }

    /// The seed this stream was created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the private stream of `customer` for this day.
    #[inline]
    pub fn customer_rng(&self, customer: CustomerId) -> CustomerRng {
        CustomerRng::new(self.seed, customer)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.rng)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}
