//! Run configuration.

use crate::{ConfigError, ConfigResult, SimTime};

/// Default log-normal basket-size location parameter.
pub const DEFAULT_BASKET_MU: f64 = 0.07;
/// Default log-normal basket-size scale parameter.
pub const DEFAULT_BASKET_SIGMA: f64 = 0.76;

/// Top-level configuration for one simulated day (and, through the batch
/// runner, for every day of a multi-day experiment).
///
/// Built by the application crate and passed to the day runner; the library
/// never reads or writes configuration files.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Mean customer arrivals per minute.  Must be > 0.
    pub arrival_rate: f64,

    /// Mean dwell per zone visit, in minutes.  Must be > 0.
    pub traversal_time: f64,

    /// Length of the arrival window, in hours.  Must be > 0.
    pub num_hours_open: f64,

    /// Probability that an arriving customer is infectious.  In `[0, 1]`.
    pub infection_proportion: f64,

    /// Occupancy cap density.  `None` = no cap.
    pub max_customers_per_unit_area: Option<f64>,

    /// Floor area used with `max_customers_per_unit_area`.  `None` falls back
    /// to the venue's summed zone area.
    pub floor_area: Option<f64>,

    /// Log-normal basket-size `mu`.  `None` = [`DEFAULT_BASKET_MU`].
    pub basket_mu: Option<f64>,

    /// Log-normal basket-size `sigma`.  `None` = [`DEFAULT_BASKET_SIGMA`].
    pub basket_sigma: Option<f64>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for multi-day runs.  `None` uses rayon's default.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arrival_rate:                2.55,
            traversal_time:              0.2,
            num_hours_open:              14.0,
            infection_proportion:        0.0011,
            max_customers_per_unit_area: None,
            floor_area:                  None,
            basket_mu:                   None,
            basket_sigma:                None,
            seed:                        0,
            num_threads:                 None,
        }
    }
}

impl SimConfig {
    /// Check every numeric parameter.  Nothing is simulated for a config that
    /// fails here.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            return Err(ConfigError::InvalidRate(self.arrival_rate));
        }
        if !(self.traversal_time.is_finite() && self.traversal_time > 0.0) {
            return Err(ConfigError::InvalidTraversalTime(self.traversal_time));
        }
        if !(self.num_hours_open.is_finite() && self.num_hours_open > 0.0) {
            return Err(ConfigError::InvalidHours(self.num_hours_open));
        }
        if !(0.0..=1.0).contains(&self.infection_proportion) {
            return Err(ConfigError::InvalidProportion(self.infection_proportion));
        }
        check_non_negative("max_customers_per_unit_area", self.max_customers_per_unit_area)?;
        check_non_negative("floor_area", self.floor_area)?;

        let mu = self.basket_mu();
        if !mu.is_finite() {
            return Err(ConfigError::InvalidBasket { what: "mu", value: mu });
        }
        let sigma = self.basket_sigma();
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(ConfigError::InvalidBasket { what: "sigma", value: sigma });
        }
        Ok(())
    }

    /// Length of the arrival window in minutes.
    #[inline]
    pub fn opening_minutes(&self) -> f64 {
        self.num_hours_open * 60.0
    }

    /// End of the arrival window as a timestamp.
    #[inline]
    pub fn closing_time(&self) -> SimTime {
        SimTime::from_minutes(self.opening_minutes())
    }

    #[inline]
    pub fn basket_mu(&self) -> f64 {
        self.basket_mu.unwrap_or(DEFAULT_BASKET_MU)
    }

    #[inline]
    pub fn basket_sigma(&self) -> f64 {
        self.basket_sigma.unwrap_or(DEFAULT_BASKET_SIGMA)
    }

    /// Occupancy cap for a venue whose summed zone area is `venue_floor_area`.
    ///
    /// `floor(max_customers_per_unit_area × floor_area)`, where `floor_area`
    /// is the configured value if set, else `venue_floor_area`.  `None` when
    /// no density cap is configured.  A product too large for `f64` gives
    /// `usize::MAX`.
    pub fn capacity(&self, venue_floor_area: f64) -> Option<usize> {
        let density = self.max_customers_per_unit_area?;
        let area = self.floor_area.unwrap_or(venue_floor_area);
        let cap = (density * area).floor();
        // `as` saturates, so an overflowed product means no practical limit.
        Some(if cap > 0.0 { cap as usize } else { 0 })
    }
}

fn check_non_negative(what: &'static str, value: Option<f64>) -> ConfigResult<()> {
    match value {
        Some(v) if !(v.is_finite() && v >= 0.0) => {
            Err(ConfigError::InvalidCapacity { what, value: v })
        }
        _ => Ok(()),
    }
}
