//! Multi-day aggregation.
//!
//! Days share only `&SimConfig`, `&VenueGraph` and `&P: PathGenerator`.
//! Each day derives its own seed from `config.seed` and the day index, so a
//! batch gives the same results on any number of threads.  Results are
//! collected in day order regardless of completion order.

use tracing::{info, warn};

use ve_core::SimConfig;
use ve_path::PathGenerator;
use ve_venue::VenueGraph;

use crate::{BatchError, BatchResult, DayResult, NoopObserver, SimResult, run_day};

/// A day whose run returned an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayFailure {
    pub day:     u32,
    pub message: String,
}

/// Results of a multi-day run.
///
/// All statistics are over successful days only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateResult {
    /// Successful days in ascending day order.
    pub days:                Vec<DayResult>,
    pub failed_days:         usize,
    pub failures:            Vec<DayFailure>,
    pub mean_total_exposure: f64,
    /// Sample standard deviation; 0 with fewer than two days.
    pub std_total_exposure:  f64,
    /// Element-wise mean of the per-zone exposure vectors.
    pub mean_zone_exposure:  Vec<f64>,
}

impl AggregateResult {
    fn from_outcomes(outcomes: Vec<(u32, SimResult<DayResult>)>, zone_count: usize) -> BatchResult<Self> {
        let total = outcomes.len() as u32;
        let mut days = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (day, outcome) in outcomes {
            match outcome {
                Ok(result) => days.push(result),
                Err(e) => {
                    warn!(day, error = %e, "day failed");
                    failures.push(DayFailure { day, message: e.to_string() });
                }
            }
        }

        if days.is_empty() {
            let first = failures.first().map(|f| f.message.clone()).unwrap_or_default();
            return Err(BatchError::AllDaysFailed { days: total, first });
        }

        let n = days.len() as f64;
        let totals: Vec<f64> = days.iter().map(|d| d.total_exposure).collect();
        let mean_total_exposure = totals.iter().sum::<f64>() / n;
        let std_total_exposure = if days.len() < 2 {
            0.0
        } else {
            let ss: f64 = totals.iter().map(|t| (t - mean_total_exposure).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        };

        let mut mean_zone_exposure = vec![0.0; zone_count];
        for day in &days {
            for (acc, x) in mean_zone_exposure.iter_mut().zip(day.zone_exposure()) {
                *acc += x;
            }
        }
        for acc in &mut mean_zone_exposure {
            *acc /= n;
        }

        Ok(Self {
            days,
            failed_days: failures.len(),
            failures,
            mean_total_exposure,
            std_total_exposure,
            mean_zone_exposure,
        })
    }

    /// Day × zone exposure matrix, one row per successful day.
    pub fn exposure_matrix(&self) -> Vec<&[f64]> {
        self.days.iter().map(|d| d.zone_exposure()).collect()
    }

    pub fn total_exposures(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.total_exposure).collect()
    }
}

/// Run `num_days` independent days and aggregate them.
///
/// With the `parallel` feature, days run on Rayon's global pool, or on a
/// dedicated pool of `config.num_threads` workers when that is set.
pub fn run<P: PathGenerator + ?Sized>(
    config:    &SimConfig,
    venue:     &VenueGraph,
    generator: &P,
    num_days:  u32,
) -> BatchResult<AggregateResult> {
    config.validate()?;
    if num_days == 0 {
        return Err(BatchError::NoDays);
    }

    let outcomes = run_days(config, venue, generator, num_days)?;
    let result = AggregateResult::from_outcomes(outcomes, venue.zone_count())?;
    info!(
        days = num_days,
        failed = result.failed_days,
        mean_total_exposure = result.mean_total_exposure,
        "batch complete"
    );
    Ok(result)
}

#[cfg(feature = "parallel")]
fn run_days<P: PathGenerator + ?Sized>(
    config:    &SimConfig,
    venue:     &VenueGraph,
    generator: &P,
    num_days:  u32,
) -> BatchResult<Vec<(u32, SimResult<DayResult>)>> {
    use rayon::prelude::*;

    let fan_out = || {
        (0..num_days)
            .into_par_iter()
            .map(|day| (day, run_day(config, venue, generator, day, &mut NoopObserver)))
            .collect::<Vec<_>>()
    };

    match config.num_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| BatchError::ThreadPool(e.to_string()))?;
            Ok(pool.install(fan_out))
        }
        None => Ok(fan_out()),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_days<P: PathGenerator + ?Sized>(
    config:    &SimConfig,
    venue:     &VenueGraph,
    generator: &P,
    num_days:  u32,
) -> BatchResult<Vec<(u32, SimResult<DayResult>)>> {
    Ok((0..num_days)
        .map(|day| (day, run_day(config, venue, generator, day, &mut NoopObserver)))
        .collect())
}
