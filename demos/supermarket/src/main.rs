//! supermarket — exposure sweep over a synthetic 24-zone store.
//!
//! Runs three experiments and prints one JSON object per line:
//!
//! 1. arrival-rate sweep on the two-way and one-way layouts,
//! 2. occupancy-cap sweep on the two-way layout,
//! 3. replay of a handful of recorded paths (embedded CSV).
//!
//! Set `RUST_LOG=debug` to see per-day completion logs.

mod store;

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ve_core::SimConfig;
use ve_path::{EmpiricalPathSampler, PathGenerator, SyntheticPathGenerator, load_paths_reader};
use ve_sim::AggregateResult;
use ve_venue::VenueGraph;

use store::build_store;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 42;
const NUM_DAYS:      u32   = 200;
const ARRIVAL_RATES: [f64; 4] = [0.5, 1.0, 2.0, 4.0];
/// Customers per square metre.
const DENSITY_CAPS:  [f64; 3] = [0.05, 0.1, 0.2];

// Waypoints only; the sampler fills in the aisles between them.
const RECORDED_PATHS_CSV: &str = "\
path_id,step,zone\n\
0,0,0\n\
0,1,8\n\
0,2,19\n\
0,3,23\n\
1,0,0\n\
1,1,5\n\
1,2,14\n\
1,3,21\n\
1,4,23\n\
2,0,0\n\
2,1,20\n\
2,2,23\n\
";

// ── Output rows ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SweepRow {
    experiment:          &'static str,
    layout:              &'static str,
    arrival_rate:        f64,
    capacity:            Option<usize>,
    days:                usize,
    failed_days:         usize,
    mean_total_exposure: f64,
    std_total_exposure:  f64,
    mean_till_exposure:  f64,
    mean_served:         f64,
    mean_turned_away:    f64,
}

impl SweepRow {
    fn new(
        experiment: &'static str,
        layout:     &'static str,
        config:     &SimConfig,
        venue:      &VenueGraph,
        result:     &AggregateResult,
    ) -> Self {
        let n = result.days.len().max(1) as f64;
        let mean = |f: fn(&ve_sim::DayResult) -> f64| result.days.iter().map(f).sum::<f64>() / n;
        Self {
            experiment,
            layout,
            arrival_rate:        config.arrival_rate,
            capacity:            config.capacity(venue.floor_area()),
            days:                result.days.len(),
            failed_days:         result.failed_days,
            mean_total_exposure: result.mean_total_exposure,
            std_total_exposure:  result.std_total_exposure,
            mean_till_exposure:  mean(|d| d.till_exposure),
            mean_served:         mean(|d| d.customers_served as f64),
            mean_turned_away:    mean(|d| d.customers_turned_away as f64),
        }
    }
}

fn sweep<P: PathGenerator>(
    experiment: &'static str,
    layout:     &'static str,
    config:     &SimConfig,
    venue:      &VenueGraph,
    generator:  &P,
) -> Result<()> {
    let result = ve_sim::run(config, venue, generator, NUM_DAYS)?;
    let row = SweepRow::new(experiment, layout, config, venue, &result);
    println!("{}", serde_json::to_string(&row)?);
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let t0 = Instant::now();
    let base = SimConfig { seed: SEED, ..SimConfig::default() };
    base.validate()?;
    let generator = SyntheticPathGenerator::from_config(&base)?;

    let two_way = build_store(false)?;
    let one_way = build_store(true)?;
    info!(zones = two_way.zone_count(), floor_area = two_way.floor_area(), "store built");

    // ── 1. Arrival-rate sweep ─────────────────────────────────────────────
    for (layout, venue) in [("two_way", &two_way), ("one_way", &one_way)] {
        for rate in ARRIVAL_RATES {
            let config = SimConfig { arrival_rate: rate, ..base.clone() };
            sweep("arrival_rate", layout, &config, venue, &generator)?;
        }
    }

    // ── 2. Occupancy caps ─────────────────────────────────────────────────
    for density in DENSITY_CAPS {
        let config = SimConfig {
            arrival_rate: 4.0,
            max_customers_per_unit_area: Some(density),
            ..base.clone()
        };
        sweep("capacity", "two_way", &config, &two_way, &generator)?;
    }

    // ── 3. Recorded paths ─────────────────────────────────────────────────
    let recorded = load_paths_reader(Cursor::new(RECORDED_PATHS_CSV))?;
    let sampler = EmpiricalPathSampler::new(&two_way, recorded)?;
    for rate in ARRIVAL_RATES {
        let config = SimConfig { arrival_rate: rate, ..base.clone() };
        sweep("empirical", "two_way", &config, &two_way, &sampler)?;
    }

    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "all experiments complete");
    Ok(())
}
