//! Synthetic shopping paths: log-normal basket, greedy item tour.
//!
//! # Algorithm
//!
//! 1. Basket size `k = round(X)`, `X ~ LogNormal(mu, sigma)`, clamped to
//!    `[0, |items|]`.
//! 2. `k` distinct item zones, uniformly without replacement.
//! 3. One entrance, uniformly.
//! 4. Greedy nearest-neighbour tour of the items from the entrance: always
//!    walk to the closest unvisited item (hop distance, lower `ZoneId` on
//!    ties).
//! 5. One till, uniformly among tills reachable from the tour's last stop;
//!    one exit, uniformly among exits reachable from that till.
//! 6. Waypoints `entrance, items…, till, exit` expanded through the
//!    shortest-path table.
//!
//! An empty basket still routes through a till.

use rand_distr::LogNormal;

use ve_core::{CustomerRng, SimConfig, ZoneId, config};
use ve_venue::{Role, VenueGraph};

use crate::{PathError, PathGenerator, PathResult, expand_waypoints};

// ── BasketParams ──────────────────────────────────────────────────────────────

/// Log-normal basket-size parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasketParams {
    pub mu:    f64,
    pub sigma: f64,
}

impl Default for BasketParams {
    fn default() -> Self {
        Self { mu: config::DEFAULT_BASKET_MU, sigma: config::DEFAULT_BASKET_SIGMA }
    }
}

impl BasketParams {
    pub fn from_config(cfg: &SimConfig) -> Self {
        Self { mu: cfg.basket_mu(), sigma: cfg.basket_sigma() }
    }
}

// ── SyntheticPathGenerator ────────────────────────────────────────────────────

/// Default [`PathGenerator`]: random basket, greedy tour, till, exit.
#[derive(Clone, Debug)]
pub struct SyntheticPathGenerator {
    params: BasketParams,
    basket: LogNormal<f64>,
}

impl SyntheticPathGenerator {
    pub fn new(params: BasketParams) -> PathResult<Self> {
        let basket = LogNormal::new(params.mu, params.sigma)
            .map_err(|e| PathError::Basket(e.to_string()))?;
        Ok(Self { params, basket })
    }

    pub fn from_config(cfg: &SimConfig) -> PathResult<Self> {
        Self::new(BasketParams::from_config(cfg))
    }

    pub fn params(&self) -> BasketParams {
        self.params
    }

    /// Draw a basket size for a venue with `item_count` item zones.
    pub fn sample_basket_size(&self, item_count: usize, rng: &mut CustomerRng) -> usize {
        let x: f64 = rng.sample(&self.basket);
        let k = x.round();
        if k.is_finite() && k > 0.0 {
            (k as usize).min(item_count)
        } else {
            0
        }
    }
}

impl PathGenerator for SyntheticPathGenerator {
    fn generate_path(&self, venue: &VenueGraph, rng: &mut CustomerRng) -> PathResult<Vec<ZoneId>> {
        let items = venue.items();
        let k = self.sample_basket_size(items.len(), rng);
        let basket: Vec<ZoneId> = rand::seq::index::sample(rng.inner(), items.len(), k)
            .into_iter()
            .map(|i| items[i])
            .collect();

        let entrance = *rng
            .choose(venue.entrances())
            .ok_or(PathError::EmptyRole(Role::Entrance))?;

        let mut waypoints = Vec::with_capacity(k + 3);
        waypoints.push(entrance);
        nearest_neighbor_tour(venue, entrance, basket, &mut waypoints)?;

        let last = waypoints[waypoints.len() - 1];
        let till = choose_reachable(venue, rng, last, venue.tills(), Role::Till)?;
        let exit = choose_reachable(venue, rng, till, venue.exits(), Role::Exit)?;
        waypoints.push(till);
        waypoints.push(exit);

        expand_waypoints(venue, &waypoints)
    }
}

/// Append `remaining` to `out` in greedy nearest-neighbour order from `start`.
fn nearest_neighbor_tour(
    venue:         &VenueGraph,
    start:         ZoneId,
    mut remaining: Vec<ZoneId>,
    out:           &mut Vec<ZoneId>,
) -> PathResult<()> {
    let mut cur = start;
    while !remaining.is_empty() {
        let (pos, dist) = remaining
            .iter()
            .enumerate()
            .map(|(i, &z)| (i, venue.distance(cur, z).unwrap_or(u32::MAX)))
            .min_by_key(|&(i, d)| (d, remaining[i]))
            .unwrap_or((0, u32::MAX));
        if dist == u32::MAX {
            return Err(PathError::NoRoute { from: cur, to: remaining[pos] });
        }
        cur = remaining.swap_remove(pos);
        out.push(cur);
    }
    Ok(())
}

/// Uniform choice among `candidates` reachable from `from`.
fn choose_reachable(
    venue:      &VenueGraph,
    rng:        &mut CustomerRng,
    from:       ZoneId,
    candidates: &[ZoneId],
    role:       Role,
) -> PathResult<ZoneId> {
    let reachable: Vec<ZoneId> = candidates
        .iter()
        .copied()
        .filter(|&c| venue.distance(from, c).is_ok())
        .collect();
    match rng.choose(&reachable) {
        Some(&zone) => Ok(zone),
        None => match candidates.first() {
            Some(&to) => Err(PathError::NoRoute { from, to }),
            None => Err(PathError::EmptyRole(role)),
        },
    }
}
