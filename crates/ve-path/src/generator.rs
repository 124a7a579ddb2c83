//! The `PathGenerator` trait: the seam between venue and day runner.

use ve_core::{CustomerRng, ZoneId};
use ve_venue::VenueGraph;

use crate::PathResult;

/// Produces one customer's ordered zone sequence.
///
/// The day runner calls this once per arriving customer with that
/// customer's private [`CustomerRng`], so output is deterministic regardless
/// of which thread runs the day.
///
/// # Thread safety
///
/// A single generator is shared by every day of a multi-day run, possibly
/// across rayon worker threads, so implementations must be `Send + Sync`.
/// Per-customer state belongs in the RNG stream, not in the generator.
///
/// # Example
///
/// ```rust,ignore
/// struct StraightToTill;
///
/// impl PathGenerator for StraightToTill {
///     fn generate_path(&self, venue: &VenueGraph, _rng: &mut CustomerRng) -> PathResult<Vec<ZoneId>> {
///         expand_waypoints(venue, &[venue.entrances()[0], venue.tills()[0], venue.exits()[0]])
///     }
/// }
/// ```
pub trait PathGenerator: Send + Sync {
    fn generate_path(&self, venue: &VenueGraph, rng: &mut CustomerRng) -> PathResult<Vec<ZoneId>>;
}

impl<P: PathGenerator + ?Sized> PathGenerator for Box<P> {
    fn generate_path(&self, venue: &VenueGraph, rng: &mut CustomerRng) -> PathResult<Vec<ZoneId>> {
        (**self).generate_path(venue, rng)
    }
}

impl<P: PathGenerator + ?Sized> PathGenerator for &P {
    fn generate_path(&self, venue: &VenueGraph, rng: &mut CustomerRng) -> PathResult<Vec<ZoneId>> {
        (**self).generate_path(venue, rng)
    }
}

/// Join `waypoints` into a walkable path by splicing in the shortest path
/// between each consecutive pair.
///
/// Repeated consecutive waypoints collapse to a single visit.
pub fn expand_waypoints(venue: &VenueGraph, waypoints: &[ZoneId]) -> PathResult<Vec<ZoneId>> {
    let Some(&first) = waypoints.first() else {
        return Ok(Vec::new());
    };
    let mut path = vec![first];
    for pair in waypoints.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == b {
            continue;
        }
        let leg = venue.shortest_path(a, b)?;
        path.extend_from_slice(&leg[1..]);
    }
    Ok(path)
}
