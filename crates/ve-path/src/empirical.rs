//! Replay of recorded customer paths.
//!
//! A recorded path is a list of waypoints (for example, the zones a tracked
//! shopper was observed in).  Waypoints need not be adjacent: each
//! consecutive pair is joined through the shortest-path table once, at
//! construction, so sampling is a single uniform index draw.

use tracing::debug;

use ve_core::{CustomerRng, ZoneId};
use ve_venue::{Role, VenueGraph};

use crate::{PathError, PathGenerator, PathResult, expand_waypoints};

/// [`PathGenerator`] that samples uniformly from a fixed set of recorded
/// paths.
#[derive(Clone, Debug)]
pub struct EmpiricalPathSampler {
    paths: Vec<Vec<ZoneId>>,
}

impl EmpiricalPathSampler {
    /// Validate and expand `recorded` against `venue`.
    ///
    /// Each path must start at an entrance, end at an exit, and pass through
    /// a till somewhere before its last waypoint.
    pub fn new(venue: &VenueGraph, recorded: Vec<Vec<ZoneId>>) -> PathResult<Self> {
        if recorded.is_empty() {
            return Err(PathError::NoPaths);
        }

        let mut paths = Vec::with_capacity(recorded.len());
        for (index, waypoints) in recorded.into_iter().enumerate() {
            check_shape(venue, index, &waypoints)?;
            let path = expand_waypoints(venue, &waypoints).map_err(|e| match e {
                PathError::NoRoute { from, to } => PathError::InvalidPath {
                    index,
                    reason: format!("no route from {from} to {to}"),
                },
                other => other,
            })?;
            paths.push(path);
        }

        debug!(paths = paths.len(), "empirical path sampler ready");
        Ok(Self { paths })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The expanded paths, in input order.
    pub fn paths(&self) -> &[Vec<ZoneId>] {
        &self.paths
    }
}

impl PathGenerator for EmpiricalPathSampler {
    fn generate_path(&self, _venue: &VenueGraph, rng: &mut CustomerRng) -> PathResult<Vec<ZoneId>> {
        rng.choose(&self.paths).cloned().ok_or(PathError::NoPaths)
    }
}

fn check_shape(venue: &VenueGraph, index: usize, waypoints: &[ZoneId]) -> PathResult<()> {
    let invalid = |reason: String| PathError::InvalidPath { index, reason };

    let (Some(&first), Some(&last)) = (waypoints.first(), waypoints.last()) else {
        return Err(invalid("empty path".into()));
    };
    if let Some(&z) = waypoints.iter().find(|z| venue.zone(**z).is_none()) {
        return Err(invalid(format!("unknown zone {z}")));
    }
    if !venue.has_role(first, Role::Entrance) {
        return Err(invalid(format!("starts at {first}, which is not an entrance")));
    }
    if !venue.has_role(last, Role::Exit) {
        return Err(invalid(format!("ends at {last}, which is not an exit")));
    }
    let before_exit = &waypoints[..waypoints.len() - 1];
    if !before_exit.iter().any(|&z| venue.has_role(z, Role::Till)) {
        return Err(invalid("never visits a till before the exit".into()));
    }
    Ok(())
}
