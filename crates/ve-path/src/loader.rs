//! CSV loader for recorded paths.
//!
//! # CSV format
//!
//! One row per waypoint.  Rows may appear in any order; each path's
//! waypoints are ordered by `step`.
//!
//! ```csv
//! path_id,step,zone
//! 0,0,0
//! 0,1,3
//! 0,2,4
//! 0,3,5
//! 1,0,0
//! 1,1,4
//! 1,2,5
//! ```
//!
//! Paths are returned in ascending `path_id` order.  Gaps in `path_id` or
//! `step` numbering are allowed; a repeated `(path_id, step)` pair is not.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ve_core::ZoneId;

use crate::{PathError, PathResult};

#[derive(Deserialize)]
struct PathRecord {
    path_id: u32,
    step:    u32,
    zone:    u32,
}

/// Load recorded waypoint sequences from a CSV file.
pub fn load_paths_csv(path: &Path) -> PathResult<Vec<Vec<ZoneId>>> {
    let file = std::fs::File::open(path)?;
    load_paths_reader(file)
}

/// Like [`load_paths_csv`] but accepts any `Read` source.
pub fn load_paths_reader<R: Read>(reader: R) -> PathResult<Vec<Vec<ZoneId>>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_path: BTreeMap<u32, BTreeMap<u32, ZoneId>> = BTreeMap::new();

    for result in csv_reader.deserialize::<PathRecord>() {
        let row = result.map_err(|e| PathError::Parse(e.to_string()))?;
        let steps = by_path.entry(row.path_id).or_default();
        if steps.insert(row.step, ZoneId(row.zone)).is_some() {
            return Err(PathError::Parse(format!(
                "path {} has step {} more than once",
                row.path_id, row.step
            )));
        }
    }

    Ok(by_path
        .into_values()
        .map(|steps| steps.into_values().collect())
        .collect())
}
