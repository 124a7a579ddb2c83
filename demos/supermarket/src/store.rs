//! Synthetic supermarket floor plan.
//!
//! ```text
//!   col:  0     1     2     3     4     5
//! row 0   E  →  ·  →  ·  →  ·  →  ·  →  ·
//! row 1   ·  ←  ·  ←  ·  ←  ·  ←  ·  ←  ·
//! row 2   ·  →  ·  →  ·  →  ·  →  ·  →  ·
//! row 3   ·     T     T     T     ·     X
//! ```
//!
//! `E` entrance, `T` tills, `X` exit, every other zone in rows 0–2 an item
//! zone.  Arrows show aisle direction in the one-way layout; with
//! `one_way = false` every corridor is two-way.  Cross aisles between rows
//! are always two-way.

use ve_core::ZoneId;
use ve_venue::{GraphResult, Role, VenueGraph, VenueGraphBuilder, Zone};

pub const ROWS: usize = 4;
pub const COLS: usize = 6;

/// Floor area per zone, in square metres.
const ZONE_AREA: f64 = 9.0;

pub fn zone_at(row: usize, col: usize) -> ZoneId {
    ZoneId((row * COLS + col) as u32)
}

pub fn build_store(one_way: bool) -> GraphResult<VenueGraph> {
    let mut b = VenueGraphBuilder::with_capacity(ROWS * COLS, 2 * ROWS * COLS);
    for row in 0..ROWS {
        for col in 0..COLS {
            b.add_zone(Zone::at(col as f32, row as f32).with_area(ZONE_AREA));
        }
    }

    for row in 0..ROWS {
        for col in 0..COLS - 1 {
            let (a, c) = (zone_at(row, col), zone_at(row, col + 1));
            match (one_way, row % 2) {
                (false, _) => b.add_corridor(a, c),
                (true, 0) => b.add_one_way(a, c),
                (true, _) => b.add_one_way(c, a),
            }
        }
    }
    for row in 0..ROWS - 1 {
        for col in 0..COLS {
            b.add_corridor(zone_at(row, col), zone_at(row + 1, col));
        }
    }

    b.assign(Role::Entrance, zone_at(0, 0));
    b.assign(Role::Exit, zone_at(ROWS - 1, COLS - 1));
    for col in 1..=3 {
        b.assign(Role::Till, zone_at(ROWS - 1, col));
    }
    for row in 0..ROWS - 1 {
        for col in 0..COLS {
            if (row, col) != (0, 0) {
                b.assign(Role::Item, zone_at(row, col));
            }
        }
    }
    b.build()
}
