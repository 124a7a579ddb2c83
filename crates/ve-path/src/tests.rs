//! Unit tests for ve-path.

#[cfg(test)]
mod helpers {
    use ve_core::ZoneId;
    use ve_venue::{Role, VenueGraph, VenueGraphBuilder, Zone};

    /// 3 × 3 grid, two-way aisles, entrance 0, till 7, exit 8, items elsewhere.
    ///
    /// ```text
    ///   0 ─ 1 ─ 2
    ///   │   │   │
    ///   3 ─ 4 ─ 5
    ///   │   │   │
    ///   6 ─ 7 ─ 8
    /// ```
    pub fn grid_store() -> VenueGraph {
        let mut b = VenueGraphBuilder::new();
        let z: Vec<ZoneId> = (0..9)
            .map(|i| b.add_zone(Zone::at((i % 3) as f32, (i / 3) as f32)))
            .collect();
        for r in 0..3 {
            for c in 0..3 {
                let i = r * 3 + c;
                if c < 2 {
                    b.add_corridor(z[i], z[i + 1]);
                }
                if r < 2 {
                    b.add_corridor(z[i], z[i + 3]);
                }
            }
        }
        b.assign(Role::Entrance, z[0]);
        b.assign(Role::Till, z[7]);
        b.assign(Role::Exit, z[8]);
        for &i in &[1, 2, 3, 4, 5, 6] {
            b.assign(Role::Item, z[i]);
        }
        b.build().unwrap()
    }

    /// One-way serpentine: 0 → 1 → 2 → 5 → 4 → 3 → 6 → 7 → 8.
    /// Entrance 0, till 7, exit 8, items 1..=6.
    pub fn one_way_store() -> VenueGraph {
        let mut b = VenueGraphBuilder::new();
        let z: Vec<ZoneId> = (0..9).map(|_| b.add_zone(Zone::default())).collect();
        let order = [0, 1, 2, 5, 4, 3, 6, 7, 8];
        for w in order.windows(2) {
            b.add_one_way(z[w[0]], z[w[1]]);
        }
        b.assign(Role::Entrance, z[0]);
        b.assign(Role::Till, z[7]);
        b.assign(Role::Exit, z[8]);
        for i in 1..=6 {
            b.assign(Role::Item, z[i]);
        }
        b.build().unwrap()
    }

    /// Line 0 ─ 1 ─ 2: entrance, till, exit; no items.
    pub fn line_store() -> VenueGraph {
        let mut b = VenueGraphBuilder::new();
        let z: Vec<ZoneId> = (0..3).map(|_| b.add_zone(Zone::default())).collect();
        b.add_corridor(z[0], z[1]);
        b.add_corridor(z[1], z[2]);
        b.assign(Role::Entrance, z[0]);
        b.assign(Role::Till, z[1]);
        b.assign(Role::Exit, z[2]);
        b.build().unwrap()
    }

    pub fn assert_well_formed(venue: &VenueGraph, path: &[ZoneId]) {
        let first = *path.first().expect("path is empty");
        let last = *path.last().unwrap();
        assert!(venue.has_role(first, Role::Entrance), "{path:?} does not start at an entrance");
        assert!(venue.has_role(last, Role::Exit), "{path:?} does not end at an exit");
        assert!(
            path[..path.len() - 1].iter().any(|&z| venue.has_role(z, Role::Till)),
            "{path:?} has no till before the exit"
        );
        assert!(venue.is_walkable(path), "{path:?} uses a missing edge");
    }
}

// ── Synthetic generator ───────────────────────────────────────────────────────

#[cfg(test)]
mod synthetic {
    use ve_core::{CustomerId, CustomerRng, SimConfig, ZoneId};

    use super::helpers::{assert_well_formed, grid_store, line_store, one_way_store};
    use crate::{BasketParams, PathError, PathGenerator, SyntheticPathGenerator};

    #[test]
    fn paths_are_well_formed() {
        let venue = grid_store();
        let generator = SyntheticPathGenerator::new(BasketParams { mu: 1.0, sigma: 0.8 }).unwrap();
        for c in 0..500 {
            let mut rng = CustomerRng::new(11, CustomerId(c));
            let path = generator.generate_path(&venue, &mut rng).unwrap();
            assert_well_formed(&venue, &path);
        }
    }

    #[test]
    fn one_way_paths_respect_direction() {
        let venue = one_way_store();
        let generator = SyntheticPathGenerator::new(BasketParams::default()).unwrap();
        for c in 0..300 {
            let mut rng = CustomerRng::new(5, CustomerId(c));
            let path = generator.generate_path(&venue, &mut rng).unwrap();
            assert_well_formed(&venue, &path);
        }
    }

    #[test]
    fn line_store_always_walks_straight_through() {
        let venue = line_store();
        let generator = SyntheticPathGenerator::from_config(&SimConfig::default()).unwrap();
        for c in 0..100 {
            let mut rng = CustomerRng::new(0, CustomerId(c));
            let path = generator.generate_path(&venue, &mut rng).unwrap();
            assert_eq!(path, vec![ZoneId(0), ZoneId(1), ZoneId(2)]);
        }
    }

    #[test]
    fn empty_basket_still_checks_out() {
        // mu = -50 makes every basket round to zero.
        let venue = grid_store();
        let generator = SyntheticPathGenerator::new(BasketParams { mu: -50.0, sigma: 0.1 }).unwrap();
        let mut rng = CustomerRng::new(3, CustomerId(0));
        let path = generator.generate_path(&venue, &mut rng).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], ZoneId(0));
        assert_eq!(path[path.len() - 2], ZoneId(7));
        assert_eq!(path[path.len() - 1], ZoneId(8));
    }

    #[test]
    fn basket_size_clamped_to_item_count() {
        let generator = SyntheticPathGenerator::new(BasketParams { mu: 10.0, sigma: 0.1 }).unwrap();
        let mut rng = CustomerRng::new(1, CustomerId(0));
        for _ in 0..50 {
            assert_eq!(generator.sample_basket_size(6, &mut rng), 6);
        }
        assert_eq!(generator.sample_basket_size(0, &mut rng), 0);
    }

    #[test]
    fn full_basket_visits_every_item() {
        let venue = grid_store();
        let generator = SyntheticPathGenerator::new(BasketParams { mu: 10.0, sigma: 0.1 }).unwrap();
        let mut rng = CustomerRng::new(9, CustomerId(4));
        let path = generator.generate_path(&venue, &mut rng).unwrap();
        for &item in venue.items() {
            assert!(path.contains(&item), "{item} missing from {path:?}");
        }
    }

    #[test]
    fn same_stream_same_path() {
        let venue = grid_store();
        let generator = SyntheticPathGenerator::new(BasketParams::default()).unwrap();
        for c in 0..50 {
            let a = generator.generate_path(&venue, &mut CustomerRng::new(77, CustomerId(c))).unwrap();
            let b = generator.generate_path(&venue, &mut CustomerRng::new(77, CustomerId(c))).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn invalid_sigma_rejected() {
        let err = SyntheticPathGenerator::new(BasketParams { mu: 0.0, sigma: -1.0 }).unwrap_err();
        assert!(matches!(err, PathError::Basket(_)));
    }

    #[test]
    fn params_from_config() {
        let cfg = SimConfig { basket_mu: Some(1.5), basket_sigma: Some(0.3), ..SimConfig::default() };
        let generator = SyntheticPathGenerator::from_config(&cfg).unwrap();
        assert_eq!(generator.params(), BasketParams { mu: 1.5, sigma: 0.3 });
    }
}

// ── Waypoint expansion ────────────────────────────────────────────────────────

#[cfg(test)]
mod expand {
    use ve_core::ZoneId;

    use super::helpers::{grid_store, one_way_store};
    use crate::{PathError, expand_waypoints};

    #[test]
    fn splices_shortest_legs() {
        let venue = grid_store();
        let path = expand_waypoints(&venue, &[ZoneId(0), ZoneId(2), ZoneId(8)]).unwrap();
        assert_eq!(path, vec![ZoneId(0), ZoneId(1), ZoneId(2), ZoneId(5), ZoneId(8)]);
    }

    #[test]
    fn repeated_waypoints_collapse() {
        let venue = grid_store();
        let path = expand_waypoints(&venue, &[ZoneId(0), ZoneId(0), ZoneId(1)]).unwrap();
        assert_eq!(path, vec![ZoneId(0), ZoneId(1)]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(expand_waypoints(&grid_store(), &[]).unwrap().is_empty());
    }

    #[test]
    fn against_one_way_flow_loops_or_fails() {
        // 8 is a sink in the serpentine, so nothing leaves it.
        let venue = one_way_store();
        let err = expand_waypoints(&venue, &[ZoneId(8), ZoneId(0)]).unwrap_err();
        assert!(matches!(err, PathError::NoRoute { from: ZoneId(8), to: ZoneId(0) }));
    }
}

// ── Empirical sampler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod empirical {
    use ve_core::{CustomerId, CustomerRng, ZoneId};

    use super::helpers::{assert_well_formed, grid_store, one_way_store};
    use crate::{EmpiricalPathSampler, PathError, PathGenerator};

    fn z(ids: &[u32]) -> Vec<ZoneId> {
        ids.iter().map(|&i| ZoneId(i)).collect()
    }

    #[test]
    fn samples_expanded_recorded_paths() {
        let venue = grid_store();
        let sampler =
            EmpiricalPathSampler::new(&venue, vec![z(&[0, 4, 7, 8]), z(&[0, 2, 7, 8])]).unwrap();
        assert_eq!(sampler.len(), 2);
        assert_eq!(sampler.paths()[0], z(&[0, 1, 4, 7, 8]));

        let mut seen = [false; 2];
        for c in 0..100 {
            let path = sampler.generate_path(&venue, &mut CustomerRng::new(1, CustomerId(c))).unwrap();
            assert_well_formed(&venue, &path);
            let i = sampler.paths().iter().position(|p| *p == path).unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(
            EmpiricalPathSampler::new(&grid_store(), Vec::new()),
            Err(PathError::NoPaths)
        ));
    }

    #[test]
    fn bad_shapes_rejected_with_index() {
        let venue = grid_store();
        let cases = [
            z(&[]),
            z(&[1, 7, 8]),
            z(&[0, 7, 5]),
            z(&[0, 4, 8]),
            z(&[0, 8, 7, 8, 40]),
        ];
        for bad in cases {
            let err = EmpiricalPathSampler::new(&venue, vec![z(&[0, 7, 8]), bad.clone()]).unwrap_err();
            assert!(
                matches!(err, PathError::InvalidPath { index: 1, .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn unroutable_recording_rejected() {
        // Visiting 3 after 7 would need to walk against the one-way flow.
        let venue = one_way_store();
        let err = EmpiricalPathSampler::new(&venue, vec![z(&[0, 7, 3, 8])]).unwrap_err();
        assert!(matches!(err, PathError::InvalidPath { index: 0, .. }));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use ve_core::ZoneId;

    use crate::{PathError, load_paths_reader};

    #[test]
    fn groups_and_orders_rows() {
        let csv = "path_id,step,zone\n\
                   1,0,0\n\
                   0,2,4\n\
                   0,0,0\n\
                   1,1,5\n\
                   0,1,3\n";
        let paths = load_paths_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            paths,
            vec![
                vec![ZoneId(0), ZoneId(3), ZoneId(4)],
                vec![ZoneId(0), ZoneId(5)],
            ]
        );
    }

    #[test]
    fn duplicate_step_rejected() {
        let csv = "path_id,step,zone\n0,0,0\n0,0,1\n";
        assert!(matches!(load_paths_reader(Cursor::new(csv)), Err(PathError::Parse(_))));
    }

    #[test]
    fn malformed_row_rejected() {
        let csv = "path_id,step,zone\n0,zero,1\n";
        assert!(matches!(load_paths_reader(Cursor::new(csv)), Err(PathError::Parse(_))));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(load_paths_reader(Cursor::new("path_id,step,zone\n")).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_paths_csv(std::path::Path::new("/nonexistent/paths.csv")).unwrap_err();
        assert!(matches!(err, PathError::Io(_)));
    }
}
