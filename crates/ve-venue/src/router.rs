//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The venue builder computes its shortest-path table through the [`Router`]
//! trait, so applications can swap in a different search (weighted aisles,
//! A*, …) without touching the rest of the crate.  The default
//! [`DijkstraRouter`] minimises hop count.
//!
//! # Tie-breaking
//!
//! Among equal-cost paths the search prefers the one whose zones were popped
//! first, and the heap pops the lower `ZoneId` on equal cost.  Neighbours are
//! scanned in ascending order (see [`Topology`]), so the chosen path is a
//! pure function of the graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ve_core::ZoneId;

use crate::Topology;

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Single-source shortest-path tree.
#[derive(Debug, Clone)]
pub struct SearchTree {
    pub source: ZoneId,
    /// `dist[z]` = hops from `source` to `z`; `u32::MAX` if unreachable.
    pub dist: Vec<u32>,
    /// `prev[z]` = predecessor of `z` on its shortest path; `ZoneId::INVALID`
    /// for the source and for unreached zones.
    pub prev: Vec<ZoneId>,
}

impl SearchTree {
    #[inline]
    pub fn reaches(&self, target: ZoneId) -> bool {
        self.dist
            .get(target.index())
            .is_some_and(|&d| d != u32::MAX)
    }

    /// Hop count to `target`, or `None` if unreachable.
    #[inline]
    pub fn distance(&self, target: ZoneId) -> Option<u32> {
        self.reaches(target).then(|| self.dist[target.index()])
    }

    /// Zone sequence `source ..= target`, or `None` if unreachable.
    pub fn path_to(&self, target: ZoneId) -> Option<Vec<ZoneId>> {
        if !self.reaches(target) {
            return None;
        }
        let mut path = Vec::with_capacity(self.dist[target.index()] as usize + 1);
        let mut cur = target;
        path.push(cur);
        while cur != self.source {
            cur = self.prev[cur.index()];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-source shortest-path search.
///
/// Implementations must be `Send + Sync` so a venue can be shared across the
/// worker threads of a multi-day run.
pub trait Router: Send + Sync {
    /// Search from `source` to every zone reachable along edge directions.
    fn search(&self, topology: &Topology, source: ZoneId) -> SearchTree;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR graph with unit edge cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn search(&self, topology: &Topology, source: ZoneId) -> SearchTree {
        dijkstra(topology, source)
    }
}

fn dijkstra(topology: &Topology, source: ZoneId) -> SearchTree {
    let n = topology.zone_count();
    let mut dist = vec![u32::MAX; n];
    let mut prev = vec![ZoneId::INVALID; n];

    if source.index() >= n {
        return SearchTree { source, dist, prev };
    }
    dist[source.index()] = 0;

    // Min-heap: (cost, zone). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key ZoneId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, ZoneId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, zone))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[zone.index()] {
            continue;
        }

        for &neighbor in topology.neighbors(zone) {
            let new_cost = cost.saturating_add(1);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = zone;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    SearchTree { source, dist, prev }
}
