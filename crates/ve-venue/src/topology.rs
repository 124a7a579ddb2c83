//! Directed adjacency in CSR form.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `ZoneId z`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ zone_out_start[z] .. zone_out_start[z+1] ]
//! ```
//!
//! Edges are sorted by `(from, to)`, so iteration over a zone's neighbours is a contiguous scan in ascending
//! `ZoneId` order.  That ordering is what makes shortest-path tie-breaking
//! deterministic.  An undirected edge is stored as two directed edges.

use ve_core::ZoneId;

use crate::Edge;

/// Directed zone graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Build via
/// [`Topology::from_edges`] (or indirectly through the venue builder).
#[derive(Clone, Debug)]
pub struct Topology {
    /// CSR row pointer.  Outgoing edges of zone `z` are at indices
    /// `zone_out_start[z] .. zone_out_start[z+1]` of `edge_to`.
    /// Length = `zone_count + 1`.
    pub zone_out_start: Vec<u32>,

    /// Destination zone of each edge.
    pub edge_to: Vec<ZoneId>,
}

impl Topology {
    /// Build CSR adjacency for `zone_count` zones.
    ///
    /// Undirected edges expand to both directions; duplicate directed pairs
    /// collapse to one.  Callers must have checked that every endpoint is
    /// `< zone_count`.
    ///
    /// Time complexity: O(E log E) for the edge sort.
    pub fn from_edges(zone_count: usize, edges: &[Edge]) -> Self {
        let mut raw: Vec<(ZoneId, ZoneId)> = Vec::with_capacity(edges.len() * 2);
        for e in edges {
            raw.push((e.from, e.to));
            if !e.directed {
                raw.push((e.to, e.from));
            }
        }
        raw.sort_unstable();
        raw.dedup();

        let edge_to: Vec<ZoneId> = raw.iter().map(|&(_, t)| t).collect();

        let mut zone_out_start = vec![0u32; zone_count + 1];
        for &(from, _) in &raw {
            zone_out_start[from.index() + 1] += 1;
        }
        for i in 1..=zone_count {
            zone_out_start[i] += zone_out_start[i - 1];
        }
        debug_assert_eq!(zone_out_start[zone_count] as usize, raw.len());

        Topology { zone_out_start, edge_to }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn zone_count(&self) -> usize {
        self.zone_out_start.len().saturating_sub(1)
    }

    /// Number of directed edges (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Zones reachable from `zone` in one step, ascending.
    #[inline]
    pub fn neighbors(&self, zone: ZoneId) -> &[ZoneId] {
        let start = self.zone_out_start[zone.index()] as usize;
        let end   = self.zone_out_start[zone.index() + 1] as usize;
        &self.edge_to[start..end]
    }

    /// `true` if a step `from → to` is allowed.
    pub fn has_edge(&self, from: ZoneId, to: ZoneId) -> bool {
        from.index() < self.zone_count() && self.neighbors(from).binary_search(&to).is_ok()
    }
}
