//! Precomputed shortest paths between role zones.
//!
//! One [`SearchTree`] is stored per role-tagged or item zone, computed once
//! when the venue is built.  Any `(a, b)` query whose source is a role zone
//! is then an O(path length) walk up the tree; the search cost is never paid
//! per customer.
//!
//! Memory is O(R × Z) for R role zones and Z zones, which for store-sized
//! graphs (a few hundred zones) is negligible.

use rustc_hash::FxHashMap;

use ve_core::ZoneId;

use crate::{Router, SearchTree, Topology};

/// Search trees keyed by source zone.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    index: FxHashMap<ZoneId, usize>,
    trees: Vec<SearchTree>,
}

impl PathTable {
    /// Run `router` from every zone in `sources`.
    pub fn build<R: Router + ?Sized>(topology: &Topology, sources: &[ZoneId], router: &R) -> Self {
        let mut index = FxHashMap::default();
        let mut trees = Vec::with_capacity(sources.len());
        for &source in sources {
            if index.contains_key(&source) {
                continue;
            }
            index.insert(source, trees.len());
            trees.push(router.search(topology, source));
        }
        PathTable { index, trees }
    }

    /// The stored tree rooted at `source`, if `source` was precomputed.
    #[inline]
    pub fn tree(&self, source: ZoneId) -> Option<&SearchTree> {
        self.index.get(&source).map(|&i| &self.trees[i])
    }

    /// Number of precomputed source zones.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
