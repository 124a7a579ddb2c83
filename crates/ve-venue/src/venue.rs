//! The venue graph and its builder.

use tracing::debug;

use ve_core::ZoneId;

use crate::{
    DijkstraRouter, Edge, GraphError, GraphResult, PathTable, Role, Roles, Router, Topology, Zone,
};

// ── VenueGraph ────────────────────────────────────────────────────────────────

/// A validated venue: zones, directed adjacency, role sets, and a
/// shortest-path table rooted at every role zone.
///
/// Built once and shared read-only (`&VenueGraph` is `Send + Sync`) across
/// every simulated day.  Do not construct directly; use
/// [`VenueGraphBuilder`] or [`VenueGraph::build`].
pub struct VenueGraph {
    /// Zone descriptors, indexed by `ZoneId`.
    pub zones: Vec<Zone>,
    pub topology: Topology,
    roles: Roles,
    /// Bitmask of `Role::bit()` per zone.
    role_mask: Vec<u8>,
    table: PathTable,
    router: Box<dyn Router>,
}

impl VenueGraph {
    /// Build and validate a venue from plain zone, edge, and role lists.
    pub fn build(zones: Vec<Zone>, edges: Vec<Edge>, roles: Roles) -> GraphResult<Self> {
        VenueGraphBuilder { zones, edges, roles }.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Directed edge count (an undirected corridor counts twice).
    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index())
    }

    /// Sum of zone area weights; zones without one contribute 0.
    pub fn floor_area(&self) -> f64 {
        self.zones.iter().filter_map(|z| z.area).sum()
    }

    // ── Roles ─────────────────────────────────────────────────────────────

    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    pub fn entrances(&self) -> &[ZoneId] {
        &self.roles.entrances
    }

    pub fn tills(&self) -> &[ZoneId] {
        &self.roles.tills
    }

    pub fn exits(&self) -> &[ZoneId] {
        &self.roles.exits
    }

    pub fn items(&self) -> &[ZoneId] {
        &self.roles.items
    }

    #[inline]
    pub fn has_role(&self, zone: ZoneId, role: Role) -> bool {
        self.role_mask
            .get(zone.index())
            .is_some_and(|&m| m & role.bit() != 0)
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    pub fn path_table(&self) -> &PathTable {
        &self.table
    }

    /// Shortest zone sequence `a ..= b` along edge directions.
    ///
    /// Served from the precomputed table when `a` is a role zone; otherwise
    /// searched on demand.
    pub fn shortest_path(&self, a: ZoneId, b: ZoneId) -> GraphResult<Vec<ZoneId>> {
        self.check_zone(a)?;
        self.check_zone(b)?;
        let found = match self.table.tree(a) {
            Some(tree) => tree.path_to(b),
            None => self.router.search(&self.topology, a).path_to(b),
        };
        found.ok_or(GraphError::NoRoute { from: a, to: b })
    }

    /// Hop count of the shortest path `a → b`.
    pub fn distance(&self, a: ZoneId, b: ZoneId) -> GraphResult<u32> {
        self.check_zone(a)?;
        self.check_zone(b)?;
        let found = match self.table.tree(a) {
            Some(tree) => tree.distance(b),
            None => self.router.search(&self.topology, a).distance(b),
        };
        found.ok_or(GraphError::NoRoute { from: a, to: b })
    }

    /// `true` if every consecutive step of `path` follows an allowed edge.
    pub fn is_walkable(&self, path: &[ZoneId]) -> bool {
        path.windows(2).all(|w| self.topology.has_edge(w[0], w[1]))
    }

    fn check_zone(&self, zone: ZoneId) -> GraphResult<()> {
        if zone.index() < self.zones.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownZone(zone))
        }
    }
}

// ── VenueGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`VenueGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ve_venue::{Role, VenueGraphBuilder, Zone};
///
/// let mut b = VenueGraphBuilder::new();
/// let door  = b.add_zone(Zone::named("door"));
/// let till  = b.add_zone(Zone::named("till"));
/// let out   = b.add_zone(Zone::named("exit"));
/// b.add_corridor(door, till);
/// b.add_one_way(till, out);
/// b.assign(Role::Entrance, door);
/// b.assign(Role::Till, till);
/// b.assign(Role::Exit, out);
/// let venue = b.build().unwrap();
/// assert_eq!(venue.shortest_path(door, out).unwrap(), vec![door, till, out]);
/// ```
#[derive(Default)]
pub struct VenueGraphBuilder {
    zones: Vec<Zone>,
    edges: Vec<Edge>,
    roles: Roles,
}

impl VenueGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(zones: usize, edges: usize) -> Self {
        Self {
            zones: Vec::with_capacity(zones),
            edges: Vec::with_capacity(edges),
            roles: Roles::default(),
        }
    }

    /// Add a zone and return its `ZoneId` (sequential from 0).
    pub fn add_zone(&mut self, zone: Zone) -> ZoneId {
        let id = ZoneId(self.zones.len() as u32);
        self.zones.push(zone);
        id
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Two-way connection between `a` and `b`.
    pub fn add_corridor(&mut self, a: ZoneId, b: ZoneId) {
        self.edges.push(Edge::undirected(a, b));
    }

    /// One-way connection `from → to`.
    pub fn add_one_way(&mut self, from: ZoneId, to: ZoneId) {
        self.edges.push(Edge::directed(from, to));
    }

    /// Tag `zone` with `role`.  A zone may carry several roles.
    pub fn assign(&mut self, role: Role, zone: ZoneId) {
        self.roles.get_mut(role).push(zone);
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Validate and build with the default [`DijkstraRouter`].
    pub fn build(self) -> GraphResult<VenueGraph> {
        self.build_with(DijkstraRouter)
    }

    /// Validate and build, computing the path table with `router`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownZone`] if an edge or role names a missing zone.
    /// - [`GraphError::InvalidRole`] if entrances, tills, or exits are empty.
    /// - [`GraphError::Unreachable`] if an entrance reaches no till or a till
    ///   reaches no exit.
    pub fn build_with<R: Router + 'static>(self, router: R) -> GraphResult<VenueGraph> {
        let zone_count = self.zones.len();
        let known = |z: ZoneId| {
            if z.index() < zone_count { Ok(()) } else { Err(GraphError::UnknownZone(z)) }
        };

        for e in &self.edges {
            known(e.from)?;
            known(e.to)?;
        }
        let mut roles = self.roles;
        roles.normalize();
        for z in roles.all_zones() {
            known(z)?;
        }
        for role in [Role::Entrance, Role::Till, Role::Exit] {
            if roles.get(role).is_empty() {
                return Err(GraphError::InvalidRole(role));
            }
        }

        let topology = Topology::from_edges(zone_count, &self.edges);
        let table = PathTable::build(&topology, &roles.all_zones(), &router);

        check_reaches(&table, &roles.entrances, &roles.tills, Role::Till)?;
        check_reaches(&table, &roles.tills, &roles.exits, Role::Exit)?;

        let mut role_mask = vec![0u8; zone_count];
        for role in [Role::Entrance, Role::Till, Role::Exit, Role::Item] {
            for z in roles.get(role) {
                role_mask[z.index()] |= role.bit();
            }
        }

        debug!(
            zones     = zone_count,
            edges     = topology.edge_count(),
            entrances = roles.entrances.len(),
            tills     = roles.tills.len(),
            exits     = roles.exits.len(),
            items     = roles.items.len(),
            "venue graph built"
        );

        Ok(VenueGraph {
            zones: self.zones,
            topology,
            roles,
            role_mask,
            table,
            router: Box::new(router),
        })
    }
}

/// Every zone in `from` must reach at least one zone in `targets`.
fn check_reaches(
    table:   &PathTable,
    from:    &[ZoneId],
    targets: &[ZoneId],
    role:    Role,
) -> GraphResult<()> {
    for &source in from {
        let reaches_any = table
            .tree(source)
            .is_some_and(|tree| targets.iter().any(|&t| tree.reaches(t)));
        if !reaches_any {
            return Err(GraphError::Unreachable { from: source, role });
        }
    }
    Ok(())
}
