//! Zone, edge, and role descriptors accepted by the venue builder.

use std::fmt;

use ve_core::ZoneId;

/// 2-D zone position.  Display-only; routing never looks at it.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A discrete area of the venue.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    /// Free-form label ("bakery", "till 3", …).
    pub name: Option<String>,
    pub position: Option<Position>,
    /// Floor-area weight.  Summed by [`VenueGraph::floor_area`][crate::VenueGraph::floor_area].
    pub area: Option<f64>,
}

impl Zone {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self { position: Some(Position::new(x, y)), ..Self::default() }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }
}

/// A connection between two zones.  Undirected edges are traversable both
/// ways; directed edges only `from → to` (one-way aisles).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:     ZoneId,
    pub to:       ZoneId,
    pub directed: bool,
}

impl Edge {
    pub fn undirected(a: ZoneId, b: ZoneId) -> Self {
        Self { from: a, to: b, directed: false }
    }

    pub fn directed(from: ZoneId, to: ZoneId) -> Self {
        Self { from, to, directed: true }
    }
}

/// The part a zone plays in path construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Entrance,
    Till,
    Exit,
    Item,
}

impl Role {
    #[inline]
    pub(crate) fn bit(self) -> u8 {
        match self {
            Role::Entrance => 0b0001,
            Role::Till     => 0b0010,
            Role::Exit     => 0b0100,
            Role::Item     => 0b1000,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Entrance => "entrance",
            Role::Till     => "till",
            Role::Exit     => "exit",
            Role::Item     => "item",
        };
        f.write_str(s)
    }
}

/// The four role sets of a venue.
///
/// Sets are not required to be disjoint (a dining hall may use one door as
/// both entrance and exit).  The builder sorts and deduplicates each set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roles {
    pub entrances: Vec<ZoneId>,
    pub tills:     Vec<ZoneId>,
    pub exits:     Vec<ZoneId>,
    pub items:     Vec<ZoneId>,
}

impl Roles {
    pub fn get(&self, role: Role) -> &[ZoneId] {
        match role {
            Role::Entrance => &self.entrances,
            Role::Till     => &self.tills,
            Role::Exit     => &self.exits,
            Role::Item     => &self.items,
        }
    }

    pub(crate) fn get_mut(&mut self, role: Role) -> &mut Vec<ZoneId> {
        match role {
            Role::Entrance => &mut self.entrances,
            Role::Till     => &mut self.tills,
            Role::Exit     => &mut self.exits,
            Role::Item     => &mut self.items,
        }
    }

    /// Every zone carrying at least one role, sorted and deduplicated.
    pub fn all_zones(&self) -> Vec<ZoneId> {
        let mut all: Vec<ZoneId> = [Role::Entrance, Role::Till, Role::Exit, Role::Item]
            .iter()
            .flat_map(|&r| self.get(r).iter().copied())
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    pub(crate) fn normalize(&mut self) {
        for role in [Role::Entrance, Role::Till, Role::Exit, Role::Item] {
            let set = self.get_mut(role);
            set.sort_unstable();
            set.dedup();
        }
    }
}
