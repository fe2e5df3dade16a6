//! Sample graphs: a small friendship network and a route map between
//! Brazilian cities.
//!
//! Both are allocated at the default maximum capacity so callers can keep
//! adding vertices after the seeded ones.

use crate::config::DEFAULT_MAX_VERTICES;
use crate::error::Result;
use crate::graph::WeightedGraph;

const USERS: [&str; 5] = ["Alice", "Bob", "Carol", "David", "Eve"];

const FRIENDSHIPS: [(usize, usize); 5] = [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)];

const CITIES: [&str; 5] = [
    "Sao Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Brasilia",
    "Salvador",
];

/// Road distances in km.
const ROUTES: [(usize, usize, i64); 5] = [
    (0, 1, 430),
    (0, 2, 586),
    (1, 2, 434),
    (2, 3, 716),
    (3, 4, 1446),
];

/// Five users with unit-weight friendships.
pub fn social_network() -> Result<WeightedGraph> {
    let mut graph = WeightedGraph::new(DEFAULT_MAX_VERTICES)?;
    for (id, name) in USERS.iter().enumerate() {
        graph.set_label(id, *name)?;
    }
    for (u, v) in FRIENDSHIPS {
        graph.add_friendship(u, v)?;
    }
    Ok(graph)
}

/// Five cities joined by roads weighted with their length in km.
pub fn route_map() -> Result<WeightedGraph> {
    let mut graph = WeightedGraph::new(DEFAULT_MAX_VERTICES)?;
    for (id, name) in CITIES.iter().enumerate() {
        graph.set_label(id, *name)?;
    }
    for (u, v, km) in ROUTES {
        graph.add_edge(u, v, km)?;
    }
    Ok(graph)
}
