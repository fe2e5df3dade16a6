use std::collections::BTreeSet;

use graphroute_core::graph::{
    bfs, dfs, shortest_path, suggest, Distance, ShortestPath, VertexId, Weight,
};
use graphroute_core::WeightedGraph;
use proptest::prelude::*;

type EdgeList = Vec<(VertexId, VertexId, i64)>;

fn graph_strategy() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..=7).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0i64..20), 0..15),
        )
    })
}

fn build(n: usize, edges: &EdgeList) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n).unwrap();
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

/// Vertices reachable from `start`, by repeated closure over the edge list.
fn reachable(n: usize, edges: &EdgeList, start: VertexId) -> BTreeSet<VertexId> {
    let mut seen = BTreeSet::from([start]);
    loop {
        let before = seen.len();
        for &(u, v, _) in edges {
            if seen.contains(&u) || seen.contains(&v) {
                seen.insert(u);
                seen.insert(v);
            }
        }
        if seen.len() == before {
            break;
        }
    }
    assert!(seen.iter().all(|&v| v < n));
    seen
}

/// Cheapest weight over all simple paths, by exhaustive search.
fn brute_force_distance(
    graph: &WeightedGraph,
    source: VertexId,
    target: VertexId,
) -> Option<Distance> {
    fn walk(
        graph: &WeightedGraph,
        current: VertexId,
        target: VertexId,
        cost: Distance,
        on_path: &mut [bool],
        best: &mut Option<Distance>,
    ) {
        if current == target {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        on_path[current] = true;
        for (next, weight) in graph.neighbors(current).unwrap() {
            if !on_path[next] {
                walk(graph, next, target, cost + Distance::from(weight), on_path, best);
            }
        }
        on_path[current] = false;
    }

    let mut on_path = vec![false; graph.vertex_count()];
    let mut best = None;
    walk(graph, source, target, 0, &mut on_path, &mut best);
    best
}

/// Lightest edge between two adjacent vertices.
fn lightest_edge(graph: &WeightedGraph, u: VertexId, v: VertexId) -> Option<Weight> {
    graph
        .neighbors(u)
        .unwrap()
        .filter(|&(to, _)| to == v)
        .map(|(_, w)| w)
        .min()
}

proptest! {
    #[test]
    fn prop_edges_are_symmetric((n, edges) in graph_strategy()) {
        let graph = build(n, &edges);

        for &(u, v, w) in &edges {
            let w = w as Weight;
            prop_assert!(graph.neighbors(u).unwrap().any(|e| e == (v, w)));
            prop_assert!(graph.neighbors(v).unwrap().any(|e| e == (u, w)));
        }

        let degree_sum: usize = (0..n).map(|v| graph.degree(v).unwrap()).sum();
        prop_assert_eq!(degree_sum, 2 * edges.len());
        prop_assert_eq!(graph.edge_count(), edges.len());
    }

    #[test]
    fn prop_traversals_visit_reachable_set_once((n, edges) in graph_strategy(), start in 0usize..7) {
        let start = start % n;
        let graph = build(n, &edges);
        let expected = reachable(n, &edges, start);

        for order in [bfs(&graph, start).unwrap(), dfs(&graph, start).unwrap()] {
            let ids: Vec<VertexId> = order.iter().map(|visit| visit.id).collect();
            let unique: BTreeSet<VertexId> = ids.iter().copied().collect();

            prop_assert_eq!(ids[0], start);
            prop_assert_eq!(ids.len(), unique.len());
            prop_assert_eq!(&unique, &expected);
        }
    }

    #[test]
    fn prop_suggestions_are_two_hop_strangers((n, edges) in graph_strategy(), me in 0usize..7) {
        let me = me % n;
        let graph = build(n, &edges);
        let direct: BTreeSet<VertexId> = graph.neighbors(me).unwrap().map(|(v, _)| v).collect();

        let mut expected_count = 0;
        for (friend, _) in graph.neighbors(me).unwrap() {
            expected_count += graph
                .neighbors(friend)
                .unwrap()
                .filter(|&(c, _)| c != me && !direct.contains(&c))
                .count();
        }

        let suggestions = suggest(&graph, me).unwrap();
        prop_assert_eq!(suggestions.len(), expected_count);
        for s in suggestions {
            prop_assert_ne!(s.candidate, me);
            prop_assert!(!direct.contains(&s.candidate));
            prop_assert!(direct.contains(&s.via));
            prop_assert!(graph.neighbors(s.via).unwrap().any(|(v, _)| v == s.candidate));
        }
    }

    #[test]
    fn prop_shortest_path_matches_brute_force(
        (n, edges) in graph_strategy(),
        source in 0usize..7,
        target in 0usize..7,
    ) {
        let (source, target) = (source % n, target % n);
        let graph = build(n, &edges);

        let expected = brute_force_distance(&graph, source, target);
        let result = shortest_path(&graph, source, target).unwrap();
        prop_assert_eq!(result.distance(), expected);

        match result {
            ShortestPath::Reachable { distance, path } => {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&target));

                let unique: BTreeSet<VertexId> = path.iter().copied().collect();
                prop_assert_eq!(unique.len(), path.len());

                let mut total = 0;
                for pair in path.windows(2) {
                    let weight = lightest_edge(&graph, pair[0], pair[1]);
                    prop_assert!(weight.is_some());
                    total += Distance::from(weight.unwrap_or_default());
                }
                prop_assert_eq!(total, distance);
            }
            ShortestPath::Unreachable => {
                prop_assert!(!reachable(n, &edges, source).contains(&target));
            }
        }
    }

    #[test]
    fn prop_distances_are_symmetric(
        (n, edges) in graph_strategy(),
        source in 0usize..7,
        target in 0usize..7,
    ) {
        let (source, target) = (source % n, target % n);
        let graph = build(n, &edges);

        let forward = shortest_path(&graph, source, target).unwrap();
        let backward = shortest_path(&graph, target, source).unwrap();
        prop_assert_eq!(forward.distance(), backward.distance());
    }
}
