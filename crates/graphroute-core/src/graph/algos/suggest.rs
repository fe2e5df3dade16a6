use crate::error::Result;
use crate::graph::types::{Suggestion, VertexId};
use crate::graph::visited::{Mark, VisitMarks};
use crate::graph::WeightedGraph;

/// Two-hop connection suggestions for `me`.
///
/// Every neighbor of a direct neighbor is a candidate unless it is `me` or
/// itself a direct neighbor. Candidates reachable through several direct
/// neighbors (or several parallel edges) are reported once per path, in
/// adjacency order of the direct neighbors and then of their own lists.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn suggest(graph: &WeightedGraph, me: VertexId) -> Result<Vec<Suggestion>> {
    graph.check_vertex(me)?;

    let mut marks = VisitMarks::new(graph.vertex_count());
    for (friend, _) in graph.adjacent(me) {
        marks.mark(friend, Mark::Direct);
    }

    let mut suggestions = Vec::new();
    for (friend, _) in graph.adjacent(me) {
        for (candidate, _) in graph.adjacent(friend) {
            if candidate != me && marks.get(candidate) != Mark::Direct {
                suggestions.push(Suggestion {
                    candidate,
                    via: friend,
                });
            }
        }
    }

    tracing::debug!(me, suggestions = suggestions.len(), "suggest_complete");
    Ok(suggestions)
}
