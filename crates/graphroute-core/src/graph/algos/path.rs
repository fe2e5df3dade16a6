//! Path reconstruction from a predecessor chain

use crate::graph::types::VertexId;

/// Walk predecessors from `target` back to `source` and return the path in
/// source-to-target order.
///
/// Returns `None` when the chain does not lead back to `source`. The walk
/// is bounded by the number of vertices, so a malformed chain cannot loop.
pub(crate) fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current).copied().flatten()?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}
