//! Path reconstruction from a predecessor map.

use tm_core::NodeId;

/// Walk `predecessors` back from `goal` until a node with no predecessor and
/// return the nodes in start → goal order.
///
/// Returns an empty path if `goal` is out of range or the chain loops.  An
/// unreached goal has no predecessor either and comes back as `[goal]`; use
/// [`reconstruct_reached`] when the distances are at hand.
pub fn reconstruct(goal: NodeId, predecessors: &[Option<NodeId>]) -> Vec<NodeId> {
    if goal.index() >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(prev) = predecessors.get(cur.index()).copied().flatten() {
        // A simple path never repeats a node.
        if path.len() >= predecessors.len() {
            return Vec::new();
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

/// Like [`reconstruct`], but empty when `distances[goal]` is infinite.
pub fn reconstruct_reached(
    goal: NodeId,
    predecessors: &[Option<NodeId>],
    distances: &[f64],
) -> Vec<NodeId> {
    match distances.get(goal.index()) {
        Some(d) if d.is_finite() => reconstruct(goal, predecessors),
        _ => Vec::new(),
    }
}
