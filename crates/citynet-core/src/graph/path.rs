//! Path reconstruction from predecessor links

use super::algos::ShortestPaths;

/// Walk predecessor links back from `target` to the source.
///
/// Returns the vertex sequence source-first, or `None` when the target is
/// unreachable or out of range.
fn reconstruct_path(paths: &ShortestPaths, target: usize) -> Option<Vec<usize>> {
    if !paths.distance_to(target).is_finite() {
        return None;
    }

    let limit = paths.predecessors().len();
    let mut path = vec![target];
    let mut current = target;
    while let Some(pred) = paths.predecessor(current) {
        path.push(pred);
        current = pred;
        if path.len() > limit {
            tracing::warn!(vertex = target, "predecessor chain does not terminate");
            return None;
        }
    }

    if current != paths.source() {
        return None;
    }

    path.reverse();
    Some(path)
}

impl ShortestPaths {
    /// Shortest route to `target` as vertex indices, source first
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        reconstruct_path(self, target)
    }
}
