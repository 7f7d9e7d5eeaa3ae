//! Path finder: breadth-first search over the family graph

use crate::AdjacencyList;
use kinship_domain::{Path, UserId};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::trace;

/// Shortest path from `ego` to `alter`, or `None` if they are not connected
///
/// Users are marked visited when enqueued, so every returned path is
/// simple and, the graph being unweighted, of minimum edge count. When
/// several shortest paths exist the one found first in edge-insertion
/// order wins; callers should not rely on which.
///
/// `ego == alter` yields the single-step path holding only ego.
pub fn find_path(graph: &AdjacencyList, ego: UserId, alter: UserId) -> Option<Path> {
    let mut visited = HashSet::from([ego]);
    let mut queue = VecDeque::from([(ego, Path::start(ego))]);

    while let Some((user, path)) = queue.pop_front() {
        if user == alter {
            trace!("Reached {} after {} edges", alter, path.edge_count());
            return Some(path);
        }
        for edge in graph.edges(user) {
            if visited.insert(edge.to) {
                queue.push_back((edge.to, path.extended(edge.to, edge.edge_type)));
            }
        }
    }

    trace!("No path from {} to {}", ego, alter);
    None
}

/// Shortest paths from `ego` to every reachable user, in one search
///
/// The BFS tree does not depend on the target, so each path here is the
/// same one [`find_path`] returns for that target.
pub fn find_all_paths(graph: &AdjacencyList, ego: UserId) -> HashMap<UserId, Path> {
    let mut found = HashMap::new();
    let mut visited = HashSet::from([ego]);
    let mut queue = VecDeque::from([(ego, Path::start(ego))]);

    while let Some((user, path)) = queue.pop_front() {
        for edge in graph.edges(user) {
            if visited.insert(edge.to) {
                queue.push_back((edge.to, path.extended(edge.to, edge.edge_type)));
            }
        }
        found.insert(user, path);
    }

    trace!("Reached {} users from {}", found.len(), ego);
    found
}
