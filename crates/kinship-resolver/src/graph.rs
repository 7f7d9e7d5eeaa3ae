//! Graph builder: raw relation rows to a symmetric adjacency list

use kinship_domain::{Edge, EdgeType, Member, RawRelation, UserId};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

/// Outgoing edges per user, in insertion order
///
/// Every edge is materialized in both directions: a parent edge A→B comes
/// with a child edge B→A, and union edges are mirrored. The list is never
/// mutated after [`AdjacencyList::build`] returns, so one instance can be
/// shared by any number of resolutions.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    edges: HashMap<UserId, Vec<Edge>>,
    edge_count: usize,
}

impl AdjacencyList {
    /// Build the graph from member override lists and raw relation rows
    ///
    /// Duplicate edges are kept; they only add redundant exploration.
    /// Rows relating a user to themselves are skipped. Rows naming users
    /// outside the group produce edges that simply lead nowhere useful.
    pub fn build(relations: &[RawRelation], members: &[Member]) -> Self {
        let mut graph = Self::default();

        for member in members {
            for &parent in &member.parents {
                graph.link(member.user_id, parent, EdgeType::Parent);
            }
            for &child in &member.children {
                graph.link(member.user_id, child, EdgeType::Child);
            }
        }

        for relation in relations {
            if relation.is_self_referential() {
                trace!("Skipping self relation of {}", relation.user1_id);
                continue;
            }
            let (a, b) = (relation.user1_id, relation.user2_id);
            match relation.relation_type {
                EdgeType::Spouse | EdgeType::Partner => graph.link(a, b, relation.relation_type),
                // user1 is the parent of user2
                EdgeType::Parent => graph.link(b, a, EdgeType::Parent),
                // user1 is the child of user2
                EdgeType::Child => graph.link(a, b, EdgeType::Parent),
            }
        }

        debug!(
            "Built family graph: {} users, {} directed edges from {} relations and {} members",
            graph.user_count(),
            graph.edge_count,
            relations.len(),
            members.len()
        );
        graph
    }

    /// Add `from -> to` of `edge_type` together with its mirror
    fn link(&mut self, from: UserId, to: UserId, edge_type: EdgeType) {
        let edge = Edge::new(from, to, edge_type);
        self.push(edge);
        self.push(edge.reversed());
    }

    fn push(&mut self, edge: Edge) {
        self.edges.entry(edge.from).or_default().push(edge);
        self.edge_count += 1;
    }

    /// Outgoing edges of `user`, empty if the user has none
    pub fn edges(&self, user: UserId) -> &[Edge] {
        self.edges.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every recorded parent of `user`, not only those on a given path
    pub fn parents_of(&self, user: UserId) -> BTreeSet<UserId> {
        self.edges(user)
            .iter()
            .filter(|e| e.edge_type == EdgeType::Parent)
            .map(|e| e.to)
            .collect()
    }

    /// Whether `user` has at least one edge
    pub fn contains(&self, user: UserId) -> bool {
        self.edges.contains_key(&user)
    }

    /// Number of users with at least one edge
    pub fn user_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
