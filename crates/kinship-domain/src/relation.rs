//! Relation module - primitive family relations and the edges derived from them

use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a family relation, and of the directed graph edge derived from it
///
/// As an edge, the type describes what the target is to the source:
/// an edge `A -> B` of type `Parent` means B is a parent of A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Step up one generation
    Parent,

    /// Step down one generation
    Child,

    /// Married partner (symmetric)
    Spouse,

    /// Unmarried partner (symmetric)
    Partner,
}

impl EdgeType {
    /// All edge types, in declaration order
    pub const ALL: [EdgeType; 4] = [
        EdgeType::Parent,
        EdgeType::Child,
        EdgeType::Spouse,
        EdgeType::Partner,
    ];

    /// Get the relation type code as stored by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Parent => "parent",
            EdgeType::Child => "child",
            EdgeType::Spouse => "spouse",
            EdgeType::Partner => "partner",
        }
    }

    /// Parse a relation type code
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "parent" => Some(EdgeType::Parent),
            "child" => Some(EdgeType::Child),
            "spouse" => Some(EdgeType::Spouse),
            "partner" => Some(EdgeType::Partner),
            _ => None,
        }
    }

    /// The type of the mirrored edge pointing back from the target
    pub fn inverse(&self) -> Self {
        match self {
            EdgeType::Parent => EdgeType::Child,
            EdgeType::Child => EdgeType::Parent,
            EdgeType::Spouse => EdgeType::Spouse,
            EdgeType::Partner => EdgeType::Partner,
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation type: {}", s))
    }
}

/// A relation row as recorded by the persistence layer
///
/// Directional for `Parent` and `Child`:
/// - `Parent`: `user1` is the parent of `user2`
/// - `Child`: `user1` is the child of `user2`
///
/// `Spouse` and `Partner` are symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRelation {
    /// First user
    pub user1_id: UserId,

    /// Second user
    pub user2_id: UserId,

    /// Relation type code
    pub relation_type: EdgeType,
}

impl RawRelation {
    /// Create a new relation row
    pub fn new(user1_id: UserId, user2_id: UserId, relation_type: EdgeType) -> Self {
        Self {
            user1_id,
            user2_id,
            relation_type,
        }
    }

    /// `parent` is the parent of `child`
    pub fn parent_of(parent: UserId, child: UserId) -> Self {
        Self::new(parent, child, EdgeType::Parent)
    }

    /// The two users are married
    pub fn spouses(a: UserId, b: UserId) -> Self {
        Self::new(a, b, EdgeType::Spouse)
    }

    /// The two users are unmarried partners
    pub fn partners(a: UserId, b: UserId) -> Self {
        Self::new(a, b, EdgeType::Partner)
    }

    /// Whether the relation refers to the same user on both sides
    pub fn is_self_referential(&self) -> bool {
        self.user1_id == self.user2_id
    }
}

/// A user's membership in a group
///
/// `parents` and `children` are optional override lists that contribute
/// parent/child edges alongside the raw relation rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Member {
    /// The member's user id
    pub user_id: UserId,

    /// Users recorded as this member's parents
    #[serde(default)]
    pub parents: Vec<UserId>,

    /// Users recorded as this member's children
    #[serde(default)]
    pub children: Vec<UserId>,
}

impl Member {
    /// Create a member with no override lists
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add override parents
    pub fn with_parents(mut self, parents: impl IntoIterator<Item = UserId>) -> Self {
        self.parents.extend(parents);
        self
    }

    /// Add override children
    pub fn with_children(mut self, children: impl IntoIterator<Item = UserId>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A directed edge of the family graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source user
    pub from: UserId,

    /// Target user
    pub to: UserId,

    /// What `to` is to `from`
    pub edge_type: EdgeType,
}

impl Edge {
    /// Create a new edge
    pub fn new(from: UserId, to: UserId, edge_type: EdgeType) -> Self {
        Self {
            from,
            to,
            edge_type,
        }
    }

    /// The mirrored edge
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.edge_type.inverse())
    }
}
