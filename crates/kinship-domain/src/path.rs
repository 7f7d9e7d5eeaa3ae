//! Path module - kinship paths, their canonical shapes, and resolution results

use super::{EdgeType, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used in the textual form of a path shape
pub const SHAPE_SEPARATOR: &str = " > ";

/// The canonical shape of a kinship path: the edge types along it, in order
///
/// Shapes compare structurally. The textual form joins the type codes with
/// `" > "`, e.g. `"parent > parent > child"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct PathShape(Vec<EdgeType>);

impl PathShape {
    /// Create a shape from a sequence of edge types
    pub fn new(edges: Vec<EdgeType>) -> Self {
        Self(edges)
    }

    /// Edge types along the shape
    pub fn edges(&self) -> &[EdgeType] {
        &self.0
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the shape has no edges (ego to ego)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[EdgeType]> for PathShape {
    fn from(edges: &[EdgeType]) -> Self {
        Self(edges.to_vec())
    }
}

impl fmt::Display for PathShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, edge) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(SHAPE_SEPARATOR)?;
            }
            f.write_str(edge.as_str())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for PathShape {
    type Err = String;

    /// Parse `"parent > child"`; `>` and `,` are both accepted as separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(['>', ','])
            .map(|part| part.parse::<EdgeType>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// One step of a path: the user reached and the edge used to reach them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// User at this step
    pub user_id: UserId,

    /// Edge traversed to arrive here; `None` for ego
    pub via: Option<EdgeType>,
}

/// A simple path from ego to alter
///
/// Always holds at least the ego step, which is the only step without an
/// edge. Deserialization enforces the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PathSteps")]
pub struct Path {
    steps: Vec<PathStep>,
}

#[derive(Deserialize)]
struct PathSteps {
    steps: Vec<PathStep>,
}

impl TryFrom<PathSteps> for Path {
    type Error = String;

    fn try_from(raw: PathSteps) -> Result<Self, Self::Error> {
        let Some((ego, rest)) = raw.steps.split_first() else {
            return Err("Path has no ego step".to_string());
        };
        if ego.via.is_some() {
            return Err("Ego step must not carry an edge".to_string());
        }
        if rest.iter().any(|s| s.via.is_none()) {
            return Err("Every step after ego must carry an edge".to_string());
        }
        Ok(Self { steps: raw.steps })
    }
}

impl Path {
    /// A path holding only ego
    pub fn start(ego: UserId) -> Self {
        Self {
            steps: vec![PathStep {
                user_id: ego,
                via: None,
            }],
        }
    }

    /// A copy of this path extended by one edge
    pub fn extended(&self, user_id: UserId, via: EdgeType) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(PathStep {
            user_id,
            via: Some(via),
        });
        Self { steps }
    }

    /// All steps, ego first
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of edges (one less than the number of steps)
    pub fn edge_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The starting user
    pub fn ego(&self) -> UserId {
        self.steps[0].user_id
    }

    /// The last user on the path
    pub fn terminal(&self) -> UserId {
        self.steps[self.steps.len() - 1].user_id
    }

    /// User at step `idx`, where step 0 is ego
    pub fn user_at(&self, idx: usize) -> Option<UserId> {
        self.steps.get(idx).map(|s| s.user_id)
    }

    /// Canonical shape of the path
    pub fn shape(&self) -> PathShape {
        PathShape(self.steps.iter().filter_map(|s| s.via).collect())
    }

    /// User ids along the path, ego first
    pub fn user_ids(&self) -> Vec<UserId> {
        self.steps.iter().map(|s| s.user_id).collect()
    }
}

/// Outcome of resolving the relationship from ego to alter
///
/// `relationship` and `path` are both `None` when no connecting path exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipResult {
    /// Kinship label of alter relative to ego
    pub relationship: Option<String>,

    /// Shortest path from ego to alter
    pub path: Option<Path>,

    /// Number of edges on the path
    pub steps: usize,
}

impl RelationshipResult {
    /// Result for two users with no connecting path
    pub fn disconnected() -> Self {
        Self {
            relationship: None,
            path: None,
            steps: 0,
        }
    }

    /// Result for a found path
    pub fn found(relationship: impl Into<String>, path: Path) -> Self {
        Self {
            relationship: Some(relationship.into()),
            steps: path.edge_count(),
            path: Some(path),
        }
    }

    /// Whether a connecting path was found
    pub fn is_connected(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> UserId {
        UserId::from_value(n)
    }

    #[test]
    fn test_shape_display_and_parse() {
        let shape = PathShape::new(vec![EdgeType::Parent, EdgeType::Parent, EdgeType::Child]);
        assert_eq!(shape.to_string(), "parent > parent > child");

        let parsed: PathShape = "parent > parent > child".parse().unwrap();
        assert_eq!(parsed, shape);

        let commas: PathShape = "parent,parent,child".parse().unwrap();
        assert_eq!(commas, shape);
    }

    #[test]
    fn test_shape_parse_rejects_unknown_edges() {
        assert!("parent > sibling".parse::<PathShape>().is_err());
        assert!("".parse::<PathShape>().unwrap().is_empty());
    }

    #[test]
    fn test_path_accessors() {
        let path = Path::start(id(1))
            .extended(id(2), EdgeType::Parent)
            .extended(id(3), EdgeType::Child);

        assert_eq!(path.ego(), id(1));
        assert_eq!(path.terminal(), id(3));
        assert_eq!(path.edge_count(), 2);
        assert_eq!(path.user_at(1), Some(id(2)));
        assert_eq!(path.user_at(3), None);
        assert_eq!(path.shape().edges(), &[EdgeType::Parent, EdgeType::Child]);
        assert_eq!(path.steps()[0].via, None);
    }

    #[test]
    fn test_path_json_keeps_ego_step() {
        let path = Path::start(id(1)).extended(id(2), EdgeType::Parent);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Path>(&json).unwrap(), path);

        assert!(serde_json::from_str::<Path>(r#"{"steps":[]}"#).is_err());

        let ego = r#"{"user_id":"00000000-0000-0000-0000-000000000001","via":null}"#;
        let edged = r#"{"user_id":"00000000-0000-0000-0000-000000000002","via":"parent"}"#;
        let missing_edge = format!(r#"{{"steps":[{},{}]}}"#, ego, ego);
        assert!(serde_json::from_str::<Path>(&missing_edge).is_err());
        let edged_ego = format!(r#"{{"steps":[{}]}}"#, edged);
        assert!(serde_json::from_str::<Path>(&edged_ego).is_err());
    }

    #[test]
    fn test_result_constructors() {
        let none = RelationshipResult::disconnected();
        assert!(!none.is_connected());
        assert_eq!(none.steps, 0);

        let path = Path::start(id(1)).extended(id(2), EdgeType::Spouse);
        let found = RelationshipResult::found("Spouse", path);
        assert!(found.is_connected());
        assert_eq!(found.steps, 1);
        assert_eq!(found.relationship.as_deref(), Some("Spouse"));
    }
}
