//! Sibling disambiguation for `parent > child` paths
//!
//! Path shape alone cannot tell a full sibling from a half-sibling: both
//! are one step up and one step down. The full parent sets decide.

use crate::AdjacencyList;
use kinship_domain::{EdgeType, Path, UserId};

/// Outcome of comparing the parent sets of ego and alter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingKind {
    /// Identical parent sets
    Full,

    /// Some, but not all, parents shared
    Half,
}

impl SiblingKind {
    /// Neutral label for this kind
    pub fn label(&self) -> &'static str {
        match self {
            SiblingKind::Full => "Sibling",
            SiblingKind::Half => "Half-sibling",
        }
    }
}

/// Whether a path has exactly the `parent > child` shape
pub fn is_sibling_shape(path: &Path) -> bool {
    path.shape().edges() == [EdgeType::Parent, EdgeType::Child]
}

/// Classify ego and alter as full or half siblings
///
/// Returns `None` (fall through to the catalog) when either has no
/// recorded parents or the sets are disjoint.
pub fn classify(graph: &AdjacencyList, ego: UserId, alter: UserId) -> Option<SiblingKind> {
    let ego_parents = graph.parents_of(ego);
    let alter_parents = graph.parents_of(alter);

    if ego_parents.is_empty() || alter_parents.is_empty() {
        return None;
    }
    if ego_parents == alter_parents {
        Some(SiblingKind::Full)
    } else if !ego_parents.is_disjoint(&alter_parents) {
        Some(SiblingKind::Half)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::{Member, RawRelation};

    fn id(n: u128) -> UserId {
        UserId::from_value(n)
    }

    #[test]
    fn test_full_siblings() {
        let graph = AdjacencyList::build(
            &[
                RawRelation::parent_of(id(1), id(3)),
                RawRelation::parent_of(id(2), id(3)),
                RawRelation::parent_of(id(1), id(4)),
                RawRelation::parent_of(id(2), id(4)),
            ],
            &[],
        );
        assert_eq!(classify(&graph, id(3), id(4)), Some(SiblingKind::Full));
    }

    #[test]
    fn test_single_shared_parent_is_full_sibling() {
        let graph = AdjacencyList::build(
            &[
                RawRelation::parent_of(id(1), id(3)),
                RawRelation::parent_of(id(1), id(4)),
            ],
            &[],
        );
        assert_eq!(classify(&graph, id(3), id(4)), Some(SiblingKind::Full));
    }

    #[test]
    fn test_half_siblings() {
        // 3 has parents 1 and 2, 4 only has 1
        let graph = AdjacencyList::build(
            &[
                RawRelation::parent_of(id(1), id(3)),
                RawRelation::parent_of(id(2), id(3)),
                RawRelation::parent_of(id(1), id(4)),
            ],
            &[],
        );
        assert_eq!(classify(&graph, id(3), id(4)), Some(SiblingKind::Half));
        assert_eq!(classify(&graph, id(4), id(3)), Some(SiblingKind::Half));
    }

    #[test]
    fn test_step_parent_makes_half_sibling() {
        // 3 records a step-parent 5 through a member override
        let graph = AdjacencyList::build(
            &[
                RawRelation::parent_of(id(1), id(3)),
                RawRelation::parent_of(id(2), id(3)),
                RawRelation::parent_of(id(1), id(4)),
                RawRelation::parent_of(id(2), id(4)),
            ],
            &[Member::new(id(3)).with_parents([id(5)])],
        );
        assert_eq!(classify(&graph, id(3), id(4)), Some(SiblingKind::Half));
    }

    #[test]
    fn test_no_parents_falls_through() {
        let graph = AdjacencyList::build(&[RawRelation::parent_of(id(1), id(3))], &[]);
        assert_eq!(classify(&graph, id(3), id(7)), None);
    }

    #[test]
    fn test_disjoint_parents_fall_through() {
        let graph = AdjacencyList::build(
            &[
                RawRelation::parent_of(id(1), id(3)),
                RawRelation::parent_of(id(2), id(4)),
            ],
            &[],
        );
        assert_eq!(classify(&graph, id(3), id(4)), None);
    }

    #[test]
    fn test_sibling_shape_detection() {
        let siblings = Path::start(id(3))
            .extended(id(1), EdgeType::Parent)
            .extended(id(4), EdgeType::Child);
        let grandparent = Path::start(id(3))
            .extended(id(1), EdgeType::Parent)
            .extended(id(0), EdgeType::Parent);

        assert!(is_sibling_shape(&siblings));
        assert!(!is_sibling_shape(&grandparent));
        assert_eq!(SiblingKind::Half.label(), "Half-sibling");
    }
}
