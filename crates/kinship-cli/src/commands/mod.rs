//! Command implementations.

pub mod closeness;
pub mod resolve;
pub mod rules;

pub use self::closeness::execute_closeness;
pub use self::resolve::execute_resolve;
pub use self::rules::execute_rules;

use crate::cli::SnapshotArgs;
use crate::error::Result;
use crate::snapshot::load_snapshot;
use kinship_domain::GroupSnapshot;
use kinship_resolver::{AdjacencyList, Genders, Resolver};

/// A loaded snapshot with its graph and gender map.
pub(crate) struct Group {
    pub snapshot: GroupSnapshot,
    pub graph: AdjacencyList,
    pub genders: Genders,
    pub apply_gender: bool,
}

impl Group {
    /// Load the snapshot named by `args` and build its graph.
    pub fn load(args: &SnapshotArgs, resolver: &Resolver) -> Result<Self> {
        let snapshot = load_snapshot(&args.snapshot)?;
        let graph = resolver.graph_from_source(&snapshot)?;
        let genders = resolver.genders_from_source(&snapshot)?;
        Ok(Self {
            snapshot,
            graph,
            genders,
            apply_gender: !args.neutral,
        })
    }
}
