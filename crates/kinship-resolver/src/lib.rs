//! Kinship Resolver
//!
//! Computes the natural-language kinship label between two members of a
//! group ("Grandmother", "Step-sibling-in-law", "2nd cousin"), together
//! with the shortest connecting path and its length.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Graph builder | [`graph`] | symmetric [`AdjacencyList`] |
//! | Path finder | [`path_finder`] | shortest [`Path`](kinship_domain::Path) |
//! | Sibling disambiguator | [`sibling`] | full / half sibling for `parent > child` |
//! | Path translator | [`translate`], [`catalog`] | neutral label or `"Relative"` |
//! | Gender resolver | [`gender`] | gendered label |
//!
//! Everything is synchronous and side-effect free. The graph, catalog and
//! gender table are immutable once built, so one graph can back many
//! resolutions:
//!
//! ```
//! use kinship_domain::{Member, RawRelation, UserId};
//! use kinship_resolver::{AdjacencyList, Genders, Resolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (a, b, c) = (UserId::from_value(1), UserId::from_value(2), UserId::from_value(3));
//! let relations = [RawRelation::parent_of(a, b), RawRelation::parent_of(a, c)];
//! let members = [Member::new(a), Member::new(b), Member::new(c)];
//!
//! let resolver = Resolver::default_config()?;
//! let graph = AdjacencyList::build(&relations, &members);
//!
//! let result = resolver.resolve_in(&graph, b, c, &Genders::new(), true);
//! assert_eq!(result.relationship.as_deref(), Some("Sibling"));
//!
//! let ranked = resolver.closeness(&graph, b, &members, &Genders::new(), true);
//! assert_eq!(ranked[0].1.steps, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! apply_gender = true
//! self_label = "Me"
//! fallback_label = "Relative"
//! disambiguate_siblings = true
//! ```

#![warn(missing_docs)]

mod config;
mod error;

pub mod catalog;
pub mod gender;
pub mod graph;
pub mod path_finder;
pub mod resolver;
pub mod sibling;
pub mod translate;

pub use catalog::{Catalog, Rule};
pub use config::ResolverConfig;
pub use error::ResolverError;
pub use gender::GenderTable;
pub use graph::AdjacencyList;
pub use path_finder::{find_all_paths, find_path};
pub use resolver::{Genders, Resolver};
pub use sibling::SiblingKind;
