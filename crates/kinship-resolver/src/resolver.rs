//! Resolver facade tying the pipeline together
//!
//! graph → path → sibling disambiguation or catalog translation → gendering

use crate::catalog::Catalog;
use crate::gender::GenderTable;
use crate::path_finder::{find_all_paths, find_path};
use crate::sibling::{classify, is_sibling_shape};
use crate::translate::translate;
use crate::{AdjacencyList, ResolverConfig, ResolverError};
use kinship_domain::traits::SnapshotSource;
use kinship_domain::{Gender, Member, Path, RawRelation, RelationshipResult, UserId};
use std::collections::HashMap;
use tracing::debug;

/// Genders keyed by user id; missing users count as unset
pub type Genders = HashMap<UserId, Option<Gender>>;

/// Kinship resolver
///
/// Holds the rule catalog and gender table. Both are immutable, so a
/// single resolver can serve any number of threads.
///
/// # Examples
///
/// ```
/// use kinship_domain::{Gender, RawRelation, UserId};
/// use kinship_resolver::{Genders, Resolver};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mother = UserId::from_value(1);
/// let child = UserId::from_value(2);
/// let relations = [RawRelation::parent_of(mother, child)];
/// let genders = Genders::from([(mother, Some(Gender::Female))]);
///
/// let resolver = Resolver::default_config()?;
/// let result = resolver.resolve(child, mother, &relations, &[], &genders, true);
/// assert_eq!(result.relationship.as_deref(), Some("Mother"));
/// assert_eq!(result.steps, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolverConfig,
    catalog: Catalog,
    genders: GenderTable,
}

impl Resolver {
    /// Create a resolver with the standard catalog
    pub fn new(config: ResolverConfig) -> Result<Self, ResolverError> {
        Self::with_catalog(config, Catalog::standard()?)
    }

    /// Create a resolver with default configuration
    pub fn default_config() -> Result<Self, ResolverError> {
        Self::new(ResolverConfig::default())
    }

    /// Create a resolver with a custom catalog
    pub fn with_catalog(config: ResolverConfig, catalog: Catalog) -> Result<Self, ResolverError> {
        config.validate()?;
        let genders = GenderTable::from_catalog(&catalog);
        Ok(Self {
            config,
            catalog,
            genders,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Rule catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Gender table derived from the catalog
    pub fn gender_table(&self) -> &GenderTable {
        &self.genders
    }

    /// Build a graph from everything a snapshot source holds
    pub fn graph_from_source<S: SnapshotSource>(
        &self,
        source: &S,
    ) -> Result<AdjacencyList, ResolverError>
    where
        S::Error: std::fmt::Display,
    {
        let relations = source
            .relations()
            .map_err(|e| ResolverError::Source(e.to_string()))?;
        let members = source
            .members()
            .map_err(|e| ResolverError::Source(e.to_string()))?;
        Ok(AdjacencyList::build(&relations, &members))
    }

    /// Collect user genders from a snapshot source
    pub fn genders_from_source<S: SnapshotSource>(
        &self,
        source: &S,
    ) -> Result<Genders, ResolverError>
    where
        S::Error: std::fmt::Display,
    {
        let users = source
            .users()
            .map_err(|e| ResolverError::Source(e.to_string()))?;
        Ok(users.into_iter().map(|u| (u.id, u.gender)).collect())
    }

    /// Resolve ego → alter from raw inputs
    ///
    /// Builds a throwaway graph. When resolving many pairs in one group,
    /// build the graph once and use [`Resolver::resolve_in`] instead.
    pub fn resolve(
        &self,
        ego: UserId,
        alter: UserId,
        relations: &[RawRelation],
        members: &[Member],
        genders: &Genders,
        apply_gender: bool,
    ) -> RelationshipResult {
        let graph = AdjacencyList::build(relations, members);
        self.resolve_in(&graph, ego, alter, genders, apply_gender)
    }

    /// Resolve ego → alter on a prebuilt graph
    pub fn resolve_in(
        &self,
        graph: &AdjacencyList,
        ego: UserId,
        alter: UserId,
        genders: &Genders,
        apply_gender: bool,
    ) -> RelationshipResult {
        if ego == alter {
            return RelationshipResult::found(self.config.self_label.clone(), Path::start(ego));
        }

        // Users without edges cannot be reached
        let path = if graph.contains(ego) && graph.contains(alter) {
            find_path(graph, ego, alter)
        } else {
            None
        };

        let result = match path {
            Some(path) => {
                let label = self.label_path(graph, &path, genders, apply_gender);
                RelationshipResult::found(label, path)
            }
            None => RelationshipResult::disconnected(),
        };

        debug!(
            "Resolved {} -> {}: {:?} in {} steps",
            ego, alter, result.relationship, result.steps
        );
        result
    }

    /// Label a path found on `graph`
    ///
    /// Labels are gendered only when both `apply_gender` and the configured
    /// `apply_gender` are set.
    pub fn label_path(
        &self,
        graph: &AdjacencyList,
        path: &Path,
        genders: &Genders,
        apply_gender: bool,
    ) -> String {
        let apply_gender = apply_gender && self.config.apply_gender;
        if path.edge_count() == 0 {
            return self.config.self_label.clone();
        }

        if self.config.disambiguate_siblings && is_sibling_shape(path) {
            if let Some(kind) = classify(graph, path.ego(), path.terminal()) {
                let gender = gender_of(genders, path.terminal());
                return self.genders.apply(kind.label(), gender, apply_gender);
            }
        }

        let translation = translate(&self.catalog, path, &self.config.fallback_label);
        let gender = translation
            .gendered_at_step
            .and_then(|step| path.user_at(step))
            .and_then(|user| gender_of(genders, user));
        match translation.gendered_at_step {
            Some(_) => self.genders.apply(translation.label, gender, apply_gender),
            None => translation.label.to_string(),
        }
    }

    /// Resolve ego against every other member, closest first
    ///
    /// One BFS serves all targets. Ties keep member order; unreachable
    /// members sort last.
    pub fn closeness(
        &self,
        graph: &AdjacencyList,
        ego: UserId,
        members: &[Member],
        genders: &Genders,
        apply_gender: bool,
    ) -> Vec<(UserId, RelationshipResult)> {
        let paths = find_all_paths(graph, ego);

        let mut results: Vec<(UserId, RelationshipResult)> = members
            .iter()
            .map(|m| m.user_id)
            .filter(|&user| user != ego)
            .map(|user| {
                let result = match paths.get(&user) {
                    Some(path) => {
                        let label = self.label_path(graph, path, genders, apply_gender);
                        RelationshipResult::found(label, path.clone())
                    }
                    None => RelationshipResult::disconnected(),
                };
                (user, result)
            })
            .collect();

        results.sort_by_key(|(_, r)| (!r.is_connected(), r.steps));
        debug!("Ranked {} members by closeness to {}", results.len(), ego);
        results
    }
}

fn gender_of(genders: &Genders, user: UserId) -> Option<Gender> {
    genders.get(&user).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::{EdgeType, GroupSnapshot, User};

    fn id(n: u128) -> UserId {
        UserId::from_value(n)
    }

    fn resolver() -> Resolver {
        Resolver::default_config().unwrap()
    }

    #[test]
    fn test_self_resolution() {
        let result = resolver().resolve(id(1), id(1), &[], &[], &Genders::new(), true);
        assert_eq!(result.relationship.as_deref(), Some("Me"));
        assert_eq!(result.steps, 0);
        assert_eq!(result.path.unwrap().user_ids(), vec![id(1)]);
    }

    #[test]
    fn test_custom_self_label() {
        let config = ResolverConfig {
            self_label: "You".to_string(),
            ..ResolverConfig::default()
        };
        let resolver = Resolver::new(config).unwrap();
        let result = resolver.resolve(id(1), id(1), &[], &[], &Genders::new(), true);
        assert_eq!(result.relationship.as_deref(), Some("You"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ResolverConfig {
            fallback_label: " ".to_string(),
            ..ResolverConfig::default()
        };
        assert!(matches!(Resolver::new(config), Err(ResolverError::Config(_))));
    }

    #[test]
    fn test_disconnected() {
        let relations = [RawRelation::parent_of(id(1), id(2))];
        let result = resolver().resolve(id(1), id(3), &relations, &[], &Genders::new(), true);
        assert_eq!(result, RelationshipResult::disconnected());
    }

    #[test]
    fn test_fallback_label() {
        // Two spouse hops have no rule
        let relations = [
            RawRelation::spouses(id(1), id(2)),
            RawRelation::spouses(id(2), id(3)),
        ];
        let result = resolver().resolve(id(1), id(3), &relations, &[], &Genders::new(), true);
        assert_eq!(result.relationship.as_deref(), Some("Relative"));
        assert_eq!(result.steps, 2);
    }

    #[test]
    fn test_gender_from_terminal_user() {
        let relations = [
            RawRelation::parent_of(id(1), id(2)),
            RawRelation::parent_of(id(2), id(3)),
        ];
        // Only the grandparent's gender matters
        let genders = Genders::from([(id(1), Some(Gender::Male)), (id(2), Some(Gender::Female))]);
        let result = resolver().resolve(id(3), id(1), &relations, &[], &genders, true);
        assert_eq!(result.relationship.as_deref(), Some("Grandfather"));
    }

    #[test]
    fn test_sibling_disambiguation_can_be_disabled() {
        let relations = [
            RawRelation::parent_of(id(1), id(3)),
            RawRelation::parent_of(id(2), id(3)),
            RawRelation::parent_of(id(1), id(4)),
        ];
        let config = ResolverConfig {
            disambiguate_siblings: false,
            ..ResolverConfig::default()
        };
        let resolver = Resolver::new(config).unwrap();
        let result = resolver.resolve(id(3), id(4), &relations, &[], &Genders::new(), true);
        assert_eq!(result.relationship.as_deref(), Some("Sibling"));
    }

    #[test]
    fn test_graph_from_snapshot_source() {
        let snapshot = GroupSnapshot {
            relations: vec![RawRelation::new(id(2), id(1), EdgeType::Child)],
            members: vec![],
            users: vec![User::new(id(1), Some(Gender::Female))],
        };
        let resolver = resolver();
        let graph = resolver.graph_from_source(&snapshot).unwrap();
        let genders = resolver.genders_from_source(&snapshot).unwrap();
        assert_eq!(genders[&id(1)], Some(Gender::Female));

        let result = resolver.resolve_in(&graph, id(1), id(2), &genders, true);
        assert_eq!(result.relationship.as_deref(), Some("Child"));
        let result = resolver.resolve_in(&graph, id(2), id(1), &genders, true);
        assert_eq!(result.relationship.as_deref(), Some("Mother"));
    }

    #[test]
    fn test_neutral_config_never_genders() {
        let (mother, child) = (id(1), id(2));
        let relations = [
            RawRelation::parent_of(mother, child),
            RawRelation::parent_of(mother, id(3)),
        ];
        let genders = Genders::from([
            (mother, Some(Gender::Female)),
            (id(3), Some(Gender::Male)),
        ]);
        let resolver = Resolver::new(ResolverConfig::neutral()).unwrap();

        let result = resolver.resolve(child, mother, &relations, &[], &genders, true);
        assert_eq!(result.relationship.as_deref(), Some("Parent"));

        let graph = AdjacencyList::build(&relations, &[]);
        let result = resolver.resolve_in(&graph, child, id(3), &genders, true);
        assert_eq!(result.relationship.as_deref(), Some("Sibling"));

        let members: Vec<Member> = [1, 2, 3].into_iter().map(|n| Member::new(id(n))).collect();
        let ranked = resolver.closeness(&graph, child, &members, &genders, true);
        assert!(ranked
            .iter()
            .all(|(_, r)| matches!(r.relationship.as_deref(), Some("Parent" | "Sibling"))));
    }

    #[test]
    fn test_users_without_edges_are_disconnected() {
        let graph = AdjacencyList::build(&[RawRelation::spouses(id(1), id(2))], &[]);
        let result = resolver().resolve_in(&graph, id(1), id(7), &Genders::new(), true);
        assert_eq!(result, RelationshipResult::disconnected());
        let result = resolver().resolve_in(&graph, id(7), id(1), &Genders::new(), true);
        assert_eq!(result, RelationshipResult::disconnected());
    }

    #[test]
    fn test_shared_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdjacencyList>();
        assert_send_sync::<Catalog>();
        assert_send_sync::<GenderTable>();
        assert_send_sync::<Resolver>();
    }

    #[test]
    fn test_closeness_ordering() {
        // 1 -> parent 2 -> parent 3; 4 is isolated
        let relations = [
            RawRelation::parent_of(id(2), id(1)),
            RawRelation::parent_of(id(3), id(2)),
        ];
        let members: Vec<Member> = [4, 3, 2, 1].into_iter().map(|n| Member::new(id(n))).collect();
        let resolver = resolver();
        let graph = AdjacencyList::build(&relations, &members);

        let ranked = resolver.closeness(&graph, id(1), &members, &Genders::new(), true);
        let order: Vec<UserId> = ranked.iter().map(|(user, _)| *user).collect();
        assert_eq!(order, vec![id(2), id(3), id(4)]);
        assert_eq!(ranked[0].1.relationship.as_deref(), Some("Parent"));
        assert_eq!(ranked[1].1.relationship.as_deref(), Some("Grandparent"));
        assert!(!ranked[2].1.is_connected());
    }
}
