//! Kinship rule catalog
//!
//! Maps an exact path shape to a neutral label template. The catalog is
//! data: a table of blood-relation base rules, from which the in-law,
//! step and partner ("co-") families are generated by inserting a union
//! hop at a fixed position.
//!
//! | Family | Shape | Example |
//! |--------|-------|---------|
//! | Blood | base | `parent > parent` → Grandparent |
//! | Union before | `spouse` + base | `spouse > parent` → Parent-in-law |
//! | Union after | base + `spouse` | `child > spouse` → Child-in-law |
//! | Step (descendants of a spouse, spouses of ancestors) | as above | `parent > spouse` → Step-parent |
//! | Step between | `parent > spouse` + rest | `parent > spouse > child` → Step-sibling |
//! | Partner | every `spouse` hop → `partner` | `partner > parent` → Co-parent |

use crate::ResolverError;
use kinship_domain::EdgeType::{self, Child as C, Parent as P, Spouse as S};
use kinship_domain::PathShape;
use std::collections::HashMap;
use tracing::debug;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Exact path shape this rule matches
    pub shape: PathShape,

    /// Neutral label template
    pub label: String,

    /// Path step whose user's gender genders the label; `None` if the
    /// label is never gendered
    pub gendered_at_step: Option<usize>,
}

impl Rule {
    /// Create a rule
    pub fn new(shape: &[EdgeType], label: impl Into<String>, gendered: bool) -> Self {
        Self {
            shape: PathShape::from(shape),
            label: label.into(),
            gendered_at_step: gendered.then_some(shape.len()),
        }
    }
}

/// Generate the spouse hop before the base shape
const UNION_BEFORE: u8 = 0b001;
/// Generate the spouse hop after the base shape
const UNION_AFTER: u8 = 0b010;
/// Generate the spouse hop after the first `parent` edge
const STEP_BETWEEN: u8 = 0b100;
const UNIONS: u8 = UNION_BEFORE | UNION_AFTER;

struct BaseRule {
    shape: &'static [EdgeType],
    label: &'static str,
    gendered: bool,
    variants: u8,
}

const fn base(
    shape: &'static [EdgeType],
    label: &'static str,
    gendered: bool,
    variants: u8,
) -> BaseRule {
    BaseRule {
        shape,
        label,
        gendered,
        variants,
    }
}

const BASE_RULES: &[BaseRule] = &[
    // Unions
    base(&[S], "Spouse", true, 0),
    base(&[EdgeType::Partner], "Partner", false, 0),
    // Direct lineage
    base(&[P], "Parent", true, UNIONS),
    base(&[P, P], "Grandparent", true, UNIONS),
    base(&[P, P, P], "Great-grandparent", true, UNIONS),
    base(&[P, P, P, P], "Great-great-grandparent", true, UNIONS),
    base(&[C], "Child", true, UNIONS),
    base(&[C, C], "Grandchild", true, UNIONS),
    base(&[C, C, C], "Great-grandchild", true, UNIONS),
    base(&[C, C, C, C], "Great-great-grandchild", true, UNIONS),
    // Collateral lines
    base(&[P, C], "Sibling", true, UNIONS | STEP_BETWEEN),
    base(&[P, P, C], "Pibling", true, UNIONS),
    base(&[P, P, P, C], "Great-pibling", true, UNIONS),
    base(&[P, P, P, P, C], "Great-great-pibling", true, 0),
    base(&[P, C, C], "Nibling", true, UNIONS | STEP_BETWEEN),
    base(&[P, C, C, C], "Grand-nibling", true, UNIONS),
    base(&[P, C, C, C, C], "Great-grand-nibling", true, 0),
    // Cousins
    base(&[P, P, C, C], "Cousin", false, UNIONS),
    base(&[P, P, P, C, C], "Cousin once removed", false, 0),
    base(&[P, P, C, C, C], "Cousin once removed", false, 0),
    base(&[P, P, P, P, C, C], "Cousin twice removed", false, 0),
    base(&[P, P, C, C, C, C], "Cousin twice removed", false, 0),
    base(&[P, P, P, C, C, C], "2nd cousin", false, 0),
    base(&[P, P, P, P, C, C, C], "2nd cousin once removed", false, 0),
    base(&[P, P, P, C, C, C, C], "2nd cousin once removed", false, 0),
    base(&[P, P, P, P, C, C, C, C], "3rd cousin", false, 0),
];

/// Spouse-mediated shapes that are not a single hop away from a base rule
const MARRIAGE_RULES: &[(&[EdgeType], &str)] = &[
    (&[P, S, P], "Step-grandparent"),
    (&[C, S, C], "Step-grandchild"),
    (&[S, P, S, C], "Step-sibling-in-law"),
    (&[P, S, C, S], "Step-sibling-in-law"),
    (&[S, P, C, S], "Sibling-in-law"),
];

/// Lowercase the first character of a label so it can follow a prefix
fn lower_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn step_label(label: &str) -> String {
    format!("Step-{}", lower_first(label))
}

fn in_law_label(label: &str) -> String {
    format!("{}-in-law", label)
}

/// Label of the partner-mediated parallel of a spouse-mediated label
///
/// "Parent-in-law" becomes "Co-parent", "Step-sibling" becomes
/// "Co-step-sibling". With more than one union hop the suffix stays, so
/// "Step-sibling-in-law" becomes "Co-step-sibling-in-law" and does not
/// collide with the single-hop "Co-step-sibling".
fn partner_label(label: &str, unions: usize) -> String {
    let root = match unions {
        0 | 1 => label.strip_suffix("-in-law").unwrap_or(label),
        _ => label,
    };
    format!("Co-{}", lower_first(root))
}

/// Spouse-mediated variants of one base rule
fn marriage_variants(base: &BaseRule) -> Vec<Rule> {
    let mut rules = Vec::new();
    let shape = base.shape;

    if base.variants & UNION_BEFORE != 0 {
        // A spouse's descendants are step relatives, everyone else in-laws
        let label = if shape[0] == C {
            step_label(base.label)
        } else {
            in_law_label(base.label)
        };
        rules.push(Rule::new(&[&[S][..], shape].concat(), label, base.gendered));
    }

    if base.variants & UNION_AFTER != 0 {
        // An ancestor's spouse is a step relative, anyone else's an in-law
        let label = if shape.iter().all(|&e| e == P) {
            step_label(base.label)
        } else {
            in_law_label(base.label)
        };
        rules.push(Rule::new(&[shape, &[S][..]].concat(), label, base.gendered));
    }

    if base.variants & STEP_BETWEEN != 0 {
        if let Some((&P, rest)) = shape.split_first() {
            let stepped = [&[P, S][..], rest].concat();
            rules.push(Rule::new(&stepped, step_label(base.label), base.gendered));
        }
    }

    rules
}

/// Swap every spouse hop for a partner hop
fn partner_parallel(rule: &Rule) -> Rule {
    let edges: Vec<EdgeType> = rule
        .shape
        .edges()
        .iter()
        .map(|&e| if e == S { EdgeType::Partner } else { e })
        .collect();
    let unions = edges.iter().filter(|&&e| e == EdgeType::Partner).count();
    Rule {
        shape: PathShape::new(edges),
        label: partner_label(&rule.label, unions),
        gendered_at_step: rule.gendered_at_step,
    }
}

/// Generate the full standard rule list, in catalog order
pub fn standard_rules() -> Vec<Rule> {
    let mut blood = Vec::new();
    let mut marriage = Vec::new();

    for base in BASE_RULES {
        blood.push(Rule::new(base.shape, base.label, base.gendered));
        marriage.extend(marriage_variants(base));
    }
    marriage.extend(
        MARRIAGE_RULES
            .iter()
            .map(|(shape, label)| Rule::new(shape, *label, true)),
    );

    let partnership: Vec<Rule> = marriage.iter().map(partner_parallel).collect();

    blood.into_iter().chain(marriage).chain(partnership).collect()
}

/// Exact-match index from path shape to rule
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<Rule>,
    index: HashMap<PathShape, usize>,
}

impl Catalog {
    /// The standard kinship catalog
    pub fn standard() -> Result<Self, ResolverError> {
        Self::from_rules(standard_rules())
    }

    /// Build a catalog, rejecting rules that share a shape
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, ResolverError> {
        let mut index = HashMap::with_capacity(rules.len());

        for (idx, rule) in rules.iter().enumerate() {
            if let Some(&first) = index.get(&rule.shape) {
                let first: &Rule = &rules[first];
                return Err(ResolverError::DuplicateShape {
                    shape: rule.shape.to_string(),
                    first: first.label.clone(),
                    second: rule.label.clone(),
                });
            }
            index.insert(rule.shape.clone(), idx);
        }

        debug!("Loaded kinship catalog with {} rules", rules.len());
        Ok(Self { rules, index })
    }

    /// Rule for exactly this shape
    pub fn lookup(&self, shape: &PathShape) -> Option<&Rule> {
        self.index.get(shape).map(|&idx| &self.rules[idx])
    }

    /// All rules, in catalog order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
