//! Path translation: path shape to neutral label

use crate::catalog::Catalog;
use kinship_domain::Path;

/// Neutral label for a path, with the step whose user genders it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<'a> {
    /// Neutral label
    pub label: &'a str,

    /// Step index of the user whose gender applies, if any
    pub gendered_at_step: Option<usize>,
}

/// Translate a path through an exact catalog lookup on its shape
///
/// Shapes without a rule get `fallback` and are never gendered.
pub fn translate<'a>(catalog: &'a Catalog, path: &Path, fallback: &'a str) -> Translation<'a> {
    match catalog.lookup(&path.shape()) {
        Some(rule) => Translation {
            label: &rule.label,
            gendered_at_step: rule.gendered_at_step,
        },
        None => Translation {
            label: fallback,
            gendered_at_step: None,
        },
    }
}
