//! Gender label resolution
//!
//! A bidirectional dictionary keyed by exact compound labels
//! ("Great-grandparent-in-law" → "Great-grandfather-in-law" /
//! "Great-grandmother-in-law"). Entries are derived once from the catalog
//! labels when the table is built; lookups are plain map hits.

use crate::catalog::Catalog;
use crate::sibling::SiblingKind;
use kinship_domain::Gender;
use std::collections::HashMap;

/// Neutral root words and their male / female forms
///
/// Longer roots come first so "grandparent" wins over "parent".
const ROOTS: &[(&str, &str, &str)] = &[
    ("grandparent", "grandfather", "grandmother"),
    ("grandchild", "grandson", "granddaughter"),
    ("parent", "father", "mother"),
    ("child", "son", "daughter"),
    ("sibling", "brother", "sister"),
    ("pibling", "uncle", "aunt"),
    ("nibling", "nephew", "niece"),
    ("spouse", "husband", "wife"),
];

/// Male and female forms of a neutral label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderedForms {
    /// Male form
    pub male: String,
    /// Female form
    pub female: String,
}

/// Replace the first neutral root in `label`, keeping the case of its
/// first letter
fn derive_forms(label: &str) -> Option<GenderedForms> {
    let lower = label.to_ascii_lowercase();
    ROOTS.iter().find_map(|&(root, male, female)| {
        let at = lower.find(root)?;
        let capitalized = label[at..].starts_with(|c: char| c.is_ascii_uppercase());
        let swap = |word: &str| {
            let word = if capitalized {
                let mut chars = word.chars();
                chars
                    .next()
                    .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            } else {
                word.to_string()
            };
            format!("{}{}{}", &label[..at], word, &label[at + root.len()..])
        };
        Some(GenderedForms {
            male: swap(male),
            female: swap(female),
        })
    })
}

/// Dictionary between neutral labels and their gendered forms
#[derive(Debug, Clone, Default)]
pub struct GenderTable {
    gendered: HashMap<String, GenderedForms>,
    neutral: HashMap<String, String>,
}

impl GenderTable {
    /// Build the table for every gendered rule of `catalog`, plus the
    /// sibling disambiguation labels
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let labels = catalog
            .rules()
            .iter()
            .filter(|r| r.gendered_at_step.is_some())
            .map(|r| r.label.as_str())
            .chain([SiblingKind::Full.label(), SiblingKind::Half.label()]);

        let mut table = Self::default();
        for label in labels {
            table.insert(label);
        }
        table
    }

    fn insert(&mut self, label: &str) {
        if self.gendered.contains_key(label) {
            return;
        }
        if let Some(forms) = derive_forms(label) {
            self.neutral.insert(forms.male.clone(), label.to_string());
            self.neutral.insert(forms.female.clone(), label.to_string());
            self.gendered.insert(label.to_string(), forms);
        }
    }

    /// Gendered forms of a neutral label, if it has an entry
    pub fn forms(&self, label: &str) -> Option<&GenderedForms> {
        self.gendered.get(label)
    }

    /// Gender `label` for a user of `gender`
    ///
    /// Returns the label unchanged when gendering is disabled, the gender
    /// is non-binary or unset, or the label has no entry.
    pub fn apply(&self, label: &str, gender: Option<Gender>, apply_gender: bool) -> String {
        if !apply_gender {
            return label.to_string();
        }
        match (gender, self.gendered.get(label)) {
            (Some(Gender::Male), Some(forms)) => forms.male.clone(),
            (Some(Gender::Female), Some(forms)) => forms.female.clone(),
            _ => label.to_string(),
        }
    }

    /// Neutral form of a gendered label; other labels come back unchanged
    pub fn neutralize<'a>(&'a self, label: &'a str) -> &'a str {
        self.neutral.get(label).map(String::as_str).unwrap_or(label)
    }

    /// Number of neutral labels with gendered forms
    pub fn len(&self) -> usize {
        self.gendered.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.gendered.is_empty()
    }
}
