//! Rules command implementation.

use crate::cli::RulesArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::PathShape;
use kinship_resolver::{Catalog, Rule};

/// Execute the rules command.
pub fn execute_rules(args: RulesArgs, catalog: &Catalog, formatter: &Formatter) -> Result<()> {
    let rules = select_rules(catalog, args.shape.as_deref())?;
    println!("{}", formatter.format_rules(&rules)?);
    Ok(())
}

/// All rules, or the single rule matching `shape`.
fn select_rules<'a>(catalog: &'a Catalog, shape: Option<&str>) -> Result<Vec<&'a Rule>> {
    match shape {
        Some(shape) => {
            let shape: PathShape = shape.parse().map_err(CliError::InvalidInput)?;
            Ok(catalog.lookup(&shape).into_iter().collect())
        }
        None => Ok(catalog.rules().iter().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_rules() {
        let catalog = Catalog::standard().unwrap();
        let rules = select_rules(&catalog, None).unwrap();
        assert_eq!(rules.len(), catalog.len());
    }

    #[test]
    fn test_select_by_shape() {
        let catalog = Catalog::standard().unwrap();

        let rules = select_rules(&catalog, Some("parent > parent")).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].label, "Grandparent");

        let rules = select_rules(&catalog, Some("spouse,spouse")).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_select_invalid_shape() {
        let catalog = Catalog::standard().unwrap();
        assert!(matches!(
            select_rules(&catalog, Some("parent > cousin")),
            Err(CliError::InvalidInput(_))
        ));
    }
}
