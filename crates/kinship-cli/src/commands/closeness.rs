//! Closeness command implementation.

use crate::cli::ClosenessArgs;
use crate::commands::Group;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::snapshot::lookup_user;
use kinship_resolver::Resolver;

/// Execute the closeness command.
pub fn execute_closeness(
    args: ClosenessArgs,
    resolver: &Resolver,
    formatter: &Formatter,
) -> Result<()> {
    if args.limit == Some(0) {
        return Err(CliError::InvalidInput(
            "Limit must be at least 1".to_string(),
        ));
    }

    let group = Group::load(&args.snapshot, resolver)?;
    let ego = lookup_user(&group.snapshot, &args.ego)?;

    let mut ranking = resolver.closeness(
        &group.graph,
        ego,
        &group.snapshot.members,
        &group.genders,
        group.apply_gender,
    );
    if let Some(limit) = args.limit {
        ranking.truncate(limit);
    }

    println!(
        "{}",
        formatter.format_closeness(&group.snapshot, ego, &ranking)?
    );

    Ok(())
}
