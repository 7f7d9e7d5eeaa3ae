//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::commands::Group;
use crate::error::Result;
use crate::output::Formatter;
use crate::snapshot::lookup_user;
use kinship_resolver::Resolver;

/// Execute the resolve command.
pub fn execute_resolve(
    args: ResolveArgs,
    resolver: &Resolver,
    formatter: &Formatter,
) -> Result<()> {
    let group = Group::load(&args.snapshot, resolver)?;
    let ego = lookup_user(&group.snapshot, &args.ego)?;
    let alter = lookup_user(&group.snapshot, &args.alter)?;

    let result = resolver.resolve_in(&group.graph, ego, alter, &group.genders, group.apply_gender);

    println!(
        "{}",
        formatter.format_resolution(&group.snapshot, ego, alter, &result)?
    );

    Ok(())
}
