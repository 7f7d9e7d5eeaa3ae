//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Resolve family relationships inside a group snapshot.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the relationship of one member to another
    Resolve(ResolveArgs),

    /// Rank every member of the group by closeness to one member
    Closeness(ClosenessArgs),

    /// List the kinship rule catalog
    Rules(RulesArgs),
}

/// Arguments shared by commands that read a group snapshot.
#[derive(Debug, Parser)]
pub struct SnapshotArgs {
    /// Group snapshot (JSON with relations, members and users)
    #[arg(short, long, env = "KINSHIP_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Use gender-neutral labels
    #[arg(long)]
    pub neutral: bool,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Reference member (id or name)
    pub ego: String,

    /// Member whose relationship to ego is wanted (id or name)
    pub alter: String,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,
}

/// Arguments for the closeness command.
#[derive(Debug, Parser)]
pub struct ClosenessArgs {
    /// Reference member (id or name)
    pub ego: String,

    /// Maximum number of members to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,
}

/// Arguments for the rules command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Only show the rule for this shape (e.g. "parent > child")
    #[arg(long)]
    pub shape: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_command() {
        let cli = Cli::parse_from([
            "kinship",
            "resolve",
            "Ada",
            "Bo",
            "--snapshot",
            "group.json",
        ]);
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.ego, "Ada");
                assert_eq!(args.alter, "Bo");
                assert_eq!(args.snapshot.snapshot, PathBuf::from("group.json"));
                assert!(!args.snapshot.neutral);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_closeness_command_with_globals() {
        let cli = Cli::parse_from([
            "kinship",
            "closeness",
            "Ada",
            "-s",
            "group.json",
            "--neutral",
            "--limit",
            "5",
            "--format",
            "json",
            "--no-color",
        ]);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Closeness(args) => {
                assert_eq!(args.limit, Some(5));
                assert!(args.snapshot.neutral);
            }
            _ => panic!("Expected Closeness command"),
        }
    }

    #[test]
    fn test_rules_command() {
        let cli = Cli::parse_from(["kinship", "rules", "--shape", "parent > child"]);
        match cli.command {
            Command::Rules(args) => assert_eq!(args.shape.as_deref(), Some("parent > child")),
            _ => panic!("Expected Rules command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
