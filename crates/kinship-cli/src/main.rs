//! Kinship CLI - Resolve family relationships from the command line.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::{Cli, Command, Config, Formatter};
use kinship_resolver::Resolver;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("kinship_resolver=debug,kinship_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> kinship_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let resolver = Resolver::new(config.resolver)?;

    match cli.command {
        Command::Resolve(args) => commands::execute_resolve(args, &resolver, &formatter),
        Command::Closeness(args) => commands::execute_closeness(args, &resolver, &formatter),
        Command::Rules(args) => commands::execute_rules(args, resolver.catalog(), &formatter),
    }
}
