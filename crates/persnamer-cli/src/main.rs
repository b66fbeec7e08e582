use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "persnamer", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// VIAF number of the person to look up (e.g. 314802260)
    ///
    /// The record is fetched as RDF/XML, the name and life dates are
    /// extracted, and two TEI fragments are printed to stdout: a `<person>`
    /// entry for the authority file and a `<persName ref="#...">` tag for
    /// annotating running text. Progress and diagnostics go to stderr.
    viaf_id: Option<String>,

    #[command(flatten)]
    lookup: commands::LookupArgs,

    /// Log debug detail to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Log warnings and errors only
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show current effective configuration
    Show,
    /// Show config file path
    Path,
    /// Show example configuration
    Example,
    /// Initialize config file with defaults
    Init,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Config { action }) => {
            match action {
                ConfigAction::Show => commands::config::show_config()?,
                ConfigAction::Path => commands::config::show_path(),
                ConfigAction::Example => commands::config::show_example(),
                ConfigAction::Init => commands::config::init_config()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let Some(viaf_id) = cli.viaf_id else {
                log::error!("No VIAF number given; run `persnamer --help` for usage");
                return Ok(ExitCode::from(2));
            };
            commands::run_lookup(&viaf_id, &cli.lookup).await
        }
    }
}
