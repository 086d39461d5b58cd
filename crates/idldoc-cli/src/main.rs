//! idldoc CLI - generate HTML documentation for message, service and action interfaces

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod generate;
mod list;
mod show;
mod sources;

#[derive(Parser)]
#[command(name = "idldoc")]
#[command(version = idldoc_core::VERSION)]
#[command(about = "Generate interface public API documentation", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where interfaces are looked up
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Configuration file (defaults to ./idldoc.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Install prefix to search (repeatable; defaults to AMENT_PREFIX_PATH)
    #[arg(long = "prefix", value_name = "DIR")]
    prefixes: Vec<PathBuf>,

    /// Source tree to scan for packages (repeatable)
    #[arg(long = "source-root", value_name = "DIR")]
    source_roots: Vec<PathBuf>,

    /// Only document the given packages
    #[arg(long = "packages-select", value_name = "PKG", num_args = 0..)]
    packages: Vec<String>,

    /// Show the referenced type's name instead of the field name for
    /// message-typed fields
    #[arg(long)]
    legacy_field_names: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the HTML documentation tree
    Generate {
        /// Output directory; pages are written to <DIR>/html
        #[arg(long, value_name = "DIR")]
        outputdir: Option<PathBuf>,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// List the interfaces that would be documented
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Print the compact definition of one interface
    Show {
        /// Interface name, e.g. std_msgs/msg/Header
        interface: String,

        /// Print as JSON
        #[arg(long, conflicts_with = "flat")]
        json: bool,

        /// Print the flat key/value view as JSON
        #[arg(long)]
        flat: bool,

        #[command(flatten)]
        sources: SourceArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { outputdir, sources } => {
            let settings = sources::Settings::resolve(&sources, outputdir)?;
            generate::run(&settings)?;
        }
        Commands::List { json, sources } => {
            let settings = sources::Settings::resolve(&sources, None)?;
            list::run(&settings, json)?;
        }
        Commands::Show {
            interface,
            json,
            flat,
            sources,
        } => {
            let settings = sources::Settings::resolve(&sources, None)?;
            let format = if json {
                show::Format::Json
            } else if flat {
                show::Format::Flat
            } else {
                show::Format::Text
            };
            show::run(&settings, &interface, format)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
