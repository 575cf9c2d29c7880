mod commands;
mod output;

use clap::{Parser, Subcommand};
use erg_core::error::ErgError;
use erg_core::ErgDatabase;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "erg",
    version,
    about = "Hazmat emergency response lookup (Emergency Response Guidebook 2024)"
)]
struct Cli {
    /// Custom ERG dataset (JSON) to use instead of the built-in tables
    #[arg(long, global = true, env = "ERG_DATASET", value_name = "FILE")]
    data: Option<PathBuf>,

    /// Output format: table (default) or json
    #[arg(short, long, global = true, default_value = "table")]
    output: String,

    /// Log resolution steps (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full guide information for an exact UN/NA number
    Lookup {
        /// UN number, e.g. 1203 or UN1203
        un_number: String,
    },
    /// Resolve a shipped product name (aliases, then names) to its guide
    Product {
        /// Product name, e.g. "sour crude"
        name: String,
    },
    /// Search materials by UN number fragment or name
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = erg_core::DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Hazard class prefix, e.g. "2" or "2.3"
        #[arg(short, long = "class", value_name = "CLASS")]
        class: Option<String>,

        /// Only toxic-inhalation-hazard materials
        #[arg(long)]
        tih_only: bool,
    },
    /// List all guides
    Guides,
    /// Show one guide
    Guide {
        /// Guide number, e.g. 128
        number: u16,

        /// List the materials that reference this guide instead of the guide text
        #[arg(short, long)]
        materials: bool,

        #[arg(long, default_value_t = 0)]
        offset: usize,

        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Initial isolation and protective action distances for a TIH material
    Distance {
        un_number: String,

        /// Spill size: small or large (anything else is read as large)
        #[arg(short, long, default_value = "large")]
        spill: String,

        /// Time of day: day or night (anything else is read as night)
        #[arg(short, long, default_value = "night")]
        time: String,
    },
    /// Emergency quick card; unknown UN numbers get the unidentified-cargo orders
    Quick {
        un_number: String,

        #[arg(short, long, default_value = "large")]
        spill: String,

        #[arg(short, long, default_value = "day")]
        time: String,
    },
    /// List the whole TIH distance table
    Tih,
    /// Emergency response phone numbers
    Contacts {
        /// Country filter, e.g. USA or mex
        #[arg(short, long)]
        country: Option<String>,
    },
    /// List hazard classes and divisions
    Classes,
    /// Dataset version and table sizes
    Stats,
    /// Validate a custom dataset file
    Validate {
        /// Path to dataset JSON
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ErgError> {
    if let Commands::Validate { file } = &cli.command {
        return commands::reference::validate(file);
    }

    let custom;
    let db: &ErgDatabase = match &cli.data {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading custom ERG dataset");
            custom = ErgDatabase::from_path(path)?;
            &custom
        }
        None => erg_core::data::builtin::reference(),
    };
    let json = cli.output == "json";

    match cli.command {
        Commands::Lookup { un_number } => commands::lookup::lookup(db, &un_number, json),
        Commands::Product { name } => commands::lookup::product(db, &name, json),
        Commands::Search {
            query,
            limit,
            class,
            tih_only,
        } => commands::search::run(db, &query, limit, class, tih_only, json),
        Commands::Guides => commands::guide::list(db, json),
        Commands::Guide {
            number,
            materials,
            offset,
            limit,
        } => {
            if materials {
                commands::guide::materials(db, number, offset, limit, json)
            } else {
                commands::guide::show(db, number, json)
            }
        }
        Commands::Distance {
            un_number,
            spill,
            time,
        } => commands::distance::distance(db, &un_number, &spill, &time, json),
        Commands::Quick {
            un_number,
            spill,
            time,
        } => commands::lookup::quick(db, &un_number, &spill, &time, json),
        Commands::Tih => commands::distance::table(db, json),
        Commands::Contacts { country } => commands::reference::contacts(db, country.as_deref(), json),
        Commands::Classes => commands::reference::classes(db, json),
        Commands::Stats => commands::reference::stats(db, json),
        Commands::Validate { file } => commands::reference::validate(&file),
    }
}
