//! massedit - apply a mass-change form submission to a JSON record file.

use clap::{Parser, Subcommand};
use massedit_cli::{commands, loader, CliError, CliResult, Config};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "massedit", version, about, long_about = None)]
struct Cli {
    /// Model declarations (TOML).
    #[arg(short, long, default_value = "massedit.toml", env = "MASSEDIT_CONFIG")]
    config: PathBuf,

    /// Record file (JSON); overrides `data` from the config.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a submitted form to the selected records
    Apply {
        /// Model to edit
        #[arg(short, long)]
        model: String,
        /// Comma-joined record ids, e.g. 1,2,3
        #[arg(short, long)]
        select: String,
        /// Submitted form fields (JSON object)
        #[arg(short = 'f', long)]
        submission: PathBuf,
        /// Write the edited records back to the record file
        #[arg(long)]
        save: bool,
    },
    /// Print the mass-change controls of a model
    Form {
        #[arg(short, long)]
        model: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load(&cli.config)?;
    let registry = config.registry()?;

    match cli.command {
        Command::Form { model } => {
            let form = commands::form(&registry, &model)?;
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
        Command::Apply {
            model,
            select,
            submission,
            save,
        } => {
            let data = cli
                .data
                .or(config.data)
                .ok_or_else(|| CliError::invalid_data("no record file: pass --data or set `data`"))?;
            let mut store = loader::load_records(&registry, &commands::read_json(&data)?)?;
            let fields = commands::submission_fields(&commands::read_json(&submission)?)?;

            let report = commands::apply(&registry, &mut store, &model, &select, &fields)?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if save {
                commands::save(&registry, &store, &data)?;
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "massedit failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
