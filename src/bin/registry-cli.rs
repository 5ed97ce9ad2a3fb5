use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use config_registry::adapter::{dispatch, Envelope};
use config_registry::config::{load_config, RejectionPolicy, ServiceConfig};
use config_registry::lifecycle::bootstrap;
use config_registry::observability::logging;

#[derive(Parser)]
#[command(name = "registry-cli")]
#[command(
    about = "Invoke configuration registry functions and print JSON results",
    long_about = None
)]
struct Cli {
    /// Service configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Customer records directory (overrides the config file).
    #[arg(short, long)]
    records: Option<PathBuf>,

    /// Print a {"status": ...} envelope instead of the bare result.
    #[arg(long)]
    envelope: bool,

    /// Log level for diagnostics on stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Function to invoke, e.g. getCustomerConfig
    function: String,

    /// Positional string arguments for the function
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logging(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => return fail(&cli, format!("Error: {}", e)),
        },
        None => ServiceConfig::default(),
    };
    if let Some(records) = &cli.records {
        config.records.directory = records.clone();
    }
    // A single bad record must not hide the others from one-off queries.
    config.records.on_invalid = RejectionPolicy::Skip;

    let registry = match bootstrap(&config.records) {
        Ok(registry) => registry,
        Err(e) => return fail(&cli, format!("Error: {}", e)),
    };

    let outcome = dispatch(&registry, &cli.function, &cli.args);
    if cli.envelope {
        match serde_json::to_string(&Envelope::from_outcome(&outcome)) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    match outcome {
        Ok(value) => {
            if !cli.envelope {
                println!("{}", value);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn fail(cli: &Cli, message: String) -> ExitCode {
    if cli.envelope {
        let envelope = Envelope::Error {
            message: message.clone(),
        };
        if let Ok(json) = serde_json::to_string(&envelope) {
            println!("{}", json);
        }
    }
    eprintln!("{}", message);
    ExitCode::FAILURE
}
