//! SecureDrop proxy startup check.
//!
//! Loads and validates the proxy configuration. On failure the error
//! response is written to stdout as JSON and the process exits with
//! status 1; request forwarding is handled elsewhere.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use securedrop_proxy::lifecycle::read_conf;
use securedrop_proxy::observability::logging::init_logging;
use securedrop_proxy::Response;

#[derive(Parser)]
#[command(name = "securedrop-proxy")]
#[command(about = "Validate the SecureDrop proxy configuration", long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    config: PathBuf,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match read_conf(&cli.config, print_response) {
        Some(config) => {
            tracing::debug!(target_url = %config.base_url(), "Configuration valid");
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

fn print_response(res: Response) {
    match res.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            println!("{}", res.body);
        }
    }
}
