//! PID Lattice Exporter
//!
//! Builds the redundancy lattice and prints it as JSON on stdout. Logs go to
//! stderr.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `PID_INPUTS`: number of source variables (default: 3)
//! - `PID_MAX_INPUTS`: ceiling on `PID_INPUTS` (default: 4, never above 4)
//! - `PID_STRATEGY`: `brute_force` or `constructive` (default: brute_force)
//! - `PID_TIE_BREAK`: `reject` or `enumeration_order` (default: reject)
//! - `PID_VALUES_PATH`: optional JSON object of label to bits to align
//! - `RUST_LOG`: Log level filter (default: pid_lattice=info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! PID_INPUTS=3 PID_VALUES_PATH=imin_rule110.json cargo run --bin pid_lattice
//! ```

use std::env::VarError;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pid_lattice::{
    AlignedValue, LabeledLattice, LatticeConfig, LatticeError, LatticeExport, PidValues,
};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pid_lattice=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init();
    }
}

/// Output document: the lattice plus any aligned values.
#[derive(Serialize)]
struct Output {
    lattice: LatticeExport,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<AlignedValue>>,
}

/// Resolve the optional values path. A set but non-UTF-8 value is an error.
fn values_path(var: Result<String, VarError>) -> Result<Option<String>, LatticeError> {
    match var {
        Ok(path) => Ok(Some(path)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err @ VarError::NotUnicode(_)) => {
            Err(LatticeError::invalid(format!("PID_VALUES_PATH: {}", err)))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = LatticeConfig::from_env()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        inputs = config.inputs,
        strategy = %config.strategy,
        tie_break = %config.tie_break,
        params_hash = %config.params_hash()?,
        "Building redundancy lattice"
    );

    let labeled = LabeledLattice::compute(&config)?;
    let lattice = labeled.export()?;

    let values = match values_path(std::env::var("PID_VALUES_PATH"))? {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let values = PidValues::from_json(&raw)?;
            let aligned = labeled.align_values(&values)?;
            info!(
                path = %path,
                values = aligned.len(),
                total_bits = values.total(),
                "Aligned decomposition values"
            );
            Some(aligned)
        }
        None => {
            info!("PID_VALUES_PATH not set, exporting lattice only");
            None
        }
    };

    info!(
        atoms = lattice.nodes.len(),
        edges = lattice.edges.len(),
        lattice_hash = %lattice.lattice_hash,
        "Export ready"
    );

    let output = Output { lattice, values };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
