//! qrgen binary: process wiring around the generation pipeline.
//!
//! Owns logging init, `.env` loading, user-facing messages and the
//! process exit status. Exit 0 on success, 1 on any handled failure.

use tracing_subscriber::EnvFilter;

use qrgen::GenerateError;
use qrgen::config::{DEFAULT_FILENAME, DEFAULT_OUTPUT_DIR, Settings};
use qrgen::generate::{generate, preview};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    load_dotenv();

    if let Err(err) = run() {
        report_failure(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GenerateError> {
    let settings = Settings::resolve()?;

    println!("Generating QR code for: {}", preview(&settings.text));
    let path = generate(&settings)?;

    println!("QR code generated: {}", settings.filename);
    println!("Location: {}", path.display());
    Ok(())
}

fn report_failure(err: &GenerateError) {
    match err {
        GenerateError::MissingText => print_usage(),
        other => eprintln!("ERROR: {other}"),
    }
}

/// Usage banner shown when TEXT cannot be resolved.
fn print_usage() {
    println!("ERROR: TEXT is required.");
    println!();
    println!("Usage:");
    println!("  TEXT=\"Your text here\" qrgen");
    println!();
    println!("Optional:");
    println!("  FILENAME=\"custom.png\"     (default: {DEFAULT_FILENAME})");
    println!("  OUTPUT_DIR=\"/some/dir\"    (default: {DEFAULT_OUTPUT_DIR})");
}

/// Seed the environment from the nearest `.env` file, if any.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::debug!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
