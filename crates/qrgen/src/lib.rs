//! Environment-driven QR code generator.
//!
//! Resolves `TEXT`, `FILENAME` and `OUTPUT_DIR` from the environment
//! (prompting interactively for anything unset), renders the text as a
//! QR symbol and writes it as a PNG under the output directory.

pub mod config;
pub mod error;
pub mod generate;

pub use config::Settings;
pub use error::GenerateError;
pub use generate::generate;
