//! The generation pipeline: resolve the output path, render, persist.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Settings;
use crate::error::GenerateError;

/// How many characters of the text the progress preview shows.
const PREVIEW_LIMIT: usize = 50;

/// Run one generation: ensure the output directory exists, then render
/// the text and write the PNG. Returns the path of the written file.
pub fn generate(settings: &Settings) -> Result<PathBuf, GenerateError> {
    let output_path = prepare_output_path(&settings.output_dir, &settings.filename)?;
    qr_render::write_png(&settings.text, &output_path)?;
    info!(path = %output_path.display(), "QR code written");
    Ok(output_path)
}

/// Join directory and filename, creating the directory tree if needed.
/// Idempotent: an existing directory is not an error.
fn prepare_output_path(dir: &Path, filename: &str) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(filename))
}

/// Truncated preview of the text for the progress line.
pub fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_LIMIT {
        text.to_string()
    } else {
        let head: String = text.chars().take(PREVIEW_LIMIT).collect();
        format!("{head}...")
    }
}
