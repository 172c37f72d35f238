//! QR symbol rendering for PNG output.
//!
//! Encoding is delegated to the `qrcode` crate, rasterization and
//! persistence to the `image` crate. Parameters are fixed for
//! print-friendly output: low error correction, 10 px modules,
//! 4-module quiet zone, black on white.

pub mod qr;

// Re-exports for convenience
pub use qr::{MODULE_SIZE, QUIET_ZONE, render_qr, write_png};

/// Unified error type for the qr-render crate.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to write image: {0}")]
    Write(#[from] image::ImageError),
}
