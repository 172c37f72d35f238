//! QR code rasterization with fixed parameters.

use std::path::Path;

use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::RenderError;

/// Pixels per QR module.
pub const MODULE_SIZE: u32 = 10;

/// Quiet-zone width around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

/// Render `text` as a QR symbol image.
///
/// Uses the smallest version that fits the data at error correction
/// level Low. Returns a grayscale image with black modules on a white
/// background, including the quiet zone.
pub fn render_qr(text: &str) -> Result<GrayImage, RenderError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let img_size = (module_count + 2 * QUIET_ZONE) * MODULE_SIZE;
    let origin = QUIET_ZONE * MODULE_SIZE;
    debug!(module_count, img_size, "Rasterizing QR symbol");

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dy in 0..MODULE_SIZE {
                for dx in 0..MODULE_SIZE {
                    img.put_pixel(
                        origin + x * MODULE_SIZE + dx,
                        origin + y * MODULE_SIZE + dy,
                        Luma([0u8]),
                    );
                }
            }
        }
    }

    Ok(img)
}

/// Render `text` and persist it as a PNG at `path`.
///
/// Overwrites any existing file at `path`. The parent directory must
/// already exist.
pub fn write_png(text: &str, path: &Path) -> Result<(), RenderError> {
    let img = render_qr(text)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    debug!(path = %path.display(), "QR image written");
    Ok(())
}
