//! User-visible failure kinds for a generator run.

use qr_render::RenderError;

/// Unified error type for the qrgen pipeline.
///
/// Every failure is terminal for the invocation; the binary maps any
/// variant to exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// `TEXT` was absent from the environment and the prompt went
    /// unanswered.
    #[error("TEXT is required")]
    MissingText,

    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}
