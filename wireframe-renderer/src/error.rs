//! Renderer error types.

use thiserror::Error;
use wireframe_core::WireframeError;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while exporting wireframes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The wireframe could not be built or serialized.
    #[error("Layout failed: {0}")]
    Layout(#[from] WireframeError),

    /// Encoding to the output format failed.
    #[error("Export failed: {0}")]
    Export(String),
}
