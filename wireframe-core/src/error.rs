//! Error types for wireframe construction.

use thiserror::Error;

/// Result type for wireframe operations.
pub type WireframeResult<T> = Result<T, WireframeError>;

/// Errors that can occur while building a wireframe.
#[derive(Debug, Error)]
pub enum WireframeError {
    /// Requested screen identifier is not registered.
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    /// Malformed color, font or stroke style.
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// Negative dimension or non-finite coordinate.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Screen content runs past the space reserved for it.
    #[error("Layout overflow on screen {screen}: content reaches y={bottom}, limit is y={limit}")]
    LayoutOverflow {
        /// Screen identifier.
        screen: String,
        /// Lowest container edge produced by the layout.
        bottom: f32,
        /// Lowest edge the screen allows.
        limit: f32,
    },

    /// Wireframe or theme serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
