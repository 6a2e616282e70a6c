//! # Wireframe Renderer
//!
//! Serializes finished wireframes for people and tools.
//!
//! ## Output Formats
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             WireframeExporter               │
//! ├─────────────┬─────────────┬─────────────────┤
//! │ SVG         │ JSON        │ PNG             │
//! │ (markup)    │ (serde)     │ (resvg, opt-in) │
//! └─────────────┴─────────────┴─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use wireframe_core::Theme;
//! use wireframe_layout::Registry;
//! use wireframe_renderer::{ExportFormat, WireframeExporter};
//!
//! let svg = WireframeExporter::with_defaults()
//!     .export_screen(Registry::global(), "daw", &Theme::default(), ExportFormat::Svg)
//!     .expect("designed screens export");
//! assert!(svg.starts_with(b"<svg"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;

pub use error::{RenderError, RenderResult};
pub use export::{ExportConfig, ExportFormat, WireframeExporter};

/// Wireframe renderer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
