//! # Wireframe Core
//!
//! Drawing model for the athlete app wireframes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               wireframe-core                │
//! ├─────────────────────────────────────────────┤
//! │  Theme           │  Primitive Emitters      │
//! │  - Color tokens  │  - rect / circle / line  │
//! │  - Canvas size   │  - path / text           │
//! │  - Type scale    │  - Validation            │
//! ├─────────────────────────────────────────────┤
//! │  Drawing (append-only) ──finish──▶ Wireframe │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod drawing;
pub mod element;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod path;
pub mod style;
pub mod theme;

pub use drawing::{Drawing, Wireframe};
pub use element::{Element, ElementKind};
pub use error::{WireframeError, WireframeResult};
pub use geometry::{Bounds, Corner, Point, Size};
pub use path::{PathCommand, PathData};
pub use style::{Color, FontSpec, FontWeight, Paint, Stroke, Style, TextAnchor};
pub use theme::{Theme, TypeScale};

/// Wireframe core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
