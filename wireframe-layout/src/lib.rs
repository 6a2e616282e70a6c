//! # Wireframe Layout
//!
//! Turns declarative screen descriptions into wireframes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              wireframe-layout               │
//! ├─────────────────────────────────────────────┤
//! │  Screens         │  Layout Cursor           │
//! │  - ScreenSpec    │  - Text / Panel          │
//! │  - LayoutStep    │  - Row (sub-cursor)      │
//! │  - 12 designs    │  - Overflow check        │
//! ├─────────────────────────────────────────────┤
//! │  Chrome          │  Registry                │
//! │  - Frame, notch  │  - id → builder          │
//! │  - Nav, action   │  - build_screen / all    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use wireframe_core::Theme;
//! use wireframe_layout::Registry;
//!
//! let wireframe = Registry::global()
//!     .build_screen("welcome", &Theme::default())
//!     .expect("designed screens fit the default canvas");
//! assert!(wireframe.texts().any(|t| t == "Start Verification"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chrome;
pub mod cursor;
pub mod registry;
pub mod screen;
pub mod screens;
pub mod step;

pub use cursor::render;
pub use registry::{Registry, ScreenBuilder};
pub use screen::{ScreenSpec, CONTENT_TOP};
pub use screens::Field;
pub use step::{Anchor, Cell, Frame, HPos, Inset, Label, LayoutStep, Panel, Row, Span, TextBlock, Tone};

/// Wireframe layout version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
