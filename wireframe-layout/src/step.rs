//! Declarative layout steps.
//!
//! A screen is an ordered list of steps consumed by the layout cursor. Steps
//! carry only data (labels, counts, offsets, tones); all placement arithmetic
//! lives in [`crate::cursor`].
//!
//! ## Step Types
//!
//! | Step    | Emits                                          | Cursor            |
//! |---------|------------------------------------------------|-------------------|
//! | `Text`  | one text line                                  | `advance`         |
//! | `Panel` | optional label, one framed container, insets   | `advance`         |
//! | `Row`   | a grid of framed cells with insets             | `advance`, once   |
//! | `Gap`   | nothing                                        | the gap           |
//!
//! ## Example Step JSON
//!
//! ```json
//! {
//!   "step": "panel",
//!   "label": { "text": "League ID", "scale": "body" },
//!   "offset": 10.0,
//!   "height": 80.0,
//!   "frame": "dashed",
//!   "insets": [
//!     { "inset": "text", "text": "Tap to Upload", "at": { "x": "center", "dy": 40.0 },
//!       "scale": "body", "tone": "primary" }
//!   ],
//!   "advance": 110.0
//! }
//! ```

use serde::{Deserialize, Serialize};
use wireframe_core::theme::{AVATAR, ON_PRIMARY};
use wireframe_core::{Color, Theme, TypeScale};

/// A color named by role, resolved against the theme at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Theme background.
    Background,
    /// Theme text color.
    Text,
    /// Theme accent.
    Primary,
    /// Theme de-emphasized text.
    Secondary,
    /// Theme outline color.
    Border,
    /// Theme card fill.
    Surface,
    /// Label color on primary fills.
    OnPrimary,
    /// Avatar placeholder fill.
    Avatar,
}

impl Tone {
    /// Look up the concrete color.
    #[must_use]
    pub fn resolve(self, theme: &Theme) -> Color {
        match self {
            Self::Background => theme.background,
            Self::Text => theme.text,
            Self::Primary => theme.primary,
            Self::Secondary => theme.secondary,
            Self::Border => theme.border,
            Self::Surface => theme.surface,
            Self::OnPrimary => ON_PRIMARY,
            Self::Avatar => AVATAR,
        }
    }
}

/// Horizontal position inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HPos {
    /// Offset from the left edge.
    Left(f32),
    /// The horizontal center.
    Center,
    /// Offset from the right edge, measured leftwards.
    Right(f32),
}

/// A position relative to a box's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Horizontal position.
    pub x: HPos,
    /// Offset below the box's top edge.
    pub dy: f32,
}

impl Anchor {
    /// `dx` from the left edge, `dy` below the top.
    #[must_use]
    pub const fn left(dx: f32, dy: f32) -> Self {
        Self {
            x: HPos::Left(dx),
            dy,
        }
    }

    /// Horizontally centered, `dy` below the top.
    #[must_use]
    pub const fn center(dy: f32) -> Self {
        Self { x: HPos::Center, dy }
    }

    /// `dx` from the right edge, `dy` below the top.
    #[must_use]
    pub const fn right(dx: f32, dy: f32) -> Self {
        Self {
            x: HPos::Right(dx),
            dy,
        }
    }
}

/// How a container is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    /// Nothing is drawn; the box only positions its insets.
    Bare,
    /// Border-colored outline, no fill.
    Outline,
    /// Dashed border-colored outline for drop zones.
    Dashed,
    /// Surface fill, no outline.
    Surface,
    /// Surface fill with a border outline (selected tabs and chips).
    Highlight,
}

/// A primitive placed relative to its container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "inset", rename_all = "snake_case")]
pub enum Inset {
    /// A line of text; centered anchors center the text, right anchors end it.
    Text {
        /// Content.
        text: String,
        /// Insertion point.
        at: Anchor,
        /// Type scale token.
        scale: TypeScale,
        /// Fill tone.
        tone: Tone,
    },

    /// A circle.
    Circle {
        /// Center.
        at: Anchor,
        /// Radius in pixels.
        radius: f32,
        /// Fill tone; unfilled when absent.
        #[serde(default)]
        fill: Option<Tone>,
        /// Outline tone; no outline when absent.
        #[serde(default)]
        stroke: Option<Tone>,
        /// Outline width.
        #[serde(default = "default_stroke_width")]
        stroke_width: f32,
    },

    /// Dropdown chevron: a 12px-wide caret opening downward.
    Chevron {
        /// Left end of the caret.
        at: Anchor,
    },

    /// Decorative trend curve in the primary color.
    Curve {
        /// Start point.
        from: Anchor,
        /// First control point.
        c1: Anchor,
        /// Second control point.
        c2: Anchor,
        /// End point.
        to: Anchor,
    },

    /// Horizontal border-colored rule.
    Rule {
        /// Left end.
        from: HPos,
        /// Right end.
        to: HPos,
        /// Offset below the container top.
        dy: f32,
    },

    /// Small outlined square (toggle buttons).
    Square {
        /// Top-left corner.
        at: Anchor,
        /// Edge length.
        size: f32,
    },
}

fn default_stroke_width() -> f32 {
    1.0
}

impl Inset {
    /// Text inset shorthand.
    #[must_use]
    pub fn text(text: impl Into<String>, at: Anchor, scale: TypeScale, tone: Tone) -> Self {
        Self::Text {
            text: text.into(),
            at,
            scale,
            tone,
        }
    }

    /// Filled circle shorthand.
    #[must_use]
    pub fn dot(at: Anchor, radius: f32, fill: Tone) -> Self {
        Self::Circle {
            at,
            radius,
            fill: Some(fill),
            stroke: None,
            stroke_width: 1.0,
        }
    }

    /// Outlined circle shorthand.
    #[must_use]
    pub fn ring(at: Anchor, radius: f32, stroke: Tone, stroke_width: f32) -> Self {
        Self::Circle {
            at,
            radius,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }
}

/// Left-aligned label drawn at the cursor above a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Content.
    pub text: String,
    /// Type scale token.
    pub scale: TypeScale,
}

/// A line of text placed across the content box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Content.
    pub text: String,
    /// Type scale token.
    pub scale: TypeScale,
    /// Fill tone.
    pub tone: Tone,
    /// Horizontal position within the padded content box.
    pub x: HPos,
    /// Baseline offset below the cursor.
    #[serde(default)]
    pub dy: f32,
    /// Cursor advance.
    pub advance: f32,
}

/// A labelled container spanning the content width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Optional label drawn at the cursor.
    #[serde(default)]
    pub label: Option<Label>,
    /// Container top relative to the cursor.
    pub offset: f32,
    /// Container height.
    pub height: f32,
    /// Container frame.
    pub frame: Frame,
    /// Corner radius.
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Children, positioned relative to the container.
    #[serde(default)]
    pub insets: Vec<Inset>,
    /// Cursor advance.
    pub advance: f32,
}

fn default_radius() -> f32 {
    8.0
}

/// Horizontal extent of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    /// The padded content width.
    Padded,
    /// The full canvas width.
    FullBleed,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell frame.
    pub frame: Frame,
    /// Children, positioned relative to the cell.
    #[serde(default)]
    pub insets: Vec<Inset>,
}

/// A grid of cells laid out with a horizontal sub-cursor.
///
/// Cells fill row-major; the column slot is the span width divided by the
/// column count and each cell is one slot minus the gutter wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Horizontal extent.
    pub span: Span,
    /// Columns per row.
    pub columns: usize,
    /// Top of the first row relative to the cursor.
    #[serde(default)]
    pub offset: f32,
    /// Height of every cell.
    pub cell_height: f32,
    /// Vertical distance between row tops.
    pub row_pitch: f32,
    /// Horizontal space trailing each cell.
    #[serde(default)]
    pub gutter: f32,
    /// Corner radius of cells.
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Cells in row-major order.
    pub cells: Vec<Cell>,
    /// Cursor advance, applied after the whole grid.
    pub advance: f32,
}

impl Row {
    /// Number of grid rows the cells occupy.
    #[must_use]
    pub fn row_count(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.cells.len().div_ceil(self.columns)
        }
    }
}

/// One step of a screen layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum LayoutStep {
    /// A line of text.
    Text(TextBlock),
    /// A labelled container.
    Panel(Panel),
    /// A grid of cells.
    Row(Row),
    /// Advance the cursor without drawing.
    Gap {
        /// Distance to advance.
        by: f32,
    },
}

impl LayoutStep {
    /// Short name of the step kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Panel(_) => "panel",
            Self::Row(_) => "row",
            Self::Gap { .. } => "gap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_resolution() {
        let theme = Theme::default();
        assert_eq!(Tone::Primary.resolve(&theme), theme.primary);
        assert_eq!(Tone::Surface.resolve(&theme), theme.surface);
        assert_eq!(Tone::OnPrimary.resolve(&theme), Color::WHITE);
        assert_eq!(Tone::Avatar.resolve(&theme).to_string(), "#E5E5EA");
    }

    #[test]
    fn test_row_count() {
        let cell = Cell {
            frame: Frame::Surface,
            insets: Vec::new(),
        };
        let mut row = Row {
            span: Span::Padded,
            columns: 2,
            offset: 0.0,
            cell_height: 100.0,
            row_pitch: 120.0,
            gutter: 20.0,
            radius: 8.0,
            cells: vec![cell.clone(); 4],
            advance: 240.0,
        };
        assert_eq!(row.row_count(), 2);
        row.cells.push(cell);
        assert_eq!(row.row_count(), 3);
        row.columns = 0;
        assert_eq!(row.row_count(), 0);
    }

    #[test]
    fn test_parse_panel_step_json() {
        let json = r#"{
            "step": "panel",
            "label": { "text": "League ID", "scale": "body" },
            "offset": 10.0,
            "height": 80.0,
            "frame": "dashed",
            "insets": [
                { "inset": "text", "text": "Tap to Upload", "at": { "x": "center", "dy": 40.0 },
                  "scale": "body", "tone": "primary" }
            ],
            "advance": 110.0
        }"#;

        let step: LayoutStep = serde_json::from_str(json).expect("should parse");
        match step {
            LayoutStep::Panel(panel) => {
                assert_eq!(panel.frame, Frame::Dashed);
                assert!((panel.radius - 8.0).abs() < f32::EPSILON);
                assert_eq!(panel.insets.len(), 1);
                assert_eq!(panel.label.map(|l| l.text), Some("League ID".to_string()));
            }
            other => panic!("Expected panel, got {}", other.name()),
        }
    }

    #[test]
    fn test_parse_gap_and_missing_tag() {
        let gap: LayoutStep = serde_json::from_str(r#"{ "step": "gap", "by": 30.0 }"#).expect("gap");
        assert_eq!(gap, LayoutStep::Gap { by: 30.0 });

        let missing = serde_json::from_str::<LayoutStep>(r#"{ "by": 30.0 }"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_circle_defaults() {
        let json = r#"{ "inset": "circle", "at": { "x": { "left": 30.0 }, "dy": 30.0 }, "radius": 20.0, "fill": "avatar" }"#;
        let inset: Inset = serde_json::from_str(json).expect("circle");
        assert_eq!(inset, Inset::dot(Anchor::left(30.0, 30.0), 20.0, Tone::Avatar));
    }
}
