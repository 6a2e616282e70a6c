//! Visual elements - the building blocks of drawings.

use serde::{Deserialize, Serialize};

use crate::geometry::{ensure_finite, ensure_non_negative, Bounds, Corner, Point, Size};
use crate::path::PathData;
use crate::style::{FontSpec, Paint, Style, TextAnchor};
use crate::{WireframeError, WireframeResult};

/// The geometry an element carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ElementKind {
    /// A possibly rounded rectangle.
    Rect {
        /// Top-left corner.
        origin: Point,
        /// Width and height.
        size: Size,
        /// Corner radii.
        corner: Corner,
    },

    /// A circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f32,
    },

    /// A straight line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },

    /// An arbitrary path.
    Path {
        /// Path commands.
        data: PathData,
    },

    /// A single line of text.
    Text {
        /// Text content.
        content: String,
        /// Insertion point (baseline).
        at: Point,
        /// Horizontal alignment around `at`.
        anchor: TextAnchor,
        /// Font family, size and weight.
        font: FontSpec,
    },
}

impl ElementKind {
    /// Short name of the variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
            Self::Path { .. } => "path",
            Self::Text { .. } => "text",
        }
    }
}

/// An element with geometry and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element geometry.
    pub kind: ElementKind,
    /// Fill and stroke.
    pub style: Style,
}

impl Element {
    /// Create an element.
    #[must_use]
    pub fn new(kind: ElementKind, style: Style) -> Self {
        Self { kind, style }
    }

    /// Fill paint.
    #[must_use]
    pub fn fill(&self) -> Paint {
        self.style.fill
    }

    /// Text content, if this is a text element.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Whether the element is stroked with a dash pattern.
    #[must_use]
    pub fn is_dashed(&self) -> bool {
        self.style
            .stroke
            .as_ref()
            .is_some_and(|s| s.dash.is_some())
    }

    /// Check geometry and style.
    ///
    /// Fonts are checked when they are built or deserialized.
    pub(crate) fn validate(&self) -> WireframeResult<()> {
        match &self.kind {
            ElementKind::Rect {
                origin,
                size,
                corner,
            } => {
                ensure_finite("rect origin", &[origin.x, origin.y])?;
                ensure_non_negative("rect size", &[size.width, size.height])?;
                ensure_non_negative("rect corner radius", &[corner.rx, corner.ry])?;
            }
            ElementKind::Circle { center, radius } => {
                ensure_finite("circle center", &[center.x, center.y])?;
                ensure_non_negative("circle radius", &[*radius])?;
            }
            ElementKind::Line { from, to } => {
                ensure_finite("line", &[from.x, from.y, to.x, to.y])?;
            }
            ElementKind::Path { data } => {
                if data.is_empty() {
                    return Err(WireframeError::InvalidStyle(
                        "path must have at least one command".to_string(),
                    ));
                }
                data.validate()?;
            }
            ElementKind::Text { at, .. } => {
                ensure_finite("text position", &[at.x, at.y])?;
            }
        }
        self.style.validate()
    }

    /// The box the element's geometry spans.
    ///
    /// Text has no measured extent; its box collapses to the insertion point.
    /// Paths span their command points (curve control points included).
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match &self.kind {
            ElementKind::Rect { origin, size, .. } => Bounds {
                left: origin.x,
                top: origin.y,
                right: origin.x + size.width,
                bottom: origin.y + size.height,
            },
            ElementKind::Circle { center, radius } => Bounds {
                left: center.x - radius,
                top: center.y - radius,
                right: center.x + radius,
                bottom: center.y + radius,
            },
            ElementKind::Line { from, to } => Bounds {
                left: from.x.min(to.x),
                top: from.y.min(to.y),
                right: from.x.max(to.x),
                bottom: from.y.max(to.y),
            },
            ElementKind::Path { data } => {
                let points = data.points();
                points.iter().fold(
                    Bounds {
                        left: f32::INFINITY,
                        top: f32::INFINITY,
                        right: f32::NEG_INFINITY,
                        bottom: f32::NEG_INFINITY,
                    },
                    |b, p| Bounds {
                        left: b.left.min(p.x),
                        top: b.top.min(p.y),
                        right: b.right.max(p.x),
                        bottom: b.bottom.max(p.y),
                    },
                )
            }
            ElementKind::Text { at, .. } => Bounds {
                left: at.x,
                top: at.y,
                right: at.x,
                bottom: at.y,
            },
        }
    }
}
