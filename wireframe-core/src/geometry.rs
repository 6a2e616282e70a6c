//! Points, sizes and the checks emitters run on them.

use serde::{Deserialize, Serialize};

use crate::{WireframeError, WireframeResult};

/// A point in canvas coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Corner radii of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Corner {
    /// Horizontal radius.
    pub rx: f32,
    /// Vertical radius.
    pub ry: f32,
}

impl Corner {
    /// Square corners.
    pub const SQUARE: Self = Self { rx: 0.0, ry: 0.0 };

    /// Equal horizontal and vertical radius.
    #[must_use]
    pub const fn round(radius: f32) -> Self {
        Self {
            rx: radius,
            ry: radius,
        }
    }

    /// Whether both radii are zero.
    #[must_use]
    pub fn is_square(self) -> bool {
        self.rx == 0.0 && self.ry == 0.0
    }
}

/// Axis-aligned box covered by an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Bounds {
    /// Whether the vertical ranges of two boxes intersect.
    #[must_use]
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    /// Whether this box lies inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right <= width && self.bottom <= height
    }
}

pub(crate) fn ensure_finite(what: &str, values: &[f32]) -> WireframeResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(WireframeError::InvalidGeometry(format!(
            "{what} has a non-finite coordinate: {values:?}"
        )))
    }
}

pub(crate) fn ensure_non_negative(what: &str, values: &[f32]) -> WireframeResult<()> {
    ensure_finite(what, values)?;
    if values.iter().all(|v| *v >= 0.0) {
        Ok(())
    } else {
        Err(WireframeError::InvalidGeometry(format!(
            "{what} must not be negative: {values:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_overlap() {
        let a = Bounds {
            left: 20.0,
            top: 158.0,
            right: 340.0,
            bottom: 238.0,
        };
        let b = Bounds {
            top: 238.0,
            bottom: 300.0,
            ..a
        };
        let c = Bounds {
            top: 200.0,
            bottom: 260.0,
            ..a
        };
        assert!(!a.overlaps_vertically(&b), "touching edges do not overlap");
        assert!(a.overlaps_vertically(&c));
        assert!(c.overlaps_vertically(&a));
    }

    #[test]
    fn test_geometry_checks() {
        assert!(ensure_finite("point", &[1.0, -4.0]).is_ok());
        assert!(ensure_finite("point", &[f32::INFINITY, 0.0]).is_err());
        assert!(ensure_non_negative("size", &[0.0, 10.0]).is_ok());
        assert!(matches!(
            ensure_non_negative("size", &[-1.0, 10.0]),
            Err(WireframeError::InvalidGeometry(_))
        ));
    }
}
