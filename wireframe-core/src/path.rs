//! Path command builder.
//!
//! Produces canonical SVG path data (`M 20 66 L 35 58 L 35 74 Z`) from typed
//! commands instead of ad-hoc format strings.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::geometry::{ensure_finite, Point};
use crate::WireframeResult;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    /// Absolute move.
    MoveTo(Point),
    /// Absolute straight segment.
    LineTo(Point),
    /// Relative straight segment.
    LineBy {
        /// Horizontal delta.
        dx: f32,
        /// Vertical delta.
        dy: f32,
    },
    /// Absolute cubic Bezier segment.
    CubicTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    fn coordinates(&self) -> Vec<f32> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => vec![p.x, p.y],
            Self::LineBy { dx, dy } => vec![dx, dy],
            Self::CubicTo { c1, c2, to } => vec![c1.x, c1.y, c2.x, c2.y, to.x, to.y],
            Self::Close => Vec::new(),
        }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Start a path at `(x, y)`.
    #[must_use]
    pub fn starting_at(x: f32, y: f32) -> Self {
        Self::default().move_to(x, y)
    }

    /// Begin a new subpath at `(x, y)`.
    #[must_use]
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Absolute line to `(x, y)`.
    #[must_use]
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Relative line by `(dx, dy)`.
    #[must_use]
    pub fn line_by(mut self, dx: f32, dy: f32) -> Self {
        self.commands.push(PathCommand::LineBy { dx, dy });
        self
    }

    /// Absolute cubic curve through two control points.
    #[must_use]
    pub fn cubic_to(mut self, c1: Point, c2: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
        self
    }

    /// Close the subpath.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// The commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point the path passes through or steers toward, in absolute
    /// coordinates.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        let mut pen = Point::default();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    pen = p;
                    points.push(p);
                }
                PathCommand::LineBy { dx, dy } => {
                    pen = pen.offset(dx, dy);
                    points.push(pen);
                }
                PathCommand::CubicTo { c1, c2, to } => {
                    points.extend([c1, c2, to]);
                    pen = to;
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    pub(crate) fn validate(&self) -> WireframeResult<()> {
        for command in &self.commands {
            ensure_finite("path command", &command.coordinates())?;
        }
        Ok(())
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(out, "M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(out, "L {} {}", p.x, p.y),
                PathCommand::LineBy { dx, dy } => write!(out, "l {dx} {dy}"),
                PathCommand::CubicTo { c1, c2, to } => write!(
                    out,
                    "C {} {}, {} {}, {} {}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_triangle_data() {
        let triangle = PathData::starting_at(20.0, 66.0)
            .line_to(35.0, 58.0)
            .line_to(35.0, 74.0)
            .close();
        assert_eq!(triangle.to_string(), "M 20 66 L 35 58 L 35 74 Z");
    }

    #[test]
    fn test_relative_segments_and_points() {
        let chevron = PathData::starting_at(315.0, 138.0)
            .line_by(6.0, -6.0)
            .line_by(6.0, 6.0);
        assert_eq!(chevron.to_string(), "M 315 138 l 6 -6 l 6 6");
        assert_eq!(
            chevron.points(),
            vec![
                Point::new(315.0, 138.0),
                Point::new(321.0, 132.0),
                Point::new(327.0, 138.0)
            ]
        );
    }

    #[test]
    fn test_cubic_formatting() {
        let curve = PathData::starting_at(50.0, 328.0).cubic_to(
            Point::new(150.0, 308.0),
            Point::new(200.0, 338.0),
            Point::new(300.0, 318.0),
        );
        assert_eq!(curve.to_string(), "M 50 328 C 150 308, 200 338, 300 318");
    }

    #[test]
    fn test_move_to_starts_subpath() {
        let bars = PathData::starting_at(0.0, 0.0)
            .line_by(0.0, 10.0)
            .move_to(5.0, 0.0)
            .line_by(0.0, 10.0);
        assert_eq!(bars.to_string(), "M 0 0 l 0 10 M 5 0 l 0 10");
        assert_eq!(bars.points()[3], Point::new(5.0, 10.0));
    }

    #[test]
    fn test_non_finite_command_rejected() {
        let bad = PathData::starting_at(0.0, 0.0).line_to(f32::NAN, 1.0);
        assert!(bad.validate().is_err());
    }
}
