//! Primitive emitters.
//!
//! Each emitter validates its inputs and appends exactly one element to the
//! target drawing. A rejected call appends nothing. Positions outside the
//! canvas are accepted; only malformed geometry and styles are errors.

use crate::geometry::{Corner, Point, Size};
use crate::path::PathData;
use crate::style::{FontSpec, Paint, Stroke, Style, TextAnchor};
use crate::{Drawing, Element, ElementKind, WireframeResult};

fn append(drawing: &mut Drawing, element: Element) -> WireframeResult<()> {
    element.validate()?;
    drawing.push(element);
    Ok(())
}

/// Append a rectangle.
///
/// # Errors
///
/// Returns [`WireframeError::InvalidGeometry`] for non-finite coordinates or a
/// negative size or radius, and [`WireframeError::InvalidStyle`] for a bad
/// dash pattern.
///
/// [`WireframeError::InvalidGeometry`]: crate::WireframeError::InvalidGeometry
/// [`WireframeError::InvalidStyle`]: crate::WireframeError::InvalidStyle
pub fn rect(
    drawing: &mut Drawing,
    origin: Point,
    size: Size,
    corner: Corner,
    style: Style,
) -> WireframeResult<()> {
    append(
        drawing,
        Element::new(
            ElementKind::Rect {
                origin,
                size,
                corner,
            },
            style,
        ),
    )
}

/// Append a circle.
///
/// # Errors
///
/// Returns [`WireframeError::InvalidGeometry`] for a non-finite center or a
/// negative radius.
///
/// [`WireframeError::InvalidGeometry`]: crate::WireframeError::InvalidGeometry
pub fn circle(drawing: &mut Drawing, center: Point, radius: f32, style: Style) -> WireframeResult<()> {
    append(drawing, Element::new(ElementKind::Circle { center, radius }, style))
}

/// Append a straight line.
///
/// # Errors
///
/// Returns [`WireframeError::InvalidGeometry`] for non-finite end points.
///
/// [`WireframeError::InvalidGeometry`]: crate::WireframeError::InvalidGeometry
pub fn line(drawing: &mut Drawing, from: Point, to: Point, stroke: Stroke) -> WireframeResult<()> {
    append(
        drawing,
        Element::new(ElementKind::Line { from, to }, Style::outlined(stroke)),
    )
}

/// Append a path.
///
/// # Errors
///
/// Returns [`WireframeError::InvalidStyle`] for an empty path and
/// [`WireframeError::InvalidGeometry`] for non-finite command coordinates.
///
/// [`WireframeError::InvalidGeometry`]: crate::WireframeError::InvalidGeometry
/// [`WireframeError::InvalidStyle`]: crate::WireframeError::InvalidStyle
pub fn path(drawing: &mut Drawing, data: PathData, style: Style) -> WireframeResult<()> {
    append(drawing, Element::new(ElementKind::Path { data }, style))
}

/// Append a line of text.
///
/// # Errors
///
/// Returns [`WireframeError::InvalidGeometry`] for a non-finite insertion point.
///
/// [`WireframeError::InvalidGeometry`]: crate::WireframeError::InvalidGeometry
pub fn text(
    drawing: &mut Drawing,
    content: &str,
    at: Point,
    anchor: TextAnchor,
    fill: Paint,
    font: FontSpec,
) -> WireframeResult<()> {
    append(
        drawing,
        Element::new(
            ElementKind::Text {
                content: content.to_string(),
                at,
                anchor,
                font,
            },
            Style { fill, stroke: None },
        ),
    )
}
