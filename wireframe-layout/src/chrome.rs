//! Chrome shared by every screen: device frame, status bar, notch, nav bar
//! and the bottom call-to-action button.

use wireframe_core::theme::{NOTCH, ON_PRIMARY};
use wireframe_core::{
    emit, Corner, Drawing, Paint, PathData, Point, Size, Stroke, Style, TextAnchor, Theme,
    TypeScale, WireframeResult,
};

/// Height of the status bar strip.
pub const STATUS_BAR_HEIGHT: f32 = 44.0;

/// Height of the navigation bar below the status bar.
pub const NAV_BAR_HEIGHT: f32 = 44.0;

/// Baseline of the navigation title.
pub const NAV_TITLE_BASELINE: f32 = 74.0;

/// Corner radius of the device frame.
const FRAME_RADIUS: f32 = 40.0;

const NOTCH_SIZE: Size = Size::new(120.0, 30.0);

/// Distance from the canvas bottom to the action button's top edge.
pub const ACTION_TOP_INSET: f32 = 80.0;

const ACTION_HEIGHT: f32 = 50.0;

/// Distance from the canvas bottom to the action label baseline.
const ACTION_BASELINE_INSET: f32 = 45.0;

/// Start a screen: device frame, status bar, notch, in that order.
///
/// # Errors
///
/// Returns an error if the theme's canvas is unusable.
pub fn base_screen(theme: &Theme) -> WireframeResult<Drawing> {
    let mut drawing = Drawing::new(theme.canvas_width, theme.canvas_height)?;

    emit::rect(
        &mut drawing,
        Point::new(0.0, 0.0),
        Size::new(theme.canvas_width, theme.canvas_height),
        Corner::round(FRAME_RADIUS),
        Style::filled(theme.background).with_stroke(Stroke::new(theme.border).with_width(2.0)),
    )?;

    emit::rect(
        &mut drawing,
        Point::new(0.0, 0.0),
        Size::new(theme.canvas_width, STATUS_BAR_HEIGHT),
        Corner::SQUARE,
        Style::filled(theme.surface),
    )?;

    emit::rect(
        &mut drawing,
        Point::new(theme.center_x() - NOTCH_SIZE.width / 2.0, 0.0),
        NOTCH_SIZE,
        Corner::round(NOTCH_SIZE.height / 2.0),
        Style::filled(NOTCH),
    )?;

    Ok(drawing)
}

/// The back affordance: a left-pointing triangle at a fixed position.
#[must_use]
pub fn back_affordance() -> PathData {
    PathData::starting_at(20.0, 66.0)
        .line_to(35.0, 58.0)
        .line_to(35.0, 74.0)
        .close()
}

/// Add the navigation bar directly beneath the status bar.
///
/// # Errors
///
/// Returns an error if an emitter rejects the bar geometry.
pub fn add_nav_bar(
    drawing: &mut Drawing,
    theme: &Theme,
    title: &str,
    show_back: bool,
) -> WireframeResult<()> {
    emit::rect(
        drawing,
        Point::new(0.0, STATUS_BAR_HEIGHT),
        Size::new(theme.canvas_width, NAV_BAR_HEIGHT),
        Corner::SQUARE,
        Style::filled(theme.background),
    )?;

    if show_back {
        emit::path(drawing, back_affordance(), Style::filled(theme.primary))?;
    }

    emit::text(
        drawing,
        title,
        Point::new(theme.center_x(), NAV_TITLE_BASELINE),
        TextAnchor::Middle,
        Paint::Color(theme.text),
        TypeScale::Title.font(),
    )
}

/// Top edge of the bottom action button.
#[must_use]
pub fn action_top(theme: &Theme) -> f32 {
    theme.canvas_height - ACTION_TOP_INSET
}

/// Add the pill-shaped call-to-action anchored to the bottom of the canvas.
///
/// Its position is independent of the layout cursor.
///
/// # Errors
///
/// Returns an error if an emitter rejects the button geometry.
pub fn add_action_button(drawing: &mut Drawing, theme: &Theme, label: &str) -> WireframeResult<()> {
    emit::rect(
        drawing,
        Point::new(theme.padding, action_top(theme)),
        Size::new(theme.content_width(), ACTION_HEIGHT),
        Corner::round(ACTION_HEIGHT / 2.0),
        Style::filled(theme.primary),
    )?;

    emit::text(
        drawing,
        label,
        Point::new(theme.center_x(), theme.canvas_height - ACTION_BASELINE_INSET),
        TextAnchor::Middle,
        Paint::Color(ON_PRIMARY),
        TypeScale::Title.font(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireframe_core::{ElementKind, WireframeError};

    #[test]
    fn test_base_screen_chrome_order() {
        let theme = Theme::default();
        let drawing = base_screen(&theme).expect("base screen");
        let elements = drawing.elements();
        assert_eq!(elements.len(), 3);

        match &elements[0].kind {
            ElementKind::Rect { size, corner, .. } => {
                assert_eq!(*size, Size::new(360.0, 640.0));
                assert_eq!(*corner, Corner::round(40.0));
            }
            other => panic!("Expected frame rect, got {}", other.name()),
        }
        match &elements[1].kind {
            ElementKind::Rect { size, .. } => assert_eq!(*size, Size::new(360.0, 44.0)),
            other => panic!("Expected status bar rect, got {}", other.name()),
        }
        assert_eq!(elements[1].fill(), Paint::Color(theme.surface));
        match &elements[2].kind {
            ElementKind::Rect {
                origin,
                size,
                corner,
            } => {
                assert_eq!(*origin, Point::new(120.0, 0.0));
                assert_eq!(*size, Size::new(120.0, 30.0));
                assert_eq!(*corner, Corner::round(15.0));
            }
            other => panic!("Expected notch rect, got {}", other.name()),
        }
        assert_eq!(elements[2].fill(), Paint::Color(NOTCH));
    }

    #[test]
    fn test_nav_bar_without_back() {
        let theme = Theme::default();
        let mut drawing = base_screen(&theme).expect("base screen");
        add_nav_bar(&mut drawing, &theme, "Welcome", false).expect("nav bar");

        let nav = &drawing.elements()[3..];
        assert_eq!(nav.len(), 2);
        assert!(nav.iter().all(|e| e.kind.name() != "path"));
        match &nav[1].kind {
            ElementKind::Text {
                content,
                at,
                anchor,
                font,
            } => {
                assert_eq!(content, "Welcome");
                assert_eq!(*at, Point::new(180.0, 74.0));
                assert_eq!(*anchor, TextAnchor::Middle);
                assert!((font.size() - 17.0).abs() < f32::EPSILON);
            }
            other => panic!("Expected title text, got {}", other.name()),
        }
    }

    #[test]
    fn test_nav_bar_with_back() {
        let theme = Theme::default();
        let mut drawing = base_screen(&theme).expect("base screen");
        add_nav_bar(&mut drawing, &theme, "Studio", true).expect("nav bar");

        let nav = &drawing.elements()[3..];
        assert_eq!(nav.len(), 3);
        match &nav[1].kind {
            ElementKind::Path { data } => {
                assert_eq!(
                    data.points(),
                    vec![
                        Point::new(20.0, 66.0),
                        Point::new(35.0, 58.0),
                        Point::new(35.0, 74.0)
                    ]
                );
            }
            other => panic!("Expected back path, got {}", other.name()),
        }
        assert_eq!(nav[1].fill(), Paint::Color(theme.primary));
    }

    #[test]
    fn test_action_button_anchored_to_bottom() {
        let theme = Theme::default();
        let mut drawing = base_screen(&theme).expect("base screen");
        add_action_button(&mut drawing, &theme, "Continue").expect("button");

        let button = &drawing.elements()[3];
        let bounds = button.bounds();
        assert!((bounds.left - 20.0).abs() < f32::EPSILON);
        assert!((bounds.top - 560.0).abs() < f32::EPSILON);
        assert!((bounds.right - 340.0).abs() < f32::EPSILON);
        assert!((bounds.bottom - 610.0).abs() < f32::EPSILON);

        let label = &drawing.elements()[4];
        assert_eq!(label.text(), Some("Continue"));
        assert_eq!(label.fill(), Paint::Color(ON_PRIMARY));
    }

    #[test]
    fn test_bad_canvas_fails_fast() {
        let theme = Theme {
            canvas_height: f32::NAN,
            ..Theme::default()
        };
        assert!(matches!(
            base_screen(&theme),
            Err(WireframeError::InvalidGeometry(_))
        ));
    }
}
