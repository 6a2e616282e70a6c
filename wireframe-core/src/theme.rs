//! Theme tokens: semantic colors, canvas dimensions and the type scale.

use serde::{Deserialize, Serialize};

use crate::style::{Color, FontSpec, FontWeight};
use crate::{WireframeError, WireframeResult};

/// Notch fill, independent of the theme.
pub const NOTCH: Color = Color::rgb(0x33, 0x33, 0x33);

/// Label color on primary-filled buttons.
pub const ON_PRIMARY: Color = Color::WHITE;

/// Placeholder fill for avatars.
pub const AVATAR: Color = Color::rgb(0xE5, 0xE5, 0xEA);

/// Semantic color tokens plus canvas dimensions.
///
/// Built once and passed by reference into every builder call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// Accent for actions and highlights.
    pub primary: Color,
    /// De-emphasized text.
    pub secondary: Color,
    /// Outlines and separators.
    pub border: Color,
    /// Card and status-bar fill.
    pub surface: Color,
    /// Canvas width in pixels.
    pub canvas_width: f32,
    /// Canvas height in pixels.
    pub canvas_height: f32,
    /// Horizontal inset of content blocks.
    pub padding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            text: Color::rgb(0x00, 0x00, 0x00),
            primary: Color::rgb(0x00, 0x7A, 0xFF),
            secondary: Color::rgb(0x66, 0x66, 0x66),
            border: Color::rgb(0xC5, 0xC5, 0xC7),
            surface: Color::rgb(0xF5, 0xF5, 0xF5),
            canvas_width: 360.0,
            canvas_height: 640.0,
            padding: 20.0,
        }
    }
}

impl Theme {
    /// Check canvas dimensions and padding.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::InvalidGeometry`] if the canvas is not a
    /// positive finite size or the padding leaves no content width.
    pub fn validate(&self) -> WireframeResult<()> {
        let dims = [self.canvas_width, self.canvas_height];
        if dims.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(WireframeError::InvalidGeometry(format!(
                "canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 || self.content_width() <= 0.0 {
            return Err(WireframeError::InvalidGeometry(format!(
                "padding {} leaves no content width on a {} wide canvas",
                self.padding, self.canvas_width
            )));
        }
        Ok(())
    }

    /// Parse a theme from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Serialization`] for malformed JSON,
    /// [`WireframeError::InvalidStyle`] if a color is not a hex string, and
    /// the [`Theme::validate`] error for unusable dimensions.
    pub fn from_json(json: &str) -> WireframeResult<Self> {
        let overrides: ThemeOverrides = serde_json::from_str(json)?;
        let theme = overrides.apply(Self::default())?;
        theme.validate()?;
        Ok(theme)
    }

    /// Width available between the left and right padding.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.canvas_width - 2.0 * self.padding
    }

    /// Horizontal center of the canvas.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.canvas_width / 2.0
    }
}

/// A theme file before its colors are checked.
#[derive(Debug, Default, Deserialize)]
struct ThemeOverrides {
    background: Option<String>,
    text: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
    border: Option<String>,
    surface: Option<String>,
    canvas_width: Option<f32>,
    canvas_height: Option<f32>,
    padding: Option<f32>,
}

impl ThemeOverrides {
    fn apply(self, base: Theme) -> WireframeResult<Theme> {
        fn color(value: Option<&str>, fallback: Color) -> WireframeResult<Color> {
            value.map_or(Ok(fallback), Color::from_hex)
        }

        Ok(Theme {
            background: color(self.background.as_deref(), base.background)?,
            text: color(self.text.as_deref(), base.text)?,
            primary: color(self.primary.as_deref(), base.primary)?,
            secondary: color(self.secondary.as_deref(), base.secondary)?,
            border: color(self.border.as_deref(), base.border)?,
            surface: color(self.surface.as_deref(), base.surface)?,
            canvas_width: self.canvas_width.unwrap_or(base.canvas_width),
            canvas_height: self.canvas_height.unwrap_or(base.canvas_height),
            padding: self.padding.unwrap_or(base.padding),
        })
    }
}

/// Typographic hierarchy shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeScale {
    /// 17px / 600: nav titles, section headers, button labels.
    Title,
    /// 24px / 600: welcome heading.
    Display,
    /// 24px / bold: hero numbers.
    Figure,
    /// 16px: lead paragraph.
    Lead,
    /// 15px: labels, placeholders, rows.
    Body,
    /// 15px / 600: emphasized row titles.
    BodyStrong,
    /// 13px: captions and help text.
    Caption,
    /// 12px: dense labels.
    Micro,
}

impl TypeScale {
    /// Size and weight of this token.
    #[must_use]
    pub fn metrics(self) -> (f32, FontWeight) {
        match self {
            Self::Title => (17.0, FontWeight::SemiBold),
            Self::Display => (24.0, FontWeight::SemiBold),
            Self::Figure => (24.0, FontWeight::Bold),
            Self::Lead => (16.0, FontWeight::Normal),
            Self::Body => (15.0, FontWeight::Normal),
            Self::BodyStrong => (15.0, FontWeight::SemiBold),
            Self::Caption => (13.0, FontWeight::Normal),
            Self::Micro => (12.0, FontWeight::Normal),
        }
    }

    /// The font for this token in the default family.
    #[must_use]
    pub fn font(self) -> FontSpec {
        let (size, weight) = self.metrics();
        FontSpec::builtin(size, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let theme = Theme::default();
        assert_eq!(theme.primary.to_string(), "#007AFF");
        assert_eq!(theme.border.to_string(), "#C5C5C7");
        assert!((theme.content_width() - 320.0).abs() < f32::EPSILON);
        assert!((theme.center_x() - 180.0).abs() < f32::EPSILON);
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let theme = Theme::from_json(r##"{"primary": "#FF2D55", "padding": 16}"##)
            .expect("theme override");
        assert_eq!(theme.primary, Color::rgb(0xFF, 0x2D, 0x55));
        assert!((theme.padding - 16.0).abs() < f32::EPSILON);
        assert_eq!(theme.surface, Theme::default().surface);
    }

    #[test]
    fn test_bad_override_rejected() {
        assert!(matches!(
            Theme::from_json(r#"{"primary": "blue"}"#),
            Err(WireframeError::InvalidStyle(_))
        ));
        assert!(matches!(
            Theme::from_json(r##"{"surface": "#12"}"##),
            Err(WireframeError::InvalidStyle(_))
        ));
        assert!(matches!(
            Theme::from_json(r#"{"primary": 7}"#),
            Err(WireframeError::Serialization(_))
        ));
        assert!(matches!(
            Theme::from_json(r#"{"canvas_width": 0}"#),
            Err(WireframeError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Theme::from_json(r#"{"padding": 200}"#),
            Err(WireframeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_type_scale_hierarchy() {
        let title = TypeScale::Title.font();
        assert!((title.size() - 17.0).abs() < f32::EPSILON);
        assert_eq!(title.weight(), FontWeight::SemiBold);

        let figure = TypeScale::Figure.font();
        assert!((figure.size() - 24.0).abs() < f32::EPSILON);
        assert_eq!(figure.weight(), FontWeight::Bold);

        assert!(TypeScale::Caption.metrics().0 < TypeScale::Body.metrics().0);
    }
}
