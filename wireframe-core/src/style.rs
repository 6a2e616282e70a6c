//! Style value objects: colors, paints, strokes and fonts.
//!
//! Every style is validated when it is built, so a drawing never carries a
//! malformed color or an unusable font into the serialized markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{WireframeError, WireframeResult};

/// Font family used across every screen.
pub const DEFAULT_FONT_FAMILY: &str = "SF Pro Text";

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Build a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB`.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::InvalidStyle`] if the string is not a hex color.
    pub fn from_hex(hex: &str) -> WireframeResult<Self> {
        fn channel(s: &str) -> Result<u8, std::num::ParseIntError> {
            u8::from_str_radix(s, 16)
        }

        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| WireframeError::InvalidStyle(format!("not a hex color: {hex:?}")))?;

        let parsed = match digits.len() {
            6 => (channel(&digits[0..2]), channel(&digits[2..4]), channel(&digits[4..6])),
            3 => (
                channel(&digits[0..1].repeat(2)),
                channel(&digits[1..2].repeat(2)),
                channel(&digits[2..3].repeat(2)),
            ),
            _ => {
                return Err(WireframeError::InvalidStyle(format!(
                    "hex color must have 3 or 6 digits: {hex:?}"
                )))
            }
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
            _ => Err(WireframeError::InvalidStyle(format!(
                "not a hex color: {hex:?}"
            ))),
        }
    }

    /// Red, green and blue channels.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = WireframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = WireframeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Fill paint for a shape or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    /// No fill.
    None,
    /// Solid color fill.
    Color(Color),
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Color(color) => color.fmt(f),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

/// Outline of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Optional dash pattern (dash, gap, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f32>>,
}

impl Stroke {
    /// A solid 1px stroke.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            dash: None,
        }
    }

    /// Set the stroke width.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set a dash pattern.
    #[must_use]
    pub fn dashed(mut self, pattern: Vec<f32>) -> Self {
        self.dash = Some(pattern);
        self
    }

    /// Check width and dash pattern.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::InvalidGeometry`] for a negative or non-finite
    /// width and [`WireframeError::InvalidStyle`] for an unusable dash pattern.
    pub fn validate(&self) -> WireframeResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(WireframeError::InvalidGeometry(format!(
                "stroke width must be finite and non-negative, got {}",
                self.width
            )));
        }
        if let Some(pattern) = &self.dash {
            if pattern.is_empty() || pattern.iter().all(|v| *v == 0.0) {
                return Err(WireframeError::InvalidStyle(
                    "dash pattern needs at least one non-zero entry".to_string(),
                ));
            }
            if pattern.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(WireframeError::InvalidStyle(format!(
                    "dash pattern entries must be finite and non-negative: {pattern:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Fill plus optional stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Interior paint.
    pub fill: Paint,
    /// Outline, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Solid fill, no outline.
    #[must_use]
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Paint::Color(color),
            stroke: None,
        }
    }

    /// Outline only, no fill.
    #[must_use]
    pub fn outlined(stroke: Stroke) -> Self {
        Self {
            fill: Paint::None,
            stroke: Some(stroke),
        }
    }

    /// Add an outline to this style.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub(crate) fn validate(&self) -> WireframeResult<()> {
        self.stroke.as_ref().map_or(Ok(()), Stroke::validate)
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Numeric weight 600.
    SemiBold,
    /// Bold keyword.
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::SemiBold => "600",
            Self::Bold => "bold",
        })
    }
}

#[derive(Deserialize)]
struct RawFontSpec {
    family: String,
    size: f32,
    weight: FontWeight,
}

/// Structured font description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFontSpec")]
pub struct FontSpec {
    family: String,
    size: f32,
    weight: FontWeight,
}

impl FontSpec {
    /// Build a validated font spec.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::InvalidStyle`] if the family is blank or the
    /// size is not a positive finite number.
    pub fn new(family: impl Into<String>, size: f32, weight: FontWeight) -> WireframeResult<Self> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(WireframeError::InvalidStyle(
                "font family must not be empty".to_string(),
            ));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(WireframeError::InvalidStyle(format!(
                "font size must be positive, got {size}"
            )));
        }
        Ok(Self {
            family,
            size,
            weight,
        })
    }

    pub(crate) fn builtin(size: f32, weight: FontWeight) -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size,
            weight,
        }
    }

    /// Font family name.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in pixels.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Font weight.
    #[must_use]
    pub fn weight(&self) -> FontWeight {
        self.weight
    }
}

impl TryFrom<RawFontSpec> for FontSpec {
    type Error = WireframeError;

    fn try_from(raw: RawFontSpec) -> Result<Self, Self::Error> {
        Self::new(raw.family, raw.size, raw.weight)
    }
}

/// Horizontal alignment of text relative to its insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Text starts at the insertion point.
    #[default]
    Start,
    /// Text is centered on the insertion point.
    Middle,
    /// Text ends at the insertion point.
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        let blue = Color::from_hex("#007AFF").expect("valid hex");
        assert_eq!(blue.channels(), (0x00, 0x7A, 0xFF));

        let grey = Color::from_hex("#333").expect("valid short hex");
        assert_eq!(grey, Color::rgb(0x33, 0x33, 0x33));
        assert_eq!(grey.to_string(), "#333333");
    }

    #[test]
    fn test_reject_malformed_colors() {
        for bad in ["007AFF", "#12345", "#GGGGGG", "", "#", "blue"] {
            assert!(
                matches!(Color::from_hex(bad), Err(WireframeError::InvalidStyle(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(0xC5, 0xC5, 0xC7)).expect("serialize");
        assert_eq!(json, "\"#C5C5C7\"");

        let parsed: Color = serde_json::from_str("\"#f5f5f5\"").expect("deserialize");
        assert_eq!(parsed, Color::rgb(0xF5, 0xF5, 0xF5));

        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }

    #[test]
    fn test_font_spec_validation() {
        assert!(FontSpec::new(DEFAULT_FONT_FAMILY, 17.0, FontWeight::SemiBold).is_ok());
        assert!(FontSpec::new("", 17.0, FontWeight::Normal).is_err());
        assert!(FontSpec::new("  ", 17.0, FontWeight::Normal).is_err());
        assert!(FontSpec::new(DEFAULT_FONT_FAMILY, 0.0, FontWeight::Normal).is_err());
        assert!(FontSpec::new(DEFAULT_FONT_FAMILY, f32::NAN, FontWeight::Normal).is_err());
    }

    #[test]
    fn test_font_spec_deserialize_validates() {
        let ok = r#"{"family":"SF Pro Text","size":15.0,"weight":"normal"}"#;
        let spec: FontSpec = serde_json::from_str(ok).expect("valid font");
        assert!((spec.size() - 15.0).abs() < f32::EPSILON);

        let bad = r#"{"family":"SF Pro Text","size":-1.0,"weight":"bold"}"#;
        assert!(serde_json::from_str::<FontSpec>(bad).is_err());
    }

    #[test]
    fn test_stroke_validation() {
        assert!(Stroke::new(Color::BLACK).validate().is_ok());
        assert!(Stroke::new(Color::BLACK)
            .dashed(vec![5.0, 5.0])
            .validate()
            .is_ok());
        assert!(matches!(
            Stroke::new(Color::BLACK).with_width(-1.0).validate(),
            Err(WireframeError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Stroke::new(Color::BLACK).dashed(vec![0.0, 0.0]).validate(),
            Err(WireframeError::InvalidStyle(_))
        ));
        assert!(matches!(
            Stroke::new(Color::BLACK).dashed(vec![5.0, -2.0]).validate(),
            Err(WireframeError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_weight_and_anchor_markup_names() {
        assert_eq!(FontWeight::SemiBold.to_string(), "600");
        assert_eq!(FontWeight::Bold.to_string(), "bold");
        assert_eq!(TextAnchor::Middle.to_string(), "middle");
        assert_eq!(Paint::None.to_string(), "none");
    }
}
