//! Wireframe export to SVG, JSON and PNG.
//!
//! SVG is written directly from the element list in paint order. PNG
//! rasterizes that SVG with the resvg/tiny-skia pipeline and is only
//! available with the `export` feature.

use std::fmt::{self, Write};

use wireframe_core::{Element, ElementKind, Paint, Style, Theme, Wireframe};
use wireframe_layout::Registry;

use crate::error::{RenderError, RenderResult};

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// SVG markup (UTF-8 bytes).
    Svg,
    /// The serialized wireframe (UTF-8 JSON bytes).
    Json,
    /// PNG image; requires the `export` feature.
    Png,
}

impl ExportFormat {
    /// File extension without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Png => "png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Configuration for wireframe export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Scale factor applied to the output size (e.g. 2.0 for retina).
    pub scale: f32,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pretty_json: true,
        }
    }
}

/// Exports a [`Wireframe`] to the supported formats.
pub struct WireframeExporter {
    config: ExportConfig,
}

impl WireframeExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export a wireframe to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the wireframe cannot be encoded.
    pub fn export(&self, wireframe: &Wireframe, format: ExportFormat) -> RenderResult<Vec<u8>> {
        let bytes = match format {
            ExportFormat::Svg => self.render_to_svg(wireframe)?.into_bytes(),
            ExportFormat::Json => self.render_to_json(wireframe)?.into_bytes(),
            ExportFormat::Png => self.render_to_png(wireframe)?,
        };
        tracing::debug!(
            %format,
            elements = wireframe.element_count(),
            bytes = bytes.len(),
            "wireframe exported"
        );
        Ok(bytes)
    }

    /// Build a registered screen and export it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Layout`] if the screen is unknown or does not
    /// fit the theme, or an export error from [`Self::export`].
    pub fn export_screen(
        &self,
        registry: &Registry,
        id: &str,
        theme: &Theme,
        format: ExportFormat,
    ) -> RenderResult<Vec<u8>> {
        let wireframe = registry.build_screen(id, theme)?;
        self.export(&wireframe, format)
    }

    /// Serialize the wireframe to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_to_json(&self, wireframe: &Wireframe) -> RenderResult<String> {
        if self.config.pretty_json {
            serde_json::to_string_pretty(wireframe)
                .map_err(|e| RenderError::Export(format!("JSON encoding failed: {e}")))
        } else {
            Ok(wireframe.to_json()?)
        }
    }

    /// Export the wireframe to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale factor is not a positive finite number.
    pub fn render_to_svg(&self, wireframe: &Wireframe) -> RenderResult<String> {
        let (out_w, out_h) = self.output_dimensions(wireframe)?;
        let (view_w, view_h) = (wireframe.width(), wireframe.height());

        let mut svg = String::with_capacity(4096);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_w}\" height=\"{out_h}\" viewBox=\"0 0 {view_w} {view_h}\">",
        );

        for element in wireframe.elements() {
            render_element_svg(&mut svg, element);
        }

        svg.push_str("</svg>");
        Ok(svg)
    }

    /// Export the wireframe to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    #[cfg(feature = "export")]
    pub fn render_to_png(&self, wireframe: &Wireframe) -> RenderResult<Vec<u8>> {
        let svg_string = self.render_to_svg(wireframe)?;
        let pixmap = Self::rasterize_svg(&svg_string)?;

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Export the wireframe to PNG bytes.
    ///
    /// # Errors
    ///
    /// Always fails: this build has no rasterizer.
    #[cfg(not(feature = "export"))]
    #[allow(clippy::unused_self)]
    pub fn render_to_png(&self, _wireframe: &Wireframe) -> RenderResult<Vec<u8>> {
        Err(RenderError::Export(
            "PNG export requires the `export` feature".to_string(),
        ))
    }

    /// Output size in pixels after scaling.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn output_dimensions(&self, wireframe: &Wireframe) -> RenderResult<(u32, u32)> {
        let scale = self.config.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RenderError::Export(format!(
                "Scale must be a positive number, got {scale}"
            )));
        }

        let out_w = (wireframe.width() * scale).round() as u32;
        let out_h = (wireframe.height() * scale).round() as u32;
        Ok((out_w.max(1), out_h.max(1)))
    }

    /// Rasterize an SVG string to a tiny-skia Pixmap.
    #[cfg(feature = "export")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize_svg(svg_string: &str) -> RenderResult<tiny_skia::Pixmap> {
        let mut opt = usvg::Options::default();
        let fontdb = opt.fontdb_mut();
        fontdb.load_system_fonts();
        // Text falls back to the generic families when the design font is missing.
        if let Some(family) = fallback_family(fontdb) {
            tracing::debug!(%family, faces = fontdb.len(), "text fallback font");
            fontdb.set_serif_family(family.clone());
            fontdb.set_sans_serif_family(family);
        }

        let tree = usvg::Tree::from_str(svg_string, &opt)
            .map_err(|e| RenderError::Export(format!("SVG parsing failed: {e}")))?;

        let px_w = tree.size().width().ceil() as u32;
        let px_h = tree.size().height().ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
            .ok_or_else(|| RenderError::Export("Failed to create pixmap".to_string()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

/// First installed sans family, or any family if no sans face is installed.
#[cfg(feature = "export")]
fn fallback_family(fontdb: &usvg::fontdb::Database) -> Option<String> {
    let families: Vec<&str> = fontdb
        .faces()
        .filter_map(|face| face.families.first().map(|(name, _)| name.as_str()))
        .collect();
    families
        .iter()
        .find(|name| name.contains("Sans"))
        .or_else(|| families.first())
        .map(|name| (*name).to_string())
}

/// Render a single element to SVG.
fn render_element_svg(svg: &mut String, element: &Element) {
    match &element.kind {
        ElementKind::Rect {
            origin,
            size,
            corner,
        } => {
            let _ = write!(
                svg,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                origin.x, origin.y, size.width, size.height,
            );
            if !corner.is_square() {
                let _ = write!(svg, " rx=\"{}\" ry=\"{}\"", corner.rx, corner.ry);
            }
        }

        ElementKind::Circle { center, radius } => {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\"",
                center.x, center.y,
            );
        }

        ElementKind::Line { from, to } => {
            let _ = write!(
                svg,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                from.x, from.y, to.x, to.y,
            );
        }

        ElementKind::Path { data } => {
            let _ = write!(svg, "<path d=\"{data}\"");
        }

        ElementKind::Text {
            content,
            at,
            anchor,
            font,
        } => {
            let _ = write!(
                svg,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\"",
                at.x,
                at.y,
                escape_xml(font.family()),
                font.size(),
                font.weight(),
            );
            write_paint(svg, &element.style);
            let _ = write!(svg, ">{}</text>", escape_xml(content));
            return;
        }
    }

    write_paint(svg, &element.style);
    svg.push_str("/>");
}

/// Fill and stroke attributes.
fn write_paint(svg: &mut String, style: &Style) {
    match style.fill {
        Paint::None => svg.push_str(" fill=\"none\""),
        Paint::Color(color) => {
            let _ = write!(svg, " fill=\"{color}\"");
        }
    }

    if let Some(stroke) = &style.stroke {
        let _ = write!(
            svg,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color, stroke.width
        );
        if let Some(dash) = &stroke.dash {
            let pattern: Vec<String> = dash.iter().map(ToString::to_string).collect();
            let _ = write!(svg, " stroke-dasharray=\"{}\"", pattern.join(","));
        }
    }
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireframe_core::{
        emit, Color, Corner, Drawing, Point, Size, Stroke, TextAnchor, TypeScale,
    };

    fn sample() -> Wireframe {
        let mut drawing = Drawing::new(360.0, 640.0).expect("drawing");
        emit::rect(
            &mut drawing,
            Point::new(20.0, 118.0),
            Size::new(320.0, 80.0),
            Corner::round(8.0),
            Style::outlined(Stroke::new(Color::rgb(0xC5, 0xC5, 0xC7)).dashed(vec![5.0, 5.0])),
        )
        .expect("rect");
        emit::text(
            &mut drawing,
            "Fish & Chips <3",
            Point::new(180.0, 158.0),
            TextAnchor::Middle,
            Paint::Color(Color::rgb(0x00, 0x7A, 0xFF)),
            TypeScale::Body.font(),
        )
        .expect("text");
        drawing.finish()
    }

    #[test]
    fn test_svg_header_carries_canvas_size() {
        let svg = WireframeExporter::with_defaults()
            .render_to_svg(&sample())
            .expect("svg");
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"360\" height=\"640\" viewBox=\"0 0 360 640\">"
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_svg_rect_attributes() {
        let svg = WireframeExporter::with_defaults()
            .render_to_svg(&sample())
            .expect("svg");
        assert!(svg.contains(
            "<rect x=\"20\" y=\"118\" width=\"320\" height=\"80\" rx=\"8\" ry=\"8\" fill=\"none\" stroke=\"#C5C5C7\" stroke-width=\"1\" stroke-dasharray=\"5,5\"/>"
        ));
    }

    #[test]
    fn test_svg_text_attributes_and_escaping() {
        let svg = WireframeExporter::with_defaults()
            .render_to_svg(&sample())
            .expect("svg");
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("font-family=\"SF Pro Text\" font-size=\"15\" font-weight=\"normal\""));
        assert!(svg.contains("fill=\"#007AFF\">Fish &amp; Chips &lt;3</text>"));
    }

    #[test]
    fn test_square_corners_omit_radius() {
        let mut drawing = Drawing::new(100.0, 100.0).expect("drawing");
        emit::rect(
            &mut drawing,
            Point::new(0.0, 0.0),
            Size::new(100.0, 44.0),
            Corner::SQUARE,
            Style::filled(Color::WHITE),
        )
        .expect("rect");
        let svg = WireframeExporter::with_defaults()
            .render_to_svg(&drawing.finish())
            .expect("svg");
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"100\" height=\"44\" fill=\"#FFFFFF\"/>"));
    }

    #[test]
    fn test_scale_factor() {
        let exporter = WireframeExporter::new(ExportConfig {
            scale: 2.0,
            ..ExportConfig::default()
        });
        let svg = exporter.render_to_svg(&sample()).expect("svg");
        assert!(svg.contains("width=\"720\" height=\"1280\" viewBox=\"0 0 360 640\""));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let exporter = WireframeExporter::new(ExportConfig {
            scale: 0.0,
            ..ExportConfig::default()
        });
        assert!(matches!(
            exporter.render_to_svg(&sample()),
            Err(RenderError::Export(_))
        ));
    }

    #[test]
    fn test_json_export_roundtrip() {
        let wireframe = sample();
        let bytes = WireframeExporter::with_defaults()
            .export(&wireframe, ExportFormat::Json)
            .expect("json");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = Wireframe::from_json(&text).expect("parse");
        assert_eq!(parsed, wireframe);
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Svg.extension(), "svg");
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_xml_escaping() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[cfg(not(feature = "export"))]
    #[test]
    fn test_png_needs_export_feature() {
        let result = WireframeExporter::with_defaults().export(&sample(), ExportFormat::Png);
        assert!(matches!(result, Err(RenderError::Export(_))));
    }

    #[cfg(feature = "export")]
    #[test]
    fn test_png_export_produces_valid_bytes() {
        let png = WireframeExporter::with_defaults()
            .export(&sample(), ExportFormat::Png)
            .expect("png");
        assert_eq!(&png[0..4], &[137, 80, 78, 71]);
    }

    #[cfg(feature = "export")]
    #[test]
    fn test_png_draws_text_glyphs() {
        let mut drawing = Drawing::new(200.0, 60.0).expect("drawing");
        emit::text(
            &mut drawing,
            "Continue",
            Point::new(100.0, 38.0),
            TextAnchor::Middle,
            Paint::Color(Color::rgb(0x00, 0x00, 0x00)),
            TypeScale::Title.font(),
        )
        .expect("text");
        let png = WireframeExporter::with_defaults()
            .export(&drawing.finish(), ExportFormat::Png)
            .expect("png");

        let pixmap = tiny_skia::Pixmap::decode_png(&png).expect("decode");
        let inked = pixmap.pixels().iter().filter(|p| p.alpha() > 0).count();
        assert!(inked > 0, "text rendered no pixels");
    }
}
