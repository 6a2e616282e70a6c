//! The layout cursor: one interpreter for every screen.
//!
//! Steps are placed top to bottom against a private vertical cursor. Rows
//! run a secondary horizontal cursor across their columns and advance the
//! vertical cursor once, after the whole grid.

use wireframe_core::{
    emit, Corner, Drawing, Paint, PathData, Point, Size, Stroke, Style, TextAnchor, Theme,
    TypeScale, Wireframe, WireframeError, WireframeResult,
};

use crate::chrome;
use crate::screen::ScreenSpec;
use crate::step::{Anchor, Cell, Frame, HPos, Inset, LayoutStep, Panel, Row, Span, TextBlock, Tone};

/// Dash pattern of drop-zone outlines.
const DROP_ZONE_DASH: [f32; 2] = [5.0, 5.0];

/// Render a screen description into a finished wireframe.
///
/// Emits the chrome, runs every step through the layout cursor, checks the
/// content against the screen's bottom limit and finally adds the call to
/// action.
///
/// # Errors
///
/// Returns [`WireframeError::LayoutOverflow`] if content reaches below the
/// screen's limit, and style or geometry errors from the emitters. No
/// partially built wireframe is ever returned.
pub fn render(screen: &ScreenSpec, theme: &Theme) -> WireframeResult<Wireframe> {
    theme.validate()?;

    let mut drawing = chrome::base_screen(theme)?;
    chrome::add_nav_bar(&mut drawing, theme, &screen.title, screen.show_back)?;

    let mut cursor = LayoutCursor::new(theme, screen.start_y);
    for step in &screen.steps {
        cursor.place(&mut drawing, step)?;
    }

    let limit = screen.content_limit(theme);
    if cursor.bottom > limit {
        tracing::warn!(
            screen = %screen.id,
            bottom = cursor.bottom,
            limit,
            "content overflows the screen"
        );
        return Err(WireframeError::LayoutOverflow {
            screen: screen.id.clone(),
            bottom: cursor.bottom,
            limit,
        });
    }

    if let Some(label) = &screen.action {
        chrome::add_action_button(&mut drawing, theme, label)?;
    }

    tracing::debug!(
        screen = %screen.id,
        elements = drawing.len(),
        cursor = cursor.y,
        "screen laid out"
    );
    Ok(drawing.finish())
}

/// Cursor state for one screen.
struct LayoutCursor<'a> {
    theme: &'a Theme,
    /// Current vertical offset.
    y: f32,
    /// Lowest content edge placed so far.
    bottom: f32,
}

impl<'a> LayoutCursor<'a> {
    fn new(theme: &'a Theme, start_y: f32) -> Self {
        Self {
            theme,
            y: start_y,
            bottom: start_y,
        }
    }

    fn place(&mut self, drawing: &mut Drawing, step: &LayoutStep) -> WireframeResult<()> {
        tracing::trace!(step = step.name(), y = self.y, "place");
        match step {
            LayoutStep::Text(block) => self.place_text(drawing, block),
            LayoutStep::Panel(panel) => self.place_panel(drawing, panel),
            LayoutStep::Row(row) => self.place_row(drawing, row),
            LayoutStep::Gap { by } => self.advance(*by),
        }
    }

    fn advance(&mut self, by: f32) -> WireframeResult<()> {
        if !by.is_finite() || by < 0.0 {
            return Err(WireframeError::InvalidGeometry(format!(
                "cursor only moves down, got advance {by}"
            )));
        }
        self.y += by;
        Ok(())
    }

    fn reach(&mut self, edge: f32) {
        self.bottom = self.bottom.max(edge);
    }

    /// Reach the lowest edge of everything emitted after `mark`.
    fn reach_emitted(&mut self, drawing: &Drawing, mark: usize) {
        for element in &drawing.elements()[mark..] {
            self.reach(element.bounds().bottom);
        }
    }

    fn place_text(&mut self, drawing: &mut Drawing, block: &TextBlock) -> WireframeResult<()> {
        let theme = self.theme;
        let (x, anchor) = resolve_x(block.x, theme.padding, theme.content_width());
        let baseline = self.y + block.dy;

        emit::text(
            drawing,
            &block.text,
            Point::new(x, baseline),
            anchor,
            Paint::Color(block.tone.resolve(theme)),
            block.scale.font(),
        )?;
        self.reach(baseline);
        self.advance(block.advance)
    }

    fn place_panel(&mut self, drawing: &mut Drawing, panel: &Panel) -> WireframeResult<()> {
        let theme = self.theme;
        let mark = drawing.len();

        if let Some(label) = &panel.label {
            emit::text(
                drawing,
                &label.text,
                Point::new(theme.padding, self.y),
                TextAnchor::Start,
                Paint::Color(theme.text),
                label.scale.font(),
            )?;
        }

        let origin = Point::new(theme.padding, self.y + panel.offset);
        let size = Size::new(theme.content_width(), panel.height);
        draw_frame(drawing, theme, origin, size, panel.frame, panel.radius)?;
        for inset in &panel.insets {
            draw_inset(drawing, theme, origin, size, inset)?;
        }

        self.reach(origin.y + size.height);
        self.reach_emitted(drawing, mark);
        self.advance(panel.advance)
    }

    #[allow(clippy::cast_precision_loss)]
    fn place_row(&mut self, drawing: &mut Drawing, row: &Row) -> WireframeResult<()> {
        let theme = self.theme;
        if row.columns == 0 {
            return Err(WireframeError::InvalidGeometry(
                "row needs at least one column".to_string(),
            ));
        }

        let (left, width) = match row.span {
            Span::Padded => (theme.padding, theme.content_width()),
            Span::FullBleed => (0.0, theme.canvas_width),
        };
        let slot = width / row.columns as f32;
        let size = Size::new(slot - row.gutter, row.cell_height);
        let top = self.y + row.offset;
        let mark = drawing.len();

        for (index, Cell { frame, insets }) in row.cells.iter().enumerate() {
            let column = (index % row.columns) as f32;
            let line = (index / row.columns) as f32;
            let origin = Point::new(left + column * slot, top + line * row.row_pitch);

            draw_frame(drawing, theme, origin, size, *frame, row.radius)?;
            for inset in insets {
                draw_inset(drawing, theme, origin, size, inset)?;
            }
        }

        if let Some(last_line) = row.row_count().checked_sub(1) {
            self.reach(top + last_line as f32 * row.row_pitch + size.height);
        }
        self.reach_emitted(drawing, mark);
        self.advance(row.advance)
    }
}

/// Resolve a horizontal position inside `[left, left + width]` and the text
/// anchor that keeps text aligned with it.
fn resolve_x(pos: HPos, left: f32, width: f32) -> (f32, TextAnchor) {
    match pos {
        HPos::Left(dx) => (left + dx, TextAnchor::Start),
        HPos::Center => (left + width / 2.0, TextAnchor::Middle),
        HPos::Right(dx) => (left + width - dx, TextAnchor::End),
    }
}

fn resolve(anchor: Anchor, origin: Point, size: Size) -> (Point, TextAnchor) {
    let (x, text_anchor) = resolve_x(anchor.x, origin.x, size.width);
    (Point::new(x, origin.y + anchor.dy), text_anchor)
}

fn draw_frame(
    drawing: &mut Drawing,
    theme: &Theme,
    origin: Point,
    size: Size,
    frame: Frame,
    radius: f32,
) -> WireframeResult<()> {
    let border = Stroke::new(theme.border);
    let style = match frame {
        Frame::Bare => return Ok(()),
        Frame::Outline => Style::outlined(border),
        Frame::Dashed => Style::outlined(border.dashed(DROP_ZONE_DASH.to_vec())),
        Frame::Surface => Style::filled(theme.surface),
        Frame::Highlight => Style::filled(theme.surface).with_stroke(border),
    };
    emit::rect(drawing, origin, size, Corner::round(radius), style)
}

fn draw_inset(
    drawing: &mut Drawing,
    theme: &Theme,
    origin: Point,
    size: Size,
    inset: &Inset,
) -> WireframeResult<()> {
    let at = |anchor: Anchor| resolve(anchor, origin, size).0;

    match inset {
        Inset::Text {
            text,
            at: anchor,
            scale,
            tone,
        } => {
            let (point, text_anchor) = resolve(*anchor, origin, size);
            emit::text(
                drawing,
                text,
                point,
                text_anchor,
                Paint::Color(tone.resolve(theme)),
                TypeScale::font(*scale),
            )
        }

        Inset::Circle {
            at: anchor,
            radius,
            fill,
            stroke,
            stroke_width,
        } => {
            let style = Style {
                fill: fill.map_or(Paint::None, |tone| Paint::Color(tone.resolve(theme))),
                stroke: stroke.map(|tone| Stroke::new(tone.resolve(theme)).with_width(*stroke_width)),
            };
            emit::circle(drawing, at(*anchor), *radius, style)
        }

        Inset::Chevron { at: anchor } => {
            let start = at(*anchor);
            emit::path(
                drawing,
                PathData::starting_at(start.x, start.y)
                    .line_by(6.0, -6.0)
                    .line_by(6.0, 6.0),
                Style::outlined(Stroke::new(theme.border)),
            )
        }

        Inset::Curve { from, c1, c2, to } => {
            let start = at(*from);
            emit::path(
                drawing,
                PathData::starting_at(start.x, start.y).cubic_to(at(*c1), at(*c2), at(*to)),
                Style::outlined(Stroke::new(Tone::Primary.resolve(theme)).with_width(2.0)),
            )
        }

        Inset::Rule { from, to, dy } => {
            let y = origin.y + dy;
            let (x1, _) = resolve_x(*from, origin.x, size.width);
            let (x2, _) = resolve_x(*to, origin.x, size.width);
            emit::line(
                drawing,
                Point::new(x1, y),
                Point::new(x2, y),
                Stroke::new(theme.border),
            )
        }

        Inset::Square { at: anchor, size: edge } => emit::rect(
            drawing,
            at(*anchor),
            Size::new(*edge, *edge),
            Corner::SQUARE,
            Style::outlined(Stroke::new(theme.border)),
        ),
    }
}
