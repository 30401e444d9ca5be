use crate::core::{LinearScale, Rect, Viewport};
use crate::error::CalcResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{Calculator, GraphSnapshot, RenderSnapshot};

const BACKGROUND_RGB: u32 = 0x10_18_20;
const TEXT: Color = Color::WHITE;
const MUTED_TEXT: Color = Color::rgb(0.6, 0.6, 0.6);
const HIGHLIGHT: Color = Color::rgb(0.0, 1.0, 1.0);
const GLASS: Color = Color::rgba(1.0, 1.0, 1.0, 0.18);
const GLASS_BORDER: Color = Color::rgba(1.0, 1.0, 1.0, 0.35);
const PLOT_BACKGROUND: Color = Color::rgba(0.0, 0.0, 0.0, 0.67);

const TITLE_POSITION: (f64, f64) = (200.0, 20.0);
const DISPLAY_PANEL: Rect = Rect::new(40.0, 60.0, 560.0, 60.0);
const DISPLAY_TEXT_POSITION: (f64, f64) = (50.0, 70.0);
const HISTORY_HEADER_POSITION: (f64, f64) = (40.0, 130.0);
const HISTORY_LINE_X: f64 = 120.0;
const HISTORY_LINE_SPACING: f64 = 20.0;
const INSTRUCTIONS_POSITION: (f64, f64) = (50.0, 455.0);
const INSTRUCTIONS: &str = "IR/D-Pad: Select | A: Press Button | B: Back";

const TITLE_FONT_PX: f64 = 24.0;
const DISPLAY_FONT_PX: f64 = 32.0;
const HISTORY_HEADER_FONT_PX: f64 = 13.0;
const HISTORY_FONT_PX: f64 = 11.0;
const BUTTON_FONT_PX: f64 = 16.0;
const AXIS_LABEL_FONT_PX: f64 = 10.0;
const INSTRUCTIONS_FONT_PX: f64 = 13.0;

const AXIS_STROKE: f64 = 1.0;
const CURVE_STROKE: f64 = 2.0;
const AXIS_LABEL_OFFSETS: (f64, f64) = (10.0, 25.0);

impl RenderSnapshot {
    /// Lays the snapshot out as draw primitives.
    ///
    /// The graph, when present, is drawn into `plot_area`; curve points
    /// outside the y range are clamped to the plot edges and failed samples
    /// break the curve.
    pub fn to_render_frame(&self, viewport: Viewport, plot_area: Rect) -> CalcResult<RenderFrame> {
        let mut frame =
            RenderFrame::new(viewport).with_background(Color::from_rgb_u32(BACKGROUND_RGB));

        frame.texts.push(text_at(&self.title, TITLE_POSITION, TITLE_FONT_PX, TEXT));
        frame
            .rects
            .push(RectPrimitive::new(DISPLAY_PANEL, GLASS).with_border(GLASS_BORDER));
        frame.texts.push(text_at(
            &self.display,
            DISPLAY_TEXT_POSITION,
            DISPLAY_FONT_PX,
            TEXT,
        ));

        frame.texts.push(text_at(
            "History:",
            HISTORY_HEADER_POSITION,
            HISTORY_HEADER_FONT_PX,
            MUTED_TEXT,
        ));
        for (i, line) in self.history.iter().enumerate() {
            let y = HISTORY_HEADER_POSITION.1 + i as f64 * HISTORY_LINE_SPACING;
            frame
                .texts
                .push(text_at(line, (HISTORY_LINE_X, y), HISTORY_FONT_PX, MUTED_TEXT));
        }

        if let Some(graph) = &self.graph {
            push_graph(&mut frame, graph, plot_area)?;
        }

        let layout = self.keypad.layout;
        for (index, glyph) in self.keypad.glyphs.iter().enumerate() {
            let rect = layout.button_rect(index);
            let fill = if index == self.keypad.selected_index {
                HIGHLIGHT
            } else {
                GLASS
            };
            frame
                .rects
                .push(RectPrimitive::new(rect, fill).with_border(GLASS_BORDER));
            let (cx, cy) = rect.center();
            frame.texts.push(TextPrimitive::new(
                glyph.label(),
                cx,
                cy,
                BUTTON_FONT_PX,
                TEXT,
                TextHAlign::Center,
            ));
        }

        frame.texts.push(text_at(
            INSTRUCTIONS,
            INSTRUCTIONS_POSITION,
            INSTRUCTIONS_FONT_PX,
            TEXT,
        ));
        Ok(frame)
    }
}

fn text_at(text: &str, position: (f64, f64), font_size_px: f64, color: Color) -> TextPrimitive {
    TextPrimitive::new(
        text,
        position.0,
        position.1,
        font_size_px,
        color,
        TextHAlign::Left,
    )
}

fn push_graph(frame: &mut RenderFrame, graph: &GraphSnapshot, plot_area: Rect) -> CalcResult<()> {
    let x_scale = LinearScale::new(graph.domain, (plot_area.x, plot_area.x + plot_area.width))?;
    // Pixel y grows downwards.
    let y_scale = LinearScale::new(graph.range, (plot_area.bottom(), plot_area.y))?;

    frame.rects.push(RectPrimitive::new(plot_area, PLOT_BACKGROUND));

    let zero_y = y_scale.domain_to_pixel_clamped(0.0);
    let zero_x = x_scale.domain_to_pixel_clamped(0.0);
    frame.lines.push(LinePrimitive::new(
        plot_area.x,
        zero_y,
        plot_area.x + plot_area.width,
        zero_y,
        AXIS_STROKE,
        TEXT,
    ));
    frame.lines.push(LinePrimitive::new(
        zero_x,
        plot_area.y,
        zero_x,
        plot_area.bottom(),
        AXIS_STROKE,
        TEXT,
    ));

    let mut run: Vec<(f64, f64)> = Vec::with_capacity(graph.samples.len());
    for (x, y) in graph.points() {
        match y {
            Some(y) => run.push((
                x_scale.domain_to_pixel(x),
                y_scale.domain_to_pixel_clamped(y),
            )),
            None => frame.push_polyline(run.drain(..), CURVE_STROKE, HIGHLIGHT),
        }
    }
    frame.push_polyline(run, CURVE_STROKE, HIGHLIGHT);

    let label_y = plot_area.bottom();
    frame.texts.push(text_at(
        &graph.x_axis_label,
        (plot_area.x, label_y + AXIS_LABEL_OFFSETS.0),
        AXIS_LABEL_FONT_PX,
        TEXT,
    ));
    frame.texts.push(text_at(
        &graph.y_axis_label,
        (plot_area.x, label_y + AXIS_LABEL_OFFSETS.1),
        AXIS_LABEL_FONT_PX,
        TEXT,
    ));
    Ok(())
}

impl<R: Renderer> Calculator<R> {
    pub fn build_render_frame(&self) -> CalcResult<RenderFrame> {
        self.snapshot()
            .to_render_frame(self.config.viewport, self.config.plot_area)
    }
}
