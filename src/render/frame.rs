use crate::core::Viewport;
use crate::error::{CalcError, CalcResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one calculator draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: Color::BLACK,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    /// Appends one segment per consecutive pair of points.
    pub fn push_polyline(
        &mut self,
        points: impl IntoIterator<Item = (f64, f64)>,
        stroke_width: f64,
        color: Color,
    ) {
        let mut previous: Option<(f64, f64)> = None;
        for point in points {
            if let Some((x1, y1)) = previous {
                self.lines.push(LinePrimitive::new(
                    x1,
                    y1,
                    point.0,
                    point.1,
                    stroke_width,
                    color,
                ));
            }
            previous = Some(point);
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.viewport.is_valid() {
            return Err(CalcError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    /// First text primitive with exactly this content.
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts.iter().find(|primitive| primitive.text == text)
    }
}
