//! Draw commands produced for one calculator frame.
//!
//! Colors come from the frame builder's palette constants and are not
//! checked. Geometry is: graph curves are projected from sample data, so a
//! non-finite coordinate is the one thing a backend must never see.

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        let channel = |shift: u32| f64::from((rgb >> shift) & 0xFF) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }
}

/// Axis or curve segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> CalcResult<()> {
        if all_finite(&[self.x1, self.y1, self.x2, self.y2]) {
            Ok(())
        } else {
            Err(CalcError::InvalidData(format!(
                "segment ({}, {}) -> ({}, {}) leaves pixel space",
                self.x1, self.y1, self.x2, self.y2
            )))
        }
    }
}

/// Panel, plot background or keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub fill: Color,
    pub border: Option<Color>,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            fill,
            border: None,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn validate(self) -> CalcResult<()> {
        if self.rect.is_valid() {
            Ok(())
        } else {
            Err(CalcError::InvalidData(format!(
                "rect {:?} has no drawable area",
                self.rect
            )))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    /// `x` is the left edge; titles, display and history.
    Left,
    /// `x` is the center; keypad labels.
    Center,
}

/// Label, display text or history line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.text.is_empty() {
            return Err(CalcError::InvalidData(format!(
                "empty label at ({}, {})",
                self.x, self.y
            )));
        }
        if !all_finite(&[self.x, self.y]) {
            return Err(CalcError::InvalidData(format!(
                "label `{}` has no finite position",
                self.text
            )));
        }
        Ok(())
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive};

    #[test]
    fn packed_rgb_unpacks_channels() {
        let color = Color::from_rgb_u32(0xFF_00_80);
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert!((color.blue - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn non_finite_segment_is_rejected() {
        let line = LinePrimitive::new(0.0, f64::NAN, 1.0, 1.0, 1.0, Color::WHITE);
        assert!(line.validate().is_err());
    }
}
