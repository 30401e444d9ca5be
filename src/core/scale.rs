use crate::error::{CalcError, CalcResult};

/// Linear mapping from a value domain onto a pixel interval.
///
/// The pixel interval may be reversed (`pixel_start > pixel_end`), which is
/// how the graph's y axis grows upwards on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), pixels: (f64, f64)) -> CalcResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(CalcError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        let (pixel_start, pixel_end) = pixels;
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(CalcError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    /// Like [`domain_to_pixel`](Self::domain_to_pixel) but clamped into the
    /// pixel interval.
    #[must_use]
    pub fn domain_to_pixel_clamped(self, value: f64) -> f64 {
        let low = self.pixel_start.min(self.pixel_end);
        let high = self.pixel_start.max(self.pixel_end);
        self.domain_to_pixel(value).clamp(low, high)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
