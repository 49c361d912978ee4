use crate::error::{TimelineError, TimelineResult};

/// Linear map between a time domain and a pixel extent starting at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_extent: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, pixel_extent: f64) -> TimelineResult<Self> {
        let span = domain_end - domain_start;
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !span.is_finite()
            || span <= 0.0
            || !pixel_extent.is_finite()
            || pixel_extent <= 0.0
        {
            return Err(TimelineError::InvalidViewport {
                pixel_width: pixel_extent,
                canvas_span: span,
            });
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_extent,
        })
    }

    pub fn domain_to_pixel(self, value: f64) -> TimelineResult<f64> {
        if !value.is_finite() {
            return Err(TimelineError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * self.pixel_extent)
    }

    pub fn pixel_to_domain(self, pixel: f64) -> TimelineResult<f64> {
        if !pixel.is_finite() {
            return Err(TimelineError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / self.pixel_extent;
        Ok(self.domain_start + normalized * span)
    }
}
