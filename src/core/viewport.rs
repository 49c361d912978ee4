use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{EpochMillis, TimeRange};
use crate::error::{TimelineError, TimelineResult};

/// Ratio between the over-rendered canvas and the visible window.
pub const CANVAS_BUFFER_FACTOR: f64 = 3.0;

/// Geometry snapshot of the timeline surface at a point in time.
///
/// The canvas backs the visible window with extra time on both sides so the
/// renderer can pan without remapping on every frame. Its pixel width is
/// `pixel_width * canvas_factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    visible: TimeRange,
    canvas: TimeRange,
    pixel_width: f64,
    canvas_factor: f64,
}

#[derive(Deserialize)]
struct RawViewport {
    visible: TimeRange,
    canvas: TimeRange,
    pixel_width: f64,
    canvas_factor: f64,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = TimelineError;

    fn try_from(raw: RawViewport) -> TimelineResult<Self> {
        Self::with_canvas_factor(raw.visible, raw.canvas, raw.pixel_width, raw.canvas_factor)
    }
}

impl Viewport {
    pub fn new(visible: TimeRange, canvas: TimeRange, pixel_width: f64) -> TimelineResult<Self> {
        Self::with_canvas_factor(visible, canvas, pixel_width, CANVAS_BUFFER_FACTOR)
    }

    pub fn with_canvas_factor(
        visible: TimeRange,
        canvas: TimeRange,
        pixel_width: f64,
        canvas_factor: f64,
    ) -> TimelineResult<Self> {
        let viewport = Self {
            visible,
            canvas,
            pixel_width,
            canvas_factor,
        };
        viewport.validate()?;
        if !canvas.contains_range(visible) {
            return Err(TimelineError::InvalidData(
                "canvas window must contain the visible window".to_owned(),
            ));
        }
        Ok(viewport)
    }

    /// Rebuilds the canvas from renderer state that only reports its start.
    ///
    /// `canvas.end = canvas_start + canvas_factor * visible.span()`.
    pub fn from_visible(
        visible: TimeRange,
        canvas_start: EpochMillis,
        pixel_width: f64,
        canvas_factor: f64,
    ) -> TimelineResult<Self> {
        let canvas = TimeRange::new(canvas_start, canvas_start + visible.span() * canvas_factor)?;
        Self::with_canvas_factor(visible, canvas, pixel_width, canvas_factor)
    }

    #[must_use]
    pub fn visible(self) -> TimeRange {
        self.visible
    }

    #[must_use]
    pub fn canvas(self) -> TimeRange {
        self.canvas
    }

    #[must_use]
    pub fn pixel_width(self) -> f64 {
        self.pixel_width
    }

    #[must_use]
    pub fn canvas_factor(self) -> f64 {
        self.canvas_factor
    }

    #[must_use]
    pub fn canvas_pixel_width(self) -> f64 {
        self.pixel_width * self.canvas_factor
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }

    fn validate(self) -> TimelineResult<()> {
        if !self.pixel_width.is_finite()
            || self.pixel_width <= 0.0
            || !self.canvas_factor.is_finite()
            || self.canvas_factor < 1.0
            || self.canvas.span() <= 0.0
        {
            return Err(TimelineError::InvalidViewport {
                pixel_width: self.pixel_width,
                canvas_span: self.canvas.span(),
            });
        }
        Ok(())
    }

    fn canvas_scale(self) -> TimelineResult<LinearScale> {
        self.validate()?;
        LinearScale::new(
            self.canvas.start(),
            self.canvas.end(),
            self.canvas_pixel_width(),
        )
    }
}

/// Maps a content-relative x coordinate onto the canvas time axis.
///
/// `pixel_x` must already include the container offset and scroll position.
/// A malformed viewport is reported as `TimelineError::InvalidViewport`; the
/// caller must not fall back to a guessed time.
pub fn time_at(pixel_x: f64, viewport: Viewport) -> TimelineResult<EpochMillis> {
    viewport.canvas_scale()?.pixel_to_domain(pixel_x)
}

/// Inverse of [`time_at`], used by hosts to position markers.
pub fn pixel_at(time: EpochMillis, viewport: Viewport) -> TimelineResult<f64> {
    viewport.canvas_scale()?.domain_to_pixel(time)
}
