use tracing::debug;

use crate::core::{Clock, TimeRange};
use crate::error::TimelineResult;
use crate::extensions::TimelineEvent;

use super::TimelineEngine;

impl<C: Clock> TimelineEngine<C> {
    /// Last window accepted by `clamp_visible_window`.
    #[must_use]
    pub fn visible_window(&self) -> Option<TimeRange> {
        self.visible_window
    }

    /// Rolling horizon around the current time.
    pub fn horizon(&self) -> TimelineResult<TimeRange> {
        self.window_clamp.horizon(self.clock.now_ms())
    }

    /// Restricts a proposed visible window to the rolling horizon.
    ///
    /// The returned window is what the renderer should scroll its canvas to.
    pub fn clamp_visible_window(&mut self, proposed: TimeRange) -> TimelineResult<TimeRange> {
        let now = self.clock.now_ms();
        let window = self.window_clamp.clamp(proposed, now)?;
        if window != proposed {
            debug!(
                proposed_start = proposed.start(),
                proposed_end = proposed.end(),
                start = window.start(),
                end = window.end(),
                "visible window clamped to horizon"
            );
        }
        if self.visible_window != Some(window) {
            self.visible_window = Some(window);
            self.emit_event(TimelineEvent::VisibleWindowChanged { window }, now);
        }
        Ok(window)
    }
}
