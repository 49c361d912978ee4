use crate::core::Clock;
use crate::extensions::{ObserverContext, TimelineEvent};

use super::TimelineEngine;

impl<C: Clock> TimelineEngine<C> {
    pub(super) fn observer_context(&self, now: f64) -> ObserverContext {
        let snapshot = self.store.snapshot();
        ObserverContext {
            now,
            item_count: snapshot.items.len(),
            lane_count: snapshot.lanes.len(),
            visible_window: self.visible_window,
        }
    }

    pub(super) fn emit_event(&mut self, event: TimelineEvent, now: f64) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context(now);
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
