use std::sync::Arc;

use tracing::debug;

use crate::core::{Clock, EpochMillis, Item, Lane, TimeRange, TimeWindowClamp, Viewport};
use crate::error::TimelineResult;
use crate::extensions::TimelineObserver;
use crate::store::{ItemStore, TimelineSnapshot};

use super::TimelineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the item store and routes drops, moves, resizes and
/// visible-window changes through the placement rules, reading "now" from
/// the injected clock.
pub struct TimelineEngine<C: Clock> {
    pub(super) clock: C,
    pub(super) config: TimelineConfig,
    pub(super) store: ItemStore,
    pub(super) window_clamp: TimeWindowClamp,
    pub(super) visible_window: Option<TimeRange>,
    pub(super) observers: Vec<Box<dyn TimelineObserver>>,
}

impl<C: Clock> TimelineEngine<C> {
    pub fn new(clock: C, config: TimelineConfig) -> TimelineResult<Self> {
        Self::seeded(clock, config, Vec::new(), Vec::new())
    }

    /// Builds an engine around lanes and items supplied by the host.
    pub fn seeded(
        clock: C,
        config: TimelineConfig,
        lanes: Vec<Lane>,
        items: Vec<Item>,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        let store = ItemStore::seeded(config.store_policy()?, lanes, items)?;
        let window_clamp = config.window_clamp()?;
        debug!(?config, "timeline engine initialized");

        Ok(Self {
            clock,
            config,
            store,
            window_clamp,
            visible_window: None,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    /// Replaces the configuration; existing items are left as they are.
    pub fn set_config(&mut self, config: TimelineConfig) -> TimelineResult<()> {
        let config = config.validate()?;
        let policy = config.store_policy()?;
        let window_clamp = config.window_clamp()?;
        self.store.set_policy(policy);
        self.window_clamp = window_clamp;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn now(&self) -> EpochMillis {
        self.clock.now_ms()
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<TimelineSnapshot> {
        self.store.snapshot()
    }

    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Viewport for renderer state reporting only the canvas start.
    pub fn viewport_from_visible(
        &self,
        visible: TimeRange,
        canvas_start: EpochMillis,
        pixel_width: f64,
    ) -> TimelineResult<Viewport> {
        Viewport::from_visible(
            visible,
            canvas_start,
            pixel_width,
            self.config.canvas_buffer_factor,
        )
    }

    pub fn register_observer(&mut self, observer: Box<dyn TimelineObserver>) {
        debug!(observer = observer.id(), "observer registered");
        self.observers.push(observer);
    }

    /// Removes observers with `id`; returns whether any was removed.
    pub fn unregister_observer(&mut self, id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        before != self.observers.len()
    }
}
