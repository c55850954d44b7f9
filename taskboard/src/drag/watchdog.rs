//! Fallback for gestures that never deliver a drag-end

use super::controller::DragController;
use super::event::{AbandonReason, DragEvent};
use crate::config::BoardConfig;
use crate::outcome::NotificationSink;
use std::time::{Duration, Instant};

/// Detects a drag whose input source went away.
///
/// The watchdog holds no clock of its own: the capture layer passes `now` on
/// every call, which keeps replays deterministic.
#[derive(Debug, Clone)]
pub struct DragWatchdog {
    timeout: Duration,
    last_activity: Option<Instant>,
}

impl DragWatchdog {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_activity: None,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.drag_timeout())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_armed(&self) -> bool {
        self.last_activity.is_some()
    }

    /// Record pointer activity
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = Some(now);
    }

    pub fn disarm(&mut self) {
        self.last_activity = None;
    }

    /// Arm on start and over, disarm on end and abandon
    pub fn observe(&mut self, event: &DragEvent, now: Instant) {
        if event.is_terminal() {
            self.disarm();
        } else {
            self.touch(now);
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        self.last_activity
            .is_some_and(|last| now.saturating_duration_since(last) >= self.timeout)
    }

    /// Abandon the controller's drag if the timeout has passed.
    ///
    /// Returns true if a drag was abandoned.
    pub fn check<S: NotificationSink>(
        &mut self,
        now: Instant,
        controller: &mut DragController<S>,
    ) -> bool {
        if !controller.is_dragging() {
            self.disarm();
            return false;
        }
        if !self.expired(now) {
            return false;
        }
        self.disarm();
        controller.abandon_drag(AbandonReason::Timeout)
    }
}

impl Default for DragWatchdog {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
