// SPDX-License-Identifier: MPL-2.0
//! Controls visibility sub-component.
//!
//! The header, arrows, indicator dots and instructions start visible and hide
//! after a period without pointer movement. Any movement brings them back.

use crate::ui::state::ControlsTimeout;
use std::time::Instant;

/// Controls visibility state.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    last_activity: Instant,
    timeout: ControlsTimeout,
}

/// Messages for the controls sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PointerMoved,
    /// Hide the controls if the idle timeout has expired.
    CheckTimeout,
}

/// Effects produced by controls visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    /// Visible controls with the idle timer armed at `now`.
    #[must_use]
    pub fn new(timeout: ControlsTimeout, now: Instant) -> Self {
        Self {
            visible: true,
            last_activity: now,
            timeout,
        }
    }

    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::PointerMoved => {
                self.last_activity = now;
                if self.visible {
                    Effect::None
                } else {
                    self.visible = true;
                    Effect::VisibilityChanged(true)
                }
            }
            Message::CheckTimeout => {
                if self.visible && now >= self.hide_at() {
                    self.visible = false;
                    Effect::VisibilityChanged(false)
                } else {
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Deadline at which the controls hide unless the pointer moves.
    #[must_use]
    pub fn hide_at(&self) -> Instant {
        self.last_activity + self.timeout.as_duration()
    }
}
