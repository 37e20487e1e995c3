// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe recognition for touch screens.
//!
//! Only the first finger to touch down is tracked. The gesture is judged on
//! lift from the horizontal distance travelled.

use crate::ui::state::SwipeThreshold;

/// Outcome of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved leftwards: show the next page.
    Advance,
    /// Finger moved rightwards: show the previous page.
    Retreat,
}

/// Classifies a finished gesture. `start - end` must exceed the threshold
/// strictly in either direction.
#[must_use]
pub fn classify(start_x: f32, end_x: f32, threshold: SwipeThreshold) -> Option<Swipe> {
    let distance = start_x - end_x;
    let threshold = threshold.value();
    if distance > threshold {
        Some(Swipe::Advance)
    } else if distance < -threshold {
        Some(Swipe::Retreat)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    finger: u64,
    start_x: f32,
    end_x: Option<f32>,
}

/// Swipe tracker state.
#[derive(Debug, Clone, Default)]
pub struct State {
    gesture: Option<Gesture>,
    threshold: SwipeThreshold,
}

/// Messages for the swipe sub-component. Fingers are identified by id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pressed { finger: u64, x: f32 },
    Moved { finger: u64, x: f32 },
    Lifted { finger: u64 },
    Lost { finger: u64 },
}

impl State {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            gesture: None,
            threshold,
        }
    }

    /// Feeds a touch message; returns the recognized swipe on lift.
    pub fn handle(&mut self, msg: Message) -> Option<Swipe> {
        match msg {
            Message::Pressed { finger, x } => {
                if self.gesture.is_none() {
                    self.gesture = Some(Gesture {
                        finger,
                        start_x: x,
                        end_x: None,
                    });
                }
                None
            }
            Message::Moved { finger, x } => {
                if let Some(gesture) = self.gesture.as_mut().filter(|g| g.finger == finger) {
                    gesture.end_x = Some(x);
                }
                None
            }
            Message::Lifted { finger } => {
                let gesture = self.take(finger)?;
                // A tap never moved: nothing to judge.
                let end_x = gesture.end_x?;
                classify(gesture.start_x, end_x, self.threshold)
            }
            Message::Lost { finger } => {
                self.take(finger);
                None
            }
        }
    }

    fn take(&mut self, finger: u64) -> Option<Gesture> {
        if self.gesture.is_some_and(|g| g.finger == finger) {
            self.gesture.take()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(start: f32, end: f32) -> Option<Swipe> {
        let mut state = State::default();
        state.handle(Message::Pressed {
            finger: 0,
            x: start,
        });
        state.handle(Message::Moved { finger: 0, x: end });
        state.handle(Message::Lifted { finger: 0 })
    }

    #[test]
    fn leftward_swipe_advances() {
        assert_eq!(swipe(300.0, 200.0), Some(Swipe::Advance));
    }

    #[test]
    fn rightward_swipe_retreats() {
        assert_eq!(swipe(200.0, 300.0), Some(Swipe::Retreat));
    }

    #[test]
    fn short_swipe_does_nothing() {
        assert_eq!(swipe(200.0, 180.0), None);
    }

    #[test]
    fn distance_equal_to_threshold_does_nothing() {
        assert_eq!(swipe(250.0, 200.0), None);
        assert_eq!(swipe(200.0, 250.0), None);
    }

    #[test]
    fn lift_without_move_does_nothing() {
        let mut state = State::default();
        state.handle(Message::Pressed { finger: 1, x: 300.0 });
        assert_eq!(state.handle(Message::Lifted { finger: 1 }), None);
        assert!(!state.is_tracking());
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut state = State::default();
        state.handle(Message::Pressed { finger: 1, x: 300.0 });
        state.handle(Message::Pressed { finger: 2, x: 10.0 });
        state.handle(Message::Moved { finger: 2, x: 900.0 });
        state.handle(Message::Moved { finger: 1, x: 100.0 });

        assert_eq!(state.handle(Message::Lifted { finger: 2 }), None);
        assert_eq!(
            state.handle(Message::Lifted { finger: 1 }),
            Some(Swipe::Advance)
        );
    }

    #[test]
    fn lost_finger_resets_gesture() {
        let mut state = State::default();
        state.handle(Message::Pressed { finger: 1, x: 300.0 });
        state.handle(Message::Moved { finger: 1, x: 0.0 });
        state.handle(Message::Lost { finger: 1 });
        assert!(!state.is_tracking());
        assert_eq!(state.handle(Message::Lifted { finger: 1 }), None);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let threshold = SwipeThreshold::new(120.0);
        assert_eq!(classify(300.0, 200.0, threshold), None);
        assert_eq!(classify(300.0, 150.0, threshold), Some(Swipe::Advance));
    }
}
