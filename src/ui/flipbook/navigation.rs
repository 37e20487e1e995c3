// SPDX-License-Identifier: MPL-2.0
//! Page navigation sub-component: current index plus the in-flight flip.
//!
//! A flip is a deadline stored in the state. `tick(now)` commits it once the
//! flip duration has elapsed; dropping the state drops the deadline with it.

use crate::ui::state::FlipDuration;
use std::time::Instant;

/// A page flip that has started but not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    started_at: Instant,
    commit_at: Instant,
}

impl Transition {
    /// Which way the pages turn.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.to > self.from
    }
}

/// Navigation sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    index: usize,
    page_count: usize,
    flip_duration: FlipDuration,
    transition: Option<Transition>,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Advance,
    Retreat,
    JumpTo(usize),
    /// Commit the in-flight flip if its deadline has passed.
    Tick,
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Request was out of range or arrived mid-flip.
    None,
    TransitionStarted { from: usize, to: usize },
    PageCommitted(usize),
}

impl State {
    #[must_use]
    pub fn new(page_count: usize, flip_duration: FlipDuration) -> Self {
        Self {
            index: 0,
            page_count,
            flip_duration,
            transition: None,
        }
    }

    /// Handles a navigation message at time `now`.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        let started = match msg {
            Message::Advance => self.advance(now),
            Message::Retreat => self.retreat(now),
            Message::JumpTo(target) => self.jump_to(target, now),
            Message::Tick => {
                return self.tick(now).map_or(Effect::None, Effect::PageCommitted);
            }
        };

        match (started, self.transition) {
            (true, Some(t)) => Effect::TransitionStarted {
                from: t.from,
                to: t.to,
            },
            _ => Effect::None,
        }
    }

    /// Starts a flip to the next page. Returns `false` at the last page or
    /// while another flip is running.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.start(self.index + 1, now)
    }

    /// Starts a flip to the previous page. Returns `false` at the first page
    /// or while another flip is running.
    pub fn retreat(&mut self, now: Instant) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.start(self.index - 1, now)
    }

    /// Starts a flip to `target`. The current page and out-of-range targets
    /// are rejected.
    pub fn jump_to(&mut self, target: usize, now: Instant) -> bool {
        if target == self.index || target >= self.page_count {
            return false;
        }
        self.start(target, now)
    }

    fn start(&mut self, target: usize, now: Instant) -> bool {
        if self.transition.is_some() {
            return false;
        }
        self.transition = Some(Transition {
            from: self.index,
            to: target,
            started_at: now,
            commit_at: now + self.flip_duration.as_duration(),
        });
        true
    }

    /// Commits the in-flight flip once its deadline has passed.
    ///
    /// Returns the newly committed index.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let transition = self.transition?;
        if now < transition.commit_at {
            return None;
        }
        self.index = transition.to;
        self.transition = None;
        Some(self.index)
    }

    /// Animation progress of the in-flight flip in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let t = self.transition?;
        let total = t.commit_at.saturating_duration_since(t.started_at);
        if total.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(t.started_at);
        Some((elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.index + 1 < self.page_count
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.index > 0
    }

    /// Pages drawn on the sheet: the front is the current page, the back is
    /// the flip target while flipping, otherwise the next page if any.
    #[must_use]
    pub fn faces(&self) -> Faces {
        if self.is_empty() {
            return Faces::default();
        }
        let back = match self.transition {
            Some(t) => Some(t.to),
            None if self.can_advance() => Some(self.index + 1),
            None => None,
        };
        Faces {
            front: Some(self.index),
            back,
        }
    }
}

/// Page indices shown on the two sides of the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Faces {
    pub front: Option<usize>,
    pub back: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    const FLIP: Duration = Duration::from_millis(300);

    fn nav(pages: usize) -> State {
        State::new(pages, FlipDuration::from_millis(300))
    }

    /// Runs one navigation request to completion.
    fn settle(state: &mut State, now: &mut Instant) {
        *now += FLIP;
        state.tick(*now);
    }

    #[test]
    fn advance_commits_after_flip_duration() {
        let mut state = nav(3);
        let start = Instant::now();

        assert!(state.advance(start));
        assert!(state.is_transitioning());
        assert_eq!(state.index(), 0);

        assert_eq!(state.tick(start + FLIP / 2), None);
        assert_eq!(state.index(), 0);

        assert_eq!(state.tick(start + FLIP), Some(1));
        assert!(!state.is_transitioning());
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn retreat_from_first_page_is_noop() {
        let mut state = nav(8);
        assert!(!state.retreat(Instant::now()));
        assert_eq!(state.index(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn requests_during_flip_are_dropped() {
        let mut state = nav(8);
        let mut now = Instant::now();
        state.advance(now);
        settle(&mut state, &mut now);
        assert_eq!(state.index(), 1);

        assert!(state.advance(now));
        assert!(!state.advance(now));
        assert!(!state.retreat(now));
        assert!(!state.jump_to(6, now));

        settle(&mut state, &mut now);
        assert_eq!(state.index(), 2);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn jump_to_current_page_starts_nothing() {
        let mut state = nav(8);
        assert!(!state.jump_to(0, Instant::now()));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn jump_to_out_of_range_is_rejected() {
        let mut state = nav(8);
        assert!(!state.jump_to(8, Instant::now()));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn jump_to_commits_target() {
        let mut state = nav(8);
        let mut now = Instant::now();
        assert!(state.jump_to(5, now));
        settle(&mut state, &mut now);
        assert_eq!(state.index(), 5);
    }

    #[test]
    fn empty_book_ignores_everything() {
        let mut state = nav(0);
        let now = Instant::now();
        assert!(!state.advance(now));
        assert!(!state.retreat(now));
        assert!(!state.jump_to(0, now));
        assert_eq!(state.index(), 0);
        assert_eq!(state.faces(), Faces::default());
    }

    #[test]
    fn last_page_has_no_back_face() {
        let mut state = nav(8);
        let mut now = Instant::now();
        state.jump_to(7, now);
        settle(&mut state, &mut now);

        let faces = state.faces();
        assert_eq!(faces.front, Some(7));
        assert_eq!(faces.back, None);
    }

    #[test]
    fn back_face_is_flip_target_while_flipping() {
        let mut state = nav(8);
        let now = Instant::now();
        assert_eq!(state.faces().back, Some(1));

        state.jump_to(4, now);
        assert_eq!(
            state.faces(),
            Faces {
                front: Some(0),
                back: Some(4)
            }
        );
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let mut state = nav(2);
        let start = Instant::now();
        assert_eq!(state.progress(start), None);

        state.advance(start);
        assert_eq!(state.progress(start), Some(0.0));
        let half = state.progress(start + FLIP / 2).unwrap_or_default();
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(state.progress(start + FLIP * 4), Some(1.0));
    }

    #[test]
    fn handle_reports_effects() {
        let mut state = nav(2);
        let now = Instant::now();
        assert_eq!(
            state.handle(Message::Advance, now),
            Effect::TransitionStarted { from: 0, to: 1 }
        );
        assert_eq!(state.handle(Message::Advance, now), Effect::None);
        assert_eq!(state.handle(Message::Tick, now), Effect::None);
        assert_eq!(
            state.handle(Message::Tick, now + FLIP),
            Effect::PageCommitted(1)
        );
    }

    #[test]
    fn dropping_state_mid_flip_leaves_nothing_behind() {
        let mut state = nav(3);
        state.advance(Instant::now());
        assert!(state.is_transitioning());
        drop(state);

        // A fresh mount starts from scratch.
        let state = nav(3);
        assert!(!state.is_transitioning());
        assert_eq!(state.index(), 0);
    }

    proptest! {
        #[test]
        fn advancing_never_leaves_the_book(
            pages in 1usize..20,
            start in 0usize..20,
            advances in 0usize..40,
        ) {
            let mut state = nav(pages);
            let mut now = Instant::now();
            state.jump_to(start.min(pages - 1), now);
            settle(&mut state, &mut now);

            for _ in 0..advances {
                state.advance(now);
                settle(&mut state, &mut now);
                prop_assert!(state.index() < pages);
            }
            prop_assert_eq!(state.index(), (start.min(pages - 1) + advances).min(pages - 1));
        }

        #[test]
        fn retreating_never_underflows(pages in 1usize..20, retreats in 0usize..40) {
            let mut state = nav(pages);
            let mut now = Instant::now();
            state.jump_to(pages - 1, now);
            settle(&mut state, &mut now);

            for _ in 0..retreats {
                state.retreat(now);
                settle(&mut state, &mut now);
            }
            prop_assert_eq!(state.index(), (pages - 1).saturating_sub(retreats));
        }
    }
}
