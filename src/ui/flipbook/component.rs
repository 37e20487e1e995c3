// SPDX-License-Identifier: MPL-2.0
//! Flip book viewer component: orchestrates navigation, controls visibility
//! and swipe tracking, maps raw input to them and renders the book.

use super::{controls, indicators, navigation, page_view, swipe};
use crate::catalog::Page;
use crate::config::{ViewerConfig, DEFAULT_PREFETCH_RADIUS, MAX_PREFETCH_RADIUS};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::state::{ControlsTimeout, FlipDuration, SwipeThreshold};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    event, keyboard, mouse, touch, window, Element, Length,
};
use std::time::Instant;

/// Messages emitted by the flip book.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick(Instant),
    Advance,
    Retreat,
    JumpTo(usize),
    Close,
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
    ToggleFullscreen,
}

/// Viewer timings and gesture tuning, resolved from the user config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub flip_duration: FlipDuration,
    pub controls_timeout: ControlsTimeout,
    pub swipe_threshold: SwipeThreshold,
    pub prefetch_radius: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flip_duration: FlipDuration::default(),
            controls_timeout: ControlsTimeout::default(),
            swipe_threshold: SwipeThreshold::default(),
            prefetch_radius: DEFAULT_PREFETCH_RADIUS,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        let defaults = Self::default();
        Self {
            flip_duration: config
                .flip_duration_ms
                .map_or(defaults.flip_duration, FlipDuration::from_millis),
            controls_timeout: config
                .controls_timeout_secs
                .map_or(defaults.controls_timeout, ControlsTimeout::new),
            swipe_threshold: config
                .swipe_threshold
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
            prefetch_radius: config
                .prefetch_radius
                .unwrap_or(DEFAULT_PREFETCH_RADIUS)
                .min(MAX_PREFETCH_RADIUS),
        }
    }
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// Complete viewer state. Exists only while the viewer is open; dropping it
/// cancels the controls timer and any flip in progress.
#[derive(Debug, Clone)]
pub struct State {
    pages: Vec<Page>,
    project_name: String,
    closable: bool,
    prefetch_radius: usize,
    navigation: navigation::State,
    controls: controls::State,
    swipe: swipe::State,
    /// Time of the last handled message, used to draw the flip.
    now: Instant,
}

impl State {
    #[must_use]
    pub fn new(
        pages: Vec<Page>,
        project_name: impl Into<String>,
        closable: bool,
        settings: Settings,
        now: Instant,
    ) -> Self {
        let navigation = navigation::State::new(pages.len(), settings.flip_duration);
        Self {
            pages,
            project_name: project_name.into(),
            closable,
            prefetch_radius: settings.prefetch_radius,
            navigation,
            controls: controls::State::new(settings.controls_timeout, now),
            swipe: swipe::State::new(settings.swipe_threshold),
            now,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        let now = match message {
            Message::Tick(at) => at,
            _ => Instant::now(),
        };
        self.handle_message_at(message, now)
    }

    /// Handles `message` as if it arrived at `now`.
    pub fn handle_message_at(&mut self, message: Message, now: Instant) -> Effect {
        self.now = self.now.max(now);
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(&event, now),
            Message::Tick(_) => {
                if let navigation::Effect::PageCommitted(index) =
                    self.navigation.handle(navigation::Message::Tick, now)
                {
                    tracing::debug!(index, "page committed");
                }
                self.controls.handle(controls::Message::CheckTimeout, now);
                Effect::None
            }
            Message::Advance => self.navigate(navigation::Message::Advance, now),
            Message::Retreat => self.navigate(navigation::Message::Retreat, now),
            Message::JumpTo(index) => self.navigate(navigation::Message::JumpTo(index), now),
            Message::Close => self.close_effect(),
        }
    }

    fn navigate(&mut self, msg: navigation::Message, now: Instant) -> Effect {
        if let navigation::Effect::TransitionStarted { from, to } = self.navigation.handle(msg, now)
        {
            tracing::debug!(from, to, "page flip started");
        }
        Effect::None
    }

    fn close_effect(&self) -> Effect {
        if self.closable {
            Effect::Close
        } else {
            Effect::None
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event, now: Instant) -> Effect {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(key, now)
            }
            event::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                self.controls.handle(controls::Message::PointerMoved, now);
                Effect::None
            }
            event::Event::Touch(touch_event) => {
                self.handle_touch(*touch_event, now);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Maps a pressed key to a viewer action.
    pub fn handle_key(&mut self, key: &keyboard::Key, now: Instant) -> Effect {
        use keyboard::key::Named;

        match key {
            keyboard::Key::Named(Named::ArrowRight | Named::Space) => {
                self.navigate(navigation::Message::Advance, now)
            }
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.navigate(navigation::Message::Retreat, now)
            }
            keyboard::Key::Named(Named::Escape) => self.close_effect(),
            keyboard::Key::Named(Named::F11) => Effect::ToggleFullscreen,
            _ => Effect::None,
        }
    }

    /// Feeds a touch event to the swipe tracker and navigates on a swipe.
    pub fn handle_touch(&mut self, event: touch::Event, now: Instant) {
        let msg = match event {
            touch::Event::FingerPressed { id, position } => swipe::Message::Pressed {
                finger: id.0,
                x: position.x,
            },
            touch::Event::FingerMoved { id, position } => swipe::Message::Moved {
                finger: id.0,
                x: position.x,
            },
            touch::Event::FingerLifted { id, .. } => swipe::Message::Lifted { finger: id.0 },
            touch::Event::FingerLost { id, .. } => swipe::Message::Lost { finger: id.0 },
        };

        match self.swipe.handle(msg) {
            Some(swipe::Swipe::Advance) => {
                self.navigate(navigation::Message::Advance, now);
            }
            Some(swipe::Swipe::Retreat) => {
                self.navigate(navigation::Message::Retreat, now);
            }
            None => {}
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.index()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigation.is_transitioning()
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// One dot per page, including a lone page.
    #[must_use]
    pub fn shows_indicators(&self) -> bool {
        !self.pages.is_empty()
    }

    #[must_use]
    pub fn faces(&self) -> navigation::Faces {
        self.navigation.faces()
    }

    /// Pages whose images should be in memory: both faces first, then the
    /// neighbours within the prefetch radius, nearest first.
    #[must_use]
    pub fn wanted_pages(&self) -> Vec<&Page> {
        let faces = self.navigation.faces();
        let index = self.navigation.index();
        let mut wanted: Vec<usize> = faces.front.into_iter().chain(faces.back).collect();

        for distance in 1..=self.prefetch_radius {
            let neighbours = [index.checked_add(distance), index.checked_sub(distance)];
            for candidate in neighbours.into_iter().flatten() {
                if candidate < self.pages.len() && !wanted.contains(&candidate) {
                    wanted.push(candidate);
                }
            }
        }

        wanted.iter().filter_map(|&i| self.pages.get(i)).collect()
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let sheet: Element<'a, Message> = if self.pages.is_empty() {
            Space::new().width(Length::Fill).height(Length::Fill).into()
        } else {
            page_view::sheet(page_view::SheetModel {
                pages: &self.pages,
                faces: self.navigation.faces(),
                transition: self.navigation.transition(),
                progress: self.navigation.progress(self.now),
                images: env.images,
                i18n: env.i18n,
            })
        };

        let base = Container::new(sheet)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([sizing::NAV_ARROW + spacing::XL, spacing::XXL * 2.0])
            .style(styles::container::viewer_backdrop);

        let mut stack = Stack::new().push(base);

        if self.controls.is_visible() {
            stack = stack
                .push(self.view_header(env.i18n))
                .push(self.view_arrows(env.i18n))
                .push(self.view_footer(env.i18n));
        }

        stack.into()
    }

    fn view_header<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let position = if self.pages.is_empty() {
            i18n.tr("viewer-no-pages")
        } else {
            let current = (self.navigation.index() + 1).to_string();
            let total = self.pages.len().to_string();
            i18n.tr_with_args(
                "viewer-page-position",
                &[("current", current.as_str()), ("total", total.as_str())],
            )
        };

        let titles = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(self.project_name.as_str()).size(typography::TITLE_MD))
            .push(Text::new(position).size(typography::CAPTION));

        let mut row = Row::new()
            .align_y(Vertical::Center)
            .push(titles)
            .push(Space::new().width(Length::Fill));

        if self.closable {
            row = row.push(
                button(Text::new(i18n.tr("viewer-close")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::overlay(
                        palette::WHITE,
                        opacity::OVERLAY_MEDIUM,
                        opacity::OVERLAY_HOVER,
                    ))
                    .on_press(Message::Close),
            );
        }

        Container::new(
            Container::new(row)
                .width(Length::Fill)
                .padding([spacing::SM, spacing::LG])
                .style(styles::container::overlay_bar),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Top)
        .into()
    }

    fn view_arrows<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let flipping = self.navigation.is_transitioning();
        let mut row = Row::new().height(Length::Fill).align_y(Vertical::Center);

        // Arrows are hidden at the ends of the book and inert mid-flip.
        if self.navigation.can_retreat() {
            row = row.push(arrow("◀", i18n.tr("viewer-previous"), Message::Retreat, flipping));
        }
        row = row.push(Space::new().width(Length::Fill));
        if self.navigation.can_advance() {
            row = row.push(arrow("▶", i18n.tr("viewer-next"), Message::Advance, flipping));
        }

        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .into()
    }

    fn view_footer<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center);

        if self.shows_indicators() {
            column = column.push(indicators::view(
                self.pages.len(),
                self.navigation.index(),
            ));
        }
        column = column.push(
            Container::new(Text::new(i18n.tr("viewer-instructions")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::indicator(radius::FULL)),
        );

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into()
    }
}

fn arrow<'a>(
    glyph: &'a str,
    label: String,
    message: Message,
    disabled: bool,
) -> Element<'a, Message> {
    let content = Container::new(Text::new(glyph).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let arrow = button(content)
        .width(Length::Fixed(sizing::NAV_ARROW))
        .height(Length::Fixed(sizing::NAV_ARROW))
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));
    let arrow = if disabled {
        arrow
    } else {
        arrow.on_press(message)
    };

    iced::widget::tooltip(
        arrow,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::indicator(radius::SM)),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use iced::Point;
    use keyboard::key::Named;
    use std::time::Duration;

    fn viewer(closable: bool, now: Instant) -> State {
        State::new(
            Catalog::sample().pages,
            "Sample",
            closable,
            Settings::default(),
            now,
        )
    }

    fn flip() -> Duration {
        Settings::default().flip_duration.as_duration()
    }

    fn key(named: Named) -> keyboard::Key {
        keyboard::Key::Named(named)
    }

    #[test]
    fn arrow_right_and_space_advance() {
        let mut now = Instant::now();
        let mut state = viewer(true, now);

        state.handle_key(&key(Named::ArrowRight), now);
        now += flip();
        state.handle_message_at(Message::Tick(now), now);
        assert_eq!(state.current_index(), 1);

        state.handle_key(&key(Named::Space), now);
        now += flip();
        state.handle_message_at(Message::Tick(now), now);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn arrow_left_retreats() {
        let mut now = Instant::now();
        let mut state = viewer(true, now);
        state.handle_message_at(Message::JumpTo(3), now);
        now += flip();
        state.handle_message_at(Message::Tick(now), now);

        state.handle_key(&key(Named::ArrowLeft), now);
        now += flip();
        state.handle_message_at(Message::Tick(now), now);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn escape_closes_only_when_closable() {
        let now = Instant::now();
        assert_eq!(
            viewer(true, now).handle_key(&key(Named::Escape), now),
            Effect::Close
        );

        let mut fixed = viewer(false, now);
        assert_eq!(fixed.handle_key(&key(Named::Escape), now), Effect::None);
        assert_eq!(fixed.handle_message_at(Message::Close, now), Effect::None);
        assert_eq!(fixed.current_index(), 0);
    }

    #[test]
    fn f11_requests_fullscreen_toggle() {
        let now = Instant::now();
        let mut state = viewer(false, now);
        assert_eq!(
            state.handle_key(&key(Named::F11), now),
            Effect::ToggleFullscreen
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let now = Instant::now();
        let mut state = viewer(true, now);
        let effect = state.handle_key(&keyboard::Key::Character("a".into()), now);
        assert_eq!(effect, Effect::None);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn swipe_left_advances_the_book() {
        let mut now = Instant::now();
        let mut state = viewer(true, now);
        let finger = touch::Finger(7);

        state.handle_touch(
            touch::Event::FingerPressed {
                id: finger,
                position: Point::new(300.0, 100.0),
            },
            now,
        );
        state.handle_touch(
            touch::Event::FingerMoved {
                id: finger,
                position: Point::new(200.0, 110.0),
            },
            now,
        );
        state.handle_touch(
            touch::Event::FingerLifted {
                id: finger,
                position: Point::new(200.0, 110.0),
            },
            now,
        );
        assert!(state.is_transitioning());

        now += flip();
        state.handle_message_at(Message::Tick(now), now);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn short_swipe_does_not_navigate() {
        let now = Instant::now();
        let mut state = viewer(true, now);
        let finger = touch::Finger(1);
        for event in [
            touch::Event::FingerPressed {
                id: finger,
                position: Point::new(200.0, 0.0),
            },
            touch::Event::FingerMoved {
                id: finger,
                position: Point::new(180.0, 0.0),
            },
            touch::Event::FingerLifted {
                id: finger,
                position: Point::new(180.0, 0.0),
            },
        ] {
            state.handle_touch(event, now);
        }
        assert!(!state.is_transitioning());
    }

    #[test]
    fn last_page_has_no_preview() {
        let mut now = Instant::now();
        let mut state = viewer(true, now);
        state.handle_message_at(Message::JumpTo(7), now);
        now += flip();
        state.handle_message_at(Message::Tick(now), now);

        assert_eq!(state.current_index(), 7);
        assert_eq!(state.faces().back, None);
    }

    #[test]
    fn controls_hide_on_tick_and_return_on_cursor_move() {
        let start = Instant::now();
        let mut state = viewer(true, start);
        let later = start + Settings::default().controls_timeout.as_duration();

        state.handle_message_at(Message::Tick(later), later);
        assert!(!state.controls_visible());

        state.handle_message_at(
            Message::RawEvent {
                window: window::Id::unique(),
                event: event::Event::Mouse(mouse::Event::CursorMoved {
                    position: Point::new(10.0, 10.0),
                }),
            },
            later,
        );
        assert!(state.controls_visible());
    }

    #[test]
    fn wanted_pages_lists_faces_then_neighbours() {
        let mut now = Instant::now();
        let mut state = viewer(true, now);
        state.handle_message_at(Message::JumpTo(4), now);
        now += flip();
        state.handle_message_at(Message::Tick(now), now);

        let sample = Catalog::sample();
        let ids: Vec<&str> = state.wanted_pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                sample.pages[4].id.as_str(),
                sample.pages[5].id.as_str(),
                sample.pages[3].id.as_str()
            ]
        );
    }

    #[test]
    fn empty_book_is_inert() {
        let now = Instant::now();
        let mut state = State::new(Vec::new(), "Empty", true, Settings::default(), now);
        state.handle_key(&key(Named::ArrowRight), now);
        state.handle_message_at(Message::JumpTo(0), now);
        assert!(!state.is_transitioning());
        assert_eq!(state.current_index(), 0);
        assert!(state.wanted_pages().is_empty());
        assert!(!state.shows_indicators());
    }

    #[test]
    fn single_page_book_still_shows_its_dot() {
        let now = Instant::now();
        let mut pages = Catalog::sample().pages;
        pages.truncate(1);
        let state = State::new(pages, "Single", true, Settings::default(), now);
        assert!(state.shows_indicators());
        assert!(!state.navigation.can_advance());
    }

    #[test]
    fn settings_from_config_clamp_values() {
        let config = ViewerConfig {
            flip_duration_ms: Some(1),
            controls_timeout_secs: Some(500),
            swipe_threshold: Some(80.0),
            fullscreen: None,
            prefetch_radius: Some(99),
        };
        let settings = Settings::from_config(&config);
        assert_eq!(
            settings.flip_duration,
            FlipDuration::from_millis(crate::config::MIN_FLIP_DURATION_MS)
        );
        assert_eq!(settings.controls_timeout.value(), 30);
        assert_eq!(settings.swipe_threshold.value(), 80.0);
        assert_eq!(settings.prefetch_radius, MAX_PREFETCH_RADIUS);
    }
}
