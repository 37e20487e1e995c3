// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the active screen. The flip book receives
//! keyboard, pointer and touch input only while it is open; the gallery only
//! needs what the shell itself handles (window tracking and F11).

use super::{Message, Screen};
use crate::ui::flipbook;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick period while a page flip is animating.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick period while the viewer is idle; enough for the controls timeout.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Creates the appropriate event subscription based on the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, window_id| {
            let forward = match &event {
                // Swipes may start on top of a button, so touches are
                // forwarded even when a widget captured them.
                event::Event::Touch(_) => true,
                event::Event::Mouse(mouse::Event::CursorMoved { .. }) => true,
                event::Event::Window(window::Event::Opened { .. }) => true,
                event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                    status == event::Status::Ignored
                }
                _ => false,
            };

            forward.then(|| {
                Message::Viewer(flipbook::Message::RawEvent {
                    window: window_id,
                    event,
                })
            })
        }),
        Screen::Gallery => event::listen_with(|event, status, window_id| {
            let forward = match &event {
                event::Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) => {
                    true
                }
                event::Event::Mouse(mouse::Event::CursorEntered) => true,
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::F11),
                    ..
                }) => status == event::Status::Ignored,
                _ => false,
            };

            forward.then(|| Message::WindowEvent {
                window: window_id,
                event,
            })
        }),
    }
}

/// Creates the tick subscription. Ticks run only while the viewer is open,
/// faster while a page is turning.
pub fn create_tick_subscription(viewer: Option<&flipbook::State>) -> Subscription<Message> {
    match viewer {
        Some(viewer) if viewer.is_transitioning() => {
            time::every(ANIMATION_TICK).map(Message::Tick)
        }
        Some(_) => time::every(IDLE_TICK).map(Message::Tick),
        None => Subscription::none(),
    }
}
