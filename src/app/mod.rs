// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! flip book.
//!
//! The `App` struct wires together the catalog, the shared image cache,
//! localization and the viewer, and translates messages into side effects
//! like image loading or window mode changes.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{self, Catalog};
use crate::config::{self, DEFAULT_CACHE_MAX_IMAGES, DEFAULT_CACHE_MAX_MEGABYTES};
use crate::i18n::fluent::I18n;
use crate::media::{CacheLimits, ImageCache, Source};
use crate::ui::flipbook;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: Catalog,
    /// The configured catalog failed and the sample is shown instead.
    catalog_fallback: bool,
    /// `--open` was given while the catalog was still loading.
    open_after_catalog: bool,
    images: ImageCache,
    viewer: Option<flipbook::State>,
    viewer_settings: flipbook::Settings,
    fullscreen_on_open: bool,
    fullscreen: bool,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("pages", &self.catalog.len())
            .field("viewer_open", &self.viewer.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!(message = %i18n.tr(&key), "config not loaded");
        }

        let limits = CacheLimits::new(
            config.cache.max_images.unwrap_or(DEFAULT_CACHE_MAX_IMAGES),
            config
                .cache
                .max_megabytes
                .unwrap_or(DEFAULT_CACHE_MAX_MEGABYTES),
        );

        let catalog_source = flags.catalog.or(config.catalog.source.clone());

        let mut app = App {
            i18n,
            screen: Screen::Gallery,
            catalog: Catalog::sample(),
            catalog_fallback: false,
            open_after_catalog: false,
            images: ImageCache::new(limits),
            viewer: None,
            viewer_settings: flipbook::Settings::from_config(&config.viewer),
            fullscreen_on_open: config.viewer.fullscreen.unwrap_or(true),
            fullscreen: false,
            window_id: None,
            theme_mode: config.general.theme_mode,
        };

        let task = if let Some(reference) = catalog_source {
            let source = Source::parse(&reference);
            tracing::info!(%source, "loading catalog");
            app.open_after_catalog = flags.open_viewer;
            Task::perform(catalog::load(source), Message::CatalogLoaded)
        } else if flags.open_viewer {
            update::open_viewer(&mut app.update_context())
        } else {
            update::request_gallery_images(&mut app.update_context())
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            catalog: &mut self.catalog,
            catalog_fallback: &mut self.catalog_fallback,
            images: &mut self.images,
            viewer: &mut self.viewer,
            viewer_settings: self.viewer_settings,
            fullscreen_on_open: self.fullscreen_on_open,
            open_after_catalog: &mut self.open_after_catalog,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Viewer => format!("{} - {app_name}", self.catalog.project_name),
            Screen::Gallery => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.viewer.as_ref());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, &gallery_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowEvent { window, event } => {
                update::handle_window_event(&mut ctx, window, &event)
            }
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::ImageLoaded {
                id,
                generation,
                result,
            } => update::handle_image_loaded(&mut ctx, id, generation, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            catalog: &self.catalog,
            catalog_fallback: self.catalog_fallback,
            images: &self.images,
            viewer: self.viewer.as_ref(),
        })
    }
}
