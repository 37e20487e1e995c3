// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application shell.
//!
//! The shell owns the catalog, the image cache and, while it is open, the
//! flip book state. Handlers translate component effects into screen
//! switches, window mode changes and image loads.

use super::{Message, Screen};
use crate::catalog::{Catalog, Page};
use crate::error::Error;
use crate::media::{self, ImageCache, ImageData, ImageStatus};
use crate::ui::{flipbook, gallery};
use iced::{event, keyboard, window, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub catalog: &'a mut Catalog,
    pub catalog_fallback: &'a mut bool,
    pub images: &'a mut ImageCache,
    pub viewer: &'a mut Option<flipbook::State>,
    pub viewer_settings: flipbook::Settings,
    pub fullscreen_on_open: bool,
    pub open_after_catalog: &'a mut bool,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
}

/// Handles gallery messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: &gallery::Message,
) -> Task<Message> {
    match gallery::update(message) {
        gallery::Event::OpenViewer => open_viewer(ctx),
        gallery::Event::None => Task::none(),
    }
}

/// Handles flip book messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: flipbook::Message,
) -> Task<Message> {
    // A viewer opened from the command line learns the window id late.
    let mut pending_fullscreen = Task::none();
    if let flipbook::Message::RawEvent { window, .. } = &message {
        let first_contact = ctx.window_id.replace(*window).is_none();
        if first_contact && ctx.fullscreen_on_open && ctx.viewer.is_some() {
            pending_fullscreen = update_fullscreen_mode(ctx.fullscreen, Some(window), true);
        }
    }

    let Some(viewer) = ctx.viewer.as_mut() else {
        return Task::none();
    };

    let task = match viewer.handle_message(message) {
        flipbook::Effect::Close => close_viewer(ctx),
        flipbook::Effect::ToggleFullscreen => {
            let desired = !*ctx.fullscreen;
            update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), desired)
        }
        flipbook::Effect::None => request_viewer_images(ctx),
    };
    Task::batch([pending_fullscreen, task])
}

/// Forwards the periodic tick to the open flip book.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let Some(viewer) = ctx.viewer.as_mut() else {
        return Task::none();
    };
    let was_flipping = viewer.is_transitioning();
    viewer.handle_message(flipbook::Message::Tick(now));

    if was_flipping && !viewer.is_transitioning() {
        request_viewer_images(ctx)
    } else {
        Task::none()
    }
}

/// Handles native events received on the gallery screen.
pub fn handle_window_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: &event::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::F11),
            ..
        }) => {
            let desired = !*ctx.fullscreen;
            update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), desired)
        }
        _ => Task::none(),
    }
}

/// Stores a finished image load, unless the cache stopped waiting for it.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    id: String,
    generation: u64,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if !ctx.images.awaits(&id, generation) {
        tracing::debug!(%id, "dropping stale image result");
        return Task::none();
    }

    match result {
        Ok(data) => ctx.images.insert(id, data),
        Err(err) => {
            tracing::warn!(%id, %err, "page image failed to load");
            ctx.images.mark_failed(id);
        }
    }
    Task::none()
}

/// Installs the configured catalog, or keeps the sample when it failed.
pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Catalog, Error>,
) -> Task<Message> {
    let replaced = result.is_ok();
    match result {
        Ok(catalog) => {
            tracing::info!(
                project = %catalog.project_name,
                pages = catalog.len(),
                "catalog ready"
            );
            *ctx.catalog = catalog;
            *ctx.catalog_fallback = false;
            ctx.images.clear();
        }
        Err(err) => {
            tracing::warn!(%err, "catalog unavailable, using the sample book");
            *ctx.catalog_fallback = true;
        }
    }

    // A viewer opened on the sample while loading is remounted on the new book.
    let remount = replaced && ctx.viewer.is_some();
    if std::mem::take(ctx.open_after_catalog) || remount {
        open_viewer(ctx)
    } else {
        request_gallery_images(ctx)
    }
}

/// Mounts a fresh flip book over the current catalog.
pub fn open_viewer(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.viewer = Some(flipbook::State::new(
        ctx.catalog.pages.clone(),
        ctx.catalog.project_name.clone(),
        true,
        ctx.viewer_settings,
        Instant::now(),
    ));
    *ctx.screen = Screen::Viewer;
    tracing::debug!(pages = ctx.catalog.len(), "viewer opened");

    let fullscreen = if ctx.fullscreen_on_open {
        update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), true)
    } else {
        Task::none()
    };
    Task::batch([request_viewer_images(ctx), fullscreen])
}

/// Unmounts the flip book. Dropping its state cancels its timers.
fn close_viewer(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.viewer = None;
    *ctx.screen = Screen::Gallery;
    tracing::debug!("viewer closed");

    let windowed = if ctx.fullscreen_on_open {
        update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), false)
    } else {
        Task::none()
    };
    Task::batch([request_gallery_images(ctx), windowed])
}

/// Starts loads for the preview tiles.
pub fn request_gallery_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    request_images(ctx.images, gallery::preview_pages(ctx.catalog))
}

fn request_viewer_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.viewer.as_ref() {
        Some(viewer) => request_images(ctx.images, viewer.wanted_pages()),
        None => Task::none(),
    }
}

/// Starts a load for every page the cache knows nothing about and refreshes
/// the recency of the others.
fn request_images<'p>(
    images: &mut ImageCache,
    pages: impl IntoIterator<Item = &'p Page>,
) -> Task<Message> {
    let generation = images.generation();
    let tasks: Vec<Task<Message>> = pages
        .into_iter()
        .filter_map(|page| {
            if images.begin_load(&page.id) {
                let id = page.id.clone();
                let source = page.source();
                tracing::debug!(%id, %source, "loading page image");
                Some(Task::perform(media::load_image(source), move |result| {
                    Message::ImageLoaded {
                        id,
                        generation,
                        result,
                    }
                }))
            } else {
                if matches!(images.status(&page.id), ImageStatus::Ready(_)) {
                    images.touch(&page.id);
                }
                None
            }
        })
        .collect();

    Task::batch(tasks)
}

/// Updates fullscreen mode to the desired state.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}
