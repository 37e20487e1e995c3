// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::{flipbook, gallery};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub catalog_fallback: bool,
    pub images: &'a ImageCache,
    pub viewer: Option<&'a flipbook::State>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.viewer) {
        (Screen::Viewer, Some(viewer)) => viewer
            .view(flipbook::ViewEnv {
                i18n: ctx.i18n,
                images: ctx.images,
            })
            .map(Message::Viewer),
        _ => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            images: ctx.images,
            catalog_fallback: ctx.catalog_fallback,
        })
        .map(Message::Gallery),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
