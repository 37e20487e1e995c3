// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: hero, preview grid and feature highlights.
//!
//! The screen is stateless. The call to action and every preview tile ask the
//! application to open the flip book.

use crate::catalog::{Catalog, Page};
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageStatus};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, scrollable, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};

/// Number of pages shown in the preview grid.
pub const PREVIEW_COUNT: usize = 8;

/// Tiles per grid row.
const GRID_COLUMNS: usize = 4;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub images: &'a ImageCache,
    /// Shown above the hero when the configured catalog could not be loaded.
    pub catalog_fallback: bool,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    OpenViewer,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenViewer,
}

/// Process a gallery message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenViewer => Event::OpenViewer,
    }
}

/// Pages shown as preview tiles.
#[must_use]
pub fn preview_pages(catalog: &Catalog) -> &[Page] {
    &catalog.pages[..catalog.pages.len().min(PREVIEW_COUNT)]
}

/// Render the gallery screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);

    if ctx.catalog_fallback {
        content = content.push(
            Container::new(
                Text::new(ctx.i18n.tr("gallery-catalog-fallback"))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .padding(spacing::SM)
            .style(styles::container::panel),
        );
    }

    content = content
        .push(build_hero(&ctx))
        .push(build_preview(&ctx))
        .push(build_features(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cta = button(Text::new(ctx.i18n.tr("gallery-cta")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::OpenViewer);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-hero-title")).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("gallery-hero-subtitle")).size(typography::BODY_LG))
        .push(Text::new(ctx.catalog.project_name.as_str()).size(typography::TITLE_MD))
        .push(cta)
        .into()
}

fn section_heading<'a>(title: String, subtitle: String) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(Text::new(subtitle).size(typography::BODY))
}

fn build_preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = preview_pages(ctx.catalog)
        .iter()
        .enumerate()
        .map(|(index, page)| build_tile(ctx, index, page))
        .collect();

    let mut grid = Column::new().spacing(spacing::LG).align_x(Horizontal::Center);
    let mut tiles = tiles.into_iter().peekable();
    while tiles.peek().is_some() {
        let row = tiles
            .by_ref()
            .take(GRID_COLUMNS)
            .fold(Row::new().spacing(spacing::LG), |row, tile| row.push(tile));
        grid = grid.push(row);
    }

    section_heading(
        ctx.i18n.tr("gallery-preview-title"),
        ctx.i18n.tr("gallery-preview-subtitle"),
    )
    .spacing(spacing::LG)
    .push(grid)
    .into()
}

fn build_tile<'a>(ctx: &ViewContext<'a>, index: usize, page: &'a Page) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match ctx.images.status(&page.id) {
        ImageStatus::Ready(data) => image(data.thumbnail.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        status => {
            let key = if matches!(status, ImageStatus::Failed) {
                "viewer-image-broken"
            } else {
                "viewer-image-loading"
            };
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::TILE_HEIGHT))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        }
    };

    let number = (index + 1).to_string();
    let mut label = Column::new().spacing(spacing::XXS).padding(spacing::SM);
    if let Some(title) = page.title.as_deref() {
        label = label.push(Text::new(title).size(typography::BODY));
    }
    label = label.push(
        Text::new(
            ctx.i18n
                .tr_with_args("gallery-tile-page", &[("number", number.as_str())]),
        )
        .size(typography::CAPTION),
    );

    button(Column::new().push(thumbnail).push(label))
        .width(Length::Fixed(sizing::TILE_WIDTH))
        .padding(0.0)
        .style(styles::button::tile)
        .on_press(Message::OpenViewer)
        .into()
}

fn build_features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ["flips", "fullscreen", "navigation"]
        .into_iter()
        .fold(Row::new().spacing(spacing::LG), |row, feature| {
            row.push(build_feature_card(ctx, feature))
        });

    section_heading(
        ctx.i18n.tr("gallery-features-title"),
        ctx.i18n.tr("gallery-features-subtitle"),
    )
    .spacing(spacing::LG)
    .push(cards)
    .push(Space::new().height(Length::Fixed(spacing::XL)))
    .into()
}

fn build_feature_card<'a>(ctx: &ViewContext<'a>, feature: &str) -> Element<'a, Message> {
    let title = ctx.i18n.tr(&format!("gallery-feature-{feature}-title"));
    let body = ctx.i18n.tr(&format!("gallery-feature-{feature}-body"));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(Text::new(body).size(typography::BODY)),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
