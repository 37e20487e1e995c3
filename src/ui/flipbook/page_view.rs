// SPDX-License-Identifier: MPL-2.0
//! Page sheet rendering: the picture with its fold animation and the caption.
//!
//! A flip is drawn as a horizontal fold. During the first half the front face
//! narrows to nothing against its hinge, during the second half the back face
//! opens out from the same hinge.

use super::component::Message;
use super::navigation::{Faces, Transition};
use crate::catalog::Page;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageStatus};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, responsive, Column, Container, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Size,
};

/// Everything needed to draw the sheet for one frame.
#[derive(Clone, Copy)]
pub struct SheetModel<'a> {
    pub pages: &'a [Page],
    pub faces: Faces,
    pub transition: Option<Transition>,
    pub progress: Option<f32>,
    pub images: &'a ImageCache,
    pub i18n: &'a I18n,
}

/// The face visible in one animation frame and how far it is unfolded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldFrame {
    pub page: usize,
    /// Horizontal scale in `[0, 1]`.
    pub scale: f32,
    /// Edge the face is folded against.
    pub hinge: Horizontal,
}

/// Computes the visible face for the given flip progress.
#[must_use]
pub fn fold_frame(
    faces: Faces,
    transition: Option<Transition>,
    progress: Option<f32>,
) -> Option<FoldFrame> {
    let front = faces.front?;
    let (Some(transition), Some(progress)) = (transition, progress) else {
        return Some(FoldFrame {
            page: front,
            scale: 1.0,
            hinge: Horizontal::Center,
        });
    };

    // Forward flips turn around the left edge, backward ones around the right.
    let hinge = if transition.is_forward() {
        Horizontal::Left
    } else {
        Horizontal::Right
    };
    let progress = progress.clamp(0.0, 1.0);
    let frame = if progress < 0.5 {
        FoldFrame {
            page: transition.from,
            scale: 1.0 - progress * 2.0,
            hinge,
        }
    } else {
        FoldFrame {
            page: transition.to,
            scale: progress * 2.0 - 1.0,
            hinge,
        }
    };
    Some(frame)
}

/// Largest size with the image's aspect ratio that fits in `available`.
#[must_use]
pub fn contain_size(width: u32, height: u32, available: Size) -> Size {
    if width == 0 || height == 0 || available.width <= 0.0 || available.height <= 0.0 {
        return Size::ZERO;
    }
    let scale = (available.width / width as f32).min(available.height / height as f32);
    Size::new(width as f32 * scale, height as f32 * scale)
}

pub fn sheet<'a>(model: SheetModel<'a>) -> Element<'a, Message> {
    let Some(frame) = fold_frame(model.faces, model.transition, model.progress) else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };
    let Some(page) = model.pages.get(frame.page) else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };

    let picture = responsive(move |available: Size| picture(&model, page, frame, available));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(picture);
    if let Some(caption) = caption(page) {
        column = column.push(caption);
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::page_sheet)
        .into()
}

fn picture<'a>(
    model: &SheetModel<'a>,
    page: &'a Page,
    frame: FoldFrame,
    available: Size,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model.images.status(&page.id) {
        ImageStatus::Ready(data) => {
            let fitted = contain_size(data.width, data.height, available);
            image(data.handle.clone())
                .width(Length::Fixed(fitted.width * frame.scale))
                .height(Length::Fixed(fitted.height))
                .content_fit(ContentFit::Fill)
                .into()
        }
        ImageStatus::Loading | ImageStatus::Missing => placeholder(
            Column::new().push(Text::new(model.i18n.tr("viewer-image-loading"))),
            available,
            frame,
        ),
        ImageStatus::Failed => {
            let number = (frame.page + 1).to_string();
            placeholder(
                Column::new()
                    .spacing(spacing::XXS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(model.i18n.tr("viewer-image-broken")).size(typography::BODY_LG))
                    .push(
                        Text::new(
                            model
                                .i18n
                                .tr_with_args("viewer-page-alt", &[("number", number.as_str())]),
                        )
                        .size(typography::CAPTION),
                    ),
                available,
                frame,
            )
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(frame.hinge)
        .align_y(Vertical::Center)
        .into()
}

fn placeholder<'a>(
    label: Column<'a, Message>,
    available: Size,
    frame: FoldFrame,
) -> Element<'a, Message> {
    Container::new(label)
        .width(Length::Fixed(available.width * frame.scale))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true)
        .into()
}

/// Title and description bar. Pages without a title get no caption.
fn caption(page: &Page) -> Option<Element<'_, Message>> {
    let title = page.title.as_deref()?;

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_SM));
    if let Some(description) = page.description.as_deref() {
        column = column.push(Text::new(description).size(typography::BODY));
    }

    Some(
        Container::new(column)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .style(styles::container::overlay_bar)
            .into(),
    )
}
