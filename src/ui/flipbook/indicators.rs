// SPDX-License-Identifier: MPL-2.0
//! Row of page indicator dots. Each dot jumps to its page.

use super::component::Message;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Row, Space};
use iced::{alignment::Vertical, Element, Length};

/// Width of the dot for page `index`.
#[must_use]
pub fn dot_width(index: usize, current: usize) -> f32 {
    if index == current {
        sizing::DOT_ACTIVE
    } else {
        sizing::DOT
    }
}

pub fn view<'a>(count: usize, current: usize) -> Element<'a, Message> {
    (0..count)
        .fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, index| {
                let active = index == current;
                row.push(
                    button(Space::new())
                        .width(Length::Fixed(dot_width(index, current)))
                        .height(Length::Fixed(sizing::DOT))
                        .padding(0.0)
                        .style(styles::button::dot(active))
                        .on_press_maybe((!active).then_some(Message::JumpTo(index))),
                )
            },
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_dot_is_wider() {
        assert!(dot_width(2, 2) > dot_width(1, 2));
        assert_eq!(dot_width(0, 2), sizing::DOT);
    }
}
