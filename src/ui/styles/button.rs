// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Round translucent buttons floating over the page (arrows, close).
///
/// Disabled buttons fade out almost entirely, so an arrow at either end of
/// the book reads as unavailable.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_alpha) = match status {
            button::Status::Hovered => (alpha_hover, 1.0),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, 1.0),
            button::Status::Disabled => (opacity::OVERLAY_SUBTLE, opacity::OVERLAY_SUBTLE),
            button::Status::Active => (alpha_normal, 1.0),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: Color {
                a: text_alpha,
                ..text_color
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Page indicator dot. The current page is drawn as a wider pill.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else {
            match status {
                button::Status::Hovered => opacity::OVERLAY_HOVER,
                _ => opacity::OVERLAY_MEDIUM,
            }
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable preview tile on the gallery grid.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (border_color, elevation) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_500, shadow::LG),
        _ => (palette.background.strong.color, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn disabled_overlay_button_fades_text() {
        let style = overlay(WHITE, 0.5, 0.8)(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
    }

    #[test]
    fn active_dot_is_opaque() {
        let active = dot(true)(&Theme::Dark, button::Status::Active);
        let inactive = dot(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(active.background, inactive.background);
    }
}
