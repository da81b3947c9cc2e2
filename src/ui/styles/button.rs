// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, border: Color, hovered: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(base)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if hovered { shadow::MD } else { shadow::SM },
        snap: true,
    }
}

/// Style for the accept ("Like") button.
pub fn accept(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::LIKE_500, palette::LIKE_600, false)
        }
        button::Status::Hovered => filled(palette::LIKE_600, palette::LIKE_600, true),
        button::Status::Disabled => disabled(),
    }
}

/// Style for the reject ("Nope") button.
pub fn reject(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::NOPE_500, palette::NOPE_600, false)
        }
        button::Status::Hovered => filled(palette::NOPE_600, palette::NOPE_600, true),
        button::Status::Disabled => disabled(),
    }
}

/// Style for the restart button on the summary screen.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, palette::PRIMARY_600, false)
        }
        button::Status::Hovered => filled(palette::PRIMARY_400, palette::PRIMARY_500, true),
        button::Status::Disabled => disabled(),
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: iced::Shadow {
            color: palette::BLACK,
            offset: iced::Vector::ZERO,
            blur_radius: 0.0,
        },
        snap: true,
    }
}
