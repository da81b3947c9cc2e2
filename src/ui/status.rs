// SPDX-License-Identifier: MPL-2.0
//! Terminal status views: batch loading and whole-batch failure.

use crate::app::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::LoadingWheel;
use iced::widget::{container, Column, Text};
use iced::{alignment, Element, Length};

/// Shown while the batch fetch is in flight.
pub fn loading(i18n: &I18n, spinner_phase: f32) -> Element<'static, Message> {
    let wheel = LoadingWheel::new(palette::PRIMARY_400, spinner_phase).into_element();

    let text = Text::new(i18n.tr("status-loading"))
        .size(typography::BODY)
        .color(palette::GRAY_200);

    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(wheel)
            .push(text)
            .into(),
    )
}

/// Shown when the whole batch failed (zero cats fetched). Terminal: there is
/// no retry button, the user has to relaunch.
pub fn failed(i18n: &I18n) -> Element<'static, Message> {
    let text = Text::new(i18n.tr("load-failed"))
        .size(typography::BODY)
        .color(palette::NOPE_500)
        .align_x(alignment::Horizontal::Center);

    centered(text.into())
}

fn centered(content: Element<'static, Message>) -> Element<'static, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
