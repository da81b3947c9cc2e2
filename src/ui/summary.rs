// SPDX-License-Identifier: MPL-2.0
//! Summary view: count of liked cats, gallery in encounter order, restart.

use crate::app::Message;
use crate::deck::Deck;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length};

const GALLERY_COLUMNS: usize = 3;

pub fn view<'a>(deck: &'a Deck, i18n: &I18n) -> Element<'a, Message> {
    let liked = deck.accepted_count();
    let total = deck.len();

    let headline = if liked == 0 {
        i18n.tr("summary-empty")
    } else {
        i18n.tr_with_args(
            "summary-count",
            &[("count", &liked.to_string()), ("total", &total.to_string())],
        )
    };

    let headline = Text::new(headline)
        .size(typography::TITLE_MD)
        .color(palette::WHITE)
        .align_x(alignment::Horizontal::Center);

    let restart = button(Text::new(i18n.tr("summary-restart")).size(typography::BODY))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::Restart);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(headline);

    if liked > 0 {
        content = content.push(
            scrollable(gallery(deck))
                .width(Length::Shrink)
                .height(Length::Fill),
        );
    }

    content = content.push(restart);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Fixed-width grid of liked cats, encounter order, row-major.
fn gallery(deck: &Deck) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::SM);
    let mut row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;

    for card in deck.accepted() {
        if in_row == GALLERY_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
        row = row.push(
            image(card.image.handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL)),
        );
        in_row += 1;
    }

    grid.push(row).into()
}
