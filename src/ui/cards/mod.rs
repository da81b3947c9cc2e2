// SPDX-License-Identifier: MPL-2.0
//! Card stack view: one element per remaining card, the card at the cursor
//! rendered topmost by an interactive canvas, plus the accept/reject buttons.
//!
//! The stack is rebuilt from scratch on every update; with at most one batch
//! of cards there is nothing worth diffing.

mod swipe_card;

use crate::app::Message;
use crate::deck::Deck;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::{label_opacities, SwipeState};
use crate::ui::styles;
use iced::widget::{button, container, image, Canvas, Column, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;
use swipe_card::SwipeCard;

pub fn view<'a>(deck: &'a Deck, swipe: &SwipeState, i18n: &I18n) -> Element<'a, Message> {
    let status = Text::new(i18n.tr("status-ready"))
        .size(typography::BODY)
        .color(palette::GRAY_200);

    let transform = swipe.transform(Instant::now());
    let (like_opacity, nope_opacity) = if swipe.is_snapping_back() {
        (0.0, 0.0)
    } else {
        label_opacities(transform.translation)
    };

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    // Background cards, deepest first. They are inert; only the top card
    // gets gesture wiring.
    for card in deck.remaining().iter().skip(1).rev() {
        stack = stack.push(background_card(card));
    }

    if let Some(card) = deck.current() {
        let top = SwipeCard::new(
            card,
            transform,
            swipe.is_dragging(),
            (i18n.tr("label-like"), like_opacity),
            (i18n.tr("label-nope"), nope_opacity),
        );
        stack = stack.push(
            Canvas::new(top)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    let controls_enabled = deck.current().is_some() && swipe.is_idle();
    let nope_button = button(Text::new(i18n.tr("button-nope")).size(typography::BODY))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::reject)
        .on_press_maybe(controls_enabled.then_some(Message::Reject));
    let like_button = button(Text::new(i18n.tr("button-like")).size(typography::BODY))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::accept)
        .on_press_maybe(controls_enabled.then_some(Message::Accept));

    let controls = Row::new()
        .spacing(spacing::LG)
        .push(nope_button)
        .push(like_button);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(status)
        .push(stack)
        .push(controls);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn background_card(card: &crate::deck::Card) -> Element<'_, Message> {
    container(
        image(card.image.handle.clone())
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_HEIGHT)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
