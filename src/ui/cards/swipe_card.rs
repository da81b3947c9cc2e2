// SPDX-License-Identifier: MPL-2.0
//! Canvas program for the topmost, interactive card.
//!
//! Translates raw mouse events into swipe messages and draws the card with
//! the gesture transform applied: horizontal translation, proportional tilt,
//! opacity fade, and the LIKE/NOPE stamps.

use crate::app::Message;
use crate::deck::Card;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::CardTransform;
use iced::widget::canvas::{self, Frame, Geometry, Path, Text};
use iced::widget::image;
use iced::{mouse, Color, Point, Radians, Rectangle, Renderer, Size, Theme};

pub struct SwipeCard {
    handle: image::Handle,
    image_width: u32,
    image_height: u32,
    transform: CardTransform,
    dragging: bool,
    like: (String, f32),
    nope: (String, f32),
}

impl SwipeCard {
    #[must_use]
    pub fn new(
        card: &Card,
        transform: CardTransform,
        dragging: bool,
        like: (String, f32),
        nope: (String, f32),
    ) -> Self {
        Self {
            handle: card.image.handle.clone(),
            image_width: card.image.width,
            image_height: card.image.height,
            transform,
            dragging,
            like,
            nope,
        }
    }
}

impl canvas::Program<Message> for SwipeCard {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                // Primary button only, and only inside the card rectangle.
                if let (Some(global), Some(local)) = (cursor.position(), cursor.position_in(bounds))
                {
                    if card_rect(bounds.size()).contains(local) {
                        return Some(
                            Action::publish(Message::CardPressed(global.x)).and_capture(),
                        );
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.dragging {
                    return Some(Action::publish(Message::CardMoved(position.x)).and_capture());
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if self.dragging {
                    return Some(Action::publish(Message::CardReleased).and_capture());
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let neutral = card_rect(bounds.size());
        let rect = Rectangle {
            x: neutral.x + self.transform.translation,
            ..neutral
        };

        // Card base behind the photo.
        let base = Path::rectangle(rect.position(), rect.size());
        frame.fill(
            &base,
            Color {
                a: self.transform.opacity,
                ..palette::GRAY_900
            },
        );

        let photo = fit_rect(self.image_width, self.image_height, inset(rect, spacing::XS));
        frame.draw_image(
            photo,
            canvas::Image::new(self.handle.clone())
                .rotation(Radians(self.transform.rotation.to_radians()))
                .opacity(self.transform.opacity),
        );

        let (like_label, like_opacity) = &self.like;
        if *like_opacity > 0.0 {
            frame.fill_text(Text {
                content: like_label.clone(),
                position: Point::new(rect.x + spacing::LG, rect.y + spacing::LG),
                color: Color {
                    a: *like_opacity,
                    ..palette::LIKE_500
                },
                size: typography::STAMP.into(),
                ..Text::default()
            });
        }

        let (nope_label, nope_opacity) = &self.nope;
        if *nope_opacity > 0.0 {
            // Right-aligned by a rough glyph-width estimate; canvas text has
            // no measured layout.
            let estimated = nope_label.chars().count() as f32 * typography::STAMP * 0.62;
            frame.fill_text(Text {
                content: nope_label.clone(),
                position: Point::new(
                    rect.x + rect.width - spacing::LG - estimated,
                    rect.y + spacing::LG,
                ),
                color: Color {
                    a: *nope_opacity,
                    ..palette::NOPE_500
                },
                size: typography::STAMP.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(local) if card_rect(bounds.size()).contains(local) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}

/// Neutral card rectangle, centered in the canvas and clamped to its size.
fn card_rect(canvas: Size) -> Rectangle {
    let width = sizing::CARD_WIDTH.min(canvas.width);
    let height = sizing::CARD_HEIGHT.min(canvas.height);
    Rectangle {
        x: (canvas.width - width) / 2.0,
        y: (canvas.height - height) / 2.0,
        width,
        height,
    }
}

fn inset(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle {
        x: rect.x + amount,
        y: rect.y + amount,
        width: (rect.width - 2.0 * amount).max(0.0),
        height: (rect.height - 2.0 * amount).max(0.0),
    }
}

/// Largest rectangle with the photo's aspect ratio centered in `area`
/// (ContentFit::Contain).
fn fit_rect(image_width: u32, image_height: u32, area: Rectangle) -> Rectangle {
    if image_width == 0 || image_height == 0 {
        return area;
    }
    let image_aspect = image_width as f32 / image_height as f32;
    let area_aspect = area.width / area.height;

    let (width, height) = if image_aspect > area_aspect {
        (area.width, area.width / image_aspect)
    } else {
        (area.height * image_aspect, area.height)
    };

    Rectangle {
        x: area.x + (area.width - width) / 2.0,
        y: area.y + (area.height - height) / 2.0,
        width,
        height,
    }
}
