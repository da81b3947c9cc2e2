// SPDX-License-Identifier: MPL-2.0
//! Loading indicator: a ring of dots with a rotating brightness phase.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const DOTS: usize = 8;
const DOT_RADIUS: f32 = 3.5;

/// Canvas program drawing the dot wheel. `phase` advances with the tick
/// subscription while a batch is loading.
pub struct LoadingWheel {
    color: Color,
    phase: f32,
}

impl LoadingWheel {
    #[must_use]
    pub fn new(color: Color, phase: f32) -> Self {
        Self { color, phase }
    }

    /// Creates a Canvas widget from this wheel.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingWheel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let ring = frame.width().min(frame.height()) / 2.0 - DOT_RADIUS;

        for i in 0..DOTS {
            let fraction = i as f32 / DOTS as f32;
            let angle = fraction * TAU - self.phase;
            let position = Point::new(
                center.x + ring * angle.cos(),
                center.y + ring * angle.sin(),
            );
            // Dots trail off behind the leading one.
            let alpha = 0.2 + 0.8 * fraction;
            let dot = Path::circle(position, DOT_RADIUS);
            frame.fill(
                &dot,
                Color {
                    a: alpha,
                    ..self.color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
