// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Radians the arc advances per second.
pub const SPIN_SPEED: f32 = 1.5 * PI;

/// Ring with a rotating arc whose length breathes as it turns.
///
/// The spinner is stateless: callers own the phase and advance it with
/// [`advance_phase`].
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    phase: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, phase: f32) -> Self {
        Self {
            phase,
            color,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Start and sweep of the visible arc, in radians.
    fn arc_span(&self) -> (f32, f32) {
        let sweep = FRAC_PI_2 + (self.phase * 0.5).sin().abs() * PI;
        (self.phase - FRAC_PI_2, sweep)
    }
}

/// Advances a spinner phase by `delta` seconds, wrapping at a full turn.
#[must_use]
pub fn advance_phase(phase: f32, delta: f32) -> f32 {
    (phase + delta * SPIN_SPEED).rem_euclid(TAU * 2.0)
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
        let radius = frame.width().min(frame.height()) / 2.0 - 3.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(2.0).with_color(Color {
                a: 0.2,
                ..self.color
            }),
        );

        let (start, sweep) = self.arc_span();
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + sweep),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_after_two_turns() {
        let phase = advance_phase(TAU * 2.0 - 0.01, 1.0);
        assert!(phase >= 0.0 && phase < TAU * 2.0);
    }

    #[test]
    fn arc_never_closes_into_a_ring() {
        for step in 0..64 {
            #[allow(clippy::cast_precision_loss)]
            let spinner = AnimatedSpinner::new(Color::WHITE, step as f32 * 0.2);
            let (_, sweep) = spinner.arc_span();
            assert!(sweep >= FRAC_PI_2 && sweep < TAU);
        }
    }
}
