/*
 *  display/components/face.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Analog face: hand geometry, layering and the date label
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use chrono::NaiveDateTime;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info, log_enabled, Level};

use crate::clock::{ClockTime, DateFormat, HandAngles};
use crate::display::canvas::{center_of, Canvas, GraphicsContext, TextSink};
use crate::display::color::Color;
use crate::hands::{HandPath, HOUR_HAND, MINUTE_HAND, SECOND_HAND};
use crate::trig::angle_to_degrees;

/// Radius of the centre cap
pub const CAP_RADIUS: u32 = 5;

/// Anything the host paints between the solid fill and the hands,
/// typically the dial artwork.
pub trait Backdrop {
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error>;
}

/// No backdrop: the hands go straight over the solid fill
impl Backdrop for () {
    fn draw<C: Canvas>(&self, _canvas: &mut C) -> Result<(), C::Error> {
        Ok(())
    }
}

/// Analog watchface renderer
///
/// Owns the three hand paths for its whole life. Each call to
/// [`AnalogFace::render`] recomputes every angle from the time it is given,
/// nothing carries over from the previous tick.
#[derive(Debug)]
pub struct AnalogFace {
    hour_hand: HandPath,
    minute_hand: HandPath,
    second_hand: HandPath,
    compact: bool,
    date_format: DateFormat,
}

impl AnalogFace {
    /// Build the hand paths and park them on the centre of `bounds`.
    pub fn new(bounds: Rectangle, compact: bool) -> Self {
        let center = center_of(&bounds);
        let mut face = Self {
            hour_hand: HandPath::new(&HOUR_HAND),
            minute_hand: HandPath::new(&MINUTE_HAND),
            second_hand: HandPath::new(&SECOND_HAND),
            compact,
            date_format: DateFormat::for_display(compact),
        };
        for hand in face.hands_mut() {
            hand.move_to(center);
        }
        info!(
            "Analog face {}x{} pivot ({}, {}), {} layout",
            bounds.size.width,
            bounds.size.height,
            center.x,
            center.y,
            if compact { "compact" } else { "rectangular" }
        );
        face
    }

    pub fn is_compact(&self) -> bool { self.compact }
    pub fn date_format(&self) -> DateFormat { self.date_format }

    /// Hour, minute, second
    pub fn hands(&self) -> [&HandPath; 3] {
        [&self.hour_hand, &self.minute_hand, &self.second_hand]
    }

    fn hands_mut(&mut self) -> [&mut HandPath; 3] {
        [&mut self.hour_hand, &mut self.minute_hand, &mut self.second_hand]
    }

    /// Draw one frame with no backdrop.
    pub fn render<C, T>(&self, now: &NaiveDateTime, canvas: &mut C, text: &mut T) -> Result<HandAngles, C::Error>
    where
        C: Canvas,
        T: TextSink,
    {
        self.render_with_backdrop(now, canvas, text, &())
    }

    /// Draw one frame: solid white, backdrop, hands, centre cap. The date
    /// label goes to `text` for the host to place.
    pub fn render_with_backdrop<C, T, B>(
        &self,
        now: &NaiveDateTime,
        canvas: &mut C,
        text: &mut T,
        backdrop: &B,
    ) -> Result<HandAngles, C::Error>
    where
        C: Canvas,
        T: TextSink,
        B: Backdrop,
    {
        let bounds = canvas.bounds();
        let pivot = canvas.center();
        let angles = ClockTime::from_timelike(now).angles();

        {
            let mut ctx = GraphicsContext::new(canvas);
            ctx.set_fill_color(Color::White);
            ctx.fill_rect(bounds)?;
        }

        backdrop.draw(canvas)?;

        text.set_text(self.date_format.format(now).as_str());

        let mut ctx = GraphicsContext::new(canvas);
        self.draw_hands(&mut ctx, pivot, &angles)?;
        self.draw_cap(&mut ctx, pivot)?;

        if log_enabled!(Level::Debug) {
            debug!("tick {} {}", now.format("%H:%M:%S"), self.describe(&angles));
        }
        Ok(angles)
    }

    /// `hour=90.0 minute=0.0 second=0.0`, degrees clockwise from 12.
    pub fn describe(&self, angles: &HandAngles) -> String {
        [
            (&self.hour_hand, angles.hour),
            (&self.minute_hand, angles.minute),
            (&self.second_hand, angles.second),
        ]
        .iter()
        .map(|(hand, angle)| format!("{}={:.1}", hand.shape().name, angle_to_degrees(*angle)))
        .collect::<Vec<_>>()
        .join(" ")
    }

    fn draw_hands<C: Canvas>(
        &self,
        ctx: &mut GraphicsContext<'_, C>,
        pivot: Point,
        angles: &HandAngles,
    ) -> Result<(), C::Error> {
        let hour = self.hour_hand.posed(pivot, angles.hour).points();
        ctx.set_fill_color(Color::White);
        ctx.set_stroke_color(Color::Black);
        ctx.fill_path(&hour)?;
        ctx.draw_path_outline(&hour)?;

        // outline keeps the stroke color from the hour hand
        let minute = self.minute_hand.posed(pivot, angles.minute).points();
        ctx.set_fill_color(Color::White);
        ctx.fill_path(&minute)?;
        ctx.draw_path_outline(&minute)?;

        let second = self.second_hand.posed(pivot, angles.second).points();
        ctx.set_fill_color(Color::Red);
        ctx.fill_path(&second)?;
        ctx.set_stroke_color(Color::Red);
        ctx.draw_path_outline(&second)?;

        Ok(())
    }

    fn draw_cap<C: Canvas>(&self, ctx: &mut GraphicsContext<'_, C>, pivot: Point) -> Result<(), C::Error> {
        ctx.set_fill_color(Color::Black);
        ctx.fill_rect(Rectangle::new(pivot - Point::new(1, 1), Size::new(3, 3)))?;
        ctx.fill_circle(pivot, CAP_RADIUS)?;
        ctx.set_stroke_color(Color::White);
        ctx.draw_circle(pivot, CAP_RADIUS)
    }
}
