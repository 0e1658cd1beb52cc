/*
 *  display/components/dial.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Dial artwork drawn under the hands
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

use embedded_graphics::prelude::*;

use crate::display::canvas::Canvas;
use crate::display::color::Color;
use crate::display::components::face::Backdrop;
use crate::trig::{cos_lookup, degrees_to_angle, sin_lookup, TRIG_MAX_RATIO};

const HOUR_TICK_LEN: i32 = 4;
const QUARTER_TICK_LEN: i32 = 9;
const RIM_INSET: i32 = 3;

/// Plain dial: a filled panel with twelve hour ticks, longer at the
/// quarters.
#[derive(Debug, Clone)]
pub struct DialBackdrop {
    pub face_color: Color,
    pub tick_color: Color,
}

impl Default for DialBackdrop {
    fn default() -> Self {
        Self { face_color: Color::Slate, tick_color: Color::White }
    }
}

impl DialBackdrop {
    /// Tick endpoints (outer, inner) for each hour, 12 o'clock first.
    pub fn ticks(&self, pivot: Point, radius: i32) -> Vec<(Point, Point)> {
        (0..12)
            .map(|hour| {
                let angle = degrees_to_angle(hour * 30);
                let len = if hour % 3 == 0 { QUARTER_TICK_LEN } else { HOUR_TICK_LEN };
                (
                    polar(pivot, radius, angle),
                    polar(pivot, radius - len, angle),
                )
            })
            .collect()
    }
}

/// Point `r` out from `pivot`, 0 at 12 o'clock, clockwise.
fn polar(pivot: Point, r: i32, angle: i32) -> Point {
    pivot + Point::new(
        r * sin_lookup(angle) / TRIG_MAX_RATIO,
        -r * cos_lookup(angle) / TRIG_MAX_RATIO,
    )
}

impl Backdrop for DialBackdrop {
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let bounds = canvas.bounds();
        let pivot = canvas.center();
        let radius = (bounds.size.width.min(bounds.size.height) / 2) as i32 - RIM_INSET;

        canvas.fill_rect(bounds, self.face_color)?;
        if radius <= QUARTER_TICK_LEN {
            return Ok(());
        }
        for (outer, inner) in self.ticks(pivot, radius) {
            canvas.stroke_polygon(&[outer, inner], self.tick_color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::drivers::mock::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_ticks_on_the_axes() {
        let dial = DialBackdrop::default();
        let ticks = dial.ticks(Point::new(72, 84), 69);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], (Point::new(72, 15), Point::new(72, 24)));
        assert_eq!(ticks[3], (Point::new(141, 84), Point::new(132, 84)));
        assert_eq!(ticks[6], (Point::new(72, 153), Point::new(72, 144)));
        assert_eq!(ticks[9], (Point::new(3, 84), Point::new(12, 84)));
    }

    #[test]
    fn test_draws_panel_then_ticks() {
        let mut canvas = RecordingCanvas::new(144, 168);
        DialBackdrop::default().draw(&mut canvas).unwrap();
        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 13);
        assert_eq!(cmds[0].color(), Color::Slate);
        assert!(cmds[1..].iter().all(|c| matches!(c, DrawCommand::StrokePolygon { color: Color::White, .. })));
    }

    #[test]
    fn test_tiny_canvas_skips_ticks() {
        let mut canvas = RecordingCanvas::new(10, 10);
        DialBackdrop::default().draw(&mut canvas).unwrap();
        assert_eq!(canvas.commands().len(), 1);
    }
}
