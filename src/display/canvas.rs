/*
 *  display/canvas.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Drawing surface abstraction the face renders through
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

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::display::color::Color;
use crate::draw;

/// Minimal drawing surface the watchface needs
///
/// Every primitive takes its color explicitly; the "current color" state
/// lives in [`GraphicsContext`], not here. Drawing with [`Color::Clear`]
/// must leave the surface untouched.
pub trait Canvas {
    type Error;

    /// Drawable area, top-left normally at the origin
    fn bounds(&self) -> Rectangle;

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), Self::Error>;

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error>;

    fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), Self::Error>;

    fn stroke_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), Self::Error>;

    fn center(&self) -> Point {
        center_of(&self.bounds())
    }
}

/// Pivot point of a rectangle: `top_left + size / 2`. For even sizes this is
/// one pixel right/below of `Rectangle::center`.
pub fn center_of(bounds: &Rectangle) -> Point {
    bounds.top_left + Point::new((bounds.size.width / 2) as i32, (bounds.size.height / 2) as i32)
}

/// Receives the formatted date each tick
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// Canvas plus the current fill and stroke colors.
///
/// Colors stick until changed, so a draw that doesn't set one reuses
/// whatever the previous draw left behind.
pub struct GraphicsContext<'a, C: Canvas> {
    canvas: &'a mut C,
    fill: Color,
    stroke: Color,
}

impl<'a, C: Canvas> GraphicsContext<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        Self { canvas, fill: Color::Black, stroke: Color::Black }
    }

    pub fn fill_color(&self) -> Color { self.fill }
    pub fn stroke_color(&self) -> Color { self.stroke }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    pub fn fill_rect(&mut self, rect: Rectangle) -> Result<(), C::Error> {
        self.canvas.fill_rect(rect, self.fill)
    }

    pub fn fill_path(&mut self, points: &[Point]) -> Result<(), C::Error> {
        self.canvas.fill_polygon(points, self.fill)
    }

    pub fn draw_path_outline(&mut self, points: &[Point]) -> Result<(), C::Error> {
        self.canvas.stroke_polygon(points, self.stroke)
    }

    pub fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), C::Error> {
        self.canvas.fill_circle(center, radius, self.fill)
    }

    pub fn draw_circle(&mut self, center: Point, radius: u32) -> Result<(), C::Error> {
        self.canvas.stroke_circle(center, radius, self.stroke)
    }
}

/// [`Canvas`] over any 16-bit embedded-graphics target
pub struct TargetCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> TargetCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Canvas for TargetCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn bounds(&self) -> Rectangle {
        self.target.bounding_box()
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), Self::Error> {
        match color.to_rgb565() {
            Some(c) => self.target.fill_solid(&rect, c),
            None => Ok(()),
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error> {
        match color.to_rgb565() {
            Some(c) => draw::fill_polygon(&mut *self.target, points, c),
            None => Ok(()),
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error> {
        match color.to_rgb565() {
            Some(c) => draw::draw_polygon_outline(&mut *self.target, points, c),
            None => Ok(()),
        }
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), Self::Error> {
        match color.to_rgb565() {
            Some(c) => draw::fill_circle(&mut *self.target, center, radius, c),
            None => Ok(()),
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), Self::Error> {
        match color.to_rgb565() {
            Some(c) => draw::draw_circle(&mut *self.target, center, radius, c),
            None => Ok(()),
        }
    }
}
