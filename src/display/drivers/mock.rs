/*
 *  display/drivers/mock.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Recording canvas for testing without a framebuffer
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
use embedded_graphics::primitives::Rectangle;

use crate::display::canvas::{Canvas, TextSink};
use crate::display::color::Color;

/// One primitive as the face issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rectangle, color: Color },
    FillPolygon { points: Vec<Point>, color: Color },
    StrokePolygon { points: Vec<Point>, color: Color },
    FillCircle { center: Point, radius: u32, color: Color },
    StrokeCircle { center: Point, radius: u32, color: Color },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::FillPolygon { color, .. }
            | DrawCommand::StrokePolygon { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::StrokeCircle { color, .. } => *color,
        }
    }
}

/// Mock canvas
///
/// Records every primitive in call order instead of rasterising, so tests
/// can check layering and colors exactly. Used by the unit tests and by the
/// integration suite under `tests/`.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    bounds: Rectangle,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::new(width, height)),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    type Error = core::convert::Infallible;

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::StrokePolygon { points: points.to_vec(), color });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: u32, color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color });
        Ok(())
    }
}

/// Text sink that keeps every string it was handed
#[derive(Debug, Default, Clone)]
pub struct RecordingText {
    pub history: Vec<String>,
}

impl RecordingText {
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl TextSink for RecordingText {
    fn set_text(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}
