/*
 *  display/components/text_layer.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Date label drawn over the hands
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

use arrayvec::ArrayString;
use embedded_graphics::mono_font::{ascii::FONT_9X18_BOLD, MonoFont};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_text::alignment::HorizontalAlignment;

use crate::clock::DATE_BUF_LEN;
use crate::display::canvas::TextSink;
use crate::display::color::Color;
use crate::draw::draw_text_align;

const DATE_FRAME_HEIGHT: u32 = 50;

/// Fixed-position label, the host end of [`TextSink`]
pub struct TextLayer {
    frame: Rectangle,
    align: HorizontalAlignment,
    color: Color,
    font: &'static MonoFont<'static>,
    text: ArrayString<DATE_BUF_LEN>,
}

impl TextLayer {
    pub fn new(frame: Rectangle, align: HorizontalAlignment, color: Color) -> Self {
        Self {
            frame,
            align,
            color,
            font: &FONT_9X18_BOLD,
            text: ArrayString::new(),
        }
    }

    /// Date label placement for the two display shapes: compact faces get a
    /// centred label low on the dial, rectangular ones a left-aligned label
    /// in the top corner.
    pub fn date_layer(width: u32, compact: bool, color: Color) -> Self {
        let (origin, align) = if compact {
            (Point::new(-30, 130), HorizontalAlignment::Center)
        } else {
            (Point::zero(), HorizontalAlignment::Left)
        };
        Self::new(Rectangle::new(origin, Size::new(width, DATE_FRAME_HEIGHT)), align, color)
    }

    pub fn text(&self) -> &str { &self.text }
    pub fn frame(&self) -> Rectangle { self.frame }
    pub fn alignment(&self) -> HorizontalAlignment { self.align }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.color.to_rgb565() {
            Some(c) if !self.text.is_empty() => {
                draw_text_align(target, &self.text, self.frame, self.align, self.font, c)
            }
            _ => Ok(()),
        }
    }
}

impl TextSink for TextLayer {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.try_push(ch).is_err() {
                break;
            }
        }
    }
}
