/*
 *  vframebuf.rs
 *
 *  clockface - hands on the dial
 *	(c) 2020-26 Stuart Hunter
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{PixelColor, Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use std::io::Write;

/// A runtime-sized framebuffer for embedded-graphics.
#[derive(Debug, Clone)]
pub struct VarFrameBuf<C: PixelColor> {
    buf: Vec<C>,
    w: usize,
    h: usize,
}

impl<C: PixelColor> VarFrameBuf<C> {
    pub fn new(width: u32, height: u32, fill: C) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![fill; w * h], w, h }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    pub fn as_slice(&self) -> &[C] { &self.buf }

    pub fn clear_color(&mut self, color: C) {
        self.buf.fill(color);
    }

    pub fn pixel(&self, p: Point) -> Option<C> {
        self.idx(p).map(|i| self.buf[i])
    }

    /// Map (x,y) to linear index; returns None if out of bounds
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl VarFrameBuf<Rgb565> {
    /// Binary PPM (P6), 8 bits per channel.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.w, self.h)?;
        let mut row = Vec::with_capacity(self.w * 3);
        for line in self.buf.chunks(self.w.max(1)) {
            row.clear();
            for &c in line {
                let rgb: Rgb888 = c.into();
                row.extend_from_slice(&[rgb.r(), rgb.g(), rgb.b()]);
            }
            out.write_all(&row)?;
        }
        out.flush()
    }
}

impl<C: PixelColor> OriginDimensions for VarFrameBuf<C> {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl<C: PixelColor> DrawTarget for VarFrameBuf<C> {
    type Color = C;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = self.idx(p) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clear_color(color);
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // colors are row-major over the whole area, clipped pixels still consume one
        for (p, c) in area.points().zip(colors) {
            if let Some(i) = self.idx(p) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // fast path for the scanline runs the polygon fill emits
        let clipped = area.intersection(&self.bounding_box());
        let Some(bottom_right) = clipped.bottom_right() else { return Ok(()) };
        let (x0, x1) = (clipped.top_left.x as usize, bottom_right.x as usize);
        for y in clipped.top_left.y as usize..=bottom_right.y as usize {
            let base = y * self.w;
            self.buf[base + x0..=base + x1].fill(color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;

    #[test]
    fn test_fill_solid_clips() {
        let mut fb = VarFrameBuf::new(8, 4, BinaryColor::Off);
        fb.fill_solid(&Rectangle::new(Point::new(-3, 1), Size::new(6, 10)), BinaryColor::On).unwrap();
        assert_eq!(fb.pixel(Point::new(0, 1)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(2, 3)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(3, 1)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(8, 0)), None);
    }

    #[test]
    fn test_fill_solid_fully_outside() {
        let mut fb = VarFrameBuf::new(8, 4, BinaryColor::Off);
        fb.fill_solid(&Rectangle::new(Point::new(20, 20), Size::new(3, 3)), BinaryColor::On).unwrap();
        assert!(fb.as_slice().iter().all(|&p| p == BinaryColor::Off));
    }

    #[test]
    fn test_fill_contiguous_keeps_row_order() {
        let mut fb = VarFrameBuf::new(4, 4, BinaryColor::Off);
        let colors = [BinaryColor::On, BinaryColor::Off, BinaryColor::Off, BinaryColor::On];
        // first column is off-screen
        fb.fill_contiguous(&Rectangle::new(Point::new(-1, 0), Size::new(2, 2)), colors).unwrap();
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(Point::new(0, 1)), Some(BinaryColor::On));
    }

    #[test]
    fn test_ppm_header_and_size() {
        let mut fb = VarFrameBuf::new(3, 2, Rgb565::BLACK);
        fb.draw_iter([Pixel(Point::new(0, 0), Rgb565::WHITE)]).unwrap();
        let mut out = Vec::new();
        fb.write_ppm(&mut out).unwrap();
        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 3 * 2 * 3);
        assert_eq!(&out[header.len()..header.len() + 3], &[255, 255, 255]);
        assert_eq!(&out[header.len() + 3..header.len() + 6], &[0, 0, 0]);
    }
}
