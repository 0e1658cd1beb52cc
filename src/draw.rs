/*
 *  draw.rs
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

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
};

use embedded_text::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::TextBoxStyleBuilder,
    TextBox,
};

/// Even-odd scanline fill of a closed polygon, sampled at pixel centres.
/// Fewer than three points fills nothing.
pub fn fill_polygon<D>(target: &mut D, points: &[Point], color: D::Color) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    if points.len() < 3 {
        return Ok(());
    }

    let (min_y, max_y) = points
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for y in min_y..=max_y {
        let yc = y as f32 + 0.5;
        crossings.clear();

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (a.y as f32, b.y as f32);
            if (ay <= yc) != (by <= yc) {
                crossings.push(a.x as f32 + (yc - ay) * (b.x - a.x) as f32 / (by - ay));
            }
        }
        crossings.sort_by(|l, r| l.total_cmp(r));

        for span in crossings.chunks_exact(2) {
            let x0 = (span[0] - 0.5).ceil() as i32;
            let x1 = (span[1] - 0.5).ceil() as i32 - 1;
            if x1 >= x0 {
                let run = Rectangle::new(Point::new(x0, y), Size::new((x1 - x0 + 1) as u32, 1));
                target.fill_solid(&run, color)?;
            }
        }
    }
    Ok(())
}

/// One pixel outline, closing the last point back to the first.
pub fn draw_polygon_outline<D>(target: &mut D, points: &[Point], color: D::Color) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    match points.len() {
        0 => Ok(()),
        1 => Pixel(points[0], color).draw(target),
        n => {
            for i in 0..n {
                Line::new(points[i], points[(i + 1) % n])
                    .into_styled(style)
                    .draw(target)?;
            }
            Ok(())
        }
    }
}

/// Circle of `radius` around `center`, i.e. `2r + 1` pixels across.
fn circle_at(center: Point, radius: u32) -> Circle {
    Circle::with_center(center, radius * 2 + 1)
}

pub fn fill_circle<D>(target: &mut D, center: Point, radius: u32, color: D::Color) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    circle_at(center, radius)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

pub fn draw_circle<D>(target: &mut D, center: Point, radius: u32, color: D::Color) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    circle_at(center, radius)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(target)
}

pub fn draw_text_align<D>(
    target: &mut D,
    text: &str,
    frame: Rectangle,
    align: HorizontalAlignment,
    font: &MonoFont,
    color: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let character_style = MonoTextStyle::new(font, color);
    let textbox_style = TextBoxStyleBuilder::new()
        .alignment(align)
        .vertical_alignment(VerticalAlignment::Top)
        .build();
    TextBox::with_textbox_style(text, frame, character_style, textbox_style).draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vframebuf::VarFrameBuf;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn lit(fb: &VarFrameBuf<BinaryColor>) -> usize {
        fb.as_slice().iter().filter(|&&p| p == BinaryColor::On).count()
    }

    #[test]
    fn test_fill_square() {
        let mut fb = VarFrameBuf::new(20, 20, BinaryColor::Off);
        let square = [Point::new(2, 2), Point::new(6, 2), Point::new(6, 6), Point::new(2, 6)];
        fill_polygon(&mut fb, &square, BinaryColor::On).unwrap();
        // centres (2.5..5.5) in both axes
        assert_eq!(lit(&fb), 16);
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(6, 6)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_fill_degenerate() {
        let mut fb = VarFrameBuf::new(8, 8, BinaryColor::Off);
        fill_polygon(&mut fb, &[Point::new(1, 1), Point::new(5, 5)], BinaryColor::On).unwrap();
        assert_eq!(lit(&fb), 0);
    }

    #[test]
    fn test_fill_clips_offscreen() {
        let mut fb = VarFrameBuf::new(10, 10, BinaryColor::Off);
        let tri = [Point::new(-20, -20), Point::new(30, 5), Point::new(-20, 30)];
        fill_polygon(&mut fb, &tri, BinaryColor::On).unwrap();
        assert!(lit(&fb) > 0);
        assert_eq!(fb.pixel(Point::new(0, 5)), Some(BinaryColor::On));
    }

    #[test]
    fn test_outline_closes() {
        let mut fb = VarFrameBuf::new(10, 10, BinaryColor::Off);
        let square = [Point::new(1, 1), Point::new(4, 1), Point::new(4, 4), Point::new(1, 4)];
        draw_polygon_outline(&mut fb, &square, BinaryColor::On).unwrap();
        // 4x4 ring
        assert_eq!(lit(&fb), 12);
        assert_eq!(fb.pixel(Point::new(1, 3)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_circle_diameter() {
        let mut fb = VarFrameBuf::new(20, 20, BinaryColor::Off);
        fill_circle(&mut fb, Point::new(10, 10), 5, BinaryColor::On).unwrap();
        assert_eq!(fb.pixel(Point::new(10, 10)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(5, 10)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(15, 10)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(16, 10)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_text_lands_in_frame() {
        let mut fb = VarFrameBuf::new(64, 20, BinaryColor::Off);
        let frame = Rectangle::new(Point::new(0, 0), Size::new(64, 12));
        draw_text_align(&mut fb, "Mar 03", frame, HorizontalAlignment::Left, &FONT_6X10, BinaryColor::On).unwrap();
        assert!(lit(&fb) > 0);
        // nothing below the frame
        assert!((12..20).all(|y| (0..64).all(|x| fb.pixel(Point::new(x, y)) != Some(BinaryColor::On))));
    }
}
