/*
 *  hands.rs
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

use embedded_graphics::geometry::Point;

use crate::trig::{cos_lookup, normalize, sin_lookup, TRIG_MAX_RATIO};

/// Closed polygon around a pivot at the origin, pointing at 12 o'clock.
#[derive(Debug, PartialEq, Eq)]
pub struct HandShape {
    pub name: &'static str,
    pub points: &'static [Point],
}

impl HandShape {
    /// Reach of the tip along the 12 o'clock axis
    pub fn length(&self) -> i32 {
        self.points.iter().map(|p| -p.y).max().unwrap_or(0)
    }
}

pub static HOUR_HAND: HandShape = HandShape {
    name: "hour",
    points: &[
        Point::new(6, -37),
        Point::new(3, -40),
        Point::new(-3, -40),
        Point::new(-6, -37),
        Point::new(-6, 0),
        Point::new(6, 0),
    ],
};

pub static MINUTE_HAND: HandShape = HandShape {
    name: "minute",
    points: &[
        Point::new(5, -57),
        Point::new(3, -61),
        Point::new(-3, -61),
        Point::new(-5, -57),
        Point::new(-5, 0),
        Point::new(5, 0),
    ],
};

pub static SECOND_HAND: HandShape = HandShape {
    name: "second",
    points: &[
        Point::new(2, 0),
        Point::new(2, -61),
        Point::new(-2, -61),
        Point::new(-2, 0),
    ],
};

/// A hand shape placed on screen: translated to `offset`, turned by
/// `rotation` (fixed-point, clockwise on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandPath {
    shape: &'static HandShape,
    offset: Point,
    rotation: i32,
}

impl HandPath {
    pub fn new(shape: &'static HandShape) -> Self {
        Self { shape, offset: Point::zero(), rotation: 0 }
    }

    pub fn shape(&self) -> &'static HandShape { self.shape }
    pub fn offset(&self) -> Point { self.offset }
    pub fn rotation(&self) -> i32 { self.rotation }

    pub fn move_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn rotate_to(&mut self, angle: i32) {
        self.rotation = normalize(angle);
    }

    /// Copy of this path at a new pivot and angle; the original is untouched.
    pub fn posed(&self, offset: Point, angle: i32) -> Self {
        let mut path = *self;
        path.move_to(offset);
        path.rotate_to(angle);
        path
    }

    /// Screen-space polygon for the current offset and rotation.
    pub fn points(&self) -> Vec<Point> {
        let cos = cos_lookup(self.rotation);
        let sin = sin_lookup(self.rotation);
        self.shape
            .points
            .iter()
            .map(|p| rotate_point(*p, cos, sin) + self.offset)
            .collect()
    }
}

/// Each product is truncated on its own, matching the fixed-point path math
/// the hands have always been drawn with.
#[inline]
fn rotate_point(p: Point, cos: i32, sin: i32) -> Point {
    Point::new(
        p.x * cos / TRIG_MAX_RATIO - p.y * sin / TRIG_MAX_RATIO,
        p.y * cos / TRIG_MAX_RATIO + p.x * sin / TRIG_MAX_RATIO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::TRIG_MAX_ANGLE;

    #[test]
    fn hand_lengths() {
        assert_eq!(HOUR_HAND.length(), 40);
        assert_eq!(MINUTE_HAND.length(), 61);
        assert_eq!(SECOND_HAND.length(), 61);
        assert_eq!(HOUR_HAND.points.len(), 6);
        assert_eq!(MINUTE_HAND.points.len(), 6);
        assert_eq!(SECOND_HAND.points.len(), 4);
    }

    #[test]
    fn unrotated_path_is_translated_shape() {
        let path = HandPath::new(&SECOND_HAND).posed(Point::new(72, 84), 0);
        assert_eq!(
            path.points(),
            vec![
                Point::new(74, 84),
                Point::new(74, 23),
                Point::new(70, 23),
                Point::new(70, 84),
            ]
        );
    }

    #[test]
    fn quarter_turn_points_right() {
        let path = HandPath::new(&HOUR_HAND).posed(Point::new(72, 84), TRIG_MAX_ANGLE / 4);
        let pts = path.points();
        // tip (3,-40) lands at (+40, +3) from the pivot
        assert_eq!(pts[1], Point::new(112, 87));
        // base corners stay on the pivot's vertical
        assert_eq!(pts[4], Point::new(72, 78));
        assert_eq!(pts[5], Point::new(72, 90));
    }

    #[test]
    fn half_turn_points_down() {
        let path = HandPath::new(&MINUTE_HAND).posed(Point::zero(), TRIG_MAX_ANGLE / 2);
        let pts = path.points();
        assert_eq!(pts[1], Point::new(-3, 61));
        assert_eq!(pts[2], Point::new(3, 61));
    }

    #[test]
    fn rotation_wraps_full_turn() {
        let mut path = HandPath::new(&MINUTE_HAND);
        path.rotate_to(TRIG_MAX_ANGLE + 5);
        assert_eq!(path.rotation(), 5);
        path.rotate_to(-TRIG_MAX_ANGLE);
        assert_eq!(path.rotation(), 0);
    }

    #[test]
    fn posed_leaves_original_alone() {
        let base = HandPath::new(&HOUR_HAND);
        let moved = base.posed(Point::new(10, 10), 1234);
        assert_eq!(base.offset(), Point::zero());
        assert_eq!(base.rotation(), 0);
        assert_eq!(moved.offset(), Point::new(10, 10));
        assert_eq!(moved.rotation(), 1234);
        assert_eq!(moved.shape(), &HOUR_HAND);
    }

    #[test]
    fn paths_borrow_the_shared_shape() {
        let a = HandPath::new(&MINUTE_HAND).posed(Point::new(72, 84), 4000);
        let b = HandPath::new(&MINUTE_HAND);
        assert!(core::ptr::eq(a.shape(), b.shape()));
        assert!(core::ptr::eq(a.shape(), &MINUTE_HAND));
        assert_eq!(a.shape().name, "minute");
        assert_eq!(a.shape().length(), 61);
    }
}
