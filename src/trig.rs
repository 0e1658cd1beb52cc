/*
 *  trig.rs
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
#![allow(clippy::excessive_precision)]
//! Fixed-point angles. A full turn is `TRIG_MAX_ANGLE` units and a unit
//! sine/cosine is scaled to `TRIG_MAX_RATIO`, so repeated per-second
//! rotation never accumulates float drift.

/// Size of the integer angle space for one full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Fixed-point value of sin/cos == 1.0
pub const TRIG_MAX_RATIO: i32 = 0xffff;

const QUARTER_TURN: i32 = TRIG_MAX_ANGLE / 4;
const EIGHTH_TURN: i32 = TRIG_MAX_ANGLE / 8;
const ANGLE_TO_RAD: f32 = core::f32::consts::TAU / TRIG_MAX_ANGLE as f32;

/// Wrap any angle into `[0, TRIG_MAX_ANGLE)`.
#[inline]
pub fn normalize(angle: i32) -> i32 {
    angle.rem_euclid(TRIG_MAX_ANGLE)
}

/// Fixed-point sine; exact at the quadrant boundaries.
pub fn sin_lookup(angle: i32) -> i32 {
    let a = normalize(angle);
    let (quadrant, r) = (a / QUARTER_TURN, a % QUARTER_TURN);

    let v = match quadrant {
        0 =>  quarter_sin(r),
        1 =>  quarter_sin(QUARTER_TURN - r),
        2 => -quarter_sin(r),
        _ => -quarter_sin(QUARTER_TURN - r),
    };
    to_ratio(v)
}

/// Fixed-point cosine; exact at the quadrant boundaries.
pub fn cos_lookup(angle: i32) -> i32 {
    sin_lookup(normalize(angle) + QUARTER_TURN)
}

pub fn degrees_to_angle(degrees: i32) -> i32 {
    normalize(((TRIG_MAX_ANGLE as i64 * degrees as i64) / 360) as i32)
}

pub fn angle_to_degrees(angle: i32) -> f32 {
    normalize(angle) as f32 * 360.0 / TRIG_MAX_ANGLE as f32
}

// ---------- Internals ----------

/// sin over `[0, QUARTER_TURN]`; the upper octant is folded onto cosine so
/// both polynomials only ever see |r| <= pi/4.
#[inline]
fn quarter_sin(r: i32) -> f32 {
    if r <= EIGHTH_TURN {
        sin_poly(r as f32 * ANGLE_TO_RAD)
    } else {
        cos_poly((QUARTER_TURN - r) as f32 * ANGLE_TO_RAD)
    }
}

#[inline]
fn to_ratio(v: f32) -> i32 {
    (v * TRIG_MAX_RATIO as f32).round() as i32
}

#[inline(always)]
fn sin_poly(r: f32) -> f32 {
    // Cephes single-precision minimax for |r| <= pi/4
    const S1: f32 = -1.6666667163e-1;
    const S2: f32 =  8.3333337680e-3;
    const S3: f32 = -1.9841270114e-4;
    const S4: f32 =  2.7557314297e-6;

    let z = r * r;
    let p = (((S4 * z + S3) * z + S2) * z + S1) * z;
    r + r * p
}

#[inline(always)]
fn cos_poly(r: f32) -> f32 {
    const C1: f32 = -5.0000000000e-1;
    const C2: f32 =  4.1666667908e-2;
    const C3: f32 = -1.3888889225e-3;
    const C4: f32 =  2.4801587642e-5;

    let z = r * r;
    1.0 + (((C4 * z + C3) * z + C2) * z + C1) * z
}
