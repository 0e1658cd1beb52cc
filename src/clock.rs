/*
 *  clock.rs
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

use arrayvec::ArrayString;
use chrono::{NaiveDateTime, Timelike};
use core::fmt::Write;

use crate::trig::TRIG_MAX_ANGLE;

/// Wall-clock fields the hands are driven from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self::new(t.hour(), t.minute(), t.second())
    }

    pub fn angles(&self) -> HandAngles {
        HandAngles {
            hour: hour_angle(self.hour, self.minute),
            minute: minute_angle(self.minute),
            second: second_angle(self.second),
        }
    }
}

/// Rotation of each hand for one frame, in `TRIG_MAX_ANGLE` units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

#[inline]
fn turn_fraction(numerator: u32, denominator: u32) -> i32 {
    ((TRIG_MAX_ANGLE as i64 * numerator as i64) / denominator as i64) as i32
}

/// Hour hand sweeps continuously with the minutes, 12h per turn.
pub fn hour_angle(hour: u32, minute: u32) -> i32 {
    turn_fraction((hour % 12) * 60 + minute, 12 * 60)
}

/// Minute hand steps once a minute; seconds do not move it.
pub fn minute_angle(minute: u32) -> i32 {
    turn_fraction(minute, 60)
}

pub fn second_angle(second: u32) -> i32 {
    turn_fraction(second, 60)
}

pub const DATE_BUF_LEN: usize = 16;

/// Date label style, picked from the display shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// "03" - round/compact displays
    DayOnly,
    /// "Mar 03" - rectangular displays
    MonthDay,
}

impl DateFormat {
    pub fn for_display(compact: bool) -> Self {
        if compact { DateFormat::DayOnly } else { DateFormat::MonthDay }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayOnly => "%d",
            DateFormat::MonthDay => "%b %d",
        }
    }

    /// Format into a stack buffer, no allocation on the tick path.
    pub fn format(&self, now: &NaiveDateTime) -> ArrayString<DATE_BUF_LEN> {
        let mut buf = ArrayString::new();
        let written = write!(&mut buf, "{}", now.format(self.pattern()));
        debug_assert!(written.is_ok(), "date label overflowed {DATE_BUF_LEN} bytes");
        buf
    }
}
