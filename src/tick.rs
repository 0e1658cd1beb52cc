/*
 *  tick.rs
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

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::config::{Config, ConfigError};

const TICK: Duration = Duration::from_secs(1);

/// Where each tick's time comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockSource {
    /// System local time
    Local,
    /// Starts at a fixed time and advances one second per read
    Fixed { next: NaiveDateTime },
}

impl ClockSource {
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let start = match cfg.clock.as_ref() {
            Some(clock) => clock.start_time()?,
            None => None,
        };
        Ok(start.map_or(ClockSource::Local, |next| ClockSource::Fixed { next }))
    }

    /// Time for this tick
    pub fn now(&mut self) -> NaiveDateTime {
        match self {
            ClockSource::Local => Local::now().naive_local(),
            ClockSource::Fixed { next } => {
                let current = *next;
                *next = current.checked_add_signed(TimeDelta::seconds(1)).unwrap_or(current);
                current
            }
        }
    }
}

/// Time left until the next whole second.
pub fn until_next_second(now: &NaiveDateTime) -> Duration {
    // leap seconds report nanos >= 1e9
    let nanos = now.nanosecond().min(999_999_999);
    if nanos == 0 {
        Duration::ZERO
    } else {
        Duration::from_nanos(1_000_000_000 - nanos as u64)
    }
}

/// One-second interval lined up with the wall clock so the second hand
/// moves when the second actually changes. Late ticks are dropped, never
/// bunched up.
pub struct SecondTicker {
    interval: Interval,
}

impl SecondTicker {
    /// Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let delay = until_next_second(&Local::now().naive_local());
        let mut interval = interval_at(Instant::now() + delay, TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new()
    }
}
