/*
 *  lib.rs
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
//! Analog watchface: fixed-point hand geometry, layered rendering onto an
//! embedded-graphics target, and a one-second tick driver.

pub mod clock;
pub mod config;
pub mod display;
pub mod draw;
pub mod hands;
pub mod tick;
pub mod trig;
pub mod vframebuf;
