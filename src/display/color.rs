/*
 *  display/color.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Watchface palette
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

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DisplayError;

/// Colors the face is drawn with
///
/// `Clear` is a real palette entry, not an absence: drawing with it leaves
/// the pixels underneath untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    /// Dial background, a dark slate
    Slate,
    Clear,
}

impl Color {
    /// Convert for a 16-bit panel; `None` means skip the pixel
    pub fn to_rgb565(&self) -> Option<Rgb565> {
        match self {
            Color::Black => Some(Rgb565::BLACK),
            Color::White => Some(Rgb565::WHITE),
            Color::Red => Some(Rgb565::RED),
            Color::Slate => Some(Rgb565::new(5, 12, 8)),
            Color::Clear => None,
        }
    }
}

impl FromStr for Color {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "red" => Ok(Color::Red),
            "slate" => Ok(Color::Slate),
            "clear" | "none" => Ok(Color::Clear),
            other => Err(DisplayError::InvalidConfiguration(format!("unknown color '{}'", other))),
        }
    }
}
