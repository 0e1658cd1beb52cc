/*
 *  display/error.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Error types for the display subsystem
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

use std::fmt;
use std::error::Error;

/// Unified error type for all display operations
#[derive(Debug)]
pub enum DisplayError {
    /// Invalid configuration
    InvalidConfiguration(String),

    /// Writing a frame out failed
    Io(std::io::Error),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::InvalidConfiguration(msg) =>
                write!(f, "Invalid configuration: {}", msg),
            DisplayError::Io(err) =>
                write!(f, "Frame output error: {}", err),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DisplayError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DisplayError {
    fn from(err: std::io::Error) -> Self {
        DisplayError::Io(err)
    }
}

// The framebuffer can't fail to draw
impl From<core::convert::Infallible> for DisplayError {
    fn from(err: core::convert::Infallible) -> Self {
        match err {}
    }
}
