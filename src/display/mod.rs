/*
 *  display/mod.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem - canvas abstraction, face layers and frame output
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

pub mod canvas;
pub mod color;
pub mod error;

// Canvas implementations that don't rasterise
pub mod drivers;

// Face layers
pub mod components;

// Display manager
pub mod manager;

// Re-exports for convenience
pub use canvas::{Canvas, GraphicsContext, TargetCanvas, TextSink};
pub use color::Color;
pub use error::DisplayError;
pub use components::{AnalogFace, Backdrop, DialBackdrop, TextLayer};
pub use manager::DisplayManager;
