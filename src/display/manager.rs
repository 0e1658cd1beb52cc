/*
 *  display/manager.rs
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display manager - owns the framebuffer and composes the face layers
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

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::clock::HandAngles;
use crate::config::Config;
use crate::display::canvas::TargetCanvas;
use crate::display::components::{AnalogFace, DialBackdrop, TextLayer};
use crate::display::error::DisplayError;
use crate::vframebuf::VarFrameBuf;

/// Owns everything on screen: framebuffer, face, dial and date label.
///
/// Layers are composed bottom-up every frame: solid fill, dial, hands,
/// date. Nothing is kept between frames apart from the pixels themselves.
pub struct DisplayManager {
    framebuffer: VarFrameBuf<Rgb565>,
    face: AnalogFace,
    dial: Option<DialBackdrop>,
    date_layer: TextLayer,
    frame_path: Option<PathBuf>,
    frames_rendered: u64,
}

impl DisplayManager {
    pub fn new(config: &Config) -> Result<Self, DisplayError> {
        let display = config.display.clone().unwrap_or_default();
        let (width, height) = (display.width(), display.height());
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidConfiguration(format!(
                "display size {}x{} has no area", width, height
            )));
        }

        let bounds = Rectangle::new(Point::zero(), Size::new(width, height));
        let compact = display.compact();

        let manager = Self {
            framebuffer: VarFrameBuf::new(width, height, Rgb565::WHITE),
            face: AnalogFace::new(bounds, compact),
            dial: display.dial().then(DialBackdrop::default),
            date_layer: TextLayer::date_layer(width, compact, display.date_color()),
            frame_path: config.output.as_ref().and_then(|o| o.frame_path.clone()),
            frames_rendered: 0,
        };

        if let Some(path) = manager.frame_path.as_ref() {
            info!("Frames will be written to {}", path.display());
        }
        Ok(manager)
    }

    /// Draw one tick and, when configured, write it out.
    pub fn render_frame(&mut self, now: &NaiveDateTime) -> Result<HandAngles, DisplayError> {
        let started = Instant::now();

        let angles = {
            let mut canvas = TargetCanvas::new(&mut self.framebuffer);
            match self.dial.as_ref() {
                Some(dial) => self.face.render_with_backdrop(now, &mut canvas, &mut self.date_layer, dial)?,
                None => self.face.render(now, &mut canvas, &mut self.date_layer)?,
            }
        };
        self.date_layer.draw(&mut self.framebuffer)?;
        self.frames_rendered += 1;

        if let Some(path) = self.frame_path.as_ref() {
            self.write_frame(path)?;
        }

        debug!(
            "frame {} '{}' in {}us",
            self.frames_rendered,
            self.date_layer.text(),
            started.elapsed().as_micros()
        );
        Ok(angles)
    }

    /// Save the current framebuffer as PPM. Written beside the target and
    /// renamed over it so a viewer never sees half a frame.
    pub fn write_frame(&self, path: &Path) -> Result<(), DisplayError> {
        let tmp = path.with_extension("ppm.tmp");
        {
            let file = File::create(&tmp)?;
            self.framebuffer.write_ppm(BufWriter::new(file))?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn framebuffer(&self) -> &VarFrameBuf<Rgb565> { &self.framebuffer }
    pub fn face(&self) -> &AnalogFace { &self.face }
    pub fn date_text(&self) -> &str { self.date_layer.text() }
    pub fn frames_rendered(&self) -> u64 { self.frames_rendered }
}

impl Drop for DisplayManager {
    fn drop(&mut self) {
        info!("Releasing hand paths after {} frames", self.frames_rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, OutputConfig};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 3).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn config(width: u32, height: u32, compact: bool, dial: bool) -> Config {
        Config {
            display: Some(DisplayConfig {
                width: Some(width),
                height: Some(height),
                compact: Some(compact),
                dial: Some(dial),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_rejects_empty_display() {
        assert!(DisplayManager::new(&config(0, 168, false, true)).is_err());
    }

    #[test]
    fn test_render_without_dial() {
        let mut manager = DisplayManager::new(&config(144, 168, false, false)).unwrap();
        let angles = manager.render_frame(&at(3, 0, 0)).unwrap();
        assert_eq!(angles.minute, 0);
        assert_eq!(manager.frames_rendered(), 1);
        assert_eq!(manager.date_text(), "Mar 03");

        let fb = manager.framebuffer();
        // cap
        assert_eq!(fb.pixel(Point::new(72, 84)), Some(Rgb565::BLACK));
        // second hand straight up, red
        assert_eq!(fb.pixel(Point::new(72, 40)), Some(Rgb565::RED));
        // hour hand towards three o'clock, white fill
        assert_eq!(fb.pixel(Point::new(100, 84)), Some(Rgb565::WHITE));
        // off the hands, the solid fill shows through
        assert_eq!(fb.pixel(Point::new(40, 150)), Some(Rgb565::WHITE));
    }

    #[test]
    fn test_render_with_dial() {
        let mut manager = DisplayManager::new(&config(144, 168, false, true)).unwrap();
        manager.render_frame(&at(3, 0, 0)).unwrap();
        let slate = crate::display::color::Color::Slate.to_rgb565().unwrap();
        let fb = manager.framebuffer();
        assert_eq!(fb.pixel(Point::new(40, 150)), Some(slate));
        // six o'clock tick
        assert_eq!(fb.pixel(Point::new(72, 150)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(72, 40)), Some(Rgb565::RED));
    }

    #[test]
    fn test_compact_date() {
        let mut manager = DisplayManager::new(&config(180, 180, true, true)).unwrap();
        manager.render_frame(&at(12, 0, 59)).unwrap();
        assert_eq!(manager.date_text(), "03");
        assert!(manager.face().is_compact());
    }

    #[test]
    fn test_write_frame() {
        let dir = std::env::temp_dir().join(format!("clockface-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("frame.ppm");

        let mut cfg = config(144, 168, false, true);
        cfg.output = Some(OutputConfig { frame_path: Some(path.clone()) });
        let mut manager = DisplayManager::new(&cfg).unwrap();
        manager.render_frame(&at(10, 10, 10)).unwrap();

        let bytes = fs::read(&path).unwrap();
        let header = b"P6\n144 168\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 144 * 168 * 3);
        assert!(!path.with_extension("ppm.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
