/*
 *  tests/display_integration.rs
 *
 *  Integration tests for the watchface
 *
 *  clockface - hands on the dial
 *  (c) 2020-26 Stuart Hunter
 */

use chrono::{NaiveDate, NaiveDateTime};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use clockface::clock::{hour_angle, minute_angle, second_angle};
use clockface::config::{parse_yaml, Config};
use clockface::display::drivers::mock::{DrawCommand, RecordingCanvas, RecordingText};
use clockface::display::{AnalogFace, Color, DialBackdrop, DisplayManager};
use clockface::tick::ClockSource;
use clockface::trig::TRIG_MAX_ANGLE;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 3).unwrap().and_hms_opt(h, m, s).unwrap()
}

fn rect_face() -> AnalogFace {
    AnalogFace::new(Rectangle::new(Point::zero(), Size::new(144, 168)), false)
}

fn is_cap(cmd: &DrawCommand) -> bool {
    matches!(cmd, DrawCommand::FillCircle { .. } | DrawCommand::StrokeCircle { .. })
        || matches!(cmd, DrawCommand::FillRect { rect, .. } if rect.size == Size::new(3, 3))
}

#[test]
fn test_cap_always_after_hands() {
    let face = rect_face();
    let mut text = RecordingText::default();
    for (h, m, s) in [(0, 0, 0), (3, 0, 0), (11, 59, 59), (12, 30, 15), (23, 1, 2)] {
        let mut canvas = RecordingCanvas::new(144, 168);
        face.render_with_backdrop(&at(h, m, s), &mut canvas, &mut text, &DialBackdrop::default()).unwrap();
        let cmds = canvas.commands();
        let last_hand = cmds.iter().rposition(|c| matches!(c, DrawCommand::FillPolygon { .. })).unwrap();
        let first_cap = cmds.iter().position(is_cap).unwrap();
        assert!(first_cap > last_hand, "{h}:{m}:{s}");
    }
}

#[test]
fn test_angles_stay_in_range() {
    for hour in 0..24 {
        for minute in 0..60 {
            let a = hour_angle(hour, minute);
            assert!((0..TRIG_MAX_ANGLE).contains(&a));
        }
    }
    for v in 0..60 {
        assert!((0..TRIG_MAX_ANGLE).contains(&minute_angle(v)));
        assert!((0..TRIG_MAX_ANGLE).contains(&second_angle(v)));
    }
}

#[test]
fn test_same_input_same_commands() {
    let face = rect_face();
    let mut text = RecordingText::default();
    let mut first = RecordingCanvas::new(144, 168);
    let mut second = RecordingCanvas::new(144, 168);

    face.render(&at(7, 45, 30), &mut first, &mut text).unwrap();
    // something else in between must not leak into the next frame
    face.render(&at(1, 2, 3), &mut RecordingCanvas::new(144, 168), &mut text).unwrap();
    face.render(&at(7, 45, 30), &mut second, &mut text).unwrap();

    assert_eq!(first.commands(), second.commands());
}

#[test]
fn test_half_past_midnight_minute_points_down() {
    let face = rect_face();
    let mut canvas = RecordingCanvas::new(144, 168);
    let mut text = RecordingText::default();
    let angles = face.render(&at(0, 30, 0), &mut canvas, &mut text).unwrap();
    assert_eq!(angles.hour, TRIG_MAX_ANGLE / 24);
    assert_eq!(angles.minute, TRIG_MAX_ANGLE / 2);

    // minute tip is below the pivot
    let minute = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPolygon { points, color: Color::White } => Some(points.clone()),
            _ => None,
        })
        .nth(1)
        .unwrap();
    assert!(minute.iter().all(|p| p.y >= 84));
    assert_eq!(minute.iter().map(|p| p.y).max(), Some(84 + 61));
    assert_eq!(text.last(), Some("Mar 03"));
}

#[test]
fn test_manager_from_yaml_renders_round_face() {
    let cfg = parse_yaml(
        "display:\n  width: 180\n  height: 180\n  compact: true\n\
         clock:\n  start: 2024-03-03T12:00:59\n",
    )
    .unwrap();

    let mut clock = ClockSource::from_config(&cfg).unwrap();
    let mut manager = DisplayManager::new(&cfg).unwrap();
    let now = clock.now();
    manager.render_frame(&now).unwrap();

    assert_eq!(manager.date_text(), "03");
    assert_eq!(manager.framebuffer().pixel(Point::new(90, 90)), Some(Rgb565::BLACK));

    // fixed clock moved on by one second
    let next = clock.now();
    manager.render_frame(&next).unwrap();
    assert_eq!(manager.frames_rendered(), 2);
    assert_eq!(next.format("%H:%M:%S").to_string(), "12:01:00");
}

#[test]
fn test_default_config_is_rectangular() {
    let mut manager = DisplayManager::new(&Config::default()).unwrap();
    manager.render_frame(&at(3, 0, 0)).unwrap();
    assert_eq!(manager.framebuffer().width(), 144);
    assert_eq!(manager.framebuffer().height(), 168);
    assert_eq!(manager.date_text(), "Mar 03");
}
