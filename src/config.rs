use chrono::NaiveDateTime;
use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::display::Color;

pub const DEFAULT_WIDTH: u32 = 144;
pub const DEFAULT_HEIGHT: u32 = 168;

/// Format of `clock.start` / `--start`
pub const START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub display: Option<DisplayConfig>,
    pub output: Option<OutputConfig>,
    pub clock: Option<ClockConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// round/compact face: day-only date, centred label
    pub compact: Option<bool>,
    /// draw the dial under the hands
    pub dial: Option<bool>,
    pub date_color: Option<Color>,
}

impl DisplayConfig {
    pub fn width(&self) -> u32 { self.width.unwrap_or(DEFAULT_WIDTH) }
    pub fn height(&self) -> u32 { self.height.unwrap_or(DEFAULT_HEIGHT) }
    pub fn compact(&self) -> bool { self.compact.unwrap_or(false) }
    pub fn dial(&self) -> bool { self.dial.unwrap_or(true) }
    pub fn date_color(&self) -> Color { self.date_color.unwrap_or(Color::White) }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// PPM file rewritten every tick
    pub frame_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClockConfig {
    /// Fixed start time instead of the system clock, advancing 1s per tick
    pub start: Option<String>,
}

impl ClockConfig {
    pub fn start_time(&self) -> Result<Option<NaiveDateTime>, ConfigError> {
        self.start
            .as_deref()
            .map(|s| {
                NaiveDateTime::parse_from_str(s, START_FORMAT).map_err(|e| {
                    ConfigError::Validation(format!("clock start '{}' is not {}: {}", s, START_FORMAT, e))
                })
            })
            .transpose()
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "clockface", version, about = "Analog watchface renderer")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Enable debug log level
    #[arg(short = 'v', long, alias = "verbose", action = ArgAction::SetTrue)]
    pub debug: bool,
    #[arg(long)]
    pub display_width: Option<u32>,
    #[arg(long)]
    pub display_height: Option<u32>,
    #[arg(long, action = ArgAction::Set)]
    pub compact: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub dial: Option<bool>,
    #[arg(long)]
    pub date_color: Option<Color>,
    /// Write every frame to this PPM file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub frame_path: Option<PathBuf>,
    /// Start from this time (YYYY-MM-DDTHH:MM:SS) instead of the system clock
    #[arg(long)]
    pub start: Option<String>,
    /// Render a single frame and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub once: bool,
    /// Stop after this many ticks
    #[arg(long)]
    pub frames: Option<u64>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Read YAML, merge CLI over it, validate.
pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/clockface/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/clockface/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/clockface.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["clockface.yaml", "config.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    if let Some(o) = src.output {
        if o.frame_path.is_some() {
            dst.output.get_or_insert_with(Default::default).frame_path = o.frame_path;
        }
    }
    if let Some(c) = src.clock {
        if c.start.is_some() {
            dst.clock.get_or_insert_with(Default::default).start = c.start;
        }
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()      { dst.width = src.width; }
    if src.height.is_some()     { dst.height = src.height; }
    if src.compact.is_some()    { dst.compact = src.compact; }
    if src.dial.is_some()       { dst.dial = src.dial; }
    if src.date_color.is_some() { dst.date_color = src.date_color; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }

    let any_display = cli.display_width.is_some()
        || cli.display_height.is_some()
        || cli.compact.is_some()
        || cli.dial.is_some()
        || cli.date_color.is_some();

    if any_display && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    if let Some(display) = cfg.display.as_mut() {
        if cli.display_width.is_some()  { display.width = cli.display_width; }
        if cli.display_height.is_some() { display.height = cli.display_height; }
        if cli.compact.is_some()        { display.compact = cli.compact; }
        if cli.dial.is_some()           { display.dial = cli.dial; }
        if cli.date_color.is_some()     { display.date_color = cli.date_color; }
    }
    if cli.frame_path.is_some() {
        cfg.output.get_or_insert_with(Default::default).frame_path = cli.frame_path.clone();
    }
    if cli.start.is_some() {
        cfg.clock.get_or_insert_with(Default::default).start = cli.start.clone();
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(level) = cfg.log_level.as_deref() {
        match level.to_ascii_lowercase().as_str() {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {},
            _ => return Err(ConfigError::Validation(format!("unknown log_level '{}'", level))),
        }
    }
    if let Some(display) = cfg.display.as_ref() {
        if display.width() == 0 || display.height() == 0 {
            return Err(ConfigError::Validation("display width/height must be > 0".into()));
        }
    }
    if let Some(clock) = cfg.clock.as_ref() {
        clock.start_time()?;
    }
    Ok(())
}
