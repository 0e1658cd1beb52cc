/*
 *  main.rs
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

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

#[cfg(unix)] // Only compile this block on Unix-like systems
use tokio::signal::unix::{signal, SignalKind};

use clockface::config::{self, Cli};
use clockface::display::DisplayManager;
use clockface::tick::{ClockSource, SecondTicker};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Redraw once per wall-clock second until `limit` ticks (if any).
async fn tick_loop(display: &mut DisplayManager, clock: &mut ClockSource, limit: Option<u64>) -> Result<()> {
    let mut ticker = SecondTicker::new();
    let mut ticks = 0u64;

    loop {
        ticker.tick().await;
        let now = clock.now();
        if let Err(e) = display.render_frame(&now) {
            // a failed frame write shouldn't stop the clock
            error!("Failed to render frame at {}: {}", now.format("%H:%M:%S"), e);
        }
        ticks += 1;
        if limit.is_some_and(|n| ticks >= n) {
            info!("Rendered {} ticks, stopping", ticks);
            return Ok(());
        }
    }
}

/// Waits for SIGINT, SIGTERM or SIGHUP.
#[cfg(unix)]
async fn signal_handler() -> Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
        _ = sighup.recv() => {
            info!("SIGHUP received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}

#[cfg(not(unix))]
async fn signal_handler() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received. Initiating graceful shutdown.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli).context("loading configuration")?;

    let level = if cli.debug {
        "debug".to_string()
    } else {
        cfg.log_level.clone().unwrap_or_else(|| "info".to_string())
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        println!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    info!("{} v.{} built {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let mut clock = ClockSource::from_config(&cfg)?;
    let mut display = DisplayManager::new(&cfg).context("creating display")?;

    if cli.once {
        let now = clock.now();
        display.render_frame(&now).context("rendering frame")?;
        info!("Rendered single frame for {}", now.format("%Y-%m-%d %H:%M:%S"));
        return Ok(());
    }

    tokio::select! {
        res = signal_handler() => res?,
        res = tick_loop(&mut display, &mut clock, cli.frames) => res?,
    }

    info!("Exiting after {} frames", display.frames_rendered());
    Ok(())
}
