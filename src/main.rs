//! Climate panel — console entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  console (stdin)   LogEventSink   ActivityLog            │
//! │  SimulatedSource (ReadingSource)                         │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ──────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │         ClimateControlPanel (pure logic)           │  │
//! │  │   Traps · Air input · Heat pump / fan unit         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! No arguments, no environment, no files: every launch starts from
//! defaults and reads one gesture per line until `quit` or end of input.
#![deny(unused_must_use)]

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;

use climate_panel::adapters::activity::ActivityLog;
use climate_panel::adapters::console::{self, ConsoleInput, HELP};
use climate_panel::adapters::log_sink::LogEventSink;
use climate_panel::app::service::ClimateControlPanel;
use climate_panel::config::PanelConfig;
use climate_panel::error::{CommandError, Error};
use climate_panel::sensors::simulated::SimulatedSource;

fn main() -> Result<()> {
    // ── 1. Logging (stderr; stdout carries the panel) ─────────
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Fan Control Application v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config + adapters ──────────────────────────────────
    let config = PanelConfig::default();
    config.validate()?;
    let pump_nudge = config.pump_nudge_c;

    let mut source = SimulatedSource::from_entropy(&config);
    let mut sink = (LogEventSink::new(), ActivityLog::new());

    // ── 3. Panel ──────────────────────────────────────────────
    let mut panel = ClimateControlPanel::new(config);
    panel.start(&mut sink);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    write!(out, "{}", panel.view())?;
    out.flush()?;

    // ── 4. Event loop: one line, one gesture ──────────────────
    for line in io::stdin().lock().lines() {
        let line = line?;
        match console::parse_line(&line, pump_nudge) {
            Ok(ConsoleInput::Command(cmd)) => {
                match panel.handle_command(cmd, &mut source, &mut sink) {
                    Ok(()) => write!(out, "{}", panel.view())?,
                    Err(e) => warn!("{e}"),
                }
            }
            Ok(ConsoleInput::Show) => write!(out, "{}", panel.view())?,
            Ok(ConsoleInput::Json) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&panel.view())?)?;
            }
            Ok(ConsoleInput::Log) => {
                for entry in sink.1.lines() {
                    writeln!(out, "  {entry}")?;
                }
            }
            Ok(ConsoleInput::Help) => writeln!(out, "{HELP}")?,
            Ok(ConsoleInput::Quit) => break,
            Err(Error::Command(CommandError::Empty)) => {}
            Err(e) => warn!("{e}"),
        }
        out.flush()?;
    }

    info!(
        "Shutting down after {} commands ({} logged)",
        panel.command_count(),
        sink.1.total()
    );
    Ok(())
}
