//! Console lines → parser → panel, as the binary wires them.

use super::mock_ports::{FixedSource, RecordingSink};

use climate_panel::adapters::activity::ActivityLog;
use climate_panel::adapters::console::{ConsoleInput, parse_line};
use climate_panel::app::service::ClimateControlPanel;
use climate_panel::config::PanelConfig;
use climate_panel::control::trap::TrapId;

/// Feed lines the way `main` does; returns the rejected lines.
fn feed(
    panel: &mut ClimateControlPanel,
    sink: &mut (RecordingSink, ActivityLog),
    lines: &[&str],
) -> Vec<String> {
    let mut src = FixedSource::new();
    let nudge = panel.config().pump_nudge_c;
    let mut rejected = Vec::new();
    for line in lines {
        match parse_line(line, nudge) {
            Ok(ConsoleInput::Command(cmd)) => {
                if panel.handle_command(cmd, &mut src, sink).is_err() {
                    rejected.push((*line).to_owned());
                }
            }
            Ok(_) => {}
            Err(_) => rejected.push((*line).to_owned()),
        }
    }
    rejected
}

#[test]
fn session_drives_every_unit() {
    let mut panel = ClimateControlPanel::new(PanelConfig::default());
    let mut sink = (RecordingSink::new(), ActivityLog::new());

    let rejected = feed(
        &mut panel,
        &mut sink,
        &[
            "open 1",
            "open 1",
            "vent 2 on",
            "pump 2 +",
            "pump 2 +",
            "pump 2 -",
            "air 40",
            "hp +",
            "mode",
            "intake open",
            "show",
        ],
    );
    assert!(rejected.is_empty(), "unexpected rejects: {rejected:?}");

    assert_eq!(panel.traps().get(TrapId::Front).percent(), 50);
    assert_eq!(panel.traps().get(TrapId::Back).ventilator_on(), Some(true));
    assert_eq!(panel.traps().get(TrapId::Back).pump_level(), Some(10));
    assert_eq!(panel.air_temperature(), 40);
    assert_eq!(panel.temp_unit().heat_pump_step(), 1);
    assert_eq!(panel.temp_unit().fan_power(), 60);

    // The activity pane skips table refreshes; the recorder sees them.
    let recorded = sink.0.events.len();
    assert_eq!(sink.1.total() as usize, recorded - 1);
    assert_eq!(sink.1.latest(), Some("Opening air intake"));
}

#[test]
fn bad_lines_are_rejected_without_side_effects() {
    let mut panel = ClimateControlPanel::new(PanelConfig::default());
    let mut sink = (RecordingSink::new(), ActivityLog::new());

    let rejected = feed(
        &mut panel,
        &mut sink,
        &["open 9", "vent 3 on", "pump 4 +", "fan loud", "warp 9"],
    );
    assert_eq!(rejected.len(), 5);
    assert!(sink.0.events.is_empty());
    assert!(sink.1.is_empty());
}
