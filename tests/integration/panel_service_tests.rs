//! Integration tests for the PanelCommand → ClimateControlPanel → events
//! pipeline.

use super::mock_ports::{FixedSource, RecordingSink};

use climate_panel::app::commands::PanelCommand;
use climate_panel::app::events::PanelEvent;
use climate_panel::app::service::ClimateControlPanel;
use climate_panel::config::PanelConfig;
use climate_panel::control::temp_unit::FanMode;
use climate_panel::control::trap::{Rgb, TrapId};
use climate_panel::error::{Device, Error};

fn make_panel() -> (ClimateControlPanel, FixedSource, RecordingSink) {
    let mut panel = ClimateControlPanel::new(PanelConfig::default());
    let mut sink = RecordingSink::new();
    panel.start(&mut sink);
    sink.events.clear();
    (panel, FixedSource::new(), sink)
}

fn run(
    panel: &mut ClimateControlPanel,
    src: &mut FixedSource,
    sink: &mut RecordingSink,
    cmds: &[PanelCommand],
) {
    for &cmd in cmds {
        panel.handle_command(cmd, src, sink).unwrap();
    }
}

#[test]
fn start_announces_itself() {
    let mut panel = ClimateControlPanel::new(PanelConfig::default());
    let mut sink = RecordingSink::new();
    panel.start(&mut sink);
    assert_eq!(sink.events, [PanelEvent::Started]);
}

#[test]
fn open_button_walks_trap_and_shades() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[PanelCommand::CycleTrap(TrapId::Back); 3],
    );
    let back = panel.traps().get(TrapId::Back);
    assert_eq!(back.percent(), 75);
    assert_eq!(back.open_label(), "Open +75%");
    assert_eq!(back.shade(), Rgb::new(100, 160, 255));
    assert_eq!(
        sink.lines(),
        [
            "Trap 2 - Back set to 25%",
            "Trap 2 - Back set to 50%",
            "Trap 2 - Back set to 75%",
        ]
    );
    // Other traps untouched.
    assert_eq!(panel.traps().get(TrapId::Front).position(), 0);
}

#[test]
fn close_after_slider_resets() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[
            PanelCommand::SetTrapPosition(TrapId::AutoVentilation, 4),
            PanelCommand::ResetTrap(TrapId::AutoVentilation),
        ],
    );
    assert_eq!(panel.traps().get(TrapId::AutoVentilation).position(), 0);
    assert!(matches!(
        sink.last(),
        Some(PanelEvent::TrapReset {
            trap: TrapId::AutoVentilation,
            shade: Rgb { r: 255, g: 255, b: 255 },
        })
    ));
}

#[test]
fn pump_buttons_clamp_at_thirty() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[PanelCommand::NudgePump(TrapId::Front, 10); 5],
    );
    assert_eq!(panel.traps().get(TrapId::Front).pump_level(), Some(30));
    // 10, 20, 30 move the slider; the last two do not.
    assert_eq!(sink.events.len(), 3);
    assert_eq!(
        sink.lines().last().map(String::as_str),
        Some("Heat Pump for Trap 1 - Front - Temperature: 30\u{b0}C, Power: 45.0W, Efficiency: 40%")
    );
}

#[test]
fn ventilators_only_on_front_and_back() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[
            PanelCommand::SetVentilator(TrapId::Front, true),
            PanelCommand::SetVentilator(TrapId::Back, false),
        ],
    );
    assert_eq!(panel.traps().get(TrapId::Front).ventilator_on(), Some(true));
    assert_eq!(
        sink.lines(),
        [
            "Ventilator for Trap 1 - Front is ON",
            "Ventilator for Trap 2 - Back is OFF",
        ]
    );

    let err = panel
        .handle_command(
            PanelCommand::SetVentilator(TrapId::NaturalAir, true),
            &mut src,
            &mut sink,
        )
        .unwrap_err();
    assert_eq!(
        err,
        Error::NotEquipped {
            trap: TrapId::NaturalAir,
            device: Device::Ventilator,
        }
    );
    assert_eq!(sink.events.len(), 2, "rejected gesture must not log");
}

#[test]
fn air_input_fills_tables_from_source() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[PanelCommand::SetAirTemperature(40)],
    );
    assert_eq!(src.samples, 1);

    let view = panel.view();
    assert_eq!(view.air_label, "Air Input Temperature (\u{b0}C): 40");
    let hubs: Vec<&str> = view.hubs.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(hubs, ["33.0", "33.5", "34.0", "34.5"]);
    assert_eq!(view.soil[0].value, "32.0");
    assert_eq!(view.soil[8].value, "34.0");
    // mean(32.0, 32.25, ..., 34.0) = 33.0
    assert_eq!(view.soil[9].label, "Average");
    assert_eq!(view.soil[9].value, "33.0");
}

#[test]
fn repeated_air_value_still_redraws() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[
            PanelCommand::SetAirTemperature(25),
            PanelCommand::SetAirTemperature(25),
        ],
    );
    assert_eq!(src.samples, 2);
}

#[test]
fn negative_air_input_clamps_to_zero() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[PanelCommand::SetAirTemperature(-40)],
    );
    assert_eq!(panel.air_temperature(), 0);
    // Base falls below zero; the tables show it.
    assert_eq!(panel.view().hubs[0].value, "-7.0");
}

#[test]
fn fan_mode_ring_and_dial() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[
            PanelCommand::SwitchFanMode,
            PanelCommand::SwitchFanMode,
            PanelCommand::SetFanPower(95),
        ],
    );
    let unit = panel.temp_unit();
    assert_eq!(unit.fan_mode(), FanMode::Medium);
    assert_eq!(unit.fan_power(), 95);
    assert_eq!(
        sink.lines(),
        [
            "Switched to mode with 60W",
            "Switched to mode with 120W",
            "Fan Power: 95W",
        ]
    );

    // Next switch continues the ring from Medium, ignoring the dial.
    run(&mut panel, &mut src, &mut sink, &[PanelCommand::SwitchFanMode]);
    assert_eq!(panel.temp_unit().fan_power(), 180);
}

#[test]
fn heat_pump_unit_steps_and_slider() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[
            PanelCommand::IncreaseHeatPump,
            PanelCommand::IncreaseHeatPump,
            PanelCommand::SetHeatPumpPower(3),
            PanelCommand::IncreaseHeatPump,
            PanelCommand::DecreaseHeatPump,
        ],
    );
    assert_eq!(panel.temp_unit().heat_pump_step(), 2);
    assert_eq!(
        sink.lines(),
        [
            "Heat Pump Power increased to 1",
            "Heat Pump Power increased to 2",
            "Heat Pump Power decreased to 2",
        ]
    );
}

#[test]
fn intake_buttons_only_log() {
    let (mut panel, mut src, mut sink) = make_panel();
    let before = panel.view();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[PanelCommand::OpenAirIntake, PanelCommand::CloseAirIntake],
    );
    assert_eq!(panel.view(), before);
    assert_eq!(sink.lines(), ["Opening air intake", "Closing air intake"]);
}

#[test]
fn open_after_slider_resumes_open_count() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[
            PanelCommand::SetTrapPosition(TrapId::Front, 3),
            PanelCommand::CycleTrap(TrapId::Front),
        ],
    );
    let front = panel.traps().get(TrapId::Front);
    assert_eq!(front.position(), 1);
    assert_eq!(front.open_label(), "Open +25%");
    assert_eq!(sink.lines().last().map(String::as_str), Some("Trap 1 - Front set to 25%"));
}

#[test]
fn fifth_open_shows_zero_step_label() {
    let (mut panel, mut src, mut sink) = make_panel();
    run(
        &mut panel,
        &mut src,
        &mut sink,
        &[PanelCommand::CycleTrap(TrapId::Back); 5],
    );
    let view = panel.view();
    assert_eq!(view.traps[1].percent, 0);
    assert_eq!(view.traps[1].open_label, "Open +0%");
}
