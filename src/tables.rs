use chrono::TimeDelta;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use ev_charging::core::{ChargingCurve, ChargingStep, Vehicle};
use itertools::Itertools;

use crate::fmt::FormattedDuration;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_vehicles_table(vehicles: &[Vehicle]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Make", "Model", "Year", "Battery", "Consumption", "Current"]);
    for vehicle in vehicles {
        table.add_row(vec![
            Cell::new(vehicle.id()).add_attribute(Attribute::Bold),
            Cell::new(vehicle.manufacturer()),
            Cell::new(vehicle.model()),
            Cell::new(vehicle.year().map_or_else(String::new, |year| year.to_string()))
                .add_attribute(Attribute::Dim),
            Cell::new(vehicle.battery_capacity()).set_alignment(CellAlignment::Right),
            Cell::new(vehicle.rated_consumption()).set_alignment(CellAlignment::Right),
            Cell::new(vehicle.current_types().join(", ")),
        ]);
    }
    table
}

/// Curve as the runs of the same rate.
pub fn build_curve_table(curve: &ChargingCurve) -> Table {
    let mut table = new_table();
    table.set_header(vec!["From", "To", "Rate"]);
    for (max_power, points) in &curve.points().chunk_by(|point| point.max_power) {
        let socs: Vec<_> = points.map(|point| point.soc).collect();
        let (Some(from), Some(to)) = (socs.first(), socs.last()) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(from),
            Cell::new(to).add_attribute(Attribute::Dim),
            Cell::new(max_power).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_plan_table(steps: &[ChargingStep]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["SoC", "Curve", "Rate", "Energy", "Step", "Elapsed"]);
    let mut elapsed = TimeDelta::zero();
    for step in steps {
        elapsed += step.whole_seconds();
        table.add_row(vec![
            Cell::new(step.soc),
            Cell::new(step.curve_rate)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(step.rate).set_alignment(CellAlignment::Right).fg(if step.is_capped() {
                Color::DarkYellow
            } else {
                Color::Green
            }),
            Cell::new(step.energy).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}s", step.whole_seconds().num_seconds()))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedDuration(elapsed)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
