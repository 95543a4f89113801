use std::path::PathBuf;

use chrono::TimeDelta;
use clap::{Parser, Subcommand};
use ev_charging::{
    core::{Charger, CurrentType, DEFAULT_TARGET_SOC},
    prelude::*,
    quantity::{
        distance::{Miles, WattHoursPerMile},
        power::Kilowatts,
    },
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Fleet file with the vehicle specifications and charging curves.
    #[clap(long = "fleet", env = "FLEET_PATH", default_value = "fleet.toml")]
    pub fleet_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the fleet vehicles.
    #[clap(name = "vehicles")]
    Vehicles,

    /// Show the vehicle charging curve.
    #[clap(name = "curve")]
    Curve(CurveArgs),

    /// Time to charge up to the target state of charge.
    #[clap(name = "time-to-soc")]
    TimeToSoc(TargetArgs),

    /// Range gained by charging for the given time.
    #[clap(name = "miles")]
    Miles(MilesArgs),

    /// Time to charge for the given range.
    #[clap(name = "time-for-miles")]
    TimeForMiles(TimeForMilesArgs),

    /// Step-by-step charging up to the target state of charge.
    #[clap(name = "plan")]
    Plan(TargetArgs),
}

#[derive(Parser)]
pub struct CurveArgs {
    #[clap(long = "vehicle", env = "VEHICLE_ID")]
    pub vehicle_id: String,

    #[clap(long = "current", default_value = "ac")]
    pub current_type: CurrentType,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum ChargerKind {
    /// AC charger.
    Fast,

    /// DC charger.
    Rapid,
}

#[derive(Copy, Clone, Parser)]
pub struct ChargerArgs {
    #[clap(long = "charger", env = "CHARGER", default_value = "fast")]
    pub kind: ChargerKind,

    /// Charger power ceiling in kilowatts.
    #[clap(
        long = "charger-power-kilowatts",
        env = "CHARGER_POWER_KILOWATTS",
        default_value = "22",
        allow_negative_numbers = true
    )]
    pub max_power: Kilowatts,
}

impl ChargerArgs {
    pub fn charger(self) -> Result<Charger> {
        ensure!(self.max_power > Kilowatts::ZERO, "the charger power must be positive");
        Ok(match self.kind {
            ChargerKind::Fast => Charger::fast(self.max_power),
            ChargerKind::Rapid => Charger::rapid(self.max_power),
        })
    }
}

/// Vehicle, charger, and the initial state of charge.
#[derive(Parser)]
pub struct SessionArgs {
    #[clap(long = "vehicle", env = "VEHICLE_ID")]
    pub vehicle_id: String,

    #[clap(flatten)]
    pub charger: ChargerArgs,

    /// Initial state of charge percentage.
    #[clap(long = "soc", allow_negative_numbers = true)]
    pub soc: i32,
}

#[derive(Parser)]
pub struct TargetArgs {
    #[clap(flatten)]
    pub session: SessionArgs,

    /// Target state of charge percentage.
    #[clap(long = "target", default_value_t = DEFAULT_TARGET_SOC, allow_negative_numbers = true)]
    pub target_soc: i32,
}

#[derive(Parser)]
pub struct MilesArgs {
    #[clap(flatten)]
    pub session: SessionArgs,

    /// Charging time, for example: `1h 30m`.
    #[clap(long = "duration")]
    duration: humantime::Duration,

    /// Energy consumption override in watt-hours per mile.
    #[clap(long = "consumption", allow_negative_numbers = true)]
    pub consumption: Option<WattHoursPerMile>,
}

impl MilesArgs {
    pub fn duration(&self) -> Result<TimeDelta> {
        TimeDelta::from_std(self.duration.into()).context("the duration is too long")
    }
}

#[derive(Parser)]
pub struct TimeForMilesArgs {
    #[clap(flatten)]
    pub session: SessionArgs,

    /// Range to gain.
    #[clap(long = "miles", allow_negative_numbers = true)]
    pub miles: Miles,

    /// Energy consumption override in watt-hours per mile.
    #[clap(long = "consumption", allow_negative_numbers = true)]
    pub consumption: Option<WattHoursPerMile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_soc_defaults() {
        let args = Args::try_parse_from([
            "ev-charging",
            "time-to-soc",
            "--vehicle",
            "id-test",
            "--soc",
            "10",
        ])
        .unwrap();
        assert_eq!(args.fleet_path, PathBuf::from("fleet.toml"));
        let Command::TimeToSoc(args) = args.command else {
            panic!("unexpected command");
        };
        assert_eq!(args.target_soc, DEFAULT_TARGET_SOC);
        assert_eq!(args.session.soc, 10);
        assert_eq!(args.session.charger.charger().unwrap(), Charger::fast(Kilowatts(22.into())));
    }

    #[test]
    fn test_miles() {
        let args = Args::try_parse_from([
            "ev-charging",
            "--fleet",
            "cars.toml",
            "miles",
            "--vehicle",
            "id-test",
            "--charger",
            "rapid",
            "--charger-power-kilowatts",
            "100",
            "--soc",
            "0",
            "--duration",
            "32m",
            "--consumption",
            "250",
        ])
        .unwrap();
        assert_eq!(args.fleet_path, PathBuf::from("cars.toml"));
        let Command::Miles(args) = args.command else {
            panic!("unexpected command");
        };
        assert_eq!(args.duration().unwrap(), TimeDelta::minutes(32));
        assert_eq!(args.consumption, Some(WattHoursPerMile(250.into())));
        assert_eq!(args.session.charger.charger().unwrap(), Charger::rapid(Kilowatts(100.into())));
    }

    #[test]
    fn test_negative_soc_reaches_validation() {
        let args = Args::try_parse_from([
            "ev-charging",
            "time-for-miles",
            "--vehicle",
            "id-test",
            "--soc",
            "-10",
            "--miles",
            "100",
        ])
        .unwrap();
        let Command::TimeForMiles(args) = args.command else {
            panic!("unexpected command");
        };
        assert_eq!(args.session.soc, -10);
        assert_eq!(args.miles, Miles(100));
    }

    #[test]
    fn test_non_positive_charger_power() {
        for power in ["0", "-7.4"] {
            let args = Args::try_parse_from([
                "ev-charging",
                "plan",
                "--vehicle",
                "id-test",
                "--charger-power-kilowatts",
                power,
                "--soc",
                "10",
            ])
            .unwrap();
            let Command::Plan(args) = args.command else {
                panic!("unexpected command");
            };
            assert!(args.session.charger.charger().is_err(), "{power}");
        }
    }
}
