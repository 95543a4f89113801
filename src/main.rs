mod cli;
mod fmt;
mod tables;

use clap::{Parser, crate_version};
use ev_charging::{fleet::Fleet, prelude::*};

use crate::{
    cli::{Args, Command},
    fmt::FormattedDuration,
    tables::{build_curve_table, build_plan_table, build_vehicles_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let fleet = Fleet::from_path(&args.fleet_path)?;

    match args.command {
        Command::Vehicles => {
            println!("{}", build_vehicles_table(fleet.vehicles()));
        }

        Command::Curve(args) => {
            let vehicle = fleet.vehicle(&args.vehicle_id)?;
            let curve = vehicle.curve(args.current_type)?;
            info!(
                vehicle = vehicle.id(),
                current_type = %args.current_type,
                n_points = curve.len(),
                "loaded the curve",
            );
            println!("{}", build_curve_table(curve));
        }

        Command::TimeToSoc(args) => {
            let vehicle = fleet.vehicle(&args.session.vehicle_id)?;
            let duration = vehicle
                .time_to_charge_to_soc()
                .charger(&args.session.charger.charger()?)
                .soc(args.session.soc)
                .target_soc(args.target_soc)
                .call()?;
            println!("{}", FormattedDuration(duration));
        }

        Command::Miles(args) => {
            let vehicle = fleet.vehicle(&args.session.vehicle_id)?;
            let miles = vehicle
                .miles_charged_in_time_span()
                .charger(&args.session.charger.charger()?)
                .soc(args.session.soc)
                .duration(args.duration()?)
                .maybe_consumption(args.consumption)
                .call()?;
            println!("{miles}");
        }

        Command::TimeForMiles(args) => {
            let vehicle = fleet.vehicle(&args.session.vehicle_id)?;
            let duration = vehicle
                .time_to_charge_given_mileage()
                .charger(&args.session.charger.charger()?)
                .soc(args.session.soc)
                .miles(args.miles)
                .maybe_consumption(args.consumption)
                .call()?;
            println!("{}", FormattedDuration(duration));
        }

        Command::Plan(args) => {
            let vehicle = fleet.vehicle(&args.session.vehicle_id)?;
            let steps = vehicle
                .charging_plan()
                .charger(&args.session.charger.charger()?)
                .soc(args.session.soc)
                .target_soc(args.target_soc)
                .call()?;
            println!("{}", build_plan_table(&steps));
        }
    }

    info!("done!");
    Ok(())
}
