//! Vehicle specifications loaded from a TOML fleet file.

use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    core::{ChargingCurve, ChargingCurvePoint, CurrentType, StateOfCharge, Vehicle},
    prelude::*,
    quantity::{distance::WattHoursPerMile, energy::KilowattHours, power::Kilowatts},
};

#[must_use]
#[derive(Debug)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let fleet = contents
            .parse::<Self>()
            .with_context(|| format!("failed to load the fleet from `{}`", path.display()))?;
        info!(n_vehicles = fleet.vehicles.len(), "loaded the fleet");
        Ok(fleet)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id() == id)
            .with_context(|| format!("vehicle `{id}` is not in the fleet"))
    }
}

impl FromStr for Fleet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec: FleetSpec = toml::from_str(s).context("failed to parse the fleet")?;
        let mut vehicles: Vec<Vehicle> = Vec::with_capacity(spec.vehicles.len());
        for vehicle_spec in spec.vehicles {
            ensure!(
                vehicles.iter().all(|vehicle| vehicle.id() != vehicle_spec.id),
                "vehicle `{}` is defined more than once",
                vehicle_spec.id,
            );
            let id = vehicle_spec.id.clone();
            let vehicle = vehicle_spec
                .try_into_vehicle()
                .with_context(|| format!("invalid vehicle `{id}`"))?;
            debug!(%id, n_current_types = vehicle.current_types().count(), "loaded");
            vehicles.push(vehicle);
        }
        Ok(Self { vehicles })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FleetSpec {
    #[serde(default, rename = "vehicle")]
    vehicles: Vec<VehicleSpec>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VehicleSpec {
    id: String,

    #[serde(default)]
    manufacturer: String,

    #[serde(default)]
    model: String,

    year: Option<u16>,

    #[serde(rename = "battery_capacity_kwh")]
    battery_capacity: KilowattHours,

    #[serde(rename = "rated_wh_per_mile")]
    rated_consumption: WattHoursPerMile,

    curves: BTreeMap<CurrentType, CurveSpec>,
}

impl VehicleSpec {
    fn try_into_vehicle(self) -> Result<Vehicle> {
        let curves = self
            .curves
            .into_iter()
            .map(|(current_type, spec)| -> Result<(CurrentType, ChargingCurve)> {
                let curve = spec.try_into_curve()?;
                ensure!(
                    curve.points().all(|point| point.max_power >= Kilowatts::ZERO),
                    "the {current_type} charging rates must not be negative",
                );
                // Fail here rather than on the first calculation hitting a gap:
                curve
                    .ensure_covers(StateOfCharge::EMPTY, StateOfCharge::FULL)
                    .with_context(|| format!("the {current_type} curve is incomplete"))?;
                Ok((current_type, curve))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Vehicle::builder()
            .id(self.id)
            .manufacturer(self.manufacturer)
            .model(self.model)
            .maybe_year(self.year)
            .curves(curves)
            .battery_capacity(self.battery_capacity)
            .rated_consumption(self.rated_consumption)
            .build()?)
    }
}

#[derive(Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
enum CurveSpec {
    /// Same rate at every level.
    Flat {
        #[serde(rename = "max_kw")]
        max_power: Kilowatts,
    },

    /// Rate dropping by the same amount at each of the levels.
    Stepped {
        #[serde(rename = "max_kw")]
        max_power: Kilowatts,

        #[serde(rename = "step_kw")]
        step: Kilowatts,

        at: Vec<StateOfCharge>,
    },

    /// Explicit samples.
    Points { points: Vec<ChargingCurvePoint> },
}

impl CurveSpec {
    fn try_into_curve(self) -> Result<ChargingCurve> {
        match self {
            Self::Flat { max_power } => Ok(ChargingCurve::flat(max_power)),
            Self::Stepped { max_power, step, at } => {
                Ok(ChargingCurve::stepped(max_power, step, &at)?)
            }
            Self::Points { points } => Ok(points.into_iter().collect()),
        }
    }
}
