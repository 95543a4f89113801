use std::collections::BTreeMap;

use bon::bon;
use chrono::TimeDelta;
use rust_decimal::Decimal;

use crate::{
    core::{
        charger::Charger,
        current_type::CurrentType,
        curve::ChargingCurve,
        error::ChargeError,
        state_of_charge::StateOfCharge,
        step::ChargingStep,
    },
    prelude::*,
    quantity::{
        distance::{Miles, WattHoursPerMile},
        energy::KilowattHours,
        time::Hours,
    },
};

/// Charge level targeted when none is given.
pub const DEFAULT_TARGET_SOC: i32 = 90;

/// Electric vehicle with its battery and charging curves.
///
/// All calculations walk the state of charge one percentage point at a time,
/// each step at the curve rate sampled at its starting level, capped by the charger.
#[must_use]
#[derive(Clone, Debug)]
pub struct Vehicle {
    id: String,
    manufacturer: String,
    model: String,
    year: Option<u16>,
    curves: BTreeMap<CurrentType, ChargingCurve>,
    battery_capacity: KilowattHours,
    rated_consumption: WattHoursPerMile,
}

#[bon]
impl Vehicle {
    #[builder]
    pub fn new(
        #[builder(into)] id: String,
        #[builder(into, default)] manufacturer: String,
        #[builder(into, default)] model: String,
        year: Option<u16>,
        #[builder(into)] curves: BTreeMap<CurrentType, ChargingCurve>,
        battery_capacity: KilowattHours,
        rated_consumption: WattHoursPerMile,
    ) -> Result<Self, ChargeError> {
        if battery_capacity <= KilowattHours::ZERO {
            return Err(ChargeError::out_of_range("battery_capacity", "must be positive"));
        }
        if rated_consumption <= WattHoursPerMile::ZERO {
            return Err(ChargeError::out_of_range("rated_consumption", "must be positive"));
        }
        Ok(Self { id, manufacturer, model, year, curves, battery_capacity, rated_consumption })
    }

    /// Distance gained by charging for the `duration` starting at the `soc`.
    ///
    /// A step that does not fit into the remaining time is dropped entirely, not prorated.
    /// The `consumption` defaults to the rated one.
    #[builder]
    pub fn miles_charged_in_time_span(
        &self,
        charger: &Charger,
        soc: i32,
        duration: TimeDelta,
        consumption: Option<WattHoursPerMile>,
    ) -> Result<Miles, ChargeError> {
        let soc = StateOfCharge::try_new(soc, "soc")?;
        let consumption = self.consumption_or_rated(consumption)?;

        let mut elapsed = TimeDelta::zero();
        let mut energy = KilowattHours::ZERO;
        for step in self.charging_steps(charger, soc, StateOfCharge::FULL)? {
            let step = step?;
            match elapsed.checked_add(&step.whole_seconds()) {
                Some(next_elapsed) if next_elapsed <= duration => {
                    energy += step.energy;
                    elapsed = next_elapsed;
                }
                _ => {
                    trace!(soc = %step.soc, %elapsed, "out of time");
                    break;
                }
            }
        }

        let miles =
            energy.checked_div_consumption(consumption).ok_or(ChargeError::Overflow("distance"))?;
        debug!(vehicle = %self.id, %charger, %energy, %elapsed, %miles, "charged in time span");
        Ok(miles)
    }

    /// Time to charge from the `soc` up to the `target_soc`, which defaults to 90%.
    #[builder]
    pub fn time_to_charge_to_soc(
        &self,
        charger: &Charger,
        soc: i32,
        #[builder(default = DEFAULT_TARGET_SOC)] target_soc: i32,
    ) -> Result<TimeDelta, ChargeError> {
        let duration = self
            .charging_plan()
            .charger(charger)
            .soc(soc)
            .target_soc(target_soc)
            .call()?
            .iter()
            .map(ChargingStep::whole_seconds)
            .try_fold(TimeDelta::zero(), |total, step_duration| total.checked_add(&step_duration))
            .ok_or(ChargeError::Overflow("charging time"))?;
        debug!(vehicle = %self.id, %charger, soc, target_soc, %duration, "time to charge");
        Ok(duration)
    }

    /// Time to charge from the `soc` until the vehicle gains the `miles`.
    ///
    /// Unlike [`Vehicle::miles_charged_in_time_span`], the step that crosses the mileage is
    /// counted in full. If the mileage is not reachable, this is the time to full charge.
    #[builder]
    pub fn time_to_charge_given_mileage(
        &self,
        charger: &Charger,
        soc: i32,
        miles: Miles,
        consumption: Option<WattHoursPerMile>,
    ) -> Result<TimeDelta, ChargeError> {
        let soc = StateOfCharge::try_new(soc, "soc")?;
        let consumption = self.consumption_or_rated(consumption)?;
        if miles <= Miles::ZERO {
            return Err(ChargeError::out_of_range("miles", "must be positive"));
        }

        let mut elapsed = Hours::ZERO;
        let mut energy = KilowattHours::ZERO;
        let mut gained = Miles::ZERO;
        for step in self.charging_steps(charger, soc, StateOfCharge::FULL)? {
            let step = step?;
            elapsed = elapsed
                .checked_add(step.duration)
                .ok_or(ChargeError::Overflow("charging time"))?;
            energy += step.energy;
            // Truncated per step:
            let step_miles = step
                .energy
                .checked_div_consumption(consumption)
                .ok_or(ChargeError::Overflow("distance"))?;
            gained = Miles(gained.0.saturating_add(step_miles.0));
            if gained >= miles {
                trace!(soc = %step.soc, %gained, "reached the mileage");
                break;
            }
        }

        let duration = elapsed.to_time_delta().ok_or(ChargeError::Overflow("charging time"))?;
        debug!(vehicle = %self.id, %charger, %energy, %gained, %duration, "time to gain mileage");
        Ok(duration)
    }

    /// Step-by-step breakdown of charging from the `soc` up to the `target_soc` (90% by default).
    #[builder]
    pub fn charging_plan(
        &self,
        charger: &Charger,
        soc: i32,
        #[builder(default = DEFAULT_TARGET_SOC)] target_soc: i32,
    ) -> Result<Vec<ChargingStep>, ChargeError> {
        let soc = StateOfCharge::try_new(soc, "soc")?;
        let target_soc = StateOfCharge::try_new(target_soc, "target_soc")?;
        if target_soc < soc {
            return Err(ChargeError::out_of_range(
                "target_soc",
                "must not be below the starting state of charge",
            ));
        }
        self.charging_steps(charger, soc, target_soc)?.collect()
    }
}

impl Vehicle {
    /// Lazily walk the levels in `from..to` with the charger.
    pub fn charging_steps<'a>(
        &'a self,
        charger: &'a Charger,
        from: StateOfCharge,
        to: StateOfCharge,
    ) -> Result<impl Iterator<Item = Result<ChargingStep, ChargeError>> + 'a, ChargeError> {
        let curve = self.curve(charger.current_type)?;
        let energy = self.energy_per_percent();
        Ok(StateOfCharge::range(from, to)
            .map(move |soc| ChargingStep::try_new(soc, curve, charger, energy)))
    }

    pub fn curve(&self, current_type: CurrentType) -> Result<&ChargingCurve, ChargeError> {
        self.curves.get(&current_type).ok_or(ChargeError::IncompatibleCharger(current_type))
    }

    pub fn current_types(&self) -> impl Iterator<Item = CurrentType> + '_ {
        self.curves.keys().copied()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub const fn year(&self) -> Option<u16> {
        self.year
    }

    pub const fn battery_capacity(&self) -> KilowattHours {
        self.battery_capacity
    }

    pub const fn rated_consumption(&self) -> WattHoursPerMile {
        self.rated_consumption
    }

    fn energy_per_percent(&self) -> KilowattHours {
        self.battery_capacity / Decimal::ONE_HUNDRED
    }

    fn consumption_or_rated(
        &self,
        consumption: Option<WattHoursPerMile>,
    ) -> Result<WattHoursPerMile, ChargeError> {
        match consumption {
            Some(consumption) if consumption <= WattHoursPerMile::ZERO => {
                Err(ChargeError::out_of_range("consumption", "must be positive"))
            }
            Some(consumption) => Ok(consumption),
            None => Ok(self.rated_consumption),
        }
    }
}
