use chrono::TimeDelta;

use crate::{
    core::{
        charger::Charger,
        curve::ChargingCurve,
        error::ChargeError,
        state_of_charge::StateOfCharge,
    },
    quantity::{energy::KilowattHours, power::Kilowatts, time::Hours},
};

/// Charging from one state-of-charge percentage point to the next.
///
/// The whole step runs at the rate sampled at its starting level.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargingStep {
    /// Starting level.
    pub soc: StateOfCharge,

    /// Rate the battery accepts at the starting level.
    pub curve_rate: Kilowatts,

    /// Actual rate, capped by the charger.
    pub rate: Kilowatts,

    /// Energy delivered: one percent of the battery capacity.
    pub energy: KilowattHours,

    pub duration: Hours,

    whole_seconds: TimeDelta,
}

impl ChargingStep {
    pub fn try_new(
        soc: StateOfCharge,
        curve: &ChargingCurve,
        charger: &Charger,
        energy: KilowattHours,
    ) -> Result<Self, ChargeError> {
        let curve_rate = curve.rate_at(soc)?;
        let rate = curve_rate.min(charger.max_power);
        if rate <= Kilowatts::ZERO {
            return Err(ChargeError::NoChargingPower(soc));
        }
        let duration =
            energy.checked_div_power(rate).ok_or(ChargeError::Overflow("charging time"))?;
        let whole_seconds =
            duration.to_whole_seconds().ok_or(ChargeError::Overflow("charging time"))?;
        Ok(Self { soc, curve_rate, rate, energy, duration, whole_seconds })
    }

    /// Step duration without the fractional seconds.
    #[must_use]
    pub const fn whole_seconds(&self) -> TimeDelta {
        self.whole_seconds
    }

    /// Whether the charger, and not the battery, limits the rate.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.rate < self.curve_rate
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::core::curve::ChargingCurvePoint;

    #[test]
    fn test_capped_by_charger() {
        let curve = ChargingCurve::flat(Kilowatts(150.into()));
        let step = ChargingStep::try_new(
            StateOfCharge::EMPTY,
            &curve,
            &Charger::rapid(Kilowatts(50.into())),
            KilowattHours(1.into()),
        )
        .unwrap();
        assert!(step.is_capped());
        assert_eq!(step.rate, Kilowatts(50.into()));
        assert_eq!(step.whole_seconds(), TimeDelta::seconds(72));
    }

    #[test]
    fn test_capped_by_battery() {
        let curve = ChargingCurve::flat(Kilowatts(11.into()));
        let step = ChargingStep::try_new(
            StateOfCharge::EMPTY,
            &curve,
            &Charger::fast(Kilowatts(22.into())),
            KilowattHours(1.into()),
        )
        .unwrap();
        assert!(!step.is_capped());
        assert_eq!(step.rate, Kilowatts(11.into()));
        assert_eq!(step.whole_seconds(), TimeDelta::seconds(327));
    }

    #[test]
    fn test_vanishing_rate_overflows() {
        let curve = ChargingCurve::flat(Kilowatts(11.into()));
        assert_eq!(
            ChargingStep::try_new(
                StateOfCharge::EMPTY,
                &curve,
                &Charger::fast(Kilowatts(Decimal::new(1, 28))),
                KilowattHours(1.into()),
            ),
            Err(ChargeError::Overflow("charging time")),
        );
    }

    #[test]
    fn test_zero_rate() {
        let curve: ChargingCurve =
            [ChargingCurvePoint::new(StateOfCharge::EMPTY, Kilowatts::ZERO)].into_iter().collect();
        assert_eq!(
            ChargingStep::try_new(
                StateOfCharge::EMPTY,
                &curve,
                &Charger::fast(Kilowatts(22.into())),
                KilowattHours(1.into()),
            ),
            Err(ChargeError::NoChargingPower(StateOfCharge::EMPTY)),
        );
    }
}
