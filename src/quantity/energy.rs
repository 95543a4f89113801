use std::ops::Div;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::quantity::{
    distance::{Miles, WattHoursPerMile},
    power::Kilowatts,
    time::Hours,
};

quantity!(KilowattHours, via: Decimal, suffix: "kWh", precision: 1);

impl Div<Decimal> for KilowattHours {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl KilowattHours {
    /// Time to deliver this energy at the `power`.
    ///
    /// Returns [`None`] on zero power or when the time does not fit into a [`Decimal`].
    #[must_use]
    pub fn checked_div_power(self, power: Kilowatts) -> Option<Hours> {
        self.0.checked_div(power.0).map(Hours)
    }

    /// Distance covered on this energy, truncated to whole miles.
    ///
    /// Returns [`None`] when the consumption rounds down to zero or the distance overflows.
    #[must_use]
    pub fn checked_div_consumption(self, consumption: WattHoursPerMile) -> Option<Miles> {
        let miles = self.0.checked_div(consumption.to_kilowatt_hours().0)?.trunc();
        miles.to_i64().map(Miles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_per_percent() {
        assert_eq!(KilowattHours(100.into()) / Decimal::ONE_HUNDRED, KilowattHours(1.into()));
        assert_eq!(
            KilowattHours(75.into()) / Decimal::ONE_HUNDRED,
            KilowattHours(Decimal::new(75, 2)),
        );
    }

    #[test]
    fn test_charging_time() {
        assert_eq!(
            KilowattHours(1.into()).checked_div_power(Kilowatts(100.into())),
            Some(Hours(Decimal::new(1, 2))),
        );
        assert_eq!(KilowattHours(1.into()).checked_div_power(Kilowatts::ZERO), None);
    }

    #[test]
    fn test_distance_is_truncated() {
        let energy = KilowattHours(11.into());
        assert_eq!(energy.checked_div_consumption(WattHoursPerMile(250.into())), Some(Miles(44)));
        let energy = KilowattHours(1.into());
        assert_eq!(energy.checked_div_consumption(WattHoursPerMile(300.into())), Some(Miles(3)));
    }

    #[test]
    fn test_distance_on_vanishing_consumption() {
        let energy = KilowattHours(1000.into());
        assert_eq!(energy.checked_div_consumption(WattHoursPerMile(Decimal::new(1, 28))), None);
        let energy = KilowattHours(Decimal::MAX);
        assert_eq!(energy.checked_div_consumption(WattHoursPerMile(Decimal::new(1, 3))), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(Decimal::new(125, 1)).to_string(), "12.5 kWh");
    }
}
