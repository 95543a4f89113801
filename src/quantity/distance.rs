use rust_decimal::Decimal;

use crate::quantity::energy::KilowattHours;

quantity!(WattHoursPerMile, via: Decimal, suffix: "Wh/mi", precision: 0);
quantity!(Miles, via: i64, suffix: "mi", precision: 0);

impl WattHoursPerMile {
    /// Energy needed to cover one mile.
    pub fn to_kilowatt_hours(self) -> KilowattHours {
        KilowattHours(self.0 / Decimal::ONE_THOUSAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kilowatt_hours() {
        assert_eq!(
            WattHoursPerMile(250.into()).to_kilowatt_hours(),
            KilowattHours(Decimal::new(25, 2)),
        );
    }

    #[test]
    fn test_parse_miles() {
        assert_eq!("44".parse::<Miles>().unwrap(), Miles(44));
    }
}
