use crate::{core::current_type::CurrentType, quantity::power::Kilowatts};

/// Power source descriptor.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
#[display("{current_type} {max_power}")]
pub struct Charger {
    pub current_type: CurrentType,

    /// Power ceiling: the vehicle never charges faster than this.
    pub max_power: Kilowatts,
}

impl Charger {
    pub const fn new(current_type: CurrentType, max_power: Kilowatts) -> Self {
        Self { current_type, max_power }
    }

    /// AC «fast» charger.
    pub const fn fast(max_power: Kilowatts) -> Self {
        Self::new(CurrentType::Ac, max_power)
    }

    /// DC «rapid» charger.
    pub const fn rapid(max_power: Kilowatts) -> Self {
        Self::new(CurrentType::Dc, max_power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Charger::fast(Kilowatts(22.into())).current_type, CurrentType::Ac);
        assert_eq!(Charger::rapid(Kilowatts(100.into())).current_type, CurrentType::Dc);
    }

    #[test]
    fn test_display() {
        assert_eq!(Charger::rapid(Kilowatts(50.into())).to_string(), "DC 50.0 kW");
    }
}
