use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::error::ChargeError;

/// Battery charge level as an integer percentage.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct StateOfCharge(u8);

impl StateOfCharge {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Validate a caller-supplied level, naming the `argument` on failure.
    pub fn try_new(value: i32, argument: &'static str) -> Result<Self, ChargeError> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= Self::FULL.0)
            .map(Self)
            .ok_or_else(|| ChargeError::out_of_range(argument, "must be within 0..=100"))
    }

    /// Every level in `from..to`.
    pub fn range(from: Self, to: Self) -> impl Iterator<Item = Self> {
        (from.0..to.0).map(Self)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i32> for StateOfCharge {
    type Error = ChargeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value, "state_of_charge")
    }
}

impl From<StateOfCharge> for u8 {
    fn from(state_of_charge: StateOfCharge) -> Self {
        state_of_charge.0
    }
}

impl Display for StateOfCharge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_ok() {
        assert_eq!(StateOfCharge::try_from(0), Ok(StateOfCharge::EMPTY));
        assert_eq!(StateOfCharge::try_from(100), Ok(StateOfCharge::FULL));
    }

    #[test]
    fn test_try_new_out_of_range() {
        for value in [-20, -1, 101, 110, 1000] {
            assert_eq!(
                StateOfCharge::try_new(value, "target_soc"),
                Err(ChargeError::out_of_range("target_soc", "must be within 0..=100")),
            );
        }
    }

    #[test]
    fn test_range() {
        let levels: Vec<u8> = StateOfCharge::range(StateOfCharge(97), StateOfCharge::FULL)
            .map(StateOfCharge::percent)
            .collect();
        assert_eq!(levels, [97, 98, 99]);
    }

    #[test]
    fn test_deserialize_validates() {
        #[derive(Deserialize)]
        struct Wrapper {
            soc: StateOfCharge,
        }

        assert_eq!(toml::from_str::<Wrapper>("soc = 30").unwrap().soc, StateOfCharge(30));
        assert!(toml::from_str::<Wrapper>("soc = 130").is_err());
    }
}
