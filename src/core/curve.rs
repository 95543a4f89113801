use serde::{Deserialize, Serialize};

use crate::{
    core::{error::ChargeError, state_of_charge::StateOfCharge},
    quantity::power::Kilowatts,
};

/// Single curve sample: the maximum rate the battery accepts at the state of charge.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChargingCurvePoint {
    pub soc: StateOfCharge,

    #[serde(rename = "max_kw")]
    pub max_power: Kilowatts,
}

impl ChargingCurvePoint {
    pub const fn new(soc: StateOfCharge, max_power: Kilowatts) -> Self {
        Self { soc, max_power }
    }
}

/// Maximum charge rate per state of charge, for one current type.
///
/// Samples are indexed directly by the state of charge. There is no interpolation:
/// every level that gets queried must have its own sample.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChargingCurve {
    rates: [Option<Kilowatts>; Self::N_SLOTS],
}

impl ChargingCurve {
    const N_SLOTS: usize = StateOfCharge::FULL.index() + 1;

    /// Same rate everywhere below full charge.
    pub fn flat(max_power: Kilowatts) -> Self {
        StateOfCharge::range(StateOfCharge::EMPTY, StateOfCharge::FULL)
            .map(|soc| ChargingCurvePoint::new(soc, max_power))
            .collect()
    }

    /// Start at `initial` and drop by `step` at each of the `at` levels.
    ///
    /// A drop applies to its level and everything above it.
    pub fn stepped(
        initial: Kilowatts,
        step: Kilowatts,
        at: &[StateOfCharge],
    ) -> Result<Self, ChargeError> {
        let mut max_power = initial;
        StateOfCharge::range(StateOfCharge::EMPTY, StateOfCharge::FULL)
            .map(|soc| {
                if at.contains(&soc) {
                    max_power -= step;
                    if max_power < Kilowatts::ZERO {
                        return Err(ChargeError::out_of_range(
                            "step",
                            "the rate must not drop below zero",
                        ));
                    }
                }
                Ok(ChargingCurvePoint::new(soc, max_power))
            })
            .collect()
    }

    /// Maximum charge rate at exactly the `soc`.
    pub fn rate_at(&self, soc: StateOfCharge) -> Result<Kilowatts, ChargeError> {
        if self.is_empty() {
            return Err(ChargeError::EmptyCurve);
        }
        self.rates[soc.index()].ok_or(ChargeError::UnknownSoc(soc))
    }

    /// Make sure every level in `from..to` has a sample.
    pub fn ensure_covers(&self, from: StateOfCharge, to: StateOfCharge) -> Result<(), ChargeError> {
        StateOfCharge::range(from, to).try_for_each(|soc| self.rate_at(soc).map(drop))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.iter().all(Option::is_none)
    }

    /// Samples in the state-of-charge order.
    pub fn points(&self) -> impl Iterator<Item = ChargingCurvePoint> + '_ {
        StateOfCharge::range(StateOfCharge::EMPTY, StateOfCharge::FULL)
            .chain([StateOfCharge::FULL])
            .filter_map(|soc| Some(ChargingCurvePoint::new(soc, self.rates[soc.index()]?)))
    }
}

impl FromIterator<ChargingCurvePoint> for ChargingCurve {
    /// Build the curve from the samples. For duplicate levels, the first sample wins.
    fn from_iter<T: IntoIterator<Item = ChargingCurvePoint>>(points: T) -> Self {
        let mut rates = [None; Self::N_SLOTS];
        for point in points {
            rates[point.soc.index()].get_or_insert(point.max_power);
        }
        Self { rates }
    }
}
