use crate::core::{current_type::CurrentType, state_of_charge::StateOfCharge};

/// Charging calculation failure.
///
/// None of these are transient: the same inputs always fail the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChargeError {
    #[error("`{argument}` is out of range: {reason}")]
    OutOfRange { argument: &'static str, reason: &'static str },

    #[error("the vehicle does not accept {0} charging")]
    IncompatibleCharger(CurrentType),

    #[error("the charging curve has no points")]
    EmptyCurve,

    #[error("the charging curve has no point at {0}")]
    UnknownSoc(StateOfCharge),

    #[error("the charging rate at {0} is not positive")]
    NoChargingPower(StateOfCharge),

    /// Valid but extreme inputs pushed the result beyond the decimal or time range.
    #[error("the {0} is out of the representable range")]
    Overflow(&'static str),
}

impl ChargeError {
    pub(crate) const fn out_of_range(argument: &'static str, reason: &'static str) -> Self {
        Self::OutOfRange { argument, reason }
    }
}
