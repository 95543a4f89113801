pub mod charger;
pub mod current_type;
pub mod curve;
pub mod error;
pub mod state_of_charge;
pub mod step;
pub mod vehicle;

pub use self::{
    charger::Charger,
    current_type::CurrentType,
    curve::{ChargingCurve, ChargingCurvePoint},
    error::ChargeError,
    state_of_charge::StateOfCharge,
    step::ChargingStep,
    vehicle::{DEFAULT_TARGET_SOC, Vehicle},
};
