#[macro_use]
mod macros;

pub mod distance;
pub mod energy;
pub mod power;
pub mod time;
mod zero;

pub use self::zero::Zero;
