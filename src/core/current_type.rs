/// Kind of current a charger supplies.
///
/// A vehicle accepts a charger only if it has a charging curve for the charger's current type.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    clap::ValueEnum,
    derive_more::Display,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CurrentType {
    /// Alternating current, converted by the onboard charger.
    #[display("AC")]
    Ac,

    /// Direct current, bypassing the onboard charger.
    #[display("DC")]
    Dc,
}
