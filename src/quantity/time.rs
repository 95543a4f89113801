use chrono::TimeDelta;
use rust_decimal::{Decimal, prelude::ToPrimitive};

quantity!(Hours, via: Decimal, suffix: "h", precision: 3);

const SECONDS_PER_HOUR: i64 = 3600;
const MILLISECONDS_PER_HOUR: i64 = 3_600_000;

impl Hours {
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Convert into a time delta dropping the fractional seconds.
    ///
    /// Returns [`None`] if the time does not fit into [`TimeDelta`].
    #[must_use]
    pub fn to_whole_seconds(self) -> Option<TimeDelta> {
        let seconds = self.0.checked_mul(Decimal::from(SECONDS_PER_HOUR))?.trunc();
        TimeDelta::try_seconds(seconds.to_i64()?)
    }

    /// Convert into a time delta rounded to the nearest millisecond.
    ///
    /// Returns [`None`] if the time does not fit into [`TimeDelta`].
    #[must_use]
    pub fn to_time_delta(self) -> Option<TimeDelta> {
        let milliseconds = self.0.checked_mul(Decimal::from(MILLISECONDS_PER_HOUR))?.round();
        TimeDelta::try_milliseconds(milliseconds.to_i64()?)
    }
}

impl From<TimeDelta> for Hours {
    fn from(time_delta: TimeDelta) -> Self {
        let milliseconds = Decimal::from(time_delta.num_milliseconds());
        Self(milliseconds / Decimal::from(MILLISECONDS_PER_HOUR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_whole_seconds_truncates() {
        // 1/85 h ≈ 42.35 s:
        let hours = Hours(Decimal::ONE / Decimal::from(85));
        assert_eq!(hours.to_whole_seconds(), Some(TimeDelta::seconds(42)));
    }

    #[test]
    fn test_to_time_delta_rounds() {
        let hours = Hours(Decimal::ONE / Decimal::from(11) * Decimal::from(11));
        assert_eq!(hours.to_time_delta(), Some(TimeDelta::hours(1)));
    }

    #[test]
    fn test_overflow() {
        let hours = Hours(Decimal::from_i128_with_scale(10_i128.pow(28), 0));
        assert_eq!(hours.to_whole_seconds(), None);
        assert_eq!(hours.to_time_delta(), None);
        assert_eq!(hours.checked_add(Hours(Decimal::MAX)), None);

        // Fits into `i64` seconds, but not into `TimeDelta`:
        assert_eq!(Hours(Decimal::from(10_000_000_000_000_i64)).to_whole_seconds(), None);
    }

    #[test]
    fn test_from_time_delta() {
        assert_eq!(Hours::from(TimeDelta::minutes(90)), Hours(Decimal::new(15, 1)));
    }
}
