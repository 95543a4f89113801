use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;

/// Whole-second duration as `9h 05m 27s`.
pub struct FormattedDuration(pub TimeDelta);

impl Debug for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let seconds = self.0.num_seconds();
        write!(f, "{}h {:02}m {:02}s", seconds / 3600, seconds % 3600 / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FormattedDuration(TimeDelta::seconds(32_727)).to_string(), "9h 05m 27s");
        assert_eq!(FormattedDuration(TimeDelta::milliseconds(1_927_059)).to_string(), "0h 32m 07s");
    }
}
