//! Countdown duration validation

use std::fmt;

use serde::Serialize;

use crate::error::{Result, TimerError};

/// Practical cap on the minutes prompt; `validate_and_combine` itself has no upper bound.
pub const MAX_INPUT_MINUTES: i64 = 999;

/// A validated countdown length in whole seconds, always at least one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TimerDuration(u64);

impl TimerDuration {
    /// Create a duration from a raw second count, rejecting zero
    pub fn from_secs(secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(TimerError::InvalidDuration(
                "total duration must be at least one second".to_string(),
            ));
        }
        Ok(Self(secs))
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format(self.0))
    }
}

/// Combine user-entered minutes and seconds into a total duration.
///
/// Requires `minutes >= 0` and `0 <= seconds <= 59`. A zero total is rejected.
pub fn validate_and_combine(minutes: i64, seconds: i64) -> Result<TimerDuration> {
    if minutes < 0 {
        return Err(TimerError::InvalidDuration(format!(
            "minutes must not be negative (got {minutes})"
        )));
    }
    if !(0..=59).contains(&seconds) {
        return Err(TimerError::InvalidDuration(format!(
            "seconds must be between 0 and 59 (got {seconds})"
        )));
    }

    let total = (minutes as u64)
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds as u64))
        .ok_or_else(|| TimerError::InvalidDuration("duration is too large".to_string()))?;

    TimerDuration::from_secs(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_rejected() {
        assert!(matches!(
            validate_and_combine(0, 0),
            Err(TimerError::InvalidDuration(_))
        ));
    }

    #[test]
    fn one_second_is_the_minimum() {
        assert_eq!(validate_and_combine(0, 1).unwrap().as_secs(), 1);
    }

    #[test]
    fn minutes_and_seconds_are_combined() {
        assert_eq!(validate_and_combine(5, 30).unwrap().as_secs(), 330);
        assert_eq!(validate_and_combine(61, 1).unwrap().as_secs(), 3661);
    }

    #[test]
    fn no_upper_bound_on_minutes() {
        let d = validate_and_combine(MAX_INPUT_MINUTES * 10, 0).unwrap();
        assert_eq!(d.as_secs(), 599_400);
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(validate_and_combine(-1, 30).is_err());
        assert!(validate_and_combine(1, 60).is_err());
        assert!(validate_and_combine(1, -1).is_err());
    }

    #[test]
    fn overflow_is_rejected_not_wrapped() {
        assert!(validate_and_combine(i64::MAX, 59).is_err());
    }

    #[test]
    fn display_uses_clock_format() {
        assert_eq!(validate_and_combine(2, 5).unwrap().to_string(), "02:05");
    }
}
