//! Lengths of time on the timeline.

use std::fmt;
use std::ops::{Add, Sub, Mul, Neg};

use crate::error::Error;


const NANOS_PER_SECOND: i64 = 1_000_000_000;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// The seconds part carries the sign; the nanosecond part is always
/// between 0 and 999,999,999, so -0.5s is stored as -1s + 500,000,000ns.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

impl Duration {

    /// A zero-length duration.
    pub const ZERO: Duration = Duration { seconds: 0, nanos: 0 };

    /// The longest representable duration.
    pub const MAX: Duration = Duration { seconds: i64::MAX, nanos: 999_999_999 };

    /// Create a new duration that’s the given number of seconds long.
    pub const fn of_seconds(seconds: i64) -> Duration {
        Duration { seconds, nanos: 0 }
    }

    /// Create a new duration from a number of seconds and a nanosecond
    /// adjustment, which may be negative or bigger than a second.
    pub fn of_seconds_nanos(seconds: i64, nano_adjustment: i64) -> Result<Duration, Error> {
        let seconds = seconds.checked_add(nano_adjustment.div_euclid(NANOS_PER_SECOND))
                             .ok_or(Error::Overflow("Duration::of_seconds_nanos"))?;
        let nanos = nano_adjustment.rem_euclid(NANOS_PER_SECOND) as i32;
        Ok(Duration { seconds, nanos })
    }

    /// Create a new duration that’s the given number of milliseconds long.
    pub fn of_millis(millis: i64) -> Duration {
        Duration {
            seconds: millis.div_euclid(1000),
            nanos: (millis.rem_euclid(1000) * 1_000_000) as i32,
        }
    }

    /// Create a new duration that’s the given number of nanoseconds long.
    pub fn of_nanos(nanos: i64) -> Duration {
        Duration {
            seconds: nanos.div_euclid(NANOS_PER_SECOND),
            nanos: nanos.rem_euclid(NANOS_PER_SECOND) as i32,
        }
    }

    /// The whole seconds part of this duration, which carries its sign.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The nanosecond part, from 0 to 999,999,999.
    pub fn subsec_nanos(&self) -> i64 {
        i64::from(self.nanos)
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// The total length in milliseconds, rounding towards negative infinity.
    pub fn to_millis(&self) -> Result<i64, Error> {
        self.seconds.checked_mul(1000)
            .and_then(|ms| ms.checked_add(i64::from(self.nanos / 1_000_000)))
            .ok_or(Error::Overflow("Duration::to_millis"))
    }

    pub fn checked_add(self, rhs: Duration) -> Result<Duration, Error> {
        let seconds = self.seconds.checked_add(rhs.seconds)
                                  .ok_or(Error::Overflow("Duration::checked_add"))?;
        Duration::of_seconds_nanos(seconds, i64::from(self.nanos) + i64::from(rhs.nanos))
    }

    pub fn checked_sub(self, rhs: Duration) -> Result<Duration, Error> {
        let seconds = self.seconds.checked_sub(rhs.seconds)
                                  .ok_or(Error::Overflow("Duration::checked_sub"))?;
        Duration::of_seconds_nanos(seconds, i64::from(self.nanos) - i64::from(rhs.nanos))
    }

    pub fn checked_mul(self, amount: i64) -> Result<Duration, Error> {
        let total = (i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)) * i128::from(amount);
        let seconds = total.div_euclid(i128::from(NANOS_PER_SECOND));
        if seconds > i128::from(i64::MAX) || seconds < i128::from(i64::MIN) {
            return Err(Error::Overflow("Duration::checked_mul"));
        }

        Ok(Duration {
            seconds: seconds as i64,
            nanos: total.rem_euclid(i128::from(NANOS_PER_SECOND)) as i32,
        })
    }

    pub fn negated(self) -> Result<Duration, Error> {
        Duration::ZERO.checked_sub(self)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}s/{}ns)", self.seconds, self.nanos)
    }
}

/// # Panics
///
/// Panics on overflow, as with `std::time::Duration`. Use `checked_add`
/// to handle it instead.
impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("overflow when adding durations")
    }
}

/// # Panics
///
/// Panics on overflow. Use `checked_sub` to handle it instead.
impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("overflow when subtracting durations")
    }
}

/// # Panics
///
/// Panics on overflow. Use `checked_mul` to handle it instead.
impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, amount: i64) -> Duration {
        self.checked_mul(amount).expect("overflow when multiplying duration")
    }
}

/// # Panics
///
/// Panics when negating the smallest duration. Use `negated` to handle it
/// instead.
impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self.negated().expect("overflow when negating duration")
    }
}
