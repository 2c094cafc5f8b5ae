//! Exact points on a timeline.

use std::fmt;

use crate::duration::Duration;
use crate::error::Error;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since
/// the Unix epoch, and a nanosecond-of-second that is never negative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    nanos:   i32,
}

impl Instant {

    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Instant = Instant { seconds: 0, nanos: 0 };

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub const fn of_epoch_second(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Creates a new Instant from a number of seconds since the Unix epoch
    /// and a nanosecond adjustment, which may be negative or larger than a
    /// second.
    pub fn of_epoch_second_nanos(seconds: i64, nano_adjustment: i64) -> Result<Self, Error> {
        let d = Duration::of_seconds_nanos(seconds, nano_adjustment)?;
        Ok(Self { seconds: d.seconds(), nanos: d.subsec_nanos() as i32 })
    }

    /// Creates a new Instant from a number of milliseconds since the Unix
    /// epoch.
    pub fn of_epoch_milli(millis: i64) -> Self {
        let d = Duration::of_millis(millis);
        Self { seconds: d.seconds(), nanos: d.subsec_nanos() as i32 }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Result<Self, Error> {
        let (seconds, nanos) = sys_time()?;
        Ok(Self { seconds, nanos })
    }

    /// Returns the number of seconds since the Unix epoch.
    pub fn epoch_second(&self) -> i64 {
        self.seconds
    }

    /// Returns the nanosecond of the second, from 0 to 999,999,999.
    pub fn nano(&self) -> i64 {
        i64::from(self.nanos)
    }

    /// Returns the number of milliseconds since the Unix epoch, failing if
    /// it doesn’t fit in an `i64`.
    pub fn to_epoch_milli(&self) -> Result<i64, Error> {
        Duration::of_seconds_nanos(self.seconds, self.nano())?.to_millis()
    }

    pub fn checked_add(self, duration: Duration) -> Result<Self, Error> {
        let d = Duration::of_seconds_nanos(self.seconds, self.nano())?.checked_add(duration)?;
        Ok(Self { seconds: d.seconds(), nanos: d.subsec_nanos() as i32 })
    }

    pub fn checked_sub(self, duration: Duration) -> Result<Self, Error> {
        self.checked_add(duration.negated()?)
    }

    pub fn is_before(&self, other: Instant) -> bool {
        *self < other
    }

    pub fn is_after(&self, other: Instant) -> bool {
        *self > other
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanos)
    }
}
