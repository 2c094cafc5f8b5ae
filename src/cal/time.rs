//! Times of day without a date or a time zone.

use std::fmt;

use crate::cal::field::ChronoField;
use crate::cal::unit::ChronoUnit;
use crate::cal::TimePiece;
use crate::error::Error;
use crate::util::split_cycles;


pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
pub(crate) const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1000;
pub(crate) const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000_000;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE;
pub(crate) const NANOS_PER_HOUR: i64 = NANOS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const NANOS_PER_DAY: i64 = NANOS_PER_HOUR * HOURS_PER_DAY;


/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
///
/// Arithmetic on a local time wraps around midnight. Each `plus_*` method
/// returns the new time along with the signed number of whole days that
/// were carried over, so that a date-time can apply them to its date.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nano:   i32,
}

impl LocalTime {

    /// The time at midnight, with all fields set to 0.
    pub const MIDNIGHT: LocalTime = LocalTime { hour: 0, minute: 0, second: 0, nano: 0 };

    /// The time at midday.
    pub const NOON: LocalTime = LocalTime { hour: 12, minute: 0, second: 0, nano: 0 };

    pub const MIN: LocalTime = Self::MIDNIGHT;

    /// The last representable instant of a day, `23:59:59.999999999`.
    pub const MAX: LocalTime = LocalTime { hour: 23, minute: 59, second: 59, nano: 999_999_999 };

    /// Creates a new time from an hour, minute, second, and nanosecond.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn of(hour: i64, minute: i64, second: i64, nano: i64) -> Result<Self, Error> {
        ChronoField::HourOfDay.check(hour)?;
        ChronoField::MinuteOfHour.check(minute)?;
        ChronoField::SecondOfMinute.check(second)?;
        ChronoField::NanoOfSecond.check(nano)?;

        Ok(Self { hour: hour as i8, minute: minute as i8, second: second as i8, nano: nano as i32 })
    }

    /// Creates a new time with the hour and minute fields set. The second
    /// and nanosecond fields are set to 0.
    pub fn of_hm(hour: i64, minute: i64) -> Result<Self, Error> {
        Self::of(hour, minute, 0, 0)
    }

    /// Creates a new time with the hour, minute, and second fields set.
    /// The nanosecond field is set to 0.
    pub fn of_hms(hour: i64, minute: i64, second: i64) -> Result<Self, Error> {
        Self::of(hour, minute, second, 0)
    }

    /// Computes the time given the number of seconds since midnight.
    pub fn of_second_of_day(second_of_day: i64) -> Result<Self, Error> {
        ChronoField::SecondOfDay.check(second_of_day)?;
        Ok(Self::from_nanos_unchecked(second_of_day * NANOS_PER_SECOND))
    }

    /// Computes the time given the number of nanoseconds since midnight.
    pub fn of_nano_of_day(nano_of_day: i64) -> Result<Self, Error> {
        ChronoField::NanoOfDay.check(nano_of_day)?;
        Ok(Self::from_nanos_unchecked(nano_of_day))
    }

    fn from_nanos_unchecked(nano_of_day: i64) -> Self {
        Self {
            hour:   (nano_of_day / NANOS_PER_HOUR) as i8,
            minute: (nano_of_day / NANOS_PER_MINUTE % MINUTES_PER_HOUR) as i8,
            second: (nano_of_day / NANOS_PER_SECOND % SECONDS_PER_MINUTE) as i8,
            nano:   (nano_of_day % NANOS_PER_SECOND) as i32,
        }
    }

    /// Calculates the number of seconds since midnight this time is at,
    /// ignoring nanoseconds.
    pub fn to_second_of_day(self) -> i64 {
        i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second)
    }

    /// Calculates the number of nanoseconds since midnight.
    pub fn to_nano_of_day(self) -> i64 {
        self.to_second_of_day() * NANOS_PER_SECOND + i64::from(self.nano)
    }

    pub fn nano(self) -> i64 {
        i64::from(self.nano)
    }


    // ---- arithmetic ----

    /// Adds a number of hours, wrapping around midnight, and returns the
    /// new time with the number of days that were carried.
    ///
    /// ```rust
    /// use isocal::LocalTime;
    ///
    /// let (time, days) = LocalTime::of_hm(23, 30).unwrap().plus_hours(2);
    /// assert_eq!(time, LocalTime::of_hm(1, 30).unwrap());
    /// assert_eq!(days, 1);
    /// ```
    pub fn plus_hours(self, hours: i64) -> (Self, i64) {
        self.plus_wrapping(hours, HOURS_PER_DAY, NANOS_PER_HOUR)
    }

    pub fn plus_minutes(self, minutes: i64) -> (Self, i64) {
        self.plus_wrapping(minutes, MINUTES_PER_DAY, NANOS_PER_MINUTE)
    }

    pub fn plus_seconds(self, seconds: i64) -> (Self, i64) {
        self.plus_wrapping(seconds, SECONDS_PER_DAY, NANOS_PER_SECOND)
    }

    pub fn plus_nanos(self, nanos: i64) -> (Self, i64) {
        self.plus_wrapping(nanos, NANOS_PER_DAY, 1)
    }

    pub fn minus_hours(self, hours: i64) -> (Self, i64) {
        self.minus_wrapping(hours, Self::plus_hours)
    }

    pub fn minus_minutes(self, minutes: i64) -> (Self, i64) {
        self.minus_wrapping(minutes, Self::plus_minutes)
    }

    pub fn minus_seconds(self, seconds: i64) -> (Self, i64) {
        self.minus_wrapping(seconds, Self::plus_seconds)
    }

    pub fn minus_nanos(self, nanos: i64) -> (Self, i64) {
        self.minus_wrapping(nanos, Self::plus_nanos)
    }

    /// Splits the amount into whole days and a remainder *before* scaling
    /// it to nanoseconds, so that no amount can overflow.
    fn plus_wrapping(self, amount: i64, per_day: i64, nanos_per_unit: i64) -> (Self, i64) {
        if amount == 0 {
            return (self, 0);
        }

        let (mut days, remainder) = split_cycles(amount, per_day);
        let mut nano_of_day = self.to_nano_of_day() + remainder * nanos_per_unit;

        if nano_of_day >= NANOS_PER_DAY {
            nano_of_day -= NANOS_PER_DAY;
            days += 1;
        }

        (Self::from_nanos_unchecked(nano_of_day), days)
    }

    /// Subtraction is addition of the negated amount, except for `i64::MIN`,
    /// which gets added as two halves.
    fn minus_wrapping<F>(self, amount: i64, plus: F) -> (Self, i64)
    where F: Fn(Self, i64) -> (Self, i64),
    {
        if amount == i64::MIN {
            let (time, first) = plus(self, i64::MAX);
            let (time, second) = plus(time, 1);
            (time, first + second)
        }
        else {
            plus(self, -amount)
        }
    }


    // ---- field changes ----

    pub fn with_hour(self, hour: i64) -> Result<Self, Error> {
        Self::of(hour, self.minute.into(), self.second.into(), self.nano.into())
    }

    pub fn with_minute(self, minute: i64) -> Result<Self, Error> {
        Self::of(self.hour.into(), minute, self.second.into(), self.nano.into())
    }

    pub fn with_second(self, second: i64) -> Result<Self, Error> {
        Self::of(self.hour.into(), self.minute.into(), second, self.nano.into())
    }

    pub fn with_nano(self, nano: i64) -> Result<Self, Error> {
        Self::of(self.hour.into(), self.minute.into(), self.second.into(), nano)
    }

    /// Returns a copy of this time with the given standard field set to a
    /// new value. Changes that move the time past midnight wrap around.
    pub fn with_field(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        use self::ChronoField::*;

        if !field.is_time_based() {
            return Err(Error::UnsupportedField(field.to_string()));
        }

        field.check(value)?;

        let hour = i64::from(self.hour);
        match field {
            NanoOfSecond     => self.with_nano(value),
            NanoOfDay        => Self::of_nano_of_day(value),
            MicroOfSecond    => self.with_nano(value * 1_000),
            MicroOfDay       => Self::of_nano_of_day(value * 1_000),
            MilliOfSecond    => self.with_nano(value * 1_000_000),
            MilliOfDay       => Self::of_nano_of_day(value * 1_000_000),
            SecondOfMinute   => self.with_second(value),
            SecondOfDay      => Ok(self.plus_seconds(value - self.to_second_of_day()).0),
            MinuteOfHour     => self.with_minute(value),
            MinuteOfDay      => Ok(self.plus_minutes(value - (hour * 60 + i64::from(self.minute))).0),
            HourOfAmpm       => Ok(self.plus_hours(value - hour % 12).0),
            ClockHourOfAmpm  => Ok(self.plus_hours(if value == 12 { 0 } else { value } - hour % 12).0),
            HourOfDay        => self.with_hour(value),
            ClockHourOfDay   => self.with_hour(if value == 24 { 0 } else { value }),
            AmpmOfDay        => Ok(self.plus_hours((value - hour / 12) * 12).0),
            _                => Err(Error::UnsupportedField(field.to_string())),
        }
    }

    /// Returns a copy of this time with every field smaller than the given
    /// unit set to zero.
    ///
    /// The unit must fit a whole number of times into a day.
    pub fn truncated_to(self, unit: ChronoUnit) -> Result<Self, Error> {
        match unit {
            ChronoUnit::Nanos  => return Ok(self),
            ChronoUnit::Days   => return Ok(Self::MIDNIGHT),
            _                  => {},
        }

        let duration = unit.duration();
        if duration.seconds() > SECONDS_PER_DAY {
            return Err(Error::TruncationTooLarge(unit.to_string()));
        }

        let unit_nanos = duration.seconds() * NANOS_PER_SECOND + duration.subsec_nanos();
        if NANOS_PER_DAY % unit_nanos != 0 {
            return Err(Error::TruncationRemainder(unit.to_string()));
        }

        let nano_of_day = self.to_nano_of_day();
        Ok(Self::from_nanos_unchecked(nano_of_day / unit_nanos * unit_nanos))
    }


    // ---- queries ----

    /// Returns the value of a time-based standard field.
    pub(crate) fn get_time_field(self, field: ChronoField) -> Result<i64, Error> {
        use self::ChronoField::*;

        let hour = i64::from(self.hour);
        let nano = i64::from(self.nano);

        Ok(match field {
            NanoOfSecond     => nano,
            NanoOfDay        => self.to_nano_of_day(),
            MicroOfSecond    => nano / 1_000,
            MicroOfDay       => self.to_nano_of_day() / 1_000,
            MilliOfSecond    => nano / 1_000_000,
            MilliOfDay       => self.to_nano_of_day() / 1_000_000,
            SecondOfMinute   => i64::from(self.second),
            SecondOfDay      => self.to_second_of_day(),
            MinuteOfHour     => i64::from(self.minute),
            MinuteOfDay      => hour * 60 + i64::from(self.minute),
            HourOfAmpm       => hour % 12,
            ClockHourOfAmpm  => if hour % 12 == 0 { 12 } else { hour % 12 },
            HourOfDay        => hour,
            ClockHourOfDay   => if hour == 0 { 24 } else { hour },
            AmpmOfDay        => hour / 12,
            _                => return Err(Error::UnsupportedField(field.to_string())),
        })
    }

    pub fn is_before(self, other: LocalTime) -> bool {
        self < other
    }

    pub fn is_after(self, other: LocalTime) -> bool {
        self > other
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn nanosecond(&self) -> i32 { self.nano }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn time(h: i64, m: i64, s: i64, n: i64) -> LocalTime {
        LocalTime::of(h, m, s, n).unwrap()
    }

    #[test]
    fn out_of_range() {
        assert!(LocalTime::of(24, 0, 0, 0).is_err());
        assert!(LocalTime::of(0, 60, 0, 0).is_err());
        assert!(LocalTime::of(0, 0, 60, 0).is_err());
        assert!(LocalTime::of(0, 0, 0, 1_000_000_000).is_err());
        assert!(LocalTime::of(-1, 0, 0, 0).is_err());
    }

    #[test]
    fn overflow_into_tomorrow() {
        assert_eq!(time(23, 30, 0, 0).plus_hours(2), (time(1, 30, 0, 0), 1));
    }

    #[test]
    fn underflow_into_yesterday() {
        assert_eq!(time(0, 30, 0, 0).minus_minutes(31), (time(23, 59, 0, 0), -1));
        assert_eq!(time(0, 0, 0, 0).plus_nanos(-1), (LocalTime::MAX, -1));
    }

    #[test]
    fn many_days() {
        assert_eq!(time(12, 0, 0, 0).plus_hours(24 * 10 + 13), (time(1, 0, 0, 0), 11));
        assert_eq!(time(12, 0, 0, 0).plus_seconds(-SECONDS_PER_DAY * 3), (time(12, 0, 0, 0), -3));
    }

    #[test]
    fn extreme_amounts() {
        let (_, days) = LocalTime::MIDNIGHT.plus_nanos(i64::MAX);
        assert_eq!(days, i64::MAX / NANOS_PER_DAY);

        let (_, days) = LocalTime::MIDNIGHT.minus_nanos(i64::MIN);
        assert_eq!(days, i64::MAX / NANOS_PER_DAY);
    }

    #[test]
    fn nano_of_day_round_trip() {
        let t = time(13, 45, 12, 123_456_789);
        assert_eq!(LocalTime::of_nano_of_day(t.to_nano_of_day()), Ok(t));
    }

    #[test]
    fn truncation() {
        let t = time(13, 45, 12, 123_456_789);
        assert_eq!(t.truncated_to(ChronoUnit::Minutes), Ok(time(13, 45, 0, 0)));
        assert_eq!(t.truncated_to(ChronoUnit::Millis), Ok(time(13, 45, 12, 123_000_000)));
        assert_eq!(t.truncated_to(ChronoUnit::HalfDays), Ok(time(12, 0, 0, 0)));
        assert_eq!(t.truncated_to(ChronoUnit::Days), Ok(LocalTime::MIDNIGHT));
        assert_eq!(t.truncated_to(ChronoUnit::Nanos), Ok(t));
        assert!(t.truncated_to(ChronoUnit::Weeks).is_err());
        assert!(t.truncated_to(ChronoUnit::Months).is_err());
    }

    #[test]
    fn clock_hours() {
        assert_eq!(LocalTime::MIDNIGHT.get_time_field(ChronoField::ClockHourOfDay), Ok(24));
        assert_eq!(LocalTime::NOON.get_time_field(ChronoField::ClockHourOfAmpm), Ok(12));
        assert_eq!(time(15, 0, 0, 0).get_time_field(ChronoField::HourOfAmpm), Ok(3));
        assert_eq!(time(15, 0, 0, 0).get_time_field(ChronoField::AmpmOfDay), Ok(1));
    }

    #[test]
    fn with_fields() {
        let t = time(15, 20, 0, 0);
        assert_eq!(t.with_field(ChronoField::AmpmOfDay, 0), Ok(time(3, 20, 0, 0)));
        assert_eq!(t.with_field(ChronoField::ClockHourOfDay, 24), Ok(time(0, 20, 0, 0)));
        assert_eq!(t.with_field(ChronoField::MinuteOfDay, 61), Ok(time(1, 1, 0, 0)));
        assert_eq!(t.with_field(ChronoField::MilliOfSecond, 5), Ok(time(15, 20, 0, 5_000_000)));
        assert!(t.with_field(ChronoField::HourOfDay, 24).is_err());
        assert!(t.with_field(ChronoField::DayOfMonth, 1).is_err());
    }
}
