//! Date-times without a time zone.

use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::date::LocalDate;
use crate::cal::days::{Month, Weekday};
use crate::cal::field::{ChronoField, Field, ValueRange};
use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::time::{LocalTime, MICROS_PER_DAY, MILLIS_PER_DAY, NANOS_PER_DAY, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::cal::unit::{ChronoUnit, Unit};
use crate::cal::zone::{ZoneId, ZonedDateTime};
use crate::cal::{DatePiece, TimePiece};
use crate::clock::Clock;
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;
use crate::util::{checked_add, checked_mul, split_cycles};


/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
///
/// It is made of a `LocalDate` and a `LocalTime`, and orders by the date
/// first, then the time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {

    /// The earliest supported date-time, `-999999999-01-01T00:00`.
    pub const MIN: LocalDateTime = LocalDateTime { date: LocalDate::MIN, time: LocalTime::MIN };

    /// The latest supported date-time, `+999999999-12-31T23:59:59.999999999`.
    pub const MAX: LocalDateTime = LocalDateTime { date: LocalDate::MAX, time: LocalTime::MAX };

    /// Creates a new local date-time from a date and a time.
    pub fn of(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    pub fn of_date_and_time(date: LocalDate, time: LocalTime) -> Self {
        Self::of(date, time)
    }

    /// Creates a new local date-time from every one of its fields.
    ///
    /// ```rust
    /// use isocal::LocalDateTime;
    ///
    /// let datetime = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
    /// assert_eq!(datetime.to_string(), "2007-12-03T10:15:30");
    /// ```
    pub fn of_numbers(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64, nano: i64) -> Result<Self, Error> {
        let date = LocalDate::of(year, month, day)?;
        let time = LocalTime::of(hour, minute, second, nano)?;
        Ok(Self { date, time })
    }

    /// Computes the local date-time at a number of seconds since the Unix
    /// epoch, as seen from the given offset.
    pub fn of_epoch_second(epoch_second: i64, nano: i64, offset: ZoneOffset) -> Result<Self, Error> {
        ChronoField::NanoOfSecond.check(nano)?;

        let local_second = checked_add(epoch_second, offset.total_seconds(), "of_epoch_second")?;
        let (epoch_day, second_of_day) = split_cycles(local_second, SECONDS_PER_DAY);

        let date = LocalDate::of_epoch_day(epoch_day)?;
        let time = LocalTime::of_nano_of_day(second_of_day * NANOS_PER_SECOND + nano)?;
        Ok(Self { date, time })
    }

    /// Computes the local date-time at an instant, in the given zone.
    pub fn of_instant(instant: Instant, zone: &ZoneId) -> Result<Self, Error> {
        let offset = zone.offset_at(instant)?;
        Self::of_epoch_second(instant.epoch_second(), instant.nano(), offset)
    }

    /// Returns the current date-time in the host’s default time zone.
    pub fn now() -> Result<Self, Error> {
        Self::now_with(&Clock::system_default_zone())
    }

    /// Returns the current date-time in the given zone.
    pub fn now_in(zone: &ZoneId) -> Result<Self, Error> {
        Self::now_with(&Clock::system(zone.clone()))
    }

    /// Returns the date-time that the given clock currently reads.
    pub fn now_with(clock: &Clock) -> Result<Self, Error> {
        let instant = clock.instant()?;
        Self::of_instant(instant, clock.zone())
    }

    pub fn to_local_date(&self) -> LocalDate {
        self.date
    }

    pub fn to_local_time(&self) -> LocalTime {
        self.time
    }

    /// The number of seconds between the Unix epoch and this date-time, if
    /// it were observed at the given offset.
    pub fn to_epoch_second(&self, offset: ZoneOffset) -> i64 {
        self.date.to_epoch_day() * SECONDS_PER_DAY + self.time.to_second_of_day() - offset.total_seconds()
    }

    fn with(self, date: LocalDate, time: LocalTime) -> Self {
        if date == self.date && time == self.time {
            self
        }
        else {
            Self { date, time }
        }
    }

    /// Applies the result of a `LocalTime` addition, carrying any whole
    /// days over to the date.
    fn with_carry(self, (time, days): (LocalTime, i64)) -> Result<Self, Error> {
        let date = self.date.plus_days(days)?;
        Ok(self.with(date, time))
    }


    // ---- arithmetic ----

    pub fn plus_years(self, years: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.plus_years(years)?, self.time))
    }

    pub fn plus_months(self, months: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.plus_months(months)?, self.time))
    }

    pub fn plus_weeks(self, weeks: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.plus_weeks(weeks)?, self.time))
    }

    pub fn plus_days(self, days: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.plus_days(days)?, self.time))
    }

    /// Adds a number of hours, moving to the next or previous day when the
    /// time passes midnight.
    ///
    /// ```rust
    /// use isocal::LocalDateTime;
    ///
    /// let datetime = LocalDateTime::of_numbers(2012, 12, 31, 23, 30, 0, 0).unwrap();
    /// assert_eq!(datetime.plus_hours(2).unwrap().to_string(), "2013-01-01T01:30");
    /// ```
    pub fn plus_hours(self, hours: i64) -> Result<Self, Error> {
        self.with_carry(self.time.plus_hours(hours))
    }

    pub fn plus_minutes(self, minutes: i64) -> Result<Self, Error> {
        self.with_carry(self.time.plus_minutes(minutes))
    }

    pub fn plus_seconds(self, seconds: i64) -> Result<Self, Error> {
        self.with_carry(self.time.plus_seconds(seconds))
    }

    pub fn plus_nanos(self, nanos: i64) -> Result<Self, Error> {
        self.with_carry(self.time.plus_nanos(nanos))
    }

    pub fn minus_years(self, years: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.minus_years(years)?, self.time))
    }

    pub fn minus_months(self, months: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.minus_months(months)?, self.time))
    }

    pub fn minus_weeks(self, weeks: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.minus_weeks(weeks)?, self.time))
    }

    pub fn minus_days(self, days: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.minus_days(days)?, self.time))
    }

    pub fn minus_hours(self, hours: i64) -> Result<Self, Error> {
        self.with_carry(self.time.minus_hours(hours))
    }

    pub fn minus_minutes(self, minutes: i64) -> Result<Self, Error> {
        self.with_carry(self.time.minus_minutes(minutes))
    }

    pub fn minus_seconds(self, seconds: i64) -> Result<Self, Error> {
        self.with_carry(self.time.minus_seconds(seconds))
    }

    pub fn minus_nanos(self, nanos: i64) -> Result<Self, Error> {
        self.with_carry(self.time.minus_nanos(nanos))
    }

    /// Adds an amount of any unit. Standard units are handled here; other
    /// units are asked to add themselves.
    pub fn plus<'a, U: Into<Unit<'a>>>(self, amount: i64, unit: U) -> Result<Self, Error> {
        match unit.into() {
            Unit::Chrono(unit)    => self.plus_chrono(amount, unit),
            Unit::External(unit)  => unit.add_to(self, amount),
        }
    }

    fn plus_chrono(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        use self::ChronoUnit::*;

        match unit {
            Nanos     => self.plus_nanos(amount),
            Micros    => self.plus_days(amount / MICROS_PER_DAY)?.plus_nanos((amount % MICROS_PER_DAY) * 1_000),
            Millis    => self.plus_days(amount / MILLIS_PER_DAY)?.plus_nanos((amount % MILLIS_PER_DAY) * 1_000_000),
            Seconds   => self.plus_seconds(amount),
            Minutes   => self.plus_minutes(amount),
            Hours     => self.plus_hours(amount),
            HalfDays  => self.plus_days(amount / 2)?.plus_hours((amount % 2) * 12),
            Forever   => Err(Error::UnsupportedUnit(unit.to_string())),
            _         => Ok(self.with(self.date.plus(amount, unit)?, self.time)),
        }
    }

    /// Subtracts an amount of any unit.
    pub fn minus<'a, U: Into<Unit<'a>>>(self, amount: i64, unit: U) -> Result<Self, Error> {
        let unit = unit.into();
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        }
        else {
            self.plus(-amount, unit)
        }
    }

    /// Adds an exact duration. Only the final result has to be in range,
    /// even for a negative duration near either end of the calendar.
    pub fn plus_duration(self, duration: Duration) -> Result<Self, Error> {
        let (days, seconds) = split_cycles(duration.seconds(), SECONDS_PER_DAY);
        self.plus_days_and_nanos(days, seconds * NANOS_PER_SECOND + duration.subsec_nanos())
    }

    /// Subtracts an exact duration.
    pub fn minus_duration(self, duration: Duration) -> Result<Self, Error> {
        let (days, seconds) = split_cycles(duration.seconds(), SECONDS_PER_DAY);
        self.plus_days_and_nanos(-days, -(seconds * NANOS_PER_SECOND + duration.subsec_nanos()))
    }

    /// Adds whole days and at most a day’s worth of nanoseconds (plus a
    /// second) in one step, so the date only moves once.
    fn plus_days_and_nanos(self, days: i64, nanos: i64) -> Result<Self, Error> {
        let (carry, nano_of_day) = split_cycles(self.time.to_nano_of_day() + nanos, NANOS_PER_DAY);
        let date = self.date.plus_days(checked_add(days, carry, "plus_duration")?)?;
        Ok(self.with(date, LocalTime::of_nano_of_day(nano_of_day)?))
    }


    // ---- field changes ----

    pub fn with_year(self, year: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.with_year(year)?, self.time))
    }

    pub fn with_month(self, month: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.with_month(month)?, self.time))
    }

    pub fn with_day_of_month(self, day: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.with_day_of_month(day)?, self.time))
    }

    pub fn with_day_of_year(self, day_of_year: i64) -> Result<Self, Error> {
        Ok(self.with(self.date.with_day_of_year(day_of_year)?, self.time))
    }

    pub fn with_hour(self, hour: i64) -> Result<Self, Error> {
        Ok(self.with(self.date, self.time.with_hour(hour)?))
    }

    pub fn with_minute(self, minute: i64) -> Result<Self, Error> {
        Ok(self.with(self.date, self.time.with_minute(minute)?))
    }

    pub fn with_second(self, second: i64) -> Result<Self, Error> {
        Ok(self.with(self.date, self.time.with_second(second)?))
    }

    pub fn with_nano(self, nano: i64) -> Result<Self, Error> {
        Ok(self.with(self.date, self.time.with_nano(nano)?))
    }

    /// Returns a copy of this date-time with a field set to a new value.
    ///
    /// ```rust
    /// use isocal::{LocalDateTime, ChronoField};
    ///
    /// let datetime = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
    /// let changed = datetime.with_field(ChronoField::DayOfYear, 1).unwrap();
    /// assert_eq!(changed.to_string(), "2007-01-01T10:15:30");
    /// ```
    pub fn with_field<'a, F: Into<Field<'a>>>(self, field: F, value: i64) -> Result<Self, Error> {
        match field.into() {
            Field::Chrono(field) if field.is_time_based()  => Ok(self.with(self.date, self.time.with_field(field, value)?)),
            Field::Chrono(field) if field.is_date_based()  => Ok(self.with(self.date.with_field(field, value)?, self.time)),
            Field::Chrono(field)                           => Err(Error::UnsupportedField(field.to_string())),
            Field::External(field)                         => field.adjust_into(self, value),
        }
    }

    /// Returns a copy of this date-time adjusted by the given adjuster,
    /// which can be a date, a time, or a function.
    pub fn with_adjuster<A: Adjuster>(self, adjuster: A) -> Result<Self, Error> {
        adjuster.adjust_into(self)
    }

    /// Returns a copy of this date-time with the time truncated to the
    /// given unit.
    pub fn truncated_to(self, unit: ChronoUnit) -> Result<Self, Error> {
        Ok(self.with(self.date, self.time.truncated_to(unit)?))
    }


    // ---- queries ----

    /// Whether the given field can be read from this date-time.
    pub fn is_supported<'a, F: Into<Field<'a>>>(&self, field: F) -> bool {
        match field.into() {
            Field::Chrono(field)    => field.is_date_based() || field.is_time_based(),
            Field::External(field)  => field.is_supported_by(self),
        }
    }

    /// Whether the given unit can be added to this date-time.
    pub fn is_unit_supported<'a, U: Into<Unit<'a>>>(&self, unit: U) -> bool {
        match unit.into() {
            Unit::Chrono(unit)    => unit != ChronoUnit::Forever,
            Unit::External(unit)  => unit.is_supported_by(self),
        }
    }

    /// The range of valid values for a field, refined by this date-time
    /// where the field’s range depends on the month or year.
    pub fn range<'a, F: Into<Field<'a>>>(&self, field: F) -> Result<ValueRange, Error> {
        match field.into() {
            Field::Chrono(field) if field.is_time_based()  => Ok(field.range()),
            Field::Chrono(field)                           => self.date.date_field_range(field),
            Field::External(field)                         => field.range_refined_by(self),
        }
    }

    /// Reads a field as an `i32`.
    ///
    /// This fails with an arithmetic error for a field whose values may not
    /// fit, such as the nano-of-day or the epoch-day, even if this
    /// particular value would.
    pub fn get<'a, F: Into<Field<'a>>>(&self, field: F) -> Result<i32, Error> {
        let field = field.into();
        let range = self.range(field)?;
        if !range.is_int_value() {
            return Err(Error::FieldTooLarge(field.to_string()));
        }

        let value = self.get_long(field)?;
        match field {
            Field::Chrono(chrono) => range.check_valid_int_value(value, chrono),
            Field::External(_)    => {
                if range.is_valid_value(value) {
                    Ok(value as i32)
                }
                else {
                    Err(Error::OutOfRange { field: field.to_string(), value, range: range.to_string() })
                }
            },
        }
    }

    /// Reads a field as an `i64`.
    pub fn get_long<'a, F: Into<Field<'a>>>(&self, field: F) -> Result<i64, Error> {
        match field.into() {
            Field::Chrono(field) if field.is_time_based()  => self.time.get_time_field(field),
            Field::Chrono(field)                           => self.date.get_date_field(field),
            Field::External(field)                         => field.get_from(self),
        }
    }

    /// Asks a query function about this date-time, returning whatever it
    /// works out.
    ///
    /// ```rust
    /// use isocal::{LocalDateTime, DatePiece};
    ///
    /// let datetime = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
    /// let quarter = datetime.query(|dt| (dt.month().value() - 1) / 3 + 1);
    /// assert_eq!(quarter, 4);
    /// ```
    pub fn query<R, Q>(&self, query: Q) -> R
    where Q: FnOnce(&LocalDateTime) -> R,
    {
        query(self)
    }

    /// Calculates the amount of time until another date-time in terms of
    /// the given unit. Only whole units count, so the result is truncated
    /// towards zero.
    ///
    /// ```rust
    /// use isocal::{LocalDateTime, ChronoUnit};
    ///
    /// let start = LocalDateTime::of_numbers(2012, 6, 15, 12, 0, 0, 0).unwrap();
    /// let end = LocalDateTime::of_numbers(2012, 8, 15, 11, 59, 0, 0).unwrap();
    /// assert_eq!(start.until(&end, ChronoUnit::Months), Ok(1));
    /// ```
    pub fn until<'a, U: Into<Unit<'a>>>(&self, end: &LocalDateTime, unit: U) -> Result<i64, Error> {
        match unit.into() {
            Unit::Chrono(unit) if unit.is_date_based()  => self.date_until(end, unit),
            Unit::Chrono(unit) if unit.is_time_based()  => self.time_until(end, unit),
            Unit::Chrono(unit)                          => Err(Error::UnsupportedUnit(unit.to_string())),
            Unit::External(unit)                        => unit.between(self, end),
        }
    }

    /// A date-based `until` ignores a final partial day: when the end’s
    /// time-of-day hasn’t reached the start’s, its date is moved one day
    /// back towards the start.
    fn date_until(&self, end: &LocalDateTime, unit: ChronoUnit) -> Result<i64, Error> {
        let mut end_date = end.date;
        if end_date > self.date && end.time < self.time {
            end_date = end_date.minus_days(1)?;
        }
        else if end_date < self.date && end.time > self.time {
            end_date = end_date.plus_days(1)?;
        }

        self.date.until(end_date, unit)
    }

    /// A time-based `until` counts the nanoseconds between the two, split
    /// into whole days and a same-signed remainder so it only overflows when
    /// the answer does.
    fn time_until(&self, end: &LocalDateTime, unit: ChronoUnit) -> Result<i64, Error> {
        let unit_length = unit.duration();
        let unit_nanos = unit_length.seconds() * NANOS_PER_SECOND + unit_length.subsec_nanos();

        let mut days = self.date.days_until(end.date);
        let mut nanos = end.time.to_nano_of_day() - self.time.to_nano_of_day();

        if days > 0 && nanos < 0 {
            days -= 1;
            nanos += NANOS_PER_DAY;
        }
        else if days < 0 && nanos > 0 {
            days += 1;
            nanos -= NANOS_PER_DAY;
        }

        let whole_days = checked_mul(days, NANOS_PER_DAY / unit_nanos, "until")?;
        checked_add(whole_days, nanos / unit_nanos, "until")
    }


    // ---- zones and comparison ----

    /// Combines this date-time with an offset.
    pub fn at_offset(self, offset: ZoneOffset) -> OffsetDateTime {
        OffsetDateTime::of(self, offset)
    }

    /// Places this date-time in a zone. If it falls in a gap, it is moved
    /// later by the length of the gap; if it falls in an overlap, the
    /// earlier offset is used.
    pub fn at_zone(self, zone: &ZoneId) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_local(self, zone.clone(), None)
    }

    /// Places this date-time in a zone, failing if it falls in a gap or an
    /// overlap.
    pub fn at_zone_strict(self, zone: &ZoneId) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_strict(self, zone.clone())
    }

    pub fn is_before(&self, other: &LocalDateTime) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &LocalDateTime) -> bool {
        self > other
    }

    pub fn is_equal(&self, other: &LocalDateTime) -> bool {
        self == other
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn nanosecond(&self) -> i32 { self.time.nanosecond() }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}

impl From<OffsetDateTime> for LocalDateTime {
    fn from(odt: OffsetDateTime) -> Self {
        odt.to_local_date_time()
    }
}

impl<'a> From<&'a ZonedDateTime> for LocalDateTime {
    fn from(zdt: &'a ZonedDateTime) -> Self {
        zdt.to_local_date_time()
    }
}

impl From<ZonedDateTime> for LocalDateTime {
    fn from(zdt: ZonedDateTime) -> Self {
        zdt.to_local_date_time()
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Result<LocalDateTime, Error>;

    fn add(self, duration: Duration) -> Self::Output {
        self.plus_duration(duration)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Result<LocalDateTime, Error>;

    fn sub(self, duration: Duration) -> Self::Output {
        self.minus_duration(duration)
    }
}


/// Something that knows how to change a date-time: a date replaces the
/// date, a time replaces the time, and a function computes a new value.
pub trait Adjuster {
    fn adjust_into(self, datetime: LocalDateTime) -> Result<LocalDateTime, Error>;
}

impl Adjuster for LocalDateTime {
    fn adjust_into(self, _datetime: LocalDateTime) -> Result<LocalDateTime, Error> {
        Ok(self)
    }
}

impl Adjuster for LocalDate {
    fn adjust_into(self, datetime: LocalDateTime) -> Result<LocalDateTime, Error> {
        Ok(datetime.with(self, datetime.time))
    }
}

impl Adjuster for LocalTime {
    fn adjust_into(self, datetime: LocalDateTime) -> Result<LocalDateTime, Error> {
        Ok(datetime.with(datetime.date, self))
    }
}

impl<F> Adjuster for F
where F: FnOnce(LocalDateTime) -> Result<LocalDateTime, Error>,
{
    fn adjust_into(self, datetime: LocalDateTime) -> Result<LocalDateTime, Error> {
        self(datetime)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn datetime(y: i64, mo: i64, d: i64, h: i64, mi: i64, s: i64) -> LocalDateTime {
        LocalDateTime::of_numbers(y, mo, d, h, mi, s, 0).unwrap()
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn hours_carry_into_the_date() {
            let start = datetime(2012, 12, 31, 23, 30, 0);
            assert_eq!(start.plus_hours(2).unwrap(), datetime(2013, 1, 1, 1, 30, 0));
            assert_eq!(start.plus_hours(-48).unwrap(), datetime(2012, 12, 29, 23, 30, 0));
        }

        #[test]
        fn minus_min_value() {
            let start = datetime(2012, 12, 31, 23, 30, 0);
            assert!(start.minus_nanos(i64::MIN).is_ok());
            assert!(start.minus_seconds(i64::MIN).is_err());
        }

        #[test]
        fn micros_and_millis() {
            let start = datetime(2000, 1, 1, 0, 0, 0);
            let micros = MICROS_PER_DAY * 3 + 1_500_000;
            assert_eq!(start.plus(micros, ChronoUnit::Micros).unwrap(), datetime(2000, 1, 4, 0, 0, 1).with_nano(500_000_000).unwrap());
            assert_eq!(start.plus(-1, ChronoUnit::Millis).unwrap(), LocalDateTime::of_numbers(1999, 12, 31, 23, 59, 59, 999_000_000).unwrap());
        }

        #[test]
        fn half_days() {
            let start = datetime(2000, 1, 1, 6, 0, 0);
            assert_eq!(start.plus(3, ChronoUnit::HalfDays).unwrap(), datetime(2000, 1, 2, 18, 0, 0));
            assert_eq!(start.plus(257, ChronoUnit::HalfDays).unwrap(), datetime(2000, 5, 8, 18, 0, 0));
        }

        #[test]
        fn date_units() {
            let start = datetime(2007, 3, 31, 10, 0, 0);
            assert_eq!(start.plus(1, ChronoUnit::Months).unwrap(), datetime(2007, 4, 30, 10, 0, 0));
            assert_eq!(start.minus(1, ChronoUnit::Decades).unwrap(), datetime(1997, 3, 31, 10, 0, 0));
        }

        #[test]
        fn forever() {
            let start = datetime(2007, 3, 31, 10, 0, 0);
            assert_eq!(start.plus(1, ChronoUnit::Forever), Err(Error::UnsupportedUnit("Forever".into())));
        }

        #[test]
        fn durations() {
            let start = datetime(2007, 3, 31, 10, 0, 0);
            assert_eq!((start + Duration::of_millis(-1500)).unwrap(), LocalDateTime::of_numbers(2007, 3, 31, 9, 59, 58, 500_000_000).unwrap());
            assert_eq!((start - Duration::of_seconds(36_000)).unwrap(), datetime(2007, 3, 31, 0, 0, 0));
        }

        #[test]
        fn negative_durations_at_the_ends_of_the_calendar() {
            let first = LocalDateTime::of(LocalDate::MIN, LocalTime::of(0, 0, 0, 600_000_000).unwrap());
            let moved = first.plus_duration(Duration::of_millis(-500)).unwrap();
            assert_eq!(moved, LocalDateTime::of(LocalDate::MIN, LocalTime::of(0, 0, 0, 100_000_000).unwrap()));

            let last = LocalDateTime::of(LocalDate::MAX, LocalTime::of(23, 59, 59, 300_000_000).unwrap());
            let moved = last.minus_duration(Duration::of_millis(-500)).unwrap();
            assert_eq!(moved, LocalDateTime::of(LocalDate::MAX, LocalTime::of(23, 59, 59, 800_000_000).unwrap()));
        }

        #[test]
        fn durations_past_the_ends_of_the_calendar() {
            assert!(LocalDateTime::MIN.plus_duration(Duration::of_nanos(-1)).is_err());
            assert!(LocalDateTime::MAX.minus_duration(Duration::of_nanos(-1)).is_err());
            assert!(LocalDateTime::MAX.minus_duration(Duration::MAX).is_err());
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn get_int_fields() {
            let dt = datetime(2007, 12, 3, 10, 15, 30);
            assert_eq!(dt.get(ChronoField::HourOfDay), Ok(10));
            assert_eq!(dt.get(ChronoField::DayOfWeek), Ok(1));
            assert_eq!(dt.get(ChronoField::ClockHourOfAmpm), Ok(10));
        }

        #[test]
        fn get_too_large() {
            let dt = datetime(2007, 12, 3, 10, 15, 30);
            assert!(dt.get(ChronoField::NanoOfDay).unwrap_err().is_arithmetic());
            assert!(dt.get(ChronoField::EpochDay).unwrap_err().is_arithmetic());
            assert_eq!(dt.get_long(ChronoField::EpochDay), Ok(13_850));
        }

        #[test]
        fn unsupported() {
            let dt = datetime(2007, 12, 3, 10, 15, 30);
            assert!(!dt.is_supported(ChronoField::OffsetSeconds));
            assert!(dt.get_long(ChronoField::InstantSeconds).is_err());
            assert!(dt.with_field(ChronoField::OffsetSeconds, 0).is_err());
            assert!(!dt.is_unit_supported(ChronoUnit::Forever));
        }

        #[test]
        fn ranges() {
            let dt = datetime(2008, 2, 3, 10, 15, 30);
            assert_eq!(dt.range(ChronoField::DayOfMonth), Ok(ValueRange::of(1, 29)));
            assert_eq!(dt.range(ChronoField::HourOfDay), Ok(ValueRange::of(0, 23)));
        }

        #[test]
        fn adjusters() {
            let dt = datetime(2008, 2, 3, 10, 15, 30);
            assert_eq!(dt.with_adjuster(LocalTime::NOON).unwrap(), datetime(2008, 2, 3, 12, 0, 0));
            assert_eq!(dt.with_adjuster(LocalDate::EPOCH).unwrap(), datetime(1970, 1, 1, 10, 15, 30));
            assert_eq!(dt.with_adjuster(|d: LocalDateTime| d.plus_days(1)).unwrap(), datetime(2008, 2, 4, 10, 15, 30));
            assert_eq!(dt.with_adjuster(datetime(1999, 12, 31, 23, 59, 59)).unwrap(), datetime(1999, 12, 31, 23, 59, 59));
        }

        #[test]
        fn truncation() {
            let dt = LocalDateTime::of_numbers(2008, 2, 3, 10, 15, 30, 123).unwrap();
            assert_eq!(dt.truncated_to(ChronoUnit::Minutes).unwrap(), datetime(2008, 2, 3, 10, 15, 0));
            assert!(dt.truncated_to(ChronoUnit::Weeks).is_err());
        }
    }

    mod until {
        use super::*;

        #[test]
        fn months_one_minute_short() {
            let start = datetime(2012, 6, 15, 12, 0, 0);
            assert_eq!(start.until(&datetime(2012, 8, 15, 11, 59, 0), ChronoUnit::Months), Ok(1));
            assert_eq!(start.until(&datetime(2012, 8, 15, 12, 0, 0), ChronoUnit::Months), Ok(2));
        }

        #[test]
        fn backwards() {
            let start = datetime(2012, 8, 15, 11, 59, 0);
            assert_eq!(start.until(&datetime(2012, 6, 15, 12, 0, 0), ChronoUnit::Months), Ok(-1));
            assert_eq!(start.until(&datetime(2012, 8, 14, 12, 0, 0), ChronoUnit::Days), Ok(0));
        }

        #[test]
        fn time_units() {
            let start = datetime(2012, 6, 15, 12, 0, 0);
            let end = datetime(2012, 6, 17, 11, 0, 0);
            assert_eq!(start.until(&end, ChronoUnit::Hours), Ok(47));
            assert_eq!(start.until(&end, ChronoUnit::HalfDays), Ok(3));
            assert_eq!(end.until(&start, ChronoUnit::Minutes), Ok(-47 * 60));
        }

        #[test]
        fn overflowing_nanos() {
            assert!(LocalDateTime::MIN.until(&LocalDateTime::MAX, ChronoUnit::Nanos).unwrap_err().is_arithmetic());
            assert!(LocalDateTime::MIN.until(&LocalDateTime::MAX, ChronoUnit::Seconds).is_ok());
        }
    }

    #[test]
    fn epoch_seconds() {
        let offset = ZoneOffset::of_hours(-5).unwrap();
        let dt = LocalDateTime::of_epoch_second(1_234_567_890, 0, offset).unwrap();
        assert_eq!(dt, datetime(2009, 2, 13, 18, 31, 30));
        assert_eq!(dt.to_epoch_second(offset), 1_234_567_890);
    }

    #[test]
    fn from_offset_and_zoned() {
        let local = datetime(2007, 12, 3, 10, 15, 30);
        let offset = ZoneOffset::of_hours(1).unwrap();
        assert_eq!(LocalDateTime::from(local.at_offset(offset)), local);

        let zoned = local.at_zone(&ZoneId::of_offset(offset)).unwrap();
        assert_eq!(LocalDateTime::from(&zoned), local);
        assert_eq!(LocalDateTime::from(zoned), local);
    }

    #[test]
    fn queries() {
        let dt = datetime(2007, 12, 3, 10, 15, 30);
        assert_eq!(dt.query(|d| d.to_local_date()), LocalDate::of(2007, 12, 3).unwrap());
        assert_eq!(dt.query(|d| d.get(ChronoField::MinuteOfDay)), Ok(615));
    }

    #[test]
    fn ordering() {
        let a = datetime(2012, 6, 30, 23, 59, 59);
        let b = datetime(2012, 7, 1, 0, 0, 0);
        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(a.is_equal(&a));
    }
}
