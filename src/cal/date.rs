//! Dates without a time or a time zone.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::days::{self, Month, Weekday, MAX_YEAR, MIN_YEAR};
use crate::cal::field::{ChronoField, ValueRange};
use crate::cal::unit::ChronoUnit;
use crate::cal::datetime::LocalDateTime;
use crate::cal::time::LocalTime;
use crate::cal::DatePiece;
use crate::error::Error;
use crate::util::{checked_add, checked_mul, checked_sub};


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
///
/// Every instance is valid: the constructors check the fields, and every
/// operation that changes a field returns a new, checked value.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct LocalDate {
    year:  i64,
    month: Month,
    day:   i8,
}

impl LocalDate {

    /// The earliest supported date, `-999999999-01-01`.
    pub const MIN: LocalDate = LocalDate { year: MIN_YEAR, month: Month::January, day: 1 };

    /// The latest supported date, `+999999999-12-31`.
    pub const MAX: LocalDate = LocalDate { year: MAX_YEAR, month: Month::December, day: 31 };

    /// The Unix epoch, `1970-01-01`.
    pub const EPOCH: LocalDate = LocalDate { year: 1970, month: Month::January, day: 1 };

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use isocal::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::of(1969, 7, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::of(2100, 2, 29).is_err());
    /// ```
    pub fn of(year: i64, month: i64, day: i64) -> Result<Self, Error> {
        let (year, month, day) = days::validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Creates a new local date from a year, a `Month` value, and a day.
    pub fn of_month(year: i64, month: Month, day: i64) -> Result<Self, Error> {
        Self::of(year, month.value(), day)
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use isocal::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::of_year_day(2015, 0x100).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    ///
    /// assert!(LocalDate::of_year_day(2015, 366).is_err());
    /// ```
    pub fn of_year_day(year: i64, day_of_year: i64) -> Result<Self, Error> {
        let year = days::check_year(year)?;
        ChronoField::DayOfYear.range().check_valid_value(day_of_year, ChronoField::DayOfYear)?;

        if day_of_year == 366 && !days::is_leap_year(year) {
            return Err(Error::DayOfYear(year));
        }

        let jan_1 = days::epoch_day_unchecked(year, Month::January, 1);
        Self::of_epoch_day(jan_1 + day_of_year - 1)
    }

    /// Computes a local date given the number of days that have passed
    /// since **1st January, 1970**.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, Error> {
        let (year, month, day) = days::from_epoch_day(epoch_day)?;
        Ok(Self { year, month, day })
    }

    /// Re-creates a date after a year or month change, moving the day back
    /// to the last valid day of the month if it would otherwise overflow.
    fn resolve_previous_valid(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        let year = days::check_year(year)?;
        let day = day.min(days::length_of_month(year, month));
        Ok(Self { year, month, day })
    }

    /// The number of days between this date and **1st January, 1970**.
    pub fn to_epoch_day(self) -> i64 {
        days::epoch_day_unchecked(self.year, self.month, self.day)
    }

    /// The number of months since year zero, as a single count.
    pub fn proleptic_month(self) -> i64 {
        self.year * 12 + self.month.value() - 1
    }

    pub fn month_value(self) -> i64 {
        self.month.value()
    }

    pub fn day_of_month(self) -> i64 {
        i64::from(self.day)
    }

    pub fn day_of_year(self) -> i64 {
        i64::from(days::day_of_year(self.year, self.month, self.day))
    }

    pub fn day_of_week(self) -> Weekday {
        days::day_of_week(self.to_epoch_day())
    }

    pub fn is_leap_year(self) -> bool {
        days::is_leap_year(self.year)
    }

    pub fn length_of_month(self) -> i64 {
        i64::from(days::length_of_month(self.year, self.month))
    }

    pub fn length_of_year(self) -> i64 {
        i64::from(days::length_of_year(self.year))
    }


    // ---- arithmetic ----

    /// Returns a copy of this date with the given number of years added.
    ///
    /// If the result would be the 29th of February in a year that isn’t a
    /// leap year, the day is moved back to the 28th.
    ///
    /// ```rust
    /// use isocal::LocalDate;
    ///
    /// let date = LocalDate::of(2008, 2, 29).unwrap();
    /// assert_eq!(date.plus_years(1).unwrap(), LocalDate::of(2009, 2, 28).unwrap());
    /// ```
    pub fn plus_years(self, years: i64) -> Result<Self, Error> {
        if years == 0 {
            return Ok(self);
        }

        let year = checked_add(self.year, years, "plus_years")?;
        Self::resolve_previous_valid(year, self.month, self.day)
    }

    /// Returns a copy of this date with the given number of months added,
    /// clamping the day to the end of the resulting month.
    ///
    /// ```rust
    /// use isocal::LocalDate;
    ///
    /// let date = LocalDate::of(2007, 3, 31).unwrap();
    /// assert_eq!(date.plus_months(1).unwrap(), LocalDate::of(2007, 4, 30).unwrap());
    /// ```
    pub fn plus_months(self, months: i64) -> Result<Self, Error> {
        if months == 0 {
            return Ok(self);
        }

        let month_count = checked_add(self.proleptic_month(), months, "plus_months")?;
        let year = month_count.div_euclid(12);
        let month = Month::from_one(month_count.rem_euclid(12) + 1)?;
        Self::resolve_previous_valid(year, month, self.day)
    }

    pub fn plus_weeks(self, weeks: i64) -> Result<Self, Error> {
        self.plus_days(checked_mul(weeks, 7, "plus_weeks")?)
    }

    pub fn plus_days(self, days: i64) -> Result<Self, Error> {
        if days == 0 {
            return Ok(self);
        }

        Self::of_epoch_day(checked_add(self.to_epoch_day(), days, "plus_days")?)
    }

    pub fn minus_years(self, years: i64) -> Result<Self, Error> {
        negate_then(years, |n| self.plus_years(n))
    }

    pub fn minus_months(self, months: i64) -> Result<Self, Error> {
        negate_then(months, |n| self.plus_months(n))
    }

    pub fn minus_weeks(self, weeks: i64) -> Result<Self, Error> {
        negate_then(weeks, |n| self.plus_weeks(n))
    }

    pub fn minus_days(self, days: i64) -> Result<Self, Error> {
        negate_then(days, |n| self.plus_days(n))
    }

    /// Adds an amount of a date-based unit to this date.
    pub fn plus(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        use self::ChronoUnit::*;

        match unit {
            Days       => self.plus_days(amount),
            Weeks      => self.plus_weeks(amount),
            Months     => self.plus_months(amount),
            Years      => self.plus_years(amount),
            Decades    => self.plus_years(checked_mul(amount, 10, "plus")?),
            Centuries  => self.plus_years(checked_mul(amount, 100, "plus")?),
            Millennia  => self.plus_years(checked_mul(amount, 1000, "plus")?),
            Eras       => {
                let era = checked_add(self.era(), amount, "plus")?;
                self.with_field(ChronoField::Era, era)
            },
            _          => Err(Error::UnsupportedUnit(unit.to_string())),
        }
    }


    // ---- field changes ----

    /// Returns a copy of this date with the year changed, clamping the day
    /// if it was the 29th of February.
    pub fn with_year(self, year: i64) -> Result<Self, Error> {
        if year == self.year {
            return Ok(self);
        }

        ChronoField::Year.range().check_valid_value(year, ChronoField::Year)?;
        Self::resolve_previous_valid(year, self.month, self.day)
    }

    /// Returns a copy of this date with the month changed, clamping the day
    /// to the end of the new month.
    pub fn with_month(self, month: i64) -> Result<Self, Error> {
        let month = Month::from_one(month)?;
        Self::resolve_previous_valid(self.year, month, self.day)
    }

    /// Returns a copy of this date with the day of the month changed. There
    /// is no clamping: a day past the end of the month is an error.
    pub fn with_day_of_month(self, day: i64) -> Result<Self, Error> {
        Self::of(self.year, self.month.value(), day)
    }

    pub fn with_day_of_year(self, day_of_year: i64) -> Result<Self, Error> {
        Self::of_year_day(self.year, day_of_year)
    }

    /// Returns a copy of this date with the given standard field set to a
    /// new value, after checking the value against the field’s range.
    pub fn with_field(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        use self::ChronoField::*;

        if !field.is_date_based() {
            return Err(Error::UnsupportedField(field.to_string()));
        }

        field.range().check_valid_value(value, field)?;

        match field {
            DayOfWeek                => self.plus_days(value - self.day_of_week().value()),
            AlignedDayOfWeekInMonth  => self.plus_days(value - self.get_date_field(AlignedDayOfWeekInMonth)?),
            AlignedDayOfWeekInYear   => self.plus_days(value - self.get_date_field(AlignedDayOfWeekInYear)?),
            DayOfMonth               => self.with_day_of_month(value),
            DayOfYear                => self.with_day_of_year(value),
            EpochDay                 => Self::of_epoch_day(value),
            AlignedWeekOfMonth       => self.plus_weeks(value - self.get_date_field(AlignedWeekOfMonth)?),
            AlignedWeekOfYear        => self.plus_weeks(value - self.get_date_field(AlignedWeekOfYear)?),
            MonthOfYear              => self.with_month(value),
            ProlepticMonth           => self.plus_months(value - self.proleptic_month()),
            YearOfEra                => self.with_year(if self.year >= 1 { value } else { 1 - value }),
            Year                     => self.with_year(value),
            Era                      => if self.era() == value { Ok(self) } else { self.with_year(1 - self.year) },
            _                        => Err(Error::UnsupportedField(field.to_string())),
        }
    }

    fn era(self) -> i64 {
        if self.year >= 1 { 1 } else { 0 }
    }


    // ---- queries ----

    /// Returns the value of a date-based standard field.
    pub(crate) fn get_date_field(self, field: ChronoField) -> Result<i64, Error> {
        use self::ChronoField::*;

        let day = i64::from(self.day);
        let day_of_year = self.day_of_year();

        Ok(match field {
            DayOfWeek                => self.day_of_week().value(),
            AlignedDayOfWeekInMonth  => (day - 1) % 7 + 1,
            AlignedDayOfWeekInYear   => (day_of_year - 1) % 7 + 1,
            DayOfMonth               => day,
            DayOfYear                => day_of_year,
            EpochDay                 => self.to_epoch_day(),
            AlignedWeekOfMonth       => (day - 1) / 7 + 1,
            AlignedWeekOfYear        => (day_of_year - 1) / 7 + 1,
            MonthOfYear              => self.month.value(),
            ProlepticMonth           => self.proleptic_month(),
            YearOfEra                => if self.year >= 1 { self.year } else { 1 - self.year },
            Year                     => self.year,
            Era                      => self.era(),
            _                        => return Err(Error::UnsupportedField(field.to_string())),
        })
    }

    /// Returns the range of valid values for a date-based field, refined
    /// using this date where the field’s range depends on the month or year.
    pub(crate) fn date_field_range(self, field: ChronoField) -> Result<ValueRange, Error> {
        use self::ChronoField::*;

        if !field.is_date_based() {
            return Err(Error::UnsupportedField(field.to_string()));
        }

        Ok(match field {
            DayOfMonth          => ValueRange::of(1, self.length_of_month()),
            DayOfYear           => ValueRange::of(1, self.length_of_year()),
            AlignedWeekOfMonth  => ValueRange::of(1, if self.month == Month::February && !self.is_leap_year() { 4 } else { 5 }),
            YearOfEra           => ValueRange::of(1, if self.year <= 0 { MAX_YEAR + 1 } else { MAX_YEAR }),
            _                   => field.range(),
        })
    }

    /// Calculates the number of whole units between this date and the
    /// given end date, which is negative if the end date is earlier.
    ///
    /// A partial final month or year does not count:
    ///
    /// ```rust
    /// use isocal::{LocalDate, ChronoUnit};
    ///
    /// let start = LocalDate::of(2012, 6, 15).unwrap();
    /// let end = LocalDate::of(2012, 8, 14).unwrap();
    /// assert_eq!(start.until(end, ChronoUnit::Months), Ok(1));
    /// ```
    pub fn until(self, end: LocalDate, unit: ChronoUnit) -> Result<i64, Error> {
        use self::ChronoUnit::*;

        match unit {
            Days       => Ok(self.days_until(end)),
            Weeks      => Ok(self.days_until(end) / 7),
            Months     => Ok(self.months_until(end)),
            Years      => Ok(self.months_until(end) / 12),
            Decades    => Ok(self.months_until(end) / 120),
            Centuries  => Ok(self.months_until(end) / 1200),
            Millennia  => Ok(self.months_until(end) / 12000),
            Eras       => Ok(end.era() - self.era()),
            _          => Err(Error::UnsupportedUnit(unit.to_string())),
        }
    }

    pub(crate) fn days_until(self, end: LocalDate) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    /// Counts whole months by packing the month and day into one number,
    /// so that a month only counts once its day of the month is reached.
    fn months_until(self, end: LocalDate) -> i64 {
        let packed_start = self.proleptic_month() * 32 + i64::from(self.day);
        let packed_end   = end.proleptic_month() * 32 + i64::from(end.day);
        (packed_end - packed_start) / 32
    }


    // ---- combination ----

    /// Combines this date with a time to make a date-time.
    pub fn at_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::of(self, time)
    }

    pub fn at_start_of_day(self) -> LocalDateTime {
        LocalDateTime::of(self, LocalTime::MIDNIGHT)
    }

    pub fn is_before(self, other: LocalDate) -> bool {
        self < other
    }

    pub fn is_after(self, other: LocalDate) -> bool {
        self > other
    }
}

/// Runs a `plus` operation with the negated amount, taking care of
/// `i64::MIN`, which has no positive counterpart.
fn negate_then<T, F>(amount: i64, plus: F) -> Result<T, Error>
where F: Fn(i64) -> Result<T, Error>,
{
    if amount == i64::MIN {
        Err(Error::Overflow("minus"))
    }
    else {
        plus(checked_sub(0, amount, "minus")?)
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { days::day_of_year(self.year, self.month, self.day) }
    fn weekday(&self) -> Weekday { self.day_of_week() }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i64, m: i64, d: i64) -> LocalDate {
        LocalDate::of(y, m, d).unwrap()
    }

    #[test]
    fn thirtieth_of_february() {
        assert_eq!(LocalDate::of(2007, 2, 30).unwrap_err().kind(), crate::ErrorKind::DateTime);
    }

    #[test]
    fn plus_days_round_trip() {
        let d = date(2012, 2, 28);
        assert_eq!(d.plus_days(1).unwrap().minus_days(1).unwrap(), d);
        assert_eq!(d.plus_days(1).unwrap(), date(2012, 2, 29));
        assert_eq!(d.plus_days(2).unwrap(), date(2012, 3, 1));
    }

    #[test]
    fn leap_day_year_arithmetic_is_not_invertible() {
        let leap_day = date(2008, 2, 29);
        let next_year = leap_day.plus_years(1).unwrap();
        assert_eq!(next_year, date(2009, 2, 28));
        assert_eq!(next_year.minus_years(1).unwrap(), date(2008, 2, 28));
    }

    #[test]
    fn month_clamping() {
        assert_eq!(date(2007, 3, 31).plus_months(1).unwrap(), date(2007, 4, 30));
        assert_eq!(date(2008, 1, 31).plus_months(1).unwrap(), date(2008, 2, 29));
        assert_eq!(date(2008, 1, 31).minus_months(2).unwrap(), date(2007, 11, 30));
        assert_eq!(date(2007, 12, 15).plus_months(14).unwrap(), date(2009, 2, 15));
    }

    #[test]
    fn negative_years() {
        assert_eq!(date(1, 1, 1).minus_days(1).unwrap(), date(0, 12, 31));
        assert_eq!(date(0, 3, 1).minus_days(1).unwrap(), date(0, 2, 29));
    }

    #[test]
    fn overflowing_years() {
        assert!(LocalDate::MAX.plus_days(1).is_err());
        assert!(LocalDate::MIN.minus_days(1).is_err());
        assert!(LocalDate::MAX.plus_years(1).is_err());
        assert!(date(2000, 1, 1).plus_years(i64::MAX).unwrap_err().is_arithmetic());
        assert!(date(2000, 1, 1).minus_days(i64::MIN).is_err());
    }

    #[test]
    fn with_day_of_month_does_not_clamp() {
        assert!(date(2007, 4, 1).with_day_of_month(31).is_err());
        assert_eq!(date(2007, 4, 1).with_day_of_month(30).unwrap(), date(2007, 4, 30));
    }

    #[test]
    fn with_month_clamps() {
        assert_eq!(date(2007, 3, 31).with_month(2).unwrap(), date(2007, 2, 28));
        assert_eq!(date(2008, 2, 29).with_year(2009).unwrap(), date(2009, 2, 28));
    }

    #[test]
    fn fields() {
        let d = date(2015, 9, 13);
        assert_eq!(d.get_date_field(ChronoField::DayOfYear), Ok(256));
        assert_eq!(d.get_date_field(ChronoField::AlignedWeekOfMonth), Ok(2));
        assert_eq!(d.get_date_field(ChronoField::AlignedDayOfWeekInMonth), Ok(6));
        assert_eq!(d.get_date_field(ChronoField::ProlepticMonth), Ok(2015 * 12 + 8));
        assert_eq!(date(0, 1, 1).get_date_field(ChronoField::YearOfEra), Ok(1));
        assert_eq!(date(0, 1, 1).get_date_field(ChronoField::Era), Ok(0));
    }

    #[test]
    fn with_fields() {
        let d = date(2015, 9, 13);   // a Sunday
        assert_eq!(d.with_field(ChronoField::DayOfWeek, 1).unwrap(), date(2015, 9, 7));
        assert_eq!(d.with_field(ChronoField::Era, 0).unwrap(), date(-2014, 9, 13));
        assert_eq!(d.with_field(ChronoField::EpochDay, 0).unwrap(), LocalDate::EPOCH);
        assert!(d.with_field(ChronoField::MonthOfYear, 13).is_err());
        assert!(d.with_field(ChronoField::HourOfDay, 1).is_err());
    }

    #[test]
    fn refined_ranges() {
        assert_eq!(date(2007, 2, 1).date_field_range(ChronoField::DayOfMonth), Ok(ValueRange::of(1, 28)));
        assert_eq!(date(2008, 2, 1).date_field_range(ChronoField::AlignedWeekOfMonth), Ok(ValueRange::of(1, 5)));
        assert_eq!(date(2007, 2, 1).date_field_range(ChronoField::AlignedWeekOfMonth), Ok(ValueRange::of(1, 4)));
    }

    #[test]
    fn until_months() {
        let start = date(2012, 6, 15);
        assert_eq!(start.until(date(2012, 8, 14), ChronoUnit::Months), Ok(1));
        assert_eq!(start.until(date(2012, 8, 15), ChronoUnit::Months), Ok(2));
        assert_eq!(start.until(date(2012, 4, 16), ChronoUnit::Months), Ok(-1));
        assert_eq!(start.until(date(2022, 6, 15), ChronoUnit::Decades), Ok(1));
    }

    #[test]
    fn until_days_and_weeks() {
        let start = date(2012, 6, 15);
        assert_eq!(start.until(date(2012, 7, 1), ChronoUnit::Days), Ok(16));
        assert_eq!(start.until(date(2012, 7, 1), ChronoUnit::Weeks), Ok(2));
        assert!(start.until(date(2012, 7, 1), ChronoUnit::Hours).is_err());
    }

    #[test]
    fn ordering() {
        assert!(date(-1, 12, 31) < date(0, 1, 1));
        assert!(date(2012, 6, 30).is_before(date(2012, 7, 1)));
    }

    #[test]
    fn plus_eras() {
        assert_eq!(date(2015, 9, 13).plus(-1, ChronoUnit::Eras).unwrap(), date(-2014, 9, 13));
        assert!(date(2015, 9, 13).plus(1, ChronoUnit::Eras).is_err());
    }
}
