//! Fields of a date-time, such as the hour-of-day or the day-of-month, and
//! the ranges of values they can take.
//!
//! The standard fields form a closed enum, `ChronoField`, which the
//! calendar types resolve themselves. Anything else can be queried through
//! the `TemporalField` trait, which asks the field object to do the work.

use std::fmt;

use crate::cal::datetime::LocalDateTime;
use crate::cal::days::{MAX_EPOCH_DAY, MAX_YEAR, MIN_EPOCH_DAY, MIN_YEAR};
use crate::cal::unit::ChronoUnit;
use crate::error::Error;


/// The range of valid values for a field.
///
/// Some fields have a range that depends on the date they’re used with:
/// the day-of-month runs from 1 to anywhere between 28 and 31. These
/// ranges keep both the smallest and largest possible maximums.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ValueRange {
    min:          i64,
    largest_min:  i64,
    smallest_max: i64,
    max:          i64,
}

impl ValueRange {

    /// A range with a fixed minimum and maximum.
    pub const fn of(min: i64, max: i64) -> Self {
        Self { min, largest_min: min, smallest_max: max, max }
    }

    /// A range with a fixed minimum and a maximum that varies between
    /// `smallest_max` and `max`.
    pub const fn of_variable(min: i64, smallest_max: i64, max: i64) -> Self {
        Self { min, largest_min: min, smallest_max, max }
    }

    pub fn min(&self) -> i64 { self.min }
    pub fn largest_min(&self) -> i64 { self.largest_min }
    pub fn smallest_max(&self) -> i64 { self.smallest_max }
    pub fn max(&self) -> i64 { self.max }

    /// Whether this range has a single minimum and a single maximum.
    pub fn is_fixed(&self) -> bool {
        self.min == self.largest_min && self.max == self.smallest_max
    }

    /// Whether every value in this range fits in an `i32`.
    pub fn is_int_value(&self) -> bool {
        self.min >= i64::from(i32::MIN) && self.max <= i64::from(i32::MAX)
    }

    pub fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks that a value is inside this range, returning it unchanged.
    pub fn check_valid_value(&self, value: i64, field: ChronoField) -> Result<i64, Error> {
        if self.is_valid_value(value) {
            Ok(value)
        }
        else {
            Err(Error::OutOfRange { field: field.name().into(), value, range: self.to_string() })
        }
    }

    /// Checks that a value is inside this range *and* that the whole range
    /// fits in an `i32`.
    pub fn check_valid_int_value(&self, value: i64, field: ChronoField) -> Result<i32, Error> {
        if !self.is_int_value() {
            return Err(Error::FieldTooLarge(field.to_string()));
        }

        self.check_valid_value(value, field).map(|v| v as i32)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.min)?;
        if self.min != self.largest_min {
            write!(f, "/{}", self.largest_min)?;
        }
        write!(f, " - {}", self.smallest_max)?;
        if self.smallest_max != self.max {
            write!(f, "/{}", self.max)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueRange({})", self)
    }
}


/// The standard set of date and time fields.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ChronoField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmpm,
    ClockHourOfAmpm,
    HourOfDay,
    ClockHourOfDay,
    AmpmOfDay,
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {

    /// Every standard field, from the smallest to the largest.
    pub const ALL: [ChronoField; 30] = {
        use self::ChronoField::*;
        [
            NanoOfSecond, NanoOfDay, MicroOfSecond, MicroOfDay, MilliOfSecond, MilliOfDay,
            SecondOfMinute, SecondOfDay, MinuteOfHour, MinuteOfDay, HourOfAmpm, ClockHourOfAmpm,
            HourOfDay, ClockHourOfDay, AmpmOfDay, DayOfWeek, AlignedDayOfWeekInMonth,
            AlignedDayOfWeekInYear, DayOfMonth, DayOfYear, EpochDay, AlignedWeekOfMonth,
            AlignedWeekOfYear, MonthOfYear, ProlepticMonth, YearOfEra, Year, Era,
            InstantSeconds, OffsetSeconds,
        ]
    };

    pub fn name(self) -> &'static str {
        use self::ChronoField::*;

        match self {
            NanoOfSecond             => "NanoOfSecond",
            NanoOfDay                => "NanoOfDay",
            MicroOfSecond            => "MicroOfSecond",
            MicroOfDay               => "MicroOfDay",
            MilliOfSecond            => "MilliOfSecond",
            MilliOfDay               => "MilliOfDay",
            SecondOfMinute           => "SecondOfMinute",
            SecondOfDay              => "SecondOfDay",
            MinuteOfHour             => "MinuteOfHour",
            MinuteOfDay              => "MinuteOfDay",
            HourOfAmpm               => "HourOfAmPm",
            ClockHourOfAmpm          => "ClockHourOfAmPm",
            HourOfDay                => "HourOfDay",
            ClockHourOfDay           => "ClockHourOfDay",
            AmpmOfDay                => "AmPmOfDay",
            DayOfWeek                => "DayOfWeek",
            AlignedDayOfWeekInMonth  => "AlignedDayOfWeekInMonth",
            AlignedDayOfWeekInYear   => "AlignedDayOfWeekInYear",
            DayOfMonth               => "DayOfMonth",
            DayOfYear                => "DayOfYear",
            EpochDay                 => "EpochDay",
            AlignedWeekOfMonth       => "AlignedWeekOfMonth",
            AlignedWeekOfYear        => "AlignedWeekOfYear",
            MonthOfYear              => "MonthOfYear",
            ProlepticMonth           => "ProlepticMonth",
            YearOfEra                => "YearOfEra",
            Year                     => "Year",
            Era                      => "Era",
            InstantSeconds           => "InstantSeconds",
            OffsetSeconds            => "OffsetSeconds",
        }
    }

    /// The unit that this field is measured in.
    pub fn base_unit(self) -> ChronoUnit {
        use self::ChronoField::*;

        match self {
            NanoOfSecond | NanoOfDay                                       => ChronoUnit::Nanos,
            MicroOfSecond | MicroOfDay                                     => ChronoUnit::Micros,
            MilliOfSecond | MilliOfDay                                     => ChronoUnit::Millis,
            SecondOfMinute | SecondOfDay | InstantSeconds | OffsetSeconds  => ChronoUnit::Seconds,
            MinuteOfHour | MinuteOfDay                                     => ChronoUnit::Minutes,
            HourOfAmpm | ClockHourOfAmpm | HourOfDay | ClockHourOfDay      => ChronoUnit::Hours,
            AmpmOfDay                                                      => ChronoUnit::HalfDays,
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear
            | DayOfMonth | DayOfYear | EpochDay                            => ChronoUnit::Days,
            AlignedWeekOfMonth | AlignedWeekOfYear                         => ChronoUnit::Weeks,
            MonthOfYear | ProlepticMonth                                   => ChronoUnit::Months,
            YearOfEra | Year                                               => ChronoUnit::Years,
            Era                                                            => ChronoUnit::Eras,
        }
    }

    /// The outer range of values this field can take, irrespective of any
    /// particular date or time.
    pub fn range(self) -> ValueRange {
        use self::ChronoField::*;

        match self {
            NanoOfSecond             => ValueRange::of(0, 999_999_999),
            NanoOfDay                => ValueRange::of(0, 86_400 * 1_000_000_000 - 1),
            MicroOfSecond            => ValueRange::of(0, 999_999),
            MicroOfDay               => ValueRange::of(0, 86_400 * 1_000_000 - 1),
            MilliOfSecond            => ValueRange::of(0, 999),
            MilliOfDay               => ValueRange::of(0, 86_400 * 1_000 - 1),
            SecondOfMinute           => ValueRange::of(0, 59),
            SecondOfDay              => ValueRange::of(0, 86_400 - 1),
            MinuteOfHour             => ValueRange::of(0, 59),
            MinuteOfDay              => ValueRange::of(0, 24 * 60 - 1),
            HourOfAmpm               => ValueRange::of(0, 11),
            ClockHourOfAmpm          => ValueRange::of(1, 12),
            HourOfDay                => ValueRange::of(0, 23),
            ClockHourOfDay           => ValueRange::of(1, 24),
            AmpmOfDay                => ValueRange::of(0, 1),
            DayOfWeek                => ValueRange::of(1, 7),
            AlignedDayOfWeekInMonth  => ValueRange::of(1, 7),
            AlignedDayOfWeekInYear   => ValueRange::of(1, 7),
            DayOfMonth               => ValueRange::of_variable(1, 28, 31),
            DayOfYear                => ValueRange::of_variable(1, 365, 366),
            EpochDay                 => ValueRange::of(MIN_EPOCH_DAY, MAX_EPOCH_DAY),
            AlignedWeekOfMonth       => ValueRange::of_variable(1, 4, 5),
            AlignedWeekOfYear        => ValueRange::of(1, 53),
            MonthOfYear              => ValueRange::of(1, 12),
            ProlepticMonth           => ValueRange::of(MIN_YEAR * 12, MAX_YEAR * 12 + 11),
            YearOfEra                => ValueRange::of_variable(1, MAX_YEAR, MAX_YEAR + 1),
            Year                     => ValueRange::of(MIN_YEAR, MAX_YEAR),
            Era                      => ValueRange::of(0, 1),
            InstantSeconds           => ValueRange::of(i64::MIN, i64::MAX),
            OffsetSeconds            => ValueRange::of(-18 * 3600, 18 * 3600),
        }
    }

    /// Checks a value against this field’s outer range.
    pub fn check(self, value: i64) -> Result<i64, Error> {
        self.range().check_valid_value(value, self)
    }

    /// Whether this field belongs to a `LocalDate`.
    pub fn is_date_based(self) -> bool {
        use self::ChronoField::*;

        match self {
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear | DayOfMonth
            | DayOfYear | EpochDay | AlignedWeekOfMonth | AlignedWeekOfYear | MonthOfYear
            | ProlepticMonth | YearOfEra | Year | Era  => true,
            _                                          => false,
        }
    }

    /// Whether this field belongs to a `LocalTime`.
    pub fn is_time_based(self) -> bool {
        (self as u8) < (ChronoField::DayOfWeek as u8)
    }
}

impl fmt::Display for ChronoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// A field that isn’t one of the standard ones, and that knows how to
/// read itself from (and write itself to) a date-time.
pub trait TemporalField: fmt::Debug {

    /// A name for this field, used in error messages.
    fn name(&self) -> &str;

    /// Whether this field can be read from the given date-time.
    fn is_supported_by(&self, datetime: &LocalDateTime) -> bool;

    /// Reads this field’s value from the given date-time.
    fn get_from(&self, datetime: &LocalDateTime) -> Result<i64, Error>;

    /// The range of valid values for this field for the given date-time.
    fn range_refined_by(&self, datetime: &LocalDateTime) -> Result<ValueRange, Error>;

    /// Returns a copy of the given date-time with this field changed.
    fn adjust_into(&self, datetime: LocalDateTime, value: i64) -> Result<LocalDateTime, Error> {
        let _ = (datetime, value);
        Err(Error::UnsupportedField(self.name().to_string()))
    }
}


/// Either a standard field, or a reference to an externally-defined one.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Chrono(ChronoField),
    External(&'a dyn TemporalField),
}

impl From<ChronoField> for Field<'static> {
    fn from(field: ChronoField) -> Self {
        Field::Chrono(field)
    }
}

impl<'a, T: TemporalField> From<&'a T> for Field<'a> {
    fn from(field: &'a T) -> Self {
        Field::External(field)
    }
}

impl<'a> fmt::Display for Field<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Field::Chrono(field)    => f.write_str(field.name()),
            Field::External(field)  => f.write_str(field.name()),
        }
    }
}
