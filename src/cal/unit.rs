//! Units of time, used for arithmetic, truncation, and measuring the
//! amount of time between two date-times.

use std::fmt;

use crate::cal::datetime::LocalDateTime;
use crate::duration::Duration;
use crate::error::Error;


/// The standard set of units, from nanoseconds up to eras.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

/// Seconds in an average Gregorian year: 400 years have 146,097 days.
const SECONDS_PER_AVERAGE_YEAR: i64 = 31_556_952;

impl ChronoUnit {

    pub fn name(self) -> &'static str {
        use self::ChronoUnit::*;

        match self {
            Nanos      => "Nanos",
            Micros     => "Micros",
            Millis     => "Millis",
            Seconds    => "Seconds",
            Minutes    => "Minutes",
            Hours      => "Hours",
            HalfDays   => "HalfDays",
            Days       => "Days",
            Weeks      => "Weeks",
            Months     => "Months",
            Years      => "Years",
            Decades    => "Decades",
            Centuries  => "Centuries",
            Millennia  => "Millennia",
            Eras       => "Eras",
            Forever    => "Forever",
        }
    }

    /// The length of this unit. For the date-based units this is only an
    /// estimate, as days, months, and years vary in length.
    pub fn duration(self) -> Duration {
        use self::ChronoUnit::*;

        match self {
            Nanos      => Duration::of_nanos(1),
            Micros     => Duration::of_nanos(1_000),
            Millis     => Duration::of_nanos(1_000_000),
            Seconds    => Duration::of_seconds(1),
            Minutes    => Duration::of_seconds(60),
            Hours      => Duration::of_seconds(3_600),
            HalfDays   => Duration::of_seconds(43_200),
            Days       => Duration::of_seconds(86_400),
            Weeks      => Duration::of_seconds(7 * 86_400),
            Months     => Duration::of_seconds(SECONDS_PER_AVERAGE_YEAR / 12),
            Years      => Duration::of_seconds(SECONDS_PER_AVERAGE_YEAR),
            Decades    => Duration::of_seconds(SECONDS_PER_AVERAGE_YEAR * 10),
            Centuries  => Duration::of_seconds(SECONDS_PER_AVERAGE_YEAR * 100),
            Millennia  => Duration::of_seconds(SECONDS_PER_AVERAGE_YEAR * 1_000),
            Eras       => Duration::of_seconds(SECONDS_PER_AVERAGE_YEAR * 1_000_000_000),
            Forever    => Duration::MAX,
        }
    }

    /// Whether this unit is a whole number of days, weeks, months, or
    /// years, and so applies to dates.
    pub fn is_date_based(self) -> bool {
        self >= ChronoUnit::Days && self != ChronoUnit::Forever
    }

    /// Whether this unit is shorter than a day, and so applies to times.
    pub fn is_time_based(self) -> bool {
        self < ChronoUnit::Days
    }

    /// Whether the length of this unit is an estimate.
    pub fn is_duration_estimated(self) -> bool {
        self >= ChronoUnit::Days
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// A unit that isn’t one of the standard ones, and that knows how to add
/// itself to a date-time, and measure itself between two of them.
pub trait TemporalUnit: fmt::Debug {

    /// A name for this unit, used in error messages.
    fn name(&self) -> &str;

    /// Whether this unit can be added to the given date-time.
    fn is_supported_by(&self, datetime: &LocalDateTime) -> bool;

    /// Returns a copy of the date-time with the amount of this unit added.
    fn add_to(&self, datetime: LocalDateTime, amount: i64) -> Result<LocalDateTime, Error>;

    /// The number of whole units between two date-times.
    fn between(&self, start: &LocalDateTime, end: &LocalDateTime) -> Result<i64, Error>;
}


/// Either a standard unit, or a reference to an externally-defined one.
#[derive(Debug, Clone, Copy)]
pub enum Unit<'a> {
    Chrono(ChronoUnit),
    External(&'a dyn TemporalUnit),
}

impl From<ChronoUnit> for Unit<'static> {
    fn from(unit: ChronoUnit) -> Self {
        Unit::Chrono(unit)
    }
}

impl<'a, T: TemporalUnit> From<&'a T> for Unit<'a> {
    fn from(unit: &'a T) -> Self {
        Unit::External(unit)
    }
}

impl<'a> fmt::Display for Unit<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Unit::Chrono(unit)    => f.write_str(unit.name()),
            Unit::External(unit)  => f.write_str(unit.name()),
        }
    }
}
