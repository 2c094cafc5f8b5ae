//! The field arithmetic that every other calendar type is built on:
//! leap years, month lengths, and conversions to and from epoch days.

use std::fmt;

use crate::error::Error;
use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// The earliest supported year.
pub const MIN_YEAR: i64 = -999_999_999;

/// The latest supported year.
pub const MAX_YEAR: i64 = 999_999_999;

/// The epoch day of `-999999999-01-01`.
pub const MIN_EPOCH_DAY: i64 = -365_243_219_162;

/// The epoch day of `+999999999-12-31`.
pub const MAX_EPOCH_DAY: i64 = 365_241_780_471;

/// Number of days guaranteed to be in four hundred years.
pub(crate) const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Having the reference point immediately after a possible leap day, on a
/// year that’s a multiple of 400, means that the leap day always falls at
/// the very end of a (March-based) year, and the rest of the calculation
/// reduces to simple division.
pub(crate) const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                                       + 7          // plus seven days for leap years...
                                       + 31 + 29;   // plus all the days in January and February in 2000.


/// Returns whether the given year is a leap year in the proleptic
/// Gregorian calendar.
///
/// ### Examples
///
/// ```
/// use isocal::days::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
pub fn length_of_month(year: i64, month: Month) -> i8 {
    month.days_in_month(is_leap_year(year))
}

/// Returns the number of days in the given year.
pub fn length_of_year(year: i64) -> i16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Checks the year is inside the supported range.
pub fn check_year(year: i64) -> Result<i64, Error> {
    if year.is_within(MIN_YEAR ..= MAX_YEAR) {
        Ok(year)
    }
    else {
        Err(Error::OutOfRange { field: "Year".into(), value: year, range: format!("{} - {}", MIN_YEAR, MAX_YEAR) })
    }
}

/// Checks that a year, month, and day form a real date, returning the
/// month as a `Month` value and the day narrowed to its storage width.
pub fn validate(year: i64, month: i64, day: i64) -> Result<(i64, Month, i8), Error> {
    let year = check_year(year)?;
    let month = Month::from_one(month)?;

    if !day.is_within(1 ..= 31) {
        return Err(Error::OutOfRange { field: "DayOfMonth".into(), value: day, range: "1 - 28/31".into() });
    }

    if day > i64::from(length_of_month(year, month)) {
        return Err(if month == February && day == 29 {
            Error::NotLeapYear(year)
        }
        else {
            Error::InvalidDate { year, month: month.value(), day }
        });
    }

    Ok((year, month, day as i8))
}

/// Calculates the number of days between **1st January, 1970** and the
/// given date, after checking that the date is valid.
pub fn to_epoch_day(year: i64, month: i64, day: i64) -> Result<i64, Error> {
    let (year, month, day) = validate(year, month, day)?;
    Ok(epoch_day_unchecked(year, month, day))
}

/// The epoch-day calculation itself, for values that are already known to
/// be valid.
pub(crate) fn epoch_day_unchecked(year: i64, month: Month, day: i8) -> i64 {

    // Shift the year so that it starts in March, which puts any leap day
    // at the very end of it.
    let (year, month_from_march) = if month >= March { (year, month.value() - 3) }
                                                 else { (year - 1, month.value() + 9) };

    let (num_400y_cycles, year_of_cycle) = split_cycles(year - 2000, 400);

    // Days from the 1st of March to the start of this month.
    let day_of_year = (153 * month_from_march + 2) / 5 + i64::from(day) - 1;

    let day_of_cycle = year_of_cycle * 365
        + year_of_cycle / 4
        - year_of_cycle / 100
        + day_of_year;

    num_400y_cycles * DAYS_IN_400Y + day_of_cycle + EPOCH_DIFFERENCE
}

/// Computes the year, month, and day of the given number of days since
/// **1st January, 1970**. This is the exact inverse of `to_epoch_day`.
pub fn from_epoch_day(epoch_day: i64) -> Result<(i64, Month, i8), Error> {
    if !epoch_day.is_within(MIN_EPOCH_DAY ..= MAX_EPOCH_DAY) {
        return Err(Error::OutOfRange {
            field: "EpochDay".into(),
            value: epoch_day,
            range: format!("{} - {}", MIN_EPOCH_DAY, MAX_EPOCH_DAY),
        });
    }

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after, so find the cycle first, then the year within
    // it, taking care that the final day of the cycle is the leap day.
    let (num_400y_cycles, day_of_cycle) = split_cycles(epoch_day - EPOCH_DIFFERENCE, DAYS_IN_400Y);

    let year_of_cycle = (day_of_cycle
                         - day_of_cycle / (365 * 4)
                         + day_of_cycle / (365 * 100 + 24)
                         - day_of_cycle / (DAYS_IN_400Y - 1)) / 365;

    let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);

    // Months are still counted from March here.
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };

    let year = 2000 + num_400y_cycles * 400 + year_of_cycle + if month <= 2 { 1 } else { 0 };
    Ok((year, Month::from_one(month)?, day as i8))
}

/// Computes the weekday, given the number of days since the Unix epoch,
/// which was a Thursday.
pub fn day_of_week(epoch_day: i64) -> Weekday {
    match (epoch_day + 3).rem_euclid(7) {
        0 => Monday,     1 => Tuesday,  2 => Wednesday,
        3 => Thursday,   4 => Friday,   5 => Saturday,
        _ => Sunday,
    }
}

/// Returns the day of the year, from 1 to 366, for a valid date.
pub fn day_of_year(year: i64, month: Month, day: i8) -> i16 {
    let leap_day = if is_leap_year(year) && month >= March { 1 } else { 0 };
    month.days_before_start() + leap_day + i16::from(day)
}


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isocal::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.0)
    }

    /// Returns the number of days in this year.
    pub fn length(self) -> i16 {
        length_of_year(self.0)
    }

    /// Returns a year-month, pairing this year with the given month.
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth { year: self, month }
    }
}


/// A month-year pair.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isocal::Year;
    /// use isocal::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i64` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the month number, from 1 for January to 12 for December.
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use isocal::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i64) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange { field: "MonthOfYear".into(), value: month, range: "1 - 12".into() }),
        })
    }

    /// Returns the month that is the given number of months after this
    /// one, wrapping around the end of the year in either direction.
    pub fn plus(self, months: i64) -> Self {
        let index = (self.value() - 1 + months.rem_euclid(12)).rem_euclid(12);
        MONTHS[index as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];


/// A named day of the week, numbered the ISO-8601 way, from Monday as
/// day 1 to Sunday as day 7.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Monday = 1, Tuesday = 2, Wednesday = 3, Thursday = 4,
    Friday = 5, Saturday = 6, Sunday = 7,
}

// Weekdays don’t get an Ord instance, because there’s no real agreement
// on whether the week starts on Sunday or Monday.

impl Weekday {

    /// Returns the ISO-8601 day number, from 1 for Monday to 7 for Sunday.
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Returns the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    ///
    /// ```rust
    /// use isocal::Weekday;
    /// assert_eq!(Weekday::from_one(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: i64) -> Result<Self, Error> {
        Ok(match weekday {
            1 => Monday,     2 => Tuesday,   3 => Wednesday,
            4 => Thursday,   5 => Friday,    6 => Saturday,
            7 => Sunday,     _ => return Err(Error::OutOfRange { field: "DayOfWeek".into(), value: weekday, range: "1 - 7".into() }),
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
