//! ISO-8601 date and time calculations, which use years, months, days,
//! hours, minutes, and seconds.

pub mod days;
pub(crate) mod date;
pub(crate) mod time;
pub(crate) mod datetime;
pub mod field;
pub mod unit;
pub(crate) mod offset;
pub(crate) mod zone;
#[cfg(feature = "parse")] pub(crate) mod parse;

mod fmt {
    mod iso;
}

pub use self::date::LocalDate;
pub use self::datetime::{Adjuster, LocalDateTime};
pub use self::days::{Month, Weekday, Year, YearMonth};
pub use self::field::{ChronoField, Field, TemporalField, ValueRange};
pub use self::offset::{OffsetDateTime, ZoneOffset};
pub use self::time::LocalTime;
pub use self::unit::{ChronoUnit, TemporalUnit, Unit};
pub use self::zone::{LocalOffsets, SystemRules, TransitionRules, ZoneId, ZoneRules, ZonedDateTime};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year().rem_euclid(100) }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The nanosecond of the second.
    fn nanosecond(&self) -> i32;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16 { (self.nanosecond() / 1_000_000) as i16 }
}
