//! The error type shared by every fallible operation in this crate.

use thiserror::Error as ThisError;


/// Whether an error comes from a value that is out of its domain, or from
/// a calculation whose result cannot be represented.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ErrorKind {

    /// A value, field, unit, or combination is not valid, such as the 30th
    /// of February or an unsupported field.
    DateTime,

    /// A calculation overflowed the year range, or a narrower integer width
    /// than the one it was asked for.
    Arithmetic,
}


#[derive(PartialEq, Eq, Debug, Clone, ThisError)]
pub enum Error {

    /// A single field was given a value outside its valid range.
    #[error("invalid value for {field}: {value} (valid values {range})")]
    OutOfRange { field: String, value: i64, range: String },

    /// The fields were individually valid, but the day does not exist in
    /// that month.
    #[error("invalid date '{year:04}-{month:02}-{day:02}'")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// The 29th of February in a year that is not a leap year.
    #[error("invalid date 'February 29' as '{0}' is not a leap year")]
    NotLeapYear(i64),

    /// Day 366 was requested in a year with only 365 days.
    #[error("invalid date 'DayOfYear 366' as '{0}' is not a leap year")]
    DayOfYear(i64),

    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// `get` was used on a field whose values may not fit in an `i32`.
    #[error("invalid field {0} for get() method, use get_long() instead")]
    FieldTooLarge(String),

    /// A value fitted its field, but not the `i32` it was converted into.
    #[error("value {value} for {field} does not fit in an i32")]
    IntOverflow { field: String, value: i64 },

    #[error("unit {0} is too large to be used for truncation")]
    TruncationTooLarge(String),

    #[error("unit {0} must divide into a standard day without remainder")]
    TruncationRemainder(String),

    #[error("offset field out of range: {0} seconds")]
    OffsetOutOfRange(i64),

    #[error("zone offset hours, minutes, and seconds must have the same sign")]
    OffsetSignMismatch,

    /// The local date-time was skipped over by a zone transition.
    #[error("local date-time {local} does not exist in zone {zone} due to a gap")]
    Gap { local: String, zone: String },

    /// The local date-time happens twice because of a zone transition.
    #[error("local date-time {local} is ambiguous in zone {zone} due to an overlap")]
    Overlap { local: String, zone: String },

    /// The host’s wall clock could not be read.
    #[error("unable to read the system clock: {0}")]
    SystemClock(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// An intermediate or final result exceeded the representable range.
    #[error("numeric overflow in {0}")]
    Overflow(&'static str),
}

impl Error {

    /// Returns which of the two kinds of failure this error is.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::FieldTooLarge(_)
            | Error::IntOverflow { .. }
            | Error::Overflow(_)  => ErrorKind::Arithmetic,
            _                     => ErrorKind::DateTime,
        }
    }

    /// Returns whether this error is an arithmetic overflow.
    pub fn is_arithmetic(&self) -> bool {
        self.kind() == ErrorKind::Arithmetic
    }
}
