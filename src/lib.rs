#![crate_name = "isocal"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Immutable ISO-8601 dates, times, and date-times, with the arithmetic,
//! field queries, time zones, and clocks to go with them.
//!
//! # Examples
//!
//! ```
//! use isocal::{LocalDate, LocalDateTime, ChronoUnit};
//!
//! let date = LocalDate::of(2007, 3, 31).unwrap();
//! assert_eq!(date.plus_months(1).unwrap().to_string(), "2007-04-30");
//!
//! let start = LocalDateTime::of_numbers(2012, 6, 15, 12, 0, 0, 0).unwrap();
//! let end = start.plus_hours(36).unwrap();
//! assert_eq!(start.until(&end, ChronoUnit::Days), Ok(1));
//! ```

#[macro_use]
mod logging;

mod cal;
mod clock;
mod duration;
mod error;
mod instant;
mod system;
mod util;

pub use crate::cal::days;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::{LocalDate, LocalTime, LocalDateTime, Adjuster};
pub use crate::cal::{Month, Weekday, Year, YearMonth};
pub use crate::cal::{ChronoField, ChronoUnit, Field, Unit, TemporalField, TemporalUnit, ValueRange};
pub use crate::cal::{ZoneOffset, OffsetDateTime};
pub use crate::cal::{ZoneId, ZoneRules, LocalOffsets, TransitionRules, SystemRules, ZonedDateTime};
pub use crate::clock::Clock;
pub use crate::duration::Duration;
pub use crate::error::{Error, ErrorKind};
pub use crate::instant::Instant;
pub use crate::system::sys_timezone;
