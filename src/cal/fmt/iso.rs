//! Canonical ISO-8601 rendering, used by every `Display` implementation.

use std::fmt;

use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::zone::ZonedDateTime;
use crate::cal::{DatePiece, LocalDate, LocalDateTime, LocalTime, TimePiece};
use crate::instant::Instant;


/// Years with fewer than four digits are zero-padded, and years with more
/// than four get an explicit `+` so they can’t be mistaken for a
/// differently-split date.
fn write_year(f: &mut fmt::Formatter<'_>, year: i64) -> fmt::Result {
    if year.abs() < 1000 {
        if year < 0 {
            write!(f, "-{:04}", -year)
        }
        else {
            write!(f, "{:04}", year)
        }
    }
    else if year > 9999 {
        write!(f, "+{}", year)
    }
    else {
        write!(f, "{}", year)
    }
}

/// Writes `HH:mm`, then the seconds only if they (or the nanoseconds)
/// aren’t zero, then the shortest of three, six, or nine fraction digits.
fn write_time(f: &mut fmt::Formatter<'_>, time: &LocalTime, always_seconds: bool) -> fmt::Result {
    write!(f, "{:02}:{:02}", time.hour(), time.minute())?;

    let nano = time.nanosecond();
    if always_seconds || time.second() > 0 || nano > 0 {
        write!(f, ":{:02}", time.second())?;
    }

    if nano == 0 {
        Ok(())
    }
    else if nano % 1_000_000 == 0 {
        write!(f, ".{:03}", nano / 1_000_000)
    }
    else if nano % 1_000 == 0 {
        write!(f, ".{:06}", nano / 1_000)
    }
    else {
        write!(f, ".{:09}", nano)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year())?;
        write!(f, "-{:02}-{:02}", self.month().value(), self.day())
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_time(f, self, false)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.to_local_date(), self.to_local_time())
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_utc() {
            return f.write_str("Z");
        }

        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}:{:02}", sign, self.hours().abs(), self.minutes().abs())?;

        if self.seconds() != 0 {
            write!(f, ":{:02}", self.seconds().abs())?;
        }

        Ok(())
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.to_local_date_time(), self.offset())
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.offset().to_string();
        write!(f, "{}{}", self.to_local_date_time(), offset)?;

        // A zone named after its own offset isn’t repeated.
        if self.zone().id() != offset {
            write!(f, "[{}]", self.zone())?;
        }

        Ok(())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match LocalDateTime::of_epoch_second(self.epoch_second(), self.nano(), ZoneOffset::UTC) {
            Ok(local) => {
                write!(f, "{}T", local.to_local_date())?;
                write_time(f, &local.to_local_time(), true)?;
                f.write_str("Z")
            }

            // Past the year range there is no calendar form.
            Err(_) => write!(f, "{}.{:09}s", self.epoch_second(), self.nano()),
        }
    }
}
