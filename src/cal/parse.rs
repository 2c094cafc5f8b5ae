//! Reading dates and times from ISO-8601 strings, using the `iso8601`
//! crate for the syntax.

use std::str::FromStr;

use crate::cal::days::Weekday;
use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::{LocalDate, LocalDateTime, LocalTime};
use crate::error::Error;


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::date(input).map_err(Error::Parse)?;
        fields_to_date(fields)
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::time(input).map_err(Error::Parse)?;
        fields_to_time(fields)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    /// Reads a date and time with no offset. Input such as
    /// `2007-12-03T10:15:30+01:00` is rejected, as it describes an instant
    /// rather than a local date-time; parse it as an `OffsetDateTime`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if has_offset(input) {
            return Err(Error::Parse(format!("local date-time {:?} must not have an offset", input)));
        }

        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::of(date, time))
    }
}

impl FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let hours   = i64::from(fields.time.tz_offset_hours);
        let minutes = i64::from(fields.time.tz_offset_minutes);
        let sign    = if hours < 0 || minutes < 0 { -1 } else { 1 };
        let date    = fields_to_date(fields.date)?;
        let time    = fields_to_time(fields.time)?;
        let offset  = ZoneOffset::of_hours_minutes_seconds(sign * hours.abs(), sign * minutes.abs(), 0)?;
        Ok(Self::of(LocalDateTime::of(date, time), offset))
    }
}

impl FromStr for ZoneOffset {
    type Err = Error;

    /// Reads `Z`, `+hh:mm`, or `-hh:mm:ss`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == "Z" {
            return Ok(ZoneOffset::UTC);
        }

        let (sign, rest) = match input.chars().next() {
            Some('+')  => (1, &input[1..]),
            Some('-')  => (-1, &input[1..]),
            _          => return Err(Error::Parse(format!("offset {:?} must start with a sign", input))),
        };

        let mut parts = [0_i64; 3];
        let mut count = 0;
        for (index, piece) in rest.split(':').enumerate() {
            if index >= 3 || piece.len() != 2 || !piece.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::Parse(format!("invalid offset {:?}", input)));
            }

            parts[index] = piece.parse().map_err(|_| Error::Parse(format!("invalid offset {:?}", input)))?;
            count += 1;
        }

        if count < 2 {
            return Err(Error::Parse(format!("invalid offset {:?}", input)));
        }

        ZoneOffset::of_hours_minutes_seconds(sign * parts[0], sign * parts[1], sign * parts[2])
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, Error> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            LocalDate::of(i64::from(year), i64::from(month), i64::from(day))
        }

        iso8601::Date::Week { year, ww, d } => {
            let weekday = Weekday::from_one(i64::from(d))?;
            week_date(i64::from(year), i64::from(ww), weekday)
        }

        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::of_year_day(i64::from(year), i64::from(ddd))
        }
    }
}

/// The 4th of January is always in the first ISO week, so the Monday of
/// week one is found from its day of the week.
fn week_date(year: i64, week: i64, weekday: Weekday) -> Result<LocalDate, Error> {
    if !(1 ..= weeks_in_year(year)?).contains(&week) {
        return Err(Error::Parse(format!("week {} is out of range for {}", week, year)));
    }

    let jan_4 = LocalDate::of(year, 1, 4)?;
    let first_monday = jan_4.minus_days(jan_4.day_of_week().value() - 1)?;
    first_monday.plus_days((week - 1) * 7 + weekday.value() - 1)
}

/// A year has a 53rd ISO week when it starts on a Thursday, or when it is
/// a leap year starting on a Wednesday.
fn weeks_in_year(year: i64) -> Result<i64, Error> {
    let jan_1 = LocalDate::of(year, 1, 1)?;
    Ok(match (jan_1.day_of_week(), jan_1.is_leap_year()) {
        (Weekday::Thursday, _) | (Weekday::Wednesday, true)  => 53,
        _                                                    => 52,
    })
}

/// Whether anything after the date-time separator marks an offset.
fn has_offset(input: &str) -> bool {
    match input.find('T') {
        Some(index)  => input[index + 1 ..].contains(|c: char| c == 'Z' || c == 'z' || c == '+' || c == '-'),
        None         => false,
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    LocalTime::of(i64::from(fields.hour),
                  i64::from(fields.minute),
                  i64::from(fields.second),
                  i64::from(fields.millisecond) * 1_000_000)
}
