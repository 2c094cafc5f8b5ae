//! Fixed offsets from UTC, and date-times that carry one.

use std::fmt;

use crate::cal::datetime::LocalDateTime;
use crate::cal::field::ChronoField;
use crate::cal::time::SECONDS_PER_DAY;
use crate::cal::zone::{LocalOffsets, ZoneRules};
use crate::error::Error;
use crate::instant::Instant;
use crate::util::{checked_sub, RangeExt};


/// The largest offset in either direction, eighteen hours.
const MAX_SECONDS: i32 = 18 * 60 * 60;


/// A fixed number of seconds east (positive) or west (negative) of UTC.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ZoneOffset {
    total_seconds: i32,
}

impl ZoneOffset {

    /// The offset of UTC itself.
    pub const UTC: ZoneOffset = ZoneOffset { total_seconds: 0 };

    pub const MIN: ZoneOffset = ZoneOffset { total_seconds: -MAX_SECONDS };
    pub const MAX: ZoneOffset = ZoneOffset { total_seconds: MAX_SECONDS };

    /// Creates an offset from a total number of seconds, which must be
    /// within eighteen hours either side of UTC.
    pub fn of_total_seconds(seconds: i64) -> Result<Self, Error> {
        if seconds.is_within(-i64::from(MAX_SECONDS) ..= i64::from(MAX_SECONDS)) {
            Ok(Self { total_seconds: seconds as i32 })
        }
        else {
            Err(Error::OffsetOutOfRange(seconds))
        }
    }

    /// Creates an offset from hours, minutes, and seconds, which must all
    /// have the same sign.
    ///
    /// ```rust
    /// use isocal::ZoneOffset;
    ///
    /// assert!(ZoneOffset::of_hours_minutes_seconds(-3, -45, 0).is_ok());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(-4, 30, 0).is_err());
    /// ```
    pub fn of_hours_minutes_seconds(hours: i64, minutes: i64, seconds: i64) -> Result<Self, Error> {
        let parts = [hours, minutes, seconds];
        if parts.iter().any(|p| *p > 0) && parts.iter().any(|p| *p < 0) {
            return Err(Error::OffsetSignMismatch);
        }

        if !hours.is_within(-18 ..= 18) || !minutes.is_within(-59 ..= 59) || !seconds.is_within(-59 ..= 59) {
            let total = hours.saturating_mul(3600).saturating_add(minutes.saturating_mul(60)).saturating_add(seconds);
            return Err(Error::OffsetOutOfRange(total));
        }

        Self::of_total_seconds(hours * 3600 + minutes * 60 + seconds)
    }

    pub fn of_hours(hours: i64) -> Result<Self, Error> {
        Self::of_hours_minutes_seconds(hours, 0, 0)
    }

    pub fn total_seconds(self) -> i64 {
        i64::from(self.total_seconds)
    }

    pub fn is_utc(self) -> bool {
        self.total_seconds == 0
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds < 0
    }

    pub fn hours(self) -> i64 {
        i64::from(self.total_seconds / 3600)
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.total_seconds / 60 % 60)
    }

    pub fn seconds(self) -> i64 {
        i64::from(self.total_seconds % 60)
    }
}

/// A fixed offset is its own (trivial) set of zone rules.
impl ZoneRules for ZoneOffset {
    fn offset_at(&self, _instant: Instant) -> Result<ZoneOffset, Error> {
        Ok(*self)
    }

    fn resolve_local(&self, _local: &LocalDateTime) -> Result<LocalOffsets, Error> {
        Ok(LocalOffsets::Single(*self))
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

impl fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneOffset({})", self)
    }
}


/// A local date-time together with the fixed offset it was observed at.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct OffsetDateTime {
    local: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {

    /// Pairs a local date-time with an offset. Every combination is valid.
    pub fn of(local: LocalDateTime, offset: ZoneOffset) -> Self {
        Self { local, offset }
    }

    pub fn to_local_date_time(&self) -> LocalDateTime {
        self.local
    }

    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    /// The number of seconds between the Unix epoch and this point on the
    /// UTC time-line.
    pub fn to_epoch_second(&self) -> i64 {
        self.local.to_epoch_second(self.offset)
    }

    pub fn to_instant(&self) -> Result<Instant, Error> {
        Instant::of_epoch_second_nanos(self.to_epoch_second(), self.local.to_local_time().nano())
    }

    /// Returns the same instant as observed at a different offset.
    pub fn with_offset_same_instant(&self, offset: ZoneOffset) -> Result<Self, Error> {
        if offset == self.offset {
            return Ok(*self);
        }

        let difference = checked_sub(offset.total_seconds(), self.offset.total_seconds(), "with_offset_same_instant")?;
        let local = self.local.plus_seconds(difference)?;
        Ok(Self { local, offset })
    }

    /// Reads the offset-seconds or instant-seconds field, falling back to
    /// the local date-time for everything else.
    pub fn get_long(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::OffsetSeconds   => Ok(self.offset.total_seconds()),
            ChronoField::InstantSeconds  => Ok(self.to_epoch_second()),
            _                            => self.local.get_long(field),
        }
    }
}

impl fmt::Debug for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OffsetDateTime({})", self)
    }
}

pub(crate) fn local_epoch_second(local: &LocalDateTime) -> i64 {
    local.to_local_date().to_epoch_day() * SECONDS_PER_DAY + local.to_local_time().to_second_of_day()
}
