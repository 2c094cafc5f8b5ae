//! Time zones, the rules that give their offset at any instant, and
//! date-times that carry one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::{local_epoch_second, OffsetDateTime, ZoneOffset};
use crate::cal::time::SECONDS_PER_DAY;
use crate::error::Error;
use crate::instant::Instant;
use crate::system::{sys_local_offset, sys_timezone};


/// The rules of a time zone: which offset from UTC is in effect at every
/// instant on the timeline.
///
/// Only `offset_at` needs implementing. The provided `resolve_local` works
/// out which offsets are valid for a *local* date-time by probing the
/// offsets a day either side of it, which finds any single transition;
/// rules that know their transitions exactly should override it.
pub trait ZoneRules: fmt::Debug + Send + Sync {

    /// Returns the offset in effect at the given instant.
    fn offset_at(&self, instant: Instant) -> Result<ZoneOffset, Error>;

    /// Returns the offsets that are valid for the given local date-time.
    fn resolve_local(&self, local: &LocalDateTime) -> Result<LocalOffsets, Error> {
        let seconds = local_epoch_second(local);
        let before = self.offset_at(Instant::of_epoch_second(seconds.saturating_sub(SECONDS_PER_DAY)))?;
        let after  = self.offset_at(Instant::of_epoch_second(seconds.saturating_add(SECONDS_PER_DAY)))?;

        if before == after {
            return Ok(LocalOffsets::Single(before));
        }

        let fits = |offset: ZoneOffset| -> Result<bool, Error> {
            let instant = Instant::of_epoch_second(seconds.saturating_sub(offset.total_seconds()));
            Ok(self.offset_at(instant)? == offset)
        };

        Ok(match (fits(before)?, fits(after)?) {
            (true, true)    => LocalOffsets::Overlap { earlier: before.max(after), later: before.min(after) },
            (true, false)   => LocalOffsets::Single(before),
            (false, true)   => LocalOffsets::Single(after),
            (false, false)  => LocalOffsets::Gap { before, after },
        })
    }

    /// Whether these rules always give the same offset.
    fn is_fixed(&self) -> bool {
        false
    }
}


/// The valid offsets for a local date-time in a particular zone.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum LocalOffsets {

    /// The usual case: exactly one offset is valid.
    Single(ZoneOffset),

    /// The local date-time was skipped when the clocks went forward, from
    /// the `before` offset to the `after` one.
    Gap { before: ZoneOffset, after: ZoneOffset },

    /// The local date-time happened twice when the clocks went back, first
    /// at the `earlier` offset and then at the `later` one.
    Overlap { earlier: ZoneOffset, later: ZoneOffset },
}

impl LocalOffsets {

    /// Whether the given offset is one of the valid ones.
    pub fn is_valid_offset(&self, offset: ZoneOffset) -> bool {
        match *self {
            LocalOffsets::Single(o)                   => o == offset,
            LocalOffsets::Gap { .. }                  => false,
            LocalOffsets::Overlap { earlier, later }  => earlier == offset || later == offset,
        }
    }
}


/// Zone rules made of a list of transitions, each of which changes the
/// offset at a known instant.
#[derive(PartialEq, Debug, Clone)]
pub struct TransitionRules {

    /// The offset in effect before the first transition, or forever if
    /// there are no transitions.
    first: ZoneOffset,

    /// The transitions, as tuples of a Unix timestamp and the offset that
    /// takes effect at that instant, sorted by timestamp.
    transitions: Vec<(i64, ZoneOffset)>,
}

impl TransitionRules {

    /// Creates a set of rules from an initial offset and a list of
    /// transitions, which need not be sorted. A transition to the offset
    /// that is already in effect is dropped.
    pub fn new(first: ZoneOffset, mut transitions: Vec<(i64, ZoneOffset)>) -> Self {
        transitions.sort_by_key(|t| t.0);

        let mut current = first;
        transitions.retain(|&(_, offset)| {
            let changes = offset != current;
            current = offset;
            changes
        });

        Self { first, transitions }
    }

    /// Pairs every transition with the offset that was in effect just
    /// before it.
    fn with_previous(&self) -> impl Iterator<Item = (ZoneOffset, &(i64, ZoneOffset))> {
        let previous = std::iter::once(self.first).chain(self.transitions.iter().map(|t| t.1));
        previous.zip(self.transitions.iter())
    }
}

impl ZoneRules for TransitionRules {
    fn offset_at(&self, instant: Instant) -> Result<ZoneOffset, Error> {
        let seconds = instant.epoch_second();
        let index = self.transitions.partition_point(|t| t.0 <= seconds);

        Ok(match index {
            0  => self.first,
            n  => self.transitions[n - 1].1,
        })
    }

    fn resolve_local(&self, local: &LocalDateTime) -> Result<LocalOffsets, Error> {
        let seconds = local_epoch_second(local);

        for (before, &(at, after)) in self.with_previous() {
            let local_before = at.saturating_add(before.total_seconds());
            let local_after  = at.saturating_add(after.total_seconds());

            // The clocks went forward: local times in between never happened.
            if after > before && (local_before .. local_after).contains(&seconds) {
                return Ok(LocalOffsets::Gap { before, after });
            }

            // The clocks went back: local times in between happened twice.
            if after < before && (local_after .. local_before).contains(&seconds) {
                return Ok(LocalOffsets::Overlap { earlier: before, later: after });
            }

            if seconds < local_before {
                return Ok(LocalOffsets::Single(before));
            }
        }

        Ok(LocalOffsets::Single(self.transitions.last().map_or(self.first, |t| t.1)))
    }

    fn is_fixed(&self) -> bool {
        self.transitions.is_empty()
    }
}


/// The rules of the host computer’s local time zone, as reported by the
/// operating system.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct SystemRules;

impl ZoneRules for SystemRules {
    fn offset_at(&self, instant: Instant) -> Result<ZoneOffset, Error> {
        ZoneOffset::of_total_seconds(sys_local_offset(instant.epoch_second())?)
    }
}


/// A **zone ID** is a named set of zone rules. Two IDs are equal when
/// their names are, regardless of the rules behind them.
#[derive(Clone)]
pub struct ZoneId {
    id: String,
    rules: Arc<dyn ZoneRules>,
}

impl ZoneId {

    /// Creates a zone with the given name and rules.
    pub fn new<R: ZoneRules + 'static>(id: impl Into<String>, rules: R) -> Self {
        Self { id: id.into(), rules: Arc::new(rules) }
    }

    /// Creates a zone that is always at the given offset, named after it.
    pub fn of_offset(offset: ZoneOffset) -> Self {
        Self::new(offset.to_string(), offset)
    }

    /// The UTC zone, named `Z`.
    pub fn utc() -> Self {
        Self::of_offset(ZoneOffset::UTC)
    }

    /// The host’s default time zone, named after the `TZ` environment
    /// variable or the zoneinfo file `/etc/localtime` links to. When
    /// neither gives a name, this is UTC.
    pub fn system_default() -> Self {
        match sys_timezone() {
            Some(name)  => Self::new(name, SystemRules),
            None        => {
                debug!("no system time zone found; defaulting to UTC");
                Self::utc()
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rules(&self) -> &dyn ZoneRules {
        &*self.rules
    }

    /// Returns the offset this zone has at the given instant.
    pub fn offset_at(&self, instant: Instant) -> Result<ZoneOffset, Error> {
        self.rules.offset_at(instant)
    }
}

impl PartialEq for ZoneId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ZoneId {}

impl Hash for ZoneId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneId({})", self.id)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}


/// A local date-time in a particular zone, along with the offset that
/// zone had at that date-time.
#[derive(PartialEq, Eq, Clone)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: ZoneOffset,
    zone: ZoneId,
}

impl ZonedDateTime {

    /// Places a local date-time in a zone.
    ///
    /// In a gap, the date-time is moved later by the length of the gap. In
    /// an overlap, the preferred offset is kept if it is one of the two
    /// valid ones; otherwise the earlier offset is used.
    pub fn of_local(local: LocalDateTime, zone: ZoneId, preferred: Option<ZoneOffset>) -> Result<Self, Error> {
        match zone.rules().resolve_local(&local)? {
            LocalOffsets::Single(offset) => {
                Ok(Self { local, offset, zone })
            }

            LocalOffsets::Gap { before, after } => {
                let shifted = local.plus_seconds(after.total_seconds() - before.total_seconds())?;
                debug!("{} falls in a gap in {}; moved to {}", local, zone, shifted);
                Ok(Self { local: shifted, offset: after, zone })
            }

            LocalOffsets::Overlap { earlier, later } => {
                let offset = match preferred {
                    Some(p) if p == later  => later,
                    _                      => earlier,
                };
                trace!("{} is in an overlap in {}; using {}", local, zone, offset);
                Ok(Self { local, offset, zone })
            }
        }
    }

    /// Places a local date-time in a zone, failing if it falls in a gap or
    /// an overlap.
    pub fn of_strict(local: LocalDateTime, zone: ZoneId) -> Result<Self, Error> {
        match zone.rules().resolve_local(&local)? {
            LocalOffsets::Single(offset)  => Ok(Self { local, offset, zone }),
            LocalOffsets::Gap { .. }      => Err(Error::Gap { local: local.to_string(), zone: zone.id }),
            LocalOffsets::Overlap { .. }  => Err(Error::Overlap { local: local.to_string(), zone: zone.id }),
        }
    }

    /// Returns the date-time in the given zone at the given instant.
    pub fn of_instant(instant: Instant, zone: ZoneId) -> Result<Self, Error> {
        let offset = zone.offset_at(instant)?;
        let local = LocalDateTime::of_epoch_second(instant.epoch_second(), instant.nano(), offset)?;
        Ok(Self { local, offset, zone })
    }

    pub fn to_local_date_time(&self) -> LocalDateTime {
        self.local
    }

    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    pub fn to_offset_date_time(&self) -> OffsetDateTime {
        OffsetDateTime::of(self.local, self.offset)
    }

    pub fn to_epoch_second(&self) -> i64 {
        self.local.to_epoch_second(self.offset)
    }

    pub fn to_instant(&self) -> Result<Instant, Error> {
        self.to_offset_date_time().to_instant()
    }

    /// If this date-time is in an overlap, returns it with the earlier of
    /// the two offsets. Otherwise, returns it unchanged.
    pub fn with_earlier_offset_at_overlap(&self) -> Result<Self, Error> {
        match self.zone.rules().resolve_local(&self.local)? {
            LocalOffsets::Overlap { earlier, .. }  => Ok(Self { offset: earlier, ..self.clone() }),
            _                                      => Ok(self.clone()),
        }
    }

    /// If this date-time is in an overlap, returns it with the later of
    /// the two offsets. Otherwise, returns it unchanged.
    pub fn with_later_offset_at_overlap(&self) -> Result<Self, Error> {
        match self.zone.rules().resolve_local(&self.local)? {
            LocalOffsets::Overlap { later, .. }  => Ok(Self { offset: later, ..self.clone() }),
            _                                    => Ok(self.clone()),
        }
    }

    /// Returns the same instant in a different zone.
    pub fn with_zone_same_instant(&self, zone: ZoneId) -> Result<Self, Error> {
        Self::of_instant(self.to_instant()?, zone)
    }

    /// Returns the same local date-time in a different zone, keeping the
    /// current offset if it is still valid there.
    pub fn with_zone_same_local(&self, zone: ZoneId) -> Result<Self, Error> {
        Self::of_local(self.local, zone, Some(self.offset))
    }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZonedDateTime({})", self)
    }
}
