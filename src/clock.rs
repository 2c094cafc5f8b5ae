//! Clocks, which give the current instant in a particular zone.

use crate::cal::zone::ZoneId;
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;


/// A **clock** gives access to the current instant, along with a zone to
/// interpret it in.
///
/// Code that asks a `Clock` for the time, rather than asking the system
/// directly, can be handed a fixed or offset clock in tests.
///
/// ```rust
/// use isocal::{Clock, Instant, ZoneId};
///
/// let clock = Clock::fixed(Instant::of_epoch_second(1_000), ZoneId::utc());
/// assert_eq!(clock.millis(), Ok(1_000_000));
/// ```
#[derive(PartialEq, Debug, Clone)]
pub enum Clock {

    /// The host computer’s wall clock.
    System { zone: ZoneId },

    /// A clock that always reads the same instant.
    Fixed { instant: Instant, zone: ZoneId },

    /// Another clock, moved forwards or backwards by a fixed duration.
    Offset { base: Box<Clock>, offset: Duration },
}

impl Clock {

    /// The system clock, in UTC.
    pub fn system_utc() -> Self {
        Clock::System { zone: ZoneId::utc() }
    }

    /// The system clock, in the host’s default time zone.
    pub fn system_default_zone() -> Self {
        Clock::System { zone: ZoneId::system_default() }
    }

    /// The system clock, in the given zone.
    pub fn system(zone: ZoneId) -> Self {
        Clock::System { zone }
    }

    /// A clock that always reads the given instant.
    pub fn fixed(instant: Instant, zone: ZoneId) -> Self {
        Clock::Fixed { instant, zone }
    }

    /// A clock that reads the base clock’s instant plus a duration. A zero
    /// duration gives back the base clock itself.
    pub fn offset(base: Clock, offset: Duration) -> Self {
        if offset.is_zero() {
            base
        }
        else {
            Clock::Offset { base: Box::new(base), offset }
        }
    }

    /// The current instant.
    pub fn instant(&self) -> Result<Instant, Error> {
        match *self {
            Clock::System { .. }                   => Instant::now(),
            Clock::Fixed { instant, .. }           => Ok(instant),
            Clock::Offset { ref base, offset }     => base.instant()?.checked_add(offset),
        }
    }

    /// The current instant, as milliseconds since the Unix epoch.
    pub fn millis(&self) -> Result<i64, Error> {
        self.instant()?.to_epoch_milli()
    }

    /// The zone this clock’s instants are interpreted in.
    pub fn zone(&self) -> &ZoneId {
        match *self {
            Clock::System { ref zone }        => zone,
            Clock::Fixed { ref zone, .. }     => zone,
            Clock::Offset { ref base, .. }    => base.zone(),
        }
    }

    /// Returns a copy of this clock that uses a different zone.
    pub fn with_zone(&self, zone: ZoneId) -> Self {
        if *self.zone() == zone {
            return self.clone();
        }

        match *self {
            Clock::System { .. }                => Clock::System { zone },
            Clock::Fixed { instant, .. }        => Clock::Fixed { instant, zone },
            Clock::Offset { ref base, offset }  => Clock::Offset { base: Box::new(base.with_zone(zone)), offset },
        }
    }
}
