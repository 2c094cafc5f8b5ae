extern crate isocal;
use isocal::{Clock, Duration, Instant, LocalDateTime, ZoneId, ZoneOffset};


fn fixed() -> Clock {
    Clock::fixed(Instant::of_epoch_second(1_234_567_890), ZoneId::utc())
}


#[test]
fn fixed_clock_equality() {
    assert_eq!(fixed(), fixed());
    assert_ne!(fixed(), Clock::fixed(Instant::of_epoch_second(1_234_567_890), ZoneId::of_offset(ZoneOffset::of_hours(1).unwrap())));
}

#[test]
fn fixed_clock_reads_the_same_instant() {
    let clock = fixed();
    assert_eq!(clock.instant(), Ok(Instant::of_epoch_second(1_234_567_890)));
    assert_eq!(clock.millis(), Ok(1_234_567_890_000));
}

#[test]
fn now_with_a_fixed_clock() {
    let now = LocalDateTime::now_with(&fixed()).unwrap();
    assert_eq!(now.to_string(), "2009-02-13T23:31:30");
}

#[test]
fn now_with_a_zone() {
    let clock = fixed().with_zone(ZoneId::of_offset(ZoneOffset::of_hours(2).unwrap()));
    let now = LocalDateTime::now_with(&clock).unwrap();
    assert_eq!(now.to_string(), "2009-02-14T01:31:30");
}

#[test]
fn zero_offset_gives_the_base_back() {
    assert_eq!(Clock::offset(fixed(), Duration::ZERO), fixed());
}

#[test]
fn offset_clock_moves_the_instant() {
    let clock = Clock::offset(fixed(), Duration::of_seconds(-30));
    assert_eq!(clock.instant(), Ok(Instant::of_epoch_second(1_234_567_860)));
    assert_eq!(clock.zone(), &ZoneId::utc());
}

#[test]
fn system_clock() {
    let clock = Clock::system_utc();
    let first = clock.instant().unwrap();
    let second = clock.instant().unwrap();
    assert!(!second.is_before(first));
}

#[test]
fn now() {
    assert!(LocalDateTime::now().is_ok());
}
