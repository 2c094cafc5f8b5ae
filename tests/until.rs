extern crate isocal;
use isocal::{LocalDateTime, ChronoUnit, ErrorKind};


fn datetime(y: i64, mo: i64, d: i64, h: i64, mi: i64) -> LocalDateTime {
    LocalDateTime::of_numbers(y, mo, d, h, mi, 0, 0).unwrap()
}


#[test]
fn a_minute_short_of_two_months() {
    let start = datetime(2012, 6, 15, 12, 0);
    let end = datetime(2012, 8, 15, 11, 59);
    assert_eq!(start.until(&end, ChronoUnit::Months), Ok(1));
    assert_eq!(start.until(&end.plus_minutes(1).unwrap(), ChronoUnit::Months), Ok(2));
}

#[test]
fn partial_days_are_dropped() {
    let start = datetime(2012, 6, 15, 12, 0);
    let end = datetime(2012, 6, 17, 11, 0);
    assert_eq!(start.until(&end, ChronoUnit::Days), Ok(1));
    assert_eq!(start.until(&end, ChronoUnit::HalfDays), Ok(3));
    assert_eq!(start.until(&end, ChronoUnit::Hours), Ok(47));
}

#[test]
fn backwards() {
    let start = datetime(2012, 6, 17, 11, 0);
    let end = datetime(2012, 6, 15, 12, 0);
    assert_eq!(start.until(&end, ChronoUnit::Days), Ok(-1));
    assert_eq!(start.until(&end, ChronoUnit::Hours), Ok(-47));
    assert_eq!(start.until(&end, ChronoUnit::Minutes), Ok(-47 * 60));
}

#[test]
fn leap_day_anniversary() {
    let start = datetime(2000, 2, 29, 0, 0);
    assert_eq!(start.until(&datetime(2004, 2, 28, 23, 59), ChronoUnit::Years), Ok(3));
    assert_eq!(start.until(&datetime(2004, 2, 29, 0, 0), ChronoUnit::Years), Ok(4));
}

#[test]
fn same_instant() {
    let dt = datetime(2012, 6, 15, 12, 0);
    for unit in &[ChronoUnit::Nanos, ChronoUnit::Hours, ChronoUnit::Days, ChronoUnit::Millennia] {
        assert_eq!(dt.until(&dt, *unit), Ok(0));
    }
}

#[test]
fn sub_second_units() {
    let start = datetime(2012, 6, 15, 12, 0);
    let end = start.plus_nanos(1_500_000_999).unwrap();
    assert_eq!(start.until(&end, ChronoUnit::Seconds), Ok(1));
    assert_eq!(start.until(&end, ChronoUnit::Millis), Ok(1_500));
    assert_eq!(start.until(&end, ChronoUnit::Micros), Ok(1_500_000));
    assert_eq!(start.until(&end, ChronoUnit::Nanos), Ok(1_500_000_999));
}

#[test]
fn whole_range_in_seconds() {
    let seconds = LocalDateTime::MIN.until(&LocalDateTime::MAX, ChronoUnit::Seconds).unwrap();
    assert!(seconds > 0);
}

#[test]
fn whole_range_in_nanos_overflows() {
    let error = LocalDateTime::MIN.until(&LocalDateTime::MAX, ChronoUnit::Nanos).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Arithmetic);
}

#[test]
fn forever_is_unsupported() {
    let dt = datetime(2012, 6, 15, 12, 0);
    let error = dt.until(&dt, ChronoUnit::Forever).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DateTime);
}
