extern crate isocal;
use isocal::{LocalDate, LocalTime, LocalDateTime, ChronoUnit, Duration};


fn date(y: i64, m: i64, d: i64) -> LocalDate {
    LocalDate::of(y, m, d).unwrap()
}

fn datetime(y: i64, mo: i64, d: i64, h: i64, mi: i64) -> LocalDateTime {
    LocalDateTime::of_numbers(y, mo, d, h, mi, 0, 0).unwrap()
}


#[test]
fn addition() {
    let start = LocalDateTime::of_epoch_second(10000, 0, isocal::ZoneOffset::UTC).unwrap();
    assert_eq!(LocalDateTime::of_epoch_second(10001, 0, isocal::ZoneOffset::UTC).unwrap(),
               (start + Duration::of_seconds(1)).unwrap())
}

#[test]
fn subtraction() {
    let start = LocalDateTime::of_epoch_second(100000000, 0, isocal::ZoneOffset::UTC).unwrap();
    assert_eq!(LocalDateTime::of_epoch_second(99999999, 0, isocal::ZoneOffset::UTC).unwrap(),
               (start - Duration::of_seconds(1)).unwrap())
}

#[test]
fn end_of_march_plus_a_month() {
    assert_eq!(date(2007, 3, 31).plus_months(1), Ok(date(2007, 4, 30)));
}

#[test]
fn days_are_invertible() {
    let start = date(2012, 2, 28);
    for days in &[-1000, -1, 0, 1, 2, 365, 100_000] {
        assert_eq!(start.plus_days(*days).unwrap().minus_days(*days), Ok(start));
    }
}

#[test]
fn years_are_not_invertible() {
    let leap_day = date(2008, 2, 29);
    assert_eq!(leap_day.plus_years(1).unwrap().minus_years(1), Ok(date(2008, 2, 28)));
}

#[test]
fn before_across_a_month() {
    assert!(date(2012, 6, 30).is_before(date(2012, 7, 1)));
    assert!(!date(2012, 7, 1).is_before(date(2012, 6, 30)));
}

#[test]
fn time_carry() {
    let (time, days) = LocalTime::of_hm(23, 30).unwrap().plus_hours(2);
    assert_eq!(time, LocalTime::of_hm(1, 30).unwrap());
    assert_eq!(days, 1);

    let (time, days) = LocalTime::of_hm(0, 30).unwrap().minus_minutes(31);
    assert_eq!(time, LocalTime::of_hm(23, 59).unwrap());
    assert_eq!(days, -1);
}

#[test]
fn datetime_carry() {
    assert_eq!(datetime(2012, 12, 31, 23, 30).plus_hours(2), Ok(datetime(2013, 1, 1, 1, 30)));
    assert_eq!(datetime(2013, 1, 1, 1, 30).minus_hours(2), Ok(datetime(2012, 12, 31, 23, 30)));
}

#[test]
fn generic_units() {
    let start = datetime(2012, 1, 31, 12, 0);
    assert_eq!(start.plus(1, ChronoUnit::Months), Ok(datetime(2012, 2, 29, 12, 0)));
    assert_eq!(start.plus(2, ChronoUnit::Weeks), Ok(datetime(2012, 2, 14, 12, 0)));
    assert_eq!(start.minus(90, ChronoUnit::Minutes), Ok(datetime(2012, 1, 31, 10, 30)));
    assert_eq!(start.plus(1, ChronoUnit::Centuries), Ok(datetime(2112, 1, 31, 12, 0)));
}

#[test]
fn out_of_range() {
    assert!(LocalDateTime::MAX.plus_nanos(1).is_err());
    assert!(LocalDateTime::MIN.minus_nanos(1).is_err());
    assert!(datetime(2012, 1, 31, 12, 0).plus(i64::MAX, ChronoUnit::Millennia).unwrap_err().is_arithmetic());
}

#[test]
fn with_changes() {
    let start = datetime(2007, 3, 31, 10, 15);
    assert_eq!(start.with_month(2), Ok(datetime(2007, 2, 28, 10, 15)));
    assert!(start.with_day_of_month(32).is_err());
    assert_eq!(start.with_hour(0), Ok(datetime(2007, 3, 31, 0, 15)));
    assert!(start.with_minute(60).is_err());
}
