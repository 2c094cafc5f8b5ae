extern crate isocal;
pub use std::string::ToString;

mod datetimes {
    use super::*;
    use isocal::{LocalDate, LocalTime, LocalDateTime};

    #[test]
    fn recently() {
        let date = LocalDate::of(1600, 2, 28).unwrap();
        assert_eq!(date.to_string(), "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = LocalDate::of(-753, 12, 1).unwrap();
        assert_eq!(date.to_string(), "-0753-12-01");
    }

    #[test]
    fn far_far_future() {
        let date = LocalDate::of(10601, 1, 31).unwrap();
        assert_eq!(date.to_string(), "+10601-01-31");
    }

    #[test]
    fn midday() {
        let time = LocalTime::of_hms(12, 0, 0).unwrap();
        assert_eq!(time.to_string(), "12:00");
    }

    #[test]
    fn ascending() {
        let then = LocalDateTime::of(
                    LocalDate::of(2009, 2, 13).unwrap(),
                    LocalTime::of_hms(23, 31, 30).unwrap());

        assert_eq!(then.to_string(), "2009-02-13T23:31:30");
    }

    #[test]
    fn canonical() {
        let then = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(then.to_string(), "2007-12-03T10:15:30");
    }

    #[test]
    fn shortest_fractions() {
        let base = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(base.with_nano(120_000_000).unwrap().to_string(), "2007-12-03T10:15:30.120");
        assert_eq!(base.with_nano(120_001_000).unwrap().to_string(), "2007-12-03T10:15:30.120001");
        assert_eq!(base.with_nano(120_000_001).unwrap().to_string(), "2007-12-03T10:15:30.120000001");
    }

    #[test]
    fn debug() {
        let date = LocalDate::of(2015, 6, 26).unwrap();
        assert_eq!(format!("{:?}", date), "LocalDate(2015-06-26)");
        assert_eq!(format!("{:?}", LocalTime::NOON), "LocalTime(12:00)");
    }
}

mod zoned {
    use super::*;
    use isocal::{LocalDateTime, ZoneOffset, ZoneId, TransitionRules};

    #[test]
    fn offsets() {
        assert_eq!(ZoneOffset::UTC.to_string(), "Z");
        assert_eq!(ZoneOffset::of_hours(1).unwrap().to_string(), "+01:00");
        assert_eq!(ZoneOffset::of_total_seconds(-1521).unwrap().to_string(), "-00:25:21");
    }

    #[test]
    fn offset_datetime() {
        let then = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(then.at_offset(ZoneOffset::of_hours(1).unwrap()).to_string(), "2007-12-03T10:15:30+01:00");
    }

    #[test]
    fn named_zone() {
        let paris = ZoneId::new("Europe/Paris", TransitionRules::new(ZoneOffset::of_hours(1).unwrap(), Vec::new()));
        let then = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(then.at_zone(&paris).unwrap().to_string(), "2007-12-03T10:15:30+01:00[Europe/Paris]");
    }

    #[test]
    fn offset_zone() {
        let zone = ZoneId::of_offset(ZoneOffset::of_hours(-5).unwrap());
        let then = LocalDateTime::of_numbers(2007, 12, 3, 10, 15, 30, 0).unwrap();
        assert_eq!(then.at_zone(&zone).unwrap().to_string(), "2007-12-03T10:15:30-05:00");
    }
}
