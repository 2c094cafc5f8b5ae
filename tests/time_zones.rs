extern crate isocal;
use isocal::{LocalDateTime, LocalOffsets, ZoneOffset, ZoneId, ZoneRules, TransitionRules, Instant, Error};


fn offset(seconds: i64) -> ZoneOffset {
    ZoneOffset::of_total_seconds(seconds).unwrap()
}

/// Alternates between two offsets, an hour apart, at the start and end of
/// the summers of 2008 and 2009.
fn test_rules() -> TransitionRules {
    TransitionRules::new(offset(0), vec![
        (1206838800, offset(3600)),
        (1224982800, offset(0)),
        (1238288400, offset(3600)),
        (1256432400, offset(0)),
    ])
}

fn test_zone() -> ZoneId {
    ZoneId::new("Test Zoneset", test_rules())
}

fn datetime(y: i64, mo: i64, d: i64, h: i64, mi: i64) -> LocalDateTime {
    LocalDateTime::of_numbers(y, mo, d, h, mi, 0, 0).unwrap()
}


#[test]
fn winter() {
    let zoned = datetime(2008, 1, 15, 12, 0).at_zone(&test_zone()).unwrap();
    assert_eq!(zoned.offset(), offset(0));
}

#[test]
fn summer() {
    let zoned = datetime(2008, 7, 15, 12, 0).at_zone(&test_zone()).unwrap();
    assert_eq!(zoned.offset(), offset(3600));
    assert_eq!(zoned.to_instant().unwrap().epoch_second(), datetime(2008, 7, 15, 11, 0).to_epoch_second(offset(0)));
}

#[test]
fn impossible() {
    let local = datetime(2008, 3, 30, 1, 30);
    assert_eq!(test_rules().resolve_local(&local), Ok(LocalOffsets::Gap { before: offset(0), after: offset(3600) }));

    let zoned = local.at_zone(&test_zone()).unwrap();
    assert_eq!(zoned.to_local_date_time(), datetime(2008, 3, 30, 2, 30));

    match local.at_zone_strict(&test_zone()) {
        Err(Error::Gap { .. })  => {},
        other                   => panic!("expected a gap, got {:?}", other),
    }
}

#[test]
fn ambiguous() {
    let local = datetime(2008, 10, 26, 1, 30);
    assert_eq!(test_rules().resolve_local(&local), Ok(LocalOffsets::Overlap { earlier: offset(3600), later: offset(0) }));

    let zoned = local.at_zone(&test_zone()).unwrap();
    assert_eq!(zoned.offset(), offset(3600));
    assert_eq!(zoned.with_later_offset_at_overlap().unwrap().offset(), offset(0));

    match local.at_zone_strict(&test_zone()) {
        Err(Error::Overlap { .. })  => {},
        other                       => panic!("expected an overlap, got {:?}", other),
    }
}

#[test]
fn offsets_outside_an_overlap_are_kept() {
    let local = datetime(2008, 10, 26, 1, 30);
    let zoned = local.at_zone(&test_zone()).unwrap();
    assert_eq!(zoned.with_earlier_offset_at_overlap().unwrap(), zoned);

    let plain = datetime(2008, 10, 27, 1, 30).at_zone(&test_zone()).unwrap();
    assert_eq!(plain.with_later_offset_at_overlap().unwrap(), plain);
}

#[test]
fn instant_to_local() {
    let instant = Instant::of_epoch_second(1238288400);
    assert_eq!(LocalDateTime::of_instant(instant, &test_zone()), Ok(datetime(2009, 3, 29, 2, 0)));

    let before = Instant::of_epoch_second(1238288399);
    assert_eq!(LocalDateTime::of_instant(before, &test_zone()).unwrap().to_string(), "2009-03-29T00:59:59");
}

#[test]
fn fixed_offset_zone() {
    let zone = ZoneId::of_offset(offset(-18000));
    assert!(zone.rules().is_fixed());
    assert_eq!(zone.id(), "-05:00");
    assert_eq!(datetime(2008, 3, 30, 1, 30).at_zone_strict(&zone).unwrap().offset(), offset(-18000));
}

#[test]
fn system_default_zone() {
    let zone = ZoneId::system_default();
    let now = LocalDateTime::now_in(&zone).unwrap();
    assert!(now.at_zone(&zone).is_ok());
}
