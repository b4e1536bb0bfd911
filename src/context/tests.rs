use super::ZoneContext;
use crate::{
    iso::IsoDateTime, options::Disambiguation, provider::CompiledTzdbProvider, ErrorKind,
    Instant, TimeZone, ZoneArg,
};

fn y2k() -> Instant {
    Instant::utc(2000, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn convert_keeps_instant() {
    let context = ZoneContext::default();
    let zoned = context.convert_to_zone(y2k(), "Hawaii").unwrap();
    assert_eq!(
        (zoned.year(), zoned.month(), zoned.day(), zoned.hour()),
        (1999, 12, 31, 14)
    );
    assert_eq!(zoned.offset().seconds(), -36_000);
    assert_eq!(zoned.instant(), y2k());
    assert_eq!(zoned.zone_name(), "Hawaii");
}

#[test]
fn reinterpret_keeps_fields() {
    let context = ZoneContext::default();
    let zoned = context.reinterpret_in_zone(y2k(), "Hawaii").unwrap();
    assert_eq!(zoned.to_rfc3339(), "2000-01-01T00:00:00-10:00");
    assert_eq!(zoned.instant(), Instant::utc(2000, 1, 1, 10, 0, 0).unwrap());
}

#[test]
fn current_zone_matches_explicit_zone() {
    let context = ZoneContext::default();
    let zone = context.set_default_zone("Hawaii").unwrap();
    assert_eq!(context.default_zone(), Some(zone.clone()));

    assert_eq!(
        context.convert_to_current_zone(y2k()).unwrap(),
        context.convert_to_zone(y2k(), &zone).unwrap()
    );
    assert_eq!(
        context.reinterpret_in_current_zone(y2k()).unwrap(),
        context.reinterpret_in_zone(y2k(), &zone).unwrap()
    );
}

#[test]
fn reset_clears_default_zone() {
    let context = ZoneContext::default();
    context.set_default_zone("Hawaii").unwrap();
    context.reset_default_zone();
    context.reset_default_zone();
    assert_eq!(context.default_zone(), None);

    let err = context.convert_to_current_zone(y2k()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoDefaultZone);
    let err = context.reinterpret_in_current_zone(y2k()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoDefaultZone);
}

#[test]
fn unknown_zone_fails_without_state_change() {
    let context = ZoneContext::default();
    let err = context.convert_to_zone(y2k(), "Narnia/Nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownZone);
    let err = context.reinterpret_in_zone(y2k(), "Narnia/Nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownZone);

    context.set_default_zone("Tokyo").unwrap();
    let err = context.set_default_zone("Narnia/Nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownZone);
    assert_eq!(context.default_zone().unwrap().name(), "Tokyo");
}

#[test]
fn resolved_zone_passes_through() {
    let context = ZoneContext::default();
    let zone = context.resolve("Eastern Time (US & Canada)").unwrap();
    assert_eq!(context.resolve(&zone).unwrap(), zone);
    assert_eq!(context.resolve(zone.clone()).unwrap(), zone);
    // Not a registry name, but used as is.
    let custom = TimeZone::named("Somewhere", "Europe/Paris");
    assert_eq!(context.resolve(&custom).unwrap(), custom);
}

#[test]
fn numeric_zone_arguments() {
    let context = ZoneContext::default();
    let hawaii = context.resolve("Hawaii").unwrap();
    assert_eq!(context.resolve(-10_i32).unwrap(), hawaii);
    assert_eq!(context.resolve(-36_000_i64).unwrap(), hawaii);
    assert_eq!(context.resolve(ZoneArg::Offset(-10.0)).unwrap(), hawaii);
    let zoned = context.convert_to_zone(y2k(), -10_i32).unwrap();
    assert_eq!(zoned.hour(), 14);
}

#[test]
fn offset_string_zones() {
    let context = ZoneContext::default();
    let zoned = context.convert_to_zone(y2k(), "-03:30").unwrap();
    assert_eq!(zoned.to_string(), "1999-12-31T20:30:00-03:30[-03:30]");
    let zoned = context.reinterpret_in_zone(y2k(), "Z").unwrap();
    assert_eq!(zoned.instant(), y2k());
}

#[test]
fn set_default_zone_stores_resolved_form() {
    let context = ZoneContext::default();
    let hawaii = context.resolve("Hawaii").unwrap();
    let args: [ZoneArg<'_>; 4] = [
        "Hawaii".into(),
        (-10_i32).into(),
        (&hawaii).into(),
        "Europe/Paris".into(),
    ];
    for arg in args {
        let expected = context.resolve(arg.clone()).unwrap();
        assert_eq!(context.set_default_zone(arg).unwrap(), expected);
        assert_eq!(context.default_zone(), Some(expected));
    }
}

#[test]
fn convert_renders_shifted_fields() {
    let context = ZoneContext::default();
    let t = Instant::utc(2016, 6, 30, 23, 15, 0).unwrap();
    for zone in ["Hawaii", "Kathmandu", "Chatham Is.", "America/Sao_Paulo", "-00:30"] {
        let zoned = context.convert_to_zone(t, zone).unwrap();
        assert_eq!(zoned.instant(), t, "{zone}");
        let shifted = Instant::from_epoch_seconds(
            t.epoch_seconds() + i64::from(zoned.offset().seconds()),
        )
        .unwrap();
        assert_eq!(zoned.date_time(), shifted.to_utc_date_time(), "{zone}");
    }
}

#[test]
fn reinterpret_then_convert_round_trips_fields() {
    let context = ZoneContext::default();
    let t = Instant::utc(2021, 7, 15, 8, 45, 30).unwrap();
    for zone in ["Hawaii", "Europe/Berlin", "Kathmandu", "+09:00"] {
        let reinterpreted = context.reinterpret_in_zone(t, zone).unwrap();
        let back = context.convert_to_zone(reinterpreted.instant(), zone).unwrap();
        assert_eq!(back.date_time(), t.to_utc_date_time(), "{zone}");
    }
}

#[test]
fn zoned_values_convert_and_reinterpret() {
    let context = ZoneContext::default();
    let hawaii = context.convert_to_zone(y2k(), "Hawaii").unwrap();

    let tokyo = context.convert_zoned(&hawaii, "Tokyo").unwrap();
    assert_eq!(tokyo.instant(), y2k());
    assert_eq!(tokyo.to_rfc3339(), "2000-01-01T09:00:00+09:00");

    let tokyo = context.reinterpret_zoned(&hawaii, "Tokyo").unwrap();
    assert_eq!(tokyo.to_rfc3339(), "1999-12-31T14:00:00+09:00");
    assert_eq!(tokyo.instant().to_string(), "1999-12-31T05:00:00Z");
}

#[test]
fn new_york_wall_clock_disambiguation() {
    let context = ZoneContext::default();
    let gap = IsoDateTime::try_from_fields(2017, 3, 12, 2, 30, 0, 0).unwrap();
    let zoned = context
        .reinterpret_date_time_in_zone(gap, "Eastern Time (US & Canada)", Disambiguation::default())
        .unwrap();
    assert_eq!(zoned.to_rfc3339(), "2017-03-12T03:30:00-04:00");

    let overlap = IsoDateTime::try_from_fields(2017, 11, 5, 1, 30, 0, 0).unwrap();
    let earlier = context
        .reinterpret_date_time_in_zone(overlap, "America/New_York", Disambiguation::Earlier)
        .unwrap();
    let later = context
        .reinterpret_date_time_in_zone(overlap, "America/New_York", Disambiguation::Later)
        .unwrap();
    assert_eq!(earlier.to_rfc3339(), "2017-11-05T01:30:00-04:00");
    assert_eq!(later.to_rfc3339(), "2017-11-05T01:30:00-05:00");

    let err = context
        .reinterpret_date_time_in_zone(overlap, "America/New_York", Disambiguation::Reject)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn contexts_do_not_share_default_zone() {
    let first = ZoneContext::new(CompiledTzdbProvider::new());
    let second = ZoneContext::default();
    first.set_default_zone("Hawaii").unwrap();
    assert!(second.default_zone().is_none());
}

#[test]
fn concurrent_readers_and_writers() {
    let context = ZoneContext::default();
    let zones = ["Hawaii", "Tokyo", "UTC", "Europe/Paris"];
    std::thread::scope(|scope| {
        for zone in zones {
            let context = &context;
            scope.spawn(move || {
                for _ in 0..50 {
                    context.set_default_zone(zone).unwrap();
                    // Another writer may have run in between, but any
                    // observed value is one of the stored zones.
                    let current = context.default_zone().unwrap();
                    assert!(zones.iter().any(|z| current.name() == *z));
                }
            });
        }
    });
    assert!(context.default_zone().is_some());
}

#[test]
fn global_context() {
    let context = ZoneContext::global();
    context.set_default_zone("UTC").unwrap();
    let zoned = context.convert_to_current_zone(y2k()).unwrap();
    assert_eq!(zoned.to_string(), "2000-01-01T00:00:00+00:00[Etc/UTC]");
    context.reset_default_zone();
    assert!(ZoneContext::global().default_zone().is_none());
}

#[cfg(feature = "sys")]
#[test]
fn now_requires_default_zone() {
    let context = ZoneContext::default();
    let err = context.now_in_current_zone().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoDefaultZone);
    context.set_default_zone("UTC").unwrap();
    assert!(context.now_in_current_zone().is_ok());
}
