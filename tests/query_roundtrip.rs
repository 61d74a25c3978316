//! Integration tests for the draft → query → values → draft round trip.

use chrono::NaiveDate;
use stayscout::core::filter::{FilterDraft, FilterValues, PriceRange};
use stayscout::core::query::{self, QueryMap};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_draft_survives_the_round_trip() {
    let draft = FilterDraft {
        going_to: "São Paulo".into(),
        travelers: "3".into(),
        check_in: Some(date(2026, 9, 1)),
        check_out: Some(date(2026, 9, 4)),
        price: PriceRange { min: 150, max: 480 },
        stars: 4,
    };

    let encoded = draft.to_query().encode();
    let decoded = QueryMap::parse(&encoded);
    let values = FilterValues::from_query(&decoded);
    let restored = FilterDraft::from_values(&values);

    assert_eq!(restored, draft);
}

#[test]
fn default_draft_round_trips_to_default() {
    let encoded = FilterDraft::default().to_query().encode();
    assert!(encoded.is_empty());

    let values = FilterValues::from_query(&QueryMap::parse(&encoded));
    assert_eq!(values, FilterValues::default());
}

#[test]
fn default_price_is_omitted_and_modified_price_included() {
    let draft = FilterDraft {
        going_to: "Rio".into(),
        ..Default::default()
    };
    let query = draft.to_query();
    assert!(query.get(query::KEY_PRICE).is_none());

    let draft = FilterDraft {
        going_to: "Rio".into(),
        price: PriceRange { min: 0, max: 500 },
        ..Default::default()
    };
    let query = draft.to_query();
    assert_eq!(query.all(query::KEY_PRICE), vec!["0", "500"]);
}

#[test]
fn dates_encode_as_iso_strings() {
    let draft = FilterDraft {
        check_in: Some(date(2026, 12, 24)),
        check_out: Some(date(2026, 12, 26)),
        ..Default::default()
    };

    let query = draft.to_query();
    assert_eq!(query.first(query::KEY_CHECK_IN), Some("2026-12-24"));
    assert_eq!(query.first(query::KEY_CHECK_OUT), Some("2026-12-26"));
}

#[test]
fn legacy_instant_dates_still_seed_the_draft() {
    let mut map = QueryMap::new();
    map.append(query::KEY_CHECK_IN, "2026-09-01T03:00:00.000Z");

    let values = FilterValues::from_query(&map);
    let draft = FilterDraft::from_values(&values);
    assert_eq!(draft.check_in, Some(date(2026, 9, 1)));
}

#[test]
fn accented_destination_survives_percent_encoding() {
    let draft = FilterDraft {
        going_to: "Florianópolis".into(),
        ..Default::default()
    };

    let encoded = draft.to_query().encode();
    assert!(!encoded.contains('ó'), "must be percent-encoded: {encoded}");

    let values = FilterValues::from_query(&QueryMap::parse(&encoded));
    assert_eq!(values.going_to.as_deref(), Some("Florianópolis"));
}
