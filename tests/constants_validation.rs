//! Sanity checks on application constants.

use stayscout::util::constants;

#[test]
fn price_bounds_are_ordered() {
    assert!(constants::PRICE_MIN < constants::PRICE_MAX);
}

#[test]
fn search_path_is_absolute() {
    assert!(constants::SEARCH_PATH.starts_with('/'));
    assert_eq!(constants::SEARCH_PATH, "/searchHotel");
}

#[test]
fn star_scale_matches_the_widget() {
    assert_eq!(constants::STARS_MAX, 5);
}

#[test]
fn minimum_stay_is_at_least_one_night() {
    assert!(constants::MIN_NIGHTS >= 1);
}

#[test]
fn app_version_is_populated() {
    assert!(!constants::APP_VERSION.is_empty());
}
