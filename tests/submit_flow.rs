//! Integration tests for the submission flow against the router.

use stayscout::core::filter::{FilterDraft, PriceRange};
use stayscout::core::query::QueryMap;
use stayscout::core::router::{submit_search, NavRequest, Navigator, Router};

/// Records every request it receives, in order.
#[derive(Default)]
struct RecordingNavigator {
    requests: Vec<NavRequest>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, request: NavRequest) {
        self.requests.push(request);
    }
}

#[test]
fn submission_navigates_exactly_once() {
    let draft = FilterDraft {
        going_to: "Rio".into(),
        stars: 4,
        ..Default::default()
    };

    let mut nav = RecordingNavigator::default();
    submit_search(&draft, &mut nav);

    assert_eq!(nav.requests.len(), 1);
    assert_eq!(nav.requests[0].href(), "/searchHotel?goingTo=Rio&stars=4");
}

#[test]
fn submission_with_all_defaults_still_navigates() {
    let mut nav = RecordingNavigator::default();
    submit_search(&FilterDraft::default(), &mut nav);

    assert_eq!(nav.requests.len(), 1);
    assert_eq!(nav.requests[0].href(), "/searchHotel");
    assert!(nav.requests[0].query.is_empty());
}

#[test]
fn router_stacks_searches_and_goes_back() {
    let mut router = Router::new();
    assert!(router.current().is_none());

    submit_search(
        &FilterDraft {
            going_to: "Salvador".into(),
            ..Default::default()
        },
        &mut router,
    );
    submit_search(
        &FilterDraft {
            going_to: "Recife".into(),
            price: PriceRange { min: 80, max: 300 },
            ..Default::default()
        },
        &mut router,
    );

    assert_eq!(router.depth(), 2);
    assert!(router
        .current()
        .unwrap()
        .href()
        .contains("goingTo=Recife"));

    assert!(router.back());
    assert!(router
        .current()
        .unwrap()
        .href()
        .contains("goingTo=Salvador"));

    assert!(router.back());
    assert!(router.current().is_none());
    assert!(!router.back());
}

#[test]
fn destination_view_reconstructs_the_submitted_filters() {
    use stayscout::core::filter::FilterValues;

    let draft = FilterDraft {
        going_to: "Salvador".into(),
        travelers: "2".into(),
        price: PriceRange { min: 100, max: 500 },
        stars: 4,
        ..Default::default()
    };

    let mut router = Router::new();
    submit_search(&draft, &mut router);

    let request = router.current().expect("navigated");
    let values = FilterValues::from_query(&request.query);
    assert_eq!(values.going_to.as_deref(), Some("Salvador"));
    assert_eq!(values.travelers.as_deref(), Some("2"));
    assert_eq!(values.price, Some(["100".into(), "500".into()]));
    assert_eq!(values.stars.as_deref(), Some("4"));
}

#[test]
fn nav_request_from_hand_built_query() {
    let mut query = QueryMap::new();
    query.append("goingTo", "Rio");

    let request = NavRequest::search(query);
    assert_eq!(request.href(), "/searchHotel?goingTo=Rio");
}
