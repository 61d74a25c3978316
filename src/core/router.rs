//! In-app navigation for StayScout.
//!
//! Submission code depends on the [`Navigator`] capability (a sink for
//! navigation requests) rather than an ambient router, so it stays testable
//! against a recording fake. [`Router`] is the real implementation: a plain
//! history stack the results view reads its current location from.

use crate::core::filter::FilterDraft;
use crate::core::query::QueryMap;
use crate::util::constants;

/// A navigable route path.
///
/// Only the search-results route exists today; the enum keeps path strings
/// out of call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    SearchHotel,
}

impl RoutePath {
    pub fn as_str(self) -> &'static str {
        match self {
            RoutePath::SearchHotel => constants::SEARCH_PATH,
        }
    }
}

/// A navigation request: a path plus the query-parameter mapping the
/// destination view reads its state from.
#[derive(Debug, Clone, PartialEq)]
pub struct NavRequest {
    pub path: RoutePath,
    pub query: QueryMap,
}

impl NavRequest {
    /// A request targeting the search-results route.
    pub fn search(query: QueryMap) -> Self {
        Self {
            path: RoutePath::SearchHotel,
            query,
        }
    }

    /// The full location string, e.g. `/searchHotel?goingTo=Rio`.
    /// A request with no parameters renders as the bare path.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.as_str().to_owned()
        } else {
            format!("{}?{}", self.path.as_str(), self.query.encode())
        }
    }
}

/// A sink for navigation requests. Navigation cannot fail.
pub trait Navigator {
    fn navigate(&mut self, request: NavRequest);
}

/// The in-app router: a history stack with the home view as its implicit
/// root (an empty history means "home").
#[derive(Debug, Default)]
pub struct Router {
    history: Vec<NavRequest>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current location, or `None` when on the home view.
    pub fn current(&self) -> Option<&NavRequest> {
        self.history.last()
    }

    /// `true` when there is a location to go back from.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Pop the current location. Returns `false` when already home.
    pub fn back(&mut self) -> bool {
        self.history.pop().is_some()
    }

    /// Number of locations on the stack.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, request: NavRequest) {
        tracing::debug!("navigate: {}", request.href());
        self.history.push(request);
    }
}

/// Encode `draft` and dispatch a navigation to the search-results route.
///
/// This is the whole of form submission: it always completes and always
/// navigates, even with every field at its default.
pub fn submit_search(draft: &FilterDraft, navigator: &mut dyn Navigator) {
    let request = NavRequest::search(draft.to_query());
    tracing::info!("applying filters: {}", request.href());
    navigator.navigate(request);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::PriceRange;

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
    fn test_submit_navigates_exactly_once() {
        let draft = FilterDraft {
            going_to: "Rio".into(),
            ..Default::default()
        };
        let mut nav = RecordingNavigator::default();
        submit_search(&draft, &mut nav);

        assert_eq!(nav.requests.len(), 1);
        assert_eq!(nav.requests[0].href(), "/searchHotel?goingTo=Rio");
    }

    #[test]
    fn test_submit_with_defaults_still_navigates() {
        let mut nav = RecordingNavigator::default();
        submit_search(&FilterDraft::default(), &mut nav);

        assert_eq!(nav.requests.len(), 1);
        assert_eq!(nav.requests[0].href(), "/searchHotel");
    }

    #[test]
    fn test_href_orders_parameters() {
        let draft = FilterDraft {
            going_to: "Salvador".into(),
            price: PriceRange { min: 100, max: 500 },
            stars: 4,
            ..Default::default()
        };
        let request = NavRequest::search(draft.to_query());
        assert_eq!(
            request.href(),
            "/searchHotel?goingTo=Salvador&price=100&price=500&stars=4"
        );
    }

    #[test]
    fn test_router_history_and_back() {
        let mut router = Router::new();
        assert!(router.current().is_none());
        assert!(!router.can_go_back());

        router.navigate(NavRequest::search(QueryMap::new()));
        assert_eq!(router.depth(), 1);
        assert!(router.current().is_some());

        assert!(router.back());
        assert!(router.current().is_none());
        assert!(!router.back());
    }
}
