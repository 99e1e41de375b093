// tests/catalog_filter_tests.rs - Filter supersession and wire keys
//
// The catalog invariant: the displayed list always reflects the most
// recently requested filter. `RequestSequence` is the mechanism; these
// tests drive it the way the catalog effect does, with responses
// arriving in adversarial orders.

use rk_storefront::web_app::model::Category;
use rk_storefront::web_app::requests::RequestSequence;

#[test]
fn test_rapid_filter_changes_commit_only_the_last() {
    let sequence = RequestSequence::new();

    // User clicks through dhoop -> perfume -> all in quick succession
    let dhoop = sequence.issue();
    let perfume = sequence.issue();
    let all = sequence.issue();

    // Responses come back slowest-first
    let mut displayed: Option<&str> = None;
    for (ticket, label) in [(dhoop, "dhoop"), (all, "all"), (perfume, "perfume")] {
        if sequence.is_latest(ticket) {
            displayed = Some(label);
        }
    }

    assert_eq!(displayed, Some("all"));
}

#[test]
fn test_stale_response_never_overwrites_newer_state() {
    let sequence = RequestSequence::new();

    let stale = sequence.issue();
    let current = sequence.issue();

    // The newer response lands first...
    assert!(sequence.is_latest(current));
    // ...and the stale one is dropped when it finally arrives
    assert!(!sequence.is_latest(stale));
}

#[test]
fn test_refresh_supersedes_in_flight_listing() {
    // An admin creation bumps the refresh trigger while a listing for
    // the same filter is still in flight; only the re-request may land.
    let sequence = RequestSequence::new();
    let in_flight = sequence.issue();
    let refetch = sequence.issue();

    assert!(!sequence.is_latest(in_flight));
    assert!(sequence.is_latest(refetch));
}

#[test]
fn test_category_wire_keys_match_backend_filter() {
    // The backend filters on these exact keys
    let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
    assert_eq!(keys, vec!["dhoop", "agarbatti", "perfume", "batti"]);

    // And each key parses back to its category
    for category in Category::ALL {
        assert_eq!(Category::from_key(category.key()), Some(category));
    }
}
