use pretty_assertions::assert_eq;
use shared_types::{BookingId, BookingStatus, StatusFilter};

use crate::common;

#[test]
fn test_filter_all_returns_every_booking_in_order() {
    let store = common::lenient_store();

    let all = store.filter_by_status(StatusFilter::All);

    assert_eq!(all, common::three_bookings());
}

#[test]
fn test_filter_by_single_status() {
    let store = common::lenient_store();

    assert_eq!(common::ids(&store.filter_by_status(StatusFilter::Only(BookingStatus::Pending))), vec![1]);
    assert_eq!(common::ids(&store.filter_by_status(StatusFilter::Only(BookingStatus::Ongoing))), vec![3]);
    assert!(store.filter_by_status(StatusFilter::Only(BookingStatus::Completed)).is_empty());
}

#[test]
fn test_filter_parses_from_query_string() {
    let store = common::lenient_store();

    let all: StatusFilter = "all".parse().unwrap();
    let accepted: StatusFilter = "accepted".parse().unwrap();

    assert_eq!(store.filter_by_status(all).len(), 3);
    assert_eq!(common::ids(&store.filter_by_status(accepted)), vec![2]);
    assert!("archived".parse::<StatusFilter>().is_err());
}

#[test]
fn test_count_on_empty_store_is_zero() {
    let store = store::BookingStore::new(Vec::new(), Default::default());

    assert!(store.is_empty());
    for status in BookingStatus::ALL {
        assert_eq!(store.count(status), 0);
    }
    assert_eq!(store.counts().total, 0);
}

#[test]
fn test_counts_track_status_changes() {
    let mut store = common::lenient_store();
    assert_eq!(store.count(BookingStatus::Pending), 1);
    assert_eq!(store.count(BookingStatus::Accepted), 1);

    store.accept(BookingId(1)).unwrap();

    let counts = store.counts();
    assert_eq!(counts.pending, 0);
    assert_eq!(counts.accepted, 2);
    assert_eq!(counts.get(BookingStatus::Accepted), 2);
    assert_eq!(counts.total, 3);
}

#[test]
fn test_active_filter_applies_to_filtered() {
    let mut store = common::lenient_store();
    assert_eq!(store.filter(), StatusFilter::All);

    store.set_filter(StatusFilter::Only(BookingStatus::Accepted));
    store.accept(BookingId(1)).unwrap();

    assert_eq!(common::ids(&store.filtered()), vec![1, 2]);
}
