use chrono::Duration;
use pretty_assertions::assert_eq;
use shared_types::{BookingId, BookingStatus, TransitionPolicy};
use store::views::ScheduleView;
use store::BookingStore;

use crate::common;

fn bucket_ids(rows: &[store::views::BookingRow]) -> Vec<u64> {
    rows.iter().map(|r| r.booking.id.0).collect()
}

#[test]
fn test_schedule_shows_only_accepted_and_ongoing() {
    let state = common::demo_state();

    let view = ScheduleView::build(&state.bookings, &common::fixed_now());

    // Booking 2 was created earlier today; booking 3 yesterday.
    assert_eq!(bucket_ids(&view.today), vec![2]);
    assert!(view.tomorrow.is_empty());
    assert_eq!(bucket_ids(&view.upcoming), vec![3]);
    assert_eq!(view.total(), 2);
}

#[test]
fn test_schedule_picks_up_newly_accepted_booking() {
    let mut state = common::demo_state();
    state.bookings.accept(BookingId(1)).unwrap();

    let view = ScheduleView::build(&state.bookings, &common::fixed_now());

    assert_eq!(bucket_ids(&view.today), vec![1, 2]);
}

#[test]
fn test_schedule_buckets_tomorrow() {
    let now = common::fixed_now();
    let store = BookingStore::new(
        vec![
            common::booking_at(1, BookingStatus::Accepted, now + Duration::days(1)),
            common::booking_at(2, BookingStatus::Completed, now),
            common::booking_at(3, BookingStatus::Ongoing, now + Duration::days(3)),
        ],
        TransitionPolicy::Lenient,
    );

    let view = ScheduleView::build(&store, &now);

    assert!(view.today.is_empty());
    assert_eq!(bucket_ids(&view.tomorrow), vec![1]);
    assert_eq!(bucket_ids(&view.upcoming), vec![3]);
}
