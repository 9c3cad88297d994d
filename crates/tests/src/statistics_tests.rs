use chrono::{Duration, FixedOffset, TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{
    bucket_bookings, classify_day, monthly_total, payment_summary, total_amount, BookingStatus,
    DateBucket, PaymentStatus, PaymentSummary,
};

use crate::common;

#[test]
fn test_totals_split_by_payment_status() {
    let now = common::fixed_now();
    let payments = vec![
        common::payment("PAY001", 1500, PaymentStatus::Completed, now),
        common::payment("PAY002", 2000, PaymentStatus::Completed, now),
        common::payment("PAY003", 1500, PaymentStatus::Pending, now),
    ];

    assert_eq!(total_amount(&payments, PaymentStatus::Completed), 350_000);
    assert_eq!(total_amount(&payments, PaymentStatus::Pending), 150_000);
}

#[test]
fn test_totals_of_empty_ledger_are_zero() {
    assert_eq!(total_amount(&[], PaymentStatus::Completed), 0);
    assert_eq!(monthly_total(&[], &common::fixed_now()), 0);
    assert_eq!(payment_summary(&[], &common::fixed_now()), PaymentSummary::default());
}

#[test]
fn test_monthly_total_counts_completed_payments_of_the_same_month_and_year() {
    let now = common::fixed_now();
    let payments = vec![
        common::payment("A", 1000, PaymentStatus::Completed, now - Duration::days(3)),
        common::payment("B", 400, PaymentStatus::Pending, now - Duration::days(1)),
        common::payment("C", 700, PaymentStatus::Completed, now - Duration::days(40)),
        common::payment("D", 900, PaymentStatus::Completed, Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()),
    ];

    assert_eq!(monthly_total(&payments, &now), 100_000);
}

#[test]
fn test_payment_summary_collects_all_figures() {
    let now = common::fixed_now();
    let payments = vec![
        common::payment("A", 1500, PaymentStatus::Completed, now - Duration::days(5)),
        common::payment("B", 2000, PaymentStatus::Completed, now - Duration::days(30)),
        common::payment("C", 1500, PaymentStatus::Pending, now),
    ];

    let summary = payment_summary(&payments, &now);

    assert_eq!(
        summary,
        PaymentSummary {
            total_earnings: 350_000,
            pending_amount: 150_000,
            monthly_earnings: 150_000,
            pending_count: 1,
        }
    );
}

#[test]
fn test_classify_day_relative_to_now() {
    let now = common::fixed_now();

    assert_eq!(classify_day(&now, &now), DateBucket::Today);
    assert_eq!(classify_day(&(now + Duration::days(1)), &now), DateBucket::Tomorrow);
    assert_eq!(classify_day(&(now + Duration::days(2)), &now), DateBucket::Upcoming);
    assert_eq!(classify_day(&(now - Duration::days(1)), &now), DateBucket::Upcoming);
}

#[test]
fn test_classify_day_uses_the_timezone_of_now() {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    // 20:00 UTC on the 14th is 01:30 on the 15th in IST.
    let at = Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap();
    let now_ist = common::fixed_now().with_timezone(&ist);

    assert_eq!(classify_day(&at, &common::fixed_now()), DateBucket::Upcoming);
    assert_eq!(classify_day(&at, &now_ist), DateBucket::Today);
}

#[test]
fn test_bucket_bookings_keeps_input_order() {
    let now = common::fixed_now();
    let bookings = vec![
        common::booking_at(1, BookingStatus::Accepted, now + Duration::days(1)),
        common::booking_at(2, BookingStatus::Accepted, now),
        common::booking_at(3, BookingStatus::Ongoing, now + Duration::days(5)),
        common::booking_at(4, BookingStatus::Accepted, now - Duration::hours(1)),
    ];

    let buckets = bucket_bookings(&bookings, &now);

    assert_eq!(common::ids(&buckets.today), vec![2, 4]);
    assert_eq!(common::ids(&buckets.tomorrow), vec![1]);
    assert_eq!(common::ids(&buckets.upcoming), vec![3]);
    assert_eq!(buckets.len(), 4);
}
