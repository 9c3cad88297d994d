use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_types::{
    AppConfig, Booking, BookingId, BookingStatus, Payment, PaymentStatus, ScheduleTimezone,
    TransitionPolicy, Urgency,
};
use store::seed::SeedData;
use store::{AppState, BookingStore};

/// Fixed reference instant so time-relative assertions stay deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 10, 0, 0).unwrap()
}

pub fn booking(id: u64, status: BookingStatus) -> Booking {
    booking_at(id, status, fixed_now() - Duration::hours(id as i64))
}

pub fn booking_at(id: u64, status: BookingStatus, created_at: DateTime<Utc>) -> Booking {
    Booking {
        id: BookingId(id),
        client_name: format!("Client {id}"),
        case_type: "Family Law".into(),
        location: "Mumbai, Maharashtra".into(),
        language: "Hindi".into(),
        urgency: Urgency::Moderate,
        description: format!("Matter number {id}"),
        status,
        created_at,
    }
}

/// The three-booking collection used by the lifecycle scenarios:
/// 1 pending, 2 accepted, 3 ongoing.
pub fn three_bookings() -> Vec<Booking> {
    vec![
        booking(1, BookingStatus::Pending),
        booking(2, BookingStatus::Accepted),
        booking(3, BookingStatus::Ongoing),
    ]
}

pub fn lenient_store() -> BookingStore {
    BookingStore::new(three_bookings(), TransitionPolicy::Lenient)
}

pub fn strict_store() -> BookingStore {
    BookingStore::new(three_bookings(), TransitionPolicy::Strict)
}

pub fn ids(bookings: &[Booking]) -> Vec<u64> {
    bookings.iter().map(|b| b.id.0).collect()
}

pub fn payment(id: &str, rupees: u64, status: PaymentStatus, date: DateTime<Utc>) -> Payment {
    Payment {
        id: id.into(),
        client_name: format!("Client {id}"),
        amount_paise: rupees * 100,
        date,
        status,
        kind: "Consultation".into(),
        invoice_url: None,
    }
}

/// Config with UTC scheduling so bucket assertions do not depend on the host.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.schedule.timezone = ScheduleTimezone::Utc;
    config
}

/// Demo state seeded relative to `fixed_now()`.
pub fn demo_state() -> AppState {
    AppState::new(test_config(), SeedData::demo(fixed_now()))
}
