//! Seed the dashboard state and print every page's view model as JSON.
//!
//! Usage: `dashboard-report [accept|reject|start|complete <booking-id>]...`

use shared_types::{AppError, BookingId};
use store::views::{
    BookingFormOptions, BookingManagementView, BookingQuery, DashboardView, PaymentsView,
    ScheduleView, SubscriptionView,
};
use store::AppState;

fn apply_action(state: &mut AppState, action: &str, id: &str) -> Result<(), AppError> {
    let id: u64 = id
        .parse()
        .map_err(|_| AppError::bad_request(format!("Invalid booking id: {}", id)))?;
    let id = BookingId(id);
    let bookings = &mut state.bookings;
    match action {
        "accept" => bookings.accept(id),
        "reject" => bookings.reject(id),
        "start" => bookings.start_consultation(id),
        "complete" => bookings.complete_consultation(id),
        other => return Err(AppError::bad_request(format!("Unknown action: {}", other))),
    }?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    store::telemetry::init_tracing();
    let config = store::config::load_config().clone();
    let mut state = AppState::seeded(config, chrono::Utc::now());

    let args: Vec<String> = std::env::args().skip(1).collect();
    for pair in args.chunks(2) {
        match pair {
            [action, id] => {
                if let Err(e) = apply_action(&mut state, action, id) {
                    tracing::warn!(error = %e, "Skipping action");
                }
            }
            _ => return Err(AppError::bad_request("Missing booking id after action").into()),
        }
    }

    let now = state.now();
    let report = serde_json::json!({
        "dashboard": DashboardView::build(&state, &now),
        "bookings": BookingManagementView::build(&state.bookings, &BookingQuery::default(), &now),
        "schedule": ScheduleView::build(&state.bookings, &now),
        "payments": PaymentsView::build(&state.payments, &now),
        "subscription": SubscriptionView::build(&state.subscription),
        "booking_form": BookingFormOptions::build(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
