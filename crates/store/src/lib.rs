pub mod config;
pub mod telemetry;

pub mod seed;
pub mod state;

// Stores owned by `AppState`
pub mod booking;
pub mod case_files;
pub mod chat;
pub mod payments;
pub mod session;
pub mod subscription;

pub mod views;

mod busy;

pub use booking::{BookingSnapshot, BookingStore};
pub use state::AppState;
