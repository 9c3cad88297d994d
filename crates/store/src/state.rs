use chrono::{DateTime, FixedOffset, Utc};
use shared_types::{AppConfig, PlanTier};

use crate::booking::BookingStore;
use crate::case_files::CaseFileCabinet;
use crate::chat::ChatThread;
use crate::payments::PaymentLedger;
use crate::seed::SeedData;
use crate::session::Session;
use crate::subscription::Subscription;

/// Everything the dashboard pages read and mutate.
///
/// Constructed once and handed to each page by reference; there is no global
/// instance. All access happens on the UI event thread.
pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub bookings: BookingStore,
    pub payments: PaymentLedger,
    pub case_files: CaseFileCabinet,
    pub chat: ChatThread,
    pub subscription: Subscription,
}

impl AppState {
    pub fn new(config: AppConfig, seed: SeedData) -> Self {
        let policy = config.bookings.transition_policy;
        let upload_delay = config.simulation.upload_delay();
        let reply_delay = config.simulation.chat_reply_delay();

        Self {
            session: Session::signed_in(seed.profile),
            bookings: BookingStore::new(seed.bookings, policy),
            payments: PaymentLedger::new(seed.payments),
            case_files: CaseFileCabinet::new(seed.case_files, upload_delay),
            chat: ChatThread::new(seed.messages, reply_delay),
            subscription: Subscription::new(PlanTier::Basic),
            config,
        }
    }

    /// State populated with the demo records, timestamped from `now`.
    pub fn seeded(config: AppConfig, now: DateTime<Utc>) -> Self {
        let state = Self::new(config, SeedData::demo(now));
        tracing::info!(
            bookings = state.bookings.len(),
            payments = state.payments.all().len(),
            policy = ?state.bookings.policy(),
            "Application state seeded"
        );
        state
    }

    /// Current time in the configured schedule timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.config.schedule.timezone.now()
    }
}
