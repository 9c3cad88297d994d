use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared_types::{
    count_by_status, AppError, Booking, BookingCounts, BookingId, BookingStatus, NewBooking,
    StatusFilter, TransitionPolicy,
};
use tokio::sync::watch;
use validator::Validate;

/// Immutable view of the booking collection at one revision.
///
/// Every mutation swaps in a new allocation, so two snapshots are the same
/// revision exactly when `Arc::ptr_eq` holds.
pub type BookingSnapshot = Arc<[Booking]>;

/// Owner of the booking collection and its lifecycle operations.
///
/// Mutations never edit in place: the collection is rebuilt and the new
/// snapshot is published to subscribers.
pub struct BookingStore {
    bookings: BookingSnapshot,
    policy: TransitionPolicy,
    revision: u64,
    selected: Option<BookingId>,
    filter: StatusFilter,
    tx: watch::Sender<BookingSnapshot>,
}

impl BookingStore {
    /// Seed the store. Ids in `seed` are expected to be unique.
    pub fn new(seed: Vec<Booking>, policy: TransitionPolicy) -> Self {
        let bookings: BookingSnapshot = seed.into();
        let (tx, _rx) = watch::channel(Arc::clone(&bookings));
        Self {
            bookings,
            policy,
            revision: 0,
            selected: None,
            filter: StatusFilter::All,
            tx,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Shared handle to the current collection.
    pub fn snapshot(&self) -> BookingSnapshot {
        Arc::clone(&self.bookings)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Number of times the collection has been replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receive every new snapshot as it is published.
    pub fn subscribe(&self) -> watch::Receiver<BookingSnapshot> {
        self.tx.subscribe()
    }

    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    // -- Queries ------------------------------------------------------------

    /// Bookings matching `filter`, in stored order.
    pub fn filter_by_status(&self, filter: StatusFilter) -> Vec<Booking> {
        tracing::debug!(filter = filter.as_str(), "Filtering bookings");
        self.bookings
            .iter()
            .filter(|b| filter.matches(b.status))
            .cloned()
            .collect()
    }

    pub fn count(&self, status: BookingStatus) -> usize {
        count_by_status(&self.bookings, status)
    }

    pub fn counts(&self) -> BookingCounts {
        BookingCounts::from_bookings(&self.bookings)
    }

    // -- Lifecycle ----------------------------------------------------------

    /// Set a booking's status, keeping every other field.
    ///
    /// Under `TransitionPolicy::Lenient` any target is accepted; under
    /// `Strict` only edges of the lifecycle graph are. Setting the status a
    /// booking already holds succeeds without publishing a new snapshot.
    pub fn update_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let current = match self.get(id) {
            Some(b) => b,
            None => {
                tracing::warn!(booking_id = %id, to = %status, "Status update for unknown booking");
                return Err(AppError::not_found(format!("Booking {} not found", id)));
            }
        };

        let from = current.status;
        if from == status {
            return Ok(current.clone());
        }

        if !self.policy.permits(from, status) {
            tracing::warn!(booking_id = %id, %from, to = %status, "Refused booking transition");
            return Err(AppError::invalid_transition(format!(
                "Cannot move booking {} from {} to {}",
                id, from, status
            )));
        }

        let updated = current.with_status(status);
        let next: BookingSnapshot = self
            .bookings
            .iter()
            .map(|b| if b.id == id { updated.clone() } else { b.clone() })
            .collect();
        self.publish(next);

        tracing::info!(booking_id = %id, %from, to = %status, "Booking status updated");
        Ok(updated)
    }

    pub fn accept(&mut self, id: BookingId) -> Result<Booking, AppError> {
        self.update_status(id, BookingStatus::Accepted)
    }

    pub fn reject(&mut self, id: BookingId) -> Result<Booking, AppError> {
        self.update_status(id, BookingStatus::Rejected)
    }

    pub fn start_consultation(&mut self, id: BookingId) -> Result<Booking, AppError> {
        self.update_status(id, BookingStatus::Ongoing)
    }

    pub fn complete_consultation(&mut self, id: BookingId) -> Result<Booking, AppError> {
        self.update_status(id, BookingStatus::Completed)
    }

    /// Append a new pending booking with the next free id.
    pub fn create(&mut self, request: NewBooking, now: DateTime<Utc>) -> Result<Booking, AppError> {
        request.validate()?;

        let id = BookingId(self.bookings.iter().map(|b| b.id.0).max().unwrap_or(0) + 1);
        let booking = Booking {
            id,
            client_name: request.client_name,
            case_type: request.case_type,
            location: request.location,
            language: request.language,
            urgency: request.urgency,
            description: request.description,
            status: BookingStatus::Pending,
            created_at: now,
        };

        let next: BookingSnapshot = self
            .bookings
            .iter()
            .cloned()
            .chain(std::iter::once(booking.clone()))
            .collect();
        self.publish(next);

        tracing::info!(booking_id = %id, urgency = %booking.urgency, "Booking created");
        Ok(booking)
    }

    fn publish(&mut self, next: BookingSnapshot) {
        self.bookings = next;
        self.revision += 1;
        self.tx.send_replace(Arc::clone(&self.bookings));
    }

    // -- Selection state ----------------------------------------------------

    pub fn select(&mut self, id: BookingId) -> Result<&Booking, AppError> {
        if self.get(id).is_none() {
            return Err(AppError::not_found(format!("Booking {} not found", id)));
        }
        self.selected = Some(id);
        self.get(id)
            .ok_or_else(|| AppError::internal("selected booking vanished"))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected booking as of the current snapshot.
    pub fn selected(&self) -> Option<&Booking> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Bookings matching the active filter.
    pub fn filtered(&self) -> Vec<Booking> {
        self.filter_by_status(self.filter)
    }
}
