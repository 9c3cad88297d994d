use proptest::prelude::*;
use shared_types::{count_by_status, Booking, BookingId, BookingStatus, StatusFilter, TransitionPolicy};
use store::BookingStore;

use crate::common;

fn status() -> impl Strategy<Value = BookingStatus> {
    prop::sample::select(BookingStatus::ALL.to_vec())
}

/// Collections with unique ids 1..=n and arbitrary statuses.
fn bookings() -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec(status(), 0..12).prop_map(|statuses| {
        statuses
            .into_iter()
            .enumerate()
            .map(|(i, s)| common::booking(i as u64 + 1, s))
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_all_is_identity(seed in bookings()) {
        let store = BookingStore::new(seed.clone(), TransitionPolicy::Lenient);
        prop_assert_eq!(store.filter_by_status(StatusFilter::All), seed);
    }

    #[test]
    fn filtered_length_equals_count(seed in bookings(), s in status()) {
        let store = BookingStore::new(seed.clone(), TransitionPolicy::Lenient);
        let filtered = store.filter_by_status(StatusFilter::Only(s));
        prop_assert_eq!(filtered.len(), count_by_status(&seed, s));
        prop_assert!(filtered.iter().all(|b| b.status == s));
    }

    #[test]
    fn counts_partition_the_collection(seed in bookings()) {
        let store = BookingStore::new(seed, TransitionPolicy::Lenient);
        let counts = store.counts();
        let sum: usize = BookingStatus::ALL.iter().map(|s| counts.get(*s)).sum();
        prop_assert_eq!(sum, counts.total);
        prop_assert_eq!(counts.total, store.len());
    }

    #[test]
    fn update_changes_only_the_target(seed in bookings(), pick in any::<prop::sample::Index>(), to in status()) {
        prop_assume!(!seed.is_empty());
        let target = seed[pick.index(seed.len())].id;
        let mut store = BookingStore::new(seed.clone(), TransitionPolicy::Lenient);

        store.update_status(target, to).unwrap();

        prop_assert_eq!(store.len(), seed.len());
        for (before, after) in seed.iter().zip(store.bookings()) {
            prop_assert_eq!(before.id, after.id);
            if before.id == target {
                prop_assert_eq!(after, &before.with_status(to));
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn update_is_idempotent(seed in bookings(), pick in any::<prop::sample::Index>(), to in status()) {
        prop_assume!(!seed.is_empty());
        let target = seed[pick.index(seed.len())].id;
        let mut store = BookingStore::new(seed, TransitionPolicy::Lenient);

        store.update_status(target, to).unwrap();
        let once = store.bookings().to_vec();
        store.update_status(target, to).unwrap();

        prop_assert_eq!(store.bookings(), &once[..]);
    }

    #[test]
    fn unknown_id_never_mutates(seed in bookings(), to in status()) {
        let missing = BookingId(seed.len() as u64 + 1);
        let mut store = BookingStore::new(seed.clone(), TransitionPolicy::Strict);

        prop_assert!(store.update_status(missing, to).is_err());
        prop_assert_eq!(store.bookings(), &seed[..]);
        prop_assert_eq!(store.revision(), 0);
    }

    #[test]
    fn strict_policy_matches_lifecycle_graph(from in status(), to in status()) {
        let mut store = BookingStore::new(vec![common::booking(1, from)], TransitionPolicy::Strict);
        let result = store.update_status(BookingId(1), to);
        prop_assert_eq!(result.is_ok(), from == to || from.can_transition_to(to));
    }
}
