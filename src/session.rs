//! Session state — signing nonce bookkeeping and the per-target in-flight
//! guard.
//!
//! The nonce counter is owned here and mutated only through the atomic
//! reserve-and-confirm pair: a submission reserves a value up front (each
//! value is handed out at most once, so concurrent submissions for different
//! targets can never sign with the same nonce), passes it as a nonce override
//! to the signing backend, and confirms only after the submission succeeds.
//! A failed submission releases its reservation and never advances the
//! counter callers observe.

use async_lock::RwLock;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::SdkError;
use crate::shared::ProfileId;

/// Per-account signing nonce, reconciled with the authoritative backend
/// value via [`NonceTracker::sync`].
#[derive(Debug, Clone, Default)]
pub struct NonceTracker {
    state: Arc<RwLock<NonceState>>,
}

#[derive(Debug, Default)]
struct NonceState {
    /// The value callers observe; advances only on confirmed success.
    confirmed: u64,
    /// Next value to hand out. Ahead of `confirmed` while reservations are
    /// outstanding.
    next: u64,
}

impl NonceTracker {
    pub fn new(initial: u64) -> Self {
        Self {
            state: Arc::new(RwLock::new(NonceState {
                confirmed: initial,
                next: initial,
            })),
        }
    }

    /// Reserve the next nonce for one submission. Each value is handed out
    /// at most once until confirmed, released, or synced over.
    pub async fn reserve(&self) -> NonceReservation {
        let mut state = self.state.write().await;
        let value = state.next;
        state.next += 1;
        NonceReservation { value }
    }

    /// The current confirmed value.
    pub async fn current(&self) -> u64 {
        self.state.read().await.confirmed
    }

    /// Record a confirmed submission: the observed counter moves past the
    /// reserved value.
    pub async fn confirm(&self, reservation: NonceReservation) {
        let mut state = self.state.write().await;
        state.confirmed = state.confirmed.max(reservation.value + 1);
        state.next = state.next.max(state.confirmed);
    }

    /// Return a reservation after a failed submission.
    ///
    /// The value is handed out again when it was the most recent
    /// reservation. An older value stays burned until [`sync`](Self::sync)
    /// reconciles with the backend.
    pub async fn release(&self, reservation: NonceReservation) {
        let mut state = self.state.write().await;
        if reservation.value + 1 == state.next && state.next > state.confirmed {
            state.next -= 1;
        }
    }

    /// Reconcile with the authoritative value held by the signing backend.
    /// Outstanding reservations are superseded.
    pub async fn sync(&self, authoritative: u64) {
        let mut state = self.state.write().await;
        state.confirmed = authoritative;
        state.next = authoritative;
    }
}

/// A single-use claim on one nonce value, confirmed or released by the
/// submission that took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonceReservation {
    value: u64,
}

impl NonceReservation {
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Mutable session state shared by all mutation flows of one client.
#[derive(Debug, Clone, Default)]
pub(crate) struct Session {
    pub(crate) nonce: NonceTracker,
    in_flight: Arc<Mutex<HashSet<ProfileId>>>,
}

impl Session {
    pub(crate) fn with_nonce(initial: u64) -> Self {
        Self {
            nonce: NonceTracker::new(initial),
            in_flight: Arc::default(),
        }
    }

    /// Mark a submission for `profile_id` as in flight.
    ///
    /// Refuses a second submission for the same target while one is pending.
    /// The returned guard releases the slot on drop, including early returns
    /// through `?`.
    pub(crate) fn begin_submission(
        &self,
        profile_id: &ProfileId,
    ) -> Result<InFlightGuard, SdkError> {
        let mut set = self.in_flight.lock().expect("in-flight set poisoned");
        if !set.insert(profile_id.clone()) {
            return Err(SdkError::InFlight(profile_id.clone()));
        }
        Ok(InFlightGuard {
            set: self.in_flight.clone(),
            profile_id: profile_id.clone(),
        })
    }
}

/// RAII release of an in-flight submission slot.
pub(crate) struct InFlightGuard {
    set: Arc<Mutex<HashSet<ProfileId>>>,
    profile_id: ProfileId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set
            .lock()
            .expect("in-flight set poisoned")
            .remove(&self.profile_id);
    }
}
