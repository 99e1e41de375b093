// web_app/requests.rs - Latest-request tracking
//
// Reactive inputs (bearer token, category filter) can change while a
// fetch for the previous value is still in flight. Each fetch takes a
// ticket at issuance; only the holder of the latest ticket may commit
// its result, so a superseded response is dropped instead of
// overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic sequence of requests for one reactive input
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding all earlier ones
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `ticket` still corresponds to the most recent request
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate every outstanding ticket without issuing a new one
    pub fn supersede_all(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}
