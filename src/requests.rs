//! In-flight Request Registry
//!
//! Keyed bookkeeping for requests started from UI events. Each key has a
//! policy: either refuse a new request while one is running, or abort the
//! running one and let the newest win. Completions carry a ticket so stale
//! responses can be recognised and dropped.

use std::collections::HashMap;

use crate::models::ProductId;

/// Something that can cancel a request in flight
pub trait Abort {
    fn abort(&self);
}

impl Abort for web_sys::AbortController {
    fn abort(&self) {
        web_sys::AbortController::abort(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKey {
    CartCount,
    AddToCart(ProductId),
    Category,
    Newsletter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Refuse a new request while one with the same key is running
    SkipIfBusy,
    /// Abort the running request and replace it
    LatestWins,
}

impl RequestKey {
    pub fn policy(&self) -> Policy {
        match self {
            RequestKey::AddToCart(_) | RequestKey::Newsletter => Policy::SkipIfBusy,
            RequestKey::CartCount | RequestKey::Category => Policy::LatestWins,
        }
    }
}

/// Proof of which request a completion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

struct InFlight<H> {
    ticket: Ticket,
    handle: Option<H>,
}

pub struct RequestRegistry<H> {
    in_flight: HashMap<RequestKey, InFlight<H>>,
    next_ticket: u64,
}

impl<H> Default for RequestRegistry<H> {
    fn default() -> Self {
        Self {
            in_flight: HashMap::new(),
            next_ticket: 0,
        }
    }
}

impl<H: Abort> RequestRegistry<H> {
    /// Register a new request under `key`.
    /// Returns `None` when the key's policy refuses it.
    pub fn begin(&mut self, key: RequestKey, handle: Option<H>) -> Option<Ticket> {
        if let Some(running) = self.in_flight.get(&key) {
            match key.policy() {
                Policy::SkipIfBusy => return None,
                Policy::LatestWins => {
                    if let Some(handle) = &running.handle {
                        handle.abort();
                    }
                }
            }
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight.insert(key, InFlight { ticket, handle });
        Some(ticket)
    }

    /// Whether `ticket` is still the live request for `key`
    pub fn is_current(&self, key: &RequestKey, ticket: Ticket) -> bool {
        self.in_flight
            .get(key)
            .is_some_and(|running| running.ticket == ticket)
    }

    /// Mark a request finished. Returns false for a superseded ticket,
    /// whose result should be discarded.
    pub fn finish(&mut self, key: &RequestKey, ticket: Ticket) -> bool {
        if self.is_current(key, ticket) {
            self.in_flight.remove(key);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn is_busy(&self, key: &RequestKey) -> bool {
        self.in_flight.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeHandle(Rc<Cell<bool>>);

    impl FakeHandle {
        fn aborted(&self) -> bool {
            self.0.get()
        }
    }

    impl Abort for FakeHandle {
        fn abort(&self) {
            self.0.set(true);
        }
    }

    fn product(id: &str) -> RequestKey {
        RequestKey::AddToCart(ProductId::new(id))
    }

    #[test]
    fn test_skip_if_busy_refuses_duplicate() {
        let mut registry = RequestRegistry::<FakeHandle>::default();
        let first = registry.begin(product("7"), None);
        assert!(first.is_some());
        assert_eq!(registry.begin(product("7"), None), None);
        // Different product is independent
        assert!(registry.begin(product("8"), None).is_some());
    }

    #[test]
    fn test_skip_if_busy_allows_after_finish() {
        let mut registry = RequestRegistry::<FakeHandle>::default();
        let ticket = registry.begin(product("7"), None).unwrap();
        assert!(registry.finish(&product("7"), ticket));
        assert!(!registry.is_busy(&product("7")));
        assert!(registry.begin(product("7"), None).is_some());
    }

    #[test]
    fn test_latest_wins_aborts_previous() {
        let mut registry = RequestRegistry::default();
        let old_handle = FakeHandle::default();
        let new_handle = FakeHandle::default();

        let old = registry.begin(RequestKey::Category, Some(old_handle.clone())).unwrap();
        let new = registry.begin(RequestKey::Category, Some(new_handle.clone())).unwrap();

        assert!(old_handle.aborted());
        assert!(!new_handle.aborted());
        assert!(!registry.is_current(&RequestKey::Category, old));
        assert!(registry.is_current(&RequestKey::Category, new));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut registry = RequestRegistry::<FakeHandle>::default();
        let old = registry.begin(RequestKey::Category, None).unwrap();
        let new = registry.begin(RequestKey::Category, None).unwrap();

        // Old response arrives late
        assert!(!registry.finish(&RequestKey::Category, old));
        assert!(registry.is_busy(&RequestKey::Category));
        assert!(registry.finish(&RequestKey::Category, new));
        assert!(!registry.is_busy(&RequestKey::Category));
    }

    #[test]
    fn test_policies() {
        assert_eq!(product("1").policy(), Policy::SkipIfBusy);
        assert_eq!(RequestKey::Newsletter.policy(), Policy::SkipIfBusy);
        assert_eq!(RequestKey::Category.policy(), Policy::LatestWins);
        assert_eq!(RequestKey::CartCount.policy(), Policy::LatestWins);
    }
}
