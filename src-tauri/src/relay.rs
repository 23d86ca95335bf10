//! Single-slot hand-off of a search context to the screen that consumes it.
//!
//! The frontend navigates first and asks for its context when the new screen
//! mounts, so the context has to live somewhere in between. Writing replaces
//! whatever is unread; reading clears the slot.

use std::sync::{Mutex, MutexGuard};

use crate::navigation::SearchContext;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

#[derive(Debug, Default)]
pub struct ContextRelay {
    slot: Mutex<Option<SearchContext>>,
}

impl ContextRelay {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<SearchContext>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Store a context, returning the unread one it displaced.
    pub fn put(&self, context: SearchContext) -> Option<SearchContext> {
        let displaced = self.lock().replace(context);
        if let Some(previous) = &displaced {
            log_debug!("discarding unread search context for {:?}", previous.query);
        }
        displaced
    }

    /// Read and clear. A second call returns `None`.
    pub fn take(&self) -> Option<SearchContext> {
        self.lock().take()
    }

    pub fn peek(&self) -> Option<SearchContext> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().take();
    }
}
