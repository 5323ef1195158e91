//!
//! Scoped Callback Registrations
//!

use std::fmt;

use tracing::trace;

/// A callback registration that is cancelled when the store is dropped.
///
/// Keep the store alive for as long as the callback should keep firing.
pub struct CallbackStore {
    /// The uid of the registration
    uid: i32,
    /// Cancels the registration with the given uid
    cancel: Option<Box<dyn FnOnce(i32) + Send>>,
}

impl CallbackStore {
    /// Create a new store for the registration `uid` that runs `cancel`
    /// on drop
    pub fn new(uid: i32, cancel: impl FnOnce(i32) + Send + 'static) -> Self {
        Self {
            uid,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// The uid of the registration held by this store
    pub fn uid(&self) -> i32 {
        self.uid
    }

    /// Cancel the registration now instead of when the store is dropped
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            trace!(uid = self.uid, "cancelling callback store");
            cancel(self.uid);
        }
    }
}

impl fmt::Debug for CallbackStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackStore")
            .field("uid", &self.uid)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for CallbackStore {
    fn drop(&mut self) {
        self.run_cancel();
    }
}
