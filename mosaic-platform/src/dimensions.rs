//! Device dimension-change notification.
//!
//! ## Usage
//!
//! Subscribe on mount, keep the returned guard alive for the component's
//! lifetime, and let `Drop` release the registration — the release runs
//! unconditionally, however the component goes away.

use mosaic_foundation::Callback;

/// A source of device dimension/orientation change notifications.
pub trait DimensionsNotifier {
    /// Registers a listener; it is invoked on every dimension change until
    /// the returned subscription is dropped.
    fn subscribe(&self, listener: Callback) -> DimensionsSubscription;
}

/// RAII guard for a dimension-change registration.
///
/// Dropping the guard unregisters the listener.
pub struct DimensionsSubscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl DimensionsSubscription {
    /// Creates a subscription that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Creates a subscription with no release action.
    ///
    /// Useful for hosts that have nothing to unregister.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Releases the registration early.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for DimensionsSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for DimensionsSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DimensionsSubscription")
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// A notifier that never fires.
///
/// Hosts without a rotation concept (fixed-size embedding, tests that drive
/// dimension changes by hand) can use this instead of wiring a real source.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDimensions;

impl DimensionsNotifier for StaticDimensions {
    fn subscribe(&self, _listener: Callback) -> DimensionsSubscription {
        DimensionsSubscription::noop()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use super::*;

    #[test]
    fn drop_releases_registration() {
        let released = Arc::new(AtomicBool::new(false));
        let subscription = DimensionsSubscription::new({
            let released = released.clone();
            move || released.store(true, Ordering::SeqCst)
        });
        assert!(!released.load(Ordering::SeqCst));
        drop(subscription);
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn explicit_release_runs_once() {
        let released = Arc::new(AtomicBool::new(false));
        let subscription = DimensionsSubscription::new({
            let released = released.clone();
            move || {
                assert!(!released.swap(true, Ordering::SeqCst));
            }
        });
        subscription.release();
        assert!(released.load(Ordering::SeqCst));
    }
}
