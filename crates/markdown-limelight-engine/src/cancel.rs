use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation handle for an in-flight scan.
///
/// Clones share one switch, so a caller can hand the flag to a scan and
/// trip it from elsewhere. The scanner checks it once per line and inside
/// block consumers; once set, the scan returns `None` and no partial
/// ranges escape. The flag carries no document identity; deciding which
/// scan a cancellation belongs to is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
