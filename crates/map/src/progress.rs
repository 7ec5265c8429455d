//! Progress observers for the pixel sweep.
//!
//! Observers are purely informational: the generator never reads anything
//! back from them, so swapping one for [`NoProgress`] cannot change a map.

/// Receives `(completed, total)` once per finished pixel.
///
/// Called concurrently from worker threads. Each `completed` value is
/// delivered exactly once, but calls may arrive out of order.
pub trait ProgressObserver: Sync {
    fn on_progress(&self, completed: usize, total: usize);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _completed: usize, _total: usize) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Sync,
{
    fn on_progress(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}
