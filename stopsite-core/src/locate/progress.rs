use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives per-transcript completion events from one orchestrator run.
/// Calls to `advance` may arrive concurrently from worker threads.
pub trait Progress: Sync {
    fn start(&self, _total: usize) {}
    fn advance(&self, _transcript_id: &str) {}
    fn finish(&self) {}
}

/// Discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Adapts a `(done, total)` callback.
pub struct ProgressFn<F> {
    callback: F,
    done: AtomicUsize,
    total: AtomicUsize,
}

impl<F> ProgressFn<F>
where
    F: Fn(usize, usize) + Sync,
{
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            done: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        }
    }
}

impl<F> Progress for ProgressFn<F>
where
    F: Fn(usize, usize) + Sync,
{
    fn start(&self, total: usize) {
        self.done.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    fn advance(&self, _transcript_id: &str) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        (self.callback)(done, self.total.load(Ordering::Relaxed));
    }
}

/// Holds a run's progress reporting open; `finish` fires on drop.
pub(crate) struct ProgressScope<'a, P: Progress + ?Sized> {
    progress: &'a P,
}

impl<'a, P: Progress + ?Sized> ProgressScope<'a, P> {
    pub(crate) fn start(progress: &'a P, total: usize) -> Self {
        progress.start(total);
        Self { progress }
    }

    pub(crate) fn advance(&self, transcript_id: &str) {
        self.progress.advance(transcript_id);
    }
}

impl<P: Progress + ?Sized> Drop for ProgressScope<'_, P> {
    fn drop(&mut self) {
        self.progress.finish();
    }
}
