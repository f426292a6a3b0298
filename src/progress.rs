// src/progress.rs
/// Lightweight progress reporting used by the collector.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of teams to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One team finished (its requests may still have partly failed).
    fn item_done(&mut self, _team: &str) {}

    /// A single request for `team` failed and was skipped.
    fn item_failed(&mut self, _team: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
