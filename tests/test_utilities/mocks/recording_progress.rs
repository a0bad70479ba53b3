use std::sync::{Arc, Mutex};

use partscout::prelude::*;

/// Mock ProgressReporter that records every call for later assertions.
/// Clones share the same recording, so a test can keep a handle after
/// moving one into a use case.
#[derive(Clone, Default)]
pub struct RecordingProgress {
    progress_updates: Arc<Mutex<Vec<(usize, usize)>>>,
    errors: Arc<Mutex<Vec<String>>>,
    completions: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_updates(&self) -> Vec<(usize, usize)> {
        self.progress_updates.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress_updates.lock().unwrap().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}
