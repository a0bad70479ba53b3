pub mod stderr_progress;

pub use stderr_progress::StderrProgressReporter;
