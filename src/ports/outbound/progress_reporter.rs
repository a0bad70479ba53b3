/// ProgressReporter port for reporting progress during long-running
/// orchestrations. Abstracts the output channel (e.g. stderr) so use cases
/// stay presentation-free.
pub trait ProgressReporter {
    /// Reports a plain progress message.
    fn report(&self, message: &str);

    /// Reports progress as current/total, with an optional message.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message.
    fn report_error(&self, message: &str);

    /// Reports completion of an operation.
    fn report_completion(&self, message: &str);
}
