/// ProgressReporter port for user-facing progress output
///
/// Messages go to a channel that does not mix with the report itself
/// (stderr for the CLI).
pub trait ProgressReporter {
    /// Reports a stage of the run
    fn report(&self, message: &str);

    /// Reports how many of `total` items are done
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a non-fatal error
    fn report_error(&self, message: &str);

    /// Reports that the run finished
    fn report_completion(&self, message: &str);
}
