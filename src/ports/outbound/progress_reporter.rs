/// ProgressReporter port for reporting progress during the scenario
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while remote operations run.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Marks the start of a wait for remote work (spinner in the console
    /// adapter). Balanced by `end_wait`.
    fn begin_wait(&self, message: &str);

    /// Marks the end of the current wait.
    fn end_wait(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the scenario
    fn report_completion(&self, message: &str);
}
