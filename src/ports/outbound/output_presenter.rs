use crate::shared::Result;

/// OutputPresenter port for presenting the rendered report
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted report is presented.
pub trait OutputPresenter {
    /// Presents the formatted report content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
