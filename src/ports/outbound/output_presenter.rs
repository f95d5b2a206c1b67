use crate::shared::Result;

/// OutputPresenter port for delivering the formatted report
///
/// The destination is either stdout or a file chosen by the user.
pub trait OutputPresenter {
    /// Writes the formatted report to the destination
    ///
    /// # Errors
    /// Returns an error if writing fails, for example when the target
    /// directory is missing or the target is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
