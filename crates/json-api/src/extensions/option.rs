//! Option helper extensions for HTTP handlers.

use salvo::prelude::StatusError;

/// Map an absent value to a not found error.
pub(crate) trait OptionExt<T> {
    fn or_404(self, brief: &str) -> Result<T, StatusError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_404(self, brief: &str) -> Result<T, StatusError> {
        self.ok_or_else(|| StatusError::not_found().brief(brief))
    }
}
