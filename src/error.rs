//! Error logging helpers
//!
//! The page behaviors are best-effort: a failed store load or save should
//! degrade to defaults, not abort the session. `ResultExt` turns those
//! results into `Option`s while logging with caller location.

use tracing::{error, warn};

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the session should continue.
///
/// # Examples
///
/// ```ignore
/// use notes_page::error::ResultExt;
///
/// // Silently log and start fresh if preferences fail to load
/// store.load().warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
