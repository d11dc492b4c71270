/*
 * Error type for every fallible operation of the crate. OS failures keep the
 * name of the failing call and the thread's last-error code.
 */
use crate::types::Hwnd;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("{function} failed (error {code:#010x})")]
    OsCallFailed { function: &'static str, code: u32 },
    #[error("window {:#x} is already attached", .0.as_raw())]
    AlreadyAttached(Hwnd),
    #[error("invalid handle: {0}")]
    InvalidHandle(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for PlatformError {
    fn from(error: windows::core::Error) -> Self {
        use windows::Win32::Foundation::WIN32_ERROR;

        PlatformError::OsCallFailed {
            function: "Win32 API",
            code: WIN32_ERROR::from_error(&error).map_or(error.code().0 as u32, |e| e.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_failure_names_call_and_code() {
        let error = PlatformError::OsCallFailed {
            function: "RemoveWindowSubclass",
            code: 5,
        };
        assert_eq!(
            error.to_string(),
            "RemoveWindowSubclass failed (error 0x00000005)"
        );
    }

    #[test]
    fn already_attached_shows_handle() {
        let error = PlatformError::AlreadyAttached(Hwnd::from_raw(0x1f));
        assert_eq!(error.to_string(), "window 0x1f is already attached");
    }
}
