use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use locshare_core::{ConversionError, ProjectionError};

/// FFI error codes returned by location-share core functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocShareErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Conversion between the pixel unit and a geographic unit was
    /// requested; the two length spaces are not commensurable.
    IncommensurableUnits = 2,

    /// The requested great-circle offset is degenerate (destination at a
    /// pole of the projection formula); no end point exists.
    DegenerateOffset = 3,
}

/// Internal error value carrying the code plus a diagnostic message for the
/// thread-local last-error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocShareError {
    code: LocShareErrorCode,
    msg: String,
}

impl LocShareError {
    /// Error for a null pointer passed where non-null is required.
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: LocShareErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Returns the error code to be returned across the FFI boundary.
    pub fn code(&self) -> LocShareErrorCode {
        self.code
    }

    /// Returns the human-readable error message.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<ConversionError> for LocShareError {
    fn from(err: ConversionError) -> Self {
        Self {
            code: LocShareErrorCode::IncommensurableUnits,
            msg: err.to_string(),
        }
    }
}

impl From<ProjectionError> for LocShareError {
    fn from(err: ProjectionError) -> Self {
        let code = match err {
            ProjectionError::Conversion(_) => LocShareErrorCode::IncommensurableUnits,
            ProjectionError::DegenerateOffset { .. } => LocShareErrorCode::DegenerateOffset,
        };
        Self {
            code,
            msg: err.to_string(),
        }
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to keep the pointer returned to the caller valid
    /// until the next FFI call on this thread.
    static LAST_ERROR: RefCell<(Option<CString>, LocShareErrorCode)> =
        const { RefCell::new((None, LocShareErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, LocShareErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, LocShareErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred on this thread.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is
/// thread-safe; each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread
/// that sets or clears the error, or until the thread terminates.
/// **DO NOT FREE THIS POINTER** - it is managed internally.
#[no_mangle]
pub extern "C" fn loc_share_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `LocShareErrorCode::Ok` (0) if no error has occurred on this
/// thread, otherwise the code from the last failed operation.
#[no_mangle]
pub extern "C" fn loc_share_last_error_code() -> LocShareErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
