use crate::error::{with_last_error_mut, LocShareError, LocShareErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
pub(crate) fn set_last_error(error: &LocShareError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &LocShareError) -> LocShareErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Internal helper called on successful operations.
pub(crate) fn clear_last_error() -> LocShareErrorCode {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = LocShareErrorCode::Ok;
    });
    LocShareErrorCode::Ok
}
