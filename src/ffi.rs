//! C ABI entry points for native callers.
//!
//! Every call takes the bridge handle explicitly. A null handle behaves like
//! a host without a clipboard: reads return their empty default and writes
//! do nothing.
//!
//! Strings returned by [`clipbridge_get_clipboard`] are owned by the caller
//! and must be released with [`clipbridge_string_free`].

use std::ffi::{c_char, c_int, CStr, CString};
use std::sync::Arc;

use cb_core::TypeCode;
use cb_platform::DesktopHostContext;
use tracing::warn;

use crate::bridge::ClipboardBridge;

/// Move `bridge` behind a raw handle. Release it with [`clipbridge_free`].
pub fn into_handle(bridge: ClipboardBridge) -> *mut ClipboardBridge {
    Box::into_raw(Box::new(bridge))
}

/// Bridge over the OS clipboard.
#[no_mangle]
pub extern "C" fn clipbridge_new_system() -> *mut ClipboardBridge {
    into_handle(ClipboardBridge::new(Arc::new(DesktopHostContext::system())))
}

/// Bridge over a process-local clipboard.
#[no_mangle]
pub extern "C" fn clipbridge_new_in_memory() -> *mut ClipboardBridge {
    into_handle(ClipboardBridge::new(Arc::new(
        DesktopHostContext::in_memory(),
    )))
}

/// # Safety
///
/// `handle` must be null or a pointer obtained from this module that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_free(handle: *mut ClipboardBridge) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_initialize_clipboard(handle: *const ClipboardBridge) {
    if let Some(bridge) = handle.as_ref() {
        bridge.initialize();
    }
}

/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_has_clipboard_updated(handle: *const ClipboardBridge) -> bool {
    handle.as_ref().is_some_and(ClipboardBridge::has_updated)
}

/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_get_clipboard_type(handle: *const ClipboardBridge) -> c_int {
    handle
        .as_ref()
        .map_or(TypeCode::Unknown, ClipboardBridge::clip_type)
        .as_i32()
}

/// Returns a newly allocated, NUL-terminated copy of the clip text.
///
/// Text containing an interior NUL is cut at the first one.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_get_clipboard(handle: *const ClipboardBridge) -> *mut c_char {
    let text = handle
        .as_ref()
        .map(ClipboardBridge::content)
        .unwrap_or_default();
    to_c_string(text).into_raw()
}

/// Character count of the string [`clipbridge_get_clipboard`] would return.
///
/// Text is cut at an interior NUL before counting, so the length agrees with
/// the C string.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_get_clipboard_length(handle: *const ClipboardBridge) -> c_int {
    let text = handle
        .as_ref()
        .map(ClipboardBridge::content)
        .unwrap_or_default();
    c_length(&to_c_string(text))
}

/// Replace the clipboard with `text` tagged as `type_code`.
///
/// `length` is accepted for interface compatibility and ignored; the text is
/// read up to its NUL terminator. Type code 0, codes outside `0..=3`, and a
/// null `text` are no-ops.
///
/// # Safety
///
/// `handle` must be null or a live handle; `text` must be null or point to a
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_set_clipboard(
    handle: *const ClipboardBridge,
    _length: c_int,
    type_code: c_int,
    text: *const c_char,
) {
    let Some(bridge) = handle.as_ref() else {
        return;
    };
    let type_code = match TypeCode::try_from(type_code) {
        Ok(code) => code,
        Err(e) => {
            warn!(error = %e, "ignoring clipboard write");
            return;
        }
    };
    if text.is_null() {
        warn!("ignoring clipboard write with null text");
        return;
    }

    let text = CStr::from_ptr(text).to_string_lossy();
    bridge.set_content(type_code, &text);
}

/// # Safety
///
/// `text` must be null or a pointer returned by [`clipbridge_get_clipboard`]
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn clipbridge_string_free(text: *mut c_char) {
    if !text.is_null() {
        drop(CString::from_raw(text));
    }
}

fn to_c_string(text: String) -> CString {
    CString::new(text).unwrap_or_else(|e| {
        let nul = e.nul_position();
        let mut bytes = e.into_vec();
        bytes.truncate(nul);
        // No NUL remains after truncating at the first one.
        CString::new(bytes).unwrap_or_default()
    })
}

fn c_length(text: &CStr) -> c_int {
    let length = text.to_string_lossy().chars().count();
    c_int::try_from(length).unwrap_or(c_int::MAX)
}
