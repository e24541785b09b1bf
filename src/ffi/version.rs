//! Version accessor export.

use std::ffi::{c_char, CString};
use std::sync::OnceLock;

use crate::version::VERSION;

static VERSION_C: OnceLock<CString> = OnceLock::new();

/// Returns the module version as a NUL-terminated C string.
///
/// The pointer refers to a process-wide static buffer: it stays valid for
/// the life of the process and is identical across calls. A build-supplied
/// version containing an interior NUL cannot form a C string; the accessor
/// falls back to `"dev"` in that case.
#[no_mangle]
pub extern "C" fn __version__() -> *const c_char {
    VERSION_C
        .get_or_init(|| CString::new(VERSION).unwrap_or_else(|_| c"dev".to_owned()))
        .as_ptr()
}
