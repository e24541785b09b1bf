//! C FFI layer for host integration.
//!
//! This module exports C ABI functions for use with a host scripting
//! environment's FFI facility. All functions are marked with `#[no_mangle]`
//! and use `extern "C"`.
//!
//! The actual logic is in the `math` module. These functions are thin
//! wrappers that handle the C calling convention and the C-string handoff
//! for the version accessor. The exported names are the external contract:
//! `add`, `subtract`, and `__version__`.

pub mod arith;
pub mod version;

pub use arith::{add, subtract};
pub use version::__version__;
