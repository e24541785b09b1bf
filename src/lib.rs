//! Example Module - Native Arithmetic Library
//!
//! This library provides a C ABI exposing two arithmetic functions and a
//! version identifier to a host scripting environment.

pub mod ffi;
pub mod math;
pub mod version;

pub use ffi::{__version__, add, subtract};
