//! Pure arithmetic core.
//!
//! The FFI layer in `ffi/` calls these functions.

/// Add two numbers.
///
/// Overflow wraps around, matching native fixed-width two's-complement
/// signed addition.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Subtract two numbers.
///
/// Overflow wraps around, same as `add`.
#[inline]
pub fn subtract(i: i32, j: i32) -> i32 {
    i.wrapping_sub(j)
}
