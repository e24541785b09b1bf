//! Arithmetic function exports.

use crate::math;

/// Add two numbers.
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    math::add(a, b)
}

/// Subtract two numbers.
#[no_mangle]
pub extern "C" fn subtract(i: i32, j: i32) -> i32 {
    math::subtract(i, j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10, 4), 6);
        assert_eq!(subtract(0, 7), -7);
    }
}
