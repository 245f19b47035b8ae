// ============================================================================
// GCD/LCM Kernel
// Pure integer routines backing reduction and common-denominator arithmetic
// ============================================================================

use crate::errors::{RationalError, RationalResult};

/// Greatest common divisor by the Euclidean algorithm.
///
/// Operates on magnitudes; callers pass `unsigned_abs()` of signed inputs.
///
/// # Preconditions
/// At least one argument must be non-zero. `gcd(0, 0)` has no defined value;
/// rational reduction short-circuits a zero numerator before reaching here,
/// and denominators are never zero.
#[inline]
pub const fn gcd(a: u64, b: u64) -> u64 {
    debug_assert!(a != 0 || b != 0);
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two strictly positive denominators.
///
/// Computed as `a / gcd(a, b) * b`, dividing before multiplying to keep the
/// intermediate as small as possible.
///
/// # Errors
/// Returns `ArithmeticOverflow` if the result exceeds the i64 range.
#[inline]
pub fn lcm(a: i64, b: i64) -> RationalResult<i64> {
    debug_assert!(a > 0 && b > 0);
    let g = gcd(a as u64, b as u64) as i64;
    (a / g)
        .checked_mul(b)
        .ok_or(RationalError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(100, 100), 100);
    }

    #[test]
    fn test_gcd_with_zero_operand() {
        // One zero operand is fine: gcd(0, n) == n
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn test_gcd_large_values() {
        assert_eq!(gcd(u64::MAX, 1), 1);
        assert_eq!(gcd(2_u64.pow(40), 2_u64.pow(20)), 2_u64.pow(20));
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(4, 6), Ok(12));
        assert_eq!(lcm(7, 2), Ok(14));
        assert_eq!(lcm(5, 5), Ok(5));
        assert_eq!(lcm(1, 9), Ok(9));
    }

    #[test]
    fn test_lcm_coprime() {
        assert_eq!(lcm(9, 10), Ok(90));
    }

    #[test]
    fn test_lcm_overflow() {
        let big = i64::MAX - 1; // even
        assert_eq!(lcm(big, big - 1), Err(RationalError::ArithmeticOverflow));
    }
}
