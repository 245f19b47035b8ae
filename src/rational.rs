// ============================================================================
// Rational Value
// Exact fraction arithmetic with checked operations and lazy reduction
// ============================================================================

use crate::errors::{RationalError, RationalResult};
use crate::gcd::{gcd, lcm};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact rational number: an integer numerator over a non-zero integer
/// denominator.
///
/// The stored denominator is always strictly positive; construction folds a
/// negative denominator's sign into the numerator. Stored pairs are NOT kept
/// in lowest terms: arithmetic results carry the literal computed
/// numerator/denominator, and reduction happens on demand (display,
/// mixed-number decomposition, equality, hashing, unit checks). Call
/// [`Rational::reduced`] to canonicalize explicitly.
///
/// All arithmetic is checked: any intermediate outside the i64 range is
/// reported as [`RationalError::ArithmeticOverflow`] rather than wrapping,
/// which would silently break the exactness guarantee.
///
/// # Example
/// ```
/// use exact_rational::Rational;
///
/// let a = Rational::new(5, 4)?;
/// let b = Rational::new(1, 2)?;
/// let sum = a.checked_add(b)?;          // 7/4, exact
/// assert_eq!(sum.to_string(), "7/4");
/// assert_eq!(Rational::new(2, 4)?, Rational::new(1, 2)?);
/// # Ok::<(), exact_rational::RationalError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// One (1/1)
    pub const ONE: Self = Self { num: 1, den: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from a numerator and a denominator.
    ///
    /// A negative denominator is normalized away by negating both components,
    /// so the stored denominator is always strictly positive. The pair is
    /// stored as given otherwise: no reduction at construction time.
    ///
    /// # Errors
    /// - `InvalidDenominator` if `den == 0`
    /// - `ArithmeticOverflow` if sign normalization overflows (`i64::MIN`)
    #[inline]
    pub fn new(num: i64, den: i64) -> RationalResult<Self> {
        if den == 0 {
            return Err(RationalError::InvalidDenominator);
        }
        if den < 0 {
            let num = num.checked_neg().ok_or(RationalError::ArithmeticOverflow)?;
            let den = den.checked_neg().ok_or(RationalError::ArithmeticOverflow)?;
            Ok(Self { num, den })
        } else {
            Ok(Self { num, den })
        }
    }

    /// Create a whole number (denominator 1).
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The stored numerator (possibly unreduced).
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    /// The stored denominator (possibly unreduced, always positive).
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    /// The unique lowest-terms representative of this value.
    ///
    /// A zero numerator canonicalizes to `0/1` without consulting the GCD
    /// kernel. Idempotent: reducing a reduced value returns it unchanged.
    #[inline]
    pub fn reduced(self) -> Self {
        if self.num == 0 {
            return Self::ZERO;
        }
        let g = gcd(self.num.unsigned_abs(), self.den.unsigned_abs()) as i64;
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }

    // ========================================================================
    // Checked Arithmetic
    // Results are exact and deliberately left unreduced.
    // ========================================================================

    /// Checked addition over the least common denominator.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if the common denominator or a scaled
    /// numerator exceeds the i64 range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> RationalResult<Self> {
        let l = lcm(self.den, rhs.den)?;
        let a = self
            .num
            .checked_mul(l / self.den)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let b = rhs
            .num
            .checked_mul(l / rhs.den)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let num = a.checked_add(b).ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self { num, den: l })
    }

    /// Checked subtraction over the least common denominator.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if the common denominator or a scaled
    /// numerator exceeds the i64 range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> RationalResult<Self> {
        let l = lcm(self.den, rhs.den)?;
        let a = self
            .num
            .checked_mul(l / self.den)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let b = rhs
            .num
            .checked_mul(l / rhs.den)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let num = a.checked_sub(b).ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self { num, den: l })
    }

    /// Checked multiplication, componentwise.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if either component product exceeds the
    /// i64 range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> RationalResult<Self> {
        let num = self
            .num
            .checked_mul(rhs.num)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let den = self
            .den
            .checked_mul(rhs.den)
            .ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self { num, den })
    }

    /// Checked division: multiply by the reciprocal of `rhs`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is a zero-valued fraction (its numerator
    ///   would become the result's denominator, violating the non-zero
    ///   denominator invariant)
    /// - `ArithmeticOverflow` if either component product exceeds the i64
    ///   range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> RationalResult<Self> {
        if rhs.num == 0 {
            return Err(RationalError::DivisionByZero);
        }
        let num = self
            .num
            .checked_mul(rhs.den)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let den = self
            .den
            .checked_mul(rhs.num)
            .ok_or(RationalError::ArithmeticOverflow)?;
        // rhs.num may be negative; re-normalize the denominator sign.
        Self::new(num, den)
    }

    /// Checked exponentiation by a non-negative integer, componentwise.
    ///
    /// Negative exponents are rejected: a negative power of an integer
    /// component is undefined unless its magnitude is 1, and truncating it
    /// silently would corrupt exactness.
    ///
    /// # Errors
    /// - `UnsupportedExponent` if `exp < 0`
    /// - `ArithmeticOverflow` if either component power exceeds the i64 range
    #[inline]
    pub fn checked_pow(self, exp: i32) -> RationalResult<Self> {
        if exp < 0 {
            return Err(RationalError::UnsupportedExponent);
        }
        let exp = exp as u32;
        let num = self
            .num
            .checked_pow(exp)
            .ok_or(RationalError::ArithmeticOverflow)?;
        let den = self
            .den
            .checked_pow(exp)
            .ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self { num, den })
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` for a numerator of `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> RationalResult<Self> {
        let num = self
            .num
            .checked_neg()
            .ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self { num, den: self.den })
    }

    /// The floating-point quotient `numerator / denominator`.
    ///
    /// Total: the denominator is never zero. The result is the nearest f64,
    /// not an exact value.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Check if the value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Check if the value is a whole number (e.g. 8/4, 3/1, 2/2).
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.num % self.den == 0
    }

    /// Check if the absolute value is strictly less than 1.
    #[inline]
    pub const fn is_proper(self) -> bool {
        self.num.unsigned_abs() < self.den.unsigned_abs()
    }

    /// Check if the reduced numerator is exactly 1 (e.g. 1/2, 2/4, 3/3).
    ///
    /// Reduction is required: comparing the stored numerator would miss
    /// unreduced unit fractions like 2/4.
    #[inline]
    pub fn is_unit(self) -> bool {
        self.reduced().num == 1
    }

    /// Check if two fractions differ by a unit fraction.
    ///
    /// True iff the absolute difference, once reduced, has numerator 1.
    /// Equal values are not adjacent: a zero difference is not a unit
    /// fraction. The difference is formed in i128, so the predicate is total
    /// even where `checked_sub` on the i64 values would overflow.
    #[inline]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        let num = (self.num as i128) * (other.den as i128)
            - (other.num as i128) * (self.den as i128);
        if num == 0 {
            return false;
        }
        // The reduced numerator has magnitude 1 iff |num| divides the
        // denominator product (then gcd(|num|, den) == |num|).
        let den = (self.den as u128) * (other.den as u128);
        den % num.unsigned_abs() == 0
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the reduced form as an integer part plus a proper-fraction
    /// remainder.
    ///
    /// Whole numbers render as the bare integer. Otherwise the integer part
    /// and remainder come from truncating division, so both carry the
    /// fraction's sign for negative values.
    ///
    /// # Example
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let r = Rational::new(5, 4)?;
    /// assert_eq!(r.as_mixed_number(), "Partie entière : 1 | Reste : 1/4");
    /// assert_eq!(Rational::new(8, 4)?.as_mixed_number(), "2");
    /// # Ok::<(), exact_rational::RationalError>(())
    /// ```
    pub fn as_mixed_number(self) -> String {
        let r = self.reduced();
        let q = r.num / r.den;
        let rem = r.num - q * r.den;
        if rem == 0 {
            format!("{q}")
        } else {
            format!("Partie entière : {q} | Reste : {rem}/{}", r.den)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

/// Exact structural equality after reduction, computed by cross-multiplying
/// in i128 (exact: both denominators are positive and an i64 product cannot
/// overflow i128). Comparing truncated integer quotients would conflate
/// values like 3/2 and 5/4 and is deliberately avoided.
impl PartialEq for Rational {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.num as i128) * (other.den as i128) == (other.num as i128) * (self.den as i128)
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order by cross-multiplication in i128; sound because denominators
/// are always positive.
impl Ord for Rational {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = (self.num as i128) * (other.den as i128);
        let rhs = (other.num as i128) * (self.den as i128);
        lhs.cmp(&rhs)
    }
}

/// Hashes the reduced pair so that equal values hash identically regardless
/// of how they were computed.
impl Hash for Rational {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        let r = self.reduced();
        r.num.hash(state);
        r.den.hash(state);
    }
}

// Infallible Neg for ergonomics (panics on i64::MIN - use checked_neg in production)
impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Rational negation overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{}, reduced={})", self.num, self.den, self)
    }
}

/// Canonical `"num/den"` rendering of the reduced form. The denominator is
/// always positive, so the sign (if any) leads the numerator.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reduced();
        write!(f, "{}/{}", r.num, r.den)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Rational {
    #[inline]
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

/// Fallible construction from a `(numerator, denominator)` pair. Also the
/// serde deserialization path, so the non-zero denominator invariant holds
/// for deserialized values.
impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    #[inline]
    fn try_from((num, den): (i64, i64)) -> RationalResult<Self> {
        Self::new(num, den)
    }
}

impl From<Rational> for (i64, i64) {
    #[inline]
    fn from(r: Rational) -> Self {
        (r.num, r.den)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl Rational {
    /// Convert from `rust_decimal::Decimal`, exactly.
    ///
    /// A decimal is `mantissa / 10^scale`, both of which map directly onto a
    /// fraction. This is intended for API boundaries (accepting user input).
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if the mantissa or the scale power does
    /// not fit in i64 (scales above 18).
    pub fn from_decimal(d: rust_decimal::Decimal) -> RationalResult<Self> {
        let num =
            i64::try_from(d.mantissa()).map_err(|_| RationalError::ArithmeticOverflow)?;
        let den = 10_i64
            .checked_pow(d.scale())
            .ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self { num, den })
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display/debugging only: non-terminating
    /// fractions such as 1/3 round to Decimal's precision.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.num) / rust_decimal::Decimal::from(self.den)
    }
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property Tests
// Algebraic laws checked over sampled operand ranges kept well inside i64.
// ============================================================================
