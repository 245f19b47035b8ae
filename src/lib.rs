// ============================================================================
// Exact Rational Arithmetic Library
// Fraction value type with checked operators and on-demand canonicalization
// ============================================================================

//! # Exact Rational
//!
//! An exact rational number type: an integer numerator over a non-zero
//! integer denominator, with GCD-based reduction computed on demand.
//!
//! ## Features
//!
//! - **Exact arithmetic**: add/sub/mul/div/pow over i64 components, with
//!   overflow detected and reported instead of silently wrapping
//! - **Lazy canonicalization**: operators return the literal computed pair;
//!   reduction to lowest terms happens where canonical form matters
//!   (display, equality, hashing, classification)
//! - **Classification predicates**: zero, integer, proper, unit, and
//!   unit-fraction adjacency checks
//! - **Textual rendering**: canonical `"num/den"` and mixed-number forms
//! - **Decimal interop**: exact conversion from `rust_decimal::Decimal` at
//!   API boundaries
//!
//! ## Example
//!
//! ```rust
//! use exact_rational::{Rational, RationalError};
//!
//! let a = Rational::new(5, 4)?;
//! let b = Rational::new(1, 2)?;
//!
//! let sum = a.checked_add(b)?;
//! assert_eq!(sum.to_string(), "7/4");
//! assert_eq!(sum.as_mixed_number(), "Partie entière : 1 | Reste : 3/4");
//!
//! // Equality is exact, after reduction
//! assert_eq!(Rational::new(2, 4)?, b);
//! assert_ne!(Rational::new(3, 2)?, a);
//!
//! // Division by a zero-valued fraction is an error, not a panic
//! assert_eq!(a.checked_div(Rational::ZERO), Err(RationalError::DivisionByZero));
//! # Ok::<(), RationalError>(())
//! ```

pub mod errors;
pub mod gcd;
pub mod rational;

// Re-exports for convenience
pub use errors::{RationalError, RationalResult};
pub use rational::Rational;
