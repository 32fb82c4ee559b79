//! Remainder-based age estimation.
//!
//! The trick: every number in `[0, 104]` is uniquely determined by its
//! remainders modulo 3, 5, and 7 (the moduli are pairwise coprime and
//! 3 * 5 * 7 = 105). The weights 70, 21, and 15 are the standard
//! reconstruction coefficients, so for remainders of a real age the
//! formula returns the age itself.

use std::fmt::{self, Display};

use crate::input::InputError;

/// Modulus for the reconstruction: 3 * 5 * 7.
pub const AGE_MODULUS: i64 = 105;

/// Reconstructs a value in `[0, 104]` from remainders modulo 3, 5, and 7.
///
/// Total and permissive: any integers are accepted, and the result uses
/// non-negative modulo semantics, so it always lands in `[0, 104]`.
/// Range validation for user-facing input lives in [`Remainders`].
///
/// # Examples
///
/// ```
/// # use chatterbox_core::age::estimate_age;
/// assert_eq!(estimate_age(1, 2, 1), 22);
/// assert_eq!(estimate_age(0, 0, 0), 0);
/// ```
pub fn estimate_age(r3: i64, r5: i64, r7: i64) -> i64 {
    (r3 * 70 + r5 * 21 + r7 * 15).rem_euclid(AGE_MODULUS)
}

/// A validated triple of remainders modulo 3, 5, and 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remainders {
    r3: u8,
    r5: u8,
    r7: u8,
}

impl Remainders {
    /// Validates that each remainder is in `[0, divisor - 1]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(r3: i64, r5: i64, r7: i64) -> Result<Self, InputError> {
        Self::check("remainder of division by 3", r3, 3)?;
        Self::check("remainder of division by 5", r5, 5)?;
        Self::check("remainder of division by 7", r7, 7)?;

        Ok(Self {
            r3: r3 as u8,
            r5: r5 as u8,
            r7: r7 as u8,
        })
    }

    fn check(label: &'static str, value: i64, divisor: i64) -> Result<(), InputError> {
        if (0..divisor).contains(&value) {
            Ok(())
        } else {
            Err(InputError::OutOfRange {
                label,
                value,
                max: divisor - 1,
            })
        }
    }

    /// The reconstructed age, guaranteed in `[0, 104]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn age(self) -> u8 {
        estimate_age(i64::from(self.r3), i64::from(self.r5), i64::from(self.r7)) as u8
    }
}

impl Display for Remainders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r3, self.r5, self.r7)
    }
}
