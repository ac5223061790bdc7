//! Narrow fixed-point scalar used for plane coordinates.
//!
//! Values are stored in an `i16` with [`FRACTIONAL_BITS`] fractional bits.
//! Products of two values are formed in an `i32` ([`Wide`]) and narrowed
//! back with an arithmetic right shift, which truncates toward negative
//! infinity. The accelerator thresholds in the evaluator are calibrated
//! against this truncation, so it must never be replaced by rounding.

use std::fmt;
use std::ops::{Add, Neg, Sub};

pub const FRACTIONAL_BITS: u32 = 12;

/// Intermediate type for products and sums of squares.
pub type Wide = i32;

/// Converts a real constant to a wide fixed-point value, truncating toward zero.
#[must_use]
pub const fn wide_from_f64(value: f64) -> Wide {
    (value * (1 << FRACTIONAL_BITS) as f64) as Wide
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i16);

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self::from_f64(1.0);
    pub const TWO: Self = Self::from_f64(2.0);
    pub const MINUS_TWO: Self = Self::from_f64(-2.0);

    #[must_use]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    /// Converts a real constant, truncating toward zero.
    ///
    /// Values outside the representable range (roughly ±8.0) are a
    /// programming error and fail const evaluation.
    #[must_use]
    pub const fn from_f64(value: f64) -> Self {
        let wide = wide_from_f64(value);
        assert!(
            wide >= i16::MIN as Wide && wide <= i16::MAX as Wide,
            "fixed-point constant out of range"
        );
        Self(wide as i16)
    }

    #[must_use]
    pub const fn raw(self) -> i16 {
        self.0
    }

    #[must_use]
    pub const fn widen(self) -> Wide {
        self.0 as Wide
    }

    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(1 << FRACTIONAL_BITS)
    }

    /// Full-precision product, carrying `2 * FRACTIONAL_BITS` fractional bits.
    #[must_use]
    pub fn wide_mul(self, other: Self) -> Wide {
        self.widen() * other.widen()
    }

    /// Product rescaled back to fixed point.
    #[must_use]
    pub fn mul_trunc(self, other: Self) -> Self {
        Self::narrow(self.wide_mul(other))
    }

    #[must_use]
    pub fn square(self) -> Self {
        self.mul_trunc(self)
    }

    /// Rescales a wide product by [`FRACTIONAL_BITS`].
    #[must_use]
    pub fn narrow(wide: Wide) -> Self {
        Self::narrow_by(wide, FRACTIONAL_BITS)
    }

    /// Rescales a wide value by an arbitrary shift, truncating.
    ///
    /// The shifted value must fit the storage type. Debug builds assert it;
    /// callers keep their operands inside the evaluator's ±2.0 window so
    /// the assertion never fires for valid inputs.
    #[must_use]
    pub fn narrow_by(wide: Wide, shift: u32) -> Self {
        let shifted = wide >> shift;
        debug_assert!(
            i16::try_from(shifted).is_ok(),
            "fixed-point narrowing overflow: {wide} >> {shift}"
        );
        Self(shifted as i16)
    }

    /// Narrows an already-scaled wide value, failing instead of wrapping.
    #[must_use]
    pub fn checked_from_wide(wide: Wide) -> Option<Self> {
        i16::try_from(wide).ok().map(Self)
    }

    /// `self + steps * step`, or `None` if the result leaves the storage range.
    #[must_use]
    pub fn checked_offset(self, step: Self, steps: i32) -> Option<Self> {
        let delta = step.widen().checked_mul(steps)?;
        Self::checked_from_wide(self.widen().checked_add(delta)?)
    }

    /// Arithmetic halving, truncating toward negative infinity.
    #[must_use]
    pub const fn half(self) -> Self {
        Self(self.0 >> 1)
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}
