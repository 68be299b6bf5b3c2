//! 16.16 fixed-point arithmetic.
//!
//! The upper 16 bits hold the integral part and the lower 16 bits the
//! fraction. Products and quotients are computed in `i64` so intermediate
//! values never overflow.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A signed 16.16 fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPoint(i32);

impl FixedPoint {
    pub const SHIFT: u32 = 16;
    pub const ZERO: FixedPoint = FixedPoint(0);
    pub const ONE: FixedPoint = FixedPoint(1 << Self::SHIFT);

    const FRACTION_MASK: i32 = (1 << Self::SHIFT) - 1;

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn from_int(value: i32) -> Self {
        Self(value << Self::SHIFT)
    }

    /// `num / den` rounded toward zero.
    pub const fn from_ratio(num: i32, den: i32) -> Self {
        Self((((num as i64) << Self::SHIFT) / den as i64) as i32)
    }

    pub fn from_f64(value: f64) -> Self {
        Self((value * (1i64 << Self::SHIFT) as f64) as i32)
    }

    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Integral part (floor).
    pub const fn integral(&self) -> i32 {
        self.0 >> Self::SHIFT
    }

    /// Fractional bits, always in `[0, 65536)`.
    pub const fn fraction(&self) -> i32 {
        self.0 & Self::FRACTION_MASK
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / (1i64 << Self::SHIFT) as f64
    }

    pub const fn mul_int(self, rhs: i32) -> Self {
        Self((self.0 as i64 * rhs as i64) as i32)
    }

    pub fn checked_div(self, rhs: FixedPoint) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        Some(Self((((self.0 as i64) << Self::SHIFT) / rhs.0 as i64) as i32))
    }
}

impl Add for FixedPoint {
    type Output = FixedPoint;

    fn add(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for FixedPoint {
    fn add_assign(&mut self, rhs: FixedPoint) {
        *self = *self + rhs;
    }
}

impl Sub for FixedPoint {
    type Output = FixedPoint;

    fn sub(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for FixedPoint {
    fn sub_assign(&mut self, rhs: FixedPoint) {
        *self = *self - rhs;
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> FixedPoint {
        FixedPoint(self.0.wrapping_neg())
    }
}

impl Mul for FixedPoint {
    type Output = FixedPoint;

    // Shift back once so the scale is not applied twice.
    fn mul(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint(((self.0 as i64 * rhs.0 as i64) >> Self::SHIFT) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_and_fraction_split() {
        let v = FixedPoint::from_ratio(3, 2);
        assert_eq!(v.integral(), 1);
        assert_eq!(v.fraction(), 1 << 15);
        assert_eq!(v.raw(), 98304);
    }

    #[test]
    fn integral_floors_negative_values() {
        let v = FixedPoint::from_ratio(-3, 2);
        assert_eq!(v.integral(), -2);
        assert_eq!(v.fraction(), 1 << 15);
    }

    #[test]
    fn mul_and_div_keep_scale() {
        let a = FixedPoint::from_int(6);
        let b = FixedPoint::from_ratio(1, 4);
        assert_eq!(a * b, FixedPoint::from_ratio(3, 2));
        assert_eq!(
            a.checked_div(FixedPoint::from_int(4)),
            Some(FixedPoint::from_ratio(3, 2))
        );
        assert_eq!(FixedPoint::from_int(7).mul_int(3), FixedPoint::from_int(21));
    }

    #[test]
    fn checked_div_by_zero_is_none() {
        assert_eq!(FixedPoint::ONE.checked_div(FixedPoint::ZERO), None);
    }

    #[test]
    fn float_conversion_round_trips_exact_values() {
        assert_eq!(FixedPoint::from_f64(1.5), FixedPoint::from_ratio(3, 2));
        assert_eq!(FixedPoint::from_int(-2).to_f64(), -2.0);
    }

    #[test]
    fn accumulating_halves_reaches_one() {
        let mut acc = FixedPoint::ZERO;
        acc += FixedPoint::from_ratio(150, 300);
        assert_eq!(acc.integral(), 0);
        acc += FixedPoint::from_ratio(150, 300);
        assert_eq!(acc, FixedPoint::ONE);
        acc -= FixedPoint::ONE;
        assert_eq!(-acc, FixedPoint::ZERO);
    }
}
