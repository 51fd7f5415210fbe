// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decimal implementation.

use crate::u256::{checked_pow10, pow10};
use ethnum::U256;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum scale of `Decimal`, i.e. the maximum count of fractional digits.
pub const MAX_SCALE: u8 = u8::MAX;

/// Scale of a quotient when division has to extend the dividend's precision.
pub const DIV_DEFAULT_SCALE: u8 = 20;

/// Unsigned fixed-point decimal.
///
/// A `Decimal` is a pair of a 256-bit unsigned `magnitude` and an 8-bit
/// `scale`; the represented value is `magnitude / 10^scale`.
///
/// The type is unsigned-only and wrapping: magnitude arithmetic that leaves
/// the 256-bit range reduces modulo `2^256` instead of failing, including
/// subtraction below zero. The `checked_*` methods report those cases as
/// `None` for callers that want them surfaced.
#[derive(Copy, Clone, Debug)]
pub struct Decimal {
    pub(crate) magnitude: U256,
    pub(crate) scale: u8,
}

impl Decimal {
    /// Zero value, i.e. `0`.
    pub const ZERO: Decimal = Decimal {
        magnitude: U256::ZERO,
        scale: 0,
    };

    /// i.e. `1`.
    pub const ONE: Decimal = Decimal {
        magnitude: U256::ONE,
        scale: 0,
    };

    /// Creates a `Decimal` from a raw magnitude and scale.
    ///
    /// Every `(magnitude, scale)` pair is a valid decimal, so this cannot fail.
    ///
    /// ```
    /// use udec256::{Decimal, U256};
    ///
    /// let n = Decimal::from_parts(U256::new(5), 3);
    /// assert_eq!(n.to_string(), "0.005");
    /// ```
    #[inline]
    pub const fn from_parts(magnitude: U256, scale: u8) -> Decimal {
        Decimal { magnitude, scale }
    }

    /// Consumes the `Decimal`, returning `(magnitude, scale)`.
    #[inline]
    pub const fn into_parts(self) -> (U256, u8) {
        (self.magnitude, self.scale)
    }

    /// Returns the magnitude, i.e. the digits without regard to the decimal
    /// point placement.
    #[inline]
    pub const fn magnitude(&self) -> U256 {
        self.magnitude
    }

    /// Returns the scale, i.e. the count of fractional decimal digits.
    #[inline]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Checks if `self` is zero, regardless of scale.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude == U256::ZERO
    }

    /// Re-expresses `self` at another scale.
    ///
    /// Increasing the scale multiplies the magnitude by a power of ten and is
    /// lossless unless the magnitude leaves the 256-bit range, in which case
    /// it wraps. Decreasing the scale divides the magnitude, truncating the
    /// discarded fractional digits toward zero.
    ///
    /// ```
    /// use udec256::Decimal;
    ///
    /// let n: Decimal = "1.23".parse().unwrap();
    /// assert_eq!(n.rescale(1).to_string(), "1.2");
    /// assert_eq!(n.rescale(1).rescale(2).to_string(), "1.20");
    /// ```
    #[inline]
    pub fn rescale(&self, scale: u8) -> Decimal {
        match scale.cmp(&self.scale) {
            Ordering::Equal => *self,
            Ordering::Greater => Decimal {
                magnitude: self
                    .magnitude
                    .wrapping_mul(pow10((scale - self.scale) as u32)),
                scale,
            },
            Ordering::Less => Decimal {
                magnitude: self.magnitude / pow10((self.scale - scale) as u32),
                scale,
            },
        }
    }

    /// Re-expresses `self` at another scale,
    /// returning `None` if increasing the scale overflows the magnitude.
    ///
    /// Decreasing the scale truncates by definition and is never an error.
    #[inline]
    pub fn checked_rescale(&self, scale: u8) -> Option<Decimal> {
        if scale <= self.scale {
            return Some(self.rescale(scale));
        }

        // Zero cannot overflow at any scale.
        if self.is_zero() {
            return Some(Decimal {
                magnitude: U256::ZERO,
                scale,
            });
        }

        let magnitude = self
            .magnitude
            .checked_mul(checked_pow10((scale - self.scale) as u32)?)?;
        Some(Decimal { magnitude, scale })
    }

    /// Brings both operands to the larger of the two scales.
    #[inline]
    fn align(&self, other: &Decimal) -> (U256, U256, u8) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.magnitude, other.magnitude, self.scale),
            Ordering::Less => (
                self.rescale(other.scale).magnitude,
                other.magnitude,
                other.scale,
            ),
            Ordering::Greater => (
                self.magnitude,
                other.rescale(self.scale).magnitude,
                self.scale,
            ),
        }
    }

    #[inline]
    fn checked_align(&self, other: &Decimal) -> Option<(U256, U256, u8)> {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => Some((self.magnitude, other.magnitude, self.scale)),
            Ordering::Less => Some((
                self.checked_rescale(other.scale)?.magnitude,
                other.magnitude,
                other.scale,
            )),
            Ordering::Greater => Some((
                self.magnitude,
                other.checked_rescale(self.scale)?.magnitude,
                self.scale,
            )),
        }
    }

    /// Adds two decimals at their common scale, wrapping modulo `2^256`.
    #[inline]
    pub fn wrapping_add(&self, other: Decimal) -> Decimal {
        let (lhs, rhs, scale) = self.align(&other);
        Decimal {
            magnitude: lhs.wrapping_add(rhs),
            scale,
        }
    }

    /// Subtracts `other` from `self` at their common scale.
    ///
    /// Subtracting a larger value wraps modulo `2^256` rather than going
    /// negative; the engine is unsigned-only.
    #[inline]
    pub fn wrapping_sub(&self, other: Decimal) -> Decimal {
        let (lhs, rhs, scale) = self.align(&other);
        Decimal {
            magnitude: lhs.wrapping_sub(rhs),
            scale,
        }
    }

    /// Multiplies two decimals without pre-alignment: the magnitudes multiply
    /// modulo `2^256` and the scales add modulo `2^8`.
    #[inline]
    pub fn wrapping_mul(&self, other: Decimal) -> Decimal {
        Decimal {
            magnitude: self.magnitude.wrapping_mul(other.magnitude),
            scale: self.scale.wrapping_add(other.scale),
        }
    }

    /// Divides `self` by `other`, truncating toward zero.
    ///
    /// A zero divisor yields zero, indistinguishable from a legitimately zero
    /// quotient; use [`Decimal::checked_div`] to tell the two apart.
    ///
    /// When the dividend's scale is less than the divisor's scale plus
    /// [`DIV_DEFAULT_SCALE`], the dividend is extended and the quotient takes
    /// scale [`DIV_DEFAULT_SCALE`]; otherwise the divisor is scaled up and
    /// the quotient keeps the dividend's scale.
    ///
    /// ```
    /// use udec256::Decimal;
    ///
    /// let n: Decimal = "1".parse().unwrap();
    /// let d: Decimal = "3".parse().unwrap();
    /// assert_eq!(n.wrapping_div(d).to_string(), "0.33333333333333333333");
    /// ```
    #[inline]
    pub fn wrapping_div(&self, other: Decimal) -> Decimal {
        if other.is_zero() {
            return Decimal::ZERO;
        }

        let e = self.scale as i32 - other.scale as i32 - DIV_DEFAULT_SCALE as i32;
        let (dividend, divisor, scale) = if e < 0 {
            (
                self.magnitude.wrapping_mul(pow10((-e) as u32)),
                other.magnitude,
                DIV_DEFAULT_SCALE,
            )
        } else {
            (
                self.magnitude,
                other.magnitude.wrapping_mul(pow10(e as u32)),
                self.scale,
            )
        };

        // The scaled divisor can wrap to zero; the quotient is zero then.
        if divisor == U256::ZERO {
            return Decimal {
                magnitude: U256::ZERO,
                scale,
            };
        }

        Decimal {
            magnitude: dividend / divisor,
            scale,
        }
    }

    /// Adds two decimals,
    /// returning `None` if alignment or the sum overflows 256 bits.
    #[inline]
    pub fn checked_add(&self, other: Decimal) -> Option<Decimal> {
        let (lhs, rhs, scale) = self.checked_align(&other)?;
        let magnitude = lhs.checked_add(rhs)?;
        Some(Decimal { magnitude, scale })
    }

    /// Subtracts one decimal from another,
    /// returning `None` if `other` represents a larger value than `self`
    /// or alignment overflows.
    #[inline]
    pub fn checked_sub(&self, other: Decimal) -> Option<Decimal> {
        let (lhs, rhs, scale) = self.checked_align(&other)?;
        let magnitude = lhs.checked_sub(rhs)?;
        Some(Decimal { magnitude, scale })
    }

    /// Calculates the product of two decimals,
    /// returning `None` if the magnitude product overflows 256 bits or the
    /// scale sum overflows 8 bits.
    #[inline]
    pub fn checked_mul(&self, other: Decimal) -> Option<Decimal> {
        let magnitude = self.magnitude.checked_mul(other.magnitude)?;
        let scale = self.scale.checked_add(other.scale)?;
        Some(Decimal { magnitude, scale })
    }

    /// Checked decimal division.
    /// Computes `self / other`, returning `None` if `other` is zero or an
    /// intermediate scaling overflows.
    ///
    /// This is the explicit error channel for division by zero that
    /// [`Decimal::wrapping_div`] deliberately lacks.
    #[inline]
    pub fn checked_div(&self, other: Decimal) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }

        let e = self.scale as i32 - other.scale as i32 - DIV_DEFAULT_SCALE as i32;
        let (dividend, divisor, scale) = if e < 0 {
            (
                self.magnitude.checked_mul(checked_pow10((-e) as u32)?)?,
                other.magnitude,
                DIV_DEFAULT_SCALE,
            )
        } else {
            (
                self.magnitude,
                other.magnitude.checked_mul(checked_pow10(e as u32)?)?,
                self.scale,
            )
        };

        Some(Decimal {
            magnitude: dividend / divisor,
            scale,
        })
    }

    /// Strips trailing zero digits from the fractional part, returning the
    /// same value at the smallest equivalent scale.
    ///
    /// ```
    /// use udec256::Decimal;
    ///
    /// let n: Decimal = "2.5".parse().unwrap();
    /// let product = n.wrapping_mul("0.2".parse().unwrap());
    /// assert_eq!(product.to_string(), "0.50");
    /// assert_eq!(product.normalize().to_string(), "0.5");
    /// ```
    #[inline]
    pub fn normalize(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }

        let ten = U256::new(10);
        let mut magnitude = self.magnitude;
        let mut scale = self.scale;
        while scale > 0 && magnitude % ten == U256::ZERO {
            magnitude /= ten;
            scale -= 1;
        }

        Decimal { magnitude, scale }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.magnitude.to_string();

        if self.scale == 0 {
            return f.pad_integral(true, "", &digits);
        }

        let scale = self.scale as usize;
        let mut out = String::with_capacity(digits.len().max(scale) + 2);
        if digits.len() > scale {
            let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
            out.push_str(int_digits);
            out.push('.');
            out.push_str(frac_digits);
        } else {
            out.push_str("0.");
            for _ in digits.len()..scale {
                out.push('0');
            }
            out.push_str(&digits);
        }

        f.pad_integral(true, "", &out)
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Decimal::ZERO
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialEq<&Decimal> for Decimal {
    #[inline]
    fn eq(&self, other: &&Decimal) -> bool {
        self.eq(*other)
    }
}

impl PartialEq<Decimal> for &Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        (*self).eq(other)
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    /// Compares represented values, not representations: both operands are
    /// brought to their common scale before the magnitudes compare.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            // fast path for same scale
            return self.magnitude.cmp(&other.magnitude);
        }

        let (lhs, rhs, _) = self.align(other);
        lhs.cmp(&rhs)
    }
}

impl Hash for Decimal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.magnitude.hash(state);
        n.scale.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    const WRAP_MINUS_ONE: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    #[test]
    fn test_consts() {
        assert!(Decimal::ZERO.is_zero());
        assert_eq!(Decimal::ZERO.to_string(), "0");
        assert_eq!(Decimal::ONE.to_string(), "1");
        assert_eq!(Decimal::default(), Decimal::ZERO);
    }

    #[test]
    fn test_from_parts() {
        let n = Decimal::from_parts(U256::new(123), 2);
        assert_eq!(n.to_string(), "1.23");
        assert_eq!(n.into_parts(), (U256::new(123), 2));
        assert_eq!(n.magnitude(), U256::new(123));
        assert_eq!(n.scale(), 2);
    }

    #[test]
    fn test_rescale_up() {
        let n = dec("1.23").rescale(5);
        assert_eq!(n.into_parts(), (U256::new(123000), 5));
        assert_eq!(n.to_string(), "1.23000");
        // scale-invariant equality
        assert_eq!(n, dec("1.23"));
    }

    #[test]
    fn test_rescale_down_truncates() {
        let n = dec("1.29").rescale(1);
        assert_eq!(n.into_parts(), (U256::new(12), 1));
        assert_eq!(n.to_string(), "1.2");

        // Down then up does not recover the discarded digit.
        assert_eq!(dec("1.23").rescale(1).rescale(2).to_string(), "1.20");
        assert_ne!(dec("1.23").rescale(1).rescale(2), dec("1.23"));
    }

    #[test]
    fn test_rescale_wraps() {
        let max = Decimal::from_parts(U256::MAX, 0);
        let wrapped = max.rescale(1);
        assert_eq!(wrapped.magnitude(), U256::MAX.wrapping_mul(U256::new(10)));
        assert_eq!(wrapped.scale(), 1);

        assert_eq!(max.checked_rescale(1), None);
        assert_eq!(
            dec("1.23").checked_rescale(5).map(|n| n.into_parts()),
            Some((U256::new(123000), 5))
        );
        assert_eq!(
            dec("1.29").checked_rescale(1).map(|n| n.to_string()),
            Some("1.2".to_owned())
        );
    }

    #[test]
    fn test_checked_rescale_zero_any_scale() {
        // zero never overflows, even past the exact power-of-ten range
        assert_eq!(
            Decimal::ZERO.checked_rescale(100).map(|n| n.into_parts()),
            Some((U256::ZERO, 100))
        );
        assert_eq!(
            Decimal::ZERO.checked_rescale(255).map(|n| n.into_parts()),
            Some((U256::ZERO, 255))
        );
        assert_eq!(
            Decimal::from_parts(U256::ZERO, 30)
                .checked_rescale(200)
                .map(|n| n.scale()),
            Some(200)
        );
        // checked add/sub inherit it through alignment
        let tiny = Decimal::from_parts(U256::ONE, 200);
        assert_eq!(Decimal::ZERO.checked_add(tiny), Some(tiny));
    }

    #[test]
    fn test_add() {
        assert_eq!(dec("1.5").wrapping_add(dec("2.25")).to_string(), "3.75");
        assert_eq!(dec("2.25").wrapping_add(dec("1.5")).to_string(), "3.75");
        assert_eq!(dec("0").wrapping_add(dec("0")).to_string(), "0");
        assert_eq!(dec("1").wrapping_add(dec("0.000001")).to_string(), "1.000001");

        // result takes the larger scale
        let sum = dec("1.5").wrapping_add(dec("2.25"));
        assert_eq!(sum.scale(), 2);
    }

    #[test]
    fn test_add_wraps() {
        let max = Decimal::from_parts(U256::MAX, 0);
        assert_eq!(max.wrapping_add(Decimal::ONE), Decimal::ZERO);
        assert_eq!(max.checked_add(Decimal::ONE), None);
        assert_eq!(
            dec("1.5").checked_add(dec("2.25")).map(|n| n.to_string()),
            Some("3.75".to_owned())
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!(dec("3.75").wrapping_sub(dec("1.5")).to_string(), "2.25");
        assert_eq!(dec("2").wrapping_sub(dec("2")).to_string(), "0");
        let n = Decimal::from_parts(U256::new(20000), 4);
        assert_eq!(n.wrapping_sub(dec("2")).to_string(), "0.0000");
    }

    #[test]
    fn test_sub_wraps_below_zero() {
        let n = dec("1").wrapping_sub(dec("2"));
        assert_eq!(n.magnitude(), U256::MAX);
        assert_eq!(n.to_string(), WRAP_MINUS_ONE);

        assert_eq!(dec("1").checked_sub(dec("2")), None);
        assert_eq!(
            dec("2").checked_sub(dec("1")).map(|n| n.to_string()),
            Some("1".to_owned())
        );
    }

    #[test]
    fn test_mul() {
        let n = dec("2.5").wrapping_mul(dec("0.2"));
        assert_eq!(n.into_parts(), (U256::new(50), 2));
        assert_eq!(n.to_string(), "0.50");

        assert_eq!(dec("0.001").wrapping_mul(dec("1000")).to_string(), "1.000");
        assert_eq!(
            dec("123.456").wrapping_mul(dec("0")).into_parts(),
            (U256::ZERO, 3)
        );
    }

    #[test]
    fn test_mul_wraps_magnitude() {
        // 2^128 squared is exactly 2^256, which reduces to zero.
        let n = dec("340282366920938463463374607431768211456");
        assert_eq!(n.wrapping_mul(n).into_parts(), (U256::ZERO, 0));
        assert_eq!(n.checked_mul(n), None);
    }

    #[test]
    fn test_mul_wraps_scale() {
        let a = Decimal::from_parts(U256::new(1), 200);
        let b = Decimal::from_parts(U256::new(1), 100);
        // 200 + 100 wraps the 8-bit scale to 44.
        assert_eq!(a.wrapping_mul(b).scale(), 44);
        assert_eq!(a.checked_mul(b), None);
    }

    #[test]
    fn test_div_extends_precision() {
        assert_eq!(
            dec("1").wrapping_div(dec("3")).to_string(),
            "0.33333333333333333333"
        );
        assert_eq!(
            dec("1").wrapping_div(dec("8")).to_string(),
            "0.12500000000000000000"
        );
        assert_eq!(
            dec("100").wrapping_div(dec("3")).to_string(),
            "33.33333333333333333333"
        );
        assert_eq!(dec("1").wrapping_div(dec("3")).scale(), DIV_DEFAULT_SCALE);
    }

    #[test]
    fn test_div_keeps_dividend_scale() {
        // dividend scale == divisor scale + 20, so the divisor path is taken
        let n = dec("1.00000000000000000005").wrapping_div(dec("2"));
        assert_eq!(n.to_string(), "0.50000000000000000002");
        assert_eq!(n.scale(), 20);
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        // 2/3 = 0.66... truncated, never rounded up
        assert_eq!(
            dec("2").wrapping_div(dec("3")).to_string(),
            "0.66666666666666666666"
        );
    }

    #[test]
    fn test_div_by_zero_yields_zero() {
        let n = dec("5").wrapping_div(dec("0"));
        assert!(n.is_zero());
        assert_eq!(n.to_string(), "0");

        // zero at any scale guards the division
        assert!(dec("5").wrapping_div(dec("0.000")).is_zero());

        assert_eq!(dec("5").checked_div(dec("0")), None);
        assert_eq!(
            dec("1").checked_div(dec("3")).map(|n| n.to_string()),
            Some("0.33333333333333333333".to_owned())
        );
    }

    #[test]
    fn test_div_self_aliased() {
        let n = dec("7.5");
        assert_eq!(n.wrapping_div(n), dec("1"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(dec("1.2300").normalize().into_parts(), (U256::new(123), 2));
        let n = Decimal::from_parts(U256::new(5000), 3);
        assert_eq!(n.normalize().into_parts(), (U256::new(5), 0));
        assert_eq!(
            Decimal::from_parts(U256::ZERO, 7).normalize(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_cmp() {
        assert_eq!(dec("1.23"), dec("1.23"));
        assert_eq!(dec("1.23"), dec("1.23").rescale(7));
        assert!(dec("0.5") < dec("1"));
        assert!(dec("10") > dec("9.999999"));
        assert!(dec("0.000") == dec("0"));
        assert!(dec("2.5") <= dec("2.50").rescale(3));
    }

    fn hash_of(dec: Decimal) -> u64 {
        let mut hasher = DefaultHasher::new();
        dec.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        assert_eq!(hash_of(dec("1.23")), hash_of(dec("1.23").rescale(9)));
        assert_eq!(hash_of(Decimal::ZERO), hash_of(Decimal::from_parts(U256::ZERO, 100)));
        assert_ne!(hash_of(dec("1.23")), hash_of(dec("1.24")));
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(Decimal::from_parts(U256::new(5), 3).to_string(), "0.005");
        assert_eq!(Decimal::from_parts(U256::new(5), 1).to_string(), "0.5");
        assert_eq!(Decimal::from_parts(U256::new(50), 1).to_string(), "5.0");
        assert_eq!(Decimal::from_parts(U256::new(123), 0).to_string(), "123");
        assert_eq!(Decimal::from_parts(U256::ZERO, 2).to_string(), "0.00");
        assert_eq!(format!("{:>8}", dec("1.23")), "    1.23");
    }
}
