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

//! Conversion between decimal and other types.

use crate::decimal::Decimal;
use crate::error::DecimalConvertError;
use ethnum::U256;
use num_bigint::BigUint;
use std::convert::TryFrom;

macro_rules! impl_from_uint {
    ($ty: ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(val: $ty) -> Self {
                Decimal::from_parts(U256::new(val as u128), 0)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_uint!($ty);)*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128, usize);

impl TryFrom<f32> for Decimal {
    type Error = DecimalConvertError;

    #[inline]
    fn try_from(value: f32) -> std::result::Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DecimalConvertError::Invalid);
        }

        if value == 0.0 {
            return Ok(Decimal::ZERO);
        }

        // `{}` renders the shortest digit string that round-trips, so the
        // decimal carries exactly the float's own precision. Negative values
        // fail in the parser, which admits no sign.
        let n = format!("{}", value).parse::<Decimal>()?;
        Ok(n)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = DecimalConvertError;

    #[inline]
    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DecimalConvertError::Invalid);
        }

        if value == 0.0 {
            return Ok(Decimal::ZERO);
        }

        let n = format!("{}", value).parse::<Decimal>()?;
        Ok(n)
    }
}

impl Decimal {
    /// Creates a decimal from an arbitrary-precision magnitude and an
    /// explicit scale.
    ///
    /// The transfer is lossless; a magnitude beyond 256 bits is an error,
    /// not a wrap.
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use udec256::Decimal;
    ///
    /// let magnitude = BigUint::from(123_u32);
    /// let n = Decimal::from_biguint(&magnitude, 2).unwrap();
    /// assert_eq!(n.to_string(), "1.23");
    /// ```
    #[inline]
    pub fn from_biguint(value: &BigUint, scale: u8) -> Result<Decimal, DecimalConvertError> {
        let bytes = value.to_bytes_be();
        if bytes.len() > 32 {
            return Err(DecimalConvertError::Overflow);
        }

        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(&bytes);
        Ok(Decimal::from_parts(U256::from_be_bytes(buf), scale))
    }

    /// Returns the magnitude as an arbitrary-precision integer.
    ///
    /// The scale is not encoded; pair the result with [`Decimal::scale`] to
    /// carry the full value.
    #[inline]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.magnitude().to_be_bytes())
    }
}
