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

//! Decimal parsing utilities.
//!
//! The literal grammar is `[digits]['.' digits]`: no sign, no exponent, no
//! whitespace. An empty string is a valid exact zero.

use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::DecimalParseError;
use ethnum::U256;
use std::str::FromStr;

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Accumulates digit bytes into a 256-bit magnitude.
///
/// Overflow here is an explicit parse failure, never a silent wrap; only
/// arithmetic wraps.
#[inline]
fn collect_magnitude(integral: &[u8], fractional: &[u8]) -> Result<U256, DecimalParseError> {
    let mut magnitude = U256::ZERO;
    for &d in integral.iter().chain(fractional.iter()) {
        magnitude = magnitude
            .checked_mul(U256::new(10))
            .and_then(|v| v.checked_add(U256::new((d - b'0') as u128)))
            .ok_or(DecimalParseError::Overflow)?;
    }
    Ok(magnitude)
}

#[inline]
fn from_str(s: &str) -> Result<Decimal, DecimalParseError> {
    let s = s.as_bytes();
    if s.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let (integral, rest) = eat_digits(s);

    let fractional = match rest.first() {
        None => &b""[..],
        Some(&b'.') => {
            let (fractional, rest) = eat_digits(&rest[1..]);
            if !rest.is_empty() {
                // a second point, or trailing garbage
                return Err(DecimalParseError::Invalid);
            }
            fractional
        }
        Some(_) => return Err(DecimalParseError::Invalid),
    };

    // The scale bound applies before zero stripping.
    if fractional.len() > MAX_SCALE as usize {
        return Err(DecimalParseError::Overflow);
    }

    // Trailing fractional zeros don't contribute to the scale.
    let zeros = fractional.iter().rev().take_while(|&&d| d == b'0').count();
    let fractional = &fractional[..fractional.len() - zeros];

    if integral.is_empty() && fractional.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    let magnitude = collect_magnitude(integral, fractional)?;
    Ok(Decimal::from_parts(magnitude, fractional.len() as u8))
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}
