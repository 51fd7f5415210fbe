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

//! Unsigned fixed-point decimal built on a 256-bit magnitude, for amounts
//! where floating point rounds and plain integers lack fractions.
//!
//! A [`Decimal`] is a `(magnitude, scale)` pair representing
//! `magnitude / 10^scale`, with the magnitude in `[0, 2^256 - 1]` and the
//! scale in `[0, 255]`. Arithmetic is unsigned-only and wrapping: results
//! beyond the 256-bit range reduce modulo `2^256`, subtraction below zero
//! wraps, and division by zero yields zero. The `checked_*` methods report
//! all of those as `None` instead.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `Decimal` implements the
//! `serde::Serialize` and `serde::Deserialize` traits as its text literal
//! in a string.
//!
//! ## Usage
//!
//! To build a decimal, parse its literal:
//!
//! ```
//! use udec256::Decimal;
//!
//! let n1: Decimal = "1.5".parse().unwrap();
//! let n2: Decimal = "2.25".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "3.75");
//! ```
//!
//! Division extends precision to 20 fractional digits and truncates toward
//! zero:
//!
//! ```
//! use udec256::Decimal;
//!
//! let n1: Decimal = "1".parse().unwrap();
//! let n2: Decimal = "3".parse().unwrap();
//! assert_eq!((n1 / n2).to_string(), "0.33333333333333333333");
//! ```
//!
//! Overflow wraps rather than failing:
//!
//! ```
//! use udec256::Decimal;
//!
//! let n1: Decimal = "1".parse().unwrap();
//! let n2: Decimal = "2".parse().unwrap();
//! assert_eq!(
//!     (n1 - n2).to_string(),
//!     "115792089237316195423570985008687907853269984665640564039457584007913129639935",
//! );
//! assert_eq!(n1.checked_sub(n2), None);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod decimal;
mod error;
mod ops;
mod parse;
mod u256;

#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::{Decimal, DIV_DEFAULT_SCALE, MAX_SCALE};
pub use crate::error::{DecimalConvertError, DecimalParseError};
pub use ethnum::U256;
