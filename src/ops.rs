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

//! Ops implementation.
//!
//! Operators use the wrapping semantics: overflow reduces modulo `2^256`,
//! subtraction below zero wraps, and division by zero yields zero. Callers
//! who need failures reported use the `checked_*` methods instead.

use crate::decimal::Decimal;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_arith {
    ($op: ident { $method: ident }, $wrapping: ident) => {
        impl $op for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                self.$wrapping(other)
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &Decimal) -> Self::Output {
                self.$wrapping(*other)
            }
        }

        impl $op<Decimal> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                self.$wrapping(other)
            }
        }

        impl $op<&'_ Decimal> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &Decimal) -> Self::Output {
                self.$wrapping(*other)
            }
        }
    };
}

impl_arith!(Add { add }, wrapping_add);
impl_arith!(Sub { sub }, wrapping_sub);
impl_arith!(Mul { mul }, wrapping_mul);
impl_arith!(Div { div }, wrapping_div);

macro_rules! impl_arith_assign {
    ($op: ident { $method: ident }, $wrapping: ident) => {
        impl $op for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: Decimal) {
                *self = self.$wrapping(other);
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            #[inline(always)]
            fn $method(&mut self, other: &Decimal) {
                *self = self.$wrapping(*other);
            }
        }
    };
}

impl_arith_assign!(AddAssign { add_assign }, wrapping_add);
impl_arith_assign!(SubAssign { sub_assign }, wrapping_sub);
impl_arith_assign!(MulAssign { mul_assign }, wrapping_mul);
impl_arith_assign!(DivAssign { div_assign }, wrapping_div);

macro_rules! impl_arith_with_num {
    ($op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method(Decimal::from(other))
            }
        }

        impl $op<$int> for &'_ Decimal {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method(Decimal::from(other))
            }
        }

        impl $op<Decimal> for $int {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: Decimal) -> Self::Output {
                Decimal::from(self).$method(other)
            }
        }

        impl $op<&'_ Decimal> for $int {
            type Output = Decimal;

            #[inline(always)]
            fn $method(self, other: &'_ Decimal) -> Self::Output {
                Decimal::from(self).$method(other)
            }
        }
    };
    ($op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_with_num!($op { $method } $int);)*
    };
}

impl_arith_with_num!(Add { add } u8, u16, u32, u64, u128, usize);
impl_arith_with_num!(Sub { sub } u8, u16, u32, u64, u128, usize);
impl_arith_with_num!(Mul { mul } u8, u16, u32, u64, u128, usize);
impl_arith_with_num!(Div { div } u8, u16, u32, u64, u128, usize);

impl Sum for Decimal {
    #[inline(always)]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, Add::add)
    }
}

impl Product for Decimal {
    #[inline(always)]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::ONE, Mul::mul)
    }
}
