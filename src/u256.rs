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

//! Powers of ten as unsigned 256-bit magnitudes.

use ethnum::U256;

/// Largest `n` for which `10^n` fits in 256 bits.
pub const MAX_POW10_EXP: u32 = 77;

/// `10^0` through `10^77`, every power of ten representable in 256 bits.
pub static POWERS_10: [U256; (MAX_POW10_EXP + 1) as usize] = [
    U256::new(1),
    U256::new(10),
    U256::new(100),
    U256::new(1000),
    U256::new(10000),
    U256::new(100000),
    U256::new(1000000),
    U256::new(10000000),
    U256::new(100000000),
    U256::new(1000000000),
    U256::new(10000000000),
    U256::new(100000000000),
    U256::new(1000000000000),
    U256::new(10000000000000),
    U256::new(100000000000000),
    U256::new(1000000000000000),
    U256::new(10000000000000000),
    U256::new(100000000000000000),
    U256::new(1000000000000000000),
    U256::new(10000000000000000000),
    U256::new(100000000000000000000),
    U256::new(1000000000000000000000),
    U256::new(10000000000000000000000),
    U256::new(100000000000000000000000),
    U256::new(1000000000000000000000000),
    U256::new(10000000000000000000000000),
    U256::new(100000000000000000000000000),
    U256::new(1000000000000000000000000000),
    U256::new(10000000000000000000000000000),
    U256::new(100000000000000000000000000000),
    U256::new(1000000000000000000000000000000),
    U256::new(10000000000000000000000000000000),
    U256::new(100000000000000000000000000000000),
    U256::new(1000000000000000000000000000000000),
    U256::new(10000000000000000000000000000000000),
    U256::new(100000000000000000000000000000000000),
    U256::new(1000000000000000000000000000000000000),
    U256::new(10000000000000000000000000000000000000),
    U256::new(100000000000000000000000000000000000000),
    U256::from_words(2, 319435266158123073073250785136463577088),
    U256::from_words(29, 131811359292784559562136384478721867776),
    U256::from_words(293, 297266492165030205231240022491914043392),
    U256::from_words(2938, 250405986282794344605403365464994742272),
    U256::from_words(29387, 122083294381374201810411402627569942528),
    U256::from_words(293873, 199985843050926627713990203980394790912),
    U256::from_words(2938735, 298446595904573959823029002645106851840),
    U256::from_words(29387358, 262207023678231890523293166996922826752),
    U256::from_words(293873587, 240093668335749660989309417946850787328),
    U256::from_words(2938735877, 18960114910927365649471927446130393088),
    U256::from_words(29387358770, 189601149109273656494719274461303930880),
    U256::from_words(293873587705, 194599656488044247630319707454198251520),
    U256::from_words(2938735877055, 244584730275750158986324037383141457920),
    U256::from_words(29387358770557, 63870734310932345619618121809037099008),
    U256::from_words(293873587705571, 298424976188384992732806610658602778624),
    U256::from_words(2938735877055718, 261990826516342219621069247131882094592),
    U256::from_words(29387358770557187, 237931696716852951967070219296443465728),
    U256::from_words(293873587705571876, 337622765642898738890454548373825388544),
    U256::from_words(2938735877055718769, 313686354140541217734174016852339982336),
    U256::from_words(29387358770557187699, 74322239116966006171368701637485920256),
    U256::from_words(293873587705571876992, 62657657327783134786937801511322779648),
    U256::from_words(2938735877055718769921, 286294206356892884406003407681459585024),
    U256::from_words(29387358770557187699218, 140683128201421136353037217360450158592),
    U256::from_words(293873587705571876992184, 45701814330457509676873743877428740096),
    U256::from_words(2938735877055718769921841, 116735776383636633305362831342519189504),
    U256::from_words(29387358770557187699218413, 146510663073550942663504491129887260672),
    U256::from_words(293873587705571876992184134, 103977163051755572781546481571799760896),
    U256::from_words(2938735877055718769921841343, 18924529754740337425340993422692974592),
    U256::from_words(29387358770557187699218413430, 189245297547403374253409934226929745920),
    U256::from_words(293873587705571876992184134305, 191041140869341425217226305110456401920),
    U256::from_words(2938735877055718769921841343055, 208999574088721934855390013945722961920),
    U256::from_words(29387358770557187699218413430556, 48301539361588567773652494866620350464),
    U256::from_words(293873587705571876992184134305561, 142733026694947214273150341234435293184),
    U256::from_words(2938735877055718769921841343055614, 66200799265718288878004982617280086016),
    U256::from_words(29387358770557187699218413430556141, 321725625736244425316675218741032648704),
    U256::from_words(293873587705571876992184134305561419, 154714955073998081996380720524412583936),
    U256::from_words(2938735877055718769921841343055614194, 186020083056226966110308775517052993536),
    U256::from_words(29387358770557187699218413430556141945, 158788995957577343786214718011688878080),
    U256::from_words(293873587705571876992184134305561419454, 226760491892019584008648750389815934976),
];

/// Returns `10^exp` reduced modulo `2^256`.
///
/// Exponents up to [`MAX_POW10_EXP`] are exact table lookups; larger
/// exponents wrap, which defines the engine-wide wrap boundary for every
/// caller of the provider (rescaling and division alike).
#[inline]
pub fn pow10(exp: u32) -> U256 {
    if exp <= MAX_POW10_EXP {
        return POWERS_10[exp as usize];
    }

    let mut result = U256::ONE;
    let mut exp = exp;
    while exp > MAX_POW10_EXP {
        result = result.wrapping_mul(POWERS_10[MAX_POW10_EXP as usize]);
        exp -= MAX_POW10_EXP;
    }
    result.wrapping_mul(POWERS_10[exp as usize])
}

/// Returns `10^exp`, or `None` if it exceeds 256 bits.
#[inline]
pub fn checked_pow10(exp: u32) -> Option<U256> {
    POWERS_10.get(exp as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10_exact() {
        assert_eq!(pow10(0), U256::ONE);
        assert_eq!(pow10(1), U256::new(10));
        assert_eq!(pow10(19), U256::new(10_000_000_000_000_000_000));
        assert_eq!(pow10(77), POWERS_10[77]);

        let mut expected = U256::ONE;
        for exp in 0..=MAX_POW10_EXP {
            assert_eq!(pow10(exp), expected);
            expected = expected.wrapping_mul(U256::new(10));
        }
    }

    #[test]
    fn test_pow10_wraps() {
        // 10^78 does not fit; the provider reduces modulo 2^256.
        assert_eq!(pow10(78), POWERS_10[77].wrapping_mul(U256::new(10)));
        assert_ne!(pow10(78), U256::ZERO);

        // Modular reduction is independent of how the exponent is split.
        assert_eq!(pow10(80), pow10(40).wrapping_mul(pow10(40)));
        assert_eq!(pow10(154), pow10(77).wrapping_mul(pow10(77)));
        assert_eq!(pow10(255), pow10(100).wrapping_mul(pow10(155)));
        assert_eq!(pow10(275), pow10(200).wrapping_mul(pow10(75)));
    }

    #[test]
    fn test_checked_pow10() {
        assert_eq!(checked_pow10(0), Some(U256::ONE));
        assert_eq!(checked_pow10(77), Some(POWERS_10[77]));
        assert_eq!(checked_pow10(78), None);
        assert_eq!(checked_pow10(255), None);
    }

    #[test]
    fn test_pow10_zero_boundary() {
        // 10^n has 2-adic valuation n, so the wrapped value is nonzero for
        // every exponent below 256 (everything rescaling can request) and
        // zero from 256 on; rescaling down never divides by zero.
        for exp in 0..=255 {
            assert_ne!(pow10(exp), U256::ZERO);
        }
        assert_eq!(pow10(256), U256::ZERO);
        assert_eq!(pow10(275), U256::ZERO);
    }
}
