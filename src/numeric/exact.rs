//! Arbitrary-precision decimal: the common form of the numeric tower.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use ibig::IBig;
use rust_decimal::Decimal;

use super::{Equivalence, NumericOrd};
use crate::error::AlgebraError;

/// An exact decimal value `unscaled * 10^-scale`.
///
/// Every finite value of the numeric tower (integers of any width,
/// `rust_decimal::Decimal`, and finite binary floats) converts to an
/// `ExactDecimal` without losing precision, so two values of different
/// representations can be compared mathematically.
///
/// Equality, ordering and hashing are by mathematical value: `1.0` and
/// `1.00` are the same `ExactDecimal`.
///
/// # Examples
///
/// ```rust
/// use ibig::IBig;
/// use seqalg::numeric::ExactDecimal;
///
/// let one_and_a_half = ExactDecimal::new(IBig::from(150), 2);
/// assert_eq!(one_and_a_half, "1.5".parse().unwrap());
/// assert_eq!(one_and_a_half.to_string(), "1.50");
/// assert_eq!(one_and_a_half.normalized().to_string(), "1.5");
///
/// // 0.1 as a binary float is not one tenth
/// let tenth = ExactDecimal::try_from(0.1_f64).unwrap();
/// assert!(tenth > "0.1".parse().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ExactDecimal {
    unscaled: IBig,
    scale: u32,
}

/// Returns `10^exponent`.
fn power_of_ten(exponent: u32) -> IBig {
    IBig::from(10_u8).pow(exponent as usize)
}

impl ExactDecimal {
    /// The largest exponent magnitude accepted by [`FromStr`].
    ///
    /// Wide enough for every finite `f64` (whose exact expansion needs at
    /// most 1074 fractional digits) and far beyond `rust_decimal::Decimal`.
    pub const MAX_EXPONENT: u32 = 4096;

    /// Creates the decimal `unscaled * 10^-scale`.
    #[inline]
    pub const fn new(unscaled: IBig, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// Returns the unscaled integer.
    #[inline]
    pub const fn unscaled(&self) -> &IBig {
        &self.unscaled
    }

    /// Returns the number of digits after the decimal point.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if the value has no fractional part.
    pub fn is_integral(&self) -> bool {
        self.normalized().scale == 0
    }

    /// Returns the same value with trailing fractional zeros removed.
    ///
    /// Zero normalizes to scale `0`, so every value has exactly one
    /// normalized form.
    pub fn normalized(&self) -> Self {
        let zero = IBig::from(0_u8);
        let ten = IBig::from(10_u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        if unscaled == zero {
            return Self::new(zero, 0);
        }
        while scale > 0 && &unscaled % &ten == zero {
            unscaled = &unscaled / &ten;
            scale -= 1;
        }
        Self::new(unscaled, scale)
    }

    /// Returns the position of the leading digit relative to the decimal
    /// point: a nonzero value lies in `[10^(p - 1), 10^p)` in magnitude.
    fn leading_position(&self) -> i64 {
        let digits = self.unscaled.to_string().trim_start_matches('-').len();
        i64::try_from(digits).unwrap_or(i64::MAX) - i64::from(self.scale)
    }

    /// Rescales both operands to the larger scale, returning their unscaled
    /// integers.
    fn aligned(&self, other: &Self) -> (IBig, IBig) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone()),
            Ordering::Less => (
                &self.unscaled * power_of_ten(other.scale - self.scale),
                other.unscaled.clone(),
            ),
            Ordering::Greater => (
                self.unscaled.clone(),
                &other.unscaled * power_of_ten(self.scale - other.scale),
            ),
        }
    }

    /// Converts to a `rust_decimal::Decimal` if the value fits its 96-bit
    /// mantissa and 28-digit scale.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let normalized = self.normalized();
        let mantissa = i128::try_from(&normalized.unscaled).ok()?;
        Decimal::try_from_i128_with_scale(mantissa, normalized.scale).ok()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<IBig> for ExactDecimal {
    #[inline]
    fn from(value: IBig) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for ExactDecimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(IBig::from(value), 0)
    }
}

impl From<Decimal> for ExactDecimal {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::new(IBig::from(value.mantissa()), value.scale())
    }
}

impl TryFrom<f64> for ExactDecimal {
    type Error = AlgebraError;

    /// Converts a finite float exactly.
    ///
    /// A finite `f64` is `mantissa * 2^exponent`; for a negative exponent
    /// that equals `mantissa * 5^-exponent * 10^exponent`, which is a finite
    /// decimal.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AlgebraError::NonFiniteFloat { value });
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased_exponent = i64::try_from((bits >> 52) & 0x7ff).unwrap_or_default();
        let fraction = bits & 0x000f_ffff_ffff_ffff;
        let (mantissa, exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased_exponent - 1075)
        };

        let magnitude = IBig::from(mantissa);
        let exact = if exponent >= 0 {
            let shift = usize::try_from(exponent).unwrap_or_default();
            Self::new(magnitude * IBig::from(2_u8).pow(shift), 0)
        } else {
            let digits = u32::try_from(-exponent).unwrap_or_default();
            Self::new(magnitude * IBig::from(5_u8).pow(digits as usize), digits)
        };
        let exact = exact.normalized();
        if negative {
            Ok(Self::new(-exact.unscaled, exact.scale))
        } else {
            Ok(exact)
        }
    }
}

impl TryFrom<f32> for ExactDecimal {
    type Error = AlgebraError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

// =============================================================================
// Equality, Ordering, Hashing
// =============================================================================

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.unscaled.cmp(&other.unscaled);
        }
        let zero = IBig::from(0_u8);
        let sign = self.unscaled.cmp(&zero);
        let other_sign = other.unscaled.cmp(&zero);
        if sign != other_sign || sign == Ordering::Equal {
            return sign.cmp(&other_sign);
        }
        // aligning is only needed when the leading digits line up, which
        // bounds the scale difference by the digit counts
        let magnitude = self.leading_position().cmp(&other.leading_position());
        if magnitude != Ordering::Equal {
            return if sign == Ordering::Greater {
                magnitude
            } else {
                magnitude.reverse()
            };
        }
        let (left, right) = self.aligned(other);
        left.cmp(&right)
    }
}

impl Hash for ExactDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl Equivalence for ExactDecimal {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl NumericOrd for ExactDecimal {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// =============================================================================
// Display and Parsing
// =============================================================================

impl fmt::Display for ExactDecimal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.to_string();
        let (sign, digits) = digits
            .strip_prefix('-')
            .map_or(("", digits.as_str()), |rest| ("-", rest));
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(formatter, "{sign}{digits}");
        }
        if digits.len() > scale {
            let (integral, fractional) = digits.split_at(digits.len() - scale);
            write!(formatter, "{sign}{integral}.{fractional}")
        } else {
            write!(formatter, "{sign}0.{digits:0>scale$}")
        }
    }
}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// Exponents beyond [`ExactDecimal::MAX_EXPONENT`] in magnitude are
/// rejected.
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::ExactDecimal;
///
/// let value: ExactDecimal = "-1.25e2".parse().unwrap();
/// assert_eq!(value.to_string(), "-125");
/// assert!("1.2.3".parse::<ExactDecimal>().is_err());
/// ```
impl FromStr for ExactDecimal {
    type Err = AlgebraError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || AlgebraError::InvalidNumber {
            input: input.to_string(),
        };
        let trimmed = input.trim();
        let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
            Some(position) => (&trimmed[..position], &trimmed[position + 1..]),
            None => (trimmed, "0"),
        };
        let exponent: i64 = exponent.parse().map_err(|_| invalid())?;
        if exponent.unsigned_abs() > u64::from(Self::MAX_EXPONENT) {
            return Err(invalid());
        }

        let (negative, unsigned) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (integral, fractional) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if integral.len() + fractional.len() == 0 || !all_digits(integral) || !all_digits(fractional)
        {
            return Err(invalid());
        }

        let magnitude: IBig = format!("{integral}{fractional}")
            .parse()
            .map_err(|_| invalid())?;
        let unscaled = if negative { -magnitude } else { magnitude };
        let fractional_digits = i64::try_from(fractional.len()).map_err(|_| invalid())?;
        let scale = fractional_digits - exponent;
        if scale >= 0 {
            let scale = u32::try_from(scale).map_err(|_| invalid())?;
            Ok(Self::new(unscaled, scale))
        } else {
            let shift = u32::try_from(-scale).map_err(|_| invalid())?;
            Ok(Self::new(unscaled * power_of_ten(shift), 0))
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ExactDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExactDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::hash::DefaultHasher;

    fn exact(text: &str) -> ExactDecimal {
        text.parse().unwrap()
    }

    fn hash_of(value: &ExactDecimal) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case("0", "0")]
    #[case("1.50", "1.50")]
    #[case("-0.05", "-0.05")]
    #[case("+7", "7")]
    #[case("1e3", "1000")]
    #[case("12.5E-3", "0.0125")]
    #[case(".5", "0.5")]
    #[case("5.", "5")]
    fn test_parse_and_display(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(exact(input).to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case(".")]
    #[case("1.2.3")]
    #[case("1e")]
    #[case("abc")]
    #[case("1_000")]
    fn test_parse_rejects_malformed(#[case] input: &str) {
        assert_eq!(
            input.parse::<ExactDecimal>(),
            Err(AlgebraError::InvalidNumber {
                input: input.to_string()
            })
        );
    }

    #[rstest]
    fn test_equal_values_with_different_scales() {
        assert_eq!(exact("1.0"), exact("1.000"));
        assert_eq!(hash_of(&exact("1.0")), hash_of(&exact("1.000")));
        assert_eq!(hash_of(&exact("0.00")), hash_of(&exact("0")));
    }

    #[rstest]
    #[case("1.01", "1.1", Ordering::Less)]
    #[case("-2", "-1.99", Ordering::Less)]
    #[case("100", "99.999", Ordering::Greater)]
    fn test_ordering_aligns_scales(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(exact(left).cmp(&exact(right)), expected);
    }

    #[rstest]
    #[case(0.5, "0.5")]
    #[case(-2.0, "-2")]
    #[case(1024.0, "1024")]
    #[case(0.0, "0")]
    #[case(-0.0, "0")]
    fn test_float_conversion_is_exact(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(ExactDecimal::try_from(value).unwrap(), exact(expected));
    }

    #[rstest]
    fn test_float_conversion_keeps_binary_error() {
        let tenth = ExactDecimal::try_from(0.1_f64).unwrap();
        assert_eq!(
            tenth.to_string(),
            "0.1000000000000000055511151231257827021181583404541015625"
        );
    }

    #[rstest]
    fn test_float_conversion_rejects_non_finite() {
        assert_eq!(
            ExactDecimal::try_from(f64::NAN).map_err(|error| error.to_string()),
            Err("NaN has no exact decimal representation".to_string())
        );
        assert!(ExactDecimal::try_from(f64::NEG_INFINITY).is_err());
    }

    #[rstest]
    fn test_decimal_round_trip() {
        let decimal = dec!(-12.340);
        let converted = ExactDecimal::from(decimal);
        assert_eq!(converted, exact("-12.34"));
        assert_eq!(converted.to_decimal(), Some(dec!(-12.34)));
    }

    #[rstest]
    fn test_to_decimal_rejects_out_of_range() {
        assert_eq!(exact("1e40").to_decimal(), None);
        assert_eq!(exact("1e-40").to_decimal(), None);
    }

    #[rstest]
    #[case("1e2000000")]
    #[case("1e-2000000")]
    #[case("-2.5E+4097")]
    #[case("7e-99999999999")]
    fn test_parse_rejects_huge_exponent(#[case] input: &str) {
        assert_eq!(
            input.parse::<ExactDecimal>(),
            Err(AlgebraError::InvalidNumber {
                input: input.to_string()
            })
        );
    }

    #[rstest]
    fn test_parse_accepts_exponent_at_the_bound() {
        assert_eq!(exact("1e4096").scale(), 0);
        assert_eq!(exact("1e-4096").scale(), 4096);
    }

    #[rstest]
    #[case(ExactDecimal::new(IBig::from(1), u32::MAX), ExactDecimal::from(0_i64), Ordering::Greater)]
    #[case(ExactDecimal::new(IBig::from(1), u32::MAX), ExactDecimal::new(IBig::from(1), u32::MAX - 1), Ordering::Less)]
    #[case(ExactDecimal::new(IBig::from(-1), u32::MAX), ExactDecimal::new(IBig::from(-1), 3), Ordering::Greater)]
    #[case(ExactDecimal::new(IBig::from(-5), 1), ExactDecimal::new(IBig::from(7), u32::MAX), Ordering::Less)]
    #[case(ExactDecimal::new(IBig::from(15), 1), ExactDecimal::new(IBig::from(150), 2), Ordering::Equal)]
    #[case(ExactDecimal::new(IBig::from(-999), 3), ExactDecimal::new(IBig::from(-1), 0), Ordering::Greater)]
    fn test_ordering_of_distant_scales(
        #[case] left: ExactDecimal,
        #[case] right: ExactDecimal,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.cmp(&right), expected);
        assert_eq!(right.cmp(&left), expected.reverse());
    }

    #[rstest]
    fn test_is_integral() {
        assert!(exact("3.000").is_integral());
        assert!(!exact("3.001").is_integral());
    }
}
