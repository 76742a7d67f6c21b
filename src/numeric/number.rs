//! The numeric tower.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use ibig::IBig;
use rust_decimal::Decimal;

use super::{Equivalence, ExactDecimal, NumericOrd};
use crate::error::AlgebraError;

/// A number in one of several concrete representations.
///
/// Values of different representations are compared mathematically: a
/// [`Number`] built from `2_i32`, one built from `IBig::from(2)` and one
/// built from the decimal `2.0` are all equal, hash identically and sort
/// next to each other.
///
/// # Promotion
///
/// ```text
/// Integer ──► BigInteger ──┐
///                          ├──► BigDecimal (ExactDecimal)
/// Decimal ─────────────────┤
/// Float (finite) ──────────┘
/// ```
///
/// Non-finite floats sit outside the promotion: `-inf` is below every finite
/// value, `+inf` above, and `NaN` above `+inf` and equal to itself.
///
/// # Examples
///
/// ```rust
/// use ibig::IBig;
/// use rust_decimal::Decimal;
/// use seqalg::numeric::Number;
///
/// let values = [
///     Number::from(2_i32),
///     Number::from(IBig::from(2)),
///     Number::from(Decimal::new(200, 2)),
///     Number::from(2.0_f64),
/// ];
/// assert!(values.iter().all(|value| *value == values[0]));
/// assert!(Number::from(f64::NAN) > Number::from(f64::INFINITY));
/// ```
#[derive(Debug, Clone)]
pub enum Number {
    /// A fixed-width integer.
    Integer(i64),
    /// An arbitrary-precision integer.
    BigInteger(IBig),
    /// A fixed-precision (96-bit mantissa) decimal.
    Decimal(Decimal),
    /// An arbitrary-precision decimal.
    BigDecimal(ExactDecimal),
    /// A binary floating point number.
    Float(f64),
}

/// The representation a [`Number`] is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
    /// See [`Number::Integer`].
    Integer,
    /// See [`Number::BigInteger`].
    BigInteger,
    /// See [`Number::Decimal`].
    Decimal,
    /// See [`Number::BigDecimal`].
    BigDecimal,
    /// See [`Number::Float`].
    Float,
}

/// A number's position on the extended real line.
///
/// The derived order ranks variants first, which is exactly the order of
/// the extended reals with `NaN` appended.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Extended {
    NegativeInfinity,
    Finite(ExactDecimal),
    PositiveInfinity,
    NaN,
}

impl Number {
    /// Returns the representation of this number.
    pub const fn kind(&self) -> NumberKind {
        match self {
            Self::Integer(_) => NumberKind::Integer,
            Self::BigInteger(_) => NumberKind::BigInteger,
            Self::Decimal(_) => NumberKind::Decimal,
            Self::BigDecimal(_) => NumberKind::BigDecimal,
            Self::Float(_) => NumberKind::Float,
        }
    }

    /// Returns the exact decimal value, or `None` for an infinite or `NaN`
    /// float.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::numeric::Number;
    ///
    /// assert_eq!(Number::from(0.25_f64).to_exact().unwrap().to_string(), "0.25");
    /// assert!(Number::from(f64::INFINITY).to_exact().is_none());
    /// ```
    pub fn to_exact(&self) -> Option<ExactDecimal> {
        match self {
            Self::Integer(value) => Some(ExactDecimal::from(*value)),
            Self::BigInteger(value) => Some(ExactDecimal::from(value.clone())),
            Self::Decimal(value) => Some(ExactDecimal::from(*value)),
            Self::BigDecimal(value) => Some(value.clone()),
            Self::Float(value) => ExactDecimal::try_from(*value).ok(),
        }
    }

    /// Returns `true` if the value is a whole number.
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Integer(_) | Self::BigInteger(_) => true,
            Self::Decimal(value) => value.fract().is_zero(),
            Self::BigDecimal(value) => value.is_integral(),
            Self::Float(value) => value.is_finite() && value.fract() == 0.0,
        }
    }

    fn extended(&self) -> Extended {
        match self {
            Self::Float(value) if value.is_nan() => Extended::NaN,
            Self::Float(value) if *value == f64::INFINITY => Extended::PositiveInfinity,
            Self::Float(value) if *value == f64::NEG_INFINITY => Extended::NegativeInfinity,
            other => other.to_exact().map_or(Extended::NaN, Extended::Finite),
        }
    }

    fn as_big_integer(&self) -> Option<IBig> {
        match self {
            Self::Integer(value) => Some(IBig::from(*value)),
            Self::BigInteger(value) => Some(value.clone()),
            _ => None,
        }
    }
}

// =============================================================================
// Equality, Ordering, Hashing
// =============================================================================

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Decimal(left), Self::Decimal(right)) => left.cmp(right),
            (Self::Integer(left), Self::Decimal(right)) => Decimal::from(*left).cmp(right),
            (Self::Decimal(left), Self::Integer(right)) => left.cmp(&Decimal::from(*right)),
            (Self::Float(left), Self::Float(right)) => left.numeric_cmp(right),
            _ => match (self.as_big_integer(), other.as_big_integer()) {
                (Some(left), Some(right)) => left.cmp(&right),
                _ => self.extended().cmp(&other.extended()),
            },
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl Hash for Number {
    /// Hashes the normalized exact value, so numerically equal numbers of
    /// different representations hash identically.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.extended() {
            Extended::Finite(exact) => exact.normalized().hash(state),
            special => std::mem::discriminant(&special).hash(state),
        }
    }
}

impl Equivalence for Number {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        Some(<Self as NumericOrd>::numeric_cmp)
    }
}

impl NumericOrd for Number {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_small_integer {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Number {
                #[inline]
                fn from(value: $type) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_wide_integer {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Number {
                fn from(value: $type) -> Self {
                    i64::try_from(value).map_or_else(
                        |_| Self::BigInteger(IBig::from(value)),
                        Self::Integer,
                    )
                }
            }
        )*
    };
}

impl_from_small_integer!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide_integer!(i128, isize, u64, u128, usize);

impl From<IBig> for Number {
    #[inline]
    fn from(value: IBig) -> Self {
        Self::BigInteger(value)
    }
}

impl From<Decimal> for Number {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<ExactDecimal> for Number {
    #[inline]
    fn from(value: ExactDecimal) -> Self {
        Self::BigDecimal(value)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

// =============================================================================
// Display and Parsing
// =============================================================================

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::BigInteger(value) => write!(formatter, "{value}"),
            Self::Decimal(value) => write!(formatter, "{value}"),
            Self::BigDecimal(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
        }
    }
}

/// Parses the narrowest representation that holds the literal exactly.
///
/// Integers become [`Number::Integer`] or [`Number::BigInteger`]; decimals
/// (including exponent notation) become [`Number::Decimal`] when they fit,
/// [`Number::BigDecimal`] otherwise; `inf`, `-inf`, `infinity` and `NaN`
/// become [`Number::Float`].
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::{Number, NumberKind};
///
/// assert_eq!("42".parse::<Number>().unwrap().kind(), NumberKind::Integer);
/// assert_eq!("1e30".parse::<Number>().unwrap().kind(), NumberKind::BigInteger);
/// assert_eq!("1.5".parse::<Number>().unwrap().kind(), NumberKind::Decimal);
/// assert_eq!("1e-40".parse::<Number>().unwrap().kind(), NumberKind::BigDecimal);
/// assert_eq!("-inf".parse::<Number>().unwrap().kind(), NumberKind::Float);
/// ```
impl FromStr for Number {
    type Err = AlgebraError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "nan" => return Ok(Self::Float(f64::NAN)),
            "inf" | "+inf" | "infinity" | "+infinity" => return Ok(Self::Float(f64::INFINITY)),
            "-inf" | "-infinity" => return Ok(Self::Float(f64::NEG_INFINITY)),
            _ => {}
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Integer(value));
        }

        let exact: ExactDecimal = input.parse()?;
        if exact.is_integral() {
            let normalized = exact.normalized();
            let integer = normalized.unscaled().clone();
            return Ok(i64::try_from(&integer).map_or(Self::BigInteger(integer), Self::Integer));
        }
        Ok(exact
            .to_decimal()
            .map_or_else(|| Self::BigDecimal(exact.clone()), Self::Decimal))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
struct NumberVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Number, E> {
        Ok(Number::from(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Number, E> {
        Ok(Number::from(value))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Number, E> {
        Ok(Number::from(value))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Number, E> {
        value.parse().map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

static_assertions::assert_impl_all!(Number: Send, Sync, Clone, Eq, Ord, Hash);
static_assertions::assert_impl_all!(ExactDecimal: Send, Sync, Clone, Eq, Ord, Hash);
