//! A rational data type kept in canonical form: always reduced to lowest terms, with a strictly
//! positive denominator, so the sign lives on the numerator.
//!
//! Construction accepts the whole range of [`BaseInt`]. Pairs whose canonical form does not fit,
//! such as `(BaseInt::MIN, -1)` or an odd numerator over `BaseInt::MIN`, are rejected with
//! [`FractionError::InvalidValue`].
//!
//! Arithmetic is done directly on [`BaseInt`]. Cross products are not checked for overflow: debug
//! builds panic and release builds wrap, the same as the underlying integer type. Keep operands
//! well inside the range of [`BaseInt`] if that matters.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{Float, Num, One, Signed, Zero};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

use crate::decimal;
use crate::parsing::{self, ParsePolicy};

/// The integer type used for both the numerator and the denominator.
pub type BaseInt = i64;

/// A fraction in lowest terms with a positive denominator.
///
/// Because every value is canonical, two fractions are equal exactly when their fields are equal,
/// which is what the derived `PartialEq` and `Hash` compare.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Fraction {
    numerator: BaseInt,
    denominator: BaseInt,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractionError {
    #[error("Denominator cannot be zero")]
    DivisionByZero,
    #[error("Invalid fraction format: {0:?}")]
    InvalidFormat(String),
    #[error("Cannot convert {0} to a fraction")]
    InvalidValue(f64),
}

impl Fraction {
    pub const ZERO: Fraction = Fraction::from_integer(0);

    pub const ONE: Fraction = Fraction::from_integer(1);

    pub const NEG_ONE: Fraction = Fraction::from_integer(-1);

    pub const ONE_HALF: Fraction = Fraction {
        numerator: 1,
        denominator: 2,
    };

    /// Creates a fraction from a numerator and denominator, reducing it to lowest terms.
    pub fn new(numerator: BaseInt, denominator: BaseInt) -> Result<Self, FractionError> {
        if denominator == 0 {
            tracing::debug!(numerator, "rejected zero denominator");
            return Err(FractionError::DivisionByZero);
        }
        Self::reduce(numerator, denominator).ok_or_else(|| {
            tracing::debug!(numerator, denominator, "canonical form out of range");
            FractionError::InvalidValue(numerator as f64 / denominator as f64)
        })
    }

    /// Creates the fraction `n/1`.
    pub const fn from_integer(n: BaseInt) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Parses `"A/B"` using [`ParsePolicy::Strict`].
    pub fn parse(s: &str) -> Result<Self, FractionError> {
        Self::parse_with(s, ParsePolicy::Strict)
    }

    /// Parses `"A/B"`, reading each side according to `policy`.
    pub fn parse_with(s: &str, policy: ParsePolicy) -> Result<Self, FractionError> {
        let (numerator, denominator) = parsing::fraction_parts(s, policy)?;
        Self::new(numerator, denominator)
    }

    /// Converts a finite float using the digits of its shortest round-trip decimal form, so `0.4`
    /// becomes `2/5`. Inputs whose digits don't fit in [`BaseInt`] are rejected.
    pub fn from_float<T: Float + Display>(value: T) -> Result<Self, FractionError> {
        let (numerator, denominator) = decimal::to_ratio(value)?;
        Self::new(numerator, denominator)
    }

    /// Reduces by the GCD and moves the sign onto the numerator. Every constructor and every
    /// arithmetic result goes through here. `denominator` must be nonzero. Returns `None` when the
    /// sign flip leaves the range of [`BaseInt`].
    fn reduce(numerator: BaseInt, denominator: BaseInt) -> Option<Self> {
        let g = Self::gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
        let (mut n, mut d) = (numerator as i128 / g, denominator as i128 / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        let (n, d) = (BaseInt::try_from(n).ok()?, BaseInt::try_from(d).ok()?);
        tracing::trace!(numerator, denominator, n, d, "normalized");
        Some(Self {
            numerator: n,
            denominator: d,
        })
    }

    /// [`Fraction::reduce`] for arithmetic results, where leaving the range is an overflow.
    fn normalize(numerator: BaseInt, denominator: BaseInt) -> Self {
        match Self::reduce(numerator, denominator) {
            Some(f) => f,
            None => panic!("{numerator}/{denominator} overflows when normalized"),
        }
    }

    pub const fn gcd(p: u64, q: u64) -> u64 {
        let mut p = p;
        let mut q = q;
        while q != 0 {
            let r = p % q;
            p = q;
            q = r;
        }

        p
    }

    /// The numerator. Carries the sign.
    pub const fn numer(&self) -> BaseInt {
        self.numerator
    }

    /// The denominator. Always positive.
    pub const fn denom(&self) -> BaseInt {
        self.denominator
    }

    pub const fn into_parts(self) -> (BaseInt, BaseInt) {
        (self.numerator, self.denominator)
    }

    /// Adds anything that can be turned into a fraction, without touching `self`.
    pub fn try_add<T: IntoFraction>(&self, other: T) -> Result<Self, FractionError> {
        Ok(*self + other.into_fraction()?)
    }

    /// Adds `value` and stores the sum in `self`, returning it. `self` is left as it was if
    /// `value` cannot be converted.
    pub fn add_in_place<T: IntoFraction>(&mut self, value: T) -> Result<Self, FractionError> {
        let result = self.try_add(value)?;
        tracing::trace!(before = %self, after = %result, "add in place");
        *self = result;
        Ok(result)
    }

    pub fn add_integer(&self, n: BaseInt) -> Self {
        *self + Self::from_integer(n)
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, rhs: Self) -> Result<Self, FractionError> {
        if rhs.is_zero() {
            Err(FractionError::DivisionByZero)
        } else {
            Ok(*self / rhs)
        }
    }

    /// The reciprocal `d/n`.
    pub fn recip(&self) -> Result<Self, FractionError> {
        Self::new(self.denominator, self.numerator)
    }

    /// Rounds toward negative infinity.
    pub const fn floor(&self) -> BaseInt {
        self.numerator.div_euclid(self.denominator)
    }

    /// Rounds toward zero.
    pub const fn trunc(&self) -> BaseInt {
        self.numerator / self.denominator
    }

    fn cross_cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.cross_cmp(other) == Ordering::Less
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.cross_cmp(other) == Ordering::Greater
    }

    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.less_than(other) || self.equals(other)
    }

    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.greater_than(other) || self.equals(other)
    }

    /// Field-wise equality, which is value equality since both sides are canonical.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Like [`Fraction::equals`], but a missing value is never equal.
    pub fn equals_opt(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| self.equals(o))
    }

    /// `|n| >= d`: the magnitude is at least one.
    pub fn is_improper(&self) -> bool {
        self.numerator.unsigned_abs() >= self.denominator.unsigned_abs()
    }

    /// `|n| < d`: the magnitude is below one.
    pub fn is_proper(&self) -> bool {
        self.numerator.unsigned_abs() < self.denominator.unsigned_abs()
    }

    /// Whether the value is a whole number.
    pub fn is_apparent(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// Whether the reduced numerator is ±1.
    pub fn is_unitary(&self) -> bool {
        self.numerator.unsigned_abs() == 1
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Anything that can stand on the right-hand side of [`Fraction::try_add`] and
/// [`Fraction::add_in_place`].
pub trait IntoFraction {
    fn into_fraction(self) -> Result<Fraction, FractionError>;
}

impl IntoFraction for Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(self)
    }
}

impl IntoFraction for &Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(*self)
    }
}

impl IntoFraction for &str {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::parse(self)
    }
}

impl IntoFraction for &String {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::parse(self)
    }
}

impl IntoFraction for f64 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::from_float(self)
    }
}

impl IntoFraction for f32 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::from_float(self)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(n: $t) -> Self {
                    Self::from_integer(BaseInt::from(n))
                }
            }

            impl IntoFraction for $t {
                fn into_fraction(self) -> Result<Fraction, FractionError> {
                    Ok(Fraction::from(self))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_float(value)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_float(value)
    }
}

impl TryFrom<&str> for Fraction {
    type Error = FractionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        (value.numerator as f64) / (value.denominator as f64)
    }
}

impl From<Fraction> for f32 {
    fn from(value: Fraction) -> Self {
        (value.numerator as f32) / (value.denominator as f32)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cross_cmp(other)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::normalize(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Add<BaseInt> for Fraction {
    type Output = Self;

    fn add(self, rhs: BaseInt) -> Self::Output {
        self.add_integer(rhs)
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<BaseInt> for Fraction {
    fn add_assign(&mut self, rhs: BaseInt) {
        *self = self.add_integer(rhs);
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::normalize(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::normalize(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Fraction {
    type Output = Self;

    /// Panics on a zero divisor, like integer division. Use [`Fraction::checked_div`] to get an
    /// error instead.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "Cannot divide {} by zero", self);
        Self::normalize(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }
}

impl DivAssign for Fraction {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Rem for Fraction {
    type Output = Self;

    /// Truncated remainder: `self - rhs * trunc(self / rhs)`, with the sign of `self`.
    fn rem(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "Cannot take {} modulo zero", self);
        let q = (self.numerator * rhs.denominator) / (self.denominator * rhs.numerator);
        Self::normalize(
            self.numerator * rhs.denominator - q * rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl Num for Fraction {
    type FromStrRadixErr = FractionError;

    /// Accepts either `"A/B"` or a bare integer, both in the given radix.
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        let (numerator, denominator) = parsing::radix_parts(str, radix)?;
        Self::new(numerator, denominator)
    }
}

impl Signed for Fraction {
    fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::ZERO
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl AbsDiffEq for Fraction {
    type Epsilon = Self;

    fn default_epsilon() -> Self::Epsilon {
        Self::ZERO
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (*self - *other).abs() <= epsilon
    }
}

impl RelativeEq for Fraction {
    fn default_max_relative() -> Self::Epsilon {
        Self::ZERO
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        if self.abs_diff_eq(other, epsilon) {
            return true;
        }
        let largest = Ord::max(self.abs(), other.abs());
        (*self - *other).abs() <= largest * max_relative
    }
}

// Fractions are exact, so there is no notion of units in the last place: ulps are ignored.
impl UlpsEq for Fraction {
    fn default_max_ulps() -> u32 {
        0
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, _max_ulps: u32) -> bool {
        self.abs_diff_eq(other, epsilon)
    }
}

impl Debug for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frac!({} / {})", self.numerator, self.denominator)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Fraction;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Fraction {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Fraction {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Fraction::parse(&text).map_err(de::Error::custom)
        }
    }
}

/// Builds a [`Fraction`] from a literal: `frac!(3 / 4)` or `frac!(2)`. Panics if the denominator
/// is zero.
#[macro_export]
macro_rules! frac {
    ($num:literal / $denom:expr) => {{
        let d = $denom;
        let n = $num;
        match $crate::fract::Fraction::new(n, d) {
            Ok(f) => f,
            Err(e) => panic!("Invalid fraction {}/{}: {}", n, d, e),
        }
    }};
    ($num:expr) => {
        $crate::fract::Fraction::from_integer($num)
    };
}
