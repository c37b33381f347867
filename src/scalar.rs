use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Pow, ToPrimitive, Zero};

/// A numeric value: either an exact integer or a float.
///
/// Integer arithmetic stays integral (wrapping on overflow) except for
/// division, which always promotes to float. Float payloads may be NaN or
/// infinite, and every comparison involving NaN is false.
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn float(value: f64) -> Self {
        Self::Float(value)
    }

    pub fn nan() -> Self {
        Self::Float(f64::NAN)
    }

    pub fn infinity() -> Self {
        Self::Float(f64::INFINITY)
    }

    pub fn negative_infinity() -> Self {
        Self::Float(f64::NEG_INFINITY)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Float(f) => f.is_nan(),
        }
    }

    /// True for both positive and negative infinity.
    pub fn is_infinity(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Float(f) => f.is_infinite(),
        }
    }

    /// Widens to `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.wrapping_add(b)),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }

    pub fn subtract(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.wrapping_sub(b)),
            (a, b) => Self::Float(a.as_f64() - b.as_f64()),
        }
    }

    pub fn multiply(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.wrapping_mul(b)),
            (a, b) => Self::Float(a.as_f64() * b.as_f64()),
        }
    }

    /// Always carried out in floating point, so `1 / 0` is `Infinity` and
    /// `0 / 0` is `NaN`.
    pub fn divide(self, other: Self) -> Self {
        Self::Float(self.as_f64() / other.as_f64())
    }

    /// Floating-point exponentiation, regardless of operand tags.
    pub fn power(self, exponent: Self) -> Self {
        Self::Float(self.as_f64().powf(exponent.as_f64()))
    }

    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Less)
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }

    /// NaN and zero are falsy.
    pub fn to_boolean(&self) -> bool {
        match *self {
            Self::Int(i) => i != 0,
            Self::Float(f) => !f.is_nan() && f != 0.0,
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_nan() => f.write_str("NaN"),
            Self::Float(x) if x == f64::INFINITY => f.write_str("Infinity"),
            Self::Float(x) if x == f64::NEG_INFINITY => f.write_str("-Infinity"),
            Self::Float(x) if x == 0.0 => f.write_str("0"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        Scalar::add(self, rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div for Scalar {
    type Output = Scalar;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        match self {
            Self::Int(i) => Self::Int(i.wrapping_neg()),
            Self::Float(f) => Self::Float(-f),
        }
    }
}

impl Pow<Scalar> for Scalar {
    type Output = Scalar;

    fn pow(self, rhs: Scalar) -> Self::Output {
        self.power(rhs)
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self::Int(0)
    }

    fn is_zero(&self) -> bool {
        self.equals(&Self::Int(0))
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self::Int(1)
    }
}

impl ToPrimitive for Scalar {
    fn to_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            Self::Float(f) => f.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match *self {
            Self::Int(i) => i.to_u64(),
            Self::Float(f) => f.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}
