//! Scalar-level math library.
//!
//! Transcendental and rounding functions widen their input to `f64` and
//! return a float-tagged [`Scalar`]. `abs` and `sign` keep integers integral.

use crate::Scalar;

pub mod constants {
    pub const PI: f64 = std::f64::consts::PI;
    pub const E: f64 = std::f64::consts::E;
    pub const LN2: f64 = std::f64::consts::LN_2;
    pub const LN10: f64 = std::f64::consts::LN_10;
    pub const SQRT2: f64 = std::f64::consts::SQRT_2;
    pub const SQRT1_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
}

fn float_op(op: fn(f64) -> f64, x: Scalar) -> Scalar {
    Scalar::Float(op(x.as_f64()))
}

pub fn sin(x: Scalar) -> Scalar {
    float_op(f64::sin, x)
}

pub fn cos(x: Scalar) -> Scalar {
    float_op(f64::cos, x)
}

pub fn tan(x: Scalar) -> Scalar {
    float_op(f64::tan, x)
}

pub fn asin(x: Scalar) -> Scalar {
    float_op(f64::asin, x)
}

pub fn acos(x: Scalar) -> Scalar {
    float_op(f64::acos, x)
}

pub fn atan(x: Scalar) -> Scalar {
    float_op(f64::atan, x)
}

pub fn atan2(y: Scalar, x: Scalar) -> Scalar {
    Scalar::Float(y.as_f64().atan2(x.as_f64()))
}

pub fn sinh(x: Scalar) -> Scalar {
    float_op(f64::sinh, x)
}

pub fn cosh(x: Scalar) -> Scalar {
    float_op(f64::cosh, x)
}

pub fn tanh(x: Scalar) -> Scalar {
    float_op(f64::tanh, x)
}

pub fn exp(x: Scalar) -> Scalar {
    float_op(f64::exp, x)
}

/// Natural logarithm.
pub fn log(x: Scalar) -> Scalar {
    float_op(f64::ln, x)
}

pub fn log10(x: Scalar) -> Scalar {
    float_op(f64::log10, x)
}

pub fn log2(x: Scalar) -> Scalar {
    float_op(f64::log2, x)
}

pub fn log_base(x: Scalar, base: Scalar) -> Scalar {
    Scalar::Float(x.as_f64().ln() / base.as_f64().ln())
}

pub fn pow(base: Scalar, exponent: Scalar) -> Scalar {
    base.power(exponent)
}

pub fn sqrt(x: Scalar) -> Scalar {
    float_op(f64::sqrt, x)
}

pub fn cbrt(x: Scalar) -> Scalar {
    float_op(f64::cbrt, x)
}

pub fn ceil(x: Scalar) -> Scalar {
    float_op(f64::ceil, x)
}

pub fn floor(x: Scalar) -> Scalar {
    float_op(f64::floor, x)
}

pub fn round(x: Scalar) -> Scalar {
    float_op(f64::round, x)
}

pub fn trunc(x: Scalar) -> Scalar {
    float_op(f64::trunc, x)
}

pub fn abs(x: Scalar) -> Scalar {
    match x {
        Scalar::Int(i) => Scalar::Int(i.wrapping_abs()),
        Scalar::Float(f) => Scalar::Float(f.abs()),
    }
}

/// `-1`, `0` or `1` as an integer. NaN has sign `0`.
pub fn sign(x: Scalar) -> Scalar {
    let zero = Scalar::Int(0);
    if x.greater_than(&zero) {
        Scalar::Int(1)
    } else if x.less_than(&zero) {
        Scalar::Int(-1)
    } else {
        zero
    }
}

/// Returns `b` unless `a < b`. A NaN `a` therefore loses to `b`.
pub fn min(a: Scalar, b: Scalar) -> Scalar {
    if a.less_than(&b) {
        a
    } else {
        b
    }
}

/// Returns `b` unless `a > b`.
pub fn max(a: Scalar, b: Scalar) -> Scalar {
    if a.greater_than(&b) {
        a
    } else {
        b
    }
}

/// Smallest value in `values`, or NaN if empty.
pub fn min_of(values: &[Scalar]) -> Scalar {
    let Some((first, rest)) = values.split_first() else {
        return Scalar::nan();
    };
    rest.iter()
        .fold(*first, |acc, v| if v.less_than(&acc) { *v } else { acc })
}

/// Largest value in `values`, or NaN if empty.
pub fn max_of(values: &[Scalar]) -> Scalar {
    let Some((first, rest)) = values.split_first() else {
        return Scalar::nan();
    };
    rest.iter()
        .fold(*first, |acc, v| if v.greater_than(&acc) { *v } else { acc })
}

/// Uniform float in `[0, 1)`.
pub fn random() -> Scalar {
    Scalar::Float(rand::random::<f64>())
}

/// Uniform float in `[min, max)`. Bounds are widened to `f64` and may be
/// given in either order.
pub fn random_range(min: Scalar, max: Scalar) -> Scalar {
    let (lo, hi) = (min.as_f64(), max.as_f64());
    Scalar::Float(lo + rand::random::<f64>() * (hi - lo))
}
