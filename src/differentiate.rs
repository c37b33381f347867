use crate::{BinaryOperator, Expression, Function, Scalar};

use BinaryOperator::{Add, Div, Mul, Pow, Sub};

impl Expression {
    /// Builds the symbolic derivative with respect to `variable`.
    ///
    /// The result is a fresh tree and is not simplified. Two cases are not
    /// covered and differentiate to `0`: a power whose exponent depends on a
    /// variable, and `tan`.
    pub fn differentiate(&self, variable: &str) -> Expression {
        match self {
            Self::Variable(name) => Self::constant(if name == variable { 1 } else { 0 }),
            Self::Constant(_) => Self::constant(0),
            Self::BinaryOp(op, lhs, rhs) => differentiate_binary(*op, lhs, rhs, variable),
            Self::FunctionCall(function, argument) => {
                differentiate_call(*function, argument, variable)
            }
        }
    }
}

fn differentiate_binary(
    op: BinaryOperator,
    lhs: &Expression,
    rhs: &Expression,
    variable: &str,
) -> Expression {
    match op {
        Add | Sub => Expression::binary(
            op,
            lhs.differentiate(variable),
            rhs.differentiate(variable),
        ),
        // (fg)' = f'g + fg'
        Mul => Expression::binary(
            Add,
            Expression::binary(Mul, lhs.differentiate(variable), rhs.clone()),
            Expression::binary(Mul, lhs.clone(), rhs.differentiate(variable)),
        ),
        // (f/g)' = (f'g - fg') / g^2
        Div => {
            let numerator = Expression::binary(
                Sub,
                Expression::binary(Mul, lhs.differentiate(variable), rhs.clone()),
                Expression::binary(Mul, lhs.clone(), rhs.differentiate(variable)),
            );
            let denominator = Expression::binary(Pow, rhs.clone(), Expression::constant(2));
            Expression::binary(Div, numerator, denominator)
        }
        // (f^n)' = n * f^(n - 1) * f'
        Pow if rhs.is_constant() => {
            let reduced = match rhs.as_constant() {
                Some(n) => Expression::Constant(n.subtract(Scalar::Int(1))),
                None => Expression::binary(Sub, rhs.clone(), Expression::constant(1)),
            };
            let coefficient =
                Expression::binary(Mul, rhs.clone(), Expression::binary(Pow, lhs.clone(), reduced));
            Expression::binary(Mul, coefficient, lhs.differentiate(variable))
        }
        Pow => {
            log::debug!("derivative of a variable exponent is not supported, using 0");
            Expression::constant(0)
        }
    }
}

fn differentiate_call(function: Function, argument: &Expression, variable: &str) -> Expression {
    let outer = match function {
        Function::Sin => argument.clone().cos(),
        Function::Cos => Expression::binary(Mul, Expression::constant(-1), argument.clone().sin()),
        Function::Exp => argument.clone().exp(),
        Function::Log => Expression::binary(Div, Expression::constant(1), argument.clone()),
        Function::Sqrt => Expression::binary(
            Div,
            Expression::constant(1),
            Expression::binary(Mul, Expression::constant(2), argument.clone().sqrt()),
        ),
        Function::Tan => {
            log::debug!("derivative of tan is not supported, using 0");
            return Expression::constant(0);
        }
    };
    Expression::binary(Mul, outer, argument.differentiate(variable))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn x() -> Expression {
        Expression::variable("x")
    }

    fn c(value: i32) -> Expression {
        Expression::constant(value)
    }

    #[test]
    fn leaves() {
        assert_eq!(c(7).differentiate("x").render(), "0");
        assert_eq!(Expression::constant(2.5).differentiate("x").render(), "0");
        assert_eq!(x().differentiate("x").render(), "1");
        assert_eq!(Expression::variable("y").differentiate("x").render(), "0");
    }

    #[test]
    fn sum_and_difference() {
        let y = Expression::variable("y");
        assert_eq!((x() + y.clone()).differentiate("x").render(), "1 + 0");
        assert_eq!((x() - y).differentiate("x").render(), "1 - 0");
    }

    #[test]
    fn product_rule() {
        let d = (x() * x()).differentiate("x");
        assert_eq!(d.render(), "1 * x + x * 1");
        assert_eq!(d.evaluate(&[("x", Scalar::int(3))]), Scalar::int(6));
    }

    #[test]
    fn quotient_rule() {
        let d = (c(1) / x()).differentiate("x");
        assert_eq!(d.render(), "0 * x - 1 * 1 / x ^ 2");
        assert_eq!(d.evaluate(&[("x", Scalar::int(2))]), Scalar::float(-0.25));
    }

    #[test]
    fn power_rule() {
        let d = x().pow(c(3)).differentiate("x");
        assert_eq!(d.render(), "3 * x ^ 2 * 1");
        assert_eq!(d.evaluate(&[("x", Scalar::int(2))]), Scalar::int(12));

        // Constant exponent that is not a literal.
        let d = x().pow(c(1) + c(2)).differentiate("x");
        assert_eq!(d.render(), "1 + 2 * x ^ 1 + 2 - 1 * 1");
        assert_eq!(d.evaluate(&[("x", Scalar::int(2))]), Scalar::int(12));
    }

    #[test]
    fn variable_exponent_is_unsupported() {
        assert_eq!(c(2).pow(x()).differentiate("x"), c(0));
        assert_eq!(x().pow(x()).differentiate("x"), c(0));
    }

    #[test]
    fn chain_rule() {
        let inner = || x() * c(2);
        let at = [("x", Scalar::float(0.3))];
        let u = 0.6f64;

        let slope = |expr: Expression| expr.differentiate("x").evaluate(&at).as_f64();

        assert_eq!(
            inner().sin().differentiate("x").render(),
            "cos(x * 2) * 1 * 2 + x * 0"
        );
        assert_relative_eq!(slope(inner().sin()), 2.0 * u.cos(), epsilon = 1e-12);
        assert_relative_eq!(slope(inner().cos()), -2.0 * u.sin(), epsilon = 1e-12);
        assert_relative_eq!(slope(inner().exp()), 2.0 * u.exp(), epsilon = 1e-12);
        assert_relative_eq!(slope(inner().log()), 2.0 / u, epsilon = 1e-12);
        assert_relative_eq!(slope(inner().sqrt()), 1.0 / u.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn chain_rule_shapes() {
        assert_eq!(x().cos().differentiate("x").render(), "-1 * sin(x) * 1");
        assert_eq!(x().log().differentiate("x").render(), "1 / x * 1");
        assert_eq!(x().sqrt().differentiate("x").render(), "1 / 2 * sqrt(x) * 1");
    }

    #[test]
    fn tan_is_unsupported() {
        assert_eq!(x().tan().differentiate("x"), c(0));
    }

    #[test]
    fn input_is_untouched() {
        let expr = x() * x().sin();
        let before = expr.clone();
        let _ = expr.differentiate("x");
        assert_eq!(expr, before);
    }
}
