use crate::{Bindings, Environment, Expression, Scalar};

#[cfg(feature = "rayon")]
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

impl Expression {
    pub fn evaluate_without_vars(&self) -> Scalar {
        self.evaluate(&Bindings::new())
    }

    /// Calculates the value of the expression.
    ///
    /// Variables missing from `bindings` evaluate to `0`.
    pub fn evaluate<E: Environment + ?Sized>(&self, bindings: &E) -> Scalar {
        match self {
            Self::Variable(name) => bindings.lookup(name).unwrap_or_else(|| {
                log::debug!("unbound variable `{name}` evaluates to 0");
                Scalar::Int(0)
            }),
            Self::Constant(value) => *value,
            Self::BinaryOp(op, lhs, rhs) => {
                let lhs = lhs.evaluate(bindings);
                let rhs = rhs.evaluate(bindings);
                op.apply(lhs, rhs)
            }
            Self::FunctionCall(function, argument) => function.apply(argument.evaluate(bindings)),
        }
    }

    /// Evaluates the expression once per environment, in order.
    pub fn evaluate_batch<E: Environment + Sync>(&self, environments: &[E]) -> Vec<Scalar> {
        #[cfg(feature = "rayon")]
        {
            environments
                .par_iter()
                .map(|bindings| self.evaluate(bindings))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            environments
                .iter()
                .map(|bindings| self.evaluate(bindings))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn variable_lookup() {
        let x = Expression::variable("x");
        assert_eq!(x.evaluate(&[("x", Scalar::int(42))]), Scalar::int(42));
        assert_eq!(x.evaluate(&Bindings::new()), Scalar::int(0));
        assert!(x.evaluate_without_vars().is_int());
    }

    #[test]
    fn first_binding_wins() {
        let bindings = Bindings::new().with("x", 1).with("x", 2);
        assert_eq!(Expression::variable("x").evaluate(&bindings), Scalar::int(1));
    }

    #[test]
    fn arithmetic() {
        let x = Expression::variable("x");
        let y = Expression::variable("y");
        let bindings = Bindings::new().with("x", 6).with("y", 4);

        let sum = x.clone() + y.clone();
        assert_eq!(sum.evaluate(&bindings), Scalar::int(10));
        assert!(sum.evaluate(&bindings).is_int());

        let quotient = x.clone() / y.clone();
        assert_eq!(quotient.evaluate(&bindings), Scalar::float(1.5));

        let power = x.pow(y);
        let value = power.evaluate(&bindings);
        assert!(value.is_float());
        assert_eq!(value, Scalar::int(1296));
    }

    #[test]
    fn functions() {
        let x = Expression::variable("x");
        let bindings = [("x", Scalar::float(0.25))];

        assert_relative_eq!(x.clone().sin().evaluate(&bindings).as_f64(), 0.25f64.sin());
        assert_relative_eq!(x.clone().cos().evaluate(&bindings).as_f64(), 0.25f64.cos());
        assert_relative_eq!(x.clone().tan().evaluate(&bindings).as_f64(), 0.25f64.tan());
        assert_relative_eq!(x.clone().exp().evaluate(&bindings).as_f64(), 0.25f64.exp());
        assert_relative_eq!(x.clone().log().evaluate(&bindings).as_f64(), 0.25f64.ln());
        assert_relative_eq!(x.sqrt().evaluate(&bindings).as_f64(), 0.5);
    }

    #[test]
    fn degrades_without_failing() {
        let x = Expression::variable("x");
        let reciprocal = Expression::constant(1) / x.clone();
        assert!(reciprocal.evaluate_without_vars().is_infinity());
        assert!(x.log().evaluate(&[("x", Scalar::int(-1))]).is_nan());
    }

    #[test]
    fn batch_preserves_order() {
        let expr = Expression::variable("x") * Expression::constant(2);
        let environments: Vec<Bindings> = (0..5).map(|i| Bindings::new().with("x", i)).collect();
        let values = expr.evaluate_batch(&environments);
        let expected: Vec<_> = (0..5).map(|i| Scalar::int(2 * i)).collect();
        assert_eq!(values, expected);
    }
}
