//! Bottom-up algebraic simplification.
//!
//! Children are simplified first. Constant subtrees fold into a single
//! [`Expression::Constant`], then a small set of identities is applied:
//!
//! ```text
//! x + 0 → x      0 + x → x
//! x * 0 → 0      0 * x → 0      x * 1 → x      1 * x → x
//! x ^ 0 → 1      x ^ 1 → x
//! ```
//!
//! Subtraction and division only fold constants.

use crate::{BinaryOperator, Expression, Scalar};

impl Expression {
    /// Returns a simplified copy of the expression.
    pub fn simplify(&self) -> Expression {
        simplify(self)
    }
}

/// Returns a simplified copy of `expr`. The input is left untouched.
pub fn simplify(expr: &Expression) -> Expression {
    match expr {
        Expression::Variable(_) | Expression::Constant(_) => expr.clone(),
        Expression::FunctionCall(function, argument) => {
            let argument = simplify(argument);
            match argument.as_constant() {
                Some(value) => Expression::Constant(function.apply(value)),
                None => Expression::call(*function, argument),
            }
        }
        Expression::BinaryOp(op, lhs, rhs) => simplify_binary(*op, simplify(lhs), simplify(rhs)),
    }
}

fn simplify_binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
    // A simplified constant subtree is always a single `Constant` node.
    let lhs_value = lhs.as_constant();
    let rhs_value = rhs.as_constant();
    if let (Some(l), Some(r)) = (lhs_value, rhs_value) {
        return Expression::Constant(op.apply(l, r));
    }

    let is = |value: Option<Scalar>, n: i64| value.is_some_and(|v| v.equals(&Scalar::Int(n)));

    match op {
        BinaryOperator::Add if is(rhs_value, 0) => {
            log::trace!("{lhs} + 0 → {lhs}");
            lhs
        }
        BinaryOperator::Add if is(lhs_value, 0) => {
            log::trace!("0 + {rhs} → {rhs}");
            rhs
        }
        BinaryOperator::Mul if is(lhs_value, 0) || is(rhs_value, 0) => {
            log::trace!("{lhs} * {rhs} → 0");
            Expression::constant(0)
        }
        BinaryOperator::Mul if is(rhs_value, 1) => {
            log::trace!("{lhs} * 1 → {lhs}");
            lhs
        }
        BinaryOperator::Mul if is(lhs_value, 1) => {
            log::trace!("1 * {rhs} → {rhs}");
            rhs
        }
        BinaryOperator::Pow if is(rhs_value, 0) => {
            log::trace!("{lhs} ^ 0 → 1");
            Expression::constant(1)
        }
        BinaryOperator::Pow if is(rhs_value, 1) => {
            log::trace!("{lhs} ^ 1 → {lhs}");
            lhs
        }
        _ => Expression::binary(op, lhs, rhs),
    }
}
