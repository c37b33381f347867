use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::{math, Scalar};

/// A node in a symbolic expression tree.
///
/// Children are exclusively owned. Reusing a subtree under a second parent
/// requires cloning it first.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// Free variable, resolved at evaluation time.
    Variable(String),

    /// Literal.
    Constant(Scalar),

    BinaryOp(BinaryOperator, Box<Expression>, Box<Expression>),

    FunctionCall(Function, Box<Expression>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary transcendental functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn constant(value: impl Into<Scalar>) -> Self {
        Self::Constant(value.into())
    }

    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::BinaryOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn call(function: Function, argument: Expression) -> Self {
        Self::FunctionCall(function, Box::new(argument))
    }

    pub fn pow(self, exponent: Expression) -> Self {
        Self::binary(BinaryOperator::Pow, self, exponent)
    }

    pub fn sin(self) -> Self {
        Self::call(Function::Sin, self)
    }

    pub fn cos(self) -> Self {
        Self::call(Function::Cos, self)
    }

    pub fn tan(self) -> Self {
        Self::call(Function::Tan, self)
    }

    pub fn exp(self) -> Self {
        Self::call(Function::Exp, self)
    }

    pub fn log(self) -> Self {
        Self::call(Function::Log, self)
    }

    pub fn sqrt(self) -> Self {
        Self::call(Function::Sqrt, self)
    }

    /// True when no [`Expression::Variable`] appears in the tree.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::Constant(_) => true,
            Self::BinaryOp(_, lhs, rhs) => lhs.is_constant() && rhs.is_constant(),
            Self::FunctionCall(_, argument) => argument.is_constant(),
        }
    }

    /// The literal value if this node is a [`Expression::Constant`].
    pub fn as_constant(&self) -> Option<Scalar> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Renders the tree as text. Operators are not parenthesized.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Free variable names in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Variable(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Self::Constant(_) => {}
            Self::BinaryOp(_, lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Self::FunctionCall(_, argument) => argument.collect_variables(names),
        }
    }
}

/// Creates one [`Expression::Variable`] per name.
pub fn symbols<I>(names: I) -> Vec<Expression>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    names.into_iter().map(Expression::variable).collect()
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => f.write_str(name),
            Self::Constant(value) => write!(f, "{value}"),
            Self::BinaryOp(op, lhs, rhs) => write!(f, "{lhs} {op} {rhs}"),
            Self::FunctionCall(function, argument) => write!(f, "{function}({argument})"),
        }
    }
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Applies the operator to two values.
    pub fn apply(self, lhs: Scalar, rhs: Scalar) -> Scalar {
        match self {
            Self::Add => lhs.add(rhs),
            Self::Sub => lhs.subtract(rhs),
            Self::Mul => lhs.multiply(rhs),
            Self::Div => lhs.divide(rhs),
            Self::Pow => math::pow(lhs, rhs),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

static FUNCTIONS_BY_NAME: Lazy<HashMap<&'static str, Function>> =
    Lazy::new(|| Function::ALL.into_iter().map(|f| (f.name(), f)).collect());

impl Function {
    pub const ALL: [Function; 6] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Exp,
        Self::Log,
        Self::Sqrt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }

    pub fn apply(self, argument: Scalar) -> Scalar {
        match self {
            Self::Sin => math::sin(argument),
            Self::Cos => math::cos(argument),
            Self::Tan => math::tan(argument),
            Self::Exp => math::exp(argument),
            Self::Log => math::log(argument),
            Self::Sqrt => math::sqrt(argument),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FUNCTIONS_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownFunction(s.to_string()))
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for Expression {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Self::Output {
                Expression::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOperator::Add);
impl_binary_operator!(Sub, sub, BinaryOperator::Sub);
impl_binary_operator!(Mul, mul, BinaryOperator::Mul);
impl_binary_operator!(Div, div, BinaryOperator::Div);
