//! Symbolic math expression trees.
//!
//! Build an [`Expression`] from variables, constants, binary operators and
//! unary functions, then differentiate, simplify, evaluate or render it.
//!
//! # Example
//!
//! ```rust
//! use symbolic_expr::*;
//!
//! let x = Expression::variable("x");
//! let square = x.clone() * x;
//!
//! let derivative = square.differentiate("x");
//! assert_eq!(derivative.render(), "1 * x + x * 1");
//!
//! let simplified = derivative.simplify();
//! assert_eq!(simplified.render(), "x + x");
//!
//! let bindings = Bindings::new().with("x", 3);
//! assert_eq!(simplified.evaluate(&bindings), Scalar::int(6));
//! ```
//!
//! Evaluation is lenient: unbound variables are `0`, division by zero gives
//! `Infinity` or `NaN`, and comparisons with `NaN` are false.

mod bindings;
mod differentiate;
mod error;
mod evaluate;
mod expression;
mod scalar;
mod simplify;

pub mod math;

pub use bindings::*;
pub use error::Error;
pub use expression::*;
pub use scalar::*;
pub use simplify::simplify;
