//! Function-composition combinators.
//!
//! Three families, arities 2 through 6, all evaluating strictly left to
//! right:
//!
//! - [`zip2`]..[`zip6`]: combine N nullary producers into one function
//!   producing an N-tuple.
//! - [`TupleZip`]: the same combination, invoked as `.zip()` on a
//!   pre-built tuple of producers.
//! - [`fan_out2`]..[`fan_out6`]: combine N unary functions over a shared
//!   input into one function producing an N-tuple (product fold).

mod zip;

pub use zip::TupleZip;
pub use zip::{fan_out2, fan_out3, fan_out4, fan_out5, fan_out6};
pub use zip::{zip2, zip3, zip4, zip5, zip6};
