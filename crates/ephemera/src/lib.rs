//! # Ephemera
//!
//! Small general-purpose extensions: a [`Transient`] wrapper that excludes
//! a value from equality, hashing and serialization, plus collection-update
//! helpers and variadic zip combinators.
//!
//! ## Key Components
//!
//! - **[`Transient<T>`](Transient)**: wraps a value but makes it invisible
//!   to `==`, `Hash` and (with the `serde` feature) serialization, while
//!   still forwarding ordering, display, iteration, indexing and
//!   arithmetic to the wrapped value. Declare a cache-like field as
//!   `Transient<T>` and the rest of the struct keeps its derived
//!   semantics.
//! - **[`collections`]**: `update_where`/`set_where` bulk-update helpers
//!   and bounds-safe indexed access (`get_safe`, `set_safe`,
//!   `remove_safe`) that return `None` instead of panicking.
//! - **[`func`]**: `zip2`..`zip6` and `fan_out2`..`fan_out6` combinators
//!   that merge several functions into one tuple-producing function.
//!
//! ## Usage
//!
//! ```rust
//! use ephemera::Transient;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Session {
//!     user: String,
//!     // Transient fields compare equal regardless of content.
//!     scratch: Transient<Vec<u8>>,
//! }
//!
//! let a = Session { user: "blob".into(), scratch: Transient::new(vec![1]) };
//! let b = Session { user: "blob".into(), scratch: Transient::new(vec![2]) };
//! assert_eq!(a, b);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod collections;
pub mod func;
pub mod transient;

pub use transient::Transient;

/// Prelude for common imports
pub mod prelude {
    pub use crate::Transient;
    pub use crate::collections::{RemoveSafeExt, SafeIndexExt, UpdateExt};
    pub use crate::func::TupleZip;
    pub use crate::func::{fan_out2, fan_out3, fan_out4, fan_out5, fan_out6};
    pub use crate::func::{zip2, zip3, zip4, zip5, zip6};
}
