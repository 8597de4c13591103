//! Collection extension traits.
//!
//! - [`UpdateExt`]: predicate-based bulk element updates that return a
//!   fresh `Vec`, preserving length and order.
//! - [`SafeIndexExt`] / [`RemoveSafeExt`]: bounds-safe indexed access
//!   where `None` is the absent-value marker — out-of-bounds reads,
//!   writes and removals never panic.

mod safe_index;
mod update;

pub use safe_index::{RemoveSafeExt, SafeIndexExt};
pub use update::UpdateExt;
