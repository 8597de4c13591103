//! Serialization contract for [`Transient`] (feature `serde`).
//!
//! Encoding is erased: a `Transient` serializes as a unit and never emits
//! the wrapped content. Decoding reconstructs the wrapped value from
//! whatever representation the payload carries — a bare value or the
//! wrapped type's own full representation — and surfaces the wrapped
//! type's deserialization error unchanged.
//!
//! The embedding pattern for true field absence:
//!
//! ```
//! use ephemera::Transient;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Snapshot {
//!     id: u64,
//!     #[serde(skip_serializing, default)]
//!     cache: Transient<Vec<u64>>,
//! }
//!
//! let shot = Snapshot { id: 7, cache: Transient::new(vec![1, 2, 3]) };
//! let json = serde_json::to_string(&shot).unwrap();
//! assert_eq!(json, r#"{"id":7}"#);
//! ```
//!
//! Encode→decode is deliberately *not* value-preserving for the transient
//! field: the field is absent on encode, so decode yields the default
//! unless a legacy payload still carries it.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::trace;

use super::Transient;

// Transient values do not get encoded. A unit carries none of the wrapped
// content, so nothing leaks even when the embedding field is not marked
// `#[serde(skip_serializing)]`. Use the [`by_value`] module for explicit
// wrapped-value serialization.
impl<T> Serialize for Transient<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Transient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        trace!("reconstructed transient value from payload");
        Ok(Self(value))
    }
}

/// Wrapped-value serialization, for callers who explicitly want the
/// wrapped content on the wire instead of erasure.
///
/// ```
/// use ephemera::Transient;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Annotated {
///     #[serde(with = "ephemera::transient::by_value")]
///     kept: Transient<u32>,
/// }
///
/// let json = serde_json::to_string(&Annotated { kept: Transient::new(9) }).unwrap();
/// assert_eq!(json, r#"{"kept":9}"#);
/// ```
pub mod by_value {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::Transient;

    /// Serialize the wrapped value itself.
    pub fn serialize<T, S>(value: &Transient<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        value.value().serialize(serializer)
    }

    /// Deserialize the wrapped value and wrap it.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Transient<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Transient::new)
    }
}
