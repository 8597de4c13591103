//! Capability forwarding for [`Transient`].
//!
//! Every impl here is pure delegation: the operation on the wrapper is
//! the operation on the wrapped value, unchanged. Only equality, hashing
//! and serialization deviate (see the erasure impls in the parent
//! module).

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::str::FromStr;

use super::Transient;

impl<T> From<T> for Transient<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Transient<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Transient<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> AsRef<T> for Transient<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for Transient<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

// Ordering observes the wrapped value even though equality does not:
// sorts see the wrapped order while `==` stays erased. This asymmetry is
// part of the contract.
impl<T: PartialOrd> PartialOrd for Transient<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord> Ord for Transient<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: fmt::Display> fmt::Display for Transient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: FromStr> FromStr for Transient<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Self)
    }
}

impl<T, Idx> Index<Idx> for Transient<T>
where
    T: Index<Idx>,
{
    type Output = T::Output;

    fn index(&self, index: Idx) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, Idx> IndexMut<Idx> for Transient<T>
where
    T: IndexMut<Idx>,
{
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: IntoIterator> IntoIterator for Transient<T> {
    type Item = T::Item;
    type IntoIter = T::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Transient<T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = <&'a T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Transient<T>
where
    &'a mut T: IntoIterator,
{
    type Item = <&'a mut T as IntoIterator>::Item;
    type IntoIter = <&'a mut T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&mut self.0).into_iter()
    }
}

// A transient error is usable wherever the wrapped error is: the message
// comes through the Display forward, the cause chain through `source`.
impl<T: Error> Error for Transient<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
