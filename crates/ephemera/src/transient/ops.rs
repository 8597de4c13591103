//! Arithmetic forwarding for [`Transient`].
//!
//! Operations delegate to the wrapped type and wrap the result, so
//! `Transient<T>` participates in generic numeric code whenever `T` does.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{FromPrimitive, Signed, Zero};

use super::Transient;

impl<T: Add<Output = T>> Add for Transient<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: AddAssign> AddAssign for Transient<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Sub<Output = T>> Sub for Transient<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: SubAssign> SubAssign for Transient<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Mul<Output = T>> Mul for Transient<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<T: MulAssign> MulAssign for Transient<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl<T: Neg<Output = T>> Neg for Transient<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Zero> Zero for Transient<T> {
    fn zero() -> Self {
        Self(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

// Exact construction from primitives: `None` whenever the wrapped type
// cannot represent the source value exactly.
impl<T: FromPrimitive> FromPrimitive for Transient<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self)
    }

    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Self)
    }
}

impl<T: Signed> Transient<T> {
    /// The magnitude of the wrapped value.
    pub fn magnitude(&self) -> T {
        self.0.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic_forwards_and_wraps() {
        let a = Transient::new(6);
        let b = Transient::new(7);

        assert_eq!((a + b).into_inner(), 13);
        assert_eq!((a - b).into_inner(), -1);
        assert_eq!((a * b).into_inner(), 42);
        assert_eq!((-a).into_inner(), -6);
    }

    #[test]
    fn compound_assignment_forwards() {
        let mut t = Transient::new(10);
        t += Transient::new(5);
        assert_eq!(*t.value(), 15);
        t -= Transient::new(3);
        assert_eq!(*t.value(), 12);
        t *= Transient::new(2);
        assert_eq!(*t.value(), 24);
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = Transient::<i64>::zero();
        assert!(zero.is_zero());
        assert_eq!((Transient::new(41_i64) + zero).into_inner(), 41);
    }

    #[test]
    fn exact_construction_from_integer() {
        assert_eq!(Transient::<u8>::from_i64(200).map(Transient::into_inner), Some(200));
        // 300 does not fit a u8: not exact, so no value.
        assert_eq!(Transient::<u8>::from_i64(300), None);
        assert_eq!(Transient::<i32>::from_u64(7).map(Transient::into_inner), Some(7));
    }

    #[test]
    fn magnitude_delegates_to_wrapped() {
        assert_eq!(Transient::new(-5_i64).magnitude(), 5);
        assert_eq!(Transient::new(5_i64).magnitude(), 5);
        assert_eq!(Transient::new(-2.5_f64).magnitude(), 2.5);
    }
}
