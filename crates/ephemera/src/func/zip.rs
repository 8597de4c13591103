//! Variadic zip combinators.
//!
//! Producers run sequentially in argument order; that ordering is an
//! observable contract, pinned by tests. A panic in any producer
//! propagates immediately and halts the rest.

macro_rules! zip_producers {
    ($(#[$meta:meta])* $name:ident => $($f:ident: $F:ident -> $A:ident),+) => {
        $(#[$meta])*
        pub fn $name<$($A, $F),+>($($f: $F),+) -> impl Fn() -> ($($A,)+)
        where
            $($F: Fn() -> $A,)+
        {
            move || ($($f(),)+)
        }
    };
}

zip_producers! {
    /// Combine two nullary producers into one producing a pair.
    ///
    /// ```
    /// use ephemera::func::zip2;
    ///
    /// let combined = zip2(|| 1, || "a");
    /// assert_eq!(combined(), (1, "a"));
    /// ```
    zip2 => a: FA -> A, b: FB -> B
}

zip_producers! {
    /// Three-producer form of [`zip2`].
    zip3 => a: FA -> A, b: FB -> B, c: FC -> C
}

zip_producers! {
    /// Four-producer form of [`zip2`].
    zip4 => a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D
}

zip_producers! {
    /// Five-producer form of [`zip2`].
    zip5 => a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D, e: FE -> E
}

zip_producers! {
    /// Six-producer form of [`zip2`].
    zip6 => a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D, e: FE -> E, f: FF -> F
}

/// Zip a pre-built tuple of nullary producers into one tuple-producing
/// function.
///
/// ```
/// use ephemera::func::TupleZip;
///
/// let combined = (|| 1, || "a").zip();
/// assert_eq!(combined(), (1, "a"));
/// ```
pub trait TupleZip: Sized {
    /// The tuple of producer outputs.
    type Item;

    /// Combine the producers, preserving argument order.
    fn zip(self) -> impl Fn() -> Self::Item;
}

macro_rules! tuple_zip {
    ($($f:ident: $F:ident -> $A:ident),+) => {
        impl<$($A, $F),+> TupleZip for ($($F,)+)
        where
            $($F: Fn() -> $A,)+
        {
            type Item = ($($A,)+);

            fn zip(self) -> impl Fn() -> Self::Item {
                let ($($f,)+) = self;
                move || ($($f(),)+)
            }
        }
    };
}

tuple_zip!(a: FA -> A, b: FB -> B);
tuple_zip!(a: FA -> A, b: FB -> B, c: FC -> C);
tuple_zip!(a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D);
tuple_zip!(a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D, e: FE -> E);
tuple_zip!(a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D, e: FE -> E, f: FF -> F);

macro_rules! fan_out {
    ($(#[$meta:meta])* $name:ident => $($f:ident: $F:ident -> $A:ident),+) => {
        $(#[$meta])*
        pub fn $name<Z, $($A, $F),+>($($f: $F),+) -> impl Fn(Z) -> ($($A,)+)
        where
            Z: Clone,
            $($F: Fn(Z) -> $A,)+
        {
            move |z: Z| ($($f(z.clone()),)+)
        }
    };
}

fan_out! {
    /// Apply two unary functions to the same input (product fold).
    ///
    /// ```
    /// use ephemera::func::fan_out2;
    ///
    /// let both = fan_out2(|z: i32| z + 1, |z: i32| z * 2);
    /// assert_eq!(both(3), (4, 6));
    /// ```
    fan_out2 => a: FA -> A, b: FB -> B
}

fan_out! {
    /// Three-function form of [`fan_out2`].
    fan_out3 => a: FA -> A, b: FB -> B, c: FC -> C
}

fan_out! {
    /// Four-function form of [`fan_out2`].
    fan_out4 => a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D
}

fan_out! {
    /// Five-function form of [`fan_out2`].
    fan_out5 => a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D, e: FE -> E
}

fan_out! {
    /// Six-function form of [`fan_out2`].
    fan_out6 => a: FA -> A, b: FB -> B, c: FC -> C, d: FD -> D, e: FE -> E, f: FF -> F
}
