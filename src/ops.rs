use core::marker::PhantomData;
use core::ops::{Add, BitXor, Mul, Sub};

/// An associative binary operation with an identity element.
///
/// The fold strategies in this crate carry the operation as an instance so
/// stateful operations (e.g. modular arithmetic with a runtime modulus) are
/// possible; the stock operations below are all zero-sized.
///
/// Implementations used with [`crate::FenwickTree`] must also be commutative:
/// the update and query walks visit covered blocks out of positional order.
pub trait MonoidOp {
    type Value: Clone;

    fn identity(&self) -> Self::Value;

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// A monoid whose folds can be reversed, so contiguous-range folds can be
/// derived from two prefix folds.
pub trait InvertibleOp: MonoidOp {
    /// Removes `part` from `whole`.
    ///
    /// Law: `uncombine(&combine(&a, &b), &b) == a`.
    fn uncombine(&self, whole: &Self::Value, part: &Self::Value) -> Self::Value;
}

/// Addition with subtraction as the inverse.
#[derive(Clone, Copy, Debug, Default)]
pub struct SumOp<T>(PhantomData<T>);

impl<T> SumOp<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> MonoidOp for SumOp<T>
where
    T: Clone + Default + Add<Output = T> + Sub<Output = T>,
{
    type Value = T;

    fn identity(&self) -> T {
        T::default()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }
}

impl<T> InvertibleOp for SumOp<T>
where
    T: Clone + Default + Add<Output = T> + Sub<Output = T>,
{
    fn uncombine(&self, whole: &T, part: &T) -> T {
        whole.clone() - part.clone()
    }
}

/// Bitwise XOR; self-inverse, so `uncombine` is just `combine`.
#[derive(Clone, Copy, Debug, Default)]
pub struct XorOp<T>(PhantomData<T>);

impl<T> XorOp<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> MonoidOp for XorOp<T>
where
    T: Clone + Default + BitXor<Output = T>,
{
    type Value = T;

    fn identity(&self) -> T {
        T::default()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() ^ b.clone()
    }
}

impl<T> InvertibleOp for XorOp<T>
where
    T: Clone + Default + BitXor<Output = T>,
{
    fn uncombine(&self, whole: &T, part: &T) -> T {
        self.combine(whole, part)
    }
}

/// Multiplication. Only a [`MonoidOp`]: division is not total (zero divisors),
/// so products cannot back a Fenwick tree, but they work with [`crate::pow_with`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductOp<T>(PhantomData<T>);

impl<T> ProductOp<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> MonoidOp for ProductOp<T>
where
    T: Clone + Mul<Output = T> + From<u8>,
{
    type Value = T;

    fn identity(&self) -> T {
        T::from(1u8)
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() * b.clone()
    }
}
