//! Small indexed-aggregation primitives.
//!
//! Three textbook constructs built around folding a binary operation over
//! indexed data:
//! - [`FenwickTree`]: O(log n) prefix folds and point updates over any
//!   invertible (reversible) operation, with half-open range folds derived
//!   by uncombining two prefixes
//! - [`ExtremumStack`]: a stack with O(1) push/pop and O(1) running min/max
//! - [`pow_with`]: O(log exp) exponentiation over any monoid
//!
//! The aggregate operation is an injected policy ([`MonoidOp`] /
//! [`InvertibleOp`]), not hardcoded addition. Stock policies cover sums,
//! XOR, and products; [`IntFenwick`] aliases the common `i64` sum case.
//!
//! Everything is single-threaded and synchronous. Updates take `&mut self`
//! and queries take `&self`, so exposing a tree to concurrent callers gets
//! the required readers-writer exclusion from the borrow checker (or an
//! `RwLock`) rather than from internal synchronization.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod fenwick;
mod ops;
mod power;
mod stack;


pub use fenwick::{FenwickTree, IntFenwick, OutOfBounds};
pub use ops::{InvertibleOp, MonoidOp, ProductOp, SumOp, XorOp};
pub use power::{pow, pow_with};
pub use stack::{Extremum, ExtremumStack, Max, MaxStack, Min, MinStack};
