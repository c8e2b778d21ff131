use alloc::vec::Vec;
use core::ops::Range;

use crate::ops::{InvertibleOp, SumOp};

/// An index or count outside a tree's bounds.
///
/// The only error this crate reports: updates and queries validate their
/// arguments up front and never partially apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutOfBounds {
    /// The offending index (or prefix count).
    pub index: usize,
    /// The tree length the argument was checked against.
    pub len: usize,
}

impl core::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "index {} out of bounds (len {})", self.index, self.len)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfBounds {}

/// A Fenwick (binary-indexed) tree over an invertible fold.
///
/// The accumulator at index `i` holds the fold of the logical elements in the
/// half-open block `(i & (i + 1), i]`, i.e. `i` with its trailing run of set
/// bits cleared marks the block start. Point updates and prefix folds each
/// touch O(log n) accumulators.
///
/// The length is fixed at construction; the accumulator array is never
/// observable directly. Updates take `&mut self` and queries take `&self`,
/// so the borrow checker enforces the readers-writer discipline an update's
/// multi-slot write requires.
///
/// Boundary conventions are Rust-native: [`prefix`](Self::prefix) takes an
/// element *count* (`prefix(0)` is the identity) and [`range`](Self::range)
/// takes a half-open `start..end` over logical positions.
#[derive(Clone, Debug)]
pub struct FenwickTree<O: InvertibleOp> {
    op: O,
    tree: Vec<O::Value>,
}

/// The common case: `i64` sums.
pub type IntFenwick = FenwickTree<SumOp<i64>>;

impl<O: InvertibleOp> FenwickTree<O> {
    /// Creates a tree of `len` identity elements.
    pub fn new(op: O, len: usize) -> Self {
        let mut tree = Vec::with_capacity(len);
        for _ in 0..len {
            tree.push(op.identity());
        }
        Self { op, tree }
    }

    /// Builds a tree holding `values`, applying the update walk for each
    /// position in index order.
    ///
    /// Infallible: every position of `values` is in range by construction,
    /// so a build never leaves a partially-initialized tree behind.
    pub fn from_values(op: O, values: &[O::Value]) -> Self {
        let mut t = Self::new(op, values.len());
        for (i, v) in values.iter().enumerate() {
            t.apply(i, v);
        }
        rdebug!(len = values.len(), "FenwickTree::from_values");
        t
    }

    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Combines `delta` into the logical element at `index`.
    ///
    /// Fails with [`OutOfBounds`] for `index >= len()` without touching any
    /// accumulator. On success, every prefix fold covering `index` reflects
    /// the delta and all other positions are unaffected.
    pub fn update(&mut self, index: usize, delta: &O::Value) -> Result<(), OutOfBounds> {
        let len = self.tree.len();
        if index >= len {
            rwarn!(index, len, "FenwickTree::update: index out of bounds");
            return Err(OutOfBounds { index, len });
        }
        rtrace!(index, "FenwickTree::update");
        self.apply(index, delta);
        Ok(())
    }

    /// Folds the first `count` logical elements; `prefix(0)` is the identity.
    ///
    /// Fails with [`OutOfBounds`] for `count > len()`.
    pub fn prefix(&self, count: usize) -> Result<O::Value, OutOfBounds> {
        let len = self.tree.len();
        if count > len {
            rwarn!(count, len, "FenwickTree::prefix: count out of bounds");
            return Err(OutOfBounds { index: count, len });
        }
        Ok(self.fold_prefix(count))
    }

    /// Folds the logical elements in the half-open `range`.
    ///
    /// Derived as `prefix(range.end)` with `prefix(range.start)` uncombined.
    /// Empty (and inverted) ranges yield the identity. Fails with
    /// [`OutOfBounds`] for `range.end > len()`.
    pub fn range(&self, range: Range<usize>) -> Result<O::Value, OutOfBounds> {
        let len = self.tree.len();
        if range.end > len {
            rwarn!(
                end = range.end,
                len,
                "FenwickTree::range: end out of bounds"
            );
            return Err(OutOfBounds {
                index: range.end,
                len,
            });
        }
        if range.start >= range.end {
            return Ok(self.op.identity());
        }
        let whole = self.fold_prefix(range.end);
        let head = self.fold_prefix(range.start);
        Ok(self.op.uncombine(&whole, &head))
    }

    /// The logical element at `index`.
    pub fn get(&self, index: usize) -> Result<O::Value, OutOfBounds> {
        let len = self.tree.len();
        if index >= len {
            return Err(OutOfBounds { index, len });
        }
        let whole = self.fold_prefix(index + 1);
        let head = self.fold_prefix(index);
        Ok(self.op.uncombine(&whole, &head))
    }

    /// Fold of every logical element.
    pub fn total(&self) -> O::Value {
        self.fold_prefix(self.tree.len())
    }

    /// Walks `i -> i | (i + 1)`, combining `delta` into each accumulator
    /// whose block covers `index`.
    fn apply(&mut self, index: usize, delta: &O::Value) {
        debug_assert!(index < self.tree.len());
        let n = self.tree.len();
        let mut i = index;
        while i < n {
            let folded = self.op.combine(&self.tree[i], delta);
            self.tree[i] = folded;
            i |= i + 1;
        }
    }

    /// Walks block ends downward: the accumulator at `i - 1` covers
    /// `(g, i - 1]` with `g = (i - 1) & i`, and the next block ends at `g`.
    fn fold_prefix(&self, count: usize) -> O::Value {
        let mut acc = self.op.identity();
        let mut i = count;
        while i > 0 {
            let idx = i - 1;
            acc = self.op.combine(&acc, &self.tree[idx]);
            i = idx & (idx + 1);
        }
        acc
    }
}

impl IntFenwick {
    /// Builds an `i64` sum tree; see [`FenwickTree::from_values`].
    pub fn of_sums(values: &[i64]) -> Self {
        Self::from_values(SumOp::new(), values)
    }
}
