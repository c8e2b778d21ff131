use alloc::vec::Vec;

/// Selects the running extremum between two values.
///
/// The reference between `a` and `b` that wins is returned, so selection
/// policies never clone. Implement this to track something other than
/// `Ord`-min/max (e.g. longest string, custom key).
pub trait Extremum<T> {
    fn pick<'a>(&self, a: &'a T, b: &'a T) -> &'a T;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max;

impl<T: Ord> Extremum<T> for Min {
    fn pick<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if a <= b { a } else { b }
    }
}

impl<T: Ord> Extremum<T> for Max {
    fn pick<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if a >= b { a } else { b }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Entry<T> {
    value: T,
    /// Extremum of the stack up to and including this entry.
    extremum: T,
}

/// A stack that tracks its running extremum in O(1).
///
/// Each entry pairs the pushed value with the extremum of everything at or
/// below it, so `push`, `pop`, and [`extremum`](Self::extremum) are all O(1)
/// and popping restores the previous extremum for free.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtremumStack<T, S: Extremum<T>> {
    entries: Vec<Entry<T>>,
    select: S,
}

/// A stack tracking its minimum.
pub type MinStack<T> = ExtremumStack<T, Min>;
/// A stack tracking its maximum.
pub type MaxStack<T> = ExtremumStack<T, Max>;

impl<T, S: Extremum<T>> ExtremumStack<T, S> {
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::with_selector(S::default())
    }

    /// Creates an empty stack with an explicit selection policy.
    pub fn with_selector(select: S) -> Self {
        Self {
            entries: Vec::new(),
            select,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, value: T)
    where
        T: Clone,
    {
        let extremum = match self.entries.last() {
            Some(top) => self.select.pick(&value, &top.extremum).clone(),
            None => value.clone(),
        };
        self.entries.push(Entry { value, extremum });
    }

    /// Removes and returns the top value; `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop().map(|e| e.value)
    }

    /// The top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.entries.last().map(|e| &e.value)
    }

    /// The extremum of the live contents; `None` when empty.
    pub fn extremum(&self) -> Option<&T> {
        self.entries.last().map(|e| &e.extremum)
    }
}

impl<T, S: Extremum<T> + Default> Default for ExtremumStack<T, S> {
    fn default() -> Self {
        Self::new()
    }
}
