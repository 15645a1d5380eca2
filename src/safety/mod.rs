//! Extensions that are checked in tests and under Miri but unchecked otherwise.
//!
//! Non-empty collections maintain their invariants without help from the types they wrap, so
//! these functions are sound to call only when the invariant holds. Tests panic instead of
//! invoking undefined behavior when it does not.

#[cfg(all(not(miri), test))]
mod checked;
#[cfg(not(all(not(miri), test)))]
mod unchecked;

pub trait NonZeroExt<T> {
    /// # Safety
    ///
    /// `n` must be non-zero.
    unsafe fn new_maybe_unchecked(n: T) -> Self;
}

pub trait OptionExt<T> {
    /// # Safety
    ///
    /// `self` must be `Some`.
    unsafe fn unwrap_maybe_unchecked(self) -> T;
}
