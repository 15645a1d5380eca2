use core::num::NonZeroUsize;

use crate::safety;

impl safety::NonZeroExt<usize> for NonZeroUsize {
    unsafe fn new_maybe_unchecked(n: usize) -> Self {
        NonZeroUsize::new(n).unwrap()
    }
}

impl<T> safety::OptionExt<T> for Option<T> {
    unsafe fn unwrap_maybe_unchecked(self) -> T {
        self.unwrap()
    }
}
