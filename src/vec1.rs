//! A non-empty [`Vec`][`vec`].
//!
//! [`vec`]: alloc::vec

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use alloc::vec::{self, Vec};
use core::fmt::{self, Debug, Formatter};
use core::num::NonZeroUsize;

use crate::iter1::{FromIterator1, IntoIterator1, Iterator1};
use crate::safety::{NonZeroExt as _, OptionExt as _};
#[cfg(feature = "serde")]
use crate::serde::{EmptyError, Serde};
use crate::NonEmpty;

pub type Vec1<T> = NonEmpty<Vec<T>>;

impl<T> Vec1<T> {
    pub(crate) fn from_vec_unchecked(items: Vec<T>) -> Self {
        Vec1 { items }
    }

    pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Vec1::from_vec_unchecked(Some(head).into_iter().chain(tail).collect())
    }

    pub fn into_head_and_tail(mut self) -> (T, Vec<T>) {
        let head = self.items.remove(0);
        (head, self.items)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> NonZeroUsize {
        // SAFETY: `self` must be non-empty.
        unsafe { NonZeroUsize::new_maybe_unchecked(self.items.len()) }
    }

    pub fn first(&self) -> &T {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.first().unwrap_maybe_unchecked() }
    }

    pub fn last(&self) -> &T {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.last().unwrap_maybe_unchecked() }
    }
}

impl<T> Debug for Vec1<T>
where
    T: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec1<T>> for Vec<T> {
    fn from(items: Vec1<T>) -> Self {
        items.items
    }
}

impl<T> FromIterator1<T> for Vec1<T> {
    fn from_iter1<I>(items: I) -> Self
    where
        I: IntoIterator1<Item = T>,
    {
        Vec1::from_vec_unchecked(items.into_iter().collect())
    }
}

impl<T> IntoIterator for Vec1<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> IntoIterator1 for Vec1<T> {
    fn into_iter1(self) -> Iterator1<Self::IntoIter> {
        Iterator1::from_iter_unchecked(self.items)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<T> TryFrom<Serde<Vec<T>>> for Vec1<T> {
    type Error = EmptyError;

    fn try_from(serde: Serde<Vec<T>>) -> Result<Self, Self::Error> {
        Vec1::try_from(serde.items).map_err(|_| EmptyError)
    }
}

impl<T> TryFrom<Vec<T>> for Vec1<T> {
    type Error = Vec<T>;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        match items.len() {
            0 => Err(items),
            _ => Ok(Vec1::from_vec_unchecked(items)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use rstest::rstest;

    use crate::iter1::IntoIterator1;
    use crate::vec1::Vec1;

    #[rstest]
    fn try_from_empty_vec_then_vec_is_returned() {
        assert_eq!(Vec1::<u8>::try_from(Vec::new()), Err(Vec::new()));
    }

    #[rstest]
    #[case::one(Vec1::from_head_and_tail(0u8, []), 1, 0)]
    #[case::many(Vec1::from_head_and_tail(0u8, [1, 2]), 3, 2)]
    fn len_and_last_of_vec1_then_eq(
        #[case] xs1: Vec1<u8>,
        #[case] len: usize,
        #[case] last: u8,
    ) {
        assert_eq!(xs1.len().get(), len);
        assert_eq!(*xs1.first(), 0);
        assert_eq!(*xs1.last(), last);
    }

    #[rstest]
    fn into_head_and_tail_of_vec1_then_head_eq_first() {
        let xs1 = Vec1::from_head_and_tail(0u8, [1, 2]);
        assert_eq!(xs1.into_head_and_tail(), (0, alloc::vec![1, 2]));
    }

    #[rstest]
    fn into_vec_of_vec1_then_items_are_preserved() {
        let xs1 = Vec1::try_from(alloc::vec![3u8, 1]).unwrap();
        assert_eq!(xs1.clone().into_iter1().last(), 1);
        assert_eq!(xs1.into_vec(), [3, 1]);
    }
}
