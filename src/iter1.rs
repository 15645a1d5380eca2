//! Non-empty [iterators][`Iterator`].

use core::iter::{Chain, Map, Peekable};
use core::option;

use crate::safety::OptionExt as _;

pub trait IteratorExt: Iterator + Sized {
    fn try_into_iter1(self) -> Remainder<Self>;
}

impl<I> IteratorExt for I
where
    I: Iterator,
{
    fn try_into_iter1(self) -> Remainder<Self> {
        Iterator1::try_from_iter(self)
    }
}

pub trait FromIterator1<T> {
    fn from_iter1<I>(items: I) -> Self
    where
        I: IntoIterator1<Item = T>;
}

pub trait IntoIterator1: IntoIterator {
    fn into_iter1(self) -> Iterator1<Self::IntoIter>;
}

impl<I> IntoIterator1 for Iterator1<I>
where
    I: Iterator,
{
    fn into_iter1(self) -> Iterator1<Self::IntoIter> {
        self
    }
}

pub type AtMostOne<T> = option::IntoIter<T>;

pub type ExactlyOne<T> = Iterator1<AtMostOne<T>>;

pub type HeadAndTail<T> =
    Iterator1<Chain<AtMostOne<<T as IntoIterator>::Item>, <T as IntoIterator>::IntoIter>>;

/// The outcome of checking an iterator for items.
///
/// `Ok` holds the non-empty iterator and `Err` holds the (empty) iterator that was checked. The
/// iterator is [`Peekable`], because checking for an item requires reading it.
pub type Remainder<I> = Result<Iterator1<Peekable<I>>, Peekable<I>>;

/// An [`Iterator`] that yields at least one item.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Iterator1<I> {
    items: I,
}

impl<I> Iterator1<I> {
    /// The caller must guarantee that `items` yields at least one item.
    pub(crate) fn from_iter_unchecked<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Iterator1 {
            items: items.into_iter(),
        }
    }
}

impl<I> Iterator1<I>
where
    I: Iterator,
{
    pub fn try_from_iter<T>(items: T) -> Remainder<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        let mut items = items.into_iter().peekable();
        match items.peek() {
            Some(_) => Ok(Iterator1::from_iter_unchecked(items)),
            _ => Err(items),
        }
    }

    #[inline(always)]
    fn non_empty<J, F>(self, f: F) -> Iterator1<J>
    where
        J: Iterator,
        F: FnOnce(I) -> J,
    {
        Iterator1::from_iter_unchecked(f(self.items))
    }

    pub fn first(mut self) -> I::Item {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.next().unwrap_maybe_unchecked() }
    }

    pub fn into_head_and_tail(mut self) -> (I::Item, I) {
        // SAFETY: `self` must be non-empty.
        let head = unsafe { self.items.next().unwrap_maybe_unchecked() };
        (head, self.items)
    }

    pub fn last(self) -> I::Item {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.last().unwrap_maybe_unchecked() }
    }

    /// Folds the items with `f`, seeding the fold with the first item.
    ///
    /// Unlike [`Iterator::reduce`], there is always a first item, so no identity is needed and the
    /// output is not optional.
    pub fn reduce<F>(self, f: F) -> I::Item
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.reduce(f).unwrap_maybe_unchecked() }
    }

    pub fn map<T, F>(self, f: F) -> Iterator1<Map<I, F>>
    where
        F: FnMut(I::Item) -> T,
    {
        self.non_empty(move |items| items.map(f))
    }

    pub fn chain<T>(self, chained: T) -> Iterator1<Chain<I, T::IntoIter>>
    where
        T: IntoIterator<Item = I::Item>,
    {
        self.non_empty(move |items| items.chain(chained))
    }

    pub fn collect1<T>(self) -> T
    where
        T: FromIterator1<I::Item>,
    {
        T::from_iter1(self)
    }
}

impl<I> IntoIterator for Iterator1<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        self.items
    }
}

pub fn one<T>(item: T) -> ExactlyOne<T> {
    Iterator1::from_iter_unchecked(Some(item))
}

pub fn head_and_tail<T, I>(head: T, tail: I) -> HeadAndTail<I>
where
    I: IntoIterator<Item = T>,
{
    one(head).chain(tail)
}

/// # Safety
macro_rules! impl_into_iterator1_for_array {
    ($N:literal) => {
        impl<T> $crate::iter1::IntoIterator1 for [T; $N] {
            fn into_iter1(self) -> $crate::iter1::Iterator1<Self::IntoIter> {
                // SAFETY: The array has a non-zero length.
                $crate::iter1::Iterator1::from_iter_unchecked(self)
            }
        }
    };
}
crate::with_non_zero_array_size_literals!(impl_into_iterator1_for_array);


#[cfg(all(test, feature = "alloc"))]
mod tests {
    use alloc::vec::Vec;
    use core::iter;
    use rstest::rstest;

    use crate::iter1::{self, harness, IteratorExt as _};
    use crate::vec1::Vec1;

    #[rstest]
    fn try_into_iter1_from_empty_iter_then_err() {
        assert!(iter::empty::<u8>().try_into_iter1().is_err());
    }

    #[rstest]
    fn try_into_iter1_from_non_empty_iter_then_first_eq_head() {
        let xs1 = [3u8, 1, 2].into_iter().try_into_iter1().unwrap();
        assert_eq!(xs1.first(), 3);
    }

    #[rstest]
    #[case::one(0, 0)]
    #[case::many(4, 4)]
    fn last_of_xs1_then_last_eq_end(#[case] end: u8, #[case] expected: u8) {
        assert_eq!(harness::xs1(end).last(), expected);
    }

    #[rstest]
    fn into_head_and_tail_of_xs1_then_head_eq_first() {
        let (head, tail) = harness::xs1(3).into_head_and_tail();
        assert_eq!(head, 0);
        assert_eq!(tail.collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[rstest]
    fn into_head_and_tail_of_one_then_tail_is_empty() {
        let (head, mut tail) = iter1::one('a').into_head_and_tail();
        assert_eq!(head, 'a');
        assert_eq!(tail.next(), None);
    }

    #[rstest]
    fn reduce_head_and_tail_then_output_eq_sum() {
        assert_eq!(iter1::head_and_tail(1u8, [2, 3]).reduce(|a, b| a + b), 6);
        assert_eq!(iter1::one(7u8).reduce(|a, b| a + b), 7);
    }

    #[rstest]
    fn map_xs1_then_first_and_last_are_mapped() {
        let xs1 = harness::xs1(2).map(|x| x * 10);
        assert_eq!(xs1.clone().first(), 0);
        assert_eq!(xs1.last(), 20);
    }

    #[rstest]
    fn chain_one_then_last_eq_chained() {
        assert_eq!(iter1::one(0u8).chain([1, 2]).last(), 2);
        assert_eq!(iter1::one(0u8).chain([]).last(), 0);
    }

    #[rstest]
    fn collect1_xs1_into_vec1_then_vec1_eq() {
        let xs1: Vec1<u8> = harness::xs1(2).collect1();
        assert_eq!(xs1.into_vec(), [0, 1, 2]);
    }
}
