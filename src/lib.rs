//! A non-empty ordered map.
//!
//! [`BTreeMap1`] holds one distinguished head entry and a [`BTreeMap`] of zero or more remaining
//! entries, so it always contains at least one entry. Operations that can remove the last entry
//! return the possibly-empty [`BTreeMap`] instead.
//!
//! [`BTreeMap`]: alloc::collections::BTreeMap
//! [`BTreeMap1`]: crate::btree_map1::BTreeMap1

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::cloned_instead_of_copied,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::flat_map_option,
    clippy::from_iter_instead_of_collect,
    clippy::if_not_else,
    clippy::manual_ok_or,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::redundant_else,
    clippy::unreadable_literal,
    clippy::unused_self
)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod safety;
mod serde;

pub mod btree_map1;
pub mod effect;
pub mod iter1;
pub mod vec1;

pub mod prelude {
    pub use crate::effect::Effect;
    pub use crate::iter1::{FromIterator1, IntoIterator1, IteratorExt as _};
    #[cfg(feature = "alloc")]
    pub use {crate::btree_map1::BTreeMap1, crate::vec1::Vec1};
}

#[cfg(feature = "serde")]
use {
    ::serde::{Deserialize, Serialize},
    ::serde_derive::{Deserialize, Serialize},
};

#[cfg(feature = "serde")]
pub use crate::serde::EmptyError;
#[cfg(feature = "serde")]
use crate::serde::Serde;

#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound(
            deserialize = "Self: TryFrom<Serde<T>, Error = EmptyError>, \
                           T: Clone + Deserialize<'de>,",
            serialize = "T: Clone + Serialize,",
        ),
        try_from = "Serde<T>",
        into = "Serde<T>",
    )
)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct NonEmpty<T>
where
    T: ?Sized,
{
    items: T,
}

macro_rules! with_literals {
    ($f:ident$(,)?) => {};
    ($f:ident, [$($N:literal $(,)?)+]$(,)?) => {
        $(
            $f!($N);
        )+
    };
}
pub(crate) use with_literals;

macro_rules! with_non_zero_array_size_literals {
    ($f:ident$(,)?) => {
        $crate::with_literals!(
            $f,
            [
                1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
                24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44,
                45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64,
            ],
        );
    };
}
pub(crate) use with_non_zero_array_size_literals;
