//! A non-empty [`BTreeMap`][`btree_map`].
//!
//! [`BTreeMap1`] stores one head entry apart from a [`BTreeMap`] of the remaining entries. The
//! head is not necessarily the minimum entry: observations (iteration, comparison, hashing,
//! formatting, and serialization) always merge the head into the remaining entries by key, so the
//! split between the two is never visible.
//!
//! Operations consume the map and return a new one. Operations that can remove the last entry
//! return a [`BTreeMap`] instead of a [`BTreeMap1`].
//!
//! [`btree_map`]: alloc::collections::btree_map

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use alloc::collections::btree_map::{self, BTreeMap};
#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FusedIterator, Map};
use core::mem;
use core::num::NonZeroUsize;
use core::ops::Bound;
#[cfg(feature = "serde")]
use {
    ::serde::{Deserialize, Serialize},
    ::serde_derive::{Deserialize, Serialize},
};

use crate::effect::Effect;
use crate::iter1::{self, FromIterator1, IntoIterator1, Iterator1};
#[cfg(feature = "serde")]
use crate::serde::{EmptyError, Serde};
use crate::vec1::Vec1;

pub type Keys<'a, K, V> = Map<Iter<'a, K, V>, fn((&'a K, &'a V)) -> &'a K>;

pub type Values<'a, K, V> = Map<Iter<'a, K, V>, fn((&'a K, &'a V)) -> &'a V>;

pub type IntoKeys<K, V> = Map<IntoIter<K, V>, fn((K, V)) -> K>;

pub type IntoValues<K, V> = Map<IntoIter<K, V>, fn((K, V)) -> V>;

/// A [`BTreeMap`] with at least one entry.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound(
            deserialize = "K: Ord + Deserialize<'de>, V: Deserialize<'de>,",
            serialize = "K: Clone + Ord + Serialize, V: Clone + Serialize,",
        ),
        try_from = "Serde<BTreeMap<K, V>>",
        into = "Serde<BTreeMap<K, V>>",
    )
)]
#[derive(Clone)]
pub struct BTreeMap1<K, V> {
    // The key of `head` is never a key in `rest`.
    head: (K, V),
    rest: BTreeMap<K, V>,
}

impl<K, V> BTreeMap1<K, V> {
    pub const fn from_one(item: (K, V)) -> Self {
        BTreeMap1 {
            head: item,
            rest: BTreeMap::new(),
        }
    }

    /// Constructs a map from a head entry and any number of further entries.
    ///
    /// Later entries replace earlier entries with the same key, including `head`.
    pub fn from_head_and_tail<I>(head: (K, V), tail: I) -> Self
    where
        K: Ord,
        I: IntoIterator<Item = (K, V)>,
    {
        let (key, mut value) = head;
        let mut rest: BTreeMap<K, V> = tail.into_iter().collect();
        if let Some(last) = rest.remove(&key) {
            value = last;
        }
        BTreeMap1 {
            head: (key, value),
            rest,
        }
    }

    /// Constructs a map from `items` or returns `None` if `items` is empty.
    ///
    /// Later entries replace earlier entries with the same key.
    pub fn try_from_iter<I>(items: I) -> Option<Self>
    where
        K: Ord,
        I: IntoIterator<Item = (K, V)>,
    {
        Iterator1::try_from_iter(items).ok().map(BTreeMap1::from_iter1)
    }

    /// Constructs a map from `items` or returns `None` if `items` is empty.
    ///
    /// Entries with the same key are merged from left to right with `f(new, old)`.
    pub fn try_from_iter_with<I, F>(items: I, f: F) -> Option<Self>
    where
        K: Ord,
        I: IntoIterator<Item = (K, V)>,
        F: FnMut(V, V) -> V,
    {
        Iterator1::try_from_iter(items)
            .ok()
            .map(move |items| BTreeMap1::from_iter1_with(items, f))
    }

    pub fn try_from_iter_with_key<I, F>(items: I, f: F) -> Option<Self>
    where
        K: Ord,
        I: IntoIterator<Item = (K, V)>,
        F: FnMut(&K, V, V) -> V,
    {
        Iterator1::try_from_iter(items)
            .ok()
            .map(move |items| BTreeMap1::from_iter1_with_key(items, f))
    }

    pub fn from_iter1_with<I, F>(items: I, mut f: F) -> Self
    where
        K: Ord,
        I: IntoIterator1<Item = (K, V)>,
        F: FnMut(V, V) -> V,
    {
        BTreeMap1::from_iter1_with_key(items, move |_, new, old| f(new, old))
    }

    pub fn from_iter1_with_key<I, F>(items: I, mut f: F) -> Self
    where
        K: Ord,
        I: IntoIterator1<Item = (K, V)>,
        F: FnMut(&K, V, V) -> V,
    {
        let (head, tail) = items.into_iter1().into_head_and_tail();
        tail.fold(BTreeMap1::from_one(head), |items, (key, value)| {
            items.insert_with_key(key, value, &mut f)
        })
    }

    pub fn into_btree_map(self) -> BTreeMap<K, V>
    where
        K: Ord,
    {
        let BTreeMap1 {
            head: (key, value),
            mut rest,
        } = self;
        rest.insert(key, value);
        rest
    }

    /// Splits the map into its minimum entry and the remaining entries.
    pub fn into_head_and_rest(self) -> ((K, V), BTreeMap<K, V>)
    where
        K: Ord,
    {
        let BTreeMap1 { mut head, mut rest } = self;
        if let Some(first) = rest.first_entry() {
            if *first.key() < head.0 {
                let (key, value) = mem::replace(&mut head, first.remove_entry());
                rest.insert(key, value);
            }
        }
        (head, rest)
    }

    pub fn into_vec1(self) -> Vec1<(K, V)>
    where
        K: Ord,
    {
        self.into_iter1().collect1()
    }

    pub fn into_keys1(self) -> Iterator1<IntoKeys<K, V>>
    where
        K: Ord,
    {
        self.into_iter1().map(key_of as fn(_) -> _)
    }

    pub fn into_values1(self) -> Iterator1<IntoValues<K, V>>
    where
        K: Ord,
    {
        self.into_iter1().map(value_of as fn(_) -> _)
    }

    fn insert_in_place(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        if is_same_key(&key, &self.head.0) {
            Some(mem::replace(&mut self.head.1, value))
        }
        else {
            self.rest.insert(key, value)
        }
    }

    pub fn insert(mut self, key: K, value: V) -> Self
    where
        K: Ord,
    {
        self.insert_in_place(key, value);
        self
    }

    /// Inserts an entry, merging it with `f(new, old)` if `key` is already present.
    pub fn insert_with<F>(self, key: K, value: V, f: F) -> Self
    where
        K: Ord,
        F: FnOnce(V, V) -> V,
    {
        self.insert_with_key(key, value, move |_, new, old| f(new, old))
    }

    pub fn insert_with_key<F>(self, key: K, value: V, f: F) -> Self
    where
        K: Ord,
        F: FnOnce(&K, V, V) -> V,
    {
        let BTreeMap1 {
            head: (head_key, head_value),
            mut rest,
        } = self;
        if is_same_key(&key, &head_key) {
            let value = f(&head_key, value, head_value);
            BTreeMap1 {
                head: (head_key, value),
                rest,
            }
        }
        else {
            match rest.remove_entry(&key) {
                Some((key, old)) => {
                    let value = f(&key, value, old);
                    rest.insert(key, value);
                },
                _ => {
                    rest.insert(key, value);
                },
            }
            BTreeMap1 {
                head: (head_key, head_value),
                rest,
            }
        }
    }

    /// Inserts an entry like [`insert_with_key`] and returns the value previously associated
    /// with `key`, if any.
    ///
    /// `f` borrows the old value, because the old value is also returned.
    ///
    /// [`insert_with_key`]: crate::btree_map1::BTreeMap1::insert_with_key
    pub fn insert_lookup_with_key<F>(mut self, key: K, value: V, f: F) -> (Option<V>, Self)
    where
        K: Ord,
        F: FnOnce(&K, V, &V) -> V,
    {
        let old = if is_same_key(&key, &self.head.0) {
            let value = f(&self.head.0, value, &self.head.1);
            Some(mem::replace(&mut self.head.1, value))
        }
        else if let Some(old) = self.rest.get_mut(&key) {
            let value = f(&key, value, old);
            Some(mem::replace(old, value))
        }
        else {
            self.rest.insert(key, value)
        };
        (old, self)
    }

    pub fn adjust<Q, F>(self, query: &Q, f: F) -> Self
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
        F: FnOnce(&mut V),
    {
        self.adjust_with_key(query, move |_, value| f(value))
    }

    pub fn adjust_with_key<Q, F>(mut self, query: &Q, f: F) -> Self
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
        F: FnOnce(&K, &mut V),
    {
        if is_key(&self.head.0, query) {
            f(&self.head.0, &mut self.head.1);
        }
        else if let Some((key, value)) = self
            .rest
            .range_mut::<Q, _>((Bound::Included(query), Bound::Included(query)))
            .next()
        {
            f(key, value);
        }
        self
    }

    /// Removes the entry with the given key.
    ///
    /// This may remove the only entry, so the output is a [`BTreeMap`].
    pub fn remove<Q>(self, query: &Q) -> BTreeMap<K, V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let BTreeMap1 {
            head: (key, value),
            mut rest,
        } = self;
        if !is_key(&key, query) {
            rest.remove(query);
            rest.insert(key, value);
        }
        rest
    }

    /// Replaces the value associated with the given key with the output of `f` or removes the
    /// entry if `f` returns `None`.
    ///
    /// This may remove the only entry, so the output is a [`BTreeMap`].
    pub fn update<Q, F>(self, query: &Q, f: F) -> BTreeMap<K, V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
        F: FnOnce(V) -> Option<V>,
    {
        self.update_with_key(query, move |_, value| f(value))
    }

    pub fn update_with_key<Q, F>(self, query: &Q, f: F) -> BTreeMap<K, V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
        F: FnOnce(&K, V) -> Option<V>,
    {
        let BTreeMap1 {
            head: (head_key, head_value),
            mut rest,
        } = self;
        if is_key(&head_key, query) {
            if let Some(value) = f(&head_key, head_value) {
                rest.insert(head_key, value);
            }
        }
        else {
            if let Some((key, value)) = rest.remove_entry(query) {
                if let Some(value) = f(&key, value) {
                    rest.insert(key, value);
                }
            }
            rest.insert(head_key, head_value);
        }
        rest
    }

    /// Inserts, replaces, or removes the entry with the given key.
    ///
    /// `f` receives the value associated with `key`, if any. The entry is removed if `f` returns
    /// `None`. This may remove the only entry, so the output is a [`BTreeMap`].
    pub fn alter<F>(self, key: K, f: F) -> BTreeMap<K, V>
    where
        K: Ord,
        F: FnOnce(Option<V>) -> Option<V>,
    {
        let BTreeMap1 {
            head: (head_key, head_value),
            mut rest,
        } = self;
        if is_same_key(&key, &head_key) {
            if let Some(value) = f(Some(head_value)) {
                rest.insert(head_key, value);
            }
        }
        else {
            if let Some(value) = f(rest.remove(&key)) {
                rest.insert(key, value);
            }
            rest.insert(head_key, head_value);
        }
        rest
    }

    /// Inserts, replaces, or removes the entry with the given key within an [`Effect`].
    ///
    /// This is like [`alter`], but `f` produces its decision within a context, such as a
    /// [`Result`]. The output map is produced within the same context and only if the context
    /// carries a decision.
    ///
    /// # Examples
    ///
    /// Rejecting an alteration:
    ///
    /// ```rust
    /// use btree1::btree_map1::BTreeMap1;
    ///
    /// let xs1 = BTreeMap1::from([(1u8, 10u8), (2, 20)]);
    /// let ys = xs1.alter_effect(2, |value| match value {
    ///     Some(value) if value > 15 => Err(value),
    ///     value => Ok(value),
    /// });
    /// assert_eq!(ys, Err(20));
    /// ```
    ///
    /// [`alter`]: crate::btree_map1::BTreeMap1::alter
    pub fn alter_effect<W, F>(self, key: K, f: F) -> W::Map<BTreeMap<K, V>>
    where
        K: Ord,
        W: Effect<Option<V>>,
        F: FnOnce(Option<V>) -> W,
    {
        let BTreeMap1 {
            head: (head_key, head_value),
            mut rest,
        } = self;
        if is_same_key(&key, &head_key) {
            f(Some(head_value)).map_effect(move |value| {
                if let Some(value) = value {
                    rest.insert(head_key, value);
                }
                rest
            })
        }
        else {
            let old = rest.remove(&key);
            f(old).map_effect(move |value| {
                if let Some(value) = value {
                    rest.insert(key, value);
                }
                rest.insert(head_key, head_value);
                rest
            })
        }
    }

    pub fn try_alter<E, F>(self, key: K, f: F) -> Result<BTreeMap<K, V>, E>
    where
        K: Ord,
        F: FnOnce(Option<V>) -> Result<Option<V>, E>,
    {
        self.alter_effect(key, f)
    }

    pub fn map_values<U, F>(self, mut f: F) -> BTreeMap1<K, U>
    where
        K: Ord,
        F: FnMut(V) -> U,
    {
        self.map_values_with_key(move |_, value| f(value))
    }

    /// Maps the values of the map with `f`, which is applied in key order.
    pub fn map_values_with_key<U, F>(self, mut f: F) -> BTreeMap1<K, U>
    where
        K: Ord,
        F: FnMut(&K, V) -> U,
    {
        let BTreeMap1 { head, mut rest } = self;
        let upper = rest.split_off(&head.0);
        let mut entry = move |(key, value): (K, V)| {
            let value = f(&key, value);
            (key, value)
        };
        let mut lower: BTreeMap<K, U> = rest.into_iter().map(&mut entry).collect();
        let head = entry(head);
        lower.extend(upper.into_iter().map(&mut entry));
        BTreeMap1 { head, rest: lower }
    }

    /// Maps the keys of the map with `f`.
    ///
    /// The mapped head entry is inserted first, followed by the remaining entries in key order.
    /// If mapped keys collide, the last entry is kept.
    pub fn map_keys<L, F>(self, f: F) -> BTreeMap1<L, V>
    where
        L: Ord,
        F: FnMut(K) -> L,
    {
        BTreeMap1::from_iter1(self.into_mapped_keys(f))
    }

    /// Maps the keys of the map with `f`, merging the values of colliding keys with
    /// `combine(new, old)`.
    ///
    /// The mapped head entry is inserted first, followed by the remaining entries in key order.
    pub fn map_keys_with<L, F, C>(self, f: F, combine: C) -> BTreeMap1<L, V>
    where
        L: Ord,
        F: FnMut(K) -> L,
        C: FnMut(V, V) -> V,
    {
        BTreeMap1::from_iter1_with(self.into_mapped_keys(f), combine)
    }

    fn into_mapped_keys<L, F>(self, mut f: F) -> Iterator1<impl Iterator<Item = (L, V)>>
    where
        F: FnMut(K) -> L,
    {
        let BTreeMap1 { head, rest } = self;
        iter1::head_and_tail(head, rest).map(move |(key, value)| (f(key), value))
    }

    pub fn fold<B, F>(self, init: B, f: F) -> B
    where
        K: Ord,
        F: FnMut(B, (K, V)) -> B,
    {
        self.into_iter().fold(init, f)
    }

    /// Folds the values in key order, seeded with the value of the minimum entry.
    pub fn reduce<F>(self, f: F) -> V
    where
        K: Ord,
        F: FnMut(V, V) -> V,
    {
        self.into_values1().reduce(f)
    }

    pub fn get<Q>(&self, query: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get_key_value(query).map(|(_, value)| value)
    }

    pub fn get_key_value<Q>(&self, query: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        if is_key(&self.head.0, query) {
            Some((&self.head.0, &self.head.1))
        }
        else {
            self.rest.get_key_value(query)
        }
    }

    pub fn get_or<'a, Q>(&'a self, query: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get(query).unwrap_or(default)
    }

    pub fn contains_key<Q>(&self, query: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get(query).is_some()
    }

    pub fn not_contains_key<Q>(&self, query: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        !self.contains_key(query)
    }

    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.rest.len())
    }

    pub fn first_key_value(&self) -> (&K, &V)
    where
        K: Ord,
    {
        match self.rest.first_key_value() {
            Some((key, value)) if *key < self.head.0 => (key, value),
            _ => (&self.head.0, &self.head.1),
        }
    }

    pub fn last_key_value(&self) -> (&K, &V)
    where
        K: Ord,
    {
        match self.rest.last_key_value() {
            Some((key, value)) if *key > self.head.0 => (key, value),
            _ => (&self.head.0, &self.head.1),
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V>
    where
        K: Ord,
    {
        let key = &self.head.0;
        Iter {
            lower: self
                .rest
                .range::<K, _>((Bound::Unbounded, Bound::Excluded(key))),
            head: Some((key, &self.head.1)),
            upper: self
                .rest
                .range::<K, _>((Bound::Excluded(key), Bound::Unbounded)),
            len: self.len().get(),
        }
    }

    pub fn iter1(&self) -> Iterator1<Iter<'_, K, V>>
    where
        K: Ord,
    {
        Iterator1::from_iter_unchecked(self.iter())
    }

    pub fn keys1(&self) -> Iterator1<Keys<'_, K, V>>
    where
        K: Ord,
    {
        self.iter1().map(key_of as fn(_) -> _)
    }

    pub fn values1(&self) -> Iterator1<Values<'_, K, V>>
    where
        K: Ord,
    {
        self.iter1().map(value_of as fn(_) -> _)
    }
}

#[cfg(feature = "arbitrary")]
#[cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]
impl<'a, K, V> Arbitrary<'a> for BTreeMap1<K, V>
where
    K: Arbitrary<'a> + Ord,
    V: Arbitrary<'a>,
{
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let head = <(K, V)>::arbitrary(unstructured)?;
        let tail = unstructured
            .arbitrary_iter()?
            .collect::<arbitrary::Result<BTreeMap<K, V>>>()?;
        Ok(BTreeMap1::from_head_and_tail(head, tail))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        (<(K, V)>::size_hint(depth).0, None)
    }
}

impl<K, V> Debug for BTreeMap1<K, V>
where
    K: Debug + Ord,
    V: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<K, V> Eq for BTreeMap1<K, V>
where
    K: Ord,
    V: Eq,
{
}

impl<K, V> Extend<(K, V)> for BTreeMap1<K, V>
where
    K: Ord,
{
    fn extend<I>(&mut self, extension: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in extension {
            self.insert_in_place(key, value);
        }
    }
}

macro_rules! impl_from_array_for_btree_map1 {
    ($N:literal) => {
        impl<K, V> From<[(K, V); $N]> for $crate::btree_map1::BTreeMap1<K, V>
        where
            K: Ord,
        {
            fn from(items: [(K, V); $N]) -> Self {
                <Self as $crate::iter1::FromIterator1<(K, V)>>::from_iter1(items)
            }
        }
    };
}
crate::with_non_zero_array_size_literals!(impl_from_array_for_btree_map1);

impl<K, V> From<BTreeMap1<K, V>> for BTreeMap<K, V>
where
    K: Ord,
{
    fn from(items: BTreeMap1<K, V>) -> Self {
        items.into_btree_map()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<K, V> From<BTreeMap1<K, V>> for Serde<BTreeMap<K, V>>
where
    K: Ord,
{
    fn from(items: BTreeMap1<K, V>) -> Self {
        Serde {
            items: items.into_btree_map(),
        }
    }
}

impl<K, V> FromIterator1<(K, V)> for BTreeMap1<K, V>
where
    K: Ord,
{
    fn from_iter1<I>(items: I) -> Self
    where
        I: IntoIterator1<Item = (K, V)>,
    {
        let (head, tail) = items.into_iter1().into_head_and_tail();
        BTreeMap1::from_head_and_tail(head, tail)
    }
}

impl<K, V> Hash for BTreeMap1<K, V>
where
    K: Hash + Ord,
    V: Hash,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        state.write_usize(self.len().get());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<K, V> IntoIterator for BTreeMap1<K, V>
where
    K: Ord,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let BTreeMap1 { head, mut rest } = self;
        let upper = rest.split_off(&head.0);
        IntoIter {
            lower: rest.into_iter(),
            head: Some(head),
            upper: upper.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a BTreeMap1<K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator1 for BTreeMap1<K, V>
where
    K: Ord,
{
    fn into_iter1(self) -> Iterator1<Self::IntoIter> {
        Iterator1::from_iter_unchecked(self)
    }
}

impl<K, V> Ord for BTreeMap1<K, V>
where
    K: Ord,
    V: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K, V> PartialEq for BTreeMap1<K, V>
where
    K: Ord,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> PartialEq<BTreeMap<K, V>> for BTreeMap1<K, V>
where
    K: Ord,
    V: PartialEq,
{
    fn eq(&self, other: &BTreeMap<K, V>) -> bool {
        self.len().get() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> PartialOrd for BTreeMap1<K, V>
where
    K: Ord,
    V: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<K, V> TryFrom<Serde<BTreeMap<K, V>>> for BTreeMap1<K, V>
where
    K: Ord,
{
    type Error = EmptyError;

    fn try_from(serde: Serde<BTreeMap<K, V>>) -> Result<Self, Self::Error> {
        BTreeMap1::try_from(serde.items).map_err(|_| EmptyError)
    }
}

impl<K, V> TryFrom<BTreeMap<K, V>> for BTreeMap1<K, V>
where
    K: Ord,
{
    type Error = BTreeMap<K, V>;

    fn try_from(mut items: BTreeMap<K, V>) -> Result<Self, Self::Error> {
        match items.pop_first() {
            Some(head) => Ok(BTreeMap1 { head, rest: items }),
            _ => Err(items),
        }
    }
}

/// An iterator over the entries of a [`BTreeMap1`] in key order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    lower: btree_map::Range<'a, K, V>,
    head: Option<(&'a K, &'a V)>,
    upper: btree_map::Range<'a, K, V>,
    len: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            lower: self.lower.clone(),
            head: self.head,
            upper: self.upper.clone(),
            len: self.len,
        }
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self
            .upper
            .next_back()
            .or_else(|| self.head.take())
            .or_else(|| self.lower.next_back());
        if item.is_some() {
            self.len -= 1;
        }
        item
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self
            .lower
            .next()
            .or_else(|| self.head.take())
            .or_else(|| self.upper.next());
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

/// An owning iterator over the entries of a [`BTreeMap1`] in key order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    lower: btree_map::IntoIter<K, V>,
    head: Option<(K, V)>,
    upper: btree_map::IntoIter<K, V>,
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.upper
            .next_back()
            .or_else(|| self.head.take())
            .or_else(|| self.lower.next_back())
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.lower.len() + usize::from(self.head.is_some()) + self.upper.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.lower
            .next()
            .or_else(|| self.head.take())
            .or_else(|| self.upper.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = ExactSizeIterator::len(self);
        (n, Some(n))
    }
}

fn is_key<K, Q>(key: &K, query: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    Borrow::<Q>::borrow(key).cmp(query) == Ordering::Equal
}

fn is_same_key<K>(key: &K, other: &K) -> bool
where
    K: Ord,
{
    key.cmp(other) == Ordering::Equal
}

fn key_of<K, V>((key, _): (K, V)) -> K {
    key
}

fn value_of<K, V>((_, value): (K, V)) -> V {
    value
}
