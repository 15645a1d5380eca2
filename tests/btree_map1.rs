use btree1::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

type Entries = Vec<(u8, u16)>;

fn entries1() -> impl Strategy<Value = Entries> {
    vec((0u8..32, any::<u16>()), 1..24)
}

fn btree_map1(entries: Entries) -> BTreeMap1<u8, u16> {
    BTreeMap1::try_from_iter(entries).expect("entries must be non-empty")
}

fn hash_of<T>(item: &T) -> u64
where
    T: Hash,
{
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn try_from_iter_then_into_btree_map_eq_collected(entries in entries1()) {
        let expected: BTreeMap<_, _> = entries.iter().copied().collect();
        let xs1 = btree_map1(entries);
        prop_assert_eq!(xs1.len().get(), expected.len());
        prop_assert_eq!(xs1.into_btree_map(), expected);
    }

    #[test]
    fn insert_then_get_eq_value(entries in entries1(), key in 0u8..40, value in any::<u16>()) {
        let xs1 = btree_map1(entries).insert(key, value);
        prop_assert_eq!(xs1.get(&key), Some(&value));
        prop_assert!(xs1.contains_key(&key));
    }

    #[test]
    fn insert_twice_then_eq_insert_once(
        entries in entries1(),
        key in 0u8..40,
        value in any::<u16>(),
    ) {
        let xs1 = btree_map1(entries).insert(key, value);
        prop_assert_eq!(xs1.clone().insert(key, value), xs1);
    }

    #[test]
    fn insert_with_then_value_eq_combined(
        entries in entries1(),
        key in 0u8..40,
        value in any::<u16>(),
    ) {
        let xs1 = btree_map1(entries);
        let old = xs1.get(&key).copied();
        let xs1 = xs1.insert_with(key, value, |new, old| new.wrapping_mul(3).wrapping_sub(old));
        let expected = match old {
            Some(old) => value.wrapping_mul(3).wrapping_sub(old),
            _ => value,
        };
        prop_assert_eq!(xs1.get(&key), Some(&expected));
    }

    #[test]
    fn contains_key_eq_get_is_some(entries in entries1(), key in 0u8..40) {
        let xs1 = btree_map1(entries);
        prop_assert_eq!(xs1.contains_key(&key), xs1.get(&key).is_some());
        prop_assert_eq!(xs1.not_contains_key(&key), xs1.get(&key).is_none());
    }

    #[test]
    fn remove_then_len_shrinks_by_presence(entries in entries1(), key in 0u8..40) {
        let xs1 = btree_map1(entries);
        let n = xs1.len().get();
        let present = xs1.contains_key(&key);
        let xs = xs1.remove(&key);
        prop_assert_eq!(xs.len(), if present { n - 1 } else { n });
        prop_assert!(!xs.contains_key(&key));
    }

    #[test]
    fn alter_then_eq_btree_map_alter(
        entries in entries1(),
        key in 0u8..40,
        value in proptest::option::of(any::<u16>()),
    ) {
        let xs1 = btree_map1(entries);
        let mut expected = xs1.clone().into_btree_map();
        match value {
            Some(value) => {
                expected.insert(key, value);
            },
            _ => {
                expected.remove(&key);
            },
        }
        prop_assert_eq!(xs1.alter(key, move |_| value), expected);
    }

    #[test]
    fn iter_then_keys_are_strictly_ascending(entries in entries1()) {
        let xs1 = btree_map1(entries);
        let keys: Vec<_> = xs1.keys1().into_iter().copied().collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(keys.len(), xs1.len().get());
    }

    #[test]
    fn eq_maps_from_permuted_entries_then_eq_and_hash_eq(entries in entries1()) {
        // Deduplicating keys first makes the map independent of the order of `entries`.
        let entries: Vec<_> = entries
            .into_iter()
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .collect();
        let xs1 = btree_map1(entries.clone());
        let ys1 = btree_map1(entries.into_iter().rev().collect());
        prop_assert_eq!(&xs1, &ys1);
        prop_assert_eq!(hash_of(&xs1), hash_of(&ys1));
        prop_assert_eq!(xs1.cmp(&ys1), std::cmp::Ordering::Equal);
    }

    #[test]
    fn map_values_then_len_and_keys_are_preserved(entries in entries1()) {
        let xs1 = btree_map1(entries);
        let keys: Vec<_> = xs1.keys1().into_iter().copied().collect();
        let ys1 = xs1.map_values(u32::from);
        prop_assert_eq!(ys1.keys1().into_iter().copied().collect::<Vec<_>>(), keys);
    }

    #[test]
    fn into_head_and_rest_then_head_is_minimum(entries in entries1()) {
        let xs1 = btree_map1(entries);
        let (key, value) = xs1.first_key_value();
        let (key, value) = (*key, *value);
        let (head, rest) = xs1.into_head_and_rest();
        prop_assert_eq!(head, (key, value));
        prop_assert!(rest.keys().all(|&other| other > key));
    }
}

#[test]
fn try_from_empty_iter_then_none() {
    assert!(BTreeMap1::<u8, u16>::try_from_iter(Entries::new()).is_none());
}

#[test]
fn worked_examples() {
    let xs1 = BTreeMap1::try_from_iter([(1, "a"), (2, "b"), (3, "c")]).unwrap();
    assert_eq!(xs1.get(&2), Some(&"b"));
    assert_eq!(xs1.len().get(), 3);
    let xs = xs1.clone().remove(&1);
    assert_eq!(xs.len(), 2);
    assert!(!xs.contains_key(&1));
    assert_eq!(
        xs1.into_btree_map(),
        BTreeMap::from([(1, "a"), (2, "b"), (3, "c")]),
    );

    let xs1 = BTreeMap1::try_from_iter_with([(1, 10), (1, 5), (2, 3)], |new, old| new + old).unwrap();
    assert_eq!(xs1.get(&1), Some(&15));
    assert_eq!(xs1.get(&2), Some(&3));
}

#[test]
fn from_iter1_of_array_then_len_eq() {
    let xs1 = BTreeMap1::from_iter1([(0u8, 'a'), (1, 'b')]);
    assert_eq!(xs1.len().get(), 2);
    assert_eq!(xs1.into_vec1().first(), &(0, 'a'));
}
