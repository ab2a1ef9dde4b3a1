use llrb_map::{Color, RedBlackMap};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100_000;
const KEY_RANGE: i32 = 1_000;

fn new_rng() -> rand::XorShiftRng {
    rand::SeedableRng::from_seed([1, 1, 1, 1])
}

fn height_bound(len: usize) -> i32 {
    (2.0 * ((len + 1) as f64).log2()).floor() as i32
}

#[test]
fn int_test_insertions() {
    let mut rng = new_rng();
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<i32>();
        let value = rng.gen::<i32>();

        assert_eq!(
            map.insert(key, value),
            expected.insert(key, value).map(|old| (key, old)),
        );
    }

    assert_eq!(map.len(), expected.len());
    assert!(map.validate().is_ok());
    assert_eq!(map.root_color(), Some(Color::Black));
    assert!(map.height() <= height_bound(map.len()));
    assert_eq!(
        map.iter().collect::<Vec<(&i32, &i32)>>(),
        expected.iter().collect::<Vec<(&i32, &i32)>>(),
    );
    for (key, value) in &expected {
        assert_eq!(map.get(key), Some(value));
    }
}

#[test]
fn int_test_insertions_preserve_invariants() {
    let mut rng = new_rng();
    let mut map = RedBlackMap::new();

    for i in 0..2_000 {
        let key = rng.gen_range(0, KEY_RANGE);
        map.insert(key, i);
        assert!(map.validate().is_ok());
        assert!(map.height() <= height_bound(map.len()));
    }
}

#[test]
fn int_test_sorted_insertions() {
    let mut ascending = RedBlackMap::new();
    let mut descending = RedBlackMap::new();
    for key in 0..4_096 {
        ascending.insert(key, key);
        descending.insert(-key, key);
    }

    assert!(ascending.validate().is_ok());
    assert!(descending.validate().is_ok());
    assert!(ascending.height() <= height_bound(4_096));
    assert!(descending.height() <= height_bound(4_096));
}

#[test]
fn int_test_mixed_operations() {
    let mut rng = new_rng();
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);

        if rng.gen::<bool>() {
            let value = rng.gen::<i32>();
            map.insert(key, value);
            expected.insert(key, value);
        } else {
            let len = map.len();
            let removed = map.remove(&key);
            assert_eq!(removed, expected.remove(&key).map(|value| (key, value)));
            match removed {
                Some(_) => assert_eq!(map.len(), len - 1),
                None => assert_eq!(map.len(), len),
            }
            assert_eq!(map.get(&key), None);
        }

        assert_eq!(map.get(&key), expected.get(&key));
    }

    assert!(map.check_order().is_ok());
    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.into_iter().collect::<Vec<(i32, i32)>>(),
        expected.into_iter().collect::<Vec<(i32, i32)>>(),
    );
}

#[test]
fn int_test_remove_all() {
    let mut rng = new_rng();
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for i in 0..2_000 {
        let key = rng.gen::<i32>();
        map.insert(key, i);
        expected.insert(key, i);
    }

    let mut pairs = expected.into_iter().collect::<Vec<(i32, i32)>>();
    rng.shuffle(&mut pairs);
    for (key, value) in pairs {
        assert_eq!(map.remove(&key), Some((key, value)));
        assert_eq!(map.remove(&key), None);
        assert!(map.check_order().is_ok());
        if let Some(color) = map.root_color() {
            assert_eq!(color, Color::Black);
        }
    }

    assert!(map.is_empty());
    assert_eq!(map.height(), -1);
}

#[test]
fn int_test_remove_returns_latest_value() {
    let mut map = RedBlackMap::new();
    for (i, &key) in [2056, 1, 2056, 1, 7, 2056, 1].iter().enumerate() {
        map.insert(key, i as i32);
    }

    assert_eq!(map.len(), 3);
    assert_eq!(map.remove(&1), Some((1, 6)));
    assert_eq!(map.remove(&2056), Some((2056, 5)));
    assert_eq!(map.remove(&7), Some((7, 4)));
    assert!(map.is_empty());
}

#[test]
fn int_test_missing_keys() {
    let mut map: RedBlackMap = (0..100).map(|key| (key * 2, key)).collect();
    let before = map.traverse().collect::<Vec<_>>();

    for key in (0..100).map(|key| key * 2 + 1) {
        assert_eq!(map.get(&key), None);
        assert_eq!(map.remove(&key), None);
    }

    assert_eq!(map.len(), 100);
    assert_eq!(map.traverse().collect::<Vec<_>>(), before);
}
