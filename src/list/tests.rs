#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{DropCounter, Zst};
use crate::util::panic::assert_panics;

#[test]
fn test_push_preserves_order() {
    let list: List<u32> = (0..5).collect();

    assert_eq!(list.len(), 5);
    for i in 0..5 {
        assert_eq!(
            list.get(i as usize),
            Some(&i),
            "Elements should be readable back in insertion order."
        );
    }
    assert!(list.iter().copied().eq(0..5));
}

#[test]
fn test_get_out_of_bounds() {
    let empty: List<&str> = List::new();
    assert_eq!(
        empty.get(0),
        None,
        "An empty list has no element at index 0."
    );

    let list: List<u8> = (0..3).collect();
    assert_eq!(list.get(3), None);
    assert_eq!(list.get(usize::MAX), None);
}

#[test]
fn test_remove_head_relinks() {
    let mut list: List<&str> = ["1", "2", "3"].into_iter().collect();

    assert_eq!(list.remove(0), Ok("1"));

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&"2"));
    assert_eq!(list.get(1), Some(&"3"));
}

#[test]
fn test_failed_remove_is_idempotent() {
    let mut list: List<u8> = (0..3).collect();

    for _ in 0..4 {
        assert_eq!(
            list.remove(3),
            Err(IndexOutOfBounds { index: 3, len: 3 }),
            "Removing one past the end should fail identically every time."
        );
        assert_eq!(list.len(), 3, "A failed removal should not change the length.");
    }
}

#[test]
fn test_remove_item_takes_first_match() {
    let mut list: List<u8> = [1, 2, 3, 2].into_iter().collect();

    assert_eq!(list.remove_item(&2), Some(2));
    assert!(
        list.iter().eq([1, 3, 2].iter()),
        "Only the earliest match should be removed."
    );

    assert_eq!(list.remove_item(&7), None);
    assert_eq!(list.len(), 3, "A miss should leave the list untouched.");
}

#[test]
fn test_index_of_and_contains() {
    let list: List<char> = ['a', 'b', 'c'].into_iter().collect();

    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.index_of(&'z'), None);
    assert!(list.contains(&'c'));
    assert!(!list.contains(&'z'));
}

#[test]
fn test_insert_at_index() {
    let mut list: List<u8> = [0, 1, 3].into_iter().collect();

    assert_eq!(list.insert(2, 2), Ok(()));
    assert_eq!(list.insert(4, 4), Ok(()), "Inserting at the length should append.");
    assert_eq!(list.insert(0, 9), Ok(()));
    assert!(list.iter().eq([9, 0, 1, 2, 3, 4].iter()));

    assert_eq!(list.insert(99, 9), Err(IndexOutOfBounds { index: 99, len: 6 }));
}

#[test]
fn test_front_back_accessors() {
    let mut list: List<u8> = (1..=3).collect();

    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    if let Some(back) = list.back_mut() {
        *back = 30;
    }
    assert!(list.iter().eq([10, 2, 30].iter()));

    list.push_front(0);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.pop_front(), Some(0));
}

#[test]
fn test_mutation_through_iter_mut() {
    let mut list: List<u8> = (0..4).collect();

    for value in list.iter_mut() {
        *value *= 2;
    }

    assert!(list.iter().eq([0, 2, 4, 6].iter()));
}

#[test]
fn test_display_formatting() {
    let mut list: List<u8> = (1..=3).collect();
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");

    list.clear();
    assert_eq!(format!("{list}"), "()");

    let words: List<&str> = ["a"].into_iter().collect();
    assert_eq!(format!("{words:?}"), "[\"a\"]");
}

#[test]
fn test_equality_tracks_contents() {
    let mut a: List<u8> = (0..3).collect();
    let b: List<u8> = (0..3).collect();

    assert_eq!(a, b);

    a.push_back(3);
    assert_ne!(a, b);
}

#[test]
fn test_drop_releases_every_node() {
    let counter = DropCounter::new();
    let list: List<DropCounter> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);

    assert_eq!(
        counter.count(),
        10,
        "Dropping the list should drop each element exactly once."
    );
}

#[test]
fn test_partial_into_iter_releases_the_rest() {
    let counter = DropCounter::new();
    let list: List<DropCounter> = iter::repeat_with(|| counter.clone()).take(6).collect();

    let mut into_iter = list.into_iter();
    drop(into_iter.next());
    drop(into_iter.next());
    assert_eq!(counter.count(), 2);

    drop(into_iter);
    assert_eq!(
        counter.count(),
        6,
        "Dropping a part-consumed iterator should release the unconsumed tail."
    );
}

#[test]
fn test_zero_sized_elements() {
    let mut list: List<Zst> = iter::repeat(Zst).take(4).collect();

    assert_eq!(list.len(), 4);
    assert_eq!(list.pop_front(), Some(Zst));
    assert_eq!(list.get(2), Some(&Zst));
    assert_eq!(list.get(3), None);
}

#[test]
fn test_index_operator_contract() {
    let mut list: List<u8> = (0..3).collect();
    assert_eq!(list[2], 2);

    list[1] = 9;
    assert_eq!(list.get(1), Some(&9));

    assert_panics!({
        let empty: List<u8> = List::new();
        empty[0]
    });
}
