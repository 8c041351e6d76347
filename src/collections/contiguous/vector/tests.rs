#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::alloc::{CountedDrop, MoveOnly, ZeroSizedType};
use crate::util::panic::assert_panics;
use crate::vector;

#[test]
fn test_push_growth() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();

    for i in 0..9_u32 {
        vec.push(i);
        caps.push(vec.cap());
    }

    assert_eq!(
        caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should start at 1 and double whenever the Vector is full."
    );
    assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_checked_and_unchecked_access() {
    let mut vec = vector![10, 20, 30];

    for i in 0..vec.len() {
        // SAFETY: i < len.
        assert_eq!(
            vec.at(i),
            Ok(unsafe { vec.get_unchecked(i) }),
            "Checked and unchecked access should agree for in-bounds indices."
        );
    }
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *vec.at_mut(1).unwrap() = 21;
    // SAFETY: 2 < len.
    unsafe { *vec.get_unchecked_mut(2) += 1; }
    assert_eq!(vec, [10, 21, 31]);
    assert_eq!(vec[1], 21, "Indexing through the slice should see the same values.");

    assert_eq!(vec.front(), Some(&10));
    assert_eq!(vec.back(), Some(&31));
    *vec.front_mut().unwrap() = 0;
    assert_eq!(vec.at(0), Ok(&0));
}

#[test]
fn test_checked_access_on_empty() {
    let vec: Vector<u8> = Vector::new();

    for index in [0, 1, usize::MAX] {
        assert_eq!(
            vec.at(index),
            Err(IndexOutOfBounds { index, len: 0 }),
            "Every index should be out of bounds for an empty Vector."
        );
    }
    assert_eq!(vec.front(), None);
    assert_eq!(vec.back(), None);
}

#[test]
fn test_reserve() {
    let mut vec = vector![1_u64, 2, 3];
    vec.reserve(8);
    assert_eq!(vec.cap(), 8, "Reserve should grow to exactly the requested capacity.");
    assert_eq!(vec, [1, 2, 3], "Reserve should preserve all elements.");

    let old_ptr = vec.as_ptr();
    vec.reserve(8);
    vec.reserve(2);
    assert_eq!(vec.cap(), 8, "Reserving no more than the capacity should be a no-op.");
    assert_eq!(vec.as_ptr(), old_ptr, "A no-op reserve shouldn't reallocate.");

    assert_eq!(vec.try_reserve(Vector::<u64>::max_len() + 1), Err(CapacityOverflow));
    assert_eq!(vec.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(vec.cap(), 8, "A failed reserve should leave the Vector untouched.");

    assert_panics!({
        let mut vec = vector![1_u64];
        vec.reserve(usize::MAX);
    });
}

#[test]
fn test_shrink_and_clear() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    vec.reserve(20);

    vec.truncate(4);
    assert_eq!(counter.get(), 2, "Truncating should drop the removed elements.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 4);
    let old_ptr = vec.as_ptr();
    vec.shrink_to_fit();
    assert_eq!(vec.as_ptr(), old_ptr, "Shrinking a full Vector shouldn't reallocate.");

    vec.clear();
    assert_eq!(counter.get(), 6, "Clearing should drop every element.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 4, "Clearing should leave the capacity unchanged.");
}

#[test]
fn test_insert_and_remove() {
    let mut vec = vector![1, 2, 3, 4];

    assert_eq!(vec.remove(1), 2);
    assert_eq!(vec, [1, 3, 4]);
    assert_eq!(vec.len(), 3);

    assert_eq!(*vec.insert(1, 9), 9);
    assert_eq!(vec, [1, 9, 3, 4]);
    assert_eq!(vec.len(), 4);

    vec.insert(4, 5);
    assert_eq!(vec, [1, 9, 3, 4, 5], "Inserting at the length should append.");

    assert_eq!(
        vec.try_insert(7, 0).map(|v| *v),
        Err(IndexOutOfBounds { index: 7, len: 5 }.into())
    );
    assert_eq!(vec.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(vec, [1, 9, 3, 4, 5], "Failed operations should leave the Vector untouched.");

    assert_panics!({
        let mut vec = vector![1, 2];
        vec.insert(3, 0);
    });
    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.remove(0);
    });
}

#[test]
fn test_insert_grows_when_full() {
    let mut vec = Vector::with_cap(2);
    vec.push('a');
    vec.push('c');
    assert_eq!(vec.len(), vec.cap());

    let inserted = vec.insert(1, 'b');
    *inserted = 'B';
    assert_eq!(vec, ['a', 'B', 'c'], "The returned reference should point into the new buffer.");
    assert_eq!(vec.cap(), 4, "Inserting into a full Vector should double the capacity.");

    let mut empty = Vector::new();
    empty.insert(0, 1);
    assert_eq!(empty.cap(), 1);
}

#[test]
fn test_pop() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(2).collect();

    let popped = vec.pop();
    assert!(popped.is_some());
    assert_eq!(counter.get(), 0, "Popping should move the value out, not drop it.");
    drop(popped);
    assert_eq!(counter.get(), 1);

    assert!(vec.pop().is_some());
    assert!(vec.pop().is_none());
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_swap_with() {
    let mut a = vector![1, 2, 3];
    let mut b = Vector::with_cap(10);
    b.push(4);
    let (a_ptr, b_ptr) = (a.as_ptr(), b.as_ptr());

    a.swap_with(&mut b);
    assert_eq!((a.len(), a.cap()), (1, 10));
    assert_eq!((b.len(), b.cap()), (3, 3));
    assert_eq!(a.as_ptr(), b_ptr, "Swapping should exchange buffers, not elements.");
    assert_eq!(b.as_ptr(), a_ptr, "Swapping should exchange buffers, not elements.");

    a.swap_with(&mut b);
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [4]);
}

#[test]
fn test_move_transfers_ownership() {
    let mut source = Vector::new();
    for i in 0..5 {
        source.push(MoveOnly(i));
    }
    let (ptr, cap) = (source.as_ptr(), source.cap());

    let dest = source.take();
    assert!(source.is_empty());
    assert_eq!(source.len(), 0);
    assert_eq!(source.cap(), 0, "The source should be left without an allocation.");
    assert_eq!(dest.len(), 5);
    assert_eq!(dest.cap(), cap);
    assert_eq!(dest.as_ptr(), ptr, "Moving should transfer the buffer itself.");
    assert_eq!(dest[4], MoveOnly(4));

    let mut assigned = vector![MoveOnly(100)];
    assert_eq!(assigned.len(), 1);
    assigned = dest;
    assert_eq!(assigned.as_ptr(), ptr);
    assert_eq!(assigned.len(), 5);
}

#[test]
fn test_clone_is_independent() {
    let mut original = Vector::with_cap(6);
    original.extend([1, 2, 3]);

    let mut copy = original.clone();
    assert_eq!(copy, original, "A clone should compare equal to its source.");
    assert_eq!(copy.cap(), 6, "A clone should share the source's capacity.");
    assert_ne!(copy.as_ptr(), original.as_ptr());

    copy.push(4);
    original[0] = 100;
    assert_eq!(original, [100, 2, 3]);
    assert_eq!(copy, [1, 2, 3, 4]);
}

#[test]
fn test_constructors() {
    let defaults: Vector<u8> = Vector::with_len(3);
    assert_eq!(defaults, [0, 0, 0]);
    assert_eq!(defaults.cap(), 3);

    let repeated = Vector::repeat(String::from("x"), 2);
    assert_eq!(repeated, [String::from("x"), String::from("x")]);
    assert!(Vector::repeat(1, 0).is_empty());

    assert_eq!(vector![7; 3], [7, 7, 7]);
    assert_eq!(Vector::from(&[1, 2][..]), [1, 2]);

    let collected: Vector<_> = (0..4).collect();
    assert_eq!(collected, vector![0, 1, 2, 3]);
}

#[test]
fn test_append() {
    let mut a = vector![1, 2];
    let mut b = vector![3, 4, 5];

    a.append(&mut b);
    assert_eq!(a, [1, 2, 3, 4, 5]);
    assert!(b.is_empty());
    assert_eq!(b.cap(), 3);
}

#[test]
fn test_repeated_extend_and_append_double() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..9_u32 {
        vec.extend(Some(i));
        caps.push(vec.cap());
    }
    assert_eq!(
        caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Small extends should grow the same way as push does."
    );

    let mut vec = vector![0_u8; 4];
    vec.append(&mut vector![1]);
    assert_eq!(vec.cap(), 8);
    vec.append(&mut vector![2; 3]);
    assert_eq!(vec.cap(), 8, "Appending within capacity shouldn't reallocate.");
    vec.append(&mut vector![3; 20]);
    assert_eq!(vec.cap(), 28, "A large append should grow to exactly the combined length.");
    assert_eq!(vec.len(), 28);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);

    assert_eq!(counter.get(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_iterators() {
    let mut vec = vector![0_usize, 1, 2, 3, 4];

    for i in &mut vec {
        *i *= 2;
    }
    assert_eq!(vec, [0, 2, 4, 6, 8], "Vector mutated by iterator should equal this slice.");
    assert_eq!((&vec).into_iter().sum::<usize>(), 20);

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.get(),
        10,
        "Dropping an owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_equality_and_hash() {
    let vec = vector![0_usize, 1, 2];

    assert_eq!(vec, (0..3).collect::<Vector<_>>());
    assert_ne!(vec, vector![0, 1, 3]);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2]),
        "A Vector should hash like the equivalent slice."
    );
}

#[test]
fn test_formatting() {
    let vec = vector![1, 2];
    assert_eq!(format!("{vec}"), "[1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.cap(), 16);
    assert_eq!(Vector::<ZeroSizedType>::max_len(), usize::MAX);

    vec.insert(3, ZeroSizedType);
    assert_eq!(vec.remove(0), ZeroSizedType);
    assert_eq!(vec.into_iter().count(), 10);
}

proptest! {
    #[test]
    fn push_keeps_order(values in prop::collection::vec(any::<u32>(), 0..200)) {
        let mut vec = Vector::new();
        for &value in &values {
            vec.push(value);
        }

        prop_assert_eq!(vec.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(vec.at(i), Ok(value));
        }
        prop_assert!(vec.cap() >= vec.len());
    }

    #[test]
    fn reserve_is_exact_or_noop(
        values in prop::collection::vec(any::<u8>(), 0..50),
        new_cap in 0_usize..100,
    ) {
        let mut vec: Vector<u8> = values.iter().copied().collect();
        let old_cap = vec.cap();

        vec.reserve(new_cap);

        prop_assert_eq!(vec.cap(), old_cap.max(new_cap));
        prop_assert_eq!(&*vec, values.as_slice());
    }

    #[test]
    fn insert_then_remove_restores(
        values in prop::collection::vec(any::<i16>(), 0..50),
        pos in any::<prop::sample::Index>(),
        value in any::<i16>(),
    ) {
        let mut vec: Vector<i16> = values.iter().copied().collect();
        let pos = pos.index(values.len() + 1);

        vec.insert(pos, value);
        prop_assert_eq!(vec.at(pos), Ok(&value));
        prop_assert_eq!(vec.remove(pos), value);

        prop_assert_eq!(&*vec, values.as_slice());
    }

    #[test]
    fn swap_twice_restores(
        a in prop::collection::vec(any::<u8>(), 0..20),
        b in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let mut vec_a: Vector<u8> = a.iter().copied().collect();
        let mut vec_b: Vector<u8> = b.iter().copied().collect();

        vec_a.swap_with(&mut vec_b);
        prop_assert_eq!(&*vec_a, b.as_slice());
        vec_a.swap_with(&mut vec_b);

        prop_assert_eq!(&*vec_a, a.as_slice());
        prop_assert_eq!(&*vec_b, b.as_slice());
    }
}
