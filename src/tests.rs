use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::thread;

use crate::{Deque, EmptyAccess, Queue, SharedDeque, ShiftDeque};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_new() {
    let deque = ShiftDeque::<u64>::new();
    assert_eq!(deque.capacity(), 0);
    assert_eq!(deque.len(), 0);
    assert!(deque.is_empty());
    assert_eq!(deque.increment(), ShiftDeque::<u64>::INCREMENT);
    assert_eq!(deque.increment(), 4);
}

#[test]
fn test_with_capacity() {
    let deque = ShiftDeque::<u64>::with_capacity(8);
    assert!(deque.capacity() >= 8);
    assert_eq!(deque.len(), 0);
}

#[test]
#[should_panic(expected = "increment must be greater than zero")]
fn test_with_zero_increment() {
    let _ = ShiftDeque::<u64>::with_increment(0);
}

#[test]
fn test_len_and_empty() {
    let mut deque = ShiftDeque::from([1, 2, 3]);
    assert_eq!(deque.len(), 3);
    assert!(!deque.is_empty());
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_front(), Some(2));
    assert_eq!(deque.pop_front(), Some(3));
    assert_eq!(deque.len(), 0);
    assert!(deque.is_empty());
}

#[test]
fn test_fifo() {
    let mut deque = ShiftDeque::new();
    deque.push_back('a');
    deque.push_back('b');
    deque.push_back('c');
    assert_eq!(deque.pop_front(), Some('a'));
    assert_eq!(deque.pop_front(), Some('b'));
    assert_eq!(deque.len(), 1);
}

#[test]
fn test_lifo_at_back() {
    let mut deque = ShiftDeque::new();
    deque.push_back('a');
    deque.push_back('b');
    assert_eq!(deque.pop_back(), Some('b'));
    assert_eq!(deque.pop_back(), Some('a'));
    assert!(deque.is_empty());
}

#[test]
fn test_push_front_then_pop_front() {
    let mut deque = ShiftDeque::new();
    deque.push_back('a');
    deque.push_front('b');
    assert_eq!(deque.pop_front(), Some('b'));
    assert_eq!(deque.pop_front(), Some('a'));
}

#[test]
fn test_push_front_grows_past_increment() {
    init_logger();
    let mut deque = ShiftDeque::new();
    for i in 1..=5 {
        deque.push_front(i);
    }
    assert_eq!(deque.len(), 5);
    let drained: Vec<_> = std::iter::from_fn(|| deque.pop_front()).collect();
    assert_eq!(drained, [5, 4, 3, 2, 1]);
}

#[test]
fn test_push_front_many() {
    let mut deque = ShiftDeque::new();
    for i in 0..100 {
        deque.push_front(i);
    }
    assert_eq!(deque.len(), 100);
    assert!(deque.iter().copied().eq((0..100).rev()));
}

#[test]
fn test_push_front_custom_increment() {
    let mut deque = ShiftDeque::with_increment(1);
    deque.push_back(0);
    for i in 1..=3 {
        deque.push_front(i);
    }
    assert_eq!(deque, [3, 2, 1, 0]);

    let mut deque = ShiftDeque::with_increment(64);
    deque.extend([1, 2, 3]);
    deque.push_front(0);
    assert_eq!(deque, [0, 1, 2, 3]);
}

#[test]
fn test_push_front_after_pop_front_reuses_slot() {
    let mut deque = ShiftDeque::from([1, 2, 3]);
    assert_eq!(deque.pop_front(), Some(1));
    deque.push_front(9);
    assert_eq!(deque, [9, 2, 3]);
}

#[test]
fn test_mixed_ends() {
    let mut deque = ShiftDeque::new();
    let mut model = VecDeque::new();
    for i in 0..200 {
        match i % 7 {
            0 | 3 => {
                deque.push_front(i);
                model.push_front(i);
            }
            1 | 4 | 6 => {
                deque.push_back(i);
                model.push_back(i);
            }
            2 => assert_eq!(deque.pop_front(), model.pop_front()),
            _ => assert_eq!(deque.pop_back(), model.pop_back()),
        }
        assert_eq!(deque.len(), model.len());
        assert_eq!(deque.is_empty(), model.is_empty());
    }
    assert!(deque.iter().eq(model.iter()));
}

#[test]
fn test_pop_empty() {
    let mut deque = ShiftDeque::<i32>::new();
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.len(), 0);
    assert!(deque.is_empty());

    deque.push_back(1);
    assert_eq!(deque.pop_back(), Some(1));
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.len(), 0);
}

#[test]
fn test_try_pop() {
    let mut deque = ShiftDeque::from([1, 2]);
    assert_eq!(deque.try_pop_front(), Ok(1));
    assert_eq!(deque.try_pop_back(), Ok(2));
    assert_eq!(deque.try_pop_front(), Err(EmptyAccess));
    assert_eq!(deque.try_pop_back(), Err(EmptyAccess));
    assert_eq!(EmptyAccess.to_string(), "deque is empty");
}

#[test]
fn test_reads_are_idempotent() {
    let deque = ShiftDeque::from([1, 2, 3]);
    assert_eq!(deque.len(), deque.len());
    assert_eq!(deque.is_empty(), deque.is_empty());
    let empty = ShiftDeque::<u8>::new();
    assert!(empty.is_empty() && empty.is_empty());
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_popped_slots_are_cleared() {
    let first = Rc::new(1);
    let last = Rc::new(2);
    let weak_first = Rc::downgrade(&first);
    let weak_last = Rc::downgrade(&last);

    let mut deque = ShiftDeque::new();
    deque.push_back(first);
    deque.push_back(Rc::new(0));
    deque.push_back(last);

    drop(deque.pop_front());
    drop(deque.pop_back());
    // the deque must not keep a copy in the vacated slots
    assert!(weak_first.upgrade().is_none());
    assert!(weak_last.upgrade().is_none());
    assert_eq!(deque.len(), 1);
}

#[test]
fn test_get() {
    let mut deque = ShiftDeque::from([2, 3]);
    deque.push_front(1);
    assert_eq!(deque.get(0), Some(&1));
    assert_eq!(deque.get(1), Some(&2));
    assert_eq!(deque.get(2), Some(&3));
    assert_eq!(deque.get(3), None);
    *deque.get_mut(2).unwrap() = 4;
    assert_eq!(deque, [1, 2, 4]);
}

#[test]
fn test_index() {
    let mut deque = ShiftDeque::from([1, 2, 3]);
    deque[1] = 5;
    assert_eq!(deque[0], 1);
    assert_eq!(deque[1], 5);
    assert_eq!(deque[2], 3);
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
fn test_index_out_of_bounds() {
    let mut deque = ShiftDeque::from([0, 1, 2]);
    deque.pop_front();
    let _value = deque[2];
}

#[test]
fn test_reserve() {
    let mut deque = ShiftDeque::from([1, 2, 3, 4]);
    deque.reserve(10);
    assert!(deque.capacity() >= 14);
    deque.pop_back();
    deque.pop_back();
    deque.reserve(12);
    assert!(deque.capacity() >= 14);
}

#[test]
fn test_shrink() {
    let mut deque = ShiftDeque::<i8>::with_capacity(32);
    deque.push_front(-1);
    deque.push_back(1);
    deque.push_back(2);
    deque.pop_back();
    deque.shrink_to_fit();
    assert_eq!(deque, [-1, 1]);
    assert!(deque.capacity() >= 2 && deque.capacity() < 32);

    // front growth still works after compaction
    deque.push_front(-2);
    assert_eq!(deque, [-2, -1, 1]);
}

#[test]
fn test_shrink_after_queue_workload() {
    let mut deque = ShiftDeque::new();
    for i in 0..64 {
        deque.push_back(i);
    }
    for _ in 0..60 {
        deque.pop_front();
    }
    deque.shrink_to(8);
    assert_eq!(deque, [60, 61, 62, 63]);
    assert!(deque.capacity() >= 8);
    deque.push_back(64);
    assert_eq!(deque.back(), Some(&64));
}

#[test]
fn test_queue_workload_reuses_slots() {
    init_logger();
    let mut deque = ShiftDeque::new();
    for i in 0..100_000 {
        deque.push_back(i);
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert!(deque.is_empty());
    assert!(deque.capacity() <= 4, "capacity grew to {}", deque.capacity());
}

#[test]
fn test_queue_workload_keeps_order_while_compacting() {
    let mut deque = ShiftDeque::from([0, 1, 2]);
    for i in 3..10_000 {
        deque.push_back(i);
        assert_eq!(deque.pop_front(), Some(i - 3));
        assert_eq!(deque.len(), 3);
    }
    assert_eq!(deque, [9997, 9998, 9999]);
    assert!(deque.capacity() <= 16, "capacity grew to {}", deque.capacity());

    // the front still grows as usual after compaction
    deque.push_front(-1);
    assert_eq!(deque, [-1, 9997, 9998, 9999]);
}

#[test]
fn test_truncate() {
    let el_2 = Rc::new(2);
    let el_4 = Rc::new(4);
    let weak_2 = Rc::downgrade(&el_2);
    let weak_4 = Rc::downgrade(&el_4);
    let mut deque = ShiftDeque::from([Rc::new(1), el_2, Rc::new(3)]);
    deque.push_back(el_4);
    deque.truncate(1);
    assert_eq!(deque, [Rc::new(1)]);
    // check that the truncated elements have been dropped
    assert!(weak_2.upgrade().is_none());
    assert!(weak_4.upgrade().is_none());

    deque.truncate(5);
    assert_eq!(deque.len(), 1);
}

#[test]
fn test_clear() {
    let mut deque = ShiftDeque::from([1, 2, 3]);
    deque.push_front(0);
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.pop_front(), None);
    deque.push_back(7);
    deque.push_front(6);
    assert_eq!(deque, [6, 7]);
}

#[test]
fn test_contains() {
    let mut deque = ShiftDeque::from([2, 3]);
    deque.push_front(1);
    assert!(deque.contains(&1));
    assert!(deque.contains(&3));
    assert!(!deque.contains(&5));
    deque.pop_front();
    assert!(!deque.contains(&1));
}

#[test]
fn test_front() {
    let mut deque = ShiftDeque::new();
    deque.push_back(1);
    deque.push_back(2);
    assert_eq!(deque.front(), Some(&1));
    deque.push_front(3);
    deque.push_front(4);
    assert_eq!(deque.front(), Some(&4));
    *deque.front_mut().unwrap() += 10;
    assert_eq!(deque.front(), Some(&14));
    deque.clear();
    assert_eq!(deque.front(), None);
    assert_eq!(deque.front_mut(), None);
}

#[test]
fn test_back() {
    let mut deque = ShiftDeque::new();
    deque.push_front(1);
    deque.push_front(2);
    assert_eq!(deque.back(), Some(&1));
    deque.push_back(3);
    assert_eq!(deque.back(), Some(&3));
    *deque.back_mut().unwrap() += 10;
    assert_eq!(deque.back(), Some(&13));
    deque.clear();
    assert_eq!(deque.back(), None);
    assert_eq!(deque.back_mut(), None);
}

#[test]
fn test_iter() {
    let mut deque = ShiftDeque::from([2, 3]);
    deque.push_front(1);
    let mut iter = deque.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iter_clone_and_debug() {
    struct NoClone(u8);

    let deque = ShiftDeque::from([NoClone(1), NoClone(2)]);
    let mut iter = deque.iter();
    iter.next();
    let copy = iter.clone();
    assert_eq!(copy.map(|x| x.0).collect::<Vec<_>>(), [2]);

    let mut deque = ShiftDeque::from([2, 3]);
    deque.push_front(1);
    let mut iter = deque.iter();
    assert_eq!(format!("{:?}", iter), "Iter([1, 2, 3])");
    iter.next_back();
    assert_eq!(format!("{:?}", iter), "Iter([1, 2])");
    assert_eq!(format!("{:?}", deque.iter_mut()), "IterMut([1, 2, 3])");
}

#[test]
fn test_iter_mut() {
    let mut deque = ShiftDeque::from([1, 2, 3]);
    for x in &mut deque {
        *x *= 2;
    }
    assert_eq!(deque, [2, 4, 6]);
    assert_eq!(deque.iter_mut().rev().next(), Some(&mut 6));
}

#[test]
fn test_into_iter() {
    let mut deque = ShiftDeque::from([2, 3, 4]);
    deque.push_front(1);
    let mut iter = deque.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_extend_and_from_iter() {
    let mut deque: ShiftDeque<i32> = (0..3).collect();
    deque.extend([3, 4]);
    deque.extend(&[5, 6]);
    assert_eq!(deque, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_vec_conversions() {
    let mut deque = ShiftDeque::from(vec![2, 3]);
    deque.push_front(1);
    deque.push_back(4);
    deque.pop_back();
    let vec: Vec<_> = deque.into();
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_eq_ignores_layout() {
    let mut a = ShiftDeque::new();
    a.push_front(2);
    a.push_front(1);
    let b = ShiftDeque::from([1, 2]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a, vec![1, 2]);
    assert_eq!(a, &[1, 2][..]);
    assert_ne!(a, [1, 2, 3]);
    assert!(a < ShiftDeque::from([1, 3]));
}

#[test]
fn test_clone_is_independent() {
    let mut a = ShiftDeque::from([1, 2]);
    let b = a.clone();
    a.push_back(3);
    assert_eq!(b, [1, 2]);
    assert_eq!(a, [1, 2, 3]);
}

#[test]
fn test_debug() {
    let mut deque = ShiftDeque::from([2]);
    deque.push_front(1);
    assert_eq!(format!("{:?}", deque), "[1, 2]");
}

fn fill_and_drain<Q: Queue<u32>>(queue: &mut Q) -> Vec<u32> {
    for i in 0..10 {
        queue.push_back(i);
    }
    let mut out = Vec::new();
    while !queue.is_empty() {
        out.extend(queue.pop_front());
    }
    out
}

fn both_ends<D: Deque<u32>>(deque: &mut D) -> (Option<u32>, Option<u32>) {
    deque.push_back(1);
    deque.push_front(0);
    deque.push_back(2);
    (deque.pop_front(), deque.pop_back())
}

#[test]
fn test_queue_trait() {
    let expected: Vec<u32> = (0..10).collect();
    assert_eq!(fill_and_drain(&mut ShiftDeque::new()), expected);
    assert_eq!(fill_and_drain(&mut VecDeque::new()), expected);
    assert_eq!(fill_and_drain(&mut SharedDeque::new()), expected);
}

#[test]
fn test_deque_trait() {
    let mut shift = ShiftDeque::new();
    let mut vec = VecDeque::new();
    assert_eq!(both_ends(&mut shift), (Some(0), Some(2)));
    assert_eq!(both_ends(&mut vec), (Some(0), Some(2)));
    assert_eq!(Queue::len(&shift), 1);
    assert_eq!(Queue::len(&vec), 1);
    assert_eq!(shift, [1]);
    assert_eq!(vec, [1]);
}

#[test]
fn test_shared_deque() {
    let deque = SharedDeque::new();
    deque.push_back(2);
    deque.push_front(1);
    assert_eq!(deque.len(), 2);
    assert_eq!(deque.try_pop_back(), Ok(2));
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.try_pop_front(), Err(EmptyAccess));
    assert!(deque.is_empty());
}

#[test]
fn test_shared_deque_lock_groups_operations() {
    let deque = SharedDeque::from(ShiftDeque::from([1, 2, 3]));
    {
        let mut guard = deque.lock();
        let front = guard.pop_front().unwrap();
        guard.push_back(front);
        assert_eq!(format!("{:?}", deque), "SharedDeque(<locked>)");
    }
    assert_eq!(format!("{:?}", deque), "SharedDeque([2, 3, 1])");
}

#[test]
fn test_shared_deque_threads() {
    let deque = SharedDeque::new();
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let deque = deque.clone();
            thread::spawn(move || {
                for i in 0..250 {
                    if i % 2 == 0 {
                        deque.push_back(t * 1000 + i);
                    } else {
                        deque.push_front(t * 1000 + i);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(deque.len(), 1000);

    let mut inner = deque.into_inner().unwrap();
    let mut seen: Vec<_> = std::iter::from_fn(|| inner.pop_back()).collect();
    seen.sort_unstable();
    let mut expected: Vec<_> = (0..4).flat_map(|t| (0..250).map(move |i| t * 1000 + i)).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}
