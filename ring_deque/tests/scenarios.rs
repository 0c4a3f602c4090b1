use ring_deque::{AccessError, RingDeque};

#[test]
fn capacity_four_push_back_past_capacity() {
    let mut ring = RingDeque::with_capacity(4);
    for value in 0..6 {
        ring.push_back(value); // [0 _ _ _] .. [2 3 4 5]
    }
    assert_eq!(ring.to_vec(), vec![2, 3, 4, 5]);
    assert_eq!(ring.front(), Ok(&2));
    assert_eq!(ring.back(), Ok(&5));
    assert!(ring.is_full());
    assert_eq!(ring.len(), 4);
}

#[test]
fn capacity_four_push_front_past_capacity() {
    let mut ring = RingDeque::with_capacity(4);
    for value in 0..6 {
        ring.push_front(value);
    }
    assert_eq!(ring.to_vec(), vec![5, 4, 3, 2]);
}

#[test]
fn grow_push_shrink_push_chain() {
    let mut ring = RingDeque::with_capacity(4);
    for value in 0..6 {
        ring.push_back(value);
    }
    assert_eq!(ring.to_vec(), vec![2, 3, 4, 5]);

    ring.resize(6);
    for value in 6..10 {
        ring.push_back(value);
    }
    assert_eq!(ring.to_vec(), vec![4, 5, 6, 7, 8, 9]);

    ring.resize(2);
    assert_eq!(ring.to_vec(), vec![4, 5]);
    assert_eq!(ring.len(), 2);

    ring.push_back(10);
    assert_eq!(ring.to_vec(), vec![5, 10]);
}

#[test]
fn empty_ring_observers_and_accessors() {
    let ring: RingDeque<String> = RingDeque::with_capacity(4);
    assert_eq!(ring.front(), Err(AccessError::Empty));
    assert_eq!(ring.back(), Err(AccessError::Empty));
    assert!(ring.is_empty());
    assert!(!ring.is_full());
    assert_eq!(
        ring.get(0),
        Err(AccessError::OutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn get_at_len_is_out_of_range() {
    let mut ring = RingDeque::with_capacity(4);
    ring.extend([1, 2, 3]);
    assert_eq!(
        ring.get(ring.len()),
        Err(AccessError::OutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn pop_front_walks_the_window_forward() {
    let mut ring = RingDeque::with_capacity(4);
    for value in 0..6 {
        ring.push_back(value);
    }
    assert_eq!(ring.pop_front(), Some(2));
    assert_eq!(ring.pop_front(), Some(3));
    assert_eq!(ring.to_vec(), vec![4, 5]);
    ring.push_back(6);
    assert_eq!(ring.to_vec(), vec![4, 5, 6]);
}

#[test]
fn mixed_ends_keep_logical_order() {
    let mut ring = RingDeque::with_capacity(5);
    ring.push_back(3);
    ring.push_front(2);
    ring.push_back(4);
    ring.push_front(1);
    ring.push_back(5);
    assert_eq!(ring.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(ring.pop_front(), Some(1));
    assert_eq!(ring.pop_back(), Some(5));
    assert_eq!(ring.to_vec(), vec![2, 3, 4]);
}

#[test]
fn for_each_visits_front_to_back() {
    let mut ring = RingDeque::with_capacity(4);
    for value in 0..6 {
        ring.push_back(value);
    }
    let mut visited = Vec::new();
    ring.for_each(|&value| visited.push(value));
    assert_eq!(visited, vec![2, 3, 4, 5]);
}

#[test]
fn visitor_errors_propagate_verbatim() {
    #[derive(Debug, PartialEq)]
    struct Odd(u32);

    let mut ring = RingDeque::with_capacity(4);
    ring.extend([2, 4, 5, 6]);
    let result = ring.try_for_each(|&value| if value % 2 == 0 { Ok(()) } else { Err(Odd(value)) });
    assert_eq!(result, Err(Odd(5)));
}

#[test]
fn works_with_non_copy_elements() {
    let mut ring = RingDeque::with_capacity(2);
    ring.push_back("alpha".to_string());
    ring.push_back("beta".to_string());
    let evicted = ring.push_back("gamma".to_string());
    assert_eq!(evicted.as_deref(), Some("alpha"));
    assert_eq!(ring.to_vec(), vec!["beta".to_string(), "gamma".to_string()]);
}

#[test]
fn resize_to_current_capacity_changes_nothing() {
    let mut ring = RingDeque::with_capacity(4);
    for value in 0..6 {
        ring.push_back(value);
    }
    let before = ring.to_vec();
    ring.resize(ring.capacity());
    assert_eq!(ring.to_vec(), before);
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.capacity(), 4);
}
