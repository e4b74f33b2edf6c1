use suurballe::data_structures::{BinHeap, HeapState};

#[test]
fn test_heap_orders_by_priority() {
    let mut heap: BinHeap<i64> = BinHeap::new(5);
    heap.push(0, 30);
    heap.push(1, 10);
    heap.push(2, 20);
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.top(), 1);
    assert_eq!(heap.prio(), 10);
    heap.pop();

    assert_eq!(heap.top(), 2);
    assert_eq!(heap.prio(), 20);
    heap.pop();

    assert_eq!(heap.top(), 0);
    heap.pop();
    assert!(heap.is_empty());
}

#[test]
fn test_heap_state_lifecycle() {
    let mut heap: BinHeap<i64> = BinHeap::new(3);
    assert_eq!(heap.state(0), HeapState::PreHeap);
    assert_eq!(heap.state(1), HeapState::PreHeap);

    heap.push(0, 5);
    assert_eq!(heap.state(0), HeapState::InHeap);
    assert_eq!(heap.state(1), HeapState::PreHeap);

    heap.pop();
    assert_eq!(heap.state(0), HeapState::PostHeap);
    assert!(heap.is_empty());

    // Untouched items stay pre-heap for the whole lifetime
    assert_eq!(heap.state(2), HeapState::PreHeap);
}

#[test]
fn test_heap_decrease_key() {
    let mut heap: BinHeap<i64> = BinHeap::new(4);
    heap.push(0, 10);
    heap.push(1, 20);
    heap.push(2, 30);

    assert_eq!(heap.priority(2), 30);
    heap.decrease(2, 5);
    assert_eq!(heap.priority(2), 5);
    assert_eq!(heap.top(), 2);

    heap.pop();
    assert_eq!(heap.top(), 0);

    heap.decrease(1, 1);
    assert_eq!(heap.top(), 1);
}

#[test]
fn test_heap_priority_lookup() {
    let mut heap: BinHeap<i64> = BinHeap::new(6);
    for item in 0..6 {
        heap.push(item, 10 - item as i64);
    }
    for item in 0..6 {
        assert_eq!(heap.priority(item), 10 - item as i64);
    }
}

#[test]
fn test_heap_equal_priorities() {
    let mut heap: BinHeap<i64> = BinHeap::new(4);
    for item in 0..4 {
        heap.push(item, 7);
    }

    let mut popped = Vec::new();
    while !heap.is_empty() {
        assert_eq!(heap.prio(), 7);
        popped.push(heap.top());
        heap.pop();
    }
    popped.sort_unstable();
    assert_eq!(popped, vec![0, 1, 2, 3]);
}

#[test]
fn test_heap_interleaved_operations() {
    let mut heap: BinHeap<i64> = BinHeap::new(8);
    heap.push(3, 12);
    heap.push(5, 4);
    heap.push(7, 8);

    assert_eq!(heap.top(), 5);
    heap.pop();

    heap.push(1, 6);
    heap.decrease(3, 2);

    assert_eq!(heap.top(), 3);
    heap.pop();
    assert_eq!(heap.top(), 1);
    heap.pop();
    assert_eq!(heap.top(), 7);
    heap.pop();

    assert!(heap.is_empty());
    assert_eq!(heap.state(5), HeapState::PostHeap);
    assert_eq!(heap.state(3), HeapState::PostHeap);
    assert_eq!(heap.state(0), HeapState::PreHeap);
}
