use dynarray::DynArray;

#[test]
fn test_empty_iterator() {
    let array: DynArray<i32> = DynArray::new();
    let mut iter = array.iter();

    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_yields_in_insertion_order() {
    let mut array = DynArray::new();
    array.append("first");
    array.append("second");
    array.append("third");

    let collected: Vec<&&str> = array.iter().collect();
    assert_eq!(collected, vec![&"first", &"second", &"third"]);
}

#[test]
fn test_iterator_is_exact_size() {
    let array = DynArray::from([1, 2, 3]);
    let mut iter = array.iter();

    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_reverse_iteration() {
    let array = DynArray::from([1, 2, 3]);
    let reversed: Vec<i32> = array.iter().rev().copied().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[test]
fn test_for_loop_over_reference() {
    let array = DynArray::from([1, 2, 3]);

    let mut sum = 0;
    for value in &array {
        sum += value;
    }
    assert_eq!(sum, 6);
}

#[test]
fn test_iter_clone_continues_independently() {
    let array = DynArray::from([1, 2, 3]);

    let mut iter = array.iter();
    iter.next();

    let mut forked = iter.clone();
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(forked.next(), Some(&2));
    assert_eq!(forked.next(), Some(&3));
}

#[test]
fn test_iter_mut_writes_through() {
    let mut array = DynArray::from([1, 2, 3]);

    for value in array.iter_mut() {
        *value *= 10;
    }
    assert_eq!(array.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_for_loop_over_mutable_reference() {
    let mut array = DynArray::from([1, 2, 3]);

    for value in &mut array {
        *value += 1;
    }
    assert_eq!(array.as_slice(), &[2, 3, 4]);
}

#[test]
fn test_into_iter_yields_owned_values() {
    let array = DynArray::from([1, 2, 3]);

    let owned: Vec<i32> = array.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn test_into_iter_size_hint_tracks_consumption() {
    let array = DynArray::from([1, 2, 3]);
    let mut iter = array.into_iter();

    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_iterator_adapters_compose() {
    let array = DynArray::from([1, 2, 3, 4, 5]);

    let doubled_evens: DynArray<i32> = array
        .iter()
        .filter(|value| *value % 2 == 0)
        .map(|value| value * 2)
        .collect();

    assert_eq!(doubled_evens.as_slice(), &[4, 8]);
}
