use dynarray::{DynArray, DynArrayError};

#[test]
fn test_new_array_is_empty() {
    let array: DynArray<i32> = DynArray::new();
    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_with_capacity_keeps_default_floor() {
    let small: DynArray<i32> = DynArray::with_capacity(3);
    assert_eq!(small.capacity(), 8);

    let large: DynArray<i32> = DynArray::with_capacity(20);
    assert_eq!(large.capacity(), 20);
}

#[test]
fn test_append_places_value_last() {
    let mut array = DynArray::new();
    array.append(10);
    array.append(20);
    array.append(30);

    assert_eq!(array.len(), 3);
    assert_eq!(array.get(array.len() - 1).unwrap(), &30);
    assert_eq!(array.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_append_then_pop_last_restores_prior_state() {
    let mut array = DynArray::from([10, 20]);

    array.append(30);
    assert_eq!(array.pop_last().unwrap(), 30);

    assert_eq!(array.len(), 2);
    assert_eq!(array.as_slice(), &[10, 20]);
}

#[test]
fn test_pop_first_yields_insertion_order() {
    let mut array = DynArray::from([1, 2, 3]);

    assert_eq!(array.pop_first().unwrap(), 1);
    assert_eq!(array.pop_first().unwrap(), 2);
    assert_eq!(array.pop_first().unwrap(), 3);
    assert_eq!(array.pop_first(), Err(DynArrayError::Empty));
}

#[test]
fn test_prepend_builds_reverse_order() {
    let mut array = DynArray::new();
    array.prepend(3);
    array.prepend(2);
    array.prepend(1);

    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_at_every_position() {
    for k in 0..=3 {
        let mut array = DynArray::from([0, 10, 20]);
        array.insert(k, 99).unwrap();

        let mut expected = vec![0, 10, 20];
        expected.insert(k, 99);
        assert_eq!(array.as_slice(), expected.as_slice());
        assert_eq!(array[k], 99);
    }
}

#[test]
fn test_insert_past_the_end_appends() {
    let mut array = DynArray::from([1, 2]);
    array.insert(2, 3).unwrap();
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_beyond_len_fails() {
    let mut array = DynArray::from([1, 2]);
    assert_eq!(
        array.insert(3, 9),
        Err(DynArrayError::CursorOutOfRange { position: 3, len: 2 })
    );
    // failed insert leaves the array untouched
    assert_eq!(array.as_slice(), &[1, 2]);
}

#[test]
fn test_erase_returns_removed_element() {
    let mut array = DynArray::from([1, 2, 3]);
    assert_eq!(array.erase(1).unwrap(), 2);
    assert_eq!(array.as_slice(), &[1, 3]);
}

#[test]
fn test_erase_on_empty_is_out_of_range() {
    let mut array: DynArray<i32> = DynArray::new();
    assert_eq!(
        array.erase(0),
        Err(DynArrayError::IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_erase_range_closes_gap() {
    let mut array = DynArray::from([0, 1, 2, 3, 4, 5]);
    array.erase_range(1, 4).unwrap();
    assert_eq!(array.as_slice(), &[0, 4, 5]);
}

#[test]
fn test_erase_range_equal_bounds_is_noop() {
    let mut array = DynArray::from([1, 2, 3]);
    array.erase_range(2, 2).unwrap();
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_erase_range_rejects_bad_bounds() {
    let mut array = DynArray::from([1, 2, 3]);
    assert_eq!(
        array.erase_range(0, 4),
        Err(DynArrayError::InvalidRange {
            first: 0,
            last: 4,
            len: 3
        })
    );
    assert_eq!(
        array.erase_range(2, 1),
        Err(DynArrayError::InvalidRange {
            first: 2,
            last: 1,
            len: 3
        })
    );
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

// The walkthrough from the traversal contract: [1,2,3], erase the first two
// via cursor positions, then erase begin..end and watch indexing fail.
#[test]
fn test_erase_range_scenario_with_cursors() {
    let mut array = DynArray::from([1, 2, 3]);

    let (first, last) = {
        let begin = array.cursor();
        (begin.position(), begin.forward(2).unwrap().position())
    };
    array.erase_range(first, last).unwrap();
    assert_eq!(array.as_slice(), &[3]);

    let (begin, end) = (array.cursor().position(), array.cursor_end().position());
    array.erase_range(begin, end).unwrap();
    assert!(array.is_empty());
    assert_eq!(
        array.get(0),
        Err(DynArrayError::IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_clear_empties_and_stays_usable() {
    let mut array = DynArray::from([1, 2, 3]);
    array.clear();

    assert!(array.is_empty());
    assert!(array.get(0).is_err());

    array.append(7);
    assert_eq!(array.as_slice(), &[7]);
}

#[test]
fn test_subscript_reads_and_writes() {
    let mut array = DynArray::from([5, 6, 7]);
    assert_eq!(array[0], 5);

    array[1] = 60;
    assert_eq!(array.as_slice(), &[5, 60, 7]);
}

#[test]
#[should_panic(expected = "Index out of bounds")]
fn test_subscript_panics_out_of_bounds() {
    let array = DynArray::from([1, 2, 3]);
    let _ = array[5];
}

#[test]
#[should_panic(expected = "Index out of bounds")]
fn test_subscript_write_panics_out_of_bounds() {
    let mut array = DynArray::from([1, 2, 3]);
    array[5] = 9;
}

#[test]
fn test_get_mut_writes_through() {
    let mut array = DynArray::from([1, 2, 3]);
    *array.get_mut(2).unwrap() = 33;
    assert_eq!(array.as_slice(), &[1, 2, 33]);
}

#[test]
fn test_from_array_and_collect() {
    let from_array = DynArray::from([1, 2, 3]);
    assert_eq!(from_array.as_slice(), &[1, 2, 3]);
    assert_eq!(from_array.capacity(), 8);

    let collected: DynArray<u32> = (0..20).collect();
    assert_eq!(collected.len(), 20);
    assert!(collected.capacity() >= 20);
}

#[test]
fn test_as_mut_slice_edits_in_place() {
    let mut array = DynArray::from([1, 2, 3]);
    array.as_mut_slice().reverse();
    assert_eq!(array.as_slice(), &[3, 2, 1]);
}

#[test]
fn test_debug_formats_like_a_list() {
    let array = DynArray::from([1, 2, 3]);
    assert_eq!(format!("{array:?}"), "[1, 2, 3]");

    let empty: DynArray<i32> = DynArray::new();
    assert_eq!(format!("{empty:?}"), "[]");
}
