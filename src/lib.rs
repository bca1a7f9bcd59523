#![no_std]

//! `DynArray`: a growable contiguous array built from scratch, with a
//! position-checked cursor pair for traversal and positional editing.
//!
//! The array owns one contiguous buffer and tracks how many leading slots are
//! live. All reallocation goes through a doubling/halving policy; all
//! positional access is bounds-checked and surfaces typed errors instead of
//! corrupting memory.
//!
//! # Performance Characteristics
//!
//! - `append()`: O(1) amortized - doubles capacity when full
//! - `prepend()`, `insert()`: O(n) - shifts the tail by one slot
//! - `get()`, subscript: O(1)
//! - `pop_last()`: O(1) plus amortized shrink cost
//! - `pop_first()`, `erase()`: O(n) - closes the gap with one shift
//! - `erase_range()`: O(n) - single shift pass regardless of range width
//! - Iteration: O(n)
//!
//! # Growth and Shrink Policy
//!
//! Capacity starts at 8 and never drops below `max(8, len)`:
//!
//! - a write into a full array doubles the capacity first;
//! - after every removal, when the array is less than a quarter full (and
//!   above the default capacity), capacity halves. The quarter-full trigger
//!   leaves slack between the grow and shrink thresholds, so append/pop
//!   cycling on a capacity boundary never reallocates back and forth.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut numbers: DynArray<usize> = DynArray::new();
//! assert_eq!(numbers.capacity(), 8);
//!
//! for i in 0..1000 {
//!     numbers.append(i);
//! }
//! assert_eq!(numbers.len(), 1000);
//! assert_eq!(numbers.capacity(), 1024);
//! ```
//!
//! # Basic Editing
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut seq = DynArray::new();
//! seq.append(2);
//! seq.append(3);
//! seq.prepend(1);
//! assert_eq!(seq.as_slice(), &[1, 2, 3]);
//!
//! assert_eq!(seq.pop_first().unwrap(), 1);
//! assert_eq!(seq.pop_last().unwrap(), 3);
//! assert!(seq.get(1).is_err());
//! ```
//!
//! # Cursors
//!
//! A cursor is a logical position plus a borrow of its array; the position is
//! validated against the array's current length on every use, and the borrow
//! checker rules out mutating an array while a cursor still watches it. The
//! read-only [`Cursor`] is `Copy`; the mutable [`CursorMut`] additionally
//! writes through, inserts before itself, and removes at itself.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut values = DynArray::from([1, 2, 4]);
//!
//! let mut editor = values.cursor_mut();
//! editor.seek_forward(2).unwrap();
//! editor.insert_before(3);
//! assert_eq!(values.as_slice(), &[1, 2, 3, 4]);
//!
//! let mut reader = values.cursor();
//! reader.advance().unwrap();
//! assert_eq!(reader.get().unwrap(), &2);
//! assert!(values.cursor_end().get().is_err());
//! ```
//!
//! # Iterator Support
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut words = DynArray::new();
//! words.append("hello");
//! words.append("world");
//!
//! for word in &words {
//!     assert!(!word.is_empty());
//! }
//!
//! let lengths: DynArray<usize> = words.iter().map(|w| w.len()).collect();
//! assert_eq!(lengths.as_slice(), &[5, 5]);
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` (it allocates through `alloc`). Errors implement
//! `core::error::Error`; the optional `std` feature forwards to
//! `thiserror/std`. The optional `logging` feature records every
//! reallocation at debug level through the `log` crate:
//!
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["logging"] }
//! ```

extern crate alloc;

#[macro_use]
mod logging;

mod array;
mod buffer;
mod cursor;
mod error;
mod iter;

// Re-export public types and traits
pub use array::DynArray;
pub use cursor::{Cursor, CursorMut};
pub use error::DynArrayError;
pub use iter::{IntoIter, Iter, IterMut};
