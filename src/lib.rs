//! # dynarr
//!
//! A growable, contiguous array with a deliberately simple memory policy.
//!
//! [`DynamicArray`] starts with room for ten elements and grows by half again
//! (plus one) whenever an append finds it full. Unlike [`Vec`], it never keeps
//! slack around after a removal: every removal reallocates the backing buffer
//! one slot smaller. Positional inserts always add exactly one slot.
//!
//! Sorting is an in-place partition-exchange (Hoare) quicksort, available in
//! two flavours:
//! - [`DynamicArray::sort`] uses the element type's [`NaturalOrder`].
//! - [`DynamicArray::sort_by`] takes an external comparator.
//!
//! ```
//! use dynarr::DynamicArray;
//!
//! let mut list = DynamicArray::from([5, 3, 1, 4, 2]);
//! list.sort().unwrap();
//! assert_eq!(list, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(list.remove(0), Ok(true));
//! assert_eq!(list.set(0, 20), Ok(2));
//! assert!(list.get(10).is_err());
//! assert_eq!(&*list.to_array(), &[20, 3, 4, 5]);
//! ```
//!
//! Enable the `log` feature to get `trace!` records for every reallocation and
//! sort through the [`log`](https://docs.rs/log) facade.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => { if false { let _ = format!($($arg)*); } };
}

mod dynarray;
mod ordering;

pub(crate) mod errors;

pub use dynarray::{DynamicArray, IntoIter, DEFAULT_CAPACITY};
pub use errors::Error;
pub use ordering::NaturalOrder;
