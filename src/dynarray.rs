mod buffer;
mod into_iter;
mod sort;

use std::{cmp::Ordering, fmt, mem, ops::{Index, IndexMut}, ptr, slice::{self, SliceIndex}};

use crate::{errors::{AllocErr, Error}, ordering::NaturalOrder};
use buffer::{Buffer, allocate, grown_capacity, infallible, move_slots};
use sort::quick_sort;

pub use into_iter::IntoIter;

/// Capacity of an array created with [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous growable array type.
///
/// Elements always occupy the first [`size`](Self::size) slots of a heap
/// buffer, in positional order. The buffer follows a simple policy:
///
/// - Appending to a full array reallocates to `floor(capacity * 1.5) + 1`.
/// - Inserting at an index always reallocates one slot larger, whether or not
///   there was room to spare.
/// - Removing an element always reallocates one slot smaller.
/// - [`clear`](Self::clear) keeps the buffer as it is.
///
/// # Examples
///
/// ```
/// use dynarr::DynamicArray;
///
/// let mut list = DynamicArray::new();
/// list.add(3);
/// list.add(7);
///
/// assert_eq!(list.size(), 2);
/// assert_eq!(list.get(0), Ok(&3));
///
/// list.insert(1, 5).unwrap();
/// assert_eq!(list, [3, 5, 7]);
///
/// assert_eq!(list.remove(0), Ok(true));
/// assert!(list.remove_item(&7));
/// assert!(!list.remove_item(&7));
/// assert_eq!(list, [5]);
/// ```
///
/// # Indexing
///
/// Fallible access goes through [`get`](Self::get) and [`set`](Self::set),
/// which report [`Error::OutOfBounds`]. The [`Index`] operator is available
/// as well and panics like a slice does.
///
/// ```should_panic
/// use dynarr::DynamicArray;
///
/// let list = DynamicArray::from([1, 2, 3]);
/// println!("{}", list[3]); // Panics!
/// ```
pub struct DynamicArray<T> {
    buf: Buffer<T>,
    len: usize,
}

impl <T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl <T> Default for DynamicArray<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl <T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl <T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.capacity());
        self.iter().for_each(|v| cloned.add(v.clone()));
        cloned
    }
}

impl <T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl <T: Eq> Eq for DynamicArray<T> {}

impl <T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool { self.as_slice() == other }
}

impl <T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool { self.as_slice() == other }
}

impl <T: PartialEq> PartialEq<&[T]> for DynamicArray<T> {
    fn eq(&self, other: &&[T]) -> bool { self.as_slice() == *other }
}

impl <T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool { self.as_slice() == other.as_slice() }
}

impl <T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output { Index::index(self.as_slice(), index) }
}

impl <T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output { IndexMut::index_mut(self.as_mut_slice(), index) }
}

impl <T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the array, yielding its elements in order.
    fn into_iter(mut self) -> IntoIter<T> {
        let len = mem::take(&mut self.len);
        let buf = mem::replace(&mut self.buf, Box::new_uninit_slice(0));
        IntoIter::new(buf, len)
    }
}

impl <'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl <'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl <T> Extend<T> for DynamicArray<T> {
    /// Appends every item with [`add`](DynamicArray::add), so the usual growth
    /// policy applies one element at a time.
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|v| self.add(v));
    }
}

impl <T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut list = Self::new();
        list.extend(items);
        list
    }
}

impl <T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Creates an array whose capacity equals `N`.
    ///
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let list = DynamicArray::from([1, 2]);
    /// assert_eq!(list, [1, 2]);
    /// ```
    fn from(arr: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(arr);
        list
    }
}

impl <T> From<Vec<T>> for DynamicArray<T> {
    /// Creates an array whose capacity equals the vec's length.
    fn from(vec: Vec<T>) -> Self {
        let mut list = Self::with_capacity(vec.len());
        list.extend(vec);
        list
    }
}

impl <T> From<DynamicArray<T>> for Vec<T> {
    fn from(list: DynamicArray<T>) -> Self { list.into_iter().collect() }
}

impl <T> DynamicArray<T> {

    /// Constructs a new, empty array with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let list = DynamicArray::<i32>::new();
    /// assert_eq!(list.size(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }

    /// Constructs a new, empty array with room for `capacity` elements.
    ///
    /// Growth afterwards follows the same policy as an array made by
    /// [`new`](Self::new).
    ///
    /// # Panics
    ///
    /// Panics if the buffer size exceeds `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: allocate(capacity), len: 0 }
    }

    /// Returns the number of elements in the array.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::new();
    /// list.add("a");
    /// assert_eq!(list.size(), 1);
    /// ```
    #[inline(always)]
    pub const fn size(&self) -> usize { self.len }

    /// Same as [`size`](Self::size).
    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Length of the backing buffer.
    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize { self.buf.len() }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        match index < self.len {
            true => Ok(()),
            false => Err(Error::OutOfBounds { index, size: self.len }),
        }
    }

    /// Moves the live elements into a fresh buffer of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut buf = allocate::<T>(new_cap);
        unsafe { move_slots(&self.buf, 0, &mut buf, 0, self.len) }
        trace!("dynarr: reallocating {} -> {} slots", self.capacity(), new_cap);
        self.buf = buf;
    }

    fn ensure_capacity(&mut self) {
        if self.len == self.capacity() {
            self.reallocate(infallible(grown_capacity(self.capacity())));
        }
    }

    /// Appends an element to the back of the array.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([1, 2]);
    /// list.add(3);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// *O*(1) unless the buffer is full, in which case every element is moved
    /// into a buffer half again as large.
    pub fn add(&mut self, element: T) {
        self.ensure_capacity();
        self.buf[self.len].write(element);
        self.len += 1;
    }

    /// Inserts an element at position `index`, shifting the element already
    /// there and everything after it one slot to the right.
    ///
    /// `index` must address an existing element; inserting at `size()` is an
    /// error, use [`add`](Self::add) to append.
    ///
    /// The buffer is always reallocated one slot larger (after the regular
    /// growth step if the array was full), so spare slots past the end are
    /// carried along.
    ///
    /// # Examples
    /// ```
    /// use dynarr::{DynamicArray, Error};
    ///
    /// let mut list = DynamicArray::from([1, 3]);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list, [1, 2, 3]);
    ///
    /// assert_eq!(list.insert(3, 4), Err(Error::OutOfBounds { index: 3, size: 3 }));
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`capacity`) time, every slot is moved.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), Error> {
        self.check_index(index)?;
        self.ensure_capacity();

        let old_cap = self.capacity();
        let new_cap = infallible(old_cap.checked_add(1).ok_or(AllocErr::Overflow));
        let mut buf = allocate::<T>(new_cap);
        unsafe {
            move_slots(&self.buf, 0, &mut buf, 0, index);
            move_slots(&self.buf, index, &mut buf, index + 1, old_cap - index);
        }
        buf[index].write(element);

        trace!("dynarr: insert at {} reallocating {} -> {} slots", index, old_cap, new_cap);
        self.buf = buf;
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Examples
    /// ```
    /// use dynarr::{DynamicArray, Error};
    ///
    /// let list = DynamicArray::from([10, 40, 30]);
    /// assert_eq!(list.get(1), Ok(&40));
    /// assert_eq!(list.get(3), Err(Error::OutOfBounds { index: 3, size: 3 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from(["a", "b"]);
    /// assert_eq!(list.set(1, "z"), Ok("b"));
    /// assert_eq!(list, ["a", "z"]);
    /// assert!(list.set(2, "y").is_err());
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, Error> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self.as_mut_slice()[index], element))
    }

    /// Removes and drops the element at `index`, shifting everything after it
    /// one slot to the left.
    ///
    /// Returns `Ok(true)` once the element is gone. The buffer is reallocated
    /// one slot smaller.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([3, 4, 5]);
    /// assert_eq!(list.remove(1), Ok(true));
    /// assert_eq!(list, [3, 5]);
    /// assert!(list.remove(2).is_err());
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`capacity`) time, every slot is moved.
    pub fn remove(&mut self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;

        let old_cap = self.capacity();
        let mut buf = allocate::<T>(old_cap - 1);
        let removed = unsafe {
            move_slots(&self.buf, 0, &mut buf, 0, index);
            move_slots(&self.buf, index + 1, &mut buf, index, old_cap - index - 1);
            self.buf[index].assume_init_read()
        };

        trace!("dynarr: remove at {} reallocating {} -> {} slots", index, old_cap, old_cap - 1);
        self.buf = buf;
        self.len -= 1;
        drop(removed);
        Ok(true)
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `false`, leaving the array untouched, when there is no such
    /// element.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([1, 2, 1]);
    /// assert!(list.remove_item(&1));
    /// assert_eq!(list, [2, 1]);
    /// assert!(!list.remove_item(&5));
    /// ```
    pub fn remove_item(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|v| element == v) {
            Some(index) => matches!(self.remove(index), Ok(true)),
            None => false,
        }
    }

    /// Drops every element. The capacity is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        self.len = 0;
        unsafe { ptr::drop_in_place(elems) }
    }

    /// Sorts the array in place by the elements' [`NaturalOrder`].
    ///
    /// Only the first element is asked whether it
    /// [supports ordering](NaturalOrder::supports_ordering). The rest of the
    /// array is trusted to be comparable with it.
    ///
    /// The elements are moved into a scratch buffer of the current capacity,
    /// sorted there, and the scratch buffer replaces the old one. The sort is
    /// not stable.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedOrdering`] if the first element has no ordering, in
    /// which case the array is untouched.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([5, 3, 1, 4, 2]);
    /// list.sort().unwrap();
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self) -> Result<(), Error>
    where
        T: NaturalOrder,
    {
        match self.as_slice().first() {
            None => return Ok(()),
            Some(first) if !first.supports_ordering() => return Err(Error::UnsupportedOrdering),
            Some(_) => {}
        }

        let mut scratch = allocate::<T>(self.capacity());
        unsafe { move_slots(&self.buf, 0, &mut scratch, 0, self.len) }

        // A panicking comparison leaves `self.buf` holding the original order.
        let sorted = unsafe { slice::from_raw_parts_mut(scratch.as_mut_ptr().cast::<T>(), self.len) };
        quick_sort(sorted, T::natural_cmp);

        trace!("dynarr: sorted {} elements by natural order", self.len);
        self.buf = scratch;
        Ok(())
    }

    /// Sorts the array in place with a comparator function.
    ///
    /// The sort is not stable.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from(["pear", "fig", "banana"]);
    /// list.sort_by(|a, b| a.len().cmp(&b.len()));
    /// assert_eq!(list, ["fig", "pear", "banana"]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort(self.as_mut_slice(), compare);
        trace!("dynarr: sorted {} elements by comparator", self.len);
    }

    /// Sorts the array in place by a key extracted from each element.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([(2, 'b'), (3, 'a'), (1, 'c')]);
    /// list.sort_by_key(|v| v.1);
    /// assert_eq!(list, [(3, 'a'), (2, 'b'), (1, 'c')]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Returns a new boxed slice holding clones of the elements, in order.
    ///
    /// The copy is independent of the array; later changes to either one are
    /// not seen by the other.
    ///
    /// # Examples
    /// ```
    /// use dynarr::DynamicArray;
    ///
    /// let mut list = DynamicArray::from([1, 2, 3]);
    /// let exported = list.to_array();
    /// list.add(4);
    /// assert_eq!(&*exported, &[1, 2, 3]);
    /// ```
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.as_slice().into()
    }

    /// Like [`to_array`](Self::to_array), but returns a [`Vec`].
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Slots below `len` are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> { self.as_slice().iter() }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }
}
