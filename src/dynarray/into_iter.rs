use std::{fmt, iter::FusedIterator, ptr, slice};

use super::buffer::Buffer;

/// An owning iterator over the elements of a [`DynamicArray`](super::DynamicArray).
///
/// Created by [`DynamicArray::into_iter`](super::DynamicArray::into_iter).
pub struct IntoIter<T> {
    buf: Buffer<T>,
    start: usize,
    end: usize,
}

impl <T> IntoIter<T> {
    /// `buf[..len]` must be initialized.
    #[inline]
    pub(super) fn new(buf: Buffer<T>, len: usize) -> Self {
        Self { buf, start: 0, end: len }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start).cast(), self.end - self.start) }
    }
}

impl <T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl <T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end { return None }
        self.start += 1;
        Some(unsafe { self.buf.get_unchecked(self.start - 1).assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl <T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end { return None }
        self.end -= 1;
        Some(unsafe { self.buf.get_unchecked(self.end).assume_init_read() })
    }
}

impl <T> ExactSizeIterator for IntoIter<T> {}

impl <T> FusedIterator for IntoIter<T> {}

impl <T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest: *mut [T] = ptr::slice_from_raw_parts_mut(
            unsafe { self.buf.as_mut_ptr().add(self.start).cast() }, 
            self.end - self.start
        );
        self.start = self.end;
        unsafe { ptr::drop_in_place(rest) }
    }
}
