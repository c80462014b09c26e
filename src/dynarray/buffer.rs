use std::{alloc::{self, Layout}, mem::MaybeUninit, ptr::{self, NonNull}};

use crate::errors::AllocErr;

/// Backing storage. Its length is the array's capacity; only the slots below
/// the array's `len` are initialized.
pub(super) type Buffer<T> = Box<[MaybeUninit<T>]>;

#[inline]
pub(super) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

/// `floor(cap * 1.5) + 1`
#[inline]
pub(super) fn grown_capacity(cap: usize) -> Result<usize, AllocErr> {
    cap.checked_add(cap / 2)
        .and_then(|cap| cap.checked_add(1))
        .ok_or(AllocErr::Overflow)
}

pub(super) fn try_allocate<T>(cap: usize) -> Result<Buffer<T>, AllocErr> {
    let layout = Layout::array::<T>(cap).map_err(AllocErr::layout)?;
    if layout.size() == 0 { return Ok(Box::new_uninit_slice(cap)) }

    let ptr = NonNull::new(unsafe { alloc::alloc(layout) })
        .ok_or(AllocErr::alloc(layout))?
        .cast::<MaybeUninit<T>>();

    // `[MaybeUninit<T>]` of length `cap` has exactly the layout we allocated.
    Ok(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), cap)) })
}

#[inline]
pub(super) fn allocate<T>(cap: usize) -> Buffer<T> { infallible(try_allocate(cap)) }

/// Bitwise moves `count` slots from `src[from..]` into `dst[to..]`.
///
/// # Safety
///
/// Both ranges must be in bounds. The moved values are owned by `dst`
/// afterwards; `src` must not drop them.
#[inline]
pub(super) unsafe fn move_slots<T>(
    src: &[MaybeUninit<T>], 
    from: usize, 
    dst: &mut [MaybeUninit<T>], 
    to: usize, 
    count: usize
) {
    debug_assert!(from + count <= src.len() && to + count <= dst.len());
    unsafe { ptr::copy_nonoverlapping(src.as_ptr().add(from), dst.as_mut_ptr().add(to), count) }
}
