use std::{alloc::{Layout, LayoutError}, fmt};


/// Errors reported by [`DynamicArray`](crate::DynamicArray) operations.
///
/// Both kinds signal caller misuse. They are raised before any part of the
/// container is touched, so the container is unchanged afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `index` is not below the logical size of the array.
    OutOfBounds { index: usize, size: usize },
    /// The first element reported that it has no natural ordering.
    UnsupportedOrdering,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, size } => 
                write!(f, "index {index} out of bounds for size {size}"),
            Self::UnsupportedOrdering => 
                write!(f, "element at index 0 does not support natural ordering"),
        }
    }
}

impl std::error::Error for Error {}


#[derive(Debug, Clone)]
pub(crate) enum AllocErr {
    Overflow,
    Layout,
    Alloc { layout: Layout }
}

impl AllocErr {
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Layout }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}

impl fmt::Display for AllocErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation error: {:?}", self)
    }
}
