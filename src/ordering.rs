use std::cmp::Ordering;

/// A total order intrinsic to a value, used by [`DynamicArray::sort`](crate::DynamicArray::sort).
///
/// Most types simply forward to [`Ord`], and the crate implements this trait
/// for the std integer types, `bool`, `char`, `()`, `String` and `&str`.
///
/// Types whose values may or may not be orderable (a tagged dynamic value,
/// for instance) override [`supports_ordering`](NaturalOrder::supports_ordering).
/// `sort` only asks the first element of the array.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use dynarr::{DynamicArray, Error, NaturalOrder};
///
/// #[derive(Debug, PartialEq)]
/// enum Value { Int(i64), Blob }
///
/// impl NaturalOrder for Value {
///     fn supports_ordering(&self) -> bool { matches!(self, Value::Int(_)) }
///
///     fn natural_cmp(&self, other: &Self) -> Ordering {
///         match (self, other) {
///             (Value::Int(a), Value::Int(b)) => a.cmp(b),
///             _ => Ordering::Equal,
///         }
///     }
/// }
///
/// let mut list = DynamicArray::from([Value::Blob, Value::Int(1)]);
/// assert_eq!(list.sort(), Err(Error::UnsupportedOrdering));
///
/// let mut list = DynamicArray::from([Value::Int(2), Value::Int(1)]);
/// assert_eq!(list.sort(), Ok(()));
/// assert_eq!(list, [Value::Int(1), Value::Int(2)]);
/// ```
pub trait NaturalOrder {
    /// Whether this particular value carries a natural ordering.
    #[inline]
    fn supports_ordering(&self) -> bool { true }

    /// Compares `self` with `other`.
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_natural_order {
    ($($t:ty),* $(,)?) => {
        $(
            impl NaturalOrder for $t {
                #[inline]
                fn natural_cmp(&self, other: &Self) -> Ordering { Ord::cmp(self, other) }
            }
        )*
    };
}

impl_natural_order!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, (), String, &str,
);
