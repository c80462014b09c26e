use std::cmp::Ordering;

/// In-place partition-exchange sort over the whole of `v`.
///
/// Hoare partitioning around the value in the middle slot. The pivot is
/// tracked through swaps so every comparison in a pass sees the same value.
/// Not stable.
pub(super) fn quick_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 { return }
    partition_exchange(v, 0, v.len() as isize - 1, &mut compare);
}

// Signed bounds: `j` walks one past `low` when the last swap happens there.
fn partition_exchange<T, F>(v: &mut [T], low: isize, high: isize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot = (low + (high - low) / 2) as usize;
    let (mut i, mut j) = (low, high);

    while i <= j {
        while compare(&v[i as usize], &v[pivot]).is_lt() { i += 1; }
        while compare(&v[j as usize], &v[pivot]).is_gt() { j -= 1; }

        if i <= j {
            let (a, b) = (i as usize, j as usize);
            v.swap(a, b);
            if pivot == a { pivot = b } else if pivot == b { pivot = a }
            i += 1;
            j -= 1;
        }
    }

    if low < j { partition_exchange(v, low, j, compare) }
    if high > i { partition_exchange(v, i, high, compare) }
}
