use base::order::Order;
use base::sequence::Sequence;

/// Quicksort driven by an explicit stack of ranges. Not stable.
pub fn quick<S, K, F>(seq: &mut S, mut key: F, order: Order)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    if seq.len() > 1 {
        let high = seq.len() - 1;
        quick_range(seq, &mut key, order, 0, high);
    }
}

/// Recursive quicksort. Past `2 * log2(n)` levels the remaining range is
/// finished by [`quick`]'s loop, so call depth stays logarithmic.
pub fn quick_recursive<S, K, F>(seq: &mut S, mut key: F, order: Order)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let n = seq.len();
    if n > 1 {
        let depth = 2 * (usize::BITS - n.leading_zeros()) as usize;
        recurse(seq, &mut key, order, 0, n - 1, depth);
    }
}

fn recurse<S, K, F>(seq: &mut S, key: &mut F, order: Order, low: usize, high: usize, depth: usize)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    if low >= high {
        return;
    }
    if depth == 0 {
        return quick_range(seq, key, order, low, high);
    }
    let p = partition(seq, key, order, low, high);
    if p > low {
        recurse(seq, key, order, low, p - 1, depth - 1);
    }
    recurse(seq, key, order, p + 1, high, depth - 1);
}

fn quick_range<S, K, F>(seq: &mut S, key: &mut F, order: Order, low: usize, high: usize)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut stack = vec![(low, high)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        let p = partition(seq, key, order, low, high);
        if p > low + 1 {
            stack.push((low, p - 1));
        }
        if p + 1 < high {
            stack.push((p + 1, high));
        }
    }
}

/// Hole-digging partition of `low..=high` around the key of `seq[low]`.
///
/// The pivot always sits in the current hole: moving an element into the
/// hole is a swap with the pivot, so no element is ever duplicated. Returns
/// the pivot's final position.
fn partition<S, K, F>(seq: &mut S, key: &mut F, order: Order, low: usize, high: usize) -> usize
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let pivot = key(seq.get(low));
    let (mut l, mut r) = (low, high);
    while l < r {
        while l < r && !order.before(&key(seq.get(r)), &pivot) {
            r -= 1;
        }
        if l < r {
            seq.swap(l, r);
            l += 1;
        }
        while l < r && order.before(&key(seq.get(l)), &pivot) {
            l += 1;
        }
        if l < r {
            seq.swap(l, r);
            r -= 1;
        }
    }
    l
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_0() {
        let mut x = vec![5, 3, 8, 1];
        quick(&mut x, |&v| v, Order::Asc);
        assert_eq!(x, [1, 3, 5, 8]);
        quick_recursive(&mut x, |&v| v, Order::Desc);
        assert_eq!(x, [8, 5, 3, 1]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut x = vec![4, 7, 1, 9, 4, 2, 6];
        let p = partition(&mut x, &mut |&v: &i32| v, Order::Asc, 0, 6);
        assert_eq!(x[p], 4);
        assert!(x[..p].iter().all(|&v| v < 4));
        assert!(x[p + 1..].iter().all(|&v| v >= 4));
    }

    #[test]
    fn adversarial_depth() {
        let n = 5_000;
        let mut x = (0..n).collect::<Vec<u32>>();
        quick_recursive(&mut x, |&v| v, Order::Desc);
        assert_eq!(x, (0..n).rev().collect::<Vec<_>>());
        quick_recursive(&mut x, |&v| v, Order::Desc);
        assert_eq!(x, (0..n).rev().collect::<Vec<_>>());
        let mut y = vec![7u8; n as usize];
        quick(&mut y, |&v| v, Order::Asc);
        assert!(y.iter().all(|&v| v == 7));
    }
}
