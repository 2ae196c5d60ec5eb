use base::order::Order;
use base::sequence::Sequence;

/// Shell sort with gaps `gap / 3 + 1` down to 1. Not stable.
pub fn shell<S, K, F>(seq: &mut S, mut key: F, order: Order)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let n = seq.len();
    let mut gap = n;
    while gap > 1 {
        gap = gap / 3 + 1;
        for i in 0..gap {
            let mut j = i + gap;
            while j < n {
                let moving = key(seq.get(j));
                let mut k = j;
                while k >= gap && order.before(&moving, &key(seq.get(k - gap))) {
                    seq.swap(k, k - gap);
                    k -= gap;
                }
                j += gap;
            }
        }
    }
}
