use base::order::Order;
use base::sequence::Sequence;

/// Bubble sort. Always runs `n` full passes. Stable.
pub fn bubble<S, K, F>(seq: &mut S, mut key: F, order: Order)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let n = seq.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if order.before(&key(seq.get(j + 1)), &key(seq.get(j))) {
                seq.swap(j, j + 1);
            }
        }
    }
}
