use base::order::Order;
use base::sequence::Sequence;
use ::heap::BoundedHeap;

/// Heap sort through a [`BoundedHeap`]. Not stable.
///
/// Ascending output pops from a min-retaining heap and descending from a
/// max-retaining one. The heap holds positions, and the popped order is then
/// applied to `seq` in place.
pub fn heap<S, K, F>(seq: &mut S, mut key: F, order: Order)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let n = seq.len();
    let heap = BoundedHeap::from_elements(0..n, |&i| key(seq.get(i)), order.polarity());
    let mut permutation = heap.into_sorted().map(|(i, _)| i).collect::<Vec<_>>();
    permute(seq, &mut permutation);
}

/// Yields `elements` in the requested order by popping a bulk-loaded heap.
pub fn heap_sorted<I, K, F>(elements: I, key: F, order: Order) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    BoundedHeap::from_elements(elements, key, order.polarity())
        .into_sorted()
        .map(|(element, _)| element)
}

// Afterwards `seq[i]` holds what was at `permutation[i]`. Each cycle is walked
// once, marking visited slots as fixed points.
fn permute<S>(seq: &mut S, permutation: &mut [usize])
where
    S: Sequence + ?Sized,
{
    for start in 0..permutation.len() {
        let mut current = start;
        loop {
            let next = std::mem::replace(&mut permutation[current], current);
            if next == start || next == current {
                break;
            }
            seq.swap(current, next);
            current = next;
        }
    }
}
