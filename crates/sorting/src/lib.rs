//! In-place comparison sorts over any [`Sequence`], ordered by a key
//! extractor. Key extractors must be total and side-effect free; a panic in
//! one propagates to the caller with the sequence left partially sorted.

mod bubble;
mod heapsort;
mod quick;
mod shell;

pub use bubble::bubble;
pub use heapsort::{heap, heap_sorted};
pub use quick::{quick, quick_recursive};
pub use shell::shell;

pub use base::order::{Order, SortMethod};

use base::options::SortOptions;
use base::sequence::Sequence;

pub fn sort_by_key<S, K, F>(seq: &mut S, key: F, order: Order, method: SortMethod)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    match method {
        SortMethod::Quick => quick(seq, key, order),
        SortMethod::Heap => heap(seq, key, order),
        SortMethod::QuickRecursive => quick_recursive(seq, key, order),
        SortMethod::Shell => shell(seq, key, order),
        SortMethod::Bubble => bubble(seq, key, order),
    }
}

pub fn sort_with_options<S, K, F>(seq: &mut S, key: F, options: &SortOptions)
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    sort_by_key(seq, key, options.order, options.method)
}

/// Sorts a clone of `seq`, leaving `seq` untouched.
pub fn sorted_by_key<S, K, F>(seq: &S, key: F, order: Order, method: SortMethod) -> S
where
    S: Sequence + Clone,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut copy = seq.clone();
    sort_by_key(&mut copy, key, order, method);
    copy
}

pub fn is_sorted_by_key<S, K, F>(seq: &S, mut key: F, order: Order) -> bool
where
    S: Sequence + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    (1..seq.len()).all(|i| !order.before(&key(seq.get(i)), &key(seq.get(i - 1))))
}
