#![allow(clippy::len_without_is_empty)]

use base::error::HeapError;
use base::options::SelectOptions;
use base::order::Polarity;
use heap::BoundedHeap;

/// Keeps the `k` most extreme entries of a stream.
///
/// `want` names the extreme to keep. The internal heap has the opposite
/// polarity, so the weakest retained entry sits at the root and is the one
/// evicted. Draining therefore yields ascending keys when keeping the
/// largest and descending keys when keeping the smallest.
#[derive(Debug, Clone)]
pub struct TopK<T, K> {
    heap: BoundedHeap<T, K>,
    k: usize,
    want: Polarity,
}

impl<T, K: Ord> TopK<T, K> {
    pub fn new(k: usize, want: Polarity) -> Result<Self, HeapError> {
        Ok(Self {
            heap: BoundedHeap::new(k, want.reverse())?,
            k,
            want,
        })
    }

    pub fn from_options(options: &SelectOptions) -> Result<Self, HeapError> {
        Self::new(options.k as usize, options.want)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn want(&self) -> Polarity {
        self.want
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.k
    }

    /// The weakest retained key, once `k` entries are retained.
    pub fn bound(&self) -> Option<&K> {
        if self.is_full() {
            self.heap.top().map(|(_, key)| key)
        } else {
            None
        }
    }

    /// Whether an entry with `key` would be retained by [`TopK::push`].
    pub fn check(&self, key: &K) -> bool {
        match self.bound() {
            Some(bound) => self.want.prior(key, bound),
            None => true,
        }
    }

    /// Offers an entry. Returns the entry that was dropped, if any: either
    /// the evicted root or the offered entry itself.
    pub fn push(&mut self, element: T, key: K) -> Option<(T, K)> {
        if !self.is_full() {
            self.heap.add(element, key);
            return None;
        }
        if !self.check(&key) {
            return Some((element, key));
        }
        let evicted = self.heap.pop().ok();
        self.heap.add(element, key);
        evicted
    }

    pub fn into_vec(self) -> Vec<(T, K)> {
        self.heap.into_sorted().collect()
    }

    pub fn into_elements(self) -> Vec<T> {
        self.heap.into_sorted().map(|(element, _)| element).collect()
    }
}

pub fn select_extreme<I, K, F>(
    k: usize,
    elements: I,
    mut key: F,
    want: Polarity,
) -> Result<Vec<I::Item>, HeapError>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut top = TopK::new(k, want)?;
    for element in elements {
        let key = key(&element);
        top.push(element, key);
    }
    Ok(top.into_elements())
}

pub fn select_extreme_keyed<I, T, K>(
    k: usize,
    pairs: I,
    want: Polarity,
) -> Result<Vec<(T, K)>, HeapError>
where
    I: IntoIterator<Item = (T, K)>,
    K: Ord,
{
    let mut top = TopK::new(k, want)?;
    for (element, key) in pairs {
        top.push(element, key);
    }
    Ok(top.into_vec())
}

/// The `k` largest, in ascending key order.
pub fn select_max<I, K, F>(k: usize, elements: I, key: F) -> Result<Vec<I::Item>, HeapError>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    select_extreme(k, elements, key, Polarity::Max)
}

/// The `k` smallest, in descending key order.
pub fn select_min<I, K, F>(k: usize, elements: I, key: F) -> Result<Vec<I::Item>, HeapError>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    select_extreme(k, elements, key, Polarity::Min)
}
