#![allow(clippy::len_without_is_empty)]

use base::error::HeapError;
use base::options::HeapOptions;
use base::order::Polarity;

const DEFAULT_CAPACITY: usize = 32;

/// Array-backed binary heap of `(element, key)` pairs.
///
/// Elements and keys live in two parallel buffers. For every `i > 0` with
/// parent `p = (i - 1) / 2`, `keys[i]` is never prior to `keys[p]` under the
/// heap's [`Polarity`]. Any slot can be popped or updated, not just the root.
#[derive(Debug, Clone)]
pub struct BoundedHeap<T, K> {
    elements: Vec<T>,
    keys: Vec<K>,
    capacity: usize,
    polarity: Polarity,
}

impl<T, K: Ord> BoundedHeap<T, K> {
    pub fn new(capacity: usize, polarity: Polarity) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        // Buffers grow on demand; only the logical capacity is `capacity`.
        let reserved = std::cmp::min(capacity, DEFAULT_CAPACITY);
        Ok(Self {
            elements: Vec::with_capacity(reserved),
            keys: Vec::with_capacity(reserved),
            capacity,
            polarity,
        })
    }

    pub fn from_options(options: &HeapOptions) -> Result<Self, HeapError> {
        Self::new(options.capacity as usize, options.polarity)
    }

    /// Loads every element of `elements` by sequential inserts.
    pub fn from_elements<I, F>(elements: I, mut key: F, polarity: Polarity) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let elements = elements.into_iter();
        let capacity = std::cmp::max(1, elements.size_hint().0);
        let mut heap = Self {
            elements: Vec::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            capacity,
            polarity,
        };
        for element in elements {
            let k = key(&element);
            heap.add(element, k);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn add(&mut self, element: T, key: K) {
        if self.len() >= self.capacity {
            self.grow();
        }
        self.elements.push(element);
        self.keys.push(key);
        self.sift_up(self.len() - 1);
    }

    pub fn peek(&self, index: usize) -> Result<(&T, &K), HeapError> {
        self.check(index)?;
        Ok((&self.elements[index], &self.keys[index]))
    }

    pub fn try_peek(&self, index: usize) -> Option<(&T, &K)> {
        self.peek(index).ok()
    }

    /// The root, i.e. the most extreme entry under the heap's polarity.
    pub fn top(&self) -> Option<(&T, &K)> {
        self.try_peek(0)
    }

    pub fn pop(&mut self) -> Result<(T, K), HeapError> {
        self.pop_at(0)
    }

    /// Removes the entry at `index`. The last entry fills the hole and is then
    /// moved down or up, whichever applies.
    pub fn pop_at(&mut self, index: usize) -> Result<(T, K), HeapError> {
        self.check(index)?;
        let element = self.elements.swap_remove(index);
        let key = self.keys.swap_remove(index);
        if index < self.len() {
            self.fix(index);
        }
        Ok((element, key))
    }

    /// Overwrites the entry at `index`, returning the previous one.
    pub fn update(&mut self, index: usize, element: T, key: K) -> Result<(T, K), HeapError> {
        self.check(index)?;
        let element = std::mem::replace(&mut self.elements[index], element);
        let key = std::mem::replace(&mut self.keys[index], key);
        self.fix(index);
        Ok((element, key))
    }

    /// Updates the first entry whose element equals `element`, or adds it.
    pub fn add_or_update(&mut self, element: T, key: K)
    where
        T: PartialEq,
    {
        match self.elements.iter().position(|x| *x == element) {
            Some(index) => {
                self.keys[index] = key;
                self.elements[index] = element;
                self.fix(index);
            }
            None => self.add(element, key),
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.keys.clear();
    }

    pub fn trim_excess(&mut self) {
        self.elements.shrink_to_fit();
        self.keys.shrink_to_fit();
        self.capacity = self.len();
    }

    /// Entries in internal array order, which is not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &K)> {
        self.elements.iter().zip(self.keys.iter())
    }

    /// Pops the root until the heap is empty.
    pub fn into_sorted(self) -> IntoSorted<T, K> {
        IntoSorted { heap: self }
    }

    pub fn into_vec(self) -> Vec<(T, K)> {
        self.elements.into_iter().zip(self.keys).collect()
    }

    pub fn is_heap(&self) -> bool {
        (1..self.len()).all(|i| !self.polarity.prior(&self.keys[i], &self.keys[(i - 1) >> 1]))
    }

    fn check(&self, index: usize) -> Result<(), HeapError> {
        match self.len() {
            0 => Err(HeapError::Empty),
            len if index >= len => Err(HeapError::IndexOutOfRange { index, len }),
            _ => Ok(()),
        }
    }

    fn grow(&mut self) {
        self.capacity = std::cmp::max(1, self.capacity.saturating_mul(2));
        let additional = self.capacity - self.len();
        self.elements.reserve_exact(additional);
        self.keys.reserve_exact(additional);
    }

    // Only one of the two moves anything; which one depends on the new key.
    fn fix(&mut self, index: usize) {
        let index = self.sift_down(index);
        self.sift_up(index);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
        self.keys.swap(a, b);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) >> 1;
            if !self.polarity.prior(&self.keys[index], &self.keys[parent]) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.len();
        loop {
            let left = (index << 1) + 1;
            if left >= len {
                return index;
            }
            let right = left + 1;
            let child = if right < len && self.polarity.prior(&self.keys[right], &self.keys[left]) {
                right
            } else {
                left
            };
            if !self.polarity.prior(&self.keys[child], &self.keys[index]) {
                return index;
            }
            self.swap(index, child);
            index = child;
        }
    }
}

impl<T, K: Ord> Default for BoundedHeap<T, K> {
    fn default() -> Self {
        Self {
            elements: Vec::with_capacity(DEFAULT_CAPACITY),
            keys: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            polarity: Polarity::Min,
        }
    }
}

pub struct IntoSorted<T, K> {
    heap: BoundedHeap<T, K>,
}

impl<T, K: Ord> Iterator for IntoSorted<T, K> {
    type Item = (T, K);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, K: Ord> ExactSizeIterator for IntoSorted<T, K> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn grows_past_initial_capacity() {
        let mut heap = BoundedHeap::new(2, Polarity::Min).unwrap();
        heap.add(5, 5);
        heap.add(3, 3);
        assert_eq!(heap.capacity(), 2);
        heap.add(8, 8);
        assert_eq!(heap.capacity(), 4);
        assert_eq!(heap.pop(), Ok((3, 3)));
        assert_eq!(heap.pop(), Ok((5, 5)));
        assert_eq!(heap.pop(), Ok((8, 8)));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }

    #[test]
    fn huge_capacity_is_lazy() {
        let mut heap = BoundedHeap::new(usize::MAX, Polarity::Max).unwrap();
        assert_eq!(heap.capacity(), usize::MAX);
        for x in [5, 3, 8, 1] {
            heap.add(x, x);
        }
        assert_eq!(heap.capacity(), usize::MAX);
        let drained = heap.into_sorted().map(|(x, _)| x).collect::<Vec<_>>();
        assert_eq!(drained, [8, 5, 3, 1]);
    }

    #[test]
    fn non_positive_capacity() {
        assert_eq!(
            BoundedHeap::<(), u32>::new(0, Polarity::Max).unwrap_err(),
            HeapError::InvalidCapacity
        );
        let options = HeapOptions {
            capacity: 0,
            polarity: Polarity::Min,
        };
        assert!(BoundedHeap::<(), u32>::from_options(&options).is_err());
    }

    #[test]
    fn index_errors() {
        let mut heap = BoundedHeap::<char, u32>::default();
        assert_eq!(heap.peek(0).unwrap_err(), HeapError::Empty);
        heap.add('a', 1);
        heap.add('b', 2);
        assert_eq!(
            heap.peek(2).unwrap_err(),
            HeapError::IndexOutOfRange { index: 2, len: 2 }
        );
        assert!(heap.pop_at(5).is_err());
        assert!(heap.update(2, 'c', 3).is_err());
        assert_eq!(heap.try_peek(1), Some((&'b', &2)));
        assert_eq!(heap.try_peek(2), None);
    }

    #[test]
    fn max_polarity() {
        let mut heap = BoundedHeap::new(1, Polarity::Max).unwrap();
        for x in [4, 9, 1, 7] {
            heap.add(x.to_string(), x);
        }
        assert_eq!(heap.top(), Some((&"9".to_string(), &9)));
        let order = heap.into_sorted().map(|(_, k)| k).collect::<Vec<_>>();
        assert_eq!(order, [9, 7, 4, 1]);
    }

    #[test]
    fn polarity_is_per_instance() {
        let mut min = BoundedHeap::new(4, Polarity::Min).unwrap();
        let mut max = BoundedHeap::new(4, Polarity::Max).unwrap();
        for x in [2, 6, 4] {
            min.add((), x);
            max.add((), x);
        }
        assert_eq!(min.pop().unwrap().1, 2);
        assert_eq!(max.pop().unwrap().1, 6);
    }

    #[test]
    fn update_moves_both_ways() {
        let mut heap = BoundedHeap::from_elements(1..=15, |&x| x, Polarity::Min);
        let index = heap.iter().position(|(&e, _)| e == 15).unwrap();
        assert_eq!(heap.update(index, 0, 0), Ok((15, 15)));
        assert!(heap.is_heap());
        assert_eq!(heap.top(), Some((&0, &0)));
        assert_eq!(heap.update(0, 100, 100), Ok((0, 0)));
        assert!(heap.is_heap());
        assert_eq!(heap.top(), Some((&1, &1)));
    }

    #[test]
    fn pop_at_refills_from_the_end() {
        // The last leaf is smaller than the parent of the removed slot, so
        // the refill has to move up.
        let mut heap = BoundedHeap::new(8, Polarity::Min).unwrap();
        for x in [1, 10, 2, 11, 12, 3, 4] {
            heap.add(x, x);
        }
        assert!(heap.is_heap());
        let index = heap.iter().position(|(&e, _)| e == 11).unwrap();
        assert_eq!(heap.pop_at(index), Ok((11, 11)));
        assert!(heap.is_heap());
        let rest = heap.into_sorted().map(|(e, _)| e).collect::<Vec<_>>();
        assert_eq!(rest, [1, 2, 3, 4, 10, 12]);
    }

    #[test]
    fn add_or_update() {
        let mut heap = BoundedHeap::new(4, Polarity::Min).unwrap();
        heap.add_or_update("a", 5);
        heap.add_or_update("b", 3);
        heap.add_or_update("a", 1);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.top(), Some((&"a", &1)));
    }

    #[test]
    fn clear_and_trim() {
        let mut heap = BoundedHeap::new(2, Polarity::Min).unwrap();
        for x in 0..5 {
            heap.add(x, x);
        }
        assert_eq!(heap.capacity(), 8);
        heap.trim_excess();
        assert_eq!(heap.capacity(), 5);
        heap.clear();
        assert!(heap.is_empty());
        heap.trim_excess();
        assert_eq!(heap.capacity(), 0);
        heap.add(1, 1);
        assert_eq!(heap.capacity(), 1);
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn iter_is_internal_order() {
        let heap = BoundedHeap::from_elements([3, 1, 2], |&x| x, Polarity::Min);
        let mut seen = heap.iter().map(|(&e, &k)| (e, k)).collect::<Vec<_>>();
        assert_eq!(seen[0], (1, 1));
        seen.sort();
        assert_eq!(seen, [(1, 1), (2, 2), (3, 3)]);
        assert_eq!(heap.into_vec().len(), 3);
    }
}
