use std::collections::VecDeque;

/// A mutable, index-addressable collection of known length.
///
/// Positions are expected to be in `0..len()`; implementations panic
/// otherwise, as slices do.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn get(&self, index: usize) -> &Self::Item;
    fn swap(&mut self, a: usize, b: usize);
    /// Sets the value at `index`, returning the previous one.
    fn replace(&mut self, index: usize, value: Self::Item) -> Self::Item;
}

/// A [`Sequence`] that can also shrink.
pub trait Removable: Sequence {
    /// Removes by shifting every later item left.
    fn remove(&mut self, index: usize) -> Self::Item;
    /// Removes by moving the last item into the hole.
    fn swap_remove(&mut self, index: usize) -> Self::Item;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }
}

impl<T> Removable for Vec<T> {
    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }
    fn swap_remove(&mut self, index: usize) -> T {
        Vec::swap_remove(self, index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }
}

fn out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for length {len}")
}

impl<T> Removable for VecDeque<T> {
    fn remove(&mut self, index: usize) -> T {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index).unwrap_or_else(|| out_of_range(index, len))
    }
    fn swap_remove(&mut self, index: usize) -> T {
        let len = VecDeque::len(self);
        VecDeque::swap_remove_back(self, index).unwrap_or_else(|| out_of_range(index, len))
    }
}
