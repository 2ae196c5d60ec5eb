//! Keyed binary heap, in-place comparison sorts, top-k selection and
//! weighted sampling without replacement.

pub use base::error::{HeapError, SampleError};
pub use base::options::{HeapOptions, SampleOptions, SelectOptions, SortOptions};
pub use base::order::{Order, Polarity, SortMethod};
pub use base::rand::Deviate;
pub use base::scalar::F64;
pub use base::sequence::{Removable, Sequence};
pub use heap::{BoundedHeap, IntoSorted};
pub use sample::{
    random_pick, random_pop, rng_from_options, shuffle, shuffled, uniform_pick, weighted_pick,
    weighted_pop,
};
pub use select::{select_extreme, select_extreme_keyed, select_max, select_min, TopK};
pub use sorting::{
    bubble, heap_sorted, is_sorted_by_key, quick, quick_recursive, shell, sort_by_key,
    sort_with_options, sorted_by_key,
};

pub mod sort {
    pub use sorting::heap;
}
