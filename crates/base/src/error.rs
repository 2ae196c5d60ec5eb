use serde::{Deserialize, Serialize};
use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum HeapError {
    #[error("Capacity should be larger than 0.")]
    InvalidCapacity,
    #[error("Index {index} is out of range for a heap of length {len}.")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Heap is empty.")]
    Empty,
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SampleError {
    #[error("There are no candidates to sample from.")]
    NoCandidates,
    #[error("No candidate has a positive weight.")]
    NoEligibleCandidates,
    #[error("Amount should be larger than 0.")]
    InvalidAmount,
}
