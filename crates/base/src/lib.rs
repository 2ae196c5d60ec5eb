#![allow(clippy::len_without_is_empty)]

pub mod error;
pub mod options;
pub mod order;
pub mod rand;
pub mod scalar;
pub mod sequence;
