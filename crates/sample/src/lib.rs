//! Random sampling without replacement.
//!
//! Every candidate with weight `w > 0` draws one deviate `u` from the
//! generator, in iteration order, and scores `u^(1/w)`. Keeping the highest
//! scores gives selection probabilities proportional to weight. Candidates
//! with a non-positive weight, or whose weight callback fails, draw nothing
//! and are skipped; failures are logged.

mod uniform;

pub use uniform::{random_pick, random_pop, shuffle, shuffled, uniform_pick};

use base::error::SampleError;
use base::options::SampleOptions;
use base::order::Polarity;
use base::rand::Deviate;
use base::scalar::F64;
use base::sequence::Removable;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use select::TopK;
use std::fmt::Display;

/// Removes one candidate from `seq`, picked with probability proportional
/// to its weight.
///
/// With `keep_order` the remaining items keep their relative order (O(n));
/// otherwise the last item takes the picked one's place (O(1)).
pub fn weighted_pop<S, F, E, R>(
    seq: &mut S,
    mut weight: F,
    keep_order: bool,
    rng: &mut R,
) -> Result<S::Item, SampleError>
where
    S: Removable + ?Sized,
    F: FnMut(&S::Item) -> Result<f64, E>,
    E: Display,
    R: Deviate + ?Sized,
{
    if seq.is_empty() {
        return Err(SampleError::NoCandidates);
    }
    let mut best: Option<(usize, F64)> = None;
    for index in 0..seq.len() {
        let Some(score) = score(index, weight(seq.get(index)), rng) else {
            continue;
        };
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((index, score));
        }
    }
    let Some((index, score)) = best else {
        return Err(SampleError::NoEligibleCandidates);
    };
    debug!("picked candidate {index} of {} with score {score}", seq.len());
    Ok(if keep_order {
        seq.remove(index)
    } else {
        seq.swap_remove(index)
    })
}

/// Picks up to `amount` items with probabilities proportional to weight.
///
/// The result is ordered by ascending score, so the last item is the
/// strongest pick. Fewer items come back when fewer are eligible.
pub fn weighted_pick<I, F, E, R>(
    amount: usize,
    items: I,
    mut weight: F,
    rng: &mut R,
) -> Result<Vec<I::Item>, SampleError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<f64, E>,
    E: Display,
    R: Deviate + ?Sized,
{
    let mut top = reservoir(amount)?;
    for (index, item) in items.into_iter().enumerate() {
        if let Some(score) = score(index, weight(&item), rng) {
            top.push(item, score);
        }
    }
    Ok(top.into_elements())
}

/// Generator for a sampling run: seeded when the options carry a seed.
pub fn rng_from_options(options: &SampleOptions) -> StdRng {
    match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn reservoir<T>(amount: usize) -> Result<TopK<T, F64>, SampleError> {
    if amount == 0 {
        return Err(SampleError::InvalidAmount);
    }
    TopK::new(amount, Polarity::Max).map_err(|_| SampleError::InvalidAmount)
}

fn score<E, R>(index: usize, weight: Result<f64, E>, rng: &mut R) -> Option<F64>
where
    E: Display,
    R: Deviate + ?Sized,
{
    match weight {
        Ok(w) if w > 0.0 && w.is_finite() => Some(F64(rng.next_deviate().powf(w.recip()))),
        Ok(_) => None,
        Err(e) => {
            warn!("failed to evaluate the weight of candidate {index}: {e}");
            None
        }
    }
}
