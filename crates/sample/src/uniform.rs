use crate::reservoir;
use base::error::SampleError;
use base::rand::Deviate;
use base::scalar::F64;
use base::sequence::{Removable, Sequence};

/// Picks up to `amount` items, every subset of that size equally likely.
/// Ordered by ascending score like [`crate::weighted_pick`].
pub fn uniform_pick<I, R>(amount: usize, items: I, rng: &mut R) -> Result<Vec<I::Item>, SampleError>
where
    I: IntoIterator,
    R: Deviate + ?Sized,
{
    let mut top = reservoir(amount)?;
    for item in items {
        top.push(item, F64(rng.next_deviate()));
    }
    Ok(top.into_elements())
}

pub fn random_pick<'a, S, R>(seq: &'a S, rng: &mut R) -> Option<&'a S::Item>
where
    S: Sequence + ?Sized,
    R: Deviate + ?Sized,
{
    if seq.is_empty() {
        return None;
    }
    Some(seq.get(rng.next_index(seq.len())))
}

pub fn random_pop<S, R>(seq: &mut S, keep_order: bool, rng: &mut R) -> Result<S::Item, SampleError>
where
    S: Removable + ?Sized,
    R: Deviate + ?Sized,
{
    if seq.is_empty() {
        return Err(SampleError::NoCandidates);
    }
    let index = rng.next_index(seq.len());
    Ok(if keep_order {
        seq.remove(index)
    } else {
        seq.swap_remove(index)
    })
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<S, R>(seq: &mut S, rng: &mut R)
where
    S: Sequence + ?Sized,
    R: Deviate + ?Sized,
{
    for i in (1..seq.len()).rev() {
        let j = rng.next_index(i + 1);
        seq.swap(i, j);
    }
}

/// Shuffles a clone of `seq`, leaving `seq` untouched.
pub fn shuffled<S, R>(seq: &S, rng: &mut R) -> S
where
    S: Sequence + Clone,
    R: Deviate + ?Sized,
{
    let mut copy = seq.clone();
    shuffle(&mut copy, rng);
    copy
}
