use rand::Rng;

/// Source of uniform random numbers.
pub trait Deviate {
    /// Next deviate in `[0, 1)`.
    fn next_deviate(&mut self) -> f64;
    /// Next integer in `[0, n)`. `n` must be positive.
    fn next_index(&mut self, n: usize) -> usize;
}

impl<R> Deviate for R
where
    R: Rng + ?Sized,
{
    fn next_deviate(&mut self) -> f64 {
        self.gen::<f64>()
    }
    fn next_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let u = rng.next_deviate();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.next_index(3) < 3);
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(a.next_deviate().to_bits(), b.next_deviate().to_bits());
        }
    }
}
