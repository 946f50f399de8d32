use rand::Rng;

/// Source of uniform integer draws.
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed list of draws, clamped into the requested range.
    pub struct Scripted {
        draws: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        pub fn new(draws: Vec<usize>) -> Self {
            Self { draws, next: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn uniform_int(&mut self, low: usize, high: usize) -> usize {
            let draw = self.draws.get(self.next).copied().unwrap_or(low);
            self.next += 1;
            draw.clamp(low, high)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.uniform_int(3, 5);
            assert!((3..=5).contains(&n));
        }
        assert_eq!(rng.uniform_int(4, 4), 4);
    }
}
