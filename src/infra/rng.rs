use crate::engine::RandomSource;

/// RNG по умолчанию: системная энтропия через `thread_rng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        slice.shuffle(&mut thread_rng());
    }

    fn index(&mut self, len: usize) -> usize {
        use rand::{thread_rng, Rng};

        thread_rng().gen_range(0..len)
    }
}

/// Детерминированный RNG для тестов и воспроизводимых матчей.
/// Один и тот же seed даёт одни и те же раздачи.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;

        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;

        slice.shuffle(&mut self.inner);
    }

    fn index(&mut self, len: usize) -> usize {
        use rand::Rng;

        self.inner.gen_range(0..len)
    }
}
