//! Synthetic trajectories: i.i.d. symbols from a random categorical
//! distribution over a fixed five-letter alphabet.

use std::path::Path;

use rand::Rng;

use crate::{Error, Result};

pub const NUM_SYMBOLS: usize = 5;

pub const ALPHABET: [u8; NUM_SYMBOLS] = *b"abcde";

pub const DEFAULT_SAMPLE_SIZE: usize = 100;

pub const DEFAULT_OUT_PATH: &str = "trajectory-data.txt";

/// A categorical distribution over [`ALPHABET`], sampled by inverse CDF.
#[derive(Clone, Debug, PartialEq)]
pub struct Categorical {
    probabilities: [f64; NUM_SYMBOLS],
    cumulative: [f64; NUM_SYMBOLS],
}

impl Categorical {
    /// Normalises non-negative `weights` by their sum.
    pub fn from_weights(weights: [f64; NUM_SYMBOLS]) -> Result<Self> {
        let total = weights.iter().sum::<f64>();
        if !total.is_finite() || total <= 0.0 || weights.iter().any(|&w| w < 0.0) {
            return Err(Error::InvalidWeights(weights.to_vec()));
        }

        let probabilities = weights.map(|w| w / total);
        let mut cumulative = [0.0; NUM_SYMBOLS];
        let mut running = 0.0;
        for (c, p) in cumulative.iter_mut().zip(probabilities) {
            running += p;
            *c = running;
        }
        Ok(Self {
            probabilities,
            cumulative,
        })
    }

    /// Five uniform draws in `[0, 1)`, normalised.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let weights = [(); NUM_SYMBOLS].map(|_| rng.gen::<f64>());
            // Only an all-zero draw is rejected.
            if let Ok(dist) = Self::from_weights(weights) {
                return dist;
            }
        }
    }

    pub fn probabilities(&self) -> &[f64; NUM_SYMBOLS] {
        &self.probabilities
    }

    pub fn cumulative(&self) -> &[f64; NUM_SYMBOLS] {
        &self.cumulative
    }

    /// Smallest index `j` with `r <= cum[j]`. Rounding can leave the last
    /// cumulative value just under 1; anything past it maps to the last symbol.
    pub fn index_for(&self, r: f64) -> usize {
        self.cumulative
            .iter()
            .position(|&c| r <= c)
            .unwrap_or(NUM_SYMBOLS - 1)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        ALPHABET[self.index_for(rng.gen::<f64>())]
    }
}

/// `size` symbols drawn independently from `dist`, in sampling order.
pub fn generate<R: Rng + ?Sized>(dist: &Categorical, size: usize, rng: &mut R) -> Vec<u8> {
    (0..size).map(|_| dist.sample(rng)).collect()
}

/// Observed frequency of each alphabet symbol in `trajectory`.
pub fn empirical_frequencies(trajectory: &[u8]) -> [f64; NUM_SYMBOLS] {
    let mut counts = [0usize; NUM_SYMBOLS];
    for &b in trajectory {
        if let Some(i) = ALPHABET.iter().position(|&a| a == b) {
            counts[i] += 1;
        }
    }
    let n = trajectory.len().max(1) as f64;
    counts.map(|c| c as f64 / n)
}

/// Truncates `path` and writes `trajectory` in one go.
pub fn write_trajectory(path: &Path, trajectory: &[u8]) -> Result<()> {
    std::fs::write(path, trajectory).map_err(|source| Error::WriteTrajectory {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = trajectory.len(), "trajectory written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_weights() {
        let dist = Categorical::from_weights([1.0, 1.0, 2.0, 0.0, 4.0]).unwrap();
        assert_eq!(&[0.125, 0.125, 0.25, 0.0, 0.5], dist.probabilities());
        assert_eq!(&[0.125, 0.25, 0.5, 0.5, 1.0], dist.cumulative());
    }

    #[test]
    fn test_from_weights_invalid() {
        assert!(Categorical::from_weights([0.0; NUM_SYMBOLS]).is_err());
        assert!(Categorical::from_weights([1.0, -1.0, 1.0, 1.0, 1.0]).is_err());
        assert!(Categorical::from_weights([1.0, f64::NAN, 1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let dist = Categorical::random(&mut rng);
            assert!(dist.probabilities().iter().all(|&p| (0.0..=1.0).contains(&p)));
            assert!((dist.cumulative()[NUM_SYMBOLS - 1] - 1.0).abs() < 1e-12);
            assert!(dist.cumulative().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_index_for() {
        let dist = Categorical::from_weights([1.0, 1.0, 2.0, 0.0, 4.0]).unwrap();
        assert_eq!(0, dist.index_for(0.0));
        assert_eq!(0, dist.index_for(0.125));
        assert_eq!(1, dist.index_for(0.126));
        assert_eq!(2, dist.index_for(0.3));
        // ties go to the first index; the zero-probability symbol is skipped
        assert_eq!(2, dist.index_for(0.5));
        assert_eq!(4, dist.index_for(0.75));
        assert_eq!(4, dist.index_for(1.5));
    }

    #[test]
    fn test_generate_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        let dist = Categorical::random(&mut rng);
        for size in [0, 1, 10, 1000] {
            let t = generate(&dist, size, &mut rng);
            assert_eq!(size, t.len());
            assert!(t.iter().all(|b| ALPHABET.contains(b)));
        }
    }

    #[test]
    fn test_generate_degenerate() {
        let mut rng = StdRng::seed_from_u64(5);
        let dist = Categorical::from_weights([0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(b"dddddddd".to_vec(), generate(&dist, 8, &mut rng));
    }

    #[test]
    fn test_empirical_frequencies() {
        assert_eq!([0.0; NUM_SYMBOLS], empirical_frequencies(b""));
        assert_eq!(
            [0.5, 0.25, 0.0, 0.0, 0.25],
            empirical_frequencies(b"aaeb")
        );
    }

    #[test]
    fn test_frequencies_converge() {
        const N: usize = 1_000_000;
        // chi-squared, 4 degrees of freedom, 99%
        const CRITICAL: f64 = 13.277;

        let mut rng = StdRng::seed_from_u64(2024);
        let dist = Categorical::random(&mut rng);
        let t = generate(&dist, N, &mut rng);
        let observed = empirical_frequencies(&t);

        let mut chi2 = 0.0;
        for (o, p) in observed.iter().zip(dist.probabilities()) {
            assert!((o - p).abs() < 0.005);
            let expected = p * N as f64;
            chi2 += (o * N as f64 - expected).powi(2) / expected;
        }
        assert!(chi2 < CRITICAL, "chi2 = {chi2}");
    }

    #[test]
    fn test_write_trajectory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        std::fs::write(&path, b"previous content that is longer").unwrap();

        write_trajectory(&path, b"abcde").unwrap();
        assert_eq!(b"abcde".to_vec(), std::fs::read(&path).unwrap());
    }

    #[test]
    fn test_write_trajectory_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("t.txt");
        assert!(matches!(
            write_trajectory(&path, b"a"),
            Err(Error::WriteTrajectory { .. })
        ));
    }
}
