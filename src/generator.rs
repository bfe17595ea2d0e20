//! Random input arrays for fresh visualizations.
//!
//! Preconditions are checked up front. A zero size or an inverted range is a
//! caller bug and is reported, never clamped.

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Result, VizError};

/// `size` independent uniform integers in `[min, max]`, from the thread RNG.
pub fn generate_random_array(size: usize, min: i32, max: i32) -> Result<Vec<i32>> {
    generate_with_rng(&mut rand::thread_rng(), size, min, max)
}

/// Same as [`generate_random_array`] but drawing from a caller-supplied RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    min: i32,
    max: i32,
) -> Result<Vec<i32>> {
    if size == 0 {
        return Err(VizError::InvalidArraySize { size });
    }
    if min > max {
        return Err(VizError::InvalidValueRange { min, max });
    }

    let values: Vec<i32> = (0..size).map(|_| rng.gen_range(min..=max)).collect();
    tracing::trace!(size, min, max, "generated array");
    Ok(values)
}

/// Source of input arrays: either the thread RNG or a seeded, reproducible one.
#[derive(Debug)]
pub enum ArraySource {
    Thread,
    Seeded(StdRng),
}

impl ArraySource {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ArraySource::Seeded(StdRng::seed_from_u64(seed)),
            None => ArraySource::Thread,
        }
    }

    pub fn generate(&mut self, size: usize, min: i32, max: i32) -> Result<Vec<i32>> {
        match self {
            ArraySource::Thread => generate_random_array(size, min, max),
            ArraySource::Seeded(rng) => generate_with_rng(rng, size, min, max),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_bounds() {
        let values = generate_random_array(10, 5, 100).unwrap();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (5..=100).contains(v)));
    }

    #[test]
    fn test_generate_degenerate_range() {
        let values = generate_random_array(4, 7, 7).unwrap();
        assert_eq!(values, vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        let err = generate_random_array(0, 1, 10).unwrap_err();
        assert!(matches!(err, VizError::InvalidArraySize { size: 0 }));
    }

    #[test]
    fn test_generate_rejects_inverted_range() {
        let err = generate_random_array(3, 10, 1).unwrap_err();
        assert!(matches!(err, VizError::InvalidValueRange { min: 10, max: 1 }));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = ArraySource::new(Some(42));
        let mut b = ArraySource::new(Some(42));
        assert_eq!(
            a.generate(30, 5, 100).unwrap(),
            b.generate(30, 5, 100).unwrap()
        );
    }
}
