//! Random Streams
//!
//! Scene builders draw from an injected `RandomSource` instead of global state.
//! The pipeline seeds a fresh `StdRng` per image, so every image is reproducible
//! on its own; tests can script exact sequences with `FixedSequence`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `[low, high]`, both inclusive.
    fn int_in(&mut self, low: i32, high: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Seeded generator used for the published artwork.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

impl RandomSource for StdRng {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Cycles through scripted values.
///
/// Integers are clamped into the requested range, so `i32::MAX` always yields
/// the upper bound and `i32::MIN` the lower one.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    ints: Vec<i32>,
    units: Vec<f64>,
    next_int: usize,
    next_unit: usize,
}

impl FixedSequence {
    pub fn new(ints: Vec<i32>, units: Vec<f64>) -> Self {
        Self { ints, units, next_int: 0, next_unit: 0 }
    }

    /// Every integer draw returns its upper bound, every float `unit`.
    pub fn constant_high(unit: f64) -> Self {
        Self::new(vec![i32::MAX], vec![unit])
    }
}

impl RandomSource for FixedSequence {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        let Some(&v) = self.ints.get(self.next_int % self.ints.len().max(1)) else {
            return low;
        };
        self.next_int += 1;
        v.clamp(low, high.max(low))
    }

    fn unit(&mut self) -> f64 {
        let Some(&v) = self.units.get(self.next_unit % self.units.len().max(1)) else {
            return 0.0;
        };
        self.next_unit += 1;
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_stream_repeats() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..100 {
            assert_eq!(a.int_in(30, 1890), b.int_in(30, 1890));
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn test_seeded_range_inclusive() {
        let mut rng = seeded(7);
        let draws: Vec<i32> = (0..500).map(|_| rng.int_in(3, 5)).collect();
        assert!(draws.iter().all(|v| (3..=5).contains(v)));
        assert!(draws.contains(&3));
        assert!(draws.contains(&5));
    }

    #[test]
    fn test_fixed_sequence_cycles_and_clamps() {
        let mut seq = FixedSequence::new(vec![1, 50, 7], vec![0.25, 0.75]);
        assert_eq!(seq.int_in(5, 10), 5);
        assert_eq!(seq.int_in(5, 10), 10);
        assert_eq!(seq.int_in(5, 10), 7);
        assert_eq!(seq.int_in(0, 100), 1);
        assert_eq!(seq.unit(), 0.25);
        assert_eq!(seq.unit(), 0.75);
        assert_eq!(seq.unit(), 0.25);
    }

    #[test]
    fn test_empty_sequence_falls_back() {
        let mut seq = FixedSequence::new(vec![], vec![]);
        assert_eq!(seq.int_in(3, 9), 3);
        assert_eq!(seq.unit(), 0.0);
    }
}
