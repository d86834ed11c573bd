//! Synthetic arrival-time samples for the plotter.

use rand::{Rng, rngs::StdRng};
use thiserror::Error;

use crate::models::distribution::{ArrivalRecord, Distribution};

#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    #[error("Invalid mean {0}: must be finite and non-negative")]
    InvalidMean(f64),
}

/// Moves an arrival time forward to the next arrival.
pub trait WorkloadDistribution {
    fn next_arrival(&self, timestamp: f64, rng: &mut StdRng) -> f64;
}

/// Constant interarrival time.
#[derive(Debug, Clone, Copy)]
pub struct FixedWorkload {
    offset: f64,
}

impl FixedWorkload {
    pub fn new(offset: f64) -> Result<Self, GenerateError> {
        check_mean(offset)?;
        Ok(Self { offset })
    }
}

impl WorkloadDistribution for FixedWorkload {
    fn next_arrival(&self, timestamp: f64, _rng: &mut StdRng) -> f64 {
        timestamp + self.offset
    }
}

/// Exponentially distributed interarrival times with the given mean, so arrivals
/// form a Poisson process.
#[derive(Debug, Clone, Copy)]
pub struct PoissonWorkload {
    mean: f64,
}

impl PoissonWorkload {
    pub fn new(mean: f64) -> Result<Self, GenerateError> {
        check_mean(mean)?;
        Ok(Self { mean })
    }
}

impl WorkloadDistribution for PoissonWorkload {
    fn next_arrival(&self, timestamp: f64, rng: &mut StdRng) -> f64 {
        // u in [0, 1) keeps ln(1 - u) finite
        let u: f64 = rng.random();
        timestamp - self.mean * (1.0 - u).ln()
    }
}

fn check_mean(mean: f64) -> Result<(), GenerateError> {
    if mean.is_finite() && mean >= 0.0 {
        Ok(())
    } else {
        Err(GenerateError::InvalidMean(mean))
    }
}

/// Draw `sample_size` arrivals starting from time zero.
pub fn generate<W: WorkloadDistribution + ?Sized>(
    workload: &W,
    sample_size: usize,
    rng: &mut StdRng,
) -> Distribution {
    let mut distribution = Distribution::with_capacity(sample_size);
    let mut last_arrival = 0.0;

    for _ in 0..sample_size {
        let arrival = workload.next_arrival(last_arrival, rng);
        distribution.push(ArrivalRecord {
            arrival,
            interarrival: arrival - last_arrival,
        });
        last_arrival = arrival;
    }

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_workload_is_cumulative() {
        let workload = FixedWorkload::new(5.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let distribution = generate(&workload, 3, &mut rng);

        assert_eq!(distribution.arrival, vec![5.0, 10.0, 15.0]);
        assert_eq!(distribution.interarrival, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_poisson_arrivals_are_running_sum() {
        let workload = PoissonWorkload::new(2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let distribution = generate(&workload, 500, &mut rng);

        assert_eq!(distribution.len(), 500);
        let mut last = 0.0;
        for record in distribution.records() {
            assert!(record.interarrival >= 0.0);
            assert!((record.arrival - last - record.interarrival).abs() < 1e-9);
            last = record.arrival;
        }
    }

    #[test]
    fn test_poisson_mean_is_close() {
        let workload = PoissonWorkload::new(2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let distribution = generate(&workload, 20_000, &mut rng);
        let mean = distribution.interarrival.iter().sum::<f64>() / distribution.len() as f64;

        assert!((mean - 2.0).abs() < 0.1, "sample mean {}", mean);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let workload = PoissonWorkload::new(1.0).unwrap();

        let first = generate(&workload, 50, &mut StdRng::seed_from_u64(9));
        let second = generate(&workload, 50, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_mean_is_rejected() {
        assert_eq!(
            PoissonWorkload::new(-1.0).unwrap_err(),
            GenerateError::InvalidMean(-1.0)
        );
        assert!(FixedWorkload::new(f64::INFINITY).is_err());
        assert!(PoissonWorkload::new(0.0).is_ok());
    }
}
