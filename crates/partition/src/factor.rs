//! Factorisation of a partition count into a three dimensional grid

// standard library
use std::str::FromStr;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;

/// Largest total number of partitions accepted
pub const MAX_PARTITIONS: i64 = 1 << 20;

/// Number of partitions along each axis
///
/// The product of the three factors is the total number of partitions. Any
/// triple of positive integers whose product is at most [MAX_PARTITIONS] is a
/// valid partition grid, whether found by [factor()] or given explicitly.
///
/// Explicit triples are parsed from comma separated text, which is the form
/// used by the `PARTITIONING` environment variable:
///
/// ```rust
/// # use voltools_partition::FactorTriple;
/// let factors: FactorTriple = "2,3,4".parse().unwrap();
/// assert_eq!(factors, FactorTriple::new(2, 3, 4).unwrap());
/// assert_eq!(factors.count(), 24);
///
/// // Zero, missing, or too many partitions are rejected
/// assert!("2,0,4".parse::<FactorTriple>().is_err());
/// assert!("2,4".parse::<FactorTriple>().is_err());
/// assert!("4096,4096,1".parse::<FactorTriple>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorTriple([i64; 3]);

impl FactorTriple {
    /// Create a triple from the partition counts along x, y, and z
    pub fn new(i: i64, j: i64, k: i64) -> Result<Self> {
        let count = i.checked_mul(j).and_then(|ij| ij.checked_mul(k));
        match count {
            Some(n) if i >= 1 && j >= 1 && k >= 1 && n <= MAX_PARTITIONS => Ok(Self([i, j, k])),
            _ => Err(Error::InvalidFactors(format!("{i},{j},{k}"))),
        }
    }

    /// Number of partitions along `axis` (0=x, 1=y, 2=z)
    pub fn axis(&self, axis: usize) -> i64 {
        self.0[axis]
    }

    /// Factors as an array in x, y, z order
    pub fn as_array(&self) -> [i64; 3] {
        self.0
    }

    /// Total number of partitions, i.e. `i*j*k`
    pub fn count(&self) -> i64 {
        self.0.iter().product()
    }

    /// Sum of the factors, the quantity minimised by [factor()]
    pub fn sum(&self) -> i64 {
        self.0.iter().sum()
    }
}

impl FromStr for FactorTriple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<i64>())
            .collect::<core::result::Result<Vec<i64>, _>>()
            .map_err(|_| Error::InvalidFactors(s.to_string()))?;

        match values[..] {
            [i, j, k] => Self::new(i, j, k).map_err(|_| Error::InvalidFactors(s.to_string())),
            _ => Err(Error::InvalidFactors(s.to_string())),
        }
    }
}

impl std::fmt::Display for FactorTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Split `n` partitions into the most cube-like grid of three factors
///
/// Every triple `(i, j, k)` with `i*j*k == n` is searched and the one with the
/// smallest `i+j+k` is returned. Ties go to the first triple found when
/// iterating over increasing `i`, then increasing `j`.
///
/// A prime `n` can only be split as `(1, 1, n)`.
///
/// ```rust
/// # use voltools_partition::{factor, FactorTriple};
/// assert_eq!(factor(1).unwrap().as_array(), [1, 1, 1]);
/// assert_eq!(factor(7).unwrap().as_array(), [1, 1, 7]);
/// assert_eq!(factor(8).unwrap().as_array(), [2, 2, 2]);
/// assert_eq!(factor(12).unwrap().as_array(), [2, 2, 3]);
///
/// // There is no way to partition a volume into nothing
/// assert!(factor(0).is_err());
/// assert!(factor(voltools_partition::MAX_PARTITIONS + 1).is_err());
/// ```
///
/// The search is brute force over `n/2` candidates, which is fine for the
/// process counts this is used for.
pub fn factor(n: i64) -> Result<FactorTriple> {
    if !(1..=MAX_PARTITIONS).contains(&n) {
        return Err(Error::InvalidPartitionCount(n));
    }

    // (1, 1, n) is always the first candidate found for n > 1
    let mut best = [1, 1, n];
    let mut best_sum = n + 2;

    for i in 1..=(n / 2) {
        if n % i != 0 {
            continue;
        }

        let jk = n / i;
        for j in 1..=(jk / 2) {
            if jk % j != 0 {
                continue;
            }

            let k = jk / j;
            if i + j + k < best_sum {
                best_sum = i + j + k;
                best = [i, j, k];
            }
        }
    }

    debug!("Factored {n} partitions as {}x{}x{}", best[0], best[1], best[2]);
    Ok(FactorTriple(best))
}
