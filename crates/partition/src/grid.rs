// crate modules
use crate::error::{Error, Result};

/// Logical extent of a structured volume
///
/// A regular grid of points described by the position of the first point, the
/// distance between points, and the number of points along each axis.
///
/// The outermost layer of points on every side is a ghost/halo border that is
/// never split between partitions, so only the interior index range
/// `[1, counts-2]` is divided up.
///
/// ```rust
/// # use voltools_partition::GridSpec;
/// // 101 points from -1.0 to 0.0 on every axis
/// let grid = GridSpec::uniform(-1.0, 0.01, 101);
/// assert_eq!(grid.interior(0), 99);
/// assert!(grid.validate().is_ok());
///
/// // A single point has no extent to partition
/// assert!(GridSpec::uniform(0.0, 1.0, 1).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Coordinates of the first point
    pub origin: [f64; 3],
    /// Distance between neighbouring points
    pub spacing: [f64; 3],
    /// Number of points along each axis
    pub counts: [i64; 3],
}

impl GridSpec {
    /// Create a grid with different values on each axis
    pub fn new(origin: [f64; 3], spacing: [f64; 3], counts: [i64; 3]) -> Self {
        Self {
            origin,
            spacing,
            counts,
        }
    }

    /// Create a grid with identical origin, spacing, and counts on every axis
    pub fn uniform(origin: f64, spacing: f64, count: i64) -> Self {
        Self::new([origin; 3], [spacing; 3], [count; 3])
    }

    /// Check the grid can be partitioned
    ///
    /// Every axis needs at least 2 points, a finite origin, and a finite
    /// positive spacing.
    pub fn validate(&self) -> Result<()> {
        for axis in 0..3 {
            if !self.origin[axis].is_finite() {
                return Err(Error::InvalidOrigin {
                    axis,
                    origin: self.origin[axis],
                });
            }

            if self.counts[axis] < 2 {
                return Err(Error::InvalidPointCount {
                    axis,
                    count: self.counts[axis],
                });
            }

            let spacing = self.spacing[axis];
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(Error::InvalidSpacing { axis, spacing });
            }
        }
        Ok(())
    }

    /// Last usable index on `axis` once the halo is removed, `counts-2`
    pub fn interior(&self, axis: usize) -> i64 {
        self.counts[axis] - 2
    }

    /// Physical coordinate of point `index` along `axis`
    pub fn coordinate(&self, axis: usize, index: i64) -> f64 {
        self.origin[axis] + index as f64 * self.spacing[axis]
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}x{}x{} points, origin {:?}, spacing {:?}",
            self.counts[0], self.counts[1], self.counts[2], self.origin, self.spacing
        )
    }
}
