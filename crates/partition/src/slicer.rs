//! Slicing of a volume into partition boxes
//!
//! Two flavours are provided:
//!
//! - [partition()] slices the interior point indices of a [GridSpec]
//! - [split_bounds()] slices a physical bounding box evenly
//!
//! Both produce boxes in the same order, with x varying fastest:
//!
//! ```text
//! for k in z chunks {
//!     for j in y chunks {
//!         for i in x chunks {
//!             box (i, j, k)
//!         }
//!     }
//! }
//! ```

// crate modules
use crate::decomposition::{Decomposition, PartitionBox};
use crate::error::{Error, Result};
use crate::factor::FactorTriple;
use crate::grid::GridSpec;

// external crates
use log::{debug, trace, warn};

/// Slice the index space of a grid into `factors` boxes
///
/// On every axis the halo layer is removed and the remaining index range
/// `[1, counts-2]` is cut into `factors` chunks of `(counts-2) / factor`
/// points. The last boundary is always `counts-2`, so the final chunk on each
/// axis absorbs any remainder. A two point axis has no interior and every box
/// collapses onto index 1. This is not a balanced split and is kept as-is
/// for compatibility with tools that already consume these documents.
///
/// Neighbouring chunks share their boundary index. Each chunk `[i0, i1]`
/// becomes the physical extent `[origin + i0*spacing, origin + i1*spacing]`.
///
/// ```rust
/// # use voltools_partition::{factor, partition, GridSpec};
/// let grid = GridSpec::uniform(0.0, 1.0, 12);
/// let boxes = partition(factor(8).unwrap(), &grid).unwrap();
///
/// assert_eq!(boxes.len(), 8);
/// assert_eq!(boxes.boxes[0].flat_extent(), [1.0, 6.0, 1.0, 6.0, 1.0, 6.0]);
/// assert_eq!(boxes.boxes[1].flat_extent(), [6.0, 10.0, 1.0, 6.0, 1.0, 6.0]);
/// ```
pub fn partition(factors: FactorTriple, grid: &GridSpec) -> Result<Decomposition> {
    grid.validate()?;
    debug!("Partitioning {grid} into {factors} boxes");

    let x_bounds = axis_boundaries(grid.interior(0), factors.axis(0));
    let y_bounds = axis_boundaries(grid.interior(1), factors.axis(1));
    let z_bounds = axis_boundaries(grid.interior(2), factors.axis(2));

    for (axis, bounds) in [&x_bounds, &y_bounds, &z_bounds].iter().enumerate() {
        if grid.interior(axis) < factors.axis(axis) {
            warn!(
                "Axis {axis} has {} interior points for {} partitions, boxes will be degenerate",
                grid.interior(axis),
                factors.axis(axis)
            );
        }
        trace!("Axis {axis} boundaries: {bounds:?}");
    }

    let mut boxes = Vec::with_capacity(factors.count() as usize);
    for (k, z) in chunks(&z_bounds).enumerate() {
        for (j, y) in chunks(&y_bounds).enumerate() {
            for (i, x) in chunks(&x_bounds).enumerate() {
                let range = [x, y, z];
                let extent = [0, 1, 2].map(|a| {
                    [
                        grid.coordinate(a, range[a][0]),
                        grid.coordinate(a, range[a][1]),
                    ]
                });
                trace!("Box {:?}: indices {range:?}, extent {extent:?}", [i, j, k]);

                boxes.push(PartitionBox {
                    ijk: [i, j, k],
                    extent,
                    range: Some(range),
                });
            }
        }
    }

    debug!("Generated {} partition boxes", boxes.len());
    Ok(Decomposition { factors, boxes })
}

/// Split a physical bounding box evenly into `factors` boxes
///
/// Each axis is cut into chunks of width `(max-min) / factor`, with the upper
/// face of the last chunk set to exactly `max` so that rounding never leaves
/// a sliver uncovered.
///
/// ```rust
/// # use voltools_partition::{split_bounds, FactorTriple};
/// let factors = FactorTriple::new(2, 1, 1).unwrap();
/// let boxes = split_bounds(factors, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).unwrap();
///
/// assert_eq!(boxes.boxes[0].flat_extent(), [0.0, 0.5, 0.0, 1.0, 0.0, 1.0]);
/// assert_eq!(boxes.boxes[1].flat_extent(), [0.5, 1.0, 0.0, 1.0, 0.0, 1.0]);
/// ```
pub fn split_bounds(factors: FactorTriple, min: [f64; 3], max: [f64; 3]) -> Result<Decomposition> {
    for axis in 0..3 {
        if !min[axis].is_finite() || !max[axis].is_finite() || min[axis] >= max[axis] {
            return Err(Error::InvalidBounds {
                axis,
                min: min[axis],
                max: max[axis],
            });
        }
    }
    debug!("Splitting bounds {min:?} to {max:?} into {factors} boxes");

    let edges = [0, 1, 2].map(|a| even_edges(min[a], max[a], factors.axis(a)));

    let mut boxes = Vec::with_capacity(factors.count() as usize);
    for (k, z) in edges[2].windows(2).enumerate() {
        for (j, y) in edges[1].windows(2).enumerate() {
            for (i, x) in edges[0].windows(2).enumerate() {
                let extent = [[x[0], x[1]], [y[0], y[1]], [z[0], z[1]]];
                trace!("Box {:?}: extent {extent:?}", [i, j, k]);
                boxes.push(PartitionBox {
                    ijk: [i, j, k],
                    extent,
                    range: None,
                });
            }
        }
    }

    debug!("Generated {} partition boxes", boxes.len());
    Ok(Decomposition { factors, boxes })
}

/// Chunk boundary indices for one axis
///
/// For an interior of `n` points and `f` chunks this is
/// `[1, 1+d, 1+2d, ..., 1+(f-1)d, n]` where `d = n / f`. An empty interior
/// ends at 1 rather than 0 so that no chunk is inverted.
///
/// ```rust
/// # use voltools_partition::axis_boundaries;
/// assert_eq!(axis_boundaries(10, 2), vec![1, 6, 10]);
/// assert_eq!(axis_boundaries(10, 3), vec![1, 4, 7, 10]);
/// assert_eq!(axis_boundaries(10, 1), vec![1, 10]);
/// assert_eq!(axis_boundaries(0, 2), vec![1, 1, 1]);
/// ```
///
/// # Panics
///
/// Panics if `factor` is zero. Any [FactorTriple] axis is at least 1.
pub fn axis_boundaries(interior: i64, factor: i64) -> Vec<i64> {
    let width = interior / factor;
    let mut boundaries = (0..factor).map(|c| 1 + c * width).collect::<Vec<i64>>();
    boundaries.push(interior.max(1));
    boundaries
}

/// Pairs of adjacent boundaries, i.e. the `[first, last]` index of each chunk
fn chunks(boundaries: &[i64]) -> impl Iterator<Item = [i64; 2]> + '_ {
    boundaries.windows(2).map(|w| [w[0], w[1]])
}

/// Evenly spaced edges from `min` to exactly `max`
fn even_edges(min: f64, max: f64, factor: i64) -> Vec<f64> {
    let width = (max - min) / factor as f64;
    let mut edges = (0..factor)
        .map(|c| min + c as f64 * width)
        .collect::<Vec<f64>>();
    edges.push(max);
    edges
}
