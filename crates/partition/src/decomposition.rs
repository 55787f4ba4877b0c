// crate modules
use crate::error::{Error, Result};
use crate::factor::FactorTriple;

/// A single axis-aligned sub-box of the volume
///
/// Boxes always know their position in the partition grid and physical
/// extent. Boxes cut from a [GridSpec](crate::GridSpec) also keep the index
/// range they cover, which is `None` for boxes cut from a plain bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionBox {
    /// Position in the partition grid (x, y, z)
    pub ijk: [usize; 3],
    /// Physical `[lo, hi]` on each axis
    pub extent: [[f64; 2]; 3],
    /// Point index `[first, last]` on each axis
    pub range: Option<[[i64; 2]; 3]>,
}

impl PartitionBox {
    /// Extent flattened to `[xlo, xhi, ylo, yhi, zlo, zhi]`
    ///
    /// ```rust
    /// # use voltools_partition::PartitionBox;
    /// let b = PartitionBox {
    ///     ijk: [0, 0, 0],
    ///     extent: [[1.0, 6.0], [2.0, 7.0], [3.0, 8.0]],
    ///     range: None,
    /// };
    /// assert_eq!(b.flat_extent(), [1.0, 6.0, 2.0, 7.0, 3.0, 8.0]);
    /// ```
    pub fn flat_extent(&self) -> [f64; 6] {
        let [x, y, z] = self.extent;
        [x[0], x[1], y[0], y[1], z[0], z[1]]
    }

    /// Extent grown by `margin` on every side
    pub fn ghosted_extent(&self, margin: f64) -> [f64; 6] {
        let mut extent = self.flat_extent();
        for pair in extent.chunks_exact_mut(2) {
            pair[0] -= margin;
            pair[1] += margin;
        }
        extent
    }

    /// Number of points owned on each axis, if cut from a grid
    pub fn point_counts(&self) -> Option<[i64; 3]> {
        self.range
            .map(|range| [0, 1, 2].map(|a| range[a][1] - range[a][0] + 1))
    }

    /// Number of points including one halo layer either side, if cut from a grid
    pub fn ghosted_point_counts(&self) -> Option<[i64; 3]> {
        self.point_counts().map(|counts| counts.map(|c| c + 2))
    }

    /// Is the point inside the box, allowing for a particle `radius`?
    ///
    /// Lower faces are inclusive and upper faces exclusive so that a point
    /// exactly on a shared face belongs to the box above it.
    ///
    /// ```rust
    /// # use voltools_partition::PartitionBox;
    /// let b = PartitionBox {
    ///     ijk: [0, 0, 0],
    ///     extent: [[0.0, 1.0]; 3],
    ///     range: None,
    /// };
    /// assert!(b.contains([0.0, 0.5, 0.5], 0.0));
    /// assert!(!b.contains([1.0, 0.5, 0.5], 0.0));
    /// assert!(b.contains([1.05, 0.5, 0.5], 0.1));
    /// ```
    pub fn contains(&self, point: [f64; 3], radius: f64) -> bool {
        (0..3).all(|a| {
            let [lo, hi] = self.extent[a];
            point[a] + radius >= lo && point[a] - radius < hi
        })
    }
}

/// Ordered collection of boxes covering a volume
///
/// Boxes are stored with x varying fastest, then y, then z. The position of a
/// box in this order is its rank, and downstream tools rely on that positional
/// correspondence.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Number of boxes along each axis
    pub factors: FactorTriple,
    /// Every box, in rank order
    pub boxes: Vec<PartitionBox>,
}

impl Decomposition {
    /// Total number of boxes
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if there are no boxes, which a valid decomposition never has
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Box belonging to `rank`
    pub fn get(&self, rank: usize) -> Result<&PartitionBox> {
        self.boxes.get(rank).ok_or(Error::RankOutOfRange {
            rank,
            total: self.boxes.len(),
        })
    }

    /// Rank of the box at grid position `ijk`
    ///
    /// ```rust
    /// # use voltools_partition::{partition, FactorTriple, GridSpec};
    /// let factors = FactorTriple::new(2, 3, 4).unwrap();
    /// let boxes = partition(factors, &GridSpec::uniform(0.0, 1.0, 26)).unwrap();
    ///
    /// assert_eq!(boxes.rank([1, 0, 0]), 1);
    /// assert_eq!(boxes.rank([0, 1, 0]), 2);
    /// assert_eq!(boxes.rank([1, 2, 3]), 23);
    /// assert_eq!(boxes.ijk(23), [1, 2, 3]);
    /// ```
    pub fn rank(&self, ijk: [usize; 3]) -> usize {
        let [fi, fj, _] = self.factor_sizes();
        ijk[0] + ijk[1] * fi + ijk[2] * fi * fj
    }

    /// Grid position of the box at `rank`, the inverse of [rank()](Self::rank)
    pub fn ijk(&self, rank: usize) -> [usize; 3] {
        let [fi, fj, _] = self.factor_sizes();
        [rank % fi, (rank / fi) % fj, rank / (fi * fj)]
    }

    /// Face neighbours of the box at `rank`
    ///
    /// Faces are ordered `-x, +x, -y, +y, -z, +z`, and faces on the boundary
    /// of the volume have no neighbour.
    pub fn neighbors(&self, rank: usize) -> Result<[Option<usize>; 6]> {
        self.get(rank)?;

        let sizes = self.factor_sizes();
        let ijk = self.ijk(rank);
        let mut neighbors = [None; 6];

        for axis in 0..3 {
            if ijk[axis] > 0 {
                let mut below = ijk;
                below[axis] -= 1;
                neighbors[2 * axis] = Some(self.rank(below));
            }
            if ijk[axis] + 1 < sizes[axis] {
                let mut above = ijk;
                above[axis] += 1;
                neighbors[2 * axis + 1] = Some(self.rank(above));
            }
        }

        Ok(neighbors)
    }

    /// First rank whose box contains `point`, allowing for a particle `radius`
    pub fn owner(&self, point: [f64; 3], radius: f64) -> Option<usize> {
        self.boxes.iter().position(|b| b.contains(point, radius))
    }

    /// All extents grown by `margin`, in rank order
    pub fn ghosted_extents(&self, margin: f64) -> Vec<[f64; 6]> {
        self.boxes.iter().map(|b| b.ghosted_extent(margin)).collect()
    }

    /// Factors as `usize` for index arithmetic, always >= 1
    fn factor_sizes(&self) -> [usize; 3] {
        self.factors.as_array().map(|f| f as usize)
    }
}
