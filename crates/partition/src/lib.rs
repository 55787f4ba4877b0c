//! Box decomposition of structured volumes
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod decomposition;
mod error;
mod factor;
mod grid;
mod layout;
mod slicer;

pub mod descriptor;

// inline important types and operations for a nice public API
#[doc(inline)]
pub use decomposition::{Decomposition, PartitionBox};

#[doc(inline)]
pub use descriptor::{parse_descriptor, read_descriptor};

#[doc(inline)]
pub use factor::{factor, FactorTriple, MAX_PARTITIONS};

#[doc(inline)]
pub use grid::GridSpec;

#[doc(inline)]
pub use layout::{read_layout, write_layout, Layout, Part};

#[doc(inline)]
pub use slicer::{axis_boundaries, partition, split_bounds};

#[doc(inline)]
pub use error::{Error, Result};
