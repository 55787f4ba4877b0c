//! Partition documents
//!
//! A partition document is the JSON form of a [Decomposition] that other
//! tools read to decide which rank receives which data:
//!
//! ```text
//! {"parts":[{"extent":[xlo,xhi,ylo,yhi,zlo,zhi]}, ...]}
//! ```
//!
//! The position of a part in the list is its rank. Face neighbours may be
//! included on request, otherwise the document has exactly the shape above.

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

// crate modules
use crate::decomposition::Decomposition;
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Serialisable layout of partition extents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Every part, in rank order
    pub parts: Vec<Part>,
}

/// One entry of a [Layout]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// `[xlo, xhi, ylo, yhi, zlo, zhi]`
    pub extent: [f64; 6],

    /// Face neighbours `-x, +x, -y, +y, -z, +z`, `null` on the volume boundary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<[Option<usize>; 6]>,
}

impl Layout {
    /// Layout of the box extents only
    ///
    /// ```rust
    /// # use voltools_partition::{factor, partition, GridSpec, Layout};
    /// let boxes = partition(factor(2).unwrap(), &GridSpec::uniform(0.0, 1.0, 6)).unwrap();
    /// let layout = Layout::new(&boxes);
    ///
    /// assert_eq!(
    ///     layout.to_json().unwrap(),
    ///     r#"{"parts":[{"extent":[1.0,4.0,1.0,4.0,1.0,3.0]},{"extent":[1.0,4.0,1.0,4.0,3.0,4.0]}]}"#
    /// );
    /// ```
    pub fn new(decomposition: &Decomposition) -> Self {
        let parts = decomposition
            .boxes
            .iter()
            .map(|b| Part {
                extent: b.flat_extent(),
                neighbors: None,
            })
            .collect();

        Self { parts }
    }

    /// Layout of the box extents and the face neighbours of every box
    pub fn with_neighbors(decomposition: &Decomposition) -> Result<Self> {
        let mut layout = Self::new(decomposition);
        for (rank, part) in layout.parts.iter_mut().enumerate() {
            part.neighbors = Some(decomposition.neighbors(rank)?);
        }
        Ok(layout)
    }

    /// Number of parts in the layout
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if the layout has no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check that no extent is inverted
    pub fn validate(&self) -> Result<()> {
        for (part, p) in self.parts.iter().enumerate() {
            for axis in 0..3 {
                let (lo, hi) = (p.extent[2 * axis], p.extent[2 * axis + 1]);
                if lo.is_nan() || hi.is_nan() || lo > hi {
                    return Err(Error::InvalidExtent { part, axis });
                }
            }
        }
        Ok(())
    }

    /// Compact JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document followed by a newline
    ///
    /// The whole document is serialised before anything is written, so a
    /// failure never leaves a partial document behind.
    pub fn write<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        let json = self.serialise(pretty)?;
        write_json(writer, &json)
    }

    fn serialise(&self, pretty: bool) -> Result<String> {
        match pretty {
            true => self.to_json_pretty(),
            false => self.to_json(),
        }
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let layout: Layout = serde_json::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }
}

/// Write a [Layout] to a JSON file at `path`
///
/// ```rust, no_run
/// # use voltools_partition::{factor, partition, write_layout, GridSpec, Layout};
/// let boxes = partition(factor(8).unwrap(), &GridSpec::uniform(-1.0, 0.01, 101)).unwrap();
/// write_layout(&Layout::new(&boxes), "./volume.part", true).unwrap();
/// ```
pub fn write_layout<P: AsRef<Path>>(layout: &Layout, path: P, pretty: bool) -> Result<()> {
    // serialise before the file is created
    let json = layout.serialise(pretty)?;
    write_json(BufWriter::new(File::create(path)?), &json)
}

/// Read and validate a partition document from `path`
///
/// ```rust, no_run
/// # use voltools_partition::read_layout;
/// let layout = read_layout("./volume.part").unwrap();
/// println!("{} parts", layout.len());
/// ```
pub fn read_layout<P: AsRef<Path>>(path: P) -> Result<Layout> {
    let reader = BufReader::new(File::open(path)?);
    let layout: Layout = serde_json::from_reader(reader)?;
    layout.validate()?;
    Ok(layout)
}

/// Write an already serialised document and a trailing newline
fn write_json<W: Write>(mut writer: W, json: &str) -> Result<()> {
    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(())
}
