//! Parsers for volume descriptor files
//!
//! A descriptor (`.vol`) gives the logical extent of a structured volume in
//! four lines:
//!
//! ```text
//! float            <- type tag, required but otherwise ignored
//! -1.0             <- origin
//! 101              <- point counts
//! 0.01             <- spacing
//! ```
//!
//! Each of the last three lines holds either one value, used for every axis,
//! or three values for x, y, and z. Anything after the values on a line is
//! ignored, so long as it is not another number. Blank lines are skipped.

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::grid::GridSpec;

// external crates
use log::{debug, trace};

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{self, space1};
use nom::combinator::{eof, opt, peek};
use nom::number::complete::double;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

/// Read a volume descriptor file into a validated [GridSpec]
///
/// ```rust, no_run
/// # use voltools_partition::read_descriptor;
/// let grid = read_descriptor("./data/uniform.vol").unwrap();
/// println!("{grid}");
/// ```
pub fn read_descriptor<P: AsRef<Path>>(path: P) -> Result<GridSpec> {
    debug!("Reading descriptor {:?}", path.as_ref());
    let content = std::fs::read_to_string(path)?;
    parse_descriptor(&content)
}

/// Parse the text of a volume descriptor into a validated [GridSpec]
///
/// ```rust
/// # use voltools_partition::parse_descriptor;
/// // uniform values
/// let grid = parse_descriptor("float\n-1.0\n101\n0.01\n").unwrap();
/// assert_eq!(grid.origin, [-1.0; 3]);
/// assert_eq!(grid.counts, [101; 3]);
///
/// // per-axis values
/// let grid = parse_descriptor("float\n0 0 -2\n12 12 24\n1 1 0.5\n").unwrap();
/// assert_eq!(grid.origin, [0.0, 0.0, -2.0]);
/// assert_eq!(grid.counts, [12, 12, 24]);
/// assert_eq!(grid.spacing, [1.0, 1.0, 0.5]);
///
/// // missing spacing
/// assert!(parse_descriptor("float\n-1.0\n101\n").is_err());
/// ```
pub fn parse_descriptor(content: &str) -> Result<GridSpec> {
    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

    let tag = next_line(&mut lines, "type")?;
    trace!("Descriptor type tag: {tag}");

    let origin = parse_line(next_line(&mut lines, "origin")?, "origin", float)?;
    let counts = parse_line(next_line(&mut lines, "counts")?, "counts", integer)?;
    let spacing = parse_line(next_line(&mut lines, "spacing")?, "spacing", float)?;

    let grid = GridSpec::new(origin, spacing, counts);
    grid.validate()?;
    Ok(grid)
}

/// Take the next non-blank line, naming the missing field if there is none
fn next_line<'a>(lines: &mut impl Iterator<Item = &'a str>, label: &str) -> Result<&'a str> {
    lines
        .next()
        .ok_or_else(|| Error::ParseError(format!("missing {label} line")))
}

/// Parse one labelled line of one or three values
fn parse_line<T: Copy>(
    line: &str,
    label: &str,
    value: fn(&str) -> IResult<&str, T>,
) -> Result<[T; 3]> {
    let failure = || Error::ParseError(format!("expected 1 or 3 {label} values, found \"{line}\""));

    let (rest, values) = axis_values(line, value).map_err(|_| failure())?;

    // e.g. two values, or four
    if let Some(token) = rest.split_whitespace().next() {
        if token.parse::<f64>().is_ok() {
            return Err(failure());
        }
    }

    Ok(values)
}

// ! Parser combinators

/// Either three values for x, y, z or a single value for all of them
fn axis_values<T: Copy>(i: &str, value: fn(&str) -> IResult<&str, T>) -> IResult<&str, [T; 3]> {
    let (i, x) = value(i)?;
    let (i, yz) = opt(pair(preceded(space1, value), preceded(space1, value)))(i)?;
    Ok((i, yz.map_or([x; 3], |(y, z)| [x, y, z])))
}

/// Floating point value delimited by whitespace, e.g. `-1.0e-2`
fn float(i: &str) -> IResult<&str, f64> {
    terminated(double, peek(alt((space1, eof))))(i)
}

/// Signed integer delimited by whitespace
fn integer(i: &str) -> IResult<&str, i64> {
    terminated(complete::i64, peek(alt((space1, eof))))(i)
}
