//! Integration tests for volume descriptor parsing

use rstest::rstest;
use voltools_partition::{parse_descriptor, read_descriptor, Error, GridSpec};

#[test]
fn uniform_descriptor() {
    let grid = read_descriptor("./data/uniform.vol").unwrap();
    assert_eq!(grid, GridSpec::uniform(-1.0, 0.01, 101));
}

#[test]
fn per_axis_descriptor() {
    let grid = read_descriptor("./data/axes.vol").unwrap();
    assert_eq!(
        grid,
        GridSpec::new([0.0, 0.0, -2.0], [1.0, 1.0, 0.5], [12, 12, 24])
    );
}

#[test]
fn annotated_descriptor() {
    let grid = read_descriptor("./data/annotated.vol").unwrap();
    assert_eq!(grid, GridSpec::uniform(0.0, 1.0, 12));
}

#[rstest]
#[case("./data/two_values.vol")]
#[case("./data/missing_spacing.vol")]
#[case("./data/fractional_counts.vol")]
fn malformed_descriptor(#[case] path: &str) {
    assert!(matches!(read_descriptor(path), Err(Error::ParseError(_))));
}

#[test]
fn descriptor_is_validated() {
    assert!(matches!(
        read_descriptor("./data/single_point.vol"),
        Err(Error::InvalidPointCount { axis: 0, count: 1 })
    ));
    assert!(matches!(
        read_descriptor("./data/negative_spacing.vol"),
        Err(Error::InvalidSpacing { axis: 0, .. })
    ));
}

#[test]
fn missing_descriptor() {
    assert!(matches!(
        read_descriptor("./data/does_not_exist.vol"),
        Err(Error::IOError(_))
    ));
}

#[rstest]
#[case("float\r\n1.5\r\n10\r\n0.1\r\n", GridSpec::uniform(1.5, 0.1, 10))]
#[case("\nfloat\n\n2\n  10  \n1e-1\n", GridSpec::uniform(2.0, 0.1, 10))]
#[case("uchar\n-1 -2 -3\n4 5 6\n1 2 3\n", GridSpec::new([-1.0, -2.0, -3.0], [1.0, 2.0, 3.0], [4, 5, 6]))]
fn descriptor_text(#[case] text: &str, #[case] expected: GridSpec) {
    assert_eq!(parse_descriptor(text).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("float\n")]
#[case("float\nabc\n10\n0.1\n")]
#[case("float\n1.0\n10 11\n0.1\n")]
#[case("float\n1.0\n10\n0.1 0.2 0.3 0.4\n")]
#[case("float\n1.0x\n10\n0.1\n")]
fn descriptor_text_errors(#[case] text: &str) {
    assert!(matches!(parse_descriptor(text), Err(Error::ParseError(_))));
}
