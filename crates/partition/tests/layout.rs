//! Integration tests for partition documents and decomposition queries

use rstest::{fixture, rstest};
use voltools_partition::{
    factor, partition, read_layout, write_layout, Decomposition, Error, GridSpec, Layout,
};

/// 12 points on every axis with unit spacing, cut into 8 boxes
#[fixture]
fn cube() -> Decomposition {
    partition(factor(8).unwrap(), &GridSpec::uniform(0.0, 1.0, 12)).unwrap()
}

#[rstest]
fn document_shape(cube: Decomposition) {
    let json = Layout::new(&cube).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let parts = value["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 8);
    assert_eq!(value.as_object().unwrap().len(), 1);

    for part in parts {
        let part = part.as_object().unwrap();
        assert_eq!(part.len(), 1);
        assert_eq!(part["extent"].as_array().unwrap().len(), 6);
    }

    assert!(json.starts_with(r#"{"parts":[{"extent":[1.0,6.0,1.0,6.0,1.0,6.0]},"#));
    assert!(json.ends_with(r#"{"extent":[6.0,10.0,6.0,10.0,6.0,10.0]}]}"#));
}

#[rstest]
fn document_is_deterministic(cube: Decomposition) {
    let a = Layout::new(&cube).to_json().unwrap();
    let b = Layout::new(&cube.clone()).to_json().unwrap();
    assert_eq!(a, b);
}

#[rstest]
fn write_adds_newline(cube: Decomposition) {
    let layout = Layout::new(&cube);
    let mut buffer = Vec::new();
    layout.write(&mut buffer, false).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text, layout.to_json().unwrap() + "\n");
}

#[rstest]
fn pretty_document_reads_back(cube: Decomposition) {
    let layout = Layout::with_neighbors(&cube).unwrap();
    let pretty = layout.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(pretty.parse::<Layout>().unwrap(), layout);
}

#[rstest]
fn neighbors(cube: Decomposition) {
    let layout = Layout::with_neighbors(&cube).unwrap();

    assert_eq!(
        layout.parts[0].neighbors,
        Some([None, Some(1), None, Some(2), None, Some(4)])
    );
    assert_eq!(
        layout.parts[7].neighbors,
        Some([Some(6), None, Some(5), None, Some(3), None])
    );

    let json = layout.to_json().unwrap();
    assert!(json.contains(r#""neighbors":[null,1,null,2,null,4]"#));
}

#[test]
fn neighbors_are_symmetric() {
    let boxes = partition(factor(24).unwrap(), &GridSpec::uniform(0.0, 1.0, 50)).unwrap();

    for rank in 0..boxes.len() {
        let faces = boxes.neighbors(rank).unwrap();
        for (face, neighbor) in faces.iter().enumerate() {
            if let Some(other) = neighbor {
                // the opposite face of the neighbour points back
                let opposite = face ^ 1;
                assert_eq!(boxes.neighbors(*other).unwrap()[opposite], Some(rank));
            }
        }
    }
}

#[rstest]
fn neighbors_out_of_range(cube: Decomposition) {
    assert!(matches!(
        cube.neighbors(8),
        Err(Error::RankOutOfRange { rank: 8, total: 8 })
    ));
}

#[rstest]
#[case([2.0, 2.0, 2.0], 0.0, Some(0))]
#[case([6.0, 2.0, 2.0], 0.0, Some(1))]
#[case([2.0, 7.0, 2.0], 0.0, Some(2))]
#[case([9.0, 9.0, 9.0], 0.0, Some(7))]
#[case([0.5, 2.0, 2.0], 0.0, None)]
#[case([0.5, 2.0, 2.0], 0.5, Some(0))]
#[case([10.0, 2.0, 2.0], 0.0, None)]
fn owner(
    cube: Decomposition,
    #[case] point: [f64; 3],
    #[case] radius: f64,
    #[case] expected: Option<usize>,
) {
    assert_eq!(cube.owner(point, radius), expected);
}

#[rstest]
fn ghosted_extents(cube: Decomposition) {
    let ghosted = cube.ghosted_extents(0.5);
    assert_eq!(ghosted.len(), 8);
    assert_eq!(ghosted[0], [0.5, 6.5, 0.5, 6.5, 0.5, 6.5]);
}

#[rstest]
fn file_round_trip(cube: Decomposition) {
    let path = std::env::temp_dir().join(format!("voltools_layout_{}.part", std::process::id()));

    let layout = Layout::new(&cube);
    write_layout(&layout, &path, true).unwrap();
    let read = read_layout(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(read, layout);
    assert_eq!(read.len(), 8);
}

#[test]
fn legacy_document_without_neighbors() {
    let layout: Layout = r#"{ "parts": [ { "extent": [-1.0, 0.0, -1.0, 0.0, -0.5, 0.5] } ] }"#
        .parse()
        .unwrap();
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.parts[0].neighbors, None);
}

#[rstest]
#[case(r#"{"parts":[{"extent":[1.0,0.0,0.0,1.0,0.0,1.0]}]}"#)]
#[case(r#"{"parts":[{"extent":[0.0,1.0,0.0,1.0,0.0]}]}"#)]
#[case(r#"{"extents":[]}"#)]
fn invalid_documents(#[case] text: &str) {
    assert!(text.parse::<Layout>().is_err());
}

#[test]
fn inverted_extent_is_reported() {
    let result = r#"{"parts":[{"extent":[0.0,1.0,0.0,1.0,2.0,1.0]}]}"#.parse::<Layout>();
    assert!(matches!(
        result,
        Err(Error::InvalidExtent { part: 0, axis: 2 })
    ));
}
