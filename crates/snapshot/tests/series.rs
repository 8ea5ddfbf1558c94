//! Integration tests for VTK conversion and series manifests

// external crates
use ndarray::Array3;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use vtkio::model::{Attribute, DataSet, Extent, IOBuffer, Piece};

// crate under test
use hdf2vtk_snapshot::{
    numbered_stem, snapshot_to_vtk, write_vtk, Field, Grid, SeriesManifest, Snapshot, VtkFormat,
};

#[fixture]
fn snapshot() -> Snapshot {
    let grid = Grid {
        x: vec![0.0, 1.0, 2.0],
        y: vec![0.0, 0.5, 1.0],
        z: vec![0.0, 2.0, 4.0],
    };

    // distinct digit per axis to make the cell ordering visible
    let values = Array3::from_shape_fn((2, 2, 2), |(i, j, k)| {
        i as f64 + 10.0 * j as f64 + 100.0 * k as f64
    });

    Snapshot {
        time: 1.5,
        grid,
        fields: vec![
            Field {
                name: "u".to_string(),
                values: values.clone(),
            },
            Field {
                name: "up".to_string(),
                values,
            },
        ],
    }
}

#[rstest]
#[case(0, "flow_0000")]
#[case(1, "flow_0001")]
#[case(42, "flow_0042")]
#[case(9999, "flow_9999")]
fn numbered_stems_are_zero_padded(#[case] count: usize, #[case] expected: &str) {
    assert_eq!(numbered_stem("flow", count), expected);
}

#[rstest]
fn manifest_round_trips_through_file(snapshot: Snapshot) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flow.vtr.series");

    let mut manifest = SeriesManifest::new();
    for count in 0..3 {
        let name = numbered_stem("flow", count) + ".vtr";
        manifest.push(name, snapshot.time + count as f64);
    }
    manifest.write(&path).unwrap();

    let read_back = SeriesManifest::read(&path).unwrap();
    assert_eq!(read_back, manifest);
    assert_eq!(read_back.files.len(), 3);
    assert_eq!(read_back.files[2].name, "flow_0002.vtr");
    assert_eq!(read_back.files[2].time, 3.5);
}

#[rstest]
fn manifest_format_is_readable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flow.vtr.series");

    let mut manifest = SeriesManifest::new();
    manifest.push("flow_0000.vtr".to_string(), 0.0);
    manifest.write(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"file-series-version\": \"1.0\""));

    // pretty-printed with 4-space indentation
    assert!(text.lines().nth(1).unwrap().starts_with("    \""));
}

#[rstest]
fn convert_builds_a_rectilinear_grid(snapshot: Snapshot) {
    let vtk = snapshot_to_vtk(&snapshot);

    let DataSet::RectilinearGrid { extent, pieces, .. } = vtk.data else {
        panic!("expected a rectilinear grid dataset");
    };

    let Extent::Ranges(ranges) = extent else {
        panic!("expected extent ranges");
    };
    assert_eq!(ranges, [0..=2, 0..=2, 0..=2]);

    let Piece::Inline(piece) = &pieces[0] else {
        panic!("expected inline piece data");
    };
    assert_eq!(piece.coords.x.len(), 3);
    assert_eq!(piece.coords.y.len(), 3);
    assert_eq!(piece.coords.z.len(), 3);
    assert_eq!(piece.data.cell.len(), 2);
}

#[rstest]
fn cell_data_is_flattened_first_axis_fastest(snapshot: Snapshot) {
    let vtk = snapshot_to_vtk(&snapshot);

    let DataSet::RectilinearGrid { pieces, .. } = vtk.data else {
        panic!("expected a rectilinear grid dataset");
    };
    let Piece::Inline(piece) = &pieces[0] else {
        panic!("expected inline piece data");
    };

    let Attribute::DataArray(array) = &piece.data.cell[0] else {
        panic!("expected a cell data array");
    };
    assert_eq!(array.name, "u");

    let IOBuffer::F64(values) = &array.data else {
        panic!("expected f64 cell data");
    };
    assert_eq!(
        values,
        &vec![0.0, 1.0, 10.0, 11.0, 100.0, 101.0, 110.0, 111.0]
    );
}

#[rstest]
#[case(VtkFormat::Xml, "flow.vtr")]
#[case(VtkFormat::LegacyAscii, "flow.vtk")]
#[case(VtkFormat::LegacyBinary, "flow.vtk")]
fn write_vtk_creates_output_files(
    snapshot: Snapshot,
    #[case] format: VtkFormat,
    #[case] name: &str,
) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);

    assert_eq!(name.split('.').next_back().unwrap(), format.extension());

    write_vtk(snapshot_to_vtk(&snapshot), &path, format).unwrap();
    assert!(path.is_file());
}
