//! Integration tests for snapshot container reading

// standard library
use std::path::{Path, PathBuf};

// external crates
use hdf5::types::VarLenUnicode;
use ndarray::{Array1, Array4, ArrayD, Axis, IxDyn};
use rstest::{fixture, rstest};
use tempfile::TempDir;

// crate under test
use hdf2vtk_snapshot::{read_snapshot, Error, FieldSpec, SnapshotFile};

const NX: usize = 4;
const NY: usize = 3;
const NZ: usize = 5;
const WRITES: usize = 3;

const SIM_TIMES: [f64; WRITES] = [0.0, 0.25, 0.5];

fn labels(names: &[&str]) -> Array1<VarLenUnicode> {
    Array1::from(
        names
            .iter()
            .map(|name| name.parse::<VarLenUnicode>().unwrap())
            .collect::<Vec<VarLenUnicode>>(),
    )
}

fn centres(n: usize, step: f64) -> Array1<f64> {
    Array1::from_iter((0..n).map(|i| step * (i as f64 + 0.5)))
}

/// Build a valid 3D container with `u` and `T` fields over 3 writes
fn write_container(path: &Path) -> hdf5::Result<()> {
    let file = hdf5::File::create(path)?;
    let tasks = file.create_group("tasks")?;
    let scales = file.create_group("scales")?;

    scales
        .new_dataset_builder()
        .with_data(&Array1::from(SIM_TIMES.to_vec()))
        .create("sim_time")?;

    for (axis, n) in [("x", NX), ("y", NY), ("z", NZ)] {
        let group = scales.create_group(axis)?;
        group
            .new_dataset_builder()
            .with_data(&centres(n, 1.0))
            .create("1.0")?;
    }

    let u = Array4::from_shape_fn((WRITES, NX, NY, NZ), |(t, i, j, k)| {
        100.0 * t as f64 + i as f64 + 10.0 * j as f64 + 7.0 * k as f64
    });
    let temperature = Array4::from_shape_fn((WRITES, NX, NY, NZ), |(t, i, j, k)| {
        t as f64 + (i as f64 - 1.5) * (j as f64 - 1.0) + 2.0 * k as f64
    });

    for (name, values) in [("u", u), ("T", temperature)] {
        let dataset = tasks.new_dataset_builder().with_data(&values).create(name)?;
        dataset
            .new_attr_builder()
            .with_data(&labels(&["t", "x", "y", "z"]))
            .create("DIMENSION_LABELS")?;
    }

    Ok(())
}

/// Build a container whose field has the wrong spatial dimensionality
fn write_flat_container(path: &Path, spatial: usize) -> hdf5::Result<()> {
    let file = hdf5::File::create(path)?;
    let tasks = file.create_group("tasks")?;
    let scales = file.create_group("scales")?;

    scales
        .new_dataset_builder()
        .with_data(&Array1::from(SIM_TIMES.to_vec()))
        .create("sim_time")?;

    let axes = ["x", "y", "z", "w"];
    let mut names = vec!["t"];
    names.extend(&axes[..spatial]);

    let shape = vec![2; spatial + 1];
    let values = ArrayD::<f64>::zeros(IxDyn(&shape));

    let dataset = tasks.new_dataset_builder().with_data(&values).create("u")?;
    dataset
        .new_attr_builder()
        .with_data(&labels(&names))
        .create("DIMENSION_LABELS")?;

    Ok(())
}

#[fixture]
fn container() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshots_s1.h5");
    write_container(&path).unwrap();
    (dir, path)
}

#[fixture]
fn spec() -> FieldSpec {
    FieldSpec::new(
        vec!["u".to_string(), "T".to_string()],
        vec!["T".to_string()],
    )
}

#[rstest]
fn grid_vertices_have_cells_plus_one(container: (TempDir, PathBuf)) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let grid = file.grid("u").unwrap();

    assert_eq!(grid.x.len(), NX + 1);
    assert_eq!(grid.y.len(), NY + 1);
    assert_eq!(grid.z.len(), NZ + 1);
    assert_eq!(grid.cells(), (NX, NY, NZ));
}

#[rstest]
fn grid_vertices_interpolate_cell_centres(container: (TempDir, PathBuf)) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let grid = file.grid("u").unwrap();

    // unit-width cells centred on half-integers give integer vertices
    for (i, vertex) in grid.x.iter().enumerate() {
        assert!((vertex - i as f64).abs() < 1e-12);
    }
}

#[rstest]
fn snapshot_collects_fields_in_request_order(container: (TempDir, PathBuf), spec: FieldSpec) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let grid = file.grid_for(&spec).unwrap();

    let snapshot = read_snapshot(&file, &grid, &spec, 0).unwrap();

    let names = snapshot
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(names, vec!["u", "T", "Tp"]);

    for field in &snapshot.fields {
        assert_eq!(field.values.dim(), (NX, NY, NZ));
    }
}

#[rstest]
fn field_values_match_the_selected_write(container: (TempDir, PathBuf), spec: FieldSpec) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let grid = file.grid_for(&spec).unwrap();

    let snapshot = read_snapshot(&file, &grid, &spec, 2).unwrap();
    let u = &snapshot.field("u").unwrap().values;

    assert_eq!(u[[0, 0, 0]], 200.0);
    assert_eq!(u[[3, 2, 4]], 200.0 + 3.0 + 20.0 + 28.0);
}

#[rstest]
#[case(0)]
#[case(2)]
fn fluctuation_sums_to_zero_per_level(
    container: (TempDir, PathBuf),
    spec: FieldSpec,
    #[case] index: usize,
) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let grid = file.grid_for(&spec).unwrap();

    let snapshot = read_snapshot(&file, &grid, &spec, index).unwrap();
    let fluctuation = &snapshot.field("Tp").unwrap().values;

    for level in fluctuation.axis_iter(Axis(2)) {
        assert!(level.sum().abs() < 1e-10);
    }
}

#[rstest]
fn snapshot_time_matches_sim_time(container: (TempDir, PathBuf), spec: FieldSpec) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let grid = file.grid_for(&spec).unwrap();

    for (index, expected) in SIM_TIMES.iter().enumerate() {
        let snapshot = read_snapshot(&file, &grid, &spec, index).unwrap();
        assert_eq!(snapshot.time, *expected);
    }
}

#[rstest]
fn missing_field_is_fatal(container: (TempDir, PathBuf)) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let spec = FieldSpec::new(vec!["u".to_string(), "vorticity".to_string()], vec![]);
    let grid = file.grid_for(&spec).unwrap();

    let result = read_snapshot(&file, &grid, &spec, 0);
    assert!(matches!(result, Err(Error::FieldNotFound(name)) if name == "vorticity"));
}

#[rstest]
#[case(2)] // plane data
#[case(4)] // over-dimensioned data
fn non_3d_containers_are_rejected(#[case] spatial: usize) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flat.h5");
    write_flat_container(&path, spatial).unwrap();

    let file = SnapshotFile::open(&path).unwrap();
    let result = file.grid("u");

    assert!(matches!(
        result,
        Err(Error::UnsupportedDimensionality { found }) if found == spatial
    ));
}

#[rstest]
#[case(-1, WRITES - 1)]
#[case(-3, 0)]
#[case(0, 0)]
#[case(2, 2)]
fn time_indices_resolve_like_the_container(
    container: (TempDir, PathBuf),
    #[case] nt: i64,
    #[case] expected: usize,
) {
    let file = SnapshotFile::open(&container.1).unwrap();
    assert_eq!(file.resolve_index(nt).unwrap(), expected);
}

#[rstest]
#[case(3)]
#[case(-4)]
fn out_of_range_time_indices_are_fatal(container: (TempDir, PathBuf), #[case] nt: i64) {
    let file = SnapshotFile::open(&container.1).unwrap();
    let result = file.resolve_index(nt);

    assert!(matches!(
        result,
        Err(Error::TimeIndexOutOfRange { index, length }) if index == nt && length == WRITES
    ));
}
