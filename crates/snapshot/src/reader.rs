//! Read operations for HDF5 snapshot containers
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! A container stays open for the lifetime of a [SnapshotFile], and the
//! underlying handle is released again when it drops, on every exit path.
//!
//! ```rust, no_run
//! # use hdf2vtk_snapshot::{read_snapshot, FieldSpec, SnapshotFile};
//! let file = SnapshotFile::open("snapshots_s1.h5").unwrap();
//! let spec = FieldSpec::new(vec!["u".to_string()], vec![]);
//!
//! // vertex grid shared by every write in the file
//! let grid = file.grid_for(&spec).unwrap();
//!
//! // all fields of the last write, collected into a Snapshot
//! let index = file.resolve_index(-1).unwrap();
//! let snapshot = read_snapshot(&file, &grid, &spec, index).unwrap();
//! ```
//!
//! # Container layout
//!
//! The expected layout is the one written by the Dedalus file handlers:
//!
//! ```text
//! /tasks/<field>        float array shaped (time, x, y, z), with a
//!                       DIMENSION_LABELS attribute naming the axes
//! /scales/sim_time      simulation time per write
//! /scales/<axis>/<...>  cell-center coordinates, one group per axis
//! ```
//!
//! Fields are dimensioned `(time, x, y, z)`, so the leading label is
//! dropped and exactly three spatial labels must remain. Each axis group
//! may hold several scale variants; only the first one found is used, on
//! the assumption of Cartesian single-scale grids.

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::fluctuation::fluctuation;
use crate::snapshot::{Field, FieldSpec, Grid, Snapshot};

// external crates
use hdf2vtk_utils::f;
use hdf5::types::VarLenUnicode;
use log::{debug, info};
use ndarray::{s, Array3, Ix3};

/// Container group holding the named field arrays
pub const FIELD_GROUP: &str = "tasks";

/// Container group holding the coordinate scale arrays
pub const SCALE_GROUP: &str = "scales";

/// Attribute naming the axes of a stored field array
pub const DIM_LABEL_ATTR: &str = "DIMENSION_LABELS";

/// Dataset of simulation times, one entry per write
pub const SIM_TIME: &str = "sim_time";

/// An open snapshot container
///
/// Thin wrapper over the `hdf5` file handle with the lookups needed for
/// conversion: simulation times, dimension labels, coordinate grids, and
/// per-write field slices.
#[derive(Debug)]
pub struct SnapshotFile {
    file: hdf5::File,
}

impl SnapshotFile {
    /// Open a snapshot container read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            file: hdf5::File::open(path)?,
        })
    }

    /// Simulation time of every write in the container
    pub fn sim_times(&self) -> Result<Vec<f64>> {
        let times = self
            .file
            .dataset(&f!("{SCALE_GROUP}/{SIM_TIME}"))?
            .read_1d::<f64>()?;
        Ok(times.to_vec())
    }

    /// Number of writes stored in the container
    pub fn n_writes(&self) -> Result<usize> {
        Ok(self.sim_times()?.len())
    }

    /// Turn a possibly-negative time index into a concrete one
    ///
    /// Negative values count back from the last write, so `-1` is always
    /// the most recent write in the container.
    pub fn resolve_index(&self, nt: i64) -> Result<usize> {
        let length = self.n_writes()?;
        let index = if nt < 0 { nt + length as i64 } else { nt };

        if index < 0 || index >= length as i64 {
            return Err(Error::TimeIndexOutOfRange { index: nt, length });
        }

        Ok(index as usize)
    }

    /// Spatial dimension labels attached to a stored field
    ///
    /// The leading label is the time axis and is dropped. Anything other
    /// than exactly three remaining labels is unsupported.
    pub fn dimension_labels(&self, field: &str) -> Result<Vec<String>> {
        let labels = self
            .field_dataset(field)?
            .attr(DIM_LABEL_ATTR)?
            .read_1d::<VarLenUnicode>()?;

        let spatial = labels
            .iter()
            .skip(1)
            .map(|label| label.as_str().to_string())
            .collect::<Vec<String>>();

        if spatial.len() != 3 {
            return Err(Error::UnsupportedDimensionality {
                found: spatial.len(),
            });
        }

        Ok(spatial)
    }

    /// Extract the vertex grid from the scales of a stored field
    ///
    /// Cell-center coordinates are read for each of the three spatial
    /// axes and converted to vertex coordinates of length N+1.
    pub fn grid(&self, field: &str) -> Result<Grid> {
        let labels = self.dimension_labels(field)?;

        // ok to use indexing as the length is already checked by this point
        Ok(Grid {
            x: self.vertices(&labels[0])?,
            y: self.vertices(&labels[1])?,
            z: self.vertices(&labels[2])?,
        })
    }

    /// Extract the vertex grid for the first requested field
    ///
    /// All fields processed within one write share the same grid, so the
    /// first requested field is as good as any.
    pub fn grid_for(&self, spec: &FieldSpec) -> Result<Grid> {
        let first = spec.fields.first().ok_or(Error::NoFieldsRequested)?;
        self.grid(first)
    }

    /// Read the 3D slice of a stored field at one time index
    pub fn field_slice(&self, field: &str, index: usize) -> Result<Array3<f64>> {
        debug!("Reading {FIELD_GROUP}/{field} at index {index}");
        let values = self
            .field_dataset(field)?
            .read_slice::<f64, _, Ix3>(s![index, .., .., ..])?;
        Ok(values)
    }

    /// Cell-center coordinates for one axis, converted to vertices
    ///
    /// Where several scale variants are stored for an axis, only the
    /// first one found is used. Cartesian single-scale grids are assumed.
    fn vertices(&self, label: &str) -> Result<Vec<f64>> {
        let scales = self.file.group(&f!("{SCALE_GROUP}/{label}"))?;

        let variants = scales.member_names()?;
        let variant = variants
            .first()
            .ok_or_else(|| Error::ScaleNotFound(label.to_string()))?;

        let centres = scales.dataset(variant)?.read_1d::<f64>()?.to_vec();
        vertices_from_centres(&centres, label)
    }

    /// Look up a field dataset under the tasks group
    fn field_dataset(&self, field: &str) -> Result<hdf5::Dataset> {
        self.file
            .dataset(&f!("{FIELD_GROUP}/{field}"))
            .map_err(|_| Error::FieldNotFound(field.to_string()))
    }
}

/// Convert cell-center coordinates to cell-vertex coordinates
///
/// Interior vertices are midpoints between neighbouring centers, and the
/// two edge vertices are linearly extrapolated, so N centers always give
/// N+1 vertices.
///
/// ```rust
/// # use hdf2vtk_snapshot::reader::vertices_from_centres;
/// let vertices = vertices_from_centres(&[0.5, 1.5, 2.5], "x").unwrap();
/// assert_eq!(vertices, vec![0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn vertices_from_centres(centres: &[f64], axis: &str) -> Result<Vec<f64>> {
    let n = centres.len();
    if n < 2 {
        return Err(Error::NotEnoughCells {
            axis: axis.to_string(),
            found: n,
        });
    }

    let mut vertices = Vec::with_capacity(n + 1);
    vertices.push(1.5 * centres[0] - 0.5 * centres[1]);
    vertices.extend(centres.windows(2).map(|w| 0.5 * (w[0] + w[1])));
    vertices.push(1.5 * centres[n - 1] - 0.5 * centres[n - 2]);

    Ok(vertices)
}

/// Collect all data for one write into a [Snapshot]
///
/// This is the shared per-time-index routine behind both the single
/// snapshot and series paths: every requested field is read at `index`,
/// and fields flagged for decomposition get a derived `<name>p`
/// fluctuation field inserted straight after them.
///
/// A requested field missing from the container fails the whole read;
/// nothing is skipped or recovered.
pub fn read_snapshot(
    file: &SnapshotFile,
    grid: &Grid,
    spec: &FieldSpec,
    index: usize,
) -> Result<Snapshot> {
    let times = file.sim_times()?;
    let time = times
        .get(index)
        .copied()
        .ok_or(Error::TimeIndexOutOfRange {
            index: index as i64,
            length: times.len(),
        })?;

    let mut fields = Vec::with_capacity(spec.fields.len());
    for name in &spec.fields {
        let values = file.field_slice(name, index)?;

        let derived = spec.wants_fluctuation(name).then(|| {
            info!("Decomposing {name} -> {name}p");
            fluctuation(&values)
        });

        fields.push(Field {
            name: name.clone(),
            values,
        });

        if let Some(values) = derived {
            fields.push(Field {
                name: f!("{name}p"),
                values,
            });
        }
    }

    Ok(Snapshot {
        time,
        grid: grid.clone(),
        fields,
    })
}
