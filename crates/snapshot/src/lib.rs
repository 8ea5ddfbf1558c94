//! Reading and conversion of spectral simulation snapshots
//!
//! Simulation output stored as time-indexed scalar fields in HDF5 snapshot
//! containers is read into a [Snapshot] and converted to rectilinear-grid
//! VTK files, with an optional ParaView file-series manifest for
//! multi-snapshot runs.
//!
//! The container layout is the one written by the Dedalus file handlers:
//! named field arrays shaped `(time, x, y, z)` under `tasks/`, per-axis
//! coordinate arrays and a `sim_time` array under `scales/`. Only 3D
//! Cartesian grids are supported.

// Split into subfiles for development, but anything important is re-exported
mod error;
mod fluctuation;
mod snapshot;

pub mod reader;
pub mod series;
pub mod vtk;

// Inline anything important for a nice public API
#[doc(inline)]
pub use snapshot::{Field, FieldSpec, Grid, Snapshot};

#[doc(inline)]
pub use fluctuation::{fluctuation, horizontal_profile};

#[doc(inline)]
pub use reader::{read_snapshot, SnapshotFile};

#[doc(inline)]
pub use series::{numbered_stem, SeriesEntry, SeriesManifest};

#[doc(inline)]
pub use vtk::{snapshot_to_vtk, write_vtk, SnapshotToVtk, SnapshotToVtkBuilder, VtkFormat};

#[doc(inline)]
pub use error::{Error, Result};
