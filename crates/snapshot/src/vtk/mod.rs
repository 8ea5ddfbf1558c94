//! Conversion of snapshots to VTK formats
//!
//! All of the logic for mapping a [Snapshot] onto visual toolkit types
//! lives here. The converter produces a rectilinear grid with one
//! cell-data array per field, ready for writing in XML or legacy formats.
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use hdf2vtk_snapshot::vtk::{snapshot_to_vtk, write_vtk, VtkFormat};
//! # use hdf2vtk_snapshot::Snapshot;
//! # let snapshot = Snapshot { time: 0.0, grid: Default::default(), fields: vec![] };
//! // Convert with the default configuration
//! let vtk = snapshot_to_vtk(&snapshot);
//!
//! // Write to "flow.vtr" as an XML rectilinear grid
//! write_vtk(vtk, "./flow.vtr", VtkFormat::Xml).unwrap();
//! ```
//!
//! For control over the byte ordering use the
//! [builder](SnapshotToVtk::builder) instead.

// Modules
mod builder;
mod convert;

// Flatten
pub use builder::SnapshotToVtkBuilder;
pub use convert::SnapshotToVtk;

// standard library
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::snapshot::Snapshot;

// external crates
use clap::ValueEnum;
use vtkio::model::Vtk;

/// Supported visual toolkit output formats
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VtkFormat {
    /// Modern xml format (.vtr)
    #[default]
    Xml,
    /// Legacy plain text format (.vtk)
    LegacyAscii,
    /// Legacy binary format (.vtk)
    LegacyBinary,
}

impl VtkFormat {
    /// File extension appropriate to the format
    ///
    /// Rectilinear grids are `vtr` files in the xml format, and anything
    /// legacy is a generic `vtk` file.
    pub fn extension(&self) -> &'static str {
        match self {
            VtkFormat::Xml => "vtr",
            _ => "vtk",
        }
    }
}

/// Convert a [Snapshot] with the default configuration
///
/// Equivalent to `SnapshotToVtk::default().convert(snapshot)`.
pub fn snapshot_to_vtk(snapshot: &Snapshot) -> Vtk {
    SnapshotToVtk::default().convert(snapshot)
}

/// Write a [Vtk] object to file in the requested format
///
/// The format decides the writer, not the file extension, but note that
/// plotting tools tend to expect the extensions from
/// [VtkFormat::extension].
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    match format {
        VtkFormat::Xml => vtk.export(path)?,
        VtkFormat::LegacyAscii => vtk.export_ascii(path)?,
        VtkFormat::LegacyBinary => vtk.export_be(path)?,
    }
    Ok(())
}
