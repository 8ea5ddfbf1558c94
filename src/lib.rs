//! `hdf2vtk` converts spectral fluid-simulation snapshots stored in HDF5
//! containers to visual toolkit formats
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]

// Re-exports of the workspace crates.
#[doc(inline)]
pub use hdf2vtk_snapshot as snapshot;

#[doc(inline)]
pub use hdf2vtk_utils as utils;
