//! Result and Error types for hdf2vtk-snapshot

/// Type alias for `Result<T, snapshot::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `hdf2vtk-snapshot` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure in the HDF5 container access layer
    #[error("failure in HDF5 container access")]
    Hdf5Error(#[from] hdf5::Error),

    /// Failure writing visual toolkit output
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Failure to serialise the series manifest
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// A requested field has no dataset in the container
    #[error("field \"{0}\" not found in the container")]
    FieldNotFound(String),

    /// An axis label has no coordinate scale group in the container
    #[error("no coordinate scale found for axis \"{0}\"")]
    ScaleNotFound(String),

    /// Grids other than 3D Cartesian are not supported
    #[error("only 3D data is supported (found {found:?} spatial dimensions)")]
    UnsupportedDimensionality {
        /// Number of spatial dimension labels discovered
        found: usize,
    },

    /// Time index beyond the writes stored in the container
    #[error("time index {index} outside of the {length} writes in the container")]
    TimeIndexOutOfRange {
        /// Requested index, as given (may be negative)
        index: i64,
        /// Length of the time axis
        length: usize,
    },

    /// Too few cell centres to infer vertex coordinates
    #[error("axis \"{axis}\" needs at least 2 cell centres to infer vertices (found {found})")]
    NotEnoughCells {
        /// Axis label from the container
        axis: String,
        /// Number of cell centres found
        found: usize,
    },

    /// An empty field list leaves nothing to convert
    #[error("no fields requested for extraction")]
    NoFieldsRequested,
}
