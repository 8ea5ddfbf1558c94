// internal modules
use crate::vtk::SnapshotToVtk;

// external crates
use vtkio::model::ByteOrder;

/// Builder implementation for SnapshotToVtk configuration
///
/// The fields of [SnapshotToVtk] are left public for direct use but the
/// module also implements a builder.
///
/// To get the final [SnapshotToVtk] from the builder, call
/// [build()](SnapshotToVtkBuilder::build).
///
/// ```rust, no_run
/// # use hdf2vtk_snapshot::vtk::{write_vtk, SnapshotToVtk, VtkFormat};
/// # use hdf2vtk_snapshot::Snapshot;
/// # use vtkio::model::ByteOrder;
/// # let snapshot = Snapshot { time: 0.0, grid: Default::default(), fields: vec![] };
/// // Make a new builder, change some values
/// let converter = SnapshotToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
///
/// // Convert the snapshot using the parameters set
/// let vtk = converter.convert(&snapshot);
///
/// // Write to "flow.vtk" using the old ASCII text format
/// write_vtk(vtk, "./flow.vtk", VtkFormat::LegacyAscii).unwrap();
/// ```
#[derive(Debug)]
pub struct SnapshotToVtkBuilder {
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
}

impl SnapshotToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [SnapshotToVtk] type
    pub fn build(self) -> SnapshotToVtk {
        SnapshotToVtk {
            byte_order: self.byte_order,
        }
    }

    /// Set the byte ordering
    ///
    /// Note that Visit being Visit only reads big endian, even though
    /// most systems are little endian. Defaults to big endian for
    /// convenience.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

impl Default for SnapshotToVtkBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
        }
    }
}
