// standard library
use std::ops::RangeInclusive;

// crate modules
use crate::snapshot::{Field, Snapshot};
use crate::vtk::SnapshotToVtkBuilder;
use hdf2vtk_utils::f;

// external crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, Coordinates, DataArray, DataSet, ElementType, Extent,
    IOBuffer, RangeExtent, RectilinearGridPiece, Version, Vtk,
};

/// Convert snapshots to vtk formats for plotting
///
/// All of the logic for mapping field data onto the right VTK types is
/// implemented here. Snapshots are always 3D Cartesian, so the output is
/// a rectilinear grid with every field attached as cell data.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// # Byte ordering
///
/// Most useful is the byte ordering, which is important for binary file
/// compatability with plotting software. ParaView does not care, but
/// something like Visit only likes big endian. This is the default for
/// convenience but is completely up to the user.
///
/// ```rust
/// # use hdf2vtk_snapshot::vtk::SnapshotToVtk;
/// # use vtkio::model::ByteOrder;
/// // Change the byte ordering to little endian
/// let converter = SnapshotToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
#[derive(Debug, PartialEq)]
pub struct SnapshotToVtk {
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
}

// Public API
impl SnapshotToVtk {
    /// Start with the default configuration
    pub fn new() -> SnapshotToVtk {
        Default::default()
    }

    /// Get an instance of the [SnapshotToVtkBuilder]
    pub fn builder() -> SnapshotToVtkBuilder {
        SnapshotToVtkBuilder::default()
    }

    /// Convert a [Snapshot] to a vtkio::Vtk object
    ///
    /// Once the configuration is set through either the builder or
    /// changing the fields directly, convert any [Snapshot] into a Vtk
    /// ready for writing or further processing.
    pub fn convert(&self, snapshot: &Snapshot) -> Vtk {
        Vtk {
            version: Version::Auto,
            title: f!("Snapshot at t = {:.6e}", snapshot.time),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(RectilinearGridPiece {
                extent: Self::extent(snapshot),
                coords: Self::coordinates(snapshot),
                data: Self::collect_attributes(snapshot),
            }),
        }
    }
}

impl Default for SnapshotToVtk {
    fn default() -> Self {
        SnapshotToVtkBuilder::default().build()
    }
}

// Conversion internals
impl SnapshotToVtk {
    /// Defines number of cells in each extent for the rectilinear grid
    fn extent(snapshot: &Snapshot) -> Extent {
        let (nx, ny, nz) = snapshot.grid.cells();
        let range_ext: RangeExtent = [
            RangeInclusive::new(0, nx as i32),
            RangeInclusive::new(0, ny as i32),
            RangeInclusive::new(0, nz as i32),
        ];
        Extent::Ranges(range_ext)
    }

    /// Defines coordinates for the rectilinear grid from the vertex arrays
    fn coordinates(snapshot: &Snapshot) -> Coordinates {
        Coordinates {
            x: IOBuffer::F64(snapshot.grid.x.clone()),
            y: IOBuffer::F64(snapshot.grid.y.clone()),
            z: IOBuffer::F64(snapshot.grid.z.clone()),
        }
    }

    /// Collect every field into cell data, keeping the request order
    fn collect_attributes(snapshot: &Snapshot) -> Attributes {
        let mut attributes = Attributes::new();

        for field in &snapshot.fields {
            let cell_data = DataArray {
                name: field.name.clone(),
                elem: ElementType::Scalars {
                    num_comp: 1,
                    lookup_table: None,
                },
                data: IOBuffer::F64(Self::cell_order(field)),
            };
            attributes.cell.push(Attribute::DataArray(cell_data));
        }

        attributes
    }

    /// Flatten cell values to the rectilinear grid cell ordering
    ///
    /// The grid expects the first axis fastest, so the stored `(x, y, z)`
    /// arrays are iterated with axes reversed.
    fn cell_order(field: &Field) -> Vec<f64> {
        field.values.t().iter().copied().collect()
    }
}
