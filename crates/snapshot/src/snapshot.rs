//! Data model for a single simulation write

// external crates
use ndarray::Array3;

/// Vertex coordinates of a 3D Cartesian rectilinear grid
///
/// The container stores cell-center coordinates; these are the derived
/// cell-vertex coordinates, so each axis holds one more value than there
/// are cells along it. See
/// [vertices_from_centres](crate::reader::vertices_from_centres) for the
/// conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    /// Vertex coordinates along the first axis
    pub x: Vec<f64>,
    /// Vertex coordinates along the second axis
    pub y: Vec<f64>,
    /// Vertex coordinates along the third axis
    pub z: Vec<f64>,
}

impl Grid {
    /// Number of cells along each axis
    ///
    /// ```rust
    /// # use hdf2vtk_snapshot::Grid;
    /// let grid = Grid {
    ///     x: vec![0.0, 1.0, 2.0],
    ///     y: vec![0.0, 1.0],
    ///     z: vec![0.0, 0.5, 1.0, 1.5],
    /// };
    /// assert_eq!(grid.cells(), (2, 1, 3));
    /// ```
    pub fn cells(&self) -> (usize, usize, usize) {
        (
            self.x.len().saturating_sub(1),
            self.y.len().saturating_sub(1),
            self.z.len().saturating_sub(1),
        )
    }
}

/// A named cell-centered scalar field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Dataset name, including derived `<name>p` fluctuation names
    pub name: String,
    /// Cell values over the spatial axes, shaped `(nx, ny, nz)`
    pub values: Array3<f64>,
}

/// All data extracted from the container for one time index
///
/// Rebuilt fresh for every processed write; nothing is carried over
/// between time indices. Fields keep their request order, with each
/// derived fluctuation field placed immediately after its base field.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Simulation time of this write
    pub time: f64,
    /// Vertex coordinates shared by all fields in the write
    pub grid: Grid,
    /// Ordered collection of extracted and derived fields
    pub fields: Vec<Field>,
}

impl Snapshot {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Which fields to extract, and which to decompose
///
/// Supplied once at startup and immutable thereafter. Fluctuation names
/// that never appear in `fields` are ignored, matching the behaviour of
/// extraction being driven by the field list alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSpec {
    /// Ordered field names requested for extraction
    pub fields: Vec<String>,
    /// Subset of `fields` also decomposed into fluctuations
    pub fluctuations: Vec<String>,
}

impl FieldSpec {
    /// Bundle the requested field names into a spec
    pub fn new(fields: Vec<String>, fluctuations: Vec<String>) -> Self {
        Self {
            fields,
            fluctuations,
        }
    }

    /// Should a fluctuation field be derived for `name`?
    pub fn wants_fluctuation(&self, name: &str) -> bool {
        self.fluctuations.iter().any(|f| f == name)
    }
}
