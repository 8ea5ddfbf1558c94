//! ParaView file-series manifests for multi-snapshot runs
//!
//! A series run writes one numbered mesh file per processed time index
//! and a single `.vtr.series` manifest telling ParaView which simulation
//! time each file holds:
//!
//! ```json
//! {
//!     "file-series-version": "1.0",
//!     "files": [
//!         { "name": "flow_0000.vtr", "time": 0.0 },
//!         { "name": "flow_0001.vtr", "time": 0.25 }
//!     ]
//! }
//! ```
//!
//! Entries are append-only over the lifetime of a run and the manifest is
//! written exactly once, after all input files are processed. In single
//! snapshot mode none of this is used.

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

// crate modules
use crate::error::Result;
use hdf2vtk_utils::f;

// external crates
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Version tag understood by the ParaView file-series reader
pub const SERIES_VERSION: &str = "1.0";

/// One output file and the simulation time it holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// File name as referenced from the manifest, e.g. `flow_0000.vtr`
    pub name: String,
    /// Simulation time of the write
    pub time: f64,
}

/// Ordered manifest of every file written during a series run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesManifest {
    /// Format version tag for the visualisation tool
    #[serde(rename = "file-series-version")]
    version: String,
    /// Entries in the order the files were written
    pub files: Vec<SeriesEntry>,
}

impl SeriesManifest {
    /// Start an empty manifest with the current format version
    pub fn new() -> Self {
        Self {
            version: SERIES_VERSION.to_string(),
            files: Vec::new(),
        }
    }

    /// Append an entry for a file that was just written
    pub fn push(&mut self, name: String, time: f64) {
        self.files.push(SeriesEntry { name, time });
    }

    /// Serialise the manifest to a `.vtr.series` file
    ///
    /// UTF-8 JSON, pretty-printed with the 4-space indentation used in
    /// the ParaView examples.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = init_writer(path)?;
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    /// Read a manifest back from file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for SeriesManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-padded sequence name for one write in a series
///
/// The counter runs over the whole series, continuing across input files
/// rather than restarting for each one.
///
/// ```rust
/// # use hdf2vtk_snapshot::numbered_stem;
/// assert_eq!(numbered_stem("flow", 0), "flow_0000");
/// assert_eq!(numbered_stem("flow", 42), "flow_0042");
/// ```
pub fn numbered_stem(stem: &str, count: usize) -> String {
    f!("{stem}_{count:04}")
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
