//! Command line conversion of simulation snapshots to vtk formats
//!
//! Converts time-indexed scalar fields stored in HDF5 snapshot containers
//! to rectilinear visual toolkit files for 3D visualization.
//!
//! # Usage
//!
//! ```text
//! Usage: hdf2vtk --fields <list> [options] <input> [output]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples,
//! default values, and any important behaviour.
//!
//! ## Snapshot options
//!
//! ### > How to pick the fields to extract
//!
//! The field list is required, and names must match the datasets stored
//! under the `tasks/` group of the container.
//!
//! ```bash
//! # Extract the velocity components and temperature
//! hdf2vtk --fields u,v,w,T snapshots_s1.h5
//! ```
//!
//! ### > How to derive fluctuation fields
//!
//! Fields named in `--fluctfields` also get a derived fluctuation dataset
//! with the horizontal-plane mean removed at every vertical level. The
//! instantaneous field must be in `--fields`, and the derived dataset is
//! suffixed with `p`.
//!
//! ```bash
//! # Extract u, w, T and additionally produce Tp
//! hdf2vtk --fields u,w,T --fluctfields T snapshots_s1.h5
//! ```
//!
//! ### > How to convert a whole run
//!
//! With `--series` the input is a directory of snapshot files. Every
//! write of every file is converted to a numbered output, and a ParaView
//! `.vtr.series` manifest mapping files to simulation times is written at
//! the end.
//!
//! ```bash
//! # Convert snapshots/*h5 to flow_0000.vtr, flow_0001.vtr, ...
//! hdf2vtk --fields u,w --series snapshots/ flow
//! ```
//!
//! Files in the directory are processed in natural order, so
//! `snapshots_s10.h5` sorts after `snapshots_s2.h5`.
//!
//! ### > How to pick a specific write
//!
//! In single-snapshot mode `--nt` selects the time index, counting back
//! from the end for negative values. The default is the last write.
//!
//! ```bash
//! # Convert the first write of the file
//! hdf2vtk --fields u,w --nt 0 snapshots_s1.h5
//! ```
//!
//! ## Vtk options
//!
//! XML and legacy formats are supported, with both ascii and binary
//! variants.
//!
//! ```bash
//! # Output as a binary vtk with legacy formatting
//! hdf2vtk --fields u --format legacy-binary snapshots_s1.h5
//! ```
//!
//! *Note - [VisIt](https://visit-dav.github.io/visit-website/index.html)
//! only reads big-endian, but most systems are natively little-endian.
//! For personal convenience the default is big endian.*

// standard library
use std::path::{Path, PathBuf};

// crate modules
use hdf2vtk_snapshot::{
    numbered_stem, read_snapshot, write_vtk, FieldSpec, SeriesManifest, SnapshotFile,
    SnapshotToVtk, VtkFormat,
};
use hdf2vtk_utils::{f, SortExt};

// external crates
use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::*;
use vtkio::model::ByteOrder;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make Info the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet);

    let spec = FieldSpec::new(cli.fields.clone(), cli.fluctfields.clone());
    info!("fields = {:?}", spec.fields);
    info!("fluctfields = {:?}", spec.fluctuations);

    let inputs = collect_inputs(&cli)?;
    let stem = output_stem(&cli);
    debug!("Output stem set to {stem}");

    let converter = converter_init(&cli);

    let mut manifest = SeriesManifest::new();
    let mut count = 0;

    for path in &inputs {
        info!("Reading {}", path.display());
        let file = SnapshotFile::open(path)?;

        let times = file.sim_times()?;
        info!("Time = {times:?}");

        // every write in a file shares the same grid
        let grid = file.grid_for(&spec)?;

        if cli.series {
            for index in 0..times.len() {
                let snapshot = read_snapshot(&file, &grid, &spec, index)?;
                let filename = f!("{}.{}", numbered_stem(&stem, count), cli.format.extension());

                info!("Writing {filename}");
                write_vtk(converter.convert(&snapshot), &filename, cli.format)?;

                manifest.push(filename, snapshot.time);
                count += 1;
            }
        } else {
            let index = file.resolve_index(cli.nt)?;
            let snapshot = read_snapshot(&file, &grid, &spec, index)?;
            let filename = f!("{stem}.{}", cli.format.extension());

            info!("Writing {filename}");
            write_vtk(converter.convert(&snapshot), &filename, cli.format)?;
        }
    }

    if cli.series {
        let path = f!("{stem}.vtr.series");
        info!("Writing {path} with {} entries", manifest.files.len());
        manifest.write(path)?;
    }

    Ok(())
}

#[allow(rustdoc::invalid_rust_codeblocks)]
/// Convert simulation snapshots to visual toolkit formats
///
/// Examples
/// --------
///
///  Typical use:
///     $ hdf2vtk --fields u,v,w,T snapshots_s1.h5
///
///  Derive a temperature fluctuation field:
///     $ hdf2vtk --fields u,w,T --fluctfields T snapshots_s1.h5
///
///  Convert a whole run with a file-series manifest:
///     $ hdf2vtk --fields u,w --series snapshots/ flow
///
///  Pick the first write instead of the last:
///     $ hdf2vtk --fields u --nt 0 snapshots_s1.h5
///
///  Output legacy ascii format:
///     $ hdf2vtk --fields u --format legacy-ascii snapshots_s1.h5
///
/// Notes
/// -----
///
/// Only 3D Cartesian grids are supported, and all fields of a write must
/// share the same grid. Where an axis stores several coordinate scales,
/// the first one found is used.
///
/// Fluctuation fields are the instantaneous values with the mean over
/// the horizontal plane removed at each vertical level, and are written
/// under the original name suffixed with "p".
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: hdf2vtk --fields u,v,w,T snapshots_s1.h5 \n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("hdf2vtk --fields <list> [options] <input> [output]")
)]
struct Cli {
    // * Positional
    /// Path to snapshot file, or directory with --series
    #[arg(value_name = "input")]
    input: String,

    /// Output file stem
    ///
    /// Defaults to the input file stem.
    #[arg(value_name = "output")]
    output: Option<String>,

    // * Optional
    /// Comma-separated list of fields to extract
    ///
    /// Required. Names must match datasets stored under the `tasks/`
    /// group of the container, e.g. --fields u,v,w,T.
    #[arg(help_heading("Snapshot options"))]
    #[arg(long, required = true)]
    #[arg(value_delimiter = ',')]
    #[arg(value_name = "list")]
    fields: Vec<String>,

    /// Fields for which a fluctuation field is also produced
    ///
    /// Comma-separated subset of --fields. Each named field gets an
    /// additional dataset with the horizontal-plane mean removed,
    /// written under the original name suffixed with "p".
    #[arg(help_heading("Snapshot options"))]
    #[arg(long)]
    #[arg(value_delimiter = ',')]
    #[arg(value_name = "list")]
    fluctfields: Vec<String>,

    /// Convert every write in a directory of snapshot files
    ///
    /// The input is taken as a directory containing *h5 snapshot files.
    /// One numbered output file is written per stored time index, and a
    /// `.vtr.series` manifest is generated at the end.
    #[arg(help_heading("Snapshot options"))]
    #[arg(short, long)]
    series: bool,

    /// Time index in single-snapshot mode
    ///
    /// Negative values count back from the end, so the default of -1 is
    /// the last write in the container. Ignored with --series.
    #[arg(help_heading("Snapshot options"))]
    #[arg(long, default_value_t = -1)]
    #[arg(allow_negative_numbers(true))]
    #[arg(value_name = "nt")]
    nt: i64,

    /// VTK output format
    ///
    /// Available visual toolkit file formats:
    ///     > xml (default)
    ///     > legacy-ascii
    ///     > legacy-binary
    #[arg(help_heading("Vtk options"))]
    #[arg(short, long, value_enum)]
    #[arg(hide_default_value(true))]
    #[arg(default_value_t = VtkFormat::Xml)]
    #[arg(verbatim_doc_comment)]
    #[arg(value_name = "format")]
    format: VtkFormat,

    /// Byte ordering
    ///
    /// Visit only reads big endian, most systems are little endian.
    /// Defaults to big endian for convenience over performance.
    ///     > big-endian (default)
    ///     > little-endian
    #[arg(help_heading("Vtk options"))]
    #[arg(long, value_enum)]
    #[arg(hide_default_value(true))]
    #[arg(default_value_t = CliByteOrder::BigEndian)]
    #[arg(verbatim_doc_comment)]
    #[arg(value_name = "endian")]
    endian: CliByteOrder,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG
    /// (-v) or TRACE (-vv). Errors and Warnings are always logged unless
    /// in quiet (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

// Wrapper for byte order used by vtkio
#[doc(hidden)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum CliByteOrder {
    BigEndian,
    LittleEndian,
}

#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "hdf2vtk :: SnapshotToVtk");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    stderrlog::new()
        .modules(vec![
            module_path!(),
            "hdf2vtk_snapshot",
            "hdf2vtk_snapshot::reader",
            "hdf2vtk_snapshot::vtk",
        ])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .unwrap();
}

#[doc(hidden)]
fn collect_inputs(cli: &Cli) -> Result<Vec<PathBuf>> {
    let input = PathBuf::from(&cli.input);

    if !cli.series {
        return Ok(vec![input]);
    }

    // directory mode, take anything ending "h5" in natural order
    let mut snapshots = std::fs::read_dir(&input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with("h5"))
        })
        .collect::<Vec<PathBuf>>();

    if snapshots.is_empty() {
        return Err(anyhow!("no *h5 snapshot files found in {}", input.display()));
    }

    snapshots.sort_natural();
    Ok(snapshots)
}

#[doc(hidden)]
fn output_stem(cli: &Cli) -> String {
    match &cli.output {
        Some(stem) => stem.clone(),
        None => Path::new(&cli.input)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("snapshot")),
    }
}

#[doc(hidden)]
fn converter_init(cli: &Cli) -> SnapshotToVtk {
    SnapshotToVtk::builder()
        .byte_order(match cli.endian {
            CliByteOrder::LittleEndian => ByteOrder::LittleEndian,
            CliByteOrder::BigEndian => ByteOrder::BigEndian,
        })
        .build()
}
