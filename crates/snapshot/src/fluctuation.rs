//! Fluctuation decomposition about the horizontal mean

// external crates
use ndarray::{Array1, Array3, Axis};

/// Remove the horizontally averaged profile from an instantaneous field
///
/// The arithmetic mean over the first two axes gives one value per index
/// along the third axis, interpreted as the average over a horizontal
/// plane at each vertical level. Subtracting that per-level mean from
/// every point of the corresponding plane leaves the fluctuation field,
/// with the same shape as the input.
///
/// This is a pure transformation over already-materialised data. Plain
/// floating-point subtraction throughout, so any NaN or Inf in the source
/// data propagates unchanged.
///
/// ```rust
/// # use hdf2vtk_snapshot::fluctuation;
/// # use ndarray::Array3;
/// // a field that is uniform within each horizontal plane...
/// let field = Array3::from_shape_fn((4, 3, 2), |(_, _, k)| k as f64);
///
/// // ...is all mean and no fluctuation
/// let fluct = fluctuation(&field);
/// assert!(fluct.iter().all(|v| *v == 0.0));
/// ```
pub fn fluctuation(values: &Array3<f64>) -> Array3<f64> {
    let profile = horizontal_profile(values);
    // the per-level profile broadcasts over both horizontal axes
    values - &profile
}

/// Mean over the horizontal plane at each vertical level
///
/// Returns one value per index along the third axis.
pub fn horizontal_profile(values: &Array3<f64>) -> Array1<f64> {
    let (nx, ny, _) = values.dim();
    let points = (nx * ny) as f64;
    values.sum_axis(Axis(0)).sum_axis(Axis(0)) / points
}
