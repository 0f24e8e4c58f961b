//! Transfer of samples between cube geometries

// crate modules
use crate::geometry::CubeGeometry;
use crate::volume::{default_lines, CubeVolume};

// external crates
use itertools::iproduct;
use log::debug;
use rayon::prelude::*;

/// Fractional indices this close to a whole sample index are snapped onto it
const SNAP_TOLERANCE: f64 = 1e-6;

/// How a value is taken from the source samples around a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Weighted from the 8 surrounding samples
    #[default]
    Trilinear,
    /// Closest sample only
    Nearest,
}

/// Sample `source` onto a new geometry
///
/// Every target sample is placed in the world, located in the source cube,
/// and interpolated there. Targets that fall outside the sampled source
/// volume get `outside_value` exactly.
///
/// The result always has the target geometry with default line numbers.
/// Resampling onto the source's own geometry returns the same samples to
/// within round-off.
///
/// ```rust
/// # use restools_cube::{resample, CubeGeometry, CubeVolume, Sampling, YFlip};
/// let geometry = CubeGeometry::new([0.0; 3], [10.0; 3], 0.0, YFlip::Normal, [2, 2, 2]).unwrap();
/// let cube = CubeVolume::from_fn(geometry, |i, _, _| i as f32);
///
/// // midpoint between the two columns, plus one point beyond the cube
/// let target = CubeGeometry::new([5.0, 0.0, 0.0], [10.0; 3], 0.0, YFlip::Normal, [2, 1, 1]).unwrap();
/// let result = resample(&cube, &target, Sampling::Trilinear, -1.0);
/// assert_eq!(result.values(), [0.5, -1.0]);
/// ```
pub fn resample(
    source: &CubeVolume,
    target: &CubeGeometry,
    sampling: Sampling,
    outside_value: f32,
) -> CubeVolume {
    debug!(
        "Resampling {:?} onto {:?} ({sampling:?})",
        source.geometry.dims, target.dims
    );

    let source_rotation = source.geometry.rotation_matrix();
    let target_rotation = target.rotation_matrix();
    let [ncol, nrow, _] = target.dims;

    let mut values = vec![outside_value; target.len()];
    values
        .par_chunks_mut(target.layer_len())
        .enumerate()
        .for_each(|(k, layer)| {
            for (j, i) in iproduct!(0..nrow, 0..ncol) {
                let index = [i as f64, j as f64, k as f64];
                let point = target.to_physical_with(&target_rotation, index);
                let index = source.geometry.to_index_with(&source_rotation, point);
                if let Some(value) = sample(source, index, sampling) {
                    layer[i + j * ncol] = value;
                }
            }
        });

    CubeVolume {
        geometry: *target,
        values,
        ilines: default_lines(ncol),
        xlines: default_lines(nrow),
    }
}

/// Interpolated value at a fractional index, `None` outside the cube
fn sample(source: &CubeVolume, index: [f64; 3], sampling: Sampling) -> Option<f32> {
    let index = snap(index);
    if !source.geometry.contains_index(index) {
        return None;
    }

    match sampling {
        Sampling::Nearest => {
            let [i, j, k] = index.map(|x| x.round() as usize);
            Some(source.values[source.geometry.flat_index(i, j, k)])
        }
        Sampling::Trilinear => Some(trilinear(source, index)),
    }
}

fn trilinear(source: &CubeVolume, index: [f64; 3]) -> f32 {
    let dims = source.geometry.dims;
    let lower = index.map(|x| x.floor() as usize);
    let upper = [0, 1, 2].map(|axis| (lower[axis] + 1).min(dims[axis] - 1));
    let t = [0, 1, 2].map(|axis| index[axis] - lower[axis] as f64);

    // corners with no weight are left out so an undefined neighbour does not
    // leak into a sample that sits exactly on a defined one
    let mut total = 0.0;
    for (dk, dj, di) in iproduct!(0..2, 0..2, 0..2) {
        let weight = axis_weight(t[0], di) * axis_weight(t[1], dj) * axis_weight(t[2], dk);
        if weight > 0.0 {
            let i = if di == 0 { lower[0] } else { upper[0] };
            let j = if dj == 0 { lower[1] } else { upper[1] };
            let k = if dk == 0 { lower[2] } else { upper[2] };
            total += weight * source.values[source.geometry.flat_index(i, j, k)] as f64;
        }
    }
    total as f32
}

fn axis_weight(t: f64, offset: usize) -> f64 {
    if offset == 0 {
        1.0 - t
    } else {
        t
    }
}

/// Pull indices sitting on a sample within round-off back onto it
///
/// Keeps boundary samples inside the cube, and stops neighbours with a
/// vanishing weight from taking part in the interpolation.
fn snap(index: [f64; 3]) -> [f64; 3] {
    index.map(|x| {
        let nearest = x.round();
        if (x - nearest).abs() < SNAP_TOLERANCE {
            nearest
        } else {
            x
        }
    })
}
