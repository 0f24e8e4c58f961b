//! Sample values on a cube geometry

// crate modules
use crate::error::{Error, Result};
use crate::geometry::{axis_name, CubeGeometry};

// restools modules
use restools_utils::{f, SliceExt, ValueExt};

// external crates
use serde::Serialize;

/// A cube of `f32` samples
///
/// Samples are stored flat with the column index varying fastest, then row,
/// then layer, so each constant-k layer is one contiguous slice. Survey line
/// numbers for every column (`ilines`) and row (`xlines`) travel with the
/// samples through every edit.
///
/// ```rust
/// # use restools_cube::{CubeGeometry, CubeVolume, YFlip};
/// let geometry = CubeGeometry::new([0.0; 3], [1.0; 3], 0.0, YFlip::Normal, [3, 2, 2]).unwrap();
/// let mut cube = CubeVolume::constant(geometry, 1.0);
///
/// cube.set(2, 1, 1, 5.0).unwrap();
/// assert_eq!(cube.get(2, 1, 1), Some(5.0));
/// assert_eq!(cube.values()[11], 5.0);
/// assert_eq!(cube.maximum().unwrap(), 5.0);
/// assert_eq!(cube.ilines(), [1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CubeVolume {
    pub(crate) geometry: CubeGeometry,
    pub(crate) values: Vec<f32>,
    pub(crate) ilines: Vec<i32>,
    pub(crate) xlines: Vec<i32>,
}

impl CubeVolume {
    /// Wrap existing samples, which must match the geometry exactly
    pub fn new(geometry: CubeGeometry, values: Vec<f32>) -> Result<Self> {
        if values.len() != geometry.len() {
            return Err(Error::UnexpectedSampleCount {
                expected: geometry.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            ilines: default_lines(geometry.ncol()),
            xlines: default_lines(geometry.nrow()),
            geometry,
            values,
        })
    }

    /// Every sample set to `value`
    pub fn constant(geometry: CubeGeometry, value: f32) -> Self {
        Self {
            ilines: default_lines(geometry.ncol()),
            xlines: default_lines(geometry.nrow()),
            values: vec![value; geometry.len()],
            geometry,
        }
    }

    /// Samples computed from their `(i, j, k)` index
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, CubeVolume, YFlip};
    /// let geometry = CubeGeometry::new([0.0; 3], [1.0; 3], 0.0, YFlip::Normal, [4, 4, 4]).unwrap();
    /// let cube = CubeVolume::from_fn(geometry, |i, j, k| (100 * k + 10 * j + i) as f32);
    /// assert_eq!(cube.get(3, 2, 1), Some(123.0));
    /// ```
    pub fn from_fn<F: Fn(usize, usize, usize) -> f32>(geometry: CubeGeometry, f: F) -> Self {
        let values = (0..geometry.len())
            .map(|index| {
                let (i, j, k) = geometry.ijk(index);
                f(i, j, k)
            })
            .collect();
        Self {
            ilines: default_lines(geometry.ncol()),
            xlines: default_lines(geometry.nrow()),
            geometry,
            values,
        }
    }

    /// Replace the default `1..=n` line numbering
    pub fn with_lines(mut self, ilines: Vec<i32>, xlines: Vec<i32>) -> Result<Self> {
        for (lines, expected) in [(&ilines, self.geometry.ncol()), (&xlines, self.geometry.nrow())]
        {
            if lines.len() != expected {
                return Err(Error::UnexpectedSampleCount {
                    expected,
                    found: lines.len(),
                });
            }
        }
        self.ilines = ilines;
        self.xlines = xlines;
        Ok(self)
    }

    pub fn geometry(&self) -> &CubeGeometry {
        &self.geometry
    }

    /// All samples, column index fastest
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Mutable samples, the length can not change
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Inline number of every column
    pub fn ilines(&self) -> &[i32] {
        &self.ilines
    }

    /// Crossline number of every row
    pub fn xlines(&self) -> &[i32] {
        &self.xlines
    }

    /// Sample at `(i, j, k)`, `None` outside the cube
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f32> {
        self.in_bounds(i, j, k)
            .then(|| self.values[self.geometry.flat_index(i, j, k)])
    }

    /// Overwrite the sample at `(i, j, k)`
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f32) -> Result<()> {
        if let Some(axis) = [i, j, k]
            .iter()
            .zip(self.geometry.dims)
            .position(|(x, n)| *x >= n)
        {
            return Err(Error::RangeError {
                axis: axis_name(axis),
                reason: f!(
                    "index {} is outside 0..{}",
                    [i, j, k][axis],
                    self.geometry.dims[axis]
                ),
            });
        }
        let index = self.geometry.flat_index(i, j, k);
        self.values[index] = value;
        Ok(())
    }

    /// Smallest sample, fails on undefined values
    pub fn minimum(&self) -> Result<f32> {
        Ok(self.values.try_min()?)
    }

    /// Largest sample, fails on undefined values
    pub fn maximum(&self) -> Result<f32> {
        Ok(self.values.try_max()?)
    }

    /// Mean of all samples, accumulated in double precision
    pub fn mean(&self) -> Result<f64> {
        Ok(self.values.try_mean()?)
    }

    /// Layer `k` as one contiguous slice
    pub fn layer(&self, k: usize) -> Option<&[f32]> {
        let n = self.geometry.layer_len();
        (k < self.geometry.nlay()).then(|| &self.values[k * n..(k + 1) * n])
    }

    fn in_bounds(&self, i: usize, j: usize, k: usize) -> bool {
        let [ncol, nrow, nlay] = self.geometry.dims;
        i < ncol && j < nrow && k < nlay
    }
}

impl std::fmt::Display for CubeVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{}\n > Cube\n{}\n", "-".repeat(40), "-".repeat(40));
        s += &f!("{}\n", self.geometry);
        s += &f!(
            "ilines   : {:>12} - {}\n",
            self.ilines.first().unwrap_or(&0),
            self.ilines.last().unwrap_or(&0)
        );
        s += &f!(
            "xlines   : {:>12} - {}\n",
            self.xlines.first().unwrap_or(&0),
            self.xlines.last().unwrap_or(&0)
        );

        // statistics are only meaningful if every sample is defined
        match (self.minimum(), self.maximum(), self.mean()) {
            (Ok(min), Ok(max), Ok(mean)) => {
                s += &f!("minimum  : {:>12}\n", min.sci(5, 2));
                s += &f!("maximum  : {:>12}\n", max.sci(5, 2));
                s += &f!("mean     : {:>12}", mean.sci(5, 2));
            }
            _ => s += "samples  :    undefined",
        }

        write!(f, "{s}")
    }
}

/// Survey line numbers starting from 1
pub(crate) fn default_lines(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}
