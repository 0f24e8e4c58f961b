//! In-place editing of cube extent and sampling
//!
//! All edits keep every remaining sample at its world position. They work
//! layer by layer in parallel, each worker filling its own output layer.

// crate modules
use crate::error::{Error, Result};
use crate::geometry::axis_name;
use crate::volume::CubeVolume;

// restools modules
use restools_utils::f;

// standard library
use std::ops::RangeInclusive;

// external crates
use itertools::iproduct;
use log::debug;
use rayon::prelude::*;

impl CubeVolume {
    /// Keep only the samples inside inclusive index ranges
    ///
    /// The new origin is the world position of the first kept sample, so
    /// nothing moves. Line numbers are cut to the kept columns and rows.
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, CubeVolume, YFlip};
    /// let geometry = CubeGeometry::new([0.0; 3], [10.0; 3], 0.0, YFlip::Normal, [5, 5, 5]).unwrap();
    /// let mut cube = CubeVolume::from_fn(geometry, |i, j, k| (i + j + k) as f32);
    ///
    /// cube.crop(1..=3, 0..=4, 2..=2).unwrap();
    /// assert_eq!(cube.geometry().dims(), [3, 5, 1]);
    /// assert_eq!(cube.geometry().origin(), [10.0, 0.0, 20.0]);
    /// assert_eq!(cube.get(0, 0, 0), Some(3.0));
    /// assert_eq!(cube.ilines(), [2, 3, 4]);
    /// ```
    pub fn crop(
        &mut self,
        i: RangeInclusive<usize>,
        j: RangeInclusive<usize>,
        k: RangeInclusive<usize>,
    ) -> Result<()> {
        let ranges = [i, j, k];
        for (axis, range) in ranges.iter().enumerate() {
            let n = self.geometry.dims[axis];
            if range.start() > range.end() || *range.end() >= n {
                return Err(Error::RangeError {
                    axis: axis_name(axis),
                    reason: f!(
                        "{}..={} is not within 0..{n}",
                        range.start(),
                        range.end()
                    ),
                });
            }
        }

        let start = ranges.clone().map(|r| *r.start());
        let dims = ranges.map(|r| r.end() - r.start() + 1);
        if dims == self.geometry.dims {
            return Ok(());
        }
        debug!("Cropping {:?} to {dims:?} from {start:?}", self.geometry.dims);

        let geometry = self.geometry.cropped(start, dims);
        let mut values = vec![0.0; geometry.len()];
        values
            .par_chunks_mut(geometry.layer_len())
            .enumerate()
            .for_each(|(k, layer)| {
                for j in 0..dims[1] {
                    let from = self.geometry.flat_index(start[0], start[1] + j, start[2] + k);
                    layer[j * dims[0]..(j + 1) * dims[0]]
                        .copy_from_slice(&self.values[from..from + dims[0]]);
                }
            });

        self.ilines = self.ilines[start[0]..start[0] + dims[0]].to_vec();
        self.xlines = self.xlines[start[1]..start[1] + dims[1]].to_vec();
        self.geometry = geometry;
        self.values = values;
        Ok(())
    }

    /// Remove `(front, back)` samples from each end of every axis
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, CubeVolume, YFlip};
    /// let geometry = CubeGeometry::new([0.0; 3], [1.0; 3], 0.0, YFlip::Normal, [10, 8, 6]).unwrap();
    /// let mut cube = CubeVolume::constant(geometry, 0.0);
    ///
    /// cube.crop_margins([(2, 1), (0, 0), (0, 5)]).unwrap();
    /// assert_eq!(cube.geometry().dims(), [7, 8, 1]);
    ///
    /// // removing everything is not allowed
    /// assert!(cube.crop_margins([(4, 3), (0, 0), (0, 0)]).is_err());
    /// ```
    pub fn crop_margins(&mut self, margins: [(usize, usize); 3]) -> Result<()> {
        let mut ranges = [0..=0, 0..=0, 0..=0];
        for (axis, (front, back)) in margins.into_iter().enumerate() {
            let n = self.geometry.dims[axis];
            if front + back >= n {
                return Err(Error::RangeError {
                    axis: axis_name(axis),
                    reason: f!("margins of {front} and {back} leave none of {n} samples"),
                });
            }
            ranges[axis] = front..=n - 1 - back;
        }
        let [i, j, k] = ranges;
        self.crop(i, j, k)
    }

    /// Keep every stride-th sample along each axis, starting from 0
    ///
    /// Spacing grows by the stride and each axis keeps `ceil(n / stride)`
    /// samples.
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, CubeVolume, YFlip};
    /// let geometry = CubeGeometry::new([0.0; 3], [4.0; 3], 0.0, YFlip::Normal, [4, 4, 4]).unwrap();
    /// let mut cube = CubeVolume::from_fn(geometry, |i, j, _| (i + 10 * j) as f32);
    ///
    /// cube.thin([2, 2, 1]).unwrap();
    /// assert_eq!(cube.geometry().dims(), [2, 2, 4]);
    /// assert_eq!(cube.geometry().increment(), [8.0, 8.0, 4.0]);
    /// assert_eq!(cube.get(1, 1, 0), Some(22.0));
    /// ```
    pub fn thin(&mut self, stride: [usize; 3]) -> Result<()> {
        if let Some(axis) = stride.iter().position(|s| *s == 0) {
            return Err(Error::RangeError {
                axis: axis_name(axis),
                reason: "stride must be at least 1".to_string(),
            });
        }
        if stride == [1, 1, 1] {
            return Ok(());
        }
        debug!("Thinning {:?} by {stride:?}", self.geometry.dims);

        let geometry = self.geometry.thinned(stride);
        let [ncol, nrow, _] = geometry.dims;
        let mut values = vec![0.0; geometry.len()];
        values
            .par_chunks_mut(geometry.layer_len())
            .enumerate()
            .for_each(|(k, layer)| {
                for (j, i) in iproduct!(0..nrow, 0..ncol) {
                    let from = self.geometry.flat_index(
                        i * stride[0],
                        j * stride[1],
                        k * stride[2],
                    );
                    layer[i + j * ncol] = self.values[from];
                }
            });

        self.ilines = self.ilines.iter().step_by(stride[0]).copied().collect();
        self.xlines = self.xlines.iter().step_by(stride[1]).copied().collect();
        self.geometry = geometry;
        self.values = values;
        Ok(())
    }

    /// Exchange columns and rows
    ///
    /// Inlines become crosslines and the other way around. The rotation and
    /// row direction are adjusted so every sample stays at its world
    /// position, and swapping twice gives back the original cube.
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, CubeVolume, YFlip};
    /// let geometry = CubeGeometry::new([0.0; 3], [10.0, 20.0, 5.0], 0.0, YFlip::Normal, [3, 2, 1]).unwrap();
    /// let mut cube = CubeVolume::from_fn(geometry, |i, j, _| (i + 10 * j) as f32);
    ///
    /// cube.swap_axes();
    /// assert_eq!(cube.geometry().dims(), [2, 3, 1]);
    /// assert_eq!(cube.geometry().increment(), [20.0, 10.0, 5.0]);
    /// assert_eq!(cube.geometry().rotation(), 90.0);
    /// assert_eq!(cube.get(1, 2, 0), Some(12.0));
    /// ```
    pub fn swap_axes(&mut self) {
        let [ncol, nrow, _] = self.geometry.dims;
        debug!("Swapping {ncol} columns with {nrow} rows");

        let geometry = self.geometry.swapped();
        let mut values = vec![0.0; geometry.len()];
        values
            .par_chunks_mut(geometry.layer_len())
            .zip(self.values.par_chunks(self.geometry.layer_len()))
            .for_each(|(layer, old)| {
                for (j, i) in iproduct!(0..nrow, 0..ncol) {
                    layer[j + i * nrow] = old[i + j * ncol];
                }
            });

        std::mem::swap(&mut self.ilines, &mut self.xlines);
        self.geometry = geometry;
        self.values = values;
    }
}
