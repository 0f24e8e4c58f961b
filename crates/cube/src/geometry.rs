//! Placement of a regular cube in world coordinates

// crate modules
use crate::error::{Error, Result};

// restools modules
use restools_utils::{f, ValueExt};

// external crates
use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

/// Direction of increasing row index relative to the rotated y axis
///
/// Most cubes have rows running along the rotated y axis. Left-handed
/// surveys run them the opposite way, which mirrors the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YFlip {
    /// Rows along +y
    Normal,
    /// Rows along -y
    Flipped,
}

impl YFlip {
    /// `1.0` or `-1.0` for use in the coordinate transform
    pub fn sign(&self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Flipped => -1.0,
        }
    }

    /// The opposite orientation
    pub fn flipped(&self) -> Self {
        match self {
            Self::Normal => Self::Flipped,
            Self::Flipped => Self::Normal,
        }
    }
}

impl TryFrom<i32> for YFlip {
    type Error = Error;

    /// Convert from the `1`/`-1` flag used in most file formats
    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Normal),
            -1 => Ok(Self::Flipped),
            _ => Err(Error::InvalidGeometry(f!(
                "yflip must be 1 or -1, found {value}"
            ))),
        }
    }
}

/// Regular grid placement, shared by every cube on the same survey
///
/// Maps sample indices `(i, j, k)` to world coordinates with
///
/// ```text
/// p = origin + Rz(rotation) * (i dx, j dy yflip, k dz)
/// ```
///
/// where the rotation is anticlockwise in degrees from the x axis. Indices
/// are zero based and `i` (column) varies fastest in sample storage.
///
/// Construction validates the parameters so every geometry in use has
/// positive increments and at least one sample per axis.
///
/// Axis swaps turn the grid by whole quarter turns. These are counted apart
/// from the rotation given at construction, so swapping back gives the
/// original angle bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubeGeometry {
    pub(crate) origin: [f64; 3],
    pub(crate) increment: [f64; 3],
    pub(crate) base_rotation: f64,
    pub(crate) quarter_turns: u8,
    pub(crate) yflip: YFlip,
    pub(crate) dims: [usize; 3],
}

impl CubeGeometry {
    /// Validated geometry, rotation is normalised to `[0, 360)`
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, YFlip};
    /// let geometry = CubeGeometry::new(
    ///     [0.0, 0.0, 1000.0],
    ///     [12.5, 12.5, 4.0],
    ///     -90.0,
    ///     YFlip::Normal,
    ///     [100, 80, 250],
    /// )
    /// .unwrap();
    /// assert_eq!(geometry.rotation(), 270.0);
    /// assert_eq!(geometry.len(), 2_000_000);
    ///
    /// // zero spacing can not be a regular grid
    /// assert!(CubeGeometry::new([0.0; 3], [0.0, 1.0, 1.0], 0.0, YFlip::Normal, [1, 1, 1]).is_err());
    /// ```
    pub fn new(
        origin: [f64; 3],
        increment: [f64; 3],
        rotation: f64,
        yflip: YFlip,
        dims: [usize; 3],
    ) -> Result<Self> {
        if let Some(axis) = increment.iter().position(|d| !(d.is_finite() && *d > 0.0)) {
            return Err(Error::InvalidGeometry(f!(
                "increment {} on axis {} is not positive",
                increment[axis],
                axis_name(axis)
            )));
        }

        if let Some(axis) = dims.iter().position(|n| *n == 0) {
            return Err(Error::InvalidGeometry(f!(
                "no samples on axis {}",
                axis_name(axis)
            )));
        }

        if !(origin.iter().all(|v| v.is_finite()) && rotation.is_finite()) {
            return Err(Error::InvalidGeometry(f!(
                "origin {origin:?} and rotation {rotation} must be finite"
            )));
        }

        Ok(Self {
            origin,
            increment,
            base_rotation: rotation.rem_euclid(360.0),
            quarter_turns: 0,
            yflip,
            dims,
        })
    }

    /// World coordinate of sample `(0, 0, 0)`
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Sample spacing `(dx, dy, dz)`
    pub fn increment(&self) -> [f64; 3] {
        self.increment
    }

    /// Degrees anticlockwise from the x axis, in `[0, 360)`
    pub fn rotation(&self) -> f64 {
        match self.quarter_turns {
            0 => self.base_rotation,
            q => (self.base_rotation + 90.0 * q as f64).rem_euclid(360.0),
        }
    }

    /// Direction of increasing row index
    pub fn yflip(&self) -> YFlip {
        self.yflip
    }

    /// Samples per axis `(ncol, nrow, nlay)`
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Number of columns, samples along `i`
    pub fn ncol(&self) -> usize {
        self.dims[0]
    }

    /// Number of rows, samples along `j`
    pub fn nrow(&self) -> usize {
        self.dims[1]
    }

    /// Number of layers, samples along `k`
    pub fn nlay(&self) -> usize {
        self.dims[2]
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    /// Always false for a validated geometry, here for completeness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples in one constant-k layer
    pub fn layer_len(&self) -> usize {
        self.dims[0] * self.dims[1]
    }

    /// Storage position of sample `(i, j, k)`, column index fastest
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.dims[0] + k * self.layer_len()
    }

    /// Inverse of [CubeGeometry::flat_index]
    pub fn ijk(&self, index: usize) -> (usize, usize, usize) {
        let layer = self.layer_len();
        let k = index / layer;
        let j = (index - k * layer) / self.dims[0];
        let i = index - k * layer - j * self.dims[0];
        (i, j, k)
    }

    /// Checks if a fractional index lies inside the sampled volume
    pub fn contains_index(&self, index: [f64; 3]) -> bool {
        index
            .iter()
            .zip(self.dims)
            .all(|(x, n)| *x >= 0.0 && *x <= (n - 1) as f64)
    }

    /// World coordinate of a possibly fractional sample index
    ///
    /// ```rust
    /// # use restools_cube::{CubeGeometry, YFlip};
    /// let geometry = CubeGeometry::new(
    ///     [100.0, 200.0, 0.0],
    ///     [10.0, 20.0, 5.0],
    ///     90.0,
    ///     YFlip::Normal,
    ///     [5, 5, 5],
    /// )
    /// .unwrap();
    ///
    /// // columns now run along +y, rows along -x
    /// let [x, y, z] = geometry.to_physical([1.0, 1.0, 2.0]);
    /// assert!((x - 80.0).abs() < 1e-9);
    /// assert!((y - 210.0).abs() < 1e-9);
    /// assert!((z - 10.0).abs() < 1e-9);
    /// ```
    pub fn to_physical(&self, index: [f64; 3]) -> [f64; 3] {
        self.to_physical_with(&self.rotation_matrix(), index)
    }

    /// Fractional sample index of a world coordinate
    ///
    /// Exact inverse of [CubeGeometry::to_physical] up to round-off. The
    /// result may lie outside the cube, see [CubeGeometry::contains_index].
    pub fn to_index(&self, point: [f64; 3]) -> [f64; 3] {
        self.to_index_with(&self.rotation_matrix(), point)
    }

    /// Rotation about the vertical axis
    pub(crate) fn rotation_matrix(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.rotation().to_radians())
    }

    /// [CubeGeometry::to_physical] with the rotation computed up front
    pub(crate) fn to_physical_with(&self, rotation: &Rotation3<f64>, index: [f64; 3]) -> [f64; 3] {
        let local = Vector3::new(
            index[0] * self.increment[0],
            index[1] * self.increment[1] * self.yflip.sign(),
            index[2] * self.increment[2],
        );
        let p = rotation * local;
        [
            self.origin[0] + p[0],
            self.origin[1] + p[1],
            self.origin[2] + p[2],
        ]
    }

    /// [CubeGeometry::to_index] with the rotation computed up front
    pub(crate) fn to_index_with(&self, rotation: &Rotation3<f64>, point: [f64; 3]) -> [f64; 3] {
        let shifted = Vector3::new(
            point[0] - self.origin[0],
            point[1] - self.origin[1],
            point[2] - self.origin[2],
        );
        let local = rotation.inverse_transform_vector(&shifted);
        [
            local[0] / self.increment[0],
            local[1] / (self.increment[1] * self.yflip.sign()),
            local[2] / self.increment[2],
        ]
    }

    /// Sub-grid starting at sample `start` with `dims` samples per axis
    pub(crate) fn cropped(&self, start: [usize; 3], dims: [usize; 3]) -> Self {
        Self {
            origin: self.to_physical(start.map(|s| s as f64)),
            dims,
            ..*self
        }
    }

    /// Every `stride`-th sample from index 0
    pub(crate) fn thinned(&self, stride: [usize; 3]) -> Self {
        let mut thinned = *self;
        for axis in 0..3 {
            thinned.increment[axis] *= stride[axis] as f64;
            thinned.dims[axis] = self.dims[axis].div_ceil(stride[axis]);
        }
        thinned
    }

    /// Columns and rows exchanged, every sample keeps its world position
    ///
    /// Rotating a quarter turn towards the rows and flipping the row
    /// direction maps `(i dx, j dy)` onto `(j dy, i dx)`.
    pub(crate) fn swapped(&self) -> Self {
        Self {
            origin: self.origin,
            increment: [self.increment[1], self.increment[0], self.increment[2]],
            base_rotation: self.base_rotation,
            quarter_turns: (self.quarter_turns as i8 + self.yflip.sign() as i8).rem_euclid(4) as u8,
            yflip: self.yflip.flipped(),
            dims: [self.dims[1], self.dims[0], self.dims[2]],
        }
    }
}

impl std::fmt::Display for CubeGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!(
            "origin   : {:>12} {:>12} {:>12}\n",
            self.origin[0].sci(5, 2),
            self.origin[1].sci(5, 2),
            self.origin[2].sci(5, 2)
        );
        s += &f!(
            "increment: {:>12} {:>12} {:>12}\n",
            self.increment[0].sci(5, 2),
            self.increment[1].sci(5, 2),
            self.increment[2].sci(5, 2)
        );
        s += &f!(
            "dims     : {:>12} {:>12} {:>12}\n",
            self.dims[0],
            self.dims[1],
            self.dims[2]
        );
        s += &f!("rotation : {:>12.4} deg\n", self.rotation());
        s += &f!("yflip    : {:>12}", self.yflip.sign() as i32);
        write!(f, "{s}")
    }
}

/// Axis names used in errors
pub(crate) fn axis_name(axis: usize) -> char {
    match axis {
        0 => 'i',
        1 => 'j',
        _ => 'k',
    }
}
