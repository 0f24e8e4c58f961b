use crate::error::{Error, Result};

/// Extends functionality for slices of float samples
///
/// Cube samples are stored as `f32` while geometry vectors are `f64`, so both
/// primitives are covered.
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Any NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use restools_utils::SliceExt;
    /// # use restools_utils::Error;
    /// assert_eq!([1.5_f32, 0.5, 2.5].try_min(), Ok(0.5));
    /// assert_eq!([1.5, f64::NAN].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f32>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Any NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use restools_utils::SliceExt;
    /// # use restools_utils::Error;
    /// assert_eq!([1.5_f32, 0.5, 2.5].try_max(), Ok(2.5));
    /// assert_eq!([f32::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Find the arithmetic mean of float arrays
    ///
    /// The sum is accumulated in `f64` so that large `f32` cubes do not lose
    /// precision.
    ///
    /// ```rust
    /// # use restools_utils::SliceExt;
    /// assert_eq!([1.0_f32, 2.0, 3.0, 6.0].try_mean(), Ok(3.0));
    /// assert!(Vec::<f64>::new().try_mean().is_err());
    /// ```
    fn try_mean(&self) -> Result<f64>;
}

// Identical implementations for both float primitives
macro_rules! impl_slice_ext {
    ($t:ty) => {
        impl SliceExt<$t> for [$t] {
            fn try_min(&self) -> Result<$t> {
                check_finite(self.iter().map(|v| v.is_finite()))?;
                self.iter()
                    .min_by(|a, b| a.total_cmp(b))
                    .copied()
                    .ok_or(Error::SliceContainsNoValues)
            }

            fn try_max(&self) -> Result<$t> {
                check_finite(self.iter().map(|v| v.is_finite()))?;
                self.iter()
                    .max_by(|a, b| a.total_cmp(b))
                    .copied()
                    .ok_or(Error::SliceContainsNoValues)
            }

            fn try_mean(&self) -> Result<f64> {
                if self.is_empty() {
                    return Err(Error::SliceContainsNoValues);
                }
                check_finite(self.iter().map(|v| v.is_finite()))?;
                let sum: f64 = self.iter().map(|v| *v as f64).sum();
                Ok(sum / self.len() as f64)
            }
        }
    };
}

impl_slice_ext!(f32);
impl_slice_ext!(f64);

fn check_finite(mut flags: impl Iterator<Item = bool>) -> Result<()> {
    if flags.any(|finite| !finite) {
        Err(Error::SliceContainsUndefinedValues)
    } else {
        Ok(())
    }
}
