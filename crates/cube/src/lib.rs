//! Regular seismic cube geometry, resampling and editing
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod edit;
mod error;
mod geometry;
mod resample;
mod volume;

// Inline anything important for a nice public API
#[doc(inline)]
pub use geometry::{CubeGeometry, YFlip};

#[doc(inline)]
pub use volume::CubeVolume;

#[doc(inline)]
pub use resample::{resample, Sampling};

#[doc(inline)]
pub use error::{Error, Result};
