//! `restools` is a semi-modular toolkit of fast and reliable libraries for
//! reservoir simulation binaries and seismic cubes
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use restools_utils as utils;

#[cfg(feature = "cube")]
#[cfg_attr(docsrs, doc(cfg(feature = "cube")))]
#[doc(inline)]
pub use restools_cube as cube;

#[cfg(feature = "scan")]
#[cfg_attr(docsrs, doc(cfg(feature = "scan")))]
#[doc(inline)]
pub use restools_scan as scan;
