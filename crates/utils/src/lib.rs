//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, formatting cube coordinates consistently or trimming the
//! padded names found in fixed-width binary records are useful everywhere.
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;
mod string_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use string_ext::StringExt;
pub use value_ext::ValueExt;
