//! Image payload model
//!
//! Contains the pixel data handed to format writers, without any
//! I/O concerns. Writers treat frames as opaque beyond reading their
//! dimensions and pixel bytes.

mod frame;

pub use frame::{ImageError, ImageFrame};
