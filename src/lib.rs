//! imgout - Format-dispatching image writer
//!
//! imgout saves images without the caller naming the output format:
//! an ordered registry of format writers is probed until one claims
//! the target path, the resolution is cached, and the write is
//! delegated to the winning writer.

pub mod image;
pub mod writer;
pub mod formats;
pub mod cli;

pub use image::{ImageError, ImageFrame};
pub use writer::{FormatWriter, ImageWriter, WriteError};
