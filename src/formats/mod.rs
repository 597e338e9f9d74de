//! Built-in format writers
//!
//! Each submodule implements [`FormatWriter`] for one output format.
//! The formats here are deliberately simple encoders; the dispatch
//! core treats them exactly like any externally registered writer.
//!
//! | Key | Format | Suffixes | Stacks |
//! |-----|--------|----------|--------|
//! | `ppm` | Portable Pixmap (binary P6) | `ppm`, `pnm` | yes |
//! | `bmp` | Windows Bitmap (24-bit) | `bmp`, `dib` | no |
//! | `farbfeld` | farbfeld | `ff` | no |

mod bmp;
mod farbfeld;
mod ppm;

pub use bmp::BmpWriter;
pub use farbfeld::FarbfeldWriter;
pub use ppm::{read_ppm, PpmWriter};

use crate::writer::{ImageWriter, RegistryTable};

/// The writer registry shipped with the binary
///
/// Listed order is probe order; first match wins.
pub const DEFAULT_REGISTRY: &str = include_str!("writers.txt");

/// Registers every built-in writer constructor
pub fn builtin_table() -> RegistryTable {
    let mut table = RegistryTable::new();
    table.register("ppm", || Box::new(PpmWriter::new()));
    table.register("bmp", || Box::new(BmpWriter));
    table.register("farbfeld", || Box::new(FarbfeldWriter));
    table
}

/// An [`ImageWriter`] over the stock registry
pub fn default_writer() -> ImageWriter {
    let (writer, diagnostics) = ImageWriter::from_registry(DEFAULT_REGISTRY, &builtin_table());
    // The embedded registry only lists built-in keys.
    debug_assert!(diagnostics.is_empty());
    writer
}
