//! # Writer Dispatch
//!
//! The core of imgout: an ordered collection of format writers, a
//! probe-based resolver with a single-slot cache, and the facade that
//! delegates the writer API to whichever writer owns a target.
//!
//! ## Resolution
//!
//! ```text
//! save("a.tif", ..)            formats probed in registry order
//!  │
//!  ├── Dispatcher.resolve ──► ppm? no ──► bmp? no ──► tiff? yes
//!  │                                                    │
//!  └── binding cached (a.tif → index) ◄─────────────────┘
//! ```
//!
//! The binding holds exactly one target; resolving a different target
//! always re-probes from the start of the list. First match wins when
//! several writers could claim the same target.
//!
//! ## Key Types
//!
//! - [`FormatWriter`] - capability trait every writer implements
//! - [`RegistryTable`] - stable key → constructor registration
//! - [`Dispatcher`] - resolution state machine
//! - [`ImageWriter`] - the delegating public surface

mod catalog;
mod dispatcher;
mod error;
mod facade;
mod plugin;
mod registry;

#[cfg(test)]
pub(crate) mod testutil;

pub use catalog::suffix_catalog;
pub use dispatcher::{Dispatcher, Resolution};
pub use error::WriteError;
pub use facade::ImageWriter;
pub use plugin::{target_suffix, FormatWriter};
pub use registry::{load_writers, parse_registry, Constructor, LoadDiagnostic, RegistryTable};
