//! # Command-Line Interface
//!
//! Thin presentation glue over the writer core.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `formats` | List loaded writers and the suffix catalog |
//! | `detect <target>` | Print the format a target resolves to |
//! | `stacks <target>` | Print whether the target's writer can stack |
//! | `convert <input> <target>` | Read PPM frames, write to the target |
//!
//! All commands support `--format text|json`. `--registry <path>`
//! (env `IMGOUT_REGISTRY`) loads an alternate writer list; invalid
//! entries are reported on stderr and skipped, never fatal.
//!
//! Call [`run()`] to parse arguments and execute a command.

mod app;
mod convert;
mod output;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
