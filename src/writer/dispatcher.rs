//! Target resolution
//!
//! The dispatcher holds the ordered writer collection and at most one
//! cached binding: the last resolved target and the index of the
//! writer that claimed it. Resolving the same target again hits the
//! cache; any other target forces a full re-probe in registration
//! order. This is deliberately a single-slot memo, not a map.

use super::error::WriteError;
use super::plugin::FormatWriter;

/// The cached (target, writer index) pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    target: String,
    index: usize,
}

/// Outcome of a resolution request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Index of the winning writer in registration order
    pub index: usize,
    /// Whether the cached binding answered without re-probing
    pub cached: bool,
}

/// Resolves targets to writers, caching the last resolution
pub struct Dispatcher {
    writers: Vec<Box<dyn FormatWriter>>,
    binding: Option<Binding>,
}

impl Dispatcher {
    pub fn new(writers: Vec<Box<dyn FormatWriter>>) -> Self {
        Self {
            writers,
            binding: None,
        }
    }

    /// The writers in registration order
    pub fn writers(&self) -> &[Box<dyn FormatWriter>] {
        &self.writers
    }

    /// Mutable access to one writer, for delegating save calls
    pub fn writer_mut(&mut self, index: usize) -> &mut dyn FormatWriter {
        self.writers[index].as_mut()
    }

    /// Resolves a target to the writer that owns it
    ///
    /// Target identity is the sole cache key: a different target
    /// always re-probes, even if it ends up bound to the same writer.
    /// The first writer whose probe claims the target wins.
    pub fn resolve(&mut self, target: &str) -> Result<Resolution, WriteError> {
        if let Some(binding) = &self.binding {
            if binding.target == target {
                return Ok(Resolution {
                    index: binding.index,
                    cached: true,
                });
            }
        }

        for (index, writer) in self.writers.iter().enumerate() {
            if writer.owns_target(target) {
                self.binding = Some(Binding {
                    target: target.to_string(),
                    index,
                });
                return Ok(Resolution {
                    index,
                    cached: false,
                });
            }
        }

        self.binding = None;
        Err(WriteError::UnknownFormat(target.to_string()))
    }
}
