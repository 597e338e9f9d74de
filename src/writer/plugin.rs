//! Format writer capability trait
//!
//! Every output format implements [`FormatWriter`]. The dispatch core
//! only ever talks to this trait: it probes writers to find the owner
//! of a target and forwards the writer API to the winner.

use std::path::Path;

use crate::image::ImageFrame;

use super::error::WriteError;

/// A writer for one output format
pub trait FormatWriter {
    /// Stable key identifying this writer in registry files
    fn key(&self) -> &'static str;

    /// Human-readable format label (e.g. "Portable Pixmap")
    fn format_name(&self) -> &'static str;

    /// Output suffixes this writer recognizes, lowercase without dot
    fn suffixes(&self) -> &'static [&'static str];

    /// Whether this writer handles the given target
    ///
    /// Must be cheap and must not alter the target. The default
    /// matches the target's extension against [`suffixes`].
    ///
    /// [`suffixes`]: FormatWriter::suffixes
    fn owns_target(&self, target: &str) -> bool {
        match target_suffix(target) {
            Some(suffix) => self.suffixes().contains(&suffix.as_str()),
            None => false,
        }
    }

    /// Whether this writer can append multiple images to one target
    fn can_do_stacks(&self, target: &str) -> bool;

    /// Encodes the frame to the target
    ///
    /// `last` signals the end of a multi-image sequence; single-image
    /// saves pass `true`.
    fn save(&mut self, target: &str, frame: &ImageFrame, last: bool) -> Result<(), WriteError>;
}

/// Lowercased extension of a target path, if it has one
pub fn target_suffix(target: &str) -> Option<String> {
    Path::new(target)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
