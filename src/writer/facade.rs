//! Delegating writer facade
//!
//! [`ImageWriter`] is the public surface: it owns the dispatcher and
//! the suffix catalog, resolves targets on every call, and forwards
//! the writer API to the bound writer. Writer errors pass through
//! unwrapped; nothing is retried.

use crate::image::ImageFrame;

use super::catalog::suffix_catalog;
use super::dispatcher::Dispatcher;
use super::error::WriteError;
use super::plugin::FormatWriter;
use super::registry::{load_writers, LoadDiagnostic, RegistryTable};

/// Master writer over all loaded formats
pub struct ImageWriter {
    dispatcher: Dispatcher,
    suffixes: Vec<String>,
}

impl ImageWriter {
    /// Builds a facade over an already-constructed writer list
    pub fn from_writers(writers: Vec<Box<dyn FormatWriter>>) -> Self {
        let suffixes = suffix_catalog(&writers);
        Self {
            dispatcher: Dispatcher::new(writers),
            suffixes,
        }
    }

    /// Builds a facade from registry text, skipping invalid entries
    pub fn from_registry(text: &str, table: &RegistryTable) -> (Self, Vec<LoadDiagnostic>) {
        let (writers, diagnostics) = load_writers(text, table);
        (Self::from_writers(writers), diagnostics)
    }

    /// All suffixes recognized across loaded writers, sorted and
    /// deduplicated
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// The loaded writers in registration order
    pub fn writers(&self) -> impl Iterator<Item = &dyn FormatWriter> + '_ {
        self.dispatcher.writers().iter().map(|w| w.as_ref())
    }

    /// Format name of the writer that owns the target
    pub fn format_name(&mut self, target: &str) -> Result<&'static str, WriteError> {
        let resolution = self.dispatcher.resolve(target)?;
        Ok(self.dispatcher.writers()[resolution.index].format_name())
    }

    /// The writer that owns the target
    pub fn writer_for(&mut self, target: &str) -> Result<&dyn FormatWriter, WriteError> {
        let resolution = self.dispatcher.resolve(target)?;
        Ok(self.dispatcher.writers()[resolution.index].as_ref())
    }

    /// Looks up a loaded writer by its stable key, without probing
    pub fn writer_by_key(&self, key: &str) -> Option<&dyn FormatWriter> {
        self.dispatcher
            .writers()
            .iter()
            .find(|w| w.key() == key)
            .map(|w| w.as_ref())
    }

    /// Saves the frame to the target through the owning writer
    ///
    /// `last` flags the final image of a multi-image sequence and is
    /// forwarded unchanged.
    pub fn save(&mut self, target: &str, frame: &ImageFrame, last: bool) -> Result<(), WriteError> {
        let resolution = self.dispatcher.resolve(target)?;
        self.dispatcher
            .writer_mut(resolution.index)
            .save(target, frame, last)
    }

    /// Whether the owning writer can append multiple images to the
    /// target
    ///
    /// Resolution failures map to `false` here; the other accessors
    /// surface `UnknownFormat` instead.
    pub fn can_do_stacks(&mut self, target: &str) -> bool {
        match self.dispatcher.resolve(target) {
            Ok(resolution) => self.dispatcher.writers()[resolution.index].can_do_stacks(target),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::testutil::StubWriter;

    fn stub_facade() -> ImageWriter {
        ImageWriter::from_writers(vec![
            Box::new(StubWriter::new("png", "PNG", &["png"])),
            Box::new(StubWriter::new("tiff", "TIFF", &["tif", "tiff"]).with_stacks(true)),
        ])
    }

    #[test]
    fn suffixes_are_aggregated_once() {
        let writer = stub_facade();
        assert_eq!(writer.suffixes(), &["png", "tif", "tiff"]);
    }

    #[test]
    fn format_name_resolves_by_probing() {
        let mut writer = stub_facade();

        assert_eq!(writer.format_name("a.tif").unwrap(), "TIFF");
        assert_eq!(writer.format_name("b.png").unwrap(), "PNG");
    }

    #[test]
    fn format_name_surfaces_unknown_format() {
        let mut writer = stub_facade();
        assert!(matches!(
            writer.format_name("b.xyz"),
            Err(WriteError::UnknownFormat(_))
        ));
    }

    #[test]
    fn writer_for_returns_the_bound_writer() {
        let mut writer = stub_facade();

        assert_eq!(writer.writer_for("a.tiff").unwrap().key(), "tiff");
        assert!(matches!(
            writer.writer_for("a.xyz"),
            Err(WriteError::UnknownFormat(_))
        ));
    }

    #[test]
    fn writer_by_key_never_probes() {
        let stub = StubWriter::new("png", "PNG", &["png"]);
        let probes = stub.probe_counter();
        let writer = ImageWriter::from_writers(vec![Box::new(stub)]);

        assert!(writer.writer_by_key("png").is_some());
        assert!(writer.writer_by_key("absent").is_none());
        assert_eq!(probes.get(), 0);
    }

    #[test]
    fn save_delegates_with_the_last_flag_unchanged() {
        let stub = StubWriter::new("png", "PNG", &["png"]);
        let saves = stub.save_log();
        let mut writer = ImageWriter::from_writers(vec![Box::new(stub)]);

        let frame = ImageFrame::filled(1, 1, [0, 0, 0]).unwrap();
        writer.save("out.png", &frame, false).unwrap();
        writer.save("out.png", &frame, true).unwrap();

        assert_eq!(
            *saves.borrow(),
            vec![
                ("out.png".to_string(), false),
                ("out.png".to_string(), true),
            ]
        );
    }

    #[test]
    fn save_on_unknown_target_is_an_error() {
        let mut writer = stub_facade();
        let frame = ImageFrame::filled(1, 1, [0, 0, 0]).unwrap();

        assert!(matches!(
            writer.save("b.xyz", &frame, true),
            Err(WriteError::UnknownFormat(_))
        ));
    }

    #[test]
    fn can_do_stacks_reports_writer_capability() {
        let mut writer = stub_facade();

        assert!(writer.can_do_stacks("a.tif"));
        assert!(!writer.can_do_stacks("a.png"));
    }

    #[test]
    fn can_do_stacks_suppresses_unknown_format_to_false() {
        let mut writer = stub_facade();

        assert!(!writer.can_do_stacks("b.xyz"));
        // The same target still raises through the other accessors.
        assert!(matches!(
            writer.format_name("b.xyz"),
            Err(WriteError::UnknownFormat(_))
        ));
    }

    #[test]
    fn empty_writer_set_fails_every_resolution() {
        let mut writer = ImageWriter::from_writers(Vec::new());

        assert!(writer.suffixes().is_empty());
        assert!(writer.format_name("a.png").is_err());
        assert!(!writer.can_do_stacks("a.png"));
    }
}
