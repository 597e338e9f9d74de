//! Shared test doubles for the writer core

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::image::ImageFrame;

use super::error::WriteError;
use super::plugin::FormatWriter;

/// A scriptable writer that counts probes and records saves
pub(crate) struct StubWriter {
    key: &'static str,
    name: &'static str,
    suffixes: &'static [&'static str],
    stacks: bool,
    /// Times owns_target was called, shared with the test
    pub probes: Rc<Cell<usize>>,
    /// (target, last) pairs passed to save, shared with the test
    pub saves: Rc<RefCell<Vec<(String, bool)>>>,
}

impl StubWriter {
    pub fn new(key: &'static str, name: &'static str, suffixes: &'static [&'static str]) -> Self {
        Self {
            key,
            name,
            suffixes,
            stacks: false,
            probes: Rc::new(Cell::new(0)),
            saves: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_stacks(mut self, stacks: bool) -> Self {
        self.stacks = stacks;
        self
    }

    /// Handle onto the probe counter, usable after the stub is boxed
    pub fn probe_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.probes)
    }

    /// Handle onto the save log, usable after the stub is boxed
    pub fn save_log(&self) -> Rc<RefCell<Vec<(String, bool)>>> {
        Rc::clone(&self.saves)
    }
}

impl FormatWriter for StubWriter {
    fn key(&self) -> &'static str {
        self.key
    }

    fn format_name(&self) -> &'static str {
        self.name
    }

    fn suffixes(&self) -> &'static [&'static str] {
        self.suffixes
    }

    fn owns_target(&self, target: &str) -> bool {
        self.probes.set(self.probes.get() + 1);
        match super::plugin::target_suffix(target) {
            Some(suffix) => self.suffixes.contains(&suffix.as_str()),
            None => false,
        }
    }

    fn can_do_stacks(&self, _target: &str) -> bool {
        self.stacks
    }

    fn save(&mut self, target: &str, _frame: &ImageFrame, last: bool) -> Result<(), WriteError> {
        self.saves.borrow_mut().push((target.to_string(), last));
        Ok(())
    }
}
