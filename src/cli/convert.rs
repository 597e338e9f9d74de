//! Generic convert routine
//!
//! Reads PPM frames, announces the detected output format, then
//! delegates each frame to the resolved writer with the `last` flag
//! set on the final frame.

use std::path::Path;

use anyhow::{bail, Context, Result};

use super::output::Output;
use crate::formats::read_ppm;
use crate::writer::ImageWriter;

pub fn run(writer: &mut ImageWriter, input: &Path, target: &str, output: &Output) -> Result<()> {
    let frames =
        read_ppm(input).with_context(|| format!("failed to read {}", input.display()))?;
    output.verbose(&format!("Read {} frame(s) from {}", frames.len(), input.display()));

    // Announce the detected format before writing anything;
    // unresolvable targets fail here.
    let name = writer.format_name(target)?;
    output.success(&format!("Writing {} [{}]", target, name));

    if frames.len() > 1 && !writer.can_do_stacks(target) {
        bail!(
            "{} frames in input but the {} writer cannot write multi-image stacks",
            frames.len(),
            name
        );
    }

    let count = frames.len();
    for (i, frame) in frames.iter().enumerate() {
        writer
            .save(target, frame, i + 1 == count)
            .with_context(|| format!("failed to write frame {} of {}", i + 1, count))?;
    }

    output.success(&format!(
        "Converted {} frame(s) to {}",
        count, target
    ));
    Ok(())
}
