//! Portable Pixmap (binary P6) writer and reader
//!
//! P6 frames are self-delimiting, so a stack is just frames written
//! back to back. The writer tracks its open target: saving to the
//! same target mid-sequence appends, a new target truncates, and
//! `last = true` closes the sequence.
//!
//! The reader accepts a single frame or a concatenated stack and is
//! the input side of the CLI convert routine.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::image::ImageFrame;
use crate::writer::{FormatWriter, WriteError};

const MAXVAL: u32 = 255;

pub struct PpmWriter {
    /// Target of the sequence currently being written, if any
    open_target: Option<String>,
}

impl PpmWriter {
    pub fn new() -> Self {
        Self { open_target: None }
    }
}

impl Default for PpmWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatWriter for PpmWriter {
    fn key(&self) -> &'static str {
        "ppm"
    }

    fn format_name(&self) -> &'static str {
        "Portable Pixmap"
    }

    fn suffixes(&self) -> &'static [&'static str] {
        &["ppm", "pnm"]
    }

    fn can_do_stacks(&self, _target: &str) -> bool {
        true
    }

    fn save(&mut self, target: &str, frame: &ImageFrame, last: bool) -> Result<(), WriteError> {
        let file = if self.open_target.as_deref() == Some(target) {
            OpenOptions::new().append(true).open(target)?
        } else {
            let file = File::create(target)?;
            self.open_target = Some(target.to_string());
            file
        };

        let mut out = BufWriter::new(file);
        write!(out, "P6\n{} {}\n{}\n", frame.width(), frame.height(), MAXVAL)?;
        out.write_all(frame.pixels())?;
        out.flush()?;

        if last {
            self.open_target = None;
        }
        Ok(())
    }
}

fn malformed(detail: impl Into<String>) -> WriteError {
    WriteError::Malformed {
        format: "PPM",
        detail: detail.into(),
    }
}

/// Reads one frame, or a concatenated stack of frames, from a binary
/// PPM file
pub fn read_ppm(path: &Path) -> Result<Vec<ImageFrame>, WriteError> {
    let data = std::fs::read(path)?;
    let mut pos = 0;

    skip_whitespace(&data, &mut pos);
    if pos >= data.len() {
        return Err(malformed("empty input"));
    }

    let mut frames = Vec::new();
    while pos < data.len() {
        frames.push(read_frame(&data, &mut pos)?);
        skip_whitespace(&data, &mut pos);
    }
    Ok(frames)
}

fn read_frame(data: &[u8], pos: &mut usize) -> Result<ImageFrame, WriteError> {
    if data.len() - *pos < 2 || &data[*pos..*pos + 2] != b"P6" {
        return Err(malformed("missing P6 magic"));
    }
    *pos += 2;

    let width = read_header_value(data, pos)?;
    let height = read_header_value(data, pos)?;
    let maxval = read_header_value(data, pos)?;
    if maxval != MAXVAL {
        return Err(malformed(format!("unsupported maxval {maxval}")));
    }

    // Exactly one whitespace byte separates the header from the
    // pixel payload.
    if *pos >= data.len() || !data[*pos].is_ascii_whitespace() {
        return Err(malformed("missing header terminator"));
    }
    *pos += 1;

    let len = width as usize * height as usize * 3;
    if data.len() - *pos < len {
        return Err(malformed(format!(
            "truncated pixel data for {width}x{height} frame"
        )));
    }
    let pixels = data[*pos..*pos + len].to_vec();
    *pos += len;

    Ok(ImageFrame::new(width, height, pixels)?)
}

/// Reads one decimal header value, skipping whitespace and `#`
/// comments before it
fn read_header_value(data: &[u8], pos: &mut usize) -> Result<u32, WriteError> {
    loop {
        skip_whitespace(data, pos);
        if *pos < data.len() && data[*pos] == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
        } else {
            break;
        }
    }

    let start = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        return Err(malformed("expected decimal header value"));
    }

    std::str::from_utf8(&data[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| malformed("header value out of range"))
}

fn skip_whitespace(data: &[u8], pos: &mut usize) {
    while *pos < data.len() && data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn target_in(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn save_writes_p6_header_and_payload() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir, "out.ppm");
        let frame = ImageFrame::new(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();

        PpmWriter::new().save(&target, &frame, true).unwrap();

        let written = std::fs::read(&target).unwrap();
        assert_eq!(written, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn sequence_saves_append_frames() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir, "stack.ppm");
        let frame = ImageFrame::filled(1, 1, [9, 9, 9]).unwrap();

        let mut writer = PpmWriter::new();
        writer.save(&target, &frame, false).unwrap();
        writer.save(&target, &frame, false).unwrap();
        writer.save(&target, &frame, true).unwrap();

        let frames = read_ppm(Path::new(&target)).unwrap();
        assert_eq!(frames.len(), 3);
    }

    #[test]
    fn new_sequence_truncates_previous_contents() {
        let dir = TempDir::new().unwrap();
        let target = target_in(&dir, "redo.ppm");
        let frame = ImageFrame::filled(1, 1, [1, 2, 3]).unwrap();

        let mut writer = PpmWriter::new();
        writer.save(&target, &frame, true).unwrap();
        // Sequence closed; the next save starts over.
        writer.save(&target, &frame, true).unwrap();

        let frames = read_ppm(Path::new(&target)).unwrap();
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn read_parses_header_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commented.ppm");
        std::fs::write(&path, b"P6\n# made by hand\n1 1\n255\n\x10\x20\x30").unwrap();

        let frames = read_ppm(&path).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].pixels(), &[0x10, 0x20, 0x30]);
    }

    #[test]
    fn read_rejects_wrong_magic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.ppm");
        std::fs::write(&path, b"P3\n1 1\n255\n0 0 0\n").unwrap();

        assert!(matches!(
            read_ppm(&path),
            Err(WriteError::Malformed { .. })
        ));
    }

    #[test]
    fn read_rejects_truncated_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.ppm");
        std::fs::write(&path, b"P6\n2 2\n255\n\x00\x00\x00").unwrap();

        assert!(matches!(
            read_ppm(&path),
            Err(WriteError::Malformed { .. })
        ));
    }

    #[test]
    fn read_rejects_unsupported_maxval() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deep.ppm");
        std::fs::write(&path, b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00").unwrap();

        assert!(matches!(
            read_ppm(&path),
            Err(WriteError::Malformed { .. })
        ));
    }

    #[test]
    fn read_rejects_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.ppm");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(
            read_ppm(&path),
            Err(WriteError::Malformed { .. })
        ));
    }
}
