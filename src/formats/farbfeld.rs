//! farbfeld writer
//!
//! farbfeld is the suckless image format: an 8-byte magic, big-endian
//! 32-bit dimensions, then 16-bit big-endian RGBA per pixel. 8-bit
//! channels are widened with the usual `c * 257` expansion; alpha is
//! fully opaque.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::image::ImageFrame;
use crate::writer::{FormatWriter, WriteError};

const MAGIC: &[u8; 8] = b"farbfeld";

pub struct FarbfeldWriter;

impl FormatWriter for FarbfeldWriter {
    fn key(&self) -> &'static str {
        "farbfeld"
    }

    fn format_name(&self) -> &'static str {
        "farbfeld"
    }

    fn suffixes(&self) -> &'static [&'static str] {
        &["ff"]
    }

    fn can_do_stacks(&self, _target: &str) -> bool {
        false
    }

    fn save(&mut self, target: &str, frame: &ImageFrame, last: bool) -> Result<(), WriteError> {
        if !last {
            return Err(WriteError::Unsupported {
                format: "farbfeld",
                detail: "multi-image stacks",
            });
        }

        let mut out = BufWriter::new(File::create(target)?);
        out.write_all(MAGIC)?;
        out.write_all(&frame.width().to_be_bytes())?;
        out.write_all(&frame.height().to_be_bytes())?;

        for rgb in frame.pixels().chunks_exact(3) {
            for &channel in rgb {
                out.write_all(&(channel as u16 * 257).to_be_bytes())?;
            }
            out.write_all(&u16::MAX.to_be_bytes())?;
        }

        out.flush()?;
        Ok(())
    }
}
