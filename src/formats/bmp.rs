//! Windows Bitmap writer
//!
//! Uncompressed 24-bit BI_RGB, bottom-up rows padded to four bytes.
//! BMP holds a single image, so multi-image sequences are refused.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::image::ImageFrame;
use crate::writer::{FormatWriter, WriteError};

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;

pub struct BmpWriter;

impl FormatWriter for BmpWriter {
    fn key(&self) -> &'static str {
        "bmp"
    }

    fn format_name(&self) -> &'static str {
        "Windows Bitmap"
    }

    fn suffixes(&self) -> &'static [&'static str] {
        &["bmp", "dib"]
    }

    fn can_do_stacks(&self, _target: &str) -> bool {
        false
    }

    fn save(&mut self, target: &str, frame: &ImageFrame, last: bool) -> Result<(), WriteError> {
        if !last {
            return Err(WriteError::Unsupported {
                format: "Windows Bitmap",
                detail: "multi-image stacks",
            });
        }

        let mut out = BufWriter::new(File::create(target)?);
        out.write_all(&encode(frame))?;
        out.flush()?;
        Ok(())
    }
}

/// Encodes a frame as a complete BMP byte stream
fn encode(frame: &ImageFrame) -> Vec<u8> {
    let width = frame.width();
    let height = frame.height();
    let row_len = ((width * 3 + 3) / 4) * 4;
    let image_len = row_len * height;
    let file_len = FILE_HEADER_LEN + INFO_HEADER_LEN + image_len;

    let mut data = Vec::with_capacity(file_len as usize);

    // BITMAPFILEHEADER
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&file_len.to_le_bytes());
    data.extend_from_slice(&[0; 4]); // reserved
    data.extend_from_slice(&(FILE_HEADER_LEN + INFO_HEADER_LEN).to_le_bytes());

    // BITMAPINFOHEADER
    data.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    data.extend_from_slice(&(width as i32).to_le_bytes());
    data.extend_from_slice(&(height as i32).to_le_bytes()); // positive: bottom-up
    data.extend_from_slice(&1u16.to_le_bytes()); // planes
    data.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    data.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    data.extend_from_slice(&image_len.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes()); // 72 dpi
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    data.extend_from_slice(&0u32.to_le_bytes()); // important colors

    let padding = (row_len - width * 3) as usize;
    for y in (0..height).rev() {
        for rgb in frame.row(y).chunks_exact(3) {
            data.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
        }
        data.extend_from_slice(&[0u8; 3][..padding]);
    }

    data
}
