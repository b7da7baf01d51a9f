//! PNG snapshots of rendered frames

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::utils::demultiply_rgba;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PNG")]
    Encode(#[from] png::EncodingError),

    #[error("buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Encode a premultiplied RGBA frame as PNG into `out`
pub fn encode_png<W: std::io::Write>(
    out: W,
    buffer: &[u8],
    width: u32,
    height: u32,
) -> Result<(), SnapshotError> {
    let expected = width as usize * height as usize * 4;
    if buffer.len() != expected {
        return Err(SnapshotError::BufferSize {
            width,
            height,
            expected,
            actual: buffer.len(),
        });
    }

    let mut pixels = buffer.to_vec();
    demultiply_rgba(&mut pixels);

    let mut encoder = png::Encoder::new(out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    Ok(())
}

/// Write a premultiplied RGBA frame to `path` as PNG
pub fn write_png(path: &Path, buffer: &[u8], width: u32, height: u32) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    encode_png(BufWriter::new(file), buffer, width, height)?;
    tracing::info!(path = ?path, width, height, "Wrote frame snapshot");
    Ok(())
}
