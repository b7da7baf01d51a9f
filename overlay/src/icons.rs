//! Icon atlas for skill sprites
//!
//! Icons are decoded to straight RGBA once, when registered, and looked up by
//! the [`IconHandle`] the host hands to the overlay.

use std::collections::HashMap;
use std::path::Path;

use skill_overlay_core::IconHandle;
use thiserror::Error;
use tiny_skia::{ColorU8, Pixmap};

#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to read icon file")]
    Io(#[from] std::io::Error),

    #[error("failed to decode PNG")]
    Decode(#[from] png::DecodingError),

    #[error("unsupported PNG color type {color_type:?}")]
    Unsupported { color_type: png::ColorType },

    #[error("icon has no pixels")]
    Empty,
}

/// Decoded RGBA icon data
#[derive(Debug, Clone, PartialEq)]
pub struct IconData {
    /// RGBA pixel data (width * height * 4 bytes), not premultiplied
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl IconData {
    /// A square icon filled with one color
    pub fn solid(size: u32, rgba: [u8; 4]) -> Self {
        Self {
            rgba: rgba.repeat(size as usize * size as usize),
            width: size,
            height: size,
        }
    }

    /// Premultiplied copy for blitting with tiny-skia
    pub fn to_pixmap(&self) -> Option<Pixmap> {
        let mut pixmap = Pixmap::new(self.width, self.height)?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(self.rgba.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }
        Some(pixmap)
    }
}

/// Decoded icons keyed by handle
#[derive(Debug, Default)]
pub struct IconAtlas {
    icons: HashMap<IconHandle, IconData>,
    next_handle: u32,
}

impl IconAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already decoded icon
    pub fn insert(&mut self, icon: IconData) -> IconHandle {
        let handle = IconHandle(self.next_handle);
        self.next_handle += 1;
        self.icons.insert(handle, icon);
        handle
    }

    /// Decode and register a PNG image
    pub fn insert_png(&mut self, data: &[u8]) -> Result<IconHandle, IconError> {
        let icon = decode_png(data)?;
        Ok(self.insert(icon))
    }

    /// Read, decode and register a PNG file
    pub fn load_png_file(&mut self, path: &Path) -> Result<IconHandle, IconError> {
        let data = std::fs::read(path)?;
        let handle = self.insert_png(&data)?;
        tracing::debug!(path = ?path, handle = handle.0, "Loaded skill icon");
        Ok(handle)
    }

    pub fn get(&self, handle: IconHandle) -> Option<&IconData> {
        self.icons.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Decode PNG data to straight RGBA
pub fn decode_png(data: &[u8]) -> Result<IconData, IconError> {
    let mut decoder = png::Decoder::new(data);
    // Palette and low bit depths expand to 8-bit channels
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let (width, height) = (info.width, info.height);
    if width == 0 || height == 0 {
        return Err(IconError::Empty);
    }

    let pixels = &buf[..info.buffer_size()];
    let rgba = match info.color_type {
        png::ColorType::Rgba => pixels.to_vec(),
        png::ColorType::Rgb => pixels
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => pixels
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        png::ColorType::Grayscale => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        color_type => return Err(IconError::Unsupported { color_type }),
    };

    Ok(IconData {
        rgba,
        width,
        height,
    })
}
