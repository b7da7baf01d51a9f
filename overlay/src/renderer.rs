//! Software renderer using tiny-skia and cosmic-text
//!
//! Draws the HUD into a caller-owned RGBA pixel buffer (premultiplied, as
//! tiny-skia stores it). All rendering happens on the CPU.
#![allow(clippy::too_many_arguments)]
use std::collections::HashMap;
use std::path::Path;

use cosmic_text::{
    Attrs, Buffer, Color as CosmicColor, Family, FontSystem, LayoutGlyph, Metrics, Shaping,
    SwashCache,
};
use tiny_skia::{
    Color, FilterQuality, Paint, PixmapMut, PixmapPaint, PremultipliedColorU8, Rect, Transform,
};

use crate::icons::IconData;

/// Shaped strings kept before the least recently drawn ones are dropped
const TEXT_CACHE_MAX_ENTRIES: usize = 256;

/// Shaped glyph run for one label string
struct ShapedText {
    /// Font size in tenths of a pixel the glyphs were shaped at
    size_key: u32,
    glyphs: Vec<LayoutGlyph>,
    width: f32,
    height: f32,
    last_used: u64,
}

/// Label text shaped once and reused across frames.
///
/// Keyed by text only: a label string is always drawn at one size, and a
/// lookup at another size reshapes in place.
#[derive(Default)]
struct TextCache {
    entries: HashMap<String, ShapedText>,
    tick: u64,
}

impl TextCache {
    fn shape(
        &mut self,
        font_system: &mut FontSystem,
        family: Option<&str>,
        text: &str,
        font_size: f32,
    ) -> Option<&ShapedText> {
        let size_key = (font_size * 10.0).round() as u32;
        self.tick += 1;

        let hit = self
            .entries
            .get(text)
            .is_some_and(|shaped| shaped.size_key == size_key);
        if !hit {
            let mut shaped = shape_text(font_system, family, text, font_size, size_key);
            shaped.last_used = self.tick;
            self.entries.insert(text.to_owned(), shaped);
            self.evict();
        }

        let shaped = self.entries.get_mut(text)?;
        shaped.last_used = self.tick;
        Some(&*shaped)
    }

    /// Drop the oldest quarter once the cache outgrows its limit
    fn evict(&mut self) {
        if self.entries.len() <= TEXT_CACHE_MAX_ENTRIES {
            return;
        }
        let mut ages: Vec<u64> = self.entries.values().map(|s| s.last_used).collect();
        ages.sort_unstable();
        let cutoff = ages[self.entries.len() - TEXT_CACHE_MAX_ENTRIES * 3 / 4];
        self.entries.retain(|_, shaped| shaped.last_used >= cutoff);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn shape_text(
    font_system: &mut FontSystem,
    family: Option<&str>,
    text: &str,
    font_size: f32,
    size_key: u32,
) -> ShapedText {
    let mut buffer = Buffer::new(font_system, Metrics::new(font_size, font_size * 1.2));
    let family = family.map_or(Family::SansSerif, Family::Name);
    buffer.set_text(
        font_system,
        text,
        &Attrs::new().family(family),
        Shaping::Advanced,
        None,
    );
    buffer.shape_until_scroll(font_system, false);

    let mut shaped = ShapedText {
        size_key,
        glyphs: Vec::new(),
        width: 0.0,
        height: 0.0,
        last_used: 0,
    };
    for run in buffer.layout_runs() {
        shaped.width = shaped.width.max(run.line_w);
        shaped.height += run.line_height;
        shaped.glyphs.extend_from_slice(run.glyphs);
    }
    shaped
}

/// A software renderer for HUD content
pub struct Renderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    family: Option<String>,
    /// Labels only change on refresh, so most frames hit this cache
    text_cache: TextCache,
}

impl Renderer {
    /// Create a renderer using the system fonts
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new(), None)
    }

    /// Create a renderer that draws every label with the font in `path`
    pub fn with_font_file(path: &Path) -> std::io::Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_font_file(path)?;
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone());

        let locale = sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string());
        tracing::debug!(font = ?path, ?family, %locale, "Loaded overlay font");
        Ok(Self::with_font_system(
            FontSystem::new_with_locale_and_db(locale, db),
            family,
        ))
    }

    fn with_font_system(font_system: FontSystem, family: Option<String>) -> Self {
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            family,
            text_cache: TextCache::default(),
        }
    }

    /// Create a new pixel buffer (RGBA format)
    pub fn create_buffer(width: u32, height: u32) -> Vec<u8> {
        vec![0u8; width as usize * height as usize * 4]
    }

    /// Clear a pixel buffer with a color
    pub fn clear(&self, buffer: &mut [u8], width: u32, height: u32, color: Color) {
        if let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) {
            pixmap.fill(color);
        }
    }

    /// Draw a filled rectangle
    pub fn fill_rect(
        &self,
        buffer: &mut [u8],
        width: u32,
        height: u32,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) {
        let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) else {
            return;
        };
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;

        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Draw an icon scaled to `size` x `size` with its top-left corner at (x, y)
    pub fn draw_icon(
        &self,
        buffer: &mut [u8],
        width: u32,
        height: u32,
        icon: &IconData,
        x: f32,
        y: f32,
        size: f32,
    ) {
        let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) else {
            return;
        };
        let Some(source) = icon.to_pixmap() else {
            return;
        };

        let scale_x = size / icon.width as f32;
        let scale_y = size / icon.height as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };
        pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            Transform::from_scale(scale_x, scale_y).post_translate(x, y),
            None,
        );
    }

    /// Draw text with its baseline at `y` (uses shaping cache)
    pub fn draw_text(
        &mut self,
        buffer: &mut [u8],
        buf_width: u32,
        buf_height: u32,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    ) {
        let Some(mut pixmap) = PixmapMut::from_bytes(buffer, buf_width, buf_height) else {
            return;
        };

        let Some(shaped) = self.text_cache.shape(
            &mut self.font_system,
            self.family.as_deref(),
            text,
            font_size,
        ) else {
            return;
        };

        let rgba = color.to_color_u8();
        let text_color = CosmicColor::rgba(rgba.red(), rgba.green(), rgba.blue(), rgba.alpha());

        for glyph in &shaped.glyphs {
            let physical = glyph.physical((x, y), 1.0);
            let Some(image) = self
                .swash_cache
                .get_image(&mut self.font_system, physical.cache_key)
            else {
                continue;
            };
            blend_glyph_mask(
                &mut pixmap,
                &image.data,
                image.placement.width,
                image.placement.height,
                (
                    physical.x + image.placement.left,
                    physical.y - image.placement.top,
                ),
                text_color,
            );
        }
    }

    /// Measure text dimensions (uses shaping cache)
    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        self.text_cache
            .shape(&mut self.font_system, self.family.as_deref(), text, font_size)
            .map_or((0.0, 0.0), |shaped| (shaped.width, shaped.height))
    }

    /// Number of shaped strings currently cached
    pub fn cached_text_count(&self) -> usize {
        self.text_cache.len()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Source-over blend of a glyph coverage mask in a solid color
fn blend_glyph_mask(
    pixmap: &mut PixmapMut,
    mask: &[u8],
    mask_width: u32,
    mask_height: u32,
    (left, top): (i32, i32),
    color: CosmicColor,
) {
    if mask_width == 0 {
        return;
    }
    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    let pixels = pixmap.pixels_mut();

    let covered = (mask_width as usize * mask_height as usize).min(mask.len());
    for (i, &coverage) in mask[..covered].iter().enumerate() {
        if coverage == 0 {
            continue;
        }
        let px = left + (i % mask_width as usize) as i32;
        let py = top + (i / mask_width as usize) as i32;
        if !(0..width).contains(&px) || !(0..height).contains(&py) {
            continue;
        }

        let dst = &mut pixels[(py * width + px) as usize];
        let src_a = coverage as u32 * color.a() as u32 / 255;
        let keep = 255 - src_a;
        let mix = |src: u8, under: u8| ((src as u32 * src_a + under as u32 * keep) / 255) as u8;

        let blended = PremultipliedColorU8::from_rgba(
            mix(color.r(), dst.red()),
            mix(color.g(), dst.green()),
            mix(color.b(), dst.blue()),
            (src_a + dst.alpha() as u32 * keep / 255) as u8,
        );
        if let Some(blended) = blended {
            *dst = blended;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_buffer_size() {
        assert_eq!(Renderer::create_buffer(3, 2).len(), 24);
        assert!(Renderer::create_buffer(0, 100).is_empty());
    }

    #[test]
    fn test_repeated_labels_are_shaped_once() {
        let mut renderer = Renderer::new();
        let first = renderer.measure_text("Swords 42", 13.0);
        let again = renderer.measure_text("Swords 42", 13.0);
        assert_eq!(first, again);
        assert_eq!(renderer.cached_text_count(), 1);

        // Another size replaces the entry instead of adding one
        renderer.measure_text("Swords 42", 20.0);
        assert_eq!(renderer.cached_text_count(), 1);

        renderer.measure_text("Run 31", 13.0);
        assert_eq!(renderer.cached_text_count(), 2);
    }

    #[test]
    fn test_text_cache_drops_oldest_when_full() {
        let mut renderer = Renderer::new();
        for i in 0..300 {
            renderer.measure_text(&i.to_string(), 13.0);
        }
        // Trimmed to 192 when entry 257 arrived, then 43 more
        assert_eq!(renderer.cached_text_count(), 235);

        renderer.measure_text("299", 13.0);
        assert_eq!(renderer.cached_text_count(), 235);
    }

    #[test]
    fn test_glyph_mask_blends_and_clips() {
        let mut data = vec![0u8; 2 * 4];
        let mut pixmap = PixmapMut::from_bytes(&mut data, 2, 1).unwrap();
        let white = CosmicColor::rgba(255, 255, 255, 255);

        blend_glyph_mask(&mut pixmap, &[255, 0], 2, 1, (0, 0), white);
        // Mostly off-canvas: only the last mask column lands on x=0
        blend_glyph_mask(&mut pixmap, &[255, 255, 128], 3, 1, (-2, 0), white);

        assert_eq!(&data[..4], &[255, 255, 255, 255]);
        assert_eq!(&data[4..], &[0, 0, 0, 0]);
    }
}
