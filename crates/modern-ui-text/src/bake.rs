use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::atlas::{blit, ShelfPacker};
use crate::error::{FontError, FontResult};
use crate::glyph::{layout_glyph, AlignedQuad, BakedGlyph};

/// Gutter reserved around every glyph in the atlas.
const ATLAS_PADDING_PX: u32 = 1;

/// Parameters for baking a font into an atlas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontConfig {
    /// Distance from the highest ascender to the lowest descender, in pixels.
    pub pixel_height: f32,
    pub atlas_width: u32,
    pub atlas_height: u32,
    /// First character code baked into the atlas.
    pub first_char: u32,
    /// Number of consecutive codes baked, starting at `first_char`.
    pub char_count: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            pixel_height: 32.0,
            atlas_width: 512,
            atlas_height: 512,
            first_char: 32,
            char_count: 96,
        }
    }
}

impl FontConfig {
    pub fn with_pixel_height(mut self, pixel_height: f32) -> Self {
        self.pixel_height = pixel_height;
        self
    }

    pub fn with_atlas_size(mut self, width: u32, height: u32) -> Self {
        self.atlas_width = width;
        self.atlas_height = height;
        self
    }

    pub fn with_char_range(mut self, first_char: u32, char_count: u32) -> Self {
        self.first_char = first_char;
        self.char_count = char_count;
        self
    }
}

/// A font rasterized into a single-channel atlas plus its glyph table.
///
/// Immutable once baked. The bitmap is row-major, one coverage byte per pixel, ready for an
/// `R8Unorm` texture.
#[derive(Clone, Debug)]
pub struct BakedFont {
    bitmap: Vec<u8>,
    size: [u32; 2],
    first_char: u32,
    glyphs: Vec<BakedGlyph>,
}

impl BakedFont {
    /// An atlas with no glyphs: a zeroed bitmap of the given size.
    ///
    /// Text laid out against it produces no quads.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            bitmap: vec![0; width as usize * height as usize],
            size: [width, height],
            first_char: 0,
            glyphs: Vec::new(),
        }
    }

    /// Assemble a baked font from an externally produced bitmap and glyph table.
    ///
    /// The bitmap is truncated or zero-extended to `width * height` bytes.
    pub fn from_parts(
        mut bitmap: Vec<u8>,
        width: u32,
        height: u32,
        first_char: u32,
        glyphs: Vec<BakedGlyph>,
    ) -> Self {
        bitmap.resize(width as usize * height as usize, 0);
        Self {
            bitmap,
            size: [width, height],
            first_char,
            glyphs,
        }
    }

    #[inline]
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.size[0]
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.size[1]
    }

    #[inline]
    pub const fn size(&self) -> [u32; 2] {
        self.size
    }

    #[inline]
    pub const fn first_char(&self) -> u32 {
        self.first_char
    }

    #[inline]
    pub fn glyphs(&self) -> &[BakedGlyph] {
        &self.glyphs
    }

    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Table index for a character code, or `None` if the code was not baked.
    pub fn glyph_index(&self, code: u32) -> Option<usize> {
        let index = code.checked_sub(self.first_char)? as usize;
        (index < self.glyphs.len()).then_some(index)
    }

    pub fn glyph(&self, code: u32) -> Option<&BakedGlyph> {
        self.glyph_index(code).map(|index| &self.glyphs[index])
    }

    /// Lay out `code` at `cursor`. See [`layout_glyph`].
    pub fn layout(&self, code: u32, cursor: [f32; 2]) -> Option<(AlignedQuad, [f32; 2])> {
        let index = self.glyph_index(code)?;
        layout_glyph(&self.glyphs, self.size, index, cursor)
    }

    /// Sum of advances for the baked codes in `text`; unbaked bytes contribute nothing.
    pub fn measure(&self, text: &str) -> f32 {
        text.bytes()
            .filter_map(|byte| self.glyph(u32::from(byte)))
            .map(|glyph| glyph.xadvance)
            .sum()
    }
}

/// Read a font file and bake it.
pub fn load(path: impl AsRef<Path>, config: &FontConfig) -> FontResult<BakedFont> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FontError::FileMissing {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} bytes of font data from {:?}", bytes.len(), path);
    bake(&bytes, config)
}

/// Rasterize `config.char_count` codes starting at `config.first_char` into a fresh atlas.
///
/// Fails if the bytes are not a font or if any glyph does not fit.
pub fn bake(font_bytes: &[u8], config: &FontConfig) -> FontResult<BakedFont> {
    let font = Font::from_bytes(font_bytes, FontSettings::default())
        .map_err(|e| FontError::Parse(e.to_string()))?;

    let px = em_size_for_pixel_height(&font, config.pixel_height);
    let bake_failed = |glyph: u32| FontError::BakeFailed {
        glyph,
        pixel_height: config.pixel_height,
        atlas_width: config.atlas_width,
        atlas_height: config.atlas_height,
    };

    let mut bitmap = vec![0u8; config.atlas_width as usize * config.atlas_height as usize];
    let mut packer = ShelfPacker::new(config.atlas_width, config.atlas_height, ATLAS_PADDING_PX);
    let mut glyphs = Vec::with_capacity(config.char_count as usize);

    for code in config.first_char..config.first_char.saturating_add(config.char_count) {
        // Codes that are not scalar values (surrogates) bake as the font's missing glyph.
        let ch = char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
        let (metrics, coverage) = font.rasterize(ch, px);

        let size_px = [metrics.width as u32, metrics.height as u32];
        let rect = packer.pack(size_px).ok_or_else(|| bake_failed(code))?;
        blit(&mut bitmap, config.atlas_width, rect, &coverage);

        let to_u16 = |v: u32| u16::try_from(v).map_err(|_| bake_failed(code));
        glyphs.push(BakedGlyph {
            atlas_min: [to_u16(rect.min.x)?, to_u16(rect.min.y)?],
            atlas_max: [to_u16(rect.max_x())?, to_u16(rect.max_y())?],
            // fontdue reports the bitmap's bottom edge relative to the baseline, y up.
            offset: [
                metrics.xmin as f32,
                -(metrics.ymin as f32 + metrics.height as f32),
            ],
            xadvance: metrics.advance_width,
        });
    }

    log::info!(
        "Baked {} glyphs at {}px into a {}x{} atlas",
        glyphs.len(),
        config.pixel_height,
        config.atlas_width,
        config.atlas_height
    );

    Ok(BakedFont {
        bitmap,
        size: [config.atlas_width, config.atlas_height],
        first_char: config.first_char,
        glyphs,
    })
}

/// Convert an ascender-to-descender height into the em size fontdue rasterizes at.
fn em_size_for_pixel_height(font: &Font, pixel_height: f32) -> f32 {
    match font.horizontal_line_metrics(1.0) {
        Some(lm) if lm.ascent - lm.descent > 0.0 => pixel_height / (lm.ascent - lm.descent),
        _ => pixel_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BakedFont {
        let glyph = BakedGlyph {
            atlas_min: [1, 1],
            atlas_max: [9, 13],
            offset: [0.0, -12.0],
            xadvance: 10.0,
        };
        BakedFont::from_parts(Vec::new(), 64, 64, 32, vec![glyph; 96])
    }

    #[test]
    fn test_default_config_matches_reference_atlas() {
        let config = FontConfig::default();
        assert_eq!(config.pixel_height, 32.0);
        assert_eq!((config.atlas_width, config.atlas_height), (512, 512));
        assert_eq!((config.first_char, config.char_count), (32, 96));
    }

    #[test]
    fn test_glyph_index_covers_baked_range_only() {
        let font = table();
        assert_eq!(font.glyph_index(31), None);
        assert_eq!(font.glyph_index(32), Some(0));
        assert_eq!(font.glyph_index(127), Some(95));
        assert_eq!(font.glyph_index(128), None);
    }

    #[test]
    fn test_empty_font_has_zeroed_bitmap_and_no_glyphs() {
        let font = BakedFont::empty(512, 512);
        assert!(font.is_empty());
        assert_eq!(font.bitmap().len(), 512 * 512);
        assert!(font.bitmap().iter().all(|&p| p == 0));
        assert!(font.layout(u32::from(b'A'), [0.0, 0.0]).is_none());
    }

    #[test]
    fn test_from_parts_sizes_bitmap() {
        let font = table();
        assert_eq!(font.bitmap().len(), 64 * 64);
        assert_eq!(font.size(), [64, 64]);
    }

    #[test]
    fn test_measure_skips_unbaked_bytes() {
        let font = table();
        assert_eq!(font.measure("ab"), 20.0);
        assert_eq!(font.measure("a\u{7}b"), 20.0);
        assert_eq!(font.measure(""), 0.0);
    }

    #[test]
    fn test_bake_rejects_non_font_bytes() {
        let result = bake(b"definitely not a truetype file", &FontConfig::default());
        assert!(matches!(result, Err(FontError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("/nonexistent/modern-ui/missing.ttf", &FontConfig::default());
        assert!(matches!(result, Err(FontError::FileMissing { .. })));
    }
}
