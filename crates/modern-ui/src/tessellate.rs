use crate::color::Color;
use crate::primitives::Rect;
use crate::vertex::{ColorVertex, TextureVertex};
use modern_ui_text::{AlignedQuad, BakedFont};

/// Printable ASCII band; anything else in a label is skipped.
const PRINTABLE: std::ops::Range<u8> = 32..128;

/// Tessellator converts rectangles and text into two triangle-list vertex streams.
///
/// Every rectangle becomes two triangles with duplicated corners (no index buffer):
/// `{top-left, top-right, bottom-left}` then `{top-right, bottom-left, bottom-right}`.
#[derive(Clone, Debug, Default)]
pub struct Tessellator {
    color_vertices: Vec<ColorVertex>,
    texture_vertices: Vec<TextureVertex>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(color_capacity: usize, texture_capacity: usize) -> Self {
        Self {
            color_vertices: Vec::with_capacity(color_capacity),
            texture_vertices: Vec::with_capacity(texture_capacity),
        }
    }

    /// Truncate both streams, keeping their allocations for the next frame.
    pub fn clear(&mut self) {
        self.color_vertices.clear();
        self.texture_vertices.clear();
    }

    pub fn color_vertices(&self) -> &[ColorVertex] {
        &self.color_vertices
    }

    pub fn texture_vertices(&self) -> &[TextureVertex] {
        &self.texture_vertices
    }

    /// Append a solid rectangle: 6 color vertices.
    pub fn add_rect(&mut self, rect: Rect, color: Color) {
        let corners = [
            rect.top_left(),
            rect.top_right(),
            rect.bottom_left(),
            rect.top_right(),
            rect.bottom_left(),
            rect.bottom_right(),
        ];

        self.color_vertices
            .extend(corners.map(|pos| ColorVertex::new(pos, color)));
    }

    /// Append a glyph quad: 6 texture vertices, same split as [`Tessellator::add_rect`].
    pub fn add_glyph(&mut self, quad: &AlignedQuad) {
        let [x0, y0] = quad.min;
        let [x1, y1] = quad.max;
        let [s0, t0] = quad.uv.min;
        let [s1, t1] = quad.uv.max;

        self.texture_vertices.extend([
            TextureVertex::new([x0, y0], [s0, t0]),
            TextureVertex::new([x1, y0], [s1, t0]),
            TextureVertex::new([x0, y1], [s0, t1]),
            TextureVertex::new([x1, y0], [s1, t0]),
            TextureVertex::new([x0, y1], [s0, t1]),
            TextureVertex::new([x1, y1], [s1, t1]),
        ]);
    }

    /// Lay out `text` as a single line starting with the pen on the baseline at `pen`.
    ///
    /// Bytes outside the printable ASCII band, or not baked into `font`, are skipped and do
    /// not move the pen. Returns the number of glyph quads emitted.
    pub fn add_text(&mut self, font: &BakedFont, text: &str, mut pen: [f32; 2]) -> usize {
        let mut emitted = 0;

        for byte in text.bytes() {
            if !PRINTABLE.contains(&byte) {
                continue;
            }

            let Some((quad, next)) = font.layout(u32::from(byte), pen) else {
                continue;
            };

            self.add_glyph(&quad);
            pen = next;
            emitted += 1;
        }

        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modern_ui_text::BakedGlyph;

    fn font() -> BakedFont {
        let glyph = BakedGlyph {
            atlas_min: [0, 0],
            atlas_max: [8, 16],
            offset: [0.0, -16.0],
            xadvance: 10.0,
        };
        BakedFont::from_parts(Vec::new(), 128, 128, 32, vec![glyph; 96])
    }

    #[test]
    fn test_rect_expands_to_two_triangles() {
        let mut tess = Tessellator::new();
        tess.add_rect(Rect::from_min_size([1.0, 2.0], [3.0, 4.0]), Color::BLUE);

        let positions: Vec<[f32; 2]> = tess.color_vertices().iter().map(|v| v.pos).collect();
        assert_eq!(
            positions,
            vec![
                [1.0, 2.0],
                [4.0, 2.0],
                [1.0, 6.0],
                [4.0, 2.0],
                [1.0, 6.0],
                [4.0, 6.0],
            ]
        );
        assert!(tess
            .color_vertices()
            .iter()
            .all(|v| v.color == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_degenerate_rect_still_emits_six_vertices() {
        let mut tess = Tessellator::new();
        tess.add_rect(Rect::from_min_size([5.0, 5.0], [0.0, -2.0]), Color::WHITE);
        assert_eq!(tess.color_vertices().len(), 6);
        assert_eq!(tess.color_vertices()[5].pos, [5.0, 3.0]);
    }

    #[test]
    fn test_text_skips_non_printable_bytes() {
        let mut tess = Tessellator::new();
        let emitted = tess.add_text(&font(), "a\tb\u{e9}c", [0.0, 20.0]);

        // 'é' is two bytes, both >= 128.
        assert_eq!(emitted, 3);
        assert_eq!(tess.texture_vertices().len(), 18);
    }

    #[test]
    fn test_pen_advances_between_glyphs() {
        let mut tess = Tessellator::new();
        tess.add_text(&font(), "ab", [5.0, 20.0]);

        let first = tess.texture_vertices()[0];
        let second = tess.texture_vertices()[6];
        assert_eq!(first.pos, [5.0, 4.0]);
        assert_eq!(second.pos, [15.0, 4.0]);
    }

    #[test]
    fn test_glyph_vertices_carry_uvs() {
        let mut tess = Tessellator::new();
        tess.add_text(&font(), "a", [0.0, 16.0]);

        let uvs: Vec<[f32; 2]> = tess.texture_vertices().iter().map(|v| v.uv).collect();
        assert_eq!(
            uvs,
            vec![
                [0.0, 0.0],
                [0.0625, 0.0],
                [0.0, 0.125],
                [0.0625, 0.0],
                [0.0, 0.125],
                [0.0625, 0.125],
            ]
        );
    }

    #[test]
    fn test_text_against_empty_font_emits_nothing() {
        let mut tess = Tessellator::new();
        assert_eq!(tess.add_text(&BakedFont::empty(64, 64), "hello", [0.0, 0.0]), 0);
        assert!(tess.texture_vertices().is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut tess = Tessellator::with_capacity(12, 0);
        tess.add_rect(Rect::from_min_size([0.0, 0.0], [1.0, 1.0]), Color::WHITE);
        tess.clear();
        assert!(tess.color_vertices().is_empty());
        assert!(tess.color_vertices.capacity() >= 12);
    }
}
