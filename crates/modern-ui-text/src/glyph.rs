/// Placement of one baked glyph.
///
/// Coordinate convention (same as the UI geometry):
/// - x grows right
/// - y grows down, so `yoff` is negative for the part of a glyph above the baseline
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BakedGlyph {
    /// Glyph bitmap box inside the atlas, in pixels: `[x0, y0]`.
    pub atlas_min: [u16; 2],
    /// Glyph bitmap box inside the atlas, in pixels: `[x1, y1]` (exclusive).
    pub atlas_max: [u16; 2],
    /// Offset from the pen position to the quad's top-left corner, in pixels.
    pub offset: [f32; 2],
    /// Horizontal pen advance in pixels.
    pub xadvance: f32,
}

impl BakedGlyph {
    #[inline]
    pub fn width(&self) -> f32 {
        f32::from(self.atlas_max[0]) - f32::from(self.atlas_min[0])
    }

    #[inline]
    pub fn height(&self) -> f32 {
        f32::from(self.atlas_max[1]) - f32::from(self.atlas_min[1])
    }
}

/// UV rectangle (normalized texture coords).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UvRect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl UvRect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }
}

/// A screen-space quad for one glyph plus the atlas region it samples.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AlignedQuad {
    /// Top-left corner in pixels.
    pub min: [f32; 2],
    /// Bottom-right corner in pixels.
    pub max: [f32; 2],
    pub uv: UvRect,
}

/// Lay out the glyph at `index` of a baked table with the pen at `cursor`.
///
/// Returns the quad and the advanced pen position. The quad's top-left corner is snapped to
/// the pixel grid so glyph texels map 1:1 onto screen pixels; the pen itself keeps its
/// fractional position. Only x advances, the baseline stays put.
///
/// Returns `None` if `index` is not in the table. Callers map character codes to indices
/// first (see `BakedFont::glyph_index`).
pub fn layout_glyph(
    glyphs: &[BakedGlyph],
    atlas_size: [u32; 2],
    index: usize,
    cursor: [f32; 2],
) -> Option<(AlignedQuad, [f32; 2])> {
    let glyph = glyphs.get(index)?;

    let inv_w = 1.0 / atlas_size[0].max(1) as f32;
    let inv_h = 1.0 / atlas_size[1].max(1) as f32;

    let x0 = (cursor[0] + glyph.offset[0] + 0.5).floor();
    let y0 = (cursor[1] + glyph.offset[1] + 0.5).floor();

    let quad = AlignedQuad {
        min: [x0, y0],
        max: [x0 + glyph.width(), y0 + glyph.height()],
        uv: UvRect::new(
            [
                f32::from(glyph.atlas_min[0]) * inv_w,
                f32::from(glyph.atlas_min[1]) * inv_h,
            ],
            [
                f32::from(glyph.atlas_max[0]) * inv_w,
                f32::from(glyph.atlas_max[1]) * inv_h,
            ],
        ),
    };

    Some((quad, [cursor[0] + glyph.xadvance, cursor[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph() -> BakedGlyph {
        BakedGlyph {
            atlas_min: [64, 128],
            atlas_max: [72, 140],
            offset: [1.0, -10.0],
            xadvance: 9.5,
        }
    }

    #[test]
    fn test_quad_size_matches_atlas_box() {
        let (quad, _) = layout_glyph(&[glyph()], [256, 256], 0, [10.0, 20.0]).unwrap();
        assert_eq!(quad.min, [11.0, 10.0]);
        assert_eq!(quad.max, [19.0, 22.0]);
    }

    #[test]
    fn test_uvs_are_normalized_atlas_box() {
        let (quad, _) = layout_glyph(&[glyph()], [256, 256], 0, [0.0, 0.0]).unwrap();
        assert_eq!(quad.uv.min, [0.25, 0.5]);
        assert_eq!(quad.uv.max, [72.0 / 256.0, 140.0 / 256.0]);
    }

    #[test]
    fn test_cursor_advances_horizontally_only() {
        let (_, cursor) = layout_glyph(&[glyph()], [256, 256], 0, [10.0, 20.0]).unwrap();
        assert_eq!(cursor, [19.5, 20.0]);
    }

    #[test]
    fn test_quad_snaps_to_pixel_grid() {
        let (quad, cursor) = layout_glyph(&[glyph()], [256, 256], 0, [19.5, 20.0]).unwrap();
        assert_eq!(quad.min, [21.0, 10.0]);
        assert_eq!(cursor, [29.0, 20.0]);
    }

    #[test]
    fn test_missing_index_lays_out_nothing() {
        assert!(layout_glyph(&[], [256, 256], 0, [0.0, 0.0]).is_none());
        assert!(layout_glyph(&[glyph()], [256, 256], 1, [0.0, 0.0]).is_none());
    }
}
