//! Glyph placement inside a fixed-size atlas bitmap.
//!
//! Simple row-based shelf packer:
//! - The atlas is partitioned into horizontal shelves (rows).
//! - Each insertion goes into the first shelf that fits, otherwise a new shelf is opened
//!   below the last one.
//! - A gutter of `padding_px` is reserved around every glyph so linear sampling never bleeds
//!   a neighbour into the quad.
//!
//! There is no eviction: a bake either fits entirely or fails.

/// Atlas coordinates in pixels (top-left origin).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AtlasPx {
    pub x: u32,
    pub y: u32,
}

impl AtlasPx {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Rectangle in atlas pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AtlasRectPx {
    pub min: AtlasPx,
    pub size: [u32; 2],
}

impl AtlasRectPx {
    pub const fn new(min: AtlasPx, size: [u32; 2]) -> Self {
        Self { min, size }
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.size[0]
    }

    #[inline]
    pub const fn height(self) -> u32 {
        self.size[1]
    }

    #[inline]
    pub const fn max_x(self) -> u32 {
        self.min.x + self.size[0]
    }

    #[inline]
    pub const fn max_y(self) -> u32 {
        self.min.y + self.size[1]
    }
}

/// A single shelf (row) in the atlas.
#[derive(Copy, Clone, Debug)]
struct Shelf {
    y: u32,
    height: u32,
    x_cursor: u32,
}

/// Shelf allocator for baking a glyph set into one bitmap.
#[derive(Clone, Debug)]
pub struct ShelfPacker {
    width: u32,
    height: u32,
    padding_px: u32,

    shelves: Vec<Shelf>,
    next_shelf_y: u32,
}

impl ShelfPacker {
    /// Create a packer for an atlas of fixed size.
    ///
    /// `padding_px` is reserved around each glyph. A value of 1 is typical for linear sampling.
    pub fn new(width: u32, height: u32, padding_px: u32) -> Self {
        Self {
            width,
            height,
            padding_px,
            shelves: Vec::new(),
            next_shelf_y: 0,
        }
    }

    /// Reserve space for a glyph bitmap of `size_px` (excluding padding).
    ///
    /// Returns the rectangle of the glyph bitmap itself (padding already skipped), or `None`
    /// when the atlas has no room left. Empty bitmaps (e.g. the space character) take no
    /// room and are placed at the origin with zero size.
    pub fn pack(&mut self, size_px: [u32; 2]) -> Option<AtlasRectPx> {
        let [glyph_w, glyph_h] = size_px;
        if glyph_w == 0 || glyph_h == 0 {
            return Some(AtlasRectPx::new(AtlasPx::new(0, 0), [0, 0]));
        }

        let pad = self.padding_px;
        let reserved_w = glyph_w.saturating_add(pad.saturating_mul(2));
        let reserved_h = glyph_h.saturating_add(pad.saturating_mul(2));

        // Quick reject if it can never fit.
        if reserved_w > self.width || reserved_h > self.height {
            return None;
        }

        let width = self.width;
        let existing = self.shelves.iter_mut().find(|shelf| {
            reserved_h <= shelf.height && shelf.x_cursor.saturating_add(reserved_w) <= width
        });

        let min = match existing {
            Some(shelf) => {
                let min = AtlasPx::new(shelf.x_cursor, shelf.y);
                shelf.x_cursor = shelf.x_cursor.saturating_add(reserved_w);
                min
            }
            None => {
                if self.next_shelf_y.saturating_add(reserved_h) > self.height {
                    return None;
                }

                let shelf = Shelf {
                    y: self.next_shelf_y,
                    height: reserved_h,
                    x_cursor: reserved_w,
                };
                self.next_shelf_y = self.next_shelf_y.saturating_add(reserved_h);
                self.shelves.push(shelf);
                AtlasPx::new(0, shelf.y)
            }
        };

        Some(AtlasRectPx::new(
            AtlasPx::new(min.x + pad, min.y + pad),
            [glyph_w, glyph_h],
        ))
    }
}

/// Copy a row-major coverage bitmap into the atlas at `rect`.
///
/// Pixels falling outside the atlas are dropped.
pub fn blit(atlas: &mut [u8], atlas_width: u32, rect: AtlasRectPx, pixels: &[u8]) {
    let w = rect.width() as usize;
    if w == 0 {
        return;
    }

    for (row, src) in pixels.chunks_exact(w).take(rect.height() as usize).enumerate() {
        let start = (rect.min.y as usize + row) * atlas_width as usize + rect.min.x as usize;
        if let Some(dst) = atlas.get_mut(start..start + w) {
            dst.copy_from_slice(src);
        }
    }
}
