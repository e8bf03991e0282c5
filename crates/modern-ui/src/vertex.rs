use bytemuck::{Pod, Zeroable};

use crate::color::Color;

/// Vertex format for solid-color UI geometry.
///
/// Layout is position then color, tightly packed, so a slice can be uploaded as-is with
/// `bytemuck::cast_slice` and bound as `Float32x2` + `Float32x3`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 2],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub const fn new(pos: [f32; 2], color: Color) -> Self {
        Self {
            pos,
            color: color.to_array(),
        }
    }
}

/// Vertex format for text glyph quads.
///
/// Positions are in screen-space pixels (same coordinate convention as [`ColorVertex`]).
/// UVs are normalized texture coordinates into the glyph atlas. There is no color: the
/// label tint is a uniform of the consumer's shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TextureVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

impl TextureVertex {
    pub const fn new(pos: [f32; 2], uv: [f32; 2]) -> Self {
        Self { pos, uv }
    }
}
