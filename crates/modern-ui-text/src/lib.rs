//! Baked-bitmap font atlas for `modern-ui`.
//!
//! A font is baked once: every code in a contiguous ASCII range is rasterized and
//! packed into a single-channel atlas, and per-glyph placement metrics are kept
//! alongside. Laying out text afterwards is a pure function of that table and a
//! pen position, see [`layout_glyph`].
//!
//! Renderers are expected to:
//! 1. Upload [`BakedFont::bitmap`] once into an `R8` texture.
//! 2. Walk the text, calling [`BakedFont::glyph_index`] to skip unbaked codes and
//!    [`layout_glyph`] to get a screen-space quad with atlas UVs.
//!
//! NOTE: This crate intentionally does not know about vertices or GPUs.

#![deny(warnings)]

mod atlas;
mod bake;
mod error;
mod glyph;

pub use atlas::*;
pub use bake::*;
pub use error::*;
pub use glyph::*;
