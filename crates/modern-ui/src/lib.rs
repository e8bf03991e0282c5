//! # modern-ui
//!
//! Graphics backend agnostic widget layer.
//!
//! Widgets (windows and buttons) live in a caller-owned [`Widgets`] table. A [`Context`]
//! registers handles to them and, once per frame, expands their current state into two flat
//! triangle-list vertex streams: solid-color geometry ([`ColorVertex`]) and textured glyph
//! quads ([`TextureVertex`]) sampling a baked font atlas. Rendering is handled by separate
//! backend crates like `modern-ui-wgpu`.

mod color;
mod config;
mod context;
mod primitives;
mod store;
mod tessellate;
mod vertex;
mod widget;

pub use color::*;
pub use config::*;
pub use context::*;
pub use primitives::*;
pub use store::*;
pub use tessellate::*;
pub use vertex::*;
pub use widget::*;

pub use modern_ui_text as text;
