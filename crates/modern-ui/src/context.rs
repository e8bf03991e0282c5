use std::path::Path;

use modern_ui_text::{BakedFont, FontError};

use crate::color::Color;
use crate::config::ContextConfig;
use crate::store::{ButtonId, Widgets, WindowId};
use crate::tessellate::Tessellator;
use crate::vertex::{ColorVertex, TextureVertex};

/// Initialization failure recorded by a [`Context`].
///
/// The context stays usable after either error; it just renders no text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The font source could not be read.
    #[error("font file is missing or unreadable")]
    FontFileMissing,

    /// The font could not be baked into the atlas.
    #[error("font could not be baked into the atlas")]
    FontBakeFailed,
}

impl From<&FontError> for ContextError {
    fn from(error: &FontError) -> Self {
        match error {
            FontError::FileMissing { .. } => Self::FontFileMissing,
            FontError::Parse(_) | FontError::BakeFailed { .. } => Self::FontBakeFailed,
        }
    }
}

const INITIAL_COLOR_VERTEX_CAPACITY: usize = 1024;
const INITIAL_TEXTURE_VERTEX_CAPACITY: usize = 4096;

/// Frame compositor.
///
/// Holds handles to registered widgets (in registration order, which is also paint order)
/// and the baked font. [`Context::process_frame`] regenerates both vertex streams from
/// scratch every call.
pub struct Context {
    config: ContextConfig,
    font: BakedFont,
    error: Option<ContextError>,

    windows: Vec<WindowId>,
    buttons: Vec<ButtonId>,

    tessellator: Tessellator,
}

impl Context {
    /// Create a context, baking the font at `font_path` once.
    ///
    /// Never fails: on a missing or unbakeable font the context falls back to an empty atlas
    /// and [`Context::error`] reports why.
    pub fn new(font_path: impl AsRef<Path>, config: ContextConfig) -> Self {
        let font = modern_ui_text::load(font_path, &config.font);
        Self::from_bake_result(font, config)
    }

    /// Like [`Context::new`] but with the font file already in memory.
    pub fn from_font_bytes(font_bytes: &[u8], config: ContextConfig) -> Self {
        let font = modern_ui_text::bake(font_bytes, &config.font);
        Self::from_bake_result(font, config)
    }

    /// Create a context around an already baked font. Records no error.
    pub fn with_font(font: BakedFont, config: ContextConfig) -> Self {
        Self {
            config,
            font,
            error: None,
            windows: Vec::new(),
            buttons: Vec::new(),
            tessellator: Tessellator::with_capacity(
                INITIAL_COLOR_VERTEX_CAPACITY,
                INITIAL_TEXTURE_VERTEX_CAPACITY,
            ),
        }
    }

    fn from_bake_result(result: Result<BakedFont, FontError>, config: ContextConfig) -> Self {
        match result {
            Ok(font) => Self::with_font(font, config),
            Err(e) => {
                log::error!("Font unavailable, labels will not be drawn: {}", e);
                let empty = BakedFont::empty(config.font.atlas_width, config.font.atlas_height);
                let mut context = Self::with_font(empty, config);
                context.error = Some(ContextError::from(&e));
                context
            }
        }
    }

    /// The error recorded at construction, if the font could not be loaded.
    pub fn error(&self) -> Option<ContextError> {
        self.error
    }

    /// True when the font failed to load and text is not rendered.
    pub fn is_font_degraded(&self) -> bool {
        self.error.is_some()
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Register a window. Registering twice draws it twice.
    pub fn add_window(&mut self, window: WindowId) {
        self.windows.push(window);
    }

    /// Register a button. Registering twice draws it twice.
    pub fn add_button(&mut self, button: ButtonId) {
        self.buttons.push(button);
    }

    /// Regenerate both vertex streams from the current state of the registered widgets.
    ///
    /// All windows are emitted first, then all buttons (box, then label), each group in
    /// registration order. Handles whose widget was removed from `widgets` are skipped.
    pub fn process_frame(&mut self, widgets: &Widgets) {
        self.tessellator.clear();

        for &id in &self.windows {
            let Some(window) = widgets.window(id) else {
                log::warn!("Skipping stale window handle {:?}", id);
                continue;
            };

            self.tessellator.add_rect(window.rect(), window.color());
        }

        let inset = self.config.text_inset;
        for &id in &self.buttons {
            let Some(button) = widgets.button(id) else {
                log::warn!("Skipping stale button handle {:?}", id);
                continue;
            };

            self.tessellator.add_rect(button.rect(), self.config.button_color);

            // Baseline sits `inset` above the bottom edge.
            let pen = [button.x() + inset, button.y() + button.height() - inset];
            self.tessellator.add_text(&self.font, button.text(), pen);
        }

        log::trace!(
            "Frame: {} color vertices, {} texture vertices",
            self.tessellator.color_vertices().len(),
            self.tessellator.texture_vertices().len()
        );
    }

    /// Solid geometry from the last [`Context::process_frame`], as a triangle list.
    pub fn color_vertices(&self) -> &[ColorVertex] {
        self.tessellator.color_vertices()
    }

    pub fn color_vertex_count(&self) -> usize {
        self.tessellator.color_vertices().len()
    }

    /// Glyph quads from the last [`Context::process_frame`], as a triangle list.
    pub fn texture_vertices(&self) -> &[TextureVertex] {
        self.tessellator.texture_vertices()
    }

    pub fn texture_vertex_count(&self) -> usize {
        self.tessellator.texture_vertices().len()
    }

    /// The baked font, including its atlas bitmap.
    pub fn font(&self) -> &BakedFont {
        &self.font
    }

    /// Row-major single-channel atlas bitmap, `atlas_size()[0] * atlas_size()[1]` bytes.
    pub fn font_bitmap(&self) -> &[u8] {
        self.font.bitmap()
    }

    pub fn atlas_size(&self) -> [u32; 2] {
        self.font.size()
    }

    /// Tint the renderer should apply to glyph coverage.
    pub fn text_color(&self) -> Color {
        self.config.text_color
    }
}
