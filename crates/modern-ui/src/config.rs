use crate::color::Color;
use modern_ui_text::FontConfig;

/// Settings fixed for the lifetime of a [`Context`](crate::Context)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextConfig {
    /// How the label font is baked
    pub font: FontConfig,

    /// Fill color of every button box
    pub button_color: Color,

    /// Tint applied to glyph coverage by the renderer (glyph vertices carry no color)
    pub text_color: Color,

    /// Distance of the label pen from the button's left edge and from its bottom edge
    pub text_inset: f32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            font: FontConfig::default(),
            button_color: Color::WHITE,
            text_color: Color::LABEL_GRAY,
            text_inset: 5.0,
        }
    }
}

impl ContextConfig {
    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = font;
        self
    }

    pub fn with_button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_text_inset(mut self, inset: f32) -> Self {
        self.text_inset = inset;
        self
    }
}
