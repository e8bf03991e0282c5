use crate::color::Color;
use crate::primitives::Rect;

/// A solid-colored rectangle.
///
/// Pure state: setters overwrite, getters read back. Sizes may be zero or negative and
/// colors out of range; neither is validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
}

impl Window {
    /// Create a window with an opaque white background
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: Color::WHITE,
        }
    }

    /// Builder-style color override
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn color_r(&self) -> f32 {
        self.color.r
    }

    pub fn color_g(&self) -> f32 {
        self.color.g
    }

    pub fn color_b(&self) -> f32 {
        self.color.b
    }

    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = Color::rgb(r, g, b);
    }

    /// The area this window covers
    pub fn rect(&self) -> Rect {
        Rect::from_min_size([self.x, self.y], [self.width, self.height])
    }
}

/// A box with a single line of text.
///
/// The box color is not part of the widget; the [`Context`](crate::Context) paints every
/// button with its configured button color.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    text: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Button {
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// The area this button covers
    pub fn rect(&self) -> Rect {
        Rect::from_min_size([self.x, self.y], [self.width, self.height])
    }
}
