use modern_ui::{Button, ButtonId, Color, Context, Widgets, Window, WindowId};

/// Background of the cursor-following window
const FOREGROUND_COLOR: Color = Color::rgb(0.45, 0.46, 0.48);

/// The demo interface: one window glued to the mouse cursor and one labelled button.
pub struct DemoUi {
    context: Context,
    widgets: Widgets,
    cursor_window: WindowId,
    button: ButtonId,
    frames: u64,
}

impl DemoUi {
    pub fn new(mut context: Context) -> Self {
        let mut widgets = Widgets::new();

        let cursor_window =
            widgets.insert_window(Window::new(0.0, 0.0, 10.0, 10.0).with_color(FOREGROUND_COLOR));
        let button =
            widgets.insert_button(Button::new("Hello, modern-ui!", 40.0, 40.0, 260.0, 44.0));

        context.add_window(cursor_window);
        context.add_button(button);

        Self {
            context,
            widgets,
            cursor_window,
            button,
            frames: 0,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Move the cursor window's top-left corner to the pointer.
    pub fn follow_cursor(&mut self, x: f32, y: f32) {
        if let Some(window) = self.widgets.window_mut(self.cursor_window) {
            window.set_position(x, y);
        }
    }

    /// Regenerate geometry for this frame.
    pub fn process_frame(&mut self) {
        self.frames += 1;
        if let Some(button) = self.widgets.button_mut(self.button) {
            if self.frames % 60 == 0 {
                button.set_text(format!("Frames rendered: {}", self.frames));
            }
        }

        self.context.process_frame(&self.widgets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modern_ui::text::BakedFont;
    use modern_ui::ContextConfig;

    fn ui() -> DemoUi {
        DemoUi::new(Context::with_font(
            BakedFont::empty(16, 16),
            ContextConfig::default(),
        ))
    }

    #[test]
    fn test_cursor_window_follows_pointer() {
        let mut ui = ui();
        ui.follow_cursor(120.0, 80.0);
        ui.process_frame();

        let first = ui.context().color_vertices()[0];
        assert_eq!(first.pos, [120.0, 80.0]);
        assert_eq!(first.color, FOREGROUND_COLOR.to_array());
    }

    #[test]
    fn test_frame_contains_window_and_button_boxes() {
        let mut ui = ui();
        ui.process_frame();
        assert_eq!(ui.context().color_vertex_count(), 12);
        assert_eq!(ui.context().texture_vertex_count(), 0);
    }

    #[test]
    fn test_button_relabels_every_sixty_frames() {
        let mut ui = ui();
        let label = |ui: &DemoUi| ui.widgets.button(ui.button).map(|b| b.text().to_owned());

        for _ in 0..59 {
            ui.process_frame();
        }
        assert_eq!(label(&ui).as_deref(), Some("Hello, modern-ui!"));

        ui.process_frame();
        assert_eq!(label(&ui).as_deref(), Some("Frames rendered: 60"));
    }
}
