use modern_ui::text::{BakedFont, BakedGlyph};
use modern_ui::{Button, Color, Context, ContextConfig, ContextError, Widgets, Window};

fn baked_font() -> BakedFont {
    let glyphs = (0..96u16)
        .map(|i| BakedGlyph {
            atlas_min: [i * 4, 0],
            atlas_max: [i * 4 + 3, 12],
            offset: [0.0, -10.0],
            xadvance: 4.0,
        })
        .collect();
    BakedFont::from_parts(Vec::new(), 512, 512, 32, glyphs)
}

fn printable_count(text: &str) -> usize {
    text.bytes().filter(|b| (32..128).contains(b)).count()
}

#[test]
fn windows_are_emitted_in_registration_order() {
    let mut widgets = Widgets::new();
    let a = widgets.insert_window(Window::new(0.0, 0.0, 1.0, 1.0).with_color(Color::RED));
    let b = widgets.insert_window(Window::new(5.0, 5.0, 1.0, 1.0).with_color(Color::BLUE));

    let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
    ctx.add_window(a);
    ctx.add_window(b);
    ctx.process_frame(&widgets);

    let vertices = ctx.color_vertices();
    assert_eq!(vertices.len(), 12);
    assert!(vertices[..6].iter().all(|v| v.color == [1.0, 0.0, 0.0]));
    assert!(vertices[6..].iter().all(|v| v.color == [0.0, 0.0, 1.0]));
}

#[test]
fn duplicate_registration_duplicates_geometry() {
    let mut widgets = Widgets::new();
    let id = widgets.insert_window(Window::new(0.0, 0.0, 3.0, 3.0));

    let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
    ctx.add_window(id);
    ctx.add_window(id);
    ctx.process_frame(&widgets);

    assert_eq!(ctx.color_vertex_count(), 12);
    assert_eq!(ctx.color_vertices()[..6], ctx.color_vertices()[6..]);
}

#[test]
fn window_mutation_shows_up_next_frame() {
    let mut widgets = Widgets::new();
    let id = widgets.insert_window(Window::new(0.0, 0.0, 10.0, 10.0));

    let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
    ctx.add_window(id);
    ctx.process_frame(&widgets);
    assert_eq!(ctx.color_vertices()[0].pos, [0.0, 0.0]);

    if let Some(window) = widgets.window_mut(id) {
        window.set_position(30.0, 40.0);
        window.set_color(0.2, 0.4, 0.6);
    }
    ctx.process_frame(&widgets);

    assert_eq!(ctx.color_vertex_count(), 6);
    assert_eq!(ctx.color_vertices()[0].pos, [30.0, 40.0]);
    assert_eq!(ctx.color_vertices()[5].pos, [40.0, 50.0]);
    assert_eq!(ctx.color_vertices()[0].color, [0.2, 0.4, 0.6]);
}

#[test]
fn button_box_does_not_depend_on_text() {
    let mut widgets = Widgets::new();
    let id = widgets.insert_button(Button::new("short", 10.0, 10.0, 100.0, 30.0));

    let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
    ctx.add_button(id);
    ctx.process_frame(&widgets);
    let before = ctx.color_vertices().to_vec();

    if let Some(button) = widgets.button_mut(id) {
        button.set_text("a considerably longer label \u{1F600}");
    }
    ctx.process_frame(&widgets);

    assert_eq!(ctx.color_vertices(), before.as_slice());
    assert!(ctx.color_vertices().iter().all(|v| v.color == [1.0, 1.0, 1.0]));
}

#[test]
fn six_texture_vertices_per_printable_character() {
    let labels = ["", "OK", "tab\there", "caf\u{e9}", "~ !\u{7f}\n"];

    for label in labels {
        let mut widgets = Widgets::new();
        let id = widgets.insert_button(Button::new(label, 0.0, 0.0, 200.0, 40.0));

        let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
        ctx.add_button(id);
        ctx.process_frame(&widgets);

        assert_eq!(
            ctx.texture_vertex_count(),
            6 * printable_count(label),
            "label {:?}",
            label
        );
    }
}

#[test]
fn windows_precede_buttons_in_color_stream() {
    let mut widgets = Widgets::new();
    let button = widgets.insert_button(Button::new("x", 0.0, 0.0, 10.0, 10.0));
    let window = widgets.insert_window(Window::new(0.0, 0.0, 10.0, 10.0).with_color(Color::BLACK));

    let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
    ctx.add_button(button);
    ctx.add_window(window);
    ctx.process_frame(&widgets);

    assert_eq!(ctx.color_vertices()[0].color, [0.0, 0.0, 0.0]);
    assert_eq!(ctx.color_vertices()[6].color, [1.0, 1.0, 1.0]);
}

#[test]
fn missing_font_renders_boxes_without_text() {
    let mut ctx = Context::new(
        "/nonexistent/modern-ui/Arial.ttf",
        ContextConfig::default(),
    );
    assert_eq!(ctx.error(), Some(ContextError::FontFileMissing));

    let mut widgets = Widgets::new();
    let id = widgets.insert_button(Button::new("Click me", 0.0, 0.0, 120.0, 32.0));
    ctx.add_button(id);
    ctx.process_frame(&widgets);

    assert_eq!(ctx.color_vertex_count(), 6);
    assert_eq!(ctx.texture_vertex_count(), 0);
}

#[test]
fn output_casts_to_flat_floats() {
    let mut widgets = Widgets::new();
    let id = widgets.insert_window(Window::new(1.0, 2.0, 3.0, 4.0));

    let mut ctx = Context::with_font(baked_font(), ContextConfig::default());
    ctx.add_window(id);
    ctx.process_frame(&widgets);

    let floats: &[f32] = bytemuck::cast_slice(ctx.color_vertices());
    assert_eq!(floats.len(), 6 * 5);
    assert_eq!(&floats[..5], &[1.0, 2.0, 1.0, 1.0, 1.0]);
}
