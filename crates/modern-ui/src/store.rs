use slotmap::{new_key_type, SlotMap};

use crate::widget::{Button, Window};

new_key_type! {
    /// Handle to a [`Window`] stored in a [`Widgets`] table.
    pub struct WindowId;

    /// Handle to a [`Button`] stored in a [`Widgets`] table.
    pub struct ButtonId;
}

/// Caller-owned storage for every widget.
///
/// The [`Context`](crate::Context) only keeps handles into this table, so widgets can be
/// mutated freely between frames while they stay registered. Removing a widget that is still
/// registered leaves a stale handle behind; the context skips it.
#[derive(Debug, Default)]
pub struct Widgets {
    windows: SlotMap<WindowId, Window>,
    buttons: SlotMap<ButtonId, Button>,
}

impl Widgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_window(&mut self, window: Window) -> WindowId {
        self.windows.insert(window)
    }

    pub fn insert_button(&mut self, button: Button) -> ButtonId {
        self.buttons.insert(button)
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id)
    }

    pub fn button_mut(&mut self, id: ButtonId) -> Option<&mut Button> {
        self.buttons.get_mut(id)
    }

    pub fn remove_window(&mut self, id: WindowId) -> Option<Window> {
        self.windows.remove(id)
    }

    pub fn remove_button(&mut self, id: ButtonId) -> Option<Button> {
        self.buttons.remove(id)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }
}
