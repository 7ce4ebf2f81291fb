//! Text field component
//!
//! A focusable text input with placeholder support. Multi-line fields keep
//! Enter for new lines.

use gpui::prelude::*;
use gpui::*;

use crate::theme;

/// Text field component
pub struct TextField {
    id: SharedString,
    focus_handle: FocusHandle,
    text: String,
    cursor_position: usize,
    placeholder: String,
    multiline: bool,
}

impl TextField {
    pub fn new(id: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            focus_handle: cx.focus_handle(),
            text: String::new(),
            cursor_position: 0,
            placeholder: String::new(),
            multiline: false,
        }
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    pub fn set_text(&mut self, text: &str, cx: &mut Context<Self>) {
        self.text = text.to_string();
        self.cursor_position = self.text.len();
        cx.notify();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn insert_char(&mut self, c: char, cx: &mut Context<Self>) {
        self.text.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        cx.notify();
    }

    fn insert_text(&mut self, text: &str, cx: &mut Context<Self>) {
        self.text.insert_str(self.cursor_position, text);
        self.cursor_position += text.len();
        cx.notify();
    }

    fn backspace(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position == 0 {
            return;
        }
        let prev_char_boundary = self.text[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.remove(prev_char_boundary);
        self.cursor_position = prev_char_boundary;
        cx.notify();
    }

    fn delete(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position >= self.text.len() {
            return;
        }
        self.text.remove(self.cursor_position);
        cx.notify();
    }

    fn move_left(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position > 0 {
            self.cursor_position = self.text[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            cx.notify();
        }
    }

    fn move_right(&mut self, cx: &mut Context<Self>) {
        if self.cursor_position < self.text.len() {
            self.cursor_position = self.text[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.text.len());
            cx.notify();
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let modifiers = event.keystroke.modifiers;

        match event.keystroke.key.as_str() {
            "backspace" => self.backspace(cx),
            "delete" => self.delete(cx),
            "left" => self.move_left(cx),
            "right" => self.move_right(cx),
            "home" => {
                self.cursor_position = 0;
                cx.notify();
            }
            "end" => {
                self.cursor_position = self.text.len();
                cx.notify();
            }
            // Plain Enter only breaks lines; modified Enter is left to key bindings
            "enter" => {
                if self.multiline && !modifiers.control && !modifiers.platform {
                    self.insert_char('\n', cx);
                }
            }
            key => {
                if modifiers.control || modifiers.alt || modifiers.platform {
                    return;
                }
                if let Some(key_char) = &event.keystroke.key_char {
                    self.insert_text(key_char, cx);
                } else if key == "space" {
                    self.insert_char(' ', cx);
                } else if let Some(c) = key.chars().next().filter(|_| key.chars().count() == 1) {
                    self.insert_char(c, cx);
                }
            }
        }
    }
}

impl Render for TextField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = theme::palette(cx);
        let is_focused = self.focus_handle.is_focused(window);

        let content = if self.text.is_empty() {
            div()
                .flex()
                .when(is_focused, |el| {
                    el.child(div().w(px(2.0)).h(px(18.0)).bg(palette.accent))
                })
                .child(div().text_color(palette.text_muted).child(self.placeholder.clone()))
        } else {
            let (before, after) = self.text.split_at(self.cursor_position);
            div()
                .flex()
                .flex_wrap()
                .child(div().child(before.to_string()))
                .when(is_focused, |el| {
                    el.child(div().w(px(2.0)).h(px(18.0)).bg(palette.accent))
                })
                .child(div().child(after.to_string()))
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .w_full()
            .min_h(px(if self.multiline { 72.0 } else { 36.0 }))
            .px(px(12.0))
            .py(px(8.0))
            .rounded(px(6.0))
            .bg(palette.background_element)
            .border_1()
            .border_color(if is_focused { palette.border_active } else { palette.border })
            .text_color(palette.text)
            .text_sm()
            .cursor_text()
            .on_click(cx.listener(|this, _event, window, cx| {
                this.focus_handle.focus(window);
            }))
            .on_key_down(cx.listener(|this, event, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .child(content)
    }
}

impl Focusable for TextField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
