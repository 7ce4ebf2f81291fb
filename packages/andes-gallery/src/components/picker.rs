//! Picker field component
//!
//! Shows the selected option of an `andes_message::Picker` and, when open,
//! one clickable row per option.

use andes_message::{Picker, PickerOption};
use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;

use crate::theme::{with_alpha, Palette};

type ToggleHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;
type SelectHandler = Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>;

/// Picker field component
#[derive(IntoElement)]
pub struct PickerField {
    id: SharedString,
    label: SharedString,
    value: SharedString,
    rows: Vec<SharedString>,
    selected_row: usize,
    open: bool,
    palette: Palette,
    on_toggle: Option<ToggleHandler>,
    on_select: Option<SelectHandler>,
}

impl PickerField {
    pub fn new<T: PickerOption>(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        picker: &Picker<T>,
        palette: Palette,
    ) -> Self {
        let rows = (0..picker.row_count())
            .filter_map(|row| picker.title_for_row(row))
            .map(SharedString::from)
            .collect();

        Self {
            id: id.into(),
            label: label.into(),
            value: picker.display_text().into(),
            rows,
            selected_row: picker.selected_row(),
            open: false,
            palette,
            on_toggle: None,
            on_select: None,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn on_toggle(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for PickerField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;
        let id = self.id.clone();

        div()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .child(
                div()
                    .text_xs()
                    .text_color(palette.text_muted)
                    .child(self.label),
            )
            .child(
                div()
                    .id(SharedString::from(format!("{id}-field")))
                    .flex()
                    .items_center()
                    .justify_between()
                    .h(px(36.0))
                    .px(px(12.0))
                    .rounded(px(6.0))
                    .bg(palette.background_element)
                    .border_1()
                    .border_color(if self.open { palette.border_active } else { palette.border })
                    .text_sm()
                    .text_color(palette.text)
                    .cursor_pointer()
                    .when_some(self.on_toggle, |el, handler| {
                        el.on_click(move |event, window, cx| handler(event, window, cx))
                    })
                    .child(self.value)
                    .child(
                        div()
                            .text_color(palette.text_muted)
                            .child(if self.open { "▴" } else { "▾" }),
                    ),
            )
            .when(self.open, |el| {
                let on_select = self.on_select.clone();
                el.child(
                    div()
                        .flex()
                        .flex_col()
                        .py(px(4.0))
                        .rounded(px(6.0))
                        .bg(palette.background_element)
                        .border_1()
                        .border_color(palette.border)
                        .shadow_md()
                        .children(self.rows.into_iter().enumerate().map(move |(row, title)| {
                            let is_selected = row == self.selected_row;
                            let on_select = on_select.clone();
                            div()
                                .id(SharedString::from(format!("{id}-row-{row}")))
                                .px(px(12.0))
                                .py(px(6.0))
                                .text_sm()
                                .text_color(if is_selected { palette.accent } else { palette.text })
                                .when(is_selected, |el| el.bg(with_alpha(palette.accent, 0.12)))
                                .cursor_pointer()
                                .hover(move |s| s.bg(with_alpha(palette.accent, 0.08)))
                                .when_some(on_select, move |el, handler| {
                                    el.on_click(move |_event, window, cx| handler(&row, window, cx))
                                })
                                .child(title)
                        })),
                )
            })
    }
}
