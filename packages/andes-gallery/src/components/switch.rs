//! On/off switch

use gpui::prelude::*;
use gpui::*;

use crate::theme::Palette;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    label: SharedString,
    on: bool,
    palette: Palette,
    on_click: Option<ClickHandler>,
}

impl Switch {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        on: bool,
        palette: Palette,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on,
            palette,
            on_click: None,
        }
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .when_some(self.on_click, |el, handler| {
                el.on_click(move |event, window, cx| handler(event, window, cx))
            })
            .child(div().text_sm().text_color(palette.text).child(self.label))
            .child(
                div()
                    .w(px(36.0))
                    .h(px(20.0))
                    .p(px(2.0))
                    .rounded_full()
                    .bg(if self.on { palette.accent } else { palette.border })
                    .flex()
                    .when(self.on, |el| el.justify_end())
                    .child(
                        div()
                            .w(px(16.0))
                            .h(px(16.0))
                            .rounded_full()
                            .bg(palette.text_on_accent),
                    ),
            )
    }
}
