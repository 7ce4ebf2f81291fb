//! Button component
//!
//! Andes buttons come in three hierarchies and three sizes. The tint is the
//! fill of a loud button and the label color of the other two.

use andes_message::ButtonHierarchy;
use gpui::prelude::*;
use gpui::*;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn height(self) -> Pixels {
        match self {
            ButtonSize::Small => px(24.0),
            ButtonSize::Medium => px(32.0),
            ButtonSize::Large => px(48.0),
        }
    }

    fn padding_x(self) -> Pixels {
        match self {
            ButtonSize::Small => px(8.0),
            ButtonSize::Medium => px(16.0),
            ButtonSize::Large => px(24.0),
        }
    }
}

/// Button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    hierarchy: ButtonHierarchy,
    size: ButtonSize,
    tint: Hsla,
    on_tint: Hsla,
    full_width: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        tint: Hsla,
        on_tint: Hsla,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hierarchy: ButtonHierarchy::Loud,
            size: ButtonSize::Medium,
            tint,
            on_tint,
            full_width: false,
            on_click: None,
        }
    }

    pub fn hierarchy(mut self, hierarchy: ButtonHierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text_color) = match self.hierarchy {
            ButtonHierarchy::Loud => (self.tint, self.on_tint),
            ButtonHierarchy::Quiet => (self.tint.opacity(0.12), self.tint),
            ButtonHierarchy::Transparent => (Hsla::transparent_black(), self.tint),
        };
        let hover_bg = match self.hierarchy {
            ButtonHierarchy::Loud => self.tint.opacity(0.9),
            _ => self.tint.opacity(0.2),
        };

        div()
            .id(self.id)
            .h(self.size.height())
            .px(self.size.padding_x())
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(6.0))
            .bg(bg)
            .text_color(text_color)
            .font_weight(FontWeight::SEMIBOLD)
            .when(self.size == ButtonSize::Small, |el| el.text_xs())
            .when(self.size != ButtonSize::Small, |el| el.text_sm())
            .when(self.full_width, |el| el.w_full())
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .when_some(self.on_click, |el, handler| {
                el.on_click(move |event, window, cx| handler(event, window, cx))
            })
            .child(self.label)
    }
}
