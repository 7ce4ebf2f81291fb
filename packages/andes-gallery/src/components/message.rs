//! Message banner view
//!
//! Wraps an `andes_message::Message` in a GPUI entity. Every mutation goes
//! through `update_message`, which re-renders the banner.

use andes_message::{ActionAppearance, ActionSlot, Message, MessageAppearance, StyleSheet};
use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;

use crate::components::button::{Button, ButtonSize};
use crate::theme::hsla;

/// Events emitted by the message view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEvent {
    ActionPressed(ActionSlot),
    Dismissed,
}

/// Message banner view
pub struct MessageView {
    message: Message,
}

impl MessageView {
    pub fn new(theme: Rc<StyleSheet>) -> Self {
        Self {
            message: Message::new(theme),
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Mutate the message and re-render.
    pub fn update_message<R>(
        &mut self,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut Message) -> R,
    ) -> R {
        let result = f(&mut self.message);
        cx.notify();
        result
    }

    fn press(&mut self, slot: ActionSlot, cx: &mut Context<Self>) {
        if self.message.trigger(slot) {
            cx.emit(MessageEvent::ActionPressed(slot));
        }
        cx.notify();
    }

    pub fn dismiss(&mut self, cx: &mut Context<Self>) {
        if self.message.dismiss() {
            cx.emit(MessageEvent::Dismissed);
            cx.notify();
        }
    }

    fn render_action(
        &self,
        slot: ActionSlot,
        action: ActionAppearance,
        on_tint: Hsla,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let id = match slot {
            ActionSlot::Primary => "message-primary-action",
            ActionSlot::Secondary => "message-secondary-action",
        };

        Button::new(id, action.label, hsla(action.tint), on_tint)
            .hierarchy(action.hierarchy)
            .size(ButtonSize::Medium)
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.press(slot, cx);
            }))
    }

    fn render_banner(&self, appearance: MessageAppearance, cx: &Context<Self>) -> Stateful<Div> {
        let on_tint = hsla(self.message.theme().text_on_accent);
        let has_actions =
            appearance.primary_action.is_some() || appearance.secondary_action.is_some();

        div()
            .id("andes-message")
            .w_full()
            .flex()
            .gap(px(12.0))
            .p(px(16.0))
            .rounded(px(6.0))
            .bg(hsla(appearance.background))
            .text_color(hsla(appearance.text_color))
            .when_some(appearance.accent, |el, accent| {
                el.border_l_4().border_color(hsla(accent))
            })
            // Icon
            .child(
                div()
                    .flex_none()
                    .w(px(20.0))
                    .h(px(20.0))
                    .rounded_full()
                    .bg(hsla(appearance.icon_background))
                    .text_color(hsla(appearance.icon_color))
                    .text_xs()
                    .font_weight(FontWeight::BOLD)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(appearance.icon.glyph()),
            )
            // Content
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(4.0))
                    .when(appearance.show_title, |el| {
                        el.child(
                            div()
                                .font_weight(FontWeight::SEMIBOLD)
                                .child(appearance.title.clone()),
                        )
                    })
                    .child(div().text_sm().min_h(px(18.0)).child(appearance.body.clone()))
                    .when(has_actions, |el| {
                        el.child(
                            div()
                                .flex()
                                .gap(px(8.0))
                                .mt(px(8.0))
                                .when_some(appearance.primary_action.clone(), |el, action| {
                                    el.child(self.render_action(
                                        ActionSlot::Primary,
                                        action,
                                        on_tint,
                                        cx,
                                    ))
                                })
                                .when_some(appearance.secondary_action.clone(), |el, action| {
                                    el.child(self.render_action(
                                        ActionSlot::Secondary,
                                        action,
                                        on_tint,
                                        cx,
                                    ))
                                }),
                        )
                    }),
            )
            // Dismiss
            .when(appearance.dismiss_visible, |el| {
                el.child(
                    div()
                        .id("andes-message-dismiss")
                        .flex_none()
                        .w(px(20.0))
                        .h(px(20.0))
                        .flex()
                        .items_center()
                        .justify_center()
                        .rounded(px(4.0))
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.7))
                        .on_click(cx.listener(|this, _event, _window, cx| {
                            this.dismiss(cx);
                        }))
                        .child("×"),
                )
            })
    }
}

impl EventEmitter<MessageEvent> for MessageView {}

impl Render for MessageView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let appearance = self.message.appearance();
        if !appearance.visible {
            return div().into_any_element();
        }

        self.render_banner(appearance, cx).into_any_element()
    }
}
