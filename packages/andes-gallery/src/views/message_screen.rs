//! Message gallery screen
//!
//! Shows a live message and a configuration panel bound to its setters.
//! The panel only touches the message when "Update" passes validation.

use andes_message::{
    ActionHandler, ButtonHierarchy, Message, MessageForm, Picker, PickerOption,
};
use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;

use crate::components::button::{Button, ButtonSize};
use crate::components::input::TextField;
use crate::components::message::{MessageEvent, MessageView};
use crate::components::picker::PickerField;
use crate::components::switch::Switch;
use crate::i18n::I18n;
use crate::keyboard::{
    ApplyConfig, Cancel, DismissMessage, ShowMessage, ToggleConfig, ToggleTheme,
    MESSAGE_SCREEN_CONTEXT,
};
use crate::theme::{self, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerKind {
    Type,
    Hierarchy,
}

/// Gallery screen for the message component
pub struct MessageScreen {
    focus_handle: FocusHandle,
    message_view: Entity<MessageView>,
    form: MessageForm,
    title_field: Entity<TextField>,
    body_field: Entity<TextField>,
    primary_field: Entity<TextField>,
    secondary_field: Entity<TextField>,
    open_picker: Option<PickerKind>,
    notice: Option<String>,
    action_handler: ActionHandler,
    _subscriptions: Vec<Subscription>,
}

impl MessageScreen {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let i18n = cx.global::<I18n>().clone();
        let sheet = theme::current_sheet(cx);

        let action_handler: ActionHandler = Rc::new(|message: &mut Message| {
            tracing::info!("Action pressed on message \"{}\"", message.title());
        });

        let message_view = cx.new(|cx| {
            let mut view = MessageView::new(sheet);
            let handler = action_handler.clone();
            view.update_message(cx, |message| {
                message
                    .set_title(i18n.t("message.default.title"))
                    .set_body(i18n.t("message.default.body"))
                    .set_primary_action(i18n.t("message.action.primary"), {
                        let handler = handler.clone();
                        move |message| handler(message)
                    })
                    .set_secondary_action(i18n.t("message.action.secondary"), move |message| {
                        handler(message)
                    });
            });
            view
        });

        let subscriptions = vec![cx.subscribe(
            &message_view,
            |this, _view, event: &MessageEvent, cx| this.on_message_event(*event, cx),
        )];

        let optional = i18n.t("message.field.placeholder");
        let title_field = cx.new(|cx| {
            let mut field = TextField::new("message-title-field", cx);
            field.set_placeholder(&optional);
            field
        });
        let body_field = cx.new(|cx| TextField::new("message-body-field", cx).multiline());
        let primary_field = cx.new(|cx| {
            let mut field = TextField::new("message-primary-field", cx);
            field.set_placeholder(&optional);
            field
        });
        let secondary_field = cx.new(|cx| {
            let mut field = TextField::new("message-secondary-field", cx);
            field.set_placeholder(&optional);
            field
        });

        Self {
            focus_handle: cx.focus_handle(),
            message_view,
            form: MessageForm::new(),
            title_field,
            body_field,
            primary_field,
            secondary_field,
            open_picker: None,
            notice: None,
            action_handler,
            _subscriptions: subscriptions,
        }
    }

    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_handle.focus(window);
    }

    fn on_message_event(&mut self, event: MessageEvent, cx: &mut Context<Self>) {
        match event {
            MessageEvent::ActionPressed(slot) => {
                tracing::debug!("Message action {:?} pressed", slot);
                self.notice = Some(cx.global::<I18n>().t("message.actions.pressedMsg"));
            }
            MessageEvent::Dismissed => {
                tracing::debug!("Message dismissed from the gallery");
            }
        }
        cx.notify();
    }

    // ------------------------------------------------------------------------
    // Configuration panel
    // ------------------------------------------------------------------------

    fn toggle_config(&mut self, cx: &mut Context<Self>) {
        let opened = {
            let view = self.message_view.read(cx);
            self.form.toggle_config(view.message())
        };
        if opened {
            self.push_form_to_fields(cx);
        }
        self.open_picker = None;
        cx.notify();
    }

    fn push_form_to_fields(&mut self, cx: &mut Context<Self>) {
        let fields = [
            (self.title_field.clone(), self.form.title.clone()),
            (self.body_field.clone(), self.form.body.clone()),
            (self.primary_field.clone(), self.form.primary_text.clone()),
            (self.secondary_field.clone(), self.form.secondary_text.clone()),
        ];
        for (field, text) in fields {
            field.update(cx, |field, cx| field.set_text(&text, cx));
        }
    }

    fn pull_fields_into_form(&mut self, cx: &mut Context<Self>) {
        self.form.title = self.title_field.read(cx).text().to_string();
        self.form.body = self.body_field.read(cx).text().to_string();
        self.form.primary_text = self.primary_field.read(cx).text().to_string();
        self.form.secondary_text = self.secondary_field.read(cx).text().to_string();
    }

    fn apply_config(&mut self, cx: &mut Context<Self>) {
        if !self.form.config_visible {
            return;
        }
        self.pull_fields_into_form(cx);

        let handler = self.action_handler.clone();
        let form = &mut self.form;
        let result = self.message_view.update(cx, |view, cx| {
            view.update_message(cx, |message| form.submit(message, handler))
        });

        match result {
            Ok(()) => {
                self.notice = None;
                tracing::debug!("Message updated from the configuration panel");
            }
            Err(err) => tracing::debug!("Configuration rejected: {}", err),
        }
        self.open_picker = None;
        cx.notify();
    }

    fn toggle_picker(&mut self, kind: PickerKind, cx: &mut Context<Self>) {
        self.open_picker = if self.open_picker == Some(kind) {
            None
        } else {
            Some(kind)
        };
        cx.notify();
    }

    fn select_row(&mut self, kind: PickerKind, row: usize, cx: &mut Context<Self>) {
        let selected = match kind {
            PickerKind::Type => self.form.select_type_row(row).map(|t| t.label()),
            PickerKind::Hierarchy => self.form.select_hierarchy_row(row).map(|h| h.label()),
        };
        match selected {
            Ok(label) => tracing::debug!("Picker {:?} set to {}", kind, label),
            Err(err) => tracing::warn!("Ignoring picker selection: {}", err),
        }
        self.open_picker = None;
        cx.notify();
    }

    fn toggle_dismissible(&mut self, cx: &mut Context<Self>) {
        self.form.dismissible = !self.form.dismissible;
        cx.notify();
    }

    // ------------------------------------------------------------------------
    // Message controls
    // ------------------------------------------------------------------------

    fn show_message(&mut self, cx: &mut Context<Self>) {
        self.message_view.update(cx, |view, cx| {
            view.update_message(cx, |message| {
                message.show();
            })
        });
        cx.notify();
    }

    fn dismiss_message(&mut self, cx: &mut Context<Self>) {
        self.message_view.update(cx, |view, cx| view.dismiss(cx));
    }

    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        if !theme::toggle_theme_mode(cx) {
            return;
        }
        theme::persist(cx);

        let sheet = theme::current_sheet(cx);
        self.message_view.update(cx, |view, cx| {
            view.update_message(cx, |message| {
                message.set_theme(sheet);
            })
        });
        cx.notify();
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        if self.open_picker.take().is_some() {
            cx.notify();
        } else if self.form.config_visible {
            self.toggle_config(cx);
        } else if self.notice.take().is_some() {
            cx.notify();
        }
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    fn render_header(&self, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        let i18n = cx.global::<I18n>();
        let sheet = theme::current_sheet(cx);

        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_xs()
                            .text_color(palette.text_muted)
                            .child(i18n.t("gallery.title")),
                    )
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(i18n.t("gallery.subtitle")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_sm()
                            .text_color(palette.text_muted)
                            .child(i18n.format("gallery.theme.current", &[("name", sheet.name)])),
                    )
                    .child(
                        Button::new(
                            "toggle-theme",
                            i18n.t("gallery.theme.toggle"),
                            palette.accent,
                            palette.text_on_accent,
                        )
                        .hierarchy(ButtonHierarchy::Transparent)
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(|this, _event, _window, cx| {
                            this.toggle_theme(cx);
                        })),
                    ),
            )
    }

    fn render_notice(&self, notice: String, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        let i18n = cx.global::<I18n>();

        div()
            .flex()
            .items_center()
            .justify_between()
            .px(px(16.0))
            .py(px(8.0))
            .rounded(px(6.0))
            .bg(palette.background_element)
            .border_1()
            .border_color(palette.border)
            .text_sm()
            .child(notice)
            .child(
                Button::new(
                    "close-notice",
                    i18n.t("message.actions.dismissNotice"),
                    palette.accent,
                    palette.text_on_accent,
                )
                .hierarchy(ButtonHierarchy::Transparent)
                .size(ButtonSize::Small)
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.notice = None;
                    cx.notify();
                })),
            )
    }

    fn render_field(
        &self,
        label: String,
        field: &Entity<TextField>,
        palette: Palette,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .child(div().text_xs().text_color(palette.text_muted).child(label))
            .child(field.clone())
    }

    fn render_picker<T: PickerOption>(
        &self,
        kind: PickerKind,
        id: &'static str,
        label: String,
        picker: &Picker<T>,
        palette: Palette,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        PickerField::new(id, label, picker, palette)
            .open(self.open_picker == Some(kind))
            .on_toggle(cx.listener(move |this, _event, _window, cx| {
                this.toggle_picker(kind, cx);
            }))
            .on_select(cx.listener(move |this, row: &usize, _window, cx| {
                this.select_row(kind, *row, cx);
            }))
    }

    fn render_config(&self, palette: Palette, cx: &Context<Self>) -> impl IntoElement {
        let i18n = cx.global::<I18n>();

        div()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .p(px(20.0))
            .rounded(px(12.0))
            .bg(palette.background_panel)
            .border_1()
            .border_color(palette.border)
            .child(self.render_field(i18n.t("message.field.title"), &self.title_field, palette))
            .child(self.render_field(i18n.t("message.field.body"), &self.body_field, palette))
            .child(self.render_field(
                i18n.t("message.field.primaryAction"),
                &self.primary_field,
                palette,
            ))
            .child(self.render_field(
                i18n.t("message.field.secondaryAction"),
                &self.secondary_field,
                palette,
            ))
            .child(
                Switch::new(
                    "message-dismissible-switch",
                    i18n.t("message.field.dismissible"),
                    self.form.dismissible,
                    palette,
                )
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.toggle_dismissible(cx);
                })),
            )
            .child(
                div()
                    .flex()
                    .gap(px(16.0))
                    .child(div().flex_1().child(self.render_picker(
                        PickerKind::Type,
                        "message-type-picker",
                        i18n.t("message.field.type"),
                        &self.form.type_picker,
                        palette,
                        cx,
                    )))
                    .child(div().flex_1().child(self.render_picker(
                        PickerKind::Hierarchy,
                        "message-hierarchy-picker",
                        i18n.t("message.field.hierarchy"),
                        &self.form.hierarchy_picker,
                        palette,
                        cx,
                    ))),
            )
            .when_some(self.form.error, |el, err| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(palette.error)
                        .child(i18n.t(err.key())),
                )
            })
            .child(
                Button::new(
                    "update-message",
                    i18n.t("message.button.updateConfig"),
                    palette.accent,
                    palette.text_on_accent,
                )
                .hierarchy(ButtonHierarchy::Loud)
                .size(ButtonSize::Large)
                .full_width()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.apply_config(cx);
                })),
            )
    }
}

impl Render for MessageScreen {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = theme::palette(cx);
        let i18n = cx.global::<I18n>();
        let message_visible = self.message_view.read(cx).message().is_visible();

        let (config_label, config_hierarchy) = if self.form.config_visible {
            (i18n.t("message.button.hideConfig"), ButtonHierarchy::Transparent)
        } else {
            (i18n.t("message.button.changeConfig"), ButtonHierarchy::Quiet)
        };

        div()
            .id("message-screen")
            .key_context(MESSAGE_SCREEN_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &ToggleConfig, _window, cx| this.toggle_config(cx)))
            .on_action(cx.listener(|this, _: &ApplyConfig, _window, cx| this.apply_config(cx)))
            .on_action(cx.listener(|this, _: &ShowMessage, _window, cx| this.show_message(cx)))
            .on_action(cx.listener(|this, _: &DismissMessage, _window, cx| {
                this.dismiss_message(cx)
            }))
            .on_action(cx.listener(|this, _: &ToggleTheme, _window, cx| this.toggle_theme(cx)))
            .on_action(cx.listener(|this, _: &Cancel, _window, cx| this.cancel(cx)))
            .size_full()
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .p(px(24.0))
            .bg(palette.background)
            .text_color(palette.text)
            .child(self.render_header(palette, cx))
            .child(self.message_view.clone())
            .when(!message_visible, |el| {
                el.child(
                    div().flex().child(
                        Button::new(
                            "show-message-again",
                            i18n.t("message.button.showAgain"),
                            palette.accent,
                            palette.text_on_accent,
                        )
                        .hierarchy(ButtonHierarchy::Transparent)
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(|this, _event, _window, cx| {
                            this.show_message(cx);
                        })),
                    ),
                )
            })
            .when_some(self.notice.clone(), |el, notice| {
                el.child(self.render_notice(notice, palette, cx))
            })
            .child(
                div().flex().child(
                    Button::new(
                        "toggle-config",
                        config_label,
                        palette.accent,
                        palette.text_on_accent,
                    )
                    .hierarchy(config_hierarchy)
                    .size(ButtonSize::Medium)
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.toggle_config(cx);
                    })),
                ),
            )
            .when(self.form.config_visible, |el| {
                el.child(self.render_config(palette, cx))
            })
    }
}
