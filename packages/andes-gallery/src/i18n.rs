use gpui::Global;
use serde_json::Value;
use std::collections::HashMap;
use std::env;

#[derive(Clone, Debug)]
pub struct I18n {
    locale: String,
    messages: HashMap<String, String>,
}

impl I18n {
    pub fn new(locale: &str) -> Self {
        let locale = normalize_locale(locale).unwrap_or_else(|| "en".to_string());
        let messages = load_messages(&locale);
        Self { locale, messages }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.t(key);
        for (param, replacement) in params {
            value = value.replace(&format!("{{{param}}}"), replacement);
        }
        value
    }
}

impl Global for I18n {}

fn normalize_locale(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed
        .split('.')
        .next()
        .unwrap_or(trimmed)
        .replace('-', "_")
        .to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

fn detect_locale() -> String {
    let candidates = ["LC_ALL", "LC_MESSAGES", "LANG"];
    for key in candidates {
        if let Some(locale) = env::var(key).ok().as_deref().and_then(normalize_locale) {
            return locale;
        }
    }
    "en".to_string()
}

fn parse_table(raw: &str) -> HashMap<String, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
        _ => HashMap::new(),
    }
}

fn load_messages(locale: &str) -> HashMap<String, String> {
    let mut messages = parse_table(include_str!("../i18n/en.json"));

    let localized = if locale.starts_with("es") {
        Some(include_str!("../i18n/es.json"))
    } else if locale.starts_with("pt") {
        Some(include_str!("../i18n/pt.json"))
    } else {
        None
    };

    // Missing translations fall back to English
    if let Some(raw) = localized {
        messages.extend(parse_table(raw));
    }
    messages
}

pub fn init(cx: &mut gpui::App, locale: Option<&str>) {
    let locale = locale
        .and_then(normalize_locale)
        .unwrap_or_else(detect_locale);
    let i18n = I18n::new(&locale);
    tracing::debug!("Locale set to {}", i18n.locale());
    cx.set_global(i18n);
}
