use dioxus::logger::tracing::warn;
use dioxus::{document, prelude::*};
use web_sys::window;

const STORAGE_KEY: &str = "smartix-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Light,
  Dark,
}

impl Theme {
  pub fn as_str(&self) -> &'static str {
    match self {
      Theme::Light => "light",
      Theme::Dark => "dark",
    }
  }

  pub fn toggled(&self) -> Theme {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }
}

/// App-wide theme flag, provided once at the root instead of living in a
/// global. Components read or toggle it through this context.
#[derive(Clone, Copy)]
pub struct ThemeState {
  pub theme: Signal<Theme>,
}

pub fn load_theme() -> Theme {
  let stored = window()
    .and_then(|w| w.local_storage().ok().flatten())
    .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

  match stored.as_deref() {
    Some("dark") => Theme::Dark,
    _ => Theme::Light,
  }
}

pub fn store_theme(theme: Theme) {
  if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
    if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
      warn!("failed to persist theme preference: {:?}", e);
    }
  }
}

pub fn apply_theme(theme: Theme) {
  document::eval(&format!(
    r#"document.documentElement.setAttribute("data-theme", "{}");"#,
    theme.as_str()
  ));
}
