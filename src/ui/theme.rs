//! Light/dark theme
//!
//! The chosen [`ThemeMode`] lives in browser storage under `vendoo-theme`.
//! `Auto` follows the `prefers-color-scheme` media query. The `dark` class on
//! `<html>` is what the stylesheet keys off.

use derive_more::Display;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::{BrowserStorage, KeyValueStorage};

const THEME_STORAGE_KEY: &str = "vendoo-theme";
#[cfg(not(feature = "ssr"))]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum ThemeMode {
    #[default]
    #[display("auto")]
    Auto,
    #[display("dark")]
    Dark,
    #[display("light")]
    Light,
}

impl ThemeMode {
    /// Unknown values fall back to `Auto`
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "Automatic",
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Mode the header toggle switches to, given whether the page is dark now
    pub fn toggled(is_dark: bool) -> Self {
        if is_dark { ThemeMode::Light } else { ThemeMode::Dark }
    }

    /// Effective darkness for a given system preference
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_prefers_dark,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    /// Effective darkness, `Auto` resolved against the system preference
    pub is_dark: Memo<bool>,
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Switch mode and remember it
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        save_mode(&BrowserStorage, mode);
    }

    pub fn toggle(&self) {
        self.set_mode(ThemeMode::toggled(self.is_dark.get_untracked()));
    }
}

fn load_mode(storage: &dyn KeyValueStorage) -> ThemeMode {
    match storage.get_item(THEME_STORAGE_KEY) {
        Ok(Some(value)) => ThemeMode::parse(&value),
        Ok(None) => ThemeMode::Auto,
        Err(e) => {
            warn!("Failed to read theme preference: {}", e);
            ThemeMode::Auto
        }
    }
}

fn save_mode(storage: &dyn KeyValueStorage, mode: ThemeMode) {
    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, &mode.to_string()) {
        warn!("Failed to save theme preference: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_dark_class(dark: bool) {
    let Some(root) = leptos::web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
}

/// Watch the OS colour scheme; returns the current preference.
#[cfg(not(feature = "ssr"))]
fn watch_system_scheme(on_change: impl Fn(bool) + 'static) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(Ok(Some(query))) = leptos::web_sys::window().map(|w| w.match_media(DARK_SCHEME_QUERY))
    else {
        return false;
    };
    let listener = Closure::<dyn Fn(leptos::web_sys::MediaQueryListEvent)>::new(
        move |event: leptos::web_sys::MediaQueryListEvent| on_change(event.matches()),
    );
    let _ = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    // Kept for the lifetime of the page
    listener.forget();
    query.matches()
}

/// Provide theme context to the application
///
/// Server and first client render are both light with mode `Auto`; stored
/// and system preferences are applied after hydration.
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::Auto);
    let system_prefers_dark = RwSignal::new(false);
    let is_dark = Memo::new(move |_| mode.get().is_dark(system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            mode.set(load_mode(&BrowserStorage));
            system_prefers_dark.set(watch_system_scheme(move |dark| system_prefers_dark.set(dark)));
        });
        Effect::new(move |_| set_dark_class(is_dark.get()));
    }

    provide_context(ctx);

    ctx
}

pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Sun/moon button that flips the theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
            on:click=move |_| theme.toggle()
            title=move || format!("Theme: {}", theme.mode.get().display_name())
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                  d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z" />
                        </svg>
                    }
                    .into_any()
                } else {
                    view! {
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                  d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z" />
                        </svg>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStorage;

    #[test]
    fn test_mode_survives_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(load_mode(&storage), ThemeMode::Auto);

        for mode in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Auto] {
            save_mode(&storage, mode);
            assert_eq!(load_mode(&storage), mode);
        }
        assert_eq!(storage.raw(THEME_STORAGE_KEY).as_deref(), Some("auto"));
    }

    #[test]
    fn test_unknown_stored_mode_is_auto() {
        let storage = MemoryStorage::new();
        storage.set_item(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(load_mode(&storage), ThemeMode::Auto);
    }

    #[test]
    fn test_auto_follows_system() {
        assert!(ThemeMode::Auto.is_dark(true));
        assert!(!ThemeMode::Auto.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }

    #[test]
    fn test_toggle_flips_effective_darkness() {
        assert_eq!(ThemeMode::toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::toggled(false), ThemeMode::Dark);
    }
}
