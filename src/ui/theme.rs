//! Theme context for dark/light mode
//!
//! Initial mode comes from localStorage, falling back to the system
//! prefers-color-scheme. The effective mode is applied as a `dark` class on
//! the document element.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

const THEME_STORAGE_KEY: &str = "emoflow-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Reactive theme state shared through context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.mode.set(next);
        persist_theme(next);
        apply_theme_class(next);
    }

    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

fn apply_theme_class(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(html) = document.document_element() {
                let class_list = html.class_list();
                if mode == ThemeMode::Dark {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

fn load_initial_theme() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                    return ThemeMode::from_str(&value);
                }
            }
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                if media_query.matches() {
                    return ThemeMode::Dark;
                }
            }
        }
    }
    ThemeMode::Light
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let initial = load_initial_theme();
    let ctx = ThemeContext {
        mode: RwSignal::new(initial),
    };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            apply_theme_class(ctx.mode.get());
        });
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
