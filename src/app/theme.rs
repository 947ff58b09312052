use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{
    load_theme, save_theme, PreferenceStore, ThemePreference, THEME_ATTR, THEME_STORAGE_KEY,
};

use super::state::AppState;

/// `localStorage` as seen through leptos-use. An empty string means nothing
/// has been stored yet.
#[derive(Clone, Copy)]
struct LocalStore {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl PreferenceStore for LocalStore {
    fn load(&self, _key: &str) -> Option<String> {
        let value = self.value.get_untracked();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn store(&mut self, _key: &str, value: &str) {
        self.set_value.set(value.to_string());
    }
}

fn apply_theme_attribute(theme: ThemePreference) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.set_attribute(THEME_ATTR, theme.as_str()) {
        log::warn!("couldn't set {THEME_ATTR}: {e:?}");
    }
}

/// Resolves the theme once on start-up and returns the toggle action.
///
/// Storage, state and the document attribute are all written inside the
/// toggle call, so they agree as soon as it returns.
pub fn use_theme(state: AppState) -> impl Fn() + Copy + 'static {
    let (value, set_value, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let store = LocalStore { value, set_value };

    Effect::watch(
        || (),
        move |_, _, _| {
            let theme = load_theme(&store, prefers_dark.get_untracked());
            log::debug!("theme resolved to {theme}");
            state.theme.set(theme);
            apply_theme_attribute(theme);
        },
        true,
    );

    move || {
        let theme = state.theme.get_untracked().toggled();
        let mut store = store;
        save_theme(&mut store, theme);
        state.theme.set(theme);
        apply_theme_attribute(theme);
    }
}
