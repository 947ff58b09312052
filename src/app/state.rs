use leptos::prelude::*;

use crate::{
    content::initial_section,
    interaction::{CursorPoint, CursorState, InteractionConfig},
    theme::ThemePreference,
};

/// Reactive state shared by the layout shell and the viewport controller.
/// Views subscribe by reading the signals.
#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: RwSignal<ThemePreference>,
    pub active_section: RwSignal<&'static str>,
    pub show_scroll_top: RwSignal<bool>,
    pub nav_scrolled: RwSignal<bool>,
    pub cursor: RwSignal<CursorState>,
    pub trail: RwSignal<Vec<CursorPoint>>,
}

impl AppState {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            theme: RwSignal::new(ThemePreference::default()),
            active_section: RwSignal::new(initial_section()),
            show_scroll_top: RwSignal::new(false),
            nav_scrolled: RwSignal::new(false),
            cursor: RwSignal::new(CursorState::default()),
            trail: RwSignal::new(vec![CursorPoint::default(); config.trail_len]),
        }
    }
}

pub fn provide_app_state(config: InteractionConfig) -> AppState {
    let state = AppState::new(&config);
    provide_context(config);
    provide_context(state);
    state
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

pub fn use_interaction_config() -> InteractionConfig {
    expect_context::<InteractionConfig>()
}

/// Writes `value` only when it differs, so subscribers don't rerun on every
/// scroll tick.
pub fn set_if_changed<T>(signal: RwSignal<T>, value: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}
