use leptos::prelude::*;

use crate::{
    content::{SECTIONS, OWNER},
    interaction::{cursor::trail_opacities, CursorMode},
    theme::ThemePreference,
};

use super::{
    controller::{scroll_to_section, scroll_to_top, use_viewport_controller},
    state::{use_app_state, use_interaction_config},
    theme::use_theme,
};

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Navigation shell around every page. Owns the viewport controller, so
/// its listeners live exactly as long as the layout is mounted.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let state = use_app_state();
    let toggle_theme = use_theme(state);
    use_viewport_controller(state, use_interaction_config());

    view! {
        <CursorLayer />
        <nav class="navbar" class:scrolled=move || state.nav_scrolled.get()>
            <div class="container navbar-inner">
                <a
                    href="#home"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_top();
                    }
                >
                    "Portfolio"
                </a>
                <ul class="nav-links">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link"
                                        class:active=move || state.active_section.get() == id
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(id);
                                        }
                                    >
                                        <i class=section.icon></i>
                                        <span>{section.label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="theme-toggle"
                    aria-label=move || state.theme.get().toggle_label()
                    aria-pressed=move || (state.theme.get() == ThemePreference::Dark).to_string()
                    on:click=move |_| toggle_theme()
                >
                    {move || match state.theme.get() {
                        ThemePreference::Light => "◐",
                        ThemePreference::Dark => "◑",
                    }}
                </button>
            </div>
        </nav>
        <main>{children()}</main>
        <button
            class="scroll-top"
            class:visible=move || state.show_scroll_top.get()
            aria-label="Scroll to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
        <footer class="footer">
            <div class="container">
                <p>{format!("© {OWNER}. Built with Rust and Leptos.")}</p>
                <p class="footer-build">{format!("Last built {BUILD_TIME}")}</p>
            </div>
        </footer>
    }
}

#[component]
fn CursorLayer() -> impl IntoView {
    let state = use_app_state();
    let config = use_interaction_config();
    let opacities = trail_opacities(&config);

    view! {
        <div class="cursor-layer" aria-hidden="true">
            <div
                class="cursor"
                class:emphasized=move || state.cursor.get().mode == CursorMode::Emphasized
                style=move || {
                    let c = state.cursor.get();
                    format!(
                        "transform: translate3d({}px, {}px, 0) translate(-50%, -50%) scale({})",
                        c.position.x,
                        c.position.y,
                        c.scale(&config),
                    )
                }
            ></div>
            {opacities
                .into_iter()
                .enumerate()
                .map(|(i, opacity)| {
                    view! {
                        <div
                            class="cursor-trail"
                            style=move || {
                                let p = state.trail.with(|t| t.get(i).copied().unwrap_or_default());
                                format!(
                                    "opacity: {opacity}; transform: translate3d({}px, {}px, 0) translate(-50%, -50%)",
                                    p.x,
                                    p.y,
                                )
                            }
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
