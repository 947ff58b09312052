use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_raf_fn, use_window,
    UseEventListenerOptions, UseRafFnCallbackArgs,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};

use crate::{
    content::SECTIONS,
    interaction::{
        parallax::{PARALLAX_ATTR, PARALLAX_PROPERTY},
        CursorPoint, InteractionConfig, ParallaxEngine, ScrollTracker, SectionGeometry,
        TargetInfo, TrailScheduler,
    },
};

use super::state::{set_if_changed, AppState};

// DOM reads and writes only. The decisions they feed (active section,
// parallax offsets, hover kind, trail timing) live in `crate::interaction`
// and are tested there.

fn measure_sections() -> Vec<SectionGeometry<'static>> {
    let doc = document();
    SECTIONS
        .iter()
        .filter_map(|s| {
            let el = doc.get_element_by_id(s.id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionGeometry {
                id: s.id,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

fn apply_parallax(config: &InteractionConfig) {
    let engine = ParallaxEngine::new(config);
    let Ok(nodes) = document().query_selector_all(&format!("[{PARALLAX_ATTR}]")) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(tag) = el.get_attribute(PARALLAX_ATTR) else {
            continue;
        };
        let top = el.get_bounding_client_rect().top();
        if let Some(offset) = engine.offset_for_tag(&tag, top) {
            if let Err(e) = el
                .style()
                .set_property(PARALLAX_PROPERTY, &format!("{offset:.3}"))
            {
                log::warn!("couldn't set {PARALLAX_PROPERTY}: {e:?}");
            }
        }
    }
}

fn target_info(el: &Element) -> TargetInfo {
    let class_list = el.class_list();
    let classes = (0..class_list.length())
        .filter_map(|i| class_list.item(i))
        .collect();
    let cursor = window()
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("cursor").ok());
    TargetInfo {
        tag: el.tag_name().to_ascii_lowercase(),
        classes,
        cursor,
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Wires scroll, resize and pointer events to the interaction policies.
///
/// Every listener and the frame loop belong to the calling component's
/// owner; leptos-use removes them when that owner is disposed.
pub fn use_viewport_controller(state: AppState, config: InteractionConfig) {
    let trail = StoredValue::new(TrailScheduler::new(&config));
    let config = StoredValue::new(config);

    let refresh_scroll = move || {
        let scroll_y = window().scroll_y().unwrap_or_default();
        let sections = measure_sections();
        let current = state.active_section.get_untracked();
        let Some(snapshot) = config
            .try_with_value(|c| ScrollTracker::new(c).snapshot(scroll_y, &sections, current))
        else {
            return;
        };
        if snapshot.active != current {
            log::debug!("active section: {}", snapshot.active);
            state.active_section.set(snapshot.active);
        }
        set_if_changed(state.show_scroll_top, snapshot.show_scroll_top);
        set_if_changed(state.nav_scrolled, snapshot.nav_scrolled);
    };
    let refresh_parallax = move || {
        config.try_with_value(apply_parallax);
    };

    let passive = UseEventListenerOptions::default().passive(true);
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            refresh_scroll();
            refresh_parallax();
        },
        passive,
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| refresh_parallax());

    let _ = use_event_listener(use_window(), ev::mousemove, move |e: MouseEvent| {
        let point = CursorPoint::new(f64::from(e.client_x()), f64::from(e.client_y()));
        state.cursor.update(|c| c.move_to(point));
        trail.try_update_value(|t| t.push_move(e.time_stamp(), point));
    });

    let _ = use_event_listener(use_window(), ev::mouseover, move |e: MouseEvent| {
        let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let info = target_info(&el);
        let Some(kind) = config.try_with_value(|c| c.pointer_targets.classify(&info)) else {
            return;
        };
        state.cursor.update(|c| {
            c.hover(kind);
        });
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let moved = trail
            .try_update_value(|t| t.advance(args.timestamp).then(|| t.positions().to_vec()))
            .flatten();
        if let Some(positions) = moved {
            state.trail.set(positions);
        }
    });

    Effect::watch(
        || (),
        move |_, _, _| {
            log::debug!("viewport controller started");
            refresh_scroll();
            refresh_parallax();
        },
        true,
    );

    on_cleanup(move || {
        trail.try_update_value(|t| t.clear());
        log::debug!("viewport controller stopped");
    });
}
