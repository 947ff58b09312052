use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    content::Skill,
    interaction::{
        reveal::{skill_fill, SKILL_LEVEL_PROPERTY},
        RevealKind, RevealLatch,
    },
};

use super::state::use_interaction_config;

/// Latched visibility of the closest enclosing [`Reveal`].
#[derive(Clone, Copy)]
pub struct Revealed(pub ReadSignal<bool>);

#[component]
pub fn Reveal(
    #[prop(optional)] kind: RevealKind,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let config = use_interaction_config();
    let target = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);
    let latch = StoredValue::new(RevealLatch::for_kind(kind, &config));
    provide_context(Revealed(visible));

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let flipped = latch
                    .try_update_value(|l| {
                        l.observe(entry.is_intersecting(), entry.intersection_ratio())
                    })
                    .unwrap_or(false);
                if flipped {
                    set_visible.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![kind.threshold(&config)])
            .root_margin(config.reveal_root_margin.clone()),
    );

    let kind_class = match kind {
        RevealKind::Section => "reveal",
        RevealKind::Group => "reveal reveal-group",
    };
    view! {
        <div
            node_ref=target
            class=format!("{kind_class} {class}")
            class:visible=move || visible.get()
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SkillBar(skill: Skill) -> impl IntoView {
    // outside a Reveal the bar is drawn filled
    let revealed = use_context::<Revealed>();
    let animated = move || revealed.map(|r| r.0.get()).unwrap_or(true);
    view! {
        <div class="skill">
            <div class="skill-header">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-level">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-track">
                <div
                    class="skill-fill"
                    class:animated=animated
                    style=move || {
                        if animated() {
                            format!("{SKILL_LEVEL_PROPERTY}: {}", skill_fill(skill.level))
                        } else {
                            String::new()
                        }
                    }
                ></div>
            </div>
        </div>
    }
}
