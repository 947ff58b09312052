use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactFields, ContactForm, Field, Outbox, SimulatedOutbox},
    content::CONTACT_INFO,
    interaction::RevealKind,
};

use super::{reveal::Reveal, state::use_interaction_config};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title" data-text="Let's Connect">
                        "Let's Connect"
                    </h2>
                    <div class="section-divider"></div>
                    <p class="section-description">
                        "Have a question or want to work together? I'd love to hear from you."
                    </p>
                </Reveal>
                <Reveal kind=RevealKind::Group class="contact-cards">
                    {CONTACT_INFO
                        .iter()
                        .map(|info| {
                            view! {
                                <div class="contact-card">
                                    <h3>{info.title}</h3>
                                    <p>{info.detail}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
                <Reveal class="contact-form-container">
                    <MessageForm />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let config = use_interaction_config();
    let form = RwSignal::new(ContactForm::new());
    let outbox = StoredValue::new(SimulatedOutbox);

    // stands in for the round-trip to a mail service
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |message: ContactFields| {
            let Some(outcome) = outbox.try_update_value(|o| o.deliver(&message)) else {
                return;
            };
            form.update(|f| f.finish_submit(outcome));
        },
        config.submit_delay_ms,
    );

    let value_of = move |field: Field| move || form.with(|f| f.field(field).to_string());

    view! {
        <form
            class="contact-form"
            on:submit=move |ev| {
                ev.prevent_default();
                match form.try_update(|f| f.begin_submit()) {
                    Some(Ok(message)) => start(message),
                    Some(Err(e)) => log::debug!("contact form rejected: {e}"),
                    None => {}
                }
            }
        >
            <div class="form-group">
                <input
                    type="text"
                    id="name"
                    name=Field::Name.as_str()
                    placeholder="Name *"
                    required
                    prop:value=value_of(Field::Name)
                    on:input=move |ev| form.update(|f| f.set_field(Field::Name, event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    id="email"
                    name=Field::Email.as_str()
                    placeholder="Email *"
                    required
                    prop:value=value_of(Field::Email)
                    on:input=move |ev| form.update(|f| f.set_field(Field::Email, event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <textarea
                    id="message"
                    name=Field::Message.as_str()
                    placeholder="Message *"
                    required
                    prop:value=value_of(Field::Message)
                    on:input=move |ev| form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            {move || {
                form.with(|f| f.last_error().map(|e| e.to_string()))
                    .map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })
            }}
            <button
                type="submit"
                class="button button-primary"
                disabled=move || form.with(|f| f.is_submitting())
            >
                {move || form.with(|f| f.button_label())}
            </button>
        </form>
    }
}
