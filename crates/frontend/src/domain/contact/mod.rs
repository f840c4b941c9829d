use crate::shared::analytics::track_event;
use crate::shared::icons::icon;
use crate::shared::notification::NotificationService;
use crate::shared::reveal::Reveal;
use contracts::domain::contact::{MISSING_FIELDS_MESSAGE, SUBMITTED_MESSAGE, SUBMIT_DELAY_MS};
use contracts::domain::ContactForm;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Contact form with client-only validation. Nothing is sent anywhere:
/// a valid form "succeeds" after a fixed delay.
#[component]
pub fn ContactSection() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let form = RwSignal::new(ContactForm::new());
    let value = move |key: &'static str| move || form.with(|f| f.value(key).to_string());
    let on_input =
        move |key: &'static str| move |ev: Event| form.update(|f| f.set(key, event_target_value(&ev)));
    let submitting = move || form.with(ContactForm::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let event = match form.try_update(ContactForm::submit) {
            Some(Ok(event)) => event,
            Some(Err(err)) => {
                log::debug!("contact form rejected: {}", err);
                notifications.error(MISSING_FIELDS_MESSAGE);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            notifications.success(SUBMITTED_MESSAGE);
            form.update(ContactForm::complete);
        });

        track_event(&event);
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <Reveal class="section-header">
                    <h2>"Contato"</h2>
                    <p>"Dúvidas sobre algum produto? Fale com a gente."</p>
                </Reveal>
                <form id="contact-form" class="contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <input
                            type="text"
                            name="name"
                            placeholder="Seu nome"
                            prop:value=value("name")
                            on:input=on_input("name")
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Seu e-mail"
                            prop:value=value("email")
                            on:input=on_input("email")
                        />
                    </div>
                    <input
                        type="text"
                        name="subject"
                        placeholder="Assunto"
                        prop:value=value("subject")
                        on:input=on_input("subject")
                    />
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Sua mensagem"
                        prop:value=value("message")
                        on:input=on_input("message")
                    ></textarea>
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || {
                            if submitting() {
                                view! { <span class="btn-label"><span class="loading"></span>" Enviando..."</span> }
                                    .into_any()
                            } else {
                                view! { <span class="btn-label">{icon("send")}" Enviar Mensagem"</span> }
                                    .into_any()
                            }
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}
