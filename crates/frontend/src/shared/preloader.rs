use crate::shared::dom;
use contracts::shared::widgets::{
    PreloaderPhase, PRELOADER_FADE_MS, PRELOADER_HOLD_MS, PRELOADER_TEXT,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Full-screen overlay that fades out a second after the page has loaded.
#[component]
pub fn Preloader() -> impl IntoView {
    let phase = RwSignal::new(PreloaderPhase::default());

    let start = move || {
        spawn_local(async move {
            TimeoutFuture::new(PRELOADER_HOLD_MS).await;
            phase.update(|p| *p = p.advance());
            TimeoutFuture::new(PRELOADER_FADE_MS).await;
            phase.update(|p| *p = p.advance());
        })
    };

    // The wasm module may start after `load` already fired.
    if dom::document_loaded() {
        start();
    } else {
        let _ = window_event_listener(leptos::ev::load, move |_| start());
    }

    view! {
        <Show when=move || phase.get() != PreloaderPhase::Detached>
            <div class="preloader" style:opacity=move || phase.get().opacity()>
                <div class="preloader-content">
                    <div class="loading"></div>
                    <p>{PRELOADER_TEXT}</p>
                </div>
            </div>
        </Show>
    }
}
