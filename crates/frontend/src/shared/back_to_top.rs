use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::rate_limit::throttle;
use contracts::shared::scroll::{back_to_top_visible, TRACKING_THROTTLE_MS};
use leptos::prelude::*;

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(back_to_top_visible(dom::scroll_y()));

    let sync = throttle(TRACKING_THROTTLE_MS, move |_: ()| {
        visible.set(back_to_top_visible(dom::scroll_y()));
    });
    let _ = window_event_listener(leptos::ev::scroll, move |_| sync(()));

    view! {
        <button
            class="back-to-top"
            aria-label="Voltar ao topo"
            style:opacity=move || if visible.get() { "1" } else { "0" }
            style:visibility=move || if visible.get() { "visible" } else { "hidden" }
            on:click=move |_| dom::scroll_to_top()
        >
            {icon("arrow-up")}
        </button>
    }
}
