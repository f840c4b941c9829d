use crate::shared::dom::{observe_visibility, ObserverOptions};
use contracts::shared::widgets::RevealState;
use leptos::html;
use leptos::prelude::*;

const REVEAL_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: Some(0.1),
    root_margin: Some("0px 0px -50px 0px"),
};

/// A `div` that gains `fade-in` the first time it scrolls into view and
/// keeps it.
#[component]
pub fn Reveal(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        let target = el.clone();
        observe_visibility(&el, REVEAL_OPTIONS, move |intersecting, observer| {
            let mut next = state.get_untracked();
            if next.observe(intersecting) {
                state.set(next);
                observer.unobserve(&target);
            }
        });
    });

    view! {
        <div class=class node_ref=node class:fade-in=move || state.get().is_seen()>
            {children()}
        </div>
    }
}
