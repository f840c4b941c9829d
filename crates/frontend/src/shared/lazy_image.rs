use crate::shared::dom::{observe_visibility, ObserverOptions};
use contracts::shared::widgets::lazy_source;
use leptos::html;
use leptos::prelude::*;

/// An `img` that shows `placeholder` until it enters the viewport, then
/// swaps in its `data-src`. Without IntersectionObserver the placeholder
/// simply stays.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let current = RwSignal::new(placeholder);
    let pending = RwSignal::new(true);
    let node = NodeRef::<html::Img>::new();

    Effect::new(move |_| {
        let Some(img) = node.get() else {
            return;
        };
        let target = img.clone();
        observe_visibility(&img, ObserverOptions::default(), move |visible, observer| {
            if !visible {
                return;
            }
            let deferred = target.dataset().get("src");
            let shown = current.get_untracked();
            current.set(lazy_source(&shown, deferred.as_deref()).to_string());
            pending.set(false);
            observer.unobserve(&target);
        });
    });

    view! {
        <img
            node_ref=node
            class=class
            class:lazy=move || pending.get()
            src=move || current.get()
            data-src=src
            alt=alt
            loading="lazy"
        />
    }
}
