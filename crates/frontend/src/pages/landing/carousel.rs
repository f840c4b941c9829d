use crate::shared::dom::{observe_visibility, ObserverOptions};
use contracts::domain::catalog::PRODUCT_LISTINGS;
use contracts::shared::widgets::PlayState;
use leptos::html;
use leptos::prelude::*;

/// Endless strip of product names. The CSS animation pauses on hover and
/// while the strip is off screen.
#[component]
pub fn Carousel() -> impl IntoView {
    let play = RwSignal::new(PlayState::default());
    let container_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };
        observe_visibility(&container, ObserverOptions::default(), move |visible, _| {
            play.set(PlayState::on_visibility(visible));
        });
    });

    // Two copies back to back so the loop has no seam.
    let items = PRODUCT_LISTINGS
        .iter()
        .chain(PRODUCT_LISTINGS.iter())
        .map(|listing| {
            view! {
                <div class="carousel-item">
                    <span>{listing.name}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="carousel-container"
            node_ref=container_ref
            on:mouseenter=move |_| play.set(PlayState::on_hover(true))
            on:mouseleave=move |_| play.set(PlayState::on_hover(false))
        >
            <div class="carousel-track" style:animation-play-state=move || play.get().as_css()>
                {items}
            </div>
        </div>
    }
}
