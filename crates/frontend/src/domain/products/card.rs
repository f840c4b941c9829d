use super::actions::{download, preview, purchase};
use crate::shared::icons::icon;
use crate::shared::lazy_image::LazyImage;
use crate::shared::notification::NotificationService;
use crate::shared::reveal::Reveal;
use contracts::domain::{ProductKind, ProductListing, StoreConfig};
use contracts::shared::widgets::{ButtonPhase, ProductAction};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

const IMAGE_PLACEHOLDER: &str = "images/placeholder.svg";

#[component]
pub fn ProductCard(listing: ProductListing) -> impl IntoView {
    let config = use_context::<StoreConfig>().expect("StoreConfig not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let phase = RwSignal::new(ButtonPhase::default());
    let (action, button_class, button_icon, button_label) = match listing.kind {
        ProductKind::Paid => (ProductAction::Purchase, "btn btn-primary buy-btn", "cart", "Comprar"),
        ProductKind::Free => (
            ProductAction::Download,
            "btn btn-primary download-btn",
            "download",
            "Baixar Grátis",
        ),
    };

    let on_action = move |_: MouseEvent| match action {
        ProductAction::Purchase => purchase(listing, phase, config.clone(), notifications),
        ProductAction::Download => download(listing, phase, notifications),
    };

    let price = match listing.kind {
        ProductKind::Paid => format!("R$ {}", listing.price),
        ProductKind::Free => "Grátis".to_string(),
    };

    view! {
        <Reveal class="product-card">
            <div class="product-image">
                <LazyImage src=listing.image placeholder=IMAGE_PLACEHOLDER alt=listing.name />
            </div>
            <div class="product-info">
                <h3>{listing.name}</h3>
                <p class="product-description">{listing.description}</p>
                <span class="product-price">{price}</span>
                <div class="product-actions">
                    <button
                        class=button_class
                        data-product=listing.id
                        data-price=listing.price
                        disabled=move || phase.get().is_disabled()
                        on:click=on_action
                    >
                        {move || {
                            let current = phase.get();
                            match current.label(action) {
                                None => view! {
                                    <span class="btn-label">{icon(button_icon)}" "{button_label}</span>
                                }
                                    .into_any(),
                                Some(label) if current.shows_spinner() => view! {
                                    <span class="btn-label"><span class="loading"></span>" "{label}</span>
                                }
                                    .into_any(),
                                Some(label) => view! {
                                    <span class="btn-label">{icon("check")}" "{label}</span>
                                }
                                    .into_any(),
                            }
                        }}
                    </button>
                    <button
                        class="btn btn-secondary preview-btn"
                        on:click=move |_| preview(listing.name, notifications)
                    >
                        {icon("play")}
                        " Preview"
                    </button>
                </div>
            </div>
        </Reveal>
    }
}
