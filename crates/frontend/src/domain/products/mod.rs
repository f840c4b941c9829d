pub mod actions;
mod card;

pub use card::ProductCard;

use crate::shared::reveal::Reveal;
use contracts::domain::catalog::PRODUCT_LISTINGS;
use leptos::prelude::*;

#[component]
pub fn ProductsSection() -> impl IntoView {
    view! {
        <section id="products" class="products">
            <div class="container">
                <Reveal class="section-header">
                    <h2>"Produtos"</h2>
                    <p>"Ferramentas testadas em estúdio e no palco."</p>
                </Reveal>
                <div class="products-grid">
                    {PRODUCT_LISTINGS
                        .iter()
                        .map(|listing| view! { <ProductCard listing=*listing /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
