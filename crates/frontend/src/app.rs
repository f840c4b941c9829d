use crate::domain::contact::ContactSection;
use crate::domain::products::ProductsSection;
use crate::layout::{Footer, NavBar, PageContext};
use crate::pages::landing::{AboutSection, Carousel, FeaturesSection, Hero};
use crate::shared::back_to_top::BackToTop;
use crate::shared::config::load_store_config;
use crate::shared::notification::{NotificationService, ToastHost};
use crate::shared::preloader::Preloader;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Store config is injected, never read from a global.
    let config = load_store_config();
    log::debug!(
        "store config: {} products at {}",
        config.products.len(),
        config.base_url
    );
    provide_context(config);

    provide_context(NotificationService::new());

    let page = PageContext::new();
    page.track_scroll();
    provide_context(page);

    view! {
        <Preloader />
        <NavBar />
        <main>
            <Hero />
            <div class="carousel-section">
                <Carousel />
            </div>
            <ProductsSection />
            <FeaturesSection />
            <AboutSection />
            <ContactSection />
        </main>
        <Footer />
        <BackToTop />
        <ToastHost />
    }
}
