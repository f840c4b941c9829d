use crate::layout::page_context::PageContext;
use contracts::shared::scroll::parallax_offset;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");

    let transform = move || format!("translateY({}px)", parallax_offset(ctx.scroll_y.get()));

    view! {
        <section id="home" class="hero" style:transform=transform>
            <div class="hero-content">
                <h1 class="hero-title">
                    "Sons profissionais para o seu "
                    <span class="gradient-text">"home studio"</span>
                </h1>
                <p class="hero-subtitle">
                    "Plugins, bibliotecas de timbres e cursos criados por quem toca e mixa todo dia."
                </p>
                <div class="hero-buttons">
                    <a
                        href="#products"
                        class="btn btn-primary"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            ctx.navigate_to("products");
                        }
                    >
                        "Ver Produtos"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn-secondary"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            ctx.navigate_to("contact");
                        }
                    >
                        "Fale Conosco"
                    </a>
                </div>
            </div>
        </section>
    }
}
