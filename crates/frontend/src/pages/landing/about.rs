use crate::shared::reveal::Reveal;
use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <Reveal class="section-header">
                    <h2>"Sobre"</h2>
                </Reveal>
                <p class="about-text">
                    "A D.A.W.LOAD nasceu no palco: timbres e racks montados para cultos, shows e "
                    "gravações, agora organizados para você usar no seu próprio setup."
                </p>
            </div>
        </section>
    }
}
