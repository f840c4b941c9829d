use crate::shared::icons::icon;
use crate::shared::reveal::Reveal;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    ("sliders", "Pronto para usar", "Presets organizados, é só abrir na sua DAW."),
    ("headphones", "Testado em estúdio", "Cada timbre foi usado em produções reais."),
    ("zap", "Acesso imediato", "Link de download liberado logo após o pagamento."),
    ("shield", "Pagamento seguro", "Checkout processado pela InfinitePay."),
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <Reveal class="section-header">
                    <h2>"Por que D.A.W.LOAD?"</h2>
                </Reveal>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon_name, title, text)| {
                            view! {
                                <Reveal class="feature-card">
                                    <div class="feature-icon">{icon(icon_name)}</div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
