use crate::layout::header::navbar::{section_href, NAV_LINKS};
use crate::layout::page_context::PageContext;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>"D.A.W.LOAD"</h3>
                    <p>"Plugins, bibliotecas e cursos para quem produz música em casa."</p>
                </div>
                <ul class="footer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(section_id, label)| {
                            view! {
                                <li>
                                    <a
                                        href=section_href(section_id)
                                        on:click=move |ev: MouseEvent| {
                                            ev.prevent_default();
                                            ctx.navigate_to(section_id);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <p class="footer-bottom">
                "Pagamentos processados com segurança pela InfinitePay · © D.A.W.LOAD"
            </p>
        </footer>
    }
}
