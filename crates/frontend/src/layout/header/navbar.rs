use crate::layout::page_context::PageContext;
use crate::shared::dom;
use crate::shared::rate_limit::throttle;
use contracts::shared::scroll::{active_section, NavbarStyle, TRACKING_THROTTLE_MS};
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Section id → link label, in page order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Início"),
    ("products", "Produtos"),
    ("features", "Recursos"),
    ("about", "Sobre"),
    ("contact", "Contato"),
];

pub fn section_href(section_id: &str) -> String {
    format!("#{}", section_id)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not provided in context");

    let hamburger_ref = NodeRef::<html::Div>::new();
    let menu_ref = NodeRef::<html::Ul>::new();

    // Highlight the link of the section currently in view.
    let highlight = throttle(TRACKING_THROTTLE_MS, move |_: ()| {
        let sections = dom::section_offsets();
        let current = active_section(&sections, dom::scroll_y()).map(str::to_string);
        if ctx.active_section.get_untracked() != current {
            ctx.active_section.set(current);
        }
    });
    let _ = window_event_listener(leptos::ev::scroll, move |_| highlight(()));

    // Any click outside the hamburger and the panel closes the menu.
    let _ = window_event_listener(leptos::ev::click, move |ev: MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let (Some(hamburger), Some(menu)) = (hamburger_ref.get_untracked(), menu_ref.get_untracked())
        else {
            return;
        };
        if !hamburger.contains(Some(&target)) && !menu.contains(Some(&target)) {
            ctx.close_menu();
        }
    });

    // Collapse when the viewport grows past the mobile breakpoint.
    let _ = window_event_listener(leptos::ev::resize, move |_| {
        let current = ctx.menu.get_untracked();
        let next = current.after_resize(dom::viewport_width());
        if next != current {
            ctx.menu.set(next);
        }
    });

    let style = move || NavbarStyle::at(ctx.scroll_y.get());
    let menu_open = move || ctx.menu.get().is_open();

    view! {
        <nav
            class="navbar"
            style:background=move || style().background()
            style:box-shadow=move || style().box_shadow()
        >
            <div class="nav-container">
                <a
                    href=section_href("home")
                    class="nav-logo"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        ctx.navigate_to("home");
                    }
                >
                    "D.A.W.LOAD"
                </a>
                <ul class="nav-menu" id="nav-menu" node_ref=menu_ref class:active=menu_open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(section_id, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=section_href(section_id)
                                        class="nav-link"
                                        class:active=move || ctx.is_active(section_id)
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
                <div
                    class="hamburger"
                    id="hamburger"
                    node_ref=hamburger_ref
                    class:active=menu_open
                    on:click=move |_| ctx.toggle_menu()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_point_at_sections() {
        assert_eq!(section_href("contact"), "#contact");
        let ids: Vec<&str> = NAV_LINKS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, ["home", "products", "features", "about", "contact"]);
    }
}
