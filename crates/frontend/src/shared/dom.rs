//! Thin wrappers over the browser APIs the page reads.
//!
//! Every helper degrades to a no-op (or a neutral value) when the API is
//! missing, matching how the page treats optional elements.

use contracts::shared::scroll::SectionOffset;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Whether the window `load` event already fired.
pub fn document_loaded() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

/// Offsets of every `section[id]`, in document order.
pub fn section_offsets() -> Vec<SectionOffset> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionOffset::new(section.id(), section.offset_top() as f64))
        .collect()
}

/// Smooth-scroll the element with `id` to the top of the viewport.
/// Returns `false` if there is no such element.
pub fn scroll_into_view(id: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("window.open failed for {}: {:?}", url, err);
        }
    }
}

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ObserverOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
}

/// Call `on_change(is_intersecting, observer)` for every visibility change
/// of `target`. Returns `None` when IntersectionObserver is unavailable;
/// the caller then simply skips the feature.
pub fn observe_visibility<F>(
    target: &Element,
    options: ObserverOptions,
    mut on_change: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(bool, &IntersectionObserver) + 'static,
{
    if !intersection_observer_supported() {
        log::debug!("IntersectionObserver unavailable, skipping observer");
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(target);
    // The observer lives as long as the page.
    callback.forget();
    Some(observer)
}
