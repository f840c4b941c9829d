//! Click handlers of the product buttons.
//!
//! Each button owns its `ButtonPhase` signal, so buttons clicked in quick
//! succession never touch each other's state. None of these can fail.

use crate::shared::analytics::track_event;
use crate::shared::dom;
use crate::shared::notification::NotificationService;
use contracts::domain::{ProductListing, RedirectTarget, StoreConfig, TrackedEvent};
use contracts::shared::widgets::{
    ButtonPhase, ProductAction, BUTTON_RESTORE_MS, DOWNLOAD_STARTED_MESSAGE,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Open the storefront page of `product_id` in a new tab.
pub fn redirect_to_store(
    config: &StoreConfig,
    product_id: &str,
    notifications: NotificationService,
) {
    let redirect = config.resolve(product_id);
    if redirect.target == RedirectTarget::Fallback {
        log::warn!(
            "no store slug for product '{}', sending to {}",
            product_id,
            redirect.url
        );
    }
    dom::open_in_new_tab(&redirect.url);
    notifications.info(redirect.notice());
}

pub fn purchase(
    listing: ProductListing,
    phase: RwSignal<ButtonPhase>,
    config: StoreConfig,
    notifications: NotificationService,
) {
    if !begin(phase) {
        return;
    }
    let action = ProductAction::Purchase;

    spawn_local(async move {
        TimeoutFuture::new(action.pending_ms()).await;
        redirect_to_store(&config, listing.id, notifications);
        phase.update(|p| p.settle(action.outcome()));

        TimeoutFuture::new(BUTTON_RESTORE_MS).await;
        phase.update(ButtonPhase::restore);
    });

    track_event(&TrackedEvent::PurchaseClick {
        product_id: listing.id.to_string(),
        price: listing.price.to_string(),
    });
}

/// Simulated download: no file is transferred.
pub fn download(
    listing: ProductListing,
    phase: RwSignal<ButtonPhase>,
    notifications: NotificationService,
) {
    if !begin(phase) {
        return;
    }
    let action = ProductAction::Download;

    spawn_local(async move {
        TimeoutFuture::new(action.pending_ms()).await;
        notifications.success(DOWNLOAD_STARTED_MESSAGE);
        phase.update(|p| p.settle(action.outcome()));

        TimeoutFuture::new(BUTTON_RESTORE_MS).await;
        phase.update(ButtonPhase::restore);
    });

    track_event(&TrackedEvent::DownloadClick {
        product_id: listing.id.to_string(),
    });
}

pub fn preview(product_name: &str, notifications: NotificationService) {
    notifications.info(preview_message(product_name));
    track_event(&TrackedEvent::PreviewClick {
        product_name: product_name.to_string(),
    });
}

pub fn preview_message(product_name: &str) -> String {
    format!("Preview de \"{}\" em breve!", product_name)
}

fn begin(phase: RwSignal<ButtonPhase>) -> bool {
    let mut started = false;
    phase.update(|p| started = p.start());
    started
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_message_quotes_the_name() {
        assert_eq!(
            preview_message("ABBA Keys"),
            "Preview de \"ABBA Keys\" em breve!"
        );
    }
}
