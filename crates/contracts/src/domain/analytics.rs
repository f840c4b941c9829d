use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Events forwarded to the page's analytics hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackedEvent {
    PurchaseClick { product_id: String, price: String },
    DownloadClick { product_id: String },
    PreviewClick { product_name: String },
    /// Carries every submitted form field verbatim.
    ContactFormSubmit { fields: BTreeMap<String, String> },
}

impl TrackedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackedEvent::PurchaseClick { .. } => "purchase_click",
            TrackedEvent::DownloadClick { .. } => "download_click",
            TrackedEvent::PreviewClick { .. } => "preview_click",
            TrackedEvent::ContactFormSubmit { .. } => "contact_form_submit",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            TrackedEvent::PurchaseClick { product_id, price } => {
                json!({ "product_id": product_id, "price": price })
            }
            TrackedEvent::DownloadClick { product_id } => json!({ "product_id": product_id }),
            TrackedEvent::PreviewClick { product_name } => {
                json!({ "product_name": product_name })
            }
            TrackedEvent::ContactFormSubmit { fields } => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_payload() {
        let event = TrackedEvent::PurchaseClick {
            product_id: "abba-keys".into(),
            price: "220".into(),
        };
        assert_eq!(event.name(), "purchase_click");
        assert_eq!(
            event.payload(),
            json!({ "product_id": "abba-keys", "price": "220" })
        );
    }

    #[test]
    fn test_contact_payload_carries_all_fields() {
        let fields = BTreeMap::from([
            ("name".to_string(), "Ana".to_string()),
            ("email".to_string(), "ana@example.com".to_string()),
            ("subject".to_string(), "".to_string()),
            ("message".to_string(), "Oi".to_string()),
        ]);
        let event = TrackedEvent::ContactFormSubmit { fields };
        assert_eq!(event.name(), "contact_form_submit");
        let payload = event.payload();
        assert_eq!(payload["name"], "Ana");
        assert_eq!(payload["subject"], "");
        assert_eq!(payload.as_object().map(|o| o.len()), Some(4));
    }
}
