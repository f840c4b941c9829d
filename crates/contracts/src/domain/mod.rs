pub mod analytics;
pub mod catalog;
pub mod contact;

pub use analytics::TrackedEvent;
pub use catalog::{ProductKind, ProductListing, Redirect, RedirectTarget, StoreConfig};
pub use contact::{ContactForm, ContactFormError, ContactSubmission};
