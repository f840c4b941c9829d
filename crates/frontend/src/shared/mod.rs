pub mod analytics;
pub mod back_to_top;
pub mod config;
pub mod dom;
pub mod icons;
pub mod lazy_image;
pub mod notification;
pub mod preloader;
pub mod rate_limit;
pub mod reveal;
