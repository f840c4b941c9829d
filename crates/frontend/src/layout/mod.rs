pub mod footer;
pub mod header;
pub mod page_context;

pub use footer::Footer;
pub use header::NavBar;
pub use page_context::PageContext;
