pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_authenticated_pages_router, init_public_pages_router};
pub use service::{AUTHENTICATED_PAGES, FALLBACK_PAGE_TITLE, LayoutService};
