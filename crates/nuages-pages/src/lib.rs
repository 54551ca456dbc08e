//! # nuages-pages
//!
//! The page layer of nuages: a [`Page`] builds a content forest per request,
//! a [`PageRegistry`] maps names to page factories, and
//! [`PageRegistry::respond`] turns `GET/POST /pages/<name>` into an HTML
//! response for the surrounding framework to send.
//!
//! The framework's request cycle, sessions, and persistence stay outside;
//! this crate sees only a [`PageRequest`] and hands back a [`PageResponse`].
//!
//! ```
//! use nuages_core::content::Content;
//! use nuages_core::error::RenderResult;
//! use nuages_pages::prelude::*;
//!
//! struct Hello;
//!
//! impl Page for Hello {
//!     fn content(&self, _request: &PageRequest) -> RenderResult<Content> {
//!         Ok(Content::from("<h1>hello</h1>"))
//!     }
//! }
//!
//! let registry = PageRegistry::new();
//! registry.register("Hello", || Hello);
//!
//! let response = registry.respond("Hello", &PageRequest::get()).unwrap();
//! assert_eq!(response.body(), "<h1>hello</h1>");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod page;
pub mod registry;
pub mod request;

pub use error::{PagesError, PagesResult};
pub use page::Page;
pub use registry::PageRegistry;
pub use request::{PageRequest, PageResponse};

/// Commonly used items, for glob import by page code
pub mod prelude {
	pub use crate::error::{PagesError, PagesResult};
	pub use crate::page::Page;
	pub use crate::registry::PageRegistry;
	pub use crate::request::{PageRequest, PageResponse};
}
