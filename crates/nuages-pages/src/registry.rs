//! Page registry and request dispatch
//!
//! An explicit name→factory table populated at process start. Registration
//! is a plain function call; nothing registers itself as a side effect of
//! being defined.

use crate::error::PagesResult;
use crate::page::Page;
use crate::request::{PageRequest, PageResponse};
use nuages_core::context::RenderContext;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Factory producing a fresh page value per request
type PageFactory = Box<dyn Fn() -> Box<dyn Page> + Send + Sync>;

/// Registry of page names to factories.
///
/// Shared behind a read lock so concurrent requests can dispatch while
/// registration remains possible (registration normally all happens during
/// startup).
#[derive(Default)]
pub struct PageRegistry {
	pages: RwLock<HashMap<String, PageFactory>>,
}

impl PageRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a page factory under a name.
	///
	/// Re-registering a name replaces the previous factory.
	pub fn register<F, P>(&self, name: impl Into<String>, factory: F)
	where
		F: Fn() -> P + Send + Sync + 'static,
		P: Page + 'static,
	{
		let name = name.into();
		debug!(page = %name, "registering page");
		self.pages
			.write()
			.insert(name, Box::new(move || Box::new(factory())));
	}

	/// Whether a page is registered under this name
	pub fn contains(&self, name: &str) -> bool {
		self.pages.read().contains_key(name)
	}

	/// Registered page names, sorted
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.pages.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Instantiate the page registered under this name
	pub fn get(&self, name: &str) -> Option<Box<dyn Page>> {
		self.pages.read().get(name).map(|factory| factory())
	}

	/// Dispatch a request to the named page.
	///
	/// An unknown name is a 404 response, not an error. A failure while
	/// building or rendering the page's content propagates as
	/// [`PagesError::Render`](crate::error::PagesError::Render) so the
	/// framework's error handling takes over; no partial HTML is returned.
	pub fn respond(&self, name: &str, request: &PageRequest) -> PagesResult<PageResponse> {
		let Some(page) = self.get(name) else {
			warn!(page = %name, "page not found");
			return Ok(PageResponse::not_found(name));
		};
		debug!(page = %name, method = %request.method(), "dispatching page");
		let request = request.for_page(name);
		let content = page.content(&request)?;
		let ctx = RenderContext::new();
		let body = content.render(&ctx)?;
		Ok(PageResponse::ok(body))
	}
}

impl std::fmt::Debug for PageRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageRegistry")
			.field("names", &self.names())
			.finish()
	}
}
