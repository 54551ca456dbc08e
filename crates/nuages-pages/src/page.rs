//! The Page trait

use crate::request::PageRequest;
use nuages_core::content::Content;
use nuages_core::error::RenderResult;

/// A named, registered page.
///
/// A page value is created per request by its registered factory, asked for
/// its content forest once, and discarded after rendering. Pages hold no
/// state between requests.
pub trait Page: Send + Sync {
	/// Page title, for the surrounding document chrome
	fn title(&self) -> String {
		String::new()
	}

	/// Build the page's content for this request.
	///
	/// POST-handling pages inspect the request's form data here, typically
	/// binding it to a [`Form`](https://docs.rs/nuages-forms) before adding
	/// the form to the content tree.
	fn content(&self, request: &PageRequest) -> RenderResult<Content>;
}
