//! Request and response values crossing the framework boundary
//!
//! The surrounding web framework owns the real request/response cycle; these
//! types carry just what page dispatch needs in and out.

use http::{Method, StatusCode};
use std::collections::HashMap;

/// The slice of an HTTP request a page sees
#[derive(Debug, Clone)]
pub struct PageRequest {
	method: Method,
	page_name: String,
	form_data: HashMap<String, String>,
}

impl PageRequest {
	/// A GET request
	pub fn get() -> Self {
		Self {
			method: Method::GET,
			page_name: String::new(),
			form_data: HashMap::new(),
		}
	}

	/// A POST request carrying decoded form data
	pub fn post(form_data: HashMap<String, String>) -> Self {
		Self {
			method: Method::POST,
			page_name: String::new(),
			form_data,
		}
	}

	/// A copy of this request resolved under the given page name.
	///
	/// Dispatch stamps the name before handing the request to the page, so
	/// framework adapters only supply method and form data.
	pub fn for_page(&self, name: impl Into<String>) -> Self {
		Self {
			page_name: name.into(),
			..self.clone()
		}
	}

	/// Request method
	pub fn method(&self) -> &Method {
		&self.method
	}

	/// The page name this request was resolved under.
	///
	/// Empty until dispatch resolves the request against the registry.
	pub fn page_name(&self) -> &str {
		&self.page_name
	}

	/// Whether this is a POST
	pub fn is_post(&self) -> bool {
		self.method == Method::POST
	}

	/// Decoded form data (empty for GET)
	pub fn form_data(&self) -> &HashMap<String, String> {
		&self.form_data
	}
}

/// The response page dispatch hands back to the framework
#[derive(Debug, Clone)]
pub struct PageResponse {
	status: StatusCode,
	body: String,
	content_type: &'static str,
}

impl PageResponse {
	/// A successful HTML response
	pub fn ok(body: impl Into<String>) -> Self {
		Self {
			status: StatusCode::OK,
			body: body.into(),
			content_type: "text/html; charset=utf-8",
		}
	}

	/// The not-found response for an unregistered page name
	pub fn not_found(name: &str) -> Self {
		Self {
			status: StatusCode::NOT_FOUND,
			body: format!("Page {name} not found"),
			content_type: "text/html; charset=utf-8",
		}
	}

	/// Response status
	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Response body
	pub fn body(&self) -> &str {
		&self.body
	}

	/// Response content type
	pub fn content_type(&self) -> &'static str {
		self.content_type
	}
}
