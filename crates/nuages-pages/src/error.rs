//! Error types for nuages-pages

use nuages_core::error::RenderError;
use thiserror::Error;

/// Error type for page dispatch
#[derive(Debug, Error)]
pub enum PagesError {
	/// A page's content failed to render; the framework's error page takes
	/// over, no partial HTML is returned
	#[error("Page render failed: {0}")]
	Render(#[from] RenderError),
}

/// Result type for page dispatch
pub type PagesResult<T> = std::result::Result<T, PagesError>;
