//! Error types for nuages-core

use thiserror::Error;

/// Error type for rendering operations
#[derive(Debug, Error)]
pub enum RenderError {
	/// Content value that is neither a string, a widget, nor a sequence
	#[error("Unsupported content value: {0}")]
	UnsupportedContent(String),

	/// Template placeholder with no supplied value
	#[error("Missing template slot: {0}")]
	MissingSlot(String),

	/// Malformed template source
	#[error("Invalid template: {0}")]
	InvalidTemplate(String),

	/// Rendering error raised by a widget
	#[error("Rendering error: {0}")]
	Rendering(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;
