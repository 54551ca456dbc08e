//! Content tree and composition engine
//!
//! Pages are built from [`Content`] values: already-rendered strings, widgets
//! implementing [`Widget`], and ordered sequences of either. Rendering walks
//! the tree and concatenates fragments in encounter order; nothing in the
//! tree mutates shared state besides the id counter carried by the
//! [`RenderContext`].

use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};
use serde_json::Value as JsonValue;

/// Trait for renderable widgets.
///
/// Widgets are the building blocks of a page. Each one produces an HTML
/// fragment from its own state plus the ambient render context.
pub trait Widget: Send + Sync {
	/// Returns the widget's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the widget to an HTML fragment
	fn render(&self, ctx: &RenderContext) -> RenderResult<String>;
}

/// A node in a page's content tree.
///
/// The three variants are the only content shapes the engine accepts:
/// a string passes through unchanged, a widget is asked to render itself,
/// and a sequence renders element-wise in insertion order.
pub enum Content {
	/// An already-rendered HTML string, passed through verbatim
	Text(String),
	/// A widget rendered with the ambient context
	Widget(Box<dyn Widget>),
	/// An ordered sequence of content nodes
	Sequence(Vec<Content>),
}

impl Content {
	/// An empty sequence, rendering to the empty string
	pub fn empty() -> Self {
		Self::Sequence(Vec::new())
	}

	/// Wrap a widget as content
	pub fn widget(widget: impl Widget + 'static) -> Self {
		Self::Widget(Box::new(widget))
	}

	/// Append a node, flattening self into a sequence if needed
	pub fn push(&mut self, node: impl Into<Content>) {
		match self {
			Self::Sequence(items) => items.push(node.into()),
			other => {
				let current = std::mem::replace(other, Self::empty());
				*other = Self::Sequence(vec![current, node.into()]);
			}
		}
	}

	/// Flatten this tree into a single HTML string.
	///
	/// Strings pass through unchanged, widgets render with the supplied
	/// context, and sequences concatenate their elements' renders in order.
	/// Any failure aborts the whole render; no partial HTML is returned.
	pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		match self {
			Self::Text(text) => Ok(text.clone()),
			Self::Widget(widget) => widget.render(ctx),
			Self::Sequence(items) => {
				let mut html = String::new();
				for item in items {
					html.push_str(&item.render(ctx)?);
				}
				Ok(html)
			}
		}
	}

	/// Build content from an externally resolved JSON value.
	///
	/// Database-backed content arrives as already-resolved values: strings
	/// become [`Content::Text`], arrays become [`Content::Sequence`]
	/// element-wise. Every other JSON type is rejected with
	/// [`RenderError::UnsupportedContent`].
	pub fn from_value(value: &JsonValue) -> RenderResult<Content> {
		match value {
			JsonValue::String(text) => Ok(Self::Text(text.clone())),
			JsonValue::Array(items) => items
				.iter()
				.map(Self::from_value)
				.collect::<RenderResult<Vec<_>>>()
				.map(Self::Sequence),
			other => Err(RenderError::UnsupportedContent(format!(
				"expected string or array, got {other}"
			))),
		}
	}
}

impl std::fmt::Debug for Content {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::Widget(widget) => f.debug_tuple("Widget").field(&widget.name()).finish(),
			Self::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
		}
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Vec<Content>> for Content {
	fn from(items: Vec<Content>) -> Self {
		Self::Sequence(items)
	}
}

impl From<Box<dyn Widget>> for Content {
	fn from(widget: Box<dyn Widget>) -> Self {
		Self::Widget(widget)
	}
}

impl FromIterator<Content> for Content {
	fn from_iter<I: IntoIterator<Item = Content>>(iter: I) -> Self {
		Self::Sequence(iter.into_iter().collect())
	}
}

/// Implements `From<$widget> for Content` for widget types.
///
/// Widget crates call this once per type so page code can pass widgets
/// anywhere `impl Into<Content>` is accepted.
#[macro_export]
macro_rules! widget_into_content {
	($($widget:ty),+ $(,)?) => {$(
		impl From<$widget> for $crate::content::Content {
			fn from(widget: $widget) -> Self {
				$crate::content::Content::Widget(Box::new(widget))
			}
		}
	)+};
}
