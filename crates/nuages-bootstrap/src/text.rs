//! Leaf content widgets: escaped text, markdown, and raw HTML

use nuages_core::content::Widget;
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use pulldown_cmark::{Options, Parser, html};

/// Plain text, HTML-escaped on render.
///
/// This is the safe default for user-visible strings; use [`Html`] when the
/// author vouches for the markup.
#[derive(Debug, Clone)]
pub struct Text {
	content: String,
}

impl Text {
	/// Create a text widget
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
		}
	}
}

impl Widget for Text {
	fn name(&self) -> &'static str {
		"Text"
	}

	fn render(&self, _ctx: &RenderContext) -> RenderResult<String> {
		Ok(html_escape::encode_text(&self.content).into_owned())
	}
}

/// Markdown source rendered to HTML.
///
/// Tables and strikethrough are enabled; the markdown itself may embed raw
/// HTML, which pulldown-cmark passes through.
#[derive(Debug, Clone)]
pub struct Markdown {
	source: String,
}

impl Markdown {
	/// Create a markdown widget from its source text
	pub fn new(source: impl Into<String>) -> Self {
		Self {
			source: source.into(),
		}
	}
}

impl Widget for Markdown {
	fn name(&self) -> &'static str {
		"Markdown"
	}

	fn render(&self, _ctx: &RenderContext) -> RenderResult<String> {
		let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
		let parser = Parser::new_ext(&self.source, options);
		let mut out = String::new();
		html::push_html(&mut out, parser);
		Ok(out)
	}
}

/// Raw HTML passed through unescaped.
///
/// The explicit opt-out from escaping, for markup written by trusted
/// page authors.
#[derive(Debug, Clone)]
pub struct Html {
	markup: String,
}

impl Html {
	/// Create a raw HTML widget
	pub fn new(markup: impl Into<String>) -> Self {
		Self {
			markup: markup.into(),
		}
	}
}

impl Widget for Html {
	fn name(&self) -> &'static str {
		"Html"
	}

	fn render(&self, _ctx: &RenderContext) -> RenderResult<String> {
		Ok(self.markup.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_escapes_markup() {
		let ctx = RenderContext::new();
		let html = Text::new("<script>alert(1)</script>").render(&ctx).unwrap();

		assert_eq!(html, "&lt;script&gt;alert(1)&lt;/script&gt;");
	}

	#[test]
	fn test_html_passes_through_unescaped() {
		let ctx = RenderContext::new();
		let html = Html::new("<b>bold</b>").render(&ctx).unwrap();

		assert_eq!(html, "<b>bold</b>");
	}

	#[test]
	fn test_markdown_renders_headings_and_emphasis() {
		let ctx = RenderContext::new();
		let html = Markdown::new("# Title\n\nsome *emphasis*").render(&ctx).unwrap();

		assert!(html.contains("<h1>Title</h1>"));
		assert!(html.contains("<em>emphasis</em>"));
	}

	#[test]
	fn test_markdown_renders_tables() {
		let ctx = RenderContext::new();
		let html = Markdown::new("| a | b |\n|---|---|\n| 1 | 2 |")
			.render(&ctx)
			.unwrap();

		assert!(html.contains("<table>"));
	}
}
