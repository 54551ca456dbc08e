//! Jumbotron widget

use nuages_core::content::{Content, Widget};
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const TEMPLATE: &str = "<div class=\"jumbotron\">{title}{content}</div>";
const TITLE: &str = "<h1>{title}</h1>";

/// Large callout banner with an optional title
#[derive(Debug)]
pub struct Jumbotron {
	title: Option<String>,
	children: Vec<Content>,
}

impl Jumbotron {
	/// Create a jumbotron around the given content
	pub fn new(content: impl Into<Content>) -> Self {
		Self {
			title: None,
			children: vec![content.into()],
		}
	}

	/// Set the banner title (escaped on render)
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Append a child
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}
}

impl Widget for Jumbotron {
	fn name(&self) -> &'static str {
		"Jumbotron"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let title = match &self.title {
			Some(title) => Template::parse(TITLE)?.render(
				&Slots::new().set("title", html_escape::encode_text(title).into_owned()),
			)?,
			None => String::new(),
		};
		let mut body = String::new();
		for child in &self.children {
			body.push_str(&child.render(ctx)?);
		}
		Template::parse(TEMPLATE)?
			.render(&Slots::new().set("title", title).set("content", body))
	}
}
