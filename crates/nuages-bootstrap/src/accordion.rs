//! Accordion widget
//!
//! An accordion mints its DOM id at render time and hands it down to child
//! panels through the render context, so their collapse toggles reference
//! the right `panel-group`.

use nuages_core::content::{Content, Widget};
use nuages_core::context::{RenderContext, scope};
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const TEMPLATE: &str = "<div class=\"panel-group\" id=\"{id}\">{content}</div>";

/// Collapsible group of panels
#[derive(Debug, Default)]
pub struct Accordion {
	children: Vec<Content>,
}

impl Accordion {
	/// Create an empty accordion
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a child, typically a [`Panel`](crate::panel::Panel)
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}
}

impl Widget for Accordion {
	fn name(&self) -> &'static str {
		"Accordion"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let id = ctx.unique_name("accordion");
		let child_ctx = ctx.scoped(scope::ACCORDION_ID, id.as_str());
		let mut body = String::new();
		for child in &self.children {
			body.push_str(&child.render(&child_ctx)?);
		}
		Template::parse(TEMPLATE)?.render(&Slots::new().set("id", id).set("content", body))
	}
}
