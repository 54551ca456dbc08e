//! Panel widget
//!
//! A panel is a heading plus a body. Rendered inside an [`Accordion`], it
//! becomes a collapsible accordion section whose toggle link references the
//! accordion's DOM id; rendered on its own it is a plain bootstrap panel.
//!
//! [`Accordion`]: crate::accordion::Accordion

use crate::variant::Variant;
use nuages_core::content::{Content, Widget};
use nuages_core::context::{RenderContext, scope};
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const PLAIN: &str = "<div class=\"panel panel-{variant}\">{heading}\
<div class=\"panel-body\">{content}</div></div>";

const PLAIN_HEADING: &str =
	"<div class=\"panel-heading\"><h3 class=\"panel-title\">{heading}</h3></div>";

const COLLAPSIBLE: &str = "<div class=\"panel panel-{variant}\">\
<div class=\"panel-heading\"><h4 class=\"panel-title\">\
<a data-toggle=\"collapse\" data-parent=\"#{accordion}\" href=\"#{panel}\">{heading}</a>\
</h4></div>\
<div id=\"{panel}\" class=\"panel-collapse collapse\">\
<div class=\"panel-body\">{content}</div></div></div>";

/// Panel with an optional heading and a content body
#[derive(Debug)]
pub struct Panel {
	heading: Option<String>,
	children: Vec<Content>,
	variant: Variant,
}

impl Panel {
	/// Create a panel around the given content
	pub fn new(content: impl Into<Content>) -> Self {
		Self {
			heading: None,
			children: vec![content.into()],
			variant: Variant::Default,
		}
	}

	/// Set the heading text (escaped on render)
	pub fn heading(mut self, heading: impl Into<String>) -> Self {
		self.heading = Some(heading.into());
		self
	}

	/// Set the color variant (default: `panel-default`)
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	/// Append a child to the panel body
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}

	fn body(&self, ctx: &RenderContext) -> RenderResult<String> {
		let mut body = String::new();
		for child in &self.children {
			body.push_str(&child.render(ctx)?);
		}
		Ok(body)
	}

	fn escaped_heading(&self) -> String {
		self.heading
			.as_deref()
			.map(|heading| html_escape::encode_text(heading).into_owned())
			.unwrap_or_default()
	}
}

impl Widget for Panel {
	fn name(&self) -> &'static str {
		"Panel"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		// Inside an accordion the parent's id is in scope; without it the
		// panel degrades to plain, unlinked markup.
		match ctx.get(scope::ACCORDION_ID) {
			Some(accordion_id) => {
				let panel_id = ctx.unique_name("panel");
				Template::parse(COLLAPSIBLE)?.render(
					&Slots::new()
						.set("variant", self.variant.as_str())
						.set("accordion", accordion_id)
						.set("panel", panel_id)
						.set("heading", self.escaped_heading())
						.set("content", self.body(ctx)?),
				)
			}
			None => {
				let heading = match self.heading {
					Some(_) => Template::parse(PLAIN_HEADING)?
						.render(&Slots::new().set("heading", self.escaped_heading()))?,
					None => String::new(),
				};
				Template::parse(PLAIN)?.render(
					&Slots::new()
						.set("variant", self.variant.as_str())
						.set("heading", heading)
						.set("content", self.body(ctx)?),
				)
			}
		}
	}
}
