//! Modal dialog widget

use crate::variant::{Size, Variant};
use nuages_core::content::{Content, Widget};
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const TEMPLATE: &str = "<button type=\"button\" class=\"btn btn-{variant}\" \
data-toggle=\"modal\" data-target=\"#{id}\">{trigger}</button>\
<div class=\"modal fade\" id=\"{id}\" tabindex=\"-1\" role=\"dialog\" \
aria-labelledby=\"{id}_label\">\
<div class=\"modal-dialog{size}\" role=\"document\"><div class=\"modal-content\">\
<div class=\"modal-header\">\
<button type=\"button\" class=\"close\" data-dismiss=\"modal\" aria-label=\"Close\">\
<span aria-hidden=\"true\">&times;</span></button>\
<h4 class=\"modal-title\" id=\"{id}_label\">{title}</h4></div>\
<div class=\"modal-body\">{content}</div>\
<div class=\"modal-footer\">\
<button type=\"button\" class=\"btn btn-default\" data-dismiss=\"modal\">Close</button>\
</div></div></div></div>";

/// Modal dialog with its trigger button.
///
/// Renders the trigger and the dialog markup together; the dialog's DOM id
/// is minted at render time so several modals can coexist on one page.
#[derive(Debug)]
pub struct Modal {
	trigger: String,
	title: String,
	children: Vec<Content>,
	variant: Variant,
	size: Option<Size>,
}

impl Modal {
	/// Create a modal with the given trigger-button label and body content
	pub fn new(trigger: impl Into<String>, content: impl Into<Content>) -> Self {
		Self {
			trigger: trigger.into(),
			title: String::new(),
			children: vec![content.into()],
			variant: Variant::Primary,
			size: None,
		}
	}

	/// Set the dialog title (escaped on render)
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Set the trigger button's color variant
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	/// Set the dialog size (`modal-sm` / `modal-lg`)
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// Append body content
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}
}

impl Widget for Modal {
	fn name(&self) -> &'static str {
		"Modal"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let id = ctx.unique_name("modal");
		let mut body = String::new();
		for child in &self.children {
			body.push_str(&child.render(ctx)?);
		}
		let size = match self.size {
			Some(size) => format!(" modal-{}", size.as_str()),
			None => String::new(),
		};
		Template::parse(TEMPLATE)?.render(
			&Slots::new()
				.set("id", id)
				.set("variant", self.variant.as_str())
				.set("size", size)
				.set("trigger", html_escape::encode_text(&self.trigger).into_owned())
				.set("title", html_escape::encode_text(&self.title).into_owned())
				.set("content", body),
		)
	}
}
