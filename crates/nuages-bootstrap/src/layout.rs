//! Grid layout primitives: Container, Row, and Column
//!
//! Each primitive wraps child content in a bootstrap grid div. Rows and
//! columns support two wrapping modes: wrap every child in its own div, or
//! render all children together and wrap once.

use crate::util::{attr, extra_classes};
use nuages_core::content::{Content, Widget};
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

/// How a layout primitive wraps its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
	/// Wrap every child in its own div
	Each,
	/// Render all children together, then wrap once
	#[default]
	All,
}

/// Top-level grid container
#[derive(Debug)]
pub struct Container {
	children: Vec<Content>,
	fluid: bool,
	classes: Vec<String>,
}

impl Container {
	/// Create a container around the given content
	pub fn new(content: impl Into<Content>) -> Self {
		Self {
			children: vec![content.into()],
			fluid: false,
			classes: Vec::new(),
		}
	}

	/// Use the full-width `container-fluid` class
	pub fn fluid(mut self) -> Self {
		self.fluid = true;
		self
	}

	/// Append a child
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}

	/// Append an extra CSS class
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}
}

impl Widget for Container {
	fn name(&self) -> &'static str {
		"Container"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let template = Template::parse("<div class=\"{kind}{classes}\">{content}</div>")?;
		let mut body = String::new();
		for child in &self.children {
			body.push_str(&child.render(ctx)?);
		}
		template.render(
			&Slots::new()
				.set("kind", if self.fluid { "container-fluid" } else { "container" })
				.set("classes", extra_classes(&self.classes))
				.set("content", body),
		)
	}
}

/// Horizontal grid row
#[derive(Debug)]
pub struct Row {
	children: Vec<Content>,
	mode: WrapMode,
	classes: Vec<String>,
	style: Option<String>,
}

impl Row {
	/// Create a row around the given content
	pub fn new(content: impl Into<Content>) -> Self {
		Self {
			children: vec![content.into()],
			mode: WrapMode::All,
			classes: Vec::new(),
			style: None,
		}
	}

	/// Append a child
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}

	/// Set the wrapping mode (default: wrap all children in one row)
	pub fn mode(mut self, mode: WrapMode) -> Self {
		self.mode = mode;
		self
	}

	/// Append an extra CSS class
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	/// Set an inline style attribute
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}
}

impl Widget for Row {
	fn name(&self) -> &'static str {
		"Row"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let template = Template::parse("<div class=\"row{classes}\"{style}>{content}</div>")?;
		let slots = Slots::new()
			.set("classes", extra_classes(&self.classes))
			.set("style", attr("style", self.style.as_deref()));
		wrap_children(&template, &slots, &self.children, self.mode, ctx)
	}
}

/// Vertical grid column.
///
/// Width follows the bootstrap 1-12 grid convention and defaults to 12.
#[derive(Debug)]
pub struct Column {
	children: Vec<Content>,
	width: u32,
	mode: WrapMode,
	classes: Vec<String>,
	style: Option<String>,
}

impl Column {
	/// Create a full-width column around the given content
	pub fn new(content: impl Into<Content>) -> Self {
		Self {
			children: vec![content.into()],
			width: 12,
			mode: WrapMode::Each,
			classes: Vec::new(),
			style: None,
		}
	}

	/// Set the column width.
	///
	/// Bootstrap expects 1-12; out-of-range values are rendered as-is
	/// (`col-md-17`) rather than rejected, matching the grid's forgiving
	/// handling of author mistakes.
	pub fn width(mut self, width: u32) -> Self {
		self.width = width;
		self
	}

	/// Append a child
	pub fn child(mut self, content: impl Into<Content>) -> Self {
		self.children.push(content.into());
		self
	}

	/// Set the wrapping mode (default: wrap each child in its own column)
	pub fn mode(mut self, mode: WrapMode) -> Self {
		self.mode = mode;
		self
	}

	/// Append an extra CSS class
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	/// Set an inline style attribute
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}
}

impl Widget for Column {
	fn name(&self) -> &'static str {
		"Column"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let template =
			Template::parse("<div class=\"col-md-{width}{classes}\"{style}>{content}</div>")?;
		let slots = Slots::new()
			.set("width", self.width.to_string())
			.set("classes", extra_classes(&self.classes))
			.set("style", attr("style", self.style.as_deref()));
		wrap_children(&template, &slots, &self.children, self.mode, ctx)
	}
}

fn wrap_children(
	template: &Template,
	slots: &Slots,
	children: &[Content],
	mode: WrapMode,
	ctx: &RenderContext,
) -> RenderResult<String> {
	match mode {
		WrapMode::Each => {
			let mut out = String::new();
			for child in children {
				let slots = slots.clone().set("content", child.render(ctx)?);
				out.push_str(&template.render(&slots)?);
			}
			Ok(out)
		}
		WrapMode::All => {
			let mut body = String::new();
			for child in children {
				body.push_str(&child.render(ctx)?);
			}
			template.render(&slots.clone().set("content", body))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_column_width_and_content() {
		let ctx = RenderContext::new();
		let html = Column::new("hello").width(6).render(&ctx).unwrap();

		assert_eq!(html, "<div class=\"col-md-6\">hello</div>");
	}

	#[test]
	fn test_column_width_defaults_to_12() {
		let ctx = RenderContext::new();
		let html = Column::new("x").render(&ctx).unwrap();

		assert!(html.contains("col-md-12"));
	}

	#[test]
	fn test_column_width_is_not_validated() {
		let ctx = RenderContext::new();
		let html = Column::new("x").width(17).render(&ctx).unwrap();

		assert!(html.contains("col-md-17"));
	}

	#[test]
	fn test_row_wraps_two_columns_in_one_wrapper() {
		let ctx = RenderContext::new();
		let html = Row::new(Column::new("a").width(6))
			.child(Column::new("b").width(6))
			.render(&ctx)
			.unwrap();

		assert_eq!(
			html,
			"<div class=\"row\"><div class=\"col-md-6\">a</div><div class=\"col-md-6\">b</div></div>"
		);
	}

	#[test]
	fn test_row_each_mode_wraps_every_child() {
		let ctx = RenderContext::new();
		let html = Row::new("a")
			.child("b")
			.mode(WrapMode::Each)
			.render(&ctx)
			.unwrap();

		assert_eq!(
			html,
			"<div class=\"row\">a</div><div class=\"row\">b</div>"
		);
	}

	#[test]
	fn test_column_each_mode_wraps_every_child() {
		let ctx = RenderContext::new();
		let html = Column::new("a").width(4).child("b").render(&ctx).unwrap();

		assert_eq!(
			html,
			"<div class=\"col-md-4\">a</div><div class=\"col-md-4\">b</div>"
		);
	}

	#[test]
	fn test_column_all_mode_wraps_once() {
		let ctx = RenderContext::new();
		let html = Column::new("a")
			.width(4)
			.child("b")
			.mode(WrapMode::All)
			.render(&ctx)
			.unwrap();

		assert_eq!(html, "<div class=\"col-md-4\">ab</div>");
	}

	#[test]
	fn test_container_fluid_and_extra_class() {
		let ctx = RenderContext::new();
		let html = Container::new("x")
			.fluid()
			.class("mt-2")
			.render(&ctx)
			.unwrap();

		assert_eq!(html, "<div class=\"container-fluid mt-2\">x</div>");
	}

	#[test]
	fn test_row_style_attribute_is_escaped() {
		let ctx = RenderContext::new();
		let html = Row::new("x").style("color:\"red\"").render(&ctx).unwrap();

		assert!(html.contains("style=\"color:&quot;red&quot;\""));
	}
}
