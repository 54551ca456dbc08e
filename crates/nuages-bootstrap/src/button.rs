//! Button and link-button widget

use crate::util::attr;
use crate::variant::{Size, Variant};
use nuages_core::content::Widget;
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const LINK: &str = "<a class=\"btn btn-{variant}{size}\"{href} role=\"button\">{label}</a>";
const BUTTON: &str = "<button type=\"button\" class=\"btn btn-{variant}{size}\">{label}</button>";

/// Bootstrap button.
///
/// With an `href` it renders as a link styled as a button, otherwise as a
/// plain `<button>` element.
#[derive(Debug, Clone)]
pub struct Button {
	label: String,
	href: Option<String>,
	variant: Variant,
	size: Option<Size>,
}

impl Button {
	/// Create a button with the given label (escaped on render)
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: None,
			variant: Variant::Default,
			size: None,
		}
	}

	/// Render as a link to the given target
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Set the color variant (default: `btn-default`)
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	/// Set the size (`btn-xs` / `btn-sm` / `btn-lg`)
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}
}

impl Widget for Button {
	fn name(&self) -> &'static str {
		"Button"
	}

	fn render(&self, _ctx: &RenderContext) -> RenderResult<String> {
		let size = match self.size {
			Some(size) => format!(" btn-{}", size.as_str()),
			None => String::new(),
		};
		let slots = Slots::new()
			.set("variant", self.variant.as_str())
			.set("size", size)
			.set("label", html_escape::encode_text(&self.label).into_owned());
		match &self.href {
			Some(href) => Template::parse(LINK)?
				.render(&slots.set("href", attr("href", Some(href)))),
			None => Template::parse(BUTTON)?.render(&slots),
		}
	}
}
