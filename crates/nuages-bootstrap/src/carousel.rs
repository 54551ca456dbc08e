//! Carousel widget

use nuages_core::content::{Content, Widget};
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const TEMPLATE: &str = "<div id=\"{id}\" class=\"carousel slide\" data-ride=\"carousel\">\
<ol class=\"carousel-indicators\">{indicators}</ol>\
<div class=\"carousel-inner\" role=\"listbox\">{slides}</div>\
<a class=\"left carousel-control\" href=\"#{id}\" role=\"button\" data-slide=\"prev\">\
<span class=\"glyphicon glyphicon-chevron-left\" aria-hidden=\"true\"></span>\
<span class=\"sr-only\">Previous</span></a>\
<a class=\"right carousel-control\" href=\"#{id}\" role=\"button\" data-slide=\"next\">\
<span class=\"glyphicon glyphicon-chevron-right\" aria-hidden=\"true\"></span>\
<span class=\"sr-only\">Next</span></a></div>";

const INDICATOR: &str = "<li data-target=\"#{id}\" data-slide-to=\"{index}\"{active}></li>";

const SLIDE: &str = "<div class=\"item{active}\">{content}</div>";

/// Slideshow over a sequence of content slides.
///
/// The first slide is marked active; indicators and prev/next controls
/// reference the carousel's render-time DOM id.
#[derive(Debug, Default)]
pub struct Carousel {
	slides: Vec<Content>,
}

impl Carousel {
	/// Create an empty carousel
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a slide
	pub fn slide(mut self, content: impl Into<Content>) -> Self {
		self.slides.push(content.into());
		self
	}
}

impl Widget for Carousel {
	fn name(&self) -> &'static str {
		"Carousel"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let id = ctx.unique_name("carousel");
		let indicator = Template::parse(INDICATOR)?;
		let slide = Template::parse(SLIDE)?;

		let mut indicators = String::new();
		let mut slides = String::new();
		for (index, content) in self.slides.iter().enumerate() {
			let active = if index == 0 { " active" } else { "" };
			indicators.push_str(&indicator.render(
				&Slots::new()
					.set("id", id.as_str())
					.set("index", index.to_string())
					.set("active", if index == 0 { " class=\"active\"" } else { "" }),
			)?);
			slides.push_str(&slide.render(
				&Slots::new()
					.set("active", active)
					.set("content", content.render(ctx)?),
			)?);
		}

		Template::parse(TEMPLATE)?.render(
			&Slots::new()
				.set("id", id)
				.set("indicators", indicators)
				.set("slides", slides),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_slide_is_active() {
		let ctx = RenderContext::new();
		let html = Carousel::new()
			.slide("one")
			.slide("two")
			.render(&ctx)
			.unwrap();

		assert!(html.contains("<div class=\"item active\">one</div>"));
		assert!(html.contains("<div class=\"item\">two</div>"));
	}

	#[test]
	fn test_indicators_and_controls_reference_carousel_id() {
		let ctx = RenderContext::new();
		let html = Carousel::new().slide("x").slide("y").render(&ctx).unwrap();

		assert!(html.contains("id=\"carousel_0\""));
		assert!(html.contains("data-target=\"#carousel_0\" data-slide-to=\"0\" class=\"active\""));
		assert!(html.contains("data-slide-to=\"1\""));
		assert!(html.contains("href=\"#carousel_0\" role=\"button\" data-slide=\"prev\""));
	}
}
