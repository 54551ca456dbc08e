//! Property-based tests for the content composition engine

use nuages_core::content::{Content, Widget};
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use proptest::prelude::*;

struct Echo(String);

impl Widget for Echo {
	fn name(&self) -> &'static str {
		"Echo"
	}

	fn render(&self, _ctx: &RenderContext) -> RenderResult<String> {
		Ok(self.0.clone())
	}
}

proptest! {
	#[test]
	fn prop_string_content_passes_through(text in ".*") {
		// Arrange
		let ctx = RenderContext::new();
		let content = Content::from(text.clone());

		// Act & Assert
		prop_assert_eq!(content.render(&ctx).unwrap(), text);
	}

	#[test]
	fn prop_sequence_render_equals_concatenation(parts in prop::collection::vec(".*", 0..8)) {
		// Arrange
		let ctx = RenderContext::new();
		let sequence: Content = parts
			.iter()
			.map(|part| Content::widget(Echo(part.clone())))
			.collect();

		// Act
		let rendered = sequence.render(&ctx).unwrap();

		// Assert
		prop_assert_eq!(rendered, parts.concat());
	}

	#[test]
	fn prop_unique_names_are_distinct_and_increasing(count in 1usize..64) {
		// Arrange
		let ctx = RenderContext::new();

		// Act
		let names: Vec<String> = (0..count).map(|_| ctx.unique_name("x")).collect();

		// Assert
		for (n, name) in names.iter().enumerate() {
			let expected = format!("x_{n}");
			prop_assert_eq!(name.as_str(), expected.as_str());
		}
	}
}
