//! Slot-based HTML templating
//!
//! Widgets build their markup through one shared utility instead of ad hoc
//! per-widget string formatting. A [`Template`] is parsed from a literal with
//! `{slot}` placeholders and rendered against a set of named [`Slots`];
//! rendering a placeholder with no supplied value is an error that aborts
//! the enclosing page render.

use crate::error::{RenderError, RenderResult};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Slot(String),
}

/// A parsed slot template.
///
/// Placeholders are written `{name}`; literal braces are escaped as `{{`
/// and `}}`.
#[derive(Debug, Clone)]
pub struct Template {
	segments: Vec<Segment>,
}

impl Template {
	/// Parse a template from its source text.
	///
	/// Fails on an unclosed `{`, an unmatched `}`, or an empty placeholder.
	pub fn parse(source: &str) -> RenderResult<Template> {
		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut chars = source.chars().peekable();

		while let Some(ch) = chars.next() {
			match ch {
				'{' if chars.peek() == Some(&'{') => {
					chars.next();
					literal.push('{');
				}
				'}' if chars.peek() == Some(&'}') => {
					chars.next();
					literal.push('}');
				}
				'{' => {
					let mut name = String::new();
					loop {
						match chars.next() {
							Some('}') => break,
							Some(inner) => name.push(inner),
							None => {
								return Err(RenderError::InvalidTemplate(format!(
									"unclosed placeholder in {source:?}"
								)));
							}
						}
					}
					if name.is_empty() {
						return Err(RenderError::InvalidTemplate(format!(
							"empty placeholder in {source:?}"
						)));
					}
					if !literal.is_empty() {
						segments.push(Segment::Literal(std::mem::take(&mut literal)));
					}
					segments.push(Segment::Slot(name));
				}
				'}' => {
					return Err(RenderError::InvalidTemplate(format!(
						"unmatched '}}' in {source:?}"
					)));
				}
				other => literal.push(other),
			}
		}
		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Ok(Template { segments })
	}

	/// Render the template against the supplied slot values.
	///
	/// Every placeholder must have a value; a missing one yields
	/// [`RenderError::MissingSlot`].
	pub fn render(&self, slots: &Slots) -> RenderResult<String> {
		let mut out = String::new();
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => out.push_str(text),
				Segment::Slot(name) => match slots.get(name) {
					Some(value) => out.push_str(value),
					None => return Err(RenderError::MissingSlot(name.clone())),
				},
			}
		}
		Ok(out)
	}

	/// Names of the placeholders this template expects, in encounter order
	pub fn slot_names(&self) -> Vec<&str> {
		self.segments
			.iter()
			.filter_map(|segment| match segment {
				Segment::Slot(name) => Some(name.as_str()),
				Segment::Literal(_) => None,
			})
			.collect()
	}
}

/// Named values supplied to [`Template::render`]
#[derive(Debug, Clone, Default)]
pub struct Slots {
	values: HashMap<String, String>,
}

impl Slots {
	/// Create an empty slot set
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder method supplying one slot value
	pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Look up a slot value
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_render_fills_slots() {
		let template = Template::parse("<div class=\"{class}\">{content}</div>").unwrap();
		let html = template
			.render(&Slots::new().set("class", "row").set("content", "hello"))
			.unwrap();

		assert_eq!(html, "<div class=\"row\">hello</div>");
	}

	#[test]
	fn test_missing_slot_is_an_error() {
		let template = Template::parse("{content}").unwrap();

		assert!(matches!(
			template.render(&Slots::new()),
			Err(RenderError::MissingSlot(name)) if name == "content"
		));
	}

	#[test]
	fn test_escaped_braces_are_literal() {
		let template = Template::parse("fn main() {{ {body} }}").unwrap();
		let html = template.render(&Slots::new().set("body", "x")).unwrap();

		assert_eq!(html, "fn main() { x }");
	}

	#[rstest]
	#[case("{unclosed")]
	#[case("stray } brace")]
	#[case("{}")]
	fn test_malformed_templates_are_rejected(#[case] source: &str) {
		assert!(matches!(
			Template::parse(source),
			Err(RenderError::InvalidTemplate(_))
		));
	}

	#[test]
	fn test_slot_names_in_encounter_order() {
		let template = Template::parse("{a}-{b}-{a}").unwrap();

		assert_eq!(template.slot_names(), vec!["a", "b", "a"]);
	}
}
