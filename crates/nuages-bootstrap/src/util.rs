//! Attribute and class helpers shared by the widgets

/// Join extra CSS classes with a leading space per class, attribute-escaped
pub(crate) fn extra_classes(classes: &[String]) -> String {
	let mut out = String::new();
	for class in classes {
		out.push(' ');
		out.push_str(&html_escape::encode_double_quoted_attribute(class));
	}
	out
}

/// Render an optional HTML attribute, value attribute-escaped.
///
/// Returns `" name=\"value\""` (with the leading space) or the empty string,
/// so the result can be dropped straight into a template slot.
pub(crate) fn attr(name: &str, value: Option<&str>) -> String {
	match value {
		Some(value) => format!(
			" {name}=\"{}\"",
			html_escape::encode_double_quoted_attribute(value)
		),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extra_classes_prefixes_each_with_space() {
		let classes = vec!["a".to_string(), "b".to_string()];

		assert_eq!(extra_classes(&classes), " a b");
		assert_eq!(extra_classes(&[]), "");
	}

	#[test]
	fn test_attr_escapes_value() {
		assert_eq!(attr("style", Some("a\"b")), " style=\"a&quot;b\"");
		assert_eq!(attr("style", None), "");
	}
}
