//! Dotted-key options expansion
//!
//! Chart options are authored as a flat list of dotted keys
//! (`"title.text"`) and expanded into the nested JSON object the charting
//! library expects.

use serde_json::{Map, Value as JsonValue};

/// Expand flat dotted-key options into a nested JSON object.
///
/// Each key is split on `.`; objects are created or reused along the path
/// and the value assigned at the leaf. Later entries win on duplicate keys,
/// and a path that crosses a previously assigned scalar replaces that scalar
/// with an object.
///
/// ```
/// use nuages_charts::options::expand_options;
/// use serde_json::json;
///
/// let nested = expand_options(vec![
///     ("title.text", json!("A")),
///     ("subtitle.text", json!("B")),
/// ]);
/// assert_eq!(nested, json!({"title": {"text": "A"}, "subtitle": {"text": "B"}}));
/// ```
pub fn expand_options<I, K>(flat: I) -> JsonValue
where
	I: IntoIterator<Item = (K, JsonValue)>,
	K: AsRef<str>,
{
	let mut root = Map::new();
	for (key, value) in flat {
		insert_dotted(&mut root, key.as_ref(), value);
	}
	JsonValue::Object(root)
}

fn insert_dotted(map: &mut Map<String, JsonValue>, key: &str, value: JsonValue) {
	match key.split_once('.') {
		None => {
			map.insert(key.to_string(), value);
		}
		Some((head, rest)) => {
			let entry = map
				.entry(head.to_string())
				.or_insert_with(|| JsonValue::Object(Map::new()));
			if !entry.is_object() {
				*entry = JsonValue::Object(Map::new());
			}
			if let JsonValue::Object(child) = entry {
				insert_dotted(child, rest, value);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_sibling_paths_nest_independently() {
		let nested = expand_options(vec![
			("title.text", json!("A")),
			("subtitle.text", json!("B")),
		]);

		assert_eq!(
			nested,
			json!({"title": {"text": "A"}, "subtitle": {"text": "B"}})
		);
	}

	#[test]
	fn test_shared_prefix_reuses_nested_object() {
		let nested = expand_options(vec![
			("legend.title.text", json!("Legend")),
			("legend.title.style", json!("bold")),
			("legend.enabled", json!(true)),
		]);

		assert_eq!(
			nested,
			json!({
				"legend": {
					"title": {"text": "Legend", "style": "bold"},
					"enabled": true,
				}
			})
		);
	}

	#[test]
	fn test_undotted_key_assigns_at_top_level() {
		let nested = expand_options(vec![("animation", json!(false))]);

		assert_eq!(nested, json!({"animation": false}));
	}

	#[test]
	fn test_later_value_wins_on_duplicate_key() {
		let nested = expand_options(vec![
			("title.text", json!("first")),
			("title.text", json!("second")),
		]);

		assert_eq!(nested, json!({"title": {"text": "second"}}));
	}

	#[test]
	fn test_path_through_scalar_replaces_it_with_object() {
		let nested = expand_options(vec![
			("title", json!("plain")),
			("title.text", json!("nested")),
		]);

		assert_eq!(nested, json!({"title": {"text": "nested"}}));
	}

	#[test]
	fn test_empty_input_yields_empty_object() {
		let nested = expand_options(Vec::<(&str, JsonValue)>::new());

		assert_eq!(nested, json!({}));
	}
}
