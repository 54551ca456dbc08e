//! Declarative form: field list, POST binding, and bootstrap rendering

use crate::field::{Field, FieldKind};
use nuages_core::content::Widget;
use nuages_core::context::RenderContext;
use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};
use std::collections::HashMap;

const FORM: &str = "<form id=\"{id}\" method=\"post\"{action}>{fields}\
<button type=\"submit\" class=\"btn btn-primary\">{submit}</button></form>";

const GROUP: &str = "<div class=\"form-group{error_class}\">\
<label class=\"control-label\" for=\"id_{name}\">{label}</label>\
{input}{errors}{help}</div>";

const ERROR: &str = "<span class=\"help-block\">{message}</span>";

const HELP: &str = "<span class=\"help-block text-muted\">{help}</span>";

/// A declarative form.
///
/// Built once per request, optionally bound to POST data, validated, and
/// rendered as a bootstrap form. Forms are widgets, so they drop into a
/// page's content tree like anything else.
#[derive(Debug, Clone)]
pub struct Form {
	name: String,
	action: Option<String>,
	submit_label: String,
	fields: Vec<Field>,
	bound: bool,
}

impl Form {
	/// Create an empty form with the given name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			action: None,
			submit_label: "Submit".to_string(),
			fields: Vec::new(),
			bound: false,
		}
	}

	/// Append a field
	pub fn field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	/// Set the form's action URL (default: post back to the same page)
	pub fn action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	/// Set the submit button label
	pub fn submit_label(mut self, label: impl Into<String>) -> Self {
		self.submit_label = label.into();
		self
	}

	/// Bind POST data to the form and validate every field
	pub fn bind(&mut self, data: &HashMap<String, String>) {
		for field in &mut self.fields {
			field.bind(data.get(field.name()).map(String::as_str));
			field.validate();
		}
		self.bound = true;
	}

	/// Whether the form has been bound to request data
	pub fn is_bound(&self) -> bool {
		self.bound
	}

	/// Whether the form is bound and every field validated cleanly
	pub fn is_valid(&self) -> bool {
		self.bound && self.fields.iter().all(|field| field.errors().is_empty())
	}

	/// Validation errors per field name (only fields with errors appear)
	pub fn errors(&self) -> HashMap<&str, &[String]> {
		self.fields
			.iter()
			.filter(|field| !field.errors().is_empty())
			.map(|field| (field.name(), field.errors()))
			.collect()
	}

	/// The bound (or initial) value of a field
	pub fn value(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|field| field.name() == name)
			.and_then(Field::value)
	}

	/// The fields of this form, in declaration order
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}
}

impl Widget for Form {
	fn name(&self) -> &'static str {
		"Form"
	}

	fn render(&self, _ctx: &RenderContext) -> RenderResult<String> {
		let group = Template::parse(GROUP)?;
		let error = Template::parse(ERROR)?;
		let help = Template::parse(HELP)?;

		let mut fields = String::new();
		for field in &self.fields {
			// hidden inputs carry no label or error chrome
			if field.kind() == FieldKind::Hidden {
				fields.push_str(&field.render_input()?);
				continue;
			}
			let mut errors = String::new();
			for message in field.errors() {
				errors.push_str(&error.render(
					&Slots::new()
						.set("message", html_escape::encode_text(message).into_owned()),
				)?);
			}
			let help_block = match field.help() {
				Some(text) => help.render(
					&Slots::new().set("help", html_escape::encode_text(text).into_owned()),
				)?,
				None => String::new(),
			};
			fields.push_str(&group.render(
				&Slots::new()
					.set(
						"error_class",
						if field.errors().is_empty() { "" } else { " has-error" },
					)
					.set(
						"name",
						html_escape::encode_double_quoted_attribute(field.name()).into_owned(),
					)
					.set("label", html_escape::encode_text(field.label()).into_owned())
					.set("input", field.render_input()?)
					.set("errors", errors)
					.set("help", help_block),
			)?);
		}

		Template::parse(FORM)?.render(
			&Slots::new()
				.set(
					"id",
					format!(
						"form_{}",
						html_escape::encode_double_quoted_attribute(&self.name)
					),
				)
				.set(
					"action",
					match &self.action {
						Some(action) => format!(
							" action=\"{}\"",
							html_escape::encode_double_quoted_attribute(action)
						),
						None => String::new(),
					},
				)
				.set("fields", fields)
				.set(
					"submit",
					html_escape::encode_text(&self.submit_label).into_owned(),
				),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn contact_form() -> Form {
		Form::new("contact")
			.field(Field::new("name", "Name", FieldKind::Text).required())
			.field(Field::new("email", "Email", FieldKind::Email).required())
			.field(Field::new("message", "Message", FieldKind::Textarea))
	}

	#[test]
	fn test_unbound_form_is_not_valid() {
		assert!(!contact_form().is_valid());
	}

	#[test]
	fn test_bind_with_valid_data() {
		let mut form = contact_form();
		form.bind(&HashMap::from([
			("name".to_string(), "Ada".to_string()),
			("email".to_string(), "ada@example.com".to_string()),
		]));

		assert!(form.is_valid());
		assert_eq!(form.value("name"), Some("Ada"));
	}

	#[test]
	fn test_bind_with_missing_required_field() {
		let mut form = contact_form();
		form.bind(&HashMap::from([(
			"email".to_string(),
			"ada@example.com".to_string(),
		)]));

		assert!(!form.is_valid());
		assert_eq!(form.errors()["name"], ["This field is required."]);
	}

	#[test]
	fn test_render_marks_error_fields() {
		let mut form = contact_form();
		form.bind(&HashMap::new());
		let ctx = RenderContext::new();
		let html = form.render(&ctx).unwrap();

		assert!(html.contains("form-group has-error"));
		assert!(html.contains("This field is required."));
	}

	#[test]
	fn test_render_produces_bootstrap_form() {
		let ctx = RenderContext::new();
		let html = contact_form().render(&ctx).unwrap();

		assert!(html.starts_with("<form id=\"form_contact\" method=\"post\">"));
		assert!(html.contains("<label class=\"control-label\" for=\"id_name\">Name</label>"));
		assert!(html.contains("class=\"form-control\""));
		assert!(html.ends_with(
			"<button type=\"submit\" class=\"btn btn-primary\">Submit</button></form>"
		));
	}

	#[test]
	fn test_action_attribute() {
		let ctx = RenderContext::new();
		let html = contact_form().action("/pages/Contact").render(&ctx).unwrap();

		assert!(html.contains("action=\"/pages/Contact\""));
	}
}
