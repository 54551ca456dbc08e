//! Form field definitions, validation, and per-field HTML rendering

use nuages_core::error::RenderResult;
use nuages_core::template::{Slots, Template};

const INPUT: &str =
	"<input type=\"{type}\" class=\"form-control\" id=\"id_{name}\" name=\"{name}\" \
value=\"{value}\"{required}>";

const TEXTAREA: &str =
	"<textarea class=\"form-control\" id=\"id_{name}\" name=\"{name}\"{required}>\
{value}</textarea>";

const CHECKBOX: &str = "<div class=\"checkbox\"><label>\
<input type=\"checkbox\" id=\"id_{name}\" name=\"{name}\"{checked}> {label}\
</label></div>";

const SELECT: &str = "<select class=\"form-control\" id=\"id_{name}\" name=\"{name}\">\
{options}</select>";

const OPTION: &str = "<option value=\"{value}\"{selected}>{label}</option>";

/// Kind of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Single-line text input
	Text,
	/// Password input
	Password,
	/// Email input with shape validation
	Email,
	/// Numeric input
	Number,
	/// Multi-line text area
	Textarea,
	/// Checkbox
	Checkbox,
	/// Dropdown over declared choices
	Select,
	/// Hidden input
	Hidden,
}

impl FieldKind {
	fn input_type(&self) -> Option<&'static str> {
		match self {
			Self::Text => Some("text"),
			Self::Password => Some("password"),
			Self::Email => Some("email"),
			Self::Number => Some("number"),
			Self::Hidden => Some("hidden"),
			Self::Textarea | Self::Checkbox | Self::Select => None,
		}
	}
}

/// One field in a form
#[derive(Debug, Clone)]
pub struct Field {
	name: String,
	label: String,
	kind: FieldKind,
	required: bool,
	max_length: Option<usize>,
	choices: Vec<(String, String)>,
	help_text: Option<String>,
	value: Option<String>,
	errors: Vec<String>,
}

impl Field {
	/// Create a field with the given name, label, and kind
	pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			kind,
			required: false,
			max_length: None,
			choices: Vec::new(),
			help_text: None,
			value: None,
			errors: Vec::new(),
		}
	}

	/// Mark the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Limit the accepted value length
	pub fn max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Add a `(value, label)` choice (Select fields)
	pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.choices.push((value.into(), label.into()));
		self
	}

	/// Set the help text shown under the field
	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set the initial value
	pub fn initial(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Field name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Field label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Field kind
	pub fn kind(&self) -> FieldKind {
		self.kind
	}

	/// Current value, bound or initial
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Help text shown under the field, if any
	pub fn help(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	/// Validation errors from the last [`validate`](Self::validate)
	pub fn errors(&self) -> &[String] {
		&self.errors
	}

	pub(crate) fn bind(&mut self, value: Option<&str>) {
		self.value = match self.kind {
			// an unchecked checkbox is simply absent from the POST data
			FieldKind::Checkbox => value.map(|_| "on".to_string()),
			_ => value.map(str::to_string),
		};
	}

	pub(crate) fn validate(&mut self) {
		self.errors.clear();
		let value = self.value.as_deref().unwrap_or("");

		if self.required && value.is_empty() {
			self.errors.push("This field is required.".to_string());
			return;
		}
		if let Some(max_length) = self.max_length {
			if value.chars().count() > max_length {
				self.errors.push(format!(
					"Ensure this value has at most {max_length} characters."
				));
			}
		}
		if self.kind == FieldKind::Email && !value.is_empty() {
			let valid = value
				.split_once('@')
				.is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
			if !valid {
				self.errors.push("Enter a valid email address.".to_string());
			}
		}
	}

	/// Render the bare control markup for this field
	pub fn render_input(&self) -> RenderResult<String> {
		let name = html_escape::encode_double_quoted_attribute(&self.name).into_owned();
		let value = html_escape::encode_double_quoted_attribute(
			self.value.as_deref().unwrap_or(""),
		)
		.into_owned();
		let required = if self.required { " required" } else { "" };

		match self.kind {
			FieldKind::Textarea => Template::parse(TEXTAREA)?.render(
				&Slots::new()
					.set("name", name)
					.set("value", html_escape::encode_text(self.value.as_deref().unwrap_or("")).into_owned())
					.set("required", required),
			),
			FieldKind::Checkbox => Template::parse(CHECKBOX)?.render(
				&Slots::new()
					.set("name", name)
					.set("checked", if self.value.is_some() { " checked" } else { "" })
					.set("label", html_escape::encode_text(&self.label).into_owned()),
			),
			FieldKind::Select => {
				let option = Template::parse(OPTION)?;
				let mut options = String::new();
				for (choice_value, choice_label) in &self.choices {
					let selected = self.value.as_deref() == Some(choice_value.as_str());
					options.push_str(&option.render(
						&Slots::new()
							.set(
								"value",
								html_escape::encode_double_quoted_attribute(choice_value)
									.into_owned(),
							)
							.set("selected", if selected { " selected" } else { "" })
							.set("label", html_escape::encode_text(choice_label).into_owned()),
					)?);
				}
				Template::parse(SELECT)?
					.render(&Slots::new().set("name", name).set("options", options))
			}
			kind => Template::parse(INPUT)?.render(
				&Slots::new()
					.set("type", kind.input_type().unwrap_or("text"))
					.set("name", name)
					.set("value", value)
					.set("required", required),
			),
		}
	}
}
