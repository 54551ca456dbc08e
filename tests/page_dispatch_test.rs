//! End-to-end tests: compose pages from widgets, register them, and dispatch
//! requests through the registry.

use http::StatusCode;
use nuages::prelude::*;
use serde_json::json;
use std::collections::HashMap;

struct Dashboard;

impl Page for Dashboard {
	fn title(&self) -> String {
		"Dashboard".to_string()
	}

	fn content(&self, _request: &PageRequest) -> RenderResult<Content> {
		let chart = Graph::new(ChartKind::Pie, json!([["a", 1], ["b", 2]]))
			.option("title.text", "Breakdown");
		let accordion = Accordion::new()
			.child(Panel::new(Markdown::new("First *section*")).heading("One"))
			.child(Panel::new(Text::new("<plain>")).heading("Two"));

		Ok(Container::new(
			Row::new(Column::new(accordion).width(8)).child(Column::new(chart).width(4)),
		)
		.into())
	}
}

struct Contact;

impl Contact {
	fn form(&self) -> Form {
		Form::new("contact")
			.field(Field::new("name", "Name", FieldKind::Text).required())
			.field(Field::new("email", "Email", FieldKind::Email).required())
	}
}

impl Page for Contact {
	fn content(&self, request: &PageRequest) -> RenderResult<Content> {
		let mut form = self.form();
		if request.is_post() {
			form.bind(request.form_data());
			if form.is_valid() {
				return Ok(Content::from("<p>Thanks!</p>"));
			}
		}
		Ok(Row::new(Column::new(form).width(6)).into())
	}
}

fn registry() -> PageRegistry {
	let registry = PageRegistry::new();
	registry.register("Dashboard", || Dashboard);
	registry.register("Contact", || Contact);
	registry
}

#[test]
fn test_dashboard_renders_widget_tree() {
	let response = registry().respond("Dashboard", &PageRequest::get()).unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = response.body();
	// layout
	assert!(body.starts_with("<div class=\"container\"><div class=\"row\">"));
	assert!(body.contains("col-md-8"));
	assert!(body.contains("col-md-4"));
	// accordion panels reference the accordion id minted this render
	assert!(body.contains("id=\"accordion_0\""));
	assert!(body.contains("data-parent=\"#accordion_0\""));
	// markdown rendered, plain text escaped
	assert!(body.contains("<em>section</em>"));
	assert!(body.contains("&lt;plain&gt;"));
	// chart script with expanded options
	assert!(body.contains("nuages.renderChart(\"graph_3\""));
	assert!(body.contains("\"title\":{\"text\":\"Breakdown\"}"));
}

#[test]
fn test_ids_restart_for_every_request() {
	let registry = registry();
	let first = registry.respond("Dashboard", &PageRequest::get()).unwrap();
	let second = registry.respond("Dashboard", &PageRequest::get()).unwrap();

	assert_eq!(first.body(), second.body());
}

#[test]
fn test_unknown_page_is_404() {
	let response = registry().respond("Missing", &PageRequest::get()).unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(response.body(), "Page Missing not found");
}

#[test]
fn test_contact_get_shows_unbound_form() {
	let response = registry().respond("Contact", &PageRequest::get()).unwrap();

	let body = response.body();
	assert!(body.contains("<form id=\"form_contact\" method=\"post\">"));
	assert!(!body.contains("has-error"));
}

#[test]
fn test_contact_post_with_invalid_data_redisplays_with_errors() {
	let request = PageRequest::post(HashMap::from([(
		"name".to_string(),
		"Ada".to_string(),
	)]));
	let response = registry().respond("Contact", &request).unwrap();

	let body = response.body();
	assert!(body.contains("has-error"));
	assert!(body.contains("This field is required."));
	// previously entered values survive redisplay
	assert!(body.contains("value=\"Ada\""));
}

#[test]
fn test_contact_post_with_valid_data() {
	let request = PageRequest::post(HashMap::from([
		("name".to_string(), "Ada".to_string()),
		("email".to_string(), "ada@example.com".to_string()),
	]));
	let response = registry().respond("Contact", &request).unwrap();

	assert_eq!(response.body(), "<p>Thanks!</p>");
}

#[test]
fn test_database_resolved_values_compose() {
	// Already-resolved values arrive as JSON and join the tree as content
	let tags = json!(["<li>rust</li>", "<li>web</li>"]);
	let content = Content::from_value(&tags).unwrap();
	let ctx = RenderContext::new();

	assert_eq!(content.render(&ctx).unwrap(), "<li>rust</li><li>web</li>");
}

#[test]
fn test_unsupported_database_value_fails_the_render() {
	assert!(matches!(
		Content::from_value(&json!({"unexpected": "object"})),
		Err(RenderError::UnsupportedContent(_))
	));
}
