//! Demo pages: registers a handful of pages exercising every widget family
//! and prints their rendered HTML to stdout.
//!
//! ```text
//! cargo run -p nuages-demos --bin demo-pages
//! ```

use nuages::prelude::*;
use serde_json::json;

struct Welcome;

impl Page for Welcome {
	fn title(&self) -> String {
		"Welcome".to_string()
	}

	fn content(&self, _request: &PageRequest) -> RenderResult<Content> {
		Ok(Container::new(
			Jumbotron::new(Markdown::new(
				"Compose pages out of **widgets** instead of templates.",
			))
			.title("Nuages"),
		)
		.child(
			Row::new(Column::new(Text::new("Left column")).width(6))
				.child(Column::new(Text::new("Right column")).width(6)),
		)
		.child(Button::new("Read the docs").href("/pages/Docs").variant(Variant::Primary))
		.into())
	}
}

struct Widgets;

impl Page for Widgets {
	fn title(&self) -> String {
		"Widgets".to_string()
	}

	fn content(&self, _request: &PageRequest) -> RenderResult<Content> {
		let accordion = Accordion::new()
			.child(Panel::new(Markdown::new("Accordion panels collapse.")).heading("First"))
			.child(Panel::new(Text::new("Second panel body")).heading("Second"));
		let modal = Modal::new("Show details", Markdown::new("Some *details*."))
			.title("Details")
			.size(Size::Lg);
		let carousel = Carousel::new()
			.slide(Html::new("<img src=\"/static/one.png\" alt=\"one\">"))
			.slide(Html::new("<img src=\"/static/two.png\" alt=\"two\">"));
		let chart = Graph::new(ChartKind::Column, json!([["Q1", 4], ["Q2", 7], ["Q3", 5]]))
			.option("title.text", "Quarterly")
			.option("legend.enabled", false);

		let side = Content::Sequence(vec![modal.into(), carousel.into(), chart.into()]);
		Ok(Container::new(
			Row::new(Column::new(accordion).width(6)).child(Column::new(side).width(6)),
		)
		.into())
	}
}

struct SignUp;

impl Page for SignUp {
	fn title(&self) -> String {
		"Sign up".to_string()
	}

	fn content(&self, request: &PageRequest) -> RenderResult<Content> {
		let mut form = Form::new("signup")
			.field(Field::new("name", "Name", FieldKind::Text).required().max_length(60))
			.field(Field::new("email", "Email", FieldKind::Email).required())
			.field(
				Field::new("plan", "Plan", FieldKind::Select)
					.choice("free", "Free")
					.choice("pro", "Pro"),
			)
			.field(Field::new("updates", "Send me updates", FieldKind::Checkbox))
			.submit_label("Sign up");

		if request.is_post() {
			form.bind(request.form_data());
			if form.is_valid() {
				return Ok(Content::from("<p>Account created.</p>"));
			}
		}
		Ok(Row::new(Column::new(form).width(6)).into())
	}
}

fn main() {
	let registry = PageRegistry::new();
	registry.register("Welcome", || Welcome);
	registry.register("Widgets", || Widgets);
	registry.register("SignUp", || SignUp);

	for name in registry.names() {
		match registry.respond(&name, &PageRequest::get()) {
			Ok(response) => {
				println!("=== /pages/{name} ({})", response.status());
				println!("{}\n", response.body());
			}
			Err(err) => eprintln!("=== /pages/{name} failed: {err}"),
		}
	}
}
