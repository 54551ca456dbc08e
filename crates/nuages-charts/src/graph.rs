//! Graph widget
//!
//! Supplies data and expanded options to the client-side charting library as
//! JSON; the `<script>` payload is consumed by the chart bootstrap shipped
//! with the page chrome. The wire format beyond that handoff is the chart
//! library's business.

use crate::options::expand_options;
use nuages_core::content::Widget;
use nuages_core::context::RenderContext;
use nuages_core::error::{RenderError, RenderResult};
use nuages_core::template::{Slots, Template};
use serde::Serialize;
use serde_json::Value as JsonValue;

const TEMPLATE: &str = "<div id=\"{id}\" class=\"chart-container\"></div>\
<script>nuages.renderChart(\"{id}\", {config});</script>";

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
	/// Line chart
	Line,
	/// Horizontal bar chart
	Bar,
	/// Vertical column chart
	Column,
	/// Pie chart
	Pie,
	/// Filled area chart
	Area,
}

impl ChartKind {
	/// The chart library's name for this kind
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Line => "line",
			Self::Bar => "bar",
			Self::Column => "column",
			Self::Pie => "pie",
			Self::Area => "area",
		}
	}
}

/// Chart widget fed by already-resolved series data.
///
/// Options are collected as dotted keys and expanded with
/// [`expand_options`] when the widget renders.
#[derive(Debug, Clone)]
pub struct Graph {
	kind: ChartKind,
	data: JsonValue,
	options: Vec<(String, JsonValue)>,
}

impl Graph {
	/// Create a graph of the given kind over the given series data
	pub fn new(kind: ChartKind, data: impl Into<JsonValue>) -> Self {
		Self {
			kind,
			data: data.into(),
			options: Vec::new(),
		}
	}

	/// Supply one chart option under a dotted key
	///
	/// ```
	/// use nuages_charts::graph::{ChartKind, Graph};
	/// use serde_json::json;
	///
	/// let graph = Graph::new(ChartKind::Line, json!([1, 2, 3]))
	///     .option("title.text", "Trend")
	///     .option("legend.enabled", false);
	/// ```
	pub fn option(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		self.options.push((key.into(), value.into()));
		self
	}
}

impl Widget for Graph {
	fn name(&self) -> &'static str {
		"Graph"
	}

	fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
		let id = ctx.unique_name("graph");
		let options = expand_options(
			self.options
				.iter()
				.map(|(key, value)| (key.as_str(), value.clone())),
		);
		let config = serde_json::json!({
			"type": self.kind,
			"data": self.data,
			"options": options,
		});
		let config = serde_json::to_string(&config)
			.map_err(|err| RenderError::Rendering(err.to_string()))?;
		Template::parse(TEMPLATE)?.render(&Slots::new().set("id", id).set("config", config))
	}
}
