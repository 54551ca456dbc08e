//! # nuages-charts
//!
//! Chart widget for nuages. The crate owns two things: expanding flat
//! dotted-key option lists into the nested JSON the charting library wants,
//! and the [`Graph`] widget that hands data plus options to the client-side
//! chart bootstrap.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod graph;
pub mod options;

pub use graph::{ChartKind, Graph};
pub use options::expand_options;

nuages_core::widget_into_content!(Graph);

/// Commonly used items, for glob import by page code
pub mod prelude {
	pub use crate::graph::{ChartKind, Graph};
	pub use crate::options::expand_options;
}
