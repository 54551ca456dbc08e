//! # Nuages
//!
//! Declarative page composition for Rust, inspired by django-pages-style
//! libraries: assemble HTML pages out of composable widget values instead of
//! writing templates. A page is a tree of content nodes (text, markdown,
//! layout grids, bootstrap widgets, charts, forms) flattened into one HTML
//! string at request time.
//!
//! ## Feature Flags
//!
//! - `minimal` - the render contract and composition engine only
//! - `full` (default) - every widget family and the page registry
//! - `bootstrap` - layout grid and bootstrap widgets
//! - `charts` - chart widget and options expansion
//! - `forms` - declarative forms with POST binding and validation
//! - `pages` - Page trait, registry, and request dispatch
//!
//! ## Example
//!
//! ```
//! use nuages::prelude::*;
//!
//! struct Landing;
//!
//! impl Page for Landing {
//!     fn content(&self, _request: &PageRequest) -> RenderResult<Content> {
//!         Ok(Row::new(Column::new(Text::new("hello")).width(6))
//!             .child(Column::new(Markdown::new("*world*")).width(6))
//!             .into())
//!     }
//! }
//!
//! let registry = PageRegistry::new();
//! registry.register("Landing", || Landing);
//!
//! let response = registry.respond("Landing", &PageRequest::get()).unwrap();
//! assert!(response.body().contains("col-md-6"));
//! ```

// Core is always available
pub use nuages_core::{content, context, error, template};
pub use nuages_core::{Content, IdGenerator, RenderContext, RenderError, RenderResult, Widget};

/// Bootstrap layout and widget library
#[cfg(feature = "bootstrap")]
pub use nuages_bootstrap as bootstrap;

/// Chart widget and dotted-key options expansion
#[cfg(feature = "charts")]
pub use nuages_charts as charts;

/// Declarative forms with POST binding and validation
#[cfg(feature = "forms")]
pub use nuages_forms as forms;

/// Page trait, registry, and request dispatch
#[cfg(feature = "pages")]
pub use nuages_pages as pages;

/// Commonly used items across all enabled features
pub mod prelude {
	pub use nuages_core::prelude::*;

	#[cfg(feature = "bootstrap")]
	pub use nuages_bootstrap::prelude::*;

	#[cfg(feature = "charts")]
	pub use nuages_charts::prelude::*;

	#[cfg(feature = "forms")]
	pub use nuages_forms::prelude::*;

	#[cfg(feature = "pages")]
	pub use nuages_pages::prelude::*;
}
