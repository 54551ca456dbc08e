//! # nuages-bootstrap
//!
//! Bootstrap layout and widget library for nuages. Every type here
//! implements the core [`Widget`](nuages_core::content::Widget) contract and
//! converts into [`Content`](nuages_core::content::Content), so pages compose
//! widgets, strings, and sequences freely:
//!
//! ```
//! use nuages_bootstrap::prelude::*;
//! use nuages_core::prelude::*;
//!
//! let row = Row::new(Column::new(Text::new("hello")).width(6))
//!     .child(Column::new(Markdown::new("*world*")).width(6));
//!
//! let ctx = RenderContext::new();
//! let html = row.render(&ctx).unwrap();
//! assert!(html.contains("col-md-6"));
//! ```
//!
//! Text content is HTML-escaped by default; [`Html`](text::Html) is the
//! explicit raw passthrough for trusted markup.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod accordion;
pub mod button;
pub mod carousel;
pub mod jumbotron;
pub mod layout;
pub mod modal;
pub mod panel;
pub mod text;
mod util;
pub mod variant;

pub use accordion::Accordion;
pub use button::Button;
pub use carousel::Carousel;
pub use jumbotron::Jumbotron;
pub use layout::{Column, Container, Row, WrapMode};
pub use modal::Modal;
pub use panel::Panel;
pub use text::{Html, Markdown, Text};
pub use variant::{Size, Variant};

nuages_core::widget_into_content!(
	Accordion, Button, Carousel, Column, Container, Html, Jumbotron, Markdown, Modal, Panel,
	Row, Text,
);

/// Commonly used items, for glob import by page code
pub mod prelude {
	pub use crate::accordion::Accordion;
	pub use crate::button::Button;
	pub use crate::carousel::Carousel;
	pub use crate::jumbotron::Jumbotron;
	pub use crate::layout::{Column, Container, Row, WrapMode};
	pub use crate::modal::Modal;
	pub use crate::panel::Panel;
	pub use crate::text::{Html, Markdown, Text};
	pub use crate::variant::{Size, Variant};
}
