//! # nuages-core
//!
//! The render contract and composition engine underneath the nuages page
//! library. Everything a page is made of implements one small capability:
//! render yourself to an HTML fragment given the ambient [`RenderContext`].
//!
//! ## Architecture
//!
//! ```text
//! nuages-core
//! ├── content  - Widget trait, Content tree, recursive composition engine
//! ├── context  - per-render ambient scope and unique id generation
//! ├── template - slot-based HTML templating shared by all widget crates
//! └── error    - RenderError / RenderResult
//! ```
//!
//! ## Example
//!
//! ```
//! use nuages_core::content::Content;
//! use nuages_core::context::RenderContext;
//!
//! let page = Content::Sequence(vec![
//!     Content::from("<h1>Hello</h1>"),
//!     Content::from("<p>world</p>"),
//! ]);
//!
//! let ctx = RenderContext::new();
//! assert_eq!(page.render(&ctx).unwrap(), "<h1>Hello</h1><p>world</p>");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod context;
pub mod error;
pub mod template;

pub use content::{Content, Widget};
pub use context::{IdGenerator, RenderContext, scope};
pub use error::{RenderError, RenderResult};
pub use template::{Slots, Template};

/// Commonly used items, for glob import by page code
pub mod prelude {
	pub use crate::content::{Content, Widget};
	pub use crate::context::{IdGenerator, RenderContext, scope};
	pub use crate::error::{RenderError, RenderResult};
	pub use crate::template::{Slots, Template};
}
