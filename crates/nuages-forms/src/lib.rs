//! # nuages-forms
//!
//! Declarative forms for nuages: declare fields, bind POST data, validate,
//! and render bootstrap markup. A [`Form`] implements the core widget
//! contract, so it composes into a page's content tree directly.
//!
//! ```
//! use nuages_forms::{Field, FieldKind, Form};
//! use std::collections::HashMap;
//!
//! let mut form = Form::new("signup")
//!     .field(Field::new("email", "Email", FieldKind::Email).required());
//!
//! form.bind(&HashMap::from([
//!     ("email".to_string(), "ada@example.com".to_string()),
//! ]));
//! assert!(form.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod field;
pub mod form;

pub use field::{Field, FieldKind};
pub use form::Form;

nuages_core::widget_into_content!(Form);

/// Commonly used items, for glob import by page code
pub mod prelude {
	pub use crate::field::{Field, FieldKind};
	pub use crate::form::Form;
}
