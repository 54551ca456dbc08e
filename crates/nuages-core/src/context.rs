//! Render context and unique id generation
//!
//! A [`RenderContext`] is rebuilt for every page render and threaded down
//! through the widget tree. It carries two things: the id generator used to
//! mint DOM ids, and an ambient key/value scope that parent containers use to
//! hand structural ids (an accordion's DOM id, for instance) down to their
//! children.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Well-known ambient scope keys
pub mod scope {
	/// DOM id of the enclosing accordion, visible to its panels
	pub const ACCORDION_ID: &str = "accordion_id";
}

/// Generator for DOM ids unique within one render session.
///
/// Cloning is cheap and every clone shares the same counter, so a context and
/// all scopes derived from it mint from a single strictly increasing sequence.
/// The counter is atomic; concurrent renders sharing one generator cannot
/// produce colliding ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
	counter: Arc<AtomicU64>,
}

impl IdGenerator {
	/// Create a generator starting at zero
	pub fn new() -> Self {
		Self::default()
	}

	/// Mint a unique name of the form `<prefix>_<n>`.
	///
	/// Successive calls yield strictly increasing `n` regardless of prefix.
	pub fn unique_name(&self, prefix: &str) -> String {
		let n = self.counter.fetch_add(1, Ordering::Relaxed);
		format!("{prefix}_{n}")
	}
}

/// Ambient state threaded through one render call.
///
/// Contexts are ephemeral: one is created per page render and discarded with
/// the rendered string. Ids therefore restart at zero for every render, which
/// keeps output deterministic and stops ids leaking between requests.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
	ids: IdGenerator,
	vars: HashMap<String, String>,
}

impl RenderContext {
	/// Create a fresh context with an empty scope and a zeroed id generator
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a context minting ids from an existing generator
	pub fn with_ids(ids: IdGenerator) -> Self {
		Self {
			ids,
			vars: HashMap::new(),
		}
	}

	/// Mint a unique DOM id with the given prefix
	pub fn unique_name(&self, prefix: &str) -> String {
		self.ids.unique_name(prefix)
	}

	/// Look up an ambient scope value
	pub fn get(&self, key: &str) -> Option<&str> {
		self.vars.get(key).map(String::as_str)
	}

	/// Set an ambient scope value on this context
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.vars.insert(key.into(), value.into());
	}

	/// Derive a child scope with one extra binding.
	///
	/// The child shares this context's id generator, so ids minted in the
	/// child continue the parent's sequence.
	pub fn scoped(&self, key: impl Into<String>, value: impl Into<String>) -> RenderContext {
		let mut child = self.clone();
		child.set(key, value);
		child
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unique_name_strictly_increasing() {
		let ids = IdGenerator::new();
		let names: Vec<String> = (0..5).map(|_| ids.unique_name("x")).collect();

		assert_eq!(names, vec!["x_0", "x_1", "x_2", "x_3", "x_4"]);
	}

	#[test]
	fn test_unique_name_shares_counter_across_prefixes() {
		let ids = IdGenerator::new();

		assert_eq!(ids.unique_name("panel"), "panel_0");
		assert_eq!(ids.unique_name("modal"), "modal_1");
		assert_eq!(ids.unique_name("panel"), "panel_2");
	}

	#[test]
	fn test_fresh_context_restarts_ids() {
		let ctx = RenderContext::new();
		assert_eq!(ctx.unique_name("a"), "a_0");

		let ctx = RenderContext::new();
		assert_eq!(ctx.unique_name("a"), "a_0");
	}

	#[test]
	fn test_scoped_adds_binding_without_touching_parent() {
		let parent = RenderContext::new();
		let child = parent.scoped(scope::ACCORDION_ID, "accordion_0");

		assert_eq!(child.get(scope::ACCORDION_ID), Some("accordion_0"));
		assert_eq!(parent.get(scope::ACCORDION_ID), None);
	}

	#[test]
	fn test_scoped_shares_id_sequence_with_parent() {
		let parent = RenderContext::new();
		let child = parent.scoped("k", "v");

		assert_eq!(parent.unique_name("id"), "id_0");
		assert_eq!(child.unique_name("id"), "id_1");
		assert_eq!(parent.unique_name("id"), "id_2");
	}
}
