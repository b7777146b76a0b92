//! Action callables and the per-namespace action map.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by an action when dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
	/// General action failure with message.
	#[error("{0}")]
	Failed(String),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// A required argument was not provided.
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	/// Operation not supported by this store.
	#[error("unsupported operation: {0}")]
	Unsupported(&'static str),
}

/// Result of invoking an [`Action`].
pub type ActionResult = Result<Value, ActionError>;

/// Shared handle to a state-mutating action callable.
///
/// Cloning an `Action` shares the underlying callable, so a clone dispatched
/// from a wrapped map behaves identically to the original entry. Identity
/// (not behavior) is compared with [`Action::same_callable`].
#[derive(Clone)]
pub struct Action {
	f: Arc<dyn Fn(&[Value]) -> ActionResult + Send + Sync>,
}

impl Action {
	/// Creates an action from a callable.
	pub fn new(f: impl Fn(&[Value]) -> ActionResult + Send + Sync + 'static) -> Self {
		Self { f: Arc::new(f) }
	}

	/// Invokes the action with the given arguments.
	#[inline]
	pub fn call(&self, args: &[Value]) -> ActionResult {
		(self.f)(args)
	}

	/// Returns true if both handles refer to the same underlying callable.
	#[inline]
	pub fn same_callable(&self, other: &Action) -> bool {
		Arc::ptr_eq(&self.f, &other.f)
	}
}

impl PartialEq for Action {
	/// Two actions are equal when they share the same underlying callable.
	fn eq(&self, other: &Self) -> bool {
		self.same_callable(other)
	}
}

impl fmt::Debug for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Action(..)")
	}
}

/// Map of action name to [`Action`] for one namespace.
///
/// `Clone` produces a shallow copy: a fresh map whose entries share the
/// original callables. This is the copy plugins hand back to callers so the
/// registry's own map is never mutated in place.
#[derive(Clone, Default, PartialEq)]
pub struct ActionMap {
	entries: HashMap<Box<str>, Action>,
}

impl ActionMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an action under `name`, returning the displaced entry if any.
	pub fn insert(&mut self, name: impl Into<Box<str>>, action: Action) -> Option<Action> {
		self.entries.insert(name.into(), action)
	}

	/// Looks up an action by name.
	#[inline]
	pub fn get(&self, name: &str) -> Option<&Action> {
		self.entries.get(name)
	}

	/// Returns true if `name` is present.
	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Number of actions in the map.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the map has no actions.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, action)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Action)> {
		self.entries.iter().map(|(name, action)| (&**name, action))
	}

	/// Iterates over action names in arbitrary order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(|name| &**name)
	}
}

impl fmt::Debug for ActionMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&str> = self.names().collect();
		names.sort_unstable();
		f.debug_tuple("ActionMap").field(&names).finish()
	}
}
