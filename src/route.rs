//! Route registration records.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::PatternResult;
use crate::handler::Handler;
use crate::pattern;

/// A registered route: a compiled automaton, its handler, and the metadata
/// matching uses.
///
/// A route built from a pattern string keeps the pattern and its parameter
/// names; a route built from a raw [`Regex`] has neither, and match results
/// fall back to positional parameter indices. Routes are immutable once
/// built and cheap to clone (the handler is shared behind an [`Arc`]).
#[derive(Clone)]
pub struct Route {
	regex: Regex,
	pattern: Option<String>,
	names: Option<Vec<String>>,
	handler: Arc<dyn Handler>,
	name: Option<String>,
}

impl Route {
	/// Compiles `pattern` and builds a route from it.
	///
	/// Parameter names are extracted in source order and key the match
	/// result's parameter mapping.
	///
	/// # Errors
	///
	/// Returns [`PatternError`](crate::PatternError) when the pattern
	/// exceeds the automaton size limit; no other input is rejected.
	pub fn new(pattern: impl Into<String>, handler: impl Handler + 'static) -> PatternResult<Self> {
		let pattern = pattern.into();
		let regex = pattern::compile(&pattern)?;
		let names = pattern::extract_names(&pattern);
		Ok(Self {
			regex,
			pattern: Some(pattern),
			names: Some(names),
			handler: Arc::new(handler),
			name: None,
		})
	}

	/// Builds a route from an already-compiled regex.
	///
	/// No names are extracted; a match keys every participating capture,
	/// whole match included, by its decimal index.
	pub fn from_regex(regex: Regex, handler: impl Handler + 'static) -> Self {
		Self {
			regex,
			pattern: None,
			names: None,
			handler: Arc::new(handler),
			name: None,
		}
	}

	/// Attaches a route name for reverse lookup via
	/// [`Router::url_for`](crate::Router::url_for).
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Returns the source pattern, when the route was built from one.
	pub fn pattern(&self) -> Option<&str> {
		self.pattern.as_deref()
	}

	/// Returns the compiled automaton.
	pub fn regex(&self) -> &Regex {
		&self.regex
	}

	/// Returns the parameter names in source order, or `None` for a
	/// raw-regex route.
	pub fn param_names(&self) -> Option<&[String]> {
		self.names.as_deref()
	}

	/// Returns the route name, if one was attached.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub(crate) fn handler(&self) -> &dyn Handler {
		self.handler.as_ref()
	}
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("regex", &self.regex.as_str())
			.field("pattern", &self.pattern)
			.field("names", &self.names)
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}
