//! The router container: ordered registration and first-match dispatch.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{PatternResult, ReverseError, ReverseResult};
use crate::handler::{Handler, HandlerError, HandlerResult};
use crate::matcher::MatchResult;
use crate::reverse;
use crate::route::Route;

/// An ordered collection of routes with first-match-wins dispatch.
///
/// Routes are tried strictly in registration order; the first route whose
/// automaton matches has its handler invoked and the scan stops. The
/// registration list is append-only: registration takes the router by
/// value (or `&mut`), while [`Router::process`] borrows it shared, so a
/// fully-built router can be shared across threads for concurrent
/// dispatch.
///
/// # Examples
///
/// ```
/// use waymark::Router;
///
/// # fn main() -> Result<(), waymark::HandlerError> {
/// let router = Router::new()
///     .route("/hello/:name", |request| {
///         println!("hello {}", request.params["name"]);
///         Ok(())
///     })
///     .route("/files/*path", |request| {
///         println!("serving {}", request.params["path"]);
///         Ok(())
///     });
///
/// assert!(router.process("/hello/bob")?);
/// assert!(!router.process("/goodbye")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Router {
	routes: Vec<Route>,
}

impl Router {
	/// Creates an empty router.
	pub fn new() -> Self {
		Self::default()
	}

	/// Compiles `pattern` and registers it with `handler`.
	///
	/// Consumes and returns the router, so registrations chain. The
	/// closure-shaped bound lets an unannotated closure's parameter type
	/// be inferred; a hand-written [`Handler`] registers through
	/// [`Route::new`] and [`Router::add`] instead.
	///
	/// # Panics
	///
	/// Panics when the pattern exceeds the automaton size limit, the
	/// only way compilation can fail. Use [`Router::try_route`] to handle
	/// that case instead.
	pub fn route<F>(mut self, pattern: &str, handler: F) -> Self
	where
		F: Fn(MatchResult) -> HandlerResult + Send + Sync + 'static,
	{
		let route = Route::new(pattern, handler).expect("Invalid route pattern");
		self.routes.push(route);
		self
	}

	/// Non-panicking [`Router::route`].
	pub fn try_route<F>(mut self, pattern: &str, handler: F) -> PatternResult<Self>
	where
		F: Fn(MatchResult) -> HandlerResult + Send + Sync + 'static,
	{
		self.routes.push(Route::new(pattern, handler)?);
		Ok(self)
	}

	/// Registers a raw, already-compiled automaton.
	///
	/// Match results for such a route key every participating capture by
	/// its decimal index (`"0"` is the whole match) instead of extracted
	/// names.
	pub fn route_regex<F>(mut self, regex: Regex, handler: F) -> Self
	where
		F: Fn(MatchResult) -> HandlerResult + Send + Sync + 'static,
	{
		self.routes.push(Route::from_regex(regex, handler));
		self
	}

	/// Registers a pre-built route.
	pub fn add(&mut self, route: Route) {
		self.routes.push(route);
	}

	/// Returns the registered routes in registration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Matches `path` against the registered routes in order and invokes
	/// the first matching route's handler with the match result.
	///
	/// Returns `Ok(true)` when a handler ran and `Ok(false)` when no
	/// route matched, which is a normal outcome, not an error. An error
	/// returned by the handler propagates unmodified; either way the scan
	/// stops at the first matching route.
	pub fn process(&self, path: &str) -> Result<bool, HandlerError> {
		for route in &self.routes {
			if let Some(request) = route.matches(path) {
				tracing::debug!(
					"dispatching {} to {}",
					path,
					route.pattern().unwrap_or("<raw regex>")
				);
				route.handler().handle(request)?;
				return Ok(true);
			}
		}
		tracing::trace!("no route matched {}", path);
		Ok(false)
	}

	/// Builds a concrete path for the route named `name`.
	///
	/// # Errors
	///
	/// [`ReverseError::UnknownRoute`] when no route carries the name,
	/// [`ReverseError::NotReversible`] for a raw-regex route, and
	/// [`ReverseError::MissingParameter`] from pattern rendering.
	pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> ReverseResult<String> {
		let route = self
			.routes
			.iter()
			.find(|route| route.name() == Some(name))
			.ok_or_else(|| ReverseError::UnknownRoute(name.to_string()))?;
		let pattern = route.pattern().ok_or(ReverseError::NotReversible)?;
		reverse::reverse(pattern, params)
	}
}
