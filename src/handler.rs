//! Handler invocation surface.

use crate::matcher::MatchResult;

/// Error type handlers may return.
///
/// Propagated unmodified out of [`Router::process`](crate::Router::process);
/// the router performs no catch-and-continue.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for handler invocation.
pub type HandlerResult = Result<(), HandlerError>;

/// A route handler, invoked with the match result of its route.
///
/// Implemented for any `Fn(MatchResult) -> HandlerResult` closure or
/// function, so plain closures can be registered directly:
///
/// ```
/// use waymark::Router;
///
/// let router = Router::new().route("/ping", |_request| Ok(()));
/// assert!(router.process("/ping").unwrap());
/// ```
pub trait Handler: Send + Sync {
	/// Handles one successful match.
	fn handle(&self, request: MatchResult) -> HandlerResult;
}

impl<F> Handler for F
where
	F: Fn(MatchResult) -> HandlerResult + Send + Sync,
{
	fn handle(&self, request: MatchResult) -> HandlerResult {
		self(request)
	}
}
