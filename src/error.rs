//! Error types for pattern compilation and reverse resolution.

use thiserror::Error;

/// Errors raised while compiling a path pattern into its automaton.
#[derive(Debug, Error)]
pub enum PatternError {
	/// The emitted expression was rejected by the regex engine.
	///
	/// The tokenizer always produces a syntactically valid expression, so
	/// this only occurs when a pattern blows past the automaton size limit.
	#[error("failed to compile pattern: {0}")]
	Compile(#[from] regex::Error),
}

/// Result alias for pattern compilation.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors raised while rendering a route back into a concrete path.
#[derive(Debug, Error)]
pub enum ReverseError {
	/// No registered route carries the requested name.
	#[error("no route named `{0}`")]
	UnknownRoute(String),
	/// The route was registered with a raw regex and has no source pattern.
	#[error("route has no source pattern to reverse")]
	NotReversible,
	/// A named or splat segment outside any optional group has no value.
	#[error("missing value for parameter `{0}`")]
	MissingParameter(String),
}

/// Result alias for reverse resolution.
pub type ReverseResult<T> = Result<T, ReverseError>;
