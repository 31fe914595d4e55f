//! Reverse resolution: rendering a pattern back into a concrete path.

use std::collections::HashMap;

use crate::error::{ReverseError, ReverseResult};
use crate::pattern::{self, Token};

/// Renders `pattern` with the given parameter values.
///
/// Literal text is emitted verbatim and `:name`/`*name` segments are
/// replaced by the value under `name`. An optional group is included iff
/// every parameter inside it has a value; a group containing no parameters
/// is always included.
///
/// # Errors
///
/// Returns [`ReverseError::MissingParameter`] when a named or splat
/// segment outside any optional group has no value; a missing value
/// inside a group just drops the group.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use waymark::reverse;
///
/// let mut params = HashMap::new();
/// params.insert("id".to_string(), "42".to_string());
///
/// assert_eq!(reverse("/users/:id", &params).unwrap(), "/users/42");
/// assert_eq!(reverse("/users(/:page)", &HashMap::new()).unwrap(), "/users");
/// ```
pub fn reverse(pattern: &str, params: &HashMap<String, String>) -> ReverseResult<String> {
	let tokens = pattern::tokenize(pattern);
	let mut rendered = String::with_capacity(pattern.len());
	let mut index = 0;
	while index < tokens.len() {
		match &tokens[index] {
			Token::Literal(text) => rendered.push_str(text),
			Token::Named(name) | Token::Splat(name) => {
				let value = params
					.get(name)
					.ok_or_else(|| ReverseError::MissingParameter(name.clone()))?;
				rendered.push_str(value);
			}
			Token::OptionalOpen => {
				// The tokenizer guarantees a matching close.
				let close = tokens[index..]
					.iter()
					.position(|token| matches!(token, Token::OptionalClose))
					.map(|offset| index + offset)
					.unwrap_or(tokens.len());
				if let Some(fragment) = render_group(&tokens[index + 1..close], params) {
					rendered.push_str(&fragment);
				}
				index = close;
			}
			Token::OptionalClose => {}
		}
		index += 1;
	}
	Ok(rendered)
}

/// Renders an optional group's tokens, or `None` when a parameter inside
/// the group has no value.
fn render_group(tokens: &[Token], params: &HashMap<String, String>) -> Option<String> {
	let mut fragment = String::new();
	for token in tokens {
		match token {
			Token::Literal(text) => fragment.push_str(text),
			Token::Named(name) | Token::Splat(name) => fragment.push_str(params.get(name)?),
			Token::OptionalOpen | Token::OptionalClose => {}
		}
	}
	Some(fragment)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_reverse_substitutes_named_parameters() {
		let rendered = reverse("/users/:id/posts/:post", &params(&[("id", "42"), ("post", "7")]));
		assert_eq!(rendered.unwrap(), "/users/42/posts/7");
	}

	#[test]
	fn test_reverse_substitutes_splat() {
		let rendered = reverse("/files/*path", &params(&[("path", "a/b/c.txt")]));
		assert_eq!(rendered.unwrap(), "/files/a/b/c.txt");
	}

	#[test]
	fn test_reverse_drops_group_with_missing_parameter() {
		let rendered = reverse("/hello(/:world)", &HashMap::new());
		assert_eq!(rendered.unwrap(), "/hello");
	}

	#[test]
	fn test_reverse_keeps_group_with_provided_parameter() {
		let rendered = reverse("/hello(/:world)", &params(&[("world", "bob")]));
		assert_eq!(rendered.unwrap(), "/hello/bob");
	}

	#[test]
	fn test_reverse_always_keeps_parameterless_group() {
		let rendered = reverse("/docs(/index)", &HashMap::new());
		assert_eq!(rendered.unwrap(), "/docs/index");
	}

	#[test]
	fn test_reverse_missing_top_level_parameter_is_an_error() {
		let rendered = reverse("/users/:id", &HashMap::new());
		assert!(matches!(
			rendered,
			Err(ReverseError::MissingParameter(name)) if name == "id"
		));
	}

	#[test]
	fn test_reverse_mixed_groups_and_parameters() {
		let rendered = reverse(
			"/hello/:world(/:bar)/:foo",
			&params(&[("world", "w"), ("foo", "f")]),
		);
		assert_eq!(rendered.unwrap(), "/hello/w/f");
	}
}
