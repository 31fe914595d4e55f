//! Application of a compiled route to a candidate path.

use std::collections::HashMap;

use regex::Regex;

use crate::query::{self, QueryValue};
use crate::route::Route;

/// The outcome of a successfully matched path.
///
/// Built fresh for every match and handed to the handler by value;
/// nothing in it is shared with the router apart from the automaton,
/// which is cheap to clone.
#[derive(Debug, Clone)]
pub struct MatchResult {
	/// The candidate path exactly as passed to [`Route::matches`].
	pub path: String,
	/// The automaton that matched.
	pub regex: Regex,
	/// The source pattern, when the route was built from one.
	pub pattern: Option<String>,
	/// Raw captured substrings in capture order. Slot 0 is the whole
	/// match; for pattern routes the final slot is the query tail. A slot
	/// is `None` when its group did not participate in the match (a
	/// skipped optional group, or the query tail of a path without `?`).
	pub raw_groups: Vec<Option<String>>,
	/// Decoded query mapping, always computed over the full original
	/// path.
	pub query: HashMap<String, QueryValue>,
	/// The name → value projection consumers actually use.
	///
	/// Pattern routes pair each extracted name with its capture in source
	/// order; a name whose group did not participate has no entry.
	/// Raw-regex routes key every participating capture, whole match
	/// included, by its decimal index (`"0"`, `"1"`, ...).
	pub params: HashMap<String, String>,
}

impl Route {
	/// Applies this route's automaton to `path`.
	///
	/// A non-match is a normal, silent outcome (`None`), not an error.
	/// On success the result carries the raw capture groups, the
	/// parameter projection described on [`MatchResult::params`], and the
	/// query mapping of the full path. The trailing query capture is
	/// never paired with a parameter name; the query string is exposed
	/// decoded under [`MatchResult::query`] and raw as the last slot of
	/// [`MatchResult::raw_groups`].
	pub fn matches(&self, path: &str) -> Option<MatchResult> {
		let captures = self.regex().captures(path)?;
		let raw_groups: Vec<Option<String>> = (0..captures.len())
			.map(|i| captures.get(i).map(|group| group.as_str().to_string()))
			.collect();
		let params: HashMap<String, String> = match self.param_names() {
			Some(names) => names
				.iter()
				.enumerate()
				.filter_map(|(i, name)| {
					captures
						.get(i + 1)
						.map(|group| (name.clone(), group.as_str().to_string()))
				})
				.collect(),
			None => raw_groups
				.iter()
				.enumerate()
				.filter_map(|(i, group)| {
					group.as_ref().map(|value| (i.to_string(), value.clone()))
				})
				.collect(),
		};
		Some(MatchResult {
			path: path.to_string(),
			regex: self.regex().clone(),
			pattern: self.pattern().map(str::to_string),
			raw_groups,
			query: query::parse_query(path),
			params,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::handler::HandlerResult;

	fn noop(_request: MatchResult) -> HandlerResult {
		Ok(())
	}

	fn pattern_route(pattern: &str) -> Route {
		Route::new(pattern, noop).expect("Valid pattern")
	}

	#[test]
	fn test_named_parameter_pairs_with_its_own_capture() {
		let route = pattern_route("/hello/:world");
		let result = route.matches("/hello/bob").unwrap();
		assert_eq!(result.params.get("world"), Some(&"bob".to_string()));
		assert_eq!(result.raw_groups[0], Some("/hello/bob".to_string()));
		assert_eq!(result.raw_groups[1], Some("bob".to_string()));
	}

	#[test]
	fn test_skipped_optional_group_leaves_no_entry() {
		let route = pattern_route("/hello(/:world)/:bar");
		let result = route.matches("/hello/world").unwrap();
		assert_eq!(result.params.get("bar"), Some(&"world".to_string()));
		assert!(!result.params.contains_key("world"));
		assert_eq!(result.raw_groups[1], None);
	}

	#[test]
	fn test_taken_optional_group_fills_both_parameters() {
		let route = pattern_route("/hello(/:world)/:bar");
		let result = route.matches("/hello/world/foo").unwrap();
		assert_eq!(result.params.get("world"), Some(&"world".to_string()));
		assert_eq!(result.params.get("bar"), Some(&"foo".to_string()));
	}

	#[test]
	fn test_duplicate_parameter_name_later_capture_wins() {
		let route = pattern_route("/x/:a/:a");
		let result = route.matches("/x/first/second").unwrap();
		assert_eq!(result.params.get("a"), Some(&"second".to_string()));
		assert_eq!(result.params.len(), 1);
		assert_eq!(result.raw_groups[1], Some("first".to_string()));
		assert_eq!(result.raw_groups[2], Some("second".to_string()));
		assert_eq!(
			route.param_names(),
			Some(&["a".to_string(), "a".to_string()][..])
		);
	}

	#[test]
	fn test_query_capture_is_not_a_parameter() {
		let route = pattern_route("/hello/:world");
		let result = route.matches("/hello/bob?foo=bar").unwrap();
		assert_eq!(result.params.len(), 1);
		assert_eq!(result.raw_groups[2], Some("foo=bar".to_string()));
		assert_eq!(
			result.query.get("foo"),
			Some(&QueryValue::Single("bar".to_string()))
		);
	}

	#[test]
	fn test_raw_regex_route_keys_by_index_including_whole_match() {
		let regex = Regex::new(r"^/(\d+)/(\w+)$").unwrap();
		let route = Route::from_regex(regex, noop);
		let result = route.matches("/42/widgets").unwrap();
		assert_eq!(result.params.get("0"), Some(&"/42/widgets".to_string()));
		assert_eq!(result.params.get("1"), Some(&"42".to_string()));
		assert_eq!(result.params.get("2"), Some(&"widgets".to_string()));
		assert_eq!(result.pattern, None);
	}

	#[test]
	fn test_raw_regex_route_omits_non_participating_groups() {
		let regex = Regex::new(r"^/(a)?(b)$").unwrap();
		let route = Route::from_regex(regex, noop);
		let result = route.matches("/b").unwrap();
		assert!(!result.params.contains_key("1"));
		assert_eq!(result.params.get("2"), Some(&"b".to_string()));
	}

	#[test]
	fn test_no_match_is_none() {
		let route = pattern_route("/hello/:world");
		assert!(route.matches("/hello").is_none());
		assert!(route.matches("/goodbye/bob").is_none());
	}

	#[test]
	fn test_match_result_keeps_original_path() {
		let route = pattern_route("/hello/:world");
		let result = route.matches("/hello/bob?x=1").unwrap();
		assert_eq!(result.path, "/hello/bob?x=1");
		assert_eq!(result.pattern, Some("/hello/:world".to_string()));
	}
}
