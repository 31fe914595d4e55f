//! Query-string extraction and decoding.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use percent_encoding::percent_decode_str;

/// A decoded query value.
///
/// Keys that appear once map to [`QueryValue::Single`]; keys that appear
/// multiple times collect every value into [`QueryValue::Multi`] in
/// encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
	/// The value of a key seen exactly once.
	Single(String),
	/// All values of a key seen more than once, in encounter order.
	Multi(Vec<String>),
}

impl QueryValue {
	/// Returns the first (or only) value.
	pub fn first(&self) -> &str {
		match self {
			QueryValue::Single(value) => value,
			QueryValue::Multi(values) => values.first().map(String::as_str).unwrap_or(""),
		}
	}

	fn push(&mut self, value: String) {
		match self {
			QueryValue::Single(existing) => {
				let first = std::mem::take(existing);
				*self = QueryValue::Multi(vec![first, value]);
			}
			QueryValue::Multi(values) => values.push(value),
		}
	}
}

/// Extracts and decodes the query portion of a path.
///
/// The query portion is everything after the first `?`, truncated at the
/// first `#`. It is decoded as ampersand-separated `key=value` pairs:
/// each pair is split at its first `=` (so values may contain `=`), a pair
/// without `=` maps the whole pair as a key with an empty value, and both
/// keys and values are percent-decoded with `+` treated as a space. A path
/// without `?` yields an empty mapping; that is a normal outcome, not an
/// error.
///
/// # Examples
///
/// ```
/// use waymark::{parse_query, QueryValue};
///
/// let query = parse_query("/hello?foo=bar&baz=qux");
/// assert_eq!(query.get("foo"), Some(&QueryValue::Single("bar".to_string())));
/// assert_eq!(query.get("baz"), Some(&QueryValue::Single("qux".to_string())));
/// assert!(parse_query("/hello").is_empty());
/// ```
pub fn parse_query(path: &str) -> HashMap<String, QueryValue> {
	let mut query = HashMap::new();
	let Some(raw) = raw_query(path) else {
		return query;
	};
	for pair in raw.split('&') {
		if pair.is_empty() {
			continue;
		}
		// Split on first '=' only to preserve '=' in values
		let mut parts = pair.splitn(2, '=');
		let key = decode_component(parts.next().unwrap_or(""));
		let value = decode_component(parts.next().unwrap_or(""));
		match query.entry(key) {
			Entry::Occupied(mut entry) => entry.get_mut().push(value),
			Entry::Vacant(entry) => {
				entry.insert(QueryValue::Single(value));
			}
		}
	}
	query
}

/// Returns the raw query portion of `path`, if a `?` is present before any
/// `#`.
fn raw_query(path: &str) -> Option<&str> {
	let without_fragment = match path.split_once('#') {
		Some((before, _)) => before,
		None => path,
	};
	without_fragment
		.split_once('?')
		.map(|(_, query)| query)
}

/// Decodes one key or value: `+` as space, then percent-decoding.
fn decode_component(raw: &str) -> String {
	let unplused = raw.replace('+', " ");
	percent_decode_str(&unplused).decode_utf8_lossy().into_owned()
}
