//! Pattern compilation for path routing.
//!
//! Translates the path-pattern mini-language (literal text, `:name`
//! segments, `*name` splats, optional `(...)` groups) into a compiled
//! [`Regex`] whose capture groups line up with the parameter names returned
//! by [`extract_names`].

use regex::Regex;

use crate::error::PatternResult;

/// Maximum allowed size for a compiled automaton, in bytes.
const MAX_AUTOMATON_SIZE: usize = 1 << 20; // 1 MiB

/// A single syntactic element of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
	/// A run of literal text, matched exactly.
	Literal(String),
	/// `:name`, one or more characters excluding `/` and `?`.
	Named(String),
	/// `*name`, zero or more characters excluding `?`, non-greedy.
	Splat(String),
	/// `(` opening an optional group.
	OptionalOpen,
	/// `)` closing an optional group.
	OptionalClose,
}

/// Scans a pattern into its token sequence.
///
/// The scan is total and the resulting stream always has balanced,
/// non-nested optional groups: a `:` or `*` not followed by a word
/// character is literal text, as are a `(` inside an open group and a `)`
/// outside one; a group still open at the end of the pattern is closed
/// there.
pub(crate) fn tokenize(pattern: &str) -> Vec<Token> {
	let mut tokens = Vec::new();
	let mut literal = String::new();
	let mut in_group = false;
	let mut chars = pattern.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			':' | '*' => {
				let mut name = String::new();
				while let Some(&next) = chars.peek() {
					if next.is_ascii_alphanumeric() || next == '_' {
						name.push(next);
						chars.next();
					} else {
						break;
					}
				}
				if name.is_empty() {
					literal.push(c);
				} else {
					flush_literal(&mut tokens, &mut literal);
					if c == ':' {
						tokens.push(Token::Named(name));
					} else {
						tokens.push(Token::Splat(name));
					}
				}
			}
			'(' if !in_group => {
				flush_literal(&mut tokens, &mut literal);
				tokens.push(Token::OptionalOpen);
				in_group = true;
			}
			')' if in_group => {
				flush_literal(&mut tokens, &mut literal);
				tokens.push(Token::OptionalClose);
				in_group = false;
			}
			_ => literal.push(c),
		}
	}
	flush_literal(&mut tokens, &mut literal);
	if in_group {
		tokens.push(Token::OptionalClose);
	}
	tokens
}

fn flush_literal(tokens: &mut Vec<Token>, literal: &mut String) {
	if !literal.is_empty() {
		tokens.push(Token::Literal(std::mem::take(literal)));
	}
}

/// Compiles a path pattern into its matching automaton.
///
/// The automaton is anchored at both ends. Its capture groups are, in
/// order, exactly the named/splat constructs in source order, followed by
/// one implicit capture for the raw query string, which participates
/// (possibly as an empty string) only when the matched path contains a
/// `?`. Optional groups compile to zero-or-one repetition and contribute
/// no capture of their own.
///
/// Any string is accepted; there is no pattern validation. Compilation
/// fails only when the emitted expression exceeds the automaton size
/// limit.
///
/// # Examples
///
/// ```
/// use waymark::compile;
///
/// let automaton = compile("/users/:id").unwrap();
/// assert!(automaton.is_match("/users/42"));
/// assert!(automaton.is_match("/users/42?full=1"));
/// assert!(!automaton.is_match("/users/"));
/// ```
pub fn compile(pattern: &str) -> PatternResult<Regex> {
	let mut source = String::with_capacity(pattern.len() + 24);
	source.push('^');
	for token in tokenize(pattern) {
		match token {
			Token::Literal(text) => source.push_str(&regex::escape(&text)),
			Token::Named(_) => source.push_str("([^/?]+)"),
			Token::Splat(_) => source.push_str("([^?]*?)"),
			Token::OptionalOpen => source.push_str("(?:"),
			Token::OptionalClose => source.push_str(")?"),
		}
	}
	source.push_str(r"(?:\?([\s\S]*))?$");
	let regex = regex::RegexBuilder::new(&source)
		.size_limit(MAX_AUTOMATON_SIZE)
		.build()?;
	Ok(regex)
}

/// Returns the parameter names of a pattern in left-to-right source order.
///
/// Both `:name` and `*name` occurrences contribute, including those inside
/// optional groups, with the leading sigil stripped. The order is the
/// order of appearance in the pattern, never grouped by construct kind,
/// so the names line up positionally with the automaton's capture groups.
///
/// # Examples
///
/// ```
/// use waymark::extract_names;
///
/// assert_eq!(extract_names("/hello/:world(/:bar)"), vec!["world", "bar"]);
/// assert!(extract_names("/hello").is_empty());
/// ```
pub fn extract_names(pattern: &str) -> Vec<String> {
	tokenize(pattern)
		.into_iter()
		.filter_map(|token| match token {
			Token::Named(name) | Token::Splat(name) => Some(name),
			_ => None,
		})
		.collect()
}
