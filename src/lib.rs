//! Minimal path-routing engine.
//!
//! Routes are registered as (pattern, handler) pairs and tried strictly in
//! registration order: the first pattern that matches an incoming path has
//! its handler invoked with the extracted parameters, splat values, raw
//! capture groups, and decoded query string. The engine does nothing else
//! (no method dispatch, no middleware, no I/O); it is the pattern compiler
//! and matcher that routing layers are built on.
//!
//! # Pattern syntax
//!
//! - literal text matches itself (regex metacharacters included);
//! - `:name` matches one or more characters excluding `/` and `?`;
//! - `*name` (a splat) matches zero or more characters excluding `?`,
//!   non-greedily, so it can span `/` separators;
//! - `(...)` marks an optional sub-sequence; groups do not nest.
//!
//! Patterns are never rejected: compilation accepts any string, and a
//! route may also be registered with a pre-compiled [`Regex`], in which
//! case parameters are keyed by capture index instead of name.
//!
//! # Examples
//!
//! ```
//! use waymark::Router;
//!
//! # fn main() -> Result<(), waymark::HandlerError> {
//! let router = Router::new()
//!     .route("/hello/:name", |request| {
//!         println!("hello {}", request.params["name"]);
//!         Ok(())
//!     })
//!     .route("/search(/:topic)", |request| {
//!         match request.params.get("topic") {
//!             Some(topic) => println!("searching {topic}"),
//!             None => println!("searching everything"),
//!         }
//!         Ok(())
//!     });
//!
//! assert!(router.process("/hello/bob?verbose=1")?);
//! assert!(router.process("/search")?);
//! assert!(!router.process("/goodbye")?);
//! # Ok(())
//! # }
//! ```
//!
//! The pieces compose independently: [`compile`], [`extract_names`],
//! [`parse_query`], and [`Route::matches`] are usable without a
//! [`Router`].

mod error;
mod handler;
mod matcher;
mod pattern;
mod query;
mod reverse;
mod route;
mod router;

pub use error::{PatternError, PatternResult, ReverseError, ReverseResult};
pub use handler::{Handler, HandlerError, HandlerResult};
pub use matcher::MatchResult;
pub use pattern::{compile, extract_names};
pub use query::{QueryValue, parse_query};
pub use regex::Regex;
pub use reverse::reverse;
pub use route::Route;
pub use router::Router;
