//! Logplate - message-template parsing and formatting for structured logging.
//!
//! Logplate turns a human-written message template with named placeholders
//! into two things at once: classic positional text output, and an ordered
//! set of named key/value pairs for machine-consumable log sinks. It
//! supports:
//!
//! - Named placeholders with classic alignment and format specifiers:
//!   `{Count,5:D2}`
//! - Brace escaping: `{{` and `}}` render as literal braces
//! - Graceful degradation: malformed brace text never fails to parse
//! - Argument normalization: nulls render as `(null)`, sequences join with
//!   `", "`, strings pass through untouched
//! - A structured view pairing each placeholder name with its raw argument,
//!   always followed by the `{OriginalFormat}` sentinel entry
//!
//! # Quick Start
//!
//! ```rust
//! use logplate::{MessageTemplate, Value, ORIGINAL_FORMAT_KEY};
//!
//! // Parse once, render many times.
//! let template = MessageTemplate::parse("User {UserId} logged in from {Ip}");
//! assert_eq!(template.positional_format(), "User {0} logged in from {1}");
//! assert_eq!(template.names(), ["UserId", "Ip"]);
//!
//! // Text output for human-readable sinks.
//! let text = template.render_two(42, "10.0.0.7").unwrap();
//! assert_eq!(text, "User 42 logged in from 10.0.0.7");
//!
//! // Structured output for machine-consumable sinks.
//! let args = [Value::from(42), Value::from("10.0.0.7")];
//! let pairs = template.pairs(&args).unwrap();
//! assert_eq!(pairs[0].name, "UserId");
//! assert_eq!(pairs[2].name, ORIGINAL_FORMAT_KEY);
//! ```
//!
//! # Parsing Semantics
//!
//! Templates are scanned left to right in a single pass. Runs of identical
//! braces implement the classic escaping rule: an even run is literal text
//! (`{{` renders as `{`), an odd run marks a placeholder boundary. The
//! opening brace of a placeholder is the *last* brace of its run and the
//! closing brace is the *first* unescaped `}`, so `{{{Name}}}` is a literal
//! `{`, the placeholder `Name`, and a literal `}`. Everything after the
//! first `,` or `:` inside a placeholder is an alignment/format suffix,
//! preserved verbatim for rendering. Text that never closes a brace is kept
//! as-is; parsing has no failure mode.
//!
//! Placeholder names are not validated: any text free of `{`, `}`, `,` and
//! `:` is a name, and a repeated name is recorded once per occurrence.
//!
//! # Rendering Semantics
//!
//! Rendering is culture-invariant: numbers and booleans format identically
//! on every host. Supplying fewer arguments than the template's
//! placeholders is a [`TemplateError::FormatArgumentMismatch`], never a
//! silent empty substitution. Fixed-arity helpers ([`render_one`] through
//! [`render_three`]) cover the common call sites without allocating an
//! argument vector.
//!
//! A parsed [`MessageTemplate`] is immutable and `Send + Sync`; renders are
//! pure reads, so one template instance can serve concurrent log calls
//! without synchronization.
//!
//! [`render_one`]: MessageTemplate::render_one
//! [`render_three`]: MessageTemplate::render_three

mod error;
mod format;
mod template;
mod value;

pub use error::{Result, TemplateError};
pub use template::{MessageTemplate, Pair, ORIGINAL_FORMAT_KEY};
pub use value::Value;
