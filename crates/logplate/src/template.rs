//! Template compilation and structured pair extraction.
//!
//! A [`MessageTemplate`] is the one-time parse of a raw message template.
//! Parsing rewrites each named placeholder to its zero-based positional
//! index while preserving alignment and format-specifier suffixes, and
//! records the placeholder names in appearance order. The same template can
//! then be rendered as free text or exposed as named [`Pair`]s for
//! machine-consumable sinks.
//!
//! # Example
//!
//! ```
//! use logplate::{MessageTemplate, Value, ORIGINAL_FORMAT_KEY};
//!
//! let template = MessageTemplate::parse("User {UserId} logged in from {Ip}");
//! assert_eq!(template.positional_format(), "User {0} logged in from {1}");
//! assert_eq!(template.names(), ["UserId", "Ip"]);
//!
//! let text = template.render_two(42, "10.0.0.7").unwrap();
//! assert_eq!(text, "User 42 logged in from 10.0.0.7");
//!
//! let args = [Value::from(42), Value::from("10.0.0.7")];
//! let pairs = template.pairs(&args).unwrap();
//! assert_eq!(pairs.len(), 3);
//! assert_eq!(pairs[2].name, ORIGINAL_FORMAT_KEY);
//! ```

use serde::Serialize;

use crate::error::{Result, TemplateError};
use crate::format::format_positional;
use crate::value::Value;

/// Key under which the original template text appears in structured output.
pub const ORIGINAL_FORMAT_KEY: &str = "{OriginalFormat}";

/// A compiled message template.
///
/// Immutable once parsed and safe to share across concurrent renders: every
/// method is a pure function over the template's fields and the supplied
/// arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTemplate {
    original: String,
    positional: String,
    names: Vec<String>,
    // Value form of `original`, lent out by the sentinel pair.
    sentinel: Value,
}

/// A named argument paired for structured output.
///
/// Values are the raw arguments, not their rendered text, so structured
/// sinks keep original shapes. Serializes as `{"name": ..., "value": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pair<'a> {
    pub name: &'a str,
    pub value: &'a Value,
}

impl MessageTemplate {
    /// Parses a raw message template.
    ///
    /// Parsing never fails and is deterministic: the same input always
    /// yields a structurally identical template. Malformed or unmatched
    /// braces are kept as literal text and produce no placeholder, so a
    /// typo in a template cannot take down the host application.
    pub fn parse(raw: impl Into<String>) -> Self {
        let original: String = raw.into();
        let bytes = original.as_bytes();
        let end = bytes.len();

        let mut positional = String::with_capacity(end);
        let mut names: Vec<String> = Vec::new();
        let mut scan = 0;

        while scan < end {
            let open = find_brace_index(bytes, b'{', scan, end);
            let close = find_brace_index(bytes, b'}', open, end);

            if close == end {
                // No placeholder left; the tail (including any unmatched
                // brace) is literal text.
                positional.push_str(&original[scan..end]);
                scan = end;
            } else {
                // Slot syntax: {name[,alignment][:spec]}.
                let delim = find_delimiter_index(bytes, open, close);

                positional.push_str(&original[scan..=open]);
                positional.push_str(&names.len().to_string());
                names.push(original[open + 1..delim].to_string());
                positional.push_str(&original[delim..=close]);

                scan = close + 1;
            }
        }

        Self {
            sentinel: Value::Str(original.clone()),
            original,
            positional,
            names,
        }
    }

    /// The raw template text, exactly as supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The derived index-based format string, with alignment and format
    /// specifiers preserved.
    pub fn positional_format(&self) -> &str {
        &self.positional
    }

    /// Placeholder names in first-to-last appearance order. A repeated name
    /// appears once per occurrence.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Renders the template with the supplied arguments.
    ///
    /// Each argument is normalized (nulls become `(null)`, sequences join
    /// their elements with `", "`, strings pass through) and substituted
    /// with invariant-culture formatting. A placeholder without a matching
    /// argument is a [`TemplateError::FormatArgumentMismatch`].
    pub fn render(&self, args: &[Value]) -> Result<String> {
        format_positional(&self.positional, args)
    }

    /// Renders a template that takes no arguments.
    pub fn render_none(&self) -> Result<String> {
        self.render(&[])
    }

    /// Single-argument fast path; no argument vector is allocated.
    pub fn render_one(&self, arg: impl Into<Value>) -> Result<String> {
        self.render(&[arg.into()])
    }

    /// Two-argument fast path; no argument vector is allocated.
    pub fn render_two(&self, a: impl Into<Value>, b: impl Into<Value>) -> Result<String> {
        self.render(&[a.into(), b.into()])
    }

    /// Three-argument fast path; no argument vector is allocated.
    pub fn render_three(
        &self,
        a: impl Into<Value>,
        b: impl Into<Value>,
        c: impl Into<Value>,
    ) -> Result<String> {
        self.render(&[a.into(), b.into(), c.into()])
    }

    /// Returns the structured pair at `index`.
    ///
    /// An index below the placeholder count pairs that name with the value
    /// at the same position. The index one past the last placeholder yields
    /// the sentinel pair `("{OriginalFormat}", <original template>)`; beyond
    /// that is a [`TemplateError::IndexOutOfRange`]. Indexing a value slot
    /// the caller did not supply fails fast with
    /// [`TemplateError::FormatArgumentMismatch`].
    pub fn pair_at<'a>(&'a self, values: &'a [Value], index: usize) -> Result<Pair<'a>> {
        if index > self.names.len() {
            return Err(TemplateError::IndexOutOfRange {
                index,
                count: self.names.len(),
            });
        }
        if index == self.names.len() {
            return Ok(Pair {
                name: ORIGINAL_FORMAT_KEY,
                value: &self.sentinel,
            });
        }
        let value = values
            .get(index)
            .ok_or(TemplateError::FormatArgumentMismatch {
                index,
                supplied: values.len(),
            })?;
        Ok(Pair {
            name: &self.names[index],
            value,
        })
    }

    /// Returns all structured pairs for a render call.
    ///
    /// One entry per placeholder, pairing its name with the raw value at the
    /// same position, followed by the sentinel `{OriginalFormat}` entry,
    /// which is always present and always last. Supplying fewer values than
    /// placeholders fails fast with
    /// [`TemplateError::FormatArgumentMismatch`].
    pub fn pairs<'a>(&'a self, values: &'a [Value]) -> Result<Vec<Pair<'a>>> {
        if values.len() < self.names.len() {
            return Err(TemplateError::FormatArgumentMismatch {
                index: values.len(),
                supplied: values.len(),
            });
        }
        let mut out = Vec::with_capacity(self.names.len() + 1);
        for (name, value) in self.names.iter().zip(values) {
            out.push(Pair { name, value });
        }
        out.push(Pair {
            name: ORIGINAL_FORMAT_KEY,
            value: &self.sentinel,
        });
        Ok(out)
    }
}

/// Finds the index of the next relevant `brace` in `bytes[start..end]`,
/// honoring `{{`/`}}` escaping. Returns `end` when none is found.
///
/// Runs of the same brace character count occurrences: an even run followed
/// by a different character is escaped text (the candidate resets), an odd
/// run commits. For `{` the *last* occurrence of the run wins, so the real
/// opening brace of `{{{Name}}}` is the third `{`; for `}` the *first*
/// occurrence wins, so `{Name}}}` closes at the first `}`.
fn find_brace_index(bytes: &[u8], brace: u8, start: usize, end: usize) -> usize {
    let mut brace_index = end;
    let mut scan = start;
    let mut occurrences = 0;

    while scan < end {
        if occurrences > 0 && bytes[scan] != brace {
            if occurrences % 2 == 0 {
                // Even run: escaped braces, keep looking.
                occurrences = 0;
                brace_index = end;
            } else {
                // Odd run: an unescaped brace was found.
                break;
            }
        } else if bytes[scan] == brace {
            if brace == b'}' {
                if occurrences == 0 {
                    brace_index = scan;
                }
            } else {
                brace_index = scan;
            }
            occurrences += 1;
        }
        scan += 1;
    }

    brace_index
}

/// Finds the first `,` or `:` in `bytes[start..end)`, the end of the
/// placeholder name. Returns `end` when there is none.
fn find_delimiter_index(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut i = start;
    while i < end {
        if bytes[i] == b',' || bytes[i] == b':' {
            return i;
        }
        i += 1;
    }
    end
}
