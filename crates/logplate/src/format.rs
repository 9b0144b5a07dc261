//! Positional formatting of compiled templates.
//!
//! [`MessageTemplate::parse`](crate::MessageTemplate::parse) rewrites named
//! placeholders into `{index[,alignment][:spec]}` slots. This module renders
//! such a string against an argument slice with classic, culture-invariant
//! semantics: `{{` and `}}` collapse to literal braces, a positive alignment
//! right-aligns (negative left-aligns) by padding with spaces, and a small
//! set of numeric format specifiers is honored:
//!
//! - `D`/`d` with optional digit count: zero-padded decimal integers
//! - `X`/`x` with optional digit count: upper/lowercase hexadecimal
//! - `F`/`f` with optional precision (default 2): fixed-point
//!
//! Any other specifier, or a specifier applied to a value it does not fit,
//! falls back to the plain invariant rendering of the value. Brace text that
//! does not form a valid slot is emitted literally; rendering never panics
//! over template content.

use crate::error::{Result, TemplateError};
use crate::value::Value;

/// A parsed `{index[,alignment][:spec]}` slot.
struct Slot<'a> {
    index: usize,
    alignment: i64,
    spec: Option<&'a str>,
}

/// Renders `format` by substituting `args` into its positional slots.
///
/// Each argument is normalized before substitution. Returns
/// [`TemplateError::FormatArgumentMismatch`] when a slot references an
/// argument index that was not supplied.
pub(crate) fn format_positional(format: &str, args: &[Value]) -> Result<String> {
    let bytes = format.as_bytes();
    let mut out = String::with_capacity(format.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if bytes.get(i + 1) == Some(&b'{') {
                    out.push('{');
                    i += 2;
                } else if let Some((slot, next)) = parse_slot(format, i) {
                    let value =
                        args.get(slot.index)
                            .ok_or(TemplateError::FormatArgumentMismatch {
                                index: slot.index,
                                supplied: args.len(),
                            })?;
                    render_slot(&mut out, &slot, value);
                    i = next;
                } else {
                    out.push('{');
                    i += 1;
                }
            }
            b'}' => {
                // "}}" collapses; a stray "}" stays literal either way.
                out.push('}');
                i += if bytes.get(i + 1) == Some(&b'}') { 2 } else { 1 };
            }
            _ => {
                let start = i;
                while i < bytes.len() && bytes[i] != b'{' && bytes[i] != b'}' {
                    i += 1;
                }
                out.push_str(&format[start..i]);
            }
        }
    }

    Ok(out)
}

/// Parses the slot starting at the `{` at `open`. Returns the slot and the
/// byte position just past its closing `}`, or `None` when the text does not
/// form a valid slot.
fn parse_slot(format: &str, open: usize) -> Option<(Slot<'_>, usize)> {
    let bytes = format.as_bytes();
    let mut i = open + 1;

    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    let index: usize = format[digits_start..i].parse().ok()?;

    let mut alignment = 0i64;
    if i < bytes.len() && bytes[i] == b',' {
        i += 1;
        let sign_start = i;
        if i < bytes.len() && bytes[i] == b'-' {
            i += 1;
        }
        let num_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == num_start {
            return None;
        }
        alignment = format[sign_start..i].parse().ok()?;
    }

    let mut spec = None;
    if i < bytes.len() && bytes[i] == b':' {
        let spec_start = i + 1;
        i = spec_start;
        while i < bytes.len() && bytes[i] != b'}' {
            i += 1;
        }
        if i == bytes.len() {
            return None;
        }
        spec = Some(&format[spec_start..i]);
    }

    if i < bytes.len() && bytes[i] == b'}' {
        Some((
            Slot {
                index,
                alignment,
                spec,
            },
            i + 1,
        ))
    } else {
        None
    }
}

fn render_slot(out: &mut String, slot: &Slot, value: &Value) {
    let normalized = value.normalized();
    let rendered = apply_spec(normalized.as_ref(), slot.spec);
    pad(out, &rendered, slot.alignment);
}

/// Applies a format specifier to a normalized value.
fn apply_spec(value: &Value, spec: Option<&str>) -> String {
    let spec = match spec {
        Some(s) if !s.is_empty() => s,
        _ => return value.to_string(),
    };

    let kind = match spec.chars().next() {
        Some(c) => c,
        None => return value.to_string(),
    };
    let precision: Option<usize> = if spec[kind.len_utf8()..].is_empty() {
        None
    } else {
        match spec[kind.len_utf8()..].parse() {
            Ok(p) => Some(p),
            Err(_) => return value.to_string(),
        }
    };

    match kind {
        'D' | 'd' => {
            let width = precision.unwrap_or(0);
            match value {
                Value::Int(n) if *n < 0 => {
                    format!("-{:0width$}", n.unsigned_abs(), width = width)
                }
                Value::Int(n) => format!("{:0width$}", n, width = width),
                Value::Uint(n) => format!("{:0width$}", n, width = width),
                _ => value.to_string(),
            }
        }
        'X' => {
            let width = precision.unwrap_or(0);
            match value {
                Value::Int(n) => format!("{:0width$X}", n, width = width),
                Value::Uint(n) => format!("{:0width$X}", n, width = width),
                _ => value.to_string(),
            }
        }
        'x' => {
            let width = precision.unwrap_or(0);
            match value {
                Value::Int(n) => format!("{:0width$x}", n, width = width),
                Value::Uint(n) => format!("{:0width$x}", n, width = width),
                _ => value.to_string(),
            }
        }
        'F' | 'f' => match value.as_f64() {
            Some(f) => format!("{:.prec$}", f, prec = precision.unwrap_or(2)),
            None => value.to_string(),
        },
        _ => value.to_string(),
    }
}

/// Pads `text` to the alignment width. Positive right-aligns, negative
/// left-aligns; text at or beyond the width is emitted unchanged.
fn pad(out: &mut String, text: &str, alignment: i64) {
    let width = alignment.unsigned_abs() as usize;
    let len = text.chars().count();
    if len >= width {
        out.push_str(text);
        return;
    }
    let fill = " ".repeat(width - len);
    if alignment > 0 {
        out.push_str(&fill);
        out.push_str(text);
    } else {
        out.push_str(text);
        out.push_str(&fill);
    }
}
