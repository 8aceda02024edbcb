//! Rendering option sets into `args.gn` syntax.
//!
//! The grammar is consumed verbatim by `gn gen`: one `key = value` entry
//! per assignment, entries separated by a blank line, strings quoted,
//! booleans and numbers bare, lists bracketed with one element per line
//! and a trailing comma on each.

use crate::core::options::{GnValue, OptionSet};

/// Quote and escape a string so it round-trips as a GN string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a scalar value as a GN literal.
fn format_scalar(value: &GnValue) -> String {
    match value {
        GnValue::Str(s) => quote(s),
        GnValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        GnValue::Int(n) => n.to_string(),
        // Lists are handled by format_list; a list nested here would be a
        // logic error upstream.
        GnValue::List(_) => unreachable!("lists are not scalar GN values"),
    }
}

/// Render a list as a bracketed block, one element per line.
fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let mut parts = vec!["[".to_string()];
    for item in items {
        parts.push(format!("    {},", quote(item)));
    }
    parts.push("]".to_string());
    parts.join("\n")
}

/// Render a complete option set as `args.gn` text.
///
/// Entries appear in insertion order, separated by one blank line, with a
/// trailing newline. Output is deterministic for a given option set.
pub fn format_option_set(opts: &OptionSet) -> String {
    let mut lines = Vec::with_capacity(opts.len());
    for (key, value) in opts.iter() {
        let literal = match value {
            GnValue::List(items) => format_list(items),
            scalar => format_scalar(scalar),
        };
        lines.push(format!("{} = {}", key, literal));
    }
    let mut out = lines.join("\n\n");
    out.push('\n');
    out
}
