//! Splicing extracted defines into the generated umbrella header.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::util::fs::read_to_string;

/// Render a define entry as a `#define` directive, turning `NAME=VALUE`
/// into `NAME VALUE`.
fn define_directive(entry: &str) -> String {
    format!("#define {}", entry.replace('=', " "))
}

/// Read the generated umbrella header and splice the defines in.
///
/// The directives are inserted immediately before the first line starting
/// with `#include`, followed by a blank line; insertion happens exactly
/// once, and only when there is at least one define to insert. Every
/// template line is copied through with trailing whitespace stripped. If
/// the template has no include line, the defines are never inserted; that
/// is warned about rather than raised, so the header is still produced
/// when the upstream format drifts.
pub fn synthesize_header(template_path: &Path, defines: &[String]) -> Result<String> {
    let template = read_to_string(template_path)?;

    let mut output = Vec::new();
    let mut inserted = false;
    for line in template.lines() {
        if !inserted && !defines.is_empty() && line.trim_start().starts_with("#include") {
            output.extend(defines.iter().map(|d| define_directive(d)));
            output.push(String::new());
            inserted = true;
        }
        output.push(line.trim_end().to_string());
    }

    if !inserted && !defines.is_empty() {
        warn!(
            "no #include insertion point in {}; defines were not spliced in",
            template_path.display()
        );
    }

    let mut text = output.join("\n");
    text.push('\n');
    Ok(text)
}
