//! Usage text rendering

use crate::registry::CommandMap;

/// Render the usage text for `program`
///
/// Commands are listed one per line as `name - usage`, followed by the option
/// listing produced by the flag parser.
#[must_use]
pub fn render_usage(program: &str, commands: &CommandMap, options: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Usage: {program} [option...] command [arg...]\n"));
    out.push_str("\nCommand is one of:\n\n");
    for (name, command) in commands.iter() {
        out.push_str(&format!("{name} - {}\n", command.usage()));
    }
    out.push_str("\nOptions:\n\n");
    out.push_str(options);
    if !options.is_empty() && !options.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out
}
