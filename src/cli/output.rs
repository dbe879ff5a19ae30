//! Output formatting utilities for the CLI.

use std::io::{self, Write};

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;

    /// The full text printed for this result, without the trailing newline.
    fn render(&self, json_mode: bool) -> String {
        if json_mode {
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        } else {
            self.to_human()
        }
    }
}

/// Write one result as a single line (human) or one pretty JSON object.
pub fn write_output<T: CommandOutput, W: Write>(
    writer: &mut W,
    result: &T,
    json_mode: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", result.render(json_mode))?;
    writer.flush()
}
