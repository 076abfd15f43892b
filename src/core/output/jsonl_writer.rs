//! JSON Lines output writer.

use std::path::{Path, PathBuf};

use crate::Message;
use crate::error::Result;

/// Writes messages to `out_dir/aggregated-messages.jsonl`, one object per line.
pub fn write_jsonl(messages: &[Message], out_dir: &Path) -> Result<PathBuf> {
    let jsonl = to_jsonl(messages)?;
    super::write_output(out_dir, "jsonl", &jsonl)
}

/// Converts messages to JSON Lines; every line, the last included, ends in `\n`.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&serde_json::to_string(msg)?);
        out.push('\n');
    }
    Ok(out)
}
