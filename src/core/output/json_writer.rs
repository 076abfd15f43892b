//! JSON output writer.

use std::path::{Path, PathBuf};

use crate::Message;
use crate::error::Result;

/// Writes messages to `out_dir/aggregated-messages.json` as a pretty array.
///
/// # Format
/// ```json
/// [
///   {
///     "service": "ICQ",
///     "timestamp": "2020-05-01T14:05:10",
///     "author": "Alice",
///     "authorId": "alice456",
///     "partnerId": "me123",
///     "content": "Hello there",
///     "isOwn": false
///   }
/// ]
/// ```
pub fn write_json(messages: &[Message], out_dir: &Path) -> Result<PathBuf> {
    let json = to_json(messages)?;
    super::write_output(out_dir, "json", &json)
}

/// Converts messages to the JSON text [`write_json`] produces.
pub fn to_json(messages: &[Message]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}
