//! Line-level input handling: delimiter and header sniffing, row splitting.

mod delimiter;
mod header;
mod splitter;

pub use delimiter::{Delimiter, detect_delimiter};
pub use header::{HeaderDetector, HeaderMatch};
pub use splitter::split_row;

/// Split pasted text into raw lines.
///
/// Trailing line terminators at the end of the block are ignored so a final
/// newline does not produce an empty row. Other whitespace is kept because a
/// trailing tab still separates a field. A trailing `\r` is removed from
/// every line.
pub fn raw_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.trim_end_matches(['\n', '\r']);
    let mut lines = text.split('\n');
    if text.is_empty() {
        // `"".split('\n')` yields a single empty line
        lines.next();
    }
    lines.map(|line| line.strip_suffix('\r').unwrap_or(line))
}
