//! Line-separator normalization for incoming console text.
//!
//! Process output arrives with platform-dependent line endings. A `\r\n`
//! pair always collapses to `\n`; a lone `\r` is either kept (progress-bar
//! style redraws) or folded to `\n`, per configuration.

/// Converts line separators in `text` to `\n`.
///
/// `\r\n` always becomes a single `\n`. A `\r` not followed by `\n` is kept
/// as-is when `keep_carriage_return` is true and converted to `\n` otherwise.
///
/// The result can be shorter than the input (each collapsed `\r\n` drops one
/// char); callers doing capacity math on the incoming length must account
/// for that separately.
pub fn convert_line_separators(text: &str, keep_carriage_return: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
                out.push('\n');
            } else if keep_carriage_return {
                out.push('\r');
            } else {
                out.push('\n');
            }
        } else {
            out.push(ch);
        }
    }
    out
}
