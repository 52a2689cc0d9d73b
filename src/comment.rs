//! Comment stripping for recipe markup.

use regex::Regex;
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(--.*)|(\[-(?s:.)+?-\])").unwrap());

/// Removes `-- ...` line comments and `[- ... -]` block comments.
///
/// Block comments are matched non-greedily and may span multiple lines, so
/// this must run over the whole document text before it is split into lines.
/// Comments are replaced with nothing, leaving the surrounding text
/// contiguous.
pub fn strip_comments(text: &str) -> String {
    COMMENT_RE.replace_all(text, "").into_owned()
}
