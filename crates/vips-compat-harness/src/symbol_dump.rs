//! Tolerant symbol dump parsing.
//!
//! Accepts the listings people actually have on hand when chasing an
//! unresolved-external error: plain one-name-per-line files, `nm`/`nm -D`
//! output (`0000000000001234 T vips_target_end`, `U vips_target_finish`),
//! and `dumpbin /EXPORTS` tables. The symbol is taken to be the last
//! whitespace-separated token of a table row; MSVC `__imp_` import-thunk
//! prefixes and `@N` stdcall decorations are stripped. Prose around the
//! tables (dumpbin's banner, column headers, `Summary` section) is
//! rejected, not ingested as symbol names.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::HarnessError;

/// Parse a symbol dump into a sorted, deduplicated name set.
///
/// Blank lines and lines starting with `#` or `;` are ignored, so curated
/// lists can carry comments.
pub fn parse_symbol_dump(text: &str) -> BTreeSet<String> {
    text.lines().filter_map(parse_line).collect()
}

/// Read and parse a symbol dump file.
pub fn load_symbol_file(path: &Path) -> Result<BTreeSet<String>, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_symbol_dump(&text))
}

/// dumpbin preamble words that would otherwise pass the table-row check:
/// `00000000 characteristics` is column-shaped, `Summary` stands alone.
const DUMPBIN_HEADER_WORDS: &[&str] = &["characteristics", "Summary"];

fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }

    let mut leading = line.split_whitespace();
    let token = leading.next_back()?;
    // A multi-token line is only a table row when every leading column is an
    // address/ordinal or an nm symbol-type code. That rules out dumpbin's
    // prose ("File Type: DLL", "ordinal hint RVA name", "1 ordinal base").
    if !leading.all(is_table_column) {
        return None;
    }
    if DUMPBIN_HEADER_WORDS.contains(&token) {
        return None;
    }

    let token = token.strip_prefix("__imp_").unwrap_or(token);
    let token = match token.split_once('@') {
        Some((name, _)) if !name.is_empty() => name,
        _ => token,
    };

    let mut chars = token.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(token.to_string())
}

fn is_table_column(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_hexdigit())
        || (token.len() == 1 && token.chars().all(|c| c.is_ascii_alphabetic()))
}
