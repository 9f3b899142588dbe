//! Line parser for `objdump -t` style symbol dumps.
//!
//! A symbol row looks like
//!
//! ```text
//! 00001040 g     F .text	00000010 main
//! ```
//!
//! i.e. an 8 digit hex address, a fixed 9 character flags field, the section,
//! the symbol value and the label. Headers, blank lines and anything else
//! that does not have this shape are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::symbols::types::SymbolRecord;

/// Anchored pattern for one symbol row. Groups: address, section, value, label.
pub static RE_OBJDUMP_SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{8}).{9}(\S+)\s+([0-9A-Fa-f]+)\s+(\S+)$")
        .expect("valid objdump symbol regex")
});

/// Parse one dump line; `None` when the line is not a symbol row.
///
/// The value column must be hex but is otherwise ignored.
pub fn parse_line(line: &str) -> Option<SymbolRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let caps = RE_OBJDUMP_SYMBOL.captures(line)?;
    // 8 hex digits always fit
    let address = u64::from_str_radix(&caps[1], 16).ok()?;
    Some(SymbolRecord {
        address,
        section: caps[2].to_string(),
        label: caps[4].to_string(),
    })
}
