//! Pattern-based extraction of declarations and imports from TypeScript text.
//!
//! This is regex matching over raw text, not a parser: nested declarations,
//! multi-symbol imports and re-exports are out of reach. Comments are blanked
//! out before matching, and string contents are blanked out before looking for
//! declarations, so `class` inside either does not produce a type.

use crate::types::{FileRecord, ImportRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(export\s+)?(class|interface)\s+(\w+)(\s+extends\s+(\w+))?").unwrap()
});

static IMPORT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bimport\s+\{?\s*(\w+)\s*\}?\s+from\s+['"]([^'"\n]+)['"]"#).unwrap()
});

/// Build the record for one file from its full text.
pub fn analyze_source(path: impl Into<String>, content: &str) -> FileRecord {
    FileRecord {
        path: path.into(),
        declared_types: extract_declared_types(content),
        imports: extract_imports(content),
    }
}

/// Names of every `class` / `interface` declaration, in source order.
///
/// The optional `export` prefix and `extends` clause are matched but dropped.
pub fn extract_declared_types(content: &str) -> Vec<String> {
    let masked = mask_source(content, true);

    TYPE_PATTERN
        .captures_iter(&masked)
        .filter_map(|cap| cap.get(3).map(|m| m.as_str()))
        // anonymous `class extends Base {}` expressions
        .filter(|name| *name != "extends" && *name != "implements")
        .map(str::to_string)
        .collect()
}

/// Single-symbol imports, with or without braces, in source order.
pub fn extract_imports(content: &str) -> Vec<ImportRecord> {
    let masked = mask_source(content, false);

    IMPORT_PATTERN
        .captures_iter(&masked)
        .filter_map(|cap| {
            let symbol = cap.get(1)?.as_str();
            let module_path = cap.get(2)?.as_str();
            Some(ImportRecord::new(symbol, module_path))
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Literal(u8),
}

/// Replace comment bytes (and optionally string literal contents) with spaces.
///
/// Newlines and byte offsets are preserved. Whole characters are always masked
/// together, so the result stays valid UTF-8.
fn mask_source(content: &str, mask_literals: bool) -> String {
    let bytes = content.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut state = State::Code;
    let mut i = 0;

    let blank = |b: u8| if b == b'\n' { b'\n' } else { b' ' };

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::LineComment;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'/', Some(b'*')) => {
                    state = State::BlockComment;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'"' | b'\'' | b'`', _) => {
                    state = State::Literal(b);
                    out.push(b);
                }
                _ => out.push(b),
            },
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                }
                out.push(blank(b));
            }
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    state = State::Code;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                out.push(blank(b));
            }
            State::Literal(quote) => {
                if b == b'\\' && next.is_some_and(|n| n.is_ascii()) {
                    if mask_literals {
                        out.push(b' ');
                        out.push(blank(bytes[i + 1]));
                    } else {
                        out.push(b);
                        out.push(bytes[i + 1]);
                    }
                    i += 2;
                    continue;
                }
                if b == quote {
                    state = State::Code;
                    out.push(b);
                } else if b == b'\n' && quote != b'`' {
                    // unterminated single-line string
                    state = State::Code;
                    out.push(b);
                } else if mask_literals {
                    out.push(blank(b));
                } else {
                    out.push(b);
                }
            }
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}
