use std::{fmt::Write, str::Chars};

use crate::DecodeError;

/// Which part of a line a piece of text is written into
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Key,
    Value,
    NodeName,
}

/// Escapes `text` so the reader gives back exactly the same string.
///
/// Always escaped: `\`, line breaks, tabs, and a `/` that would start a `//`
/// comment. Keys and node names also escape `=`, `{` and `}`. Whitespace at
/// either end is escaped so it survives the reader's trimming.
pub(crate) fn escape(text: &str, field: Field) -> String {
    let chars: Vec<char> = text.chars().collect();
    let content_start = chars
        .iter()
        .position(|c| !c.is_whitespace())
        .unwrap_or(chars.len());
    let content_end = chars
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |index| index + 1);

    let mut out = String::with_capacity(text.len());
    for (index, &c) in chars.iter().enumerate() {
        let at_edge = index < content_start || index >= content_end;
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' if chars.get(index + 1) == Some(&'/') => out.push_str("\\/"),
            '=' | '{' | '}' if field != Field::Value => {
                out.push('\\');
                out.push(c);
            }
            ' ' if at_edge => out.push_str("\\s"),
            c if at_edge && c.is_whitespace() => {
                // writing to a String cannot fail
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]
pub(crate) fn unescape(text: &str, line: usize) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('\\') => '\\',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('s') => ' ',
            Some(c @ ('/' | '=' | '{' | '}')) => c,
            Some('u') => read_code_point(&mut chars).ok_or(DecodeError::InvalidEscape { line })?,
            _ => return Err(DecodeError::InvalidEscape { line }),
        };
        out.push(decoded);
    }
    Ok(out)
}

// `{hex}` following a `\u`
fn read_code_point(chars: &mut Chars<'_>) -> Option<char> {
    if chars.next()? != '{' {
        return None;
    }
    let mut hex = String::new();
    loop {
        match chars.next()? {
            '}' => break,
            c => hex.push(c),
        }
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}

/// Byte index of the first `target` that is not escaped
pub(crate) fn find_unescaped(text: &str, target: char) -> Option<usize> {
    let mut escaped = false;
    for (index, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == target {
            return Some(index);
        }
    }
    None
}

/// Cuts the line at the first unescaped `//`
pub(crate) fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    let mut slash_at: Option<usize> = None;
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            slash_at = None;
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                slash_at = None;
            }
            '/' => {
                if let Some(start) = slash_at {
                    return &line[..start];
                }
                slash_at = Some(index);
            }
            _ => slash_at = None,
        }
    }
    line
}

/// Strips a trailing `target`, unless it is escaped
pub(crate) fn strip_unescaped_suffix(text: &str, target: char) -> Option<&str> {
    let mut escaped = false;
    let mut last_plain: Option<(usize, char)> = None;
    for (index, c) in text.char_indices() {
        if escaped {
            escaped = false;
            last_plain = None;
        } else if c == '\\' {
            escaped = true;
            last_plain = None;
        } else {
            last_plain = Some((index, c));
        }
    }
    match last_plain {
        Some((index, c)) if c == target => Some(&text[..index]),
        _ => None,
    }
}
