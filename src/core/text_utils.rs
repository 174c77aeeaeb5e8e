//! Text utilities for the strings inside `.bean(...)` arguments.
//!
//! All offsets are byte offsets into the given text.

use crate::base::{TextRange, TextSize};

/// Check if a character may start a method name.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character may continue a method name.
///
/// Currency signs are admitted so `$` next to placeholders stays part of the name.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || is_currency_sign(c)
}

fn is_currency_sign(c: char) -> bool {
    matches!(c, '$' | '\u{a2}'..='\u{a5}' | '\u{20a0}'..='\u{20cf}')
}

/// The leading identifier of a string and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingIdentifier<'a> {
    /// Matched identifier, empty when the text does not start with one
    pub text: &'a str,
    /// Byte offset of the identifier; `0` when nothing matched
    pub offset: usize,
}

impl LeadingIdentifier<'_> {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// Extract the identifier at the start of `text`, after leading whitespace.
///
/// # Example
/// ```
/// use beanref::core::text_utils::extract_leading_identifier;
///
/// let ident = extract_leading_identifier("  save(${body})");
/// assert_eq!(ident.text, "save");
/// assert_eq!(ident.offset, 2);
/// ```
pub fn extract_leading_identifier(text: &str) -> LeadingIdentifier<'_> {
    let trimmed = text.trim_start();
    let leading_ws = text.len() - trimmed.len();
    let len = identifier_len(trimmed);
    if len == 0 {
        return LeadingIdentifier { text: "", offset: 0 };
    }
    LeadingIdentifier {
        text: &trimmed[..len],
        offset: leading_ws,
    }
}

/// Byte length of the identifier run at the very start of `text`.
fn identifier_len(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if is_identifier_start(c) => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !is_identifier_continue(c))
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Replace the leading identifier of `text` with `new_name`.
///
/// Leading whitespace and everything after the identifier are kept
/// verbatim. Text without a leading identifier becomes `new_name`.
pub fn replace_leading_identifier(text: &str, new_name: &str) -> String {
    let ident = extract_leading_identifier(text);
    if ident.is_empty() {
        return new_name.to_string();
    }
    let end = ident.offset + ident.len();
    let mut out = String::with_capacity(text.len() - ident.len() + new_name.len());
    out.push_str(&text[..ident.offset]);
    out.push_str(new_name);
    out.push_str(&text[end..]);
    out
}

/// Range between the first and the last `"` of a literal's raw text,
/// relative to the literal start. `None` without a closing delimiter.
pub fn inner_range(literal: &str) -> Option<TextRange> {
    let open = literal.find('"')?;
    let close = literal.rfind('"')?;
    if close <= open {
        return None;
    }
    Some(TextRange::new(
        TextSize::new((open + 1) as u32),
        TextSize::new(close as u32),
    ))
}

/// The literal minus one character at each end, for literals whose
/// delimiters cannot be located.
pub fn fallback_inner_range(literal: &str) -> TextRange {
    let start = literal.chars().next().map_or(0, char::len_utf8);
    let end = literal
        .char_indices()
        .last()
        .map_or(0, |(idx, _)| idx)
        .max(start);
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

/// Range of the leading identifier inside a literal's raw text, relative
/// to the literal start.
///
/// Without a leading identifier the range degrades to the first character
/// of the inner text (empty for `""`). Without delimiters it falls back to
/// [`fallback_inner_range`].
pub fn compute_identifier_range_within_literal(literal: &str) -> TextRange {
    let Some(inner) = inner_range(literal) else {
        return fallback_inner_range(literal);
    };
    let inner_text = &literal[inner];
    let ident = extract_leading_identifier(inner_text);
    let len = if ident.is_empty() {
        inner_text.chars().next().map_or(0, char::len_utf8)
    } else {
        ident.len()
    };
    TextRange::at(
        inner.start() + TextSize::new(ident.offset as u32),
        TextSize::new(len as u32),
    )
}

/// Lower-case the first character, leaving the rest unchanged.
///
/// Only an upper-case first character is changed, so `URLService`
/// becomes `uRLService`.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}

/// Quote `value` as a Java string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `name` is a single identifier as accepted by [`extract_leading_identifier`].
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && identifier_len(name) == name.len()
}
