/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! String escaping for the writer and on-demand unescaping for [`EscapedStr`](crate::deserialize::EscapedStr).

use crate::deserialize::error::{DeserializeError, DeserializeErrorKind};
use std::borrow::Cow;
use std::fmt::Write;
use std::str::Chars;

fn needs_escape(chr: char) -> bool {
    matches!(chr, '"' | '\\' | '\u{00}'..='\u{1F}')
}

/// Escapes `value` for use inside a JSON string literal. Borrows when nothing needs escaping.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    let first = match value.find(needs_escape) {
        Some(first) => first,
        None => return Cow::Borrowed(value),
    };
    let mut escaped = String::with_capacity(value.len() + 8);
    escaped.push_str(&value[..first]);
    for chr in value[first..].chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{00}'..='\u{1F}' => {
                // writing to a String can't fail
                let _ = write!(escaped, "\\u{:04x}", chr as u32);
            }
            _ => escaped.push(chr),
        }
    }
    Cow::Owned(escaped)
}

fn invalid_escape(message: impl Into<Cow<'static, str>>) -> DeserializeError {
    DeserializeError::new(DeserializeErrorKind::InvalidEscape(message.into()), None)
}

/// Resolves the escape sequences in the body of a JSON string literal.
///
/// The returned error carries no offset; callers attach the offset of the token.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, DeserializeError> {
    let first = match value.find('\\') {
        Some(first) => first,
        None => return Ok(Cow::Borrowed(value)),
    };
    let mut unescaped = String::with_capacity(value.len());
    unescaped.push_str(&value[..first]);

    let mut chars = value[first..].chars();
    while let Some(chr) = chars.next() {
        if chr != '\\' {
            unescaped.push(chr);
            continue;
        }
        let resolved = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{08}',
            Some('f') => '\u{0C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => read_unicode_escape(&mut chars)?,
            Some(other) => return Err(invalid_escape(format!("\\{}", other))),
            None => return Err(invalid_escape("unexpected end of string")),
        };
        unescaped.push(resolved);
    }
    Ok(Cow::Owned(unescaped))
}

/// Reads the code unit following `\u`. A high surrogate must be followed by `\u` and a low
/// surrogate, and the pair is combined into one `char`.
fn read_unicode_escape(chars: &mut Chars<'_>) -> Result<char, DeserializeError> {
    let high = read_code_unit(chars)?;
    if !(0xD800..0xDC00).contains(&high) {
        return std::char::from_u32(u32::from(high))
            .ok_or_else(|| invalid_escape(format!("unpaired surrogate \\u{:04X}", high)));
    }
    let low = match (chars.next(), chars.next()) {
        (Some('\\'), Some('u')) => read_code_unit(chars)?,
        _ => {
            return Err(invalid_escape(format!(
                "expected a low surrogate after \\u{:04X}",
                high
            )))
        }
    };
    if !(0xDC00..0xE000).contains(&low) {
        return Err(invalid_escape(format!(
            "invalid surrogate pair \\u{:04X}\\u{:04X}",
            high, low
        )));
    }
    let codepoint = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    std::char::from_u32(codepoint).ok_or_else(|| invalid_escape("invalid surrogate pair"))
}

fn read_code_unit(chars: &mut Chars<'_>) -> Result<u16, DeserializeError> {
    let mut unit = 0u16;
    for _ in 0..4 {
        let digit = match chars.next() {
            None => return Err(invalid_escape("unexpected end of string")),
            Some(chr) => chr
                .to_digit(16)
                .ok_or_else(|| invalid_escape(format!("invalid unicode escape digit {:?}", chr)))?,
        };
        unit = (unit << 4) | digit as u16;
    }
    Ok(unit)
}
