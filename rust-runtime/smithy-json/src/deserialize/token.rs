/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::{DeserializeError, DeserializeErrorKind};
use crate::escape::unescape_string;
use smithy_types::Number;
use std::borrow::Cow;

/// New-type around `&str` that indicates the string is an escaped JSON string.
/// Provides functions for retrieving the string in either form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    /// Returns the escaped string value
    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Unescapes the string and returns it.
    /// If the string doesn't need unescaping, it will be returned directly.
    /// Errors carry no offset.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, DeserializeError> {
        unescape_string(self.0)
    }
}

/// Represents the location of a token
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

impl Offset {
    /// Creates a custom error from the offset
    pub fn error(&self, msg: Cow<'static, str>) -> DeserializeError {
        DeserializeError::new(DeserializeErrorKind::Custom(msg), Some(self.0))
    }
}

/// Enum representing the different JSON tokens that can be returned by json_token_iter.
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    StartArray {
        offset: Offset,
    },
    EndArray {
        offset: Offset,
    },
    ObjectKey {
        offset: Offset,
        key: EscapedStr<'a>,
    },
    StartObject {
        offset: Offset,
    },
    EndObject {
        offset: Offset,
    },
    ValueBool {
        offset: Offset,
        value: bool,
    },
    ValueNull {
        offset: Offset,
    },
    ValueNumber {
        offset: Offset,
        value: Number,
    },
    ValueString {
        offset: Offset,
        value: EscapedStr<'a>,
    },
}

impl<'a> Token<'a> {
    pub fn offset(&self) -> Offset {
        use Token::*;
        *match self {
            StartArray { offset } => offset,
            EndArray { offset } => offset,
            ObjectKey { offset, .. } => offset,
            StartObject { offset } => offset,
            EndObject { offset } => offset,
            ValueBool { offset, .. } => offset,
            ValueNull { offset } => offset,
            ValueNumber { offset, .. } => offset,
            ValueString { offset, .. } => offset,
        }
    }

    /// Builds an error from the token's offset
    pub fn error(&self, msg: Cow<'static, str>) -> DeserializeError {
        self.offset().error(msg)
    }

    /// Name of the token kind, for error messages
    pub fn describe(&self) -> &'static str {
        use Token::*;
        match self {
            StartArray { .. } => "StartArray",
            EndArray { .. } => "EndArray",
            ObjectKey { .. } => "ObjectKey",
            StartObject { .. } => "StartObject",
            EndObject { .. } => "EndObject",
            ValueBool { .. } => "ValueBool",
            ValueNull { .. } => "ValueNull",
            ValueNumber { .. } => "ValueNumber",
            ValueString { .. } => "ValueString",
        }
    }
}

/// Builds the error for a token that doesn't fit what the caller `expected`.
pub(crate) fn unexpected(token: Option<&Token<'_>>, expected: &'static str) -> DeserializeError {
    match token {
        Some(token) => token.error(Cow::Owned(format!(
            "expected {}, found {}",
            expected,
            token.describe()
        ))),
        None => DeserializeError::new(DeserializeErrorKind::UnexpectedEos, None),
    }
}

/// Expects the next token to open an object.
pub fn expect_start_object(token: Option<Result<Token<'_>, DeserializeError>>) -> Result<(), DeserializeError> {
    match token.transpose()? {
        Some(Token::StartObject { .. }) => Ok(()),
        other => Err(unexpected(other.as_ref(), "StartObject")),
    }
}

/// Expects the next token to open an array.
pub fn expect_start_array(token: Option<Result<Token<'_>, DeserializeError>>) -> Result<(), DeserializeError> {
    match token.transpose()? {
        Some(Token::StartArray { .. }) => Ok(()),
        other => Err(unexpected(other.as_ref(), "StartArray")),
    }
}

/// Expects a string or null token. Strings are returned unescaped.
pub fn expect_string_or_null(
    token: Option<Result<Token<'_>, DeserializeError>>,
) -> Result<Option<String>, DeserializeError> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { offset, value }) => value
            .to_unescaped()
            .map(|value| Some(value.into_owned()))
            .map_err(|err| err.with_offset(offset.0)),
        other => Err(unexpected(other.as_ref(), "string or null")),
    }
}

/// Consumes one complete value (scalar, array or object) from `tokens`.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, DeserializeError>>,
) -> Result<(), DeserializeError> {
    let mut open = 0usize;
    loop {
        match tokens.next().transpose()? {
            Some(Token::StartObject { .. }) | Some(Token::StartArray { .. }) => open += 1,
            Some(Token::EndObject { .. }) | Some(Token::EndArray { .. }) if open > 0 => open -= 1,
            Some(Token::ObjectKey { .. }) if open > 0 => continue,
            Some(Token::ValueNull { .. })
            | Some(Token::ValueBool { .. })
            | Some(Token::ValueNumber { .. })
            | Some(Token::ValueString { .. }) => {}
            other => return Err(unexpected(other.as_ref(), "value")),
        }
        if open == 0 {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::deserialize::json_token_iter;

    #[test]
    fn unexpected_token_message() {
        let token = Token::ValueBool {
            offset: Offset(7),
            value: true,
        };
        let err = unexpected(Some(&token), "string");
        assert_eq!(Some(7), err.offset());
        assert_eq!(
            "Error at offset 7: failed to parse JSON: expected string, found ValueBool",
            format!("{}", err)
        );
    }

    #[test]
    fn unexpected_end_of_stream() {
        let err = unexpected(None, "string");
        assert_eq!("unexpected end of stream", format!("{}", err));
    }

    #[test]
    fn skips_nested_values() {
        let mut tokens = json_token_iter(br#"{"a":[1,{"b":null}],"c":{}} "next""#);
        skip_value(&mut tokens).unwrap();
        assert_eq!(
            Some("next".to_string()),
            expect_string_or_null(tokens.next()).unwrap()
        );

        let mut tokens = json_token_iter(b"5 true");
        skip_value(&mut tokens).unwrap();
        assert!(matches!(tokens.next(), Some(Ok(Token::ValueBool { value: true, .. }))));
    }

    #[test]
    fn skip_rejects_closing_token() {
        let mut tokens = json_token_iter(b"[]");
        tokens.next();
        assert!(skip_value(&mut tokens).is_err());
    }

    #[test]
    fn expect_helpers() {
        assert!(expect_start_object(json_token_iter(b"{}").next()).is_ok());
        assert!(expect_start_array(json_token_iter(b"[]").next()).is_ok());
        let err = expect_start_object(json_token_iter(b"[]").next()).unwrap_err();
        assert_eq!(Some(0), err.offset());
        assert_eq!(None, expect_string_or_null(json_token_iter(b"null").next()).unwrap());
        assert_eq!(
            Some("a\\tb".to_string()),
            expect_string_or_null(json_token_iter(br#""a\\tb""#).next()).unwrap()
        );
        assert!(expect_string_or_null(json_token_iter(b"1").next()).is_err());
        assert_eq!(
            "unexpected end of stream",
            expect_start_array(None).unwrap_err().to_string()
        );
    }

    #[test]
    fn unescape_key() {
        let key = EscapedStr::new("Key\\nId");
        assert_eq!("Key\\nId", key.as_escaped_str());
        assert_eq!("Key\nId", key.to_unescaped().unwrap());
    }
}
