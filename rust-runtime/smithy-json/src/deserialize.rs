/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Streaming JSON tokenizer.
//!
//! [`json_token_iter`] produces a flat stream of [`Token`]s. Structure is validated as the
//! tokens are produced (brackets must balance, keys must be followed by `:`, values must be
//! separated by `,`), but strings are only unescaped on demand.

pub(crate) mod error;
mod token;

use crate::deserialize::error::DeserializeErrorKind as ErrorKind;
use smithy_types::Number;

pub use error::DeserializeError;
pub use token::{
    expect_start_array, expect_start_object, expect_string_or_null, skip_value, EscapedStr,
    Offset, Token,
};

pub(crate) use token::unexpected;

/// JSON token parser as a Rust iterator
///
/// This parser will parse and yield exactly one [`Token`] per iterator `next()` call.
/// Validation is done on the fly, so it is possible for it to parse an invalid JSON document
/// until it gets to the first [`DeserializeError`].
///
/// JSON string values are left escaped in the [`Token::ValueString`] as an [`EscapedStr`],
/// which is a new type around a slice of original `input` bytes so that the caller can decide
/// when to unescape and allocate into a [`String`].
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// See [`json_token_iter`]
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, DeserializeError> {
        self.peek_byte().ok_or_else(|| self.error(ErrorKind::UnexpectedEos))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn error(&self, kind: ErrorKind) -> DeserializeError {
        DeserializeError::new(kind, Some(self.index))
    }

    fn error_at(&self, offset: usize, kind: ErrorKind) -> DeserializeError {
        DeserializeError::new(kind, Some(offset))
    }

    fn state(&self) -> State {
        *self.state_stack.last().unwrap_or(&State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    fn offset(&self) -> Offset {
        Offset(self.index)
    }

    fn start_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject { offset }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndObject { offset }
    }

    fn start_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray { offset }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndArray { offset }
    }

    /// Reads a JSON value. Assumes leading whitespace has already been discarded.
    fn read_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = self.offset();
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => self.read_string().map(|value| Token::ValueString { offset, value }),
            b'n' => self
                .expect_literal(b"null")
                .map(|_| Token::ValueNull { offset }),
            b't' => self
                .expect_literal(b"true")
                .map(|_| Token::ValueBool {
                    offset,
                    value: true,
                }),
            b'f' => self
                .expect_literal(b"false")
                .map(|_| Token::ValueBool {
                    offset,
                    value: false,
                }),
            b'-' | b'0'..=b'9' => self.read_number(),
            byte => Err(self.error(ErrorKind::UnexpectedToken(
                byte.into(),
                "'{', '[', '\"', 'null', 'true', 'false', <number>",
            ))),
        }
    }

    /// Reads the string starting at the current `"`, returning it still escaped.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, DeserializeError> {
        // Skip the starting quote
        self.advance();
        let input = self.input;
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&input[start..self.index])
                        .map_err(|err| self.error_at(start, err.into()))?;
                    self.advance();
                    return Ok(EscapedStr::new(value));
                }
                b'\\' => {
                    self.advance();
                    self.peek_expect()?;
                    self.advance();
                }
                byte @ 0x00..=0x1F => {
                    return Err(self.error(ErrorKind::UnexpectedControlCharacter(byte)))
                }
                _ => self.advance(),
            }
        }
    }

    fn expect_literal(&mut self, expected: &'static [u8]) -> Result<(), DeserializeError> {
        let end = self.index + expected.len();
        if self.input.get(self.index..end) != Some(expected) {
            return Err(self.error(ErrorKind::ExpectedLiteral(
                String::from_utf8_lossy(expected).into(),
            )));
        }
        self.index = end;
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = self.offset();
        while let Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9') = self.peek_byte() {
            self.advance();
        }
        let input = self.input;
        let text = std::str::from_utf8(&input[offset.0..self.index])
            .map_err(|err| self.error_at(offset.0, err.into()))?;
        let invalid = || DeserializeError::new(ErrorKind::InvalidNumber, Some(offset.0));
        let value = if text.contains(|c| matches!(c, '.' | 'e' | 'E')) {
            Number::Float(text.parse::<f64>().map_err(|_| invalid())?)
        } else if text.starts_with('-') {
            Number::NegInt(text.parse::<i64>().map_err(|_| invalid())?)
        } else {
            Number::PosInt(text.parse::<u64>().map_err(|_| invalid())?)
        };
        Ok(Token::ValueNumber { offset, value })
    }

    /// Reads an object key and the `:` that follows it.
    fn read_object_key(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = self.offset();
        match self.peek_expect()? {
            b'"' => {
                let key = self.read_string()?;
                self.discard_whitespace();
                match self.peek_expect()? {
                    b':' => self.advance(),
                    byte => return Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "':'"))),
                }
                self.replace_state(State::ObjectFieldValue);
                Ok(Token::ObjectKey { offset, key })
            }
            byte => Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "'\"'"))),
        }
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            b',' => {
                self.advance();
                self.discard_whitespace();
                self.read_value()
            }
            byte => Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            _ => self.read_object_key(),
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b',' => {
                self.advance();
                self.discard_whitespace();
                self.read_object_key()
            }
            byte => Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.replace_state(State::ObjectNextKeyOrEnd);
        self.read_value()
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, DeserializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.discard_whitespace();
        if self.index == self.input.len() && self.state() == State::Initial {
            return None;
        }
        let result = match self.state() {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            // Fuse the iterator after the first error
            self.index = self.input.len();
            self.state_stack.truncate(1);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::error::DeserializeErrorKind::*;
    use super::{json_token_iter, DeserializeError, EscapedStr, Offset, Token};
    use proptest::prelude::*;
    use smithy_types::Number;

    fn tokens(input: &str) -> Vec<Result<Token<'_>, DeserializeError>> {
        json_token_iter(input.as_bytes()).collect()
    }

    fn err(kind: super::error::DeserializeErrorKind, offset: usize) -> DeserializeError {
        DeserializeError::new(kind, Some(offset))
    }

    #[test]
    fn empty_input() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \n\t ").is_empty());
    }

    #[test]
    fn scalars() {
        assert_eq!(
            vec![Ok(Token::ValueNull { offset: Offset(1) })],
            tokens(" null ")
        );
        assert_eq!(
            vec![
                Ok(Token::ValueBool {
                    offset: Offset(0),
                    value: true
                }),
                Ok(Token::ValueBool {
                    offset: Offset(5),
                    value: false
                }),
            ],
            tokens("true false")
        );
        assert_eq!(
            vec![Ok(Token::ValueString {
                offset: Offset(0),
                value: EscapedStr::new("a\\\"b")
            })],
            tokens(r#""a\"b""#)
        );
    }

    #[test]
    fn numbers() {
        let number = |input: &str| match json_token_iter(input.as_bytes()).next() {
            Some(Ok(Token::ValueNumber { value, .. })) => value,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(Number::PosInt(1234567890), number("1234567890"));
        assert_eq!(Number::NegInt(-5), number("-5"));
        assert_eq!(Number::Float(1.5), number("1.5"));
        assert_eq!(Number::Float(-2e3), number("-2E3"));
        assert_eq!(
            Some(Err(err(InvalidNumber, 0))),
            json_token_iter(b"1-2").next()
        );
    }

    #[test]
    fn object_and_array() {
        assert_eq!(
            vec![
                Ok(Token::StartObject { offset: Offset(0) }),
                Ok(Token::ObjectKey {
                    offset: Offset(1),
                    key: EscapedStr::new("Items")
                }),
                Ok(Token::StartArray { offset: Offset(10) }),
                Ok(Token::ValueNumber {
                    offset: Offset(11),
                    value: Number::PosInt(1)
                }),
                Ok(Token::StartObject { offset: Offset(14) }),
                Ok(Token::EndObject { offset: Offset(15) }),
                Ok(Token::EndArray { offset: Offset(16) }),
                Ok(Token::EndObject { offset: Offset(17) }),
            ],
            tokens(r#"{"Items": [1, {}]}"#)
        );
    }

    #[test]
    fn mismatched_braces() {
        assert_eq!(
            Some(Err(err(UnexpectedToken(']', "'}', ','"), 10))),
            json_token_iter(br#"[{"foo": 5]}"#).last()
        );
        assert_eq!(
            Some(Err(err(UnexpectedToken(']', "'}', ','"), 9))),
            json_token_iter(br#"{"foo": 5]}"#).last()
        );
        assert_eq!(
            Some(Err(err(UnexpectedToken('}', "']', ','"), 4))),
            json_token_iter(br#"[5,6}"#).last()
        );
    }

    #[test]
    fn trailing_commas_rejected() {
        assert!(matches!(
            json_token_iter(b"[1,]").last(),
            Some(Err(_))
        ));
        assert_eq!(
            Some(Err(err(UnexpectedToken('}', "'\"'"), 7))),
            json_token_iter(br#"{"a":1,}"#).last()
        );
    }

    #[test]
    fn truncated_input() {
        assert_eq!(
            Some(Err(err(UnexpectedEos, 10))),
            json_token_iter(br#"{"KeyId":1"#).last()
        );
        assert_eq!(
            Some(Err(err(UnexpectedEos, 4))),
            json_token_iter(br#"{"Ke"#).last()
        );
    }

    #[test]
    fn fused_after_error() {
        let mut iter = json_token_iter(b"[x, 1]");
        assert!(matches!(iter.next(), Some(Ok(Token::StartArray { .. }))));
        assert!(matches!(iter.next(), Some(Err(_))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn control_character_in_string() {
        assert_eq!(
            Some(Err(err(UnexpectedControlCharacter(b'\n'), 2))),
            json_token_iter(b"\"a\nb\"").next()
        );
    }

    #[test]
    fn bad_literal() {
        assert_eq!(
            Some(Err(err(ExpectedLiteral("true".into()), 0))),
            json_token_iter(b"trUe").next()
        );
    }

    proptest! {
        #[test]
        fn tokenizes_whatever_serde_json_writes(values in proptest::collection::vec(any::<i64>(), 0..20)) {
            let json = serde_json::to_string(&values).unwrap();
            let parsed: Vec<Token<'_>> = json_token_iter(json.as_bytes())
                .collect::<Result<_, _>>()
                .unwrap();
            prop_assert_eq!(values.len() + 2, parsed.len());
        }
    }
}
