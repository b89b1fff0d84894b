/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::base64::DecodeError;
use smithy_types::instant::DateParseError;
use smithy_types::TryFromNumberError;
use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum DeserializeErrorKind {
    Custom(Cow<'static, str>),
    ExpectedLiteral(String),
    InvalidBase64(DecodeError),
    InvalidEscape(Cow<'static, str>),
    InvalidNumber,
    InvalidTimestamp(DateParseError),
    InvalidUtf8,
    UnexpectedControlCharacter(u8),
    UnexpectedEos,
    UnexpectedToken(char, &'static str),
}

/// Error returned when a JSON document can't be tokenized or doesn't fit the shape it's being
/// unmarshalled into. All of these are fatal for the parse that produced them.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct DeserializeError {
    kind: DeserializeErrorKind,
    offset: Option<usize>,
}

impl DeserializeError {
    pub(crate) fn new(kind: DeserializeErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }

    /// Returns a custom error without an offset.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(DeserializeErrorKind::Custom(message.into()), None)
    }

    /// Byte offset into the input where the error was detected, if known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub(crate) fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl std::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DeserializeErrorKind::*;
        match &self.kind {
            InvalidBase64(source) => Some(source),
            InvalidTimestamp(source) => Some(source),
            Custom(_)
            | InvalidEscape(_)
            | ExpectedLiteral(_)
            | InvalidNumber
            | InvalidUtf8
            | UnexpectedControlCharacter(_)
            | UnexpectedToken(..)
            | UnexpectedEos => None,
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DeserializeErrorKind::*;
        if let Some(offset) = self.offset {
            write!(f, "Error at offset {}: ", offset)?;
        }
        match &self.kind {
            Custom(msg) => write!(f, "failed to parse JSON: {}", msg),
            ExpectedLiteral(literal) => write!(f, "expected literal: {}", literal),
            InvalidBase64(_) => write!(f, "failed to decode base64 blob"),
            InvalidEscape(msg) => write!(f, "invalid JSON escape: {}", msg),
            InvalidNumber => write!(f, "invalid number"),
            InvalidTimestamp(_) => write!(f, "failed to parse timestamp"),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON stream"),
            UnexpectedControlCharacter(value) => write!(
                f,
                "encountered unescaped control character in string: 0x{:X}",
                value
            ),
            UnexpectedToken(token, expected) => {
                write!(f, "unexpected token '{}'. Expected one of {}", token, expected)
            }
            UnexpectedEos => write!(f, "unexpected end of stream"),
        }
    }
}

impl From<Utf8Error> for DeserializeErrorKind {
    fn from(_: Utf8Error) -> Self {
        DeserializeErrorKind::InvalidUtf8
    }
}

impl From<TryFromNumberError> for DeserializeError {
    fn from(_: TryFromNumberError) -> Self {
        Self::new(DeserializeErrorKind::InvalidNumber, None)
    }
}

impl From<DateParseError> for DeserializeError {
    fn from(err: DateParseError) -> Self {
        Self::new(DeserializeErrorKind::InvalidTimestamp(err), None)
    }
}

impl From<DecodeError> for DeserializeError {
    fn from(err: DecodeError) -> Self {
        Self::new(DeserializeErrorKind::InvalidBase64(err), None)
    }
}
