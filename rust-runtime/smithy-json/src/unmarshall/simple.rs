/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Unmarshallers for scalar members.

use crate::deserialize::{unexpected, DeserializeError, EscapedStr, Offset, Token};
use crate::unmarshall::{TokenCursor, Unmarshaller};
use smithy_types::instant::Format;
use smithy_types::{base64, Blob, Instant, Number};
use std::borrow::Cow;
use std::convert::TryFrom;
use std::marker::PhantomData;

fn unescape<'a>(offset: Offset, value: &EscapedStr<'a>) -> Result<Cow<'a, str>, DeserializeError> {
    value
        .to_unescaped()
        .map_err(|err| err.with_offset(offset.0))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringUnmarshaller;

impl Unmarshaller for StringUnmarshaller {
    type Output = String;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<String>, DeserializeError> {
        match cursor.current_token() {
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(Token::ValueString { offset, value }) => {
                Ok(Some(unescape(*offset, value)?.into_owned()))
            }
            other => Err(unexpected(other, "string")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanUnmarshaller;

impl Unmarshaller for BooleanUnmarshaller {
    type Output = bool;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<bool>, DeserializeError> {
        match cursor.current_token() {
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(Token::ValueBool { value, .. }) => Ok(Some(*value)),
            other => Err(unexpected(other, "boolean")),
        }
    }
}

fn integer<T: TryFrom<Number, Error = smithy_types::TryFromNumberError>>(
    cursor: &TokenCursor<'_>,
) -> Result<Option<T>, DeserializeError> {
    match cursor.current_token() {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { offset, value }) => T::try_from(*value)
            .map(Some)
            .map_err(|err| DeserializeError::from(err).with_offset(offset.0)),
        other => Err(unexpected(other, "number")),
    }
}

/// Reads a 32-bit integer. Fractional or out of range numbers are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerUnmarshaller;

impl Unmarshaller for IntegerUnmarshaller {
    type Output = i32;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<i32>, DeserializeError> {
        integer(cursor)
    }
}

/// Reads a 64-bit integer. Fractional or out of range numbers are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongUnmarshaller;

impl Unmarshaller for LongUnmarshaller {
    type Output = i64;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<i64>, DeserializeError> {
        integer(cursor)
    }
}

// JSON has no literal for these, so services send them as strings.
fn double(cursor: &TokenCursor<'_>) -> Result<Option<f64>, DeserializeError> {
    match cursor.current_token() {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, .. }) => Ok(Some(value.to_f64_lossy())),
        Some(Token::ValueString { value, offset }) => match value.as_escaped_str() {
            "NaN" => Ok(Some(f64::NAN)),
            "Infinity" => Ok(Some(f64::INFINITY)),
            "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
            other => Err(offset.error(
                format!("only `NaN`, `Infinity` and `-Infinity` are valid float strings, found `{}`", other)
                    .into(),
            )),
        },
        other => Err(unexpected(other, "number")),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatUnmarshaller;

impl Unmarshaller for FloatUnmarshaller {
    type Output = f32;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<f32>, DeserializeError> {
        Ok(double(cursor)?.map(|value| value as f32))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleUnmarshaller;

impl Unmarshaller for DoubleUnmarshaller {
    type Output = f64;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<f64>, DeserializeError> {
        double(cursor)
    }
}

/// Reads a timestamp.
///
/// Numbers are always epoch seconds. Strings are parsed with the member's format, or with
/// the cursor's [`default_timestamp_format`](crate::JsonCodecSettings::default_timestamp_format)
/// when the member doesn't specify one.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantUnmarshaller {
    format: Option<Format>,
}

impl InstantUnmarshaller {
    pub const fn new() -> Self {
        InstantUnmarshaller { format: None }
    }

    pub const fn with_format(format: Format) -> Self {
        InstantUnmarshaller {
            format: Some(format),
        }
    }
}

impl Unmarshaller for InstantUnmarshaller {
    type Output = Instant;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<Instant>, DeserializeError> {
        let format = self
            .format
            .unwrap_or(cursor.settings().default_timestamp_format);
        match cursor.current_token() {
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(Token::ValueNumber { value, offset }) => match value {
                Number::Float(seconds) => Ok(Some(Instant::from_f64(*seconds))),
                _ => i64::try_from(*value)
                    .map(|seconds| Some(Instant::from_epoch_seconds(seconds)))
                    .map_err(|err| DeserializeError::from(err).with_offset(offset.0)),
            },
            Some(Token::ValueString { value, offset }) => {
                Instant::from_str(&unescape(*offset, value)?, format)
                    .map(Some)
                    .map_err(|err| DeserializeError::from(err).with_offset(offset.0))
            }
            other => Err(unexpected(other, "timestamp")),
        }
    }
}

/// Reads a base64 encoded blob.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobUnmarshaller;

impl Unmarshaller for BlobUnmarshaller {
    type Output = Blob;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<Blob>, DeserializeError> {
        match cursor.current_token() {
            Some(Token::ValueNull { .. }) => Ok(None),
            Some(Token::ValueString { value, offset }) => base64::decode(value.as_escaped_str())
                .map(|bytes| Some(Blob::new(bytes)))
                .map_err(|err| DeserializeError::from(err).with_offset(offset.0)),
            other => Err(unexpected(other, "base64 encoded string")),
        }
    }
}

/// Reads a string into an enum. Values the enum doesn't know are up to its `From<&str>` impl,
/// generated enums keep them in an `Unknown` variant.
pub struct EnumUnmarshaller<E>(PhantomData<fn() -> E>);

impl<E> EnumUnmarshaller<E> {
    pub const fn new() -> Self {
        EnumUnmarshaller(PhantomData)
    }
}

impl<E> Clone for EnumUnmarshaller<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumUnmarshaller<E> {}

impl<E> Default for EnumUnmarshaller<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Unmarshaller for EnumUnmarshaller<E>
where
    E: for<'s> From<&'s str>,
{
    type Output = E;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<E>, DeserializeError> {
        Ok(StringUnmarshaller
            .unmarshall(cursor)?
            .map(|value| E::from(value.as_str())))
    }
}
