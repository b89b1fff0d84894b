/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod base64;
pub mod instant;

use std::convert::TryFrom;
use std::error::Error as StdError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::TryFromIntError;

pub use crate::instant::Instant;

/// Binary data, transmitted as a base64 string in JSON protocols.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `f64`. Integers beyond 2^53 lose precision.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Converts to an `f32`. Out of range values become infinite.
    pub fn to_f32_lossy(self) -> f32 {
        self.to_f64_lossy() as f32
    }
}

#[derive(Debug)]
enum TryFromNumberErrorKind {
    OutsideIntegerRange(TryFromIntError),
    FloatToIntegerLossyConversion(f64),
}

/// The number could not be converted into the requested integer type without losing data.
#[derive(Debug)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
}

impl Display for TryFromNumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use TryFromNumberErrorKind::*;
        match &self.kind {
            OutsideIntegerRange(_) => write!(f, "integer was outside of the target type's range"),
            FloatToIntegerLossyConversion(value) => write!(
                f,
                "cannot convert floating point number {} into an integer",
                value
            ),
        }
    }
}

impl StdError for TryFromNumberError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            TryFromNumberErrorKind::OutsideIntegerRange(err) => Some(err),
            TryFromNumberErrorKind::FloatToIntegerLossyConversion(_) => None,
        }
    }
}

impl From<TryFromIntError> for TryFromNumberError {
    fn from(err: TryFromIntError) -> Self {
        TryFromNumberError {
            kind: TryFromNumberErrorKind::OutsideIntegerRange(err),
        }
    }
}

impl TryFrom<Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i64::try_from(v)?),
            Number::NegInt(v) => Ok(v),
            Number::Float(v) => Err(TryFromNumberError {
                kind: TryFromNumberErrorKind::FloatToIntegerLossyConversion(v),
            }),
        }
    }
}

impl TryFrom<Number> for i32 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        Ok(i32::try_from(i64::try_from(value)?)?)
    }
}

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Default, Debug)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl StdError for Error {}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Error, Instant, Number};
    use std::convert::TryFrom;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn number_to_integers() {
        assert_eq!(5, i32::try_from(Number::PosInt(5)).unwrap());
        assert_eq!(-5, i64::try_from(Number::NegInt(-5)).unwrap());
        assert!(i32::try_from(Number::PosInt(u64::from(u32::MAX))).is_err());
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i64::try_from(Number::Float(1.5)).is_err());
    }

    #[test]
    fn number_to_floats() {
        assert_eq!(1.5, Number::Float(1.5).to_f64_lossy());
        assert_eq!(-3.0, Number::NegInt(-3).to_f32_lossy());
    }

    #[test]
    fn generic_error_display() {
        let err = Error::builder()
            .code("NotFoundException")
            .message("Key 'arn:aws:kms:us-east-1:111122223333:key/abc' does not exist")
            .request_id("1234")
            .build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"NotFoundException\", message: \"Key 'arn:aws:kms:us-east-1:111122223333:key/abc' does not exist\", request_id: \"1234\" }"
        );
        assert_eq!(err.code(), Some("NotFoundException"));
    }
}
