/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;
use http::Response;
use smithy_json::deserialize::DeserializeError;
use smithy_json::unmarshall::{unmarshall_document, Shape};
use smithy_json::JsonCodecSettings;
use std::error::Error;

/// Parses a fully loaded HTTP response.
///
/// For request/response style operations `Output` is typically
/// `Result<ScheduleKeyDeletionOutput, ScheduleKeyDeletionError>`. Keeping this sync and
/// free of I/O keeps the parsers pure and easy to test.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// Runs `handler` over `response` and classifies the outcome.
///
/// Errors from a 2xx response can only come from an unreadable body and are reported as
/// [`SdkError::ResponseError`]. Errors from any other status are the service's.
pub fn load_response<T, E, O>(
    response: Response<Bytes>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    O: ParseStrictResponse<Output = Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    let parsed = handler.parse(&response);
    tracing::debug!(status = %response.status(), success = parsed.is_ok(), "parsed response");
    match parsed {
        Ok(parsed) => Ok(SdkSuccess {
            raw: response,
            parsed,
        }),
        Err(err) if response.status().is_success() => Err(SdkError::ResponseError {
            raw: response,
            err: Box::new(err),
        }),
        Err(err) => Err(SdkError::ServiceError { raw: response, err }),
    }
}

/// Unmarshalls a JSON response body into `T`.
///
/// An empty body is read as `{}`, and a `null` body produces `T::default()`.
pub fn parse_json_body<T>(body: &[u8], settings: &JsonCodecSettings) -> Result<T, DeserializeError>
where
    T: Shape + Default,
{
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    Ok(unmarshall_document::<T>(body, settings)?.unwrap_or_default())
}
