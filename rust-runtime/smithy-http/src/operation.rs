/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// A serialized request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<Bytes>,
    response_handler: H,
    metadata: Metadata,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<Bytes>, response_handler: H, metadata: Metadata) -> Self {
        Operation {
            request,
            response_handler,
            metadata,
        }
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    pub fn response_handler(&self) -> &H {
        &self.response_handler
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn into_request_response(self) -> (http::Request<Bytes>, H) {
        (self.request, self.response_handler)
    }
}

/// An input could not be turned into a request.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("`{field}` was missing: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    #[error("failed to build the HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
}

/// Builds the `POST /` request used by the AWS JSON protocols.
pub fn aws_json_request(
    json_version: &str,
    target: &str,
    body: String,
) -> Result<http::Request<Bytes>, BuildError> {
    Ok(http::Request::builder()
        .method("POST")
        .uri("/")
        .header(
            http::header::CONTENT_TYPE,
            format!("application/x-amz-json-{}", json_version),
        )
        .header("x-amz-target", target)
        .body(Bytes::from(body))?)
}

#[cfg(test)]
mod test {
    use super::{aws_json_request, BuildError, Metadata, Operation};

    #[test]
    fn builds_aws_json_request() {
        let request =
            aws_json_request("1.1", "TrentService.ScheduleKeyDeletion", "{}".to_string()).unwrap();
        assert_eq!(http::Method::POST, request.method());
        assert_eq!("/", request.uri().path());
        assert_eq!(
            "application/x-amz-json-1.1",
            request.headers()["content-type"]
        );
        assert_eq!(
            "TrentService.ScheduleKeyDeletion",
            request.headers()["x-amz-target"]
        );
        assert_eq!(&b"{}"[..], &request.body()[..]);
    }

    #[test]
    fn invalid_header_is_a_build_error() {
        let err = aws_json_request("1.1", "bad\ntarget", String::new()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidRequest(_)));
    }

    #[test]
    fn operation_parts() {
        let request = aws_json_request("1.1", "TrentService.CreateGrant", "{}".into()).unwrap();
        let operation = Operation::new(request, (), Metadata::new("CreateGrant", "kms"));
        assert_eq!("CreateGrant", operation.metadata().name());
        assert_eq!("kms", operation.metadata().service());
        let (request, _handler) = operation.into_request_response();
        assert_eq!("TrentService.CreateGrant", request.headers()["x-amz-target"]);
    }

    #[test]
    fn missing_field_message() {
        let err = BuildError::MissingField {
            field: "key_id",
            details: "key_id is required",
        };
        assert_eq!("`key_id` was missing: key_id is required", err.to_string());
    }
}
