/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error response parsing shared by the AWS JSON 1.0 and 1.1 protocols.

use crate::response::parse_json_body;
use bytes::Bytes;
use http::header::HeaderMap;
use http::Response;
use smithy_json::deserialize::DeserializeError;
use smithy_json::unmarshall::{FieldDescriptor, Shape, ShapeDescriptor, StringUnmarshaller, Unmarshaller};
use smithy_json::JsonCodecSettings;
use smithy_types::Error as GenericError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

#[derive(Debug, Default)]
struct ErrorBody {
    code: Option<String>,
    type_name: Option<String>,
    message: Option<String>,
}

const ERROR_BODY_FIELDS: &[FieldDescriptor<ErrorBody>] = &[
    FieldDescriptor::new("code", |body, cursor| {
        body.code = StringUnmarshaller.unmarshall(cursor)?;
        Ok(())
    }),
    FieldDescriptor::new("__type", |body, cursor| {
        body.type_name = StringUnmarshaller.unmarshall(cursor)?;
        Ok(())
    }),
    FieldDescriptor::new("message", |body, cursor| {
        body.message = StringUnmarshaller.unmarshall(cursor)?;
        Ok(())
    }),
    FieldDescriptor::new("Message", |body, cursor| {
        body.message = StringUnmarshaller.unmarshall(cursor)?;
        Ok(())
    }),
    FieldDescriptor::new("errorMessage", |body, cursor| {
        body.message = StringUnmarshaller.unmarshall(cursor)?;
        Ok(())
    }),
];
static ERROR_BODY: ShapeDescriptor<ErrorBody> = ShapeDescriptor::new("ErrorBody", ERROR_BODY_FIELDS);

impl Shape for ErrorBody {
    type Builder = ErrorBody;

    fn descriptor() -> &'static ShapeDescriptor<ErrorBody> {
        &ERROR_BODY
    }

    fn build(builder: ErrorBody) -> Self {
        builder
    }
}

/// Strips the URL suffix (`:http://...`) and the namespace prefix (`aws.kms#`) from an error code.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, DeserializeError> {
    headers
        .get(name)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| DeserializeError::custom(format!("`{}` header is not valid UTF-8", name)))
        })
        .transpose()
}

/// Parses the code, message and request id out of an error response.
///
/// The code comes from the `x-amzn-errortype` header, else the body's `code` member, else its
/// `__type` member, regardless of member order.
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<GenericError, DeserializeError> {
    let body: ErrorBody = parse_json_body(response.body(), &JsonCodecSettings::default())?;
    let headers = response.headers();

    let mut error = GenericError::builder();
    let code = header(headers, ERROR_TYPE_HEADER)?
        .or_else(|| body.code.as_deref())
        .or_else(|| body.type_name.as_deref());
    if let Some(code) = code {
        error.code(sanitize_error_code(code));
    }
    if let Some(message) = body.message {
        error.message(message);
    }
    if let Some(request_id) = header(headers, REQUEST_ID_HEADER)? {
        error.request_id(request_id);
    }
    let error = error.build();
    tracing::debug!(code = ?error.code(), status = %response.status(), "parsed error response");
    Ok(error)
}
