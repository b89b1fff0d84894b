/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::BuildError;
use bytes::Bytes;
use std::error::Error;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// A parsed response along with the raw HTTP response it was parsed from.
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<Bytes>,
    pub parsed: O,
}

#[derive(Debug, thiserror::Error)]
pub enum SdkError<E>
where
    E: Error + 'static,
{
    /// The request failed during construction. It was not dispatched over the network.
    #[error("failed to construct request: {0}")]
    ConstructionFailure(#[source] BoxError),

    /// A success response was received but its body doesn't match the protocol
    #[error("failed to parse response: {err}")]
    ResponseError {
        raw: http::Response<Bytes>,
        #[source]
        err: BoxError,
    },

    /// An error response was received from the service
    #[error("service error: {err}")]
    ServiceError {
        raw: http::Response<Bytes>,
        #[source]
        err: E,
    },
}

impl<E> SdkError<E>
where
    E: Error + 'static,
{
    /// The raw response, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<Bytes>> {
        match self {
            SdkError::ConstructionFailure(_) => None,
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
        }
    }

    /// The modeled service error, if this is one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl<E> From<BuildError> for SdkError<E>
where
    E: Error + 'static,
{
    fn from(err: BuildError) -> Self {
        SdkError::ConstructionFailure(Box::new(err))
    }
}
