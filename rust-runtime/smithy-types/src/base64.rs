/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A thin wrapper over the `base64` crate using the standard alphabet.

pub use ::base64::DecodeError;

/// Decode `input` from base64 using the standard base64 alphabet
pub fn decode<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, DecodeError> {
    ::base64::decode(input)
}

/// Encode `input` into base64 using the standard base64 alphabet
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    ::base64::encode(input)
}
