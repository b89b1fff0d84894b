/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON support for the generated service crates: a streaming tokenizer, a writer for request
//! bodies, and the descriptor driven shape unmarshaller used for response bodies.

pub mod deserialize;
mod escape;
pub mod serialize;
mod settings;
pub mod unmarshall;

pub use settings::JsonCodecSettings;
