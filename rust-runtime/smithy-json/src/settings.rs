/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::instant::Format;

/// Protocol level knobs for JSON unmarshalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodecSettings {
    /// Format used to read timestamp strings when a member doesn't name its own.
    pub default_timestamp_format: Format,
}

impl Default for JsonCodecSettings {
    fn default() -> Self {
        Self {
            default_timestamp_format: Format::EpochSeconds,
        }
    }
}
