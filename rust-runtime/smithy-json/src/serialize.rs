/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Writers used to marshal request shapes into JSON.
//!
//! Writers append to a caller owned `String` and never fail. A value is written through a
//! [`JsonValueWriter`], which is obtained from [`JsonObjectWriter::key`] or
//! [`JsonArrayWriter::value`] so that keys and commas are always emitted in the right place.

use crate::escape::escape_string;
use smithy_types::instant::Format;
use smithy_types::{base64, Blob, Instant, Number};

/// Writes exactly one JSON value.
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    pub fn null(self) {
        self.output.push_str("null");
    }

    pub fn boolean(self, value: bool) {
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes `value` as an escaped JSON string.
    pub fn string(self, value: &str) {
        append_string_unchecked(self.output, &escape_string(value));
    }

    /// Writes `value` between quotes as-is. The caller guarantees it needs no escaping.
    pub fn string_unchecked(self, value: &str) {
        append_string_unchecked(self.output, value);
    }

    pub fn number(self, value: Number) {
        append_number(self.output, value);
    }

    /// Writes `instant` in `format`. Epoch seconds are written as a bare number,
    /// every other format as a string.
    pub fn instant(self, instant: &Instant, format: Format) {
        let formatted = instant.fmt(format);
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            _ => self.string(&formatted),
        }
    }

    /// Writes `blob` as a base64 string.
    pub fn blob(self, blob: &Blob) {
        append_string_unchecked(self.output, &base64::encode(blob.as_ref()));
    }

    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes `key` and returns a writer for its value.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        append_string_unchecked(self.json, &escape_string(key));
        self.json.push(':');
        JsonValueWriter::new(self.json)
    }

    pub fn finish(self) {
        self.json.push('}');
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Returns a writer for the next element.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.json)
    }

    pub fn finish(self) {
        self.json.push(']');
    }
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => json.push_str(itoa::Buffer::new().format(value)),
        Number::NegInt(value) => json.push_str(itoa::Buffer::new().format(value)),
        // JSON has no NaN or Infinity literals
        Number::Float(value) if !value.is_finite() => json.push_str("null"),
        Number::Float(value) => json.push_str(ryu::Buffer::new().format_finite(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::{append_number, JsonArrayWriter, JsonObjectWriter};
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::{Blob, Instant, Number};

    fn number(value: Number) -> String {
        let mut out = String::new();
        append_number(&mut out, value);
        out
    }

    #[test]
    fn empty_containers() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", output);
    }

    #[test]
    fn nested_containers() {
        let mut output = String::new();
        let mut request = JsonObjectWriter::new(&mut output);
        request.key("KeyId").string("alias/my-key");
        let mut operations = request.key("Operations").start_array();
        operations.value().string("Encrypt");
        operations.value().string("Decrypt");
        operations.finish();
        let mut constraints = request.key("Constraints").start_object();
        let mut subset = constraints.key("EncryptionContextSubset").start_object();
        subset.key("Department").string("IT");
        subset.finish();
        constraints.finish();
        request.key("Limit").number(Number::PosInt(10));
        request.key("Marker").null();
        request.finish();

        assert_eq!(
            r#"{"KeyId":"alias/my-key","Operations":["Encrypt","Decrypt"],"Constraints":{"EncryptionContextSubset":{"Department":"IT"}},"Limit":10,"Marker":null}"#,
            output
        );
    }

    #[test]
    fn escapes_keys_and_strings() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("ba\nr").string("quote\"d");
        object.key("raw").string_unchecked("as-is");
        object.key("flag").boolean(false);
        object.finish();
        assert_eq!(r#"{"ba\nr":"quote\"d","raw":"as-is","flag":false}"#, output);
    }

    #[test]
    fn instants_and_blobs() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array
            .value()
            .instant(&Instant::from_f64(5.2), Format::EpochSeconds);
        array.value().instant(
            &Instant::from_str("2021-05-24T15:34:50.123Z", Format::DateTime).unwrap(),
            Format::DateTime,
        );
        array.value().instant(
            &Instant::from_str("Wed, 21 Oct 2015 07:28:00 GMT", Format::HttpDate).unwrap(),
            Format::HttpDate,
        );
        array.value().blob(&Blob::new("hello"));
        array.finish();

        assert_eq!(
            r#"[5.2,"2021-05-24T15:34:50.123Z","Wed, 21 Oct 2015 07:28:00 GMT","aGVsbG8="]"#,
            output
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!("1", number(Number::PosInt(1)));
        assert_eq!("-1", number(Number::NegInt(-1)));
        assert_eq!("0.0", number(Number::Float(0.0)));
        assert_eq!("-1.2", number(Number::Float(-1.2)));
        assert_eq!(
            serde_json::to_string(&f64::NAN).unwrap(),
            number(Number::Float(f64::NAN))
        );
        assert_eq!(
            serde_json::to_string(&f64::NEG_INFINITY).unwrap(),
            number(Number::Float(f64::NEG_INFINITY))
        );
    }

    proptest! {
        #[test]
        fn integers_match_serde_json(value: i64) {
            let expected = serde_json::to_string(&value).unwrap();
            let actual = if value < 0 {
                number(Number::NegInt(value))
            } else {
                number(Number::PosInt(value as u64))
            };
            assert_eq!(expected, actual);
        }

        #[test]
        fn floats_match_serde_json(value: f64) {
            assert_eq!(serde_json::to_string(&value).unwrap(), number(Number::Float(value)));
        }
    }
}
