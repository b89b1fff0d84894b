/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Descriptor driven unmarshalling of JSON documents into shapes.
//!
//! A [`TokenCursor`] walks the token stream while tracking nesting. Every member type has an
//! [`Unmarshaller`] that reads exactly one value off the cursor; structures use
//! [`ShapeUnmarshaller`], which looks member names up in the shape's static
//! [`ShapeDescriptor`] and hands each value to the member's setter.

mod collection;
mod cursor;
mod shape;
mod simple;

use crate::deserialize::DeserializeError;
use crate::JsonCodecSettings;

pub use collection::{ListUnmarshaller, MapUnmarshaller};
pub use cursor::TokenCursor;
pub use shape::{FieldDescriptor, FieldSetter, Shape, ShapeDescriptor, ShapeUnmarshaller};
pub use simple::{
    BlobUnmarshaller, BooleanUnmarshaller, DoubleUnmarshaller, EnumUnmarshaller,
    FloatUnmarshaller, InstantUnmarshaller, IntegerUnmarshaller, LongUnmarshaller,
    StringUnmarshaller,
};

/// Reads one value of `Output` from the cursor.
///
/// Implementations start on the first token of the value and leave the cursor on its last
/// token. JSON `null` is `Ok(None)`.
pub trait Unmarshaller {
    type Output;

    fn unmarshall(
        &self,
        cursor: &mut TokenCursor<'_>,
    ) -> Result<Option<Self::Output>, DeserializeError>;
}

/// Unmarshalls a complete document into `T`, rejecting anything after the top-level value.
pub fn unmarshall_document<T: Shape>(
    input: &[u8],
    settings: &JsonCodecSettings,
) -> Result<Option<T>, DeserializeError> {
    let mut cursor = TokenCursor::with_settings(input, *settings);
    let shape = T::unmarshaller().unmarshall(&mut cursor)?;
    cursor.advance()?;
    match cursor.current_token() {
        None => Ok(shape),
        Some(token) => Err(token.error("found more JSON tokens after completing parsing".into())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smithy_types::instant::Format;
    use smithy_types::Instant;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    #[derive(Debug, PartialEq, Default)]
    struct Inner {
        name: Option<String>,
        nested: Option<Box<Inner>>,
    }

    #[derive(Default)]
    struct InnerBuilder {
        name: Option<String>,
        nested: Option<Box<Inner>>,
    }

    const INNER_FIELDS: &[FieldDescriptor<InnerBuilder>] = &[
        FieldDescriptor::new("Name", |builder, cursor| {
            builder.name = StringUnmarshaller.unmarshall(cursor)?;
            Ok(())
        }),
        FieldDescriptor::new("Nested", |builder, cursor| {
            builder.nested = Inner::unmarshaller().unmarshall(cursor)?.map(Box::new);
            Ok(())
        }),
    ];
    static INNER: ShapeDescriptor<InnerBuilder> = ShapeDescriptor::new("Inner", INNER_FIELDS);

    impl Shape for Inner {
        type Builder = InnerBuilder;

        fn descriptor() -> &'static ShapeDescriptor<InnerBuilder> {
            &INNER
        }

        fn build(builder: InnerBuilder) -> Self {
            Inner {
                name: builder.name,
                nested: builder.nested,
            }
        }
    }

    #[derive(Debug, PartialEq, Default)]
    struct Outer {
        name: Option<String>,
        inner: Option<Inner>,
        items: Option<Vec<Inner>>,
        tags: Option<HashMap<String, String>>,
        count: Option<i32>,
        deletion_date: Option<Instant>,
    }

    #[derive(Default)]
    struct OuterBuilder {
        name: Option<String>,
        inner: Option<Inner>,
        items: Option<Vec<Inner>>,
        tags: Option<HashMap<String, String>>,
        count: Option<i32>,
        deletion_date: Option<Instant>,
    }

    const OUTER_FIELDS: &[FieldDescriptor<OuterBuilder>] = &[
        FieldDescriptor::new("Name", |builder, cursor| {
            builder.name = StringUnmarshaller.unmarshall(cursor)?;
            Ok(())
        }),
        FieldDescriptor::new("Inner", |builder, cursor| {
            builder.inner = Inner::unmarshaller().unmarshall(cursor)?;
            Ok(())
        }),
        FieldDescriptor::new("Items", |builder, cursor| {
            builder.items = ListUnmarshaller::new(Inner::unmarshaller()).unmarshall(cursor)?;
            Ok(())
        }),
        FieldDescriptor::new("Tags", |builder, cursor| {
            builder.tags = MapUnmarshaller::new(StringUnmarshaller).unmarshall(cursor)?;
            Ok(())
        }),
        FieldDescriptor::new("Count", |builder, cursor| {
            builder.count = IntegerUnmarshaller.unmarshall(cursor)?;
            Ok(())
        }),
        FieldDescriptor::new("DeletionDate", |builder, cursor| {
            builder.deletion_date = InstantUnmarshaller::new().unmarshall(cursor)?;
            Ok(())
        }),
    ];
    static OUTER: ShapeDescriptor<OuterBuilder> = ShapeDescriptor::new("Outer", OUTER_FIELDS);

    impl Shape for Outer {
        type Builder = OuterBuilder;

        fn descriptor() -> &'static ShapeDescriptor<OuterBuilder> {
            &OUTER
        }

        fn build(builder: OuterBuilder) -> Self {
            Outer {
                name: builder.name,
                inner: builder.inner,
                items: builder.items,
                tags: builder.tags,
                count: builder.count,
                deletion_date: builder.deletion_date,
            }
        }
    }

    fn parse(input: &str) -> Result<Option<Outer>, DeserializeError> {
        unmarshall_document(input.as_bytes(), &JsonCodecSettings::default())
    }

    fn inner(name: &str) -> Inner {
        Inner {
            name: Some(name.into()),
            nested: None,
        }
    }

    #[test]
    fn null_document_is_none() {
        assert_eq!(None, parse("null").unwrap());
    }

    #[test]
    fn empty_object_has_no_members() {
        assert_eq!(Some(Outer::default()), parse("{}").unwrap());
    }

    #[test]
    fn empty_document_is_an_empty_shape() {
        assert_eq!(Some(Outer::default()), parse("  ").unwrap());
    }

    #[test]
    fn same_member_name_binds_per_level() {
        let outer = parse(r#"{"Name":"outer","Inner":{"Name":"inner"}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some("outer".to_string()), outer.name);
        assert_eq!(Some(inner("inner")), outer.inner);

        // order doesn't matter
        let outer = parse(r#"{"Inner":{"Name":"inner"},"Name":"outer"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some("outer".to_string()), outer.name);
        assert_eq!(Some(inner("inner")), outer.inner);
    }

    #[test]
    fn empty_list_is_present() {
        assert_eq!(Some(vec![]), parse(r#"{"Items":[]}"#).unwrap().unwrap().items);
        assert_eq!(None, parse(r#"{"Count":1}"#).unwrap().unwrap().items);
    }

    #[test]
    fn scalar_members() {
        let outer = parse(r#"{"Name":"key-123","DeletionDate":1234567890,"Count":7}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some("key-123".to_string()), outer.name);
        assert_eq!(Some(Instant::from_epoch_seconds(1234567890)), outer.deletion_date);
        assert_eq!(Some(7), outer.count);
    }

    #[test]
    fn null_members_stay_absent() {
        let outer = parse(r#"{"Name":null,"Inner":null,"Items":null,"Count":null}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Outer::default(), outer);
    }

    #[test]
    fn lists_of_nested_shapes() {
        let outer = parse(
            r#"{
                "Items": [
                    {"Name": "a", "Nested": {"Name": "a.1", "Nested": {"Name": "a.1.1"}}},
                    {"Nested": {"Name": "b.1"}, "Name": "b"},
                    null,
                    {}
                ],
                "Name": "after"
            }"#,
        )
        .unwrap()
        .unwrap();
        let items = outer.items.unwrap();
        assert_eq!(3, items.len());
        assert_eq!(Some("a".to_string()), items[0].name);
        let a1 = items[0].nested.as_ref().unwrap();
        assert_eq!(Some("a.1".to_string()), a1.name);
        assert_eq!(Some(Box::new(inner("a.1.1"))), a1.nested);
        assert_eq!(Some("b".to_string()), items[1].name);
        assert_eq!(Some(Box::new(inner("b.1"))), items[1].nested);
        assert_eq!(Inner::default(), items[2]);
        assert_eq!(Some("after".to_string()), outer.name);
    }

    #[test]
    fn unknown_members_are_skipped() {
        let outer = parse(
            r#"{
                "Unknown": {"Name": "nope", "Deeper": [{"Name": "nope"}, [{"Inner": {}}], {}]},
                "Name": "kept",
                "AlsoUnknown": [[], {}, {"Items": []}],
                "Inner": {"Unknown": {"Name": "nope"}, "Name": "inner", "Trailing": []},
                "Scalar": 5,
                "Count": 2
            }"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(Some("kept".to_string()), outer.name);
        assert_eq!(Some(inner("inner")), outer.inner);
        assert_eq!(None, outer.items);
        assert_eq!(Some(2), outer.count);
    }

    #[test]
    fn unknown_member_named_like_the_parent_does_not_close_the_shape() {
        let outer = parse(r#"{"Inner":{"Inner":{},"Name":"inner"},"Name":"outer"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some(inner("inner")), outer.inner);
        assert_eq!(Some("outer".to_string()), outer.name);

        let outer = parse(
            r#"{"Inner":{"Inner":{"Inner":[{"Inner":{}}]},"Name":"inner","Inner":[]},"Count":3}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(Some(inner("inner")), outer.inner);
        assert_eq!(Some(3), outer.count);
    }

    #[test]
    fn unknown_member_named_like_the_list_does_not_close_the_element() {
        let outer = parse(r#"{"Items":[{"Items":{"x":1},"Name":"a"},{"Name":"b"}],"Name":"outer"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some(vec![inner("a"), inner("b")]), outer.items);
        assert_eq!(Some("outer".to_string()), outer.name);

        let outer = parse(r#"{"Items":[{"Items":[[],{"Items":[]}],"Name":"a"}],"Count":1}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some(vec![inner("a")]), outer.items);
        assert_eq!(Some(1), outer.count);
    }

    #[test]
    fn member_names_are_case_sensitive() {
        let outer = parse(r#"{"name":"lower","NAME":"upper"}"#).unwrap().unwrap();
        assert_eq!(None, outer.name);
    }

    #[test]
    fn maps_of_strings() {
        let outer = parse(r#"{"Tags":{"Name":"not a member","Count":"3"},"Count":1}"#)
            .unwrap()
            .unwrap();
        let tags = outer.tags.unwrap();
        assert_eq!("not a member", tags["Name"]);
        assert_eq!("3", tags["Count"]);
        assert_eq!(Some(1), outer.count);
        assert_eq!(None, outer.name);
    }

    #[test]
    fn truncated_document_fails() {
        let err = parse(r#"{"Name":"key-123","Inner":{"Name":"#).unwrap_err();
        assert_eq!(
            "Error at offset 34: unexpected end of stream",
            err.to_string()
        );
    }

    #[test]
    fn type_mismatch_fails() {
        assert!(parse(r#"{"Count":"seven"}"#).is_err());
        assert!(parse(r#"{"Inner":[]}"#).is_err());
        let err = parse("[]").unwrap_err();
        assert_eq!(
            "Error at offset 0: failed to parse JSON: expected StartObject, found StartArray",
            err.to_string()
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse(r#"{"Name":"a"} {"Name":"b"}"#).unwrap_err();
        assert_eq!(
            "Error at offset 13: failed to parse JSON: found more JSON tokens after completing parsing",
            err.to_string()
        );
    }

    #[test]
    fn timestamp_strings_follow_settings() {
        let settings = JsonCodecSettings {
            default_timestamp_format: Format::DateTime,
        };
        let outer: Outer = unmarshall_document(
            br#"{"DeletionDate":"2019-12-16T23:48:18Z"}"#,
            &settings,
        )
        .unwrap()
        .unwrap();
        assert_eq!(Some(Instant::from_epoch_seconds(1576540098)), outer.deletion_date);
    }

    #[test]
    fn cursor_is_left_on_the_closing_token() {
        let mut cursor = TokenCursor::new(br#"[{"Name":"a","Extra":{"x":[1]}}, 5]"#);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        let parsed = Inner::unmarshaller().unmarshall(&mut cursor).unwrap();
        assert_eq!(Some(inner("a")), parsed);
        assert!(matches!(
            cursor.current_token(),
            Some(crate::deserialize::Token::EndObject { .. })
        ));
        cursor.advance().unwrap();
        assert!(matches!(
            cursor.current_token(),
            Some(crate::deserialize::Token::ValueNumber { .. })
        ));
    }

    #[traced_test]
    #[test]
    fn unknown_members_are_traced() {
        parse(r#"{"Surprise":true}"#).unwrap();
        assert!(logs_contain("skipping unknown member"));
        assert!(logs_contain("Surprise"));
    }
}
