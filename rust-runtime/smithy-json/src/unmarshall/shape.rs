/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::{unexpected, DeserializeError, Token};
use crate::unmarshall::{TokenCursor, Unmarshaller};
use std::fmt;
use std::marker::PhantomData;

/// Reads one member value off the cursor and stores it in the builder `B`.
///
/// The cursor is on the first token of the value when the setter is called and must be left
/// on the last token of that value.
pub type FieldSetter<B> = fn(&mut B, &mut TokenCursor<'_>) -> Result<(), DeserializeError>;

/// One entry of a [`ShapeDescriptor`]: a JSON member name and the setter for its value.
pub struct FieldDescriptor<B: 'static> {
    name: &'static str,
    setter: FieldSetter<B>,
}

impl<B: 'static> FieldDescriptor<B> {
    pub const fn new(name: &'static str, setter: FieldSetter<B>) -> Self {
        FieldDescriptor { name, setter }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<B: 'static> fmt::Debug for FieldDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

/// Static member table for a shape whose builder is `B`.
///
/// Descriptors are built at compile time and shared by every parse:
///
/// ```
/// use smithy_json::unmarshall::{FieldDescriptor, ShapeDescriptor, StringUnmarshaller, Unmarshaller};
///
/// #[derive(Default)]
/// struct AliasBuilder {
///     alias_name: Option<String>,
/// }
///
/// const FIELDS: &[FieldDescriptor<AliasBuilder>] = &[FieldDescriptor::new(
///     "AliasName",
///     |builder, cursor| {
///         builder.alias_name = StringUnmarshaller.unmarshall(cursor)?;
///         Ok(())
///     },
/// )];
/// static ALIAS: ShapeDescriptor<AliasBuilder> = ShapeDescriptor::new("AliasListEntry", FIELDS);
///
/// assert_eq!(Some("AliasName"), ALIAS.field("AliasName").map(|field| field.name()));
/// assert!(ALIAS.field("aliasName").is_none());
/// ```
pub struct ShapeDescriptor<B: 'static> {
    name: &'static str,
    fields: &'static [FieldDescriptor<B>],
}

impl<B: 'static> ShapeDescriptor<B> {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor<B>]) -> Self {
        ShapeDescriptor { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor<B>] {
        self.fields
    }

    /// Looks up a member by its exact, case-sensitive JSON name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor<B>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl<B: 'static> fmt::Debug for ShapeDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A structure that can be read from a JSON object through its descriptor.
pub trait Shape: Sized + 'static {
    type Builder: Default + 'static;

    fn descriptor() -> &'static ShapeDescriptor<Self::Builder>;

    fn build(builder: Self::Builder) -> Self;

    fn unmarshaller() -> ShapeUnmarshaller<Self> {
        ShapeUnmarshaller::new()
    }
}

/// Unmarshaller for any [`Shape`], driven by the shape's descriptor.
///
/// Members are matched only at one level below the depth the cursor had on entry, so a nested
/// object's members never bind to the enclosing shape even when their names collide. Members
/// the descriptor doesn't know are skipped along with everything nested in them.
pub struct ShapeUnmarshaller<T>(PhantomData<fn() -> T>);

impl<T> ShapeUnmarshaller<T> {
    pub const fn new() -> Self {
        ShapeUnmarshaller(PhantomData)
    }
}

impl<T> Clone for ShapeUnmarshaller<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ShapeUnmarshaller<T> {}

impl<T> Default for ShapeUnmarshaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ShapeUnmarshaller<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ShapeUnmarshaller")
    }
}

impl<T: Shape> Unmarshaller for ShapeUnmarshaller<T> {
    type Output = T;

    fn unmarshall(&self, cursor: &mut TokenCursor<'_>) -> Result<Option<T>, DeserializeError> {
        let descriptor = T::descriptor();
        let original_depth = cursor.depth();
        let parent = cursor.current_parent_element();
        let target_depth = original_depth + 1;

        if cursor.current_token().is_none() {
            cursor.advance()?;
        }
        match cursor.current_token() {
            None => return Ok(Some(T::build(T::Builder::default()))),
            Some(Token::ValueNull { .. }) => return Ok(None),
            Some(Token::StartObject { .. }) => {}
            other => return Err(unexpected(other, "StartObject")),
        }
        // includes the object just opened; only its own end token drops below this
        let entry_containers = cursor.open_containers();

        let mut builder = T::Builder::default();
        loop {
            match cursor.current_token() {
                None => break,
                Some(token @ Token::ObjectKey { .. }) | Some(token @ Token::StartObject { .. })
                    if cursor.depth() == target_depth =>
                {
                    let is_key = matches!(token, Token::ObjectKey { .. });
                    let name = cursor.field_name();
                    match name.and_then(|name| descriptor.field(name)) {
                        Some(field) => {
                            cursor.advance()?;
                            (field.setter)(&mut builder, cursor)?;
                        }
                        None if is_key => tracing::trace!(
                            shape = descriptor.name,
                            member = name.unwrap_or_default(),
                            "skipping unknown member"
                        ),
                        None => {}
                    }
                }
                Some(Token::EndObject { .. }) | Some(Token::EndArray { .. }) => {
                    let last_parsed = cursor.last_parsed_parent_element();
                    if cursor.open_containers() < entry_containers
                        && (last_parsed.is_none() || last_parsed == parent.as_deref())
                        && cursor.depth() <= original_depth
                    {
                        tracing::trace!(shape = descriptor.name, "closed shape");
                        break;
                    }
                }
                _ => {}
            }
            cursor.advance()?;
        }
        Ok(Some(T::build(builder)))
    }
}
