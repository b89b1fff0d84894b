/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::{unexpected, DeserializeError, Token};
use crate::unmarshall::{TokenCursor, Unmarshaller};
use std::collections::HashMap;

/// Reads a JSON array, delegating each element to `U`. `null` elements are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUnmarshaller<U> {
    element: U,
}

impl<U> ListUnmarshaller<U> {
    pub const fn new(element: U) -> Self {
        ListUnmarshaller { element }
    }
}

impl<U: Unmarshaller> Unmarshaller for ListUnmarshaller<U> {
    type Output = Vec<U::Output>;

    fn unmarshall(
        &self,
        cursor: &mut TokenCursor<'_>,
    ) -> Result<Option<Vec<U::Output>>, DeserializeError> {
        match cursor.current_token() {
            Some(Token::ValueNull { .. }) => return Ok(None),
            Some(Token::StartArray { .. }) => {}
            other => return Err(unexpected(other, "StartArray")),
        }
        let mut items = Vec::new();
        loop {
            cursor.advance()?;
            match cursor.current_token() {
                Some(Token::EndArray { .. }) => return Ok(Some(items)),
                None => return Err(unexpected(None, "EndArray")),
                Some(_) => {
                    if let Some(item) = self.element.unmarshall(cursor)? {
                        items.push(item);
                    }
                }
            }
        }
    }
}

/// Reads a JSON object as a string keyed map, delegating each value to `U`.
/// `null` values are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapUnmarshaller<U> {
    value: U,
}

impl<U> MapUnmarshaller<U> {
    pub const fn new(value: U) -> Self {
        MapUnmarshaller { value }
    }
}

impl<U: Unmarshaller> Unmarshaller for MapUnmarshaller<U> {
    type Output = HashMap<String, U::Output>;

    fn unmarshall(
        &self,
        cursor: &mut TokenCursor<'_>,
    ) -> Result<Option<HashMap<String, U::Output>>, DeserializeError> {
        match cursor.current_token() {
            Some(Token::ValueNull { .. }) => return Ok(None),
            Some(Token::StartObject { .. }) => {}
            other => return Err(unexpected(other, "StartObject")),
        }
        let mut map = HashMap::new();
        loop {
            cursor.advance()?;
            let key = match cursor.current_token() {
                Some(Token::EndObject { .. }) => return Ok(Some(map)),
                Some(Token::ObjectKey { .. }) => cursor.field_name().unwrap_or_default().to_string(),
                other => return Err(unexpected(other, "ObjectKey")),
            };
            cursor.advance()?;
            if let Some(value) = self.value.unmarshall(cursor)? {
                map.insert(key, value);
            }
        }
    }
}
