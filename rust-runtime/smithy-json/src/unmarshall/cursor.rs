/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::{json_token_iter, DeserializeError, JsonTokenIterator, Token};
use crate::JsonCodecSettings;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Array,
    Object,
}

/// An open array or object, and the member name it is the value of, if any.
#[derive(Debug)]
struct Frame<'a> {
    field: Option<Cow<'a, str>>,
    container: Container,
}

/// Forward-only JSON token cursor that tracks where in the document it is.
///
/// Besides the current token, the cursor keeps enough context for the shape unmarshaller
/// to find member names at the right nesting level and to recognize its own closing token:
///
/// * [`depth`](TokenCursor::depth) counts the named containers that are open, plus one while
///   a member name has been read and its value hasn't been opened yet. Anonymous containers
///   (the document root, list elements) do not count.
/// * [`current_parent_element`](TokenCursor::current_parent_element) is the pending member
///   name, or else the name of the innermost named container.
/// * [`last_parsed_parent_element`](TokenCursor::last_parsed_parent_element) is the member
///   name of the container that was closed most recently, unset if it was anonymous.
///
/// One cursor is created per document and handed down by `&mut` to every nested
/// unmarshaller.
pub struct TokenCursor<'a> {
    tokens: JsonTokenIterator<'a>,
    current: Option<Token<'a>>,
    stack: Vec<Frame<'a>>,
    named_depth: usize,
    current_field: Option<Cow<'a, str>>,
    last_parsed_parent: Option<Cow<'a, str>>,
    settings: JsonCodecSettings,
}

impl<'a> TokenCursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_settings(input, JsonCodecSettings::default())
    }

    pub fn with_settings(input: &'a [u8], settings: JsonCodecSettings) -> Self {
        TokenCursor {
            tokens: json_token_iter(input),
            current: None,
            stack: Vec::new(),
            named_depth: 0,
            current_field: None,
            last_parsed_parent: None,
            settings,
        }
    }

    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }

    /// The token the cursor is on. `None` before the first [`advance`](TokenCursor::advance)
    /// and once the input is exhausted.
    pub fn current_token(&self) -> Option<&Token<'a>> {
        self.current.as_ref()
    }

    /// Moves to the next token. Tokenizer errors are returned as-is and end the parse.
    pub fn advance(&mut self) -> Result<(), DeserializeError> {
        self.current = self.tokens.next().transpose()?;
        match &self.current {
            Some(Token::StartObject { .. }) => self.open(Container::Object),
            Some(Token::StartArray { .. }) => self.open(Container::Array),
            Some(Token::EndObject { offset }) => self.close(Container::Object, offset.0)?,
            Some(Token::EndArray { offset }) => self.close(Container::Array, offset.0)?,
            Some(Token::ObjectKey { offset, key }) => {
                let key = key
                    .to_unescaped()
                    .map_err(|err| err.with_offset(offset.0))?;
                self.current_field = Some(key);
            }
            _ => {}
        }
        Ok(())
    }

    fn open(&mut self, container: Container) {
        let field = self.current_field.take();
        if field.is_some() {
            self.named_depth += 1;
        }
        self.stack.push(Frame { field, container });
    }

    fn close(&mut self, container: Container, offset: usize) -> Result<(), DeserializeError> {
        let frame = match self.stack.pop() {
            Some(frame) if frame.container == container => frame,
            _ => return Err(DeserializeError::custom("unbalanced container").with_offset(offset)),
        };
        if frame.field.is_some() {
            self.named_depth -= 1;
        }
        self.current_field = None;
        self.last_parsed_parent = frame.field;
        Ok(())
    }

    /// Number of arrays and objects that are open, named or not.
    pub(crate) fn open_containers(&self) -> usize {
        self.stack.len()
    }

    pub fn depth(&self) -> usize {
        self.named_depth + usize::from(self.current_field.is_some())
    }

    /// Name of the element currently being parsed: the pending member name, or the member
    /// name of the innermost named container.
    pub fn current_parent_element(&self) -> Option<Cow<'a, str>> {
        self.current_field
            .as_ref()
            .or_else(|| self.stack.iter().rev().find_map(|frame| frame.field.as_ref()))
            .cloned()
    }

    /// Member name of the most recently closed container, `None` if it had none.
    pub fn last_parsed_parent_element(&self) -> Option<&str> {
        self.last_parsed_parent.as_deref()
    }

    /// The member name a field lookup applies to at this position: the pending member name,
    /// or the name of the container that was just opened.
    pub(crate) fn field_name(&self) -> Option<&str> {
        self.current_field
            .as_deref()
            .or_else(|| self.stack.last().and_then(|frame| frame.field.as_deref()))
    }
}

#[cfg(test)]
mod test {
    use super::TokenCursor;
    use crate::deserialize::Token;

    #[derive(Debug, PartialEq)]
    struct Position {
        depth: usize,
        parent: Option<String>,
        last_parsed: Option<String>,
    }

    fn positions(input: &str) -> Vec<Position> {
        let mut cursor = TokenCursor::new(input.as_bytes());
        let mut out = Vec::new();
        loop {
            cursor.advance().unwrap();
            if cursor.current_token().is_none() {
                return out;
            }
            out.push(Position {
                depth: cursor.depth(),
                parent: cursor.current_parent_element().map(|p| p.into_owned()),
                last_parsed: cursor.last_parsed_parent_element().map(str::to_string),
            });
        }
    }

    fn at(depth: usize, parent: Option<&str>, last_parsed: Option<&str>) -> Position {
        Position {
            depth,
            parent: parent.map(str::to_string),
            last_parsed: last_parsed.map(str::to_string),
        }
    }

    #[test]
    fn nested_objects() {
        assert_eq!(
            vec![
                at(0, None, None),                   // {
                at(1, Some("Name"), None),           // "Name"
                at(1, Some("Name"), None),           // "outer"
                at(1, Some("Inner"), None),          // "Inner"
                at(1, Some("Inner"), None),          // {
                at(2, Some("Name"), None),           // "Name"
                at(2, Some("Name"), None),           // "inner"
                at(0, None, Some("Inner")),          // }
                at(0, None, None),                   // }
            ],
            positions(r#"{"Name":"outer","Inner":{"Name":"inner"}}"#)
        );
    }

    #[test]
    fn anonymous_list_elements() {
        assert_eq!(
            vec![
                at(0, None, None),                   // {
                at(1, Some("Items"), None),          // "Items"
                at(1, Some("Items"), None),          // [
                at(1, Some("Items"), None),          // {
                at(2, Some("A"), None),              // "A"
                at(2, Some("A"), None),              // {
                at(1, Some("Items"), Some("A")),     // }
                at(1, Some("Items"), None),          // }
                at(0, None, Some("Items")),          // ]
                at(0, None, None),                   // }
            ],
            positions(r#"{"Items":[{"A":{}}]}"#)
        );
    }

    #[test]
    fn unescapes_member_names() {
        let mut cursor = TokenCursor::new(br#"{"KeyId":1}"#);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert!(matches!(
            cursor.current_token(),
            Some(Token::ObjectKey { .. })
        ));
        assert_eq!(Some("KeyId"), cursor.field_name());
    }

    #[test]
    fn tokenizer_errors_propagate() {
        let mut cursor = TokenCursor::new(br#"{"KeyId":"#);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        let err = cursor.advance().unwrap_err();
        assert_eq!("Error at offset 9: unexpected end of stream", err.to_string());
    }

    #[test]
    fn bad_escapes_in_member_names_report_the_key_offset() {
        let mut cursor = TokenCursor::new(br#"{"Key\qId":1}"#);
        cursor.advance().unwrap();
        let err = cursor.advance().unwrap_err();
        assert_eq!(Some(1), err.offset());
        assert_eq!("Error at offset 1: invalid JSON escape: \\q", err.to_string());
    }
}
