/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use kms::error::{NotFoundError, ScheduleKeyDeletionError, ScheduleKeyDeletionErrorKind};
use kms::input::ScheduleKeyDeletionInput;
use kms::operation::ScheduleKeyDeletion;
use kms::output::ScheduleKeyDeletionOutput;
use kms::Instant;
use smithy_http::operation::BuildError;
use smithy_http::response::{load_response, ParseStrictResponse};
use smithy_http::result::SdkError;

const KEY_ARN: &str = "arn:aws:kms:us-west-2:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab";

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/x-amz-json-1.1")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn request_marshalling() {
    let op = ScheduleKeyDeletion::builder()
        .key_id("1234abcd-12ab-34cd-56ef-1234567890ab")
        .pending_window_in_days(7)
        .build()
        .expect("valid input")
        .make_operation()
        .expect("valid operation");
    assert_eq!("ScheduleKeyDeletion", op.metadata().name());
    let request = op.request();
    assert_eq!(http::Method::POST, request.method());
    assert_eq!(
        "TrentService.ScheduleKeyDeletion",
        request.headers()["x-amz-target"]
    );
    assert_eq!(
        "application/x-amz-json-1.1",
        request.headers()["content-type"]
    );
    let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
    assert_eq!(
        serde_json::json!({
            "KeyId": "1234abcd-12ab-34cd-56ef-1234567890ab",
            "PendingWindowInDays": 7
        }),
        body
    );
}

#[test]
fn key_id_is_required() {
    let err = ScheduleKeyDeletionInput::builder()
        .pending_window_in_days(30)
        .build()
        .expect_err("key id is missing");
    assert!(matches!(err, BuildError::MissingField { field: "key_id", .. }));
}

#[test]
fn parse_success() {
    let parsed = ScheduleKeyDeletion::new()
        .parse(&response(
            200,
            r#"{"KeyId":"arn:aws:kms:us-west-2:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab","DeletionDate":1617638400}"#,
        ))
        .expect("success");
    assert_eq!(
        ScheduleKeyDeletionOutput::builder()
            .key_id(KEY_ARN)
            .deletion_date(Instant::from_epoch_seconds(1617638400))
            .build(),
        parsed
    );
}

#[test]
fn parse_success_with_exponent_timestamp_and_extra_members() {
    let parsed = ScheduleKeyDeletion::new()
        .parse(&response(
            200,
            r#"{
                "KeyState": "PendingDeletion",
                "DeletionDate": 1.6176384E9,
                "Metadata": {"KeyId": "not this one", "DeletionDate": 0},
                "KeyId": "arn:aws:kms:us-west-2:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab",
                "PendingWindowInDays": 7
            }"#,
        ))
        .expect("success");
    assert_eq!(Some(KEY_ARN), parsed.key_id.as_deref());
    assert_eq!(
        Some(Instant::from_epoch_seconds(1617638400)),
        parsed.deletion_date
    );
}

#[test]
fn modeled_error() {
    let err = ScheduleKeyDeletion::new()
        .parse(&response(
            400,
            r#"{"__type":"NotFoundException","message":"Key 'arn:aws:kms:us-west-2:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab' does not exist"}"#,
        ))
        .expect_err("key does not exist");
    assert!(err.is_not_found_error());
    assert_eq!(Some("NotFoundException"), err.code());
    match err.kind {
        ScheduleKeyDeletionErrorKind::NotFoundError(inner) => assert_eq!(
            Some(format!("Key '{}' does not exist", KEY_ARN).as_str()),
            inner.message()
        ),
        other => panic!("Incorrect error received: {:?}", other),
    }
}

#[test]
fn unknown_error_code_is_unhandled() {
    let err = ScheduleKeyDeletion::new()
        .parse(&response(400, r#"{"__type":"com.amazon.coral.service#ThrottlingException","message":"Rate exceeded"}"#))
        .expect_err("throttled");
    assert!(matches!(err.kind, ScheduleKeyDeletionErrorKind::Unhandled(_)));
    assert_eq!(Some("ThrottlingException"), err.code());
    assert_eq!(Some("Rate exceeded"), err.message());
}

#[test]
fn error_without_code_is_unhandled() {
    let err = ScheduleKeyDeletion::new()
        .parse(&response(500, ""))
        .expect_err("internal failure");
    assert!(matches!(err.kind, ScheduleKeyDeletionErrorKind::Unhandled(_)));
    assert_eq!(None, err.code());
}

#[test]
fn modeled_error_code_without_metadata() {
    let kind = ScheduleKeyDeletionErrorKind::NotFoundError(NotFoundError::builder().build());
    let err = ScheduleKeyDeletionError::new(kind, Default::default());
    assert_eq!(Some("NotFoundException"), err.code());
    assert_eq!("NotFoundError", err.to_string());
}

#[test]
fn load_response_classifies_outcomes() {
    let handler = ScheduleKeyDeletion::new();

    let success = load_response(response(200, r#"{"KeyId":"k"}"#), &handler).unwrap();
    assert_eq!(Some("k"), success.parsed.key_id.as_deref());

    match load_response(response(200, r#"{"KeyId":"k""#), &handler) {
        Err(SdkError::ResponseError { raw, .. }) => assert_eq!(200, raw.status().as_u16()),
        other => panic!("Incorrect result: {:?}", other),
    }

    match load_response(response(400, r#"{"__type":"KMSInvalidStateException"}"#), &handler) {
        Err(SdkError::ServiceError { err, .. }) => assert!(err.is_kms_invalid_state_error()),
        other => panic!("Incorrect result: {:?}", other),
    }
}
