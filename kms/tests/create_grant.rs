/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use kms::error::{CreateGrantErrorKind, LimitExceededError};
use kms::model::{GrantConstraints, GrantOperation};
use kms::operation::CreateGrant;
use kms::output::CreateGrantOutput;
use smithy_http::operation::BuildError;
use smithy_http::response::ParseStrictResponse;
use smithy_json::unmarshall::unmarshall_document;
use smithy_json::JsonCodecSettings;

fn constraints() -> GrantConstraints {
    GrantConstraints::builder()
        .encryption_context_equals("Department", "IT")
        .encryption_context_equals("Quote", "say \"hi\"\n")
        .build()
}

#[test]
fn request_body() {
    let op = CreateGrant::builder()
        .key_id("arn:aws:kms:us-east-2:444455556666:key/1234abcd-12ab-34cd-56ef-1234567890ab")
        .grantee_principal("arn:aws:iam::111122223333:role/KeyUserRole")
        .operations(GrantOperation::Decrypt)
        .operations("GenerateDataKey")
        .constraints(constraints())
        .grant_tokens("token")
        .build()
        .unwrap()
        .make_operation()
        .unwrap();
    assert_eq!("CreateGrant", op.metadata().name());
    assert_eq!(
        "TrentService.CreateGrant",
        op.request().headers()["x-amz-target"]
    );
    let body: serde_json::Value = serde_json::from_slice(op.request().body()).unwrap();
    assert_eq!(
        serde_json::json!({
            "KeyId": "arn:aws:kms:us-east-2:444455556666:key/1234abcd-12ab-34cd-56ef-1234567890ab",
            "GranteePrincipal": "arn:aws:iam::111122223333:role/KeyUserRole",
            "Operations": ["Decrypt", "GenerateDataKey"],
            "Constraints": {
                "EncryptionContextEquals": {"Department": "IT", "Quote": "say \"hi\"\n"}
            },
            "GrantTokens": ["token"]
        }),
        body
    );
}

#[test]
fn constraints_survive_marshalling() {
    let op = CreateGrant::builder()
        .key_id("key")
        .grantee_principal("principal")
        .constraints(constraints())
        .build()
        .unwrap()
        .make_operation()
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(op.request().body()).unwrap();
    let marshalled = serde_json::to_string(&body["Constraints"]).unwrap();
    let unmarshalled: Option<GrantConstraints> =
        unmarshall_document(marshalled.as_bytes(), &JsonCodecSettings::default()).unwrap();
    assert_eq!(Some(constraints()), unmarshalled);
}

#[test]
fn grantee_principal_is_required() {
    let err = CreateGrant::builder().key_id("key").build().unwrap_err();
    assert!(matches!(
        err,
        BuildError::MissingField {
            field: "grantee_principal",
            ..
        }
    ));
}

#[test]
fn parse_output() {
    let response = http::Response::builder()
        .status(200)
        .body(Bytes::from_static(
            br#"{"GrantId":"0c237476b39f8bc44e45212e08498fbe3151305030726c0590dd8d3e9f3d6a60","GrantToken":"AQpAM2RhZ"}"#,
        ))
        .unwrap();
    assert_eq!(
        CreateGrantOutput::builder()
            .grant_id("0c237476b39f8bc44e45212e08498fbe3151305030726c0590dd8d3e9f3d6a60")
            .grant_token("AQpAM2RhZ")
            .build(),
        CreateGrant::new().parse(&response).unwrap()
    );
}

#[test]
fn error_type_header_wins() {
    let response = http::Response::builder()
        .status(400)
        .header(
            "x-amzn-errortype",
            "LimitExceededException:http://internal.amazon.com/coral/com.amazon.kms/",
        )
        .body(Bytes::from_static(
            br#"{"__type":"KMSInternalException","message":"too many grants"}"#,
        ))
        .unwrap();
    let err = CreateGrant::new().parse(&response).unwrap_err();
    match err.kind {
        CreateGrantErrorKind::LimitExceededError(LimitExceededError { message, .. }) => {
            assert_eq!(Some("too many grants".to_string()), message)
        }
        other => panic!("Incorrect error received: {:?}", other),
    }
}
