/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use kms::error::ListRetirableGrantsErrorKind;
use kms::model::{GrantConstraints, GrantListEntry, GrantOperation};
use kms::operation::ListRetirableGrants;
use kms::Instant;
use smithy_http::response::ParseStrictResponse;

fn ok(body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(200)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

const TWO_GRANTS: &str = r#"{
  "Grants": [
    {
      "Constraints": {
        "EncryptionContextSubset": {"Department": "IT", "Purpose": "Test"},
        "Tags": [{"KeyId": "tag-not-a-key"}]
      },
      "CreationDate": 1.47336179E9,
      "GrantId": "0c237476b39f8bc44e45212e08498fbe3151305030726c0590dd8d3e9f3d6a60",
      "GranteePrincipal": "arn:aws:iam::111122223333:role/ExampleRole",
      "IssuingAccount": "arn:aws:iam::444455556666:root",
      "KeyId": "arn:aws:kms:us-east-2:444455556666:key/1234abcd-12ab-34cd-56ef-1234567890ab",
      "Name": "",
      "Operations": ["Decrypt", "Encrypt", "GenerateMac"],
      "RetiringPrincipal": "arn:aws:iam::111122223333:role/ExampleRole"
    },
    {
      "GrantId": "second",
      "Operations": [],
      "Constraints": null,
      "Unmodeled": {"GrantId": "nested", "Grants": [{"GrantId": "deeper"}]}
    }
  ],
  "Truncated": true,
  "NextMarker": "AQIDAHhjr"
}"#;

#[test]
fn nested_grants() {
    let output = ListRetirableGrants::new().parse(&ok(TWO_GRANTS)).unwrap();
    assert_eq!(Some(true), output.truncated);
    assert_eq!(Some("AQIDAHhjr"), output.next_marker.as_deref());

    let grants = output.grants.expect("grants are present");
    assert_eq!(2, grants.len());
    assert_eq!(
        GrantListEntry::builder()
            .key_id("arn:aws:kms:us-east-2:444455556666:key/1234abcd-12ab-34cd-56ef-1234567890ab")
            .grant_id("0c237476b39f8bc44e45212e08498fbe3151305030726c0590dd8d3e9f3d6a60")
            .name("")
            .creation_date(Instant::from_epoch_seconds(1473361790))
            .grantee_principal("arn:aws:iam::111122223333:role/ExampleRole")
            .retiring_principal("arn:aws:iam::111122223333:role/ExampleRole")
            .issuing_account("arn:aws:iam::444455556666:root")
            .operations(vec![
                GrantOperation::Decrypt,
                GrantOperation::Encrypt,
                GrantOperation::Unknown("GenerateMac".into()),
            ])
            .constraints(
                GrantConstraints::builder()
                    .encryption_context_subset("Department", "IT")
                    .encryption_context_subset("Purpose", "Test")
                    .build()
            )
            .build(),
        grants[0]
    );
    assert_eq!(
        GrantListEntry::builder()
            .grant_id("second")
            .operations(vec![])
            .build(),
        grants[1]
    );
}

#[test]
fn unknown_grants_member_inside_a_grant() {
    let output = ListRetirableGrants::new()
        .parse(&ok(
            r#"{"Grants":[{"Grants":{"GrantId":"decoy"},"GrantId":"first"},{"GrantId":"second"}],"NextMarker":"m"}"#,
        ))
        .unwrap();
    assert_eq!(
        Some(vec![
            GrantListEntry::builder().grant_id("first").build(),
            GrantListEntry::builder().grant_id("second").build(),
        ]),
        output.grants
    );
    assert_eq!(Some("m"), output.next_marker.as_deref());
}

#[test]
fn empty_grants_are_not_absent_grants() {
    let empty = ListRetirableGrants::new()
        .parse(&ok(r#"{"Grants":[],"Truncated":false}"#))
        .unwrap();
    assert_eq!(Some(vec![]), empty.grants);
    assert_eq!(Some(false), empty.truncated);

    let absent = ListRetirableGrants::new()
        .parse(&ok(r#"{"Truncated":false}"#))
        .unwrap();
    assert_eq!(None, absent.grants);

    let null = ListRetirableGrants::new()
        .parse(&ok(r#"{"Grants":null}"#))
        .unwrap();
    assert_eq!(None, null.grants);
}

#[test]
fn member_names_are_case_sensitive() {
    let output = ListRetirableGrants::new()
        .parse(&ok(r#"{"grants":[{"GrantId":"x"}],"truncated":true,"NextMarker":"m"}"#))
        .unwrap();
    assert_eq!(None, output.grants);
    assert_eq!(None, output.truncated);
    assert_eq!(Some("m"), output.next_marker.as_deref());
}

#[test]
fn type_mismatch_is_unhandled() {
    let err = ListRetirableGrants::new()
        .parse(&ok(r#"{"Grants":{"GrantId":"x"}}"#))
        .expect_err("grants must be a list");
    assert!(matches!(err.kind, ListRetirableGrantsErrorKind::Unhandled(_)));
    assert!(err.to_string().contains("expected StartArray"), "{}", err);
}

#[test]
fn invalid_marker() {
    let response = http::Response::builder()
        .status(400)
        .header("x-amzn-requestid", "bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
        .body(Bytes::from_static(
            br#"{"__type":"InvalidMarkerException","message":"Invalid marker"}"#,
        ))
        .unwrap();
    let err = ListRetirableGrants::new()
        .parse(&response)
        .expect_err("marker is invalid");
    assert!(err.is_invalid_marker_error());
    assert_eq!(Some("bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6"), err.request_id());
    assert_eq!("InvalidMarkerError: Invalid marker", err.to_string());
}

#[test]
fn request_omits_unset_members() {
    let op = ListRetirableGrants::builder()
        .retiring_principal("arn:aws:iam::111122223333:role/ExampleRole")
        .build()
        .unwrap()
        .make_operation()
        .unwrap();
    assert_eq!(
        "TrentService.ListRetirableGrants",
        op.request().headers()["x-amz-target"]
    );
    let body: serde_json::Value = serde_json::from_slice(op.request().body()).unwrap();
    assert_eq!(
        serde_json::json!({"RetiringPrincipal": "arn:aws:iam::111122223333:role/ExampleRole"}),
        body
    );
}
