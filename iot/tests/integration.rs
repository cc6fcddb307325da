/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::RetryConfig;
use http::Uri;
use iot::error::{CreateThingErrorKind, DescribeThingErrorKind};
use iot::input::{ListThingsInput, UpdateThingInput};
use iot::model::AttributePayload;
use iot::{Client, Config, Credentials, Region, SdkError};
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use std::time::{Duration, UNIX_EPOCH};

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            None,
        ))
        .retry_config(RetryConfig::disabled())
        .build()
}

fn request(method: &str, uri: &'static str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method(method)
        .uri(Uri::from_static(uri))
        .body(SdkBody::from(body))
        .unwrap()
}

#[tokio::test]
async fn update_thing() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/json")
            .header("content-length", "86")
            .header("host", "iot.us-east-1.amazonaws.com")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210308/us-east-1/execute-api/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-user-agent, Signature=47421e4aed325d5af3711cf41399f0ddcccd72c2b716640cdbeabbd771687b79")
            .header("x-amz-date", "20210308T171011Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://iot.us-east-1.amazonaws.com/things/lamp-post-17"))
            .method("PATCH")
            .body(SdkBody::from(r#"{"attributePayload":{"attributes":{"color":"green"},"merge":true},"expectedVersion":2}"#))
            .unwrap(),
        http::Response::builder().status(200).body("{}").unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = UpdateThingInput::builder()
        .thing_name("lamp-post-17")
        .attribute_payload(
            AttributePayload::builder()
                .attributes("color", "green")
                .merge(true)
                .build(),
        )
        .expected_version(2)
        .build()
        .unwrap()
        .make_operation(&conf())
        .unwrap();
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1615223411));
    op.config_mut().insert(AwsUserAgent::for_tests());
    client.call(op).await.expect("request should succeed");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn list_things() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("host", "iot.us-east-1.amazonaws.com")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210308/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature=64e152eebc0dabc81608bfccd28732f1ef4e1e3524431e1804479f118fb46691")
            .header("x-amz-date", "20210308T171011Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://iot.us-east-1.amazonaws.com/things?maxResults=2&thingTypeName=street-light"))
            .method("GET")
            .body(SdkBody::from(""))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{
                "things": [
                    {"thingName": "lamp-post-17", "thingTypeName": "street-light", "attributes": {"color": "green"}, "version": 3},
                    {"thingName": "lamp-post-18", "thingTypeName": "street-light", "attributes": {}, "version": 1}
                ],
                "nextToken": "AAEAAT0dR1pYK0nK"
            }"#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = ListThingsInput::builder()
        .max_results(2)
        .thing_type_name("street-light")
        .build()
        .unwrap()
        .make_operation(&conf())
        .unwrap();
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1615223411));
    op.config_mut().insert(AwsUserAgent::for_tests());
    let output = client.call(op).await.expect("request should succeed");
    let things = output.things.unwrap();
    assert_eq!(things.len(), 2);
    assert_eq!(things[0].thing_name.as_deref(), Some("lamp-post-17"));
    assert_eq!(things[0].version, Some(3));
    assert_eq!(things[1].attributes.as_ref().map(|a| a.len()), Some(0));
    assert_eq!(output.next_token.as_deref(), Some("AAEAAT0dR1pYK0nK"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn thing_lifecycle() {
    let conn = TestConnection::new(vec![
        (
            request(
                "POST",
                "https://iot.us-east-1.amazonaws.com/things/lamp-post-17",
                r#"{"thingTypeName":"street-light"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"thingName":"lamp-post-17","thingArn":"arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17","thingId":"8d1f3a9e-2b4c-4c1e-9e6a-0f2d7b5c3a11"}"#)
                .unwrap(),
        ),
        (
            request(
                "GET",
                "https://iot.us-east-1.amazonaws.com/things/lamp-post-17",
                "",
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"thingName":"lamp-post-17","thingTypeName":"street-light","version":1}"#)
                .unwrap(),
        ),
        (
            request(
                "DELETE",
                "https://iot.us-east-1.amazonaws.com/things/lamp-post-17?expectedVersion=1",
                "",
            ),
            http::Response::builder().status(200).body("").unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    let created = client
        .create_thing()
        .thing_name("lamp-post-17")
        .thing_type_name("street-light")
        .send()
        .await
        .expect("thing is created");
    assert_eq!(
        created.thing_id.as_deref(),
        Some("8d1f3a9e-2b4c-4c1e-9e6a-0f2d7b5c3a11")
    );
    let thing = client
        .describe_thing()
        .set_thing_name(created.thing_name)
        .send()
        .await
        .expect("thing exists");
    client
        .delete_thing()
        .thing_name("lamp-post-17")
        .set_expected_version(thing.version)
        .send()
        .await
        .expect("thing is deleted");
    assert_eq!(conn.requests().len(), 3);
    conn.assert_requests_match(&[]);
    assert_eq!(client.metrics().successes(), 3);
}

#[tokio::test]
async fn modeled_errors() {
    let conn = TestConnection::new(vec![
        (
            request(
                "POST",
                "https://iot.us-east-1.amazonaws.com/things/lamp-post-17",
                "{}",
            ),
            http::Response::builder()
                .status(409)
                .header("x-amzn-errortype", "ResourceAlreadyExistsException")
                .body(r#"{"message":"Thing lamp-post-17 already exists in account with different attributes","resourceId":"8d1f3a9e"}"#)
                .unwrap(),
        ),
        (
            request(
                "GET",
                "https://iot.us-east-1.amazonaws.com/things/lamp-post-99",
                "",
            ),
            http::Response::builder()
                .status(404)
                .header("x-amzn-errortype", "ResourceNotFoundException")
                .body(r#"{"message":"Thing lamp-post-99 cannot be found."}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    let err = client
        .create_thing()
        .thing_name("lamp-post-17")
        .send()
        .await
        .expect_err("thing already exists");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status(), 409);
            match err.kind {
                CreateThingErrorKind::ResourceAlreadyExistsException(inner) => {
                    assert_eq!(inner.resource_id.as_deref(), Some("8d1f3a9e"))
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let err = client
        .describe_thing()
        .thing_name("lamp-post-99")
        .send()
        .await
        .expect_err("thing does not exist");
    let err = err.service_error().expect("modeled error");
    assert!(matches!(
        err.kind,
        DescribeThingErrorKind::ResourceNotFoundException(_)
    ));
    assert_eq!(
        err.message(),
        Some("Thing lamp-post-99 cannot be found.")
    );
    assert_eq!(client.metrics().service_errors(), 2);
}

#[tokio::test]
async fn missing_label_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    let err = client
        .attach_principal_policy()
        .principal("us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e")
        .send()
        .await
        .expect_err("policyName is unset");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}
