/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::RetryConfig;
use http::Uri;
use mediapackagevod::error::DescribeAssetErrorKind;
use mediapackagevod::input::CreateAssetInput;
use mediapackagevod::model::{
    AdMarkers, EncryptionMethod, HlsEncryption, HlsManifest, HlsPackage, SpekeKeyProvider,
};
use mediapackagevod::{Client, Config, Credentials, Region, SdkError};
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use std::time::{Duration, UNIX_EPOCH};

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            Some("notarealsessiontoken".to_string()),
        ))
        .retry_config(RetryConfig::default().with_static_base(|| 0_f64))
        .build()
}

#[tokio::test]
async fn create_asset() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/json")
            .header("content-length", "186")
            .header("host", "mediapackage-vod.us-west-2.amazonaws.com")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210309/us-west-2/mediapackage-vod/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-security-token;x-amz-user-agent, Signature=9a3317c3d9aa16bc2a2e0e4cbb833a2661ac21af85c07a5f9bc699f11eb3c470")
            .header("x-amz-date", "20210309T161000Z")
            .header("x-amz-security-token", "notarealsessiontoken")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://mediapackage-vod.us-west-2.amazonaws.com/assets"))
            .method("POST")
            .body(SdkBody::from(r#"{"id":"big-buck-bunny","packagingGroupId":"vod-group","sourceArn":"arn:aws:s3:::vod-sources/big-buck-bunny.smil","sourceRoleArn":"arn:aws:iam::123456789012:role/MediaPackageVodS3Access"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{
                "arn": "arn:aws:mediapackage-vod:us-west-2:123456789012:assets/big-buck-bunny",
                "createdAt": "2021-03-09T16:10:00Z",
                "egressEndpoints": [],
                "id": "big-buck-bunny",
                "packagingGroupId": "vod-group",
                "sourceArn": "arn:aws:s3:::vod-sources/big-buck-bunny.smil",
                "sourceRoleArn": "arn:aws:iam::123456789012:role/MediaPackageVodS3Access",
                "tags": {}
            }"#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = CreateAssetInput::builder()
        .id("big-buck-bunny")
        .packaging_group_id("vod-group")
        .source_arn("arn:aws:s3:::vod-sources/big-buck-bunny.smil")
        .source_role_arn("arn:aws:iam::123456789012:role/MediaPackageVodS3Access")
        .build()
        .unwrap()
        .make_operation(&conf())
        .unwrap();
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1615306200));
    op.config_mut().insert(AwsUserAgent::for_tests());
    let asset = client.call(op).await.expect("request should succeed");
    assert_eq!(
        asset.arn.as_deref(),
        Some("arn:aws:mediapackage-vod:us-west-2:123456789012:assets/big-buck-bunny")
    );
    assert_eq!(asset.egress_endpoints, Some(vec![]));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn packaging_configurations() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .header("content-type", "application/json")
                .uri(Uri::from_static(
                    "https://mediapackage-vod.us-west-2.amazonaws.com/packaging_configurations",
                ))
                .method("POST")
                .body(SdkBody::from(
                    r#"{
                        "hlsPackage": {
                            "encryption": {
                                "encryptionMethod": "SAMPLE_AES",
                                "spekeKeyProvider": {
                                    "roleArn": "arn:aws:iam::123456789012:role/SpekeAccess",
                                    "systemIds": ["81376844-f976-481e-a84e-cc25d39b0b33"],
                                    "url": "https://speke.example.com/copyProtection"
                                }
                            },
                            "hlsManifests": [{"adMarkers": "NONE", "includeIframeOnlyStream": true}]
                        },
                        "id": "hls-drm",
                        "packagingGroupId": "vod-group"
                    }"#,
                ))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(r#"{
                    "arn": "arn:aws:mediapackage-vod:us-west-2:123456789012:packaging-configurations/hls-drm",
                    "hlsPackage": {
                        "encryption": {"encryptionMethod": "SAMPLE_AES"},
                        "hlsManifests": [{"adMarkers": "NONE", "includeIframeOnlyStream": true}],
                        "segmentDurationSeconds": 6,
                        "useAudioRenditionGroup": false
                    },
                    "id": "hls-drm",
                    "packagingGroupId": "vod-group"
                }"#)
                .unwrap(),
        ),
        (
            http::Request::builder()
                .uri(Uri::from_static(
                    "https://mediapackage-vod.us-west-2.amazonaws.com/packaging_configurations?maxResults=10&packagingGroupId=vod-group",
                ))
                .method("GET")
                .body(SdkBody::from(""))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(r#"{
                    "packagingConfigurations": [
                        {"id": "hls-drm", "packagingGroupId": "vod-group", "hlsPackage": {"segmentDurationSeconds": 6}},
                        {"id": "dash", "packagingGroupId": "vod-group", "dashPackage": {"segmentDurationSeconds": 2}}
                    ]
                }"#)
                .unwrap(),
        ),
        (
            http::Request::builder()
                .uri(Uri::from_static(
                    "https://mediapackage-vod.us-west-2.amazonaws.com/packaging_configurations/dash",
                ))
                .method("DELETE")
                .body(SdkBody::from(""))
                .unwrap(),
            http::Response::builder().status(202).body("{}").unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    let created = client
        .create_packaging_configuration()
        .id("hls-drm")
        .packaging_group_id("vod-group")
        .hls_package(
            HlsPackage::builder()
                .encryption(
                    HlsEncryption::builder()
                        .encryption_method(EncryptionMethod::SampleAes)
                        .speke_key_provider(
                            SpekeKeyProvider::builder()
                                .role_arn("arn:aws:iam::123456789012:role/SpekeAccess")
                                .system_ids("81376844-f976-481e-a84e-cc25d39b0b33")
                                .url("https://speke.example.com/copyProtection")
                                .build(),
                        )
                        .build(),
                )
                .hls_manifests(
                    HlsManifest::builder()
                        .ad_markers(AdMarkers::None)
                        .include_iframe_only_stream(true)
                        .build(),
                )
                .build(),
        )
        .send()
        .await
        .expect("configuration is created");
    let hls = created.hls_package.expect("hls package");
    assert_eq!(hls.segment_duration_seconds, Some(6));
    assert_eq!(
        hls.encryption.and_then(|e| e.encryption_method),
        Some(EncryptionMethod::SampleAes)
    );

    let listed = client
        .list_packaging_configurations()
        .packaging_group_id("vod-group")
        .max_results(10)
        .send()
        .await
        .expect("configurations are listed");
    let ids: Vec<_> = listed
        .packaging_configurations
        .unwrap_or_default()
        .into_iter()
        .filter_map(|config| config.id)
        .collect();
    assert_eq!(ids, vec!["hls-drm", "dash"]);
    assert_eq!(listed.next_token, None);

    client
        .delete_packaging_configuration()
        .id("dash")
        .send()
        .await
        .expect("configuration is deleted");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn not_found() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://mediapackage-vod.us-west-2.amazonaws.com/assets/missing",
            ))
            .method("GET")
            .body(SdkBody::from(""))
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "NotFoundException")
            .body(r#"{"message":"Asset missing not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    let err = client
        .describe_asset()
        .id("missing")
        .send()
        .await
        .expect_err("asset does not exist");
    match &err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(err.kind, DescribeAssetErrorKind::NotFoundException(_)));
            assert_eq!(err.message(), Some("Asset missing not found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let err: mediapackagevod::Error = err.into();
    assert_eq!(err.to_string(), "NotFoundException: Asset missing not found");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn throttled_requests_are_retried() {
    let throttled = || {
        http::Response::builder()
            .status(429)
            .header("x-amzn-errortype", "TooManyRequestsException")
            .body(r#"{"message":"Too many requests"}"#)
            .unwrap()
    };
    let expected = || {
        http::Request::builder()
            .uri(Uri::from_static(
                "https://mediapackage-vod.us-west-2.amazonaws.com/assets/big-buck-bunny",
            ))
            .method("DELETE")
            .body(SdkBody::from(""))
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (expected(), throttled()),
        (
            expected(),
            http::Response::builder().status(202).body("").unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    client
        .delete_asset()
        .id("big-buck-bunny")
        .send()
        .await
        .expect("the second attempt succeeds");
    assert_eq!(conn.requests().len(), 2);
    assert_eq!(client.metrics().requests(), 1);
    assert_eq!(client.metrics().successes(), 1);
}
