/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use athena::error::{GetQueryExecutionErrorKind, StartQueryExecutionErrorKind};
use athena::input::{GetQueryExecutionInput, StartQueryExecutionInput};
use athena::model::{
    QueryExecutionState, ResultConfiguration, Tag, ThrottleReason, WorkGroupConfiguration,
    WorkGroupState,
};
use athena::{Client, Config, Credentials, Region, SdkError};
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::RetryConfig;
use http::header::AUTHORIZATION;
use http::Uri;
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::Instant;
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

fn request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .uri(Uri::from_static("https://athena.us-east-1.amazonaws.com/"))
        .method("POST")
        .body(SdkBody::from(body))
        .unwrap()
}

#[tokio::test]
async fn start_query_execution() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AmazonAthena.StartQueryExecution")
            .header("content-length", "71")
            .header("host", "athena.us-east-1.amazonaws.com")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/athena/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-target;x-amz-user-agent, Signature=1f0327674b3dae1ae87ef4b1a09629037c33ab7488412a4251cdd293ae8f02c7")
            .header("x-amz-date", "20210305T134922Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://athena.us-east-1.amazonaws.com/"))
            .method("POST")
            .body(SdkBody::from(r#"{"QueryString":"SELECT * FROM elb_logs LIMIT 10","WorkGroup":"primary"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "5f0f4c8a-8b39-4b1e-a3e5-2f3f8a1c9b10")
            .body(r#"{"QueryExecutionId":"c9f3b2a4-7e2d-4b8c-9a6f-1d2e3f4a5b6c"}"#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = StartQueryExecutionInput::builder()
        .query_string("SELECT * FROM elb_logs LIMIT 10")
        .work_group("primary")
        .build()
        .unwrap()
        .make_operation(&conf())
        .expect("valid operation");
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.config_mut().insert(AwsUserAgent::for_tests());
    let resp = client.call(op).await.expect("request should succeed");
    assert_eq!(
        resp.query_execution_id.as_deref(),
        Some("c9f3b2a4-7e2d-4b8c-9a6f-1d2e3f4a5b6c")
    );
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn get_query_execution() {
    let conn = TestConnection::new(vec![(
        request(
            "AmazonAthena.GetQueryExecution",
            r#"{"QueryExecutionId":"q-1"}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"QueryExecution":{
                    "QueryExecutionId":"q-1",
                    "Query":"SELECT 1",
                    "StatementType":"DML",
                    "Status":{"State":"SUCCEEDED","SubmissionDateTime":1.614952162E9},
                    "Statistics":{"EngineExecutionTimeInMillis":1234,"DataScannedInBytes":0}
                }}"#,
            )
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let op = GetQueryExecutionInput::builder()
        .query_execution_id("q-1")
        .build()
        .unwrap()
        .make_operation(&conf())
        .unwrap();
    let execution = client
        .call(op)
        .await
        .expect("request should succeed")
        .query_execution
        .expect("execution is present");
    let status = execution.status.unwrap();
    assert_eq!(status.state, Some(QueryExecutionState::Succeeded));
    assert_eq!(
        status.submission_date_time,
        Some(Instant::from_epoch_seconds(1614952162))
    );
    assert_eq!(
        execution.statistics.unwrap().engine_execution_time_in_millis,
        Some(1234)
    );
    conn.assert_requests_match(&[AUTHORIZATION]);
}

#[tokio::test]
async fn modeled_error() {
    let conn = TestConnection::new(vec![(
        request(
            "AmazonAthena.StartQueryExecution",
            r#"{"QueryString":"SELECT 1"}"#,
        ),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "0a4b8f9e-2a57-4c3b-86b5-0c5d5bb1d10c")
            .header("content-type", "application/x-amz-json-1.1")
            .body(r#"{"__type":"TooManyRequestsException","Message":"Rate exceeded","Reason":"CONCURRENT_QUERY_LIMIT_EXCEEDED"}"#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone()).with_retry_config(RetryConfig::disabled());
    let op = StartQueryExecutionInput::builder()
        .query_string("SELECT 1")
        .build()
        .unwrap()
        .make_operation(&conf())
        .unwrap();
    let err = client.call(op).await.expect_err("throttled");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status(), 400);
            assert_eq!(
                err.request_id(),
                Some("0a4b8f9e-2a57-4c3b-86b5-0c5d5bb1d10c")
            );
            match err.kind {
                StartQueryExecutionErrorKind::TooManyRequestsException(inner) => {
                    assert_eq!(inner.message(), Some("Rate exceeded"));
                    assert_eq!(
                        inner.reason,
                        Some(ThrottleReason::ConcurrentQueryLimitExceeded)
                    );
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
        other => panic!("unexpected error: {:?}", other),
    }
    conn.assert_requests_match(&[AUTHORIZATION]);
}

#[tokio::test]
async fn malformed_response() {
    let conn = TestConnection::new(vec![(
        request(
            "AmazonAthena.GetQueryExecution",
            r#"{"QueryExecutionId":"q-1"}"#,
        ),
        http::Response::builder()
            .status(200)
            // truncated body
            .body(r#"{"QueryExecution":{"QueryExecutionId":"q-1""#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let op = GetQueryExecutionInput::builder()
        .query_execution_id("q-1")
        .build()
        .unwrap()
        .make_operation(&conf())
        .unwrap();
    let err = client.call(op).await.expect_err("response was malformed");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(err.kind, GetQueryExecutionErrorKind::Unhandled(_)))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn missing_region_fails_before_sending() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = aws_hyper::Client::new(conn.clone());
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notreal", None))
        .build();
    let op = GetQueryExecutionInput::builder()
        .query_execution_id("q-1")
        .build()
        .unwrap()
        .make_operation(&conf)
        .unwrap();
    let err = client.call(op).await.expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn fluent_client() {
    let conn = TestConnection::new(vec![
        (
            request(
                "AmazonAthena.ListNamedQueries",
                r#"{"MaxResults":2,"WorkGroup":"primary"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"NamedQueryIds":["a","b"],"NextToken":"next"}"#)
                .unwrap(),
        ),
        (
            request(
                "AmazonAthena.BatchGetNamedQuery",
                r#"{"NamedQueryIds":["a","b"]}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(
                    r#"{"NamedQueries":[{"Name":"top","Database":"sampledb","QueryString":"SELECT 1","NamedQueryId":"a"}],
                        "UnprocessedNamedQueryIds":[{"NamedQueryId":"b","ErrorCode":"404","ErrorMessage":"not found"}]}"#,
                )
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    let page = client
        .list_named_queries()
        .max_results(2)
        .work_group("primary")
        .send()
        .await
        .expect("list succeeds");
    assert_eq!(page.next_token.as_deref(), Some("next"));
    let ids = page.named_query_ids.unwrap_or_default();
    let batch = client
        .batch_get_named_query()
        .set_named_query_ids(Some(ids))
        .send()
        .await
        .expect("batch get succeeds");
    let queries = batch.named_queries.unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].database.as_deref(), Some("sampledb"));
    let unprocessed = batch.unprocessed_named_query_ids.unwrap();
    assert_eq!(unprocessed[0].error_message.as_deref(), Some("not found"));
    conn.assert_requests_match(&[AUTHORIZATION]);
    assert_eq!(client.metrics().successes(), 2);
}

async fn get_database(client: &Client, name: &str) -> Result<(), athena::Error> {
    client
        .get_database()
        .catalog_name("AwsDataCatalog")
        .database_name(name)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn operation_errors_convert_into_the_service_error() {
    let conn = TestConnection::new(vec![(
        request(
            "AmazonAthena.GetDatabase",
            r#"{"CatalogName":"AwsDataCatalog","DatabaseName":"missing"}"#,
        ),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"MetadataException","Message":"Database missing not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    match get_database(&client, "missing").await {
        Err(athena::Error::MetadataException(err)) => {
            assert_eq!(err.message(), Some("Database missing not found"))
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn work_group_lifecycle() {
    let ok = |body: &'static str| {
        http::Response::builder()
            .status(200)
            .body(body)
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (
            request(
                "AmazonAthena.CreateWorkGroup",
                r#"{"Name":"analysts","Configuration":{"ResultConfiguration":{"OutputLocation":"s3://athena-results/analysts/"},"EnforceWorkGroupConfiguration":true},"Tags":[{"Key":"team","Value":"data"}]}"#,
            ),
            ok("{}"),
        ),
        (
            request("AmazonAthena.GetWorkGroup", r#"{"WorkGroup":"analysts"}"#),
            ok(r#"{"WorkGroup":{"Name":"analysts","State":"ENABLED","CreationTime":1614952162}}"#),
        ),
        (
            request(
                "AmazonAthena.UntagResource",
                r#"{"ResourceARN":"arn:aws:athena:us-east-1:123456789012:workgroup/analysts","TagKeys":["team"]}"#,
            ),
            ok("{}"),
        ),
        (
            request(
                "AmazonAthena.DeleteWorkGroup",
                r#"{"WorkGroup":"analysts","RecursiveDeleteOption":true}"#,
            ),
            ok("{}"),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), Standard::new(conn.clone()));
    client
        .create_work_group()
        .name("analysts")
        .configuration(
            WorkGroupConfiguration::builder()
                .result_configuration(
                    ResultConfiguration::builder()
                        .output_location("s3://athena-results/analysts/")
                        .build(),
                )
                .enforce_work_group_configuration(true)
                .build(),
        )
        .tags(Tag::builder().key("team").value("data").build())
        .send()
        .await
        .expect("create succeeds");
    let work_group = client
        .get_work_group()
        .work_group("analysts")
        .send()
        .await
        .expect("get succeeds")
        .work_group
        .expect("work group is present");
    assert_eq!(work_group.state, Some(WorkGroupState::Enabled));
    assert_eq!(
        work_group.creation_time,
        Some(Instant::from_epoch_seconds(1614952162))
    );
    client
        .untag_resource()
        .resource_arn("arn:aws:athena:us-east-1:123456789012:workgroup/analysts")
        .tag_keys("team")
        .send()
        .await
        .expect("untag succeeds");
    client
        .delete_work_group()
        .work_group("analysts")
        .recursive_delete_option(true)
        .send()
        .await
        .expect("delete succeeds");
    conn.assert_requests_match(&[AUTHORIZATION]);
    assert_eq!(client.metrics().successes(), 4);
}
