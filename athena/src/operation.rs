/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers for each Athena operation

use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

macro_rules! operation {
    ($($(#[$meta:meta])* $name:ident($input:ident, $output:ident, $error:ident),)*) => {
        $(
            $(#[$meta])*
            #[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                /// Creates a new builder-style object to manufacture the input of this operation
                pub fn builder() -> crate::input::$input::Builder {
                    crate::input::$input::Builder::default()
                }

                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<crate::output::$output, crate::error::$error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    crate::protocol::parse_response(response)
                }
            }
        )*
    };
}

operation! {
    /// <p>Runs the SQL query statements contained in the <code>Query</code>.</p>
    StartQueryExecution(start_query_execution_input, StartQueryExecutionOutput, StartQueryExecutionError),
    /// <p>Stops a query execution. Requires you to have access to the workgroup in which the
    /// query ran.</p>
    StopQueryExecution(stop_query_execution_input, StopQueryExecutionOutput, StopQueryExecutionError),
    /// <p>Returns information about a single execution of a query if you have access to the
    /// workgroup in which the query ran.</p>
    GetQueryExecution(get_query_execution_input, GetQueryExecutionOutput, GetQueryExecutionError),
    /// <p>Streams the results of a single query execution specified by
    /// <code>QueryExecutionId</code> from the Athena query results location in Amazon S3.</p>
    GetQueryResults(get_query_results_input, GetQueryResultsOutput, GetQueryResultsError),
    /// <p>Provides a list of available query execution IDs for the queries in the specified
    /// workgroup.</p>
    ListQueryExecutions(list_query_executions_input, ListQueryExecutionsOutput, ListQueryExecutionsError),
    /// <p>Creates a named query in the specified workgroup.</p>
    CreateNamedQuery(create_named_query_input, CreateNamedQueryOutput, CreateNamedQueryError),
    GetNamedQuery(get_named_query_input, GetNamedQueryOutput, GetNamedQueryError),
    DeleteNamedQuery(delete_named_query_input, DeleteNamedQueryOutput, DeleteNamedQueryError),
    ListNamedQueries(list_named_queries_input, ListNamedQueriesOutput, ListNamedQueriesError),
    /// <p>Returns the details of a single named query or a list of up to 50 queries, which you
    /// provide as an array of query ID strings.</p>
    BatchGetNamedQuery(batch_get_named_query_input, BatchGetNamedQueryOutput, BatchGetNamedQueryError),
    /// <p>Returns a database object for the specified database and data catalog.</p>
    GetDatabase(get_database_input, GetDatabaseOutput, GetDatabaseError),
    ListTagsForResource(list_tags_for_resource_input, ListTagsForResourceOutput, ListTagsForResourceError),
    /// <p>Returns the details of a single query execution or a list of up to 50 query executions,
    /// which you provide as an array of query execution ID strings.</p>
    BatchGetQueryExecution(batch_get_query_execution_input, BatchGetQueryExecutionOutput, BatchGetQueryExecutionError),
    /// <p>Creates (registers) a data catalog with the specified name and properties.</p>
    CreateDataCatalog(create_data_catalog_input, CreateDataCatalogOutput, CreateDataCatalogError),
    DeleteDataCatalog(delete_data_catalog_input, DeleteDataCatalogOutput, DeleteDataCatalogError),
    GetDataCatalog(get_data_catalog_input, GetDataCatalogOutput, GetDataCatalogError),
    /// <p>Lists the data catalogs in the current Amazon Web Services account.</p>
    ListDataCatalogs(list_data_catalogs_input, ListDataCatalogsOutput, ListDataCatalogsError),
    UpdateDataCatalog(update_data_catalog_input, UpdateDataCatalogOutput, UpdateDataCatalogError),
    /// <p>Creates a workgroup with the specified name.</p>
    CreateWorkGroup(create_work_group_input, CreateWorkGroupOutput, CreateWorkGroupError),
    /// <p>Deletes the workgroup with the specified name. The primary workgroup cannot be
    /// deleted.</p>
    DeleteWorkGroup(delete_work_group_input, DeleteWorkGroupOutput, DeleteWorkGroupError),
    GetWorkGroup(get_work_group_input, GetWorkGroupOutput, GetWorkGroupError),
    ListWorkGroups(list_work_groups_input, ListWorkGroupsOutput, ListWorkGroupsError),
    /// <p>Updates the workgroup with the specified name. The workgroup's name cannot be
    /// changed.</p>
    UpdateWorkGroup(update_work_group_input, UpdateWorkGroupOutput, UpdateWorkGroupError),
    GetTableMetadata(get_table_metadata_input, GetTableMetadataOutput, GetTableMetadataError),
    /// <p>Lists the metadata for the tables in the specified data catalog database.</p>
    ListTableMetadata(list_table_metadata_input, ListTableMetadataOutput, ListTableMetadataError),
    ListDatabases(list_databases_input, ListDatabasesOutput, ListDatabasesError),
    /// <p>Adds one or more tags to an Athena resource.</p>
    TagResource(tag_resource_input, TagResourceOutput, TagResourceError),
    UntagResource(untag_resource_input, UntagResourceOutput, UntagResourceError),
}

#[cfg(test)]
mod test {
    use crate::error::{GetQueryExecutionErrorKind, ListNamedQueriesErrorKind};
    use crate::model::QueryExecutionState;
    use crate::operation::{GetQueryExecution, ListNamedQueries, StopQueryExecution};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn parse_success() {
        let output = GetQueryExecution::new()
            .parse(&response(
                200,
                r#"{"QueryExecution":{"QueryExecutionId":"q-1","Status":{"State":"RUNNING"}}}"#,
            ))
            .expect("valid response");
        let execution = output.query_execution.unwrap();
        assert_eq!(execution.query_execution_id.as_deref(), Some("q-1"));
        assert_eq!(
            execution.status.unwrap().state,
            Some(QueryExecutionState::Running)
        );
    }

    #[test]
    fn empty_body_is_an_empty_output() {
        assert!(StopQueryExecution::new().parse(&response(200, "")).is_ok());
    }

    #[test]
    fn malformed_body_is_unhandled() {
        let err = GetQueryExecution::new()
            .parse(&response(200, r#"{"QueryExecution": 5}"#))
            .expect_err("invalid shape");
        assert!(matches!(err.kind, GetQueryExecutionErrorKind::Unhandled(_)));
    }

    #[test]
    fn error_status_is_an_error() {
        let err = ListNamedQueries::new()
            .parse(&response(
                500,
                r#"{"__type":"InternalServerException","Message":"oops"}"#,
            ))
            .expect_err("500 is an error");
        assert!(matches!(
            err.kind,
            ListNamedQueriesErrorKind::InternalServerException(_)
        ));
        assert_eq!(err.message(), Some("oops"));
    }
}
