/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! Each input serializes to the JSON body of its request. [`make_operation`] on an input
//! produces the signed-ready [`Operation`](smithy_http::operation::Operation) that an
//! `aws_hyper::Client` can dispatch.
//!
//! [`make_operation`]: StartQueryExecutionInput::make_operation

use crate::config::Config;
use crate::model::{
    DataCatalogType, QueryExecutionContext, ResultConfiguration, Tag, WorkGroupConfiguration,
    WorkGroupConfigurationUpdates, WorkGroupState,
};
use aws_http::AwsErrorRetryPolicy;
use smithy_http::operation::{BuildError, Operation};
use std::collections::HashMap;

/// See [`StartQueryExecutionInput`](crate::input::StartQueryExecutionInput)
pub mod start_query_execution_input {
    use crate::input::StartQueryExecutionInput;
    use crate::model::{QueryExecutionContext, ResultConfiguration};
    use smithy_http::operation::BuildError;

    /// A builder for [`StartQueryExecutionInput`](crate::input::StartQueryExecutionInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_string: Option<String>,
        client_request_token: Option<String>,
        query_execution_context: Option<QueryExecutionContext>,
        result_configuration: Option<ResultConfiguration>,
        work_group: Option<String>,
    }
    impl Builder {
        /// <p>The SQL query statements to be executed.</p>
        pub fn query_string(mut self, inp: impl Into<String>) -> Self {
            self.query_string = Some(inp.into());
            self
        }
        pub fn set_query_string(mut self, inp: Option<String>) -> Self {
            self.query_string = inp;
            self
        }
        /// <p>A unique case-sensitive string used to ensure the request to create the query is
        /// idempotent (executes only once).</p>
        pub fn client_request_token(mut self, inp: impl Into<String>) -> Self {
            self.client_request_token = Some(inp.into());
            self
        }
        pub fn set_client_request_token(mut self, inp: Option<String>) -> Self {
            self.client_request_token = inp;
            self
        }
        pub fn query_execution_context(mut self, inp: QueryExecutionContext) -> Self {
            self.query_execution_context = Some(inp);
            self
        }
        pub fn set_query_execution_context(mut self, inp: Option<QueryExecutionContext>) -> Self {
            self.query_execution_context = inp;
            self
        }
        pub fn result_configuration(mut self, inp: ResultConfiguration) -> Self {
            self.result_configuration = Some(inp);
            self
        }
        pub fn set_result_configuration(mut self, inp: Option<ResultConfiguration>) -> Self {
            self.result_configuration = inp;
            self
        }
        /// <p>The name of the workgroup in which the query is being started.</p>
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartQueryExecutionInput`](crate::input::StartQueryExecutionInput)
        pub fn build(self) -> Result<StartQueryExecutionInput, BuildError> {
            Ok(StartQueryExecutionInput {
                query_string: self.query_string,
                client_request_token: self.client_request_token,
                query_execution_context: self.query_execution_context,
                result_configuration: self.result_configuration,
                work_group: self.work_group,
            })
        }
    }
}
impl StartQueryExecutionInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::StartQueryExecution, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "StartQueryExecution",
            self,
            crate::operation::StartQueryExecution::new(),
        )
    }
    /// Creates a new builder-style object to manufacture [`StartQueryExecutionInput`](crate::input::StartQueryExecutionInput)
    pub fn builder() -> crate::input::start_query_execution_input::Builder {
        crate::input::start_query_execution_input::Builder::default()
    }
}

/// See [`StopQueryExecutionInput`](crate::input::StopQueryExecutionInput)
pub mod stop_query_execution_input {
    use crate::input::StopQueryExecutionInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution_id: Option<String>,
    }
    impl Builder {
        /// <p>The unique ID of the query execution to stop.</p>
        pub fn query_execution_id(mut self, inp: impl Into<String>) -> Self {
            self.query_execution_id = Some(inp.into());
            self
        }
        pub fn set_query_execution_id(mut self, inp: Option<String>) -> Self {
            self.query_execution_id = inp;
            self
        }
        pub fn build(self) -> Result<StopQueryExecutionInput, BuildError> {
            Ok(StopQueryExecutionInput {
                query_execution_id: self.query_execution_id,
            })
        }
    }
}
impl StopQueryExecutionInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::StopQueryExecution, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "StopQueryExecution",
            self,
            crate::operation::StopQueryExecution::new(),
        )
    }
    pub fn builder() -> crate::input::stop_query_execution_input::Builder {
        crate::input::stop_query_execution_input::Builder::default()
    }
}

/// See [`GetQueryExecutionInput`](crate::input::GetQueryExecutionInput)
pub mod get_query_execution_input {
    use crate::input::GetQueryExecutionInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution_id: Option<String>,
    }
    impl Builder {
        /// <p>The unique ID of the query execution.</p>
        pub fn query_execution_id(mut self, inp: impl Into<String>) -> Self {
            self.query_execution_id = Some(inp.into());
            self
        }
        pub fn set_query_execution_id(mut self, inp: Option<String>) -> Self {
            self.query_execution_id = inp;
            self
        }
        pub fn build(self) -> Result<GetQueryExecutionInput, BuildError> {
            Ok(GetQueryExecutionInput {
                query_execution_id: self.query_execution_id,
            })
        }
    }
}
impl GetQueryExecutionInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetQueryExecution, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "GetQueryExecution",
            self,
            crate::operation::GetQueryExecution::new(),
        )
    }
    pub fn builder() -> crate::input::get_query_execution_input::Builder {
        crate::input::get_query_execution_input::Builder::default()
    }
}

/// See [`GetQueryResultsInput`](crate::input::GetQueryResultsInput)
pub mod get_query_results_input {
    use crate::input::GetQueryResultsInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution_id: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn query_execution_id(mut self, inp: impl Into<String>) -> Self {
            self.query_execution_id = Some(inp.into());
            self
        }
        pub fn set_query_execution_id(mut self, inp: Option<String>) -> Self {
            self.query_execution_id = inp;
            self
        }
        /// <p>A token generated by the Athena service that specifies where to continue
        /// pagination if a previous request was truncated.</p>
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        /// <p>The maximum number of results (rows) to return in this request.</p>
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn build(self) -> Result<GetQueryResultsInput, BuildError> {
            Ok(GetQueryResultsInput {
                query_execution_id: self.query_execution_id,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl GetQueryResultsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetQueryResults, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "GetQueryResults",
            self,
            crate::operation::GetQueryResults::new(),
        )
    }
    pub fn builder() -> crate::input::get_query_results_input::Builder {
        crate::input::get_query_results_input::Builder::default()
    }
}

/// See [`ListQueryExecutionsInput`](crate::input::ListQueryExecutionsInput)
pub mod list_query_executions_input {
    use crate::input::ListQueryExecutionsInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
        work_group: Option<String>,
    }
    impl Builder {
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// <p>The name of the workgroup from which queries are returned. If a workgroup is not
        /// specified, a list of available query execution IDs for the queries in the primary
        /// workgroup is returned.</p>
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        pub fn build(self) -> Result<ListQueryExecutionsInput, BuildError> {
            Ok(ListQueryExecutionsInput {
                next_token: self.next_token,
                max_results: self.max_results,
                work_group: self.work_group,
            })
        }
    }
}
impl ListQueryExecutionsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListQueryExecutions, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "ListQueryExecutions",
            self,
            crate::operation::ListQueryExecutions::new(),
        )
    }
    pub fn builder() -> crate::input::list_query_executions_input::Builder {
        crate::input::list_query_executions_input::Builder::default()
    }
}

/// See [`CreateNamedQueryInput`](crate::input::CreateNamedQueryInput)
pub mod create_named_query_input {
    use crate::input::CreateNamedQueryInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
        description: Option<String>,
        database: Option<String>,
        query_string: Option<String>,
        client_request_token: Option<String>,
        work_group: Option<String>,
    }
    impl Builder {
        /// <p>The query name.</p>
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        /// <p>The database to which the query belongs.</p>
        pub fn database(mut self, inp: impl Into<String>) -> Self {
            self.database = Some(inp.into());
            self
        }
        pub fn set_database(mut self, inp: Option<String>) -> Self {
            self.database = inp;
            self
        }
        pub fn query_string(mut self, inp: impl Into<String>) -> Self {
            self.query_string = Some(inp.into());
            self
        }
        pub fn set_query_string(mut self, inp: Option<String>) -> Self {
            self.query_string = inp;
            self
        }
        pub fn client_request_token(mut self, inp: impl Into<String>) -> Self {
            self.client_request_token = Some(inp.into());
            self
        }
        pub fn set_client_request_token(mut self, inp: Option<String>) -> Self {
            self.client_request_token = inp;
            self
        }
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        pub fn build(self) -> Result<CreateNamedQueryInput, BuildError> {
            Ok(CreateNamedQueryInput {
                name: self.name,
                description: self.description,
                database: self.database,
                query_string: self.query_string,
                client_request_token: self.client_request_token,
                work_group: self.work_group,
            })
        }
    }
}
impl CreateNamedQueryInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateNamedQuery, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "CreateNamedQuery",
            self,
            crate::operation::CreateNamedQuery::new(),
        )
    }
    pub fn builder() -> crate::input::create_named_query_input::Builder {
        crate::input::create_named_query_input::Builder::default()
    }
}

/// See [`GetNamedQueryInput`](crate::input::GetNamedQueryInput)
pub mod get_named_query_input {
    use crate::input::GetNamedQueryInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        named_query_id: Option<String>,
    }
    impl Builder {
        /// <p>The unique ID of the query. Use <a>ListNamedQueries</a> to get query IDs.</p>
        pub fn named_query_id(mut self, inp: impl Into<String>) -> Self {
            self.named_query_id = Some(inp.into());
            self
        }
        pub fn set_named_query_id(mut self, inp: Option<String>) -> Self {
            self.named_query_id = inp;
            self
        }
        pub fn build(self) -> Result<GetNamedQueryInput, BuildError> {
            Ok(GetNamedQueryInput {
                named_query_id: self.named_query_id,
            })
        }
    }
}
impl GetNamedQueryInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetNamedQuery, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetNamedQuery",
            self,
            crate::operation::GetNamedQuery::new(),
        )
    }
    pub fn builder() -> crate::input::get_named_query_input::Builder {
        crate::input::get_named_query_input::Builder::default()
    }
}

/// See [`DeleteNamedQueryInput`](crate::input::DeleteNamedQueryInput)
pub mod delete_named_query_input {
    use crate::input::DeleteNamedQueryInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        named_query_id: Option<String>,
    }
    impl Builder {
        pub fn named_query_id(mut self, inp: impl Into<String>) -> Self {
            self.named_query_id = Some(inp.into());
            self
        }
        pub fn set_named_query_id(mut self, inp: Option<String>) -> Self {
            self.named_query_id = inp;
            self
        }
        pub fn build(self) -> Result<DeleteNamedQueryInput, BuildError> {
            Ok(DeleteNamedQueryInput {
                named_query_id: self.named_query_id,
            })
        }
    }
}
impl DeleteNamedQueryInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteNamedQuery, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "DeleteNamedQuery",
            self,
            crate::operation::DeleteNamedQuery::new(),
        )
    }
    pub fn builder() -> crate::input::delete_named_query_input::Builder {
        crate::input::delete_named_query_input::Builder::default()
    }
}

/// See [`ListNamedQueriesInput`](crate::input::ListNamedQueriesInput)
pub mod list_named_queries_input {
    use crate::input::ListNamedQueriesInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
        work_group: Option<String>,
    }
    impl Builder {
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        pub fn build(self) -> Result<ListNamedQueriesInput, BuildError> {
            Ok(ListNamedQueriesInput {
                next_token: self.next_token,
                max_results: self.max_results,
                work_group: self.work_group,
            })
        }
    }
}
impl ListNamedQueriesInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListNamedQueries, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "ListNamedQueries",
            self,
            crate::operation::ListNamedQueries::new(),
        )
    }
    pub fn builder() -> crate::input::list_named_queries_input::Builder {
        crate::input::list_named_queries_input::Builder::default()
    }
}

/// See [`BatchGetNamedQueryInput`](crate::input::BatchGetNamedQueryInput)
pub mod batch_get_named_query_input {
    use crate::input::BatchGetNamedQueryInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        named_query_ids: Option<Vec<String>>,
    }
    impl Builder {
        /// <p>An array of query IDs.</p>
        pub fn named_query_ids(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.named_query_ids.unwrap_or_default();
            v.push(inp.into());
            self.named_query_ids = Some(v);
            self
        }
        pub fn set_named_query_ids(mut self, inp: Option<Vec<String>>) -> Self {
            self.named_query_ids = inp;
            self
        }
        pub fn build(self) -> Result<BatchGetNamedQueryInput, BuildError> {
            Ok(BatchGetNamedQueryInput {
                named_query_ids: self.named_query_ids,
            })
        }
    }
}
impl BatchGetNamedQueryInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::BatchGetNamedQuery, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "BatchGetNamedQuery",
            self,
            crate::operation::BatchGetNamedQuery::new(),
        )
    }
    pub fn builder() -> crate::input::batch_get_named_query_input::Builder {
        crate::input::batch_get_named_query_input::Builder::default()
    }
}

/// See [`GetDatabaseInput`](crate::input::GetDatabaseInput)
pub mod get_database_input {
    use crate::input::GetDatabaseInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        catalog_name: Option<String>,
        database_name: Option<String>,
    }
    impl Builder {
        /// <p>The name of the data catalog that contains the database to return.</p>
        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.catalog_name = Some(inp.into());
            self
        }
        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.catalog_name = inp;
            self
        }
        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.database_name = Some(inp.into());
            self
        }
        pub fn set_database_name(mut self, inp: Option<String>) -> Self {
            self.database_name = inp;
            self
        }
        pub fn build(self) -> Result<GetDatabaseInput, BuildError> {
            Ok(GetDatabaseInput {
                catalog_name: self.catalog_name,
                database_name: self.database_name,
            })
        }
    }
}
impl GetDatabaseInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetDatabase, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetDatabase",
            self,
            crate::operation::GetDatabase::new(),
        )
    }
    pub fn builder() -> crate::input::get_database_input::Builder {
        crate::input::get_database_input::Builder::default()
    }
}

/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    use crate::input::ListTagsForResourceInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        resource_arn: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        /// <p>Lists the tags for the resource with the specified ARN.</p>
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn build(self) -> Result<ListTagsForResourceInput, BuildError> {
            Ok(ListTagsForResourceInput {
                resource_arn: self.resource_arn,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListTagsForResourceInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListTagsForResource, AwsErrorRetryPolicy>, BuildError>
    {
        crate::protocol::build_operation(
            config,
            "ListTagsForResource",
            self,
            crate::operation::ListTagsForResource::new(),
        )
    }
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}

/// See [`BatchGetQueryExecutionInput`](crate::input::BatchGetQueryExecutionInput)
pub mod batch_get_query_execution_input {
    use crate::input::BatchGetQueryExecutionInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution_ids: Option<Vec<String>>,
    }
    impl Builder {
        /// <p>An array of query execution IDs.</p>
        pub fn query_execution_ids(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.query_execution_ids.unwrap_or_default();
            v.push(inp.into());
            self.query_execution_ids = Some(v);
            self
        }
        pub fn set_query_execution_ids(mut self, inp: Option<Vec<String>>) -> Self {
            self.query_execution_ids = inp;
            self
        }
        pub fn build(self) -> Result<BatchGetQueryExecutionInput, BuildError> {
            Ok(BatchGetQueryExecutionInput {
                query_execution_ids: self.query_execution_ids,
            })
        }
    }
}
impl BatchGetQueryExecutionInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<
        Operation<crate::operation::BatchGetQueryExecution, AwsErrorRetryPolicy>,
        BuildError,
    > {
        crate::protocol::build_operation(
            config,
            "BatchGetQueryExecution",
            self,
            crate::operation::BatchGetQueryExecution::new(),
        )
    }
    pub fn builder() -> crate::input::batch_get_query_execution_input::Builder {
        crate::input::batch_get_query_execution_input::Builder::default()
    }
}

/// See [`CreateDataCatalogInput`](crate::input::CreateDataCatalogInput)
pub mod create_data_catalog_input {
    use crate::input::CreateDataCatalogInput;
    use crate::model::{DataCatalogType, Tag};
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
        r#type: Option<DataCatalogType>,
        description: Option<String>,
        parameters: Option<HashMap<String, String>>,
        tags: Option<Vec<Tag>>,
    }
    impl Builder {
        /// <p>The name of the data catalog to create. The catalog name must be unique for the
        /// Amazon Web Services account.</p>
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn r#type(mut self, inp: DataCatalogType) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: Option<DataCatalogType>) -> Self {
            self.r#type = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        pub fn parameters(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.parameters = Some(hash_map);
            self
        }
        pub fn set_parameters(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.parameters = inp;
            self
        }
        pub fn tags(mut self, inp: impl Into<Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.tags = inp;
            self
        }
        pub fn build(self) -> Result<CreateDataCatalogInput, BuildError> {
            Ok(CreateDataCatalogInput {
                name: self.name,
                r#type: self.r#type,
                description: self.description,
                parameters: self.parameters,
                tags: self.tags,
            })
        }
    }
}
impl CreateDataCatalogInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateDataCatalog, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "CreateDataCatalog",
            self,
            crate::operation::CreateDataCatalog::new(),
        )
    }
    pub fn builder() -> crate::input::create_data_catalog_input::Builder {
        crate::input::create_data_catalog_input::Builder::default()
    }
}

/// See [`DeleteDataCatalogInput`](crate::input::DeleteDataCatalogInput)
pub mod delete_data_catalog_input {
    use crate::input::DeleteDataCatalogInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
    }
    impl Builder {
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn build(self) -> Result<DeleteDataCatalogInput, BuildError> {
            Ok(DeleteDataCatalogInput {
                name: self.name,
            })
        }
    }
}
impl DeleteDataCatalogInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteDataCatalog, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "DeleteDataCatalog",
            self,
            crate::operation::DeleteDataCatalog::new(),
        )
    }
    pub fn builder() -> crate::input::delete_data_catalog_input::Builder {
        crate::input::delete_data_catalog_input::Builder::default()
    }
}

/// See [`GetDataCatalogInput`](crate::input::GetDataCatalogInput)
pub mod get_data_catalog_input {
    use crate::input::GetDataCatalogInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
    }
    impl Builder {
        /// <p>The name of the data catalog to return.</p>
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn build(self) -> Result<GetDataCatalogInput, BuildError> {
            Ok(GetDataCatalogInput {
                name: self.name,
            })
        }
    }
}
impl GetDataCatalogInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetDataCatalog, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetDataCatalog",
            self,
            crate::operation::GetDataCatalog::new(),
        )
    }
    pub fn builder() -> crate::input::get_data_catalog_input::Builder {
        crate::input::get_data_catalog_input::Builder::default()
    }
}

/// See [`ListDataCatalogsInput`](crate::input::ListDataCatalogsInput)
pub mod list_data_catalogs_input {
    use crate::input::ListDataCatalogsInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn build(self) -> Result<ListDataCatalogsInput, BuildError> {
            Ok(ListDataCatalogsInput {
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListDataCatalogsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListDataCatalogs, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "ListDataCatalogs",
            self,
            crate::operation::ListDataCatalogs::new(),
        )
    }
    pub fn builder() -> crate::input::list_data_catalogs_input::Builder {
        crate::input::list_data_catalogs_input::Builder::default()
    }
}

/// See [`UpdateDataCatalogInput`](crate::input::UpdateDataCatalogInput)
pub mod update_data_catalog_input {
    use crate::input::UpdateDataCatalogInput;
    use crate::model::DataCatalogType;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
        r#type: Option<DataCatalogType>,
        description: Option<String>,
        parameters: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn r#type(mut self, inp: DataCatalogType) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: Option<DataCatalogType>) -> Self {
            self.r#type = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        pub fn parameters(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.parameters = Some(hash_map);
            self
        }
        pub fn set_parameters(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.parameters = inp;
            self
        }
        pub fn build(self) -> Result<UpdateDataCatalogInput, BuildError> {
            Ok(UpdateDataCatalogInput {
                name: self.name,
                r#type: self.r#type,
                description: self.description,
                parameters: self.parameters,
            })
        }
    }
}
impl UpdateDataCatalogInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UpdateDataCatalog, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "UpdateDataCatalog",
            self,
            crate::operation::UpdateDataCatalog::new(),
        )
    }
    pub fn builder() -> crate::input::update_data_catalog_input::Builder {
        crate::input::update_data_catalog_input::Builder::default()
    }
}

/// See [`CreateWorkGroupInput`](crate::input::CreateWorkGroupInput)
pub mod create_work_group_input {
    use crate::input::CreateWorkGroupInput;
    use crate::model::{Tag, WorkGroupConfiguration};
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        name: Option<String>,
        configuration: Option<WorkGroupConfiguration>,
        description: Option<String>,
        tags: Option<Vec<Tag>>,
    }
    impl Builder {
        /// <p>The workgroup name.</p>
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        pub fn configuration(mut self, inp: WorkGroupConfiguration) -> Self {
            self.configuration = Some(inp);
            self
        }
        pub fn set_configuration(mut self, inp: Option<WorkGroupConfiguration>) -> Self {
            self.configuration = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        pub fn tags(mut self, inp: impl Into<Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.tags = inp;
            self
        }
        pub fn build(self) -> Result<CreateWorkGroupInput, BuildError> {
            Ok(CreateWorkGroupInput {
                name: self.name,
                configuration: self.configuration,
                description: self.description,
                tags: self.tags,
            })
        }
    }
}
impl CreateWorkGroupInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateWorkGroup, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "CreateWorkGroup",
            self,
            crate::operation::CreateWorkGroup::new(),
        )
    }
    pub fn builder() -> crate::input::create_work_group_input::Builder {
        crate::input::create_work_group_input::Builder::default()
    }
}

/// See [`DeleteWorkGroupInput`](crate::input::DeleteWorkGroupInput)
pub mod delete_work_group_input {
    use crate::input::DeleteWorkGroupInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        work_group: Option<String>,
        recursive_delete_option: Option<bool>,
    }
    impl Builder {
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        /// <p>The option to delete the workgroup and its contents even if the workgroup contains any
        /// named queries.</p>
        pub fn recursive_delete_option(mut self, inp: bool) -> Self {
            self.recursive_delete_option = Some(inp);
            self
        }
        pub fn set_recursive_delete_option(mut self, inp: Option<bool>) -> Self {
            self.recursive_delete_option = inp;
            self
        }
        pub fn build(self) -> Result<DeleteWorkGroupInput, BuildError> {
            Ok(DeleteWorkGroupInput {
                work_group: self.work_group,
                recursive_delete_option: self.recursive_delete_option,
            })
        }
    }
}
impl DeleteWorkGroupInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteWorkGroup, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "DeleteWorkGroup",
            self,
            crate::operation::DeleteWorkGroup::new(),
        )
    }
    pub fn builder() -> crate::input::delete_work_group_input::Builder {
        crate::input::delete_work_group_input::Builder::default()
    }
}

/// See [`GetWorkGroupInput`](crate::input::GetWorkGroupInput)
pub mod get_work_group_input {
    use crate::input::GetWorkGroupInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        work_group: Option<String>,
    }
    impl Builder {
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        pub fn build(self) -> Result<GetWorkGroupInput, BuildError> {
            Ok(GetWorkGroupInput {
                work_group: self.work_group,
            })
        }
    }
}
impl GetWorkGroupInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetWorkGroup, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetWorkGroup",
            self,
            crate::operation::GetWorkGroup::new(),
        )
    }
    pub fn builder() -> crate::input::get_work_group_input::Builder {
        crate::input::get_work_group_input::Builder::default()
    }
}

/// See [`ListWorkGroupsInput`](crate::input::ListWorkGroupsInput)
pub mod list_work_groups_input {
    use crate::input::ListWorkGroupsInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn build(self) -> Result<ListWorkGroupsInput, BuildError> {
            Ok(ListWorkGroupsInput {
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListWorkGroupsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListWorkGroups, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "ListWorkGroups",
            self,
            crate::operation::ListWorkGroups::new(),
        )
    }
    pub fn builder() -> crate::input::list_work_groups_input::Builder {
        crate::input::list_work_groups_input::Builder::default()
    }
}

/// See [`UpdateWorkGroupInput`](crate::input::UpdateWorkGroupInput)
pub mod update_work_group_input {
    use crate::input::UpdateWorkGroupInput;
    use crate::model::{WorkGroupConfigurationUpdates, WorkGroupState};
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        work_group: Option<String>,
        description: Option<String>,
        configuration_updates: Option<WorkGroupConfigurationUpdates>,
        state: Option<WorkGroupState>,
    }
    impl Builder {
        /// <p>The specified workgroup that will be updated.</p>
        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.work_group = Some(inp.into());
            self
        }
        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.work_group = inp;
            self
        }
        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.description = Some(inp.into());
            self
        }
        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.description = inp;
            self
        }
        pub fn configuration_updates(mut self, inp: WorkGroupConfigurationUpdates) -> Self {
            self.configuration_updates = Some(inp);
            self
        }
        pub fn set_configuration_updates(
            mut self,
            inp: Option<WorkGroupConfigurationUpdates>,
        ) -> Self {
            self.configuration_updates = inp;
            self
        }
        pub fn state(mut self, inp: WorkGroupState) -> Self {
            self.state = Some(inp);
            self
        }
        pub fn set_state(mut self, inp: Option<WorkGroupState>) -> Self {
            self.state = inp;
            self
        }
        pub fn build(self) -> Result<UpdateWorkGroupInput, BuildError> {
            Ok(UpdateWorkGroupInput {
                work_group: self.work_group,
                description: self.description,
                configuration_updates: self.configuration_updates,
                state: self.state,
            })
        }
    }
}
impl UpdateWorkGroupInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UpdateWorkGroup, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "UpdateWorkGroup",
            self,
            crate::operation::UpdateWorkGroup::new(),
        )
    }
    pub fn builder() -> crate::input::update_work_group_input::Builder {
        crate::input::update_work_group_input::Builder::default()
    }
}

/// See [`GetTableMetadataInput`](crate::input::GetTableMetadataInput)
pub mod get_table_metadata_input {
    use crate::input::GetTableMetadataInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        catalog_name: Option<String>,
        database_name: Option<String>,
        table_name: Option<String>,
    }
    impl Builder {
        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.catalog_name = Some(inp.into());
            self
        }
        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.catalog_name = inp;
            self
        }
        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.database_name = Some(inp.into());
            self
        }
        pub fn set_database_name(mut self, inp: Option<String>) -> Self {
            self.database_name = inp;
            self
        }
        pub fn table_name(mut self, inp: impl Into<String>) -> Self {
            self.table_name = Some(inp.into());
            self
        }
        pub fn set_table_name(mut self, inp: Option<String>) -> Self {
            self.table_name = inp;
            self
        }
        pub fn build(self) -> Result<GetTableMetadataInput, BuildError> {
            Ok(GetTableMetadataInput {
                catalog_name: self.catalog_name,
                database_name: self.database_name,
                table_name: self.table_name,
            })
        }
    }
}
impl GetTableMetadataInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetTableMetadata, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetTableMetadata",
            self,
            crate::operation::GetTableMetadata::new(),
        )
    }
    pub fn builder() -> crate::input::get_table_metadata_input::Builder {
        crate::input::get_table_metadata_input::Builder::default()
    }
}

/// See [`ListTableMetadataInput`](crate::input::ListTableMetadataInput)
pub mod list_table_metadata_input {
    use crate::input::ListTableMetadataInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        catalog_name: Option<String>,
        database_name: Option<String>,
        expression: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.catalog_name = Some(inp.into());
            self
        }
        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.catalog_name = inp;
            self
        }
        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.database_name = Some(inp.into());
            self
        }
        pub fn set_database_name(mut self, inp: Option<String>) -> Self {
            self.database_name = inp;
            self
        }
        /// <p>A regex filter that pattern-matches table names. If no expression is supplied,
        /// metadata for all tables are listed.</p>
        pub fn expression(mut self, inp: impl Into<String>) -> Self {
            self.expression = Some(inp.into());
            self
        }
        pub fn set_expression(mut self, inp: Option<String>) -> Self {
            self.expression = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn build(self) -> Result<ListTableMetadataInput, BuildError> {
            Ok(ListTableMetadataInput {
                catalog_name: self.catalog_name,
                database_name: self.database_name,
                expression: self.expression,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListTableMetadataInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListTableMetadata, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "ListTableMetadata",
            self,
            crate::operation::ListTableMetadata::new(),
        )
    }
    pub fn builder() -> crate::input::list_table_metadata_input::Builder {
        crate::input::list_table_metadata_input::Builder::default()
    }
}

/// See [`ListDatabasesInput`](crate::input::ListDatabasesInput)
pub mod list_databases_input {
    use crate::input::ListDatabasesInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        catalog_name: Option<String>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
    impl Builder {
        /// <p>The name of the data catalog that contains the databases to return.</p>
        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.catalog_name = Some(inp.into());
            self
        }
        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.catalog_name = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn build(self) -> Result<ListDatabasesInput, BuildError> {
            Ok(ListDatabasesInput {
                catalog_name: self.catalog_name,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListDatabasesInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListDatabases, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "ListDatabases",
            self,
            crate::operation::ListDatabases::new(),
        )
    }
    pub fn builder() -> crate::input::list_databases_input::Builder {
        crate::input::list_databases_input::Builder::default()
    }
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    use crate::input::TagResourceInput;
    use crate::model::Tag;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        resource_arn: Option<String>,
        tags: Option<Vec<Tag>>,
    }
    impl Builder {
        /// <p>Specifies the ARN of the Athena resource (workgroup or data catalog) to which tags are
        /// to be added.</p>
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn tags(mut self, inp: impl Into<Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.tags = inp;
            self
        }
        pub fn build(self) -> Result<TagResourceInput, BuildError> {
            Ok(TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            })
        }
    }
}
impl TagResourceInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::TagResource, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "TagResource",
            self,
            crate::operation::TagResource::new(),
        )
    }
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}

/// See [`UntagResourceInput`](crate::input::UntagResourceInput)
pub mod untag_resource_input {
    use crate::input::UntagResourceInput;
    use smithy_http::operation::BuildError;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        resource_arn: Option<String>,
        tag_keys: Option<Vec<String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// <p>A comma-separated list of one or more tag keys whose tags are to be removed from the
        /// specified resource.</p>
        pub fn tag_keys(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(inp.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(mut self, inp: Option<Vec<String>>) -> Self {
            self.tag_keys = inp;
            self
        }
        pub fn build(self) -> Result<UntagResourceInput, BuildError> {
            Ok(UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            })
        }
    }
}
impl UntagResourceInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UntagResource, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "UntagResource",
            self,
            crate::operation::UntagResource::new(),
        )
    }
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct StartQueryExecutionInput {
    #[serde(rename = "QueryString")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
    #[serde(rename = "ClientRequestToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(rename = "QueryExecutionContext")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_context: Option<QueryExecutionContext>,
    #[serde(rename = "ResultConfiguration")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_configuration: Option<ResultConfiguration>,
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct StopQueryExecutionInput {
    #[serde(rename = "QueryExecutionId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetQueryExecutionInput {
    #[serde(rename = "QueryExecutionId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetQueryResultsInput {
    #[serde(rename = "QueryExecutionId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListQueryExecutionsInput {
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct CreateNamedQueryInput {
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Database")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(rename = "QueryString")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
    #[serde(rename = "ClientRequestToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetNamedQueryInput {
    #[serde(rename = "NamedQueryId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_query_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct DeleteNamedQueryInput {
    #[serde(rename = "NamedQueryId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_query_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListNamedQueriesInput {
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct BatchGetNamedQueryInput {
    #[serde(rename = "NamedQueryIds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_query_ids: Option<Vec<String>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetDatabaseInput {
    #[serde(rename = "CatalogName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(rename = "DatabaseName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListTagsForResourceInput {
    #[serde(rename = "ResourceARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct BatchGetQueryExecutionInput {
    #[serde(rename = "QueryExecutionIds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_execution_ids: Option<Vec<String>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct CreateDataCatalogInput {
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DataCatalogType>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(rename = "Tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct DeleteDataCatalogInput {
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetDataCatalogInput {
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListDataCatalogsInput {
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct UpdateDataCatalogInput {
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DataCatalogType>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct CreateWorkGroupInput {
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Configuration")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<WorkGroupConfiguration>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct DeleteWorkGroupInput {
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
    #[serde(rename = "RecursiveDeleteOption")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_delete_option: Option<bool>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetWorkGroupInput {
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListWorkGroupsInput {
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct UpdateWorkGroupInput {
    #[serde(rename = "WorkGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
    #[serde(rename = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "ConfigurationUpdates")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_updates: Option<WorkGroupConfigurationUpdates>,
    #[serde(rename = "State")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<WorkGroupState>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetTableMetadataInput {
    #[serde(rename = "CatalogName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(rename = "DatabaseName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(rename = "TableName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListTableMetadataInput {
    #[serde(rename = "CatalogName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(rename = "DatabaseName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(rename = "Expression")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListDatabasesInput {
    #[serde(rename = "CatalogName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct TagResourceInput {
    #[serde(rename = "ResourceARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(rename = "Tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct UntagResourceInput {
    #[serde(rename = "ResourceARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(rename = "TagKeys")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

#[cfg(test)]
mod test {
    use crate::input::{
        BatchGetNamedQueryInput, CreateDataCatalogInput, GetQueryExecutionInput,
        ListQueryExecutionsInput, StartQueryExecutionInput, TagResourceInput,
        UpdateWorkGroupInput,
    };
    use crate::model::{
        DataCatalogType, QueryExecutionContext, ResultConfiguration, ResultConfigurationUpdates,
        Tag, WorkGroupConfigurationUpdates, WorkGroupState,
    };
    use crate::{Config, Region};
    use aws_types::SigningService;
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use smithy_http::body::SdkBody;

    fn config() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    #[test]
    fn setters_are_interchangeable() {
        let a = StartQueryExecutionInput::builder()
            .query_string("SELECT 1")
            .work_group("primary")
            .build()
            .unwrap();
        let b = StartQueryExecutionInput::builder()
            .set_query_string(Some("SELECT 1".to_string()))
            .set_work_group(Some("primary".to_string()))
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn start_query_execution_request() {
        let input = StartQueryExecutionInput::builder()
            .query_string("SELECT * FROM elb_logs")
            .query_execution_context(QueryExecutionContext::builder().database("sampledb").build())
            .result_configuration(
                ResultConfiguration::builder()
                    .output_location("s3://athena-results/")
                    .build(),
            )
            .build()
            .unwrap();
        let op = input.make_operation(&config()).expect("valid operation");
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri(), "/");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(
            request.headers().get("x-amz-target").unwrap(),
            "AmazonAthena.StartQueryExecution"
        );
        let body = request.body().bytes().unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            r#"{"QueryString":"SELECT * FROM elb_logs","QueryExecutionContext":{"Database":"sampledb"},"ResultConfiguration":{"OutputLocation":"s3://athena-results/"}}"#
        );
        assert_eq!(
            request.headers().get(CONTENT_LENGTH).unwrap(),
            &body.len().to_string()
        );
        let metadata = op.metadata().unwrap();
        assert_eq!(metadata.name(), "StartQueryExecution");
        assert_eq!(metadata.service(), "athena");
        assert_eq!(
            op.config().get::<SigningService>(),
            Some(&SigningService::from_static("athena"))
        );
        assert_eq!(op.config().get::<Region>(), Some(&Region::new("us-east-1")));
    }

    #[test]
    fn empty_input_is_an_empty_object() {
        let input = ListQueryExecutionsInput::builder().build().unwrap();
        let op = input.make_operation(&config()).unwrap();
        assert_eq!(op.request().http().body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn lists_serialize_in_order() {
        let input = BatchGetNamedQueryInput::builder()
            .named_query_ids("a")
            .named_query_ids("b")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"NamedQueryIds":["a","b"]}"#
        );
    }

    #[test]
    fn operations_are_cloneable() {
        let op = GetQueryExecutionInput::builder()
            .query_execution_id("abc")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let cloned = op.try_clone().expect("in-memory bodies can be cloned");
        assert_eq!(
            cloned.request().http().body().bytes(),
            SdkBody::from(r#"{"QueryExecutionId":"abc"}"#).bytes()
        );
    }

    #[test]
    fn tag_resource_request() {
        let op = TagResourceInput::builder()
            .resource_arn("arn:aws:athena:us-east-1:123456789012:workgroup/analysts")
            .tags(Tag::builder().key("team").value("data").build())
            .tags(Tag::builder().key("stage").build())
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(
            request.headers().get("x-amz-target").unwrap(),
            "AmazonAthena.TagResource"
        );
        assert_eq!(
            std::str::from_utf8(request.body().bytes().unwrap()).unwrap(),
            r#"{"ResourceARN":"arn:aws:athena:us-east-1:123456789012:workgroup/analysts","Tags":[{"Key":"team","Value":"data"},{"Key":"stage"}]}"#
        );
    }

    #[test]
    fn work_group_updates_serialize_remove_flags() {
        let input = UpdateWorkGroupInput::builder()
            .work_group("analysts")
            .state(WorkGroupState::Disabled)
            .configuration_updates(
                WorkGroupConfigurationUpdates::builder()
                    .remove_bytes_scanned_cutoff_per_query(true)
                    .result_configuration_updates(
                        ResultConfigurationUpdates::builder()
                            .remove_output_location(true)
                            .build(),
                    )
                    .build(),
            )
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"WorkGroup":"analysts","ConfigurationUpdates":{"ResultConfigurationUpdates":{"RemoveOutputLocation":true},"RemoveBytesScannedCutoffPerQuery":true},"State":"DISABLED"}"#
        );
    }

    #[test]
    fn data_catalog_parameters() {
        let input = CreateDataCatalogInput::builder()
            .name("dynamo")
            .r#type(DataCatalogType::Lambda)
            .parameters(
                "function",
                "arn:aws:lambda:us-east-1:123456789012:function:dynamo-connector",
            )
            .build()
            .unwrap();
        let body: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(body["Type"], "LAMBDA");
        assert_eq!(
            body["Parameters"]["function"],
            "arn:aws:lambda:us-east-1:123456789012:function:dynamo-connector"
        );
        assert!(body.get("Tags").is_none());
    }
}
