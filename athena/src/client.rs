/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A fluent client for Amazon Athena
//!
//! ```no_run
//! # async fn docs() -> Result<(), athena::Error> {
//! let client = athena::Client::from_env();
//! let started = client
//!     .start_query_execution()
//!     .query_string("SELECT * FROM elb_logs LIMIT 10")
//!     .work_group("primary")
//!     .send()
//!     .await?;
//! println!("{:?}", started.query_execution_id);
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use aws_hyper::conn::Standard;
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<Standard>,
    conf: Config,
}

#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Construct a client that sends requests over `conn`
    pub fn from_conf_conn(conf: Config, conn: Standard) -> Self {
        let client = aws_hyper::Client::new(conn).with_retry_config(conf.retry_config.clone());
        Self {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, Standard::https())
    }

    /// Construct a client from the environment
    ///
    /// See [`Config::from_env`](crate::Config::from_env)
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    /// Request counters for every operation sent by this client and its clones
    pub fn metrics(&self) -> &aws_hyper::ClientMetrics {
        self.handle.client.metrics()
    }

    /// Runs the SQL query statements contained in the query string
    pub fn start_query_execution(&self) -> fluent_builders::StartQueryExecution {
        fluent_builders::StartQueryExecution::new(self.handle.clone())
    }

    pub fn stop_query_execution(&self) -> fluent_builders::StopQueryExecution {
        fluent_builders::StopQueryExecution::new(self.handle.clone())
    }

    pub fn get_query_execution(&self) -> fluent_builders::GetQueryExecution {
        fluent_builders::GetQueryExecution::new(self.handle.clone())
    }

    /// Streams the results of a single query execution, one page at a time
    pub fn get_query_results(&self) -> fluent_builders::GetQueryResults {
        fluent_builders::GetQueryResults::new(self.handle.clone())
    }

    pub fn list_query_executions(&self) -> fluent_builders::ListQueryExecutions {
        fluent_builders::ListQueryExecutions::new(self.handle.clone())
    }

    pub fn create_named_query(&self) -> fluent_builders::CreateNamedQuery {
        fluent_builders::CreateNamedQuery::new(self.handle.clone())
    }

    pub fn get_named_query(&self) -> fluent_builders::GetNamedQuery {
        fluent_builders::GetNamedQuery::new(self.handle.clone())
    }

    pub fn delete_named_query(&self) -> fluent_builders::DeleteNamedQuery {
        fluent_builders::DeleteNamedQuery::new(self.handle.clone())
    }

    pub fn list_named_queries(&self) -> fluent_builders::ListNamedQueries {
        fluent_builders::ListNamedQueries::new(self.handle.clone())
    }

    pub fn batch_get_named_query(&self) -> fluent_builders::BatchGetNamedQuery {
        fluent_builders::BatchGetNamedQuery::new(self.handle.clone())
    }

    pub fn get_database(&self) -> fluent_builders::GetDatabase {
        fluent_builders::GetDatabase::new(self.handle.clone())
    }

    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource {
        fluent_builders::ListTagsForResource::new(self.handle.clone())
    }

    pub fn batch_get_query_execution(&self) -> fluent_builders::BatchGetQueryExecution {
        fluent_builders::BatchGetQueryExecution::new(self.handle.clone())
    }

    pub fn create_data_catalog(&self) -> fluent_builders::CreateDataCatalog {
        fluent_builders::CreateDataCatalog::new(self.handle.clone())
    }

    pub fn delete_data_catalog(&self) -> fluent_builders::DeleteDataCatalog {
        fluent_builders::DeleteDataCatalog::new(self.handle.clone())
    }

    pub fn get_data_catalog(&self) -> fluent_builders::GetDataCatalog {
        fluent_builders::GetDataCatalog::new(self.handle.clone())
    }

    pub fn list_data_catalogs(&self) -> fluent_builders::ListDataCatalogs {
        fluent_builders::ListDataCatalogs::new(self.handle.clone())
    }

    pub fn update_data_catalog(&self) -> fluent_builders::UpdateDataCatalog {
        fluent_builders::UpdateDataCatalog::new(self.handle.clone())
    }

    /// Creates a workgroup, optionally tagged
    pub fn create_work_group(&self) -> fluent_builders::CreateWorkGroup {
        fluent_builders::CreateWorkGroup::new(self.handle.clone())
    }

    pub fn delete_work_group(&self) -> fluent_builders::DeleteWorkGroup {
        fluent_builders::DeleteWorkGroup::new(self.handle.clone())
    }

    pub fn get_work_group(&self) -> fluent_builders::GetWorkGroup {
        fluent_builders::GetWorkGroup::new(self.handle.clone())
    }

    pub fn list_work_groups(&self) -> fluent_builders::ListWorkGroups {
        fluent_builders::ListWorkGroups::new(self.handle.clone())
    }

    pub fn update_work_group(&self) -> fluent_builders::UpdateWorkGroup {
        fluent_builders::UpdateWorkGroup::new(self.handle.clone())
    }

    pub fn get_table_metadata(&self) -> fluent_builders::GetTableMetadata {
        fluent_builders::GetTableMetadata::new(self.handle.clone())
    }

    pub fn list_table_metadata(&self) -> fluent_builders::ListTableMetadata {
        fluent_builders::ListTableMetadata::new(self.handle.clone())
    }

    pub fn list_databases(&self) -> fluent_builders::ListDatabases {
        fluent_builders::ListDatabases::new(self.handle.clone())
    }

    pub fn tag_resource(&self) -> fluent_builders::TagResource {
        fluent_builders::TagResource::new(self.handle.clone())
    }

    pub fn untag_resource(&self) -> fluent_builders::UntagResource {
        fluent_builders::UntagResource::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use crate::client::Handle;
    use crate::model::{
        DataCatalogType, QueryExecutionContext, ResultConfiguration, Tag, WorkGroupConfiguration,
        WorkGroupConfigurationUpdates, WorkGroupState,
    };
    use smithy_http::result::SdkError;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct StartQueryExecution {
        handle: Arc<Handle>,
        inner: crate::input::start_query_execution_input::Builder,
    }

    impl StartQueryExecution {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::StartQueryExecutionOutput,
            SdkError<crate::error::StartQueryExecutionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn query_string(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.query_string(inp);
            self
        }

        pub fn set_query_string(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_query_string(inp);
            self
        }

        pub fn client_request_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_request_token(inp);
            self
        }

        pub fn set_client_request_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_request_token(inp);
            self
        }

        pub fn query_execution_context(mut self, inp: QueryExecutionContext) -> Self {
            self.inner = self.inner.query_execution_context(inp);
            self
        }

        pub fn set_query_execution_context(mut self, inp: Option<QueryExecutionContext>) -> Self {
            self.inner = self.inner.set_query_execution_context(inp);
            self
        }

        pub fn result_configuration(mut self, inp: ResultConfiguration) -> Self {
            self.inner = self.inner.result_configuration(inp);
            self
        }

        pub fn set_result_configuration(mut self, inp: Option<ResultConfiguration>) -> Self {
            self.inner = self.inner.set_result_configuration(inp);
            self
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct StopQueryExecution {
        handle: Arc<Handle>,
        inner: crate::input::stop_query_execution_input::Builder,
    }

    impl StopQueryExecution {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::StopQueryExecutionOutput,
            SdkError<crate::error::StopQueryExecutionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn query_execution_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.query_execution_id(inp);
            self
        }

        pub fn set_query_execution_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_query_execution_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetQueryExecution {
        handle: Arc<Handle>,
        inner: crate::input::get_query_execution_input::Builder,
    }

    impl GetQueryExecution {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::GetQueryExecutionOutput,
            SdkError<crate::error::GetQueryExecutionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn query_execution_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.query_execution_id(inp);
            self
        }

        pub fn set_query_execution_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_query_execution_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetQueryResults {
        handle: Arc<Handle>,
        inner: crate::input::get_query_results_input::Builder,
    }

    impl GetQueryResults {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::GetQueryResultsOutput,
            SdkError<crate::error::GetQueryResultsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn query_execution_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.query_execution_id(inp);
            self
        }

        pub fn set_query_execution_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_query_execution_id(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListQueryExecutions {
        handle: Arc<Handle>,
        inner: crate::input::list_query_executions_input::Builder,
    }

    impl ListQueryExecutions {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListQueryExecutionsOutput,
            SdkError<crate::error::ListQueryExecutionsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct CreateNamedQuery {
        handle: Arc<Handle>,
        inner: crate::input::create_named_query_input::Builder,
    }

    impl CreateNamedQuery {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::CreateNamedQueryOutput,
            SdkError<crate::error::CreateNamedQueryError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_name(inp);
            self
        }

        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }

        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }

        pub fn database(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.database(inp);
            self
        }

        pub fn set_database(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_database(inp);
            self
        }

        pub fn query_string(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.query_string(inp);
            self
        }

        pub fn set_query_string(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_query_string(inp);
            self
        }

        pub fn client_request_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.client_request_token(inp);
            self
        }

        pub fn set_client_request_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_client_request_token(inp);
            self
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetNamedQuery {
        handle: Arc<Handle>,
        inner: crate::input::get_named_query_input::Builder,
    }

    impl GetNamedQuery {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::GetNamedQueryOutput,
            SdkError<crate::error::GetNamedQueryError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn named_query_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.named_query_id(inp);
            self
        }

        pub fn set_named_query_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_named_query_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteNamedQuery {
        handle: Arc<Handle>,
        inner: crate::input::delete_named_query_input::Builder,
    }

    impl DeleteNamedQuery {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::DeleteNamedQueryOutput,
            SdkError<crate::error::DeleteNamedQueryError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn named_query_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.named_query_id(inp);
            self
        }

        pub fn set_named_query_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_named_query_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListNamedQueries {
        handle: Arc<Handle>,
        inner: crate::input::list_named_queries_input::Builder,
    }

    impl ListNamedQueries {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListNamedQueriesOutput,
            SdkError<crate::error::ListNamedQueriesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct BatchGetNamedQuery {
        handle: Arc<Handle>,
        inner: crate::input::batch_get_named_query_input::Builder,
    }

    impl BatchGetNamedQuery {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::BatchGetNamedQueryOutput,
            SdkError<crate::error::BatchGetNamedQueryError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn named_query_ids(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.named_query_ids(inp);
            self
        }

        pub fn set_named_query_ids(mut self, inp: Option<Vec<String>>) -> Self {
            self.inner = self.inner.set_named_query_ids(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetDatabase {
        handle: Arc<Handle>,
        inner: crate::input::get_database_input::Builder,
    }

    impl GetDatabase {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::GetDatabaseOutput, SdkError<crate::error::GetDatabaseError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.catalog_name(inp);
            self
        }

        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_catalog_name(inp);
            self
        }

        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.database_name(inp);
            self
        }

        pub fn set_database_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_database_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListTagsForResource {
        handle: Arc<Handle>,
        inner: crate::input::list_tags_for_resource_input::Builder,
    }

    impl ListTagsForResource {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListTagsForResourceOutput,
            SdkError<crate::error::ListTagsForResourceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }

        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct BatchGetQueryExecution {
        handle: Arc<Handle>,
        inner: crate::input::batch_get_query_execution_input::Builder,
    }

    impl BatchGetQueryExecution {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::BatchGetQueryExecutionOutput,
            SdkError<crate::error::BatchGetQueryExecutionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn query_execution_ids(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.query_execution_ids(inp);
            self
        }

        pub fn set_query_execution_ids(mut self, inp: Option<Vec<String>>) -> Self {
            self.inner = self.inner.set_query_execution_ids(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct CreateDataCatalog {
        handle: Arc<Handle>,
        inner: crate::input::create_data_catalog_input::Builder,
    }

    impl CreateDataCatalog {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::CreateDataCatalogOutput,
            SdkError<crate::error::CreateDataCatalogError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_name(inp);
            self
        }

        pub fn r#type(mut self, inp: DataCatalogType) -> Self {
            self.inner = self.inner.r#type(inp);
            self
        }

        pub fn set_type(mut self, inp: Option<DataCatalogType>) -> Self {
            self.inner = self.inner.set_type(inp);
            self
        }

        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }

        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }

        pub fn parameters(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.parameters(k, v);
            self
        }

        pub fn set_parameters(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_parameters(inp);
            self
        }

        pub fn tags(mut self, inp: impl Into<Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteDataCatalog {
        handle: Arc<Handle>,
        inner: crate::input::delete_data_catalog_input::Builder,
    }

    impl DeleteDataCatalog {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::DeleteDataCatalogOutput,
            SdkError<crate::error::DeleteDataCatalogError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetDataCatalog {
        handle: Arc<Handle>,
        inner: crate::input::get_data_catalog_input::Builder,
    }

    impl GetDataCatalog {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::GetDataCatalogOutput,
            SdkError<crate::error::GetDataCatalogError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListDataCatalogs {
        handle: Arc<Handle>,
        inner: crate::input::list_data_catalogs_input::Builder,
    }

    impl ListDataCatalogs {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListDataCatalogsOutput,
            SdkError<crate::error::ListDataCatalogsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct UpdateDataCatalog {
        handle: Arc<Handle>,
        inner: crate::input::update_data_catalog_input::Builder,
    }

    impl UpdateDataCatalog {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::UpdateDataCatalogOutput,
            SdkError<crate::error::UpdateDataCatalogError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_name(inp);
            self
        }

        pub fn r#type(mut self, inp: DataCatalogType) -> Self {
            self.inner = self.inner.r#type(inp);
            self
        }

        pub fn set_type(mut self, inp: Option<DataCatalogType>) -> Self {
            self.inner = self.inner.set_type(inp);
            self
        }

        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }

        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }

        pub fn parameters(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.parameters(k, v);
            self
        }

        pub fn set_parameters(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_parameters(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct CreateWorkGroup {
        handle: Arc<Handle>,
        inner: crate::input::create_work_group_input::Builder,
    }

    impl CreateWorkGroup {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::CreateWorkGroupOutput,
            SdkError<crate::error::CreateWorkGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.name(inp);
            self
        }

        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_name(inp);
            self
        }

        pub fn configuration(mut self, inp: WorkGroupConfiguration) -> Self {
            self.inner = self.inner.configuration(inp);
            self
        }

        pub fn set_configuration(mut self, inp: Option<WorkGroupConfiguration>) -> Self {
            self.inner = self.inner.set_configuration(inp);
            self
        }

        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }

        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }

        pub fn tags(mut self, inp: impl Into<Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteWorkGroup {
        handle: Arc<Handle>,
        inner: crate::input::delete_work_group_input::Builder,
    }

    impl DeleteWorkGroup {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::DeleteWorkGroupOutput,
            SdkError<crate::error::DeleteWorkGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }

        pub fn recursive_delete_option(mut self, inp: bool) -> Self {
            self.inner = self.inner.recursive_delete_option(inp);
            self
        }

        pub fn set_recursive_delete_option(mut self, inp: Option<bool>) -> Self {
            self.inner = self.inner.set_recursive_delete_option(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetWorkGroup {
        handle: Arc<Handle>,
        inner: crate::input::get_work_group_input::Builder,
    }

    impl GetWorkGroup {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::GetWorkGroupOutput, SdkError<crate::error::GetWorkGroupError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListWorkGroups {
        handle: Arc<Handle>,
        inner: crate::input::list_work_groups_input::Builder,
    }

    impl ListWorkGroups {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListWorkGroupsOutput,
            SdkError<crate::error::ListWorkGroupsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct UpdateWorkGroup {
        handle: Arc<Handle>,
        inner: crate::input::update_work_group_input::Builder,
    }

    impl UpdateWorkGroup {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::UpdateWorkGroupOutput,
            SdkError<crate::error::UpdateWorkGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn work_group(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.work_group(inp);
            self
        }

        pub fn set_work_group(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_work_group(inp);
            self
        }

        pub fn description(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.description(inp);
            self
        }

        pub fn set_description(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_description(inp);
            self
        }

        pub fn configuration_updates(mut self, inp: WorkGroupConfigurationUpdates) -> Self {
            self.inner = self.inner.configuration_updates(inp);
            self
        }

        pub fn set_configuration_updates(
            mut self,
            inp: Option<WorkGroupConfigurationUpdates>,
        ) -> Self {
            self.inner = self.inner.set_configuration_updates(inp);
            self
        }

        pub fn state(mut self, inp: WorkGroupState) -> Self {
            self.inner = self.inner.state(inp);
            self
        }

        pub fn set_state(mut self, inp: Option<WorkGroupState>) -> Self {
            self.inner = self.inner.set_state(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetTableMetadata {
        handle: Arc<Handle>,
        inner: crate::input::get_table_metadata_input::Builder,
    }

    impl GetTableMetadata {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::GetTableMetadataOutput,
            SdkError<crate::error::GetTableMetadataError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.catalog_name(inp);
            self
        }

        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_catalog_name(inp);
            self
        }

        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.database_name(inp);
            self
        }

        pub fn set_database_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_database_name(inp);
            self
        }

        pub fn table_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }

        pub fn set_table_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListTableMetadata {
        handle: Arc<Handle>,
        inner: crate::input::list_table_metadata_input::Builder,
    }

    impl ListTableMetadata {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListTableMetadataOutput,
            SdkError<crate::error::ListTableMetadataError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.catalog_name(inp);
            self
        }

        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_catalog_name(inp);
            self
        }

        pub fn database_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.database_name(inp);
            self
        }

        pub fn set_database_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_database_name(inp);
            self
        }

        pub fn expression(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.expression(inp);
            self
        }

        pub fn set_expression(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_expression(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListDatabases {
        handle: Arc<Handle>,
        inner: crate::input::list_databases_input::Builder,
    }

    impl ListDatabases {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::ListDatabasesOutput,
            SdkError<crate::error::ListDatabasesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn catalog_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.catalog_name(inp);
            self
        }

        pub fn set_catalog_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_catalog_name(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct TagResource {
        handle: Arc<Handle>,
        inner: crate::input::tag_resource_input::Builder,
    }

    impl TagResource {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::TagResourceOutput, SdkError<crate::error::TagResourceError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }

        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }

        pub fn tags(mut self, inp: impl Into<Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        pub fn set_tags(mut self, inp: Option<Vec<Tag>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct UntagResource {
        handle: Arc<Handle>,
        inner: crate::input::untag_resource_input::Builder,
    }

    impl UntagResource {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<
            crate::output::UntagResourceOutput,
            SdkError<crate::error::UntagResourceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }

        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }

        pub fn tag_keys(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.tag_keys(inp);
            self
        }

        pub fn set_tag_keys(mut self, inp: Option<Vec<String>>) -> Self {
            self.inner = self.inner.set_tag_keys(inp);
            self
        }
    }
}
