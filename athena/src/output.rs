/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, deserialized from the JSON body of a successful response

use crate::model::{
    DataCatalog, DataCatalogSummary, Database, NamedQuery, QueryExecution, ResultSet, TableMetadata,
    Tag, UnprocessedNamedQueryId, UnprocessedQueryExecutionId, WorkGroup, WorkGroupSummary,
};

/// See [`StartQueryExecutionOutput`](crate::output::StartQueryExecutionOutput)
pub mod start_query_execution_output {
    use crate::output::StartQueryExecutionOutput;

    /// A builder for [`StartQueryExecutionOutput`](crate::output::StartQueryExecutionOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution_id: Option<String>,
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
        /// Consumes the builder and constructs a [`StartQueryExecutionOutput`](crate::output::StartQueryExecutionOutput)
        pub fn build(self) -> StartQueryExecutionOutput {
            StartQueryExecutionOutput {
                query_execution_id: self.query_execution_id,
            }
        }
    }
}
impl StartQueryExecutionOutput {
    /// Creates a new builder-style object to manufacture [`StartQueryExecutionOutput`](crate::output::StartQueryExecutionOutput)
    pub fn builder() -> crate::output::start_query_execution_output::Builder {
        crate::output::start_query_execution_output::Builder::default()
    }
}

/// See [`StopQueryExecutionOutput`](crate::output::StopQueryExecutionOutput)
pub mod stop_query_execution_output {
    use crate::output::StopQueryExecutionOutput;

    /// A builder for [`StopQueryExecutionOutput`](crate::output::StopQueryExecutionOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StopQueryExecutionOutput`](crate::output::StopQueryExecutionOutput)
        pub fn build(self) -> StopQueryExecutionOutput {
            StopQueryExecutionOutput {}
        }
    }
}
impl StopQueryExecutionOutput {
    /// Creates a new builder-style object to manufacture [`StopQueryExecutionOutput`](crate::output::StopQueryExecutionOutput)
    pub fn builder() -> crate::output::stop_query_execution_output::Builder {
        crate::output::stop_query_execution_output::Builder::default()
    }
}

/// See [`GetQueryExecutionOutput`](crate::output::GetQueryExecutionOutput)
pub mod get_query_execution_output {
    use crate::model::QueryExecution;
    use crate::output::GetQueryExecutionOutput;

    /// A builder for [`GetQueryExecutionOutput`](crate::output::GetQueryExecutionOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution: Option<QueryExecution>,
    }
    impl Builder {
        pub fn query_execution(mut self, inp: QueryExecution) -> Self {
            self.query_execution = Some(inp);
            self
        }
        pub fn set_query_execution(mut self, inp: Option<QueryExecution>) -> Self {
            self.query_execution = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetQueryExecutionOutput`](crate::output::GetQueryExecutionOutput)
        pub fn build(self) -> GetQueryExecutionOutput {
            GetQueryExecutionOutput {
                query_execution: self.query_execution,
            }
        }
    }
}
impl GetQueryExecutionOutput {
    /// Creates a new builder-style object to manufacture [`GetQueryExecutionOutput`](crate::output::GetQueryExecutionOutput)
    pub fn builder() -> crate::output::get_query_execution_output::Builder {
        crate::output::get_query_execution_output::Builder::default()
    }
}

/// See [`GetQueryResultsOutput`](crate::output::GetQueryResultsOutput)
pub mod get_query_results_output {
    use crate::model::ResultSet;
    use crate::output::GetQueryResultsOutput;

    /// A builder for [`GetQueryResultsOutput`](crate::output::GetQueryResultsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        update_count: Option<i64>,
        result_set: Option<ResultSet>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn update_count(mut self, inp: i64) -> Self {
            self.update_count = Some(inp);
            self
        }
        pub fn set_update_count(mut self, inp: Option<i64>) -> Self {
            self.update_count = inp;
            self
        }
        pub fn result_set(mut self, inp: ResultSet) -> Self {
            self.result_set = Some(inp);
            self
        }
        pub fn set_result_set(mut self, inp: Option<ResultSet>) -> Self {
            self.result_set = inp;
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
        /// Consumes the builder and constructs a [`GetQueryResultsOutput`](crate::output::GetQueryResultsOutput)
        pub fn build(self) -> GetQueryResultsOutput {
            GetQueryResultsOutput {
                update_count: self.update_count,
                result_set: self.result_set,
                next_token: self.next_token,
            }
        }
    }
}
impl GetQueryResultsOutput {
    /// Creates a new builder-style object to manufacture [`GetQueryResultsOutput`](crate::output::GetQueryResultsOutput)
    pub fn builder() -> crate::output::get_query_results_output::Builder {
        crate::output::get_query_results_output::Builder::default()
    }
}

/// See [`ListQueryExecutionsOutput`](crate::output::ListQueryExecutionsOutput)
pub mod list_query_executions_output {
    use crate::output::ListQueryExecutionsOutput;

    /// A builder for [`ListQueryExecutionsOutput`](crate::output::ListQueryExecutionsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_execution_ids: Option<Vec<String>>,
        next_token: Option<String>,
    }
    impl Builder {
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
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListQueryExecutionsOutput`](crate::output::ListQueryExecutionsOutput)
        pub fn build(self) -> ListQueryExecutionsOutput {
            ListQueryExecutionsOutput {
                query_execution_ids: self.query_execution_ids,
                next_token: self.next_token,
            }
        }
    }
}
impl ListQueryExecutionsOutput {
    /// Creates a new builder-style object to manufacture [`ListQueryExecutionsOutput`](crate::output::ListQueryExecutionsOutput)
    pub fn builder() -> crate::output::list_query_executions_output::Builder {
        crate::output::list_query_executions_output::Builder::default()
    }
}

/// See [`CreateNamedQueryOutput`](crate::output::CreateNamedQueryOutput)
pub mod create_named_query_output {
    use crate::output::CreateNamedQueryOutput;

    /// A builder for [`CreateNamedQueryOutput`](crate::output::CreateNamedQueryOutput)
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
        /// Consumes the builder and constructs a [`CreateNamedQueryOutput`](crate::output::CreateNamedQueryOutput)
        pub fn build(self) -> CreateNamedQueryOutput {
            CreateNamedQueryOutput {
                named_query_id: self.named_query_id,
            }
        }
    }
}
impl CreateNamedQueryOutput {
    /// Creates a new builder-style object to manufacture [`CreateNamedQueryOutput`](crate::output::CreateNamedQueryOutput)
    pub fn builder() -> crate::output::create_named_query_output::Builder {
        crate::output::create_named_query_output::Builder::default()
    }
}

/// See [`GetNamedQueryOutput`](crate::output::GetNamedQueryOutput)
pub mod get_named_query_output {
    use crate::model::NamedQuery;
    use crate::output::GetNamedQueryOutput;

    /// A builder for [`GetNamedQueryOutput`](crate::output::GetNamedQueryOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        named_query: Option<NamedQuery>,
    }
    impl Builder {
        pub fn named_query(mut self, inp: NamedQuery) -> Self {
            self.named_query = Some(inp);
            self
        }
        pub fn set_named_query(mut self, inp: Option<NamedQuery>) -> Self {
            self.named_query = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetNamedQueryOutput`](crate::output::GetNamedQueryOutput)
        pub fn build(self) -> GetNamedQueryOutput {
            GetNamedQueryOutput {
                named_query: self.named_query,
            }
        }
    }
}
impl GetNamedQueryOutput {
    /// Creates a new builder-style object to manufacture [`GetNamedQueryOutput`](crate::output::GetNamedQueryOutput)
    pub fn builder() -> crate::output::get_named_query_output::Builder {
        crate::output::get_named_query_output::Builder::default()
    }
}

/// See [`DeleteNamedQueryOutput`](crate::output::DeleteNamedQueryOutput)
pub mod delete_named_query_output {
    use crate::output::DeleteNamedQueryOutput;

    /// A builder for [`DeleteNamedQueryOutput`](crate::output::DeleteNamedQueryOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteNamedQueryOutput`](crate::output::DeleteNamedQueryOutput)
        pub fn build(self) -> DeleteNamedQueryOutput {
            DeleteNamedQueryOutput {}
        }
    }
}
impl DeleteNamedQueryOutput {
    /// Creates a new builder-style object to manufacture [`DeleteNamedQueryOutput`](crate::output::DeleteNamedQueryOutput)
    pub fn builder() -> crate::output::delete_named_query_output::Builder {
        crate::output::delete_named_query_output::Builder::default()
    }
}

/// See [`ListNamedQueriesOutput`](crate::output::ListNamedQueriesOutput)
pub mod list_named_queries_output {
    use crate::output::ListNamedQueriesOutput;

    /// A builder for [`ListNamedQueriesOutput`](crate::output::ListNamedQueriesOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        named_query_ids: Option<Vec<String>>,
        next_token: Option<String>,
    }
    impl Builder {
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
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListNamedQueriesOutput`](crate::output::ListNamedQueriesOutput)
        pub fn build(self) -> ListNamedQueriesOutput {
            ListNamedQueriesOutput {
                named_query_ids: self.named_query_ids,
                next_token: self.next_token,
            }
        }
    }
}
impl ListNamedQueriesOutput {
    /// Creates a new builder-style object to manufacture [`ListNamedQueriesOutput`](crate::output::ListNamedQueriesOutput)
    pub fn builder() -> crate::output::list_named_queries_output::Builder {
        crate::output::list_named_queries_output::Builder::default()
    }
}

/// See [`BatchGetNamedQueryOutput`](crate::output::BatchGetNamedQueryOutput)
pub mod batch_get_named_query_output {
    use crate::model::{NamedQuery, UnprocessedNamedQueryId};
    use crate::output::BatchGetNamedQueryOutput;

    /// A builder for [`BatchGetNamedQueryOutput`](crate::output::BatchGetNamedQueryOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        named_queries: Option<Vec<NamedQuery>>,
        unprocessed_named_query_ids: Option<Vec<UnprocessedNamedQueryId>>,
    }
    impl Builder {
        pub fn named_queries(mut self, inp: impl Into<NamedQuery>) -> Self {
            let mut v = self.named_queries.unwrap_or_default();
            v.push(inp.into());
            self.named_queries = Some(v);
            self
        }
        pub fn set_named_queries(mut self, inp: Option<Vec<NamedQuery>>) -> Self {
            self.named_queries = inp;
            self
        }
        pub fn unprocessed_named_query_ids(
            mut self,
            inp: impl Into<UnprocessedNamedQueryId>,
        ) -> Self {
            let mut v = self.unprocessed_named_query_ids.unwrap_or_default();
            v.push(inp.into());
            self.unprocessed_named_query_ids = Some(v);
            self
        }
        pub fn set_unprocessed_named_query_ids(
            mut self,
            inp: Option<Vec<UnprocessedNamedQueryId>>,
        ) -> Self {
            self.unprocessed_named_query_ids = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetNamedQueryOutput`](crate::output::BatchGetNamedQueryOutput)
        pub fn build(self) -> BatchGetNamedQueryOutput {
            BatchGetNamedQueryOutput {
                named_queries: self.named_queries,
                unprocessed_named_query_ids: self.unprocessed_named_query_ids,
            }
        }
    }
}
impl BatchGetNamedQueryOutput {
    /// Creates a new builder-style object to manufacture [`BatchGetNamedQueryOutput`](crate::output::BatchGetNamedQueryOutput)
    pub fn builder() -> crate::output::batch_get_named_query_output::Builder {
        crate::output::batch_get_named_query_output::Builder::default()
    }
}

/// See [`GetDatabaseOutput`](crate::output::GetDatabaseOutput)
pub mod get_database_output {
    use crate::model::Database;
    use crate::output::GetDatabaseOutput;

    /// A builder for [`GetDatabaseOutput`](crate::output::GetDatabaseOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        database: Option<Database>,
    }
    impl Builder {
        pub fn database(mut self, inp: Database) -> Self {
            self.database = Some(inp);
            self
        }
        pub fn set_database(mut self, inp: Option<Database>) -> Self {
            self.database = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetDatabaseOutput`](crate::output::GetDatabaseOutput)
        pub fn build(self) -> GetDatabaseOutput {
            GetDatabaseOutput {
                database: self.database,
            }
        }
    }
}
impl GetDatabaseOutput {
    /// Creates a new builder-style object to manufacture [`GetDatabaseOutput`](crate::output::GetDatabaseOutput)
    pub fn builder() -> crate::output::get_database_output::Builder {
        crate::output::get_database_output::Builder::default()
    }
}

/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
pub mod list_tags_for_resource_output {
    use crate::model::Tag;
    use crate::output::ListTagsForResourceOutput;

    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        tags: Option<Vec<Tag>>,
        next_token: Option<String>,
    }
    impl Builder {
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
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
        pub fn build(self) -> ListTagsForResourceOutput {
            ListTagsForResourceOutput {
                tags: self.tags,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTagsForResourceOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
}

/// See [`BatchGetQueryExecutionOutput`](crate::output::BatchGetQueryExecutionOutput)
pub mod batch_get_query_execution_output {
    use crate::model::{QueryExecution, UnprocessedQueryExecutionId};
    use crate::output::BatchGetQueryExecutionOutput;

    /// A builder for [`BatchGetQueryExecutionOutput`](crate::output::BatchGetQueryExecutionOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        query_executions: Option<Vec<QueryExecution>>,
        unprocessed_query_execution_ids: Option<Vec<UnprocessedQueryExecutionId>>,
    }
    impl Builder {
        pub fn query_executions(mut self, inp: impl Into<QueryExecution>) -> Self {
            let mut v = self.query_executions.unwrap_or_default();
            v.push(inp.into());
            self.query_executions = Some(v);
            self
        }
        pub fn set_query_executions(mut self, inp: Option<Vec<QueryExecution>>) -> Self {
            self.query_executions = inp;
            self
        }
        pub fn unprocessed_query_execution_ids(
            mut self,
            inp: impl Into<UnprocessedQueryExecutionId>,
        ) -> Self {
            let mut v = self.unprocessed_query_execution_ids.unwrap_or_default();
            v.push(inp.into());
            self.unprocessed_query_execution_ids = Some(v);
            self
        }
        pub fn set_unprocessed_query_execution_ids(
            mut self,
            inp: Option<Vec<UnprocessedQueryExecutionId>>,
        ) -> Self {
            self.unprocessed_query_execution_ids = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetQueryExecutionOutput`](crate::output::BatchGetQueryExecutionOutput)
        pub fn build(self) -> BatchGetQueryExecutionOutput {
            BatchGetQueryExecutionOutput {
                query_executions: self.query_executions,
                unprocessed_query_execution_ids: self.unprocessed_query_execution_ids,
            }
        }
    }
}
impl BatchGetQueryExecutionOutput {
    /// Creates a new builder-style object to manufacture [`BatchGetQueryExecutionOutput`](crate::output::BatchGetQueryExecutionOutput)
    pub fn builder() -> crate::output::batch_get_query_execution_output::Builder {
        crate::output::batch_get_query_execution_output::Builder::default()
    }
}

/// See [`CreateDataCatalogOutput`](crate::output::CreateDataCatalogOutput)
pub mod create_data_catalog_output {
    use crate::output::CreateDataCatalogOutput;

    /// A builder for [`CreateDataCatalogOutput`](crate::output::CreateDataCatalogOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`CreateDataCatalogOutput`](crate::output::CreateDataCatalogOutput)
        pub fn build(self) -> CreateDataCatalogOutput {
            CreateDataCatalogOutput {}
        }
    }
}
impl CreateDataCatalogOutput {
    /// Creates a new builder-style object to manufacture [`CreateDataCatalogOutput`](crate::output::CreateDataCatalogOutput)
    pub fn builder() -> crate::output::create_data_catalog_output::Builder {
        crate::output::create_data_catalog_output::Builder::default()
    }
}

/// See [`DeleteDataCatalogOutput`](crate::output::DeleteDataCatalogOutput)
pub mod delete_data_catalog_output {
    use crate::output::DeleteDataCatalogOutput;

    /// A builder for [`DeleteDataCatalogOutput`](crate::output::DeleteDataCatalogOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteDataCatalogOutput`](crate::output::DeleteDataCatalogOutput)
        pub fn build(self) -> DeleteDataCatalogOutput {
            DeleteDataCatalogOutput {}
        }
    }
}
impl DeleteDataCatalogOutput {
    /// Creates a new builder-style object to manufacture [`DeleteDataCatalogOutput`](crate::output::DeleteDataCatalogOutput)
    pub fn builder() -> crate::output::delete_data_catalog_output::Builder {
        crate::output::delete_data_catalog_output::Builder::default()
    }
}

/// See [`GetDataCatalogOutput`](crate::output::GetDataCatalogOutput)
pub mod get_data_catalog_output {
    use crate::model::DataCatalog;
    use crate::output::GetDataCatalogOutput;

    /// A builder for [`GetDataCatalogOutput`](crate::output::GetDataCatalogOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        data_catalog: Option<DataCatalog>,
    }
    impl Builder {
        pub fn data_catalog(mut self, inp: DataCatalog) -> Self {
            self.data_catalog = Some(inp);
            self
        }
        pub fn set_data_catalog(mut self, inp: Option<DataCatalog>) -> Self {
            self.data_catalog = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetDataCatalogOutput`](crate::output::GetDataCatalogOutput)
        pub fn build(self) -> GetDataCatalogOutput {
            GetDataCatalogOutput {
                data_catalog: self.data_catalog,
            }
        }
    }
}
impl GetDataCatalogOutput {
    /// Creates a new builder-style object to manufacture [`GetDataCatalogOutput`](crate::output::GetDataCatalogOutput)
    pub fn builder() -> crate::output::get_data_catalog_output::Builder {
        crate::output::get_data_catalog_output::Builder::default()
    }
}

/// See [`ListDataCatalogsOutput`](crate::output::ListDataCatalogsOutput)
pub mod list_data_catalogs_output {
    use crate::model::DataCatalogSummary;
    use crate::output::ListDataCatalogsOutput;

    /// A builder for [`ListDataCatalogsOutput`](crate::output::ListDataCatalogsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        data_catalogs_summary: Option<Vec<DataCatalogSummary>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn data_catalogs_summary(mut self, inp: impl Into<DataCatalogSummary>) -> Self {
            let mut v = self.data_catalogs_summary.unwrap_or_default();
            v.push(inp.into());
            self.data_catalogs_summary = Some(v);
            self
        }
        pub fn set_data_catalogs_summary(mut self, inp: Option<Vec<DataCatalogSummary>>) -> Self {
            self.data_catalogs_summary = inp;
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
        /// Consumes the builder and constructs a [`ListDataCatalogsOutput`](crate::output::ListDataCatalogsOutput)
        pub fn build(self) -> ListDataCatalogsOutput {
            ListDataCatalogsOutput {
                data_catalogs_summary: self.data_catalogs_summary,
                next_token: self.next_token,
            }
        }
    }
}
impl ListDataCatalogsOutput {
    /// Creates a new builder-style object to manufacture [`ListDataCatalogsOutput`](crate::output::ListDataCatalogsOutput)
    pub fn builder() -> crate::output::list_data_catalogs_output::Builder {
        crate::output::list_data_catalogs_output::Builder::default()
    }
}

/// See [`UpdateDataCatalogOutput`](crate::output::UpdateDataCatalogOutput)
pub mod update_data_catalog_output {
    use crate::output::UpdateDataCatalogOutput;

    /// A builder for [`UpdateDataCatalogOutput`](crate::output::UpdateDataCatalogOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateDataCatalogOutput`](crate::output::UpdateDataCatalogOutput)
        pub fn build(self) -> UpdateDataCatalogOutput {
            UpdateDataCatalogOutput {}
        }
    }
}
impl UpdateDataCatalogOutput {
    /// Creates a new builder-style object to manufacture [`UpdateDataCatalogOutput`](crate::output::UpdateDataCatalogOutput)
    pub fn builder() -> crate::output::update_data_catalog_output::Builder {
        crate::output::update_data_catalog_output::Builder::default()
    }
}

/// See [`CreateWorkGroupOutput`](crate::output::CreateWorkGroupOutput)
pub mod create_work_group_output {
    use crate::output::CreateWorkGroupOutput;

    /// A builder for [`CreateWorkGroupOutput`](crate::output::CreateWorkGroupOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`CreateWorkGroupOutput`](crate::output::CreateWorkGroupOutput)
        pub fn build(self) -> CreateWorkGroupOutput {
            CreateWorkGroupOutput {}
        }
    }
}
impl CreateWorkGroupOutput {
    /// Creates a new builder-style object to manufacture [`CreateWorkGroupOutput`](crate::output::CreateWorkGroupOutput)
    pub fn builder() -> crate::output::create_work_group_output::Builder {
        crate::output::create_work_group_output::Builder::default()
    }
}

/// See [`DeleteWorkGroupOutput`](crate::output::DeleteWorkGroupOutput)
pub mod delete_work_group_output {
    use crate::output::DeleteWorkGroupOutput;

    /// A builder for [`DeleteWorkGroupOutput`](crate::output::DeleteWorkGroupOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteWorkGroupOutput`](crate::output::DeleteWorkGroupOutput)
        pub fn build(self) -> DeleteWorkGroupOutput {
            DeleteWorkGroupOutput {}
        }
    }
}
impl DeleteWorkGroupOutput {
    /// Creates a new builder-style object to manufacture [`DeleteWorkGroupOutput`](crate::output::DeleteWorkGroupOutput)
    pub fn builder() -> crate::output::delete_work_group_output::Builder {
        crate::output::delete_work_group_output::Builder::default()
    }
}

/// See [`GetWorkGroupOutput`](crate::output::GetWorkGroupOutput)
pub mod get_work_group_output {
    use crate::model::WorkGroup;
    use crate::output::GetWorkGroupOutput;

    /// A builder for [`GetWorkGroupOutput`](crate::output::GetWorkGroupOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        work_group: Option<WorkGroup>,
    }
    impl Builder {
        pub fn work_group(mut self, inp: WorkGroup) -> Self {
            self.work_group = Some(inp);
            self
        }
        pub fn set_work_group(mut self, inp: Option<WorkGroup>) -> Self {
            self.work_group = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetWorkGroupOutput`](crate::output::GetWorkGroupOutput)
        pub fn build(self) -> GetWorkGroupOutput {
            GetWorkGroupOutput {
                work_group: self.work_group,
            }
        }
    }
}
impl GetWorkGroupOutput {
    /// Creates a new builder-style object to manufacture [`GetWorkGroupOutput`](crate::output::GetWorkGroupOutput)
    pub fn builder() -> crate::output::get_work_group_output::Builder {
        crate::output::get_work_group_output::Builder::default()
    }
}

/// See [`ListWorkGroupsOutput`](crate::output::ListWorkGroupsOutput)
pub mod list_work_groups_output {
    use crate::model::WorkGroupSummary;
    use crate::output::ListWorkGroupsOutput;

    /// A builder for [`ListWorkGroupsOutput`](crate::output::ListWorkGroupsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        work_groups: Option<Vec<WorkGroupSummary>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn work_groups(mut self, inp: impl Into<WorkGroupSummary>) -> Self {
            let mut v = self.work_groups.unwrap_or_default();
            v.push(inp.into());
            self.work_groups = Some(v);
            self
        }
        pub fn set_work_groups(mut self, inp: Option<Vec<WorkGroupSummary>>) -> Self {
            self.work_groups = inp;
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
        /// Consumes the builder and constructs a [`ListWorkGroupsOutput`](crate::output::ListWorkGroupsOutput)
        pub fn build(self) -> ListWorkGroupsOutput {
            ListWorkGroupsOutput {
                work_groups: self.work_groups,
                next_token: self.next_token,
            }
        }
    }
}
impl ListWorkGroupsOutput {
    /// Creates a new builder-style object to manufacture [`ListWorkGroupsOutput`](crate::output::ListWorkGroupsOutput)
    pub fn builder() -> crate::output::list_work_groups_output::Builder {
        crate::output::list_work_groups_output::Builder::default()
    }
}

/// See [`UpdateWorkGroupOutput`](crate::output::UpdateWorkGroupOutput)
pub mod update_work_group_output {
    use crate::output::UpdateWorkGroupOutput;

    /// A builder for [`UpdateWorkGroupOutput`](crate::output::UpdateWorkGroupOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateWorkGroupOutput`](crate::output::UpdateWorkGroupOutput)
        pub fn build(self) -> UpdateWorkGroupOutput {
            UpdateWorkGroupOutput {}
        }
    }
}
impl UpdateWorkGroupOutput {
    /// Creates a new builder-style object to manufacture [`UpdateWorkGroupOutput`](crate::output::UpdateWorkGroupOutput)
    pub fn builder() -> crate::output::update_work_group_output::Builder {
        crate::output::update_work_group_output::Builder::default()
    }
}

/// See [`GetTableMetadataOutput`](crate::output::GetTableMetadataOutput)
pub mod get_table_metadata_output {
    use crate::model::TableMetadata;
    use crate::output::GetTableMetadataOutput;

    /// A builder for [`GetTableMetadataOutput`](crate::output::GetTableMetadataOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        table_metadata: Option<TableMetadata>,
    }
    impl Builder {
        pub fn table_metadata(mut self, inp: TableMetadata) -> Self {
            self.table_metadata = Some(inp);
            self
        }
        pub fn set_table_metadata(mut self, inp: Option<TableMetadata>) -> Self {
            self.table_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetTableMetadataOutput`](crate::output::GetTableMetadataOutput)
        pub fn build(self) -> GetTableMetadataOutput {
            GetTableMetadataOutput {
                table_metadata: self.table_metadata,
            }
        }
    }
}
impl GetTableMetadataOutput {
    /// Creates a new builder-style object to manufacture [`GetTableMetadataOutput`](crate::output::GetTableMetadataOutput)
    pub fn builder() -> crate::output::get_table_metadata_output::Builder {
        crate::output::get_table_metadata_output::Builder::default()
    }
}

/// See [`ListTableMetadataOutput`](crate::output::ListTableMetadataOutput)
pub mod list_table_metadata_output {
    use crate::model::TableMetadata;
    use crate::output::ListTableMetadataOutput;

    /// A builder for [`ListTableMetadataOutput`](crate::output::ListTableMetadataOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        table_metadata_list: Option<Vec<TableMetadata>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn table_metadata_list(mut self, inp: impl Into<TableMetadata>) -> Self {
            let mut v = self.table_metadata_list.unwrap_or_default();
            v.push(inp.into());
            self.table_metadata_list = Some(v);
            self
        }
        pub fn set_table_metadata_list(mut self, inp: Option<Vec<TableMetadata>>) -> Self {
            self.table_metadata_list = inp;
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
        /// Consumes the builder and constructs a [`ListTableMetadataOutput`](crate::output::ListTableMetadataOutput)
        pub fn build(self) -> ListTableMetadataOutput {
            ListTableMetadataOutput {
                table_metadata_list: self.table_metadata_list,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTableMetadataOutput {
    /// Creates a new builder-style object to manufacture [`ListTableMetadataOutput`](crate::output::ListTableMetadataOutput)
    pub fn builder() -> crate::output::list_table_metadata_output::Builder {
        crate::output::list_table_metadata_output::Builder::default()
    }
}

/// See [`ListDatabasesOutput`](crate::output::ListDatabasesOutput)
pub mod list_databases_output {
    use crate::model::Database;
    use crate::output::ListDatabasesOutput;

    /// A builder for [`ListDatabasesOutput`](crate::output::ListDatabasesOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        database_list: Option<Vec<Database>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn database_list(mut self, inp: impl Into<Database>) -> Self {
            let mut v = self.database_list.unwrap_or_default();
            v.push(inp.into());
            self.database_list = Some(v);
            self
        }
        pub fn set_database_list(mut self, inp: Option<Vec<Database>>) -> Self {
            self.database_list = inp;
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
        /// Consumes the builder and constructs a [`ListDatabasesOutput`](crate::output::ListDatabasesOutput)
        pub fn build(self) -> ListDatabasesOutput {
            ListDatabasesOutput {
                database_list: self.database_list,
                next_token: self.next_token,
            }
        }
    }
}
impl ListDatabasesOutput {
    /// Creates a new builder-style object to manufacture [`ListDatabasesOutput`](crate::output::ListDatabasesOutput)
    pub fn builder() -> crate::output::list_databases_output::Builder {
        crate::output::list_databases_output::Builder::default()
    }
}

/// See [`TagResourceOutput`](crate::output::TagResourceOutput)
pub mod tag_resource_output {
    use crate::output::TagResourceOutput;

    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput)
        pub fn build(self) -> TagResourceOutput {
            TagResourceOutput {}
        }
    }
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput)
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
}

/// See [`UntagResourceOutput`](crate::output::UntagResourceOutput)
pub mod untag_resource_output {
    use crate::output::UntagResourceOutput;

    /// A builder for [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UntagResourceOutput`](crate::output::UntagResourceOutput)
        pub fn build(self) -> UntagResourceOutput {
            UntagResourceOutput {}
        }
    }
}
impl UntagResourceOutput {
    /// Creates a new builder-style object to manufacture [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    pub fn builder() -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct StartQueryExecutionOutput {
    /// <p>The unique ID of the query that ran as a result of this request.</p>
    #[serde(rename = "QueryExecutionId")]
    pub query_execution_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct StopQueryExecutionOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetQueryExecutionOutput {
    /// <p>Information about the query execution.</p>
    #[serde(rename = "QueryExecution")]
    pub query_execution: Option<QueryExecution>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetQueryResultsOutput {
    /// <p>The number of rows inserted with a CREATE TABLE AS SELECT statement.</p>
    #[serde(rename = "UpdateCount")]
    pub update_count: Option<i64>,
    /// <p>The results of the query execution.</p>
    #[serde(rename = "ResultSet")]
    pub result_set: Option<ResultSet>,
    /// <p>A token generated by the Athena service that specifies where to continue pagination if a
    /// previous request was truncated. To obtain the next set of pages, pass in the
    /// <code>NextToken</code> from the response object of the previous page call.</p>
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListQueryExecutionsOutput {
    /// <p>The unique IDs of each query execution as an array of strings.</p>
    #[serde(rename = "QueryExecutionIds")]
    pub query_execution_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct CreateNamedQueryOutput {
    /// <p>The unique ID of the query.</p>
    #[serde(rename = "NamedQueryId")]
    pub named_query_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetNamedQueryOutput {
    /// <p>Information about the query.</p>
    #[serde(rename = "NamedQuery")]
    pub named_query: Option<NamedQuery>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DeleteNamedQueryOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListNamedQueriesOutput {
    /// <p>The list of unique query IDs.</p>
    #[serde(rename = "NamedQueryIds")]
    pub named_query_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct BatchGetNamedQueryOutput {
    /// <p>Information about the named query IDs submitted.</p>
    #[serde(rename = "NamedQueries")]
    pub named_queries: Option<Vec<NamedQuery>>,
    /// <p>Information about provided query IDs.</p>
    #[serde(rename = "UnprocessedNamedQueryIds")]
    pub unprocessed_named_query_ids: Option<Vec<UnprocessedNamedQueryId>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetDatabaseOutput {
    /// <p>The database returned.</p>
    #[serde(rename = "Database")]
    pub database: Option<Database>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListTagsForResourceOutput {
    /// <p>The list of tags associated with the specified resource.</p>
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct BatchGetQueryExecutionOutput {
    /// <p>Information about a query execution.</p>
    #[serde(rename = "QueryExecutions")]
    pub query_executions: Option<Vec<QueryExecution>>,
    /// <p>Information about the query executions that failed to run.</p>
    #[serde(rename = "UnprocessedQueryExecutionIds")]
    pub unprocessed_query_execution_ids: Option<Vec<UnprocessedQueryExecutionId>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct CreateDataCatalogOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DeleteDataCatalogOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetDataCatalogOutput {
    /// <p>The data catalog returned.</p>
    #[serde(rename = "DataCatalog")]
    pub data_catalog: Option<DataCatalog>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListDataCatalogsOutput {
    /// <p>A summary list of data catalogs.</p>
    #[serde(rename = "DataCatalogsSummary")]
    pub data_catalogs_summary: Option<Vec<DataCatalogSummary>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateDataCatalogOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct CreateWorkGroupOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DeleteWorkGroupOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetWorkGroupOutput {
    /// <p>Information about the workgroup.</p>
    #[serde(rename = "WorkGroup")]
    pub work_group: Option<WorkGroup>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListWorkGroupsOutput {
    /// <p>A list of <a>WorkGroupSummary</a> objects that include the names, descriptions,
    /// creation times, and states for each workgroup.</p>
    #[serde(rename = "WorkGroups")]
    pub work_groups: Option<Vec<WorkGroupSummary>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateWorkGroupOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetTableMetadataOutput {
    /// <p>An object that contains table metadata.</p>
    #[serde(rename = "TableMetadata")]
    pub table_metadata: Option<TableMetadata>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListTableMetadataOutput {
    /// <p>A list of table metadata.</p>
    #[serde(rename = "TableMetadataList")]
    pub table_metadata_list: Option<Vec<TableMetadata>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListDatabasesOutput {
    /// <p>A list of databases from a data catalog.</p>
    #[serde(rename = "DatabaseList")]
    pub database_list: Option<Vec<Database>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct TagResourceOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct UntagResourceOutput {}

#[cfg(test)]
mod test {
    use crate::model::{Column, Datum, ResultSet, Row, WorkGroupState};
    use crate::output::{
        GetQueryResultsOutput, GetWorkGroupOutput, ListTableMetadataOutput,
        StopQueryExecutionOutput,
    };
    use smithy_types::Instant;

    #[test]
    fn get_query_results_output() {
        let json = r#"{
            "UpdateCount": 0,
            "ResultSet": {
                "Rows": [
                    {"Data": [{"VarCharValue": "request_timestamp"}]},
                    {"Data": [{"VarCharValue": "2015-01-01T12:00:00.516940Z"}]}
                ],
                "ResultSetMetadata": {"ColumnInfo": []}
            },
            "NextToken": "page-2"
        }"#;
        let parsed: GetQueryResultsOutput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.update_count, Some(0));
        assert_eq!(parsed.next_token.as_deref(), Some("page-2"));
        let rows = parsed.result_set.unwrap().rows.unwrap();
        assert_eq!(
            rows[1],
            Row::builder()
                .data(Datum::builder().var_char_value("2015-01-01T12:00:00.516940Z").build())
                .build()
        );
    }

    #[test]
    fn empty_output() {
        let parsed: StopQueryExecutionOutput = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, StopQueryExecutionOutput::builder().build());
        assert!(ResultSet::builder().build().rows.is_none());
    }

    #[test]
    fn get_work_group_output() {
        let json = r#"{
            "WorkGroup": {
                "Name": "analysts",
                "State": "ENABLED",
                "Configuration": {
                    "ResultConfiguration": {"OutputLocation": "s3://athena-results/analysts/"},
                    "EnforceWorkGroupConfiguration": true,
                    "BytesScannedCutoffPerQuery": 10000000
                },
                "CreationTime": 1.614952162E9
            }
        }"#;
        let parsed: GetWorkGroupOutput = serde_json::from_str(json).unwrap();
        let work_group = parsed.work_group.unwrap();
        assert_eq!(work_group.state, Some(WorkGroupState::Enabled));
        assert_eq!(
            work_group.creation_time,
            Some(Instant::from_epoch_seconds(1614952162))
        );
        let configuration = work_group.configuration.unwrap();
        assert_eq!(configuration.enforce_work_group_configuration, Some(true));
        assert_eq!(configuration.bytes_scanned_cutoff_per_query, Some(10000000));
        assert_eq!(configuration.publish_cloud_watch_metrics_enabled, None);
        assert_eq!(
            configuration.result_configuration.unwrap().output_location.as_deref(),
            Some("s3://athena-results/analysts/")
        );
    }

    #[test]
    fn list_table_metadata_output() {
        let json = r#"{
            "TableMetadataList": [{
                "Name": "elb_logs",
                "CreateTime": 1614952162.25,
                "TableType": "EXTERNAL_TABLE",
                "Columns": [{"Name": "request_ip", "Type": "string"}],
                "PartitionKeys": [],
                "Parameters": {"classification": "csv"}
            }]
        }"#;
        let parsed: ListTableMetadataOutput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.next_token, None);
        let table = &parsed.table_metadata_list.unwrap()[0];
        assert_eq!(table.create_time, Some(Instant::from_f64(1614952162.25)));
        assert_eq!(table.last_access_time, None);
        assert_eq!(
            table.columns.as_deref(),
            Some(&[Column::builder().name("request_ip").r#type("string").build()][..])
        );
        assert_eq!(table.partition_keys, Some(vec![]));
        assert_eq!(
            table.parameters.as_ref().unwrap()["classification"],
            "csv"
        );
    }
}
