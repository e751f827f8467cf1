//! The rpc surface: maps protocol calls onto the table mapper, batch writer,
//! and schema migrator. Every error surfaces to the orchestrator as a
//! warning response carrying the message; the orchestrator treats those as
//! retriable batch failures.

use proto_fivetran::v2::{
    alter_table_response, create_table_response, describe_table_response, form_field,
    migrate_request, migrate_response, test_response, truncate_response, write_batch_response,
    AlterTableRequest, AlterTableResponse, BatchFileFormat, CapabilitiesRequest,
    CapabilitiesResponse, ConfigurationFormRequest, ConfigurationFormResponse, ConfigurationTest,
    CreateTableRequest, CreateTableResponse, DescribeTableRequest, DescribeTableResponse,
    DropdownField, FormField, MigrateRequest, MigrateResponse, Table, TestRequest, TestResponse,
    TextField, TruncateRequest, TruncateResponse, Warning, WriteBatchRequest, WriteBatchResponse,
    WriteHistoryBatchRequest,
};
use proto_grpc::destination::destination_connector_server::DestinationConnector;
use surreal_client::{Value, Vars};
use tonic::{Request, Response, Status};

use crate::config::Config;
use crate::error::Error;
use crate::metrics::Metrics;
use crate::migrate::Migrator;
use crate::store::{open_session, run};
use crate::tables::{self, validate_ident};
use crate::types::datetime_from_timestamp;
use crate::writer::{BatchWriter, FileParams};

#[derive(Debug, Default)]
pub struct DestinationService;

impl DestinationService {
    async fn handle_test(&self, request: TestRequest) -> Result<(), Error> {
        let config = Config::from_map(&request.configuration)?;
        let session = open_session(&config, None).await?;
        session.close().await;
        tracing::debug!(test = %request.name, "configuration test passed");
        Ok(())
    }

    async fn handle_describe(
        &self,
        request: DescribeTableRequest,
    ) -> Result<Table, Error> {
        let config = Config::from_map(&request.configuration)?;
        let mut session = open_session(&config, Some(&request.schema_name)).await?;
        let columns = tables::info_for_table(&mut session, &request.table_name).await?;
        Ok(Table {
            name: request.table_name,
            columns: columns.into_iter().map(|c| c.into_column()).collect(),
        })
    }

    async fn handle_define(
        &self,
        configuration: &std::collections::HashMap<String, String>,
        schema_name: &str,
        table: Option<Table>,
    ) -> Result<(), Error> {
        let table = table.ok_or_else(|| Error::Config("request carries no table".to_string()))?;
        let config = Config::from_map(configuration)?;
        let mut session = open_session(&config, Some(schema_name)).await?;
        tables::define_table(&mut session, &table).await
    }

    async fn handle_truncate(&self, request: TruncateRequest) -> Result<(), Error> {
        let config = Config::from_map(&request.configuration)?;
        let mut session = open_session(&config, Some(&request.schema_name)).await?;

        let table = validate_ident(&request.table_name)?.to_string();
        if !tables::table_exists(&mut session, &table).await? {
            tracing::debug!(table = %table, "nothing to truncate");
            return Ok(());
        }

        let synced = validate_ident(&request.synced_column)?.to_string();
        let before = request
            .utc_delete_before
            .as_ref()
            .map(datetime_from_timestamp)
            .transpose()?;

        let mut vars = Vars::new();
        let predicate = match before {
            Some(before) => {
                vars.insert("__before".to_string(), Value::Datetime(before));
                format!(" WHERE {synced} <= $__before")
            }
            None => String::new(),
        };
        let sql = match &request.soft {
            Some(soft) => {
                let deleted = validate_ident(&soft.deleted_column)?;
                format!("UPDATE {table} SET {deleted} = true{predicate}")
            }
            None => format!("DELETE {table}{predicate}"),
        };
        run(&mut session, &sql, vars).await?;
        Ok(())
    }

    async fn handle_write_batch(&self, request: WriteBatchRequest) -> Result<(), Error> {
        let WriteBatchRequest {
            configuration,
            schema_name,
            table,
            keys,
            replace_files,
            update_files,
            delete_files,
            file_params,
        } = request;
        let table = table.ok_or_else(|| Error::Config("request carries no table".to_string()))?;
        let params = match file_params {
            Some(proto_fivetran::v2::write_batch_request::FileParams::Csv(csv)) => {
                FileParams::from(&csv)
            }
            None => return Err(Error::Config("request carries no file params".to_string())),
        };

        let config = Config::from_map(&configuration)?;
        let mut session = open_session(&config, Some(&schema_name)).await?;
        let mut writer =
            BatchWriter::new(&mut session, &table, params, &keys, Metrics::global())?;
        writer
            .write_batch(&replace_files, &update_files, &delete_files)
            .await
    }

    async fn handle_write_history_batch(
        &self,
        request: WriteHistoryBatchRequest,
    ) -> Result<(), Error> {
        let WriteHistoryBatchRequest {
            configuration,
            schema_name,
            table,
            keys,
            earliest_start_files,
            replace_files,
            update_files,
            delete_files,
            file_params,
        } = request;
        let table = table.ok_or_else(|| Error::Config("request carries no table".to_string()))?;
        let params = match file_params {
            Some(proto_fivetran::v2::write_history_batch_request::FileParams::Csv(csv)) => {
                FileParams::from(&csv)
            }
            None => return Err(Error::Config("request carries no file params".to_string())),
        };

        let config = Config::from_map(&configuration)?;
        let mut session = open_session(&config, Some(&schema_name)).await?;
        let mut writer =
            BatchWriter::new(&mut session, &table, params, &keys, Metrics::global())?;
        writer
            .write_history_batch(
                &earliest_start_files,
                &replace_files,
                &update_files,
                &delete_files,
            )
            .await
    }

    async fn handle_migrate(&self, request: MigrateRequest) -> Result<(), Error> {
        use migrate_request::Operation;

        let operation = request.operation.ok_or(Error::NotImplemented)?;
        let config = Config::from_map(&request.configuration)?;
        let mut session = open_session(&config, Some(&request.schema_name)).await?;
        let mut migrator = Migrator::new(&mut session);

        match operation {
            Operation::AddColumn(op) => {
                let column = op
                    .column
                    .ok_or_else(|| Error::Config("add_column carries no column".to_string()))?;
                migrator
                    .add_column_with_default_value(&op.table, &column, &op.default_value)
                    .await
            }
            Operation::AddColumnInHistoryMode(op) => {
                let column = op
                    .column
                    .ok_or_else(|| Error::Config("add_column carries no column".to_string()))?;
                let op_ts = op
                    .operation_timestamp
                    .as_ref()
                    .ok_or_else(|| {
                        Error::Config("history operation carries no timestamp".to_string())
                    })
                    .and_then(|ts| datetime_from_timestamp(ts).map_err(Error::from))?;
                migrator
                    .add_column_in_history_mode(&op.table, &column, &op.default_value, op_ts)
                    .await
            }
            Operation::DropColumn(op) => migrator.drop_column(&op.table, &op.column).await,
            Operation::DropColumnInHistoryMode(op) => {
                let op_ts = op
                    .operation_timestamp
                    .as_ref()
                    .ok_or_else(|| {
                        Error::Config("history operation carries no timestamp".to_string())
                    })
                    .and_then(|ts| datetime_from_timestamp(ts).map_err(Error::from))?;
                migrator
                    .drop_column_in_history_mode(&op.table, &op.column, op_ts)
                    .await
            }
            Operation::RenameColumn(op) => {
                migrator.rename_column(&op.table, &op.from, &op.to).await
            }
            Operation::CopyColumn(op) => migrator.copy_column(&op.table, &op.from, &op.to).await,
            Operation::UpdateColumnValue(op) => {
                migrator
                    .update_column_value(&op.table, &op.column, &op.value)
                    .await
            }
            Operation::RenameTable(op) => migrator.rename_table(&op.from, &op.to).await,
            Operation::CopyTable(op) => migrator.copy_table(&op.from, &op.to).await,
            Operation::DropTable(op) => migrator.drop_table(&op.table).await,
            Operation::CopyTableToHistoryMode(op) => {
                migrator
                    .copy_table_to_history_mode(&op.from, &op.to, op.soft_deleted_column.as_deref())
                    .await
            }
            Operation::LiveToSoftDeleteMode(op) => {
                migrator.live_to_soft_delete(&op.table, &op.deleted_column).await
            }
            Operation::SoftDeleteToLiveMode(op) => {
                migrator.soft_delete_to_live(&op.table, &op.deleted_column).await
            }
            Operation::LiveToHistoryMode(op) => migrator.live_to_history(&op.table).await,
            Operation::SoftDeleteToHistoryMode(op) => {
                migrator
                    .soft_delete_to_history(&op.table, &op.deleted_column, &op.synced_column)
                    .await
            }
            Operation::HistoryToLiveMode(op) => {
                migrator.history_to_live(&op.table, op.keep_deleted_rows).await
            }
            Operation::HistoryToSoftDeleteMode(op) => {
                migrator
                    .history_to_soft_delete(&op.table, &op.deleted_column)
                    .await
            }
            Operation::RemoveStoreOnlyColumns(op) => {
                let table = op
                    .table
                    .ok_or_else(|| Error::Config("request carries no table".to_string()))?;
                migrator.remove_store_only_columns(&table).await
            }
        }
    }
}

#[tonic::async_trait]
impl DestinationConnector for DestinationService {
    async fn configuration_form(
        &self,
        _request: Request<ConfigurationFormRequest>,
    ) -> Result<Response<ConfigurationFormResponse>, Status> {
        Ok(Response::new(configuration_form()))
    }

    async fn capabilities(
        &self,
        _request: Request<CapabilitiesRequest>,
    ) -> Result<Response<CapabilitiesResponse>, Status> {
        Ok(Response::new(CapabilitiesResponse {
            batch_file_format: BatchFileFormat::Csv as i32,
        }))
    }

    async fn test(
        &self,
        request: Request<TestRequest>,
    ) -> Result<Response<TestResponse>, Status> {
        let request = request.into_inner();
        let response = match self.handle_test(request).await {
            Ok(()) => test_response::Response::Success(true),
            Err(error) => {
                tracing::warn!(%error, "configuration test failed");
                test_response::Response::Failure(error.to_string())
            }
        };
        Ok(Response::new(TestResponse {
            response: Some(response),
        }))
    }

    async fn describe_table(
        &self,
        request: Request<DescribeTableRequest>,
    ) -> Result<Response<DescribeTableResponse>, Status> {
        let request = request.into_inner();
        let table_name = request.table_name.clone();
        let response = match self.handle_describe(request).await {
            Ok(table) => describe_table_response::Response::Table(table),
            Err(Error::TableNotFound(_)) => describe_table_response::Response::NotFound(true),
            Err(error) => {
                tracing::warn!(%error, table = %table_name, "describe table failed");
                describe_table_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(DescribeTableResponse {
            response: Some(response),
        }))
    }

    async fn create_table(
        &self,
        request: Request<CreateTableRequest>,
    ) -> Result<Response<CreateTableResponse>, Status> {
        let request = request.into_inner();
        let response = match self
            .handle_define(&request.configuration, &request.schema_name, request.table.clone())
            .await
        {
            Ok(()) => create_table_response::Response::Success(true),
            Err(error) => {
                tracing::warn!(%error, "create table failed");
                create_table_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(CreateTableResponse {
            response: Some(response),
        }))
    }

    async fn alter_table(
        &self,
        request: Request<AlterTableRequest>,
    ) -> Result<Response<AlterTableResponse>, Status> {
        let request = request.into_inner();
        let response = match self
            .handle_define(&request.configuration, &request.schema_name, request.table.clone())
            .await
        {
            Ok(()) => alter_table_response::Response::Success(true),
            Err(error) => {
                tracing::warn!(%error, "alter table failed");
                alter_table_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(AlterTableResponse {
            response: Some(response),
        }))
    }

    async fn truncate(
        &self,
        request: Request<TruncateRequest>,
    ) -> Result<Response<TruncateResponse>, Status> {
        let request = request.into_inner();
        let table_name = request.table_name.clone();
        let response = match self.handle_truncate(request).await {
            Ok(()) => truncate_response::Response::Success(true),
            Err(error) => {
                tracing::warn!(%error, table = %table_name, "truncate failed");
                truncate_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(TruncateResponse {
            response: Some(response),
        }))
    }

    async fn write_batch(
        &self,
        request: Request<WriteBatchRequest>,
    ) -> Result<Response<WriteBatchResponse>, Status> {
        let request = request.into_inner();
        let table_name = request.table.as_ref().map(|t| t.name.clone()).unwrap_or_default();
        let response = match self.handle_write_batch(request).await {
            Ok(()) => write_batch_response::Response::Success(true),
            Err(error) => {
                tracing::warn!(%error, table = %table_name, "write batch failed");
                write_batch_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(WriteBatchResponse {
            response: Some(response),
        }))
    }

    async fn write_history_batch(
        &self,
        request: Request<WriteHistoryBatchRequest>,
    ) -> Result<Response<WriteBatchResponse>, Status> {
        let request = request.into_inner();
        let table_name = request.table.as_ref().map(|t| t.name.clone()).unwrap_or_default();
        let response = match self.handle_write_history_batch(request).await {
            Ok(()) => write_batch_response::Response::Success(true),
            Err(error) => {
                tracing::warn!(%error, table = %table_name, "write history batch failed");
                write_batch_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(WriteBatchResponse {
            response: Some(response),
        }))
    }

    async fn migrate(
        &self,
        request: Request<MigrateRequest>,
    ) -> Result<Response<MigrateResponse>, Status> {
        let request = request.into_inner();
        let response = match self.handle_migrate(request).await {
            Ok(()) => migrate_response::Response::Success(true),
            Err(Error::NotImplemented) => migrate_response::Response::NotImplemented(true),
            Err(error) => {
                tracing::warn!(%error, "migration failed");
                migrate_response::Response::Warning(warning(&error))
            }
        };
        Ok(Response::new(MigrateResponse {
            response: Some(response),
        }))
    }
}

fn warning(error: &Error) -> Warning {
    Warning {
        message: error.to_string(),
    }
}

/// The fields the orchestrator must collect from the user, and the
/// connection tests it may invoke by name.
pub fn configuration_form() -> ConfigurationFormResponse {
    let text = |name: &str, label: &str, required: bool, description: &str| FormField {
        name: name.to_string(),
        label: label.to_string(),
        required: Some(required),
        description: Some(description.to_string()),
        default_value: None,
        r#type: Some(form_field::Type::TextField(TextField::PlainText as i32)),
    };
    let password = |name: &str, label: &str, description: &str| FormField {
        name: name.to_string(),
        label: label.to_string(),
        required: Some(false),
        description: Some(description.to_string()),
        default_value: None,
        r#type: Some(form_field::Type::TextField(TextField::Password as i32)),
    };

    ConfigurationFormResponse {
        schema_selection_supported: true,
        table_selection_supported: true,
        fields: vec![
            text(
                "url",
                "Endpoint",
                true,
                "Websocket url of the SurrealDB rpc endpoint, e.g. ws://localhost:8000/rpc",
            ),
            text("ns", "Namespace", true, "Namespace to land synced data in"),
            FormField {
                name: "auth_level".to_string(),
                label: "Authentication level".to_string(),
                required: Some(false),
                description: Some("Scope of the user credentials".to_string()),
                default_value: Some("root".to_string()),
                r#type: Some(form_field::Type::DropdownField(DropdownField {
                    dropdown_field: vec!["root".to_string(), "namespace".to_string()],
                })),
            },
            text("user", "Username", false, "Username to sign in with"),
            password("pass", "Password", "Password to sign in with"),
            password(
                "token",
                "Token",
                "Bearer token to sign in with, instead of user and pass",
            ),
        ],
        tests: vec![ConfigurationTest {
            name: "connect".to_string(),
            label: "Connecting to SurrealDB".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_form_offers_connection_auth() {
        let form = configuration_form();
        let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["url", "ns", "auth_level", "user", "pass", "token"]);
        assert_eq!(form.tests.len(), 1);
        assert_eq!(form.tests[0].name, "connect");

        let required: Vec<&str> = form
            .fields
            .iter()
            .filter(|f| f.required == Some(true))
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, ["url", "ns"]);
    }
}
