//! The batch writer: applies one batch of change-data files to one table,
//! in live/soft-delete or history mode. Files and rows are strictly
//! sequential; the store's write semantics are order-sensitive when a batch
//! carries several versions of one primary key.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Instant;

use proto_fivetran::v2::{Column, CsvFileParams, Table};
use surreal_client::{Value, Vars};

use crate::error::Error;
use crate::input::{self, rows::RecordIter, Compression, Encryption};
use crate::metrics::Metrics;
use crate::store::{run_one, Store};
use crate::tables::{is_history_table, validate_ident, FIVETRAN_START};
use crate::types::{decimal_precision, parse_cell};

/// Per-batch file parameters.
#[derive(Debug, Clone)]
pub struct FileParams {
    pub compression: Compression,
    pub encryption: Encryption,
    pub null_string: String,
    pub unmodified_string: String,
}

impl From<&CsvFileParams> for FileParams {
    fn from(params: &CsvFileParams) -> FileParams {
        FileParams {
            compression: params.compression().into(),
            encryption: params.encryption().into(),
            null_string: params.null_string.clone(),
            unmodified_string: params.unmodified_string.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOp {
    EarliestStart,
    Replace,
    Update,
    Delete,
}

/// A decoded csv cell.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    /// The null sentinel: logical absence, omitted from the write.
    Null,
    /// The unmodified sentinel: the prior value must be preserved.
    Unmodified,
    Value(Value),
}

#[derive(Debug)]
pub struct BatchWriter<'a, S> {
    store: &'a mut S,
    table: &'a Table,
    params: FileParams,
    keys: &'a HashMap<String, Vec<u8>>,
    metrics: &'a Metrics,
    /// Indices of the primary-key columns, in table-declared order.
    pk: Vec<usize>,
    history: bool,
}

impl<'a, S: Store> BatchWriter<'a, S> {
    pub fn new(
        store: &'a mut S,
        table: &'a Table,
        params: FileParams,
        keys: &'a HashMap<String, Vec<u8>>,
        metrics: &'a Metrics,
    ) -> Result<Self, Error> {
        validate_ident(&table.name)?;
        for column in &table.columns {
            validate_ident(&column.name)?;
        }
        let pk: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.primary_key)
            .map(|(i, _)| i)
            .collect();
        if pk.is_empty() {
            return Err(Error::Schema(format!(
                "table {} declares no primary key columns",
                table.name
            )));
        }
        Ok(BatchWriter {
            store,
            table,
            params,
            keys,
            metrics,
            pk,
            history: false,
        })
    }

    /// Applies a live/soft-delete batch: replace, then update, then delete.
    pub async fn write_batch(
        &mut self,
        replace_files: &[String],
        update_files: &[String],
        delete_files: &[String],
    ) -> Result<(), Error> {
        self.history = false;
        for file in replace_files {
            self.process_file(file, FileOp::Replace).await?;
        }
        for file in update_files {
            self.process_file(file, FileOp::Update).await?;
        }
        for file in delete_files {
            self.process_file(file, FileOp::Delete).await?;
        }
        Ok(())
    }

    /// Applies a history batch: earliest-start retractions first, then
    /// replace, update, and delete files. Delete files re-apply as rows that
    /// carry `_fivetran_active = false` and a finite end, so they take the
    /// replace path.
    pub async fn write_history_batch(
        &mut self,
        earliest_start_files: &[String],
        replace_files: &[String],
        update_files: &[String],
        delete_files: &[String],
    ) -> Result<(), Error> {
        if !is_history_table(self.table) {
            return Err(Error::Schema(format!(
                "table {} has no {FIVETRAN_START} column; history batches require history mode",
                self.table.name
            )));
        }
        self.history = true;
        for file in earliest_start_files {
            self.process_file(file, FileOp::EarliestStart).await?;
        }
        for file in replace_files {
            self.process_file(file, FileOp::Replace).await?;
        }
        for file in update_files {
            self.process_file(file, FileOp::Update).await?;
        }
        for file in delete_files {
            self.process_file(file, FileOp::Delete).await?;
        }
        Ok(())
    }

    async fn process_file(&mut self, path: &str, op: FileOp) -> Result<(), Error> {
        let started = Instant::now();
        self.metrics.file_started();
        let result = self.process_rows(path, op).await;
        self.metrics.file_finished(started.elapsed(), result.is_ok());
        match &result {
            Ok(()) => tracing::debug!(file = path, ?op, "applied batch file"),
            Err(error) => tracing::warn!(file = path, ?op, %error, "batch file failed"),
        }
        result
    }

    async fn process_rows(&mut self, path: &str, op: FileOp) -> Result<(), Error> {
        let key = match self.params.encryption {
            Encryption::Aes => Some(self.key_for(path)?),
            Encryption::None => None,
        };
        let table = self.table;
        let metrics = self.metrics;
        let reader = input::open(
            Path::new(path),
            self.params.compression,
            self.params.encryption,
            key.as_ref(),
            metrics,
        )?;
        let mut rows = RecordIter::new(reader)?;

        let columns: Vec<&Column> = rows
            .headers()
            .iter()
            .map(|header| {
                table
                    .columns
                    .iter()
                    .find(|c| &c.name == header)
                    .ok_or_else(|| {
                        Error::Data(format!(
                            "file column {header:?} is not declared on table {}",
                            table.name
                        ))
                    })
            })
            .collect::<Result<_, _>>()?;

        while let Some(record) = rows.next() {
            let record = record?;
            let cells = self.decode_row(&columns, &record)?;
            self.apply(op, &columns, cells).await?;
            self.metrics.add_records(1);
        }
        Ok(())
    }

    fn key_for(&self, path: &str) -> Result<[u8; 32], Error> {
        let key = self
            .keys
            .get(path)
            .ok_or_else(|| Error::Data(format!("no AES key was provided for file {path:?}")))?;
        key.as_slice()
            .try_into()
            .map_err(|_| Error::Data(format!("AES key for file {path:?} is not 32 bytes")))
    }

    fn decode_row(
        &self,
        columns: &[&Column],
        record: &csv::StringRecord,
    ) -> Result<Vec<Cell>, Error> {
        columns
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| {
                if cell == self.params.null_string {
                    return Ok(Cell::Null);
                }
                if cell == self.params.unmodified_string {
                    return Ok(Cell::Unmodified);
                }
                parse_cell(column.r#type(), decimal_precision(column), cell)
                    .map(Cell::Value)
                    .map_err(|e| Error::Data(format!("column {}: {e}", column.name)))
            })
            .collect()
    }

    /// Derives the array-valued record identifier: primary-key values in
    /// table-declared order, with `_fivetran_start` appended in history mode.
    fn record_id(&self, columns: &[&Column], cells: &[Cell]) -> Result<Vec<Value>, Error> {
        let mut id = Vec::with_capacity(self.pk.len() + 1);
        for &pk_index in &self.pk {
            let pk_column = &self.table.columns[pk_index];
            let position = columns
                .iter()
                .position(|c| c.name == pk_column.name)
                .ok_or_else(|| {
                    Error::Data(format!(
                        "primary key column {} is missing from the file",
                        pk_column.name
                    ))
                })?;
            match &cells[position] {
                Cell::Value(v) => id.push(v.clone()),
                _ => {
                    return Err(Error::Data(format!(
                        "primary key column {} may not carry a sentinel",
                        pk_column.name
                    )))
                }
            }
        }
        if self.history {
            id.push(Value::Datetime(self.start_of(columns, cells)?));
        }
        Ok(id)
    }

    fn start_of(
        &self,
        columns: &[&Column],
        cells: &[Cell],
    ) -> Result<chrono::DateTime<chrono::Utc>, Error> {
        let position = columns
            .iter()
            .position(|c| c.name == FIVETRAN_START)
            .ok_or_else(|| {
                Error::Data(format!("row is missing the {FIVETRAN_START} column"))
            })?;
        match &cells[position] {
            Cell::Value(Value::Datetime(start)) => Ok(*start),
            _ => Err(Error::Data(format!(
                "{FIVETRAN_START} must be a datetime, never a sentinel"
            ))),
        }
    }

    async fn apply(
        &mut self,
        op: FileOp,
        columns: &[&Column],
        cells: Vec<Cell>,
    ) -> Result<(), Error> {
        match (self.history, op) {
            (false, FileOp::Replace) => self.live_replace(columns, cells).await,
            (false, FileOp::Update) => self.live_update(columns, cells).await,
            (false, FileOp::Delete) => self.live_delete(columns, cells).await,
            (false, FileOp::EarliestStart) => Err(Error::Data(
                "earliest-start files are only valid in history mode".to_string(),
            )),
            // History deletes arrive as closed versions and re-apply as
            // replace rows.
            (true, FileOp::Replace) | (true, FileOp::Delete) => {
                self.history_replace(columns, cells).await
            }
            (true, FileOp::Update) => self.history_update(columns, cells).await,
            (true, FileOp::EarliestStart) => self.earliest_start(columns, cells).await,
        }
    }

    fn content_of(columns: &[&Column], cells: &[Cell]) -> (BTreeMap<String, Value>, Vec<String>) {
        let mut content = BTreeMap::new();
        let mut unmodified = Vec::new();
        for (column, cell) in columns.iter().zip(cells) {
            match cell {
                Cell::Value(v) => {
                    content.insert(column.name.clone(), v.clone());
                }
                Cell::Unmodified => unmodified.push(column.name.clone()),
                Cell::Null => (),
            }
        }
        (content, unmodified)
    }

    async fn live_replace(&mut self, columns: &[&Column], cells: Vec<Cell>) -> Result<(), Error> {
        let id = self.record_id(columns, &cells)?;
        let (content, _unmodified) = Self::content_of(columns, &cells);
        let vars = self.point_vars(id, Some(content));
        self.execute("UPSERT type::thing($tb, $id) CONTENT $content RETURN NONE", vars)
            .await
    }

    async fn live_update(&mut self, columns: &[&Column], cells: Vec<Cell>) -> Result<(), Error> {
        let id = self.record_id(columns, &cells)?;
        let (mut content, unmodified) = Self::content_of(columns, &cells);

        if !unmodified.is_empty() {
            let prior = run_one(
                self.store,
                "SELECT * FROM ONLY type::thing($tb, $id)",
                self.point_vars(id.clone(), None),
            )
            .await?;
            if let Some(prior) = prior.as_object() {
                for name in &unmodified {
                    if let Some(value) = prior.get(name) {
                        content.insert(name.clone(), value.clone());
                    }
                }
            }
        }

        let vars = self.point_vars(id, Some(content));
        self.execute("UPSERT type::thing($tb, $id) MERGE $content RETURN NONE", vars)
            .await
    }

    async fn live_delete(&mut self, columns: &[&Column], cells: Vec<Cell>) -> Result<(), Error> {
        let id = self.record_id(columns, &cells)?;
        let vars = self.point_vars(id, None);
        self.execute("DELETE type::thing($tb, $id) RETURN NONE", vars)
            .await
    }

    async fn history_replace(
        &mut self,
        columns: &[&Column],
        cells: Vec<Cell>,
    ) -> Result<(), Error> {
        let id = self.record_id(columns, &cells)?;
        let (content, _unmodified) = Self::content_of(columns, &cells);
        let vars = self.point_vars(id, Some(content));
        self.execute("UPSERT type::thing($tb, $id) CONTENT $content RETURN NONE", vars)
            .await
    }

    async fn history_update(&mut self, columns: &[&Column], cells: Vec<Cell>) -> Result<(), Error> {
        let id = self.record_id(columns, &cells)?;
        let (mut content, unmodified) = Self::content_of(columns, &cells);

        if !unmodified.is_empty() {
            // Merge from the currently-active version of this logical row.
            // When none exists yet the unmodified fields stay absent and the
            // store's defaults apply.
            let mut vars = Vars::new();
            vars.insert("pk".to_string(), Value::Array(id[..id.len() - 1].to_vec()));
            vars.insert("n".to_string(), Value::Int(self.pk.len() as i64));
            let sql = format!(
                "SELECT * FROM {table} \
                 WHERE array::slice(record::id(id), 0, $n) = $pk AND {FIVETRAN_ACTIVE} = true \
                 LIMIT 1",
                table = self.table.name,
                FIVETRAN_ACTIVE = crate::tables::FIVETRAN_ACTIVE,
            );
            let prior = run_one(self.store, &sql, vars).await?;
            let prior = prior
                .into_array()
                .and_then(|mut rows| (!rows.is_empty()).then(|| rows.remove(0)));
            if let Some(prior) = prior.as_ref().and_then(Value::as_object) {
                for name in &unmodified {
                    if let Some(value) = prior.get(name) {
                        content.insert(name.clone(), value.clone());
                    }
                }
            }
        }

        let vars = self.point_vars(id, Some(content));
        self.execute("UPSERT type::thing($tb, $id) CONTENT $content RETURN NONE", vars)
            .await
    }

    /// Removes every version of the row's logical key with a
    /// `_fivetran_start` later than the row's: a retraction of history
    /// supersedes any previously-written future versions.
    async fn earliest_start(&mut self, columns: &[&Column], cells: Vec<Cell>) -> Result<(), Error> {
        let id = self.record_id(columns, &cells)?;
        let start = id[id.len() - 1].clone();

        let mut vars = Vars::new();
        vars.insert("pk".to_string(), Value::Array(id[..id.len() - 1].to_vec()));
        vars.insert("n".to_string(), Value::Int(self.pk.len() as i64));
        vars.insert("start".to_string(), start);
        let sql = format!(
            "DELETE {table} \
             WHERE array::slice(record::id(id), 0, $n) = $pk AND {FIVETRAN_START} > $start",
            table = self.table.name,
        );
        self.execute(&sql, vars).await
    }

    fn point_vars(&self, id: Vec<Value>, content: Option<BTreeMap<String, Value>>) -> Vars {
        let mut vars = Vars::new();
        vars.insert("tb".to_string(), Value::Strand(self.table.name.clone()));
        vars.insert("id".to_string(), Value::Array(id));
        if let Some(content) = content {
            vars.insert("content".to_string(), Value::Object(content));
        }
        vars
    }

    async fn execute(&mut self, sql: &str, vars: Vars) -> Result<(), Error> {
        match run_one(self.store, sql, vars).await {
            Ok(_) => {
                self.metrics.db_write_completed();
                Ok(())
            }
            Err(e) => {
                self.metrics.db_write_error();
                Err(e)
            }
        }
    }
}
