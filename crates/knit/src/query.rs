mod delete_filter;
pub use delete_filter::DeleteFilter;

mod invoke;
pub use invoke::Outcome;

use crate::{
    stmt::{
        Condition, Delete, Direction, Fields, Filter, Insert, Join, Op, Options, OrderBy, Record,
        Statement, Value,
    },
    Db, Error, Model, ModelInfo, Result,
};

/// A query against one table.
///
/// Chaining methods accumulate state; `select`, `find`, `count`, `insert`
/// and `delete` execute against the handle's database.
#[derive(Debug, Clone)]
pub struct Query {
    db: Db,

    /// The model rows are loaded as, if any
    model: Option<ModelInfo>,

    options: Options,
}

impl Query {
    /// A query over `table` with no model attached. The configured table
    /// prefix is applied.
    pub fn new(db: &Db, table: &str) -> Query {
        Query {
            db: db.clone(),
            model: None,
            options: Options::new(db.table_name(table)),
        }
    }

    pub fn for_model<M: Model>(db: &Db) -> Query {
        let mut query = Query::new(db, M::TABLE);
        query.model = Some(M::info());
        query
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// The table name, prefix included.
    pub fn table(&self) -> &str {
        &self.options.table
    }

    /// The model this query loads.
    pub fn model(&self) -> Result<&ModelInfo> {
        self.model.as_ref().ok_or_else(|| {
            Error::invalid_model(format!("query on `{}` has no model", self.options.table))
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn primary_key(&self) -> &str {
        self.model.map(|model| model.primary_key).unwrap_or("id")
    }

    pub fn alias(&mut self, alias: &str) -> &mut Self {
        self.options.alias = Some(alias.to_string());
        self
    }

    pub fn field(&mut self, fields: impl Into<Fields>) -> &mut Self {
        self.options.fields = Some(fields.into());
        self
    }

    pub fn filter(&mut self, field: impl Into<String>, op: Op, value: impl Into<Value>) -> &mut Self {
        self.options.filters.push(Condition::new(field, op, value));
        self
    }

    pub fn where_eq(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.filter(field, Op::Eq, value)
    }

    pub fn where_in(&mut self, field: impl Into<String>, values: impl Into<Value>) -> &mut Self {
        self.filter(field, Op::In, values)
    }

    /// Adds a where list. Keyed entries become equality conditions on the
    /// key as written.
    pub fn filters(&mut self, filters: Vec<Filter>) -> &mut Self {
        self.options
            .filters
            .extend(filters.into_iter().map(Filter::into_condition));
        self
    }

    pub fn join(&mut self, join: Join) -> &mut Self {
        self.options.joins.push(join);
        self
    }

    pub fn group(&mut self, field: impl Into<String>) -> &mut Self {
        self.options.group_by.push(field.into());
        self
    }

    pub fn order(&mut self, field: impl Into<String>, direction: Direction) -> &mut Self {
        self.options.order_by.push(OrderBy::new(field, direction));
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.options.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.options.offset = Some(offset);
        self
    }

    /// One-based page of `per_page` rows. Fails when the page's row offset
    /// does not fit in a `u64`.
    pub fn page(&mut self, page: u64, per_page: u64) -> Result<&mut Self> {
        let offset = (page.max(1) - 1).checked_mul(per_page).ok_or_else(|| {
            Error::invalid_statement(format!(
                "page {page} of {per_page} rows is out of range"
            ))
        })?;

        self.options.limit = Some(per_page);
        self.options.offset = Some(offset);
        Ok(self)
    }

    pub fn select(&self) -> Result<Vec<Record>> {
        self.db
            .exec(Statement::Select(self.options.clone()))?
            .into_rows()
    }

    /// The first matching row.
    pub fn find(&self) -> Result<Option<Record>> {
        let mut options = self.options.clone();
        options.limit = Some(1);

        let rows = self.db.exec(Statement::Select(options))?.into_rows()?;
        Ok(rows.into_iter().next())
    }

    pub fn count(&self) -> Result<u64> {
        let rows = self
            .db
            .exec(Statement::Count(self.options.clone()))?
            .into_rows()?;

        match rows.into_iter().next() {
            Some(mut row) => row.take("count")?.to_u64(),
            None => Ok(0),
        }
    }

    /// Inserts one row into the query's table, returning the number of rows
    /// written.
    pub fn insert(&self, record: Record) -> Result<u64> {
        self.db
            .exec(Insert::new(&self.options.table, record).into())?
            .into_count()
    }

    /// Deletes the rows matched by the accumulated conditions plus `filter`.
    ///
    /// A delete that ends up with no condition at all is refused unless
    /// `filter` is [`DeleteFilter::Force`]. `DELETE` cannot carry joins, so a
    /// joined query first selects the primary keys of the matching rows and
    /// then deletes by key.
    pub fn delete(&self, filter: impl Into<DeleteFilter>) -> Result<u64> {
        let joined = !self.options.joins.is_empty();
        let key_column = if joined {
            format!("{}.{}", self.options.qualifier(), self.primary_key())
        } else {
            self.primary_key().to_string()
        };

        let mut delete = Delete::from_options(&self.options);
        let mut force = false;

        match filter.into() {
            DeleteFilter::None => {}
            DeleteFilter::Force => force = true,
            DeleteFilter::Key(key) => {
                delete.filters.push(Condition::eq(key_column.as_str(), key));
            }
            DeleteFilter::Keys(keys) => {
                delete
                    .filters
                    .push(Condition::new(key_column.as_str(), Op::In, keys));
            }
            DeleteFilter::Filters(filters) => {
                delete
                    .filters
                    .extend(filters.into_iter().map(Filter::into_condition));
            }
        }

        if delete.filters.is_empty() {
            if !force {
                return Err(Error::invalid_statement("delete without condition"));
            }

            tracing::warn!(table = %delete.table, "deleting every row");
        }

        if joined {
            let keys = self.joined_keys(&key_column, delete.filters)?;
            if keys.is_empty() {
                return Ok(0);
            }

            delete.filters = vec![Condition::new(self.primary_key(), Op::In, keys)];
        }

        self.db.exec(delete.into())?.into_count()
    }

    /// Primary keys of the rows the joined query matches under `filters`.
    fn joined_keys(&self, key_column: &str, filters: Vec<Condition>) -> Result<Vec<Value>> {
        let mut options = self.options.clone();
        options.fields = Some(Fields::List(vec![key_column.to_string()]));
        options.filters = filters;
        options.group_by.clear();
        options.order_by.clear();
        options.limit = None;
        options.offset = None;

        let rows = self.db.exec(Statement::Select(options))?.into_rows()?;

        tracing::debug!(table = %self.options.table, keys = rows.len(), "resolved joined delete");

        rows.into_iter()
            .map(|row| {
                row.into_iter().next().map(|(_, key)| key).ok_or_else(|| {
                    Error::invalid_statement(format!("`{key_column}` missing from joined select"))
                })
            })
            .collect()
    }
}
