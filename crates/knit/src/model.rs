use crate::{
    stmt::{Record, Value},
    Collection, Result,
};

/// A database-backed entity.
pub trait Model: Sized {
    /// Short name, used as the table alias in join queries.
    const NAME: &'static str;

    /// Table name, before any configured prefix is applied.
    const TABLE: &'static str;

    const PRIMARY_KEY: &'static str = "id";

    /// Load an instance of the model, populating fields using the given row.
    fn load(record: Record) -> Result<Self>;

    /// Reads a field by column name. Relations use this to read key values.
    fn get(&self, field: &str) -> Option<Value>;

    fn info() -> ModelInfo {
        ModelInfo {
            name: Self::NAME,
            table: Self::TABLE,
            primary_key: Self::PRIMARY_KEY,
        }
    }

    /// Loads every row into a collection. Fails on the first row that cannot
    /// be loaded.
    fn to_collection(rows: Vec<Record>) -> Result<Collection<Self>> {
        rows.into_iter()
            .map(Self::load)
            .collect::<Result<Vec<_>>>()
            .map(Collection::from)
    }
}

/// Runtime description of a model, carried by query handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
}
