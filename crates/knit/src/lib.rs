mod collection;
pub use collection::Collection;

pub mod db;
pub use db::Db;

mod model;
pub use model::{Model, ModelInfo};

pub mod query;
pub use query::{DeleteFilter, Outcome, Query};

pub mod relation;
pub use relation::{
    BelongsTo, BelongsToMany, Delegated, HasMany, HasOne, Relation, RelationBase,
};

pub use knit_core::{driver, stmt, Error, Result};
