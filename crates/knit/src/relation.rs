mod base;
pub use base::RelationBase;

mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;

use crate::{
    query::Outcome,
    stmt::{self, Direction, Fields, Filter, Join, Op, Selection, Value},
    Collection, DeleteFilter, Error, Model, ModelInfo, Query, Result,
};

use std::fmt;

/// Behavior shared by every relation kind.
///
/// Implementors hold a [`RelationBase`] and may override [`base_query`] to
/// scope the target query to the parent. Everything else is provided.
/// Operations not listed here are reachable through [`call`], which forwards
/// them to the target query by name.
///
/// [`base_query`]: Relation::base_query
/// [`call`]: Relation::call
pub trait Relation<'a>: Sized {
    /// The model that declared the relation
    type Parent: Model + 'a;

    /// The related model
    type Target: Model;

    fn base(&self) -> &RelationBase<'a, Self::Parent, Self::Target>;

    fn base_mut(&mut self) -> &mut RelationBase<'a, Self::Parent, Self::Target>;

    /// Applies the relation's join and filter conditions to the target query.
    ///
    /// Runs before every forwarded operation, so implementations must take
    /// effect at most once (see [`RelationBase::apply_base_query_once`]).
    fn base_query(&mut self) -> Result<()> {
        Ok(())
    }

    fn parent(&self) -> &'a Self::Parent {
        self.base().parent()
    }

    /// The model attached to the target query.
    fn model<'s>(&'s self) -> Result<&'s ModelInfo>
    where
        'a: 's,
    {
        match self.base().query() {
            Some(query) => query.model(),
            None => Err(Error::invalid_model(format!(
                "{} relation has no query",
                self.base().kind()
            ))),
        }
    }

    fn self_relation(&mut self, self_relation: bool) -> &mut Self {
        self.base_mut().set_self_relation(self_relation);
        self
    }

    fn mark_self_relation(&mut self) -> &mut Self {
        self.self_relation(true)
    }

    fn is_self_relation(&self) -> bool {
        self.base().is_self_relation()
    }

    fn build_result_collection(
        &self,
        rows: Vec<stmt::Record>,
    ) -> Result<Collection<Self::Target>> {
        Self::Target::to_collection(rows)
    }

    /// The target query's field selection, qualified with `alias`.
    fn query_fields(&self, alias: &str) -> Result<Selection> {
        let query = self.base().query_for("query_fields")?;
        Ok(stmt::qualify_fields(query.options().fields.as_ref(), alias))
    }

    fn qualify_where(&self, filters: Vec<Filter>, alias: &str) -> Vec<Filter> {
        stmt::qualify_where(filters, alias)
    }

    /// Deletes through the target query as it stands. The base query is not
    /// applied.
    fn delete(&self, filter: impl Into<DeleteFilter>) -> Result<u64> {
        self.base().query_for("delete")?.delete(filter)
    }

    /// Forwards `method` to the target query by name.
    ///
    /// Fails with a method-not-found error when the relation has no query.
    /// When the query hands back itself the relation is returned instead, so
    /// chaining continues on the relation.
    fn call(&mut self, method: &str, args: Vec<Value>) -> Result<Delegated<'_, Self>> {
        self.base().query_for(method)?;
        self.base_query()?;

        tracing::trace!(relation = self.base().kind(), method, "forwarding call");

        let outcome = self.base_mut().query_mut_for(method)?.invoke(method, args)?;

        match outcome {
            Outcome::Query => Ok(Delegated::Relation(self)),
            Outcome::Value(value) => Ok(Delegated::Value(value)),
        }
    }

    /// Runs `f` against the target query after the base query is applied.
    fn forward_with<T>(
        &mut self,
        method: &str,
        f: impl FnOnce(&mut Query) -> Result<T>,
    ) -> Result<T> {
        self.base().query_for(method)?;
        self.base_query()?;
        f(self.base_mut().query_mut_for(method)?)
    }

    /// Like [`forward_with`](Relation::forward_with), for chaining operations.
    fn forward(&mut self, method: &str, f: impl FnOnce(&mut Query)) -> Result<&mut Self> {
        self.forward_with(method, |query| {
            f(query);
            Ok(())
        })?;
        Ok(self)
    }

    fn filter(&mut self, field: &str, op: Op, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        self.forward("filter", |query| {
            query.filter(field, op, value);
        })
    }

    fn where_eq(&mut self, field: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.filter(field, Op::Eq, value)
    }

    fn where_in(&mut self, field: &str, values: impl Into<Value>) -> Result<&mut Self> {
        self.filter(field, Op::In, values)
    }

    fn filters(&mut self, filters: Vec<Filter>) -> Result<&mut Self> {
        self.forward("filters", |query| {
            query.filters(filters);
        })
    }

    fn field(&mut self, fields: impl Into<Fields>) -> Result<&mut Self> {
        let fields = fields.into();
        self.forward("field", |query| {
            query.field(fields);
        })
    }

    fn alias(&mut self, alias: &str) -> Result<&mut Self> {
        self.forward("alias", |query| {
            query.alias(alias);
        })
    }

    fn order(&mut self, field: &str, direction: Direction) -> Result<&mut Self> {
        self.forward("order", |query| {
            query.order(field, direction);
        })
    }

    fn limit(&mut self, limit: u64) -> Result<&mut Self> {
        self.forward("limit", |query| {
            query.limit(limit);
        })
    }

    fn page(&mut self, page: u64, per_page: u64) -> Result<&mut Self> {
        self.forward_with("page", |query| {
            query.page(page, per_page)?;
            Ok(())
        })?;
        Ok(self)
    }

    fn select(&mut self) -> Result<Collection<Self::Target>> {
        let rows = self.forward_with("select", |query| query.select())?;
        self.build_result_collection(rows)
    }

    fn find(&mut self) -> Result<Option<Self::Target>> {
        self.forward_with("find", |query| query.find())?
            .map(Self::Target::load)
            .transpose()
    }

    fn count(&mut self) -> Result<u64> {
        self.forward_with("count", |query| query.count())
    }
}

/// What a call forwarded through [`Relation::call`] produced.
pub enum Delegated<'r, R> {
    /// The query returned itself; chaining continues on the relation.
    Relation(&'r mut R),

    Value(Value),
}

impl<'r, R> Delegated<'r, R> {
    pub fn is_relation(&self) -> bool {
        matches!(self, Delegated::Relation(_))
    }

    pub fn into_relation(self) -> Option<&'r mut R> {
        match self {
            Delegated::Relation(relation) => Some(relation),
            Delegated::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Delegated::Relation(_) => None,
            Delegated::Value(value) => Some(value),
        }
    }
}

impl<R> fmt::Debug for Delegated<'_, R> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delegated::Relation(_) => fmt.write_str("Relation(..)"),
            Delegated::Value(value) => fmt.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Reads a key column from the parent, failing when it is unset.
pub(crate) fn key_value<P: Model>(parent: &P, field: &str) -> Result<Value> {
    match parent.get(field) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(Error::invalid_statement(format!(
            "{}.{} is not set",
            P::NAME,
            field
        ))),
    }
}

/// Builds a parent query joined to the target table.
///
/// The parent is aliased by its model name, the target by its model name (or
/// `<name>_self` for a self-relation). Fields are qualified with the parent
/// alias; filters with the target alias.
pub(crate) fn has_where<'a, R: Relation<'a>>(
    relation: &R,
    filters: Vec<Filter>,
    fields: Option<Fields>,
    parent_column: &str,
    target_column: &str,
) -> Result<Query> {
    let target = relation.base().query_for("has_where")?;
    let parent_alias = R::Parent::NAME;
    let target_alias = if relation.is_self_relation() {
        format!("{}_self", R::Target::NAME)
    } else {
        R::Target::NAME.to_string()
    };

    let fields = stmt::qualify_fields(fields.as_ref(), parent_alias);
    let filters = relation.qualify_where(filters, &target_alias);

    let mut query = Query::for_model::<R::Parent>(target.db());
    query
        .alias(parent_alias)
        .field(fields)
        .join(Join::inner(
            target.table(),
            Some(target_alias.as_str()),
            format!("{parent_alias}.{parent_column}"),
            format!("{target_alias}.{target_column}"),
        ))
        .filters(filters);

    Ok(query)
}
