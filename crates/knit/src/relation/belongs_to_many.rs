use super::{key_value, Relation, RelationBase};
use crate::{
    stmt::{Join, Record, Value},
    Collection, Db, DeleteFilter, Model, Query, Result,
};

/// Parent and target are linked through rows of a pivot table.
///
/// `foreign_key` is the pivot column pointing at the target's primary key;
/// `local_key` is the pivot column pointing at the parent's primary key.
#[derive(Debug)]
pub struct BelongsToMany<'a, P, M> {
    base: RelationBase<'a, P, M>,

    /// Pivot table name, before prefixing
    pivot: String,
}

/// Alias the pivot table is joined under.
const PIVOT: &str = "pivot";

impl<'a, P: Model + 'a, M: Model> BelongsToMany<'a, P, M> {
    pub fn new(
        db: &Db,
        parent: &'a P,
        pivot: &str,
        foreign_key: &str,
        local_key: &str,
    ) -> Self {
        BelongsToMany {
            base: RelationBase::new(
                "BelongsToMany",
                parent,
                Some(Query::for_model::<M>(db)),
                foreign_key,
                local_key,
            ),
            pivot: pivot.to_string(),
        }
    }

    pub fn pivot(&self) -> &str {
        &self.pivot
    }

    pub fn get(&mut self) -> Result<Collection<M>> {
        self.select()
    }

    /// Links the target with primary key `id` to the parent.
    pub fn attach(&self, id: impl Into<Value>) -> Result<u64> {
        let query = self.pivot_query("attach")?;
        let parent_key = key_value(self.base.parent(), P::PRIMARY_KEY)?;

        let record = Record::new()
            .with(self.base.local_key(), parent_key)
            .with(self.base.foreign_key(), id);

        query.insert(record)
    }

    /// Unlinks the given targets, or every target when `ids` is empty.
    pub fn detach(&self, ids: Vec<Value>) -> Result<u64> {
        let mut query = self.pivot_query("detach")?;
        let parent_key = key_value(self.base.parent(), P::PRIMARY_KEY)?;

        query.where_eq(self.base.local_key(), parent_key);

        if !ids.is_empty() {
            query.where_in(self.base.foreign_key(), ids);
        }

        query.delete(DeleteFilter::None)
    }

    fn pivot_query(&self, method: &str) -> Result<Query> {
        let target = self.base.query_for(method)?;
        Ok(Query::new(target.db(), &self.pivot))
    }
}

impl<'a, P: Model + 'a, M: Model> Relation<'a> for BelongsToMany<'a, P, M> {
    type Parent = P;
    type Target = M;

    fn base(&self) -> &RelationBase<'a, P, M> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RelationBase<'a, P, M> {
        &mut self.base
    }

    fn base_query(&mut self) -> Result<()> {
        if self.base.is_base_query_applied() {
            return Ok(());
        }

        let target = self.base.query_for("base_query")?;
        let table = target.table().to_string();
        let pivot = target.db().table_name(&self.pivot);
        let fields = self.query_fields(&table)?;
        let foreign_key = self.base.foreign_key().to_string();
        let local_key = self.base.local_key().to_string();

        self.base.apply_base_query_once(|query, parent| {
            let parent_key = key_value(parent, P::PRIMARY_KEY)?;
            let target_key = format!("{table}.{}", query.primary_key());

            query
                .field(fields)
                .join(Join::inner(
                    pivot,
                    Some(PIVOT),
                    format!("{PIVOT}.{foreign_key}"),
                    target_key,
                ))
                .where_eq(format!("{PIVOT}.{local_key}"), parent_key);
            Ok(())
        })
    }
}
