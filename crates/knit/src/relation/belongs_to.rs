use super::{has_where, key_value, Relation, RelationBase};
use crate::{
    stmt::{Fields, Filter},
    Db, Model, Query, Result,
};

/// The parent holds `foreign_key`, pointing at the target's `local_key`.
#[derive(Debug)]
pub struct BelongsTo<'a, P, M> {
    base: RelationBase<'a, P, M>,
}

impl<'a, P: Model + 'a, M: Model> BelongsTo<'a, P, M> {
    pub fn new(db: &Db, parent: &'a P, foreign_key: &str, local_key: &str) -> Self {
        BelongsTo {
            base: RelationBase::new(
                "BelongsTo",
                parent,
                Some(Query::for_model::<M>(db)),
                foreign_key,
                local_key,
            ),
        }
    }

    pub fn get(&mut self) -> Result<Option<M>> {
        self.find()
    }

    /// A query for parents whose referenced row matches `filters`.
    pub fn has_where(&self, filters: Vec<Filter>, fields: Option<Fields>) -> Result<Query> {
        has_where(
            self,
            filters,
            fields,
            self.base.foreign_key(),
            self.base.local_key(),
        )
    }
}

impl<'a, P: Model + 'a, M: Model> Relation<'a> for BelongsTo<'a, P, M> {
    type Parent = P;
    type Target = M;

    fn base(&self) -> &RelationBase<'a, P, M> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RelationBase<'a, P, M> {
        &mut self.base
    }

    fn base_query(&mut self) -> Result<()> {
        let foreign_key = self.base.foreign_key().to_string();
        let local_key = self.base.local_key().to_string();

        self.base.apply_base_query_once(|query, parent| {
            query.where_eq(local_key, key_value(parent, &foreign_key)?);
            Ok(())
        })
    }
}
