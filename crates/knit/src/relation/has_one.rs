use super::{has_where, key_value, Relation, RelationBase};
use crate::{
    stmt::{Fields, Filter},
    Db, Model, Query, Result,
};

/// The target row holds `foreign_key`, pointing at the parent's `local_key`.
#[derive(Debug)]
pub struct HasOne<'a, P, M> {
    base: RelationBase<'a, P, M>,
}

impl<'a, P: Model + 'a, M: Model> HasOne<'a, P, M> {
    pub fn new(db: &Db, parent: &'a P, foreign_key: &str, local_key: &str) -> Self {
        HasOne {
            base: RelationBase::new(
                "HasOne",
                parent,
                Some(Query::for_model::<M>(db)),
                foreign_key,
                local_key,
            ),
        }
    }

    /// The related model, if one exists.
    pub fn get(&mut self) -> Result<Option<M>> {
        self.find()
    }

    /// A query for parents whose related row matches `filters`.
    pub fn has_where(&self, filters: Vec<Filter>, fields: Option<Fields>) -> Result<Query> {
        has_where(
            self,
            filters,
            fields,
            self.base.local_key(),
            self.base.foreign_key(),
        )
    }
}

impl<'a, P: Model + 'a, M: Model> Relation<'a> for HasOne<'a, P, M> {
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
            query.where_eq(foreign_key, key_value(parent, &local_key)?);
            Ok(())
        })
    }
}
