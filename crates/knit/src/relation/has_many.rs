use super::{has_where, key_value, Relation, RelationBase};
use crate::{
    stmt::{Fields, Filter, Record},
    Collection, Db, Model, Query, Result,
};

/// Target rows hold `foreign_key`, pointing at the parent's `local_key`.
#[derive(Debug)]
pub struct HasMany<'a, P, M> {
    base: RelationBase<'a, P, M>,
}

impl<'a, P: Model + 'a, M: Model> HasMany<'a, P, M> {
    pub fn new(db: &Db, parent: &'a P, foreign_key: &str, local_key: &str) -> Self {
        HasMany {
            base: RelationBase::new(
                "HasMany",
                parent,
                Some(Query::for_model::<M>(db)),
                foreign_key,
                local_key,
            ),
        }
    }

    pub fn get(&mut self) -> Result<Collection<M>> {
        self.select()
    }

    /// Inserts `record` as a child of the parent.
    pub fn save(&self, mut record: Record) -> Result<u64> {
        let query = self.base.query_for("save")?;
        let key = key_value(self.base.parent(), self.base.local_key())?;

        record.set(self.base.foreign_key(), key);
        query.insert(record)
    }

    /// A query for parents with at least one related row matching `filters`.
    /// Parents are grouped so each appears once.
    pub fn has_where(&self, filters: Vec<Filter>, fields: Option<Fields>) -> Result<Query> {
        let mut query = has_where(
            self,
            filters,
            fields,
            self.base.local_key(),
            self.base.foreign_key(),
        )?;

        query.group(format!("{}.{}", P::NAME, self.base.local_key()));
        Ok(query)
    }
}

impl<'a, P: Model + 'a, M: Model> Relation<'a> for HasMany<'a, P, M> {
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
