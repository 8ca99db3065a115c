use crate::{Error, Query, Result};

use std::{fmt, marker::PhantomData};

/// State shared by every relation kind.
pub struct RelationBase<'a, P, M> {
    /// Relation kind, used in error messages
    kind: &'static str,

    /// The model that declared the relation
    parent: &'a P,

    /// Query over the related table
    query: Option<Query>,

    foreign_key: String,

    local_key: String,

    /// Set once the relation's own conditions are on `query`
    base_query_applied: bool,

    self_relation: bool,

    _p: PhantomData<fn() -> M>,
}

impl<'a, P, M> RelationBase<'a, P, M> {
    pub fn new(
        kind: &'static str,
        parent: &'a P,
        query: Option<Query>,
        foreign_key: impl Into<String>,
        local_key: impl Into<String>,
    ) -> Self {
        RelationBase {
            kind,
            parent,
            query,
            foreign_key: foreign_key.into(),
            local_key: local_key.into(),
            base_query_applied: false,
            self_relation: false,
            _p: PhantomData,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn parent(&self) -> &'a P {
        self.parent
    }

    pub fn foreign_key(&self) -> &str {
        &self.foreign_key
    }

    pub fn local_key(&self) -> &str {
        &self.local_key
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// The query, or a method-not-found error naming `method`.
    pub fn query_for(&self, method: &str) -> Result<&Query> {
        self.query
            .as_ref()
            .ok_or_else(|| Error::method_not_found(self.kind, method))
    }

    pub fn query_mut_for(&mut self, method: &str) -> Result<&mut Query> {
        let kind = self.kind;
        self.query
            .as_mut()
            .ok_or_else(|| Error::method_not_found(kind, method))
    }

    pub fn is_self_relation(&self) -> bool {
        self.self_relation
    }

    pub fn set_self_relation(&mut self, self_relation: bool) {
        self.self_relation = self_relation;
    }

    pub fn is_base_query_applied(&self) -> bool {
        self.base_query_applied
    }

    /// Runs `apply` against the query unless a previous call succeeded.
    ///
    /// The latch only flips when `apply` returns `Ok`.
    pub fn apply_base_query_once(
        &mut self,
        apply: impl FnOnce(&mut Query, &'a P) -> Result<()>,
    ) -> Result<()> {
        if self.base_query_applied {
            return Ok(());
        }

        let parent = self.parent;
        apply(self.query_mut_for("base_query")?, parent)?;

        tracing::trace!(relation = self.kind, "applied base query");
        self.base_query_applied = true;
        Ok(())
    }
}

impl<P, M> fmt::Debug for RelationBase<'_, P, M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("RelationBase")
            .field("kind", &self.kind)
            .field("query", &self.query)
            .field("foreign_key", &self.foreign_key)
            .field("local_key", &self.local_key)
            .field("base_query_applied", &self.base_query_applied)
            .field("self_relation", &self.self_relation)
            .finish()
    }
}
